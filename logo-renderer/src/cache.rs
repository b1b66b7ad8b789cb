//! Content-addressed logo cache.
//!
//! Keys are SHA-256 digests over every input that affects the pixels, plus a
//! generator version tag, so a change to any drawing routine invalidates old
//! entries by bumping [`GENERATOR_VERSION`]. Entries live for the process
//! lifetime, bounded by an LRU entry limit.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use logo_core::{DesignChoice, IndustryCategory, Rgba};
use sha2::{Digest, Sha256};

use crate::error::RenderResult;
use crate::export::PngCompression;

/// Version tag mixed into every key.
pub const GENERATOR_VERSION: &str = "saorsa-logo/1";

/// Field separator inside the hashed key material.
const SEPARATOR: u8 = 0x1f;

/// Inputs that determine a rendered logo.
#[derive(Debug, Clone, Copy)]
pub struct KeyParts<'a> {
    /// Company name as supplied.
    pub company: &'a str,
    /// Resolved industry.
    pub industry: IndustryCategory,
    /// Resolved brand triad (primary, secondary, accent).
    pub colors: [Rgba; 3],
    /// Design and sub-variant.
    pub choice: DesignChoice,
    /// Variation index within the batch.
    pub variation: usize,
    /// Style hint.
    pub style: &'a str,
    /// Output side length in pixels.
    pub canvas_size: u32,
    /// PNG compression level.
    pub compression: PngCompression,
}

/// SHA-256 cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LogoKey {
    digest: [u8; 32],
    hex: String,
}

impl LogoKey {
    /// Hash `parts` together with [`GENERATOR_VERSION`].
    #[must_use]
    pub fn derive(parts: &KeyParts<'_>) -> Self {
        let mut hasher = Sha256::new();
        let mut field = |bytes: &[u8]| {
            hasher.update(bytes);
            hasher.update([SEPARATOR]);
        };
        field(GENERATOR_VERSION.as_bytes());
        field(parts.company.as_bytes());
        field(parts.industry.key().as_bytes());
        for color in parts.colors {
            field(color.to_hex().as_bytes());
        }
        field(parts.choice.tag().as_bytes());
        field(parts.variation.to_string().as_bytes());
        field(parts.style.as_bytes());
        field(parts.canvas_size.to_string().as_bytes());
        field(parts.compression.key().as_bytes());

        let mut digest = [0u8; 32];
        digest.copy_from_slice(&hasher.finalize());
        Self {
            hex: hex::encode(digest),
            digest,
        }
    }

    /// Lowercase hex digest.
    #[must_use]
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// Render seed: the first eight digest bytes, big-endian.
    #[must_use]
    pub fn seed(&self) -> u64 {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&self.digest[..8]);
        u64::from_be_bytes(bytes)
    }
}

/// Entry in the logo cache.
#[derive(Debug)]
struct CacheEntry {
    /// Base64 PNG.
    image: Arc<str>,
    /// Logical clock value of the last access.
    last_used: u64,
    /// Size in bytes.
    size_bytes: usize,
}

/// Configuration for the logo cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoCacheConfig {
    /// Maximum number of entries; `0` means unbounded.
    pub max_entries: usize,
}

impl Default for LogoCacheConfig {
    fn default() -> Self {
        Self { max_entries: 256 }
    }
}

/// Cache statistics for monitoring.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of cache hits.
    pub hits: u64,
    /// Number of cache misses.
    pub misses: u64,
    /// Number of evictions.
    pub evictions: u64,
    /// Total bytes stored over the cache lifetime.
    pub bytes_stored: u64,
}

/// Logo cache with LRU eviction.
#[derive(Debug, Default)]
pub struct LogoCache {
    entries: HashMap<String, CacheEntry>,
    config: LogoCacheConfig,
    clock: u64,
    current_size: usize,
    stats: CacheStats,
}

impl LogoCache {
    /// Create a cache with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(LogoCacheConfig::default())
    }

    /// Create a cache with custom configuration.
    #[must_use]
    pub fn with_config(config: LogoCacheConfig) -> Self {
        Self {
            entries: HashMap::new(),
            config,
            clock: 0,
            current_size: 0,
            stats: CacheStats::default(),
        }
    }

    fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }

    /// Look up a logo, refreshing its recency.
    pub fn get(&mut self, key: &str) -> Option<Arc<str>> {
        let now = self.tick();
        if let Some(entry) = self.entries.get_mut(key) {
            entry.last_used = now;
            self.stats.hits += 1;
            Some(Arc::clone(&entry.image))
        } else {
            self.stats.misses += 1;
            None
        }
    }

    /// Store a logo, evicting the least recently used entries if full.
    pub fn insert(&mut self, key: String, image: Arc<str>) {
        let size_bytes = image.len();
        if let Some(old) = self.entries.remove(&key) {
            self.current_size -= old.size_bytes;
        }
        if self.config.max_entries > 0 {
            while self.entries.len() >= self.config.max_entries {
                self.evict_lru();
            }
        }

        let now = self.tick();
        self.current_size += size_bytes;
        self.stats.bytes_stored += size_bytes as u64;
        self.entries.insert(
            key,
            CacheEntry {
                image,
                last_used: now,
                size_bytes,
            },
        );
    }

    /// Remove a logo from the cache.
    pub fn remove(&mut self, key: &str) -> Option<Arc<str>> {
        let entry = self.entries.remove(key)?;
        self.current_size -= entry.size_bytes;
        Some(entry.image)
    }

    /// Check if a logo is cached.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.current_size = 0;
    }

    /// Number of cached logos.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bytes currently held.
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        self.current_size
    }

    /// Cache statistics.
    #[must_use]
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    fn evict_lru(&mut self) {
        let oldest_key = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.last_used)
            .map(|(key, _)| key.clone());

        if let Some(key) = oldest_key {
            if let Some(entry) = self.entries.remove(&key) {
                self.current_size -= entry.size_bytes;
                self.stats.evictions += 1;
                tracing::trace!(key = %key, "evicted logo");
            }
        }
    }
}

/// Thread-safe logo cache.
///
/// Rendering happens outside the lock; two threads racing on the same key
/// both render and the later insert wins.
#[derive(Debug, Clone, Default)]
pub struct SyncLogoCache {
    inner: Arc<RwLock<LogoCache>>,
}

impl SyncLogoCache {
    /// Create a thread-safe cache with custom configuration.
    #[must_use]
    pub fn with_config(config: LogoCacheConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(LogoCache::with_config(config))),
        }
    }

    /// Look up a logo.
    #[must_use]
    pub fn get(&self, key: &LogoKey) -> Option<Arc<str>> {
        let mut cache = self.inner.write().ok()?;
        cache.get(key.hex())
    }

    /// Store a logo.
    pub fn insert(&self, key: &LogoKey, image: Arc<str>) {
        if let Ok(mut cache) = self.inner.write() {
            cache.insert(key.hex().to_string(), image);
        }
    }

    /// Return the cached logo for `key`, or run `generate` and cache its
    /// result. The flag is `true` on a cache hit.
    ///
    /// Failed generations are not cached.
    ///
    /// # Errors
    ///
    /// Propagates the error returned by `generate`.
    pub fn get_or_try_generate<F>(
        &self,
        key: &LogoKey,
        generate: F,
    ) -> RenderResult<(Arc<str>, bool)>
    where
        F: FnOnce() -> RenderResult<String>,
    {
        if let Some(image) = self.get(key) {
            tracing::debug!(key = key.hex(), "logo cache hit");
            return Ok((image, true));
        }
        let image: Arc<str> = Arc::from(generate()?);
        self.insert(key, Arc::clone(&image));
        Ok((image, false))
    }

    /// Number of cached logos.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().map(|cache| cache.len()).unwrap_or(0)
    }

    /// Whether the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of the statistics.
    #[must_use]
    pub fn stats(&self) -> Option<CacheStats> {
        self.inner.read().ok().map(|cache| cache.stats().clone())
    }
}

#[cfg(test)]
mod tests {
    use logo_core::{Design, LogoCategory};

    use super::*;
    use crate::error::RenderError;

    fn parts(company: &str) -> KeyParts<'_> {
        KeyParts {
            company,
            industry: IndustryCategory::Floral,
            colors: [
                Rgba::rgb(0xEC, 0x48, 0x99),
                Rgba::rgb(0x10, 0xB9, 0x81),
                Rgba::rgb(0xA8, 0x55, 0xF7),
            ],
            choice: DesignChoice::new(Design::Category(LogoCategory::Emblem), 0),
            variation: 0,
            style: "modern",
            canvas_size: 1000,
            compression: PngCompression::Default,
        }
    }

    #[test]
    fn key_covers_every_input() {
        let base = LogoKey::derive(&parts("Rose Garden"));
        assert_eq!(base, LogoKey::derive(&parts("Rose Garden")));
        assert_eq!(base.hex().len(), 64);

        let variants = [
            KeyParts { company: "Rose Gardens", ..parts("Rose Garden") },
            KeyParts { industry: IndustryCategory::Food, ..parts("Rose Garden") },
            KeyParts { variation: 1, ..parts("Rose Garden") },
            KeyParts { style: "luxury", ..parts("Rose Garden") },
            KeyParts { canvas_size: 800, ..parts("Rose Garden") },
            KeyParts { compression: PngCompression::Best, ..parts("Rose Garden") },
            KeyParts { colors: [Rgba::INDIGO; 3], ..parts("Rose Garden") },
        ];
        for v in &variants {
            assert_ne!(base, LogoKey::derive(v));
        }
    }

    #[test]
    fn separator_prevents_field_shifting() {
        let a = LogoKey::derive(&KeyParts { company: "ab", style: "c", ..parts("") });
        let b = LogoKey::derive(&KeyParts { company: "a", style: "bc", ..parts("") });
        assert_ne!(a, b);
    }

    #[test]
    fn lru_evicts_least_recently_used() {
        let mut cache = LogoCache::with_config(LogoCacheConfig { max_entries: 2 });
        cache.insert("a".to_string(), Arc::from("AAAA"));
        cache.insert("b".to_string(), Arc::from("BBBB"));
        assert!(cache.get("a").is_some());
        cache.insert("c".to_string(), Arc::from("CCCC"));

        assert!(cache.contains("a"));
        assert!(!cache.contains("b"));
        assert!(cache.contains("c"));
        assert_eq!(cache.stats().evictions, 1);
        assert_eq!(cache.size_bytes(), 8);
    }

    #[test]
    fn zero_limit_is_unbounded() {
        let mut cache = LogoCache::with_config(LogoCacheConfig { max_entries: 0 });
        for i in 0..50 {
            cache.insert(i.to_string(), Arc::from("x"));
        }
        assert_eq!(cache.len(), 50);
    }

    #[test]
    fn stats_track_hits_and_misses() {
        let mut cache = LogoCache::new();
        cache.insert("a".to_string(), Arc::from("data"));
        let _ = cache.get("a");
        let _ = cache.get("b");
        let _ = cache.get("a");
        assert_eq!(cache.stats().hits, 2);
        assert_eq!(cache.stats().misses, 1);
        assert_eq!(cache.remove("a").as_deref(), Some("data"));
        assert!(cache.is_empty());
    }

    #[test]
    fn get_or_try_generate_caches_only_success() {
        let cache = SyncLogoCache::default();
        let key = LogoKey::derive(&parts("Rose Garden"));

        let failed = cache.get_or_try_generate(&key, || Err(RenderError::Fault("boom".into())));
        assert!(failed.is_err());
        assert!(cache.is_empty());

        let (first, hit) = cache.get_or_try_generate(&key, || Ok("png".to_string())).unwrap();
        assert!(!hit);
        let (second, hit) = cache.get_or_try_generate(&key, || Ok("other".to_string())).unwrap();
        assert!(hit);
        assert_eq!(first, second);
        assert_eq!(&*second, "png");
    }
}
