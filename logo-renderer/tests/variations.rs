//! Integration tests for batch generation (logo-renderer).
//!
//! Covers the end-to-end scenario, determinism, structural diversity, batch
//! resilience under injected faults, and the cache.

use std::collections::HashSet;

use base64::Engine as _;
use logo_core::{Design, Engine, LogoCategory};
use logo_renderer::{
    FontConfig, LogoRequest, LogoStudio, RenderError, StudioConfig, VariationOutcome,
    PLACEHOLDER_PNG_BASE64,
};

fn config(canvas_size: u32) -> StudioConfig {
    StudioConfig {
        canvas_size,
        fonts: FontConfig::builtin_only(),
        shuffle_seed: Some(2024),
        ..StudioConfig::default()
    }
}

fn rose_garden(n: usize) -> LogoRequest {
    LogoRequest::new("Rose Garden", "floral bouquet shop")
        .with_colors(["#EC4899", "#10B981", "#A855F7"])
        .with_variations(n)
}

fn decode(outcome: &VariationOutcome) -> Vec<u8> {
    base64::engine::general_purpose::STANDARD
        .decode(&outcome.image)
        .expect("valid base64")
}

// ==========================================================================
// End-to-end
// ==========================================================================

#[test]
fn test_rose_garden_yields_three_decodable_pngs() {
    let studio = LogoStudio::new(config(1000));
    let outcomes = studio.generate_variations(&rose_garden(3));
    assert_eq!(outcomes.len(), 3);

    let mut sizes = Vec::new();
    for outcome in &outcomes {
        assert!(!outcome.fallback, "slot {} fell back", outcome.index);
        assert!(!outcome.image.starts_with("data:"));
        let png = decode(outcome);
        assert!(png.len() > 1000, "Expected > 1KB, got {} bytes", png.len());
        let img = image::load_from_memory(&png).expect("decodable png");
        assert_eq!((img.width(), img.height()), (1000, 1000));
        sizes.push(png.len());
    }

    let distinct_sizes: HashSet<usize> = sizes.iter().copied().collect();
    assert!(distinct_sizes.len() >= 2, "sizes {sizes:?}");
}

#[test]
fn test_every_engine_fills_the_batch() {
    let studio = LogoStudio::new(config(128));
    for engine in [Engine::Category, Engine::Industry, Engine::Premium] {
        let outcomes = studio.generate_variations(&rose_garden(4).with_engine(engine));
        assert_eq!(outcomes.len(), 4);
        assert!(outcomes.iter().all(|o| o.choice.design.engine() == engine));
        assert!(outcomes.iter().all(|o| !o.fallback), "{engine} fell back");
    }
}

// ==========================================================================
// Determinism and diversity
// ==========================================================================

#[test]
fn test_same_request_same_pixels() {
    let a = LogoStudio::new(StudioConfig {
        cache_enabled: false,
        ..config(160)
    });
    let b = LogoStudio::new(StudioConfig {
        cache_enabled: false,
        ..config(160)
    });
    let first = a.generate_variations(&rose_garden(3));
    let second = b.generate_variations(&rose_garden(3));
    for (x, y) in first.iter().zip(&second) {
        assert_eq!(x.choice, y.choice);
        assert_eq!(x.image, y.image);
    }
}

#[test]
fn test_batch_uses_distinct_categories() {
    let studio = LogoStudio::new(config(96));
    for n in 2..=6 {
        let outcomes = studio.generate_variations(&rose_garden(n));
        let designs: HashSet<Design> = outcomes.iter().map(|o| o.choice.design).collect();
        assert_eq!(designs.len(), n, "batch of {n} repeated a category");
    }
}

#[test]
fn test_category_sub_variants_follow_index() {
    let studio = LogoStudio::new(config(96));
    let outcomes = studio.generate_variations(&rose_garden(6));
    for outcome in &outcomes {
        assert_eq!(usize::from(outcome.choice.sub_variant), outcome.index % 3);
        assert!(matches!(outcome.choice.design, Design::Category(_)));
    }
}

// ==========================================================================
// Resilience
// ==========================================================================

#[test]
fn test_injected_faults_never_shrink_the_batch() {
    let studio = LogoStudio::new(config(128));
    let outcomes = studio.generate_variations_with(&rose_garden(5), |_, _| {
        Err(RenderError::Fault("injected".into()))
    });
    assert_eq!(outcomes.len(), 5);
    for outcome in &outcomes {
        assert!(outcome.fallback);
        assert!(!outcome.cached);
        let img = image::load_from_memory(&decode(outcome)).expect("fallback decodes");
        assert_eq!(img.width(), 128);
    }
}

#[test]
fn test_single_fault_only_replaces_its_slot() {
    let studio = LogoStudio::new(config(128));
    let outcomes = studio.generate_variations_with(&rose_garden(3), |canvas, ctx| {
        let emblem = ctx.choice.design == Design::Category(LogoCategory::Emblem);
        if emblem || ctx.choice.sub_variant == 1 {
            return Err(RenderError::Fault("injected".into()));
        }
        logo_renderer::render_design(canvas, ctx)
    });
    assert_eq!(outcomes.len(), 3);
    assert!(outcomes[1].fallback);
    assert!(outcomes.iter().filter(|o| !o.fallback).count() >= 1);
}

#[test]
fn test_blank_name_falls_back() {
    let studio = LogoStudio::new(config(96));
    let outcomes = studio.generate_variations(&LogoRequest::new("   ", "saas").with_variations(2));
    assert_eq!(outcomes.len(), 2);
    assert!(outcomes.iter().all(|o| o.fallback));
}

#[test]
fn test_unallocatable_canvas_yields_placeholders() {
    let studio = LogoStudio::new(config(0));
    let outcomes = studio.generate_variations(&rose_garden(2));
    assert_eq!(outcomes.len(), 2);
    for outcome in &outcomes {
        assert!(outcome.fallback);
        assert_eq!(outcome.image, PLACEHOLDER_PNG_BASE64);
    }
    let img = image::load_from_memory(&decode(&outcomes[0])).expect("placeholder decodes");
    assert_eq!((img.width(), img.height()), (1, 1));
}

// ==========================================================================
// Cache
// ==========================================================================

#[test]
fn test_repeat_request_hits_cache() {
    let studio = LogoStudio::new(config(96));
    let first = studio.generate_variations(&rose_garden(3));
    assert!(first.iter().all(|o| !o.cached));

    let second = studio.generate_variations(&rose_garden(3));
    assert!(second.iter().all(|o| o.cached));
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.image, b.image);
    }

    let stats = studio.cache_stats().expect("cache enabled");
    assert_eq!(stats.hits, 3);
    assert_eq!(stats.misses, 3);
}

#[test]
fn test_different_colors_miss_cache() {
    let studio = LogoStudio::new(config(96));
    let _ = studio.generate_variations(&rose_garden(1));
    let other = studio.generate_variations(&rose_garden(1).with_colors(["#000000"]));
    assert!(!other[0].cached);
}
