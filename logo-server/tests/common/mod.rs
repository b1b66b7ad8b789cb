//! Shared helpers for logo-server integration tests.

mod server;

pub use server::{TestServer, TEST_CANVAS_SIZE};
