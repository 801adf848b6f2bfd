//! Single test binary entry point.
//!
//! All integration tests compile into one binary to keep link times down.
//!
//! Structure:
//! - helpers: Recording view and editor builders
//! - integration: Multi-component workflow tests
//! - unit: Single-component tests through the public API

mod helpers;
