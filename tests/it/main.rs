//! Single test binary entry point.
//!
//! All integration-level tests compile into one binary to keep linking
//! overhead down.
//!
//! Structure:
//! - unit: single-component tests against the public API
//! - integration: multi-step editing workflows
