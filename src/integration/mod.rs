//! Integration testing module
//!
//! End-to-end scenarios for the manifest fix-ups:
//! - Role annotation over whole Periods
//! - Audio track and variant assembly
//! - Variant language correction

pub mod fixtures;
