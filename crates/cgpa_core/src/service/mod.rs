//! Use-case services exposed to presentation callers.
//!
//! # Responsibility
//! - Provide stable entry points for the FFI and CLI layers.
//! - Keep the calculation core free of caller-facing concerns.

pub mod cgpa_service;
