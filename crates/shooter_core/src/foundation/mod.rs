//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the core:
//! - Vector and angle math
//! - Frame clock
//! - Logging utilities

pub mod math;
pub mod time;
pub mod logging;
