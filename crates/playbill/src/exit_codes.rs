//! Exit codes for the CLI

#![allow(dead_code)]

/// Success
pub const SUCCESS: i32 = 0;

/// General error
pub const ERROR: i32 = 1;

/// Descriptor error
pub const DESCRIPTOR_ERROR: i32 = 2;

/// Validation error
pub const VALIDATION_ERROR: i32 = 3;

/// Property store error
pub const PROPERTY_ERROR: i32 = 4;

/// User cancelled
pub const CANCELLED: i32 = 130;
