//! Program loading.
//!
//! Turns a program image file into the byte sequence the CPU copies into
//! memory at address 0.

pub mod loader;
