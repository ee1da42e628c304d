//! Greebler CLI library.
//!
//! Command implementations for the `greebler` binary.

pub mod commands;
