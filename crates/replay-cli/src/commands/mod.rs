//! CLI command implementations.
//!
//! This module contains the implementation of each CLI command.

pub mod build;
pub mod check;
pub mod hexdump;
pub mod inspect;
