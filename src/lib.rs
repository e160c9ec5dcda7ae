//! tdsp - named colors, color arithmetic and fades
//!
//! Command-line front end for the `tdsp-color` crate.
//! This library exposes modules for integration testing.

pub mod commands;
pub mod config;
pub mod error;
