//! Core types, content model, and utilities for the mosaik slide engine.
//!
//! This crate provides the foundational types used across all other mosaik crates:
//! - Grid and physical geometry value types
//! - The closed content model placed into slide regions
//! - The canvas interface the layout engine renders onto
//! - Deck configuration
//! - Error types

pub mod canvas;
pub mod config;
pub mod content;
pub mod errors;
pub mod types;

pub use canvas::*;
pub use config::*;
pub use content::*;
pub use errors::*;
pub use types::*;
