//! # Questview Common
//!
//! Shared types for the questview workspace.
//!
//! This crate provides the foundational types used by the other crates:
//! - Key types (QuestKey, TargetKey, StrikeKey)
//! - RGBA colours parsed from `#rrggbb` hex strings
//! - Common error types
//! - Prelude for convenient imports

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod color;
pub mod error;
pub mod ids;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::color::*;
    pub use crate::error::*;
    pub use crate::ids::*;
}

pub use prelude::*;
