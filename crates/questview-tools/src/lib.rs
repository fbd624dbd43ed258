//! # Questview Tools
//!
//! Rendering-side collaborators of the quest progress display, expressed as
//! data so they can be driven and tested without a UI toolkit.
//!
//! This crate provides:
//! - Retained quest progress panel state
//! - Alert dialog content for strike actions
//! - Quest background palette
//! - Panel configuration

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod background;
pub mod config;
pub mod dialogs;
pub mod panel;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::background::*;
    pub use crate::config::*;
    pub use crate::dialogs::*;
    pub use crate::panel::*;
}

pub use prelude::*;
