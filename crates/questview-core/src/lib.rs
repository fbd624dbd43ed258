//! # Questview Core
//!
//! Derives the display state of a quest progress panel from an immutable
//! quest definition and a progress snapshot.
//!
//! This crate provides:
//! - Quest definitions and progress snapshots
//! - The display model (boss, boss with rage and strikes, collection, empty)
//! - Rage strike render plans
//! - Image keys for the image-loading collaborator
//! - Loading inputs from JSON or RON files
//!
//! Nothing here renders, loads images, or shows dialogs.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod bar;
pub mod definition;
pub mod deriver;
pub mod image_keys;
pub mod loader;
pub mod model;
pub mod progress;
pub mod strikes;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::bar::*;
    pub use crate::definition::*;
    pub use crate::deriver::derive;
    pub use crate::model::*;
    pub use crate::progress::*;
    pub use crate::strikes::{
        plan, RageStrikeRenderPlan, StrikeAction, StrikeIcon, StrikeVisual, StrikeVisualState,
    };
    pub use questview_common::{QuestKey, Rgba, StrikeKey, TargetKey};
}

pub use prelude::*;
