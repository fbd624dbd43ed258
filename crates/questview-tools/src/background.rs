//! Quest background gradient.

use questview_common::Rgba;
use questview_core::definition::{QuestDefinition, Validity};
use serde::{Deserialize, Serialize};

/// Colours the panel background is painted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestBackground {
    /// Top of the gradient
    pub dark: Rgba,
    /// Middle band
    pub medium: Rgba,
    /// Bottom of the gradient
    pub extra_light: Rgba,
}

impl QuestBackground {
    /// Picks the background for a quest.
    ///
    /// Returns `None` for an invalid definition or an incomplete palette, in
    /// which case the default panel background is drawn.
    #[must_use]
    pub fn from_definition(definition: &QuestDefinition) -> Option<Self> {
        if !definition.is_valid() {
            return None;
        }
        let colors = &definition.colors;
        Some(Self {
            dark: colors.dark?,
            medium: colors.medium?,
            extra_light: colors.extra_light?,
        })
    }
}
