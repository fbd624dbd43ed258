//! Opaque image keys handed to the image-loading collaborator.

use questview_common::{QuestKey, StrikeKey, TargetKey};

/// Image key of the quest art: `quest_<quest>`.
#[must_use]
pub fn quest_image(quest: &QuestKey) -> String {
    format!("quest_{quest}")
}

/// Image key of a collection item: `quest_<quest>_<target>`.
#[must_use]
pub fn collection_item_image(quest: &QuestKey, target: &TargetKey) -> String {
    format!("quest_{quest}_{target}")
}

/// Image key of a rage strike that has hit: `rage_strike_<strike>`.
#[must_use]
pub fn rage_strike_image(strike: &StrikeKey) -> String {
    format!("rage_strike_{strike}")
}
