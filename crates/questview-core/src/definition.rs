//! Immutable quest definitions.
//!
//! A definition is loaded once per quest and never mutated while a panel
//! shows it. It describes the quest art, the boss (if any) and its rage
//! meter, and the items a collection quest asks for.

use questview_common::{QuestKey, Rgba, TargetKey};
use serde::{Deserialize, Serialize};

/// Validity predicate supplied by the system that produced a record.
///
/// A record that has not finished loading, or was found to be malformed,
/// reports `false` and derives an empty display.
pub trait Validity {
    /// Returns whether the record can be displayed.
    fn is_valid(&self) -> bool;
}

pub(crate) const fn default_valid() -> bool {
    true
}

/// Rage meter attached to a boss.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RageDefinition {
    /// Title shown above the rage bar
    pub title: String,
    /// Rage value at which a strike triggers
    pub max_value: f64,
}

impl RageDefinition {
    /// Creates a rage definition.
    #[must_use]
    pub fn new(title: impl Into<String>, max_value: f64) -> Self {
        Self {
            title: title.into(),
            max_value,
        }
    }
}

/// Boss of a boss quest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BossDefinition {
    /// Boss display name
    pub name: String,
    /// Hit points at the start of the fight
    pub max_hp: f64,
    /// Optional rage mechanic
    #[serde(default)]
    pub rage: Option<RageDefinition>,
}

impl BossDefinition {
    /// Creates a boss without a rage meter.
    #[must_use]
    pub fn new(name: impl Into<String>, max_hp: f64) -> Self {
        Self {
            name: name.into(),
            max_hp,
            rage: None,
        }
    }

    /// Attaches a rage meter.
    #[must_use]
    pub fn with_rage(mut self, rage: RageDefinition) -> Self {
        self.rage = Some(rage);
        self
    }

    /// Returns whether this boss has a rage meter.
    #[must_use]
    pub fn has_rage(&self) -> bool {
        self.rage.is_some()
    }
}

/// Colour palette of a quest. Any entry may be missing from content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestColors {
    /// Darkest shade (background top)
    #[serde(default)]
    pub dark: Option<Rgba>,
    /// Medium shade
    #[serde(default)]
    pub medium: Option<Rgba>,
    /// Light shade (separators)
    #[serde(default)]
    pub light: Option<Rgba>,
    /// Lightest shade (background bottom)
    #[serde(default)]
    pub extra_light: Option<Rgba>,
}

/// An item a collection quest asks for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionTarget {
    /// Item key
    pub key: TargetKey,
    /// Item name shown next to the bar
    pub display_text: String,
    /// Number of items required
    pub target_count: u32,
}

impl CollectionTarget {
    /// Creates a collection target.
    #[must_use]
    pub fn new(
        key: impl Into<TargetKey>,
        display_text: impl Into<String>,
        target_count: u32,
    ) -> Self {
        Self {
            key: key.into(),
            display_text: display_text.into(),
            target_count,
        }
    }
}

/// Definition of a quest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestDefinition {
    /// Quest key
    pub key: QuestKey,
    /// Whether progress is tracked by a boss hp pool
    #[serde(default)]
    pub is_boss_quest: bool,
    /// Boss, present exactly when `is_boss_quest` is set
    #[serde(default)]
    pub boss: Option<BossDefinition>,
    /// Colour palette
    #[serde(default)]
    pub colors: QuestColors,
    /// Quest description
    #[serde(default)]
    pub notes: String,
    /// Items to collect, in display order
    #[serde(default)]
    pub collection_targets: Vec<CollectionTarget>,
    /// Validity flag carried from the content source
    #[serde(default = "default_valid")]
    pub valid: bool,
}

impl QuestDefinition {
    /// Creates a boss quest.
    #[must_use]
    pub fn boss(key: impl Into<QuestKey>, boss: BossDefinition) -> Self {
        Self {
            key: key.into(),
            is_boss_quest: true,
            boss: Some(boss),
            colors: QuestColors::default(),
            notes: String::new(),
            collection_targets: Vec::new(),
            valid: true,
        }
    }

    /// Creates a collection quest.
    #[must_use]
    pub fn collection(key: impl Into<QuestKey>, targets: Vec<CollectionTarget>) -> Self {
        Self {
            key: key.into(),
            is_boss_quest: false,
            boss: None,
            colors: QuestColors::default(),
            notes: String::new(),
            collection_targets: targets,
            valid: true,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Sets the colour palette.
    #[must_use]
    pub fn with_colors(mut self, colors: QuestColors) -> Self {
        self.colors = colors;
        self
    }

    /// Sets the validity flag.
    #[must_use]
    pub const fn with_valid(mut self, valid: bool) -> Self {
        self.valid = valid;
        self
    }

    /// Looks up a collection target by key.
    #[must_use]
    pub fn collect_target(&self, key: &TargetKey) -> Option<&CollectionTarget> {
        self.collection_targets.iter().find(|t| &t.key == key)
    }
}

impl Validity for QuestDefinition {
    fn is_valid(&self) -> bool {
        self.valid && self.is_boss_quest == self.boss.is_some()
    }
}
