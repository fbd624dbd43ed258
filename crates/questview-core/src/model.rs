//! The derived quest display model.
//!
//! A model is recomputed from scratch on every input change and holds no
//! state of its own. Renderers read it to set visibility, text, and bar
//! fills on their widgets.

use crate::bar::BarFill;
use crate::strikes::RageStrikeRenderPlan;
use questview_common::{Rgba, TargetKey};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default strike caption template.
pub const DEFAULT_STRIKE_CAPTION: &str = "{active} of {total}";

/// Display state, one per mutually exclusive shape of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisplayState {
    /// Nothing to render; keep previous visuals
    Empty,
    /// Boss quest without a rage meter
    BossNoRage,
    /// Boss quest with a rage meter and no strikes yet
    BossWithRage,
    /// Boss quest with a rage meter and at least one strike
    BossWithRageAndStrikes,
    /// Collection quest
    Collection,
}

/// Fields shared by every non-empty model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestHeader {
    /// Quest description
    pub description_text: String,
    /// Image key of the quest art
    pub image_key: String,
    /// Separator colour; `None` leaves the previous colour in place
    pub separator_color: Option<Rgba>,
}

/// "N of M" caption above the strike row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrikeCaption {
    /// One-based number of the active strike, 0 when none is active
    pub active_number: usize,
    /// Number of strikes in the history
    pub total: usize,
}

impl StrikeCaption {
    /// Creates a caption from a normalized active index.
    #[must_use]
    pub fn new(active: Option<usize>, total: usize) -> Self {
        Self {
            active_number: active.map_or(0, |i| i + 1),
            total,
        }
    }

    /// Renders the caption with a template containing `{active}` and `{total}`.
    #[must_use]
    pub fn render(&self, template: &str) -> String {
        template
            .replace("{active}", &self.active_number.to_string())
            .replace("{total}", &self.total.to_string())
    }
}

impl fmt::Display for StrikeCaption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(DEFAULT_STRIKE_CAPTION))
    }
}

/// Strike sub-section of the rage display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrikeSection {
    /// Count caption
    pub caption: StrikeCaption,
    /// One visual per strike
    pub plan: RageStrikeRenderPlan,
}

/// Rage meter of a boss.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RageDisplay {
    /// Title above the rage bar
    pub title: String,
    /// Rage bar
    pub meter: BarFill,
    /// Present only once at least one strike exists
    pub strikes: Option<StrikeSection>,
}

/// Boss quest display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BossDisplay {
    /// Shared fields
    pub header: QuestHeader,
    /// Boss name
    pub boss_name: String,
    /// Hit point bar
    pub hp: BarFill,
    /// Present only if the boss has a rage meter
    pub rage: Option<RageDisplay>,
}

impl BossDisplay {
    /// Returns the strike section, if the boss has rage and strikes exist.
    #[must_use]
    pub fn strikes(&self) -> Option<&StrikeSection> {
        self.rage.as_ref().and_then(|r| r.strikes.as_ref())
    }
}

/// One row of a collection quest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionItemDisplay {
    /// Target key
    pub key: TargetKey,
    /// Item name
    pub display_text: String,
    /// Items collected
    pub current: u32,
    /// Items required
    pub target: u32,
    /// Image key of the item icon
    pub image_key: String,
}

impl CollectionItemDisplay {
    /// Returns the bar fill for this row.
    #[must_use]
    pub fn fill(&self) -> BarFill {
        BarFill::from_counts(self.current, self.target)
    }
}

/// Collection quest display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionDisplay {
    /// Shared fields
    pub header: QuestHeader,
    /// Rows, in the definition's target order
    pub items: Vec<CollectionItemDisplay>,
}

/// What the quest progress panel should show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum QuestDisplayModel {
    /// Render nothing and keep previous visuals
    Empty,
    /// Boss quest
    Boss(BossDisplay),
    /// Collection quest
    Collection(CollectionDisplay),
}

impl QuestDisplayModel {
    /// Returns the display state of this model.
    #[must_use]
    pub fn state(&self) -> DisplayState {
        match self {
            Self::Empty => DisplayState::Empty,
            Self::Boss(boss) => match &boss.rage {
                None => DisplayState::BossNoRage,
                Some(RageDisplay { strikes: None, .. }) => DisplayState::BossWithRage,
                Some(RageDisplay {
                    strikes: Some(_), ..
                }) => DisplayState::BossWithRageAndStrikes,
            },
            Self::Collection(_) => DisplayState::Collection,
        }
    }

    /// Returns the shared fields, `None` for an empty model.
    #[must_use]
    pub fn header(&self) -> Option<&QuestHeader> {
        match self {
            Self::Empty => None,
            Self::Boss(boss) => Some(&boss.header),
            Self::Collection(collection) => Some(&collection.header),
        }
    }

    /// Returns whether this model renders nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}
