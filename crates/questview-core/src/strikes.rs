//! Rage strike render plan.
//!
//! Expands a strike history into one visual per strike, in occurrence order,
//! and attaches the action a click on that strike should request. The plan is
//! plain data; presenting dialogs is the caller's job.

use crate::image_keys;
use crate::progress::RageStrike;
use questview_common::StrikeKey;
use serde::{Deserialize, Serialize};

/// Whether a strike has been resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrikeVisualState {
    /// Strike has hit
    Hit,
    /// Strike has not hit yet
    Pending,
}

/// Icon to draw for a strike.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrikeIcon {
    /// Load the strike's image by key
    Image(String),
    /// Built-in inactive icon
    Inactive,
}

/// What a click on a strike should open.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrikeAction {
    /// Detail view for a strike that has hit
    OpenStrikeDetail(StrikeKey),
    /// Explainer for strikes that have not hit yet
    OpenPendingExplainer,
}

impl StrikeAction {
    /// Returns the strike key carried by the action, if any.
    #[must_use]
    pub fn key(&self) -> Option<&StrikeKey> {
        match self {
            Self::OpenStrikeDetail(key) => Some(key),
            Self::OpenPendingExplainer => None,
        }
    }
}

/// Visual state of a single strike.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrikeVisual {
    /// Strike key
    pub key: StrikeKey,
    /// Hit or pending
    pub visual_state: StrikeVisualState,
    /// Whether this is the most recently triggered strike
    pub is_active: bool,
    /// Icon to draw
    pub icon: StrikeIcon,
    /// Click action
    pub action: StrikeAction,
}

impl StrikeVisual {
    fn new(strike: &RageStrike, is_active: bool) -> Self {
        let (visual_state, icon, action) = if strike.was_hit {
            (
                StrikeVisualState::Hit,
                StrikeIcon::Image(image_keys::rage_strike_image(&strike.key)),
                StrikeAction::OpenStrikeDetail(strike.key.clone()),
            )
        } else {
            (
                StrikeVisualState::Pending,
                StrikeIcon::Inactive,
                StrikeAction::OpenPendingExplainer,
            )
        };

        Self {
            key: strike.key.clone(),
            visual_state,
            is_active,
            icon,
            action,
        }
    }
}

/// Ordered strike visuals, index `i` matching strike `i` of the history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RageStrikeRenderPlan(Vec<StrikeVisual>);

impl RageStrikeRenderPlan {
    /// Returns the visuals in order.
    #[must_use]
    pub fn visuals(&self) -> &[StrikeVisual] {
        &self.0
    }

    /// Returns the visual at an index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&StrikeVisual> {
        self.0.get(index)
    }

    /// Iterates over the visuals in order.
    pub fn iter(&self) -> impl Iterator<Item = &StrikeVisual> {
        self.0.iter()
    }

    /// Returns the number of strikes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the plan has no strikes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the index of the active strike, if any.
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.0.iter().position(|v| v.is_active)
    }
}

impl<'a> IntoIterator for &'a RageStrikeRenderPlan {
    type Item = &'a StrikeVisual;
    type IntoIter = std::slice::Iter<'a, StrikeVisual>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Maps a raw active index from the progress feed onto the strike list.
///
/// Anything outside `0..len` (including the canonical `-1`) means no strike
/// is active. The feed may briefly disagree with the list during partial
/// updates, so this never fails.
#[must_use]
pub fn normalize_active_index(active_index: i64, len: usize) -> Option<usize> {
    usize::try_from(active_index).ok().filter(|&i| i < len)
}

/// Builds the render plan for a strike history.
#[must_use]
pub fn plan(strikes: &[RageStrike], active_index: i64) -> RageStrikeRenderPlan {
    let active = normalize_active_index(active_index, strikes.len());
    RageStrikeRenderPlan(
        strikes
            .iter()
            .enumerate()
            .map(|(i, strike)| StrikeVisual::new(strike, active == Some(i)))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn history() -> Vec<RageStrike> {
        vec![
            RageStrike::hit("tavern"),
            RageStrike::hit("stables"),
            RageStrike::pending("market"),
        ]
    }

    #[test]
    fn test_plan_preserves_order() {
        let plan = plan(&history(), 1);
        let keys: Vec<_> = plan.iter().map(|v| v.key.as_str()).collect();
        assert_eq!(keys, ["tavern", "stables", "market"]);
    }

    #[test]
    fn test_plan_visual_states_and_actions() {
        let plan = plan(&history(), 1);

        let hit = plan.get(0).expect("visual");
        assert_eq!(hit.visual_state, StrikeVisualState::Hit);
        assert_eq!(hit.icon, StrikeIcon::Image("rage_strike_tavern".to_string()));
        assert_eq!(hit.action, StrikeAction::OpenStrikeDetail(StrikeKey::new("tavern")));

        let pending = plan.get(2).expect("visual");
        assert_eq!(pending.visual_state, StrikeVisualState::Pending);
        assert_eq!(pending.icon, StrikeIcon::Inactive);
        assert_eq!(pending.action, StrikeAction::OpenPendingExplainer);
        assert!(pending.action.key().is_none());
    }

    #[test]
    fn test_plan_marks_active() {
        let plan = plan(&history(), 1);
        assert_eq!(plan.active_index(), Some(1));
        assert!(!plan.get(0).expect("visual").is_active);
        assert!(plan.get(1).expect("visual").is_active);
    }

    #[test]
    fn test_plan_out_of_range_active() {
        for index in [-1, -7, 3, 5, i64::MAX, i64::MIN] {
            let plan = plan(&history(), index);
            assert_eq!(plan.active_index(), None, "index {index}");
        }
    }

    #[test]
    fn test_plan_empty_history() {
        let plan = plan(&[], 0);
        assert!(plan.is_empty());
        assert_eq!(plan.active_index(), None);
    }

    proptest! {
        #[test]
        fn prop_plan_matches_history(hits in proptest::collection::vec(any::<bool>(), 0..16), active in -4i64..20) {
            let strikes: Vec<_> = hits
                .iter()
                .enumerate()
                .map(|(i, &was_hit)| RageStrike { key: StrikeKey::new(format!("s{i}")), was_hit })
                .collect();
            let plan = plan(&strikes, active);

            prop_assert_eq!(plan.len(), strikes.len());
            prop_assert!(plan.iter().filter(|v| v.is_active).count() <= 1);
            for (visual, strike) in plan.iter().zip(&strikes) {
                prop_assert_eq!(&visual.key, &strike.key);
                prop_assert_eq!(visual.visual_state == StrikeVisualState::Hit, strike.was_hit);
            }
        }
    }
}
