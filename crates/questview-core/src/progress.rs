//! Progress snapshots.
//!
//! A snapshot is replaced wholesale whenever new progress arrives; nothing in
//! this crate mutates one in place.

use crate::definition::{default_valid, Validity};
use questview_common::{StrikeKey, TargetKey};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Value of `active_rage_strike_index` meaning no strike has triggered.
pub const NO_ACTIVE_STRIKE: i64 = -1;

const fn default_active_index() -> i64 {
    NO_ACTIVE_STRIKE
}

/// A rage strike in the order it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RageStrike {
    /// Strike key
    pub key: StrikeKey,
    /// Whether the strike has been resolved
    #[serde(default)]
    pub was_hit: bool,
}

impl RageStrike {
    /// Creates a strike that has already hit.
    #[must_use]
    pub fn hit(key: impl Into<StrikeKey>) -> Self {
        Self {
            key: key.into(),
            was_hit: true,
        }
    }

    /// Creates a pending strike.
    #[must_use]
    pub fn pending(key: impl Into<StrikeKey>) -> Self {
        Self {
            key: key.into(),
            was_hit: false,
        }
    }
}

/// Snapshot of a party's progress on its current quest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestProgressSnapshot {
    /// Boss hit points remaining
    #[serde(default)]
    pub hp: f64,
    /// Boss rage meter
    #[serde(default)]
    pub rage: f64,
    /// Items collected so far, by target key
    #[serde(default)]
    pub collected: HashMap<TargetKey, u32>,
    /// Strike history, first to last
    #[serde(default)]
    pub rage_strikes: Vec<RageStrike>,
    /// Index of the most recent strike, or [`NO_ACTIVE_STRIKE`]
    #[serde(default = "default_active_index")]
    pub active_rage_strike_index: i64,
    /// Validity flag carried from the progress feed
    #[serde(default = "default_valid")]
    pub valid: bool,
}

impl Default for QuestProgressSnapshot {
    fn default() -> Self {
        Self {
            hp: 0.0,
            rage: 0.0,
            collected: HashMap::new(),
            rage_strikes: Vec::new(),
            active_rage_strike_index: NO_ACTIVE_STRIKE,
            valid: true,
        }
    }
}

impl QuestProgressSnapshot {
    /// Creates a boss fight snapshot.
    #[must_use]
    pub fn boss(hp: f64, rage: f64) -> Self {
        Self {
            hp,
            rage,
            ..Self::default()
        }
    }

    /// Creates a collection snapshot.
    #[must_use]
    pub fn collection<K: Into<TargetKey>>(collected: impl IntoIterator<Item = (K, u32)>) -> Self {
        Self {
            collected: collected.into_iter().map(|(k, v)| (k.into(), v)).collect(),
            ..Self::default()
        }
    }

    /// Sets the strike history and the active strike index.
    #[must_use]
    pub fn with_strikes(mut self, strikes: Vec<RageStrike>, active_index: i64) -> Self {
        self.rage_strikes = strikes;
        self.active_rage_strike_index = active_index;
        self
    }

    /// Sets the validity flag.
    #[must_use]
    pub const fn with_valid(mut self, valid: bool) -> Self {
        self.valid = valid;
        self
    }

    /// Returns whether any rage strike has occurred.
    #[must_use]
    pub fn has_rage_strikes(&self) -> bool {
        !self.rage_strikes.is_empty()
    }

    /// Returns the collected count for a target, 0 if none were collected.
    #[must_use]
    pub fn collected_count(&self, key: &TargetKey) -> u32 {
        self.collected.get(key).copied().unwrap_or(0)
    }
}

impl Validity for QuestProgressSnapshot {
    fn is_valid(&self) -> bool {
        self.valid
    }
}
