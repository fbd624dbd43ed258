//! Key types for quests, collection targets, and rage strikes.
//!
//! All keys are opaque strings assigned by the content source. They are only
//! compared and concatenated into image keys, never parsed.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_key {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new key.
            #[must_use]
            pub fn new(key: impl Into<String>) -> Self {
                Self(key.into())
            }

            /// Returns the key as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(key: &str) -> Self {
                Self::new(key)
            }
        }

        impl From<String> for $name {
            fn from(key: String) -> Self {
                Self(key)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_key! {
    /// Key of a quest definition (e.g. `"dilatory"`).
    QuestKey
}

string_key! {
    /// Key of an item a collection quest asks for.
    TargetKey
}

string_key! {
    /// Key of a rage strike (usually the location it hit, e.g. `"tavern"`).
    StrikeKey
}
