//! Alert dialog content for panel actions.

use crate::config::PanelStrings;
use crate::panel::PanelAction;
use questview_common::Rgba;
use questview_core::strikes::StrikeAction;
use serde::{Deserialize, Serialize};

/// Content of a single-button alert dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertContent {
    /// Title
    pub title: String,
    /// Title background colour
    pub title_background: Rgba,
    /// Subtitle
    pub subtitle: String,
    /// Body text
    pub message: String,
    /// Label of the dismiss button
    pub close_label: String,
}

impl AlertContent {
    fn new(strings: &PanelStrings, title: &str, subtitle: &str, message: &str) -> Self {
        Self {
            title: title.to_string(),
            title_background: strings.title_background,
            subtitle: subtitle.to_string(),
            message: message.to_string(),
            close_label: strings.close.clone(),
        }
    }
}

/// Returns the alert a panel action should open, if it opens one.
///
/// Strike details have no defined content yet and return `None`, as does
/// toggling the quest art.
#[must_use]
pub fn dialog_for(action: &PanelAction, strings: &PanelStrings) -> Option<AlertContent> {
    match action {
        PanelAction::ShowStrikeDescription => Some(AlertContent::new(
            strings,
            &strings.strike_description_title,
            &strings.strike_description_subtitle,
            &strings.strike_description_description,
        )),
        PanelAction::Strike(StrikeAction::OpenPendingExplainer) => Some(AlertContent::new(
            strings,
            &strings.pending_strike_title,
            &strings.pending_strike_subtitle,
            &strings.pending_strike_description,
        )),
        PanelAction::Strike(StrikeAction::OpenStrikeDetail(_)) | PanelAction::ToggleQuestImage => {
            None
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use questview_common::StrikeKey;

    #[test]
    fn test_pending_explainer() {
        let strings = PanelStrings::default();
        let alert = dialog_for(&PanelAction::Strike(StrikeAction::OpenPendingExplainer), &strings)
            .expect("alert");

        assert_eq!(alert.title, "Pending Strike");
        assert_eq!(alert.close_label, "Close");
        assert_eq!(alert.title_background, strings.title_background);
    }

    #[test]
    fn test_strike_description() {
        let strings = PanelStrings {
            strike_description_title: "Wut".to_string(),
            ..PanelStrings::default()
        };
        let alert = dialog_for(&PanelAction::ShowStrikeDescription, &strings).expect("alert");
        assert_eq!(alert.title, "Wut");
        assert_eq!(alert.subtitle, strings.strike_description_subtitle);
    }

    #[test]
    fn test_no_dialog() {
        let strings = PanelStrings::default();
        let detail = PanelAction::Strike(StrikeAction::OpenStrikeDetail(StrikeKey::new("tavern")));
        assert!(dialog_for(&detail, &strings).is_none());
        assert!(dialog_for(&PanelAction::ToggleQuestImage, &strings).is_none());
    }
}
