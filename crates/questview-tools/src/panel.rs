//! Retained quest progress panel state.
//!
//! The panel owns the visuals a renderer last drew. Applying a derived model
//! updates them; an empty model leaves them untouched so loading never
//! flickers. Image loads and clicks are queued as data for the caller to
//! drain.

use crate::config::PanelConfig;
use questview_common::{Rgba, TargetKey};
use questview_core::bar::BarFill;
use questview_core::model::{
    BossDisplay, CollectionDisplay, CollectionItemDisplay, QuestDisplayModel, QuestHeader,
};
use questview_core::strikes::{StrikeAction, StrikeIcon, StrikeVisual};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A text widget.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextWidget {
    /// Whether the widget is shown
    pub visible: bool,
    /// Text content
    pub text: String,
}

impl TextWidget {
    fn show(&mut self, text: &str) {
        self.visible = true;
        text.clone_into(&mut self.text);
    }

    fn hide(&mut self) {
        self.visible = false;
    }
}

/// A value bar widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarWidget {
    /// Whether the widget is shown
    pub visible: bool,
    /// Bar fill
    pub fill: BarFill,
}

impl Default for BarWidget {
    fn default() -> Self {
        Self {
            visible: false,
            fill: BarFill::new(0.0, 0.0),
        }
    }
}

impl BarWidget {
    fn show(&mut self, fill: BarFill) {
        self.visible = true;
        self.fill = fill;
    }

    fn hide(&mut self) {
        self.visible = false;
    }
}

/// Where a requested image should be placed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageSlot {
    /// Quest art at the top of the panel
    QuestArt,
    /// Icon of a collection row
    CollectionItem(TargetKey),
    /// Icon of the strike at this index
    Strike(usize),
}

/// Fire-and-forget image load for the image collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRequest {
    /// Target slot
    pub slot: ImageSlot,
    /// Image key
    pub key: String,
}

/// Actions raised by the panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PanelAction {
    /// Collapse or expand the quest art
    ToggleQuestImage,
    /// Strike caption clicked: explain rage strikes
    ShowStrikeDescription,
    /// A strike icon was clicked
    Strike(StrikeAction),
}

/// Visual state of the quest progress panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelView {
    /// Boss name
    pub boss_name: TextWidget,
    /// Boss hit point bar
    pub hp_bar: BarWidget,
    /// Rage meter title
    pub rage_title: TextWidget,
    /// Rage meter bar
    pub rage_bar: BarWidget,
    /// "N of M" strike caption
    pub strike_caption: TextWidget,
    /// Strike icons, in order
    pub strikes: Vec<StrikeVisual>,
    /// Horizontal spacing between strike icons, in logical pixels
    pub strike_spacing: f32,
    /// Collection rows, in order
    pub collection: Vec<CollectionItemDisplay>,
    /// Quest description
    pub description: String,
    /// Image key of the quest art last requested
    pub quest_image_key: Option<String>,
    /// Separator colour of the description section and quest art
    pub separator_color: Option<Rgba>,
    /// Whether the quest art is expanded
    pub quest_image_expanded: bool,
}

impl PanelView {
    fn new(config: &PanelConfig) -> Self {
        Self {
            boss_name: TextWidget::default(),
            hp_bar: BarWidget::default(),
            rage_title: TextWidget::default(),
            rage_bar: BarWidget::default(),
            strike_caption: TextWidget::default(),
            strikes: Vec::new(),
            strike_spacing: config.strike_spacing,
            collection: Vec::new(),
            description: String::new(),
            quest_image_key: None,
            separator_color: None,
            quest_image_expanded: config.show_quest_image,
        }
    }

    /// Returns whether the caret over the quest art points up.
    #[must_use]
    pub fn caret_up(&self) -> bool {
        self.quest_image_expanded
    }
}

/// Quest progress panel.
#[derive(Debug, Clone)]
pub struct QuestProgressPanel {
    config: PanelConfig,
    view: PanelView,
    image_requests: Vec<ImageRequest>,
    actions: Vec<PanelAction>,
}

impl Default for QuestProgressPanel {
    fn default() -> Self {
        Self::new(PanelConfig::default())
    }
}

impl QuestProgressPanel {
    /// Creates a panel.
    #[must_use]
    pub fn new(config: PanelConfig) -> Self {
        let view = PanelView::new(&config);
        Self {
            config,
            view,
            image_requests: Vec::new(),
            actions: Vec::new(),
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// Returns the current visual state.
    #[must_use]
    pub fn view(&self) -> &PanelView {
        &self.view
    }

    /// Applies a derived model to the retained visuals.
    pub fn apply(&mut self, model: &QuestDisplayModel) {
        match model {
            QuestDisplayModel::Empty => {
                debug!("empty quest display, keeping previous visuals");
                return;
            },
            QuestDisplayModel::Boss(boss) => self.apply_boss(boss),
            QuestDisplayModel::Collection(collection) => self.apply_collection(collection),
        }

        if let Some(header) = model.header() {
            self.apply_header(header);
        }
    }

    fn apply_boss(&mut self, boss: &BossDisplay) {
        self.view.collection.clear();
        self.view.boss_name.show(&boss.boss_name);
        self.view.hp_bar.show(boss.hp);

        let Some(rage) = &boss.rage else {
            self.view.rage_title.hide();
            self.view.rage_bar.hide();
            self.hide_strikes();
            return;
        };

        self.view.rage_title.show(&rage.title);
        self.view.rage_bar.show(rage.meter);

        let Some(section) = &rage.strikes else {
            self.hide_strikes();
            return;
        };

        let caption = section.caption.render(&self.config.strike_caption);
        self.view.strike_caption.show(&caption);
        self.view.strikes = section.plan.visuals().to_vec();
        for (index, visual) in section.plan.iter().enumerate() {
            if let StrikeIcon::Image(key) = &visual.icon {
                self.image_requests.push(ImageRequest {
                    slot: ImageSlot::Strike(index),
                    key: key.clone(),
                });
            }
        }
    }

    fn apply_collection(&mut self, collection: &CollectionDisplay) {
        self.view.boss_name.hide();
        self.view.hp_bar.hide();
        self.view.rage_title.hide();
        self.view.rage_bar.hide();
        self.hide_strikes();

        self.view.collection.clone_from(&collection.items);
        for item in &collection.items {
            self.image_requests.push(ImageRequest {
                slot: ImageSlot::CollectionItem(item.key.clone()),
                key: item.image_key.clone(),
            });
        }
    }

    fn apply_header(&mut self, header: &QuestHeader) {
        self.view.description.clone_from(&header.description_text);
        self.view.quest_image_key = Some(header.image_key.clone());
        self.image_requests.push(ImageRequest {
            slot: ImageSlot::QuestArt,
            key: header.image_key.clone(),
        });
        if let Some(color) = header.separator_color {
            self.view.separator_color = Some(color);
        }
    }

    fn hide_strikes(&mut self) {
        self.view.strike_caption.hide();
        self.view.strikes.clear();
    }

    /// Handles a panel action and queues it for the caller.
    pub fn handle_action(&mut self, action: PanelAction) {
        if action == PanelAction::ToggleQuestImage {
            self.view.quest_image_expanded = !self.view.quest_image_expanded;
        }
        self.actions.push(action);
    }

    /// Quest art title clicked.
    pub fn toggle_quest_image(&mut self) {
        self.handle_action(PanelAction::ToggleQuestImage);
    }

    /// Strike caption clicked.
    pub fn click_strike_caption(&mut self) {
        if self.view.strike_caption.visible {
            self.handle_action(PanelAction::ShowStrikeDescription);
        }
    }

    /// Strike icon at `index` clicked. Ignored if no such strike is shown.
    pub fn click_strike(&mut self, index: usize) {
        if let Some(visual) = self.view.strikes.get(index) {
            let action = PanelAction::Strike(visual.action.clone());
            self.handle_action(action);
        }
    }

    /// Drain queued image requests.
    pub fn drain_image_requests(&mut self) -> Vec<ImageRequest> {
        std::mem::take(&mut self.image_requests)
    }

    /// Drain queued actions.
    pub fn drain_actions(&mut self) -> Vec<PanelAction> {
        std::mem::take(&mut self.actions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use questview_core::prelude::*;

    fn rage_quest() -> QuestDefinition {
        QuestDefinition::boss(
            "dredwyrm",
            BossDefinition::new("Dredwyrm", 500.0).with_rage(RageDefinition::new("Rage", 100.0)),
        )
        .with_notes("It sleeps under the hills.")
        .with_colors(QuestColors {
            light: Some(Rgba::rgb(1, 2, 3)),
            ..QuestColors::default()
        })
    }

    fn strike_progress() -> QuestProgressSnapshot {
        QuestProgressSnapshot::boss(375.0, 40.0).with_strikes(
            vec![RageStrike::hit("tavern"), RageStrike::pending("market")],
            0,
        )
    }

    fn applied(definition: &QuestDefinition, progress: &QuestProgressSnapshot) -> QuestProgressPanel {
        let mut panel = QuestProgressPanel::default();
        panel.apply(&derive(Some(definition), Some(progress)));
        panel
    }

    #[test]
    fn test_apply_boss_with_strikes() {
        let panel = applied(&rage_quest(), &strike_progress());
        let view = panel.view();

        assert!(view.boss_name.visible);
        assert_eq!(view.boss_name.text, "Dredwyrm");
        assert!(view.hp_bar.visible);
        assert!(view.rage_title.visible);
        assert!(view.rage_bar.visible);
        assert!(view.strike_caption.visible);
        assert_eq!(view.strike_caption.text, "1 of 2");
        assert_eq!(view.strikes.len(), 2);
        assert_eq!(view.description, "It sleeps under the hills.");
        assert_eq!(view.separator_color, Some(Rgba::rgb(1, 2, 3)));
    }

    #[test]
    fn test_apply_queues_image_requests() {
        let mut panel = applied(&rage_quest(), &strike_progress());
        let requests = panel.drain_image_requests();

        assert!(requests.contains(&ImageRequest {
            slot: ImageSlot::QuestArt,
            key: "quest_dredwyrm".to_string(),
        }));
        assert!(requests.contains(&ImageRequest {
            slot: ImageSlot::Strike(0),
            key: "rage_strike_tavern".to_string(),
        }));
        // Pending strikes use the built-in icon.
        assert!(!requests.iter().any(|r| r.slot == ImageSlot::Strike(1)));
        assert!(panel.drain_image_requests().is_empty());
    }

    #[test]
    fn test_empty_keeps_previous_visuals() {
        let mut panel = applied(&rage_quest(), &strike_progress());
        panel.drain_image_requests();
        let before = panel.view().clone();

        panel.apply(&QuestDisplayModel::Empty);
        assert_eq!(panel.view(), &before);
        assert!(panel.drain_image_requests().is_empty());
    }

    #[test]
    fn test_separator_color_kept_when_absent() {
        let mut panel = applied(&rage_quest(), &strike_progress());

        let plain = QuestDefinition::boss("gryphon", BossDefinition::new("Gryphon", 300.0));
        panel.apply(&derive(Some(&plain), Some(&QuestProgressSnapshot::boss(10.0, 0.0))));
        assert_eq!(panel.view().separator_color, Some(Rgba::rgb(1, 2, 3)));
    }

    #[test]
    fn test_rage_hidden_without_rage() {
        let mut panel = applied(&rage_quest(), &strike_progress());

        let plain = QuestDefinition::boss("gryphon", BossDefinition::new("Gryphon", 300.0));
        panel.apply(&derive(Some(&plain), Some(&strike_progress())));
        let view = panel.view();
        assert!(!view.rage_title.visible);
        assert!(!view.rage_bar.visible);
        assert!(!view.strike_caption.visible);
        assert!(view.strikes.is_empty());
    }

    #[test]
    fn test_strikes_hidden_before_first_strike() {
        let mut panel = applied(&rage_quest(), &strike_progress());
        panel.apply(&derive(Some(&rage_quest()), Some(&QuestProgressSnapshot::boss(375.0, 40.0))));

        let view = panel.view();
        assert!(view.rage_bar.visible);
        assert!(!view.strike_caption.visible);
        assert!(view.strikes.is_empty());
    }

    #[test]
    fn test_apply_collection_hides_boss() {
        let mut panel = applied(&rage_quest(), &strike_progress());

        let quest = QuestDefinition::collection(
            "eggs",
            vec![
                CollectionTarget::new("egg", "Egg", 10),
                CollectionTarget::new("nest", "Nest", 1),
            ],
        );
        panel.drain_image_requests();
        panel.apply(&derive(Some(&quest), Some(&QuestProgressSnapshot::collection([("egg", 4)]))));

        let view = panel.view();
        assert!(!view.boss_name.visible);
        assert!(!view.hp_bar.visible);
        assert!(!view.rage_bar.visible);
        assert!(!view.strike_caption.visible);
        assert_eq!(view.collection.len(), 2);
        assert_eq!(view.collection[0].current, 4);
        assert_eq!(view.collection[1].current, 0);

        let requests = panel.drain_image_requests();
        assert!(requests.contains(&ImageRequest {
            slot: ImageSlot::CollectionItem(TargetKey::new("nest")),
            key: "quest_eggs_nest".to_string(),
        }));
    }

    #[test]
    fn test_custom_caption_template() {
        let config = PanelConfig {
            strike_caption: "Strike {active}/{total}".to_string(),
            ..PanelConfig::default()
        };
        let mut panel = QuestProgressPanel::new(config);
        panel.apply(&derive(Some(&rage_quest()), Some(&strike_progress())));
        assert_eq!(panel.view().strike_caption.text, "Strike 1/2");
    }

    #[test]
    fn test_toggle_quest_image() {
        let mut panel = QuestProgressPanel::default();
        assert!(panel.view().quest_image_expanded);
        assert!(panel.view().caret_up());

        panel.toggle_quest_image();
        assert!(!panel.view().quest_image_expanded);

        panel.toggle_quest_image();
        assert!(panel.view().quest_image_expanded);
        assert_eq!(panel.drain_actions().len(), 2);
    }

    #[test]
    fn test_collapsed_by_config() {
        let config = PanelConfig {
            show_quest_image: false,
            ..PanelConfig::default()
        };
        assert!(!QuestProgressPanel::new(config).view().quest_image_expanded);
    }

    #[test]
    fn test_strike_spacing_from_config() {
        let config = PanelConfig {
            strike_spacing: 14.0,
            ..PanelConfig::default()
        };
        let mut panel = QuestProgressPanel::new(config);
        panel.apply(&derive(Some(&rage_quest()), Some(&strike_progress())));
        assert!((panel.view().strike_spacing - 14.0).abs() < 0.001);
    }

    fn any_model() -> impl Strategy<Value = QuestDisplayModel> {
        (
            any::<bool>(),
            any::<bool>(),
            0.0f64..600.0,
            0.0f64..150.0,
            proptest::collection::vec(any::<bool>(), 0..5),
            -2i64..6,
            proptest::collection::vec(0u32..5, 0..4),
        )
            .prop_map(|(boss, rage, hp, meter, hits, active, counts)| {
                let (definition, progress) = if boss {
                    let mut boss = BossDefinition::new("Dredwyrm", 500.0);
                    if rage {
                        boss = boss.with_rage(RageDefinition::new("Rage", 100.0));
                    }
                    let strikes = hits
                        .iter()
                        .enumerate()
                        .map(|(i, &was_hit)| RageStrike {
                            key: StrikeKey::new(format!("s{i}")),
                            was_hit,
                        })
                        .collect();
                    (
                        QuestDefinition::boss("dredwyrm", boss),
                        QuestProgressSnapshot::boss(hp, meter).with_strikes(strikes, active),
                    )
                } else {
                    let targets = (0..counts.len())
                        .map(|i| CollectionTarget::new(format!("t{i}"), format!("Item {i}"), 4))
                        .collect();
                    let collected = counts
                        .iter()
                        .enumerate()
                        .map(|(i, &count)| (format!("t{i}"), count));
                    (
                        QuestDefinition::collection("gather", targets),
                        QuestProgressSnapshot::collection(collected),
                    )
                };
                derive(Some(&definition), Some(&progress))
            })
    }

    proptest! {
        #[test]
        fn prop_empty_keeps_any_previous_view(model in any_model()) {
            let mut panel = QuestProgressPanel::default();
            panel.apply(&model);
            panel.drain_image_requests();
            let before = panel.view().clone();

            panel.apply(&QuestDisplayModel::Empty);
            prop_assert_eq!(panel.view(), &before);
            prop_assert!(panel.drain_image_requests().is_empty());
        }
    }

    #[test]
    fn test_click_strikes() {
        let mut panel = applied(&rage_quest(), &strike_progress());

        panel.click_strike(0);
        panel.click_strike(1);
        panel.click_strike(9);
        panel.click_strike_caption();

        assert_eq!(
            panel.drain_actions(),
            vec![
                PanelAction::Strike(StrikeAction::OpenStrikeDetail(StrikeKey::new("tavern"))),
                PanelAction::Strike(StrikeAction::OpenPendingExplainer),
                PanelAction::ShowStrikeDescription,
            ]
        );
        assert!(panel.drain_actions().is_empty());
    }

    #[test]
    fn test_caption_click_ignored_when_hidden() {
        let mut panel = QuestProgressPanel::default();
        panel.click_strike_caption();
        assert!(panel.drain_actions().is_empty());
    }
}
