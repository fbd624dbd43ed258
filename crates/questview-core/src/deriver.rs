//! Quest display state derivation.
//!
//! [`derive`] is a pure function of a definition and a progress snapshot. It
//! is called by the owner of the panel on every input change; no model is
//! cached between calls, and the same inputs always give an equal model.

use crate::bar::BarFill;
use crate::definition::{BossDefinition, QuestDefinition, Validity};
use crate::image_keys;
use crate::model::{
    BossDisplay, CollectionDisplay, CollectionItemDisplay, QuestDisplayModel, QuestHeader,
    RageDisplay, StrikeCaption, StrikeSection,
};
use crate::progress::{QuestProgressSnapshot, NO_ACTIVE_STRIKE};
use crate::strikes::{self, normalize_active_index};
use tracing::{debug, trace};

/// Derives what the quest progress panel should show.
///
/// Absent or invalid inputs give [`QuestDisplayModel::Empty`], which tells the
/// renderer to keep whatever it showed before.
#[must_use]
pub fn derive(
    definition: Option<&QuestDefinition>,
    progress: Option<&QuestProgressSnapshot>,
) -> QuestDisplayModel {
    let (definition, progress) = match (definition, progress) {
        (Some(definition), Some(progress)) => (definition, progress),
        (definition, progress) => {
            debug!(
                has_definition = definition.is_some(),
                has_progress = progress.is_some(),
                "quest display empty: input missing"
            );
            return QuestDisplayModel::Empty;
        },
    };

    if !definition.is_valid() || !progress.is_valid() {
        debug!(
            quest = %definition.key,
            definition_valid = definition.is_valid(),
            progress_valid = progress.is_valid(),
            "quest display empty: input invalid"
        );
        return QuestDisplayModel::Empty;
    }

    let header = header(definition);
    let model = match definition.boss.as_ref() {
        Some(boss) if definition.is_boss_quest => {
            QuestDisplayModel::Boss(boss_display(header, boss, progress))
        },
        _ => QuestDisplayModel::Collection(collection_display(header, definition, progress)),
    };

    trace!(quest = %definition.key, state = ?model.state(), "derived quest display");
    model
}

fn header(definition: &QuestDefinition) -> QuestHeader {
    QuestHeader {
        description_text: definition.notes.clone(),
        image_key: image_keys::quest_image(&definition.key),
        separator_color: definition.colors.light,
    }
}

fn boss_display(
    header: QuestHeader,
    boss: &BossDefinition,
    progress: &QuestProgressSnapshot,
) -> BossDisplay {
    let rage = boss.rage.as_ref().map(|rage| RageDisplay {
        title: rage.title.clone(),
        meter: BarFill::new(progress.rage, rage.max_value),
        strikes: strike_section(progress),
    });

    BossDisplay {
        header,
        boss_name: boss.name.clone(),
        hp: BarFill::new(progress.hp, boss.max_hp),
        rage,
    }
}

fn strike_section(progress: &QuestProgressSnapshot) -> Option<StrikeSection> {
    if !progress.has_rage_strikes() {
        return None;
    }

    let total = progress.rage_strikes.len();
    let active = normalize_active_index(progress.active_rage_strike_index, total);
    if active.is_none() && progress.active_rage_strike_index != NO_ACTIVE_STRIKE {
        debug!(
            index = progress.active_rage_strike_index,
            total, "active rage strike index out of range, treating as none"
        );
    }

    Some(StrikeSection {
        caption: StrikeCaption::new(active, total),
        plan: strikes::plan(&progress.rage_strikes, progress.active_rage_strike_index),
    })
}

fn collection_display(
    header: QuestHeader,
    definition: &QuestDefinition,
    progress: &QuestProgressSnapshot,
) -> CollectionDisplay {
    for key in progress.collected.keys() {
        if definition.collect_target(key).is_none() {
            debug!(quest = %definition.key, target = %key, "skipping collected item with no target");
        }
    }

    let items = definition
        .collection_targets
        .iter()
        .map(|target| CollectionItemDisplay {
            key: target.key.clone(),
            display_text: target.display_text.clone(),
            current: progress.collected_count(&target.key),
            target: target.target_count,
            image_key: image_keys::collection_item_image(&definition.key, &target.key),
        })
        .collect();

    CollectionDisplay { header, items }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::{CollectionTarget, QuestColors, RageDefinition};
    use crate::model::DisplayState;
    use crate::progress::RageStrike;
    use questview_common::Rgba;

    fn boss_quest(rage: bool) -> QuestDefinition {
        let mut boss = BossDefinition::new("Dredwyrm", 500.0);
        if rage {
            boss = boss.with_rage(RageDefinition::new("Rage", 100.0));
        }
        QuestDefinition::boss("dredwyrm", boss).with_notes("It sleeps under the hills.")
    }

    #[test]
    fn test_missing_inputs_are_empty() {
        let quest = boss_quest(true);
        let progress = QuestProgressSnapshot::boss(10.0, 0.0);

        assert!(derive(None, None).is_empty());
        assert!(derive(Some(&quest), None).is_empty());
        assert!(derive(None, Some(&progress)).is_empty());
    }

    #[test]
    fn test_invalid_inputs_are_empty() {
        let quest = boss_quest(true);
        let progress = QuestProgressSnapshot::boss(10.0, 0.0);

        let stale = quest.clone().with_valid(false);
        assert!(derive(Some(&stale), Some(&progress)).is_empty());

        let loading = progress.clone().with_valid(false);
        assert!(derive(Some(&quest), Some(&loading)).is_empty());
    }

    #[test]
    fn test_boss_without_rage_ignores_rage_value() {
        let quest = boss_quest(false);
        let progress = QuestProgressSnapshot::boss(250.0, 99.0)
            .with_strikes(vec![RageStrike::hit("tavern")], 0);

        let QuestDisplayModel::Boss(boss) = derive(Some(&quest), Some(&progress)) else {
            panic!("expected boss display");
        };
        assert!(boss.rage.is_none());
        assert!(boss.strikes().is_none());
        assert!((boss.hp.fraction() - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_boss_zero_max_hp() {
        let quest = QuestDefinition::boss("ghost", BossDefinition::new("Ghost", 0.0));
        let progress = QuestProgressSnapshot::boss(40.0, 0.0);

        let QuestDisplayModel::Boss(boss) = derive(Some(&quest), Some(&progress)) else {
            panic!("expected boss display");
        };
        assert_eq!(boss.hp.fraction().to_bits(), 0.0f64.to_bits());
    }

    #[test]
    fn test_out_of_range_active_caption() {
        let quest = boss_quest(true);
        let progress = QuestProgressSnapshot::boss(100.0, 10.0).with_strikes(
            vec![RageStrike::hit("tavern"), RageStrike::pending("market")],
            5,
        );

        let QuestDisplayModel::Boss(boss) = derive(Some(&quest), Some(&progress)) else {
            panic!("expected boss display");
        };
        let section = boss.strikes().expect("strikes");
        assert_eq!(section.caption.to_string(), "0 of 2");
        assert!(section.plan.iter().all(|v| !v.is_active));
    }

    #[test]
    fn test_collection_skips_foreign_keys() {
        let quest = QuestDefinition::collection(
            "eggs",
            vec![CollectionTarget::new("egg", "Plain Egg", 10)],
        );
        let progress = QuestProgressSnapshot::collection([("egg", 3), ("stale", 9)]);

        let QuestDisplayModel::Collection(collection) = derive(Some(&quest), Some(&progress)) else {
            panic!("expected collection display");
        };
        assert_eq!(collection.items.len(), 1);
        assert_eq!(collection.items[0].current, 3);
        assert_eq!(collection.items[0].image_key, "quest_eggs_egg");
    }

    #[test]
    fn test_header_fields() {
        let light = Rgba::rgb(0xa0, 0xb0, 0xc0);
        let quest = boss_quest(false).with_colors(QuestColors {
            light: Some(light),
            ..QuestColors::default()
        });
        let progress = QuestProgressSnapshot::boss(1.0, 0.0);

        let model = derive(Some(&quest), Some(&progress));
        let header = model.header().expect("header");
        assert_eq!(header.description_text, "It sleeps under the hills.");
        assert_eq!(header.image_key, "quest_dredwyrm");
        assert_eq!(header.separator_color, Some(light));

        let plain = derive(Some(&boss_quest(false)), Some(&progress));
        assert_eq!(plain.header().expect("header").separator_color, None);
    }

    #[test]
    fn test_collection_quest_never_boss() {
        let quest = QuestDefinition::collection("eggs", Vec::new());
        let progress = QuestProgressSnapshot::boss(100.0, 100.0);

        let model = derive(Some(&quest), Some(&progress));
        assert_eq!(model.state(), DisplayState::Collection);
    }
}
