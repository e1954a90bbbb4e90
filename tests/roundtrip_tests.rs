use proptest::prelude::*;

use sv::core::skill::{Skill, SkillKind};
use sv::core::store::SkillStore;

fn arb_kind() -> impl Strategy<Value = SkillKind> {
    prop_oneof![Just(SkillKind::Soft), Just(SkillKind::Hard)]
}

fn arb_skill() -> impl Strategy<Value = Skill> {
    (
        r"[A-Za-z][A-Za-z0-9 +#\-]{0,20}",
        arb_kind(),
        0i64..=100,
        ".{0,60}",
    )
        .prop_map(|(name, kind, level, description)| {
            Skill::new(kind, name, level, description).unwrap()
        })
}

fn arb_store() -> impl Strategy<Value = SkillStore> {
    prop::collection::btree_map(
        r"[A-Za-z][A-Za-z0-9 ]{0,12}",
        prop::collection::vec(arb_skill(), 0..5),
        0..4,
    )
    .prop_map(|categories| {
        let mut store = SkillStore::new();
        for (name, skills) in categories {
            store.add_category(name.clone());
            let category = store.get_category_mut(&name).unwrap();
            for skill in skills {
                category.add_skill(skill);
            }
        }
        store
    })
}

proptest! {
    #[test]
    fn document_round_trip_is_lossless(store in arb_store()) {
        let document = store.to_document();
        let reloaded = SkillStore::from_document(document.clone()).unwrap();
        prop_assert_eq!(reloaded.to_document(), document);

        // Re-derivation reproduces the original rendering.
        for category in store.categories() {
            let twin_category = reloaded.get_category(category.name()).unwrap();
            for skill in category.skills() {
                let twin = twin_category.get_skill(skill.name()).unwrap();
                prop_assert_eq!(twin.metaphor(), skill.metaphor());
                prop_assert_eq!(twin.kind(), skill.kind());
                prop_assert_eq!(twin.description(), skill.description());
            }
        }
    }

    #[test]
    fn json_round_trip_is_lossless(store in arb_store()) {
        let json = serde_json::to_string_pretty(&store.to_document()).unwrap();
        let document = serde_json::from_str(&json).unwrap();
        let reloaded = SkillStore::from_document(document).unwrap();
        prop_assert_eq!(reloaded.to_document(), store.to_document());
    }

    #[test]
    fn valid_levels_always_construct(level in 0i64..=100, kind in arb_kind()) {
        let skill = Skill::new(kind, "Skill", level, "").unwrap();
        prop_assert_eq!(i64::from(skill.level()), level);
    }

    #[test]
    fn invalid_levels_never_construct(
        level in prop_oneof![i64::MIN..0i64, 101i64..i64::MAX],
        kind in arb_kind(),
    ) {
        prop_assert!(Skill::new(kind, "Skill", level, "").is_err());
    }

    #[test]
    fn failed_update_preserves_level_and_rendering(
        initial in 0i64..=100,
        bad in prop_oneof![i64::MIN..0i64, 101i64..i64::MAX],
        kind in arb_kind(),
    ) {
        let mut skill = Skill::new(kind, "Skill", initial, "").unwrap();
        let before = skill.metaphor();

        prop_assert!(skill.update_level(bad).is_err());
        prop_assert_eq!(i64::from(skill.level()), initial);
        prop_assert_eq!(skill.metaphor(), before);
    }

    #[test]
    fn metaphor_is_a_pure_function_of_level(level in 0i64..=100, kind in arb_kind()) {
        let constructed = Skill::new(kind, "A", level, "x").unwrap();
        let mut updated = Skill::new(kind, "B", 0, "y").unwrap();
        updated.update_level(level).unwrap();
        prop_assert_eq!(constructed.metaphor(), updated.metaphor());
    }
}
