//! Attribute derivation tests: color identity, supertype, type and subtype
//! lines over the built-in vocabulary.

mod common;

use common::card;
use mtg_cardlist::config::{ColorlessStyle, Vocabulary};
use mtg_cardlist::derive;
use mtg_cardlist::CardlistError;
use serde_json::json;

// ---------------------------------------------------------------------------
// color
// ---------------------------------------------------------------------------

#[test]
fn single_color_is_spelled_out() {
    let c = card(json!({ "name": "Divination", "colors": ["blue"], "types": ["Sorcery"] }));
    assert_eq!(
        derive::color(&c, "Sorcery", ColorlessStyle::Named),
        "Blue"
    );
}

#[test]
fn single_color_is_never_abbreviated() {
    let c = card(json!({ "name": "Shock", "colors": ["Red"], "types": ["Instant"] }));
    assert_eq!(derive::color(&c, "Instant", ColorlessStyle::Named), "Red");
}

#[test]
fn multi_color_joins_letters_in_input_order() {
    let c = card(json!({
        "name": "Abzan Charm",
        "colors": ["White", "Black", "Green"],
        "types": ["Instant"]
    }));
    assert_eq!(derive::color(&c, "Instant", ColorlessStyle::Named), "W/B/G");
}

#[test]
fn blue_maps_to_u_in_multi_color() {
    let c = card(json!({
        "name": "Supreme Verdict",
        "colors": ["White", "Blue"],
        "types": ["Sorcery"]
    }));
    assert_eq!(derive::color(&c, "Sorcery", ColorlessStyle::Named), "W/U");
}

#[test]
fn blue_mapping_is_case_insensitive() {
    let c = card(json!({
        "name": "Izzet Charm",
        "colors": ["blue", "red"],
        "types": ["Instant"]
    }));
    assert_eq!(derive::color(&c, "Instant", ColorlessStyle::Named), "U/R");
}

#[test]
fn artifact_without_colors_renders_artifact() {
    let c = card(json!({ "name": "Juggernaut", "types": ["Artifact", "Creature"] }));
    assert_eq!(
        derive::color(&c, "Artifact Creature", ColorlessStyle::Named),
        "Artifact"
    );
}

#[test]
fn pure_land_renders_land() {
    let c = card(json!({ "name": "Wastes", "types": ["Land"] }));
    assert_eq!(derive::color(&c, "Land", ColorlessStyle::Named), "Land");
}

#[test]
fn colorless_defaults_to_the_word() {
    let c = card(json!({ "name": "Kozilek's Channeler", "types": ["Creature"] }));
    assert_eq!(
        derive::color(&c, "Creature", ColorlessStyle::Named),
        "Colorless"
    );
}

#[test]
fn colorless_can_render_empty() {
    let c = card(json!({ "name": "Kozilek's Channeler", "types": ["Creature"] }));
    assert_eq!(derive::color(&c, "Creature", ColorlessStyle::Empty), "");
}

#[test]
fn colored_card_ignores_artifact_fallback() {
    let c = card(json!({
        "name": "Sphinx of the Steel Wind",
        "colors": ["White", "Blue", "Black"],
        "types": ["Artifact", "Creature"]
    }));
    assert_eq!(
        derive::color(&c, "Artifact Creature", ColorlessStyle::Named),
        "W/U/B"
    );
}

// ---------------------------------------------------------------------------
// supertype
// ---------------------------------------------------------------------------

#[test]
fn no_supertypes_is_empty() {
    let c = card(json!({ "name": "Grizzly Bears", "types": ["Creature"] }));
    assert_eq!(derive::supertype(&c), "");
}

#[test]
fn supertype_is_capitalized_with_trailing_space() {
    let c = card(json!({
        "name": "Urborg",
        "supertypes": ["legendary"],
        "types": ["Land"]
    }));
    assert_eq!(derive::supertype(&c), "Legendary ");
}

#[test]
fn only_the_first_supertype_survives() {
    let c = card(json!({
        "name": "Dark Depths",
        "supertypes": ["Legendary", "Snow"],
        "types": ["Land"]
    }));
    assert_eq!(derive::supertype(&c), "Legendary ");
}

// ---------------------------------------------------------------------------
// type_line
// ---------------------------------------------------------------------------

#[test]
fn single_type_is_used_directly() {
    let vocab = Vocabulary::builtin();
    let c = card(json!({ "name": "Shock", "types": ["instant"] }));
    let derived = derive::type_line(&c, &vocab).unwrap();
    assert_eq!(derived.line, "Instant");
    assert!(derived.unclassified.is_empty());
}

#[test]
fn alphabetized_types_are_reordered() {
    let vocab = Vocabulary::builtin();
    let c = card(json!({
        "name": "Bident of Thassa",
        "types": ["Artifact", "Enchantment"]
    }));
    let derived = derive::type_line(&c, &vocab).unwrap();
    assert_eq!(derived.line, "Enchantment Artifact");
}

#[test]
fn full_type_table_order() {
    let vocab = Vocabulary::builtin();
    let c = card(json!({
        "name": "Mystery",
        "types": ["Artifact", "Creature", "Enchantment"]
    }));
    let derived = derive::type_line(&c, &vocab).unwrap();
    assert_eq!(derived.line, "Enchantment Artifact Creature");
}

#[test]
fn unknown_type_word_is_appended_and_reported() {
    let vocab = Vocabulary::builtin();
    let c = card(json!({
        "name": "Bitterblossom",
        "types": ["Enchantment", "Tribal"]
    }));
    let derived = derive::type_line(&c, &vocab).unwrap();
    assert_eq!(derived.line, "Enchantment Tribal");
    assert_eq!(derived.unclassified, vec!["Tribal".to_string()]);
}

#[test]
fn missing_types_is_malformed() {
    let vocab = Vocabulary::builtin();
    let c = card(json!({ "name": "Broken" }));
    let err = derive::type_line(&c, &vocab).unwrap_err();
    assert!(matches!(err, CardlistError::MalformedCard { .. }));
}

#[test]
fn empty_types_is_malformed() {
    let vocab = Vocabulary::builtin();
    let c = card(json!({ "name": "Broken", "types": [] }));
    assert!(derive::type_line(&c, &vocab).is_err());
}

// ---------------------------------------------------------------------------
// subtype_line
// ---------------------------------------------------------------------------

#[test]
fn no_subtypes_is_empty() {
    let vocab = Vocabulary::builtin();
    let c = card(json!({ "name": "Shock", "types": ["Instant"] }));
    assert_eq!(derive::subtype_line(&c, &vocab).line, "");
}

#[test]
fn single_subtype_gets_the_em_dash() {
    let vocab = Vocabulary::builtin();
    let c = card(json!({
        "name": "Grizzly Bears",
        "types": ["Creature"],
        "subtypes": ["bear"]
    }));
    assert_eq!(derive::subtype_line(&c, &vocab).line, " — Bear");
}

#[test]
fn race_precedes_class() {
    let vocab = Vocabulary::builtin();
    let c = card(json!({
        "name": "Snapcaster Mage",
        "types": ["Creature"],
        "subtypes": ["Human", "Wizard"]
    }));
    assert_eq!(derive::subtype_line(&c, &vocab).line, " — Human Wizard");
}

#[test]
fn primary_race_precedes_class_despite_alphabetical_input() {
    let vocab = Vocabulary::builtin();
    // Alphabetized input puts the class word first
    let c = card(json!({
        "name": "Corpse Augur",
        "types": ["Creature"],
        "subtypes": ["Wizard", "Zombie"]
    }));
    assert_eq!(derive::subtype_line(&c, &vocab).line, " — Zombie Wizard");
}

#[test]
fn unclassified_subtype_keeps_the_full_input_verbatim() {
    let vocab = Vocabulary::builtin();
    let c = card(json!({
        "name": "Experiment",
        "types": ["Creature"],
        "subtypes": ["Aardvark", "Beeble", "Wizard"]
    }));
    let derived = derive::subtype_line(&c, &vocab);
    assert_eq!(derived.line, " — Aardvark Beeble Wizard");
    assert_eq!(
        derived.unclassified,
        vec!["Aardvark".to_string(), "Beeble".to_string()]
    );
}
