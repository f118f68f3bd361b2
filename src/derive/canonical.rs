//! Canonical ordering of alphabetized type and subtype word lists.
//!
//! The API sorts word lists alphabetically; the game's display convention is
//! a fixed word order (`Legendary Artifact Creature`, never alphabetical).
//! Restoring it is closed-table membership lookup, not general sorting.

use crate::config::Vocabulary;

// ---------------------------------------------------------------------------
// Type order
// ---------------------------------------------------------------------------

/// Reorder capitalized type words into display order.
///
/// Returns the ordered words and, separately, the words the table does not
/// know. Unknown words are appended after the known ones in input order so
/// the line stays deterministic; the caller decides how loudly to complain.
pub fn order_types(words: &[String], vocab: &Vocabulary) -> (Vec<String>, Vec<String>) {
    let mut ordered: Vec<String> = vocab
        .type_order
        .iter()
        .filter(|t| words.contains(t))
        .cloned()
        .collect();
    let unclassified: Vec<String> = words
        .iter()
        .filter(|w| !vocab.type_order.contains(w))
        .cloned()
        .collect();
    ordered.extend(unclassified.iter().cloned());
    (ordered, unclassified)
}

// ---------------------------------------------------------------------------
// Subtype match
// ---------------------------------------------------------------------------

/// Which vocabulary categories a subtype list hit.
///
/// Slot order is primary race, then race, then class; only two slots ever
/// print, so a list hitting all three categories keeps the two
/// highest-precedence words. A doubly-matched category keeps its first-seen
/// word. One word outside every category abandons canonicalization for the
/// whole card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubtypeMatch {
    None,
    PrimaryOnly(String),
    RaceOnly(String),
    ClassOnly(String),
    PrimaryAndRace(String, String),
    PrimaryAndClass(String, String),
    RaceAndClass(String, String),
    Unclassifiable,
}

/// Classify capitalized subtype words against the vocabulary.
pub fn classify_subtypes(words: &[String], vocab: &Vocabulary) -> SubtypeMatch {
    let mut primary: Option<&String> = None;
    let mut race: Option<&String> = None;
    let mut class: Option<&String> = None;

    for word in words {
        if vocab.primary_races.contains(word) {
            primary.get_or_insert(word);
        } else if vocab.races.contains(word) {
            race.get_or_insert(word);
        } else if vocab.classes.contains(word) {
            class.get_or_insert(word);
        } else {
            return SubtypeMatch::Unclassifiable;
        }
    }

    match (primary, race, class) {
        (None, None, None) => SubtypeMatch::None,
        (Some(p), None, None) => SubtypeMatch::PrimaryOnly(p.clone()),
        (None, Some(r), None) => SubtypeMatch::RaceOnly(r.clone()),
        (None, None, Some(c)) => SubtypeMatch::ClassOnly(c.clone()),
        (Some(p), Some(r), _) => SubtypeMatch::PrimaryAndRace(p.clone(), r.clone()),
        (Some(p), None, Some(c)) => SubtypeMatch::PrimaryAndClass(p.clone(), c.clone()),
        (None, Some(r), Some(c)) => SubtypeMatch::RaceAndClass(r.clone(), c.clone()),
    }
}
