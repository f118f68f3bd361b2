//! Pure derivation of display attributes from a raw card payload.
//!
//! Every function here is side-effect free: ordering problems are returned as
//! data (the unclassified word lists) and reported by the pipeline, so the
//! derivation itself can be tested without any logging in place.

pub mod canonical;

use crate::config::{ColorlessStyle, Vocabulary};
use crate::error::{CardlistError, Result};
use crate::models::RawCard;

use canonical::SubtypeMatch;

/// First character uppercased, the rest lowercased.
pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// The single-letter abbreviation used in multi-color identities.
/// `blue` maps to `U`; every other color is its first letter.
fn color_letter(word: &str) -> String {
    if word.eq_ignore_ascii_case("blue") {
        "U".to_string()
    } else {
        word.chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// Color identity
// ---------------------------------------------------------------------------

/// Derive the color identity of a card, given its already-derived type line.
///
/// A single color is spelled out in full (`Blue`); two or more collapse to
/// `/`-joined letters in the order the payload lists them (`W/U`). The
/// asymmetry is deliberate and matches the inventory format this tool feeds.
/// Colorless cards fall through to `Artifact`, `Land` or the configured
/// colorless rendering.
pub fn color(card: &RawCard, type_line: &str, colorless: ColorlessStyle) -> String {
    match card.colors.as_deref() {
        Some([only]) => capitalize(only),
        Some(colors @ [_, _, ..]) => colors
            .iter()
            .map(|c| color_letter(c))
            .collect::<Vec<_>>()
            .join("/"),
        _ => {
            if type_line.split_whitespace().any(|w| w == "Artifact") {
                "Artifact".to_string()
            } else if type_line == "Land" {
                "Land".to_string()
            } else {
                colorless.render().to_string()
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Supertype
// ---------------------------------------------------------------------------

/// Empty, or the first supertype capitalized with a trailing space.
///
/// Cards carrying more than one supertype keep only the first; the rest are
/// dropped. Known limitation carried over from the inventory format.
pub fn supertype(card: &RawCard) -> String {
    match card.supertypes.as_deref() {
        Some([first, ..]) => format!("{} ", capitalize(first)),
        _ => String::new(),
    }
}

// ---------------------------------------------------------------------------
// Type line
// ---------------------------------------------------------------------------

/// A derived line plus the words the vocabulary could not place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedLine {
    pub line: String,
    pub unclassified: Vec<String>,
}

/// Capitalized, space-joined types in canonical display order.
///
/// A card without a `types` list cannot be formatted at all, so that is a
/// malformed payload rather than a warning.
pub fn type_line(card: &RawCard, vocab: &Vocabulary) -> Result<DerivedLine> {
    let types = match card.types.as_deref() {
        Some(types) if !types.is_empty() => types,
        _ => {
            return Err(CardlistError::MalformedCard {
                name: card.name.clone(),
                detail: "missing types".to_string(),
            })
        }
    };
    let words: Vec<String> = types.iter().map(|t| capitalize(t)).collect();
    if let [only] = words.as_slice() {
        return Ok(DerivedLine {
            line: only.clone(),
            unclassified: Vec::new(),
        });
    }
    let (ordered, unclassified) = canonical::order_types(&words, vocab);
    Ok(DerivedLine {
        line: ordered.join(" "),
        unclassified,
    })
}

// ---------------------------------------------------------------------------
// Subtype line
// ---------------------------------------------------------------------------

/// Empty, or `" — "` followed by the canonical subtype words.
///
/// Two or more subtypes go through the two-slot canonicalizer; if any word
/// falls outside the vocabulary the full alphabetized input is kept verbatim
/// and the words are reported back as unclassified.
pub fn subtype_line(card: &RawCard, vocab: &Vocabulary) -> DerivedLine {
    let subtypes = match card.subtypes.as_deref() {
        Some(subtypes) if !subtypes.is_empty() => subtypes,
        _ => {
            return DerivedLine {
                line: String::new(),
                unclassified: Vec::new(),
            }
        }
    };
    let words: Vec<String> = subtypes.iter().map(|s| capitalize(s)).collect();
    if let [only] = words.as_slice() {
        return DerivedLine {
            line: format!(" — {only}"),
            unclassified: Vec::new(),
        };
    }
    match canonical::classify_subtypes(&words, vocab) {
        SubtypeMatch::None => DerivedLine {
            line: String::new(),
            unclassified: Vec::new(),
        },
        SubtypeMatch::PrimaryOnly(w)
        | SubtypeMatch::RaceOnly(w)
        | SubtypeMatch::ClassOnly(w) => DerivedLine {
            line: format!(" — {w}"),
            unclassified: Vec::new(),
        },
        SubtypeMatch::PrimaryAndRace(a, b)
        | SubtypeMatch::PrimaryAndClass(a, b)
        | SubtypeMatch::RaceAndClass(a, b) => DerivedLine {
            line: format!(" — {a} {b}"),
            unclassified: Vec::new(),
        },
        SubtypeMatch::Unclassifiable => {
            let unclassified = words
                .iter()
                .filter(|w| !vocab.knows_subtype(w))
                .cloned()
                .collect();
            DerivedLine {
                line: format!(" — {}", words.join(" ")),
                unclassified,
            }
        }
    }
}
