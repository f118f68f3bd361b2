//! Record assembly: fetch order in, formatted lines out.

use crate::config::{ColorlessStyle, Vocabulary};
use crate::derive;
use crate::diag::Diagnostics;
use crate::error::{CardlistError, Result};
use crate::fetch::{self, CardSource};
use crate::models::{CardRecord, RawCard};
use crate::price;

// ---------------------------------------------------------------------------
// Mode
// ---------------------------------------------------------------------------

/// What a run updates: the card list, the price list, or both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Cards,
    Prices,
    Both,
}

impl Mode {
    /// Case-insensitive parse. Anything but `cards`, `prices` or `both` is a
    /// fatal invalid-mode error, raised before any fetch or output happens.
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "cards" => Ok(Mode::Cards),
            "prices" => Ok(Mode::Prices),
            "both" => Ok(Mode::Both),
            _ => Err(CardlistError::InvalidMode(s.to_string())),
        }
    }

    fn wants_printing(&self) -> bool {
        matches!(self, Mode::Cards | Mode::Both)
    }

    fn wants_price(&self) -> bool {
        matches!(self, Mode::Prices | Mode::Both)
    }
}

impl std::str::FromStr for Mode {
    type Err = CardlistError;

    fn from_str(s: &str) -> Result<Self> {
        Mode::parse(s)
    }
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// Drives fetch → derive → price → line for every card of a set.
///
/// Output preserves the API's page and in-page order; nothing is sorted or
/// deduplicated. Any fetch failure aborts the whole run, since a partial
/// list would silently under-report the set.
pub struct Pipeline<'a, S: CardSource + ?Sized, D: Diagnostics> {
    source: &'a S,
    vocab: &'a Vocabulary,
    colorless: ColorlessStyle,
    diag: &'a D,
}

impl<'a, S: CardSource + ?Sized, D: Diagnostics> Pipeline<'a, S, D> {
    pub fn new(
        source: &'a S,
        vocab: &'a Vocabulary,
        colorless: ColorlessStyle,
        diag: &'a D,
    ) -> Self {
        Self {
            source,
            vocab,
            colorless,
            diag,
        }
    }

    /// Produce the output lines for `set` under `mode`.
    pub fn run(&self, set: &str, mode: Mode) -> Result<Vec<String>> {
        let count = self.source.card_count(set)?;
        let mut lines = Vec::with_capacity(count as usize);
        for (offset, page) in fetch::pages(self.source, set, count).enumerate() {
            let cards = page?;
            self.diag
                .page_fetched(self.source.first_page() + offset as u32, cards.len());
            for card in &cards {
                let record = self.build_record(set, card, mode)?;
                record.ensure_delimiter_free()?;
                lines.push(match mode {
                    Mode::Cards => record.cards_line(),
                    Mode::Prices => record.prices_line(),
                    Mode::Both => record.both_line(),
                });
            }
        }
        Ok(lines)
    }

    /// Derive one card's record. Attributes are derived in every mode, as the
    /// source always did; printing data and price only when the mode prints
    /// them.
    fn build_record(&self, set: &str, card: &RawCard, mode: Mode) -> Result<CardRecord> {
        let types = derive::type_line(card, self.vocab)?;
        if !types.unclassified.is_empty() {
            self.diag.unclassified_types(&card.name, &types.unclassified);
        }
        let subtypes = derive::subtype_line(card, self.vocab);
        if !subtypes.unclassified.is_empty() {
            self.diag
                .unclassified_subtypes(&card.name, &subtypes.unclassified);
        }

        let (number, rarity) = if mode.wants_printing() {
            let edition = card.edition_in(set).ok_or_else(|| {
                CardlistError::MalformedCard {
                    name: card.name.clone(),
                    detail: format!("no printing in set {set}"),
                }
            })?;
            let number = edition.number.clone().ok_or_else(|| {
                CardlistError::MalformedCard {
                    name: card.name.clone(),
                    detail: "printing has no collector number".to_string(),
                }
            })?;
            let rarity = edition
                .rarity
                .as_deref()
                .and_then(|r| r.chars().next())
                .map(|c| c.to_uppercase().to_string())
                .ok_or_else(|| CardlistError::MalformedCard {
                    name: card.name.clone(),
                    detail: "printing has no rarity".to_string(),
                })?;
            (number, rarity)
        } else {
            (String::new(), String::new())
        };

        let price = mode.wants_price().then(|| price::resolve(set, card));

        Ok(CardRecord {
            number,
            name: card.name.clone(),
            rarity,
            color: derive::color(card, &types.line, self.colorless),
            supertype: derive::supertype(card),
            type_line: types.line,
            subtype_line: subtypes.line,
            price,
        })
    }
}
