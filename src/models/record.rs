use crate::error::{CardlistError, Result};
use crate::price;

// ---------------------------------------------------------------------------
// CardRecord — the derived display attributes of one card
// ---------------------------------------------------------------------------

/// The flat, derived representation of one card, ready to be formatted as an
/// output line. Built once per fetched payload and discarded after use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardRecord {
    /// Collector number of the printing in the requested set. Empty in
    /// price-only runs, which never print it.
    pub number: String,
    pub name: String,
    /// First letter of the printing's rarity, uppercased.
    pub rarity: String,
    pub color: String,
    /// Empty, or the first supertype capitalized with a trailing space.
    pub supertype: String,
    pub type_line: String,
    /// Empty, or an em-dash-prefixed canonical subtype line.
    pub subtype_line: String,
    pub price: Option<String>,
}

pub const DELIMITER: char = '|';

impl CardRecord {
    /// `number|name|rarity|color|supertype+type+subtype`
    pub fn cards_line(&self) -> String {
        format!(
            "{}|{}|{}|{}|{}{}{}",
            self.number,
            self.name,
            self.rarity,
            self.color,
            self.supertype,
            self.type_line,
            self.subtype_line
        )
    }

    /// `name|$price`
    pub fn prices_line(&self) -> String {
        format!(
            "{}|${}",
            self.name,
            self.price.as_deref().unwrap_or(price::UNRESOLVED)
        )
    }

    /// `number|name|rarity|color|supertype+type+subtype|$price`
    pub fn both_line(&self) -> String {
        format!(
            "{}|${}",
            self.cards_line(),
            self.price.as_deref().unwrap_or(price::UNRESOLVED)
        )
    }

    /// Reject any field containing the output delimiter.
    ///
    /// A card name with a `|` in it would shift every column after it, so the
    /// row is refused outright rather than written corrupted.
    pub fn ensure_delimiter_free(&self) -> Result<()> {
        let fields = [
            &self.number,
            &self.name,
            &self.rarity,
            &self.color,
            &self.supertype,
            &self.type_line,
            &self.subtype_line,
        ];
        for field in fields {
            if field.contains(DELIMITER) {
                return Err(CardlistError::MalformedCard {
                    name: self.name.clone(),
                    detail: format!("field {field:?} contains the {DELIMITER:?} delimiter"),
                });
            }
        }
        Ok(())
    }
}
