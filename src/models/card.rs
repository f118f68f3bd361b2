use serde::Deserialize;

// ---------------------------------------------------------------------------
// RawCard — one card as returned by the paginated cards endpoint
// ---------------------------------------------------------------------------

/// A card payload as the API serves it, before any derivation.
///
/// The word lists arrive alphabetized; `types` is semantically required but
/// modeled as `Option` so a missing field surfaces as a malformed-payload
/// error instead of failing the whole page decode.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCard {
    pub name: String,
    #[serde(default)]
    pub colors: Option<Vec<String>>,
    #[serde(default)]
    pub supertypes: Option<Vec<String>>,
    #[serde(default)]
    pub types: Option<Vec<String>>,
    #[serde(default)]
    pub subtypes: Option<Vec<String>>,
    #[serde(default)]
    pub editions: Vec<Edition>,
}

impl RawCard {
    /// The printing of this card in the given set, matched case-insensitively.
    pub fn edition_in(&self, set_id: &str) -> Option<&Edition> {
        self.editions
            .iter()
            .find(|e| e.set_id.eq_ignore_ascii_case(set_id))
    }
}

// ---------------------------------------------------------------------------
// Edition — a single printing of a card within a set
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct Edition {
    pub set_id: String,
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub rarity: Option<String>,
    #[serde(default)]
    pub price: Option<PriceInfo>,
}

/// Price statistics attached to a printing, in integer cents.
#[derive(Debug, Clone, Deserialize)]
pub struct PriceInfo {
    #[serde(default)]
    pub median: Option<i64>,
}

// ---------------------------------------------------------------------------
// API envelopes
// ---------------------------------------------------------------------------

/// One page of the cards endpoint.
#[derive(Debug, Deserialize)]
pub struct CardsPage {
    #[serde(default)]
    pub cards: Vec<RawCard>,
}

/// Response of the set metadata endpoint.
#[derive(Debug, Deserialize)]
pub struct SetsEnvelope {
    #[serde(default)]
    pub sets: Vec<SetInfo>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetInfo {
    pub card_count: u32,
}
