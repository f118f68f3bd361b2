//! Shared test fixtures for the mtg-cardlist integration tests.
//!
//! Provides JSON-backed card builders, an in-memory `CardSource` that serves
//! prebuilt pages, and a `Diagnostics` impl that records what was reported.

#![allow(dead_code)]

use std::cell::RefCell;

use mtg_cardlist::diag::Diagnostics;
use mtg_cardlist::error::{CardlistError, Result};
use mtg_cardlist::fetch::CardSource;
use mtg_cardlist::models::RawCard;
use serde_json::json;

/// Deserialize a card from inline JSON, exactly as a page decode would.
pub fn card(value: serde_json::Value) -> RawCard {
    serde_json::from_value(value).unwrap()
}

/// The golden fixture: a vanilla blue creature numbered 042, printed in KTK
/// at a median of 100 cents.
pub fn test_card() -> RawCard {
    card(json!({
        "name": "Test Card",
        "colors": ["Blue"],
        "types": ["Creature"],
        "editions": [
            {
                "set_id": "KTK",
                "number": "042",
                "rarity": "Rare",
                "price": { "median": 100 }
            }
        ]
    }))
}

// ---------------------------------------------------------------------------
// FakeSource
// ---------------------------------------------------------------------------

/// Serves prebuilt pages and records which page indices were requested.
pub struct FakeSource {
    pub count: u32,
    pub pages: Vec<Vec<RawCard>>,
    pub page_size: u32,
    pub first_page: u32,
    pub requested: RefCell<Vec<u32>>,
}

impl FakeSource {
    /// A single-page source holding `cards`.
    pub fn single_page(cards: Vec<RawCard>) -> Self {
        let count = cards.len() as u32;
        Self::new(count, vec![cards], 20, 1)
    }

    pub fn new(count: u32, pages: Vec<Vec<RawCard>>, page_size: u32, first_page: u32) -> Self {
        Self {
            count,
            pages,
            page_size,
            first_page,
            requested: RefCell::new(Vec::new()),
        }
    }
}

impl CardSource for FakeSource {
    fn card_count(&self, _set: &str) -> Result<u32> {
        Ok(self.count)
    }

    fn fetch_page(&self, _set: &str, page: u32) -> Result<Vec<RawCard>> {
        self.requested.borrow_mut().push(page);
        let index = (page - self.first_page) as usize;
        self.pages
            .get(index)
            .cloned()
            .ok_or_else(|| CardlistError::NotFound(format!("page {page}")))
    }

    fn page_size(&self) -> u32 {
        self.page_size
    }

    fn first_page(&self) -> u32 {
        self.first_page
    }
}

// ---------------------------------------------------------------------------
// RecordingDiagnostics
// ---------------------------------------------------------------------------

/// Captures every report instead of logging it.
#[derive(Default)]
pub struct RecordingDiagnostics {
    pub unclassified_types: RefCell<Vec<(String, Vec<String>)>>,
    pub unclassified_subtypes: RefCell<Vec<(String, Vec<String>)>>,
    pub pages: RefCell<Vec<(u32, usize)>>,
}

impl Diagnostics for RecordingDiagnostics {
    fn unclassified_types(&self, card: &str, words: &[String]) {
        self.unclassified_types
            .borrow_mut()
            .push((card.to_string(), words.to_vec()));
    }

    fn unclassified_subtypes(&self, card: &str, words: &[String]) {
        self.unclassified_subtypes
            .borrow_mut()
            .push((card.to_string(), words.to_vec()));
    }

    fn page_fetched(&self, page: u32, cards: usize) {
        self.pages.borrow_mut().push((page, cards));
    }
}
