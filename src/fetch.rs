//! Paginated retrieval of a set's cards from the remote API.
//!
//! The fetch interface is a trait so either API generation (20-per-page
//! 1-indexed, or 100-per-page 0-indexed) can back the pipeline without the
//! derivation code noticing. Fetches are strictly sequential blocking calls;
//! there is no retry, and any failure belongs to the caller.

use reqwest::blocking::Client;

use crate::config::SourceConfig;
use crate::error::{CardlistError, Result};
use crate::models::{CardsPage, RawCard, SetsEnvelope};

// ---------------------------------------------------------------------------
// CardSource
// ---------------------------------------------------------------------------

/// A paginated source of card payloads for a set.
pub trait CardSource {
    /// Total number of cards in the set, from the metadata endpoint.
    fn card_count(&self, set: &str) -> Result<u32>;

    /// Fetch one page of cards. `page` uses this source's own page indexing.
    fn fetch_page(&self, set: &str, page: u32) -> Result<Vec<RawCard>>;

    /// Cards per page for this source generation.
    fn page_size(&self) -> u32;

    /// Index of this source's first page.
    fn first_page(&self) -> u32;
}

/// Number of pages needed to cover `card_count` cards.
pub fn page_count(card_count: u32, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    card_count.div_ceil(page_size)
}

// ---------------------------------------------------------------------------
// Pages — lazy sequential page iterator
// ---------------------------------------------------------------------------

/// Iterator over a set's pages, fetching each lazily in order.
///
/// Yields one `Result<Vec<RawCard>>` per page; the run restarts from the
/// first page simply by constructing a new iterator.
pub struct Pages<'a, S: CardSource + ?Sized> {
    source: &'a S,
    set: &'a str,
    next: u32,
    end: u32,
}

/// Lazy page sequence covering the whole set.
pub fn pages<'a, S: CardSource + ?Sized>(
    source: &'a S,
    set: &'a str,
    card_count: u32,
) -> Pages<'a, S> {
    let first = source.first_page();
    Pages {
        source,
        set,
        next: first,
        end: first + page_count(card_count, source.page_size()),
    }
}

impl<S: CardSource + ?Sized> Iterator for Pages<'_, S> {
    type Item = Result<Vec<RawCard>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let page = self.next;
        self.next += 1;
        Some(self.source.fetch_page(self.set, page))
    }
}

// ---------------------------------------------------------------------------
// HttpCardSource
// ---------------------------------------------------------------------------

/// Blocking HTTP implementation of [`CardSource`].
pub struct HttpCardSource {
    base: String,
    page_size: u32,
    first_page: u32,
    client: Client,
}

impl HttpCardSource {
    /// Build a source from connection parameters. The client enforces the
    /// configured timeout on every request.
    pub fn new(config: &SourceConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            base: config.api_base.trim_end_matches('/').to_string(),
            page_size: config.page_size,
            first_page: config.first_page,
            client,
        })
    }

    /// GET a URL and decode its JSON body.
    ///
    /// Transport and status failures surface as HTTP errors, a body that is
    /// not the expected shape as a JSON error; both are fatal to the run.
    fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let url = format!("{}/{}", self.base, path);
        let body = self
            .client
            .get(&url)
            .query(query)
            .send()?
            .error_for_status()?
            .text()?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl CardSource for HttpCardSource {
    fn card_count(&self, set: &str) -> Result<u32> {
        let envelope: SetsEnvelope = self.get_json("sets", &[("code", set)])?;
        envelope
            .sets
            .first()
            .map(|s| s.card_count)
            .ok_or_else(|| CardlistError::NotFound(format!("set {set}")))
    }

    fn fetch_page(&self, set: &str, page: u32) -> Result<Vec<RawCard>> {
        let envelope: CardsPage =
            self.get_json("cards", &[("set", set), ("page", &page.to_string())])?;
        Ok(envelope.cards)
    }

    fn page_size(&self) -> u32 {
        self.page_size
    }

    fn first_page(&self) -> u32 {
        self.first_page
    }
}
