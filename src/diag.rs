//! Injectable observability collaborator.
//!
//! The pipeline reports progress and classification gaps through this trait
//! instead of logging inline, so the derivation stays pure and tests can
//! capture exactly what would have been reported.

// ---------------------------------------------------------------------------
// Diagnostics
// ---------------------------------------------------------------------------

pub trait Diagnostics {
    /// Type words the vocabulary could not place; the line was emitted with
    /// them appended last.
    fn unclassified_types(&self, card: &str, words: &[String]);

    /// Subtype words outside every category; the full alphabetized list was
    /// emitted verbatim.
    fn unclassified_subtypes(&self, card: &str, words: &[String]);

    /// One page of the set fetched and decoded.
    fn page_fetched(&self, page: u32, cards: usize);
}

/// Forwards everything to the `log` facade.
#[derive(Debug, Default)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn unclassified_types(&self, card: &str, words: &[String]) {
        log::warn!("{card}: type words not in the ordering table: {words:?}");
    }

    fn unclassified_subtypes(&self, card: &str, words: &[String]) {
        log::warn!("{card}: subtype words outside the vocabulary: {words:?}");
    }

    fn page_fetched(&self, page: u32, cards: usize) {
        log::info!("fetched page {page} ({cards} cards)");
    }
}

/// Reports nothing.
#[derive(Debug, Default)]
pub struct NullDiagnostics;

impl Diagnostics for NullDiagnostics {
    fn unclassified_types(&self, _: &str, _: &[String]) {}

    fn unclassified_subtypes(&self, _: &str, _: &[String]) {}

    fn page_fetched(&self, _: u32, _: usize) {}
}
