//! MTG set inventory exporter.
//!
//! Pages through a card API to collect every card of a named set, derives the
//! display attributes each card prints with (color identity, supertype, type
//! line, subtype line), optionally resolves median prices, and writes one
//! pipe-delimited record per card to a text file.
//!
//! # Quick start
//!
//! ```no_run
//! use mtg_cardlist::{Cardlist, Mode};
//!
//! let cardlist = Cardlist::builder().build().unwrap();
//!
//! // Write KTK_cardlist.csv with cards and prices
//! let path = cardlist.export("ktk", Mode::Both).unwrap();
//! println!("wrote {}", path.display());
//! ```

pub mod config;
pub mod derive;
pub mod diag;
pub mod error;
pub mod fetch;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod price;

pub use config::{ColorlessStyle, SourceConfig, Vocabulary};
pub use error::{CardlistError, Result};
pub use fetch::{CardSource, HttpCardSource};
pub use pipeline::{Mode, Pipeline};

use std::path::{Path, PathBuf};
use std::time::Duration;

use diag::LogDiagnostics;

// ---------------------------------------------------------------------------
// CardlistBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`Cardlist`] exporter.
///
/// Use [`Cardlist::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](CardlistBuilder::build).
pub struct CardlistBuilder {
    source: SourceConfig,
    vocab: Vocabulary,
    colorless: ColorlessStyle,
    out_dir: PathBuf,
}

impl Default for CardlistBuilder {
    fn default() -> Self {
        Self {
            source: SourceConfig::default(),
            vocab: Vocabulary::builtin(),
            colorless: ColorlessStyle::default(),
            out_dir: PathBuf::from("."),
        }
    }
}

impl CardlistBuilder {
    /// Base URL of the card API.
    pub fn api_base(mut self, base: impl Into<String>) -> Self {
        self.source.api_base = base.into();
        self
    }

    /// Page size of the backing API generation.
    pub fn page_size(mut self, size: u32) -> Self {
        self.source.page_size = size;
        self
    }

    /// Index of the backing API's first page.
    pub fn first_page(mut self, first: u32) -> Self {
        self.source.first_page = first;
        self
    }

    /// HTTP request timeout. Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.source.timeout = timeout;
        self
    }

    /// How colorless non-artifact, non-land cards render.
    pub fn colorless(mut self, style: ColorlessStyle) -> Self {
        self.colorless = style;
        self
    }

    /// Substitute a newer type/subtype vocabulary.
    pub fn vocabulary(mut self, vocab: Vocabulary) -> Self {
        self.vocab = vocab;
        self
    }

    /// Directory the output file is written to. Defaults to the current
    /// directory.
    pub fn out_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.out_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Build the exporter, constructing the HTTP client.
    pub fn build(self) -> Result<Cardlist> {
        let source = HttpCardSource::new(&self.source)?;
        Ok(Cardlist {
            source,
            vocab: self.vocab,
            colorless: self.colorless,
            out_dir: self.out_dir,
        })
    }
}

// ---------------------------------------------------------------------------
// Cardlist
// ---------------------------------------------------------------------------

/// The main entry point: fetches a set and exports its record list.
///
/// Created via [`Cardlist::builder()`]. Custom observability or a different
/// [`CardSource`] can be injected by driving a [`Pipeline`] directly.
pub struct Cardlist {
    source: HttpCardSource,
    vocab: Vocabulary,
    colorless: ColorlessStyle,
    out_dir: PathBuf,
}

impl Cardlist {
    /// Create a new builder for configuring the exporter.
    pub fn builder() -> CardlistBuilder {
        CardlistBuilder::default()
    }

    /// Fetch `set` and return its formatted record lines, in fetch order.
    ///
    /// The set code is normalized to uppercase before use.
    pub fn collect(&self, set: &str, mode: Mode) -> Result<Vec<String>> {
        let set = set.to_uppercase();
        let diag = LogDiagnostics;
        Pipeline::new(&self.source, &self.vocab, self.colorless, &diag).run(&set, mode)
    }

    /// Fetch `set` and write its record list to the output directory.
    ///
    /// Returns the path written, `{SET}_cardlist.csv`.
    pub fn export(&self, set: &str, mode: Mode) -> Result<PathBuf> {
        let set = set.to_uppercase();
        let lines = self.collect(&set, mode)?;
        let path = output::output_path(&self.out_dir, &set, config::OUTPUT_SUFFIX);
        output::write_lines(&path, &lines)?;
        Ok(path)
    }
}
