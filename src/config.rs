//! Source configuration and the versioned type/subtype vocabulary.
//!
//! Page size and first page index are quirks of the backing API generation
//! (20-per-page 1-indexed vs 100-per-page 0-indexed), so they live here as
//! configuration rather than as constants inside the fetch loop. The same
//! goes for the card vocabulary: the game's word lists grow with every
//! release, so the ordering algorithm takes them as swappable data.

use std::collections::HashSet;
use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "http://api.mtgapi.com/v2";
pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const DEFAULT_FIRST_PAGE: u32 = 1;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const OUTPUT_SUFFIX: &str = "_cardlist.csv";

// ---------------------------------------------------------------------------
// SourceConfig
// ---------------------------------------------------------------------------

/// Connection parameters for a paginated card source.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// Base URL of the card API, without a trailing slash.
    pub api_base: String,
    /// Cards returned per page by this API generation.
    pub page_size: u32,
    /// Index of the first page (1 for the original source, 0 for its successor).
    pub first_page: u32,
    /// HTTP request timeout. The API is an external dependency outside our
    /// control, so every call gets a deadline.
    pub timeout: Duration,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            first_page: DEFAULT_FIRST_PAGE,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

// ---------------------------------------------------------------------------
// ColorlessStyle
// ---------------------------------------------------------------------------

/// How to render a card that is neither colored, an artifact nor a land.
///
/// The source program's revisions disagreed: some printed `Colorless`, some
/// left the field empty. `Named` is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorlessStyle {
    #[default]
    Named,
    Empty,
}

impl ColorlessStyle {
    pub fn render(&self) -> &'static str {
        match self {
            ColorlessStyle::Named => "Colorless",
            ColorlessStyle::Empty => "",
        }
    }
}

// ---------------------------------------------------------------------------
// Vocabulary
// ---------------------------------------------------------------------------

/// Display order for the base card types. The API alphabetizes its word
/// lists; the game's convention is this order.
fn type_order() -> Vec<&'static str> {
    vec!["Enchantment", "Artifact", "Creature"]
}

/// Subtype words that always print before any race or class word.
fn primary_races() -> HashSet<&'static str> {
    HashSet::from(["Plant", "Zombie"])
}

fn races() -> HashSet<&'static str> {
    HashSet::from([
        "Angel", "Bird", "Cat", "Demon", "Dragon", "Dwarf", "Elemental",
        "Elf", "Giant", "Goblin", "Human", "Insect", "Kithkin", "Merfolk",
        "Minotaur", "Ogre", "Orc", "Spider", "Spirit", "Treefolk", "Troll",
        "Vampire", "Wolf",
    ])
}

fn classes() -> HashSet<&'static str> {
    HashSet::from([
        "Advisor", "Archer", "Artificer", "Assassin", "Barbarian",
        "Berserker", "Cleric", "Druid", "Knight", "Monk", "Ninja", "Pirate",
        "Rogue", "Scout", "Shaman", "Soldier", "Warrior", "Wizard",
    ])
}

/// Versioned word tables driving type and subtype ordering.
///
/// The built-in tables cover the sets the original inventory tracked; callers
/// can substitute newer vocabularies without touching the ordering code.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    pub version: String,
    pub type_order: Vec<String>,
    pub primary_races: HashSet<String>,
    pub races: HashSet<String>,
    pub classes: HashSet<String>,
}

impl Vocabulary {
    pub fn new(
        version: impl Into<String>,
        type_order: Vec<String>,
        primary_races: HashSet<String>,
        races: HashSet<String>,
        classes: HashSet<String>,
    ) -> Self {
        Self {
            version: version.into(),
            type_order,
            primary_races,
            races,
            classes,
        }
    }

    /// The built-in word tables.
    pub fn builtin() -> Self {
        Self::new(
            "builtin-1",
            type_order().into_iter().map(str::to_string).collect(),
            primary_races().into_iter().map(str::to_string).collect(),
            races().into_iter().map(str::to_string).collect(),
            classes().into_iter().map(str::to_string).collect(),
        )
    }

    /// Whether a capitalized subtype word belongs to any category.
    pub fn knows_subtype(&self, word: &str) -> bool {
        self.primary_races.contains(word)
            || self.races.contains(word)
            || self.classes.contains(word)
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::builtin()
    }
}
