//! # Tool Catalog
//!
//! Static navigation and route metadata: which tools exist, which category
//! each lives under, the related-tools lookup, and the sitemap entries. This
//! is the only process-wide state in the crate and all of it is immutable,
//! built once behind `once_cell::sync::Lazy`.
//!
//! ## Example
//!
//! ```rust
//! use toolpack_core::catalog::{Category, ToolId};
//!
//! assert_eq!(ToolId::TipCalculator.path(), "/finance/tip-calculator");
//! assert_eq!(ToolId::DiceRoller.category(), Category::Generators);
//! assert!(ToolId::DiceRoller.related().contains(&ToolId::RandomNumber));
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Site categories; each tool route is grouped under one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Finance,
    Health,
    Converters,
    Generators,
    Text,
    #[serde(rename = "datetime")]
    DateTime,
    Business,
    Calculators,
}

impl Category {
    /// All categories in navigation order
    pub const ALL: [Category; 8] = [
        Category::Finance,
        Category::Health,
        Category::Converters,
        Category::Generators,
        Category::Text,
        Category::DateTime,
        Category::Business,
        Category::Calculators,
    ];

    /// URL path segment for this category
    pub fn slug(&self) -> &'static str {
        match self {
            Category::Finance => "finance",
            Category::Health => "health",
            Category::Converters => "converters",
            Category::Generators => "generators",
            Category::Text => "text",
            Category::DateTime => "datetime",
            Category::Business => "business",
            Category::Calculators => "calculators",
        }
    }

    /// Display name for navigation
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Finance => "Finance",
            Category::Health => "Health",
            Category::Converters => "Converters",
            Category::Generators => "Generators",
            Category::Text => "Text",
            Category::DateTime => "Date & Time",
            Category::Business => "Business",
            Category::Calculators => "Calculators",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Identifier for every tool the site offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolId {
    #[serde(rename = "tip-calculator")]
    TipCalculator,
    #[serde(rename = "age-calculator")]
    AgeCalculator,
    #[serde(rename = "word-counter")]
    WordCounter,
    #[serde(rename = "qr-code-generator")]
    QrCode,
    #[serde(rename = "dice-roller")]
    DiceRoller,
    #[serde(rename = "card-shuffler")]
    CardShuffler,
    #[serde(rename = "random-number-generator")]
    RandomNumber,
    #[serde(rename = "random-picker")]
    RandomPicker,
}

impl ToolId {
    /// All tools in catalog order
    pub const ALL: [ToolId; 8] = [
        ToolId::TipCalculator,
        ToolId::AgeCalculator,
        ToolId::WordCounter,
        ToolId::QrCode,
        ToolId::DiceRoller,
        ToolId::CardShuffler,
        ToolId::RandomNumber,
        ToolId::RandomPicker,
    ];

    /// URL path segment for this tool
    pub fn slug(&self) -> &'static str {
        match self {
            ToolId::TipCalculator => "tip-calculator",
            ToolId::AgeCalculator => "age-calculator",
            ToolId::WordCounter => "word-counter",
            ToolId::QrCode => "qr-code-generator",
            ToolId::DiceRoller => "dice-roller",
            ToolId::CardShuffler => "card-shuffler",
            ToolId::RandomNumber => "random-number-generator",
            ToolId::RandomPicker => "random-picker",
        }
    }

    /// Page title
    pub fn title(&self) -> &'static str {
        match self {
            ToolId::TipCalculator => "Tip Calculator",
            ToolId::AgeCalculator => "Age Calculator",
            ToolId::WordCounter => "Word Counter",
            ToolId::QrCode => "QR Code Generator",
            ToolId::DiceRoller => "Dice Roller",
            ToolId::CardShuffler => "Card Shuffler",
            ToolId::RandomNumber => "Random Number Generator",
            ToolId::RandomPicker => "Random Picker",
        }
    }

    /// Meta description for search engines
    pub fn description(&self) -> &'static str {
        match self {
            ToolId::TipCalculator => {
                "Calculate the tip and split the bill between any number of people."
            }
            ToolId::AgeCalculator => {
                "Work out the exact age between two dates in years, months, and days."
            }
            ToolId::WordCounter => {
                "Count words, characters, sentences, and paragraphs with reading time."
            }
            ToolId::QrCode => "Generate a QR code image from any text or URL.",
            ToolId::DiceRoller => "Roll up to ten dice of any standard kind.",
            ToolId::CardShuffler => "Shuffle a 52-card or Piquet deck and deal cards.",
            ToolId::RandomNumber => {
                "Draw random numbers: uniform ranges, lotto digits, or weighted picks."
            }
            ToolId::RandomPicker => "Pick random winners from a list or divide it into groups.",
        }
    }

    /// Category this tool's route is grouped under
    pub fn category(&self) -> Category {
        match self {
            ToolId::TipCalculator => Category::Finance,
            ToolId::AgeCalculator => Category::DateTime,
            ToolId::WordCounter => Category::Text,
            ToolId::QrCode
            | ToolId::DiceRoller
            | ToolId::CardShuffler
            | ToolId::RandomNumber
            | ToolId::RandomPicker => Category::Generators,
        }
    }

    /// Canonical route path: `/<category>/<slug>`
    pub fn path(&self) -> String {
        format!("/{}/{}", self.category().slug(), self.slug())
    }

    /// Short list of related tools shown beneath each page
    pub fn related(&self) -> &'static [ToolId] {
        match self {
            ToolId::TipCalculator => &[ToolId::RandomPicker, ToolId::AgeCalculator],
            ToolId::AgeCalculator => &[ToolId::TipCalculator, ToolId::WordCounter],
            ToolId::WordCounter => &[ToolId::QrCode, ToolId::RandomPicker],
            ToolId::QrCode => &[ToolId::WordCounter, ToolId::RandomNumber],
            ToolId::DiceRoller => &[ToolId::RandomNumber, ToolId::CardShuffler],
            ToolId::CardShuffler => &[ToolId::DiceRoller, ToolId::RandomPicker],
            ToolId::RandomNumber => &[ToolId::DiceRoller, ToolId::RandomPicker],
            ToolId::RandomPicker => &[ToolId::RandomNumber, ToolId::CardShuffler],
        }
    }
}

impl std::fmt::Display for ToolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// How often a sitemap entry is expected to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Weekly,
    Monthly,
    Yearly,
}

/// One `<url>` entry of the sitemap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SitemapEntry {
    /// Route path relative to the site root
    pub loc: String,

    /// Crawl priority hint, 0.0 to 1.0
    pub priority: f64,

    /// Change frequency hint
    pub change_frequency: ChangeFrequency,
}

/// Sitemap entries for every route, built once from the fixed tool list.
pub static SITEMAP: Lazy<Vec<SitemapEntry>> = Lazy::new(|| {
    let mut entries = vec![SitemapEntry {
        loc: "/".to_string(),
        priority: 1.0,
        change_frequency: ChangeFrequency::Weekly,
    }];
    entries.extend(ToolId::ALL.iter().map(|tool| SitemapEntry {
        loc: tool.path(),
        priority: 0.8,
        change_frequency: ChangeFrequency::Monthly,
    }));
    entries
});
