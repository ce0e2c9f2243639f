use std::collections::BTreeMap;

use crate::formatting::Formatting;
use crate::vocabulary::{Key, Vocabulary, SPECIAL_SYMBOLS};

/// Words and formatting rules used to build descriptions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub(crate) vocabulary: Vocabulary,
    pub(crate) formatting: Formatting,
    // code points spelled out with words, resolved from SPECIAL_SYMBOLS
    pub(crate) symbols: BTreeMap<char, Key>,
}

impl Config {
    pub fn new(vocabulary: Vocabulary, formatting: Formatting) -> Self {
        Self {
            vocabulary,
            formatting,
            symbols: SPECIAL_SYMBOLS.iter().copied().collect(),
        }
    }

    /// English words with default formatting
    pub fn english() -> Self {
        Self::new(Vocabulary::ENGLISH, Formatting::default())
    }

    /// German words with default formatting
    pub fn german() -> Self {
        Self::new(Vocabulary::GERMAN, Formatting::default())
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn formatting(&self) -> &Formatting {
        &self.formatting
    }

    /// Shortcut for [`Vocabulary::get`]
    #[inline]
    pub fn word(&self, key: Key) -> &str {
        self.vocabulary.get(key)
    }

    /// Returns configured word for the code point if it has one
    #[inline]
    pub(crate) fn special_symbol(&self, c: char) -> Option<&str> {
        self.symbols.get(&c).map(|&key| self.word(key))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::english()
    }
}
