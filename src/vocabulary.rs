use std::borrow::Cow;

/// Every word a description can be built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Key {
    And,
    Or,
    Between,
    Without,
    AnyChar,
    BeginLine,
    EndLine,
    BeginText,
    EndText,
    WordBoundary,
    NoWordBoundary,
    AtLeast,
    Times,
    To,
    From,
    Whitespace,
}

impl Key {
    pub const ALL: [Key; 16] = [
        Key::And,
        Key::Or,
        Key::Between,
        Key::Without,
        Key::AnyChar,
        Key::BeginLine,
        Key::EndLine,
        Key::BeginText,
        Key::EndText,
        Key::WordBoundary,
        Key::NoWordBoundary,
        Key::AtLeast,
        Key::Times,
        Key::To,
        Key::From,
        Key::Whitespace,
    ];
}

/// Code points that are spelled out with a word instead of being printed as is
pub(crate) const SPECIAL_SYMBOLS: &[(char, Key)] = &[(' ', Key::Whitespace)];

/// Translation table for all [`Key`]s
///
/// Start from one of the presets and override single words with struct update syntax:
///
/// ```rust
/// use regex_describe::Vocabulary;
///
/// let vocabulary = Vocabulary {
///     any_char: "any symbol".into(),
///     ..Vocabulary::ENGLISH
/// };
///
/// assert_eq!(vocabulary.any_char, "any symbol");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "deserialize",
    derive(serde::Deserialize),
    serde(deny_unknown_fields)
)]
pub struct Vocabulary {
    /// `x <and> y`
    pub and: Cow<'static, str>,
    /// `x <or> y`
    pub or: Cow<'static, str>,
    /// `<between> x and y`
    pub between: Cow<'static, str>,
    /// `any char <without> \n`
    pub without: Cow<'static, str>,
    pub any_char: Cow<'static, str>,
    pub begin_line: Cow<'static, str>,
    pub end_line: Cow<'static, str>,
    pub begin_text: Cow<'static, str>,
    pub end_text: Cow<'static, str>,
    /// `\b`
    pub word_boundary: Cow<'static, str>,
    /// `\B`
    pub no_word_boundary: Cow<'static, str>,
    /// `<at least> x times`
    pub at_least: Cow<'static, str>,
    /// `x-<times> y`
    pub times: Cow<'static, str>,
    /// `from 5 <to> 9`
    pub to: Cow<'static, str>,
    /// `<from> 5 to 9`
    pub from: Cow<'static, str>,
    /// Name of the space character
    pub whitespace: Cow<'static, str>,
}

impl Vocabulary {
    pub const ENGLISH: Vocabulary = Vocabulary {
        and: Cow::Borrowed("and"),
        or: Cow::Borrowed("or"),
        between: Cow::Borrowed("between"),
        without: Cow::Borrowed("without"),
        any_char: Cow::Borrowed("any char"),
        begin_line: Cow::Borrowed("start of line"),
        end_line: Cow::Borrowed("end of line"),
        begin_text: Cow::Borrowed("start of text"),
        end_text: Cow::Borrowed("end of text"),
        word_boundary: Cow::Borrowed("word boundary"),
        no_word_boundary: Cow::Borrowed("no word boundary"),
        at_least: Cow::Borrowed("at least"),
        times: Cow::Borrowed("times"),
        to: Cow::Borrowed("to"),
        from: Cow::Borrowed("from"),
        whitespace: Cow::Borrowed("whitespace"),
    };

    pub const GERMAN: Vocabulary = Vocabulary {
        and: Cow::Borrowed("und"),
        or: Cow::Borrowed("oder"),
        between: Cow::Borrowed("zwischen"),
        without: Cow::Borrowed("ohne"),
        any_char: Cow::Borrowed("Beliebiges Zeichen"),
        begin_line: Cow::Borrowed("Zeilenbeginn"),
        end_line: Cow::Borrowed("Zeilenende"),
        begin_text: Cow::Borrowed("Textanfang"),
        end_text: Cow::Borrowed("Textende"),
        word_boundary: Cow::Borrowed("Wortgrenze"),
        no_word_boundary: Cow::Borrowed("Keine Wortgrenze"),
        at_least: Cow::Borrowed("Mindestens"),
        times: Cow::Borrowed("mal"),
        to: Cow::Borrowed("Bis"),
        from: Cow::Borrowed("von"),
        whitespace: Cow::Borrowed("Leerzeichen"),
    };

    /// Looks up translation for given key
    pub fn get(&self, key: Key) -> &str {
        match key {
            Key::And => &self.and,
            Key::Or => &self.or,
            Key::Between => &self.between,
            Key::Without => &self.without,
            Key::AnyChar => &self.any_char,
            Key::BeginLine => &self.begin_line,
            Key::EndLine => &self.end_line,
            Key::BeginText => &self.begin_text,
            Key::EndText => &self.end_text,
            Key::WordBoundary => &self.word_boundary,
            Key::NoWordBoundary => &self.no_word_boundary,
            Key::AtLeast => &self.at_least,
            Key::Times => &self.times,
            Key::To => &self.to,
            Key::From => &self.from,
            Key::Whitespace => &self.whitespace,
        }
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::ENGLISH
    }
}

#[cfg(test)]
mod tests {
    use super::{Key, Vocabulary, SPECIAL_SYMBOLS};

    #[test]
    fn presets_are_complete() {
        for vocabulary in [Vocabulary::ENGLISH, Vocabulary::GERMAN] {
            for key in Key::ALL {
                assert!(!vocabulary.get(key).is_empty(), "{key:?} is empty");
            }
        }
    }

    #[test]
    fn get_reads_matching_field() {
        let vocabulary = Vocabulary {
            times: "fois".into(),
            ..Vocabulary::ENGLISH
        };

        assert_eq!(vocabulary.get(Key::Times), "fois");
        assert_eq!(vocabulary.get(Key::And), "and");
    }

    #[test]
    fn keys_are_distinct_words() {
        // no word is shared by two keys
        let english = Vocabulary::ENGLISH;
        let mut words: Vec<_> = Key::ALL.iter().map(|&key| english.get(key)).collect();
        words.sort_unstable();
        words.dedup();

        assert_eq!(words.len(), Key::ALL.len());
    }

    #[test]
    fn space_is_special() {
        assert!(SPECIAL_SYMBOLS.contains(&(' ', Key::Whitespace)));
    }
}
