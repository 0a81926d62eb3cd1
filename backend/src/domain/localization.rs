//! Language tags and locale-aware title casing.
//!
//! Books carry a BCP-47 language tag. Presenters use it to title-case book
//! titles: the first letter of each word is upper-cased and the rest of the
//! word lower-cased, honouring the handful of languages whose casing differs
//! from the Unicode defaults. Words follow Unicode word boundaries, so
//! combining marks and elisions such as "don't" stay inside their word.

use std::str::FromStr;

use unic_langid::LanguageIdentifier;
use unicode_segmentation::UnicodeSegmentation;

/// Language tag assigned to every newly created book.
pub const DEFAULT_LANGUAGE_TAG: &str = "en";

/// Errors returned by [`LanguageTag::parse`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LanguageTagError {
    /// The tag is empty once trimmed.
    #[error("language tag must not be empty")]
    Empty,
    /// The tag does not follow BCP-47 syntax.
    #[error("language tag '{tag}' is not well formed")]
    Malformed { tag: String },
}

/// Parsed BCP-47 language tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageTag(LanguageIdentifier);

impl LanguageTag {
    /// Parse and validate a language tag.
    ///
    /// # Examples
    /// ```
    /// use bookshop::domain::LanguageTag;
    ///
    /// assert!(LanguageTag::parse("en-GB").is_ok());
    /// assert!(LanguageTag::parse("").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, LanguageTagError> {
        if raw.trim().is_empty() {
            return Err(LanguageTagError::Empty);
        }
        LanguageIdentifier::from_str(raw)
            .map(Self)
            .map_err(|_| LanguageTagError::Malformed {
                tag: raw.to_owned(),
            })
    }

    /// Primary language subtag, lower-cased (for example `en`).
    pub fn language(&self) -> &str {
        self.0.language.as_str()
    }

    /// Title-case `text` using this language's casing rules.
    ///
    /// # Examples
    /// ```
    /// use bookshop::domain::LanguageTag;
    ///
    /// let english = LanguageTag::parse("en").expect("valid tag");
    /// assert_eq!(english.title_case("a book"), "A Book");
    ///
    /// let dutch = LanguageTag::parse("nl").expect("valid tag");
    /// assert_eq!(dutch.title_case("ijsselmeer"), "IJsselmeer");
    /// ```
    pub fn title_case(&self, text: &str) -> String {
        CaseRules::for_language(self.language()).title_case(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CaseRules {
    Default,
    /// Turkish and Azerbaijani keep dotted and dotless `i` distinct.
    Turkic,
    /// Dutch capitalises the `ij` digraph as a unit.
    Dutch,
}

impl CaseRules {
    fn for_language(language: &str) -> Self {
        match language {
            "tr" | "az" => Self::Turkic,
            "nl" => Self::Dutch,
            _ => Self::Default,
        }
    }

    fn title_case(self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for segment in text.split_word_bounds() {
            if segment.chars().any(char::is_alphanumeric) {
                self.title_word(&mut out, segment);
            } else {
                out.push_str(segment);
            }
        }
        out
    }

    fn title_word(self, out: &mut String, word: &str) {
        let mut chars = word.chars().peekable();
        let mut started = false;

        while let Some(c) = chars.next() {
            let next = chars.peek().copied();
            if started {
                self.push_lower(out, c, next);
            } else if c.is_alphanumeric() {
                started = true;
                if self == Self::Dutch && matches!(c, 'i' | 'I') && matches!(next, Some('j' | 'J'))
                {
                    out.push_str("IJ");
                    chars.next();
                } else {
                    self.push_title(out, c);
                }
            } else {
                out.push(c);
            }
        }
    }

    fn push_title(self, out: &mut String, c: char) {
        match (self, c) {
            (Self::Turkic, 'i') => out.push('İ'),
            (_, 'ß') => out.push_str("Ss"),
            (_, 'ǆ' | 'ǅ' | 'Ǆ') => out.push('ǅ'),
            (_, 'ǉ' | 'ǈ' | 'Ǉ') => out.push('ǈ'),
            (_, 'ǌ' | 'ǋ' | 'Ǌ') => out.push('ǋ'),
            (_, 'ǳ' | 'ǲ' | 'Ǳ') => out.push('ǲ'),
            _ => out.extend(c.to_uppercase()),
        }
    }

    fn push_lower(self, out: &mut String, c: char, next: Option<char>) {
        match (self, c) {
            (Self::Turkic, 'I') => out.push('ı'),
            (Self::Turkic, 'İ') => out.push('i'),
            (_, 'Σ') if !next.is_some_and(char::is_alphabetic) => out.push('ς'),
            _ => out.extend(c.to_lowercase()),
        }
    }
}
