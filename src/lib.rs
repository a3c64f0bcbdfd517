//! A lightweight word-completion library.
//!
//! `typeahead` answers interactive prefix queries against a dictionary of words annotated with
//! usage frequencies. The dictionary is compiled once into a character trie and then queried
//! through one of two ranking strategies: [`BaseCompleter`] orders matches lexicographically
//! while [`FrequencyCompleter`] puts the most frequently used words first.

mod dict;
mod prefix_trie;

use core::{fmt, hash::BuildHasher};

pub use dict::{Dictionary, Iter};

use prefix_trie::PrefixTrie;

/// The default `BuildHasher` for the trie's child tables (currently ahash).
#[cfg(feature = "default-hasher")]
pub type DefaultHashBuilder = ahash::RandomState;

/// Stand-in type for when the `default-hasher` feature is disabled. It cannot be constructed:
/// use the `*_with_hasher` constructors and bring your own `BuildHasher` instead.
#[cfg(not(feature = "default-hasher"))]
pub enum DefaultHashBuilder {}

/// A completion strategy: maps a prefix query to an ordered sequence of dictionary words
/// beginning with that prefix.
///
/// `complete` is a pure function of the index and the query. It never fails, carries no state
/// from one call to the next and takes `&self`, so one completer can serve concurrent queries
/// from multiple threads without locking.
pub trait Completer {
    /// Collects every dictionary word starting with `prefix` into `out`, replacing its previous
    /// contents.
    ///
    /// An empty `prefix` matches the whole dictionary. A prefix matching nothing leaves `out`
    /// empty: absence of results is not an error.
    fn complete(&self, prefix: &str, out: &mut Vec<String>);
}

/// A [`Completer`] returning matches in ascending lexicographic order.
///
/// Matching is case-sensitive and exact: no normalization or case folding is applied to either
/// the dictionary words or the query.
pub struct BaseCompleter<S = DefaultHashBuilder> {
    words: PrefixTrie<S>,
}

#[cfg(feature = "default-hasher")]
impl BaseCompleter<DefaultHashBuilder> {
    /// Builds a completer from `(word, frequency)` entries.
    ///
    /// Fails with [`InvalidWordError`] if any word is the empty string. When a word appears more
    /// than once the last frequency wins, matching [`Dictionary`] insertion.
    pub fn new<'a, I>(entries: I) -> Result<Self, InvalidWordError>
    where
        I: IntoIterator<Item = (&'a str, u64)>,
    {
        Self::new_with_hasher(entries, DefaultHashBuilder::default())
    }
}

impl<S: BuildHasher + Clone> BaseCompleter<S> {
    pub fn new_with_hasher<'a, I>(entries: I, build_hasher: S) -> Result<Self, InvalidWordError>
    where
        I: IntoIterator<Item = (&'a str, u64)>,
    {
        Ok(Self {
            words: PrefixTrie::build(entries, build_hasher)?,
        })
    }
}

impl<S: BuildHasher> Completer for BaseCompleter<S> {
    fn complete(&self, prefix: &str, out: &mut Vec<String>) {
        out.clear();
        out.extend(
            self.words
                .matches(prefix)
                .into_iter()
                .map(|(word, _)| word),
        );
        out.sort_unstable();
    }
}

impl<S> fmt::Debug for BaseCompleter<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BaseCompleter").finish_non_exhaustive()
    }
}

/// A [`Completer`] returning the most frequently used matches first.
///
/// Frequencies are read from the terminal nodes of the trie, so no side table is kept. Two
/// matches with the same frequency are ordered lexicographically between themselves, which makes
/// the output a total order: frequency descending, then word ascending.
pub struct FrequencyCompleter<S = DefaultHashBuilder> {
    words: PrefixTrie<S>,
}

#[cfg(feature = "default-hasher")]
impl FrequencyCompleter<DefaultHashBuilder> {
    /// Builds a completer from `(word, frequency)` entries.
    ///
    /// Fails with [`InvalidWordError`] if any word is the empty string. When a word appears more
    /// than once the last frequency wins, matching [`Dictionary`] insertion.
    pub fn new<'a, I>(entries: I) -> Result<Self, InvalidWordError>
    where
        I: IntoIterator<Item = (&'a str, u64)>,
    {
        Self::new_with_hasher(entries, DefaultHashBuilder::default())
    }
}

impl<S: BuildHasher + Clone> FrequencyCompleter<S> {
    pub fn new_with_hasher<'a, I>(entries: I, build_hasher: S) -> Result<Self, InvalidWordError>
    where
        I: IntoIterator<Item = (&'a str, u64)>,
    {
        Ok(Self {
            words: PrefixTrie::build(entries, build_hasher)?,
        })
    }
}

impl<S: BuildHasher> Completer for FrequencyCompleter<S> {
    fn complete(&self, prefix: &str, out: &mut Vec<String>) {
        out.clear();
        let mut matches = self.words.matches(prefix);
        matches.sort_unstable_by(|(word_a, freq_a), (word_b, freq_b)| {
            freq_b.cmp(freq_a).then_with(|| word_a.cmp(word_b))
        });
        out.extend(matches.into_iter().map(|(word, _)| word));
    }
}

impl<S> fmt::Debug for FrequencyCompleter<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrequencyCompleter").finish_non_exhaustive()
    }
}

/// The error returned when building a completer from a dictionary containing an invalid word.
///
/// The only invalid word is the empty string: it would be a "prefix" of every query and can
/// never be typed, so it is rejected when the index is built rather than special-cased on every
/// lookup. The whole build fails; no partial index is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidWordError;

impl fmt::Display for InvalidWordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid dictionary word: the empty string cannot be completed")
    }
}

impl std::error::Error for InvalidWordError {}

/// A non-fatal problem found while parsing dictionary text.
///
/// Parsing never fails outright: malformed records are skipped and duplicated words are
/// overwritten, each reported as a warning so the caller decides how loudly to complain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWarning {
    pub kind: ParseWarningKind,
    /// 1-based line number of the offending record.
    pub line_number: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarningKind {
    /// The line did not split into exactly two space-separated fields.
    MalformedLine,
    /// The frequency field did not parse as a non-negative integer.
    MalformedFrequency(core::num::ParseIntError),
    /// The word was already defined on an earlier line. Its old frequency has been overwritten.
    DuplicateWord(String),
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseWarningKind::MalformedLine => {
                write!(f, "line {}: expected \"word frequency\"", self.line_number)
            }
            ParseWarningKind::MalformedFrequency(err) => {
                write!(f, "line {}: invalid frequency: {}", self.line_number, err)
            }
            ParseWarningKind::DuplicateWord(word) => {
                write!(f, "line {}: duplicate word {:?}", self.line_number, word)
            }
        }
    }
}

impl std::error::Error for ParseWarning {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ParseWarningKind::MalformedFrequency(err) => Some(err),
            _ => None,
        }
    }
}
