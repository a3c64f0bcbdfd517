//! The parsed dictionary: a word to frequency mapping.
//! This comes from two-column "word frequency" text files.

pub(crate) mod parser;

use core::{fmt, hash::BuildHasher};

use hashbrown::HashMap;

use crate::{DefaultHashBuilder, ParseWarning};

/// A dictionary of unique words, each annotated with a usage frequency.
///
/// Inserting a word that is already present replaces its frequency: dictionary files
/// occasionally repeat a word and the last record wins. Completers take an immutable snapshot of
/// the entries at construction, so the dictionary itself plays no part in answering queries.
#[derive(Clone)]
pub struct Dictionary<S = DefaultHashBuilder> {
    words: HashMap<String, u64, S>,
}

impl<S> fmt::Debug for Dictionary<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dictionary")
            .field("words", &format!("{} entries", self.words.len()))
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "default-hasher")]
impl Dictionary<DefaultHashBuilder> {
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }

    /// Parses two-column dictionary text.
    ///
    /// Nothing in parsing is fatal, so this returns the dictionary together with the warnings
    /// gathered along the way instead of a `Result`. See [`ParseWarning`].
    pub fn parse(text: &str) -> (Self, Vec<ParseWarning>) {
        Self::parse_with_hasher(text, DefaultHashBuilder::default())
    }
}

#[cfg(feature = "default-hasher")]
impl Default for Dictionary<DefaultHashBuilder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: BuildHasher> Dictionary<S> {
    pub fn with_hasher(build_hasher: S) -> Self {
        Self {
            words: HashMap::with_hasher(build_hasher),
        }
    }

    pub fn parse_with_hasher(text: &str, build_hasher: S) -> (Self, Vec<ParseWarning>) {
        parser::parse(text, Self::with_hasher(build_hasher))
    }

    /// Associates `word` with `frequency`, returning the previous frequency if the word was
    /// already present.
    pub fn insert(&mut self, word: String, frequency: u64) -> Option<u64> {
        self.words.insert(word, frequency)
    }

    pub fn get(&self, word: &str) -> Option<u64> {
        self.words.get(word).copied()
    }
}

impl<S> Dictionary<S> {
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.words.iter(),
        }
    }
}

/// Iterator over a dictionary's `(word, frequency)` entries in arbitrary order.
///
/// The item type matches what the completer constructors consume, so a `&Dictionary` can be
/// passed to them directly.
pub struct Iter<'a> {
    inner: hashbrown::hash_map::Iter<'a, String, u64>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, u64);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(word, frequency)| (word.as_str(), *frequency))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<'a, S> IntoIterator for &'a Dictionary<S> {
    type Item = (&'a str, u64);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
