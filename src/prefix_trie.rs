use core::hash::BuildHasher;

use hashbrown::HashMap;

use crate::InvalidWordError;

/// A character trie mapping dictionary words to their usage frequencies.
///
/// Every word sharing a prefix is reachable from the single node that prefix walks to, so
/// collecting the matches for a query costs the length of the prefix plus the number of matches
/// rather than the size of the dictionary. In typeahead this one structure backs both
/// completers: terminal nodes carry the word's frequency, so frequency ranking needs no side
/// table.
///
/// The trie is built once and never mutated afterwards. Lookups take `&self` and the type has no
/// interior mutability, so a completer built on it can be shared between threads freely.
pub(crate) struct PrefixTrie<S> {
    root: Node<S>,
}

struct Node<S> {
    /// `Some` when a dictionary word ends at this node.
    frequency: Option<u64>,
    children: HashMap<char, Node<S>, S>,
}

impl<S> Node<S> {
    fn new(build_hasher: S) -> Self {
        Self {
            frequency: None,
            children: HashMap::with_hasher(build_hasher),
        }
    }
}

impl<S: BuildHasher + Clone> PrefixTrie<S> {
    /// Builds a trie from `(word, frequency)` entries.
    ///
    /// Rejects the empty word: the whole build fails and no partial trie escapes. A word seen
    /// more than once keeps the frequency it was last seen with.
    pub fn build<'a, I>(entries: I, build_hasher: S) -> Result<Self, InvalidWordError>
    where
        I: IntoIterator<Item = (&'a str, u64)>,
    {
        let mut root = Node::new(build_hasher.clone());

        for (word, frequency) in entries {
            if word.is_empty() {
                return Err(InvalidWordError);
            }

            let mut node = &mut root;
            for ch in word.chars() {
                node = node
                    .children
                    .entry(ch)
                    .or_insert_with(|| Node::new(build_hasher.clone()));
            }
            node.frequency = Some(frequency);
        }

        Ok(Self { root })
    }
}

impl<S: BuildHasher> PrefixTrie<S> {
    /// Collects every `(word, frequency)` entry whose word starts with `prefix`, in no
    /// particular order. Callers are expected to sort.
    ///
    /// The empty prefix anchors at the root and therefore matches the whole dictionary.
    /// Comparison is exact, character by character: no normalization and no case folding.
    pub fn matches(&self, prefix: &str) -> Vec<(String, u64)> {
        let mut node = &self.root;
        for ch in prefix.chars() {
            match node.children.get(&ch) {
                Some(child) => node = child,
                None => return Vec::new(),
            }
        }

        let mut out = Vec::new();
        let mut word = String::from(prefix);
        collect(node, &mut word, &mut out);
        out
    }
}

/// Depth-first walk appending every word ending at or below `node` to `out`.
///
/// `word` holds the path from the root down to `node` and is restored to that state before
/// returning.
fn collect<S: BuildHasher>(node: &Node<S>, word: &mut String, out: &mut Vec<(String, u64)>) {
    if let Some(frequency) = node.frequency {
        out.push((word.clone(), frequency));
    }

    for (ch, child) in node.children.iter() {
        word.push(*ch);
        collect(child, word, out);
        word.pop();
    }
}
