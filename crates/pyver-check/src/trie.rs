//! Version trie: `major → minor → micros` index over release triples.
//!
//! Built fresh from a snapshot's release keys at the start of a validation
//! pass and dropped with it; never persisted. Micro values keep insertion
//! order — the engine feeds the trie from the version-sorted release list,
//! so callers that need numeric micro order get it for free.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
pub struct VersionTrie {
    nodes: BTreeMap<u32, BTreeMap<u32, Vec<u32>>>,
}

impl VersionTrie {
    /// Distinct major versions present.
    pub fn majors(&self) -> Vec<u32> {
        self.nodes.keys().copied().collect()
    }

    /// Distinct minor versions under a major; empty if the major is absent.
    pub fn minors(&self, major: u32) -> Vec<u32> {
        self.nodes
            .get(&major)
            .map(|minors| minors.keys().copied().collect())
            .unwrap_or_default()
    }

    /// Micro versions under `(major, minor)` in insertion order; empty if
    /// the pair is absent. Never fails.
    pub fn micros(&self, major: u32, minor: u32) -> &[u32] {
        self.nodes
            .get(&major)
            .and_then(|minors| minors.get(&minor))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl FromIterator<(u32, u32, u32)> for VersionTrie {
    fn from_iter<I: IntoIterator<Item = (u32, u32, u32)>>(iter: I) -> Self {
        let mut trie = Self::default();
        for (major, minor, micro) in iter {
            trie.nodes
                .entry(major)
                .or_default()
                .entry(minor)
                .or_default()
                .push(micro);
        }
        trie
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexes_release_triples() {
        let trie: VersionTrie = [
            (2, 0, 0),
            (2, 0, 1),
            (2, 1, 0),
            (2, 1, 1),
            (2, 1, 2),
            (2, 1, 3),
            (2, 2, 0),
            (2, 2, 1),
            (2, 2, 2),
            (2, 2, 3),
        ]
        .into_iter()
        .collect();

        assert_eq!(trie.majors(), [2]);
        assert_eq!(trie.minors(2), [0, 1, 2]);
        assert_eq!(trie.micros(2, 1), [0, 1, 2, 3]);
    }

    #[test]
    fn absent_keys_return_empty() {
        let trie: VersionTrie = [(2, 0, 0)].into_iter().collect();
        assert!(trie.minors(9).is_empty());
        assert!(trie.micros(9, 9).is_empty());
    }

    #[test]
    fn micros_keep_insertion_order() {
        let trie: VersionTrie = [(1, 0, 2), (1, 0, 0), (1, 0, 1)].into_iter().collect();
        assert_eq!(trie.micros(1, 0), [2, 0, 1]);
    }
}
