use std::collections::HashMap;

use crate::{AssertDepth, MerkleHasher, Node, ZeroTable};

/// A sparse map from `(level, index)` to digest
///
/// Only nodes that have been computed are held. Every other position resolves to the
/// [`ZeroTable`] entry for its level, so a missing node is a valid value rather than an error.
///
/// ```rust
/// # use batch_smt::*;
/// let mut store = NodeStore::<4, _>::new(&Sha256Hasher);
/// assert_eq!(store.get(2, 1), store.zeroes().get(2));
///
/// store.set(Node::new(2, 1, Hash256::new([7; 32])));
/// assert_eq!(store.get(2, 1), Hash256::new([7; 32]));
/// ```
#[derive(Debug, Clone)]
pub struct NodeStore<const DEPTH: usize, D> {
    zeroes: ZeroTable<DEPTH, D>,
    levels: [HashMap<u64, D>; DEPTH],
}

impl<const DEPTH: usize, D: Copy> NodeStore<DEPTH, D> {
    /// Create an empty store
    ///
    /// `DEPTH` must be between 1 and [`MAX_DEPTH`]:
    ///
    /// ```rust,compile_fail
    /// # use batch_smt::*;
    /// let store = NodeStore::<65, _>::new(&Sha256Hasher);
    /// ```
    ///
    /// [`MAX_DEPTH`]: crate::MAX_DEPTH
    #[must_use]
    pub fn new<H>(hasher: &H) -> Self
    where
        H: MerkleHasher<Digest = D>,
    {
        #[allow(clippy::let_unit_value)]
        let () = AssertDepth::<DEPTH>::VALID;

        Self {
            zeroes: ZeroTable::new(hasher),
            levels: core::array::from_fn(|_| HashMap::new()),
        }
    }

    /// The digest at `(level, index)`, falling back to the empty subtree digest for `level`
    ///
    /// # Panics
    ///
    /// Panics if `level >= DEPTH`
    #[inline]
    #[must_use]
    pub fn get(&self, level: usize, index: u64) -> D {
        self.levels[level]
            .get(&index)
            .copied()
            .unwrap_or_else(|| self.zeroes.get(level))
    }

    /// Whether a digest has been stored at `(level, index)`
    #[inline]
    #[must_use]
    pub fn contains(&self, level: usize, index: u64) -> bool {
        self.levels
            .get(level)
            .is_some_and(|nodes| nodes.contains_key(&index))
    }

    /// Insert or overwrite the digest at the node's position
    ///
    /// # Panics
    ///
    /// Panics if `node.level >= DEPTH`
    #[inline]
    pub fn set(&mut self, node: Node<D>) {
        self.levels[node.level].insert(node.index, node.digest);
    }

    /// The empty subtree digests this store falls back to
    #[inline]
    #[must_use]
    pub fn zeroes(&self) -> &ZeroTable<DEPTH, D> {
        &self.zeroes
    }

    /// The number of nodes stored at `level`
    #[inline]
    #[must_use]
    pub fn level_len(&self, level: usize) -> usize {
        self.levels.get(level).map_or(0, HashMap::len)
    }

    /// The number of stored nodes across all levels
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.iter().map(HashMap::len).sum()
    }

    /// Whether no node has been stored yet
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.iter().all(HashMap::is_empty)
    }

    /// Get an iterator over every stored node
    ///
    /// Nodes are yielded level by level, leaves first. Within a level the order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = Node<D>> + '_ {
        self.levels.iter().enumerate().flat_map(|(level, nodes)| {
            nodes
                .iter()
                .map(move |(&index, &digest)| Node::new(level, index, digest))
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{Hash256, Sha256Hasher};

    use super::*;

    #[test]
    fn missing_nodes_fall_back_to_zeroes() {
        let store = NodeStore::<8, _>::new(&Sha256Hasher);

        for level in 0..8 {
            assert_eq!(store.get(level, 0), store.zeroes().get(level));
            assert!(!store.contains(level, 0));
        }

        assert!(store.is_empty());
        assert!(!store.contains(8, 0));
    }

    #[test]
    fn set_overwrites() {
        let mut store = NodeStore::<8, _>::new(&Sha256Hasher);

        store.set(Node::new(3, 2, Hash256::new([1; 32])));
        store.set(Node::new(3, 2, Hash256::new([2; 32])));
        store.set(Node::new(0, 2, Hash256::new([3; 32])));

        assert_eq!(store.get(3, 2), Hash256::new([2; 32]));
        assert_eq!(store.get(0, 2), Hash256::new([3; 32]));
        assert_eq!(store.len(), 2);
        assert_eq!(store.level_len(3), 1);
        assert_eq!(store.level_len(9), 0);

        let mut nodes: Vec<_> = store.iter().collect();
        nodes.sort_by_key(|node| (node.level, node.index));

        assert_eq!(
            nodes,
            vec![
                Node::new(0, 2, Hash256::new([3; 32])),
                Node::new(3, 2, Hash256::new([2; 32])),
            ]
        );
    }
}
