use crate::{level_capacity, Error, MerkleHasher, Node, Result, Tree};

impl<const DEPTH: usize, H: MerkleHasher> Tree<DEPTH, H> {
    /// The digest at `(level, index)`
    ///
    /// Nodes that were never computed resolve to the empty subtree digest for their level.
    ///
    /// ```rust
    /// # use batch_smt::*;
    /// let mut tree = Tree::<8>::new();
    /// assert_eq!(tree.get_node(3, 1), tree.zeroes().get(3));
    ///
    /// tree.set_leaf(0, Hash256::new([1; 32])).unwrap();
    /// assert_eq!(tree.get_node(7, 0), tree.root());
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `level >= DEPTH`
    #[inline]
    #[must_use]
    pub fn get_node(&self, level: usize, index: u64) -> H::Digest {
        assert!(
            level < DEPTH,
            "level {level} is out of range for a tree of depth {DEPTH}"
        );

        self.store.get(level, index)
    }

    /// The digest of the leaf at `index`
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range for this tree
    #[inline]
    #[must_use]
    pub fn leaf(&self, index: u64) -> H::Digest {
        let capacity = level_capacity::<DEPTH>(0);
        assert!(
            index < capacity,
            "leaf index {index} is out of range, the tree has {capacity} leaf slots"
        );

        self.store.get(0, index)
    }

    /// Write a node directly into the store, without rehashing anything above it
    ///
    /// This is an escape hatch for seeding a tree with precomputed nodes. The root and any other
    /// ancestors of `node` are left as they are, so the tree is only consistent again once every
    /// ancestor has been recomputed, for example by inserting a batch below `node`.
    ///
    /// ```rust
    /// # use batch_smt::*;
    /// let mut tree = Tree::<4>::new();
    /// let digest = Hash256::new([1; 32]);
    ///
    /// tree.set_node(Node::new(2, 1, digest)).unwrap();
    /// assert_eq!(tree.get_node(2, 1), digest);
    ///
    /// let error = tree.set_node(Node::new(2, 2, digest)).unwrap_err();
    /// assert_eq!(error, Error::NodeIndexOutOfRange { level: 2, index: 2 });
    /// ```
    pub fn set_node(&mut self, node: Node<H::Digest>) -> Result<()> {
        if node.level >= DEPTH {
            return Err(Error::LevelOutOfRange {
                level: node.level,
                depth: DEPTH,
            });
        }

        if node.index >= level_capacity::<DEPTH>(node.level) {
            return Err(Error::NodeIndexOutOfRange {
                level: node.level,
                index: node.index,
            });
        }

        self.store.set(node);

        Ok(())
    }
}
