use std::fmt;

use tracing::{debug, trace};

use crate::error::TrieError;
use crate::node::Node;

/// A byte-keyed map from arbitrary byte strings to fixed-width values.
///
/// Every stored value is exactly [`member_size`](ByteTrie::member_size)
/// bytes. With a member size of zero the trie behaves as a set of keys.
///
/// Nodes are never pruned: removing a key clears its value but keeps the
/// path, so a later `add` of the same key reuses it.
pub struct ByteTrie {
    root: Node,
    len: usize,
    member_size: usize,
    /// Allocated nodes, root excluded.
    nodes: usize,
}

impl ByteTrie {
    pub fn new(member_size: usize) -> Self {
        Self {
            root: Node::new(),
            len: 0,
            member_size,
            nodes: 0,
        }
    }

    /// Reinitialize in place with a new member size.
    ///
    /// Anything still stored is released first, so this is valid both on a
    /// destroyed trie and on a live one.
    pub fn create(&mut self, member_size: usize) {
        let (nodes, values) = self.release();
        self.member_size = member_size;
        debug!(member_size, nodes, values, "created trie");
    }

    /// Release every node and value and reset the counters to zero.
    ///
    /// The trie stays usable: call [`create`](ByteTrie::create) to pick a
    /// new member size before adding again.
    pub fn destroy(&mut self) {
        let (nodes, values) = self.release();
        self.member_size = 0;
        debug!(nodes, values, "destroyed trie");
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn member_size(&self) -> usize {
        self.member_size
    }

    /// Number of allocated nodes, not counting the root.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes
    }

    /// Approximate heap and inline footprint in bytes.
    pub fn memory_usage(&self) -> usize {
        std::mem::size_of::<Self>()
            + self.nodes * std::mem::size_of::<Node>()
            + self.len * self.member_size
    }

    // =========================================================================
    // Value operations
    // =========================================================================

    /// Map `key` to `elem`, overwriting any value already stored there.
    ///
    /// `elem` must be exactly `member_size` bytes long.
    pub fn add(&mut self, key: &[u8], elem: &[u8]) -> Result<(), TrieError> {
        self.check_width(elem.len())?;

        let node = self.node_at_or_insert(key);
        let inserted = match node.value.as_deref_mut() {
            Some(value) => {
                value.copy_from_slice(elem);
                false
            }
            None => {
                node.value = Some(Box::from(elem));
                true
            }
        };
        if inserted {
            self.len += 1;
        }
        trace!(key_len = key.len(), inserted, len = self.len, "add");
        Ok(())
    }

    /// Unmap `key`, dropping its value.
    pub fn remove(&mut self, key: &[u8]) -> Result<(), TrieError> {
        self.take(key).map(drop)
    }

    /// Unmap `key` and hand back the value that was stored there.
    pub fn take(&mut self, key: &[u8]) -> Result<Box<[u8]>, TrieError> {
        let value = self
            .node_at_mut(key)
            .and_then(|node| node.value.take())
            .ok_or(TrieError::AccessOutOfBound)?;
        self.len -= 1;
        trace!(key_len = key.len(), len = self.len, "remove");
        Ok(value)
    }

    /// Copy the value mapped at `key` into `out`, which must be exactly
    /// `member_size` bytes long. `out` is left untouched on error.
    pub fn get(&self, key: &[u8], out: &mut [u8]) -> Result<(), TrieError> {
        self.check_width(out.len())?;
        out.copy_from_slice(self.get_ref(key)?);
        Ok(())
    }

    pub fn get_ref(&self, key: &[u8]) -> Result<&[u8], TrieError> {
        self.node_at(key)
            .and_then(|node| node.value.as_deref())
            .ok_or(TrieError::AccessOutOfBound)
    }

    pub fn contains_key(&self, key: &[u8]) -> bool {
        self.get_ref(key).is_ok()
    }

    /// Overwrite the value of an already mapped key in place.
    ///
    /// Unlike [`add`](ByteTrie::add) this never allocates: a key that is not
    /// currently mapped fails with [`TrieError::AccessOutOfBound`].
    pub fn set(&mut self, key: &[u8], elem: &[u8]) -> Result<(), TrieError> {
        self.check_width(elem.len())?;

        let value = self
            .node_at_mut(key)
            .and_then(|node| node.value.as_deref_mut())
            .ok_or(TrieError::AccessOutOfBound)?;
        value.copy_from_slice(elem);
        trace!(key_len = key.len(), "set");
        Ok(())
    }

    // =========================================================================
    // Traversal
    // =========================================================================

    fn check_width(&self, actual: usize) -> Result<(), TrieError> {
        if actual == self.member_size {
            Ok(())
        } else {
            Err(TrieError::ElementSize {
                expected: self.member_size,
                actual,
            })
        }
    }

    /// Walk `key` from the root, allocating any missing node on the way.
    fn node_at_or_insert(&mut self, key: &[u8]) -> &mut Node {
        let mut created = 0usize;
        let mut node = &mut self.root;
        for &byte in key {
            let mut fresh = false;
            node = node.child_or_insert(byte, &mut fresh);
            created += usize::from(fresh);
        }
        self.nodes += created;
        if created > 0 {
            trace!(key_len = key.len(), created, "allocated path");
        }
        node
    }

    fn node_at(&self, key: &[u8]) -> Option<&Node> {
        key.iter().try_fold(&self.root, |node, &byte| node.child(byte))
    }

    fn node_at_mut(&mut self, key: &[u8]) -> Option<&mut Node> {
        key.iter()
            .try_fold(&mut self.root, |node, &byte| node.child_mut(byte))
    }

    /// Free everything below the root, children before parents, without
    /// recursing. Returns the number of nodes and values released.
    fn release(&mut self) -> (usize, usize) {
        let mut values = usize::from(self.root.value.take().is_some());
        let mut nodes = 0usize;

        let mut stack: Vec<Box<Node>> = self.root.take_children().collect();
        while let Some(mut node) = stack.pop() {
            if node.has_children() {
                let children: Vec<Box<Node>> = node.take_children().collect();
                stack.push(node);
                stack.extend(children);
                continue;
            }
            values += usize::from(node.value.take().is_some());
            nodes += 1;
        }

        debug_assert_eq!(nodes, self.nodes);
        debug_assert_eq!(values, self.len);
        self.nodes = 0;
        self.len = 0;
        (nodes, values)
    }
}

impl Default for ByteTrie {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Drop for ByteTrie {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for ByteTrie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteTrie")
            .field("len", &self.len)
            .field("member_size", &self.member_size)
            .field("nodes", &self.nodes)
            .finish()
    }
}
