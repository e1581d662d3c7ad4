//! Fixed fan-out trie node.
//!
//! Every node carries one child slot per possible key byte, indexed directly
//! by the unsigned byte value. There is no adaptive sizing and no path
//! compression: a key of length `n` always ends `n` levels below the root.

/// Children per node.
pub(crate) const FANOUT: usize = 256;

pub(crate) struct Node {
    /// Present iff a mapped key terminates here.
    pub(crate) value: Option<Box<[u8]>>,
    pub(crate) children: [Option<Box<Node>>; FANOUT],
}

impl Node {
    pub(crate) fn new() -> Self {
        Self {
            value: None,
            children: std::array::from_fn(|_| None),
        }
    }

    #[inline]
    pub(crate) fn child(&self, byte: u8) -> Option<&Node> {
        self.children[byte as usize].as_deref()
    }

    #[inline]
    pub(crate) fn child_mut(&mut self, byte: u8) -> Option<&mut Node> {
        self.children[byte as usize].as_deref_mut()
    }

    /// Descend through `byte`, allocating an empty child if the slot is
    /// vacant. `created` is set when an allocation happened.
    #[inline]
    pub(crate) fn child_or_insert(&mut self, byte: u8, created: &mut bool) -> &mut Node {
        self.children[byte as usize].get_or_insert_with(|| {
            *created = true;
            Box::new(Node::new())
        })
    }

    pub(crate) fn has_children(&self) -> bool {
        self.children.iter().any(Option::is_some)
    }

    /// Detach every child, leaving all slots vacant.
    pub(crate) fn take_children(&mut self) -> impl Iterator<Item = Box<Node>> + '_ {
        self.children.iter_mut().filter_map(Option::take)
    }
}
