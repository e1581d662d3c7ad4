//! # flat-trie
//!
//! An uncompressed 256-way trie mapping arbitrary byte strings to
//! fixed-width opaque values.
//!
//! Each node has one child slot per possible byte, so a lookup is a direct
//! index per key byte and never compares keys. The price is memory: every
//! byte of every distinct prefix costs a full node.
//!
//! ## Example
//!
//! ```rust
//! use flat_trie::{ByteTrie, TrieError};
//!
//! let mut trie = ByteTrie::new(4);
//! trie.add(b"hello", &1u32.to_le_bytes()).unwrap();
//! trie.add(b"help", &2u32.to_le_bytes()).unwrap();
//!
//! let mut out = [0u8; 4];
//! trie.get(b"hello", &mut out).unwrap();
//! assert_eq!(u32::from_le_bytes(out), 1);
//!
//! assert_eq!(trie.get(b"hel", &mut out), Err(TrieError::AccessOutOfBound));
//! assert_eq!(trie.len(), 2);
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod handle;
mod node;
mod trie;

pub use error::{describe, ResultCode, TrieError};
pub use trie::ByteTrie;

#[cfg(test)]
mod proptests;
