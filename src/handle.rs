//! Operations over a trie handle that may be absent.
//!
//! These mirror the [`ByteTrie`] methods for embedders that hold the trie
//! behind a nullable slot. An absent handle is reported as
//! [`TrieError::NullStructure`] before anything else is checked.

use crate::error::TrieError;
use crate::trie::ByteTrie;

fn present<T>(trie: Option<T>) -> Result<T, TrieError> {
    trie.ok_or(TrieError::NullStructure)
}

pub fn create(trie: Option<&mut ByteTrie>, member_size: usize) -> Result<(), TrieError> {
    present(trie)?.create(member_size);
    Ok(())
}

pub fn destroy(trie: Option<&mut ByteTrie>) -> Result<(), TrieError> {
    present(trie)?.destroy();
    Ok(())
}

pub fn add(trie: Option<&mut ByteTrie>, key: &[u8], elem: &[u8]) -> Result<(), TrieError> {
    present(trie)?.add(key, elem)
}

pub fn remove(trie: Option<&mut ByteTrie>, key: &[u8]) -> Result<(), TrieError> {
    present(trie)?.remove(key)
}

pub fn get(trie: Option<&ByteTrie>, key: &[u8], out: &mut [u8]) -> Result<(), TrieError> {
    present(trie)?.get(key, out)
}

pub fn set(trie: Option<&mut ByteTrie>, key: &[u8], elem: &[u8]) -> Result<(), TrieError> {
    present(trie)?.set(key, elem)
}
