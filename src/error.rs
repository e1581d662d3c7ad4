//! Result taxonomy shared by every trie operation.
//!
//! [`TrieError`] is what the Rust API returns; [`ResultCode`] is the closed,
//! numbered set of outcomes it projects onto, with `Ok` and the `NError`
//! sentinel included so that raw codes round-trip through [`describe`].

use std::fmt;

use thiserror::Error;

/// Error returned by trie operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrieError {
    #[error("trie handle is absent")]
    NullStructure,

    /// Reserved. The root lives inline in the trie and cannot be absent.
    #[error("root node is absent")]
    NullHead,

    /// Reserved for an absent node that is not a lookup miss.
    #[error("node is absent")]
    NullNode,

    /// Reserved. A remove that finds nothing is `AccessOutOfBound`, even
    /// on an empty trie.
    #[error("cannot remove from a trie with no mapped keys")]
    TryRemoveEmptyStructure,

    /// Reserved for graph structures sharing this taxonomy.
    #[error("cannot add an edge without a vertex")]
    TryAddEdgeNoVertex,

    #[error("no value is mapped at the requested key")]
    AccessOutOfBound,

    /// A caller-supplied element or output buffer does not match the
    /// trie's member size.
    #[error("buffer is {actual} bytes but the member size is {expected}")]
    ElementSize { expected: usize, actual: usize },
}

impl TrieError {
    /// The taxonomy entry this error reports as.
    ///
    /// The mapping is lossy: [`TrieError::ElementSize`] has no code of its
    /// own and reports as [`ResultCode::AccessOutOfBound`], so a caller that
    /// only sees the code cannot tell a width mismatch from a missing key.
    pub fn code(&self) -> ResultCode {
        match self {
            TrieError::NullStructure => ResultCode::NullStructure,
            TrieError::NullHead => ResultCode::NullHead,
            TrieError::NullNode => ResultCode::NullNode,
            TrieError::TryRemoveEmptyStructure => ResultCode::TryRemoveEmptyStructure,
            TrieError::TryAddEdgeNoVertex => ResultCode::TryAddEdgeNoVertex,
            TrieError::AccessOutOfBound | TrieError::ElementSize { .. } => {
                ResultCode::AccessOutOfBound
            }
        }
    }
}

/// Numbered outcome of a trie operation.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResultCode {
    Ok = 0,
    NullStructure = 1,
    NullHead = 2,
    NullNode = 3,
    TryRemoveEmptyStructure = 4,
    TryAddEdgeNoVertex = 5,
    AccessOutOfBound = 6,
    /// Number of result kinds. Not an outcome.
    NError = 7,
}

const UNKNOWN: &str = "unknown result code";

impl ResultCode {
    pub const ALL: [ResultCode; 8] = [
        ResultCode::Ok,
        ResultCode::NullStructure,
        ResultCode::NullHead,
        ResultCode::NullNode,
        ResultCode::TryRemoveEmptyStructure,
        ResultCode::TryAddEdgeNoVertex,
        ResultCode::AccessOutOfBound,
        ResultCode::NError,
    ];

    pub fn from_raw(raw: u32) -> Option<Self> {
        Self::ALL.get(raw as usize).copied()
    }

    #[inline]
    pub fn as_raw(self) -> u32 {
        self as u32
    }

    #[inline]
    pub fn is_ok(self) -> bool {
        self == ResultCode::Ok
    }

    /// Human-readable message, stable for the lifetime of the crate version.
    pub const fn as_str(self) -> &'static str {
        match self {
            ResultCode::Ok => "ok",
            ResultCode::NullStructure => "structure is null",
            ResultCode::NullHead => "head of structure is null",
            ResultCode::NullNode => "node is null",
            ResultCode::TryRemoveEmptyStructure => "tried to remove from an empty structure",
            ResultCode::TryAddEdgeNoVertex => "tried to add an edge to a missing vertex",
            ResultCode::AccessOutOfBound => "access out of bound",
            ResultCode::NError => "number of result codes",
        }
    }
}

/// Message for a raw result code. Values past `NError` get a distinct
/// "unknown" message rather than failing.
pub fn describe(raw: u32) -> &'static str {
    ResultCode::from_raw(raw).map_or(UNKNOWN, ResultCode::as_str)
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<TrieError> for ResultCode {
    fn from(err: TrieError) -> Self {
        err.code()
    }
}

impl<T> From<&Result<T, TrieError>> for ResultCode {
    fn from(res: &Result<T, TrieError>) -> Self {
        match res {
            Ok(_) => ResultCode::Ok,
            Err(err) => err.code(),
        }
    }
}
