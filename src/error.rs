use thiserror::Error;

/// Errors reported by the checked algorithm entry points, such as
/// [`try_inplace_merge`](crate::algorithm::try_inplace_merge).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    #[error("midpoint {mid} is outside of a sequence of length {len}")]
    MidpointOutOfRange { mid: usize, len: usize },

    /// The run `start..end` is out of order at index `at`, where the element
    /// compares less than its predecessor.
    #[error("run {start}..{end} is out of order at index {at}")]
    UnorderedRun { start: usize, end: usize, at: usize },
}
