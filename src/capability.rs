use bitflags::bitflags;

use crate::Iterable;

bitflags! {
    /// Traversal capabilities of an [`Iterable`] type.
    ///
    /// Capabilities are a property of the type, not of a value: they are
    /// read from [`Iterable::CAPABILITIES`] at compile time. Each flag mirrors
    /// one of the capability traits, so `BIDIRECTIONAL` is set exactly when
    /// the type implements [`BidirectionalIterable`](crate::BidirectionalIterable).
    ///
    /// An empty set describes a multi-pass sequence that is neither bounded
    /// nor sized and only moves forward.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    pub struct Capabilities: u8 {
        /// Positions cannot be saved and revisited.
        const SINGLE_PASS = 1;
        /// The end is a real position, not only a sentinel test.
        const BOUNDED = 1 << 1;
        const BIDIRECTIONAL = 1 << 2;
        const RANDOM_ACCESS = 1 << 3;
        /// The number of elements is known without traversal.
        const SIZED = 1 << 4;

        /// Everything an index-addressed sequence supports.
        const INDEXED = Self::BOUNDED.bits()
            | Self::BIDIRECTIONAL.bits()
            | Self::RANDOM_ACCESS.bits()
            | Self::SIZED.bits();
    }
}

/// Returns the capabilities of `R`.
///
/// ```
/// use range_views::{capabilities, Capabilities};
///
/// assert_eq!(capabilities::<&[u8]>(), Capabilities::INDEXED);
/// ```
#[inline]
pub const fn capabilities<R: Iterable>() -> Capabilities {
    R::CAPABILITIES
}

/// Returns `true` if positions of `R` cannot be revisited.
#[inline]
pub const fn is_single_pass<R: Iterable>() -> bool {
    R::CAPABILITIES.contains(Capabilities::SINGLE_PASS)
}

/// Returns `true` if `R` has an end position of its own position type.
#[inline]
pub const fn is_bounded<R: Iterable>() -> bool {
    R::CAPABILITIES.contains(Capabilities::BOUNDED)
}

#[inline]
pub const fn is_bidirectional<R: Iterable>() -> bool {
    R::CAPABILITIES.contains(Capabilities::BIDIRECTIONAL)
}

#[inline]
pub const fn is_random_access<R: Iterable>() -> bool {
    R::CAPABILITIES.contains(Capabilities::RANDOM_ACCESS)
}

#[inline]
pub const fn is_sized<R: Iterable>() -> bool {
    R::CAPABILITIES.contains(Capabilities::SIZED)
}
