use core::fmt;
use core::hash::Hash;
use core::ops::{BitOr, Range};

use num_traits::{AsPrimitive, PrimInt, Unsigned};

use crate::pipe::Pipeable;
use crate::{
    BidirectionalIterable, BoundedIterable, Capabilities, ForwardIterable, Iter, Iterable,
    RandomAccessIterable, SizedIterable,
};

/// Sealed trait module to prevent external implementations.
mod private {
    pub trait Sealed {}
    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
    impl Sealed for u64 {}
    impl Sealed for usize {}
}

/// Trait for integer types an [`Iota`] can count over.
///
/// This trait is sealed and only implemented for `u8`, `u16`, `u32`, `u64`,
/// and `usize`. Distances between positions are reported as `isize`, so an
/// `Iota` must not span more than `isize::MAX` values.
pub trait Step:
    private::Sealed + PrimInt + Unsigned + Hash + AsPrimitive<usize> + 'static
where
    usize: AsPrimitive<Self>,
{
}

impl Step for u8 {}
impl Step for u16 {}
impl Step for u32 {}
impl Step for u64 {}
impl Step for usize {}

/// The half-open sequence of integers `start..end`, produced by value.
///
/// Unlike slices, an `Iota` owns everything it yields, so views can hold it
/// by value and be returned freely.
///
/// # Examples
/// ```
/// use range_views::{view, Iota};
///
/// let countdown: Vec<u32> = view::reverse(Iota::new(1u32, 4u32)).into_iter().collect();
/// assert_eq!(countdown, vec![3, 2, 1]);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Iota<T: Step = usize>
where
    usize: AsPrimitive<T>,
{
    start: T,
    end: T,
}

impl<T: Step> Iota<T>
where
    usize: AsPrimitive<T>,
{
    /// Creates a new `Iota` counting from `start` up to, but excluding, `end`.
    ///
    /// # Panics (debug only)
    /// - If start exceeds end
    #[inline]
    pub fn new(start: T, end: T) -> Self {
        debug_assert!(start <= end, "start must not exceed end");
        Self { start, end }
    }

    /// Creates a new `Iota` if `start <= end`, returns `None` otherwise.
    ///
    /// # Examples
    /// ```
    /// use range_views::Iota;
    ///
    /// assert!(Iota::<u32>::try_new(10, 20).is_some());
    /// assert!(Iota::<u32>::try_new(20, 10).is_none());
    /// ```
    #[inline]
    pub fn try_new(start: T, end: T) -> Option<Self> {
        if start > end {
            return None;
        }
        Some(Self { start, end })
    }

    /// Returns the first value of the sequence.
    #[inline]
    pub fn start(&self) -> T {
        self.start
    }

    /// Returns the end of the sequence (exclusive).
    #[inline]
    pub fn end(&self) -> T {
        self.end
    }

    #[inline]
    pub fn len(&self) -> usize {
        (self.end - self.start).as_()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Converts the `Iota` to a standard `Range<T>`.
    #[inline]
    pub fn to_range(&self) -> Range<T> {
        self.start..self.end
    }
}

impl<T: Step> Default for Iota<T>
where
    usize: AsPrimitive<T>,
{
    fn default() -> Self {
        Self::new(T::zero(), T::zero())
    }
}

impl<T: Step + fmt::Debug> fmt::Debug for Iota<T>
where
    usize: AsPrimitive<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iota")
            .field("start", &self.start)
            .field("end", &self.end)
            .finish()
    }
}

impl<T: Step> From<Range<T>> for Iota<T>
where
    usize: AsPrimitive<T>,
{
    fn from(range: Range<T>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl<T: Step> Iterable for Iota<T>
where
    usize: AsPrimitive<T>,
{
    type Position = T;
    type Item = T;

    const CAPABILITIES: Capabilities = Capabilities::INDEXED;

    #[inline]
    fn begin(&self) -> T {
        self.start
    }

    #[inline]
    fn is_end(&self, pos: &T) -> bool {
        *pos == self.end
    }

    #[inline]
    fn current(&self, pos: &T) -> T {
        debug_assert!(*pos < self.end, "dereferenced the end of an iota");
        *pos
    }

    #[inline]
    fn next(&self, pos: &mut T) {
        debug_assert!(*pos < self.end, "advanced past the end of an iota");
        *pos = *pos + T::one();
    }

    #[inline]
    fn remaining_hint(&self, pos: &T) -> (usize, Option<usize>) {
        let rest: usize = (self.end - *pos).as_();
        (rest, Some(rest))
    }
}

impl<T: Step> ForwardIterable for Iota<T>
where
    usize: AsPrimitive<T>,
{
    #[inline]
    fn equal(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

impl<T: Step> BoundedIterable for Iota<T>
where
    usize: AsPrimitive<T>,
{
    #[inline]
    fn end(&self) -> T {
        self.end
    }
}

impl<T: Step> BidirectionalIterable for Iota<T>
where
    usize: AsPrimitive<T>,
{
    #[inline]
    fn prev(&self, pos: &mut T) {
        debug_assert!(*pos > self.start, "stepped before the beginning of an iota");
        *pos = *pos - T::one();
    }

    #[inline]
    fn advance(&self, pos: &mut T, n: isize) {
        let offset: T = n.unsigned_abs().as_();
        *pos = if n >= 0 { *pos + offset } else { *pos - offset };
        debug_assert!(
            self.start <= *pos && *pos <= self.end,
            "advanced outside of an iota"
        );
    }
}

impl<T: Step> RandomAccessIterable for Iota<T>
where
    usize: AsPrimitive<T>,
{
    #[inline]
    fn distance_to(&self, from: &T, to: &T) -> isize {
        let from: usize = from.as_();
        let to: usize = to.as_();
        to as isize - from as isize
    }
}

impl<T: Step> SizedIterable for Iota<T>
where
    usize: AsPrimitive<T>,
{
    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T: Step> IntoIterator for Iota<T>
where
    usize: AsPrimitive<T>,
{
    type Item = T;
    type IntoIter = Iter<Self>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::new(self)
    }
}

impl<T: Step, P> BitOr<P> for Iota<T>
where
    usize: AsPrimitive<T>,
    P: Pipeable<Self>,
{
    type Output = P::Output;

    #[inline]
    fn bitor(self, adaptor: P) -> P::Output {
        adaptor.apply(self)
    }
}
