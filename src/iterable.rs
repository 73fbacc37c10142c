use crate::Capabilities;

/// A sequence that can be traversed from a beginning position.
///
/// Positions are plain values that do not borrow the sequence; every
/// operation on a position goes through the sequence that created it.
/// Mixing positions of two different sequences is a logic error.
///
/// The end of an `Iterable` is a sentinel: [`is_end`](Iterable::is_end)
/// tells whether a position is past the last element. Sequences that also
/// have a real end position implement [`BoundedIterable`].
///
/// A type implementing only this trait is single-pass: after
/// [`next`](Iterable::next), earlier positions may no longer be read.
///
/// [`CAPABILITIES`](Iterable::CAPABILITIES) has no default, so every
/// implementor states what it supports:
///
/// ```compile_fail
/// use range_views::Iterable;
///
/// struct Countdown(u8);
///
/// impl Iterable for Countdown {
///     type Position = u8;
///     type Item = u8;
///
///     fn begin(&self) -> u8 { self.0 }
///     fn is_end(&self, pos: &u8) -> bool { *pos == 0 }
///     fn current(&self, pos: &u8) -> u8 { *pos }
///     fn next(&self, pos: &mut u8) { *pos -= 1 }
/// }
/// ```
pub trait Iterable {
    /// A position within the sequence.
    type Position: Clone;

    /// The value produced when reading a position.
    type Item;

    /// Capabilities of this type.
    ///
    /// Each flag must be set exactly when the type implements the matching
    /// trait: `SINGLE_PASS` when it does not implement [`ForwardIterable`],
    /// `BOUNDED` for [`BoundedIterable`] and so on. Views derive their own
    /// capabilities from this constant.
    const CAPABILITIES: Capabilities;

    /// Returns the position of the first element, or an end position if the
    /// sequence is empty.
    fn begin(&self) -> Self::Position;

    /// Returns `true` if `pos` is past the last element.
    fn is_end(&self, pos: &Self::Position) -> bool;

    /// Reads the element at `pos`.
    ///
    /// `pos` must not be an end position.
    fn current(&self, pos: &Self::Position) -> Self::Item;

    /// Moves `pos` to the next element.
    ///
    /// `pos` must not be an end position.
    fn next(&self, pos: &mut Self::Position);

    /// Returns bounds on the number of elements from `pos` to the end, in
    /// the form of [`Iterator::size_hint`].
    ///
    /// Sized and random-access sequences must return an exact hint. The
    /// default knows nothing.
    #[inline]
    fn remaining_hint(&self, pos: &Self::Position) -> (usize, Option<usize>) {
        let _ = pos;
        (0, None)
    }
}

/// A multi-pass sequence: positions can be saved, compared and revisited.
pub trait ForwardIterable: Iterable {
    /// Returns `true` if both positions denote the same element.
    fn equal(&self, a: &Self::Position, b: &Self::Position) -> bool;
}

/// A sequence whose end is a real position comparable with [`equal`].
///
/// [`equal`]: ForwardIterable::equal
pub trait BoundedIterable: ForwardIterable {
    fn end(&self) -> Self::Position;
}

/// A sequence that can also be traversed backward.
pub trait BidirectionalIterable: ForwardIterable {
    /// Moves `pos` to the previous element.
    ///
    /// `pos` must not be the beginning.
    fn prev(&self, pos: &mut Self::Position);

    /// Moves `pos` by `n` elements, backward when `n` is negative.
    ///
    /// The default steps one element at a time; random-access sequences
    /// override it with a constant-time jump.
    fn advance(&self, pos: &mut Self::Position, n: isize) {
        if n >= 0 {
            for _ in 0..n {
                self.next(pos);
            }
        } else {
            for _ in 0..n.unsigned_abs() {
                self.prev(pos);
            }
        }
    }
}

/// A sequence with constant-time [`advance`] and [`distance_to`].
///
/// [`advance`]: BidirectionalIterable::advance
/// [`distance_to`]: RandomAccessIterable::distance_to
pub trait RandomAccessIterable: BidirectionalIterable {
    /// Returns the number of [`next`](Iterable::next) steps from `from` to
    /// `to`, negative if `to` comes first.
    ///
    /// `distance_to(a, b) == -distance_to(b, a)` for any two positions.
    fn distance_to(&self, from: &Self::Position, to: &Self::Position) -> isize;
}

/// A sequence that knows its length without traversal.
pub trait SizedIterable: Iterable {
    fn size(&self) -> usize;
}
