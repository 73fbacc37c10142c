use crate::{
    BidirectionalCursor, BidirectionalIterable, BoundedCursor, BoundedIterable, Capabilities,
    Cursor, ForwardCursor, RandomAccessCursor, RandomAccessIterable, SizedCursor, SizedIterable,
    View,
};

/// A position within a [`ReverseView`].
///
/// The end of a reversed sequence lies before the first element of its
/// base, where the base has no position of its own; it is represented by
/// the separate `End` variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RevPosition<P> {
    At(P),
    End,
}

/// Cursor of a [`ReverseView`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Reversed<R> {
    base: R,
}

/// A view traversing its base from back to front.
pub type ReverseView<R> = View<Reversed<R>>;

/// Returns a view of `rng` in reverse order.
///
/// # Examples
/// ```
/// use range_views::view;
///
/// let data = [1, 2, 3, 4, 5];
/// let reversed = view::reverse(&data);
/// assert_eq!(reversed.iter().copied().collect::<Vec<_>>(), vec![5, 4, 3, 2, 1]);
///
/// let twice = view::reverse(view::reverse(&data));
/// assert_eq!(twice.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
/// ```
#[inline]
pub fn reverse<R>(rng: R) -> ReverseView<R>
where
    R: BidirectionalIterable + BoundedIterable,
{
    View::new(Reversed { base: rng })
}

impl<R> Reversed<R>
where
    R: BidirectionalIterable + BoundedIterable,
{
    #[inline]
    fn is_first(&self, pos: &R::Position) -> bool {
        self.base.equal(pos, &self.base.begin())
    }
}

impl<R> Cursor for Reversed<R>
where
    R: BidirectionalIterable + BoundedIterable,
{
    type Base = R;
    type Position = RevPosition<R::Position>;
    type Item = R::Item;

    const CAPABILITIES: Capabilities = R::CAPABILITIES;

    #[inline]
    fn base(&self) -> &R {
        &self.base
    }

    fn begin(&self) -> Self::Position {
        let mut last = self.base.end();
        // An empty base has no last element to step back to.
        if self.is_first(&last) {
            return RevPosition::End;
        }
        self.base.prev(&mut last);
        RevPosition::At(last)
    }

    #[inline]
    fn current(&self, pos: &Self::Position) -> R::Item {
        match pos {
            RevPosition::At(pos) => self.base.current(pos),
            RevPosition::End => panic!("dereferenced the end of a reversed view"),
        }
    }

    fn next(&self, pos: &mut Self::Position) {
        let at_first = match pos {
            RevPosition::At(pos) => self.is_first(pos),
            RevPosition::End => {
                debug_assert!(false, "advanced past the end of a reversed view");
                return;
            }
        };
        if at_first {
            *pos = RevPosition::End;
        } else if let RevPosition::At(pos) = pos {
            self.base.prev(pos);
        }
    }

    #[inline]
    fn is_end(&self, pos: &Self::Position) -> bool {
        matches!(pos, RevPosition::End)
    }

    // Everything before `at` in the base, plus `at` itself.
    fn remaining_hint(&self, pos: &Self::Position) -> (usize, Option<usize>) {
        let at = match pos {
            RevPosition::At(at) => at,
            RevPosition::End => return (0, Some(0)),
        };
        match (
            self.base.remaining_hint(&self.base.begin()),
            self.base.remaining_hint(at),
        ) {
            ((total, Some(total_upper)), (after, Some(after_upper)))
                if total == total_upper && after == after_upper =>
            {
                let rest = total.saturating_sub(after) + 1;
                (rest, Some(rest))
            }
            _ => (1, None),
        }
    }
}

impl<R> ForwardCursor for Reversed<R>
where
    R: BidirectionalIterable + BoundedIterable,
{
    #[inline]
    fn equal(&self, a: &Self::Position, b: &Self::Position) -> bool {
        match (a, b) {
            (RevPosition::At(a), RevPosition::At(b)) => self.base.equal(a, b),
            (RevPosition::End, RevPosition::End) => true,
            _ => false,
        }
    }
}

impl<R> BoundedCursor for Reversed<R>
where
    R: BidirectionalIterable + BoundedIterable,
{
    #[inline]
    fn end(&self) -> Self::Position {
        RevPosition::End
    }
}

impl<R> BidirectionalCursor for Reversed<R>
where
    R: BidirectionalIterable + BoundedIterable,
{
    fn prev(&self, pos: &mut Self::Position) {
        match pos {
            RevPosition::At(pos) => self.base.next(pos),
            RevPosition::End => {
                let first = self.base.begin();
                debug_assert!(
                    !self.base.is_end(&first),
                    "stepped before the beginning of an empty reversed view"
                );
                *pos = RevPosition::At(first);
            }
        }
    }

    fn advance(&self, pos: &mut Self::Position, n: isize) {
        // Move one short of the target in base terms, then take a single
        // `next`/`prev` so that crossing into `End` happens exactly once.
        if n > 0 {
            match pos {
                RevPosition::At(at) => self.base.advance(at, 1 - n),
                RevPosition::End => {
                    debug_assert!(false, "advanced past the end of a reversed view");
                    return;
                }
            }
            self.next(pos);
        } else if n < 0 {
            self.prev(pos);
            if let RevPosition::At(at) = pos {
                self.base.advance(at, -n - 1);
            }
        }
    }
}

impl<R> Reversed<R>
where
    R: RandomAccessIterable + BoundedIterable,
{
    // A dereferenceable position of this view lies within the base.
    fn debug_assert_owned(&self, first: &R::Position, pos: &RevPosition<R::Position>) {
        if let RevPosition::At(at) = pos {
            let len = self.base.distance_to(first, &self.base.end());
            let index = self.base.distance_to(first, at);
            debug_assert!(
                (0..len).contains(&index),
                "position does not belong to this reversed view"
            );
        }
    }
}

impl<R> RandomAccessCursor for Reversed<R>
where
    R: RandomAccessIterable + BoundedIterable,
{
    fn distance_to(&self, from: &Self::Position, to: &Self::Position) -> isize {
        let first = self.base.begin();
        if cfg!(debug_assertions) {
            self.debug_assert_owned(&first, from);
            self.debug_assert_owned(&first, to);
        }
        match (from, to) {
            (RevPosition::End, RevPosition::End) => 0,
            (RevPosition::At(from), RevPosition::End) => self.base.distance_to(&first, from) + 1,
            (RevPosition::End, RevPosition::At(to)) => -self.base.distance_to(&first, to) - 1,
            (RevPosition::At(from), RevPosition::At(to)) => self.base.distance_to(to, from),
        }
    }
}

impl<R> SizedCursor for Reversed<R>
where
    R: BidirectionalIterable + BoundedIterable + SizedIterable,
{
    #[inline]
    fn size(&self) -> usize {
        self.base.size()
    }
}
