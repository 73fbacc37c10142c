use core::iter::FusedIterator;

use crate::{BidirectionalIterable, BoundedIterable, Iterable, RandomAccessIterable};

/// An [`Iterator`] over any [`Iterable`], stopping at its sentinel.
///
/// `Iter` owns the sequence it walks; pass a reference (for example
/// `&View<A>`) to iterate without giving the sequence up.
#[derive(Clone)]
pub struct Iter<R: Iterable> {
    rng: R,
    pos: R::Position,
}

impl<R: Iterable> Iter<R> {
    #[inline]
    pub fn new(rng: R) -> Self {
        let pos = rng.begin();
        Self { rng, pos }
    }

    /// Returns the position of the next element to be yielded.
    #[inline]
    pub fn position(&self) -> &R::Position {
        &self.pos
    }

    #[inline]
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: Iterable> Iterator for Iter<R> {
    type Item = R::Item;

    #[inline]
    fn next(&mut self) -> Option<R::Item> {
        if self.rng.is_end(&self.pos) {
            return None;
        }
        let item = self.rng.current(&self.pos);
        self.rng.next(&mut self.pos);
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.rng.is_end(&self.pos) {
            return (0, Some(0));
        }
        self.rng.remaining_hint(&self.pos)
    }
}

impl<R: Iterable> FusedIterator for Iter<R> {}

/// An [`Iterator`] over a bounded bidirectional sequence that can be consumed
/// from both ends.
#[derive(Clone)]
pub struct DoubleEndedIter<R: Iterable> {
    rng: R,
    front: R::Position,
    back: R::Position,
}

impl<R> DoubleEndedIter<R>
where
    R: BidirectionalIterable + BoundedIterable,
{
    #[inline]
    pub fn new(rng: R) -> Self {
        let front = rng.begin();
        let back = rng.end();
        Self { rng, front, back }
    }

    #[inline]
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R> DoubleEndedIter<R>
where
    R: BidirectionalIterable + BoundedIterable,
{
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rng.equal(&self.front, &self.back)
    }
}

impl<R> Iterator for DoubleEndedIter<R>
where
    R: BidirectionalIterable + BoundedIterable,
{
    type Item = R::Item;

    #[inline]
    fn next(&mut self) -> Option<R::Item> {
        if self.rng.equal(&self.front, &self.back) {
            return None;
        }
        let item = self.rng.current(&self.front);
        self.rng.next(&mut self.front);
        Some(item)
    }

    // Elements from `front` on, minus those from `back` on.
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.rng.equal(&self.front, &self.back) {
            return (0, Some(0));
        }
        match (
            self.rng.remaining_hint(&self.front),
            self.rng.remaining_hint(&self.back),
        ) {
            ((front, Some(front_upper)), (back, Some(back_upper)))
                if front == front_upper && back == back_upper =>
            {
                let rest = front.saturating_sub(back);
                (rest, Some(rest))
            }
            ((_, front_upper), _) => (1, front_upper),
        }
    }
}

impl<R> DoubleEndedIterator for DoubleEndedIter<R>
where
    R: BidirectionalIterable + BoundedIterable,
{
    #[inline]
    fn next_back(&mut self) -> Option<R::Item> {
        if self.rng.equal(&self.front, &self.back) {
            return None;
        }
        self.rng.prev(&mut self.back);
        Some(self.rng.current(&self.back))
    }
}

/// The length is measured with [`distance_to`](RandomAccessIterable::distance_to)
/// in constant time.
impl<R> ExactSizeIterator for DoubleEndedIter<R>
where
    R: RandomAccessIterable + BoundedIterable,
{
    #[inline]
    fn len(&self) -> usize {
        self.rng.distance_to(&self.front, &self.back) as usize
    }
}

impl<R> FusedIterator for DoubleEndedIter<R> where R: BidirectionalIterable + BoundedIterable {}

/// Iteration entry points for every [`Iterable`].
pub trait IterableExt: Iterable + Sized {
    /// Converts the sequence into an [`Iter`].
    #[inline]
    fn into_range_iter(self) -> Iter<Self> {
        Iter::new(self)
    }

    /// Converts the sequence into a [`DoubleEndedIter`].
    #[inline]
    fn into_double_ended(self) -> DoubleEndedIter<Self>
    where
        Self: BidirectionalIterable + BoundedIterable,
    {
        DoubleEndedIter::new(self)
    }
}

impl<R: Iterable> IterableExt for R {}
