//! Pipeline syntax: adaptors with their arguments bound, waiting for a
//! sequence.
//!
//! Every function in [`view`](crate::view) and [`algorithm`](crate::algorithm)
//! has a counterpart here that takes everything except the sequence. The
//! result is applied with [`Pipe::pipe`], or with `|` on sequences owned by
//! this crate ([`View`](crate::View), [`Iota`](crate::Iota) and
//! [`Input`](crate::Input)). The merge adaptors also accept `|` on a
//! mutable slice:
//!
//! ```
//! use range_views::{pipe, Iota, Pipe};
//!
//! let data = [1, 2, 3];
//! let piped = (&data).pipe(pipe::reverse()) | pipe::transform(|x: &i32| x * 10);
//! assert_eq!(piped.into_iter().collect::<Vec<_>>(), vec![30, 20, 10]);
//!
//! let squares = Iota::new(0u32, 4) | pipe::transform(|x: u32| x * x);
//! assert_eq!(squares.into_iter().collect::<Vec<_>>(), vec![0, 1, 4, 9]);
//!
//! let mut runs = [5, 3, 1, 4, 2];
//! let _ = &mut runs[..] | pipe::inplace_merge_by(3, |a: &i32, b: &i32| b.cmp(a));
//! assert_eq!(runs, [5, 4, 3, 2, 1]);
//! ```

use core::cmp::Ordering;
use core::ops::BitOr;

use crate::algorithm;
use crate::view::{self, ProjectView, ReverseView, TransformView};
use crate::{BidirectionalIterable, BoundedIterable, Iterable};

/// An adaptor with its arguments bound, applicable to a sequence `R`.
pub trait Pipeable<R> {
    type Output;

    fn apply(self, rng: R) -> Self::Output;
}

/// Applies [`Pipeable`] adaptors with method syntax.
pub trait Pipe: Sized {
    #[inline]
    fn pipe<P: Pipeable<Self>>(self, adaptor: P) -> P::Output {
        adaptor.apply(self)
    }
}

impl<R> Pipe for R {}

/// Bound form of [`view::reverse`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ReverseFn;

#[inline]
pub fn reverse() -> ReverseFn {
    ReverseFn
}

impl<R> Pipeable<R> for ReverseFn
where
    R: BidirectionalIterable + BoundedIterable,
{
    type Output = ReverseView<R>;

    #[inline]
    fn apply(self, rng: R) -> ReverseView<R> {
        view::reverse(rng)
    }
}

/// Bound form of [`view::transform`].
#[derive(Clone, Copy, Debug)]
pub struct TransformFn<F> {
    fun: F,
}

#[inline]
pub fn transform<F>(fun: F) -> TransformFn<F> {
    TransformFn { fun }
}

impl<R, F, O> Pipeable<R> for TransformFn<F>
where
    R: Iterable,
    F: Fn(R::Item) -> O,
{
    type Output = TransformView<R, F>;

    #[inline]
    fn apply(self, rng: R) -> TransformView<R, F> {
        view::transform(rng, self.fun)
    }
}

/// Bound form of [`view::project`].
#[derive(Clone, Copy, Debug)]
pub struct ProjectFn<F> {
    fun: F,
}

/// The function's signature is fixed here so that closures such as
/// `|p: &Point| &p.x` tie their output to their input.
#[inline]
pub fn project<T, U, F>(fun: F) -> ProjectFn<F>
where
    T: ?Sized,
    U: ?Sized,
    F: Fn(&T) -> &U,
{
    ProjectFn { fun }
}

impl<'a, R, F, U> Pipeable<R> for ProjectFn<F>
where
    R: Iterable,
    F: Fn(R::Item) -> &'a U,
    U: ?Sized + 'a,
{
    type Output = ProjectView<R, F>;

    #[inline]
    fn apply(self, rng: R) -> ProjectView<R, F> {
        view::project(rng, self.fun)
    }
}

/// Bound form of [`algorithm::inplace_merge`].
#[derive(Clone, Copy, Debug)]
pub struct InplaceMergeFn {
    mid: usize,
}

#[inline]
pub fn inplace_merge(mid: usize) -> InplaceMergeFn {
    InplaceMergeFn { mid }
}

impl<'a, T: Ord> Pipeable<&'a mut [T]> for InplaceMergeFn {
    type Output = &'a mut [T];

    #[inline]
    fn apply(self, rng: &'a mut [T]) -> &'a mut [T] {
        algorithm::inplace_merge(rng, self.mid)
    }
}

impl<'a, T: Ord> BitOr<InplaceMergeFn> for &'a mut [T] {
    type Output = &'a mut [T];

    #[inline]
    fn bitor(self, adaptor: InplaceMergeFn) -> &'a mut [T] {
        adaptor.apply(self)
    }
}

/// Bound form of [`algorithm::inplace_merge_by`].
#[derive(Clone, Copy, Debug)]
pub struct InplaceMergeByFn<C> {
    mid: usize,
    compare: C,
}

#[inline]
pub fn inplace_merge_by<C>(mid: usize, compare: C) -> InplaceMergeByFn<C> {
    InplaceMergeByFn { mid, compare }
}

impl<'a, T, C> Pipeable<&'a mut [T]> for InplaceMergeByFn<C>
where
    C: FnMut(&T, &T) -> Ordering,
{
    type Output = &'a mut [T];

    #[inline]
    fn apply(self, rng: &'a mut [T]) -> &'a mut [T] {
        algorithm::inplace_merge_by(rng, self.mid, self.compare)
    }
}

impl<'a, T, C> BitOr<InplaceMergeByFn<C>> for &'a mut [T]
where
    C: FnMut(&T, &T) -> Ordering,
{
    type Output = &'a mut [T];

    #[inline]
    fn bitor(self, adaptor: InplaceMergeByFn<C>) -> &'a mut [T] {
        adaptor.apply(self)
    }
}
