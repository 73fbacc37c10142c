use core::fmt;
use core::marker::PhantomData;

use crate::{Iterable, MultiPass, Passthrough, SinglePass, View};

/// Cursor of a [`TransformView`] or [`ProjectView`].
///
/// The function is stored once, in the cursor; positions are those of the
/// base and never carry a copy of it. To share one function between several
/// views, pass `&f`, since `&F` is callable whenever `F` is.
pub struct Transformed<R, F, T> {
    base: R,
    fun: F,
    traversal: PhantomData<T>,
}

/// A view applying a function to every element of its base.
pub type TransformView<R, F> = View<Transformed<R, F, SinglePass>>;

/// A view applying a reference-returning function to every element.
pub type ProjectView<R, F> = View<Transformed<R, F, MultiPass>>;

/// Returns a view yielding `fun(x)` for every element `x` of `rng`.
///
/// Each read calls `fun` again and yields a fresh value, so the view is
/// single-pass: it cannot be reversed or jumped through, whatever `rng`
/// supports. Use [`project`] when `fun` returns a reference into the
/// element.
///
/// # Examples
/// ```
/// use range_views::view;
///
/// let data = [1, 2, 3];
/// let doubled = view::transform(&data, |x| x * 2);
///
/// assert_eq!(doubled.size(), 3);
/// assert_eq!(doubled.into_iter().collect::<Vec<_>>(), vec![2, 4, 6]);
/// ```
#[inline]
pub fn transform<R, F, O>(rng: R, fun: F) -> TransformView<R, F>
where
    R: Iterable,
    F: Fn(R::Item) -> O,
{
    View::new(Transformed {
        base: rng,
        fun,
        traversal: PhantomData,
    })
}

/// Returns a view yielding `fun(x)` for every element `x` of `rng`, where
/// `fun` returns a reference that outlives the view.
///
/// The view keeps every capability of `rng`.
///
/// # Examples
/// ```
/// use range_views::view;
///
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let points = [Point { x: 1, y: 2 }, Point { x: 3, y: 4 }];
/// let xs = view::project(&points, |p| &p.x);
/// let back_to_front = view::reverse(xs);
///
/// assert_eq!(back_to_front.iter().copied().collect::<Vec<_>>(), vec![3, 1]);
/// # let _ = points[0].y;
/// ```
#[inline]
pub fn project<'a, R, F, U>(rng: R, fun: F) -> ProjectView<R, F>
where
    R: Iterable,
    F: Fn(R::Item) -> &'a U,
    U: ?Sized + 'a,
{
    View::new(Transformed {
        base: rng,
        fun,
        traversal: PhantomData,
    })
}

impl<R, F, T> Transformed<R, F, T> {
    /// Returns the function applied to every element.
    #[inline]
    pub fn function(&self) -> &F {
        &self.fun
    }
}

impl<R: Clone, F: Clone, T> Clone for Transformed<R, F, T> {
    fn clone(&self) -> Self {
        Self {
            base: self.base.clone(),
            fun: self.fun.clone(),
            traversal: PhantomData,
        }
    }
}

impl<R: Copy, F: Copy, T> Copy for Transformed<R, F, T> {}

impl<R: fmt::Debug, F, T> fmt::Debug for Transformed<R, F, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transformed")
            .field("base", &self.base)
            .finish_non_exhaustive()
    }
}

impl<R, F, O> Passthrough for Transformed<R, F, SinglePass>
where
    R: Iterable,
    F: Fn(R::Item) -> O,
{
    type Base = R;
    type Item = O;
    type Traversal = SinglePass;

    #[inline]
    fn underlying(&self) -> &R {
        &self.base
    }

    #[inline]
    fn read(&self, pos: &R::Position) -> O {
        (self.fun)(self.base.current(pos))
    }
}

impl<'a, R, F, U> Passthrough for Transformed<R, F, MultiPass>
where
    R: Iterable,
    F: Fn(R::Item) -> &'a U,
    U: ?Sized + 'a,
{
    type Base = R;
    type Item = &'a U;
    type Traversal = MultiPass;

    #[inline]
    fn underlying(&self) -> &R {
        &self.base
    }

    #[inline]
    fn read(&self, pos: &R::Position) -> &'a U {
        (self.fun)(self.base.current(pos))
    }
}
