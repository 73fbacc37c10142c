use crate::{
    BidirectionalIterable, BoundedIterable, Capabilities, ForwardIterable, Iterable,
    RandomAccessIterable, SizedIterable,
};

// Borrowed slices and arrays are addressed by index.
macro_rules! impl_indexed_iterable {
    ([$($generics:tt)*] $ty:ty) => {
        impl<$($generics)*> Iterable for $ty {
            type Position = usize;
            type Item = &'a T;

            const CAPABILITIES: Capabilities = Capabilities::INDEXED;

            #[inline]
            fn begin(&self) -> usize {
                0
            }

            #[inline]
            fn is_end(&self, pos: &usize) -> bool {
                *pos == self.len()
            }

            #[inline]
            fn current(&self, pos: &usize) -> &'a T {
                let items: &'a [T] = &self[..];
                &items[*pos]
            }

            #[inline]
            fn next(&self, pos: &mut usize) {
                debug_assert!(*pos < self.len(), "advanced past the end of a slice");
                *pos += 1;
            }

            #[inline]
            fn remaining_hint(&self, pos: &usize) -> (usize, Option<usize>) {
                let rest = self.len().saturating_sub(*pos);
                (rest, Some(rest))
            }
        }

        impl<$($generics)*> ForwardIterable for $ty {
            #[inline]
            fn equal(&self, a: &usize, b: &usize) -> bool {
                a == b
            }
        }

        impl<$($generics)*> BoundedIterable for $ty {
            #[inline]
            fn end(&self) -> usize {
                self.len()
            }
        }

        impl<$($generics)*> BidirectionalIterable for $ty {
            #[inline]
            fn prev(&self, pos: &mut usize) {
                debug_assert!(*pos > 0, "stepped before the beginning of a slice");
                *pos -= 1;
            }

            #[inline]
            fn advance(&self, pos: &mut usize, n: isize) {
                let moved = pos.wrapping_add_signed(n);
                debug_assert!(
                    pos.checked_add_signed(n).is_some() && moved <= self.len(),
                    "advanced outside of a slice"
                );
                *pos = moved;
            }
        }

        impl<$($generics)*> RandomAccessIterable for $ty {
            #[inline]
            fn distance_to(&self, from: &usize, to: &usize) -> isize {
                *to as isize - *from as isize
            }
        }

        impl<$($generics)*> SizedIterable for $ty {
            #[inline]
            fn size(&self) -> usize {
                self.len()
            }
        }
    };
}

impl_indexed_iterable!(['a, T] &'a [T]);
impl_indexed_iterable!(['a, T, const N: usize] &'a [T; N]);
