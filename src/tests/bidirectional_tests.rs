extern crate alloc;
extern crate std;

use crate::view::{self, ProjectView, ReverseView, RevPosition, TransformView};
use crate::{
    capabilities, BidirectionalIterable, BoundedIterable, Capabilities, ForwardIterable, Iterable,
    IterableExt, RandomAccessIterable, SizedIterable,
};
use alloc::vec;
use alloc::vec::Vec;
use core::cell::Cell;
use static_assertions::{assert_impl_all, assert_not_impl_any};

/// Walks a slice one rung at a time: bidirectional and bounded, without
/// jumps or a known size. Counts every step it takes.
#[derive(Clone, Copy)]
struct Ladder<'a> {
    rungs: &'a [i32],
    steps: &'a Cell<usize>,
}

impl<'a> Ladder<'a> {
    fn new(rungs: &'a [i32], steps: &'a Cell<usize>) -> Self {
        Self { rungs, steps }
    }
}

impl<'a> Iterable for Ladder<'a> {
    type Position = usize;
    type Item = &'a i32;

    const CAPABILITIES: Capabilities = Capabilities::BOUNDED.union(Capabilities::BIDIRECTIONAL);

    fn begin(&self) -> usize {
        0
    }

    fn is_end(&self, pos: &usize) -> bool {
        *pos == self.rungs.len()
    }

    fn current(&self, pos: &usize) -> &'a i32 {
        &self.rungs[*pos]
    }

    fn next(&self, pos: &mut usize) {
        self.steps.set(self.steps.get() + 1);
        *pos += 1;
    }
}

impl ForwardIterable for Ladder<'_> {
    fn equal(&self, a: &usize, b: &usize) -> bool {
        a == b
    }
}

impl BoundedIterable for Ladder<'_> {
    fn end(&self) -> usize {
        self.rungs.len()
    }
}

impl BidirectionalIterable for Ladder<'_> {
    fn prev(&self, pos: &mut usize) {
        self.steps.set(self.steps.get() + 1);
        *pos -= 1;
    }
}

/// A multi-pass sequence that only moves forward and has no end position.
#[derive(Clone, Copy)]
struct Trail<'a> {
    stones: &'a [i32],
}

impl<'a> Iterable for Trail<'a> {
    type Position = usize;
    type Item = &'a i32;

    const CAPABILITIES: Capabilities = Capabilities::empty();

    fn begin(&self) -> usize {
        0
    }

    fn is_end(&self, pos: &usize) -> bool {
        *pos == self.stones.len()
    }

    fn current(&self, pos: &usize) -> &'a i32 {
        &self.stones[*pos]
    }

    fn next(&self, pos: &mut usize) {
        *pos += 1;
    }
}

impl ForwardIterable for Trail<'_> {
    fn equal(&self, a: &usize, b: &usize) -> bool {
        a == b
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

assert_impl_all!(Ladder<'static>: BidirectionalIterable, BoundedIterable);
assert_not_impl_any!(Ladder<'static>: RandomAccessIterable, SizedIterable);
assert_impl_all!(ReverseView<Ladder<'static>>: BidirectionalIterable, BoundedIterable);
assert_not_impl_any!(ReverseView<Ladder<'static>>: RandomAccessIterable, SizedIterable);

assert_impl_all!(Trail<'static>: ForwardIterable);
assert_not_impl_any!(Trail<'static>: BoundedIterable, BidirectionalIterable);
assert_not_impl_any!(ReverseView<Trail<'static>>: Iterable);
assert_impl_all!(ProjectView<Trail<'static>, fn(&'static i32) -> &'static i32>: ForwardIterable);
assert_not_impl_any!(
    ProjectView<Trail<'static>, fn(&'static i32) -> &'static i32>: BoundedIterable,
    BidirectionalIterable
);

// =============================================================================
// Capabilities
// =============================================================================

#[test]
fn test_bidirectional_capabilities() {
    let expected = Capabilities::BOUNDED | Capabilities::BIDIRECTIONAL;
    assert_eq!(capabilities::<Ladder<'static>>(), expected);
    assert_eq!(capabilities::<ReverseView<Ladder<'static>>>(), expected);
    assert_eq!(
        capabilities::<ReverseView<ReverseView<Ladder<'static>>>>(),
        expected
    );
    assert_eq!(
        capabilities::<TransformView<Ladder<'static>, fn(&'static i32) -> i32>>(),
        Capabilities::SINGLE_PASS
    );
}

#[test]
fn test_forward_only_capabilities() {
    assert_eq!(capabilities::<Trail<'static>>(), Capabilities::empty());
    assert_eq!(
        capabilities::<ProjectView<Trail<'static>, fn(&'static i32) -> &'static i32>>(),
        Capabilities::empty()
    );
    assert_eq!(
        capabilities::<TransformView<Trail<'static>, fn(&'static i32) -> i32>>(),
        Capabilities::SINGLE_PASS
    );
}

// =============================================================================
// Reverse Over a Bidirectional Base
// =============================================================================

#[test]
fn test_reverse_traversal() {
    let steps = Cell::new(0);
    let rungs = [1, 2, 3, 4, 5];
    let reversed = view::reverse(Ladder::new(&rungs, &steps));

    assert_eq!(reversed.iter().copied().collect::<Vec<_>>(), vec![5, 4, 3, 2, 1]);
    assert_eq!(
        reversed.double_ended().rev().copied().collect::<Vec<_>>(),
        vec![1, 2, 3, 4, 5]
    );

    let restored = view::reverse(&reversed);
    assert_eq!(restored.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_reverse_empty_base() {
    let steps = Cell::new(0);
    let reversed = view::reverse(Ladder::new(&[], &steps));

    assert!(reversed.is_empty());
    assert_eq!(reversed.begin(), RevPosition::End);
    assert!(reversed.equal(&reversed.begin(), &reversed.end()));
    assert_eq!(reversed.iter().count(), 0);
    assert_eq!(steps.get(), 0);
}

#[test]
fn test_base_advance_steps_one_at_a_time() {
    let steps = Cell::new(0);
    let rungs = [1, 2, 3, 4, 5];
    let ladder = Ladder::new(&rungs, &steps);

    let mut pos = ladder.begin();
    ladder.advance(&mut pos, 4);
    assert_eq!(pos, 4);
    assert_eq!(steps.get(), 4);

    ladder.advance(&mut pos, -3);
    assert_eq!(pos, 1);
    assert_eq!(steps.get(), 7);

    ladder.advance(&mut pos, 0);
    assert_eq!(steps.get(), 7);
}

#[test]
fn test_reverse_advance_matches_repeated_steps() {
    let steps = Cell::new(0);
    let rungs = [1, 2, 3, 4, 5];
    let reversed = view::reverse(Ladder::new(&rungs, &steps));

    for n in 0..=5 {
        let mut jumped = reversed.begin();
        reversed.advance(&mut jumped, n);
        let mut walked = reversed.begin();
        for _ in 0..n {
            reversed.next(&mut walked);
        }
        assert!(reversed.equal(&jumped, &walked), "forward by {n}");

        let mut jumped = reversed.end();
        reversed.advance(&mut jumped, -n);
        let mut walked = reversed.end();
        for _ in 0..n {
            reversed.prev(&mut walked);
        }
        assert!(reversed.equal(&jumped, &walked), "backward by {n}");
    }
}

#[test]
fn test_unknown_size_hint() {
    let steps = Cell::new(0);
    let rungs = [1, 2];
    let reversed = view::reverse(Ladder::new(&rungs, &steps));

    assert_eq!(Ladder::new(&rungs, &steps).into_range_iter().size_hint(), (0, None));
    assert_eq!(reversed.iter().size_hint(), (1, None));
    assert_eq!(reversed.double_ended().size_hint(), (1, None));
}

// =============================================================================
// Views Over a Forward-Only Base
// =============================================================================

#[test]
fn test_project_forward_only() {
    let stones = [1, 2];
    let same = view::project(Trail { stones: &stones }, |x| x);

    let mut pos = same.begin();
    let saved = pos;
    same.next(&mut pos);
    assert_eq!(*same.current(&pos), 2);
    // A saved position still reads the same element.
    assert_eq!(*same.current(&saved), 1);
    assert!(!same.equal(&pos, &saved));
}

#[test]
fn test_transform_forward_only() {
    let stones = [3, 1, 4];
    let squares = view::transform(Trail { stones: &stones }, |x: &i32| x * x);
    assert_eq!(squares.into_iter().collect::<Vec<_>>(), vec![9, 1, 16]);
}
