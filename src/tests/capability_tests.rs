extern crate alloc;
extern crate std;

use crate::view::{self, ProjectView, ReverseView, TransformView};
use crate::{
    capabilities, is_bidirectional, is_bounded, is_random_access, is_single_pass, is_sized,
    BidirectionalIterable, BoundedIterable, Capabilities, ForwardIterable, Input, Iota, Iterable,
    RandomAccessIterable, SizedIterable, View,
};
use alloc::format;
use core::ops::Range;
use static_assertions::{assert_impl_all, assert_not_impl_any};

type Bytes = &'static [u8];
type Doubled = TransformView<Bytes, fn(&'static u8) -> u8>;
type Identity = ProjectView<Bytes, fn(&'static u8) -> &'static u8>;
type Pulled = Input<Range<u8>>;

fn capabilities_of<R: Iterable>(_: &R) -> Capabilities {
    R::CAPABILITIES
}

// =============================================================================
// Trait Implementations
// =============================================================================

assert_impl_all!(Bytes: RandomAccessIterable, BoundedIterable, SizedIterable);
assert_impl_all!(&'static [u8; 4]: RandomAccessIterable, BoundedIterable, SizedIterable);
assert_impl_all!(Iota<u32>: RandomAccessIterable, BoundedIterable, SizedIterable);
assert_impl_all!(Pulled: Iterable);
assert_not_impl_any!(Pulled: ForwardIterable, BoundedIterable, SizedIterable);

assert_impl_all!(ReverseView<Bytes>: RandomAccessIterable, BoundedIterable, SizedIterable);
assert_impl_all!(ReverseView<Iota<u16>>: RandomAccessIterable, BoundedIterable, SizedIterable);
assert_impl_all!(ReverseView<ReverseView<Bytes>>: RandomAccessIterable, SizedIterable);
assert_not_impl_any!(ReverseView<Pulled>: Iterable);
assert_not_impl_any!(ReverseView<Doubled>: Iterable);

assert_impl_all!(Doubled: Iterable, SizedIterable);
assert_not_impl_any!(Doubled: ForwardIterable, BoundedIterable, BidirectionalIterable);
assert_not_impl_any!(TransformView<Pulled, fn(u8) -> u8>: ForwardIterable, SizedIterable);

assert_impl_all!(Identity: RandomAccessIterable, BoundedIterable, SizedIterable);
assert_impl_all!(ReverseView<Identity>: RandomAccessIterable, SizedIterable);

assert_impl_all!(&'static View<crate::view::Reversed<Bytes>>: RandomAccessIterable, SizedIterable);

// =============================================================================
// Capability Constants
// =============================================================================

#[test]
fn test_flag_layout() {
    assert_eq!(Capabilities::SINGLE_PASS.bits(), 1);
    assert_eq!(
        Capabilities::INDEXED,
        Capabilities::BOUNDED
            | Capabilities::BIDIRECTIONAL
            | Capabilities::RANDOM_ACCESS
            | Capabilities::SIZED
    );
    assert!(!Capabilities::INDEXED.contains(Capabilities::SINGLE_PASS));
}

#[test]
fn test_source_capabilities() {
    assert_eq!(capabilities::<Bytes>(), Capabilities::INDEXED);
    assert_eq!(capabilities::<&[u8; 4]>(), Capabilities::INDEXED);
    assert_eq!(capabilities::<Iota<u64>>(), Capabilities::INDEXED);
    assert_eq!(capabilities::<Pulled>(), Capabilities::SINGLE_PASS);
}

#[test]
fn test_query_functions() {
    assert!(is_bounded::<Bytes>());
    assert!(is_bidirectional::<Bytes>());
    assert!(is_random_access::<Bytes>());
    assert!(is_sized::<Bytes>());
    assert!(!is_single_pass::<Bytes>());

    assert!(is_single_pass::<Pulled>());
    assert!(!is_bounded::<Pulled>());
    assert!(!is_bidirectional::<Pulled>());
    assert!(!is_sized::<Pulled>());
}

#[test]
fn test_reverse_keeps_capabilities() {
    assert_eq!(capabilities::<ReverseView<Bytes>>(), Capabilities::INDEXED);
    assert_eq!(capabilities::<ReverseView<Iota<u8>>>(), Capabilities::INDEXED);
    assert_eq!(
        capabilities::<ReverseView<ReverseView<Bytes>>>(),
        Capabilities::INDEXED
    );
}

#[test]
fn test_transform_is_single_pass() {
    assert_eq!(
        capabilities::<Doubled>(),
        Capabilities::SINGLE_PASS | Capabilities::SIZED
    );
    assert_eq!(
        capabilities::<TransformView<Pulled, fn(u8) -> u8>>(),
        Capabilities::SINGLE_PASS
    );
    assert_eq!(
        capabilities::<TransformView<Iota<u32>, fn(u32) -> u32>>(),
        Capabilities::SINGLE_PASS | Capabilities::SIZED
    );

    let data = [1, 2, 3];
    let doubled = view::transform(&data, |x: &i32| x * 2);
    assert_eq!(
        capabilities_of(&doubled),
        Capabilities::SINGLE_PASS | Capabilities::SIZED
    );
}

#[test]
fn test_project_keeps_capabilities() {
    assert_eq!(capabilities::<Identity>(), Capabilities::INDEXED);

    let pairs = [(1, 'a'), (2, 'b')];
    let firsts = view::project(&pairs, |p| &p.0);
    assert_eq!(capabilities_of(&firsts), Capabilities::INDEXED);
    assert_eq!(capabilities_of(&view::reverse(&firsts)), Capabilities::INDEXED);
}

#[test]
fn test_borrowed_view_matches_owned() {
    assert_eq!(
        capabilities::<&ReverseView<Bytes>>(),
        capabilities::<ReverseView<Bytes>>()
    );
    assert_eq!(capabilities::<&Doubled>(), capabilities::<Doubled>());
}

#[test]
fn test_debug_format() {
    assert_eq!(
        format!("{:?}", Capabilities::SINGLE_PASS | Capabilities::SIZED),
        "Capabilities(SINGLE_PASS | SIZED)"
    );
}
