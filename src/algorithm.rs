//! In-place algorithms over slices.

use core::cmp::Ordering;

use crate::Error;

/// Merges the ordered runs `rng[..mid]` and `rng[mid..]` into one ordered
/// run, in place, and returns `rng` for chaining.
///
/// The merge is stable: of two equal elements, the one from the left run
/// comes first. It allocates nothing and runs in *O*(*n* log *n*) time.
///
/// If either run is not ordered the result is an unspecified permutation;
/// use [`try_inplace_merge`] to check the runs first.
///
/// # Panics
/// If `mid > rng.len()`.
///
/// # Examples
/// ```
/// use range_views::algorithm::inplace_merge;
///
/// let mut data = [1, 3, 5, 2, 4, 6];
/// inplace_merge(&mut data, 3);
/// assert_eq!(data, [1, 2, 3, 4, 5, 6]);
/// ```
#[inline]
pub fn inplace_merge<T: Ord>(rng: &mut [T], mid: usize) -> &mut [T] {
    merge_runs(rng, mid, &mut T::lt);
    rng
}

/// Like [`inplace_merge`], ordering elements with `compare`.
///
/// # Examples
/// ```
/// use range_views::algorithm::inplace_merge_by;
///
/// let mut data = [5, 3, 1, 6, 4, 2];
/// inplace_merge_by(&mut data, 3, |a, b| b.cmp(a));
/// assert_eq!(data, [6, 5, 4, 3, 2, 1]);
/// ```
#[inline]
pub fn inplace_merge_by<T, F>(rng: &mut [T], mid: usize, mut compare: F) -> &mut [T]
where
    F: FnMut(&T, &T) -> Ordering,
{
    merge_runs(rng, mid, &mut |a: &T, b: &T| compare(a, b) == Ordering::Less);
    rng
}

/// Like [`inplace_merge`], ordering elements by the key `f` extracts.
#[inline]
pub fn inplace_merge_by_key<T, K, F>(rng: &mut [T], mid: usize, mut f: F) -> &mut [T]
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    merge_runs(rng, mid, &mut |a: &T, b: &T| f(a) < f(b));
    rng
}

/// Like [`inplace_merge`], but checks the midpoint and both runs first.
///
/// On error `rng` is left untouched.
///
/// # Examples
/// ```
/// use range_views::{algorithm::try_inplace_merge, Error};
///
/// let mut data = [1, 3, 5, 2, 4, 6];
/// assert_eq!(try_inplace_merge(&mut data, 7), Err(Error::MidpointOutOfRange { mid: 7, len: 6 }));
/// assert_eq!(try_inplace_merge(&mut data, 3).map(|merged| merged.len()), Ok(6));
/// assert_eq!(data, [1, 2, 3, 4, 5, 6]);
/// ```
#[inline]
pub fn try_inplace_merge<T: Ord>(rng: &mut [T], mid: usize) -> Result<&mut [T], Error> {
    try_inplace_merge_by(rng, mid, T::cmp)
}

/// Like [`inplace_merge_by`], but checks the midpoint and both runs first.
pub fn try_inplace_merge_by<T, F>(rng: &mut [T], mid: usize, mut compare: F) -> Result<&mut [T], Error>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = rng.len();
    let checked = if mid > len {
        Err(Error::MidpointOutOfRange { mid, len })
    } else {
        check_ordered(&rng[..mid], 0, &mut compare)
            .and_then(|()| check_ordered(&rng[mid..], mid, &mut compare))
    };
    if let Err(err) = checked {
        log::debug!("rejected inplace_merge input: {err}");
        return Err(err);
    }
    Ok(inplace_merge_by(rng, mid, compare))
}

fn check_ordered<T, F>(run: &[T], offset: usize, compare: &mut F) -> Result<(), Error>
where
    F: FnMut(&T, &T) -> Ordering,
{
    match run
        .windows(2)
        .position(|pair| compare(&pair[1], &pair[0]) == Ordering::Less)
    {
        Some(i) => Err(Error::UnorderedRun {
            start: offset,
            end: offset + run.len(),
            at: offset + i + 1,
        }),
        None => Ok(()),
    }
}

fn merge_runs<T, F>(v: &mut [T], mid: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    assert!(mid <= v.len(), "midpoint must not exceed the sequence length");
    if mid == 0 || mid == v.len() {
        return;
    }
    if !is_less(&v[mid], &v[mid - 1]) {
        log::trace!("inplace_merge: runs of {} and {} already in order", mid, v.len() - mid);
        return;
    }
    merge_without_buffer(v, mid, is_less);
}

// Splits the longer run in half, finds where that element belongs in the
// other run, rotates the middle section into place and recurses on both
// halves.
fn merge_without_buffer<T, F>(v: &mut [T], mid: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if mid == 0 || mid == len {
        return;
    }
    if len == 2 {
        if is_less(&v[1], &v[0]) {
            v.swap(0, 1);
        }
        return;
    }

    let (left_cut, right_cut) = if mid > len - mid {
        let left_cut = mid / 2;
        // First element of the right run not less than the pivot.
        let right_cut = mid + v[mid..].partition_point(|x| is_less(x, &v[left_cut]));
        (left_cut, right_cut)
    } else {
        let right_cut = mid + (len - mid) / 2;
        // First element of the left run greater than the pivot.
        let left_cut = v[..mid].partition_point(|x| !is_less(&v[right_cut], x));
        (left_cut, right_cut)
    };

    v[left_cut..right_cut].rotate_left(mid - left_cut);
    let new_mid = left_cut + (right_cut - mid);

    let (head, tail) = v.split_at_mut(new_mid);
    merge_without_buffer(head, left_cut, is_less);
    merge_without_buffer(tail, right_cut - new_mid, is_less);
}
