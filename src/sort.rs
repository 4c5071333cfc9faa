use tracing::debug;

use crate::ListsError;

/// Largest value the counting sort accepts, which bounds its table to `MAX_VALUE + 1` counters.
pub const MAX_VALUE: usize = 10_000_000;

/// Largest value in given slice, or `None` if it's empty.
pub fn max_value(nums: &[usize]) -> Option<usize> {
    nums.iter().copied().max()
}

/// Sort given numbers in place by counting occurrences of each value.
///
/// Runs in O(n + max) time and allocates a table of `max + 1` counters, so it only
/// pays off when the largest value is small relative to the number count. Values above
/// [`MAX_VALUE`] are rejected before anything is allocated.
pub fn counting_sort(nums: &mut Vec<usize>) -> Result<&mut Vec<usize>, ListsError> {
    let Some(max) = max_value(nums) else {
        return Ok(nums);
    };
    if max > MAX_VALUE {
        return Err(ListsError::SortRange { max });
    }

    debug!(len = nums.len(), max, "Counting sort with table of {} buckets.", max + 1);
    let mut counts = vec![0usize; max + 1];
    for &n in nums.iter() {
        counts[n] += 1;
    }

    let mut ind = 0;
    for (n, &count) in counts.iter().enumerate() {
        nums[ind..(ind + count)].fill(n);
        ind += count;
    }
    debug_assert!(ind == nums.len());

    Ok(nums)
}

#[test]
fn test_max_value() {
    assert_eq!(max_value(&[]), None);
    assert_eq!(max_value(&[7]), Some(7));
    assert_eq!(max_value(&[3, 4, 2, 1, 3, 3]), Some(4));
    assert_eq!(max_value(&[0, 0, 0]), Some(0));
}

#[test]
fn test_counting_sort() {
    let mut nums = vec![3, 4, 2, 1, 3, 3];
    assert_eq!(counting_sort(&mut nums).unwrap(), &vec![1, 2, 3, 3, 3, 4]);

    let mut nums = vec![4, 3, 5, 3, 9, 3];
    counting_sort(&mut nums).unwrap();
    assert_eq!(nums, vec![3, 3, 3, 4, 5, 9]);
}

#[test]
fn test_counting_sort_edges() {
    let mut empty = Vec::new();
    assert!(counting_sort(&mut empty).unwrap().is_empty());

    let mut zeros = vec![0, 0];
    assert_eq!(counting_sort(&mut zeros).unwrap(), &vec![0, 0]);

    let mut single = vec![42];
    assert_eq!(counting_sort(&mut single).unwrap(), &vec![42]);

    let mut at_limit = vec![MAX_VALUE, 0];
    assert_eq!(counting_sort(&mut at_limit).unwrap(), &vec![0, MAX_VALUE]);
}

#[test]
fn test_counting_sort_rejects_large_values() {
    let mut nums = vec![1, usize::MAX, 3];
    assert!(matches!(
        counting_sort(&mut nums),
        Err(ListsError::SortRange { max }) if max == usize::MAX
    ));
    assert_eq!(nums, vec![1, usize::MAX, 3]);

    let mut nums = vec![MAX_VALUE + 1];
    assert!(matches!(
        counting_sort(&mut nums),
        Err(ListsError::SortRange { .. })
    ));
}

#[cfg(test)]
mod props {
    use super::counting_sort;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn sorted_permutation(nums in proptest::collection::vec(0usize..1000, 0..200)) {
            let mut sorted = nums.clone();
            counting_sort(&mut sorted).unwrap();
            prop_assert!(sorted.windows(2).all(|w| w[0] <= w[1]));

            let mut expected = nums;
            expected.sort_unstable();
            prop_assert_eq!(sorted, expected);
        }

        #[test]
        fn idempotent(nums in proptest::collection::vec(0usize..1000, 0..200)) {
            let mut once = nums;
            counting_sort(&mut once).unwrap();
            let mut twice = once.clone();
            counting_sort(&mut twice).unwrap();
            prop_assert_eq!(once, twice);
        }
    }
}
