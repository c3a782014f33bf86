use block_deque::{Deque, DEFAULT_BLOCK_SIZE, INITIAL_DIRECTORY_LEN};

#[test]
fn test_new_deque_allocates_nothing() {
    let deque: Deque<i32, 4> = Deque::new();

    assert_eq!(deque.len(), 0);
    assert!(deque.is_empty());
    assert_eq!(deque.block_count(), 0);
    assert_eq!(deque.capacity(), 0);
}

#[test]
fn test_first_push_allocates_initial_directory() {
    let mut deque: Deque<i32, 4> = Deque::new();
    deque.push_back(1);

    assert_eq!(deque.block_count(), INITIAL_DIRECTORY_LEN);
    assert_eq!(deque.capacity(), INITIAL_DIRECTORY_LEN * 4);
}

#[test]
fn test_default_block_size() {
    let mut deque: Deque<u8> = Deque::new();
    deque.push_back(7);

    assert_eq!(deque.capacity(), INITIAL_DIRECTORY_LEN * DEFAULT_BLOCK_SIZE);
}

#[test]
fn test_push_back_and_pop_front_fifo() {
    let mut deque: Deque<i32, 4> = Deque::new();
    for i in 0..10 {
        deque.push_back(i);
    }

    assert_eq!(deque.len(), 10);
    for i in 0..10 {
        assert_eq!(deque.pop_front(), Some(i));
    }
    assert_eq!(deque.pop_front(), None);
    assert!(deque.is_empty());
}

#[test]
fn test_push_front_and_pop_front_lifo() {
    let mut deque: Deque<i32, 4> = Deque::new();
    for i in 0..10 {
        deque.push_front(i);
    }

    for i in (0..10).rev() {
        assert_eq!(deque.pop_front(), Some(i));
    }
    assert_eq!(deque.pop_back(), None);
}

#[test]
fn test_push_pop_mix() {
    let mut deque: Deque<i32, 3> = Deque::new();

    deque.push_back(1);
    deque.push_front(2);
    deque.push_back(3);
    deque.push_front(4);

    // Logical order: [4, 2, 1, 3]
    assert_eq!(deque.front(), Some(&4));
    assert_eq!(deque.back(), Some(&3));

    assert_eq!(deque.pop_front(), Some(4));
    assert_eq!(deque.pop_back(), Some(3));
    assert_eq!(deque.pop_front(), Some(2));
    assert_eq!(deque.pop_back(), Some(1));
    assert_eq!(deque.pop_back(), None);
}

#[test]
fn test_indexing_across_blocks() {
    let mut deque: Deque<usize, 4> = Deque::new();
    for i in 0..5 {
        deque.push_front(4 - i);
    }
    for i in 5..17 {
        deque.push_back(i);
    }

    for i in 0..17 {
        assert_eq!(deque[i], i);
        assert_eq!(deque.get(i), Some(&i));
    }
    assert_eq!(deque.get(17), None);
}

#[test]
fn test_index_mut_and_get_mut() {
    let mut deque: Deque<i32, 2> = (0..6).collect();

    deque[3] = 30;
    *deque.get_mut(4).unwrap() += 40;
    *deque.front_mut().unwrap() = -1;
    *deque.back_mut().unwrap() = -5;

    let values: Vec<_> = deque.iter().copied().collect();
    assert_eq!(values, vec![-1, 1, 2, 30, 44, -5]);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn test_index_out_of_bounds_panics() {
    let deque: Deque<i32, 4> = Deque::from([1, 2, 3]);
    let _ = deque[3];
}

#[test]
fn test_get_unchecked_within_bounds() {
    let deque: Deque<i32, 4> = (10..20).collect();
    // Index 7 is below the length of 10
    let value = unsafe { *deque.get_unchecked(7) };
    assert_eq!(value, 17);
}

#[test]
fn test_front_back_on_empty() {
    let mut deque: Deque<i32, 4> = Deque::new();
    assert_eq!(deque.front(), None);
    assert_eq!(deque.back(), None);
    assert_eq!(deque.front_mut(), None);
    assert_eq!(deque.back_mut(), None);
}

#[test]
fn test_growth_keeps_block_storage() {
    let mut deque: Deque<i32, 4> = Deque::new();
    for i in 0..40 {
        deque.push_back(i);
    }
    let blocks = deque.block_count();
    assert!(blocks * 4 >= 40);

    for _ in 0..40 {
        deque.pop_back();
    }
    assert!(deque.is_empty());
    assert_eq!(deque.block_count(), blocks);

    // Storage is reused after the deque is drained
    for i in 0..20 {
        deque.push_front(i);
    }
    assert_eq!(deque.block_count(), blocks);
}

#[test]
fn test_growth_at_front_preserves_order() {
    let mut deque: Deque<i32, 4> = Deque::new();
    deque.push_back(1000);
    for i in 0..50 {
        deque.push_front(i);
    }

    assert_eq!(deque.len(), 51);
    assert_eq!(deque[0], 49);
    assert_eq!(deque[49], 0);
    assert_eq!(deque[50], 1000);
}

#[test]
fn test_reserve_avoids_regrowth() {
    let mut deque: Deque<i32, 4> = Deque::new();
    deque.reserve(10);
    let blocks = deque.block_count();

    for i in 0..10 {
        deque.push_back(i);
    }
    assert_eq!(deque.block_count(), blocks);
}

#[test]
fn test_reserve_on_non_empty_deque() {
    let mut deque: Deque<i32, 4> = (0..7).collect();
    deque.try_reserve(25).unwrap();
    let blocks = deque.block_count();

    for i in 7..32 {
        deque.push_back(i);
    }
    assert_eq!(deque.block_count(), blocks);
    assert!(deque.iter().copied().eq(0..32));
}

#[test]
fn test_with_len_default_values() {
    let deque: Deque<i32, 4> = Deque::with_len(6);

    assert_eq!(deque.len(), 6);
    assert!(deque.iter().all(|&value| value == 0));
}

#[test]
fn test_from_elem_clones_value() {
    let deque: Deque<String, 2> = Deque::from_elem(String::from("x"), 5);

    assert_eq!(deque.len(), 5);
    assert!(deque.iter().all(|value| value == "x"));

    let empty: Deque<String, 2> = Deque::from_elem(String::from("x"), 0);
    assert!(empty.is_empty());
}

#[test]
fn test_from_array_and_vec() {
    let from_array: Deque<i32, 4> = Deque::from([1, 2, 3, 4, 5]);
    let from_vec: Deque<i32, 4> = Deque::from(vec![1, 2, 3, 4, 5]);

    assert_eq!(from_array, from_vec);
    assert_eq!(from_array.len(), 5);
}

#[test]
fn test_extend() {
    let mut deque: Deque<i32, 4> = Deque::new();
    deque.push_back(1);
    deque.push_back(2);
    deque.extend(vec![3, 4, 5]);
    deque.extend(&[6, 7]);

    let collected: Vec<_> = (0..deque.len()).map(|i| deque[i]).collect();
    assert_eq!(collected, vec![1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn test_clone_is_independent() {
    let mut original: Deque<i32, 4> = (0..9).collect();
    let mut copy = original.clone();
    assert_eq!(original, copy);

    copy.push_back(100);
    copy.pop_front();
    copy[0] = -1;
    assert!(original.iter().copied().eq(0..9));

    original.push_front(-10);
    original[5] = 55;
    assert_eq!(copy.len(), 9);
    assert_eq!(copy[0], -1);
    assert_eq!(copy[8], 100);
}

#[test]
fn test_clone_from_replaces_contents() {
    let source: Deque<String, 3> = ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();
    let mut target: Deque<String, 3> = Deque::from([String::from("old")]);

    target.clone_from(&source);
    assert_eq!(target, source);

    let again = target.clone();
    target.clone_from(&again);
    assert_eq!(target, source);
}

#[test]
fn test_take_leaves_source_empty_and_reusable() {
    let mut source: Deque<i32, 4> = (0..10).collect();
    let moved = std::mem::take(&mut source);

    assert_eq!(moved.len(), 10);
    assert_eq!(source.len(), 0);
    assert_eq!(source.block_count(), 0);

    source.push_back(1);
    source.push_front(0);
    assert_eq!(source.len(), 2);
    assert_eq!(source[0], 0);
    assert_eq!(source[1], 1);
}

#[test]
fn test_insert_matches_vec() {
    for len in 0..12 {
        for index in 0..=len {
            let mut deque: Deque<usize, 3> = Deque::new();
            // Misalign the first element inside its block
            for i in (0..len / 2).rev() {
                deque.push_front(i);
            }
            for i in len / 2..len {
                deque.push_back(i);
            }
            let mut expected: Vec<usize> = (0..len).collect();

            deque.insert(index, 99);
            expected.insert(index, 99);

            assert_eq!(deque.len(), len + 1);
            assert_eq!(deque[index], 99);
            assert!(deque.iter().eq(expected.iter()), "len {len} index {index}");
        }
    }
}

#[test]
fn test_remove_matches_vec() {
    for len in 1..12 {
        for index in 0..len {
            let mut deque: Deque<usize, 3> = Deque::new();
            for i in (0..len / 3).rev() {
                deque.push_front(i);
            }
            for i in len / 3..len {
                deque.push_back(i);
            }
            let mut expected: Vec<usize> = (0..len).collect();

            assert_eq!(deque.remove(index), Some(expected.remove(index)));
            assert_eq!(deque.len(), len - 1);
            assert!(deque.iter().eq(expected.iter()), "len {len} index {index}");
        }
    }
}

#[test]
fn test_insert_then_remove_is_identity() {
    let mut deque: Deque<i32, 4> = (0..20).collect();
    deque.insert(13, -1);
    assert_eq!(deque.remove(13), Some(-1));
    assert!(deque.iter().copied().eq(0..20));
}

#[test]
fn test_remove_out_of_bounds_returns_none() {
    let mut deque: Deque<i32, 4> = Deque::from([1, 2]);
    assert_eq!(deque.remove(2), None);
    assert_eq!(deque.len(), 2);
}

#[test]
fn test_swap() {
    let mut deque: Deque<i32, 2> = (0..5).collect();
    deque.swap(0, 4);
    deque.swap(2, 2);

    let values: Vec<_> = deque.iter().copied().collect();
    assert_eq!(values, vec![4, 1, 2, 3, 0]);
}

#[test]
fn test_clear() {
    let mut deque: Deque<i32, 4> = (0..10).collect();
    let blocks = deque.block_count();
    deque.clear();

    assert!(deque.is_empty());
    assert_eq!(deque.block_count(), blocks);
    deque.push_back(5);
    assert_eq!(deque.front(), Some(&5));
}

#[test]
fn test_contains() {
    let deque: Deque<i32, 4> = Deque::from([10, 20, 30]);

    assert!(deque.contains(&10));
    assert!(!deque.contains(&40));
}

#[test]
fn test_ordering_and_hash() {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    let a: Deque<i32, 4> = Deque::from([1, 2, 3]);
    let b: Deque<i32, 4> = Deque::from([1, 2, 4]);
    let c: Deque<i32, 4> = Deque::from([1, 2]);

    assert!(a < b);
    assert!(c < a);
    assert_eq!(a.cmp(&a.clone()), std::cmp::Ordering::Equal);

    let hash = |deque: &Deque<i32, 4>| {
        let mut hasher = DefaultHasher::new();
        deque.hash(&mut hasher);
        hasher.finish()
    };
    let mut shifted: Deque<i32, 4> = Deque::from([2, 3]);
    shifted.push_front(1);
    assert_eq!(hash(&a), hash(&shifted));
}

#[test]
fn test_debug_lists_elements() {
    let deque: Deque<i32, 2> = Deque::from([1, 2, 3]);
    assert_eq!(format!("{deque:?}"), "[1, 2, 3]");
}

#[test]
fn test_zero_sized_elements() {
    let mut deque: Deque<(), 4> = Deque::new();
    for _ in 0..25 {
        deque.push_back(());
    }
    for _ in 0..5 {
        deque.push_front(());
    }

    assert_eq!(deque.len(), 30);
    assert_eq!(deque.iter().count(), 30);
    assert_eq!(deque.pop_front(), Some(()));
    assert_eq!(deque.len(), 29);
}
