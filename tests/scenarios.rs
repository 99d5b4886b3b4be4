use std::cell::Cell;
use std::cmp::Ordering;

use classic_sort::{heapsort, insertion_sort, merge_sort, quicksort, Algorithm};
use sort_test_tools::{is_sorted, patterns};

fn count_comparisons<T: Ord + Clone>(
    v: &[T],
    sort_by: impl FnOnce(&mut [T], &mut dyn FnMut(&T, &T) -> Ordering),
) -> (Vec<T>, usize) {
    let mut v = v.to_vec();
    let mut comp_count = 0;

    sort_by(&mut v, &mut |a: &T, b: &T| {
        comp_count += 1;
        a.cmp(b)
    });

    (v, comp_count)
}

macro_rules! scenarios {
    ($($algorithm:ident),*) => {
        paste::paste! {
            $(
                #[test]
                fn [<$algorithm _unsorted_input>]() {
                    let mut v = [5, 3, 8, 1, 9, 2];
                    $algorithm::sort(&mut v);
                    assert_eq!(v, [1, 2, 3, 5, 8, 9]);
                }

                #[test]
                fn [<$algorithm _sorted_input_unchanged>]() {
                    let mut v = [1, 2, 3, 4, 5];
                    $algorithm::sort(&mut v);
                    assert_eq!(v, [1, 2, 3, 4, 5]);
                }

                #[test]
                fn [<$algorithm _reverse_input>]() {
                    let mut v = [5, 4, 3, 2, 1];
                    $algorithm::sort(&mut v);
                    assert_eq!(v, [1, 2, 3, 4, 5]);

                    let mut v = patterns::descending(10_000);
                    $algorithm::sort(&mut v);
                    assert!(is_sorted(&v));
                }

                #[test]
                fn [<$algorithm _duplicates_below_cutoff>]() {
                    let mut v = [3, 1, 4, 1, 5];
                    $algorithm::sort(&mut v);
                    assert_eq!(v, [1, 1, 3, 4, 5]);
                }

                #[test]
                fn [<$algorithm _keeps_multiset>]() {
                    let original = patterns::random_uniform(777, 0..50);
                    let mut v = original.clone();
                    $algorithm::sort(&mut v);

                    let mut expected = original;
                    expected.sort();
                    assert_eq!(v, expected);
                }

                #[test]
                fn [<$algorithm _moves_non_copy_values>]() {
                    // Box has a non trivial destructor, a duplicated or lost element shows up as a
                    // double free or leak under miri.
                    let mut v = patterns::random(200).into_iter().map(Box::new).collect::<Vec<_>>();
                    $algorithm::sort(&mut v);
                    assert!(is_sorted(&v));
                }
            )*
        }
    };
}

scenarios!(heapsort, insertion_sort, merge_sort, quicksort);

#[test]
fn insertion_sort_sorted_input_is_linear() {
    let (v, comps) = count_comparisons(&[1, 2, 3, 4, 5], |v, cmp| insertion_sort::sort_by(v, cmp));
    assert_eq!(v, [1, 2, 3, 4, 5]);
    assert_eq!(comps, 4);

    let input = patterns::ascending(1_000);
    let (_, comps) = count_comparisons(&input, |v, cmp| insertion_sort::sort_by(v, cmp));
    assert_eq!(comps, 999);
}

#[test]
fn merge_sort_sorted_input_only_scans_left_halves() {
    // Splits are [0, 2] + [3, 4] and [0, 1] + [2]. On sorted input each merge compares every
    // element of its left half once and then copies the right half: 1 + 2 + 1 + 3.
    let (v, comps) = count_comparisons(&[1, 2, 3, 4, 5], |v, cmp| merge_sort::sort_by(v, cmp));
    assert_eq!(v, [1, 2, 3, 4, 5]);
    assert_eq!(comps, 7);
}

#[test]
fn merge_sort_is_n_log_n_on_sorted_input() {
    let input = patterns::ascending(1 << 12);
    let (_, comps) = count_comparisons(&input, |v, cmp| merge_sort::sort_by(v, cmp));
    // Exactly half of n * log2(n) for a power of two.
    assert_eq!(comps, (1 << 12) * 12 / 2);
}

#[test]
fn quicksort_small_input_uses_insertion_sort() {
    let input = [3, 1, 4, 1, 5];

    let (quick_sorted, quick_comps) = count_comparisons(&input, |v, cmp| quicksort::sort_by(v, cmp));
    let (insertion_sorted, insertion_comps) =
        count_comparisons(&input, |v, cmp| insertion_sort::sort_by(v, cmp));

    assert_eq!(quick_sorted, [1, 1, 3, 4, 5]);
    assert_eq!(quick_sorted, insertion_sorted);
    assert_eq!(quick_comps, insertion_comps);

    // The largest input that still takes the fallback path.
    let input = patterns::random(quicksort::INSERTION_SORT_CUTOFF);
    let (_, quick_comps) = count_comparisons(&input, |v, cmp| quicksort::sort_by(v, cmp));
    let (_, insertion_comps) = count_comparisons(&input, |v, cmp| insertion_sort::sort_by(v, cmp));
    assert_eq!(quick_comps, insertion_comps);
}

#[test]
fn quicksort_median_of_three_stays_n_log_n() {
    // Sorted, reverse sorted and pipe organ inputs are the classic worst cases for a first or last
    // element pivot.
    let inputs: [(&str, fn(usize) -> Vec<i32>); 4] = [
        ("ascending", patterns::ascending),
        ("descending", patterns::descending),
        ("all_equal", patterns::all_equal),
        ("random", patterns::random),
    ];

    for len in [1_000usize, 10_000, 100_000] {
        let bound = 3 * len * (usize::BITS - len.leading_zeros()) as usize;

        for (name, pattern) in inputs {
            let input = pattern(len);
            let (v, comps) = count_comparisons(&input, |v, cmp| quicksort::sort_by(v, cmp));

            assert!(is_sorted(&v));
            assert!(
                comps <= bound,
                "{name} len {len}: {comps} comparisons exceed {bound}"
            );
        }
    }
}

#[test]
fn stable_sorts_keep_equal_elements_in_order() {
    // Unstable sorts may or may not keep the order, stable ones must.
    #[derive(Debug, Clone)]
    struct Keyed {
        key: i32,
        seq: usize,
    }

    let input = patterns::random_uniform(500, 0..8)
        .into_iter()
        .enumerate()
        .map(|(seq, key)| Keyed { key, seq })
        .collect::<Vec<_>>();

    for algorithm in Algorithm::ALL {
        let mut v = input.clone();
        algorithm.sort_by(&mut v, |a, b| a.key.cmp(&b.key));

        assert!(v.windows(2).all(|w| w[0].key <= w[1].key));
        if algorithm.is_stable() {
            assert!(v
                .windows(2)
                .all(|w| w[0].key < w[1].key || w[0].seq < w[1].seq));
        }
    }
}

#[test]
fn incomparable_elements_propagate() {
    for algorithm in Algorithm::ALL {
        let mut v = vec![2.0, 1.0, f64::NAN, 0.5];

        let res = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            algorithm.sort_by(&mut v, |a, b| a.partial_cmp(b).expect("incomparable"));
        }));

        assert!(res.is_err(), "{algorithm} swallowed the fault");
        assert_eq!(v.iter().filter(|x| x.is_nan()).count(), 1);
        assert_eq!(v.iter().filter(|x| !x.is_nan()).sum::<f64>(), 3.5);
    }
}

#[test]
fn comparison_side_effects_are_kept() {
    // Every comparison bumps a counter inside both elements. The counters have to add up after the
    // sort, so no algorithm may compare a copy that is later thrown away.
    for algorithm in Algorithm::ALL {
        let mut v = patterns::random(300)
            .into_iter()
            .map(|val| (val, Cell::new(0u32)))
            .collect::<Vec<_>>();

        let mut comps = 0u32;
        algorithm.sort_by(&mut v, |a, b| {
            a.1.set(a.1.get() + 1);
            b.1.set(b.1.get() + 1);
            comps += 1;
            a.0.cmp(&b.0)
        });

        let total: u32 = v.iter().map(|(_, count)| count.get()).sum();
        assert_eq!(total, comps * 2, "{algorithm}");
    }
}
