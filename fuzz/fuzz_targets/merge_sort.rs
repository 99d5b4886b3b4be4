#![no_main]

use libfuzzer_sys::fuzz_target;

use classic_sort::merge_sort as test_sort;

fuzz_target!(|data: &[u8]| {
    let mut v = data.to_vec();
    test_sort::sort(&mut v);
    assert!(sort_test_tools::is_sorted(&v));
});
