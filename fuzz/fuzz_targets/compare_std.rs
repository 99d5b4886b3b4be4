#![no_main]

use libfuzzer_sys::fuzz_target;

use classic_sort::Algorithm;
use classic_sort_fuzz::util::u8_as_x;

// Every algorithm has to agree with the standard library on wider values too, where the byte
// targets only ever see 256 distinct values.
fuzz_target!(|data: &[u8]| {
    let input = u8_as_x::<i32>(data);

    let mut expected = input.clone();
    expected.sort();

    for algorithm in Algorithm::ALL {
        let mut v = input.clone();
        algorithm.sort(&mut v);
        assert_eq!(v, expected, "{algorithm}");
    }
});
