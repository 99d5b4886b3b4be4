//! Helpers shared by the fuzz targets.

/// Integer types that can be rebuilt from their native endian bytes.
pub trait FromFuzzBytes: Sized {
    const SIZE: usize;

    fn from_fuzz_bytes(bytes: &[u8]) -> Self;
}

macro_rules! impl_from_fuzz_bytes {
    ($($int:ty),*) => {
        $(
            impl FromFuzzBytes for $int {
                const SIZE: usize = std::mem::size_of::<$int>();

                fn from_fuzz_bytes(bytes: &[u8]) -> Self {
                    let mut raw = [0u8; std::mem::size_of::<$int>()];
                    raw.copy_from_slice(bytes);
                    <$int>::from_ne_bytes(raw)
                }
            }
        )*
    };
}

impl_from_fuzz_bytes!(u8, i16, i32, u32, i64, u64);

/// Reinterprets the fuzz input as `T` values, trailing bytes that don't fill a whole value are
/// dropped.
pub fn u8_as_x<T: FromFuzzBytes>(data: &[u8]) -> Vec<T> {
    data.chunks_exact(T::SIZE).map(T::from_fuzz_bytes).collect()
}
