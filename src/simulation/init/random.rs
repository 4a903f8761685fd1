/// Xorshift32 step. `state` must be non-zero.
#[inline]
pub(super) fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Uniform float between `lo` and `hi`.
#[inline]
pub(super) fn range_f32(state: &mut u32, lo: f32, hi: f32) -> f32 {
    let unit = (xorshift32(state) >> 8) as f32 / (1u32 << 24) as f32;
    lo + (hi - lo) * unit
}
