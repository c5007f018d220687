use crate::chunk::TerrainChunk;

// Keeps the clamped coordinate strictly below the last row/column, so the
// "+1" neighbour of floor(coord) is always inside the chunk.
pub const SAMPLE_EPSILON: f64 = 1e-4;

// Bilinear weights of the four corners (lo/lo, lo/hi, hi/lo, hi/hi) for a
// point at fractional offset (fx, fy) inside its cell. They always sum to 1.
#[inline]
pub fn bilinear_weights(fx: f64, fy: f64) -> [f64; 4] {
    [
        (1.0 - fx) * (1.0 - fy),
        (1.0 - fx) * fy,
        fx * (1.0 - fy),
        fx * fy,
    ]
}

#[inline]
fn sanitize(coord: f64, cap: f64) -> f64 {
    if coord.is_nan() {
        return 0.0;
    }
    coord.clamp(0.0, cap)
}

// Continuous height at any real (x, y). Coordinates are clamped into
// [0, width - 1 - ε] first, so this never fails; NaN is treated as 0.
pub fn bilinear(chunk: &TerrainChunk, x: f64, y: f64) -> f64 {
    let width = chunk.width();
    let heights = chunk.heights();

    // A single cell has nothing to blend with
    if width == 1 {
        return heights[0];
    }

    let cap = (width - 1) as f64 - SAMPLE_EPSILON;
    let x = sanitize(x, cap);
    let y = sanitize(y, cap);

    // Find corners of the cell
    let x_lo = x.floor() as usize;
    let y_lo = y.floor() as usize;
    let x_hi = x_lo + 1;
    let y_hi = y_lo + 1;

    let val_a = heights[y_lo * width + x_lo];
    let val_b = heights[y_hi * width + x_lo];
    let val_c = heights[y_lo * width + x_hi];
    let val_d = heights[y_hi * width + x_hi];

    let [wa, wb, wc, wd] = bilinear_weights(x - x_lo as f64, y - y_lo as f64);

    wa * val_a + wb * val_b + wc * val_c + wd * val_d
}
