//! Cheap color distance used to rank tile candidates
//!
//! The metric is a plain squared RGB distance normalized to `[0, 1]` with a
//! special case for full transparency. It is symmetric and fast but not
//! perceptually uniform; two colors at equal distance can look very different
//! in how similar they appear.

use crate::imaging::grid::Color;

const MAX_DISTANCE: f64 = 255.0 * 255.0 * 3.0;

/// Distance between two colors in `[0, 1]`
///
/// Two fully transparent colors are identical; a fully transparent color
/// against anything visible is maximally distant. Otherwise alpha is ignored
/// and the squared RGB difference is normalized by its maximum.
pub fn distance(c1: Color, c2: Color) -> f64 {
    let [r1, g1, b1, a1] = c1.0;
    let [r2, g2, b2, a2] = c2.0;

    match (a1 == 0, a2 == 0) {
        (true, true) => return 0.0,
        (true, false) | (false, true) => return 1.0,
        (false, false) => {}
    }

    let dr = f64::from(r1) - f64::from(r2);
    let dg = f64::from(g1) - f64::from(g2);
    let db = f64::from(b1) - f64::from(b2);
    db.mul_add(db, dr.mul_add(dr, dg * dg)) / MAX_DISTANCE
}
