use crate::math::integrate::compositerule::CompositeRule;
use crate::math::integrate::quadratureerror::QuadratureResult;

// ─────────────────────────────────────────────────────────────────────────────
// Milne（Boole）複合規則
// ─────────────────────────────────────────────────────────────────────────────
//
// 五點 Newton-Cotes：
//
//   ∫_{x0}^{x4} f dx ≈ h/45 · (14 f0 + 64 f1 + 24 f2 + 64 f3 + 14 f4)
//
// 複合後相鄰區塊共用端點，權重疊加為 2·14 = 28：
//
//   |  .  .  .  |  .  .  .  |  .  .  .  |
//   14 64 24 64 28 64 24 64 28 64 24 64 14

const MILNE_BOUNDARY_WEIGHT: f64 = 14.0;
const MILNE_INTERIOR_WEIGHTS: [f64; 4] = [28.0, 64.0, 24.0, 64.0];
const MILNE_NORMALIZATION: f64 = 45.0;

/// Composite Milne's rule，在 `[begin, end]` 上以 `meshsize` 個等距點積分。
///
/// `meshsize` 向上調整至 `(m - 1)` 為 4 的倍數；`meshsize == 0` 回傳 0.0 且不呼叫 `func`。
/// 對 5 次以下多項式為精確。
pub fn milne<F>(begin: f64, end: f64, meshsize: i64, func: F) -> QuadratureResult<f64>
where
    F: Fn(f64) -> f64,
{
    let meshsize = CompositeRule::Milne.effective_meshsize(meshsize)?;
    if meshsize == 0 {
        return Ok(0.0);
    }

    let step = (end - begin) / (meshsize - 1) as f64;

    let boundary = milne_boundary(func(begin), func(end));
    let mut interior = 0.0;
    for i in 1..(meshsize - 1) {
        interior += milne_weight(i) * func(begin + i as f64 * step);
    }

    Ok(milne_finish(step, boundary + interior))
}

pub(crate) fn milne_weight(i: usize) -> f64 {
    MILNE_INTERIOR_WEIGHTS[i % 4]
}

pub(crate) fn milne_boundary(begin_value: f64, end_value: f64) -> f64 {
    MILNE_BOUNDARY_WEIGHT * begin_value + MILNE_BOUNDARY_WEIGHT * end_value
}

pub(crate) fn milne_finish(step: f64, weighted_sum: f64) -> f64 {
    step * weighted_sum / MILNE_NORMALIZATION
}
