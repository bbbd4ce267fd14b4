use crate::math::integrate::compositerule::CompositeRule;
use crate::math::integrate::quadratureerror::QuadratureResult;

const SIMPSON_ODD_WEIGHT: f64 = 4.0;
const SIMPSON_EVEN_WEIGHT: f64 = 2.0;

/// Composite Simpson's rule，在 `[begin, end]` 上以 `meshsize` 個等距點積分。
///
/// 偶數 `meshsize` 加 1，使子區間數為偶數；`meshsize == 0` 回傳 0.0 且不呼叫 `func`。
/// `begin > end` 時 step 為負，結果即為 -∫_end^begin。
///
/// 累加順序固定：f(begin)、內部節點 1..m-1 依序、f(end)，最後乘 step/3。
pub fn simpson<F>(begin: f64, end: f64, meshsize: i64, func: F) -> QuadratureResult<f64>
where
    F: Fn(f64) -> f64,
{
    let meshsize = CompositeRule::Simpson.effective_meshsize(meshsize)?;
    if meshsize == 0 {
        return Ok(0.0);
    }

    let step = (end - begin) / (meshsize - 1) as f64;

    let mut integral = func(begin);
    for i in 1..(meshsize - 1) {
        integral += simpson_weight(i) * func(begin + i as f64 * step);
    }
    integral += func(end);

    Ok(step / 3.0 * integral)
}

pub(crate) fn simpson_weight(i: usize) -> f64 {
    if i % 2 == 0 {
        SIMPSON_EVEN_WEIGHT
    } else {
        SIMPSON_ODD_WEIGHT
    }
}
