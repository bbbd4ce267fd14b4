use crate::math::integrate::quadratureerror::QuadratureResult;

/// 純函數指標形式的被積函數。
///
/// 積分規則本身對任何 `Fn(f64) -> f64` 泛型；此別名只給需要同質型別的
/// 方法表使用（例如 `study::integrationstudy` 的方法表）。
pub type IntegrandFn = fn(f64) -> f64;

/// 與 [`IntegrandFn`] 對應的積分方法簽章：`(begin, end, meshsize, func)`。
pub type QuadratureMethod = fn(f64, f64, i64, IntegrandFn) -> QuadratureResult<f64>;
