// ─────────────────────────────────────────────────────────────────────────────
// Spherical Bessel j_l(x)：上行 / 下行遞迴
// ─────────────────────────────────────────────────────────────────────────────
//
//   j_{l+1}(x) = (2l+1)/x · j_l(x) - j_{l-1}(x)
//
// 上行遞迴在 l > x 時誤差指數放大；下行遞迴（Miller 演算法）從任意起始值
// 往下遞迴，再以 j_0 = sin(x)/x 正規化，在 l > x 區域穩定。

/// j_0(x) = sin(x) / x
pub fn j0(x: f64) -> f64 {
    x.sin() / x
}

/// j_1(x) = (sin(x) - x·cos(x)) / x²
pub fn j1(x: f64) -> f64 {
    (x.sin() - x * x.cos()) / (x * x)
}

/// 上行遞迴，`x > 0`。
pub fn up_recursion(x: f64, order: usize) -> f64 {
    match order {
        0 => j0(x),
        1 => j1(x),
        _ => {
            let mut term_one = j0(x);
            let mut term_two = j1(x);
            for k in 1..order {
                let term_three = (2.0 * k as f64 + 1.0) / x * term_two - term_one;
                term_one = term_two;
                term_two = term_three;
            }
            term_two
        }
    }
}

/// 下行遞迴：由 `start` 階起（j_{start+1} = j_start = 1），遞迴至 j_0 後正規化。
///
/// `order > start` 或 `x == 0` 時回傳 `None`。
pub fn down_recursion(x: f64, order: usize, start: usize) -> Option<f64> {
    if order > start || x == 0.0 {
        return None;
    }

    let mut j = vec![0.0; start + 2];
    j[start + 1] = 1.0;
    j[start] = 1.0;
    for k in (1..=start).rev() {
        j[k - 1] = (2.0 * k as f64 + 1.0) / x * j[k] - j[k + 1];
    }

    let scale = j0(x) / j[0];
    Some(j[order] * scale)
}
