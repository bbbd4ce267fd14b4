// ─────────────────────────────────────────────────────────────────────────────
// 有限差分
// ─────────────────────────────────────────────────────────────────────────────
//
//   forward : (f(x+h) - f(x)) / h                         誤差 O(h)
//   central : (f(x+h/2) - f(x-h/2)) / h                   誤差 O(h²)
//   extrap  : (4·central(h/2) - central(h)) / 3           誤差 O(h⁴)
//   extrap2 : (16·extrap(h/2) - extrap(h)) / 15           誤差 O(h⁶)
//
// extrap / extrap2 為對 central 的 Richardson 外插。

pub fn forward_diff<F>(x: f64, h: f64, func: F) -> f64
where
    F: Fn(f64) -> f64,
{
    (func(x + h) - func(x)) / h
}

pub fn central_diff<F>(x: f64, h: f64, func: F) -> f64
where
    F: Fn(f64) -> f64,
{
    (func(x + h / 2.0) - func(x - h / 2.0)) / h
}

pub fn extrap_diff<F>(x: f64, h: f64, func: F) -> f64
where
    F: Fn(f64) -> f64,
{
    (4.0 * central_diff(x, h / 2.0, &func) - central_diff(x, h, &func)) / 3.0
}

pub fn extrap_diff2<F>(x: f64, h: f64, func: F) -> f64
where
    F: Fn(f64) -> f64,
{
    (16.0 * extrap_diff(x, h / 2.0, &func) - extrap_diff(x, h, &func)) / 15.0
}

// ─────────────────────────────────────────────────────────────────────────────
// 自動選步長的中央差分
// ─────────────────────────────────────────────────────────────────────────────
//
// 以 x±h、x±h/2 四點：
//   r3 = (f(x+h) - f(x-h)) / 2h                           O(h²)
//   r5 = (4/3)·central(h) - (1/3)·r3                      O(h⁴)
// 截斷誤差以 |r5 - r3| 估計，捨入誤差以 ε·|f| / h 估計。
// 若截斷誤差較大，依 h_opt = h·(round / 2·trunc)^(1/3) 重算一次，
// 只有在新估計誤差較小且與原值相容時才採用。

/// 導數值與其誤差估計。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivativeEstimate {
    value: f64,
    abserr: f64
}

impl DerivativeEstimate {
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn abserr(&self) -> f64 {
        self.abserr
    }
}

struct CentralTerms {
    value: f64,
    round: f64,
    trunc: f64
}

fn central_terms<F>(x: f64, h: f64, func: &F) -> CentralTerms
where
    F: Fn(f64) -> f64,
{
    let fm1 = func(x - h);
    let fp1 = func(x + h);
    let fmh = func(x - h / 2.0);
    let fph = func(x + h / 2.0);

    let r3 = 0.5 * (fp1 - fm1);
    let r5 = (4.0 / 3.0) * (fph - fmh) - r3 / 3.0;

    let e3 = (fp1.abs() + fm1.abs()) * f64::EPSILON;
    let e5 = 2.0 * (fph.abs() + fmh.abs()) * f64::EPSILON + e3;
    // x + h 本身的表示誤差
    let dy = (r3 / h).abs().max((r5 / h).abs()) * (x.abs() / h) * f64::EPSILON;

    CentralTerms {
        value: r5 / h,
        round: (e5 / h).abs() + dy,
        trunc: ((r5 - r3) / h).abs()
    }
}

/// 從初始步長 `h` 出發、自動調整一次步長的中央差分。
pub fn central_diff_adaptive<F>(x: f64, h: f64, func: F) -> DerivativeEstimate
where
    F: Fn(f64) -> f64,
{
    let first = central_terms(x, h, &func);
    let mut estimate = DerivativeEstimate {
        value: first.value,
        abserr: first.round + first.trunc
    };

    if first.round < first.trunc && first.round > 0.0 && first.trunc > 0.0 {
        let h_opt = h * (first.round / (2.0 * first.trunc)).cbrt();
        let refined = central_terms(x, h_opt, &func);
        let error_opt = refined.round + refined.trunc;
        if error_opt < estimate.abserr && (refined.value - first.value).abs() < 4.0 * estimate.abserr {
            estimate = DerivativeEstimate { value: refined.value, abserr: error_opt };
        }
    }
    estimate
}
