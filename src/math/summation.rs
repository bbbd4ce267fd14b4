use nalgebra::RealField;

/// 調和級數部分和 Σ_{i=1}^{n} 1/i，由 i = 1 往上累加。
pub fn sum_up<T>(n: usize) -> T
where
    T: RealField + Copy,
{
    let one: T = nalgebra::one();
    let mut total: T = nalgebra::zero();
    for i in 1..=n {
        total += one / nalgebra::convert::<f64, T>(i as f64);
    }
    total
}

/// 同 [`sum_up`]，但由 i = n 往下累加：先加小項，捨入誤差較小。
pub fn sum_down<T>(n: usize) -> T
where
    T: RealField + Copy,
{
    let one: T = nalgebra::one();
    let mut total: T = nalgebra::zero();
    for i in (1..=n).rev() {
        total += one / nalgebra::convert::<f64, T>(i as f64);
    }
    total
}
