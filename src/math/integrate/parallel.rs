use rayon::prelude::*;

use crate::math::integrate::compositerule::CompositeRule;
use crate::math::integrate::milne::{
    milne_boundary,
    milne_finish,
    milne_weight
};
use crate::math::integrate::quadratureerror::QuadratureResult;
use crate::math::integrate::simpson::simpson_weight;

/// 每個工作單元處理的內部節點數。與執行緒數無關，歸約樹因此固定。
pub const PARALLEL_CHUNK: usize = 4096;

// ─────────────────────────────────────────────────────────────────────────────
// 平行版 Simpson / Milne
// ─────────────────────────────────────────────────────────────────────────────
//
// 內部節點 1..m-1 切成固定大小的 chunk：
//   1. 各 chunk 內依索引遞增累加
//   2. collect() 保留 chunk 順序，並在所有 chunk 完成後才返回
//   3. 依 chunk 順序循序相加
//
// 同一輸入在任何執行緒數下結果逐位元相同；與循序版只差在加法分組。

fn interior_sum<F, W>(begin: f64, step: f64, meshsize: usize, func: &F, weight: W) -> f64
where
    F: Fn(f64) -> f64 + Sync,
    W: Fn(usize) -> f64 + Sync,
{
    let interior = meshsize.saturating_sub(2);
    let chunks = interior.div_ceil(PARALLEL_CHUNK);

    let partial_sums: Vec<f64> = (0..chunks)
        .into_par_iter()
        .map(|chunk| {
            let first = 1 + chunk * PARALLEL_CHUNK;
            let last = (first + PARALLEL_CHUNK).min(meshsize - 1);
            let mut sum = 0.0;
            for i in first..last {
                sum += weight(i) * func(begin + i as f64 * step);
            }
            sum
        })
        .collect();

    partial_sums.iter().fold(0.0, |total, &partial| total + partial)
}

/// [`crate::math::integrate::simpson::simpson`] 的平行版，`func` 需可跨執行緒呼叫。
pub fn simpson_par<F>(begin: f64, end: f64, meshsize: i64, func: F) -> QuadratureResult<f64>
where
    F: Fn(f64) -> f64 + Sync,
{
    let meshsize = CompositeRule::Simpson.effective_meshsize(meshsize)?;
    if meshsize == 0 {
        return Ok(0.0);
    }

    let step = (end - begin) / (meshsize - 1) as f64;
    let interior = interior_sum(begin, step, meshsize, &func, simpson_weight);
    let integral = func(begin) + interior + func(end);

    Ok(step / 3.0 * integral)
}

/// [`crate::math::integrate::milne::milne`] 的平行版。
pub fn milne_par<F>(begin: f64, end: f64, meshsize: i64, func: F) -> QuadratureResult<f64>
where
    F: Fn(f64) -> f64 + Sync,
{
    let meshsize = CompositeRule::Milne.effective_meshsize(meshsize)?;
    if meshsize == 0 {
        return Ok(0.0);
    }

    let step = (end - begin) / (meshsize - 1) as f64;
    let boundary = milne_boundary(func(begin), func(end));
    let interior = interior_sum(begin, step, meshsize, &func, milne_weight);

    Ok(milne_finish(step, boundary + interior))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{
        AtomicUsize,
        Ordering
    };

    use approx::assert_abs_diff_eq;

    use crate::math::integrate::milne::milne;
    use crate::math::integrate::quadratureerror::QuadratureError;
    use crate::math::integrate::simpson::simpson;

    #[test]
    fn test_parallel_matches_serial() {
        for meshsize in [3, 11, 4097, 100_001] {
            let serial = simpson(0.0, 3.0, meshsize, |x| x.sin() * x.exp()).unwrap();
            let parallel = simpson_par(0.0, 3.0, meshsize, |x| x.sin() * x.exp()).unwrap();
            assert_abs_diff_eq!(serial, parallel, epsilon = 1e-12);

            let serial = milne(0.0, 3.0, meshsize, |x| x.cos()).unwrap();
            let parallel = milne_par(0.0, 3.0, meshsize, |x| x.cos()).unwrap();
            assert_abs_diff_eq!(serial, parallel, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_parallel_small_mesh_is_bit_identical() {
        // 單一 chunk：Milne 的內部和與循序版加法順序相同
        let serial = milne(0.0, 1.0, 101, |x| 1.0 / (1.0 + x * x)).unwrap();
        let parallel = milne_par(0.0, 1.0, 101, |x| 1.0 / (1.0 + x * x)).unwrap();
        assert_eq!(serial.to_bits(), parallel.to_bits());
    }

    #[test]
    fn test_parallel_is_reproducible() {
        let first = milne_par(-1.0, 2.0, 250_001, |x| (3.0 * x).sin()).unwrap();
        for _ in 0..5 {
            let again = milne_par(-1.0, 2.0, 250_001, |x| (3.0 * x).sin()).unwrap();
            assert_eq!(first.to_bits(), again.to_bits());
        }
    }

    #[test]
    fn test_parallel_contract() {
        let calls = AtomicUsize::new(0);
        let probe = |x: f64| {
            calls.fetch_add(1, Ordering::Relaxed);
            x
        };
        assert_eq!(simpson_par(0.0, 1.0, 0, &probe), Ok(0.0));
        assert_eq!(milne_par(0.0, 1.0, 0, &probe), Ok(0.0));
        assert_eq!(
            simpson_par(0.0, 1.0, -1, &probe),
            Err(QuadratureError::InvalidArgument { meshsize: -1 })
        );
        assert_eq!(
            milne_par(0.0, 1.0, -7, &probe),
            Err(QuadratureError::InvalidArgument { meshsize: -7 })
        );
        assert_eq!(calls.load(Ordering::Relaxed), 0);

        let _ = milne_par(0.0, 1.0, 9000, &probe).unwrap();
        assert_eq!(calls.load(Ordering::Relaxed), 9001);
    }
}
