use nalgebra::{
    DMatrix,
    SymmetricEigen
};

use crate::math::integrate::compositerule::validate_meshsize;
use crate::math::integrate::diagnostic::{
    Diagnostic,
    DiagnosticSink,
    StderrSink
};
use crate::math::integrate::quadratureerror::{
    LegendreTableError,
    QuadratureResult
};

pub const LEGENDRE_COMPONENT: &'static str = "legendre";

/// 可建表的最高階數；超過即視為計算失敗。
pub const MAX_LEGENDRE_ORDER: usize = 10_000;

/// 此階數以下使用 Golub-Welsch（O(n³) 特徵分解），以上改用 Newton 迭代。
const GOLUB_WELSCH_MAX_ORDER: usize = 128;
const NEWTON_MAX_ITERATIONS: usize = 100;
const NEWTON_TOLERANCE: f64 = 1e-15;

// ─────────────────────────────────────────────────────────────────────────────
// GaussLegendreTable
// ─────────────────────────────────────────────────────────────────────────────

/// [-1, 1] 上的 Gauss-Legendre 節點與權重，節點遞增排列。
///
/// n 階表對 2n-1 次以下多項式為精確。
#[derive(Debug, Clone)]
pub struct GaussLegendreTable {
    nodes: Vec<f64>,
    weights: Vec<f64>
}

impl GaussLegendreTable {
    pub fn new(order: usize) -> Result<GaussLegendreTable, LegendreTableError> {
        if order > MAX_LEGENDRE_ORDER {
            return Err(LegendreTableError::OrderTooLarge { order, max: MAX_LEGENDRE_ORDER });
        }
        if order == 0 {
            return Ok(GaussLegendreTable { nodes: Vec::new(), weights: Vec::new() });
        }

        let (nodes, weights) = if order <= GOLUB_WELSCH_MAX_ORDER {
            golub_welsch(order)
        } else {
            newton_nodes_weights(order)?
        };

        let all_finite = nodes.iter()
            .chain(weights.iter())
            .all(|value| value.is_finite());
        if !all_finite {
            return Err(LegendreTableError::NonFiniteTable { order });
        }

        Ok(GaussLegendreTable { nodes, weights })
    }

    pub fn order(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes(&self) -> &[f64] {
        &self.nodes
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// 將節點仿射映射到 `[begin, end]`，依節點遞增順序求加權和。
    pub fn integrate<F>(&self, begin: f64, end: f64, func: F) -> f64
    where
        F: Fn(f64) -> f64,
    {
        let mid = 0.5 * (begin + end);
        let half_width = 0.5 * (end - begin);

        let mut integral = 0.0;
        for (&node, &weight) in self.nodes.iter().zip(self.weights.iter()) {
            integral += weight * func(mid + half_width * node);
        }
        half_width * integral
    }
}

/// Golub-Welsch：Jacobi 矩陣的特徵值即節點，權重為 2·v₀²。
///
///   J[i, i-1] = J[i-1, i] = i / √(4i² - 1)
fn golub_welsch(order: usize) -> (Vec<f64>, Vec<f64>) {
    let mut jacobi = DMatrix::<f64>::zeros(order, order);
    for i in 1..order {
        let beta = i as f64 / ((4 * i * i - 1) as f64).sqrt();
        jacobi[(i, i - 1)] = beta;
        jacobi[(i - 1, i)] = beta;
    }

    let eigen = SymmetricEigen::new(jacobi);
    let mut pairs: Vec<(f64, f64)> = eigen.eigenvalues
        .iter()
        .zip(eigen.eigenvectors.column_iter())
        .map(|(&node, vector)| (node, 2.0 * vector[0] * vector[0]))
        .collect();
    pairs.sort_by(|lhs, rhs| lhs.0.total_cmp(&rhs.0));

    pairs.into_iter().unzip()
}

/// 以 Chebyshev 型初始猜測對 P_n 做 Newton 迭代，利用對稱性只解一半的根。
fn newton_nodes_weights(order: usize) -> Result<(Vec<f64>, Vec<f64>), LegendreTableError> {
    let mut nodes = vec![0.0; order];
    let mut weights = vec![0.0; order];
    let n = order as f64;

    for i in 0..order.div_ceil(2) {
        let mut z = ((i as f64 + 0.75) / (n + 0.5) * std::f64::consts::PI).cos();
        let mut converged = false;
        for _ in 0..NEWTON_MAX_ITERATIONS {
            let (p, dp) = legendre_p_and_dp(order, z);
            let z_new = z - p / dp;
            let delta = (z_new - z).abs();
            z = z_new;
            if delta <= NEWTON_TOLERANCE {
                converged = true;
                break;
            }
        }
        if !converged {
            return Err(LegendreTableError::NoConvergence { order, node: i });
        }

        let (_, dp) = legendre_p_and_dp(order, z);
        let weight = 2.0 / ((1.0 - z * z) * dp * dp);

        nodes[i] = -z;
        nodes[order - 1 - i] = z;
        weights[i] = weight;
        weights[order - 1 - i] = weight;
    }

    Ok((nodes, weights))
}

/// P_n(x) 與 P_n'(x)，以三項遞迴計算。
fn legendre_p_and_dp(order: usize, x: f64) -> (f64, f64) {
    let mut p_prev = 1.0;
    let mut p_curr = x;
    for k in 2..=order {
        let k = k as f64;
        let p_next = ((2.0 * k - 1.0) * x * p_curr - (k - 1.0) * p_prev) / k;
        p_prev = p_curr;
        p_curr = p_next;
    }
    let dp = order as f64 * (x * p_curr - p_prev) / (x * x - 1.0);
    (p_curr, dp)
}

// ─────────────────────────────────────────────────────────────────────────────
// legendre
// ─────────────────────────────────────────────────────────────────────────────

/// 以 `meshsize` 階 Gauss-Legendre 求積。
///
/// 負的 `meshsize` 回傳錯誤；`meshsize == 0` 回傳 0.0。
/// 建表失敗時**不**回傳錯誤：warning 寫到 stderr，結果為 0.0。
/// 需要檢查失敗的呼叫端請用 [`legendre_with_sink`]。
pub fn legendre<F>(begin: f64, end: f64, meshsize: i64, func: F) -> QuadratureResult<f64>
where
    F: Fn(f64) -> f64,
{
    legendre_with_sink(begin, end, meshsize, func, &StderrSink)
}

pub fn legendre_with_sink<F>(
    begin: f64,
    end: f64,
    meshsize: i64,
    func: F,
    sink: &dyn DiagnosticSink,
) -> QuadratureResult<f64>
where
    F: Fn(f64) -> f64,
{
    let order = validate_meshsize(meshsize)?;
    if order == 0 {
        return Ok(0.0);
    }

    match GaussLegendreTable::new(order) {
        Ok(table) => Ok(table.integrate(begin, end, func)),
        Err(error) => {
            sink.warn(Diagnostic::new(LEGENDRE_COMPONENT, error.code(), error.to_string()));
            Ok(0.0)
        }
    }
}
