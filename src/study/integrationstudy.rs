use std::io::Write;

use serde::Deserialize;

use crate::configurationerror::ConfigurationError;
use crate::math::integrate::diagnostic::DiagnosticSink;
use crate::math::integrate::integrand::IntegrandFn;
use crate::math::integrate::legendre::{
    legendre_with_sink,
    MAX_LEGENDRE_ORDER
};
use crate::math::integrate::milne::milne;
use crate::math::integrate::quadratureerror::QuadratureResult;
use crate::math::integrate::simpson::simpson;
use crate::study::studyerror::StudyError;

// ─────────────────────────────────────────────────────────────────────────────
// IntegrandType
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum IntegrandType {
    Exp,
    Sin,
    Cos,
    Square
}

fn square(x: f64) -> f64 {
    x * x
}

impl IntegrandType {
    pub fn function(&self) -> IntegrandFn {
        match self {
            IntegrandType::Exp => f64::exp,
            IntegrandType::Sin => f64::sin,
            IntegrandType::Cos => f64::cos,
            IntegrandType::Square => square
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// IntegrationMethod
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegrationMethod {
    Simpson,
    Milne,
    Legendre
}

impl IntegrationMethod {
    pub const ALL: [IntegrationMethod; 3] = [
        IntegrationMethod::Simpson,
        IntegrationMethod::Milne,
        IntegrationMethod::Legendre
    ];

    pub fn name(&self) -> &'static str {
        match self {
            IntegrationMethod::Simpson => "simpson",
            IntegrationMethod::Milne => "milne",
            IntegrationMethod::Legendre => "legendre"
        }
    }

    pub fn integrate(&self,
                     begin: f64,
                     end: f64,
                     meshsize: i64,
                     func: IntegrandFn,
                     sink: &dyn DiagnosticSink) -> QuadratureResult<f64> {
        match self {
            IntegrationMethod::Simpson => simpson(begin, end, meshsize, func),
            IntegrationMethod::Milne => milne(begin, end, meshsize, func),
            IntegrationMethod::Legendre => legendre_with_sink(begin, end, meshsize, func, sink)
        }
    }
}

/// 每列依序以 meshsize 與 2·meshsize 計算。
const MESHSIZE_FACTORS: [usize; 2] = [1, 2];

// ─────────────────────────────────────────────────────────────────────────────
// IntegrationParameters
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IntegrationParameters {
    begin: f64,
    end: f64,
    n_meshsizes: usize,
    density: f64,
    integrand: IntegrandType
}

impl Default for IntegrationParameters {
    fn default() -> Self {
        IntegrationParameters {
            begin: 0.0,
            end: 1.0,
            n_meshsizes: 36,
            density: 10.0,
            integrand: IntegrandType::Exp
        }
    }
}

impl IntegrationParameters {
    pub fn new(begin: f64,
               end: f64,
               n_meshsizes: usize,
               density: f64,
               integrand: IntegrandType) -> IntegrationParameters {
        IntegrationParameters { begin, end, n_meshsizes, density, integrand }
    }

    pub fn begin(&self) -> f64 {
        self.begin
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn n_meshsizes(&self) -> usize {
        self.n_meshsizes
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    pub fn integrand(&self) -> IntegrandType {
        self.integrand
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !self.begin.is_finite() || !self.end.is_finite() {
            return Err(ConfigurationError::invalid_value("integration.begin/end", "bounds must be finite"));
        }
        if self.n_meshsizes == 0 {
            return Err(ConfigurationError::invalid_value("integration.n_meshsizes", "must be at least 1"));
        }
        if !(self.density > 0.0) || !self.density.is_finite() {
            return Err(ConfigurationError::invalid_value("integration.density", "must be positive"));
        }
        // 最後一列的 2·meshsize 也必須是可建表的 Gauss-Legendre 階數
        let largest = self.largest_meshsize()
            .checked_mul(MESHSIZE_FACTORS[1])
            .filter(|&order| order <= MAX_LEGENDRE_ORDER);
        if largest.is_none() {
            return Err(ConfigurationError::InvalidValue {
                field: "integration.n_meshsizes",
                reason: format!("2·sorta_exp10(n_meshsizes, density) exceeds the Gauss-Legendre limit {}",
                                MAX_LEGENDRE_ORDER)
            });
        }
        Ok(())
    }

    /// 表中最大的 meshsize（`sorta_exp10` 嚴格遞增，即最後一列）。
    pub fn largest_meshsize(&self) -> usize {
        sorta_exp10(self.n_meshsizes, self.density)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// 收斂表
// ─────────────────────────────────────────────────────────────────────────────

/// 對數作圖用的整數序列：小 n 時為 n，之後為 ⌊10^(n/a)⌋，整體嚴格遞增。
///
/// 切換點 N 需同時滿足
///   10^((N+1)/a) - 10^(N/a) > 1   ⇒   N > -a·log10(10^(1/a) - 1)
///   10^(N/a) > N                  ⇒   N > a·log10(N)
pub fn sorta_exp10(n: usize, a: f64) -> usize {
    let cutoff = (-a * (10.0_f64.powf(1.0 / a) - 1.0).log10()).ceil();
    let x = n as f64;
    if x < cutoff || x <= a * x.log10() {
        n
    } else {
        10.0_f64.powf(x / a) as usize
    }
}

/// 對 meshsize = sorta_exp10(n)，n = 1..=n_meshsizes，輸出三種方法在 meshsize 與
/// 2·meshsize 下的積分值。`legendre` 的 warning 送至 `sink`，對應欄位為 0.0。
pub fn write_integration_table<W>(out: &mut W,
                                  parameters: &IntegrationParameters,
                                  sink: &dyn DiagnosticSink) -> Result<(), StudyError>
where
    W: Write,
{
    parameters.validate().map_err(StudyError::invalid_input)?;
    let func = parameters.integrand.function();

    write!(out, "meshsize")?;
    for method in IntegrationMethod::ALL.iter() {
        write!(out, " {}", method.name())?;
    }
    for method in IntegrationMethod::ALL.iter() {
        write!(out, " {}_double", method.name())?;
    }
    writeln!(out)?;

    for n in 1..=parameters.n_meshsizes {
        let meshsize = sorta_exp10(n, parameters.density);
        write!(out, "{}", meshsize)?;
        for factor in MESHSIZE_FACTORS {
            let requested = i64::try_from(factor * meshsize)
                .map_err(|_| StudyError::InvalidInput(format!("meshsize {} out of range", meshsize)))?;
            for method in IntegrationMethod::ALL.iter() {
                let value = method.integrate(parameters.begin,
                                             parameters.end,
                                             requested,
                                             func,
                                             sink)?;
                write!(out, " {:.16e}", value)?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}
