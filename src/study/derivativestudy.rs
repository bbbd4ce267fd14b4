use std::io::Write;

use serde::Deserialize;

use crate::configurationerror::ConfigurationError;
use crate::math::differentiate::finitedifference::{
    central_diff,
    central_diff_adaptive,
    extrap_diff,
    extrap_diff2,
    forward_diff
};
use crate::study::studyerror::StudyError;

const COLUMN_PRECISION: usize = 8;
const COLUMN_WIDTH: usize = COLUMN_PRECISION + 7;
const COLUMN_PAD: &'static str = "   ";

/// 自動選步長差分的初始步長。
const ADAPTIVE_INITIAL_STEP: f64 = 0.1;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DerivativeParameters {
    x: f64,
    alpha: f64,
    h_max: f64,
    h_min: f64
}

impl Default for DerivativeParameters {
    fn default() -> Self {
        DerivativeParameters {
            x: 1.0,
            alpha: 1.0,
            h_max: 128.0,
            h_min: 1.0 / 128.0
        }
    }
}

impl DerivativeParameters {
    pub fn new(x: f64, alpha: f64, h_max: f64, h_min: f64) -> DerivativeParameters {
        DerivativeParameters { x, alpha, h_max, h_min }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn h_max(&self) -> f64 {
        self.h_max
    }

    pub fn h_min(&self) -> f64 {
        self.h_min
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !(self.h_min > 0.0) {
            return Err(ConfigurationError::invalid_value("derivative.h_min", "must be positive"));
        }
        if !self.h_max.is_finite() || !(self.h_max >= self.h_min) {
            return Err(ConfigurationError::invalid_value("derivative.h_max", "must be finite and not smaller than h_min"));
        }
        if self.alpha == 0.0 || !self.alpha.is_finite() || !self.x.is_finite() {
            return Err(ConfigurationError::invalid_value("derivative.alpha", "alpha and x must be finite, alpha non-zero"));
        }
        Ok(())
    }
}

/// 對 f(x) = exp(-αx)，h 由 h_max 每次減半至 h_min，輸出 log10(h) 與四種差分的
/// log10(相對誤差)。表前以 `#` 註解列出自動選步長差分的結果作為對照。
pub fn write_derivative_table<W>(out: &mut W, parameters: &DerivativeParameters) -> Result<(), StudyError>
where
    W: Write,
{
    parameters.validate().map_err(StudyError::invalid_input)?;

    let alpha = parameters.alpha;
    let x = parameters.x;
    let funct = |t: f64| (-alpha * t).exp();
    let answer = -alpha * (-alpha * x).exp();
    let log_rel_error = |value: f64| ((value - answer) / answer).abs().log10();

    let adaptive = central_diff_adaptive(x, ADAPTIVE_INITIAL_STEP, funct);
    writeln!(out, "# central_diff_adaptive({}) = {:.16e} +/- {:.6e}", x, adaptive.value(), adaptive.abserr())?;
    writeln!(out, "#  actual relative error: {:.8e}", ((adaptive.value() - answer) / answer).abs())?;

    writeln!(out, "# log10(h) vs. log10(rel errs)")?;
    let names = ["h", "forward_diff", "central_diff", "extrap_diff", "extrap_diff2"];
    let header: Vec<String> = names.iter()
        .map(|name| format!("{:<width$}", name, width = COLUMN_WIDTH))
        .collect();
    writeln!(out, "{}", header.join(COLUMN_PAD).trim_end())?;

    let mut h = parameters.h_max;
    while h >= parameters.h_min {
        let columns = [
            h.log10(),
            log_rel_error(forward_diff(x, h, funct)),
            log_rel_error(central_diff(x, h, funct)),
            log_rel_error(extrap_diff(x, h, funct)),
            log_rel_error(extrap_diff2(x, h, funct))
        ];
        let row: Vec<String> = columns.iter()
            .map(|value| format!("{:>width$.prec$e}", value, width = COLUMN_WIDTH, prec = COLUMN_PRECISION))
            .collect();
        writeln!(out, "{}", row.join(COLUMN_PAD))?;
        h /= 2.0;
    }
    Ok(())
}
