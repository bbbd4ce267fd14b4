use std::io::Write;

use serde::Deserialize;

use crate::configurationerror::ConfigurationError;
use crate::math::special::sphericalbessel::{
    down_recursion,
    up_recursion
};
use crate::study::studyerror::StudyError;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BesselParameters {
    x_min: f64,
    x_max: f64,
    step: f64,
    order: usize,
    start: usize
}

impl Default for BesselParameters {
    fn default() -> Self {
        BesselParameters {
            x_min: 0.1,
            x_max: 100.0,
            step: 0.1,
            order: 10,
            start: 50
        }
    }
}

impl BesselParameters {
    pub fn new(x_min: f64, x_max: f64, step: f64, order: usize, start: usize) -> BesselParameters {
        BesselParameters { x_min, x_max, step, order, start }
    }

    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn order(&self) -> usize {
        self.order
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !(self.x_min > 0.0) {
            return Err(ConfigurationError::invalid_value("bessel.x_min", "must be positive"));
        }
        if !(self.x_max >= self.x_min) {
            return Err(ConfigurationError::invalid_value("bessel.x_max", "must not be smaller than x_min"));
        }
        if !(self.step > 0.0) {
            return Err(ConfigurationError::invalid_value("bessel.step", "must be positive"));
        }
        if self.order > self.start {
            return Err(ConfigurationError::invalid_value("bessel.start", "must not be smaller than order"));
        }
        Ok(())
    }

    /// x 的取樣點數；以索引計算 x，避免累加 step 的漂移。
    fn sample_count(&self) -> usize {
        ((self.x_max - self.x_min) / self.step + 1e-9).floor() as usize + 1
    }
}

/// 對每個 x 輸出下行、上行遞迴結果與相對差 |down - up| / (|down| + |up|)。
pub fn write_bessel_table<W>(out: &mut W, parameters: &BesselParameters) -> Result<(), StudyError>
where
    W: Write,
{
    parameters.validate().map_err(StudyError::invalid_input)?;

    writeln!(out, "# Spherical Bessel functions via up and down recursion")?;
    writeln!(out, "{:<8} {:<13} {:<13} {:<13}", "# x", "down", "up", "rel_diff")?;

    for i in 0..parameters.sample_count() {
        let x = parameters.x_min + i as f64 * parameters.step;
        let ans_down = down_recursion(x, parameters.order, parameters.start)
            .ok_or_else(|| StudyError::InvalidInput(format!("down recursion undefined at x = {}", x)))?;
        let ans_up = up_recursion(x, parameters.order);
        let rel_diff = (ans_down - ans_up).abs() / (ans_down.abs() + ans_up.abs());

        writeln!(out, "{:>8.6} {:>13.6e} {:>13.6e} {:>13.6e}", x, ans_down, ans_up, rel_diff)?;
    }
    Ok(())
}
