use std::io::Write;

use serde::Deserialize;

use crate::configurationerror::ConfigurationError;
use crate::math::summation::{
    sum_down,
    sum_up
};
use crate::study::studyerror::StudyError;

const COLUMN_PAD: &'static str = "   ";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SummationParameters {
    n_max: usize
}

impl Default for SummationParameters {
    fn default() -> Self {
        SummationParameters { n_max: 1000 }
    }
}

impl SummationParameters {
    pub fn new(n_max: usize) -> SummationParameters {
        SummationParameters { n_max }
    }

    pub fn n_max(&self) -> usize {
        self.n_max
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.n_max == 0 {
            return Err(ConfigurationError::invalid_value("summation.n_max", "must be at least 1"));
        }
        Ok(())
    }
}

/// 單精度下兩種累加順序的調和級數部分和，n = 1..=n_max。
pub fn write_summation_table<W>(out: &mut W, parameters: &SummationParameters) -> Result<(), StudyError>
where
    W: Write,
{
    parameters.validate().map_err(StudyError::invalid_input)?;

    let ndigits = parameters.n_max.to_string().len().max("# terms".len());
    writeln!(out, "{:<ndigits$}{pad}{:<13}{pad}{:<13}",
             "# terms", "sum_up", "sum_down",
             ndigits = ndigits, pad = COLUMN_PAD)?;

    for n in 1..=parameters.n_max {
        let up = sum_up::<f32>(n);
        let down = sum_down::<f32>(n);
        writeln!(out, "{:>ndigits$}{pad}{:.8e}{pad}{:.8e}", n, up, down, ndigits = ndigits, pad = COLUMN_PAD)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summation_table() {
        let mut out: Vec<u8> = Vec::new();
        write_summation_table(&mut out, &SummationParameters::new(3)).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("# terms"));

        let row: Vec<&str> = lines[3].split_whitespace().collect();
        assert_eq!(row[0], "3");
        let up: f64 = row[1].parse().unwrap();
        assert!((up - 11.0 / 6.0).abs() < 1e-6);
    }

    #[test]
    fn test_summation_rejects_zero() {
        let mut out: Vec<u8> = Vec::new();
        assert!(write_summation_table(&mut out, &SummationParameters::new(0)).is_err());
    }
}
