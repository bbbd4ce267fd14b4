use std::io::Write;

use serde::Deserialize;

use crate::configurationerror::ConfigurationError;
use crate::math::geometry::circle::circle_area;
use crate::study::studyerror::StudyError;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CircleParameters {
    radius: f64
}

impl Default for CircleParameters {
    fn default() -> Self {
        CircleParameters { radius: 1.0 }
    }
}

impl CircleParameters {
    pub fn new(radius: f64) -> CircleParameters {
        CircleParameters { radius }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !(self.radius >= 0.0) || !self.radius.is_finite() {
            return Err(ConfigurationError::invalid_value("circle.radius", "radius cannot be negative"));
        }
        Ok(())
    }
}

pub fn write_circle_area<W>(out: &mut W, parameters: &CircleParameters) -> Result<(), StudyError>
where
    W: Write,
{
    parameters.validate().map_err(StudyError::invalid_input)?;
    let area = circle_area(parameters.radius);
    writeln!(out, "radius = {},  area = {:.9}", parameters.radius, area)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_area_line() {
        let mut out: Vec<u8> = Vec::new();
        write_circle_area(&mut out, &CircleParameters::new(2.0)).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "radius = 2,  area = 12.566370614\n");
    }

    #[test]
    fn test_negative_radius() {
        let mut out: Vec<u8> = Vec::new();
        let result = write_circle_area(&mut out, &CircleParameters::new(-1.0));
        assert!(matches!(result, Err(StudyError::InvalidInput(_))));
        assert!(out.is_empty());

        let result = write_circle_area(&mut out, &CircleParameters::new(f64::NAN));
        assert!(matches!(result, Err(StudyError::InvalidInput(_))));
    }
}
