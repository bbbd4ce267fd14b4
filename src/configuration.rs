use std::fs::File;
use std::io::BufReader;
use std::str::FromStr;

use serde::Deserialize;

use crate::configurationerror::ConfigurationError;
use crate::study::besselstudy::BesselParameters;
use crate::study::circlestudy::CircleParameters;
use crate::study::derivativestudy::DerivativeParameters;
use crate::study::integrationstudy::IntegrationParameters;
use crate::study::summationstudy::SummationParameters;

/// 各 study 的參數，JSON 中每個區段皆可省略（使用預設值）。
///
/// ```json
/// {
///     "output_folder": "data",
///     "integration": { "begin": 0.0, "end": 1.0, "n_meshsizes": 36, "density": 10.0, "integrand": "Exp" },
///     "bessel": { "order": 10, "start": 50 }
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Configuration {
    output_folder: String,
    integration: IntegrationParameters,
    derivative: DerivativeParameters,
    bessel: BesselParameters,
    summation: SummationParameters,
    circle: CircleParameters
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            output_folder: "data".to_owned(),
            integration: IntegrationParameters::default(),
            derivative: DerivativeParameters::default(),
            bessel: BesselParameters::default(),
            summation: SummationParameters::default(),
            circle: CircleParameters::default()
        }
    }
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration::default()
    }

    pub fn output_folder(&self) -> &String {
        &self.output_folder
    }

    pub fn integration(&self) -> &IntegrationParameters {
        &self.integration
    }

    pub fn derivative(&self) -> &DerivativeParameters {
        &self.derivative
    }

    pub fn bessel(&self) -> &BesselParameters {
        &self.bessel
    }

    pub fn summation(&self) -> &SummationParameters {
        &self.summation
    }

    pub fn circle(&self) -> &CircleParameters {
        &self.circle
    }

    pub fn from_reader(file_path: String) -> Result<Configuration, ConfigurationError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let configuration: Configuration = serde_json::from_reader(reader)?;
        configuration.validate()?;
        Ok(configuration)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.output_folder.is_empty() {
            return Err(ConfigurationError::invalid_value("output_folder", "must not be empty"));
        }
        self.integration.validate()?;
        self.derivative.validate()?;
        self.bessel.validate()?;
        self.summation.validate()?;
        self.circle.validate()
    }
}

impl FromStr for Configuration {
    type Err = ConfigurationError;

    fn from_str(json: &str) -> Result<Self, Self::Err> {
        let configuration: Configuration = serde_json::from_str(json)?;
        configuration.validate()?;
        Ok(configuration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::study::integrationstudy::IntegrandType;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let configuration: Configuration = r#"{
            "output_folder": "out",
            "integration": { "n_meshsizes": 12, "integrand": "Sin" },
            "bessel": { "order": 3 }
        }"#.parse().unwrap();

        assert_eq!(configuration.output_folder(), "out");
        assert_eq!(configuration.integration().n_meshsizes(), 12);
        assert_eq!(configuration.integration().integrand(), IntegrandType::Sin);
        assert_eq!(configuration.integration().end(), 1.0);
        assert_eq!(configuration.bessel().order(), 3);
        assert_eq!(configuration.bessel().start(), 50);
        assert_eq!(configuration.summation().n_max(), 1000);
    }

    #[test]
    fn test_empty_object_is_default() {
        let configuration: Configuration = "{}".parse().unwrap();
        assert_eq!(configuration.output_folder(), "data");
        assert_eq!(configuration.derivative().h_max(), 128.0);
    }

    #[test]
    fn test_bad_json() {
        let result = "{ \"integration\": ".parse::<Configuration>();
        assert!(matches!(result, Err(ConfigurationError::JsonParseError(_))));

        let result = r#"{ "integration": { "integrand": "Tan" } }"#.parse::<Configuration>();
        assert!(matches!(result, Err(ConfigurationError::JsonParseError(_))));
    }

    #[test]
    fn test_invalid_value() {
        let result = r#"{ "circle": { "radius": -2.0 } }"#.parse::<Configuration>();
        assert!(matches!(
            result,
            Err(ConfigurationError::InvalidValue { field: "circle.radius", .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = Configuration::from_reader("/nonexistent/compphys.json".to_owned());
        assert!(matches!(result, Err(ConfigurationError::IOError(_))));
    }
}
