//! Configuration endpoints.

use super::Endpoint;
use super::path::PathBuilder;

/// Configuration resource.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::module_name_repetitions)]
pub enum ConfigurationEndpoint {
    /// Image base URLs and sizes.
    Api,
    /// ISO 3166-1 countries.
    Countries {
        /// Language for translated country names.
        language: Option<String>,
    },
    /// Departments and jobs.
    Jobs,
    /// ISO 639-1 languages.
    Languages,
    /// Officially supported translations.
    PrimaryTranslations,
    /// Timezones per country.
    Timezones,
}

impl Endpoint for ConfigurationEndpoint {
    fn path(&self) -> String {
        match self {
            Self::Api => PathBuilder::new("/configuration").build(),
            Self::Countries { language } => PathBuilder::new("/configuration/countries")
                .optional_param("language", language.as_deref())
                .build(),
            Self::Jobs => PathBuilder::new("/configuration/jobs").build(),
            Self::Languages => PathBuilder::new("/configuration/languages").build(),
            Self::PrimaryTranslations => {
                PathBuilder::new("/configuration/primary_translations").build()
            }
            Self::Timezones => PathBuilder::new("/configuration/timezones").build(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_path() {
        // Arrange & Act & Assert
        assert_eq!(ConfigurationEndpoint::Api.path(), "/configuration");
    }

    #[test]
    fn test_countries_path_with_language() {
        // Arrange
        let endpoint = ConfigurationEndpoint::Countries {
            language: Some(String::from("ja-JP")),
        };

        // Act
        let path = endpoint.path();

        // Assert
        assert_eq!(path, "/configuration/countries?language=ja-JP");
    }

    #[test]
    fn test_countries_path_without_language() {
        // Arrange
        let endpoint = ConfigurationEndpoint::Countries { language: None };

        // Act
        let path = endpoint.path();

        // Assert
        assert_eq!(path, "/configuration/countries");
    }

    #[test]
    fn test_list_paths() {
        // Arrange & Act & Assert
        assert_eq!(ConfigurationEndpoint::Jobs.path(), "/configuration/jobs");
        assert_eq!(
            ConfigurationEndpoint::Languages.path(),
            "/configuration/languages"
        );
        assert_eq!(
            ConfigurationEndpoint::PrimaryTranslations.path(),
            "/configuration/primary_translations"
        );
        assert_eq!(
            ConfigurationEndpoint::Timezones.path(),
            "/configuration/timezones"
        );
    }
}
