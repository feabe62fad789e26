//! Configuration validation logic.

use url::Url;

use crate::config::loader::Config;
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_base_url("web_base", &config.site.web_base)?;
    validate_base_url("api_base", &config.site.api_base)?;
    validate_base_url("data_base", &config.site.data_base)?;

    if config.site.timeout_secs == 0 {
        return Err(Error::ConfigValidation {
            field: "timeout_secs".to_string(),
            message: "Timeout must be at least 1 second".to_string(),
        });
    }

    if config.pagination.page_size == 0 {
        return Err(Error::ConfigValidation {
            field: "page_size".to_string(),
            message: "Page size must be greater than zero".to_string(),
        });
    }

    validate_formats(&config.output.formats)?;

    Ok(())
}

/// Validate that a base URL is an absolute http(s) URL.
pub fn validate_base_url(field: &str, value: &str) -> Result<()> {
    let url = Url::parse(value).map_err(|e| Error::ConfigValidation {
        field: field.to_string(),
        message: format!("'{}' is not a valid URL: {}", value, e),
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(Error::ConfigValidation {
            field: field.to_string(),
            message: format!("'{}' must use http or https", value),
        });
    }

    Ok(())
}

/// Validate requested file extensions.
pub fn validate_formats<S: AsRef<str>, I: IntoIterator<Item = S>>(formats: I) -> Result<()> {
    let formats: Vec<_> = formats.into_iter().collect();

    if formats.is_empty() {
        return Err(Error::ConfigValidation {
            field: "formats".to_string(),
            message: "At least one file format is required".to_string(),
        });
    }

    for format in formats {
        let format = format.as_ref();

        if format.trim().is_empty() {
            return Err(Error::ConfigValidation {
                field: "formats".to_string(),
                message: "File formats cannot be empty".to_string(),
            });
        }

        if format.starts_with('.') {
            return Err(Error::ConfigValidation {
                field: "formats".to_string(),
                message: format!(
                    "Format '{}' should be given without the leading dot",
                    format
                ),
            });
        }

        if format.contains('/') || format.contains('\\') {
            return Err(Error::ConfigValidation {
                field: "formats".to_string(),
                message: format!("Format '{}' contains a path separator", format),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(validate_base_url("web_base", "not a url").is_err());
        assert!(validate_base_url("web_base", "ftp://kemono.su").is_err());
        assert!(validate_base_url("web_base", "http://127.0.0.1:9000").is_ok());
    }

    #[test]
    fn test_zero_page_size() {
        let mut config = Config::default();
        config.pagination.page_size = 0;
        assert!(matches!(
            validate_config(&config),
            Err(Error::ConfigValidation { field, .. }) if field == "page_size"
        ));
    }

    #[test]
    fn test_formats() {
        assert!(validate_formats(["png", "jpg", "tar.gz"]).is_ok());
        assert!(validate_formats(Vec::<String>::new()).is_err());
        assert!(validate_formats([".png"]).is_err());
        assert!(validate_formats([""]).is_err());
        assert!(validate_formats(["a/b"]).is_err());
    }
}
