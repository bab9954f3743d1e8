use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - Remote endpoint URLs cannot be empty
/// - Each URL must be a valid URL or domain name
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(
    api_base_url: &str,
    schedule_base_url: &str,
    token_url: &str,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    validate_endpoint("Fantasy API base URL", api_base_url)?;
    validate_endpoint("Schedule service base URL", schedule_base_url)?;
    validate_endpoint("Token endpoint URL", token_url)?;

    // Validate log file path if provided
    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        // Check if parent directory exists or can be created
        if let Some(parent) = Path::new(log_path).parent()
            && !parent.exists()
        {
            // Try to create the directory to validate the path
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

fn validate_endpoint(label: &str, url: &str) -> Result<(), AppError> {
    if url.is_empty() {
        return Err(AppError::config_error(format!("{label} cannot be empty")));
    }

    // If it doesn't start with a protocol, it should at least look like a domain
    if !url.starts_with("http://")
        && !url.starts_with("https://")
        && !url.contains('.')
        && !url.starts_with("localhost")
    {
        return Err(AppError::config_error(format!(
            "{label} must be a valid URL or domain name"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_endpoints() {
        assert!(validate_config(
            "https://fantasy.example.com/v2",
            "https://stats.example.com",
            "https://auth.example.com/token",
            &None
        )
        .is_ok());

        assert!(validate_config(
            "localhost:8080",
            "api.example.com",
            "http://localhost/token",
            &None
        )
        .is_ok());
    }

    #[test]
    fn test_empty_endpoints_rejected() {
        assert!(validate_config("", "https://s.example.com", "https://t.example.com", &None).is_err());
        assert!(validate_config("https://a.example.com", "", "https://t.example.com", &None).is_err());
        assert!(validate_config("https://a.example.com", "https://s.example.com", "", &None).is_err());
    }

    #[test]
    fn test_non_domain_rejected() {
        let result = validate_config(
            "not_a_domain",
            "https://s.example.com",
            "https://t.example.com",
            &None,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_log_path_rejected() {
        let result = validate_config(
            "https://a.example.com",
            "https://s.example.com",
            "https://t.example.com",
            &Some(String::new()),
        );
        assert!(result.is_err());
    }
}
