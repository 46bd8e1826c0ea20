use crate::utils::error::{Result, SalaryError};
use std::collections::HashSet;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(SalaryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(SalaryError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(SalaryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(SalaryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(SalaryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_list(field_name: &str, values: &[String]) -> Result<()> {
    if values.iter().all(|v| v.trim().is_empty()) {
        return Err(SalaryError::MissingConfigError {
            field: field_name.to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SalaryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Header rows must line up with `[keyword, found, processed, average]`.
pub fn validate_header(field_name: &str, header: &[String], columns: usize) -> Result<()> {
    if header.len() != columns {
        return Err(SalaryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: header.join(","),
            reason: format!("Header must have exactly {} cells", columns),
        });
    }
    Ok(())
}

/// Rejects extra query parameters that would clobber the pagination keys.
pub fn validate_reserved_keys<'a, I>(field_name: &str, keys: I, reserved: &[&str]) -> Result<()>
where
    I: IntoIterator<Item = &'a String>,
{
    let reserved_set: HashSet<&str> = reserved.iter().copied().collect();

    for key in keys {
        if reserved_set.contains(key.as_str()) {
            return Err(SalaryError::InvalidParamsError {
                flag: field_name.to_string(),
                message: format!(
                    "'{}' is set by the tool itself. Reserved keys: {}",
                    key,
                    reserved.join(", ")
                ),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("hh.endpoint", "https://api.hh.ru/vacancies").is_ok());
        assert!(validate_url("hh.endpoint", "http://127.0.0.1:8080/vacancies").is_ok());
        assert!(validate_url("hh.endpoint", "").is_err());
        assert!(validate_url("hh.endpoint", "invalid-url").is_err());
        assert!(validate_url("hh.endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_header() {
        let header: Vec<String> = ["keywords", "total", "total processed", "average salary"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert!(validate_header("hh.header", &header, 4).is_ok());
        assert!(validate_header("hh.header", &header[..3], 4).is_err());
    }

    #[test]
    fn test_validate_reserved_keys() {
        let keys = vec!["area".to_string(), "per_page".to_string()];
        assert!(validate_reserved_keys("--hh-params", &keys, &["text", "page"]).is_ok());

        let keys = vec!["area".to_string(), "page".to_string()];
        let err = validate_reserved_keys("--hh-params", &keys, &["text", "page"]).unwrap_err();
        assert!(matches!(err, SalaryError::InvalidParamsError { .. }));
    }

    #[test]
    fn test_validate_non_empty_list() {
        assert!(validate_non_empty_list("keywords", &["Rust".to_string()]).is_ok());
        assert!(validate_non_empty_list("keywords", &[]).is_err());
        assert!(validate_non_empty_list("keywords", &["  ".to_string()]).is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("export_dir", "./reports").is_ok());
        assert!(validate_path("export_dir", "").is_err());
    }
}
