use crate::config::toml_config::{FileConfig, SourceSection};
use crate::core::table::{default_header, COLUMNS};
use crate::utils::error::{Result, SalaryError};
use crate::utils::validation::{
    validate_header, validate_non_empty_list, validate_non_empty_string, validate_path,
    validate_reserved_keys, validate_url, Validate,
};
use serde_json::{Map, Value};

pub const CREDENTIAL_ENV_VAR: &str = "SJ_SECRET_KEY";

pub const HH_ENDPOINT: &str = "https://api.hh.ru/vacancies";
pub const SJ_ENDPOINT: &str = "https://api.superjob.ru/2.0/vacancies/";

pub const HH_TITLE: &str = "hh for moscow";
pub const SJ_TITLE: &str = "SuperJob for moscow";

pub const HH_RESERVED_PARAMS: &[&str] = &["text", "page"];
pub const SJ_RESERVED_PARAMS: &[&str] = &["keyword", "keywords", "page"];

pub fn default_keywords() -> Vec<String> {
    [
        "JavaScript",
        "Java",
        "Python",
        "Ruby",
        "PHP",
        "C++",
        "C#",
        "C",
        "Go",
        "Shell",
    ]
    .iter()
    .map(|lang| format!("Программист {}", lang))
    .collect()
}

/// Moscow, "Information technology" role, 100 per page.
pub fn default_hh_params() -> Map<String, Value> {
    let mut params = Map::new();
    params.insert("professional_role".to_string(), Value::from("96"));
    params.insert("area".to_string(), Value::from("1"));
    params.insert("date_from".to_string(), Value::from("2000-01-01"));
    params.insert("per_page".to_string(), Value::from(100));
    params
}

/// Moscow, "IT, Internet" catalogue, all time, 100 per page.
pub fn default_sj_params() -> Map<String, Value> {
    let mut params = Map::new();
    params.insert("period".to_string(), Value::from(0));
    params.insert("town".to_string(), Value::from(4));
    params.insert("catalogues".to_string(), Value::from(48));
    params.insert("count".to_string(), Value::from(100));
    params
}

/// Extra query parameters for one source, flattened to string pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Parses a JSON object given on the command line.
    pub fn from_json(flag: &str, text: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| SalaryError::InvalidParamsError {
                flag: flag.to_string(),
                message: e.to_string(),
            })?;

        match value {
            Value::Object(map) => Self::from_map(flag, &map),
            other => Err(SalaryError::InvalidParamsError {
                flag: flag.to_string(),
                message: format!("expected a JSON object, got {}", other),
            }),
        }
    }

    /// Arrays become repeated keys; nulls are skipped.
    pub fn from_map(flag: &str, map: &Map<String, Value>) -> Result<Self> {
        let mut pairs = Vec::with_capacity(map.len());

        for (key, value) in map {
            match value {
                Value::Array(items) => {
                    for item in items {
                        pairs.push((key.clone(), scalar_to_string(flag, key, item)?));
                    }
                }
                Value::Null => {}
                scalar => pairs.push((key.clone(), scalar_to_string(flag, key, scalar)?)),
            }
        }

        Ok(Self { pairs })
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.pairs.iter().map(|(key, _)| key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

fn scalar_to_string(flag: &str, key: &str, value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        _ => Err(SalaryError::InvalidParamsError {
            flag: flag.to_string(),
            message: format!("value of '{}' must be a string, number or boolean", key),
        }),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SourceSettings {
    pub endpoint: String,
    pub title: String,
    pub header: Option<Vec<String>>,
    pub params: QueryParams,
}

/// Fully resolved run configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub keywords: Vec<String>,
    pub headhunter: SourceSettings,
    pub superjob: SourceSettings,
    pub export_dir: Option<String>,
}

/// Values given explicitly on the command line; they win over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub keywords: Option<Vec<String>>,
    pub hh_params: Option<String>,
    pub sj_params: Option<String>,
    pub hh_header: Option<Vec<String>>,
    pub sj_header: Option<Vec<String>>,
    pub no_header: bool,
    pub hh_url: Option<String>,
    pub sj_url: Option<String>,
    pub export_dir: Option<String>,
}

struct SourceDefaults {
    flag: &'static str,
    endpoint: &'static str,
    title: &'static str,
    params: fn() -> Map<String, Value>,
}

const HH_DEFAULTS: SourceDefaults = SourceDefaults {
    flag: "--hh-params",
    endpoint: HH_ENDPOINT,
    title: HH_TITLE,
    params: default_hh_params,
};

const SJ_DEFAULTS: SourceDefaults = SourceDefaults {
    flag: "--sj-params",
    endpoint: SJ_ENDPOINT,
    title: SJ_TITLE,
    params: default_sj_params,
};

fn resolve_source(
    defaults: &SourceDefaults,
    section: Option<SourceSection>,
    url: Option<String>,
    params_json: Option<&str>,
    header: Option<Vec<String>>,
    no_header: bool,
) -> Result<SourceSettings> {
    let section = section.unwrap_or_default();

    let params = match params_json {
        Some(text) => QueryParams::from_json(defaults.flag, text)?,
        None => {
            let map = section.params.unwrap_or_else(defaults.params);
            QueryParams::from_map(defaults.flag, &map)?
        }
    };

    let header = if no_header {
        None
    } else {
        Some(header.or(section.header).unwrap_or_else(default_header))
    };

    Ok(SourceSettings {
        endpoint: url
            .or(section.endpoint)
            .unwrap_or_else(|| defaults.endpoint.to_string()),
        title: section.title.unwrap_or_else(|| defaults.title.to_string()),
        header,
        params,
    })
}

impl Settings {
    /// Layers defaults, then the optional file, then command line overrides.
    pub fn resolve(overrides: Overrides, file: Option<FileConfig>) -> Result<Self> {
        let file = file.unwrap_or_default();

        let keywords = overrides
            .keywords
            .filter(|k| !k.is_empty())
            .or(file.keywords)
            .unwrap_or_else(default_keywords)
            .into_iter()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .collect();

        let headhunter = resolve_source(
            &HH_DEFAULTS,
            file.headhunter,
            overrides.hh_url,
            overrides.hh_params.as_deref(),
            overrides.hh_header,
            overrides.no_header,
        )?;
        let superjob = resolve_source(
            &SJ_DEFAULTS,
            file.superjob,
            overrides.sj_url,
            overrides.sj_params.as_deref(),
            overrides.sj_header,
            overrides.no_header,
        )?;

        Ok(Self {
            keywords,
            headhunter,
            superjob,
            export_dir: overrides.export_dir.or(file.export_dir),
        })
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_list("keywords", &self.keywords)?;

        validate_url("headhunter.endpoint", &self.headhunter.endpoint)?;
        validate_url("superjob.endpoint", &self.superjob.endpoint)?;

        validate_reserved_keys(
            HH_DEFAULTS.flag,
            self.headhunter.params.keys(),
            HH_RESERVED_PARAMS,
        )?;
        validate_reserved_keys(
            SJ_DEFAULTS.flag,
            self.superjob.params.keys(),
            SJ_RESERVED_PARAMS,
        )?;

        if let Some(header) = &self.headhunter.header {
            validate_header("headhunter.header", header, COLUMNS)?;
        }
        if let Some(header) = &self.superjob.header {
            validate_header("superjob.header", header, COLUMNS)?;
        }

        if let Some(dir) = &self.export_dir {
            validate_path("export_dir", dir)?;
        }

        Ok(())
    }
}

/// Reads the SuperJob credential. Empty values count as missing.
pub fn read_credential(name: &str) -> Result<String> {
    let value = std::env::var(name).map_err(|_| SalaryError::MissingEnvVarError {
        name: name.to_string(),
    })?;
    validate_non_empty_string(name, &value).map_err(|_| SalaryError::MissingEnvVarError {
        name: name.to_string(),
    })?;
    Ok(value)
}
