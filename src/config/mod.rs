pub mod settings;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use settings::Overrides;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "salary-stats")]
#[command(about = "Average programmer salaries from hh.ru and SuperJob, per search keyword")]
pub struct CliConfig {
    /// Search keywords, comma separated (text on hh.ru, keyword on SuperJob)
    #[arg(short = 't', long = "texts", value_delimiter = ',')]
    pub texts: Vec<String>,

    /// Extra hh.ru query parameters as a JSON object; must not contain text or page
    #[arg(long = "hh-params", visible_alias = "hp")]
    pub hh_params: Option<String>,

    /// Extra SuperJob query parameters as a JSON object; must not contain keyword(s) or page
    #[arg(long = "sj-params", visible_alias = "sp")]
    pub sj_params: Option<String>,

    /// Header row of the hh.ru table, four comma separated cells
    #[arg(long, value_delimiter = ',')]
    pub hh_header: Option<Vec<String>>,

    /// Header row of the SuperJob table, four comma separated cells
    #[arg(long, value_delimiter = ',')]
    pub sj_header: Option<Vec<String>>,

    /// Print the tables without header rows
    #[arg(long)]
    pub no_header: bool,

    #[arg(long)]
    pub hh_url: Option<String>,

    #[arg(long)]
    pub sj_url: Option<String>,

    /// Optional TOML file with keywords, endpoints, titles, headers and params
    #[arg(short, long)]
    pub config: Option<String>,

    /// Also write CSV and JSON reports into this directory
    #[arg(long)]
    pub export_dir: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            keywords: if self.texts.is_empty() {
                None
            } else {
                Some(self.texts.clone())
            },
            hh_params: self.hh_params.clone(),
            sj_params: self.sj_params.clone(),
            hh_header: self.hh_header.clone(),
            sj_header: self.sj_header.clone(),
            no_header: self.no_header,
            hh_url: self.hh_url.clone(),
            sj_url: self.sj_url.clone(),
            export_dir: self.export_dir.clone(),
        }
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let config = CliConfig::parse_from([
            "salary-stats",
            "-t",
            "Программист Rust,Программист Go",
            "--hh-params",
            r#"{"area": "2"}"#,
            "--sj-header",
            "k,f,p,a",
            "--verbose",
        ]);

        assert_eq!(config.texts, vec!["Программист Rust", "Программист Go"]);
        assert_eq!(config.hh_params.as_deref(), Some(r#"{"area": "2"}"#));
        assert_eq!(
            config.sj_header,
            Some(vec![
                "k".to_string(),
                "f".to_string(),
                "p".to_string(),
                "a".to_string()
            ])
        );
        assert!(config.verbose);

        let overrides = config.overrides();
        assert_eq!(overrides.keywords.unwrap().len(), 2);
        assert!(overrides.hh_header.is_none());
    }

    #[test]
    fn test_no_flags_means_no_overrides() {
        let overrides = CliConfig::parse_from(["salary-stats"]).overrides();
        assert!(overrides.keywords.is_none());
        assert!(overrides.hh_params.is_none());
        assert!(!overrides.no_header);
    }
}
