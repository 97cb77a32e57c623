#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::{ConfigProvider, InputSource};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_OUTPUT_FILENAME: &str = "cpf_output.json";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "cpf-list")]
#[command(about = "Sanitize and pad a comma-separated list of CPF numbers")]
#[command(group(
    clap::ArgGroup::new("source")
        .args(["cpf", "input_file", "request_file"])
        .multiple(false)
))]
pub struct CliConfig {
    /// Comma-separated CPF list (stdin is read when no source is given)
    #[arg(long, allow_hyphen_values = true)]
    pub cpf: Option<String>,

    /// File containing the raw CPF list
    #[arg(long)]
    pub input_file: Option<String>,

    /// File containing a JSON request body: {"cpf": "..."}
    #[arg(long)]
    pub request_file: Option<String>,

    /// Directory for the JSON output file; prints to stdout when omitted
    #[arg(long)]
    pub output_path: Option<String>,

    #[arg(long)]
    pub output_filename: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, help = "Pretty-print the JSON array")]
    pub pretty: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 命令列參數優先，未指定的部分由 TOML 補上
    pub fn merge_toml(&mut self, toml: &toml_config::TomlConfig) {
        if let Some(output) = &toml.output {
            if self.output_filename.is_none() {
                self.output_filename = output.filename.clone();
            }
            if !self.pretty {
                self.pretty = output.pretty.unwrap_or(false);
            }
        }
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn input_source(&self) -> InputSource {
        if let Some(cpf) = &self.cpf {
            InputSource::Inline(cpf.clone())
        } else if let Some(path) = &self.input_file {
            InputSource::File(path.clone())
        } else if let Some(path) = &self.request_file {
            InputSource::Request(path.clone())
        } else {
            InputSource::Stdin
        }
    }

    fn output_path(&self) -> Option<&str> {
        self.output_path.as_deref()
    }

    fn output_filename(&self) -> &str {
        self.output_filename
            .as_deref()
            .unwrap_or(DEFAULT_OUTPUT_FILENAME)
    }

    fn pretty(&self) -> bool {
        self.pretty
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.input_file {
            validation::validate_path("input_file", path)?;
        }
        if let Some(path) = &self.request_file {
            validation::validate_path("request_file", path)?;
        }
        if let Some(path) = &self.output_path {
            validation::validate_path("output_path", path)?;
        }
        if let Some(filename) = &self.output_filename {
            validation::validate_non_empty_string("output_filename", filename)?;
        }
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use crate::config::toml_config::TomlConfig;

    #[test]
    fn test_parse_inline_source() {
        let config = CliConfig::parse_from(["cpf-list", "--cpf", "123,456", "--pretty"]);

        assert_eq!(config.input_source(), InputSource::Inline("123,456".to_string()));
        assert!(config.pretty());
        assert_eq!(config.output_path(), None);
        assert_eq!(config.output_filename(), DEFAULT_OUTPUT_FILENAME);
    }

    #[test]
    fn test_default_source_is_stdin() {
        let config = CliConfig::parse_from(["cpf-list"]);
        assert_eq!(config.input_source(), InputSource::Stdin);
    }

    #[test]
    fn test_sources_are_mutually_exclusive() {
        let result = CliConfig::try_parse_from([
            "cpf-list",
            "--cpf",
            "123",
            "--input-file",
            "list.txt",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_merge_toml_keeps_cli_values() {
        let toml = TomlConfig::from_toml_str(
            r#"
[output]
filename = "from_toml.json"
pretty = true
"#,
        )
        .unwrap();

        let mut config = CliConfig::parse_from(["cpf-list", "--output-filename", "cli.json"]);
        config.merge_toml(&toml);

        assert_eq!(config.output_filename(), "cli.json");
        assert!(config.pretty());
    }

    #[test]
    fn test_validate_rejects_blank_filename() {
        let config = CliConfig::parse_from(["cpf-list", "--output-filename", "  "]);
        assert!(config.validate().is_err());
    }
}
