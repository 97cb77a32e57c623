use crate::core::cpf::{ProcessorOptions, DEFAULT_TARGET_LENGTH};
use crate::utils::error::{CpfError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

const MAX_TARGET_LENGTH: usize = 64;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub processing: ProcessingConfig,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessingConfig {
    pub delimiter: Option<String>,
    pub target_length: Option<usize>,
    pub pad_char: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub filename: Option<String>,
    pub pretty: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CpfError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CpfError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CPF_DELIMITER})，找不到的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CpfError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 轉成處理器選項，未設定的欄位使用預設值
    pub fn processor_options(&self) -> Result<ProcessorOptions> {
        let defaults = ProcessorOptions::default();
        let processing = &self.processing;

        let delimiter = match &processing.delimiter {
            Some(value) => validation::validate_single_char("processing.delimiter", value)?,
            None => defaults.delimiter,
        };
        let pad_char = match &processing.pad_char {
            Some(value) => validation::validate_single_char("processing.pad_char", value)?,
            None => defaults.pad_char,
        };
        let target_length = processing.target_length.unwrap_or(DEFAULT_TARGET_LENGTH);

        Ok(ProcessorOptions {
            delimiter,
            target_length,
            pad_char,
        })
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        let options = self.processor_options()?;

        validation::validate_range(
            "processing.target_length",
            options.target_length,
            1,
            MAX_TARGET_LENGTH,
        )?;

        if options.pad_char == options.delimiter {
            return Err(CpfError::InvalidConfigValueError {
                field: "processing.pad_char".to_string(),
                value: options.pad_char.to_string(),
                reason: "Pad character cannot be the delimiter".to_string(),
            });
        }

        if let Some(filename) = self.output.as_ref().and_then(|o| o.filename.as_deref()) {
            validation::validate_non_empty_string("output.filename", filename)?;
        }

        Ok(())
    }
}
