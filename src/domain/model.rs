use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

/// HTTP 請求本體 `{"cpf": "..."}`，欄位缺少或為 null 時視為空字串
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CpfRequest {
    #[serde(default)]
    pub cpf: Option<String>,
}

impl CpfRequest {
    pub fn new(cpf: impl Into<String>) -> Self {
        Self {
            cpf: Some(cpf.into()),
        }
    }

    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    pub fn input(&self) -> &str {
        self.cpf.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformResult {
    pub cpfs: Vec<String>,
    pub token_count: usize,
}

impl TransformResult {
    pub fn new(cpfs: Vec<String>) -> Self {
        let token_count = cpfs.len();
        Self { cpfs, token_count }
    }

    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(&self.cpfs)?
        } else {
            serde_json::to_string(&self.cpfs)?
        };
        Ok(json)
    }
}

/// 載入結果：寫入檔案的路徑，或要輸出到 stdout 的 JSON
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Written(String),
    Stdout(String),
}
