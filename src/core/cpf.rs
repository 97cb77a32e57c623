//! CPF 清單處理核心
//!
//! 輸入為逗號分隔的 CPF 字串，每個項目只保留數字、左補 `'0'` 至 11 位，
//! 最後移除第一個與最後一個項目的首字元（只有一個項目時只移除一次）。
//!
//! 注意：此轉換不具冪等性，對輸出再次處理會繼續截短首尾項目。

use serde::{Deserialize, Serialize};

pub const DEFAULT_DELIMITER: char = ',';
pub const DEFAULT_TARGET_LENGTH: usize = 11;
pub const DEFAULT_PAD_CHAR: char = '0';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessorOptions {
    pub delimiter: char,
    pub target_length: usize,
    pub pad_char: char,
}

impl Default for ProcessorOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            target_length: DEFAULT_TARGET_LENGTH,
            pad_char: DEFAULT_PAD_CHAR,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CpfProcessor {
    options: ProcessorOptions,
}

impl CpfProcessor {
    pub fn new(options: ProcessorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ProcessorOptions {
        &self.options
    }

    /// 處理整份清單，永遠不會失敗
    pub fn process(&self, input: &str) -> Vec<String> {
        let tokens = self.split_tokens(input);
        if tokens.is_empty() {
            return Vec::new();
        }

        let mut cpfs: Vec<String> = tokens
            .iter()
            .map(|token| self.left_pad(sanitize_digits(token)))
            .collect();

        // 首尾同一個索引時只移除一次
        let last = cpfs.len() - 1;
        strip_first_char(&mut cpfs[0]);
        if last != 0 {
            strip_first_char(&mut cpfs[last]);
        }

        tracing::debug!(tokens = tokens.len(), "processed CPF list");
        cpfs
    }

    /// 整體 trim 後為空則回傳空清單；否則 k 個分隔符產生 k+1 個 token
    fn split_tokens<'a>(&self, input: &'a str) -> Vec<&'a str> {
        let trimmed = trim_spaces(input);
        if trimmed.is_empty() {
            return Vec::new();
        }

        trimmed.split(self.options.delimiter).map(trim_spaces).collect()
    }

    fn left_pad(&self, digits: String) -> String {
        let missing = self.options.target_length.saturating_sub(digits.chars().count());
        if missing == 0 {
            // 超過長度不截斷
            return digits;
        }

        let mut padded = String::with_capacity(missing + digits.len());
        padded.extend(std::iter::repeat(self.options.pad_char).take(missing));
        padded.push_str(&digits);
        padded
    }
}

/// 使用預設選項處理 CPF 清單
pub fn process(input: &str) -> Vec<String> {
    CpfProcessor::default().process(input)
}

// 只去除空白字元 ' '，tab 與換行保留
fn trim_spaces(s: &str) -> &str {
    s.trim_matches(' ')
}

fn sanitize_digits(token: &str) -> String {
    token.chars().filter(|c| c.is_ascii_digit()).collect()
}

fn strip_first_char(s: &mut String) {
    if !s.is_empty() {
        s.remove(0);
    }
}
