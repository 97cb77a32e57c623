use crate::core::cpf::CpfProcessor;
use crate::core::{
    ConfigProvider, CpfRequest, InputSource, LoadOutcome, Pipeline, Storage, TransformResult,
};
use crate::utils::error::{CpfError, Result};
use std::path::Path;
use tokio::io::AsyncReadExt;

pub struct CpfPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    processor: CpfProcessor,
}

impl<S: Storage, C: ConfigProvider> CpfPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self::with_processor(storage, config, CpfProcessor::default())
    }

    pub fn with_processor(storage: S, config: C, processor: CpfProcessor) -> Self {
        Self {
            storage,
            config,
            processor,
        }
    }

    async fn read_text(&self, path: &str) -> Result<String> {
        let bytes = self.storage.read_file(path).await?;
        String::from_utf8(bytes).map_err(|e| CpfError::InputError {
            message: format!("{} is not valid UTF-8: {}", path, e),
        })
    }
}

// 檔案與 stdin 常以換行結尾，只去掉最後一個換行
fn strip_line_ending(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for CpfPipeline<S, C> {
    async fn extract(&self) -> Result<String> {
        let raw = match self.config.input_source() {
            InputSource::Inline(list) => list,
            InputSource::File(path) => {
                tracing::debug!("Reading CPF list from file: {}", path);
                strip_line_ending(self.read_text(&path).await?)
            }
            InputSource::Request(path) => {
                tracing::debug!("Reading JSON request from: {}", path);
                let body = self.read_text(&path).await?;
                let request = CpfRequest::from_json(&body)?;
                if request.cpf.is_none() {
                    tracing::warn!("Request has no 'cpf' field, treating it as empty");
                }
                request.input().to_string()
            }
            InputSource::Stdin => {
                tracing::debug!("Reading CPF list from stdin");
                let mut buffer = String::new();
                tokio::io::stdin()
                    .read_to_string(&mut buffer)
                    .await
                    .map_err(|e| CpfError::InputError {
                        message: format!("failed to read stdin: {}", e),
                    })?;
                strip_line_ending(buffer)
            }
        };

        Ok(raw)
    }

    async fn transform(&self, raw: String) -> Result<TransformResult> {
        let cpfs = self.processor.process(&raw);
        Ok(TransformResult::new(cpfs))
    }

    async fn load(&self, result: TransformResult) -> Result<LoadOutcome> {
        let json = result.to_json(self.config.pretty())?;

        match self.config.output_path() {
            Some(dir) => {
                let path = Path::new(dir)
                    .join(self.config.output_filename())
                    .to_string_lossy()
                    .into_owned();
                self.storage.write_file(&path, json.as_bytes()).await?;
                Ok(LoadOutcome::Written(path))
            }
            None => Ok(LoadOutcome::Stdout(json)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cpf::ProcessorOptions;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        async fn put_file(&self, path: &str, data: &str) {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.as_bytes().to_vec());
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                CpfError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct MockConfig {
        source: InputSource,
        output_path: Option<String>,
        pretty: bool,
    }

    impl MockConfig {
        fn new(source: InputSource) -> Self {
            Self {
                source,
                output_path: None,
                pretty: false,
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn input_source(&self) -> InputSource {
            self.source.clone()
        }

        fn output_path(&self) -> Option<&str> {
            self.output_path.as_deref()
        }

        fn output_filename(&self) -> &str {
            "cpf_output.json"
        }

        fn pretty(&self) -> bool {
            self.pretty
        }
    }

    #[tokio::test]
    async fn test_extract_inline_is_passed_through() {
        let config = MockConfig::new(InputSource::Inline(" 123 ,456\n".to_string()));
        let pipeline = CpfPipeline::new(MockStorage::new(), config);

        assert_eq!(pipeline.extract().await.unwrap(), " 123 ,456\n");
    }

    #[tokio::test]
    async fn test_extract_file_strips_final_newline() {
        let storage = MockStorage::new();
        storage.put_file("list.txt", "123,456\r\n").await;
        let config = MockConfig::new(InputSource::File("list.txt".to_string()));
        let pipeline = CpfPipeline::new(storage, config);

        assert_eq!(pipeline.extract().await.unwrap(), "123,456");
    }

    #[tokio::test]
    async fn test_extract_missing_file_is_io_error() {
        let config = MockConfig::new(InputSource::File("missing.txt".to_string()));
        let pipeline = CpfPipeline::new(MockStorage::new(), config);

        let err = pipeline.extract().await.unwrap_err();
        assert!(matches!(err, CpfError::IoError(_)));
    }

    #[tokio::test]
    async fn test_extract_request_with_null_cpf_is_empty() {
        let storage = MockStorage::new();
        storage.put_file("request.json", r#"{"cpf": null}"#).await;
        let config = MockConfig::new(InputSource::Request("request.json".to_string()));
        let pipeline = CpfPipeline::new(storage, config);

        let raw = pipeline.extract().await.unwrap();
        assert_eq!(raw, "");
        assert!(pipeline.transform(raw).await.unwrap().cpfs.is_empty());
    }

    #[tokio::test]
    async fn test_extract_invalid_request_is_serialization_error() {
        let storage = MockStorage::new();
        storage.put_file("request.json", "cpf=123").await;
        let config = MockConfig::new(InputSource::Request("request.json".to_string()));
        let pipeline = CpfPipeline::new(storage, config);

        let err = pipeline.extract().await.unwrap_err();
        assert!(matches!(err, CpfError::SerializationError(_)));
    }

    #[tokio::test]
    async fn test_transform_uses_processor_options() {
        let config = MockConfig::new(InputSource::Stdin);
        let processor = CpfProcessor::new(ProcessorOptions {
            delimiter: ';',
            ..ProcessorOptions::default()
        });
        let pipeline = CpfPipeline::with_processor(MockStorage::new(), config, processor);

        let result = pipeline.transform("1;2;3".to_string()).await.unwrap();
        assert_eq!(result.cpfs, vec!["0000000001", "00000000002", "0000000003"]);
        assert_eq!(result.token_count, 3);
    }

    #[tokio::test]
    async fn test_load_to_stdout() {
        let config = MockConfig::new(InputSource::Stdin);
        let pipeline = CpfPipeline::new(MockStorage::new(), config);

        let result = TransformResult::new(vec!["2345678901".to_string()]);
        let outcome = pipeline.load(result).await.unwrap();

        assert_eq!(outcome, LoadOutcome::Stdout(r#"["2345678901"]"#.to_string()));
    }

    #[tokio::test]
    async fn test_load_writes_file() {
        let storage = MockStorage::new();
        let mut config = MockConfig::new(InputSource::Stdin);
        config.output_path = Some("out".to_string());
        config.pretty = true;
        let pipeline = CpfPipeline::new(storage.clone(), config);

        let result = TransformResult::new(vec!["0000000123".to_string(), "0000000456".to_string()]);
        let outcome = pipeline.load(result).await.unwrap();

        let expected_path = Path::new("out")
            .join("cpf_output.json")
            .to_string_lossy()
            .into_owned();
        assert_eq!(outcome, LoadOutcome::Written(expected_path.clone()));

        let written = storage.get_file(&expected_path).await.unwrap();
        let parsed: Vec<String> = serde_json::from_slice(&written).unwrap();
        assert_eq!(parsed, vec!["0000000123", "0000000456"]);
    }
}
