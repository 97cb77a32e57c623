pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::LocalStorage, CliConfig};

pub use config::toml_config::TomlConfig;
pub use self::core::{
    cpf::{process, CpfProcessor, ProcessorOptions},
    etl::EtlEngine,
    pipeline::CpfPipeline,
};
pub use domain::model::{CpfRequest, LoadOutcome, TransformResult};
pub use utils::error::{CpfError, Result};
