pub mod cpf;
pub mod etl;
pub mod pipeline;

pub use crate::domain::model::{CpfRequest, LoadOutcome, TransformResult};
pub use crate::domain::ports::{ConfigProvider, InputSource, Pipeline, Storage};
pub use crate::utils::error::Result;
