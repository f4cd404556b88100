use std::path::PathBuf;

use nm_common::error::CommonError;
use nm_common::openai::OpenAiClientError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Common(#[from] CommonError),

    #[error(transparent)]
    Client(#[from] OpenAiClientError),

    #[error("config error: {0}")]
    Config(String),

    #[error("{} already holds {count} .txt file(s), refusing to overwrite", .dir.display())]
    OutputNotEmpty { dir: PathBuf, count: usize },
}
