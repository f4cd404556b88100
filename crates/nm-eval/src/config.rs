use std::collections::HashMap;
use std::path::{Path, PathBuf};

use nm_common::openai::OpenAiClientConfig;

use tracing::warn;

use crate::error::AppError;

/// Model every notional machine is evaluated with.
pub const MODEL: &str = "gpt-4o";

pub const INPUT_DIR: &str = "formal_NMs";
pub const OUTPUT_DIR: &str = "gpt4o_EVALs_criteria2_and_template2";
pub const CRITERIA_FILE: &str = "marking_criteria2.txt";
pub const TEMPLATE_DIR: &str = "sample_ios";
pub const TEMPLATE_FILE: &str = "evaluation_template2.txt";

/// Where a run reads its documents from and writes its evaluations to.
///
/// All paths are relative to the working directory unless built with [`EvalPaths::under`].
#[derive(Debug, Clone)]
pub struct EvalPaths {
    /// Directory of notional machine descriptions (`*.txt`).
    pub input_dir: PathBuf,
    /// Directory the evaluations are written to. Must hold no `.txt` files before a run.
    pub output_dir: PathBuf,
    /// Marking criteria shared by every evaluation.
    pub criteria_file: PathBuf,
    /// Evaluation form the model fills out.
    pub template_file: PathBuf,
}

impl Default for EvalPaths {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(INPUT_DIR),
            output_dir: PathBuf::from(OUTPUT_DIR),
            criteria_file: PathBuf::from(CRITERIA_FILE),
            template_file: Path::new(TEMPLATE_DIR).join(TEMPLATE_FILE),
        }
    }
}

impl EvalPaths {
    /// The default layout rooted at `root` instead of the working directory.
    #[cfg(test)]
    pub fn under(root: &Path) -> Self {
        let defaults = Self::default();
        Self {
            input_dir: root.join(defaults.input_dir),
            output_dir: root.join(defaults.output_dir),
            criteria_file: root.join(defaults.criteria_file),
            template_file: root.join(defaults.template_file),
        }
    }
}

/// Application configuration loaded from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai: OpenAiClientConfig,
    pub model: String,
    pub paths: EvalPaths,
}

impl Config {
    /// Load configuration from environment variables, falling back to a `.env` file in the
    /// working directory or one of its parents. Process variables win over the file.
    ///
    /// Required:
    /// - `OPENAI_API_KEY`: credential for the chat completion API
    ///
    /// Optional (see [`OpenAiClientConfig::from_env`]):
    /// - `OPENAI_BASE_URL`, `OPENAI_TIMEOUT_SECS`, `OPENAI_MAX_ERROR_BODY_BYTES`
    pub fn from_env() -> Result<Self, AppError> {
        let dotenv = match dotenvy::dotenv_iter() {
            Ok(iter) => dotenv_vars(iter),
            Err(e) if e.not_found() => HashMap::new(),
            Err(e) => {
                warn!(error = %e, "ignoring unreadable .env file");
                HashMap::new()
            }
        };
        Self::from_sources(|key| std::env::var(key).ok(), &dotenv)
    }

    fn from_sources(
        env: impl Fn(&str) -> Option<String>,
        dotenv: &HashMap<String, String>,
    ) -> Result<Self, AppError> {
        let openai =
            OpenAiClientConfig::from_lookup(|key| env(key).or_else(|| dotenv.get(key).cloned()));
        Self::from_openai(openai)
    }

    fn from_openai(openai: OpenAiClientConfig) -> Result<Self, AppError> {
        if openai.api_key.is_none() {
            return Err(AppError::Config(
                "OPENAI_API_KEY environment variable not set".to_string(),
            ));
        }

        Ok(Self {
            openai,
            model: MODEL.to_string(),
            paths: EvalPaths::default(),
        })
    }
}

/// Collect `.env` entries without exporting them to the process environment.
fn dotenv_vars<R: std::io::Read>(iter: dotenvy::Iter<R>) -> HashMap<String, String> {
    iter.filter_map(|item| {
        item.inspect_err(|e| warn!(error = %e, "skipping malformed .env line"))
            .ok()
    })
    .collect()
}
