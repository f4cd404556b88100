/// Batch evaluation run.
///
/// One pass over the input directory: every notional machine is evaluated in turn and the
/// model's answer lands next to the others in the output directory. Requests never overlap.
/// A run refuses to start when the output directory already holds evaluations, so reruns
/// cannot clobber earlier results.
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use nm_common::files::{self, TEXT_EXTENSION};
use tracing::{info, warn};

use crate::config::EvalPaths;
use crate::error::AppError;
use crate::evaluator::Evaluator;

const EVALUATION_SUFFIX: &str = "_evaluation";

/// Outcome of a completed run.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Number of notional machines found in the input directory.
    pub found: usize,
    /// Evaluation files written, in processing order.
    pub written: Vec<PathBuf>,
    /// Inputs for which the evaluator produced nothing.
    pub skipped: Vec<PathBuf>,
    pub elapsed: Duration,
}

/// `foo.txt` -> `foo_evaluation.txt`.
pub fn evaluation_file_name(input: &Path) -> String {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = name.strip_suffix(TEXT_EXTENSION).unwrap_or(&name);
    format!("{stem}{EVALUATION_SUFFIX}{TEXT_EXTENSION}")
}

/// Evaluate every input. `started` is when the process began, so the reported time covers
/// setup as well as the requests.
pub async fn run<E: Evaluator>(
    paths: &EvalPaths,
    evaluator: &E,
    started: Instant,
) -> Result<RunSummary, AppError> {
    let existing = files::list_text_files(&paths.output_dir)?;
    if !existing.is_empty() {
        warn!(
            dir = %paths.output_dir.display(),
            count = existing.len(),
            "output directory already holds .txt files, exiting to avoid overwriting them"
        );
        return Err(AppError::OutputNotEmpty {
            dir: paths.output_dir.clone(),
            count: existing.len(),
        });
    }

    let nm_files = files::list_text_files(&paths.input_dir)?;
    if nm_files.is_empty() {
        info!(dir = %paths.input_dir.display(), "no .txt files found, nothing to evaluate");
        return Ok(RunSummary {
            elapsed: started.elapsed(),
            ..RunSummary::default()
        });
    }

    let criteria = files::read_text(&paths.criteria_file)?;
    let template = files::read_text(&paths.template_file)?;

    info!(count = nm_files.len(), "found notional machines to evaluate");

    let mut summary = RunSummary {
        found: nm_files.len(),
        ..RunSummary::default()
    };

    for nm_path in nm_files {
        info!("evaluating {}", nm_path.display());
        let nm_content = files::read_text(&nm_path)?;

        let result = evaluator.evaluate(&nm_content, &criteria, &template).await;
        match result.filter(|text| !text.is_empty()) {
            Some(text) => {
                let output_path = paths.output_dir.join(evaluation_file_name(&nm_path));
                files::write_text(&output_path, &text)?;
                info!("evaluation saved to {}", output_path.display());
                summary.written.push(output_path);
            }
            None => {
                warn!(file = %nm_path.display(), "no evaluation returned, skipping");
                summary.skipped.push(nm_path);
            }
        }
    }

    summary.elapsed = started.elapsed();
    info!(
        found = summary.found,
        written = summary.written.len(),
        skipped = summary.skipped.len(),
        "all evaluations complete"
    );
    info!("evaluation time: {:.6} seconds", summary.elapsed.as_secs_f64());
    Ok(summary)
}
