//! Batch driver: render every selected month in parallel and collect outcomes.
//!
//! Each month owns its canvas and output file, so the workers share nothing
//! but the read-only settings and face. A failed month is recorded in the
//! [`BatchReport`] and does not stop its siblings.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{error, info};

use crate::calendar::MonthPlan;
use crate::config::Settings;
use crate::error::{Error, RenderError};
use crate::face::GlyphFace;
use crate::job;

/// Outcome of one month's render job.
#[derive(Debug)]
pub struct MonthOutcome {
    pub title: String,
    pub result: Result<PathBuf, RenderError>,
}

/// Outcomes of a batch, ordered by title.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<MonthOutcome>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(|o| o.result.is_ok())
    }

    pub fn written(&self) -> impl Iterator<Item = &Path> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok().map(PathBuf::as_path))
    }

    pub fn failures(&self) -> impl Iterator<Item = (&str, &RenderError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o.title.as_str(), e)))
    }
}

/// Render `plans` on a pool with one worker per month and wait for all of them.
pub fn render_all(
    face: &dyn GlyphFace,
    settings: &Settings,
    plans: Vec<MonthPlan>,
    output_dir: &Path,
) -> Result<BatchReport, Error> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(plans.len().max(1))
        .thread_name(|i| format!("month-{i}"))
        .build()?;

    let mut outcomes: Vec<MonthOutcome> = pool.install(|| {
        plans
            .into_par_iter()
            .map(|plan| {
                let result = job::render_month(face, settings, &plan, output_dir);
                if let Err(e) = &result {
                    error!("[{}] {e}", plan.title);
                }
                MonthOutcome {
                    title: plan.title,
                    result,
                }
            })
            .collect()
    });
    outcomes.sort_by(|a, b| a.title.cmp(&b.title));

    let report = BatchReport { outcomes };
    info!(
        written = report.written().count(),
        failed = report.failures().count(),
        "batch finished"
    );
    Ok(report)
}
