//! Installer build pipeline
//!
//! ## Flow
//!
//! 1. Load the extension SQL, then the template
//! 2. Reject SQL containing the dollar-quote delimiter, and a version
//!    containing a placeholder or the delimiter
//! 3. Substitute `{{VERSION}}` and `{{SOURCE}}`
//! 4. Verify no placeholder is missing or left over
//! 5. Write the installer
//!
//! Any failure moves the pipeline to [`Stage::Aborted`]. Nothing is written
//! unless every earlier step succeeded.

use std::fmt;
use std::path::PathBuf;

use crate::composer::{check_delimiter, check_version, compose};
use crate::config::BuildConfig;
use crate::error::{TleError, TleResult};
use crate::loader::read_input;
use crate::verifier::verify;
use crate::writer::{content_hash, write_output};

/// Pipeline progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Start,
    Loaded,
    Validated,
    Composed,
    Verified,
    Written,
    Aborted,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Start => "start",
            Stage::Loaded => "loaded",
            Stage::Validated => "validated",
            Stage::Composed => "composed",
            Stage::Verified => "verified",
            Stage::Written => "written",
            Stage::Aborted => "aborted",
        };
        f.write_str(name)
    }
}

/// Summary of a successful build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub output_path: PathBuf,
    pub version: String,
    pub bytes_written: usize,
    pub content_hash: String,
}

/// One build run.
///
/// A pipeline runs at most once; after [`Stage::Written`] or
/// [`Stage::Aborted`] it has to be recreated.
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: BuildConfig,
    stage: Stage,
    last_completed: Stage,
}

impl Pipeline {
    pub fn new(config: BuildConfig) -> Self {
        Self {
            config,
            stage: Stage::Start,
            last_completed: Stage::Start,
        }
    }

    /// Current stage.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Last stage reached before aborting, if the run aborted.
    pub fn aborted_after(&self) -> Option<Stage> {
        (self.stage == Stage::Aborted).then_some(self.last_completed)
    }

    /// Run every step to completion or to the first error.
    ///
    /// Fails with [`TleError::AlreadyRun`] if called again.
    pub fn run(&mut self) -> TleResult<BuildReport> {
        if self.stage != Stage::Start {
            return Err(TleError::AlreadyRun { stage: self.stage });
        }

        match self.run_steps() {
            Ok(report) => Ok(report),
            Err(err) => {
                self.stage = Stage::Aborted;
                log::debug!("aborted after {}: {}", self.last_completed, err);
                Err(err)
            }
        }
    }

    fn run_steps(&mut self) -> TleResult<BuildReport> {
        let source = read_input(&self.config.source_path)?;
        let template = read_input(&self.config.template_path)?;
        self.advance(Stage::Loaded);

        check_delimiter(&source, &self.config.source_path)?;
        check_version(&self.config.version)?;
        self.advance(Stage::Validated);

        let composed = compose(&template, &source, &self.config.version);
        self.advance(Stage::Composed);

        verify(&template, &composed, &self.config.template_path)?;
        self.advance(Stage::Verified);

        write_output(&self.config.output_path, &composed)?;
        self.advance(Stage::Written);

        let report = BuildReport {
            output_path: self.config.output_path.clone(),
            version: self.config.version.clone(),
            bytes_written: composed.len(),
            content_hash: content_hash(&composed),
        };
        log::info!(
            "generated {} ({} bytes, {})",
            report.output_path.display(),
            report.bytes_written,
            report.content_hash
        );
        Ok(report)
    }

    fn advance(&mut self, next: Stage) {
        log::debug!("{} -> {}", self.stage, next);
        self.stage = next;
        self.last_completed = next;
    }
}

/// Build the installer described by `config`.
pub fn build(config: BuildConfig) -> TleResult<BuildReport> {
    Pipeline::new(config).run()
}
