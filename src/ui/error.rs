use std::path::PathBuf;

use tle_builder::markers::PGTLE_DELIMITER;
use tle_builder::TleError;

/// Plain-text error report: message, offending file, optional fix.
#[derive(Debug, Clone)]
pub struct ErrorBlock {
    file: Option<PathBuf>,
    message: String,
    fix: Option<String>,
}

impl ErrorBlock {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            file: None,
            message: message.into(),
            fix: None,
        }
    }

    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn with_fix(mut self, fix: impl Into<String>) -> Self {
        self.fix = Some(fix.into());
        self
    }

    pub fn render(&self) -> String {
        let mut out = format!("[ERROR] {}\n", self.message);
        if let Some(file) = &self.file {
            out.push_str(&format!("  file: {}\n", file.display()));
        }
        if let Some(fix) = &self.fix {
            out.push_str(&format!("  FIX: {}\n", fix));
        }
        out
    }
}

pub fn format_tle_error(err: &TleError) -> String {
    let mut block = ErrorBlock::new(err.to_string());
    if let Some(file) = err.file() {
        block = block.with_file(file);
    }
    let block = match err {
        TleError::NotFound { .. } => {
            block.with_fix("Run tle-build from the extension's project root.")
        }
        TleError::Read { .. } => block.with_fix("Check the file is readable and UTF-8 encoded."),
        TleError::Write { .. } => {
            block.with_fix("Check the output directory exists and is writable.")
        }
        TleError::DelimiterCollision { .. } => block.with_fix(format!(
            "Remove {} from the source SQL or use a different dollar-quote tag there.",
            PGTLE_DELIMITER
        )),
        TleError::InvalidVersion { .. } => {
            block.with_fix("Use a plain version string such as 2.0.0.")
        }
        TleError::AlreadyRun { .. } => block,
        TleError::MissingPlaceholders { tokens, .. } => block.with_fix(format!(
            "Add {} to the template.",
            tokens.join(" and ")
        )),
        TleError::UnresolvedPlaceholders { .. } => block.with_fix(
            "The source SQL must not contain placeholder tokens.",
        ),
    };
    block.render()
}

pub fn format_error(err: &anyhow::Error) -> String {
    if let Some(tle) = err.downcast_ref::<TleError>() {
        return format_tle_error(tle);
    }

    format!("[ERROR] {:#}\n", err)
}

pub fn print_error(err: &anyhow::Error) {
    log::debug!("build failed: {:?}", err);
    eprint!("{}", format_error(err));
}
