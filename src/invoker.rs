//! Running the external converter and capturing what it prints

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, info, warn};

use crate::config::{CONVERT_ERROR_OUTPUT_LABEL, CONVERT_OUTPUT_LABEL, DEFAULT_CONVERTER};
use crate::destination::ConversionJob;
use crate::error::ConversionFailure;

/// Raw outcome of one converter invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConverterOutput {
    /// `None` when the process was killed by a signal
    pub exit_code: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

/// Something that turns `source` into `destination`.
///
/// `Err` means the converter could not be started or its streams could not be
/// read; a converter that ran and failed reports through `exit_code`.
pub trait ExternalConverter {
    fn program(&self) -> &str;

    fn run(&self, source: &Path, destination: &Path) -> io::Result<ConverterOutput>;
}

/// Spawns a real program as `<program> <source> <destination>`, no extra flags.
#[derive(Debug, Clone)]
pub struct CommandConverter {
    program: String,
}

impl CommandConverter {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for CommandConverter {
    fn default() -> Self {
        Self::new(DEFAULT_CONVERTER)
    }
}

impl ExternalConverter for CommandConverter {
    fn program(&self) -> &str {
        &self.program
    }

    fn run(&self, source: &Path, destination: &Path) -> io::Result<ConverterOutput> {
        debug!(
            program = %self.program,
            source = %source.display(),
            destination = %destination.display(),
            "spawning converter"
        );
        // output() drains both pipes together, a chatty converter cannot block
        let output = Command::new(&self.program)
            .arg(source)
            .arg(destination)
            .stdin(Stdio::null())
            .output()?;
        Ok(ConverterOutput {
            exit_code: output.status.code(),
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}

/// Everything learned from one conversion attempt
#[derive(Debug)]
pub struct ConversionResult {
    pub job: ConversionJob,
    pub succeeded: bool,
    pub stdout_lines: Vec<String>,
    pub stderr_lines: Vec<String>,
    pub failure_reason: Option<ConversionFailure>,
}

impl ConversionResult {
    fn failed(job: ConversionJob, reason: ConversionFailure) -> Self {
        Self {
            job,
            succeeded: false,
            stdout_lines: Vec::new(),
            stderr_lines: Vec::new(),
            failure_reason: Some(reason),
        }
    }
}

/// Run `converter` for `job`. Never fails: every problem ends up in the result.
pub fn convert<C: ExternalConverter + ?Sized>(
    job: ConversionJob,
    converter: &C,
) -> ConversionResult {
    let output = match converter.run(&job.source, &job.destination) {
        Ok(output) => output,
        Err(e)
            if matches!(
                e.kind(),
                io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied
            ) =>
        {
            let reason = ConversionFailure::Spawn {
                program: converter.program().to_string(),
                source: e,
            };
            return ConversionResult::failed(job, reason);
        }
        Err(e) => return ConversionResult::failed(job, ConversionFailure::Io(e)),
    };

    let failure_reason = match output.exit_code {
        Some(0) => None,
        Some(code) => Some(ConversionFailure::ExitStatus(code)),
        None => Some(ConversionFailure::Terminated),
    };
    ConversionResult {
        job,
        succeeded: failure_reason.is_none(),
        stdout_lines: split_lines(&output.stdout),
        stderr_lines: split_lines(&output.stderr),
        failure_reason,
    }
}

fn split_lines(bytes: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(bytes)
        .lines()
        .map(str::to_owned)
        .collect()
}

/// Echo both captured streams under their labelled sections.
pub fn log_streams(file: &str, result: &ConversionResult) {
    info!(file, "{}", CONVERT_OUTPUT_LABEL);
    for line in &result.stdout_lines {
        info!(file, "{}", line);
    }
    info!(file, "{}", CONVERT_ERROR_OUTPUT_LABEL);
    for line in &result.stderr_lines {
        warn!(file, "{}", line);
    }
}
