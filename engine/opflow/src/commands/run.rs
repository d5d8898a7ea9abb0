//! The `run` command: evaluate a request and report its results.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use opflow_eval::{evaluate, tracing_sink, EvalConfig, Evaluation, EventSink, Program};

use super::graph::{render_png, write_dot};
use crate::input::load_file;
use crate::output::OutputFormat;
use crate::CliError;

/// Options of `opflow run`.
#[derive(Clone, Debug, Default)]
pub struct RunOptions {
    pub eval: EvalConfig,
    pub format: OutputFormat,
    /// Write the dependency graph as DOT here.
    pub dot: Option<PathBuf>,
    /// Render the dependency graph to PNG here with Graphviz.
    pub png: Option<PathBuf>,
}

/// Parse `<file> [options]` into the request path and run options.
pub fn parse_run_options(args: &[String]) -> Result<(PathBuf, RunOptions), CliError> {
    let mut options = RunOptions::default();
    let mut path = None;

    for arg in args {
        if arg == "--no-parallel" {
            options.eval.parallel = false;
        } else if let Some(n) = arg.strip_prefix("--threads=") {
            options.eval.num_threads = n
                .parse()
                .map_err(|_| CliError::Usage(format!("invalid thread count `{n}`")))?;
        } else if let Some(format) = arg.strip_prefix("--format=") {
            options.format = OutputFormat::parse(format).ok_or_else(|| {
                CliError::Usage(format!("unknown format `{format}` (expected text or json)"))
            })?;
        } else if let Some(dot) = arg.strip_prefix("--dot=") {
            options.dot = Some(PathBuf::from(dot));
        } else if let Some(png) = arg.strip_prefix("--png=") {
            options.png = Some(PathBuf::from(png));
        } else if arg.starts_with('-') {
            return Err(CliError::Usage(format!("unknown option `{arg}`")));
        } else if path.is_none() {
            path = Some(PathBuf::from(arg));
        } else {
            return Err(CliError::Usage(format!("unexpected argument `{arg}`")));
        }
    }

    let path = path.ok_or_else(|| CliError::Usage("missing request file".to_string()))?;
    Ok((path, options))
}

/// A finished evaluation and how long it took.
#[derive(Debug)]
pub struct RunOutput {
    pub evaluation: Evaluation,
    pub elapsed: Duration,
    /// Why `--png` produced no image; the run itself still succeeded.
    pub png_error: Option<CliError>,
}

/// Evaluate a loaded program and write any requested graph artifacts.
///
/// Graph export runs after evaluation and never changes its results. A
/// failed PNG render is kept in [`RunOutput::png_error`] instead of failing
/// the run.
pub fn evaluate_program(
    program: &Program,
    options: &RunOptions,
    sink: &EventSink,
) -> Result<RunOutput, CliError> {
    let start = Instant::now();
    let evaluation = evaluate(program, &options.eval, sink);
    let elapsed = start.elapsed();

    let dot_path = options
        .dot
        .clone()
        .or_else(|| options.png.as_ref().map(|png| png.with_extension("dot")));

    let mut png_error = None;
    if let Some(dot_path) = dot_path {
        write_dot(&dot_path, program, &evaluation)?;

        if let Some(png) = &options.png {
            if let Err(e) = render_png(&dot_path, png) {
                tracing::warn!("graph PNG not rendered: {e}");
                png_error = Some(e);
            }
        }
    }

    Ok(RunOutput {
        evaluation,
        elapsed,
        png_error,
    })
}

/// Load, validate and evaluate the request at `path`.
pub fn run_file(path: &Path, options: &RunOptions) -> Result<RunOutput, CliError> {
    let program = load_file(path)?;
    let sink = tracing_sink();
    evaluate_program(&program, options, &sink)
}
