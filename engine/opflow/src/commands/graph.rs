//! The `graph` command and the DOT/PNG artifacts of `run`.

use std::fs;
use std::path::Path;
use std::process::Command;

use opflow_eval::{analyze, to_dot, Evaluation, Program};

use crate::input::load_file;
use crate::CliError;

/// DOT for the request at `path`. Nothing is evaluated.
pub fn graph_file(path: &Path) -> Result<String, CliError> {
    let program = load_file(path)?;
    let (live, graph) = analyze(program.operations());
    Ok(to_dot(program.operations(), &live, &graph))
}

/// Write the dependency graph of an evaluated program.
pub fn write_dot(path: &Path, program: &Program, evaluation: &Evaluation) -> Result<(), CliError> {
    let dot = to_dot(program.operations(), &evaluation.live, &evaluation.graph);
    fs::write(path, dot).map_err(|e| CliError::io(path, e))?;
    tracing::debug!(path = %path.display(), "dependency graph written");
    Ok(())
}

/// Render a DOT file to PNG with Graphviz `dot -Tpng`.
pub fn render_png(dot: &Path, png: &Path) -> Result<(), CliError> {
    let status = Command::new("dot")
        .arg("-Tpng")
        .arg(dot)
        .arg("-o")
        .arg(png)
        .status()
        .map_err(|e| CliError::io("dot", e))?;

    if status.success() {
        Ok(())
    } else {
        Err(CliError::Render { status })
    }
}
