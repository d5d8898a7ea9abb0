//! opflow CLI
//!
//! Evaluates unordered `calc`/`print` operation lists.

use std::path::Path;
use std::process::ExitCode;

use opflow::commands::{
    check_file, emit_diagnostics, explain_code, graph_file, parse_run_options, report_error,
    run_file,
};
use opflow::output::{format_duration, render_json, render_text, OutputFormat};
use opflow::CliError;

fn main() -> ExitCode {
    opflow::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let command = args[1].as_str();
    let rest = &args[2..];

    match command {
        "run" => run(rest),
        "graph" => {
            let Some(path) = rest.first() else {
                eprintln!("Usage: opflow graph <request>");
                return ExitCode::FAILURE;
            };
            match graph_file(Path::new(path)) {
                Ok(dot) => {
                    print!("{dot}");
                    ExitCode::SUCCESS
                }
                Err(e) => fail(&e, OutputFormat::Text),
            }
        }
        "check" => {
            let Some(path) = rest.first() else {
                eprintln!("Usage: opflow check <request>");
                return ExitCode::FAILURE;
            };
            match check_file(Path::new(path)) {
                Ok(summary) => {
                    println!(
                        "OK: {path} ({} operations, {} calcs, {} prints)",
                        summary.operations, summary.calcs, summary.prints
                    );
                    ExitCode::SUCCESS
                }
                Err(e) => fail(&e, OutputFormat::Text),
            }
        }
        "explain" | "--explain" => {
            let Some(code) = rest.first() else {
                eprintln!("Usage: opflow explain <CODE>");
                eprintln!("Example: opflow explain W6001");
                return ExitCode::FAILURE;
            };
            match explain_code(code) {
                Ok(doc) => {
                    println!("{doc}");
                    ExitCode::SUCCESS
                }
                Err(e) => fail(&e, OutputFormat::Text),
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
            ExitCode::SUCCESS
        }
        "version" | "--version" | "-V" => {
            println!("opflow {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> ExitCode {
    let (path, options) = match parse_run_options(args) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("Usage: opflow run <request> [--format=text|json] [--no-parallel] [--threads=N] [--dot=<path>] [--png=<path>]");
            return ExitCode::FAILURE;
        }
    };

    let output = match run_file(&path, &options) {
        Ok(output) => output,
        Err(e) => return fail(&e, options.format),
    };

    match options.format {
        OutputFormat::Text => print!("{}", render_text(&output.evaluation)),
        OutputFormat::Json => match render_json(&output.evaluation) {
            Ok(json) => println!("{json}"),
            Err(e) => return fail(&CliError::Json(e), options.format),
        },
    }

    emit_diagnostics(&output.evaluation.diagnostics, options.format);
    if let Some(e) = &output.png_error {
        eprintln!("warning: graph PNG not rendered: {e}");
    }
    eprintln!("processed in {}", format_duration(output.elapsed));

    ExitCode::SUCCESS
}

fn fail(err: &CliError, format: OutputFormat) -> ExitCode {
    report_error(err, format);
    ExitCode::FAILURE
}

fn print_usage() {
    println!("opflow: evaluate unordered calc/print operation lists");
    println!();
    println!("Usage: opflow <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <request>        Evaluate a request and print its results");
    println!("  graph <request>      Print the dependency graph as Graphviz DOT");
    println!("  check <request>      Validate a request without evaluating it");
    println!("  explain <code>       Explain a diagnostic code (e.g., W6001)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Requests are JSON ({{\"operations\": [...]}}) or text, one operation per line:");
    println!("  calc x = 10 + 2");
    println!("  print x");
    println!();
    println!("Run options:");
    println!("  --format=<fmt>      Output format: text (default), json");
    println!("  --no-parallel       Evaluate each wave on the calling thread");
    println!("  --threads=<n>       Worker threads per wave (default: one per core)");
    println!("  --dot=<path>        Write the dependency graph as DOT");
    println!("  --png=<path>        Render the dependency graph with Graphviz `dot`");
    println!();
    println!("Environment:");
    println!("  RUST_LOG            Enable logging (e.g., RUST_LOG=opflow_eval=debug)");
    println!("  OPFLOW_LOG_TREE=1   Render logs as an indented span tree");
    println!();
    println!("Examples:");
    println!("  opflow run request.json");
    println!("  opflow run ops.txt --format=json --dot=graph.dot");
    println!("  opflow explain W6001");
}
