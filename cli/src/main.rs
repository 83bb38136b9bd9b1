use abacus::{CompilationOptions, Engine, EngineOptions, Error, render_error};
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::io::Write;
use tracing::debug;

/// Abacus - compile an arithmetic expression to stack bytecode and run it
#[derive(Parser, Debug)]
#[command(name = "abacus")]
#[command(about = "Evaluate integer arithmetic expressions", long_about = None)]
struct Args {
    /// Print the compiled bytecode before the result
    #[arg(long)]
    bytecode: bool,

    /// Maximum parenthesis nesting depth
    #[arg(long, default_value_t = CompilationOptions::default().max_depth)]
    max_depth: usize,

    /// Expression to evaluate, e.g. "(3 + 4) * 2"
    #[arg(allow_hyphen_values = true)]
    expression: String,
}

/// Compiles `input`, optionally lists the program, then runs it.
///
/// The listing is written before execution, so it is shown even when the
/// program fails at runtime.
fn interpret_input(
    engine: &Engine,
    input: &str,
    bytecode: bool,
    out: &mut dyn Write,
) -> std::result::Result<i64, Error> {
    let program = engine.compile(input)?;
    if bytecode {
        writeln!(out, "{}", program).ok();
    }
    let value = engine.run(&program)?;
    writeln!(out, "Result: {}", value).ok();
    Ok(value)
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .into_diagnostic()?;

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let engine = Engine::new(EngineOptions {
        compilation: CompilationOptions {
            max_depth: args.max_depth,
        },
    });
    debug!(max_depth = args.max_depth, "engine ready");

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = interpret_input(&engine, &args.expression, args.bytecode, &mut stdout) {
        render_error(&args.expression, &e);
        std::process::exit(1);
    }
    Ok(())
}
