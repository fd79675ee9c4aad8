use anyhow::Context;
use clap::Parser;
use codebox::{CompileError, HttpToolchain, StoreBuilder, Transpiler};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Stage a Reason/OCaml project and transpile one entry module through
/// the hosted compiler toolchain
#[derive(Parser, Debug)]
#[command(name = "codebox", version)]
struct Args {
    /// Project directory to stage
    project: PathBuf,

    /// Entry module path, relative to the project directory
    entry: String,

    /// Toolchain server endpoint
    #[arg(long, default_value = "http://localhost:18200")]
    endpoint: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 120)]
    timeout: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    // Step 1: stage the project
    let stage_start = Instant::now();
    let store = StoreBuilder::new()
        .ingest_dir(&args.project)
        .with_context(|| format!("Failed to stage {}", args.project.display()))?
        .build();

    eprintln!(
        "Staged {} modules ({} bytes) [{:.2}s]",
        store.module_count(),
        store.total_size(),
        stage_start.elapsed().as_secs_f64()
    );

    // Step 2: transpile the entry module
    let toolchain =
        HttpToolchain::with_timeout(args.endpoint.as_str(), Duration::from_secs(args.timeout));
    let transpiler = Transpiler::new(toolchain);

    let compile_start = Instant::now();
    match transpiler.transpile(&store, &args.entry).await {
        Ok(output) => {
            eprintln!(
                "Compiled {} (+{} staged dependencies) [{:.2}s]",
                args.entry,
                output.dependencies.len(),
                compile_start.elapsed().as_secs_f64()
            );
            println!("{}", output.code);
            Ok(())
        }
        Err(CompileError::Compiler(diagnostic)) => {
            eprintln!(
                "Compile error in {} at line {}, column {}:",
                diagnostic.path, diagnostic.line, diagnostic.column
            );
            eprintln!("{}", diagnostic.message);
            std::process::exit(1);
        }
        Err(other) => Err(other.into()),
    }
}
