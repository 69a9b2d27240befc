use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use typegraph::{GraphConfig, TypegraphOptions, run_main};
use typegraph_core::Result;
use typegraph_dot::Layout;
use typegraph_ts::LangTypeScript;

#[derive(Parser, Debug)]
#[command(
    name = "typegraph",
    about = "typegraph: draw the type model of a TypeScript codebase",
    version
)]
pub struct Cli {
    /// Glob patterns selecting the source files (e.g. 'src/**/*.ts')
    #[arg(value_name = "PATTERN", num_args = 1.., required = true)]
    patterns: Vec<String>,

    /// Image file written by the renderer
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// TOML configuration file
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Graph layout: 'left-to-right' or 'free'
    #[arg(long, value_name = "LAYOUT")]
    layout: Option<Layout>,

    /// Renderer output format passed as -T<FORMAT> (e.g. 'png:cairo', 'svg')
    #[arg(long, value_name = "FORMAT")]
    format: Option<String>,

    /// Renderer program
    #[arg(long, value_name = "PROGRAM")]
    renderer: Option<String>,

    /// Print the DOT text without running the renderer
    #[arg(long = "no-render", default_value_t = false)]
    no_render: bool,

    /// Also write the DOT text to FILE
    #[arg(long = "dot-output", value_name = "FILE")]
    dot_output: Option<PathBuf>,

    /// Log progress to stderr (RUST_LOG takes precedence)
    #[arg(short = 'v', long, default_value_t = false)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("info")
    } else {
        return;
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(args: &Cli) -> Result<GraphConfig> {
    let mut config = match &args.config {
        Some(path) => GraphConfig::from_path(path)?,
        None => GraphConfig::default(),
    };
    if let Some(layout) = args.layout {
        config.layout = layout;
    }
    if let Some(format) = &args.format {
        config.renderer.format = format.clone();
    }
    if let Some(program) = &args.renderer {
        config.renderer.program = program.clone();
    }
    Ok(config)
}

pub fn run(args: Cli) -> Result<ExitCode> {
    let total_start = Instant::now();

    let opts = TypegraphOptions {
        config: load_config(&args)?,
        patterns: args.patterns,
        output: args.output,
        render: !args.no_render,
        dot_output: args.dot_output,
    };

    let result = run_main::<LangTypeScript>(&opts)?;
    print!("{}", result.dot);

    let mut code = ExitCode::SUCCESS;
    if let Some(outcome) = &result.render {
        if !outcome.success() {
            match outcome.exit_code {
                Some(status) => eprintln!("renderer exited with status {status}"),
                None => eprintln!("renderer terminated by signal"),
            }
            code = ExitCode::FAILURE;
        }
        print!("{}", outcome.stdout);
        eprint!("{}", outcome.stderr);
        let _ = std::io::stdout().flush();
    }

    let total_secs = total_start.elapsed().as_secs_f64();
    tracing::info!(total_secs, "complete");
    Ok(code)
}

pub fn main() -> ExitCode {
    let args = Cli::parse();
    init_tracing(args.verbose);

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            tracing::error!(error = %e, kind = %e.kind(), "execution failed");
            ExitCode::FAILURE
        }
    }
}
