use clap::{Parser, Subcommand};
use codepad_core::{api, help, CodeRequest, QueryRequest, Response};
use codepad_server::config::{DEFAULT_HOST, DEFAULT_PORT, DEFAULT_STATIC_DIR};
use codepad_server::ServerConfig;
use colored::Colorize;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;

/// Codepad — playground backend
///
/// Serve the HTTP API, or run the same operations from the command line.
#[derive(Parser)]
#[command(name = "codepad", version, about, long_about = None)]
#[command(disable_help_subcommand = true)]
struct Cli {
    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, env = "CODEPAD_LOG", default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Interface to bind
        #[arg(long, env = "CODEPAD_HOST", default_value = DEFAULT_HOST)]
        host: String,
        /// Port to listen on
        #[arg(long, env = "CODEPAD_PORT", default_value_t = DEFAULT_PORT)]
        port: u16,
        /// Directory served for non-API paths
        #[arg(long, env = "CODEPAD_STATIC_DIR", default_value = DEFAULT_STATIC_DIR)]
        static_dir: PathBuf,
    },

    /// Simulate running a source file (`-` reads stdin)
    Run {
        file: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Autofix a source file (`-` reads stdin)
    Autofix {
        file: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Look up help for a topic
    Help {
        #[arg(required = true)]
        query: Vec<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List help keywords
    Topics,

    /// Show version information
    Version,
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let exit_code = match cli.command {
        Commands::Serve {
            host,
            port,
            static_dir,
        } => {
            let config = ServerConfig {
                host,
                port,
                static_dir,
            };
            cmd_serve(&config).await
        }
        Commands::Run { file, json } => match read_source(&file) {
            Ok(code) => emit(api::run(&CodeRequest::new(code)), json),
            Err(code) => code,
        },
        Commands::Autofix { file, json } => match read_source(&file) {
            Ok(code) => emit(api::autofix(&CodeRequest::new(code)), json),
            Err(code) => code,
        },
        Commands::Help { query, json } => emit(api::help(&QueryRequest::new(query.join(" "))), json),
        Commands::Topics => {
            for topic in help::topics() {
                println!("{}", topic);
            }
            0
        }
        Commands::Version => {
            println!(
                "codepad {} (codepad-core {})",
                env!("CARGO_PKG_VERSION"),
                codepad_core::VERSION
            );
            0
        }
    };

    process::exit(exit_code);
}

async fn cmd_serve(config: &ServerConfig) -> i32 {
    println!("Server running on {}", config.public_url().bold());
    match codepad_server::serve(config).await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("{} server failed on {}: {}", "error:".red().bold(), config.bind_addr(), e);
            2
        }
    }
}

/// File contents, or the exit code to stop with
fn read_source(path: &Path) -> Result<String, i32> {
    let result = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).map(|_| buf)
    } else {
        std::fs::read_to_string(path)
    };

    result.map_err(|e| {
        eprintln!("{} failed to read {}: {}", "error:".red().bold(), path.display(), e);
        2
    })
}

/// Print an operation result; exit 1 when the input was rejected
fn emit(result: codepad_core::Result<String>, json: bool) -> i32 {
    let rejected = result.is_err();

    if json {
        let response = Response::from(result);
        match serde_json::to_string_pretty(&response) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                eprintln!("{} failed to encode response: {}", "error:".red().bold(), e);
                return 2;
            }
        }
    } else {
        match result {
            Ok(output) => println!("{}", output),
            Err(e) => eprintln!("{} {}", "error:".red().bold(), e),
        }
    }

    if rejected {
        1
    } else {
        0
    }
}
