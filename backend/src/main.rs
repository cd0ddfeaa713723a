//! matrixops CLI - square integer matrix operations over CSV
//!
//! ```bash
//! matrixops serve                     # Start HTTP server (port 8080)
//! matrixops run sum matrix.csv        # Run one operation on a local file
//! matrixops operations                # Show available operations
//! ```

use clap::{Parser, Subcommand};
use matrixops::{operations_description, run_file, Operation, ServerConfig};
use std::fs;
use std::net::IpAddr;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "matrixops")]
#[command(about = "Echo, invert, flatten, sum or multiply a square CSV matrix", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start HTTP server
    Serve {
        /// Interface to bind (default: MATRIXOPS_HOST or 0.0.0.0)
        #[arg(long)]
        host: Option<IpAddr>,

        /// Port to listen on (default: MATRIXOPS_PORT or 8080)
        #[arg(short, long)]
        port: Option<u16>,

        /// Largest accepted upload in bytes (default: MATRIXOPS_MAX_UPLOAD_BYTES or 2 MiB)
        #[arg(long)]
        max_upload_bytes: Option<usize>,
    },

    /// Run one operation on a CSV file
    Run {
        /// Operation to apply
        #[arg(value_enum)]
        operation: Operation,

        /// Input CSV file
        input: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show available operations
    Operations,
}

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve {
            host,
            port,
            max_upload_bytes,
        } => cmd_serve(host, port, max_upload_bytes).await,

        Commands::Run {
            operation,
            input,
            output,
        } => cmd_run(operation, &input, output.as_deref()),

        Commands::Operations => cmd_operations(),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

async fn cmd_serve(
    host: Option<IpAddr>,
    port: Option<u16>,
    max_upload_bytes: Option<usize>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = ServerConfig::from_env()?;
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }
    if let Some(limit) = max_upload_bytes {
        config.max_upload_bytes = limit;
    }

    matrixops::server::start_server(config).await?;
    Ok(())
}

fn cmd_run(
    operation: Operation,
    input: &Path,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📄 {}: {}", operation, input.display());

    let result = run_file(input, operation)?;
    write_output(&result.to_string(), output)?;

    Ok(())
}

fn cmd_operations() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", operations_description());
    Ok(())
}

fn write_output(content: &str, path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
            eprintln!("💾 Output written to: {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
