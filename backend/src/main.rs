//! Resumeopt CLI - resume intake service
//!
//! # Commands
//!
//! ```bash
//! resumeopt serve                 # Start HTTP server (port from PORT, default 8000)
//! resumeopt serve --port 9000     # Override the port
//! resumeopt check resume.pdf      # Run intake validation on a local file
//! ```

use clap::{Parser, Subcommand};
use resumeopt::{load_file, server::start_server, ServerConfig};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "resumeopt")]
#[command(about = "Resume intake service for the optimizer wizard", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start HTTP server
    Serve {
        /// Port to listen on (overrides PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Check whether a local file would be accepted by POST /resume
    Check {
        /// File to check
        input: PathBuf,

        /// Size limit in bytes (default: MAX_UPLOAD_BYTES)
        #[arg(long)]
        max_bytes: Option<usize>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve { port } => cmd_serve(port).await,
        Commands::Check { input, max_bytes } => cmd_check(&input, max_bytes).await,
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

async fn cmd_serve(port: Option<u16>) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = ServerConfig::from_env()?;
    if let Some(port) = port {
        config = config.with_port(port);
    }
    start_server(config).await?;
    Ok(())
}

async fn cmd_check(input: &Path, max_bytes: Option<usize>) -> Result<(), Box<dyn std::error::Error>> {
    let limit = match max_bytes {
        Some(limit) => limit,
        None => ServerConfig::from_env()?.max_upload_bytes,
    };

    eprintln!("📄 Checking: {}", input.display());
    let upload = load_file(input).await?;
    eprintln!("   Size: {} bytes (limit {})", upload.size(), limit);

    upload.validate(limit)?;
    eprintln!("✅ {} would be accepted", upload.display_name());
    Ok(())
}
