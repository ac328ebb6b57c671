use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "showcase")]
#[command(version, about = "Landing page and admin screens backed by two JSON files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (defaults to ./showcase.json when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding products.json and sections.json
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Directory served under /static
    #[arg(long, global = true)]
    pub static_dir: Option<PathBuf>,

    /// Address to listen on, e.g. 0.0.0.0:8000
    #[arg(short, long, global = true)]
    pub bind: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the web server (default)
    Serve,

    /// Check both documents and report duplicate ids
    Doctor,
}
