use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use zerobasics::config::{Config, DEFAULT_MAX_DEPTH};

#[derive(Parser)]
#[command(
    name = "zeroshell",
    about = "ZeroShell, the ZeroBasics interpreter",
    version
)]
struct Cli {
    /// Script to run; starts the interactive shell when omitted
    script: Option<String>,

    /// Folder holding the scripts
    #[arg(long, default_value = "Scripts")]
    scripts_dir: PathBuf,

    /// Active chapters and repeats allowed at once
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Let `con !...` run host shell commands
    #[arg(long)]
    allow_host: bool,

    /// Print colored text plainly
    #[arg(long)]
    no_color: bool,

    /// Seed for repeatable `random` results
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("ZEROSHELL_LOG").unwrap_or_else(|_| EnvFilter::new("off")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = Config::default()
        .with_scripts_dir(cli.scripts_dir)
        .with_max_depth(cli.max_depth)
        .with_host_commands(cli.allow_host)
        .with_color(!cli.no_color);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    zerobasics::term::main(config, cli.script);
}
