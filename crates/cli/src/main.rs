mod handlers;
mod logging;
mod output;
mod prompt;
mod repl;
mod tokenize;

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "keeper", version, about = "Interactive contact and note keeper")]
struct Cli {
    /// Path to the data file (defaults to $KEEPER_DATA, then the user data dir)
    #[arg(long)]
    data_file: Option<PathBuf>,

    /// Log level for stderr output (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Also append logs to this file (plain text, no ANSI)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    logging::init(&cli.log_level, cli.log_file.as_deref());

    let data_file = resolve_data_file(cli.data_file);
    if let Err(e) = repl::run(&data_file) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn resolve_data_file(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| std::env::var_os("KEEPER_DATA").map(PathBuf::from))
        .unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("keeper")
                .join("keeper.json")
        })
}
