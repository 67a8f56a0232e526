//! quizline CLI — plain-text multiple-choice quizzes in the terminal.

use std::path::PathBuf;
use std::process;

use clap::Parser;

mod commands;

#[derive(Parser)]
#[command(
    name = "quizline",
    version,
    about = "Plain-text multiple-choice quizzes in the terminal"
)]
struct Cli {
    /// Quiz file: blank-line separated questions, `*` marks correct answers
    quiz_file: Option<PathBuf>,

    /// Print every question and its answers instead of quizzing
    #[arg(short = 'q')]
    dump: bool,

    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for question and answer shuffling
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizline=warn".parse().unwrap())
                .add_directive("quizline_core=warn".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let Some(quiz_file) = cli.quiz_file else {
        let program = std::env::args()
            .next()
            .unwrap_or_else(|| "quizline".to_string());
        println!("Usage: {program} (quiz_file.txt) [-q]");
        process::exit(1);
    };

    let result = if cli.dump {
        commands::dump::execute(quiz_file)
    } else {
        commands::run::execute(quiz_file, cli.config, cli.seed)
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
