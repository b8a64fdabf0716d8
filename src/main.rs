use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use dominion_check::harness::testme;
use dominion_check::suite::{run_all, run_case, CaseOutcome, Suite};
use dominion_check::tarantula::{
    render_ansi, render_html, Runner, TarantulaConfig, TarantulaReport,
};

#[derive(Parser)]
#[command(version, about = "Dominion engine test programs and fault localization")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one numbered case. Exits 0 on pass, 1 on fail, 2 if out of range.
    Run(RunArgs),
    /// List the test programs and their case counts.
    List,
    /// Run every case of one program, or of all of them.
    Suite(SuiteArgs),
    /// Run all configured cases and print the colored source listing.
    Tarantula(TarantulaArgs),
    /// Drive the random-input state machine until it hits its error.
    Quiz(QuizArgs),
}

#[derive(Args)]
struct RunArgs {
    suite: Suite,
    case: usize,
}

#[derive(Args)]
struct SuiteArgs {
    suite: Option<Suite>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Ansi,
    Html,
    Json,
}

#[derive(Args)]
struct TarantulaArgs {
    /// TOML runner config. Defaults to the gcc/gcov pipeline in the current
    /// directory.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = Format::Ansi)]
    format: Format,
}

#[derive(Args)]
struct QuizArgs {
    #[arg(long, default_value_t = 1)]
    seed: u64,
    #[arg(long, default_value_t = 10_000_000)]
    max: usize,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run(args) => Ok(handle_run(&args)),
        Commands::List => {
            handle_list();
            Ok(ExitCode::SUCCESS)
        }
        Commands::Suite(args) => Ok(handle_suite(&args)),
        Commands::Tarantula(args) => handle_tarantula(&args),
        Commands::Quiz(args) => Ok(handle_quiz(&args)),
    }
}

fn handle_run(args: &RunArgs) -> ExitCode {
    let outcome = run_case(args.suite, args.case);
    match &outcome {
        CaseOutcome::Pass(report) | CaseOutcome::Fail(report) => print!("{report}"),
        CaseOutcome::OutOfRange => eprintln!(
            "{}: case {} out of range (1..={})",
            args.suite,
            args.case,
            args.suite.case_count()
        ),
    }
    ExitCode::from(outcome.exit_code() as u8)
}

fn handle_list() {
    for suite in Suite::ALL {
        println!(
            "{:<22} {:<20} {:>3} cases",
            suite.name(),
            suite.subject(),
            suite.case_count()
        );
    }
}

fn handle_suite(args: &SuiteArgs) -> ExitCode {
    let suites: Vec<Suite> = match args.suite {
        Some(suite) => vec![suite],
        None => Suite::ALL.to_vec(),
    };
    let mut all_passed = true;
    for suite in suites {
        let summary = run_all(suite);
        all_passed &= summary.all_passed();
        println!("{summary}");
    }
    if all_passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn handle_tarantula(args: &TarantulaArgs) -> Result<ExitCode> {
    let config = match &args.config {
        Some(path) => TarantulaConfig::from_path(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => TarantulaConfig::default(),
    };
    let source_path = config.source_path();
    let summary = Runner::new(config).run()?;
    let source = fs::read_to_string(&source_path)
        .with_context(|| format!("reading {}", source_path.display()))?;

    match args.format {
        Format::Ansi => print!("{}", render_ansi(&source, &summary.tally.hues())),
        Format::Html => print!("{}", render_html(&source, &summary.tally.hues())),
        Format::Json => {
            let report = TarantulaReport::new(&source, &summary);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn handle_quiz(args: &QuizArgs) -> ExitCode {
    match testme::run(args.seed, args.max) {
        Some(iterations) => {
            println!("error state reached after {iterations} iterations");
            ExitCode::SUCCESS
        }
        None => {
            println!("no error within {} iterations", args.max);
            ExitCode::FAILURE
        }
    }
}
