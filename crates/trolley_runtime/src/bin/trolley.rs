//! Trolley CLI entry point.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::EnvFilter;
use trolley_runtime::{GameConfig, Repl};

/// Exit code for errors that stop the game before it can end normally.
const FATAL_EXIT: u8 = 2;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    config_file: Option<PathBuf>,
    world: Option<PathBuf>,
    seed: Option<u64>,
    log: Option<String>,
    no_banner: bool,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    let cli = match parse_args(args) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            eprintln!("Try `trolley --help`.");
            return ExitCode::from(FATAL_EXIT);
        }
    };

    init_logging(cli.log.as_deref());

    match run(&cli) {
        Ok(Some(ending)) => ExitCode::from(ending.exit_code()),
        Ok(None) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "trolley stopped");
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::from(FATAL_EXIT)
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();
    let mut args = args.into_iter().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "--no-banner" => config.no_banner = true,
            "--config" => {
                let value = args.next().ok_or("--config requires a path")?;
                config.config_file = Some(PathBuf::from(value));
            }
            "--world" => {
                let value = args.next().ok_or("--world requires a path")?;
                config.world = Some(PathBuf::from(value));
            }
            "--seed" => {
                let value = args.next().ok_or("--seed requires a value")?;
                config.seed = Some(
                    value
                        .parse()
                        .map_err(|_| format!("invalid --seed value: {value}"))?,
                );
            }
            "--log" => {
                config.log = Some(args.next().ok_or("--log requires a filter")?);
            }
            other => return Err(format!("unknown option: {other}").into()),
        }
    }

    Ok(config)
}

fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &CliConfig) -> Result<Option<trolley_engine::Ending>, Box<dyn std::error::Error>> {
    if cli.show_help {
        print_help();
        return Ok(None);
    }

    if cli.show_version {
        println!("trolley {}", env!("CARGO_PKG_VERSION"));
        return Ok(None);
    }

    let mut config = match &cli.config_file {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if let Some(world) = &cli.world {
        config = config.with_world(world.clone());
    }
    if cli.no_banner {
        config = config.with_banner(false);
    }

    let mut repl = Repl::new(&config)?;
    Ok(repl.run()?)
}

fn print_help() {
    println!(
        "\x1b[1mTrolley\x1b[0m - a very small grocery run

\x1b[1mUSAGE:\x1b[0m
    trolley [OPTIONS]

\x1b[1mOPTIONS:\x1b[0m
    -h, --help           Print help information
    -V, --version        Print version information
    --config FILE        Read settings from a TOML file
    --world FILE         Play in the store described by FILE
    --seed N             Fix the shopping list draw
    --no-banner          Skip the welcome banner
    --log FILTER         Log filter for stderr (default: warn, or RUST_LOG)

\x1b[1mEXIT STATUS:\x1b[0m
    0    Left the store (paid or not), or input ended
    2    Something went wrong

\x1b[1mIN THE STORE:\x1b[0m
    look, go to <place>, examine <thing>, take <thing>, drop <thing>,
    pay, leave, inventory, help
    Ctrl+D               Stop playing
    Ctrl+C               Clear the current line"
    );
}
