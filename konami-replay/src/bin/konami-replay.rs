use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use konami_core::{ListenerConfig, MatchState, format_sequence, parse_sequence};
use konami_replay::{ReplayEvent, ReplayReport, replay_script};

#[derive(Parser, Debug)]
#[command(author, version, about = "Replay a key stream through a sequence listener", long_about = None)]
struct Args {
    /// Replay script path, or "-" to read from stdin
    script: PathBuf,

    /// TOML listener config (defaults to the Konami code)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Target sequence, overriding the config, e.g. "up up down down b a"
    #[arg(short, long)]
    sequence: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only print the match count
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let args = Args::parse();
    setup_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn setup_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| writeln!(buf, "[{}] {} - {}", record.level(), record.target(), record.args()))
        .init();
}

fn run(args: &Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => ListenerConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ListenerConfig::default(),
    };
    if let Some(sequence) = &args.sequence {
        let keys = parse_sequence(sequence).context("Invalid --sequence")?;
        config = config.with_sequence(&keys);
    }
    log::debug!("Target sequence: {}", format_sequence(&config.target()?));

    let script = read_script(&args.script)?;
    let report = replay_script(&script, &config)?;

    if !args.quiet {
        print_steps(&report)?;
    }
    println!("matches: {}", report.matches);
    Ok(())
}

fn read_script(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut script = String::new();
        io::stdin().read_to_string(&mut script).context("Failed to read stdin")?;
        return Ok(script);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn print_steps(report: &ReplayReport) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for step in &report.steps {
        let event = match &step.event {
            ReplayEvent::Key(key) if key.origin.is_text_entry() => format!("[{}]", key.code),
            ReplayEvent::Key(key) => key.code.to_string(),
            ReplayEvent::Reset => "reset".to_string(),
            ReplayEvent::Attach => "attach".to_string(),
            ReplayEvent::Detach => "detach".to_string(),
        };
        let state = match step.state {
            Some(MatchState::Growing(progress)) => format!("growing {}", progress),
            Some(MatchState::Matched) => "MATCHED".to_string(),
            Some(MatchState::Reset) => "reset".to_string(),
            None => format!("ignored (progress {})", step.progress),
        };
        writeln!(out, "{:>4}  {:<14} {}", step.line, event, state)?;
    }
    Ok(())
}
