mod render;

use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::Parser;
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{self, MissedTickBehavior};

use pippet_game::{ActionId, PetSession, Snapshot};
use render::{draw, print_help};

#[derive(Debug, Parser)]
#[command(name = "pippet", version)]
#[command(about = "Terminal companion for the Pippet virtual pet")]
struct Args {
    /// Seconds between simulation ticks
    #[arg(long, default_value_t = 3)]
    period_secs: u64,

    /// Emit one JSON snapshot per event instead of drawing bars
    #[arg(long)]
    json: bool,

    /// Run a comma-separated sequence headlessly and exit; tokens are
    /// action names plus "tick" to advance time
    #[arg(long)]
    script: Option<String>,

    /// Extra ticks appended after the script completes
    #[arg(long, default_value_t = 0)]
    ticks: u32,
}

/// Interactive commands accepted on stdin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Act(ActionId),
    Status,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
enum CommandError {
    #[error("unknown command `{0}`; type `help` for the list")]
    Unknown(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "feed" | "f" => Ok(Self::Act(ActionId::Feed)),
            "play" | "p" => Ok(Self::Act(ActionId::Play)),
            "bathe" | "bath" | "b" => Ok(Self::Act(ActionId::Bathe)),
            "medicate" | "med" | "m" => Ok(Self::Act(ActionId::Medicate)),
            "sleep" | "wake" | "s" => Ok(Self::Act(ActionId::ToggleSleep)),
            "reset" => Ok(Self::Act(ActionId::Reset)),
            "status" | "st" => Ok(Self::Status),
            "help" | "h" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let mut session = PetSession::new();

    if let Some(script) = args.script.as_deref() {
        return run_script(&mut session, script, args.ticks, args.json);
    }
    run_interactive(&mut session, &args).await
}

/// Headless mode: replay a scripted sequence deterministically and exit.
fn run_script(session: &mut PetSession, script: &str, extra_ticks: u32, json: bool) -> Result<()> {
    for token in script.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let snap = if token == "tick" {
            session.tick()
        } else if let Ok(action) = token.parse::<ActionId>() {
            session.apply_action(action)
        } else {
            bail!("unknown script token `{token}`");
        };
        emit(&snap, json)?;
    }
    for _ in 0..extra_ticks {
        let snap = session.tick();
        emit(&snap, json)?;
    }
    Ok(())
}

/// Interactive mode: a fixed-period ticker races stdin commands. The
/// ticker is owned by this loop and dropped when it returns; ticks are
/// synchronous, so teardown never interrupts one.
async fn run_interactive(session: &mut PetSession, args: &Args) -> Result<()> {
    let mut ticker = time::interval(Duration::from_secs(args.period_secs.max(1)));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // An interval fires immediately; swallow that so the pet is not aged
    // before the first prompt.
    ticker.tick().await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    emit(&session.snapshot(), args.json)?;
    if !args.json {
        print_help();
    }

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let snap = session.tick();
                log::debug!("tick -> {}", snap.condition.key());
                emit(&snap, args.json)?;
            }
            line = lines.next_line() => {
                let Some(line) = line.context("reading stdin")? else {
                    break;
                };
                let input = line.trim();
                if input.is_empty() {
                    continue;
                }
                match input.parse::<Command>() {
                    Ok(Command::Quit) => break,
                    Ok(Command::Help) => print_help(),
                    Ok(Command::Status) => emit(&session.snapshot(), args.json)?,
                    Ok(Command::Act(action)) => {
                        log::debug!("applying action {action}");
                        let snap = session.apply_action(action);
                        emit(&snap, args.json)?;
                    }
                    Err(err) => {
                        log::warn!("{err}");
                        println!("  {err}");
                    }
                }
            }
        }
    }
    Ok(())
}

fn emit(snap: &Snapshot, json: bool) -> Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string(snap).context("serializing snapshot")?
        );
    } else {
        draw(snap);
    }
    Ok(())
}
