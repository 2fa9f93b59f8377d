use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};

use depth_chart_guess::config::Config;
use depth_chart_guess::feed;
use depth_chart_guess::position::PositionCategory;
use depth_chart_guess::session::RoundPhase;
use depth_chart_guess::state::{AppState, Delta, ProviderCommand, apply_delta};

const POLL_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Start,
    Category(PositionCategory),
    Hint,
    Guess(String),
    Status,
    Log,
    Help,
    Quit,
    Empty,
}

fn parse_command(line: &str) -> Command {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Command::Empty;
    }
    let (head, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (trimmed, ""),
    };
    match (head.to_lowercase().as_str(), rest.is_empty()) {
        ("start" | "refresh", true) => Command::Start,
        ("qb", true) => Command::Category(PositionCategory::Quarterback),
        ("wr", true) => Command::Category(PositionCategory::WideReceiver),
        ("rb", true) => Command::Category(PositionCategory::RunningBack),
        ("all", true) => Command::Category(PositionCategory::All),
        ("category", false) => Command::Category(rest.parse().unwrap_or_default()),
        ("hint", true) => Command::Hint,
        ("guess", false) => Command::Guess(rest.to_string()),
        ("status", true) => Command::Status,
        ("log", true) => Command::Log,
        ("help" | "?", true) => Command::Help,
        ("quit" | "exit", true) => Command::Quit,
        _ => Command::Guess(trimmed.to_string()),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("error")).init();

    let config = Config::from_env().context("unable to load configuration")?;

    let (tx, rx) = mpsc::channel();
    let (cmd_tx, cmd_rx) = mpsc::channel();
    feed::spawn_provider(tx, cmd_rx, config.clone());

    let mut state = AppState::new();
    state.set_log_capacity(config.log_capacity);

    print_help();
    println!("Fetching depth charts...");
    state.start_game(&cmd_tx);

    let lines = spawn_stdin_reader();
    let res = run(&mut state, &rx, &cmd_tx, &lines);
    let _ = cmd_tx.send(ProviderCommand::Shutdown);
    res
}

fn run(
    state: &mut AppState,
    rx: &Receiver<Delta>,
    cmd_tx: &Sender<ProviderCommand>,
    lines: &Receiver<String>,
) -> Result<()> {
    prompt()?;
    loop {
        while let Ok(delta) = rx.try_recv() {
            let announce = match &delta {
                Delta::SetDepthChart(_) => None,
                Delta::FetchFailed(err) => Some(format!("Error: {err}")),
                Delta::Log(_) => None,
            };
            let loaded = matches!(delta, Delta::SetDepthChart(_));
            apply_delta(state, delta);
            if let Some(msg) = announce {
                println!("{msg}");
            }
            if loaded {
                print_round_banner(state);
            }
        }

        match lines.recv_timeout(POLL_INTERVAL) {
            Ok(line) => {
                if !handle_command(state, cmd_tx, parse_command(&line)) {
                    return Ok(());
                }
                prompt()?;
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => return Ok(()),
        }
    }
}

fn handle_command(state: &mut AppState, cmd_tx: &Sender<ProviderCommand>, cmd: Command) -> bool {
    match cmd {
        Command::Start => {
            println!("Fetching depth charts...");
            state.start_game(cmd_tx);
        }
        Command::Category(category) => {
            state.select_category(category);
            print_round_banner(state);
        }
        Command::Hint => match state.request_hint() {
            Ok(hint) => println!("{}", hint.message()),
            Err(_) => println!("No round in progress. Type `start` to load players."),
        },
        Command::Guess(text) => match state.submit_guess(&text) {
            Ok(outcome) => {
                println!("{}", outcome.message());
                if outcome.ends_round() {
                    print_round_banner(state);
                } else {
                    println!("{} attempt(s) left.", state.session.attempts_left());
                }
            }
            Err(_) => println!("No round in progress. Type `start` to load players."),
        },
        Command::Status => print_status(state),
        Command::Log => {
            for line in &state.logs {
                println!("{line}");
            }
        }
        Command::Help => print_help(),
        Command::Quit => return false,
        Command::Empty => {}
    }
    true
}

fn spawn_stdin_reader() -> Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else {
                break;
            };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

fn prompt() -> Result<()> {
    print!("> ");
    io::stdout().flush().context("flush stdout")
}

fn print_round_banner(state: &AppState) {
    if state.session.phase() == RoundPhase::Active {
        println!(
            "New round [{}]: {} candidates. Who is it?",
            state.session.category(),
            state.session.filtered_players().len()
        );
    } else {
        println!("No players available.");
    }
}

fn print_status(state: &AppState) {
    let session = &state.session;
    println!("Category: {}", session.category());
    println!(
        "Players: {} loaded, {} in pool",
        session.all_players().len(),
        session.filtered_players().len()
    );
    println!(
        "Attempts: {} ({} left)",
        session.attempts(),
        session.attempts_left()
    );
    println!("Next hint: {}", session.hint_level().index() + 1);
    if state.loading {
        println!("Depth chart fetch in progress");
    }
    if let Some(err) = state.last_error.as_ref() {
        println!("Last error: {err}");
    }
}

fn print_help() {
    println!("Commands:");
    println!("  start | refresh       fetch depth charts and start a round");
    println!("  qb | wr | rb | all    switch position category");
    println!("  category <name>       switch category by name");
    println!("  hint                  reveal the next hint");
    println!("  guess <name>          guess (any other text is a guess too)");
    println!("  status | log | help | quit");
}
