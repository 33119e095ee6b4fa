use crate::controller::SessionSnapshot;
use crate::error::GameError;
use crate::evaluator::Feedback;
use crate::game_state::{GameInterface, RoundTally, UserAction};
use crate::session::RoundState;
use clap::Parser;
use std::io::{BufRead, Write};

/// Playerdle: guess the Premier League player
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a player-name file (one per line or comma-separated)
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<String>,

    /// Shell command that prints a comma-separated player list; the prompt
    /// is written to its stdin
    #[arg(long = "names-command")]
    pub names_command: Option<String>,

    /// Seed for secret selection, for reproducible rounds
    #[arg(long)]
    pub seed: Option<u64>,

    /// Use the full-screen terminal interface
    #[arg(long)]
    pub tui: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// One underscore per character of the secret.
#[must_use]
pub fn length_hint(secret_length: usize) -> String {
    "_ ".repeat(secret_length).trim_end().to_string()
}

/// Interpret one line of player input.
#[must_use]
pub fn parse_action(line: &str) -> Option<UserAction> {
    let input = line.trim();
    if input.is_empty() {
        return None;
    }
    match input.to_lowercase().as_str() {
        "exit" | "quit" => Some(UserAction::Exit),
        "next" | "new" => Some(UserAction::NewGame),
        _ => Some(UserAction::Guess(input.to_string())),
    }
}

fn render_feedback_row(guess: &str, feedback: &Feedback) -> String {
    let letters: String = guess
        .chars()
        .map(|c| if c == ' ' { '·' } else { c.to_ascii_uppercase() })
        .collect();
    format!("{letters}\n{}", feedback.to_symbols())
}

/// Line-based front end over any reader/writer pair.
pub struct CliInterface<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead> CliInterface<R, std::io::Stdout> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            writer: std::io::stdout(),
        }
    }
}

impl<R: BufRead, W: Write> CliInterface<R, W> {
    pub fn with_writer(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    // Output is best effort; a closed stdout should not abort the game
    fn say(&mut self, text: &str) {
        let _ = writeln!(self.writer, "{text}");
    }
}

impl<R: BufRead, W: Write> GameInterface for CliInterface<R, W> {
    fn display_round_start(&mut self, snapshot: &SessionSnapshot, round: usize) {
        self.say(&format!(
            "\nRound {round}: guess the player ({} characters, {} attempts)",
            snapshot.secret_length, snapshot.attempts_remaining
        ));
        self.say(&length_hint(snapshot.secret_length));
    }

    fn read_action(&mut self) -> Option<UserAction> {
        self.say("\nEnter your guess ('next' for a new round, 'exit' to quit):");
        let mut input = String::new();
        match self.reader.read_line(&mut input) {
            Ok(0) => Some(UserAction::Exit),
            Ok(_) => {
                let action = parse_action(&input);
                if action.is_none() {
                    self.say("Please type a guess.");
                }
                action
            }
            Err(e) => {
                log::warn!("failed to read input: {e}");
                Some(UserAction::Exit)
            }
        }
    }

    fn display_feedback(&mut self, guess: &str, feedback: &Feedback, snapshot: &SessionSnapshot) {
        self.say(&render_feedback_row(guess, feedback));
        if snapshot.state == RoundState::InProgress {
            self.say(&format!("{} attempts remaining", snapshot.attempts_remaining));
        }
    }

    fn display_rejection(&mut self, error: &GameError) {
        self.say(&format!("Invalid guess: {error}"));
    }

    fn display_round_over(&mut self, snapshot: &SessionSnapshot) {
        let secret = snapshot.revealed_secret.as_deref().unwrap_or_default();
        match snapshot.state {
            RoundState::Won => self.say(&format!(
                "You got it in {}! The player was {secret}.",
                snapshot.attempts_used
            )),
            RoundState::Lost => self.say(&format!("Out of attempts. The player was {secret}.")),
            RoundState::InProgress => {}
        }
        self.say("Type 'next' to play again or 'exit' to quit.");
    }

    fn display_exit_message(&mut self, tally: &RoundTally) {
        self.say(&format!(
            "Exiting. Won {}, lost {}, abandoned {}.",
            tally.won, tally.lost, tally.abandoned
        ));
    }
}
