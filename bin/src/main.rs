use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rs_evil_hangman::*;
use std::fs::File;
use std::io::BufReader;

/// Runs a Hangman game where the computer cheats: it never picks a word, it
/// keeps every word that is still consistent with what you have seen.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to a file that contains the dictionary, with words separated by
    /// whitespace.
    #[arg(short = 'f', long)]
    words_file: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play an interactive game.
    Play,
    /// Run a scripted game: feed the given letters in order and print a
    /// transcript.
    Script {
        /// Word length to play.
        length: usize,
        /// Attempt budget.
        attempts: u32,
        /// The letters to guess, in order, e.g. "eart".
        guesses: String,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    match args.command {
        Command::Play => play_interactive(&args.words_file),
        Command::Script {
            length,
            attempts,
            guesses,
        } => play_scripted(&args.words_file, length, attempts, &guesses),
    }
}

/// Loads the word bank, treating an unreadable source as an empty bank.
///
/// Setup then rejects the empty bank as having no candidates and re-prompts,
/// which doubles as the recovery path for a bad dictionary path.
fn load_bank(path: &str) -> WordBank {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(error) => {
            eprintln!("Could not open {}: {}", path, error);
            return WordBank::from_iterator(std::iter::empty::<&str>());
        }
    };
    match WordBank::from_reader(&mut BufReader::new(file)) {
        Ok(bank) => bank,
        Err(error) => {
            eprintln!("Could not read {}: {}", path, error);
            WordBank::from_iterator(std::iter::empty::<&str>())
        }
    }
}

fn play_interactive(words_file: &str) -> Result<()> {
    let mut rl = rustyline::Editor::<()>::new();

    // Setup: any bad input restarts from a freshly loaded bank.
    let mut session = loop {
        let bank = load_bank(words_file);
        let length = rl
            .readline("Enter the size of the word you want to guess: ")
            .context("readline")?;
        let length: usize = match length.trim().parse() {
            Ok(length) => length,
            Err(_) => {
                println!("That is not a number. Let's try again.\n");
                continue;
            }
        };
        let attempts = rl
            .readline("Enter how many tries you want to have: ")
            .context("readline")?;
        let attempts: u32 = match attempts.trim().parse() {
            Ok(attempts) => attempts,
            Err(_) => {
                println!("That is not a number. Let's try again.\n");
                continue;
            }
        };
        match GameSession::new(&bank, length, attempts) {
            Ok(session) => break session,
            Err(error) => println!("{}. Let's try again.\n", error),
        }
    };

    println!("\nWelcome to Hangman!\n");

    while session.phase() == GamePhase::Playing {
        println!(
            "Pattern: {}   Attempts left: {}   Guessed: {}   Candidates: {}",
            session.pattern(),
            session.attempts_left(),
            session.guessed_letters().iter().collect::<String>(),
            session.candidates_left(),
        );
        let input = rl.readline("guess> ").context("readline")?;
        let letter = match normalize_guess(&input) {
            Ok(letter) => letter,
            Err(error) => {
                println!("{}, try again.\n", error);
                continue;
            }
        };
        match session.guess(letter) {
            Ok(TurnOutcome::Revealed { letter, .. }) => println!("'{}' is in the word.\n", letter),
            Ok(TurnOutcome::Missed { letter }) => println!("No '{}'.\n", letter),
            Err(error) => println!("{}, try again.\n", error),
        }
    }

    report_result(&session);
    Ok(())
}

fn play_scripted(words_file: &str, length: usize, attempts: u32, guesses: &str) -> Result<()> {
    let mut words_reader = BufReader::new(File::open(words_file).context("opening words file")?);
    let bank = WordBank::from_reader(&mut words_reader).context("reading words file")?;
    let mut session = GameSession::new(&bank, length, attempts)?;

    for raw in guesses.chars() {
        let outcome = session.guess(raw.to_ascii_lowercase())?;
        match outcome {
            TurnOutcome::Revealed { letter, .. } => println!(
                "guess {}: reveal -> {}   ({} candidates left)",
                letter,
                session.pattern(),
                session.candidates_left(),
            ),
            TurnOutcome::Missed { letter } => println!(
                "guess {}: miss   -> {}   ({} attempts, {} candidates left)",
                letter,
                session.pattern(),
                session.attempts_left(),
                session.candidates_left(),
            ),
        }
        if session.phase() != GamePhase::Playing {
            break;
        }
    }

    if session.phase() == GamePhase::Playing {
        println!("Out of scripted guesses. Pattern so far: {}", session.pattern());
    }
    report_result(&session);
    Ok(())
}

fn report_result(session: &GameSession) {
    // Whatever survived the narrowing is a truthful answer.
    let word = session
        .reveal_word()
        .map(|word| word.to_string())
        .unwrap_or_else(|| session.pattern().to_string());
    match session.phase() {
        GamePhase::Won => println!("Congrats, you won! The word was: {}", word),
        GamePhase::Lost => println!("Game over, you lose. The word was: {}", word),
        GamePhase::Playing => {}
    }
}
