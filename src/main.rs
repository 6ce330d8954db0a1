//! Wordle Game - CLI
//!
//! Terminal Wordle with a TUI board and a one-shot scoring command.

use anyhow::{Context, Result, ensure};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use wordle_game::{
    commands::score_guess,
    core::Word,
    interactive::{App, run_tui},
    output::print_score_result,
    words::{EmbeddedSource, RandomWordApi, WordSource, loader::load_from_file, resolve_goal_word},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Terminal Wordle: six tries to guess a hidden five-letter word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to a custom word list (one five-letter word per line)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the game in the terminal (default)
    Play {
        /// Force the goal word instead of drawing a random one
        #[arg(long)]
        word: Option<String>,

        /// Ask the remote word service for the goal word
        #[arg(long)]
        remote: bool,
    },

    /// Score a single guess against a goal word
    Score {
        /// The guessed word
        guess: String,

        /// The goal word to score against
        goal: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        word: None,
        remote: false,
    });

    match command {
        Commands::Play { word, remote } => {
            let fallback = load_fallback(cli.wordlist.as_deref())?;
            run_play(fallback, word.as_deref(), remote)
        }
        Commands::Score { guess, goal } => run_score(&guess, &goal),
    }
}

/// Build the local word source from the -w flag, or the embedded list
fn load_fallback(wordlist: Option<&str>) -> Result<EmbeddedSource> {
    match wordlist {
        Some(path) => {
            let words = load_from_file(path)
                .with_context(|| format!("failed to read word list '{path}'"))?;
            ensure!(
                !words.is_empty(),
                "word list '{path}' contains no usable five-letter words"
            );
            EmbeddedSource::from_words(words)
                .map_err(|e| anyhow::anyhow!("cannot build word source: {e}"))
        }
        None => Ok(EmbeddedSource::new()),
    }
}

fn run_play(fallback: EmbeddedSource, forced_word: Option<&str>, remote: bool) -> Result<()> {
    let goal_source: Box<dyn FnMut() -> Word> = match forced_word {
        Some(text) => {
            let goal = Word::new(text)
                .with_context(|| format!("'{text}' is not a valid goal word"))?;
            Box::new(move || goal.clone())
        }
        None => {
            let remote_source = remote.then(|| match RandomWordApi::new() {
                Ok(source) => Some(source),
                Err(err) => {
                    tracing::warn!(error = %err, "cannot build remote word source");
                    None
                }
            });
            let remote_source = remote_source.flatten();

            Box::new(move || {
                resolve_goal_word(
                    remote_source.as_ref().map(|s| s as &dyn WordSource),
                    &fallback,
                )
            })
        }
    };

    let app = App::new(goal_source);
    run_tui(app)
}

fn run_score(guess: &str, goal: &str) -> Result<()> {
    let result = score_guess(guess, goal)?;
    print_score_result(&result);
    Ok(())
}
