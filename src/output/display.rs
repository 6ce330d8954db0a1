//! Display functions for command results

use super::formatters::{colored_letter, states_to_emoji};
use crate::commands::ScoreResult;
use crate::core::LetterState;
use colored::Colorize;

/// Print the result of scoring a guess
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess: {}    Goal: {}",
        result.guess.text().bright_yellow().bold(),
        result.goal.text().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    let tiles: Vec<String> = result
        .guess
        .chars()
        .iter()
        .zip(result.states)
        .map(|(&letter, state)| colored_letter(letter, state).to_string())
        .collect();
    println!("\n  {}", tiles.join(" "));
    println!("  {}\n", states_to_emoji(&result.states));

    if result.states.iter().all(|&s| s == LetterState::Correct) {
        println!("{}", "✅ Exact match!".green().bold());
    }
}
