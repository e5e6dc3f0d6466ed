//! Display functions for game and score output

use super::formatters::{
    create_progress_bar, guess_tiles, score_table_header, score_table_row, share_grid,
    share_header,
};
use crate::core::{GuessResult, LetterVerdict};
use crate::game::{Game, ScoreSave};
use crate::scores::{Score, ScoreSummary};
use colored::Colorize;

/// Print the opening banner of a game
pub fn print_banner(game: &Game<'_>) {
    let config = game.config();
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "WORD GURU".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    if let Some(date) = game.daily_date() {
        println!("📅 Daily word for {}", date.to_string().bright_yellow());
    }
    println!(
        "Guess the {}-letter word in {} attempts!",
        config.word_length, config.max_attempts
    );
    println!(
        "Letters are colored: {} correct position, {} wrong position, {} not in word\n",
        LetterVerdict::Correct.emoji(),
        LetterVerdict::Present.emoji(),
        LetterVerdict::Absent.emoji()
    );
}

/// Print one evaluated guess as colored tiles
pub fn print_guess(result: &GuessResult) {
    println!("{}", guess_tiles(result));
}

/// Print the end-of-game message and the shareable grid
pub fn print_outcome(game: &Game<'_>) {
    let secret = game.secret().map_or("?", |w| w.text());
    let used = game.attempts().len();

    println!();
    if game.is_won() {
        let noun = if used == 1 { "attempt" } else { "attempts" };
        println!(
            "{}",
            format!("🎉 Congratulations! You guessed '{secret}' in {used} {noun}!")
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("💔 Game over! The word was '{secret}'").red().bold()
        );
    }

    let label = game
        .daily_date()
        .map_or_else(|| "random".to_string(), |d| d.to_string());
    println!(
        "\n{}",
        share_header(&label, used, game.is_won(), game.config().max_attempts)
    );
    println!("{}", share_grid(game.attempts()));
}

/// Print how the final score was handled
pub fn print_score_save(save: &ScoreSave) {
    match save {
        ScoreSave::Disabled => {}
        ScoreSave::Saved(path) => println!("💾 Score saved to {}", path.display()),
        ScoreSave::Failed(reason) => {
            println!("{}", format!("⚠️  Could not save score: {reason}").yellow());
        }
    }
}

/// Print the countdown to the next daily word
pub fn print_next_daily(countdown: &str) {
    println!("⏰ Next daily word in: {}", countdown.bright_yellow());
}

/// Print the notice shown when today's daily word was already played
pub fn print_daily_completed(player: &str, countdown: &str) {
    println!("{}", "🎯 Daily Word Already Completed!".bright_cyan().bold());
    println!("You've already played today's daily word, {player}.");
    print_next_daily(countdown);
    println!("\n💡 Try playing without --daily for a random word!");
}

/// Print the leaderboard and aggregate statistics
pub fn print_stats(top: &[&Score], summary: &ScoreSummary) {
    if top.is_empty() {
        println!("📊 No scores found yet. Play some games to see stats!");
        return;
    }

    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} ",
        format!("TOP {} SCORES", top.len()).bright_cyan().bold()
    );
    println!("{}", "═".repeat(60).cyan());
    println!("{}", score_table_header().bold());
    println!("{}", "─".repeat(60));

    for (i, score) in top.iter().enumerate() {
        let row = score_table_row(i + 1, score);
        if score.won {
            println!("{row}");
        } else {
            println!("{}", row.bright_black());
        }
    }

    println!("\n📈 {}", "Summary:".bright_cyan().bold());
    println!("   Games played:  {}", summary.games);
    println!(
        "   Games won:     {} ({})",
        summary.wins,
        format!("{:.1}%", summary.win_rate()).bright_yellow()
    );

    if summary.distribution.is_empty() {
        return;
    }

    println!("\n📊 {}", "Guess distribution:".bright_cyan().bold());
    let most = summary.distribution.values().copied().max().unwrap_or(0);
    for (attempts, &count) in &summary.distribution {
        let bar = create_progress_bar(count as f64, most as f64, 30);
        println!("   {attempts:>2}: {} {count:4}", bar.green());
    }
}
