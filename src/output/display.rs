//! Display functions for command results

use super::formatters::{entropy_bar, response_marks};
use crate::commands::{AnalysisResult, BenchmarkResult, CandidatesResult, SolveResult};
use colored::Colorize;

/// Print the result of solving a secret
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    let length = result.secret.len();

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.secret.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nMove {}: {} {} {}",
            i + 1,
            step.guess,
            response_marks(step.response, length),
            step.response.to_string().bright_black()
        );

        if verbose && !step.response.is_perfect(length) {
            println!("  Candidates left: {}", step.candidates_after);
        }
    }

    println!();
    println!(
        "{}",
        format!("✅ Solved in {} moves!", result.moves()).green().bold()
    );
    if verbose {
        println!("  Operations: {}", result.operations);
        println!("  Time:       {:.3}ms", result.elapsed.as_secs_f64() * 1000.0);
    }
}

/// Print the response partition of a guess
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "GUESS ANALYSIS:".bright_cyan().bold(),
        result.guess.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let max_entropy = (result.partition.len() as f64).log2();
    let bar = entropy_bar(result.entropy, max_entropy, 30);

    println!("\n📊 Against {} possible secrets:", result.total_candidates);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.entropy).bright_yellow()
    );
    println!(
        "   Expected:    {:.1} candidates remain",
        result.expected_remaining
    );
    println!("   Worst case:  {} candidates remain", result.worst_case);

    println!("\n📈 {}", "Partition:".bright_cyan().bold());
    let largest = result.worst_case.max(1);
    for &(response, count) in &result.partition {
        let bar_width = count * 30 / largest;
        println!(
            "   {:>6}: {}{} {count:6}",
            response.to_string(),
            "█".repeat(bar_width).green(),
            "░".repeat(30 - bar_width).bright_black()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Sessions:         {}", result.total_sessions);
    println!(
        "   Average moves:    {}",
        format!("{:.2}", result.average_moves).bright_yellow().bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_moves).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_moves).yellow()
    );
    println!("   Operations:       {}", result.total_operations);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Sessions/second:  {:.1}", result.sessions_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for moves in result.min_moves..=result.max_moves {
        if let Some(&count) = result.distribution.get(&moves) {
            let pct = (count as f64 / result.total_sessions as f64) * 100.0;
            let bar_width = ((pct / 2.5) as usize).min(40);
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░"
                    .repeat(40_usize.saturating_sub(bar_width))
                    .bright_black()
            );
            println!("   {moves:2}: {bar} {count:4} ({pct:5.1}%)");
        }
    }
}

/// Print the candidates consistent with one observation
pub fn print_candidates_result(result: &CandidatesResult) {
    println!(
        "\n{} {} {}",
        "Candidates for".bright_cyan().bold(),
        result.guess.to_string().bright_yellow().bold(),
        result.response
    );

    if result.candidates.is_empty() {
        println!("{}", "  No sequence is consistent with this response".red());
        return;
    }

    for chunk in result.candidates.chunks(10) {
        let line: Vec<String> = chunk.iter().map(ToString::to_string).collect();
        println!("  {}", line.join(" "));
    }

    if result.truncated {
        println!(
            "{}",
            format!("  … stopped after {}", result.candidates.len()).bright_black()
        );
    } else {
        println!("  {} in total", result.candidates.len());
    }
}
