//! Display functions for command results

use super::formatters::{entropy_bar, pattern_to_emoji};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveReport};
use crate::solver::{Outcome, ScoringPolicy};
use colored::Colorize;

/// Print the path taken to solve a word
pub fn print_solve_report(report: &SolveReport, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        report.secret.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in report.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            step.guess.text().to_uppercase(),
            pattern_to_emoji(step.pattern)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            match step.score {
                Some(score) if score.is_infinite() => println!("  Score:      certain win"),
                Some(score) => println!("  Score:      {score:.3}"),
                None => println!("  Score:      (chosen by you)"),
            }
            if step.candidates_after > 0 {
                let ratio = step.candidates_before as f64 / step.candidates_after as f64;
                println!(
                    "  Info gained: {:.3} bits ({ratio:.1}x reduction)",
                    ratio.log2()
                );
            }
        }
    }

    println!();
    let summary = format!("{}", report.outcome);
    match report.outcome {
        Outcome::Solved { .. } => println!("{}", format!("✅ {summary}").green().bold()),
        Outcome::Exhausted { .. } => println!("{}", format!("❌ {summary}").red().bold()),
        Outcome::Contradiction { .. } => {
            println!("{}", format!("⚠️  {summary}").yellow().bold());
        }
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ANALYSIS:".bright_cyan().bold(),
        result.word.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let metrics = &result.metrics;
    let bar = entropy_bar(metrics.entropy, result.total_candidates, 30);

    println!(
        "\n📊 Against {} possible answers{}:",
        result.total_candidates,
        if result.is_candidate {
            " (could be the answer)"
        } else {
            ""
        }
    );
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", metrics.entropy).bright_yellow()
    );
    println!("   Patterns:    {}", metrics.buckets);
    println!(
        "   Expected:    {:.1} candidates remain",
        metrics.expected_remaining
    );
    println!("   Worst case:  {} candidates remain", metrics.max_partition);

    println!("\n⚖️  {}", "Scores:".bright_cyan().bold());
    for (policy, score) in &result.scores {
        let label = match policy {
            ScoringPolicy::InformationGain => "bits",
            ScoringPolicy::WorstCase => "(negated largest bucket)",
        };
        println!("   {policy:<11} {score:.3} {label}");
    }

    if !result.buckets.is_empty() {
        println!("\n🗂️  {}", "Largest buckets:".bright_cyan().bold());
        for (pattern, words) in &result.buckets {
            let shown: Vec<String> = words
                .iter()
                .take(8)
                .map(|w| w.text().to_uppercase())
                .collect();
            let more = words.len().saturating_sub(shown.len());
            println!(
                "   {} {:>4}  {}{}",
                pattern_to_emoji(*pattern),
                words.len(),
                shown.join(" "),
                if more > 0 {
                    format!(" … (+{more})")
                } else {
                    String::new()
                }
            );
        }
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let pct = |n: usize| {
        if result.total_words == 0 {
            0.0
        } else {
            n as f64 / result.total_words as f64 * 100.0
        }
    };

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   First guess:      {}",
        result.first_guess.text().to_uppercase().bright_white()
    );
    println!(
        "   Solved:           {} {}",
        result.solved,
        format!("({:.1}%)", pct(result.solved)).green()
    );
    if result.exhausted > 0 {
        println!(
            "   Out of guesses:   {} {}",
            result.exhausted,
            format!("({:.1}%)", pct(result.exhausted)).red()
        );
    }
    if result.contradicted > 0 {
        println!(
            "   Contradicted:     {} {}",
            result.contradicted,
            format!("({:.1}%)", pct(result.contradicted)).yellow()
        );
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.3}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let max_count = result.distribution.values().copied().max().unwrap_or(0);
    for (&guesses, &count) in &result.distribution {
        let bar_len = if max_count > 0 {
            (count * 40 / max_count).max(usize::from(count > 0))
        } else {
            0
        };
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).green(),
            "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
        );
        println!("   {guesses}: {bar} {count:4} ({:5.1}%)", pct(count));
    }

    if !result.hardest.is_empty() {
        println!("\n😰 {}", "Hardest words:".yellow().bold());
        for (word, outcome) in result.hardest.iter().take(5) {
            println!("   {} ({outcome})", word.text().to_uppercase().yellow());
        }
    }
}
