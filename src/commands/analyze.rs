//! Guess analysis command
//!
//! Partitions the universe by the response each secret would give to one guess.

use crate::core::{Config, Response, generate};

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub guess: String,
    /// Secrets per possible response, in response order; empty groups included
    pub partition: Vec<(Response, usize)>,
    pub entropy: f64,
    pub expected_remaining: f64,
    pub worst_case: usize,
    pub total_candidates: usize,
}

/// Shannon entropy (in bits) of a partition given by its group sizes
#[must_use]
pub fn partition_entropy(sizes: &[usize]) -> f64 {
    let total: usize = sizes.iter().sum();
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;

    sizes
        .iter()
        .filter(|&&n| n > 0)
        .map(|&n| {
            let p = n as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Analyze how well `guess` splits the universe
///
/// Every group is counted straight from the candidate generator, so the universe is
/// never scanned.
///
/// # Errors
///
/// Returns an error if the guess is not a valid sequence for `config`.
pub fn analyze_guess(config: &Config, guess: &str) -> Result<AnalysisResult, String> {
    let parsed = config
        .parse(guess)
        .map_err(|e| format!("Invalid guess: {e}"))?;

    let partition = config
        .responses()
        .map(|response| {
            generate(config, &parsed, response)
                .map(|candidates| (response, candidates.count()))
                .map_err(|e| e.to_string())
        })
        .collect::<Result<Vec<_>, String>>()?;

    let sizes: Vec<usize> = partition.iter().map(|&(_, n)| n).collect();
    let total_candidates: usize = sizes.iter().sum();
    let expected_remaining = if total_candidates == 0 {
        0.0
    } else {
        sizes.iter().map(|&n| (n * n) as f64).sum::<f64>() / total_candidates as f64
    };

    Ok(AnalysisResult {
        guess: parsed.to_string(),
        entropy: partition_entropy(&sizes),
        expected_remaining,
        worst_case: sizes.iter().copied().max().unwrap_or(0),
        total_candidates,
        partition,
    })
}
