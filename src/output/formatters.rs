//! Formatting utilities for terminal output

use crate::core::Response;

/// Format a response as one mark per position: bulls, then cows, then misses
#[must_use]
pub fn response_marks(response: Response, sequence_length: usize) -> String {
    let bulls = usize::from(response.bulls());
    let cows = usize::from(response.cows());
    let misses = sequence_length.saturating_sub(bulls + cows);

    format!("{}{}{}", "●".repeat(bulls), "◐".repeat(cows), "○".repeat(misses))
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar against its upper bound
#[must_use]
pub fn entropy_bar(entropy: f64, max_entropy: f64, width: usize) -> String {
    create_progress_bar(entropy, max_entropy, width)
}
