//! Candidate listing command
//!
//! Lists the sequences consistent with one observed (guess, response) pair.

use crate::core::{Config, Response, Sequence, generate};

/// First candidates consistent with one observation
pub struct CandidatesResult {
    pub guess: Sequence,
    pub response: Response,
    pub candidates: Vec<Sequence>,
    /// True if the listing stopped at the limit with more candidates left
    pub truncated: bool,
}

/// Generate up to `limit` candidates for `guess` scored `response`
///
/// Generation stops as soon as the limit is reached.
///
/// # Errors
///
/// Returns an error if:
/// - The guess is not a valid sequence for `config`
/// - The response cannot be parsed or no secret could produce it
pub fn list_candidates(
    config: &Config,
    guess: &str,
    response: &str,
    limit: usize,
) -> Result<CandidatesResult, String> {
    let guess = config
        .parse(guess)
        .map_err(|e| format!("Invalid guess: {e}"))?;
    let response: Response = response.parse()?;

    let (candidates, truncated) = {
        let mut generated = generate(config, &guess, response).map_err(|e| e.to_string())?;
        let candidates: Vec<Sequence> = generated.by_ref().take(limit).collect();
        (candidates, generated.next().is_some())
    };

    Ok(CandidatesResult {
        guess,
        response,
        candidates,
        truncated,
    })
}
