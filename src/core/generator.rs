//! Candidate generation
//!
//! Rebuilds every sequence consistent with one observed (guess, response) pair
//! directly from the constraints, without scanning the universe.
//!
//! A candidate is assembled in three layers:
//! 1. bull positions keep the guess symbol,
//! 2. cow positions receive a guess symbol taken from a different open position,
//! 3. the remaining positions get distinct symbols the guess does not use.

use super::combinatorics::arrangements;
use super::config::Config;
use super::error::Error;
use super::response::Response;
use super::sequence::Sequence;
use itertools::Itertools;

/// Placeholder for positions not assigned yet
const UNSET: u8 = 0;

/// A partial candidate: bulls and cows placed, filler positions still open
#[derive(Debug)]
struct Layout {
    template: Vec<u8>,
    open: Vec<usize>,
}

impl Layout {
    fn fill(&self, fillers: &[u8]) -> Sequence {
        let mut symbols = self.template.clone();
        for (&position, &symbol) in self.open.iter().zip(fillers) {
            symbols[position] = symbol;
        }
        Sequence::from_symbols(symbols)
    }
}

/// Every sequence `cand` with `score(guess, cand) == response`, lazily
///
/// Each candidate is produced exactly once. The iterator does no work beyond what
/// the caller consumes, so `take`, `next` and early `break` are all cheap.
///
/// # Errors
/// - `Error::Sequence` if `guess` does not have the configured length
/// - `Error::Response` if no secret could produce `response`
///
/// # Examples
/// ```
/// use bulls_cows::core::{Config, Response, generate};
///
/// let config = Config::new(2, 3).unwrap();
/// let guess = config.parse("12").unwrap();
///
/// let found: Vec<String> = generate(&config, &guess, Response::new(1, 0))
///     .unwrap()
///     .map(|s| s.to_string())
///     .collect();
/// assert_eq!(found, vec!["13", "32"]);
/// ```
pub fn generate<'a>(
    config: &'a Config,
    guess: &'a Sequence,
    response: Response,
) -> Result<impl Iterator<Item = Sequence> + 'a, Error> {
    config.check_length(guess)?;
    config.check_response(response)?;
    Ok(consistent(config, guess, response))
}

/// [`generate`] for a guess and response already validated against `config`
pub(crate) fn consistent<'a>(
    config: &'a Config,
    guess: &'a Sequence,
    response: Response,
) -> impl Iterator<Item = Sequence> + 'a {
    let fillers: Vec<u8> = config
        .alphabet()
        .iter()
        .copied()
        .filter(|&symbol| !guess.contains(symbol))
        .collect();

    let bulls = usize::from(response.bulls());
    let cows = usize::from(response.cows());

    layouts(guess.symbols(), bulls, cows).flat_map(move |layout| {
        let needed = layout.open.len();
        arrangements(fillers.clone(), needed).map(move |fill| layout.fill(&fill))
    })
}

/// Every way to place `bulls` bulls and `cows` cows of `guess`
fn layouts(guess: &[u8], bulls: usize, cows: usize) -> impl Iterator<Item = Layout> + '_ {
    let len = guess.len();

    (0..len).combinations(bulls).flat_map(move |bull_positions| {
        let mut template = vec![UNSET; len];
        for &position in &bull_positions {
            template[position] = guess[position];
        }
        let rest: Vec<usize> = (0..len).filter(|i| !bull_positions.contains(i)).collect();

        // sources index into `rest`; each is paired with the target at the same index
        (0..rest.len()).combinations(cows).flat_map(move |sources| {
            let template = template.clone();
            let rest = rest.clone();
            arrangements(0..rest.len(), cows).filter_map(move |targets| {
                place_cows(guess, &template, &rest, &sources, &targets)
            })
        })
    })
}

/// Move the guess symbols at `sources` to `targets`, or `None` if any stays put
fn place_cows(
    guess: &[u8],
    template: &[u8],
    rest: &[usize],
    sources: &[usize],
    targets: &[usize],
) -> Option<Layout> {
    // a symbol left in its own position is a bull, not a cow
    if sources.iter().zip(targets).any(|(s, t)| s == t) {
        return None;
    }

    let mut template = template.to_vec();
    for (&source, &target) in sources.iter().zip(targets) {
        template[rest[target]] = guess[rest[source]];
    }

    let open = rest
        .iter()
        .enumerate()
        .filter(|(k, _)| !targets.contains(k))
        .map(|(_, &position)| position)
        .collect();

    Some(Layout { template, open })
}
