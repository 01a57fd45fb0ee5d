//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod candidates;
pub mod solve;
pub mod test_all;

pub use analyze::{AnalysisResult, analyze_guess};
pub use benchmark::{BenchmarkResult, pick_secrets, run_benchmark};
pub use candidates::{CandidatesResult, list_candidates};
pub use solve::{GuessStep, SolveResult, solve_sequence};
pub use test_all::{TestAllStatistics, print_test_all_statistics, run_test_all};
