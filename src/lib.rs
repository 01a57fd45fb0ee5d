//! Bulls and Cows Solver
//!
//! Breaks a secret sequence of distinct symbols by rebuilding, after each response,
//! exactly the set of sequences that could still be the secret.
//!
//! # Quick Start
//!
//! ```rust
//! use bulls_cows::core::{Config, Response};
//! use bulls_cows::solver::Solver;
//!
//! // Four positions over the symbols 1-9
//! let config = Config::default();
//! let secret = config.parse("5381").unwrap();
//!
//! // Score a guess the way a human opponent would
//! let guess = config.parse("1385").unwrap();
//! assert_eq!(config.score(&guess, &secret), Ok(Response::new(2, 2)));
//!
//! // Let the solver find the secret
//! let mut solver = Solver::seeded(config.clone(), 7);
//! let found = solver.run(|guess| Ok(config.score(guess, &secret)?)).unwrap();
//! assert_eq!(found, secret);
//! ```

// Core domain types
pub mod core;

// Solving engine
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
