//! Generational genetic algorithm for the 0/1 knapsack problem.
//!
//! Individuals are fixed-length boolean gene vectors, one gene per item.
//! A run evolves a fixed-size population through roulette selection,
//! single-point crossover, per-gene bit-flip mutation and elitist
//! replacement.
//!
//! # Key Types
//!
//! - [`Individual`]: A gene vector with its cached fitness
//! - [`GaConfig`]: Run parameters (population size, generations, rates)
//! - [`GaRunner`]: Executes the generational loop
//! - [`GaResult`]: Best individual and per-generation best fitness
//!
//! # Submodules
//!
//! - [`selection`]: Roulette wheel pair selection over shifted fitness
//! - [`operators`]: Single-point crossover and bit-flip mutation
//! - [`elitism`]: Elitist merge of two generations
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod elitism;
pub mod operators;
mod runner;
pub mod selection;
mod types;

pub use config::GaConfig;
pub use runner::{GaResult, GaRunner};
pub use types::{evaluate_population, generate_population, sort_descending, Individual};
