//! Genetic algorithm for the 0/1 knapsack problem.
//!
//! Given items with weights and values and a capacity, the search looks for
//! the subset of items with the highest total value that still fits.
//!
//! - [`knapsack`]: Problem instance and its objective (fitness) function
//! - [`ga`]: The evolutionary engine: selection, variation, elitism and the
//!   generational loop
//! - [`instances`]: Catalog of classic benchmark instances
//! - [`benchmark`]: Repeated independent runs and mean/best/worst summaries
//! - [`random`]: Seeded random sources
//!
//! # Example
//!
//! ```
//! use knapsack_ga::ga::{GaConfig, GaRunner};
//! use knapsack_ga::instances;
//!
//! let knapsack = instances::get(3);
//! let config = GaConfig::default().with_generations(100).with_seed(1);
//! let result = GaRunner::run(&knapsack, &config).unwrap();
//! assert!(result.best_fitness <= knapsack.optimum);
//! ```
//!
//! # Features
//!
//! - `parallel`: evaluate fitness and benchmark runs on rayon's thread pool
//! - `serde`: `Serialize`/`Deserialize` for the public data types

pub mod benchmark;
mod error;
pub mod ga;
pub mod instances;
pub mod knapsack;
pub mod random;

pub use error::Error;
