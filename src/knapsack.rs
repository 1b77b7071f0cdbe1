//! The 0/1 knapsack problem instance and its objective.
//!
//! A [`Knapsack`] is read-only for the duration of a run. Its
//! [`objective`](Knapsack::objective) maps a gene vector to a scalar fitness
//! where higher is better and a negative value marks an overweight selection.

use crate::error::Error;

/// A 0/1 knapsack problem instance.
///
/// `weights[i]` and `values[i]` describe item `i`; a gene vector selects
/// items by index.
///
/// # Examples
///
/// ```
/// use knapsack_ga::knapsack::Knapsack;
///
/// let k = Knapsack::new(5.0, vec![1.0, 2.0, 3.0, 4.0], vec![1.0, 2.0, 3.0, 4.0], 5.0).unwrap();
/// assert_eq!(k.objective(&[true, false, false, true]), 5.0);
/// assert_eq!(k.objective(&[false, true, true, true]), -9.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Knapsack {
    /// Maximum total weight of a feasible selection.
    pub capacity: f64,

    /// Item weights.
    pub weights: Vec<f64>,

    /// Item values.
    pub values: Vec<f64>,

    /// Best known objective value. Informational only; never used by the
    /// engine.
    pub optimum: f64,
}

impl Knapsack {
    /// Creates a validated instance.
    pub fn new(
        capacity: f64,
        weights: Vec<f64>,
        values: Vec<f64>,
        optimum: f64,
    ) -> Result<Self, Error> {
        let knapsack = Self {
            capacity,
            weights,
            values,
            optimum,
        };
        knapsack.validate()?;
        Ok(knapsack)
    }

    /// Number of items, which is also the gene count of every individual.
    pub fn item_count(&self) -> usize {
        self.weights.len()
    }

    /// Checks the structural invariants of the instance.
    pub fn validate(&self) -> Result<(), Error> {
        if self.weights.is_empty() {
            return Err(Error::InvalidInstance("instance has no items".into()));
        }
        if self.weights.len() != self.values.len() {
            return Err(Error::InvalidInstance(format!(
                "weights has {} items but values has {}",
                self.weights.len(),
                self.values.len()
            )));
        }
        if !self.capacity.is_finite() {
            return Err(Error::InvalidInstance("capacity must be finite".into()));
        }
        if self.weights.iter().chain(&self.values).any(|x| !x.is_finite()) {
            return Err(Error::InvalidInstance(
                "weights and values must be finite".into(),
            ));
        }
        Ok(())
    }

    /// Computes the fitness of a gene vector.
    ///
    /// Returns the total selected value when the selected weight fits within
    /// capacity, and the negated total value otherwise. An overweight
    /// selection is not penalised beyond the sign flip, so an overweight
    /// selection worth nothing ties with the empty selection.
    ///
    /// Genes beyond the item count are ignored.
    pub fn objective(&self, genes: &[bool]) -> f64 {
        let weight = dot(genes, &self.weights);
        let value = dot(genes, &self.values);
        if weight > self.capacity {
            -value
        } else {
            value
        }
    }
}

/// Sum of `params[i]` over the selected genes.
fn dot(genes: &[bool], params: &[f64]) -> f64 {
    genes
        .iter()
        .zip(params)
        .filter(|&(&g, _)| g)
        .map(|(_, &p)| p)
        .sum()
}
