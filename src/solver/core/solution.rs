use super::solver::SolverStatus;
use super::variables::PrimalDualVariables;
use std::collections::BTreeMap;
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// String-keyed diagnostic values of a solve.
///
/// A key that is absent was not computed for this problem class,
/// which is different from a computed value of zero.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Diagnostics(BTreeMap<String, f64>);

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.0.get(key).copied()
    }

    pub fn insert(&mut self, key: &str, value: f64) {
        self.0.insert(key.to_string(), value);
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

/// Result of a completed solve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Solution {
    /// final iterate
    pub pdv: PrimalDualVariables,
    pub state: Diagnostics,
    pub status: SolverStatus,
    pub iterations: u32,
    /// rows of `s` and `z` belonging to each cone block
    pub cone_ranges: Vec<Range<usize>>,
    /// wall clock time of the solve, in seconds
    pub solve_time: f64,
}

impl Solution {
    pub(crate) fn new(pdv: PrimalDualVariables, cone_ranges: Vec<Range<usize>>) -> Self {
        Self {
            pdv,
            state: Diagnostics::new(),
            status: SolverStatus::Unsolved,
            iterations: 0,
            cone_ranges,
            solve_time: 0.0,
        }
    }

    /// Shorthand for the primal variables.
    pub fn x(&self) -> &[f64] {
        &self.pdv.x
    }
}
