use im::Vector;

use crate::solver::value::Value;

/// Identifies a variable within a [`Problem`](crate::solver::problem::Problem).
///
/// Ids are dense: a variable's id equals its index in the problem's
/// declaration order, and that order is also the deterministic tie-break
/// order used by the search heuristics.
pub type VariableId = u32;

/// A problem variable: an ordered domain of candidate values plus a
/// human-readable description used in diagnostics.
///
/// Variables are immutable once constructed. Narrowings discovered during
/// search never touch the variable itself; they live in the per-branch
/// restriction overlay of an [`Assignment`](crate::solver::assignment::Assignment).
#[derive(Clone, Debug)]
pub struct Variable<V: Value> {
    description: String,
    domain: Vector<V>,
}

impl<V: Value> Variable<V> {
    pub fn new(description: impl Into<String>, domain: impl IntoIterator<Item = V>) -> Self {
        Self {
            description: description.into(),
            domain: domain.into_iter().collect(),
        }
    }

    /// The full declared domain, in its natural order.
    pub fn domain(&self) -> &Vector<V> {
        &self.domain
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}
