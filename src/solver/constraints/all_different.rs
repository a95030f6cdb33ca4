use std::collections::HashSet;

use crate::solver::{
    assignment::Assignment,
    constraint::{Constraint, ConstraintDescriptor},
    value::Value,
    variable::VariableId,
};

/// A constraint requiring all variables in its scope to take distinct values.
///
/// This is the workhorse constraint of grid puzzles: a Sudoku row, column, or
/// box is exactly one `AllDifferentConstraint` over its cells.
#[derive(Debug, Clone)]
pub struct AllDifferentConstraint {
    vars: Vec<VariableId>,
}

impl AllDifferentConstraint {
    /// Creates a new `AllDifferentConstraint` over the given scope.
    pub fn new(vars: Vec<VariableId>) -> Self {
        Self { vars }
    }
}

impl<V: Value> Constraint<V> for AllDifferentConstraint {
    fn relies_on(&self) -> &[VariableId] {
        &self.vars
    }

    fn descriptor(&self) -> ConstraintDescriptor {
        let vars_str = self
            .vars
            .iter()
            .map(|v| format!("?{}", v))
            .collect::<Vec<_>>()
            .join(", ");
        ConstraintDescriptor {
            name: "AllDifferentConstraint".to_string(),
            description: format!("AllDifferent({})", vars_str),
        }
    }

    fn satisfied(&self, assignment: &Assignment<V>) -> bool {
        let mut seen = HashSet::with_capacity(self.vars.len());
        for &var in &self.vars {
            match assignment.value(var) {
                // A complete check: an unassigned scope variable means the
                // constraint cannot hold yet.
                None => return false,
                Some(value) => {
                    if !seen.insert(value) {
                        return false;
                    }
                }
            }
        }
        true
    }

    fn consistent(&self, assignment: &Assignment<V>) -> bool {
        let mut seen = HashSet::with_capacity(self.vars.len());
        for &var in &self.vars {
            if let Some(value) = assignment.value(var) {
                if !seen.insert(value) {
                    return false;
                }
            }
        }
        true
    }
}
