//! Defines a collection of standard heuristics for selecting which variable
//! to branch on next during the search process.

use crate::solver::{
    assignment::Assignment, problem::Problem, value::Value, variable::VariableId,
};

/// A trait for variable-selection heuristics.
///
/// Implementors of this trait define a strategy for choosing which unassigned
/// variable the solver should branch on next. A good heuristic can
/// dramatically improve solver performance.
pub trait VariableSelectionHeuristic<V: Value> {
    /// Selects the next variable to be assigned.
    ///
    /// # Returns
    ///
    /// * `Some(VariableId)` of the chosen variable, if any variable is still
    ///   unassigned.
    /// * `None` if every variable already has a value.
    fn select_variable(
        &self,
        problem: &Problem<V>,
        assignment: &Assignment<V>,
    ) -> Option<VariableId>;
}

/// A simple heuristic that selects the first unassigned variable in the
/// problem's declaration order.
///
/// This provides a basic, deterministic way to select variables.
pub struct SelectFirstHeuristic;

impl<V: Value> VariableSelectionHeuristic<V> for SelectFirstHeuristic {
    fn select_variable(
        &self,
        problem: &Problem<V>,
        assignment: &Assignment<V>,
    ) -> Option<VariableId> {
        (0..problem.variables().len() as VariableId).find(|&v| !assignment.is_assigned(v))
    }
}

/// A heuristic that selects the unassigned variable with the Minimum
/// Remaining Values in its effective candidate set.
///
/// This is a "fail-first" strategy that prioritizes the most constrained
/// variable: tackling the tightest spot early prunes the search space
/// fastest. In case of a tie, the variable earliest in declaration order is
/// chosen to keep the search deterministic.
pub struct MinimumRemainingValuesHeuristic;

impl<V: Value> VariableSelectionHeuristic<V> for MinimumRemainingValuesHeuristic {
    fn select_variable(
        &self,
        problem: &Problem<V>,
        assignment: &Assignment<V>,
    ) -> Option<VariableId> {
        (0..problem.variables().len() as VariableId)
            .filter(|&v| !assignment.is_assigned(v))
            // `min_by_key` keeps the first of equally small candidates, which
            // is exactly the declaration-order tie-break.
            .min_by_key(|&v| problem.domain_values(assignment, v).len())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::solver::variable::Variable;

    fn problem(domains: &[&[i64]]) -> Problem<i64> {
        let variables = domains
            .iter()
            .enumerate()
            .map(|(i, domain)| Variable::new(format!("v{i}"), domain.iter().copied()))
            .collect();
        Problem::new(variables, Vec::new()).unwrap()
    }

    #[test]
    fn select_first_walks_declaration_order() {
        let problem = problem(&[&[1], &[1, 2], &[1, 2, 3]]);
        let heuristic = SelectFirstHeuristic;

        let blank = Assignment::blank();
        assert_eq!(heuristic.select_variable(&problem, &blank), Some(0));

        let after_first = blank.assign(0, 1);
        assert_eq!(heuristic.select_variable(&problem, &after_first), Some(1));

        let complete = after_first.assign(1, 1).assign(2, 1);
        assert_eq!(heuristic.select_variable(&problem, &complete), None);
    }

    #[test]
    fn mrv_picks_the_smallest_effective_domain() {
        let problem = problem(&[&[1, 2, 3], &[1, 2], &[1, 2, 3, 4]]);
        let heuristic = MinimumRemainingValuesHeuristic;

        let blank = Assignment::blank();
        assert_eq!(heuristic.select_variable(&problem, &blank), Some(1));

        // Restriction overlays count, not the declared domains.
        let mut narrowed = blank.clone();
        narrowed.restrict_domain(2, im::vector![4]);
        assert_eq!(heuristic.select_variable(&problem, &narrowed), Some(2));
    }

    #[test]
    fn mrv_ties_break_to_declaration_order() {
        let problem = problem(&[&[1, 2], &[1, 2], &[1, 2]]);
        let heuristic = MinimumRemainingValuesHeuristic;

        let blank = Assignment::blank();
        assert_eq!(heuristic.select_variable(&problem, &blank), Some(0));

        let after_first = blank.assign(0, 1);
        assert_eq!(heuristic.select_variable(&problem, &after_first), Some(1));
    }

    #[test]
    fn mrv_skips_assigned_variables() {
        let problem = problem(&[&[1], &[1, 2, 3], &[1, 2]]);
        let heuristic = MinimumRemainingValuesHeuristic;

        let assignment = Assignment::blank().assign(0, 1);
        assert_eq!(heuristic.select_variable(&problem, &assignment), Some(2));
    }
}
