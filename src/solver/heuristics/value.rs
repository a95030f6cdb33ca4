//! Heuristics that determine the order in which candidate values are tried
//! for a chosen variable.

use crate::solver::{
    assignment::Assignment, problem::Problem, value::Value, variable::VariableId,
};

/// A trait for strategies that determine the order of values to try for a
/// variable.
///
/// An ordering heuristic may also filter: a candidate it can already prove
/// doomed (inconsistent, or propagating to a contradiction) need not be
/// offered at all.
pub trait ValueOrderingHeuristic<V: Value> {
    /// Returns the candidate values for `variable`, in the order they should
    /// be tried.
    fn order_values(
        &self,
        problem: &Problem<V>,
        assignment: &Assignment<V>,
        variable: VariableId,
    ) -> Vec<V>;
}

/// A simple heuristic that returns values in their natural domain order.
pub struct IdentityValueHeuristic;

impl<V: Value> ValueOrderingHeuristic<V> for IdentityValueHeuristic {
    fn order_values(
        &self,
        problem: &Problem<V>,
        assignment: &Assignment<V>,
        variable: VariableId,
    ) -> Vec<V> {
        problem
            .domain_values(assignment, variable)
            .iter()
            .cloned()
            .collect()
    }
}

/// A value ordering driven by how much freedom each candidate leaves to the
/// rest of the problem.
///
/// Each candidate is speculatively assigned, checked for consistency, and
/// propagated. Candidates that fail either step are dropped outright: they
/// cannot lead anywhere, so offering them would only buy a guaranteed
/// backtrack. Survivors are scored by the total size of every variable's
/// candidate set after propagation and sorted ascending on that score (a
/// stable sort, so equally scored values keep their original domain order).
pub struct LeastConstrainingValueHeuristic;

impl<V: Value> ValueOrderingHeuristic<V> for LeastConstrainingValueHeuristic {
    fn order_values(
        &self,
        problem: &Problem<V>,
        assignment: &Assignment<V>,
        variable: VariableId,
    ) -> Vec<V> {
        let mut scored: Vec<(usize, V)> = Vec::new();

        for value in problem.domain_values(assignment, variable).iter() {
            let candidate = assignment.assign(variable, value.clone());
            if !problem.consistent_assignment(&candidate, variable) {
                continue;
            }
            let Ok(propagated) = problem.inference(candidate, variable) else {
                continue;
            };

            let remaining_freedom = (0..problem.variables().len() as VariableId)
                .map(|v| problem.domain_values(&propagated, v).len())
                .sum();
            scored.push((remaining_freedom, value.clone()));
        }

        scored.sort_by_key(|(freedom, _)| *freedom);
        scored.into_iter().map(|(_, value)| value).collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::solver::{
        constraint::Constraint, constraints::all_different::AllDifferentConstraint,
        propagation::ForwardChecking, variable::Variable,
    };

    fn problem(
        domains: &[&[i64]],
        scopes: &[&[VariableId]],
    ) -> Problem<i64> {
        let variables = domains
            .iter()
            .enumerate()
            .map(|(i, domain)| Variable::new(format!("v{i}"), domain.iter().copied()))
            .collect();
        let constraints: Vec<Box<dyn Constraint<i64>>> = scopes
            .iter()
            .map(|scope| {
                Box::new(AllDifferentConstraint::new(scope.to_vec())) as Box<dyn Constraint<i64>>
            })
            .collect();
        Problem::with_propagator(variables, constraints, Box::new(ForwardChecking)).unwrap()
    }

    #[test]
    fn identity_preserves_domain_order() {
        let problem = problem(&[&[3, 1, 2]], &[]);
        let heuristic = IdentityValueHeuristic;
        assert_eq!(
            heuristic.order_values(&problem, &Assignment::blank(), 0),
            vec![3, 1, 2]
        );
    }

    #[test]
    fn identity_respects_the_restriction_overlay() {
        let problem = problem(&[&[3, 1, 2]], &[]);
        let heuristic = IdentityValueHeuristic;

        let mut narrowed = Assignment::blank();
        narrowed.restrict_domain(0, im::vector![1, 2]);
        assert_eq!(heuristic.order_values(&problem, &narrowed, 0), vec![1, 2]);
    }

    #[test]
    fn lcv_orders_by_ascending_post_propagation_domain_sum() {
        // Assigning x = 2 forces z to 3, leaving a total candidate count of
        // 5; x = 1 merely prunes y, leaving 6. The sums sort ascending, so
        // 2 is offered before 1.
        let problem = problem(
            &[&[1, 2], &[1, 2, 3], &[2, 3]],
            &[&[0, 1], &[0, 2]],
        );
        let heuristic = LeastConstrainingValueHeuristic;

        let order = heuristic.order_values(&problem, &Assignment::blank(), 0);
        assert_eq!(order, vec![2, 1]);
    }

    #[test]
    fn lcv_drops_values_whose_propagation_fails() {
        // x = 2 would wipe out y's only candidate; it must never be offered.
        let problem = problem(&[&[1, 2], &[2]], &[&[0, 1]]);
        let heuristic = LeastConstrainingValueHeuristic;

        let order = heuristic.order_values(&problem, &Assignment::blank(), 0);
        assert_eq!(order, vec![1]);
    }

    #[test]
    fn lcv_drops_values_that_are_inconsistent() {
        let problem = problem(&[&[1, 2], &[1, 2]], &[&[0, 1]]);
        let heuristic = LeastConstrainingValueHeuristic;

        let assignment = Assignment::blank().assign(1, 2);
        let order = heuristic.order_values(&problem, &assignment, 0);
        assert_eq!(order, vec![1]);
    }

    #[test]
    fn lcv_ties_keep_original_domain_order() {
        // A lone variable with no constraints: every value scores the same.
        let problem = problem(&[&[3, 1, 2]], &[]);
        let heuristic = LeastConstrainingValueHeuristic;

        let order = heuristic.order_values(&problem, &Assignment::blank(), 0);
        assert_eq!(order, vec![3, 1, 2]);
    }
}
