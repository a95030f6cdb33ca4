use std::fmt;

use tracing::debug;

use crate::solver::{
    assignment::Assignment, problem::Problem, value::Value, variable::VariableId,
    work_list::WorkList,
};

/// Signals that propagation emptied a variable's candidate set.
///
/// This is an expected, recoverable outcome of exploring a doomed candidate,
/// not an error: the search engine responds by trying the next value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contradiction {
    /// The variable whose candidate set was wiped out.
    pub variable: VariableId,
}

impl fmt::Display for Contradiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no candidate values left for variable {}", self.variable)
    }
}

pub type PropagationResult<V> = Result<Assignment<V>, Contradiction>;

/// A policy for deriving consequences from a decision before branching
/// further.
///
/// Soundness contract: a propagator may only remove values that cannot occur
/// in any complete satisfying assignment reachable from `assignment`.
pub trait Propagator<V: Value>: std::fmt::Debug {
    /// Propagates the consequences of `variable` having just been assigned
    /// in `assignment`.
    fn propagate(
        &self,
        problem: &Problem<V>,
        assignment: Assignment<V>,
        variable: VariableId,
    ) -> PropagationResult<V>;
}

/// The no-op policy: every assignment passes through unchanged.
///
/// Always sound, whatever the constraint kinds involved, which is why it is
/// the default for [`Problem::new`](crate::solver::problem::Problem::new).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPropagation;

impl<V: Value> Propagator<V> for NoPropagation {
    fn propagate(
        &self,
        _problem: &Problem<V>,
        assignment: Assignment<V>,
        _variable: VariableId,
    ) -> PropagationResult<V> {
        Ok(assignment)
    }
}

/// Forward checking for difference-style constraints: the decided value is
/// excluded from the candidate sets of every unassigned variable sharing a
/// constraint with the decided one.
///
/// An exclusion that empties a candidate set ends the pass with a
/// [`Contradiction`]. An exclusion that leaves exactly one candidate
/// auto-assigns that variable, and the pass continues from it, so forced
/// moves cascade until a fixpoint or a contradiction is reached. Candidate
/// sets only ever shrink and each cascade step assigns a variable, so the
/// pass terminates.
///
/// Only sound when every constraint sharing scope with the decided variable
/// forbids the decided value on its scope-mates (all-different, not-equal,
/// and friends). Problems with other constraint kinds should keep
/// [`NoPropagation`] or supply their own policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForwardChecking;

impl<V: Value> Propagator<V> for ForwardChecking {
    fn propagate(
        &self,
        problem: &Problem<V>,
        assignment: Assignment<V>,
        variable: VariableId,
    ) -> PropagationResult<V> {
        let mut assignment = assignment;
        let mut pending = WorkList::new();
        pending.push_back(variable);

        while let Some(current) = pending.pop_front() {
            // Only assigned variables are queued; the value is what gets
            // excluded from the neighbours.
            let Some(value) = assignment.value(current).cloned() else {
                continue;
            };

            for constraint in problem.variable_constraints(current) {
                for &neighbour in constraint.relies_on() {
                    if neighbour == current || assignment.is_assigned(neighbour) {
                        continue;
                    }

                    let domain = problem.domain_values(&assignment, neighbour);
                    let Some(index) = domain.index_of(&value) else {
                        continue;
                    };

                    let mut pruned = domain;
                    pruned.remove(index);

                    if pruned.is_empty() {
                        debug!(variable = neighbour, "candidate set wiped out");
                        return Err(Contradiction {
                            variable: neighbour,
                        });
                    }

                    if pruned.len() == 1 {
                        let forced = pruned[0].clone();
                        assignment = assignment.assign(neighbour, forced);
                        assignment.restrict_domain(neighbour, pruned);
                        pending.push_back(neighbour);
                    } else {
                        assignment.restrict_domain(neighbour, pruned);
                    }
                }
            }
        }

        Ok(assignment)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::solver::{
        constraint::Constraint, constraints::all_different::AllDifferentConstraint,
        variable::Variable,
    };

    fn latin_square_2x2() -> Problem<i64> {
        // Variables laid out row-major:
        //   0 1
        //   2 3
        let variables = (0..4)
            .map(|i| Variable::new(format!("cell {i}"), [1, 2]))
            .collect();
        let constraints: Vec<Box<dyn Constraint<i64>>> = vec![
            Box::new(AllDifferentConstraint::new(vec![0, 1])),
            Box::new(AllDifferentConstraint::new(vec![2, 3])),
            Box::new(AllDifferentConstraint::new(vec![0, 2])),
            Box::new(AllDifferentConstraint::new(vec![1, 3])),
        ];
        Problem::with_propagator(variables, constraints, Box::new(ForwardChecking)).unwrap()
    }

    #[test]
    fn forced_assignments_cascade_transitively() {
        let problem = latin_square_2x2();
        let assignment = Assignment::blank().assign(0, 1);

        let propagated = problem.inference(assignment, 0).unwrap();

        // One decision determines the whole square.
        assert_eq!(propagated.value(1), Some(&2));
        assert_eq!(propagated.value(2), Some(&2));
        assert_eq!(propagated.value(3), Some(&1));
        assert!(problem.is_complete_and_satisfying(&propagated));
    }

    #[test]
    fn wiped_out_domain_reports_a_contradiction() {
        let variables = vec![Variable::new("a", [1, 2]), Variable::new("b", [1])];
        let constraints: Vec<Box<dyn Constraint<i64>>> =
            vec![Box::new(AllDifferentConstraint::new(vec![0, 1]))];
        let problem =
            Problem::with_propagator(variables, constraints, Box::new(ForwardChecking)).unwrap();

        let assignment = Assignment::blank().assign(0, 1);
        let outcome = problem.inference(assignment, 0);

        assert_eq!(outcome, Err(Contradiction { variable: 1 }));
    }

    #[test]
    fn absent_value_leaves_neighbours_untouched() {
        let variables = vec![Variable::new("a", [1, 2]), Variable::new("b", [3, 4])];
        let constraints: Vec<Box<dyn Constraint<i64>>> =
            vec![Box::new(AllDifferentConstraint::new(vec![0, 1]))];
        let problem =
            Problem::with_propagator(variables, constraints, Box::new(ForwardChecking)).unwrap();

        let assignment = Assignment::blank().assign(0, 1);
        let propagated = problem.inference(assignment.clone(), 0).unwrap();

        assert_eq!(propagated, assignment);
        assert_eq!(problem.domain_values(&propagated, 1), im::vector![3, 4]);
    }

    #[test]
    fn assigned_neighbours_are_not_restricted() {
        let variables = vec![Variable::new("a", [1, 2]), Variable::new("b", [1, 2])];
        let constraints: Vec<Box<dyn Constraint<i64>>> =
            vec![Box::new(AllDifferentConstraint::new(vec![0, 1]))];
        let problem =
            Problem::with_propagator(variables, constraints, Box::new(ForwardChecking)).unwrap();

        let assignment = Assignment::blank().assign(1, 2).assign(0, 1);
        let propagated = problem.inference(assignment, 0).unwrap();

        // b already holds a value; its overlay stays untouched.
        assert_eq!(propagated.restricted_domain(1), None);
        assert_eq!(propagated.value(1), Some(&2));
    }
}
