use serde::Serialize;
use tracing::debug;

use crate::solver::{
    assignment::Assignment,
    heuristics::{
        value::{IdentityValueHeuristic, LeastConstrainingValueHeuristic, ValueOrderingHeuristic},
        variable::{
            MinimumRemainingValuesHeuristic, SelectFirstHeuristic, VariableSelectionHeuristic,
        },
    },
    problem::Problem,
    value::Value,
};

/// Counters accumulated over one `solve` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Search-tree nodes visited, including the root.
    pub nodes_visited: u64,
    /// Candidate values that were tried and failed to lead to a solution.
    pub backtracks: u64,
    /// Candidates abandoned because propagation wiped out a domain.
    pub contradictions: u64,
}

/// Receives a callback at every node visit.
///
/// This is the engine's only diagnostic channel: heuristics and the search
/// loop never print. Observers needing mutable state should use interior
/// mutability.
pub trait SearchObserver<V: Value> {
    fn node_visited(&self, problem: &Problem<V>, assignment: &Assignment<V>);
}

/// A depth-first backtracking solver over persistent assignments.
///
/// The engine owns its variable-selection and value-ordering strategies and
/// takes the problem by shared reference: the problem (and its cached
/// incident index) is read-only during search, while every node of the
/// search tree is its own [`Assignment`]. Abandoning a branch is therefore
/// just dropping its assignment; sibling branches can never observe each
/// other's narrowings.
///
/// For a fixed problem and fixed heuristics, `solve` is deterministic: it
/// explores candidates in the same order and returns the same outcome every
/// time.
pub struct SolverEngine<V: Value> {
    variable_heuristic: Box<dyn VariableSelectionHeuristic<V>>,
    value_heuristic: Box<dyn ValueOrderingHeuristic<V>>,
    observer: Option<Box<dyn SearchObserver<V>>>,
}

impl<V: Value> SolverEngine<V> {
    /// Creates an engine with explicit heuristics.
    pub fn new(
        variable_heuristic: Box<dyn VariableSelectionHeuristic<V>>,
        value_heuristic: Box<dyn ValueOrderingHeuristic<V>>,
    ) -> Self {
        Self {
            variable_heuristic,
            value_heuristic,
            observer: None,
        }
    }

    /// An engine wired with the Minimum-Remaining-Values selector and the
    /// domain-sum value ordering.
    pub fn mrv_lcv() -> Self {
        Self::new(
            Box::new(MinimumRemainingValuesHeuristic),
            Box::new(LeastConstrainingValueHeuristic),
        )
    }

    /// Attaches an observer invoked at every node visit.
    pub fn with_observer(mut self, observer: Box<dyn SearchObserver<V>>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Searches for a complete, satisfying assignment reachable from
    /// `initial`.
    ///
    /// Returns `None` when the whole search space below `initial` is
    /// exhausted; that is the expected outcome for an unsatisfiable problem,
    /// not an error.
    pub fn solve(
        &self,
        problem: &Problem<V>,
        initial: Assignment<V>,
    ) -> (Option<Assignment<V>>, SearchStats) {
        let mut stats = SearchStats::default();
        let solution = self.search(problem, initial, &mut stats);
        debug!(
            nodes_visited = stats.nodes_visited,
            backtracks = stats.backtracks,
            contradictions = stats.contradictions,
            solved = solution.is_some(),
            "search finished"
        );
        (solution, stats)
    }

    fn search(
        &self,
        problem: &Problem<V>,
        assignment: Assignment<V>,
        stats: &mut SearchStats,
    ) -> Option<Assignment<V>> {
        stats.nodes_visited += 1;
        if let Some(observer) = &self.observer {
            observer.node_visited(problem, &assignment);
        }

        if problem.is_complete_and_satisfying(&assignment) {
            return Some(assignment);
        }

        let Some(variable) = self.variable_heuristic.select_variable(problem, &assignment) else {
            // Every variable is assigned but the goal test failed: a
            // propagation cascade can produce such a state, and it is an
            // ordinary dead end.
            return None;
        };

        for value in self.value_heuristic.order_values(problem, &assignment, variable) {
            let extended = assignment.assign(variable, value);
            if !problem.consistent_assignment(&extended, variable) {
                continue;
            }
            let propagated = match problem.inference(extended, variable) {
                Ok(propagated) => propagated,
                Err(_) => {
                    stats.contradictions += 1;
                    continue;
                }
            };

            // Recurse on the propagated assignment, never the parent's: the
            // narrowings derived from this decision belong to this branch.
            if let Some(found) = self.search(problem, propagated, stats) {
                return Some(found);
            }
            stats.backtracks += 1;
        }

        None
    }
}

impl<V: Value> Default for SolverEngine<V> {
    fn default() -> Self {
        Self::new(Box::new(SelectFirstHeuristic), Box::new(IdentityValueHeuristic))
    }
}

/// Solves `problem` with the default heuristics: first unassigned variable,
/// natural domain order.
pub fn solve<V: Value>(problem: &Problem<V>, initial: Assignment<V>) -> Option<Assignment<V>> {
    SolverEngine::default().solve(problem, initial).0
}

/// Solves `problem` with the MRV variable selector and the domain-sum value
/// ordering.
pub fn solve_mrv_lcv<V: Value>(
    problem: &Problem<V>,
    initial: Assignment<V>,
) -> Option<Assignment<V>> {
    SolverEngine::mrv_lcv().solve(problem, initial).0
}
