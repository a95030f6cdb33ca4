use im::Vector;

use crate::{
    error::{ProblemError, Result},
    solver::{
        assignment::Assignment,
        constraint::{Constraint, ConstraintId},
        propagation::{NoPropagation, PropagationResult, Propagator},
        value::Value,
        variable::{Variable, VariableId},
    },
};

/// A complete problem instance: variables, constraints, and the propagation
/// policy applied after each decision.
///
/// A `Problem` is validated and frozen at construction. The
/// variable-to-incident-constraint index is built eagerly by [`Problem::new`]
/// and never
/// mutated afterwards, so a problem can be shared read-only across search
/// branches (or threads); all mutable-looking search state lives in
/// [`Assignment`] values instead.
#[derive(Debug)]
pub struct Problem<V: Value> {
    variables: Vec<Variable<V>>,
    constraints: Vec<Box<dyn Constraint<V>>>,
    incident: Vec<Vec<ConstraintId>>,
    propagator: Box<dyn Propagator<V>>,
}

impl<V: Value> Problem<V> {
    /// Builds a problem with no propagation (every inference call returns the
    /// assignment unchanged).
    ///
    /// Fails fast if any variable has an empty domain or any constraint's
    /// scope references a variable that does not exist.
    pub fn new(
        variables: Vec<Variable<V>>,
        constraints: Vec<Box<dyn Constraint<V>>>,
    ) -> Result<Self> {
        Self::with_propagator(variables, constraints, Box::new(NoPropagation))
    }

    /// Builds a problem with an explicit propagation policy.
    pub fn with_propagator(
        variables: Vec<Variable<V>>,
        constraints: Vec<Box<dyn Constraint<V>>>,
        propagator: Box<dyn Propagator<V>>,
    ) -> Result<Self> {
        for (id, variable) in variables.iter().enumerate() {
            if variable.domain().is_empty() {
                return Err(ProblemError::EmptyDomain {
                    variable: id as VariableId,
                    description: variable.description().to_string(),
                });
            }
        }

        let incident = Self::build_incident_index(&variables, &constraints)?;

        Ok(Self {
            variables,
            constraints,
            incident,
            propagator,
        })
    }

    /// Inverts the constraint scopes into a per-variable incident-constraint
    /// index, rejecting any scope that points outside `variables`.
    fn build_incident_index(
        variables: &[Variable<V>],
        constraints: &[Box<dyn Constraint<V>>],
    ) -> Result<Vec<Vec<ConstraintId>>> {
        let mut incident: Vec<Vec<ConstraintId>> = vec![Vec::new(); variables.len()];
        for (id, constraint) in constraints.iter().enumerate() {
            for &scope_var in constraint.relies_on() {
                match incident.get_mut(scope_var as usize) {
                    Some(entry) => entry.push(id),
                    None => {
                        return Err(ProblemError::UnknownScopeVariable {
                            constraint: id,
                            description: constraint.descriptor().description,
                            variable: scope_var,
                        })
                    }
                }
            }
        }
        Ok(incident)
    }

    pub fn variables(&self) -> &[Variable<V>] {
        &self.variables
    }

    pub fn variable(&self, variable: VariableId) -> &Variable<V> {
        &self.variables[variable as usize]
    }

    pub fn constraints(&self) -> &[Box<dyn Constraint<V>>] {
        &self.constraints
    }

    /// Ids of the constraints whose scope contains `variable`, from the
    /// index built at construction.
    pub fn variable_constraint_ids(&self, variable: VariableId) -> &[ConstraintId] {
        &self.incident[variable as usize]
    }

    /// The constraints whose scope contains `variable`.
    pub fn variable_constraints(
        &self,
        variable: VariableId,
    ) -> impl Iterator<Item = &dyn Constraint<V>> + '_ {
        self.incident[variable as usize]
            .iter()
            .map(|&id| self.constraints[id].as_ref())
    }

    /// The effective candidate set for `variable` under `assignment`: its
    /// restriction overlay when present, otherwise the declared domain.
    ///
    /// Pure with respect to both arguments; repeated calls return the same
    /// set.
    pub fn domain_values(&self, assignment: &Assignment<V>, variable: VariableId) -> Vector<V> {
        assignment
            .restricted_domain(variable)
            .cloned()
            .unwrap_or_else(|| self.variable(variable).domain().clone())
    }

    /// Whether every constraint incident on `variable` accepts the partial
    /// assignment.
    pub fn consistent_assignment(&self, assignment: &Assignment<V>, variable: VariableId) -> bool {
        self.variable_constraints(variable)
            .all(|constraint| constraint.consistent(assignment))
    }

    /// The goal test: every variable has a value and every constraint is
    /// satisfied.
    pub fn is_complete_and_satisfying(&self, assignment: &Assignment<V>) -> bool {
        (0..self.variables.len() as VariableId).all(|v| assignment.is_assigned(v))
            && self
                .constraints
                .iter()
                .all(|constraint| constraint.satisfied(assignment))
    }

    /// Propagates the consequences of the decision just made on `variable`.
    ///
    /// A `Contradiction` is an expected, recoverable outcome: the caller
    /// abandons this candidate and tries the next one.
    pub fn inference(
        &self,
        assignment: Assignment<V>,
        variable: VariableId,
    ) -> PropagationResult<V> {
        self.propagator.propagate(self, assignment, variable)
    }
}
