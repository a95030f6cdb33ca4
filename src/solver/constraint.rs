use serde::Serialize;

use crate::solver::{assignment::Assignment, value::Value, variable::VariableId};

pub type ConstraintId = usize;

#[derive(Debug, Clone, Serialize)]
pub struct ConstraintDescriptor {
    pub name: String,
    pub description: String,
}

/// A rule over a fixed scope of variables.
///
/// Implementations provide two checks with distinct contracts:
///
/// - [`satisfied`](Constraint::satisfied) assumes every variable in the scope
///   is assigned and reports whether the rule holds. It is the check the goal
///   test runs against complete assignments.
/// - [`consistent`](Constraint::consistent) must accept partial assignments:
///   it reports `false` only when the variables assigned *so far* already
///   violate the rule. Unassigned scope variables are ignored, never treated
///   as violations.
pub trait Constraint<V: Value>: std::fmt::Debug {
    /// The ordered scope of variables this constraint depends on.
    fn relies_on(&self) -> &[VariableId];

    fn descriptor(&self) -> ConstraintDescriptor;

    fn satisfied(&self, assignment: &Assignment<V>) -> bool;

    fn consistent(&self, assignment: &Assignment<V>) -> bool;
}
