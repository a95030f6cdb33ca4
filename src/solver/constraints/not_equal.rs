use crate::solver::{
    assignment::Assignment,
    constraint::{Constraint, ConstraintDescriptor},
    value::Value,
    variable::VariableId,
};

#[derive(Debug, Clone)]
pub struct NotEqualConstraint {
    vars: [VariableId; 2],
}

impl NotEqualConstraint {
    pub fn new(a: VariableId, b: VariableId) -> Self {
        Self { vars: [a, b] }
    }
}

impl<V: Value> Constraint<V> for NotEqualConstraint {
    fn relies_on(&self) -> &[VariableId] {
        &self.vars
    }

    fn descriptor(&self) -> ConstraintDescriptor {
        ConstraintDescriptor {
            name: "NotEqualConstraint".to_string(),
            description: format!("?{} != ?{}", self.vars[0], self.vars[1]),
        }
    }

    fn satisfied(&self, assignment: &Assignment<V>) -> bool {
        match (assignment.value(self.vars[0]), assignment.value(self.vars[1])) {
            (Some(a), Some(b)) => a != b,
            _ => false,
        }
    }

    fn consistent(&self, assignment: &Assignment<V>) -> bool {
        match (assignment.value(self.vars[0]), assignment.value(self.vars[1])) {
            (Some(a), Some(b)) => a != b,
            // With either side undecided nothing is violated yet.
            _ => true,
        }
    }
}
