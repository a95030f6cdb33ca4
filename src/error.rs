use crate::solver::{constraint::ConstraintId, variable::VariableId};

pub type Result<T, E = ProblemError> = core::result::Result<T, E>;

/// Errors raised while validating a problem definition.
///
/// These are construction-time failures: a malformed problem is rejected by
/// [`Problem::new`](crate::solver::problem::Problem::new) before any search
/// begins. Negative search outcomes (an inconsistent candidate, a propagation
/// contradiction, an exhausted search space) are ordinary result values,
/// never errors.
#[derive(Debug, thiserror::Error)]
pub enum ProblemError {
    #[error("variable {variable} (`{description}`) has an empty domain")]
    EmptyDomain {
        variable: VariableId,
        description: String,
    },

    #[error("constraint {constraint} (`{description}`) relies on unknown variable {variable}")]
    UnknownScopeVariable {
        constraint: ConstraintId,
        description: String,
        variable: VariableId,
    },
}
