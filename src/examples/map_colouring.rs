//! Map colouring formulated as a constraint satisfaction problem: one
//! variable per region, one not-equal constraint per border.

use crate::{
    error::Result,
    solver::{
        constraint::Constraint,
        constraints::not_equal::NotEqualConstraint,
        problem::Problem,
        propagation::ForwardChecking,
        variable::{Variable, VariableId},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Colour {
    Red,
    Green,
    Blue,
    Yellow,
}

/// Builds a colouring problem over `regions`, where each pair in `borders`
/// names two regions (by index) that must differ in colour.
pub fn map_colouring_problem(
    regions: &[&str],
    borders: &[(VariableId, VariableId)],
    colours: &[Colour],
) -> Result<Problem<Colour>> {
    let variables = regions
        .iter()
        .map(|name| Variable::new(*name, colours.iter().copied()))
        .collect();
    let constraints: Vec<Box<dyn Constraint<Colour>>> = borders
        .iter()
        .map(|&(a, b)| Box::new(NotEqualConstraint::new(a, b)) as Box<dyn Constraint<Colour>>)
        .collect();
    Problem::with_propagator(variables, constraints, Box::new(ForwardChecking))
}
