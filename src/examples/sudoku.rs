//! Sudoku formulated as a constraint satisfaction problem.
//!
//! One variable per cell with domain `1..=board_size`, and an all-different
//! constraint per row, per column, and (for perfect-square board sizes) per
//! box.

use crate::{
    error::Result,
    solver::{
        assignment::Assignment,
        constraint::Constraint,
        constraints::all_different::AllDifferentConstraint,
        problem::Problem,
        propagation::ForwardChecking,
        variable::{Variable, VariableId},
    },
};

/// A clue that cannot be placed: it clashes with an earlier clue, directly
/// or through propagation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("clue {value} at ({row}, {col}) conflicts with the clues placed before it")]
pub struct InvalidClue {
    pub row: usize,
    pub col: usize,
    pub value: u32,
}

fn cell(board_size: usize, row: usize, col: usize) -> VariableId {
    (row * board_size + col) as VariableId
}

/// Builds the Sudoku problem for a `board_size` x `board_size` grid.
///
/// Box constraints are added when `board_size` is a perfect square (4, 9,
/// 16, ...); rows and columns are constrained for any size. Forward checking
/// is sound here because every constraint is an all-different.
pub fn sudoku_problem(board_size: usize) -> Result<Problem<u32>> {
    let variables = (0..board_size * board_size)
        .map(|i| {
            let row = i / board_size;
            let col = i % board_size;
            Variable::new(format!("Cell ({row}, {col})"), 1..=board_size as u32)
        })
        .collect();

    let mut constraints: Vec<Box<dyn Constraint<u32>>> = Vec::new();

    for row in 0..board_size {
        let scope = (0..board_size).map(|col| cell(board_size, row, col)).collect();
        constraints.push(Box::new(AllDifferentConstraint::new(scope)));
    }

    for col in 0..board_size {
        let scope = (0..board_size).map(|row| cell(board_size, row, col)).collect();
        constraints.push(Box::new(AllDifferentConstraint::new(scope)));
    }

    if let Some(box_size) = (1..=board_size).find(|b| b * b == board_size) {
        for box_row in 0..box_size {
            for box_col in 0..box_size {
                let scope = (0..box_size)
                    .flat_map(|row| {
                        (0..box_size).map(move |col| {
                            cell(
                                board_size,
                                box_row * box_size + row,
                                box_col * box_size + col,
                            )
                        })
                    })
                    .collect();
                constraints.push(Box::new(AllDifferentConstraint::new(scope)));
            }
        }
    }

    Problem::with_propagator(variables, constraints, Box::new(ForwardChecking))
}

/// Seeds an assignment from `(row, col, value)` clues, propagating after
/// each placement so the search starts from already-narrowed domains.
///
/// Rejects a clue that is inconsistent with the placements so far or whose
/// propagation wipes out a domain.
pub fn clue_assignment(
    problem: &Problem<u32>,
    board_size: usize,
    clues: &[(usize, usize, u32)],
) -> core::result::Result<Assignment<u32>, InvalidClue> {
    let mut assignment = Assignment::blank();
    for &(row, col, value) in clues {
        let variable = cell(board_size, row, col);
        let invalid = InvalidClue { row, col, value };

        let extended = assignment.assign(variable, value);
        if !problem.consistent_assignment(&extended, variable) {
            return Err(invalid);
        }
        assignment = problem.inference(extended, variable).map_err(|_| invalid)?;
    }
    Ok(assignment)
}
