//! Ramify is a generic, reusable constraint satisfaction problem (CSP)
//! solver.
//!
//! The engine is problem-agnostic: you describe a problem as variables with
//! finite domains plus constraints over them, and the engine finds an
//! assignment satisfying every constraint via depth-first backtracking
//! search, or proves that none exists.
//!
//! # Core Concepts
//!
//! - **[`Variable`]**: an ordered finite domain of candidate values plus a
//!   description for diagnostics.
//! - **[`Constraint`]**: a trait representing a rule over a scope of
//!   variables, with a complete-assignment check (`satisfied`) and a
//!   partial-assignment check (`consistent`). The crate ships
//!   [`AllDifferentConstraint`] and [`NotEqualConstraint`].
//! - **[`Assignment`]**: a persistent partial assignment; each node of the
//!   search tree is its own isolated `Assignment`.
//! - **[`Problem`]**: the validated, immutable aggregate of variables and
//!   constraints, with an injectable propagation policy.
//! - **[`SolverEngine`]**: the backtracking search, parameterized by
//!   variable-selection and value-ordering heuristics.
//!
//! # Example: A Simple 2-Variable Problem
//!
//! Solving `?a != ?b` where `?a` can be `1` or `2` and `?b` only `1`: the
//! solver must conclude that `?a` is `2`.
//!
//! ```
//! use ramify::solver::assignment::Assignment;
//! use ramify::solver::constraint::Constraint;
//! use ramify::solver::constraints::not_equal::NotEqualConstraint;
//! use ramify::solver::engine::solve;
//! use ramify::solver::problem::Problem;
//! use ramify::solver::variable::Variable;
//!
//! let variables = vec![
//!     Variable::new("a", [1, 2]),
//!     Variable::new("b", [1]),
//! ];
//! let constraints: Vec<Box<dyn Constraint<i64>>> =
//!     vec![Box::new(NotEqualConstraint::new(0, 1))];
//!
//! let problem = Problem::new(variables, constraints).unwrap();
//! let solution = solve(&problem, Assignment::blank()).unwrap();
//!
//! assert_eq!(solution.value(0), Some(&2));
//! assert_eq!(solution.value(1), Some(&1));
//! ```
//!
//! [`Variable`]: crate::solver::variable::Variable
//! [`Constraint`]: crate::solver::constraint::Constraint
//! [`AllDifferentConstraint`]: crate::solver::constraints::all_different::AllDifferentConstraint
//! [`NotEqualConstraint`]: crate::solver::constraints::not_equal::NotEqualConstraint
//! [`Assignment`]: crate::solver::assignment::Assignment
//! [`Problem`]: crate::solver::problem::Problem
//! [`SolverEngine`]: crate::solver::engine::SolverEngine

pub mod error;
pub mod examples;
pub mod solver;
