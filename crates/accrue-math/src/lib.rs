//! # Accrue Math
//!
//! Numerical utilities for the Accrue calculation engine.
//!
//! This crate provides the root-finding machinery behind the yield
//! calculations: a derivative-free Newton-Raphson solver with
//! configurable tolerance and iteration budget, plus the structured
//! error type distinguishing a degenerate derivative from an exhausted
//! iteration budget.
//!
//! ## Example
//!
//! ```rust
//! use accrue_math::solvers::{newton_forward, SolverConfig};
//!
//! let f = |x: f64| x * x - 2.0;
//! let result = newton_forward(f, 1.5, 1e-5, &SolverConfig::default()).unwrap();
//! assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-5);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

pub mod error;
pub mod solvers;

pub use error::{MathError, MathResult};
pub use solvers::{newton_forward, SolverConfig, SolverResult};
