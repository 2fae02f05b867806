//! Core domain value types shared by the evaluator, the filter and the services.

pub mod domain;

pub use domain::*;
