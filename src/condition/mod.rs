//! Audience condition trees and their evaluation
//!
//! A tree of AND/OR/NOT composites over leaf attribute predicates is
//! evaluated against runtime attributes with three-valued logic, so missing
//! or mistyped data yields `Unknown` instead of a forced true/false.

mod ast;
pub mod cache;
mod evaluator;
mod tribool;
mod validate;


pub use ast::*;
pub use cache::*;
pub use evaluator::*;
pub use tribool::*;
