//! Foundational value objects: application input, product codes, and
//! the appraisal result.

pub mod application;
pub mod product;
pub mod result;
