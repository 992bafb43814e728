//! Terminal presentation of plans, outcomes and package records

pub mod display;

pub use display::{print_outcome, print_plan, print_records, print_removed};
