//! Portfolio allocation by investment type.

mod allocation_calculator;
mod allocation_model;
mod ordered_groups;

pub use allocation_calculator::*;
pub use allocation_model::*;
pub use ordered_groups::OrderedGroups;
