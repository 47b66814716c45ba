//! Everything the investments dashboard shows, computed from one snapshot.

mod overview_model;

pub use overview_model::*;
