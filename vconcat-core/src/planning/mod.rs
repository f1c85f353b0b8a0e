//! Concatenation planning: strategy selection and filtergraph synthesis.

pub mod filtergraph;
pub mod planner;

pub use filtergraph::{FilterGraph, concat_stage, segment_filters};
pub use planner::{ConcatPlan, EncodeParams, PlanOptions, Strategy, plan_concat};
