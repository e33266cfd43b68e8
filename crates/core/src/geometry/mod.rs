pub mod quadrant;
pub mod quadrant_plan;
