pub mod planner;

pub use planner::{plan, Reply};
