pub mod envelope;
pub mod filters;
pub mod stats;
