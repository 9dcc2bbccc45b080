pub mod detail;
pub mod filters;
pub mod stats;
pub mod table;
