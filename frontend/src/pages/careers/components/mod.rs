pub mod screening;
pub mod sections;
