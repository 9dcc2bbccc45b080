pub mod session;
pub mod tokens;
