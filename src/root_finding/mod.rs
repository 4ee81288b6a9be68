pub mod errors;
pub mod newton;
