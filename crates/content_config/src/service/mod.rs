pub mod validation;

pub use validation::Validate;
