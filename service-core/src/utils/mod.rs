pub mod validation;

pub use validation::ValidatedQuery;
