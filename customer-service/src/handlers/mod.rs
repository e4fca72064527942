pub mod customers;
pub mod diagnostic;
pub mod health;
pub mod root;

pub use customers::{search_customers, seed_customers};
pub use diagnostic::diagnostics;
pub use health::{health_check, metrics_endpoint, readiness_check};
pub use root::{hello, root};
