pub mod customer;
pub mod diagnostic;

pub use customer::{CustomerResponse, MessageResponse, SearchParams, SeedResponse};
pub use diagnostic::{
    BackendStatus, ConfigPresence, ConnectionStatus, DatabaseStatus, DiagnosticResponse,
};
