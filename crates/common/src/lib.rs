pub mod error;
pub mod types;

pub use error::{LeadError, LeadResult};
pub use types::ServiceInfo;
