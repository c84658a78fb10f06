//! Service layer

pub mod context;
pub mod error;
pub mod reputation;
pub mod roster;
pub mod showcase;
pub mod staff;

pub use context::ServiceContext;
pub use error::{ServiceError, ServiceResult};
pub use reputation::ReputationService;
pub use roster::RosterService;
pub use showcase::ShowcaseService;
pub use staff::StaffService;
