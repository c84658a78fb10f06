//! # vitrine-service
//!
//! Business logic layer: showcase aggregation, the reputation feed, the
//! staff roster, and single-member staff lookup. Services depend on the
//! core fetch traits, never on a concrete HTTP client.

pub mod dto;
pub mod services;

pub use dto::{
    ApiResponse, EmbedView, HealthResponse, MessageView, ReadinessResponse, RosterResponse,
    StaffStatus,
};
pub use services::{
    ReputationService, RosterService, ServiceContext, ServiceError, ServiceResult, ShowcaseService,
    StaffService,
};
