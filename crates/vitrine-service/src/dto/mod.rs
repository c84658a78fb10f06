//! Data transfer objects

pub mod mappers;
pub mod responses;

pub use responses::{
    ApiResponse, AuthorLineView, EmbedFieldView, EmbedView, FieldGroupView, FooterLineView,
    HealthResponse, MessageView, ReadinessResponse, RosterResponse, StaffStatus,
};
