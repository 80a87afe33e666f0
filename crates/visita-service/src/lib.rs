//! # visita-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    CheckInRequest, CheckInResponse, CreateReviewRequest, CurrentUserResponse, HealthResponse,
    LikeResponse, PaginatedResponse, PlaceResponse, RatingResponse, ReadinessResponse,
    ReviewResponse, ReviewWithRatingResponse, UpdateReviewRequest,
};
pub use services::{
    CheckinService, PlaceService, ReviewService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult, UserService,
};
