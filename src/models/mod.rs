//! Request and Response models for the listing API
//!
//! This module defines the advocate record plus the DTOs used for
//! deserializing query strings and serializing HTTP response bodies.

pub mod advocate;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use advocate::Advocate;
pub use requests::ListingParams;
pub use responses::{
    ErrorResponse, HealthResponse, ListingResult, RevalidateResponse, StatsResponse,
};
