//! API Module
//!
//! HTTP handlers and routing for the advocate listing API.
//!
//! # Endpoints
//! - `GET /api/advocates` - Filtered, paginated advocate listing
//! - `POST /api/advocates/revalidate` - Drop all cached listings
//! - `GET /stats` - Listing cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
