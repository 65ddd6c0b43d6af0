//! # College API Library
//!
//! This crate provides a CRUD REST API for college records with:
//! - RESTful HTTP endpoints under `/api/v1/colleges`
//! - PostgreSQL for persistent storage
//! - A uniform success/error response envelope
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: The college entity and repository trait
//! - **Application Layer**: College service and DTOs
//! - **Infrastructure Layer**: Database pool and repository implementations
//! - **Presentation Layer**: HTTP handlers, extractors and middleware
//!
//! ## Module Structure
//!
//! ```text
//! college_api/
//! +-- config/         Configuration management
//! +-- domain/         Domain entities and traits
//! +-- application/    Application services and DTOs
//! +-- infrastructure/ Database and repository implementations
//! +-- presentation/   HTTP routes and middleware
//! +-- shared/         Common utilities (errors)
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
