//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework, SeaORM for database operations and
//! `tower-sessions` for cookie sessions backed by the same SQLite database.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business rules, transactions, checkout and the order lifecycle
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session wrappers and authentication guards
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database pool)
//! - **Startup** (`startup`) - Database, migrations, sessions and CORS
//! - **Router** (`router`) - Axum route configuration and OpenAPI documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Middleware** resolves the session user and checks permissions
//! 3. **Controller** converts DTOs to params, calls service
//! 4. **Service** executes business logic, orchestrates data operations
//! 5. **Data** queries database, converts entities to domain models
//! 6. **Controller** converts domain model to DTO, returns HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
