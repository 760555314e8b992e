//! Scholar Match Core
//!
//! Core types, traits, and error handling shared by the storage layer,
//! the matcher and the server.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `Role`, `Opportunity`, `Match`
//! - **Core Traits**: `Storage`, `SimilarityScorer`
//! - **Error Handling**: Unified `ScholarError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use scholar_core::types::{CreateUser, Role};
//!
//! let student = CreateUser::new("Bea", "bea@uni.edu", Role::Student)
//!     .with_interests("deep learning");
//! assert!(student.validate().is_ok());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod storage;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{Result, ScholarError};
pub use storage::Storage;
pub use traits::SimilarityScorer;

pub use types::{
    CreateOpportunity, CreateUser, Match, Opportunity, OpportunityId, Role, User, UserId,
};
