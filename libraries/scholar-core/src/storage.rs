//! Storage trait for users and opportunities

use crate::error::Result;
use crate::types::{CreateOpportunity, CreateUser, Opportunity, Role, User, UserId};
use async_trait::async_trait;

/// Storage context providing access to the data store
///
/// Records are append-only: there are no update or delete operations.
/// Every listing returns records in insertion order.
#[async_trait]
pub trait Storage: Send + Sync {
    // ========================================================================
    // Users
    // ========================================================================

    /// Create a user
    ///
    /// # Errors
    /// `InvalidInput` when name or email is empty, `Duplicate` when the
    /// email is already registered.
    async fn create_user(&self, user: CreateUser) -> Result<User>;

    /// Get user by ID
    async fn get_user(&self, id: UserId) -> Result<Option<User>>;

    /// Get all users
    async fn get_all_users(&self) -> Result<Vec<User>>;

    /// Get all users holding `role`
    async fn get_users_by_role(&self, role: Role) -> Result<Vec<User>>;

    // ========================================================================
    // Opportunities
    // ========================================================================

    /// Create an opportunity owned by an academic
    ///
    /// # Errors
    /// `InvalidReference` when `academic_id` is unknown or not an academic.
    async fn create_opportunity(&self, opportunity: CreateOpportunity) -> Result<Opportunity>;

    /// Get all opportunities
    async fn get_all_opportunities(&self) -> Result<Vec<Opportunity>>;

    /// Get the opportunities owned by one academic
    async fn get_opportunities_by_academic(&self, academic_id: UserId) -> Result<Vec<Opportunity>>;

    /// Convenience alias for `get_users_by_role(Role::Student)`
    async fn get_students(&self) -> Result<Vec<User>> {
        self.get_users_by_role(Role::Student).await
    }
}
