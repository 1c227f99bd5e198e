use async_trait::async_trait;

use crate::domain::listing::ListQuery;
use crate::domain::listing::Page;
use crate::domain::listing::PageRequest;
use crate::domain::task::errors::TaskError;
use crate::domain::task::models::CreateTask;
use crate::domain::task::models::Task;
use crate::domain::task::models::TaskId;
use crate::domain::task::models::UpdateTask;
use crate::domain::user::models::EmailAddress;

/// Port for task domain operations.
///
/// Same access pattern as places: owner-scoped listing, and
/// existence-before-ownership checks on single-resource operations.
#[async_trait]
pub trait TaskServicePort: Send + Sync + 'static {
    /// List the caller's tasks with filtering, sorting, and pagination.
    async fn list(
        &self,
        owner: &EmailAddress,
        query: ListQuery,
        page: PageRequest,
    ) -> Result<Page<Task>, TaskError>;

    /// Retrieve one task by id.
    ///
    /// # Errors
    /// * `NotFound` - No task with this id exists
    /// * `Forbidden` - The task belongs to another user
    async fn get(&self, owner: &EmailAddress, id: TaskId) -> Result<Task, TaskError>;

    /// Create a task owned by the caller.
    async fn create(&self, owner: &EmailAddress, data: CreateTask) -> Result<Task, TaskError>;

    /// Update the caller's task; only supplied fields change.
    async fn update(
        &self,
        owner: &EmailAddress,
        id: TaskId,
        data: UpdateTask,
    ) -> Result<Task, TaskError>;

    /// Delete the caller's task.
    async fn delete(&self, owner: &EmailAddress, id: TaskId) -> Result<(), TaskError>;
}

/// Persistence operations for tasks.
#[async_trait]
pub trait TaskRepository: Send + Sync + 'static {
    async fn create(&self, owner_email: &str, data: CreateTask) -> Result<Task, TaskError>;

    async fn find_by_id(&self, id: TaskId) -> Result<Option<Task>, TaskError>;

    async fn find_many(
        &self,
        owner_email: &str,
        query: &ListQuery,
        page: PageRequest,
    ) -> Result<Vec<Task>, TaskError>;

    async fn count(&self, owner_email: &str, query: &ListQuery) -> Result<i64, TaskError>;

    async fn update(&self, id: TaskId, data: UpdateTask) -> Result<Task, TaskError>;

    async fn delete(&self, id: TaskId) -> Result<(), TaskError>;
}
