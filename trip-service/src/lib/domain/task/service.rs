use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::listing::ListQuery;
use crate::domain::listing::Page;
use crate::domain::listing::PageRequest;
use crate::domain::task::errors::TaskError;
use crate::domain::task::models::CreateTask;
use crate::domain::task::models::Task;
use crate::domain::task::models::TaskId;
use crate::domain::task::models::UpdateTask;
use crate::domain::task::ports::TaskRepository;
use crate::domain::task::ports::TaskServicePort;
use crate::domain::user::models::EmailAddress;

/// Domain service implementation for task operations.
pub struct TaskService<TR>
where
    TR: TaskRepository,
{
    tasks: Arc<TR>,
}

impl<TR> TaskService<TR>
where
    TR: TaskRepository,
{
    pub fn new(tasks: Arc<TR>) -> Self {
        Self { tasks }
    }

    /// Existence before ownership, same contract as places.
    async fn find_owned(&self, owner: &EmailAddress, id: TaskId) -> Result<Task, TaskError> {
        let task = self
            .tasks
            .find_by_id(id)
            .await?
            .ok_or(TaskError::NotFound(id))?;

        if task.owner_email != owner.as_str() {
            return Err(TaskError::Forbidden(id));
        }

        Ok(task)
    }
}

#[async_trait]
impl<TR> TaskServicePort for TaskService<TR>
where
    TR: TaskRepository,
{
    async fn list(
        &self,
        owner: &EmailAddress,
        query: ListQuery,
        page: PageRequest,
    ) -> Result<Page<Task>, TaskError> {
        let total = self.tasks.count(owner.as_str(), &query).await?;
        let results = self.tasks.find_many(owner.as_str(), &query, page).await?;

        Ok(Page {
            total,
            page: page.page,
            per_page: page.per_page,
            results,
        })
    }

    async fn get(&self, owner: &EmailAddress, id: TaskId) -> Result<Task, TaskError> {
        self.find_owned(owner, id).await
    }

    async fn create(&self, owner: &EmailAddress, data: CreateTask) -> Result<Task, TaskError> {
        self.tasks.create(owner.as_str(), data).await
    }

    async fn update(
        &self,
        owner: &EmailAddress,
        id: TaskId,
        data: UpdateTask,
    ) -> Result<Task, TaskError> {
        self.find_owned(owner, id).await?;

        self.tasks.update(id, data).await
    }

    async fn delete(&self, owner: &EmailAddress, id: TaskId) -> Result<(), TaskError> {
        self.find_owned(owner, id).await?;

        self.tasks.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;

    mock! {
        pub TestTaskRepository {}

        #[async_trait]
        impl TaskRepository for TestTaskRepository {
            async fn create(&self, owner_email: &str, data: CreateTask) -> Result<Task, TaskError>;
            async fn find_by_id(&self, id: TaskId) -> Result<Option<Task>, TaskError>;
            async fn find_many(&self, owner_email: &str, query: &ListQuery, page: PageRequest) -> Result<Vec<Task>, TaskError>;
            async fn count(&self, owner_email: &str, query: &ListQuery) -> Result<i64, TaskError>;
            async fn update(&self, id: TaskId, data: UpdateTask) -> Result<Task, TaskError>;
            async fn delete(&self, id: TaskId) -> Result<(), TaskError>;
        }
    }

    fn owner() -> EmailAddress {
        EmailAddress::new("alice@example.com".to_string()).unwrap()
    }

    fn task_owned_by(email: &str) -> Task {
        Task {
            id: TaskId(1),
            content: "buy milk".to_string(),
            done: false,
            owner_email: email.to_string(),
        }
    }

    #[tokio::test]
    async fn test_get_foreign_task_is_forbidden() {
        let mut tasks = MockTestTaskRepository::new();
        tasks
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(task_owned_by("bob@example.com"))));

        let service = TaskService::new(Arc::new(tasks));

        let result = service.get(&owner(), TaskId(1)).await;
        assert!(matches!(result, Err(TaskError::Forbidden(_))));
    }

    #[tokio::test]
    async fn test_get_missing_task_is_not_found() {
        let mut tasks = MockTestTaskRepository::new();
        tasks.expect_find_by_id().times(1).returning(|_| Ok(None));

        let service = TaskService::new(Arc::new(tasks));

        let result = service.get(&owner(), TaskId(999_999)).await;
        assert!(matches!(result, Err(TaskError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_create_forces_owner() {
        let mut tasks = MockTestTaskRepository::new();
        tasks
            .expect_create()
            .withf(|owner_email, data| owner_email == "alice@example.com" && !data.done)
            .times(1)
            .returning(|owner_email, data| {
                Ok(Task {
                    id: TaskId(1),
                    content: data.content,
                    done: data.done,
                    owner_email: owner_email.to_string(),
                })
            });

        let service = TaskService::new(Arc::new(tasks));

        let task = service
            .create(
                &owner(),
                CreateTask {
                    content: "buy milk".to_string(),
                    done: false,
                },
            )
            .await
            .unwrap();

        assert_eq!(task.owner_email, "alice@example.com");
    }

    #[tokio::test]
    async fn test_update_only_touches_supplied_fields() {
        let mut tasks = MockTestTaskRepository::new();
        tasks
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(task_owned_by("alice@example.com"))));
        tasks
            .expect_update()
            .withf(|id, data| {
                *id == TaskId(1) && data.content.is_none() && data.done == Some(true)
            })
            .times(1)
            .returning(|id, _| {
                Ok(Task {
                    id,
                    content: "buy milk".to_string(),
                    done: true,
                    owner_email: "alice@example.com".to_string(),
                })
            });

        let service = TaskService::new(Arc::new(tasks));

        let task = service
            .update(
                &owner(),
                TaskId(1),
                UpdateTask {
                    content: None,
                    done: Some(true),
                },
            )
            .await
            .unwrap();

        assert!(task.done);
        assert_eq!(task.content, "buy milk");
    }

    #[tokio::test]
    async fn test_delete_foreign_task_is_forbidden() {
        let mut tasks = MockTestTaskRepository::new();
        tasks
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(task_owned_by("bob@example.com"))));
        tasks.expect_delete().times(0);

        let service = TaskService::new(Arc::new(tasks));

        let result = service.delete(&owner(), TaskId(1)).await;
        assert!(matches!(result, Err(TaskError::Forbidden(_))));
    }
}
