use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::QueryBuilder;

use super::push_order_and_page;
use super::push_where;
use crate::domain::listing::ListQuery;
use crate::domain::listing::PageRequest;
use crate::domain::task::errors::TaskError;
use crate::domain::task::models::CreateTask;
use crate::domain::task::models::Task;
use crate::domain::task::models::TaskId;
use crate::domain::task::models::UpdateTask;
use crate::domain::task::ports::TaskRepository;

const TASK_COLUMNS: &str = "id, content, done, owner_email";

#[derive(sqlx::FromRow)]
struct TaskRow {
    id: i64,
    content: String,
    done: bool,
    owner_email: String,
}

impl From<TaskRow> for Task {
    fn from(row: TaskRow) -> Self {
        Task {
            id: TaskId(row.id),
            content: row.content,
            done: row.done,
            owner_email: row.owner_email,
        }
    }
}

pub struct PostgresTaskRepository {
    pool: PgPool,
}

impl PostgresTaskRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn create(&self, owner_email: &str, data: CreateTask) -> Result<Task, TaskError> {
        sqlx::query_as::<_, TaskRow>(&format!(
            r#"
            INSERT INTO tasks (content, done, owner_email)
            VALUES ($1, $2, $3)
            RETURNING {}
            "#,
            TASK_COLUMNS
        ))
        .bind(&data.content)
        .bind(data.done)
        .bind(owner_email)
        .fetch_one(&self.pool)
        .await
        .map(Task::from)
        .map_err(|e| TaskError::DatabaseError(e.to_string()))
    }

    async fn find_by_id(&self, id: TaskId) -> Result<Option<Task>, TaskError> {
        sqlx::query_as::<_, TaskRow>(&format!(
            "SELECT {} FROM tasks WHERE id = $1",
            TASK_COLUMNS
        ))
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map(|row| row.map(Task::from))
        .map_err(|e| TaskError::DatabaseError(e.to_string()))
    }

    async fn find_many(
        &self,
        owner_email: &str,
        query: &ListQuery,
        page: PageRequest,
    ) -> Result<Vec<Task>, TaskError> {
        let mut builder = QueryBuilder::new(format!("SELECT {} FROM tasks", TASK_COLUMNS));
        push_where(&mut builder, owner_email, query);
        push_order_and_page(&mut builder, query, page);

        builder
            .build_query_as::<TaskRow>()
            .fetch_all(&self.pool)
            .await
            .map(|rows| rows.into_iter().map(Task::from).collect())
            .map_err(|e| TaskError::DatabaseError(e.to_string()))
    }

    async fn count(&self, owner_email: &str, query: &ListQuery) -> Result<i64, TaskError> {
        let mut builder = QueryBuilder::new("SELECT COUNT(*) FROM tasks");
        push_where(&mut builder, owner_email, query);

        builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| TaskError::DatabaseError(e.to_string()))
    }

    async fn update(&self, id: TaskId, data: UpdateTask) -> Result<Task, TaskError> {
        sqlx::query_as::<_, TaskRow>(&format!(
            r#"
            UPDATE tasks
            SET content = COALESCE($2, content),
                done = COALESCE($3, done)
            WHERE id = $1
            RETURNING {}
            "#,
            TASK_COLUMNS
        ))
        .bind(id.0)
        .bind(&data.content)
        .bind(data.done)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| TaskError::DatabaseError(e.to_string()))?
        .map(Task::from)
        .ok_or(TaskError::NotFound(id))
    }

    async fn delete(&self, id: TaskId) -> Result<(), TaskError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| TaskError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(TaskError::NotFound(id));
        }

        Ok(())
    }
}
