use std::cmp::Ordering;
use std::sync::atomic::AtomicI64;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::Authenticator;
use auth::TokenPolicy;
use chrono::Duration;
use chrono::Utc;
use tempfile::TempDir;
use trip_service::domain::auth::service::AuthService;
use trip_service::domain::listing::Filter;
use trip_service::domain::listing::FilterValue;
use trip_service::domain::listing::ListQuery;
use trip_service::domain::listing::PageRequest;
use trip_service::domain::listing::SortDirection;
use trip_service::domain::photo::service::PhotoService;
use trip_service::domain::place::errors::PlaceError;
use trip_service::domain::place::models::CreatePlace;
use trip_service::domain::place::models::Place;
use trip_service::domain::place::models::PlaceId;
use trip_service::domain::place::models::UpdatePlace;
use trip_service::domain::place::ports::PlaceRepository;
use trip_service::domain::place::service::PlaceService;
use trip_service::domain::task::errors::TaskError;
use trip_service::domain::task::models::CreateTask;
use trip_service::domain::task::models::Task;
use trip_service::domain::task::models::TaskId;
use trip_service::domain::task::models::UpdateTask;
use trip_service::domain::task::ports::TaskRepository;
use trip_service::domain::task::service::TaskService;
use trip_service::domain::user::errors::UserError;
use trip_service::domain::user::models::NewUser;
use trip_service::domain::user::models::User;
use trip_service::domain::user::models::UserId;
use trip_service::domain::user::ports::UserRepository;
use trip_service::inbound::http::router::create_router;
use trip_service::inbound::http::router::AppState;
use trip_service::outbound::storage::FsPhotoStorage;

pub const MAX_UPLOAD_SIZE: u64 = 5 * 1024 * 1024;

/// Test application that spawns the real router on a random port.
///
/// In-memory repositories and a temporary upload directory stand in for
/// Postgres and the uploads folder, so the suite runs without external
/// services.
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub users: Arc<InMemoryUserRepository>,
    _upload_dir: TempDir,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        let upload_dir = tempfile::tempdir().expect("Failed to create upload dir");

        let authenticator = Arc::new(Authenticator::new(
            TokenPolicy {
                secret: b"test-access-secret-for-jwt-32-bytes!!",
                ttl: Duration::minutes(15),
            },
            TokenPolicy {
                secret: b"test-refresh-secret-for-jwt-32-bytes!",
                ttl: Duration::days(7),
            },
            // Keep hashing cheap in tests
            Some(1),
        ));

        let users = Arc::new(InMemoryUserRepository::default());
        let places = Arc::new(InMemoryPlaceRepository::default());
        let tasks = Arc::new(InMemoryTaskRepository::default());
        let storage =
            Arc::new(FsPhotoStorage::new(upload_dir.path()).expect("Failed to open storage"));

        let photo_service = Arc::new(PhotoService::new(storage, MAX_UPLOAD_SIZE));
        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&users),
            Arc::clone(&authenticator),
        ));
        let place_service = Arc::new(PlaceService::new(places, Arc::clone(&photo_service)));
        let task_service = Arc::new(TaskService::new(tasks));

        let state = AppState {
            auth_service,
            place_service,
            task_service,
            photo_service,
            authenticator,
        };

        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let router = create_router(state, MAX_UPLOAD_SIZE as usize);
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            users,
            _upload_dir: upload_dir,
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make PUT request
    pub fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.put(format!("{}{}", self.address, path))
    }

    /// Helper to make DELETE request
    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.delete(format!("{}{}", self.address, path))
    }

    /// Register a user and return (access_token, refresh_token).
    pub async fn register(&self, email: &str, password: &str) -> (String, String) {
        let response = self
            .post("/auth/register")
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        (
            body["data"]["access_token"].as_str().unwrap().to_string(),
            body["data"]["refresh_token"].as_str().unwrap().to_string(),
        )
    }

    /// Clear a user's stored refresh token, simulating server-side
    /// revocation.
    pub fn revoke_refresh_token(&self, email: &str) {
        self.users.clear_refresh_token(email);
    }
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
    next_id: AtomicI64,
}

impl InMemoryUserRepository {
    pub fn clear_refresh_token(&self, email: &str) {
        let mut users = self.users.lock().unwrap();
        if let Some(user) = users.iter_mut().find(|u| u.email.as_str() == email) {
            user.refresh_token = None;
        }
    }

    fn next_id(&self) -> i64 {
        self.next_id
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst)
            + 1
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(UserError::EmailAlreadyExists(
                user.email.as_str().to_string(),
            ));
        }

        let user = User {
            id: UserId(self.next_id()),
            email: user.email,
            hashed_password: user.hashed_password,
            refresh_token: None,
            created_at: Utc::now(),
        };
        users.push(user.clone());

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email.as_str() == email).cloned())
    }

    async fn find_by_refresh_token(
        &self,
        refresh_token: &str,
    ) -> Result<Option<User>, UserError> {
        let users = self.users.lock().unwrap();
        Ok(users
            .iter()
            .find(|u| u.refresh_token.as_deref() == Some(refresh_token))
            .cloned())
    }

    async fn set_refresh_token(
        &self,
        id: UserId,
        refresh_token: Option<&str>,
    ) -> Result<(), UserError> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| UserError::NotFound(id.to_string()))?;

        user.refresh_token = refresh_token.map(str::to_string);
        Ok(())
    }
}

fn place_matches(place: &Place, filter: &Filter) -> bool {
    match (filter.field, &filter.value) {
        ("id", FilterValue::Integer(value)) => place.id.0 == *value,
        ("name", FilterValue::Text(value)) => &place.name == value,
        ("description", FilterValue::Text(value)) => {
            place.description.as_deref() == Some(value.as_str())
        }
        ("image_url", FilterValue::Text(value)) => {
            place.image_url.as_deref() == Some(value.as_str())
        }
        ("owner_email", FilterValue::Text(value)) => &place.owner_email == value,
        _ => true,
    }
}

fn place_compare(a: &Place, b: &Place, field: &str) -> Ordering {
    match field {
        "id" => a.id.0.cmp(&b.id.0),
        "name" => a.name.cmp(&b.name),
        "description" => a.description.cmp(&b.description),
        "image_url" => a.image_url.cmp(&b.image_url),
        "owner_email" => a.owner_email.cmp(&b.owner_email),
        _ => Ordering::Equal,
    }
}

#[derive(Default)]
pub struct InMemoryPlaceRepository {
    places: Mutex<Vec<Place>>,
    next_id: AtomicI64,
}

impl InMemoryPlaceRepository {
    fn filtered(&self, owner_email: &str, query: &ListQuery) -> Vec<Place> {
        let places = self.places.lock().unwrap();
        let mut results: Vec<Place> = places
            .iter()
            .filter(|p| p.owner_email == owner_email)
            .filter(|p| query.filters.iter().all(|f| place_matches(p, f)))
            .cloned()
            .collect();

        if let Some(sort) = query.sort {
            results.sort_by(|a, b| {
                let ordering = place_compare(a, b, sort.field);
                match sort.direction {
                    SortDirection::Asc => ordering,
                    SortDirection::Desc => ordering.reverse(),
                }
            });
        }

        results
    }
}

#[async_trait]
impl PlaceRepository for InMemoryPlaceRepository {
    async fn create(&self, owner_email: &str, data: CreatePlace) -> Result<Place, PlaceError> {
        let mut places = self.places.lock().unwrap();
        let id = self
            .next_id
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst)
            + 1;

        let place = Place {
            id: PlaceId(id),
            name: data.name,
            description: data.description,
            image_url: data.image_url,
            is_favourite: data.is_favourite,
            owner_email: owner_email.to_string(),
        };
        places.push(place.clone());

        Ok(place)
    }

    async fn find_by_id(&self, id: PlaceId) -> Result<Option<Place>, PlaceError> {
        let places = self.places.lock().unwrap();
        Ok(places.iter().find(|p| p.id == id).cloned())
    }

    async fn find_many(
        &self,
        owner_email: &str,
        query: &ListQuery,
        page: PageRequest,
    ) -> Result<Vec<Place>, PlaceError> {
        Ok(self
            .filtered(owner_email, query)
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect())
    }

    async fn count(&self, owner_email: &str, query: &ListQuery) -> Result<i64, PlaceError> {
        Ok(self.filtered(owner_email, query).len() as i64)
    }

    async fn update(&self, id: PlaceId, data: UpdatePlace) -> Result<Place, PlaceError> {
        let mut places = self.places.lock().unwrap();
        let place = places
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(PlaceError::NotFound(id))?;

        if let Some(name) = data.name {
            place.name = name;
        }
        if let Some(description) = data.description {
            place.description = Some(description);
        }
        if let Some(image_url) = data.image_url {
            place.image_url = Some(image_url);
        }
        if let Some(is_favourite) = data.is_favourite {
            place.is_favourite = is_favourite;
        }

        Ok(place.clone())
    }

    async fn delete(&self, id: PlaceId) -> Result<(), PlaceError> {
        let mut places = self.places.lock().unwrap();
        let before = places.len();
        places.retain(|p| p.id != id);

        if places.len() == before {
            return Err(PlaceError::NotFound(id));
        }

        Ok(())
    }
}

fn task_matches(task: &Task, filter: &Filter) -> bool {
    match (filter.field, &filter.value) {
        ("id", FilterValue::Integer(value)) => task.id.0 == *value,
        ("content", FilterValue::Text(value)) => &task.content == value,
        ("done", FilterValue::Boolean(value)) => task.done == *value,
        ("owner_email", FilterValue::Text(value)) => &task.owner_email == value,
        _ => true,
    }
}

fn task_compare(a: &Task, b: &Task, field: &str) -> Ordering {
    match field {
        "id" => a.id.0.cmp(&b.id.0),
        "content" => a.content.cmp(&b.content),
        "done" => a.done.cmp(&b.done),
        "owner_email" => a.owner_email.cmp(&b.owner_email),
        _ => Ordering::Equal,
    }
}

#[derive(Default)]
pub struct InMemoryTaskRepository {
    tasks: Mutex<Vec<Task>>,
    next_id: AtomicI64,
}

impl InMemoryTaskRepository {
    fn filtered(&self, owner_email: &str, query: &ListQuery) -> Vec<Task> {
        let tasks = self.tasks.lock().unwrap();
        let mut results: Vec<Task> = tasks
            .iter()
            .filter(|t| t.owner_email == owner_email)
            .filter(|t| query.filters.iter().all(|f| task_matches(t, f)))
            .cloned()
            .collect();

        if let Some(sort) = query.sort {
            results.sort_by(|a, b| {
                let ordering = task_compare(a, b, sort.field);
                match sort.direction {
                    SortDirection::Asc => ordering,
                    SortDirection::Desc => ordering.reverse(),
                }
            });
        }

        results
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn create(&self, owner_email: &str, data: CreateTask) -> Result<Task, TaskError> {
        let mut tasks = self.tasks.lock().unwrap();
        let id = self
            .next_id
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst)
            + 1;

        let task = Task {
            id: TaskId(id),
            content: data.content,
            done: data.done,
            owner_email: owner_email.to_string(),
        };
        tasks.push(task.clone());

        Ok(task)
    }

    async fn find_by_id(&self, id: TaskId) -> Result<Option<Task>, TaskError> {
        let tasks = self.tasks.lock().unwrap();
        Ok(tasks.iter().find(|t| t.id == id).cloned())
    }

    async fn find_many(
        &self,
        owner_email: &str,
        query: &ListQuery,
        page: PageRequest,
    ) -> Result<Vec<Task>, TaskError> {
        Ok(self
            .filtered(owner_email, query)
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect())
    }

    async fn count(&self, owner_email: &str, query: &ListQuery) -> Result<i64, TaskError> {
        Ok(self.filtered(owner_email, query).len() as i64)
    }

    async fn update(&self, id: TaskId, data: UpdateTask) -> Result<Task, TaskError> {
        let mut tasks = self.tasks.lock().unwrap();
        let task = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TaskError::NotFound(id))?;

        if let Some(content) = data.content {
            task.content = content;
        }
        if let Some(done) = data.done {
            task.done = done;
        }

        Ok(task.clone())
    }

    async fn delete(&self, id: TaskId) -> Result<(), TaskError> {
        let mut tasks = self.tasks.lock().unwrap();
        let before = tasks.len();
        tasks.retain(|t| t.id != id);

        if tasks.len() == before {
            return Err(TaskError::NotFound(id));
        }

        Ok(())
    }
}
