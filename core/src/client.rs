//! Synchronous pet-store client with response and entity bookkeeping.
//!
//! # Design
//! Each operation is a single HTTP call through the injected executor,
//! followed by bookkeeping: the response is recorded, creation calls track
//! the new entity on a 200, and every completed call logs a timing sample.
//! The client is constructed explicitly and the executor injected, so tests
//! drive the bookkeeping with scripted responses and production code uses
//! [`UreqExecutor`](crate::executor::UreqExecutor).
//!
//! Non-2xx statuses are returned as data; only transport failures and
//! payload serialization problems surface as `ApiError`.

use std::time::Instant;

use crate::error::ApiError;
use crate::executor::HttpExecutor;
use crate::handler::{Handled, HandlerKind};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::perf::{PerfLog, PerfStats};
use crate::recorder::{LastResult, ResponseRecorder};
use crate::tracker::{EntityId, EntityKind, EntityTracker, TrackedEntity};
use crate::types::{Pet, User};

/// Payload for [`PetstoreClient::create_by_kind`].
#[derive(Debug, Clone)]
pub enum CreatePayload {
    User(User),
    Pet(Pet),
}

/// Synchronous client for the pet-store API.
#[derive(Debug)]
pub struct PetstoreClient<E: HttpExecutor> {
    base_url: String,
    executor: E,
    recorder: ResponseRecorder,
    tracker: EntityTracker,
    perf: PerfLog,
}

impl<E: HttpExecutor> PetstoreClient<E> {
    pub fn new(base_url: &str, executor: E) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            executor,
            recorder: ResponseRecorder::new(),
            tracker: EntityTracker::new(),
            perf: PerfLog::new(),
        }
    }

    // --- user operations ---

    /// `POST /user`. Tracks `(user, username)` when the server reports 200.
    pub fn create_user(&mut self, user: &User) -> Result<HttpResponse, ApiError> {
        let request = HttpRequest::json(HttpMethod::Post, self.url("/user"), encode(user)?);
        let response = self.call("create_user", request)?;
        if response.status == 200 {
            self.tracker
                .track(EntityKind::User, EntityId::Name(user.username.clone()));
        }
        Ok(response)
    }

    /// `GET /user/{username}`.
    pub fn get_user(&mut self, username: &str) -> Result<HttpResponse, ApiError> {
        let request = HttpRequest::new(HttpMethod::Get, self.url(&format!("/user/{username}")));
        self.call("get_user", request)
    }

    /// `GET /user/login?username=&password=`.
    pub fn login_user(&mut self, username: &str, password: &str) -> Result<HttpResponse, ApiError> {
        let mut request = HttpRequest::new(HttpMethod::Get, self.url("/user/login"));
        request.query = vec![
            ("username".to_string(), username.to_string()),
            ("password".to_string(), password.to_string()),
        ];
        self.call("login_user", request)
    }

    /// `PUT /user/{username}`.
    pub fn update_user(&mut self, username: &str, user: &User) -> Result<HttpResponse, ApiError> {
        let request = HttpRequest::json(
            HttpMethod::Put,
            self.url(&format!("/user/{username}")),
            encode(user)?,
        );
        self.call("update_user", request)
    }

    /// `DELETE /user/{username}`.
    pub fn delete_user(&mut self, username: &str) -> Result<HttpResponse, ApiError> {
        let request = HttpRequest::new(HttpMethod::Delete, self.url(&format!("/user/{username}")));
        self.call("delete_user", request)
    }

    // --- pet operations ---

    /// `POST /pet`. Tracks `(pet, id)` when the server reports 200.
    pub fn create_pet(&mut self, pet: &Pet) -> Result<HttpResponse, ApiError> {
        let request = HttpRequest::json(HttpMethod::Post, self.url("/pet"), encode(pet)?);
        let response = self.call("create_pet", request)?;
        if response.status == 200 {
            self.tracker.track(EntityKind::Pet, EntityId::Number(pet.id));
        }
        Ok(response)
    }

    /// `GET /pet/{id}`.
    pub fn get_pet(&mut self, pet_id: i64) -> Result<HttpResponse, ApiError> {
        let request = HttpRequest::new(HttpMethod::Get, self.url(&format!("/pet/{pet_id}")));
        self.call("get_pet", request)
    }

    /// `GET /pet/findByStatus?status=`.
    pub fn find_pets_by_status(&mut self, status: &str) -> Result<HttpResponse, ApiError> {
        let mut request = HttpRequest::new(HttpMethod::Get, self.url("/pet/findByStatus"));
        request.query = vec![("status".to_string(), status.to_string())];
        self.call("find_pets_by_status", request)
    }

    /// `DELETE /pet/{id}`.
    pub fn delete_pet(&mut self, pet_id: i64) -> Result<HttpResponse, ApiError> {
        let request = HttpRequest::new(HttpMethod::Delete, self.url(&format!("/pet/{pet_id}")));
        self.call("delete_pet", request)
    }

    /// Dispatch a creation call by payload kind.
    pub fn create_by_kind(&mut self, payload: &CreatePayload) -> Result<HttpResponse, ApiError> {
        match payload {
            CreatePayload::User(user) => self.create_user(user),
            CreatePayload::Pet(pet) => self.create_pet(pet),
        }
    }

    // --- bookkeeping surface ---

    /// The outcome of the most recent call, or `None` before the first.
    pub fn last_result(&self) -> Option<&LastResult> {
        self.recorder.last()
    }

    /// The parsed JSON of the most recent response, if it parsed.
    pub fn last_json(&self) -> Option<&serde_json::Value> {
        self.recorder.last().and_then(|last| last.parsed.as_ref())
    }

    /// Check the most recent status code against `expected`.
    pub fn assert_status(&self, expected: u16) -> Result<(), ApiError> {
        self.recorder.assert_status(expected)
    }

    /// Run the handler selected by `tag` over the most recent response.
    pub fn handle_last(&self, tag: &str) -> Result<Handled, ApiError> {
        let last = self.recorder.last().ok_or(ApiError::NoResponseRecorded)?;
        let response = HttpResponse {
            status: last.status,
            body: last.raw_body.clone(),
        };
        Ok(HandlerKind::from_tag(tag).handle(&response))
    }

    /// Number of calls issued through this client.
    pub fn request_count(&self) -> u64 {
        self.recorder.request_count()
    }

    /// Entities created during this session and not yet cleaned up.
    pub fn tracked(&self) -> &[TrackedEntity] {
        self.tracker.entities()
    }

    /// Timing summary over all completed calls.
    pub fn perf_stats(&self) -> Option<PerfStats> {
        self.perf.stats()
    }

    /// Delete every tracked entity, then clear the tracked list.
    ///
    /// Deletion failures are logged and do not stop the pass; the list is
    /// empty afterward regardless.
    pub fn cleanup_created(&mut self) {
        let started = Instant::now();
        // Take the tracker out so its cleanup callback can borrow the client.
        let mut tracker = std::mem::take(&mut self.tracker);
        tracker.cleanup_all(|entity| {
            // `DELETE /user/{username}` and `DELETE /pet/{id}` share a shape.
            let path = format!("/{}/{}", entity.kind, entity.id);
            let request = HttpRequest::new(HttpMethod::Delete, self.url(&path));
            self.call("cleanup_delete", request).map(|_| ())
        });
        self.perf.record("cleanup", started);
    }

    /// Run `f` with this client, then clean up created entities before
    /// returning its value. Covers early returns via `Result`-valued closures.
    pub fn with_scope<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        let out = f(self);
        self.cleanup_created();
        out
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.base_url)
    }

    fn call(
        &mut self,
        operation: &'static str,
        request: HttpRequest,
    ) -> Result<HttpResponse, ApiError> {
        let started = Instant::now();
        let response = self.executor.execute(&request)?;
        self.recorder.record(&response);
        self.perf.record(operation, started);
        Ok(response)
    }
}

fn encode<T: serde::Serialize>(payload: &T) -> Result<String, ApiError> {
    serde_json::to_string(payload).map_err(|e| ApiError::Serialization(e.to_string()))
}
