//! In-memory pet-store server for integration tests.
//!
//! Follows the pet-store wire convention: success is 200 for create, get,
//! update and delete alike (never 201/204), unknown resources are 404, and
//! mutation endpoints answer with an `ApiResponse` envelope. Users are keyed
//! by username, pets by numeric id.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub user_status: i32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub photo_urls: Vec<String>,
    pub status: Option<String>,
}

/// Response envelope used by the pet-store mutation endpoints.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApiResponse {
    pub code: i32,
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
}

impl ApiResponse {
    fn ok(message: impl Into<String>) -> Self {
        Self {
            code: 200,
            kind: "unknown".to_string(),
            message: message.into(),
        }
    }
}

#[derive(Deserialize)]
pub struct LoginParams {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct StatusParams {
    pub status: String,
}

#[derive(Debug, Default)]
pub struct Store {
    users: HashMap<String, User>,
    pets: HashMap<i64, Pet>,
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/user", post(create_user))
        .route("/user/login", get(login_user))
        .route(
            "/user/{username}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/pet", post(create_pet))
        .route("/pet/findByStatus", get(find_pets_by_status))
        .route("/pet/{id}", get(get_pet).delete(delete_pet))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn create_user(State(db): State<Db>, Json(user): Json<User>) -> Json<ApiResponse> {
    let message = user.id.to_string();
    db.write().await.users.insert(user.username.clone(), user);
    Json(ApiResponse::ok(message))
}

async fn login_user(
    State(db): State<Db>,
    Query(params): Query<LoginParams>,
) -> Result<Json<ApiResponse>, (StatusCode, Json<ApiResponse>)> {
    let store = db.read().await;
    match store.users.get(&params.username) {
        Some(user) if user.password == params.password => Ok(Json(ApiResponse::ok(format!(
            "logged in user session:{}",
            user.id
        )))),
        _ => Err((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse {
                code: 400,
                kind: "error".to_string(),
                message: "Invalid username/password supplied".to_string(),
            }),
        )),
    }
}

async fn get_user(
    State(db): State<Db>,
    Path(username): Path<String>,
) -> Result<Json<User>, StatusCode> {
    let store = db.read().await;
    store
        .users
        .get(&username)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn update_user(
    State(db): State<Db>,
    Path(username): Path<String>,
    Json(user): Json<User>,
) -> Result<Json<ApiResponse>, StatusCode> {
    let mut store = db.write().await;
    if !store.users.contains_key(&username) {
        return Err(StatusCode::NOT_FOUND);
    }
    let message = user.id.to_string();
    store.users.insert(username, user);
    Ok(Json(ApiResponse::ok(message)))
}

async fn delete_user(
    State(db): State<Db>,
    Path(username): Path<String>,
) -> Result<Json<ApiResponse>, StatusCode> {
    let mut store = db.write().await;
    store
        .users
        .remove(&username)
        .map(|_| Json(ApiResponse::ok(username)))
        .ok_or(StatusCode::NOT_FOUND)
}

async fn create_pet(State(db): State<Db>, Json(pet): Json<Pet>) -> Json<Pet> {
    db.write().await.pets.insert(pet.id, pet.clone());
    Json(pet)
}

async fn get_pet(State(db): State<Db>, Path(id): Path<i64>) -> Result<Json<Pet>, StatusCode> {
    let store = db.read().await;
    store
        .pets
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn find_pets_by_status(
    State(db): State<Db>,
    Query(params): Query<StatusParams>,
) -> Json<Vec<Pet>> {
    let store = db.read().await;
    let pets = store
        .pets
        .values()
        .filter(|pet| pet.status.as_deref() == Some(params.status.as_str()))
        .cloned()
        .collect();
    Json(pets)
}

async fn delete_pet(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse>, StatusCode> {
    let mut store = db.write().await;
    store
        .pets
        .remove(&id)
        .map(|_| Json(ApiResponse::ok(id.to_string())))
        .ok_or(StatusCode::NOT_FOUND)
}
