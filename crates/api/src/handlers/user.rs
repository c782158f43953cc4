//! Handlers for the user resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use sqlx::SqliteConnection;
use todo_core::types::DbId;
use todo_core::user::{validate_name, ENTITY};
use todo_db::models::user::{CreateUser, UpdateUser, User};
use todo_db::repositories::UserRepo;

use crate::error::{AppError, AppResult, During, OperationResult};
use crate::extract::EntityId;
use crate::operation::Operation;
use crate::response::Envelope;
use crate::state::AppState;

/// Load a user or fail with `NotFound`.
pub(crate) async fn find_user(conn: &mut SqliteConnection, id: DbId) -> AppResult<User> {
    UserRepo::find_by_id(conn, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))
}

/// POST /api/user
///
/// `name: ""` is rejected with its own message. A missing or mistyped name
/// fails decoding and gets the generic one.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateUser>, JsonRejection>,
) -> OperationResult<Envelope<User>> {
    let op = Operation::AddUser;
    let Json(input) = payload.during(op)?;
    validate_name(&input.name).during(op)?;

    let mut tx = state.pool.begin().await.during(op)?;
    let result = UserRepo::create(&mut tx, &input).await.map_err(AppError::from);
    let user = todo_db::settle(tx, result).await.during(op)?;

    tracing::info!(user_id = user.id, "User added");
    Ok(Envelope::success(op, user))
}

/// GET /api/users
pub async fn list(State(state): State<AppState>) -> OperationResult<Envelope<Vec<User>>> {
    let op = Operation::ListUsers;
    let mut conn = state.pool.acquire().await.during(op)?;
    let users = UserRepo::list(&mut conn).await.during(op)?;
    Ok(Envelope::success(op, users))
}

/// GET /api/user/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> OperationResult<Envelope<User>> {
    let op = Operation::GetUser;
    let mut conn = state.pool.acquire().await.during(op)?;
    let user = find_user(&mut conn, id).await.during(op)?;
    Ok(Envelope::success(op, user))
}

/// PUT /api/user/{id}
pub async fn update(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    payload: Result<Json<UpdateUser>, JsonRejection>,
) -> OperationResult<Envelope<User>> {
    let op = Operation::UpdateUser;
    let Json(input) = payload.during(op)?;
    if let Some(name) = &input.name {
        validate_name(name).during(op)?;
    }

    let mut tx = state.pool.begin().await.during(op)?;
    let result: AppResult<User> = async {
        let user = find_user(&mut tx, id).await?;
        match &input.name {
            Some(name) => UserRepo::update(&mut tx, id, name)
                .await?
                .ok_or(AppError::not_found(ENTITY, id)),
            None => Ok(user),
        }
    }
    .await;
    let user = todo_db::settle(tx, result).await.during(op)?;

    tracing::info!(user_id = id, "User updated");
    Ok(Envelope::success(op, user))
}

/// DELETE /api/user/{id}
///
/// Tasks the user was assigned to survive; the assignments and the user's
/// comments do not.
pub async fn delete(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> OperationResult<Envelope<()>> {
    let op = Operation::DeleteUser;

    let mut tx = state.pool.begin().await.during(op)?;
    let result: AppResult<()> = async {
        find_user(&mut tx, id).await?;
        UserRepo::delete(&mut tx, id).await?;
        Ok(())
    }
    .await;
    todo_db::settle(tx, result).await.during(op)?;

    tracing::info!(user_id = id, "User deleted");
    Ok(Envelope::ok(op))
}
