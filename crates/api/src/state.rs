/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Built once in `main` and cloned per request; the clone is cheap.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: todo_db::DbPool,
}
