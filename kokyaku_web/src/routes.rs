use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use kokyaku::domain::{
    customer::{Customer, CustomerDraft, CustomerRepository},
    Entity,
};
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;

use crate::{error::ApiError, openapi};

/// ハンドラ間で共有するリポジトリ
///
/// 参照は読み取りロック、追加・更新・削除は書き込みロックの下で行う。
pub struct AppState<R> {
    repository: Arc<RwLock<R>>,
}

impl<R> AppState<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(RwLock::new(repository)),
        }
    }
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

pub fn router<R>(state: AppState<R>) -> Router
where
    R: CustomerRepository + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/customers",
            get(list_customers::<R>).post(create_customer::<R>),
        )
        .route(
            "/customers/:id",
            get(get_customer::<R>)
                .put(update_customer::<R>)
                .delete(delete_customer::<R>),
        )
        .route("/openapi.json", get(openapi::document))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn location(customer: &Customer) -> String {
    format!("/customers/{}", customer.id())
}

async fn list_customers<R>(State(state): State<AppState<R>>) -> Json<Vec<Customer>>
where
    R: CustomerRepository + Send + Sync,
{
    Json(state.repository.read().await.find_all().await)
}

async fn get_customer<R>(
    State(state): State<AppState<R>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Customer>, ApiError>
where
    R: CustomerRepository + Send + Sync,
{
    let Path(id) = path?;
    let customer = state.repository.read().await.find_by_id(id.into()).await?;
    Ok(Json(customer))
}

async fn create_customer<R>(
    State(state): State<AppState<R>>,
    payload: Result<Json<CustomerDraft>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
    R: CustomerRepository + Send + Sync,
{
    let Json(draft) = payload?;
    let fields = draft.validate()?;
    let customer = state.repository.write().await.add(fields).await;
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location(&customer))],
        Json(customer),
    ))
}

async fn update_customer<R>(
    State(state): State<AppState<R>>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<CustomerDraft>, JsonRejection>,
) -> Result<Json<Customer>, ApiError>
where
    R: CustomerRepository + Send + Sync,
{
    let Path(id) = path?;
    let Json(draft) = payload?;
    let fields = draft.validate()?;
    let customer = state
        .repository
        .write()
        .await
        .update(id.into(), fields)
        .await?;
    Ok(Json(customer))
}

async fn delete_customer<R>(
    State(state): State<AppState<R>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError>
where
    R: CustomerRepository + Send + Sync,
{
    let Path(id) = path?;
    state.repository.write().await.delete(id.into()).await?;
    Ok(StatusCode::NO_CONTENT)
}
