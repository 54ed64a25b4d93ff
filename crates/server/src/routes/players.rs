use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use models::player::{self, PlayerOrder, Profession, Race};
use serde::Deserialize;
use service::pagination::{Pagination, DEFAULT_PAGE_SIZE};
use service::player::{PlayerFilter, PlayerInput};
use tracing::info;

use crate::{errors::JsonApiError, routes::ServerState};

/// Filter attributes accepted by the count endpoint.
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct CountQuery {
    /// Substring of the name
    pub name: Option<String>,
    /// Substring of the title
    pub title: Option<String>,
    #[param(value_type = Option<String>, example = "ELF")]
    pub race: Option<Race>,
    #[param(value_type = Option<String>, example = "WARRIOR")]
    pub profession: Option<Profession>,
    /// Birthday lower bound, epoch milliseconds, inclusive
    pub after: Option<i64>,
    /// Birthday upper bound, epoch milliseconds, inclusive
    pub before: Option<i64>,
    pub banned: Option<bool>,
    pub min_experience: Option<i32>,
    pub max_experience: Option<i32>,
    pub min_level: Option<i32>,
    pub max_level: Option<i32>,
}

/// Filter attributes plus sorting and paging for the list endpoint.
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    pub name: Option<String>,
    pub title: Option<String>,
    #[param(value_type = Option<String>, example = "ELF")]
    pub race: Option<Race>,
    #[param(value_type = Option<String>, example = "WARRIOR")]
    pub profession: Option<Profession>,
    pub after: Option<i64>,
    pub before: Option<i64>,
    pub banned: Option<bool>,
    pub min_experience: Option<i32>,
    pub max_experience: Option<i32>,
    pub min_level: Option<i32>,
    pub max_level: Option<i32>,
    /// Sort field, ascending (ID, NAME, EXPERIENCE, BIRTHDAY, LEVEL)
    #[param(value_type = Option<String>, example = "ID")]
    pub order: Option<PlayerOrder>,
    /// 0-based page index, default 0
    pub page_number: Option<u64>,
    /// Page size, default 3
    pub page_size: Option<u64>,
}

impl From<CountQuery> for PlayerFilter {
    fn from(q: CountQuery) -> Self {
        PlayerFilter {
            name: q.name,
            title: q.title,
            race: q.race,
            profession: q.profession,
            after: q.after,
            before: q.before,
            banned: q.banned,
            min_experience: q.min_experience,
            max_experience: q.max_experience,
            min_level: q.min_level,
            max_level: q.max_level,
        }
    }
}

impl ListQuery {
    fn into_parts(self) -> (PlayerFilter, Pagination, PlayerOrder) {
        let page = Pagination::new(self.page_number.unwrap_or(0), self.page_size.unwrap_or(DEFAULT_PAGE_SIZE));
        let order = self.order.unwrap_or_default();
        let filter = PlayerFilter {
            name: self.name,
            title: self.title,
            race: self.race,
            profession: self.profession,
            after: self.after,
            before: self.before,
            banned: self.banned,
            min_experience: self.min_experience,
            max_experience: self.max_experience,
            min_level: self.min_level,
            max_level: self.max_level,
        };
        (filter, page, order)
    }
}

fn path_id(id: Result<Path<i64>, PathRejection>) -> Result<i64, JsonApiError> {
    id.map(|Path(id)| id).map_err(|e| JsonApiError::bad_request(e.body_text()))
}

fn json_body(body: Result<Json<PlayerInput>, JsonRejection>) -> Result<PlayerInput, JsonApiError> {
    body.map(|Json(input)| input).map_err(|e| JsonApiError::bad_request(e.body_text()))
}

#[utoipa::path(
    get, path = "/rest/players", tag = "players",
    params(ListQuery),
    responses(
        (status = 200, description = "One page of matching players", body = [crate::openapi::PlayerDoc]),
        (status = 400, description = "Malformed query parameter"),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list(
    State(state): State<ServerState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Vec<player::Model>>, JsonApiError> {
    let Query(q) = query.map_err(|e| JsonApiError::bad_request(e.body_text()))?;
    let (filter, page, order) = q.into_parts();
    let rows = state.players.list_page(&filter, page, order).await?;
    info!(count = rows.len(), page = page.page, ?order, "list players");
    Ok(Json(rows))
}

#[utoipa::path(
    get, path = "/rest/players/count", tag = "players",
    params(CountQuery),
    responses(
        (status = 200, description = "Number of matching players", body = u64),
        (status = 400, description = "Malformed query parameter"),
        (status = 500, description = "Count Failed")
    )
)]
pub async fn count(
    State(state): State<ServerState>,
    query: Result<Query<CountQuery>, QueryRejection>,
) -> Result<Json<u64>, JsonApiError> {
    let Query(q) = query.map_err(|e| JsonApiError::bad_request(e.body_text()))?;
    let n = state.players.count_matching(&PlayerFilter::from(q)).await?;
    Ok(Json(n))
}

#[utoipa::path(
    post, path = "/rest/players", tag = "players",
    request_body = crate::openapi::PlayerInputDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::PlayerDoc),
        (status = 400, description = "Validation Error"),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    body: Result<Json<PlayerInput>, JsonRejection>,
) -> Result<Json<player::Model>, JsonApiError> {
    let input = json_body(body)?;
    let created = state.players.create(input).await?;
    info!(id = created.id, name = %created.name, "created player");
    Ok(Json(created))
}

#[utoipa::path(
    get, path = "/rest/players/{id}", tag = "players",
    params(("id" = i64, Path, description = "Player ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::PlayerDoc),
        (status = 400, description = "Invalid id"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<player::Model>, JsonApiError> {
    let id = path_id(id)?;
    Ok(Json(state.players.find_by_id(id).await?))
}

#[utoipa::path(
    post, path = "/rest/players/{id}", tag = "players",
    params(("id" = i64, Path, description = "Player ID")),
    request_body = crate::openapi::PlayerInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::PlayerDoc),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Update Failed")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<PlayerInput>, JsonRejection>,
) -> Result<Json<player::Model>, JsonApiError> {
    let id = path_id(id)?;
    let patch = json_body(body)?;
    let updated = state.players.update(id, patch).await?;
    info!(id = updated.id, "updated player");
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/rest/players/{id}", tag = "players",
    params(("id" = i64, Path, description = "Player ID")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 400, description = "Invalid id"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Delete Failed")
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, JsonApiError> {
    let id = path_id(id)?;
    state.players.delete(id).await?;
    info!(id, "deleted player");
    Ok(StatusCode::OK)
}
