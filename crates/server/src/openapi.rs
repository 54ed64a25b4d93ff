use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Create/update body; every field optional on update.
#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct PlayerInputDoc {
    #[schema(max_length = 12, example = "Ragnar")]
    pub name: Option<String>,
    #[schema(max_length = 30, example = "Jarl of Kattegat")]
    pub title: Option<String>,
    #[schema(example = "HUMAN")]
    pub race: Option<String>,
    #[schema(example = "WARRIOR")]
    pub profession: Option<String>,
    /// Epoch milliseconds within 2000-01-01 ..= 3000-12-31
    #[schema(example = 1_000_000_000_000_i64)]
    pub birthday: Option<i64>,
    pub banned: Option<bool>,
    #[schema(minimum = 1, maximum = 10000000)]
    pub experience: Option<i32>,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct PlayerDoc {
    pub id: i64,
    pub name: String,
    pub title: String,
    pub race: String,
    pub profession: String,
    pub birthday: i64,
    pub banned: bool,
    pub experience: i32,
    pub level: i32,
    pub until_next_level: i32,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::players::list,
        crate::routes::players::count,
        crate::routes::players::create,
        crate::routes::players::get,
        crate::routes::players::update,
        crate::routes::players::delete,
    ),
    components(
        schemas(
            HealthResponse,
            PlayerInputDoc,
            PlayerDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "players", description = "Player records")
    )
)]
pub struct ApiDoc;
