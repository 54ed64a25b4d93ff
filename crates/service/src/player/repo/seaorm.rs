use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

use models::player::{self, Model, PlayerOrder};

use crate::errors::ServiceError;
use crate::pagination::Pagination;
use crate::player::domain::NewPlayer;
use crate::player::filter::PlayerFilter;
use crate::player::repository::PlayerRepository;

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmPlayerRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmPlayerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn condition(&self, filter: &PlayerFilter) -> sea_orm::Condition {
        filter.condition(self.db.get_database_backend())
    }
}

fn db_err(e: DbErr) -> ServiceError {
    match e {
        // row vanished between the read and the write of an update
        DbErr::RecordNotUpdated => ServiceError::not_found("player"),
        e => ServiceError::Db(e.to_string()),
    }
}

#[async_trait::async_trait]
impl PlayerRepository for SeaOrmPlayerRepository {
    async fn insert(&self, p: NewPlayer) -> Result<Model, ServiceError> {
        let am = player::ActiveModel {
            id: NotSet,
            name: Set(p.name),
            title: Set(p.title),
            race: Set(p.race),
            profession: Set(p.profession),
            birthday: Set(p.birthday),
            banned: Set(p.banned),
            experience: Set(p.experience),
            level: Set(p.level),
            until_next_level: Set(p.until_next_level),
        };
        am.insert(&self.db).await.map_err(db_err)
    }

    async fn update(&self, p: Model) -> Result<Model, ServiceError> {
        let am: player::ActiveModel = p.into();
        am.reset_all().update(&self.db).await.map_err(db_err)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Model>, ServiceError> {
        player::Entity::find_by_id(id).one(&self.db).await.map_err(db_err)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
        player::Entity::delete_by_id(id).exec(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn find_page(&self, filter: &PlayerFilter, page: Pagination, order: PlayerOrder) -> Result<Vec<Model>, ServiceError> {
        let (page_idx, per_page) = page.normalize();
        player::Entity::find()
            .filter(self.condition(filter))
            .order_by_asc(order.column())
            .order_by_asc(player::Column::Id)
            .paginate(&self.db, per_page)
            .fetch_page(page_idx)
            .await
            .map_err(db_err)
    }

    async fn find_all(&self, filter: &PlayerFilter) -> Result<Vec<Model>, ServiceError> {
        player::Entity::find()
            .filter(self.condition(filter))
            .order_by_asc(player::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)
    }

    /// Native `COUNT(*)` instead of materialising the rows.
    async fn count(&self, filter: &PlayerFilter) -> Result<u64, ServiceError> {
        player::Entity::find()
            .filter(self.condition(filter))
            .count(&self.db)
            .await
            .map_err(db_err)
    }
}
