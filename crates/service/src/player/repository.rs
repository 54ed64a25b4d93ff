use async_trait::async_trait;
use models::player::{Model, PlayerOrder};

use super::domain::NewPlayer;
use super::filter::PlayerFilter;
use crate::errors::ServiceError;
use crate::pagination::Pagination;

/// Persistence boundary for player records.
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    /// Persist a new record; the store assigns the id.
    async fn insert(&self, player: NewPlayer) -> Result<Model, ServiceError>;
    /// Overwrite an existing record in full.
    async fn update(&self, player: Model) -> Result<Model, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Model>, ServiceError>;
    async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError>;
    /// One page of matching records sorted ascending by `order`, ties broken by id.
    async fn find_page(&self, filter: &PlayerFilter, page: Pagination, order: PlayerOrder) -> Result<Vec<Model>, ServiceError>;
    async fn find_all(&self, filter: &PlayerFilter) -> Result<Vec<Model>, ServiceError>;

    async fn count(&self, filter: &PlayerFilter) -> Result<u64, ServiceError> {
        Ok(self.find_all(filter).await?.len() as u64)
    }
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockPlayerRepository {
        rows: Mutex<BTreeMap<i64, Model>>, // key: id
        last_id: Mutex<i64>,
    }

    impl MockPlayerRepository {
        pub fn len(&self) -> usize {
            self.rows.lock().unwrap().len()
        }

        pub fn is_empty(&self) -> bool {
            self.len() == 0
        }

        fn matching(&self, filter: &PlayerFilter) -> Vec<Model> {
            let rows = self.rows.lock().unwrap();
            rows.values().filter(|m| filter.matches(m)).cloned().collect()
        }
    }

    #[async_trait]
    impl PlayerRepository for MockPlayerRepository {
        async fn insert(&self, player: NewPlayer) -> Result<Model, ServiceError> {
            let mut last_id = self.last_id.lock().unwrap();
            *last_id += 1;
            let model = player.with_id(*last_id);
            self.rows.lock().unwrap().insert(model.id, model.clone());
            Ok(model)
        }

        async fn update(&self, player: Model) -> Result<Model, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            match rows.get_mut(&player.id) {
                Some(slot) => {
                    *slot = player.clone();
                    Ok(player)
                }
                None => Err(ServiceError::not_found("player")),
            }
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<Model>, ServiceError> {
            Ok(self.rows.lock().unwrap().get(&id).cloned())
        }

        async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
            self.rows.lock().unwrap().remove(&id);
            Ok(())
        }

        async fn find_page(&self, filter: &PlayerFilter, page: Pagination, order: PlayerOrder) -> Result<Vec<Model>, ServiceError> {
            let (_, per_page) = page.normalize();
            let mut rows = self.matching(filter);
            rows.sort_by(|a, b| order.compare(a, b).then(a.id.cmp(&b.id)));
            Ok(rows
                .into_iter()
                .skip(usize::try_from(page.offset()).unwrap_or(usize::MAX))
                .take(per_page as usize)
                .collect())
        }

        async fn find_all(&self, filter: &PlayerFilter) -> Result<Vec<Model>, ServiceError> {
            Ok(self.matching(filter))
        }
    }
}
