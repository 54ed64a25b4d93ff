use std::sync::Arc;

use models::player::{Model, PlayerOrder};
use tracing::{debug, info, instrument};

use super::domain::PlayerInput;
use super::filter::PlayerFilter;
use super::repository::PlayerRepository;
use crate::errors::ServiceError;
use crate::pagination::Pagination;

/// Application service encapsulating player business rules:
/// validation, derived level fields and id checks around the repository.
pub struct PlayerService<R: PlayerRepository> {
    repo: Arc<R>,
}

impl<R: PlayerRepository> PlayerService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Validate a full candidate and persist it with `banned` defaulted and
    /// level fields derived from experience.
    ///
    /// # Examples
    /// ```
    /// use service::player::{PlayerService, PlayerInput, repository::mock::MockPlayerRepository};
    /// use models::player::{Race, Profession};
    /// use std::sync::Arc;
    /// let svc = PlayerService::new(Arc::new(MockPlayerRepository::default()));
    /// let input = PlayerInput {
    ///     name: Some("Ragnar".into()),
    ///     title: Some("Jarl".into()),
    ///     race: Some(Race::Human),
    ///     profession: Some(Profession::Warrior),
    ///     birthday: Some(1_000_000_000_000),
    ///     banned: None,
    ///     experience: Some(100),
    /// };
    /// let player = tokio_test::block_on(svc.create(input)).unwrap();
    /// assert_eq!((player.level, player.until_next_level), (1, 200));
    /// assert!(!player.banned);
    /// ```
    #[instrument(skip(self, input), fields(name = ?input.name))]
    pub async fn create(&self, input: PlayerInput) -> Result<Model, ServiceError> {
        let new_player = input.into_new_player()?;
        let created = self.repo.insert(new_player).await?;
        info!(id = created.id, level = created.level, "player_created");
        Ok(created)
    }

    /// Merge the present fields of `patch` into the stored record.
    /// The whole patch is validated before anything is applied.
    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: i64, patch: PlayerInput) -> Result<Model, ServiceError> {
        let mut player = self.find_by_id(id).await?;
        patch.validate_patch()?;
        if patch.is_empty() {
            debug!("empty patch, record rewritten unchanged");
        }
        patch.apply_to(&mut player);
        let updated = self.repo.update(player).await?;
        info!(id = updated.id, "player_updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        self.find_by_id(id).await?;
        self.repo.delete_by_id(id).await?;
        info!(id, "player_deleted");
        Ok(())
    }

    /// Non-positive ids are rejected before the store is queried.
    pub async fn find_by_id(&self, id: i64) -> Result<Model, ServiceError> {
        if id <= 0 {
            return Err(ServiceError::Validation(format!("incorrect id: {id}")));
        }
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("player"))
    }

    /// Contents of one page of the filtered set, sorted ascending by `order`.
    /// The requested page size is used as is; pages the store cannot address are a bad request.
    #[instrument(skip(self, filter), fields(predicates = filter.predicates().len()))]
    pub async fn list_page(&self, filter: &PlayerFilter, page: Pagination, order: PlayerOrder) -> Result<Vec<Model>, ServiceError> {
        let page = page.validate()?;
        let rows = self.repo.find_page(filter, page, order).await?;
        debug!(returned = rows.len(), "player_page");
        Ok(rows)
    }

    pub async fn count_matching(&self, filter: &PlayerFilter) -> Result<u64, ServiceError> {
        self.repo.count(filter).await
    }
}
