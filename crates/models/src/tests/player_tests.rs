use crate::db::connect_with_config;
use crate::level::progress_for;
use crate::player::{self, utc_from_millis, Profession, Race};
use anyhow::Result;
use configs::DatabaseConfig;
use migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, PaginatorTrait, QueryFilter, Set};

/// Fresh in-memory database with the schema applied
async fn setup_test_db() -> Result<DatabaseConnection> {
    let cfg = DatabaseConfig { url: "sqlite::memory:".into(), ..Default::default() };
    let db = connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

fn active(name: &str, race: Race, experience: i32, banned: bool) -> player::ActiveModel {
    let p = progress_for(experience);
    player::ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        title: Set(format!("{name} the Bold")),
        race: Set(race),
        profession: Set(Profession::Warrior),
        birthday: Set(utc_from_millis(1_000_000_000_000)),
        banned: Set(banned),
        experience: Set(experience),
        level: Set(p.level),
        until_next_level: Set(p.until_next_level),
    }
}

#[tokio::test]
async fn test_player_crud() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let db = setup_test_db().await?;

    let created = active("Ragnar", Race::Human, 100, false).insert(&db).await?;
    assert!(created.id > 0);
    assert_eq!(created.level, 1);
    assert_eq!(created.birthday.timestamp_millis(), 1_000_000_000_000);

    let found = player::Entity::find_by_id(created.id).one(&db).await?;
    assert_eq!(found.as_ref(), Some(&created));

    let mut am: player::ActiveModel = created.clone().into();
    am.banned = Set(true);
    let updated = am.update(&db).await?;
    assert!(updated.banned);
    assert_eq!(updated.id, created.id);

    player::Entity::delete_by_id(created.id).exec(&db).await?;
    assert!(player::Entity::find_by_id(created.id).one(&db).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_enum_columns_filter() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let db = setup_test_db().await?;

    active("Legolas", Race::Elf, 500, false).insert(&db).await?;
    active("Gimli", Race::Dwarf, 700, true).insert(&db).await?;
    active("Arwen", Race::Elf, 900, false).insert(&db).await?;

    let elves = player::Entity::find()
        .filter(player::Column::Race.eq(Race::Elf))
        .count(&db)
        .await?;
    assert_eq!(elves, 2);

    let banned = player::Entity::find()
        .filter(player::Column::Banned.eq(true))
        .all(&db)
        .await?;
    assert_eq!(banned.len(), 1);
    assert_eq!(banned[0].race, Race::Dwarf);
    Ok(())
}
