//! Create `player` table.
//! Derived columns (`level`, `until_next_level`) are stored so they can be filtered and sorted on.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Player::Table)
                    .if_not_exists()
                    .col(big_integer(Player::Id).auto_increment().primary_key())
                    .col(string_len(Player::Name, 12).not_null())
                    .col(string_len(Player::Title, 30).not_null())
                    .col(string_len(Player::Race, 16).not_null())
                    .col(string_len(Player::Profession, 16).not_null())
                    .col(timestamp_with_time_zone(Player::Birthday).not_null())
                    .col(boolean(Player::Banned).not_null().default(false))
                    .col(integer(Player::Experience).not_null())
                    .col(integer(Player::Level).not_null())
                    .col(integer(Player::UntilNextLevel).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Player::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Player {
    Table,
    Id,
    Name,
    Title,
    Race,
    Profession,
    Birthday,
    Banned,
    Experience,
    Level,
    UntilNextLevel,
}
