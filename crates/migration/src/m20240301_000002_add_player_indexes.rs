use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Range filters: level, experience, birthday
        manager
            .create_index(
                Index::create()
                    .name("idx_player_level")
                    .table(Player::Table)
                    .col(Player::Level)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_player_experience")
                    .table(Player::Table)
                    .col(Player::Experience)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_player_birthday")
                    .table(Player::Table)
                    .col(Player::Birthday)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_player_level").table(Player::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_player_experience").table(Player::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_player_birthday").table(Player::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Player { Table, Level, Experience, Birthday }
