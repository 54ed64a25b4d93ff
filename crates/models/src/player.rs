use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "player")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub title: String,
    pub race: Race,
    pub profession: Profession,
    /// Exposed over the wire as epoch milliseconds.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub birthday: DateTimeUtc,
    pub banned: bool,
    pub experience: i32,
    pub level: i32,
    pub until_next_level: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Race {
    #[sea_orm(string_value = "HUMAN")]
    Human,
    #[sea_orm(string_value = "DWARF")]
    Dwarf,
    #[sea_orm(string_value = "ELF")]
    Elf,
    #[sea_orm(string_value = "GIANT")]
    Giant,
    #[sea_orm(string_value = "ORC")]
    Orc,
    #[sea_orm(string_value = "TROLL")]
    Troll,
    #[sea_orm(string_value = "HOBBIT")]
    Hobbit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Profession {
    #[sea_orm(string_value = "WARRIOR")]
    Warrior,
    #[sea_orm(string_value = "ROGUE")]
    Rogue,
    #[sea_orm(string_value = "SORCERER")]
    Sorcerer,
    #[sea_orm(string_value = "CLERIC")]
    Cleric,
    #[sea_orm(string_value = "PALADIN")]
    Paladin,
    #[sea_orm(string_value = "NAZGUL")]
    Nazgul,
    #[sea_orm(string_value = "WARLOCK")]
    Warlock,
    #[sea_orm(string_value = "DRUID")]
    Druid,
}

/// Sortable fields for listings. Sorting is always ascending.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayerOrder {
    #[default]
    Id,
    Name,
    Experience,
    Birthday,
    Level,
}

impl PlayerOrder {
    pub fn column(self) -> Column {
        match self {
            PlayerOrder::Id => Column::Id,
            PlayerOrder::Name => Column::Name,
            PlayerOrder::Experience => Column::Experience,
            PlayerOrder::Birthday => Column::Birthday,
            PlayerOrder::Level => Column::Level,
        }
    }

    /// In-process equivalent of `ORDER BY <column>` for already loaded rows.
    pub fn compare(self, a: &Model, b: &Model) -> Ordering {
        match self {
            PlayerOrder::Id => a.id.cmp(&b.id),
            PlayerOrder::Name => a.name.cmp(&b.name),
            PlayerOrder::Experience => a.experience.cmp(&b.experience),
            PlayerOrder::Birthday => a.birthday.cmp(&b.birthday),
            PlayerOrder::Level => a.level.cmp(&b.level),
        }
    }
}

/// Convert epoch milliseconds to a UTC timestamp, saturating at chrono's range.
pub fn utc_from_millis(millis: i64) -> DateTimeUtc {
    DateTime::<Utc>::from_timestamp_millis(millis).unwrap_or(if millis < 0 {
        DateTime::<Utc>::MIN_UTC
    } else {
        DateTime::<Utc>::MAX_UTC
    })
}
