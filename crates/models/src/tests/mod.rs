/// Entity CRUD against a migrated database
pub mod player_tests;
