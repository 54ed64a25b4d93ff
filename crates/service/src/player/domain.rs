use models::level::progress_for;
use models::player::{utc_from_millis, Profession, Race};
use models::validation::{
    is_valid_birthday, is_valid_experience, is_valid_name, is_valid_title, validate_birthday,
    validate_experience, validate_name, validate_title,
};
use sea_orm::prelude::DateTimeUtc;
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

/// Create/update payload. Every field is optional so the same shape serves
/// as a full candidate on create and as a partial patch on update.
/// `id`, `level` and `untilNextLevel` are not part of it and are ignored if sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerInput {
    pub name: Option<String>,
    pub title: Option<String>,
    pub race: Option<Race>,
    pub profession: Option<Profession>,
    /// Epoch milliseconds
    pub birthday: Option<i64>,
    pub banned: Option<bool>,
    pub experience: Option<i32>,
}

/// Fully validated record ready to be inserted; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlayer {
    pub name: String,
    pub title: String,
    pub race: Race,
    pub profession: Profession,
    pub birthday: DateTimeUtc,
    pub banned: bool,
    pub experience: i32,
    pub level: i32,
    pub until_next_level: i32,
}

fn missing_fields() -> ServiceError {
    ServiceError::Validation("name, title, race, profession, birthday and experience are required".into())
}

impl PlayerInput {
    /// Every required field present and within range.
    pub fn is_valid_player(&self) -> bool {
        self.name.as_deref().is_some_and(is_valid_name)
            && self.title.as_deref().is_some_and(is_valid_title)
            && self.birthday.is_some_and(is_valid_birthday)
            && self.experience.is_some_and(is_valid_experience)
            && self.race.is_some()
            && self.profession.is_some()
    }

    /// Validate a create candidate, default `banned` and derive the level fields.
    pub fn into_new_player(self) -> Result<NewPlayer, ServiceError> {
        if !self.is_valid_player() {
            // report the first out-of-range field, otherwise a required one is missing
            self.validate_patch()?;
            return Err(missing_fields());
        }
        let (Some(name), Some(title), Some(race), Some(profession), Some(birthday), Some(experience)) =
            (self.name, self.title, self.race, self.profession, self.birthday, self.experience)
        else {
            return Err(missing_fields());
        };

        let progress = progress_for(experience);
        Ok(NewPlayer {
            name,
            title,
            race,
            profession,
            birthday: utc_from_millis(birthday),
            banned: self.banned.unwrap_or(false),
            experience,
            level: progress.level,
            until_next_level: progress.until_next_level,
        })
    }

    /// Check only the fields present in a patch.
    pub fn validate_patch(&self) -> Result<(), ServiceError> {
        if let Some(name) = self.name.as_deref() {
            validate_name(name)?;
        }
        if let Some(title) = self.title.as_deref() {
            validate_title(title)?;
        }
        if let Some(birthday) = self.birthday {
            validate_birthday(birthday)?;
        }
        if let Some(experience) = self.experience {
            validate_experience(experience)?;
        }
        Ok(())
    }

    /// Overwrite the present fields of `target`, recomputing the level fields
    /// when experience changes. Call `validate_patch` first.
    pub fn apply_to(self, target: &mut models::player::Model) {
        if let Some(name) = self.name {
            target.name = name;
        }
        if let Some(title) = self.title {
            target.title = title;
        }
        if let Some(race) = self.race {
            target.race = race;
        }
        if let Some(profession) = self.profession {
            target.profession = profession;
        }
        if let Some(banned) = self.banned {
            target.banned = banned;
        }
        if let Some(birthday) = self.birthday {
            target.birthday = utc_from_millis(birthday);
        }
        if let Some(experience) = self.experience {
            let progress = progress_for(experience);
            target.experience = experience;
            target.level = progress.level;
            target.until_next_level = progress.until_next_level;
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl NewPlayer {
    /// Attach a store-assigned id.
    pub fn with_id(self, id: i64) -> models::player::Model {
        models::player::Model {
            id,
            name: self.name,
            title: self.title,
            race: self.race,
            profession: self.profession,
            birthday: self.birthday,
            banned: self.banned,
            experience: self.experience,
            level: self.level,
            until_next_level: self.until_next_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::validation::{MAX_BIRTHDAY_MILLIS, MIN_BIRTHDAY_MILLIS};

    fn full() -> PlayerInput {
        PlayerInput {
            name: Some("Ragnar".into()),
            title: Some("Jarl of Kattegat".into()),
            race: Some(Race::Human),
            profession: Some(Profession::Warrior),
            birthday: Some(1_000_000_000_000),
            banned: None,
            experience: Some(100),
        }
    }

    #[test]
    fn full_input_is_valid_and_defaults_banned() {
        let input = full();
        assert!(input.is_valid_player());
        let p = input.into_new_player().unwrap();
        assert!(!p.banned);
        assert_eq!((p.level, p.until_next_level), (1, 200));
        assert_eq!(p.birthday.timestamp_millis(), 1_000_000_000_000);
    }

    #[test]
    fn missing_field_is_invalid() {
        for strip in 0..6 {
            let mut input = full();
            match strip {
                0 => input.name = None,
                1 => input.title = None,
                2 => input.race = None,
                3 => input.profession = None,
                4 => input.birthday = None,
                _ => input.experience = None,
            }
            assert!(!input.is_valid_player(), "case {strip}");
            assert!(input.into_new_player().is_err(), "case {strip}");
        }
    }

    #[test]
    fn long_name_rejected_on_create() {
        let input = PlayerInput { name: Some("a".repeat(13)), ..full() };
        assert!(!input.is_valid_player());
        assert!(input.into_new_player().unwrap_err().is_bad_request());
    }

    #[test]
    fn birthday_edges_on_create() {
        let at_min = PlayerInput { birthday: Some(MIN_BIRTHDAY_MILLIS), ..full() };
        assert!(at_min.is_valid_player());
        let past_max = PlayerInput { birthday: Some(MAX_BIRTHDAY_MILLIS + 1), ..full() };
        assert!(past_max.into_new_player().is_err());
    }

    #[test]
    fn create_reports_invalid_field_before_missing_ones() {
        let input = PlayerInput { name: Some(String::new()), race: None, ..full() };
        let err = input.into_new_player().unwrap_err();
        assert!(err.to_string().contains("characters"), "{err}");

        let err = PlayerInput { race: None, ..full() }.into_new_player().unwrap_err();
        assert!(err.to_string().contains("required"), "{err}");
    }

    #[test]
    fn explicit_banned_is_kept() {
        let p = PlayerInput { banned: Some(true), ..full() }.into_new_player().unwrap();
        assert!(p.banned);
    }

    #[test]
    fn patch_validates_only_present_fields() {
        assert!(PlayerInput::default().validate_patch().is_ok());
        assert!(PlayerInput { experience: Some(0), ..Default::default() }.validate_patch().is_err());
        assert!(PlayerInput { birthday: Some(0), ..Default::default() }.validate_patch().is_err());
        assert!(PlayerInput { name: Some(String::new()), ..Default::default() }.validate_patch().is_err());
        assert!(PlayerInput { title: Some(String::new()), ..Default::default() }.validate_patch().is_ok());
    }

    #[test]
    fn apply_recomputes_level_only_with_experience() {
        let mut m = full().into_new_player().unwrap().with_id(1);
        PlayerInput { banned: Some(true), ..Default::default() }.apply_to(&mut m);
        assert!(m.banned);
        assert_eq!((m.experience, m.level, m.until_next_level), (100, 1, 200));

        PlayerInput { experience: Some(300), ..Default::default() }.apply_to(&mut m);
        assert_eq!((m.experience, m.level, m.until_next_level), (300, 2, 300));
        assert_eq!(m.name, "Ragnar");
    }

    #[test]
    fn deserializes_camel_case_and_ignores_derived() {
        let input: PlayerInput = serde_json::from_str(
            r#"{"name":"Bilbo","race":"HOBBIT","birthday":1000000000000,"level":99,"untilNextLevel":1,"id":5}"#,
        )
        .unwrap();
        assert_eq!(input.name.as_deref(), Some("Bilbo"));
        assert_eq!(input.race, Some(Race::Hobbit));
        assert_eq!(input.birthday, Some(1_000_000_000_000));
        assert!(input.title.is_none());
    }

    #[test]
    fn empty_patch_detected() {
        assert!(PlayerInput::default().is_empty());
        assert!(!full().is_empty());
    }
}
