//! Listing filters.
//!
//! Every optional query attribute becomes at most one [`Predicate`]; absent
//! attributes contribute nothing. Predicates are AND-ed together, and an empty
//! set matches every row. The same predicates render to a sea-orm
//! [`Condition`] for the database and evaluate directly against loaded rows
//! for in-memory stores.
//!
//! Substring fragments render as a position function (`strpos` on Postgres,
//! `instr` elsewhere) rather than `LIKE`, so matching is case-sensitive on
//! every backend and `%`/`_` in the needle are literal characters.

use models::player::{utc_from_millis, Column, Entity, Model, Profession, Race};
use models::validation::{MAX_BIRTHDAY_MILLIS, MIN_BIRTHDAY_MILLIS};
use sea_orm::prelude::DateTimeUtc;
use sea_orm::sea_query::{Alias, Expr, Func, SimpleExpr};
use sea_orm::{ColumnTrait, Condition, DbBackend, Value};

/// Raw filter attributes as they arrive from a listing or count request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerFilter {
    pub name: Option<String>,
    pub title: Option<String>,
    pub race: Option<Race>,
    pub profession: Option<Profession>,
    /// Inclusive lower bound on birthday, epoch milliseconds
    pub after: Option<i64>,
    /// Inclusive upper bound on birthday, epoch milliseconds
    pub before: Option<i64>,
    pub banned: Option<bool>,
    pub min_experience: Option<i32>,
    pub max_experience: Option<i32>,
    pub min_level: Option<i32>,
    pub max_level: Option<i32>,
}

/// Inclusive range with one or both ends present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Range<T> {
    AtLeast(T),
    AtMost(T),
    Between(T, T),
}

impl<T: PartialOrd + Copy> Range<T> {
    pub fn from_bounds(min: Option<T>, max: Option<T>) -> Option<Self> {
        match (min, max) {
            (None, None) => None,
            (Some(lo), None) => Some(Range::AtLeast(lo)),
            (None, Some(hi)) => Some(Range::AtMost(hi)),
            (Some(lo), Some(hi)) => Some(Range::Between(lo, hi)),
        }
    }

    pub fn contains(&self, v: T) -> bool {
        match *self {
            Range::AtLeast(lo) => v >= lo,
            Range::AtMost(hi) => v <= hi,
            Range::Between(lo, hi) => lo <= v && v <= hi,
        }
    }

    fn expr(self, col: Column) -> SimpleExpr
    where
        T: Into<Value>,
    {
        match self {
            Range::AtLeast(lo) => col.gte(lo),
            Range::AtMost(hi) => col.lte(hi),
            Range::Between(lo, hi) => col.between(lo, hi),
        }
    }
}

/// A single present filter fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Case-sensitive, unanchored substring match
    NameContains(String),
    TitleContains(String),
    RaceIs(Race),
    ProfessionIs(Profession),
    Birthday(Range<DateTimeUtc>),
    Experience(Range<i32>),
    Level(Range<i32>),
    Banned(bool),
}

/// `position(needle in col) > 0`, spelled the way `backend` understands it.
fn substring_expr(backend: DbBackend, col: Column, needle: &str) -> SimpleExpr {
    let func = match backend {
        DbBackend::Postgres => "strpos",
        _ => "instr",
    };
    Expr::expr(Func::cust(Alias::new(func)).arg(Expr::col((Entity, col))).arg(needle)).gt(0)
}

impl Predicate {
    pub fn expr(&self, backend: DbBackend) -> SimpleExpr {
        match self {
            Predicate::NameContains(s) => substring_expr(backend, Column::Name, s),
            Predicate::TitleContains(s) => substring_expr(backend, Column::Title, s),
            Predicate::RaceIs(r) => Column::Race.eq(*r),
            Predicate::ProfessionIs(p) => Column::Profession.eq(*p),
            Predicate::Birthday(r) => r.expr(Column::Birthday),
            Predicate::Experience(r) => r.expr(Column::Experience),
            Predicate::Level(r) => r.expr(Column::Level),
            Predicate::Banned(b) => Column::Banned.eq(*b),
        }
    }

    pub fn matches(&self, m: &Model) -> bool {
        match self {
            Predicate::NameContains(s) => m.name.contains(s.as_str()),
            Predicate::TitleContains(s) => m.title.contains(s.as_str()),
            Predicate::RaceIs(r) => m.race == *r,
            Predicate::ProfessionIs(p) => m.profession == *p,
            Predicate::Birthday(r) => r.contains(m.birthday),
            Predicate::Experience(r) => r.contains(m.experience),
            Predicate::Level(r) => r.contains(m.level),
            Predicate::Banned(b) => m.banned == *b,
        }
    }
}

impl PlayerFilter {
    pub fn by_name(&self) -> Option<Predicate> {
        self.name.clone().map(Predicate::NameContains)
    }

    pub fn by_title(&self) -> Option<Predicate> {
        self.title.clone().map(Predicate::TitleContains)
    }

    pub fn by_race(&self) -> Option<Predicate> {
        self.race.map(Predicate::RaceIs)
    }

    pub fn by_profession(&self) -> Option<Predicate> {
        self.profession.map(Predicate::ProfessionIs)
    }

    /// Bounds are pulled into one millisecond outside the valid birthday
    /// window. Stored birthdays always fall inside it, so matches are unchanged,
    /// and the rendered timestamps keep a four-digit year.
    pub fn by_birthday(&self) -> Option<Predicate> {
        let clamp = |ms: i64| utc_from_millis(ms.clamp(MIN_BIRTHDAY_MILLIS - 1, MAX_BIRTHDAY_MILLIS + 1));
        Range::from_bounds(self.after.map(clamp), self.before.map(clamp)).map(Predicate::Birthday)
    }

    pub fn by_experience(&self) -> Option<Predicate> {
        Range::from_bounds(self.min_experience, self.max_experience).map(Predicate::Experience)
    }

    pub fn by_level(&self) -> Option<Predicate> {
        Range::from_bounds(self.min_level, self.max_level).map(Predicate::Level)
    }

    pub fn by_banned(&self) -> Option<Predicate> {
        self.banned.map(Predicate::Banned)
    }

    /// Present fragments only.
    pub fn predicates(&self) -> Vec<Predicate> {
        [
            self.by_name(),
            self.by_title(),
            self.by_race(),
            self.by_profession(),
            self.by_birthday(),
            self.by_experience(),
            self.by_level(),
            self.by_banned(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Conjunction of all present fragments; empty when nothing is set.
    pub fn condition(&self, backend: DbBackend) -> Condition {
        self.predicates()
            .iter()
            .fold(Condition::all(), |cond, p| cond.add(p.expr(backend)))
    }

    pub fn matches(&self, m: &Model) -> bool {
        self.predicates().iter().all(|p| p.matches(m))
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
