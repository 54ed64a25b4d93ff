//! Level progression derived from total experience.
//!
//! Level `n` is reached at `50 * n * (n + 1)` experience, so the thresholds
//! are 0, 100, 300, 600, 1000, ...

/// Level and the experience still missing for the next one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelProgress {
    pub level: i32,
    pub until_next_level: i32,
}

/// `level = floor((sqrt(2500 + 200 * exp) - 50) / 100)`
pub fn level_for(experience: i32) -> i32 {
    let exp = i64::from(experience.max(0));
    let root = ((2500 + 200 * exp) as f64).sqrt();
    ((root - 50.0) as i64 / 100) as i32
}

/// Experience needed to reach `level + 1` from `experience`.
pub fn until_next_level(level: i32, experience: i32) -> i32 {
    let level = i64::from(level);
    (50 * (level + 1) * (level + 2) - i64::from(experience)) as i32
}

pub fn progress_for(experience: i32) -> LevelProgress {
    let level = level_for(experience);
    LevelProgress { level, until_next_level: until_next_level(level, experience) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::MAX_EXPERIENCE;

    #[test]
    fn hundred_experience_is_level_one() {
        assert_eq!(progress_for(100), LevelProgress { level: 1, until_next_level: 200 });
    }

    #[test]
    fn thresholds_land_exactly_on_levels() {
        assert_eq!(level_for(99), 0);
        assert_eq!(level_for(299), 1);
        assert_eq!(level_for(300), 2);
        assert_eq!(level_for(600), 3);
        assert_eq!(progress_for(300).until_next_level, 300);
    }

    #[test]
    fn smallest_valid_experience() {
        assert_eq!(progress_for(1), LevelProgress { level: 0, until_next_level: 99 });
    }

    #[test]
    fn maximum_experience_does_not_overflow() {
        let p = progress_for(MAX_EXPERIENCE);
        assert_eq!(p.level, 446);
        assert_eq!(p.until_next_level, 50 * 447 * 448 - MAX_EXPERIENCE);
        assert!(p.until_next_level > 0);
    }

    #[test]
    fn monotonic_and_non_negative_over_sampled_range() {
        let mut prev = level_for(1);
        let mut exp = 1;
        while exp <= MAX_EXPERIENCE {
            let p = progress_for(exp);
            assert!(p.until_next_level >= 0, "negative remainder at {exp}");
            assert!(p.level >= prev, "level decreased at {exp}");
            prev = p.level;
            exp += if exp < 20_000 { 1 } else { 997 };
        }
    }
}
