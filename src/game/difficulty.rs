//! Difficulty levels and the life budgets they grant

use std::fmt;

/// How many wrong guesses a round tolerates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// Result of interpreting a player's difficulty choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyChoice {
    pub difficulty: Difficulty,
    /// The input was not recognised and the default was substituted
    pub fell_back: bool,
}

impl Difficulty {
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Starting lives for a round at this difficulty
    #[must_use]
    pub const fn lives(self) -> u32 {
        match self {
            Self::Easy => 8,
            Self::Medium => 6,
            Self::Hard => 4,
        }
    }

    /// Menu number shown to the player
    #[must_use]
    pub const fn menu_number(self) -> u8 {
        match self {
            Self::Easy => 1,
            Self::Medium => 2,
            Self::Hard => 3,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    /// Interpret a menu selection
    ///
    /// Accepts `1`/`2`/`3` or the level names in any case. Anything else
    /// falls back to Medium and sets `fell_back` so the caller can say so.
    ///
    /// # Examples
    /// ```
    /// use word_quest::game::Difficulty;
    ///
    /// assert_eq!(Difficulty::from_choice("3").difficulty, Difficulty::Hard);
    ///
    /// let choice = Difficulty::from_choice("impossible");
    /// assert_eq!(choice.difficulty, Difficulty::Medium);
    /// assert!(choice.fell_back);
    /// ```
    #[must_use]
    pub fn from_choice(input: &str) -> DifficultyChoice {
        let difficulty = match input.trim().to_ascii_lowercase().as_str() {
            "1" | "easy" => Some(Self::Easy),
            "2" | "medium" | "med" => Some(Self::Medium),
            "3" | "hard" => Some(Self::Hard),
            _ => None,
        };

        DifficultyChoice {
            difficulty: difficulty.unwrap_or_default(),
            fell_back: difficulty.is_none(),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lives_per_level() {
        assert_eq!(Difficulty::Easy.lives(), 8);
        assert_eq!(Difficulty::Medium.lives(), 6);
        assert_eq!(Difficulty::Hard.lives(), 4);
    }

    #[test]
    fn menu_numbers_round_trip() {
        for level in Difficulty::ALL {
            let choice = Difficulty::from_choice(&level.menu_number().to_string());
            assert_eq!(choice.difficulty, level);
            assert!(!choice.fell_back);
        }
    }

    #[test]
    fn names_are_case_insensitive() {
        assert_eq!(Difficulty::from_choice(" EASY ").difficulty, Difficulty::Easy);
        assert_eq!(Difficulty::from_choice("Hard").difficulty, Difficulty::Hard);
        assert_eq!(Difficulty::from_choice("med").difficulty, Difficulty::Medium);
    }

    #[test]
    fn unknown_input_falls_back_to_medium() {
        for input in ["", "4", "0", "expert"] {
            let choice = Difficulty::from_choice(input);
            assert_eq!(choice.difficulty, Difficulty::Medium);
            assert!(choice.fell_back, "'{input}' should fall back");
        }
    }

    #[test]
    fn explicit_medium_does_not_fall_back() {
        assert!(!Difficulty::from_choice("2").fell_back);
    }
}
