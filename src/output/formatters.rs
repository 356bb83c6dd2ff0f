//! Formatting utilities for terminal output

use crate::game::spaced;

/// Hearts for remaining lives followed by empty hearts for lost ones
#[must_use]
pub fn lives_bar(lives: u32, starting_lives: u32) -> String {
    let lost = starting_lives.saturating_sub(lives) as usize;
    format!("{}{}", "♥".repeat(lives as usize), "♡".repeat(lost))
}

/// Wrong-guess line as shown under the word
#[must_use]
pub fn wrong_line(letters: &[char]) -> String {
    if letters.is_empty() {
        "Wrong: -".to_string()
    } else {
        format!("Wrong: {}", spaced(letters))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lives_bar_full() {
        assert_eq!(lives_bar(4, 4), "♥♥♥♥");
    }

    #[test]
    fn lives_bar_partial() {
        assert_eq!(lives_bar(1, 3), "♥♡♡");
    }

    #[test]
    fn lives_bar_empty() {
        assert_eq!(lives_bar(0, 2), "♡♡");
    }

    #[test]
    fn wrong_line_formats() {
        assert_eq!(wrong_line(&[]), "Wrong: -");
        assert_eq!(wrong_line(&['y', 'x']), "Wrong: y x");
    }
}
