//! Data models and the bundled word lists.

use serde::{Deserialize, Serialize};

/// A word pair shown on a flip card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VocabularyPair {
    pub front: &'static str,
    pub back: &'static str,
}

/// A quiz question. Each question belongs to exactly one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizQuestion {
    pub level: u32,
    pub word: &'static str,
    pub translation: &'static str,
}

/// Theme preference persisted with user progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Light,
    Dark,
}

impl ThemeChoice {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeChoice::Light => "light",
            ThemeChoice::Dark => "dark",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ThemeChoice::Light => "Light",
            ThemeChoice::Dark => "Dark",
        }
    }

    /// Anything that isn't "dark" falls back to the light theme.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "dark" => ThemeChoice::Dark,
            _ => ThemeChoice::Light,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemeChoice::Light => ThemeChoice::Dark,
            ThemeChoice::Dark => ThemeChoice::Light,
        }
    }
}

/// The only mutable, persisted entity: theme preference, login state and
/// the current quiz level. Loaded at screen mount, written back with each
/// mutation. Last write wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProgress {
    pub current_level: u32,
    pub theme: ThemeChoice,
    pub logged_in: bool,
    pub user_name: String,
}

impl Default for UserProgress {
    fn default() -> Self {
        Self {
            current_level: 1,
            theme: ThemeChoice::Light,
            logged_in: false,
            user_name: String::new(),
        }
    }
}

impl UserProgress {
    pub fn log_in(&mut self, name: String) {
        self.logged_in = true;
        self.user_name = name;
    }

    pub fn log_out(&mut self) {
        self.logged_in = false;
        self.user_name.clear();
    }
}

// ══════════════════════════════════════════════════════════════════════════
// Bundled Word Lists
// ══════════════════════════════════════════════════════════════════════════

/// The flip-card deck (English front, Indonesian back).
pub const VOCABULARY: &[VocabularyPair] = &[
    VocabularyPair { front: "Apple", back: "Apel" },
    VocabularyPair { front: "Dog", back: "Anjing" },
    VocabularyPair { front: "Book", back: "Buku" },
    VocabularyPair { front: "Cat", back: "Kucing" },
    VocabularyPair { front: "House", back: "Rumah" },
    VocabularyPair { front: "Car", back: "Mobil" },
    VocabularyPair { front: "Water", back: "Air" },
    VocabularyPair { front: "Phone", back: "Telepon" },
    VocabularyPair { front: "Tree", back: "Pohon" },
    VocabularyPair { front: "Sky", back: "Langit" },
];

/// Quiz questions, grouped by level.
pub const QUESTIONS: &[QuizQuestion] = &[
    QuizQuestion { level: 1, word: "Apple", translation: "Apel" },
    QuizQuestion { level: 2, word: "Banana", translation: "Pisang" },
    QuizQuestion { level: 3, word: "Car", translation: "Mobil" },
    QuizQuestion { level: 4, word: "Dog", translation: "Anjing" },
    QuizQuestion { level: 5, word: "Cat", translation: "Kucing" },
    QuizQuestion { level: 6, word: "Bird", translation: "Burung" },
    QuizQuestion { level: 7, word: "Tree", translation: "Pohon" },
    QuizQuestion { level: 8, word: "House", translation: "Rumah" },
    QuizQuestion { level: 9, word: "Computer", translation: "Komputer" },
    QuizQuestion {
        level: 10,
        word: "The cat is sitting near the door",
        translation: "Kucing duduk di dekat pintu",
    },
    QuizQuestion {
        level: 11,
        word: "The apple is on the table",
        translation: "Apel ada di atas meja",
    },
    QuizQuestion {
        level: 12,
        word: "The bird is in the tree",
        translation: "Burung ada di pohon",
    },
    QuizQuestion {
        level: 13,
        word: "The car is parked near the house",
        translation: "Mobil diparkir di dekat rumah",
    },
    QuizQuestion {
        level: 14,
        word: "I need a pen",
        translation: "Saya butuh sebuah pena",
    },
    QuizQuestion {
        level: 15,
        word: "I have a new computer",
        translation: "Saya punya komputer baru",
    },
];

/// Questions belonging to the given level. Empty past the last level.
pub fn questions_for_level(level: u32) -> Vec<&'static QuizQuestion> {
    QUESTIONS.iter().filter(|q| q.level == level).collect()
}

/// Highest level that has at least one question.
pub fn total_levels() -> u32 {
    QUESTIONS.iter().map(|q| q.level).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn questions_are_grouped_by_level() {
        let level_one = questions_for_level(1);
        assert_eq!(level_one.len(), 1);
        assert_eq!(level_one[0].word, "Apple");
        assert_eq!(level_one[0].translation, "Apel");

        for level in 1..=total_levels() {
            assert!(
                !questions_for_level(level).is_empty(),
                "level {} has no questions",
                level
            );
        }
    }

    #[test]
    fn level_past_the_end_has_no_questions() {
        assert!(questions_for_level(total_levels() + 1).is_empty());
        assert!(questions_for_level(0).is_empty());
    }

    #[test]
    fn theme_double_toggle_is_identity() {
        assert_eq!(ThemeChoice::Light.toggled().toggled(), ThemeChoice::Light);
        assert_eq!(ThemeChoice::Dark.toggled().toggled(), ThemeChoice::Dark);
    }

    #[test]
    fn theme_parses_from_stored_string() {
        assert_eq!(ThemeChoice::from_str("dark"), ThemeChoice::Dark);
        assert_eq!(ThemeChoice::from_str("Dark"), ThemeChoice::Dark);
        assert_eq!(ThemeChoice::from_str("light"), ThemeChoice::Light);
        assert_eq!(ThemeChoice::from_str("garbage"), ThemeChoice::Light);
    }
}
