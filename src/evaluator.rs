//! Scoring of a single guess against the secret.
//!
//! Exact matches are resolved first and consume their letter from the
//! secret; the remaining letters are then matched left to right, each secret
//! occurrence accounting for at most one `Present` mark.

use crate::debug_log;
use crate::error::GameError;
use std::collections::HashMap;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mark {
    Exact,   // Green
    Present, // Yellow
    Absent,  // Gray
}

impl Mark {
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
        }
    }

    #[must_use]
    pub fn letter(self) -> char {
        match self {
            Self::Exact => 'G',
            Self::Present => 'Y',
            Self::Absent => 'X',
        }
    }

    /// Parse from the G/Y/X notation, case-insensitive.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'G' => Some(Self::Exact),
            'Y' => Some(Self::Present),
            'X' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Per-character marks for one guess, index-aligned with the guess.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feedback(Vec<Mark>);

impl Feedback {
    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn is_all_exact(&self) -> bool {
        self.0.iter().all(|m| *m == Mark::Exact)
    }

    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.0.iter().filter(|m| **m == mark).count()
    }

    /// Parse a G/Y/X string such as `"GYXXG"`.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        s.chars().map(Mark::from_char).collect::<Option<Vec<_>>>().map(Self)
    }

    #[must_use]
    pub fn to_symbols(&self) -> String {
        self.0.iter().map(|m| m.symbol()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            write!(f, "{}", mark.letter())?;
        }
        Ok(())
    }
}

/// Score `guess` against `secret`.
///
/// Lengths are compared in characters; a mismatch is refused rather than
/// truncated.
pub fn evaluate(secret: &str, guess: &str) -> Result<Feedback, GameError> {
    let secret_chars: Vec<char> = secret.chars().collect();
    let guess_chars: Vec<char> = guess.chars().collect();
    if secret_chars.len() != guess_chars.len() {
        return Err(GameError::InvalidLength {
            expected: secret_chars.len(),
            actual: guess_chars.len(),
        });
    }

    let mut marks = vec![Mark::Absent; guess_chars.len()];
    let mut remaining: HashMap<char, usize> = HashMap::new();

    // First pass: exact positions; everything else stays available
    for (i, (&g, &s)) in guess_chars.iter().zip(&secret_chars).enumerate() {
        if g == s {
            marks[i] = Mark::Exact;
        } else {
            *remaining.entry(s).or_insert(0) += 1;
        }
    }

    // Second pass: present letters, consuming one occurrence each
    for (i, g) in guess_chars.iter().enumerate() {
        if marks[i] == Mark::Exact {
            continue;
        }
        if let Some(count) = remaining.get_mut(g)
            && *count > 0
        {
            *count -= 1;
            marks[i] = Mark::Present;
        }
    }

    let feedback = Feedback(marks);
    debug_log!("evaluate() - '{}' scored {}", guess, feedback);
    Ok(feedback)
}
