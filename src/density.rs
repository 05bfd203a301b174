// src/density.rs

//! Classification of escape counts into the four density levels of the
//! ASCII rendering, and the characters used to draw them.

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

/// How "deep" a sample point is relative to the iteration budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Density {
    /// Escaped within the first quarter of the budget.
    Empty,
    /// Escaped after a quarter, up to half, of the budget.
    Sparse,
    /// Escaped after half the budget but before the cap.
    Dense,
    /// Reached the cap (treated as a member of the set).
    Solid,
}

impl Density {
    /// All levels, lightest first.
    pub const ALL: [Density; 4] = [
        Density::Empty,
        Density::Sparse,
        Density::Dense,
        Density::Solid,
    ];

    /// Picks the level for `iter` out of `max_iter`.
    ///
    /// Thresholds use floor division and are checked from the strictest down,
    /// so `iter == max_iter` is always `Solid` even for tiny budgets.
    pub fn classify(iter: u32, max_iter: u32) -> Density {
        if iter == max_iter {
            Density::Solid
        } else if iter > max_iter / 2 {
            Density::Dense
        } else if iter > max_iter / 4 {
            Density::Sparse
        } else {
            Density::Empty
        }
    }

    /// Character drawn for this level with the default palette.
    pub fn as_char(self) -> char {
        Palette::default().glyph(self)
    }

    fn index(self) -> usize {
        match self {
            Density::Empty => 0,
            Density::Sparse => 1,
            Density::Dense => 2,
            Density::Solid => 3,
        }
    }
}

/// The four characters used for the density levels, lightest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Palette {
    glyphs: [char; 4],
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            glyphs: [' ', '.', '+', '*'],
        }
    }
}

impl Palette {
    /// Builds a palette from exactly four characters, lightest first.
    ///
    /// Newlines are rejected since they would break the row structure.
    pub fn from_chars(text: &str) -> Result<Self> {
        let chars: Vec<char> = text.chars().collect();
        ensure!(
            chars.len() == 4,
            "palette must have exactly 4 characters, got {} in {:?}",
            chars.len(),
            text
        );
        ensure!(
            !chars.iter().any(|c| *c == '\n' || *c == '\r'),
            "palette may not contain line breaks: {:?}",
            text
        );
        Ok(Palette {
            glyphs: [chars[0], chars[1], chars[2], chars[3]],
        })
    }

    #[inline]
    pub fn glyph(&self, density: Density) -> char {
        self.glyphs[density.index()]
    }

    pub fn chars(&self) -> [char; 4] {
        self.glyphs
    }
}

impl TryFrom<String> for Palette {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        Palette::from_chars(&value)
    }
}

impl From<Palette> for String {
    fn from(palette: Palette) -> Self {
        palette.glyphs.iter().collect()
    }
}
