use core::fmt;
use serde::{Deserialize, Serialize};

/// Value stored in a bomb cell.
pub const BOMB: i8 = -1;

/// State of a single square.
///
/// `value` is fixed once the board is set up: [`BOMB`] for a bomb, otherwise the number of adjacent bombs. Only
/// `visible` and `flagged` change during play.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    value: i8,
    visible: bool,
    flagged: bool,
}

impl Cell {
    pub const fn value(self) -> i8 {
        self.value
    }

    pub const fn is_bomb(self) -> bool {
        self.value == BOMB
    }

    pub const fn is_visible(self) -> bool {
        self.visible
    }

    pub const fn is_flagged(self) -> bool {
        self.flagged
    }

    pub const fn render_class(self) -> CellClass {
        if self.visible {
            if self.is_bomb() {
                CellClass::Bomb
            } else if self.value > 0 {
                CellClass::Warm(self.value as u8)
            } else {
                CellClass::Shown
            }
        } else if self.flagged {
            CellClass::Flag
        } else {
            CellClass::Hidden
        }
    }

    pub const fn render_content(self) -> CellContent {
        if self.flagged {
            CellContent::Flag
        } else if !self.visible {
            CellContent::Blank
        } else if self.is_bomb() {
            CellContent::Bomb
        } else if self.value > 0 {
            CellContent::Digit(self.value as u8)
        } else {
            CellContent::Blank
        }
    }

    pub(crate) fn set_bomb(&mut self) {
        self.value = BOMB;
    }

    /// Bumps the adjacent bomb count, bombs keep their value.
    pub(crate) fn increase_value(&mut self) {
        if !self.is_bomb() {
            self.value += 1;
        }
    }

    pub(crate) fn reveal(&mut self) {
        self.visible = true;
    }

    pub(crate) fn toggle_flag(&mut self) -> bool {
        self.flagged = !self.flagged;
        self.flagged
    }
}

/// Styling tag for a cell, rendered through [`fmt::Display`] as css class names.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellClass {
    Hidden,
    Flag,
    Bomb,
    Shown,
    Warm(u8),
}

const WARM_CLASSES: [&str; 8] = [
    "warm1", "warm2", "warm3", "warm4", "warm5", "warm6", "warm7", "warm8",
];

impl CellClass {
    /// Base class plus the optional heat class of numbered cells.
    pub fn class_names(self) -> (&'static str, Option<&'static str>) {
        use CellClass::*;
        match self {
            Hidden => ("hidden", None),
            Flag => ("flag", None),
            Bomb => ("bomb", None),
            Shown => ("show", None),
            Warm(count) => (
                "show",
                WARM_CLASSES
                    .get(usize::from(count).wrapping_sub(1))
                    .copied(),
            ),
        }
    }
}

impl fmt::Display for CellClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.class_names() {
            (base, Some(heat)) => write!(f, "{base} {heat}"),
            (base, None) => f.write_str(base),
        }
    }
}

/// What goes inside a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellContent {
    Blank,
    Flag,
    Bomb,
    Digit(u8),
}

impl CellContent {
    pub const FLAG_GLYPH: &'static str = "🚩";
    pub const BOMB_GLYPH: &'static str = "💣";
}

impl fmt::Display for CellContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use CellContent::*;
        match self {
            // non-breaking space keeps empty cells from collapsing
            Blank => f.write_str("\u{a0}"),
            Flag => f.write_str(Self::FLAG_GLYPH),
            Bomb => f.write_str(Self::BOMB_GLYPH),
            Digit(count) => write!(f, "{count}"),
        }
    }
}
