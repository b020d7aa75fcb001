//! Responsive breakpoints for the converter layout
//!
//! Width thresholds live here so render code never compares raw column counts.

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Breakpoint {
    /// < 60 cols: picker shrinks, status bar drops the log line
    Compact,
    /// 60-99 cols
    Normal,
    /// 100+ cols
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=59 => Breakpoint::Compact,
            60..=99 => Breakpoint::Normal,
            _ => Breakpoint::Wide,
        }
    }

    /// Check if at least this breakpoint (inclusive)
    pub fn at_least(&self, min: Breakpoint) -> bool {
        *self >= min
    }

    /// Most picker rows shown before the list scrolls
    pub fn max_picker_rows(&self) -> usize {
        match self {
            Breakpoint::Compact => 4,
            Breakpoint::Normal => 8,
            Breakpoint::Wide => 10,
        }
    }
}
