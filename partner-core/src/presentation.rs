//! Category colours shared by every front-end.

use crate::event::EventCategory;

/// Colour assigned to an event category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorToken {
    Blue,
    Purple,
    Amber,
    Green,
    /// Fallback for names outside the category set.
    Gray,
}

impl ColorToken {
    /// Utility class used by the web front-end.
    pub fn class(&self) -> &'static str {
        match self {
            ColorToken::Blue => "bg-blue-500",
            ColorToken::Purple => "bg-purple-500",
            ColorToken::Amber => "bg-amber-500",
            ColorToken::Green => "bg-green-500",
            ColorToken::Gray => "bg-gray-500",
        }
    }

    /// Plain colour name for text-only output.
    pub fn name(&self) -> &'static str {
        match self {
            ColorToken::Blue => "blue",
            ColorToken::Purple => "purple",
            ColorToken::Amber => "amber",
            ColorToken::Green => "green",
            ColorToken::Gray => "gray",
        }
    }
}

impl EventCategory {
    pub fn color(&self) -> ColorToken {
        match self {
            EventCategory::Reminder => ColorToken::Blue,
            EventCategory::Activity => ColorToken::Purple,
            EventCategory::Milestone => ColorToken::Amber,
            EventCategory::Task => ColorToken::Green,
        }
    }
}

/// Colour for a category name. Unknown names get `ColorToken::Gray`.
pub fn color_for(category: &str) -> ColorToken {
    match category.parse::<EventCategory>() {
        Ok(category) => category.color(),
        Err(_) => ColorToken::Gray,
    }
}
