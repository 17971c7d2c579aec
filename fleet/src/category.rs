//! Closed equipment category set and the catalog filter built on it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "category_test.rs"]
mod category_test;

/// Error returned when text does not name a known category or filter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CategoryError {
    #[error("unknown equipment category: {0:?}")]
    Unknown(String),
}

/// Kind of machine. Drives marker iconography and the filter buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Excavator,
    Bulldozer,
    Loader,
}

impl Category {
    /// Every category in display order.
    pub const ALL: [Category; 3] = [Self::Excavator, Self::Bulldozer, Self::Loader];

    /// Lowercase text form, matching the serde representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Excavator => "excavator",
            Self::Bulldozer => "bulldozer",
            Self::Loader => "loader",
        }
    }

    /// Display glyph shown on cards, filter buttons and map markers.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Excavator => "🏗️",
            Self::Bulldozer => "🚜",
            Self::Loader => "🏭",
        }
    }

    /// Plural label for filter buttons.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Excavator => "Экскаваторы",
            Self::Bulldozer => "Бульдозеры",
            Self::Loader => "Погрузчики",
        }
    }

    /// CSS modifier used to tint the active filter button on the map.
    #[must_use]
    pub fn accent(self) -> &'static str {
        match self {
            Self::Excavator => "blue",
            Self::Bulldozer => "green",
            Self::Loader => "orange",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "excavator" => Ok(Self::Excavator),
            "bulldozer" => Ok(Self::Bulldozer),
            "loader" => Ok(Self::Loader),
            other => Err(CategoryError::Unknown(other.to_owned())),
        }
    }
}

/// Active category constraint: everything, or one category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// "All" followed by each category, in filter-bar order.
    pub const ALL: [CategoryFilter; 4] = [
        Self::All,
        Self::Only(Category::Excavator),
        Self::Only(Category::Bulldozer),
        Self::Only(Category::Loader),
    ];

    /// Whether a record of `category` passes this filter.
    #[must_use]
    pub fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(c) => c == category,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(c) => c.as_str(),
        }
    }

    /// Button label in the catalog filter row.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "Все",
            Self::Only(c) => c.label(),
        }
    }

    /// Glyph shown beside the label. The map's "all" button reuses the excavator glyph.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::All => Category::Excavator.glyph(),
            Self::Only(c) => c.glyph(),
        }
    }

    #[must_use]
    pub fn accent(self) -> &'static str {
        match self {
            Self::All => "primary",
            Self::Only(c) => c.accent(),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryFilter {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim() == "all" {
            return Ok(Self::All);
        }
        s.parse::<Category>().map(Self::Only)
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        Self::Only(category)
    }
}
