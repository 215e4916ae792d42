//! Standard expense categories
//!
//! The input surface offers this closed set. Stored records keep the category
//! as a plain string so that new categories can be added later without
//! migrating existing data.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the standard expense categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Travel,
    Bills,
    Shopping,
    Entertainment,
    Others,
}

impl Category {
    /// All standard categories in display order
    pub const ALL: [Category; 6] = [
        Category::Food,
        Category::Travel,
        Category::Bills,
        Category::Shopping,
        Category::Entertainment,
        Category::Others,
    ];

    /// The name stored in the ledger
    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Travel => "Travel",
            Self::Bills => "Bills",
            Self::Shopping => "Shopping",
            Self::Entertainment => "Entertainment",
            Self::Others => "Others",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Case-insensitive lookup, so "food" on the command line maps to "Food"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Returned when a name is not one of the standard categories
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown category '{0}'. Expected one of: Food, Travel, Bills, Shopping, Entertainment, Others")]
pub struct UnknownCategory(pub String);
