use std::fmt;

use serde::{Deserialize, Serialize};

/// A named class of sensitive content.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Name,
    Email,
    Phone,
    Address,
    Ssn,
    /// Payment account number (credit card).
    Pan,
    Ip,
    Dob,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Name,
        Category::Email,
        Category::Phone,
        Category::Address,
        Category::Ssn,
        Category::Pan,
        Category::Ip,
        Category::Dob,
    ];

    /// Label used inside tokenize placeholders.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "NAME",
            Self::Email => "EMAIL",
            Self::Phone => "PHONE",
            Self::Address => "ADDRESS",
            Self::Ssn => "SSN",
            Self::Pan => "PAN",
            Self::Ip => "IP",
            Self::Dob => "DOB",
        }
    }

    /// Placeholder for the `occurrence`-th (1-based) match in one invocation.
    pub fn token(&self, occurrence: usize) -> String {
        format!("[{}_{}]", self.as_str(), occurrence)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
