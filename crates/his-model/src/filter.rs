//! Filter selections as chosen in the presenter.

use serde::{Deserialize, Serialize};

/// Sentinel meaning "no restriction" for every filter widget.
pub const ALL: &str = "Todos";

/// A single equality predicate: either match everything or one value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterValue {
    #[default]
    All,
    Equals(String),
}

impl FilterValue {
    /// Interpret a widget selection; the literal sentinel maps to `All`.
    pub fn from_selection(value: &str) -> Self {
        if value == ALL {
            FilterValue::All
        } else {
            FilterValue::Equals(value.to_string())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, FilterValue::All)
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            FilterValue::All => None,
            FilterValue::Equals(value) => Some(value.as_str()),
        }
    }
}

/// The five independent filter predicates. They compose as a logical AND;
/// no invariant links them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterSet {
    /// Year, compared after numeric coercion. A non-numeric selection is
    /// treated as a no-op rather than an error.
    pub year: FilterValue,
    /// Spanish month name, compared against the derived month-name column.
    pub month_name: FilterValue,
    pub establishment: FilterValue,
    pub profession: FilterValue,
    pub professional: FilterValue,
}

impl FilterSet {
    pub fn is_unfiltered(&self) -> bool {
        self.year.is_all()
            && self.month_name.is_all()
            && self.establishment.is_all()
            && self.profession.is_all()
            && self.professional.is_all()
    }
}
