use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CriteriaError {
    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Invalid value for quantity: {value}")]
    InvalidQuantity { value: String },
}

/// Per-request filter set for the people search. Transient, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    pub name: Option<String>,
    pub city: Option<String>,
    pub quantity: Option<i64>,
}

impl SearchCriteria {
    /// Strict parse of the /search-csv query string. Unrecognized parameters
    /// are rejected by name; empty values impose no constraint.
    pub fn from_query(params: &HashMap<String, String>) -> Result<Self, CriteriaError> {
        let mut criteria = Self::default();

        for (key, value) in params {
            match key.as_str() {
                "name" => criteria.name = non_empty(value),
                "city" => criteria.city = non_empty(value),
                "quantity" => {
                    if value.is_empty() {
                        continue;
                    }
                    let quantity = value.parse::<i64>().map_err(|_| CriteriaError::InvalidQuantity {
                        value: value.clone(),
                    })?;
                    criteria.quantity = Some(quantity);
                }
                unknown => return Err(CriteriaError::UnknownField(unknown.to_string())),
            }
        }

        Ok(criteria)
    }

    /// Effective result cap. Absent or non-positive quantities leave the
    /// match set unbounded.
    pub fn limit(&self) -> Option<usize> {
        match self.quantity {
            Some(quantity) if quantity > 0 => Some(quantity as usize),
            _ => None,
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
