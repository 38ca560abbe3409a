//! Filter criteria for one listing request.

/// Normalized, independent filter criteria.
///
/// A `None` field places no constraint on the result. The default value
/// matches every record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FilterSpec {
    /// Case-insensitive substring of the city
    pub city: Option<String>,
    /// Case-insensitive substring of the degree
    pub degree: Option<String>,
    /// Inclusive lower bound on years of experience
    pub min_experience: Option<i32>,
    /// Inclusive upper bound on years of experience
    pub max_experience: Option<i32>,
    /// Case-insensitive substring of the first or last name
    pub search_term: Option<String>,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = non_empty(city.into());
        self
    }

    pub fn degree(mut self, degree: impl Into<String>) -> Self {
        self.degree = non_empty(degree.into());
        self
    }

    pub fn min_experience(mut self, years: i32) -> Self {
        self.min_experience = Some(years);
        self
    }

    pub fn max_experience(mut self, years: i32) -> Self {
        self.max_experience = Some(years);
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search_term = non_empty(term.into());
        self
    }

    /// Returns true if no field constrains the result.
    pub fn is_empty(&self) -> bool {
        self.city.is_none()
            && self.degree.is_none()
            && self.min_experience.is_none()
            && self.max_experience.is_none()
            && self.search_term.is_none()
    }
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}
