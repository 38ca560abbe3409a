//! Predicate Module
//!
//! A fixed, composable matching condition over advocate records.

use crate::models::Advocate;

/// Text columns a predicate can match against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    City,
    Degree,
    FirstName,
    LastName,
}

impl TextField {
    fn value(self, advocate: &Advocate) -> &str {
        match self {
            TextField::City => &advocate.city,
            TextField::Degree => &advocate.degree,
            TextField::FirstName => &advocate.first_name,
            TextField::LastName => &advocate.last_name,
        }
    }
}

// == Predicate ==
/// Matching condition consumed by a record store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Matches every record
    All,
    /// Case-insensitive substring match; `needle` is stored lowercased
    Contains { field: TextField, needle: String },
    /// `years_of_experience >= value`
    MinExperience(i32),
    /// `years_of_experience <= value`
    MaxExperience(i32),
    /// Every part must match
    And(Vec<Predicate>),
    /// At least one part must match
    Or(Vec<Predicate>),
}

impl Predicate {
    /// Case-insensitive substring predicate on a text field.
    pub fn contains(field: TextField, needle: &str) -> Self {
        Predicate::Contains {
            field,
            needle: needle.to_lowercase(),
        }
    }

    /// AND-combines `parts`. No parts yields [`Predicate::All`], a single
    /// part is returned as is.
    pub fn and(mut parts: Vec<Predicate>) -> Self {
        match parts.len() {
            0 => Predicate::All,
            1 => parts.remove(0),
            _ => Predicate::And(parts),
        }
    }

    /// OR-combines `parts`. An empty group matches nothing.
    pub fn or(parts: Vec<Predicate>) -> Self {
        Predicate::Or(parts)
    }

    // == Matches ==
    /// Evaluates the predicate against one record.
    pub fn matches(&self, advocate: &Advocate) -> bool {
        match self {
            Predicate::All => true,
            Predicate::Contains { field, needle } => {
                field.value(advocate).to_lowercase().contains(needle.as_str())
            }
            Predicate::MinExperience(min) => advocate.years_of_experience >= *min,
            Predicate::MaxExperience(max) => advocate.years_of_experience <= *max,
            Predicate::And(parts) => parts.iter().all(|p| p.matches(advocate)),
            Predicate::Or(parts) => parts.iter().any(|p| p.matches(advocate)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn advocate(first: &str, last: &str, city: &str, years: i32) -> Advocate {
        Advocate {
            id: 1,
            first_name: first.to_string(),
            last_name: last.to_string(),
            city: city.to_string(),
            degree: "MD".to_string(),
            specialties: Vec::new(),
            years_of_experience: years,
            phone_number: 5550000000,
        }
    }

    #[test]
    fn test_contains_is_case_insensitive() {
        let a = advocate("Megan", "Green", "San Francisco", 14);
        assert!(Predicate::contains(TextField::City, "FRANCISCO").matches(&a));
        assert!(Predicate::contains(TextField::City, "san f").matches(&a));
        assert!(!Predicate::contains(TextField::City, "Jose").matches(&a));
    }

    #[test]
    fn test_experience_bounds_are_inclusive() {
        let a = advocate("Laura", "Clark", "Dallas", 4);
        assert!(Predicate::MinExperience(4).matches(&a));
        assert!(Predicate::MaxExperience(4).matches(&a));
        assert!(!Predicate::MinExperience(5).matches(&a));
        assert!(!Predicate::MaxExperience(3).matches(&a));
    }

    #[test]
    fn test_and_collapses() {
        assert_eq!(Predicate::and(Vec::new()), Predicate::All);
        assert_eq!(
            Predicate::and(vec![Predicate::MinExperience(2)]),
            Predicate::MinExperience(2)
        );
    }

    #[test]
    fn test_or_group() {
        let a = advocate("James", "King", "Jacksonville", 5);
        let name = Predicate::or(vec![
            Predicate::contains(TextField::FirstName, "king"),
            Predicate::contains(TextField::LastName, "king"),
        ]);
        assert!(name.matches(&a));
        assert!(!Predicate::or(Vec::new()).matches(&a));
    }
}
