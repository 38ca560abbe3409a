//! Query Composer
//!
//! Folds the optional fields of a [`FilterSpec`] into one AND-combined
//! [`Predicate`].

use crate::query::{FilterSpec, Predicate, TextField};

type Builder = fn(&FilterSpec) -> Option<Predicate>;

/// One builder per filter field, applied in this order.
const BUILDERS: [Builder; 5] = [city, degree, min_experience, max_experience, search_term];

/// Builds the predicate for `filter`.
///
/// Each present field contributes one sub-predicate and all of them are
/// AND-combined. An empty filter yields [`Predicate::All`].
pub fn compose(filter: &FilterSpec) -> Predicate {
    Predicate::and(BUILDERS.iter().filter_map(|build| build(filter)).collect())
}

fn city(filter: &FilterSpec) -> Option<Predicate> {
    text(filter.city.as_deref()).map(|c| Predicate::contains(TextField::City, c))
}

fn degree(filter: &FilterSpec) -> Option<Predicate> {
    text(filter.degree.as_deref()).map(|d| Predicate::contains(TextField::Degree, d))
}

fn min_experience(filter: &FilterSpec) -> Option<Predicate> {
    filter.min_experience.map(Predicate::MinExperience)
}

fn max_experience(filter: &FilterSpec) -> Option<Predicate> {
    filter.max_experience.map(Predicate::MaxExperience)
}

fn search_term(filter: &FilterSpec) -> Option<Predicate> {
    text(filter.search_term.as_deref()).map(|term| {
        Predicate::or(vec![
            Predicate::contains(TextField::FirstName, term),
            Predicate::contains(TextField::LastName, term),
        ])
    })
}

fn text(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
