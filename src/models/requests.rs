//! Request DTOs for the listing API
//!
//! Defines the query string accepted by `GET /api/advocates`.

use tracing::debug;

use crate::error::ValidationError;
use crate::listing::{Page, DEFAULT_LIMIT, DEFAULT_PAGE};
use crate::query::FilterSpec;

/// Raw query parameters for the listing endpoint.
///
/// Every field is kept as text so that malformed numbers never reject the
/// request; they are recovered into defaults by [`ListingParams::page`] and
/// [`ListingParams::filter`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingParams {
    /// 1-based page index (default 1)
    pub page: Option<String>,
    /// Page size (default 10, clamped to 1..=100)
    pub limit: Option<String>,
    pub city: Option<String>,
    pub degree: Option<String>,
    pub min_experience: Option<String>,
    pub max_experience: Option<String>,
    /// Name search term, matched against first or last name
    pub search: Option<String>,
}

impl ListingParams {
    /// Collects the listing parameters from decoded query pairs.
    ///
    /// A repeated parameter keeps its first value. Unknown names are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = Self::default();

        for (name, value) in pairs {
            let slot = match name.as_str() {
                "page" => &mut params.page,
                "limit" => &mut params.limit,
                "city" => &mut params.city,
                "degree" => &mut params.degree,
                "minExperience" => &mut params.min_experience,
                "maxExperience" => &mut params.max_experience,
                "search" => &mut params.search,
                _ => continue,
            };
            slot.get_or_insert(value);
        }

        params
    }

    /// Sanitized pagination coordinates.
    pub fn page(&self) -> Page {
        let index = numeric("page", self.page.as_deref()).unwrap_or(i64::from(DEFAULT_PAGE));
        let size = numeric("limit", self.limit.as_deref()).unwrap_or(i64::from(DEFAULT_LIMIT));
        Page::new(index, size)
    }

    /// Normalized filter criteria. Empty strings count as absent.
    ///
    /// Experience bounds beyond the `i32` range saturate, so an extreme
    /// bound still narrows the result instead of vanishing.
    pub fn filter(&self) -> FilterSpec {
        FilterSpec {
            city: text(self.city.as_deref()),
            degree: text(self.degree.as_deref()),
            min_experience: numeric("minExperience", self.min_experience.as_deref())
                .map(saturate_i32),
            max_experience: numeric("maxExperience", self.max_experience.as_deref())
                .map(saturate_i32),
            search_term: text(self.search.as_deref()),
        }
    }
}

fn text(raw: Option<&str>) -> Option<String> {
    raw.filter(|v| !v.is_empty()).map(str::to_string)
}

fn numeric(param: &'static str, raw: Option<&str>) -> Option<i64> {
    let raw = raw.filter(|v| !v.trim().is_empty())?;
    match parse_param(param, raw) {
        Ok(value) => Some(value),
        Err(err) => {
            debug!(error = %err, "Ignoring malformed query parameter");
            None
        }
    }
}

fn saturate_i32(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Reads the leading integer of one numeric query parameter.
///
/// Leading whitespace and an optional sign are accepted and anything after
/// the digits is ignored, so `"2.5"` reads as 2 and `"20abc"` as 20. Values
/// beyond the `i64` range saturate. Text without leading digits is an error.
pub fn parse_param(param: &'static str, raw: &str) -> Result<i64, ValidationError> {
    let text = raw.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let digit_count = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digit_count == 0 {
        return Err(ValidationError {
            param,
            value: raw.to_string(),
        });
    }

    let value = rest[..digit_count].bytes().fold(0i64, |acc, digit| {
        let digit = i64::from(digit - b'0');
        if negative {
            acc.saturating_mul(10).saturating_sub(digit)
        } else {
            acc.saturating_mul(10).saturating_add(digit)
        }
    });

    Ok(value)
}
