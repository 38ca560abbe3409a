//! Seed data for the advocate collection.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::Advocate;

const SPECIALTIES: [&str; 26] = [
    "Bipolar",
    "LGBTQ",
    "Medication/Prescribing",
    "Suicide History/Attempts",
    "General Mental Health (anxiety, depression, stress, grief, life transitions)",
    "Men's issues",
    "Relationship Issues (family, friends, couple, etc)",
    "Trauma & PTSD",
    "Personality disorders",
    "Personal growth",
    "Substance use/abuse",
    "Pediatrics",
    "Women's issues (post-partum, infertility, family planning)",
    "Chronic pain",
    "Weight loss & nutrition",
    "Eating disorders",
    "Diabetic Diet and nutrition",
    "Coaching (leadership, career, academic and wellness)",
    "Life coaching",
    "Obsessive-compulsive disorders",
    "Neuropsychological evaluations & testing (ADHD testing)",
    "Attention and Hyperactivity (ADHD)",
    "Sleep issues",
    "Schizophrenia and psychotic disorders",
    "Learning disorders",
    "Domestic abuse",
];

// first name, last name, city, degree, years of experience, phone number
const PROFILES: [(&str, &str, &str, &str, i32, u64); 15] = [
    ("John", "Doe", "New York", "MD", 10, 5551234567),
    ("Jane", "Smith", "Los Angeles", "PhD", 8, 5559876543),
    ("Alice", "Johnson", "Chicago", "MSW", 5, 5554567890),
    ("Michael", "Brown", "Houston", "MD", 12, 5556543210),
    ("Emily", "Davis", "Phoenix", "PhD", 7, 5553210987),
    ("Chris", "Martinez", "Philadelphia", "MSW", 9, 5557890123),
    ("Jessica", "Taylor", "San Antonio", "MD", 11, 5554561234),
    ("David", "Harris", "San Diego", "PhD", 6, 5557896543),
    ("Laura", "Clark", "Dallas", "MSW", 4, 5550123456),
    ("Daniel", "Lewis", "San Jose", "MD", 13, 5553217654),
    ("Sarah", "Lee", "Austin", "PhD", 10, 5551238765),
    ("James", "King", "Jacksonville", "MSW", 5, 5556540987),
    ("Megan", "Green", "San Francisco", "MD", 14, 5559873456),
    ("Joshua", "Walker", "Columbus", "PhD", 9, 5556781234),
    ("Amanda", "Hall", "Fort Worth", "MSW", 3, 5559872345),
];

/// Built-in advocate profiles, ids starting at 1.
pub fn advocates() -> Vec<Advocate> {
    PROFILES
        .iter()
        .enumerate()
        .map(|(i, &(first, last, city, degree, years, phone))| Advocate {
            id: i as u64 + 1,
            first_name: first.to_string(),
            last_name: last.to_string(),
            city: city.to_string(),
            degree: degree.to_string(),
            specialties: specialties_for(i),
            years_of_experience: years,
            phone_number: phone,
        })
        .collect()
}

// Two or three specialties per profile, spread across the list.
fn specialties_for(i: usize) -> Vec<String> {
    let count = 2 + i % 2;
    (0..count)
        .map(|n| SPECIALTIES[(i * 7 + n * 5) % SPECIALTIES.len()].to_string())
        .collect()
}

/// Loads advocates from a JSON array file.
pub fn load_from_file(path: &Path) -> Result<Vec<Advocate>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse seed file {}", path.display()))
}
