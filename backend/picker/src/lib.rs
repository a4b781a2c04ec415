//! # Picker
//!
//! Day 1. Every student gets one of three services to build, chosen by
//! hashing their name so the same student always lands on the same task.
//!
//! ## Algorithm
//!
//! - Concatenate first and last name, trim, lowercase, drop every space
//! - MD5 the result and read the digest as a big-endian integer
//! - Take it mod 3: document check, antifraud, or scoring
use std::fmt;

use md5::{Digest, Md5};
use serde::Serialize;

pub mod config;
pub mod routes;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Assignment {
    #[serde(rename = "document check service")]
    DocumentCheck,
    #[serde(rename = "antifraud service")]
    Antifraud,
    #[serde(rename = "scoring service")]
    Scoring,
}

impl Assignment {
    pub const ALL: [Assignment; 3] = [
        Assignment::DocumentCheck,
        Assignment::Antifraud,
        Assignment::Scoring,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Assignment::DocumentCheck => "document check service",
            Assignment::Antifraud => "antifraud service",
            Assignment::Scoring => "scoring service",
        }
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn normalize(first_name: &str, last_name: &str) -> String {
    format!("{first_name}{last_name}")
        .trim()
        .to_lowercase()
        .replace(' ', "")
}

pub fn option(first_name: &str, last_name: &str) -> Assignment {
    let digest = Md5::digest(normalize(first_name, last_name).as_bytes());

    // big-endian digest mod 3, reduced one byte at a time
    let remainder = digest
        .iter()
        .fold(0u32, |acc, &byte| (acc * 256 + u32::from(byte)) % 3);

    Assignment::ALL[remainder as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("John", "Doe"), "johndoe");
        assert_eq!(normalize(" John ", " Doe "), "johndoe");
        assert_eq!(normalize("Mary Ann", "Smith"), "maryannsmith");
        assert_eq!(normalize("Иван", "Иванов"), "иваниванов");
        assert_eq!(normalize("", ""), "");
    }

    #[test]
    fn test_known_assignments() {
        assert_eq!(option("John", "Doe"), Assignment::Antifraud);
        assert_eq!(option("Иван", "Иванов"), Assignment::Scoring);
        assert_eq!(option("ivan", "ivanov"), Assignment::Antifraud);
        assert_eq!(option("Ada", "Lovelace"), Assignment::Scoring);
        assert_eq!(option("Grace", "Hopper"), Assignment::DocumentCheck);
        assert_eq!(option("", ""), Assignment::DocumentCheck);
    }

    #[test]
    fn test_case_and_spacing_do_not_matter() {
        assert_eq!(option("JOHN", "DOE"), option("john", "doe"));
        assert_eq!(option("  John", "Doe  "), option("John", "Doe"));
        assert_eq!(option("Mary Ann", "Smith"), option("MaryAnn", "Smith"));
    }

    #[test]
    fn test_display_matches_serialized_name() {
        for assignment in Assignment::ALL {
            assert_eq!(assignment.to_string(), assignment.as_str());
        }
        assert_eq!(Assignment::Scoring.to_string(), "scoring service");
    }
}
