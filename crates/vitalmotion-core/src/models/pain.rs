// ABOUTME: Pain note models with validated pain levels and raw stored documents
// ABOUTME: RawPainReport mirrors loosely typed storage; PainReport is the checked form
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 VitalMotion Contributors

use super::muscle::{MuscleGroup, UnknownMuscleGroup};
use crate::constants::pain::{DATE_FORMAT, MAX_PAIN_LEVEL, MIN_PAIN_LEVEL};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Pain level outside the 1-10 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("pain level {0} is outside 1..=10")]
pub struct PainLevelOutOfRange(pub i64);

/// Self-reported pain on a 1-10 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct PainLevel(u8);

impl PainLevel {
    /// Validate a raw level
    ///
    /// # Errors
    ///
    /// Returns [`PainLevelOutOfRange`] unless `MIN_PAIN_LEVEL <= level <= MAX_PAIN_LEVEL`
    pub fn new(level: i64) -> Result<Self, PainLevelOutOfRange> {
        u8::try_from(level)
            .ok()
            .filter(|value| (MIN_PAIN_LEVEL..=MAX_PAIN_LEVEL).contains(value))
            .map(Self)
            .ok_or(PainLevelOutOfRange(level))
    }

    /// Numeric value
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for PainLevel {
    type Error = PainLevelOutOfRange;

    fn try_from(level: i64) -> Result<Self, Self::Error> {
        Self::new(level)
    }
}

impl From<PainLevel> for u8 {
    fn from(level: PainLevel) -> Self {
        level.0
    }
}

impl fmt::Display for PainLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated pain note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PainReport {
    /// Calendar day of the report
    pub date: NaiveDate,
    /// Muscle the pain refers to
    #[serde(rename = "body_part")]
    pub muscle_group: MuscleGroup,
    /// Reported level
    pub pain_level: PainLevel,
}

impl PainReport {
    /// Stored document form: `{ date: "YYYY-MM-DD", body_part, pain_level }`
    #[must_use]
    pub fn to_document(&self) -> Value {
        serde_json::json!({
            "date": self.date.format(DATE_FORMAT).to_string(),
            "body_part": self.muscle_group.as_str(),
            "pain_level": self.pain_level.value(),
        })
    }
}

/// Why a stored pain note could not be used
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedPainReport {
    /// A required field is absent or has the wrong JSON type
    #[error("missing field: {0}")]
    MissingField(&'static str),
    /// `date` is not `YYYY-MM-DD`
    #[error("invalid date: {0}")]
    InvalidDate(String),
    /// `body_part` did not name a muscle group
    #[error(transparent)]
    UnknownMuscle(#[from] UnknownMuscleGroup),
    /// `pain_level` is outside the scale
    #[error(transparent)]
    LevelOutOfRange(#[from] PainLevelOutOfRange),
}

/// Pain note as read from storage, before validation
///
/// Stored documents are user-written and may lack fields or carry the wrong
/// types; every field is therefore optional here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPainReport {
    /// Date string, expected `YYYY-MM-DD`
    pub date: Option<String>,
    /// Muscle name
    pub body_part: Option<String>,
    /// Integer level
    pub pain_level: Option<i64>,
}

impl RawPainReport {
    /// Extract fields from an arbitrary stored document, ignoring wrongly typed values
    #[must_use]
    pub fn from_document(doc: &Value) -> Self {
        Self {
            date: doc.get("date").and_then(Value::as_str).map(str::to_owned),
            body_part: doc
                .get("body_part")
                .and_then(Value::as_str)
                .map(str::to_owned),
            pain_level: doc.get("pain_level").and_then(Value::as_i64),
        }
    }

    /// Check every field and produce a [`PainReport`]
    ///
    /// # Errors
    ///
    /// Returns [`MalformedPainReport`] describing the first failing field
    pub fn validate(&self) -> Result<PainReport, MalformedPainReport> {
        let date_str = self
            .date
            .as_deref()
            .ok_or(MalformedPainReport::MissingField("date"))?;
        let body_part = self
            .body_part
            .as_deref()
            .ok_or(MalformedPainReport::MissingField("body_part"))?;
        let level = self
            .pain_level
            .ok_or(MalformedPainReport::MissingField("pain_level"))?;

        let date = NaiveDate::parse_from_str(date_str, DATE_FORMAT)
            .map_err(|_| MalformedPainReport::InvalidDate(date_str.to_owned()))?;

        Ok(PainReport {
            date,
            muscle_group: body_part.parse()?,
            pain_level: PainLevel::new(level)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pain_level_bounds() {
        assert!(PainLevel::new(0).is_err());
        assert_eq!(PainLevel::new(1).map(PainLevel::value), Ok(1));
        assert_eq!(PainLevel::new(10).map(PainLevel::value), Ok(10));
        assert_eq!(PainLevel::new(11), Err(PainLevelOutOfRange(11)));
        assert!(PainLevel::new(-3).is_err());
        assert!(PainLevel::new(i64::from(u8::MAX) + 1).is_err());
    }

    #[test]
    fn test_pain_level_deserialization_validates() {
        assert!(serde_json::from_str::<PainLevel>("7").is_ok());
        assert!(serde_json::from_str::<PainLevel>("42").is_err());
    }

    #[test]
    fn test_raw_report_validates_into_pain_report() {
        let raw = RawPainReport::from_document(&json!({
            "date": "2025-03-01",
            "body_part": "Biceps",
            "pain_level": 4
        }));
        let report = raw.validate().unwrap();
        assert_eq!(report.muscle_group, MuscleGroup::Biceps);
        assert_eq!(report.pain_level.value(), 4);
        assert_eq!(report.date, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
    }

    #[test]
    fn test_raw_report_rejects_malformed_documents() {
        let missing = RawPainReport::from_document(&json!({"date": "2025-03-01", "pain_level": 4}));
        assert_eq!(
            missing.validate(),
            Err(MalformedPainReport::MissingField("body_part"))
        );

        let wrong_type = RawPainReport::from_document(&json!({
            "date": "2025-03-01",
            "body_part": "Abs",
            "pain_level": "four"
        }));
        assert_eq!(
            wrong_type.validate(),
            Err(MalformedPainReport::MissingField("pain_level"))
        );

        let bad_date = RawPainReport::from_document(&json!({
            "date": "03/01/2025",
            "body_part": "Abs",
            "pain_level": 4
        }));
        assert!(matches!(
            bad_date.validate(),
            Err(MalformedPainReport::InvalidDate(_))
        ));

        let unknown = RawPainReport::from_document(&json!({
            "date": "2025-03-01",
            "body_part": "Calves",
            "pain_level": 4
        }));
        assert!(matches!(
            unknown.validate(),
            Err(MalformedPainReport::UnknownMuscle(_))
        ));
    }

    #[test]
    fn test_document_form_uses_stored_field_names() {
        let report = PainReport {
            date: NaiveDate::from_ymd_opt(2025, 1, 9).unwrap(),
            muscle_group: MuscleGroup::Glutes,
            pain_level: PainLevel::new(2).unwrap(),
        };
        assert_eq!(
            report.to_document(),
            json!({"date": "2025-01-09", "body_part": "Glutes", "pain_level": 2})
        );
    }
}
