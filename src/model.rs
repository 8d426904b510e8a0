//! Analysis record types and wire schema.
//!
//! `ResumeAnalysis` is the unit of both live and historical display. The
//! serde shape here is the JSON document a backend would serve from
//! `POST /analyses` / `GET /analyses`, so the mock services parse their
//! data through exactly this schema.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::error::ResumeLensError;

/// Contact block extracted from the resume. Name, email and phone are
/// always present; renderers use them unconditionally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portfolio: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperience {
    pub company: String,
    pub position: String,
    pub duration: String,
    pub description: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub duration: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub date: String,
}

/// Two disjoint skill lists. No dedup guarantee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skills {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiFeedback {
    /// Overall score in [0, 10].
    pub rating: f64,
    pub summary: String,
    pub improvement_areas: Vec<String>,
    pub suggested_skills: Vec<String>,
}

/// One analyzed resume. Created in full when an analysis completes;
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeAnalysis {
    pub id: String,
    pub file_name: String,
    pub personal_details: PersonalDetails,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub work_experience: Vec<WorkExperience>,
    pub education: Vec<Education>,
    pub projects: Vec<Project>,
    pub certifications: Vec<Certification>,
    pub skills: Skills,
    pub ai_feedback: AiFeedback,
    /// RFC 3339 timestamp, set once at analysis completion.
    pub created_at: String,
}

impl ResumeAnalysis {
    /// Parse `created_at`. Malformed timestamps sort as oldest.
    pub fn created_at_parsed(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.created_at).ok()
    }
}

/// Three-way classification of an AI rating, shared by the results
/// renderer and the history table so both surfaces agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingBucket {
    Positive,
    Warning,
    Negative,
}

impl RatingBucket {
    /// Boundaries are inclusive on the upper bucket: 8.0 is positive,
    /// 6.0 is warning.
    pub fn from_rating(rating: f64) -> Self {
        if rating >= 8.0 {
            RatingBucket::Positive
        } else if rating >= 6.0 {
            RatingBucket::Warning
        } else {
            RatingBucket::Negative
        }
    }

    /// CSS modifier shared by badge and card styling.
    pub fn css_class(self) -> &'static str {
        match self {
            RatingBucket::Positive => "rating-positive",
            RatingBucket::Warning => "rating-warning",
            RatingBucket::Negative => "rating-negative",
        }
    }
}

/// Semantic checks beyond what serde enforces structurally.
pub fn validate_record(record: &ResumeAnalysis) -> Result<(), ResumeLensError> {
    if record.id.trim().is_empty() {
        return Err(ResumeLensError::InvalidRecord("empty id".to_string()));
    }
    if record.personal_details.name.trim().is_empty() {
        return Err(ResumeLensError::InvalidRecord("empty name".to_string()));
    }
    if record.personal_details.email.trim().is_empty() {
        return Err(ResumeLensError::InvalidRecord("empty email".to_string()));
    }
    if record.personal_details.phone.trim().is_empty() {
        return Err(ResumeLensError::InvalidRecord("empty phone".to_string()));
    }
    let rating = record.ai_feedback.rating;
    if !rating.is_finite() || !(0.0..=10.0).contains(&rating) {
        return Err(ResumeLensError::InvalidRecord(format!(
            "rating {} outside [0, 10]",
            rating
        )));
    }
    if record.created_at_parsed().is_none() {
        return Err(ResumeLensError::InvalidRecord(format!(
            "unparseable createdAt '{}'",
            record.created_at
        )));
    }
    Ok(())
}

/// Parse and validate a single wire record.
pub fn decode_record(json: &str) -> Result<ResumeAnalysis, ResumeLensError> {
    let record: ResumeAnalysis = serde_json::from_str(json)
        .map_err(|e| ResumeLensError::InvalidRecord(e.to_string()))?;
    validate_record(&record)?;
    Ok(record)
}

/// Serialize a record to the wire schema. Absent optionals are omitted,
/// not coerced to empty values.
pub fn encode_record(record: &ResumeAnalysis) -> Result<String, ResumeLensError> {
    serde_json::to_string(record).map_err(|e| ResumeLensError::InvalidRecord(e.to_string()))
}

/// A history payload with malformed elements filtered out.
#[derive(Debug)]
pub struct DecodedHistory {
    pub records: Vec<ResumeAnalysis>,
    /// Rejections, in payload order, for the caller to log.
    pub rejected: Vec<ResumeLensError>,
}

/// Parse a history collection, rejecting malformed records individually
/// so one bad element never poisons the whole list.
pub fn decode_history(json: &str) -> Result<DecodedHistory, ResumeLensError> {
    let raw: Vec<serde_json::Value> = serde_json::from_str(json)
        .map_err(|e| ResumeLensError::InvalidRecord(e.to_string()))?;

    let mut records = Vec::with_capacity(raw.len());
    let mut rejected = Vec::new();
    for value in raw {
        match serde_json::from_value::<ResumeAnalysis>(value) {
            Ok(record) => match validate_record(&record) {
                Ok(()) => records.push(record),
                Err(e) => rejected.push(e),
            },
            Err(e) => rejected.push(ResumeLensError::InvalidRecord(e.to_string())),
        }
    }
    Ok(DecodedHistory { records, rejected })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_record(id: &str, rating: f64, created_at: &str) -> ResumeAnalysis {
        ResumeAnalysis {
            id: id.to_string(),
            file_name: "resume.pdf".to_string(),
            personal_details: PersonalDetails {
                name: "Ada Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                phone: "+44 20 7946 0001".to_string(),
                linkedin: None,
                portfolio: None,
            },
            summary: None,
            work_experience: vec![],
            education: vec![],
            projects: vec![],
            certifications: vec![],
            skills: Skills {
                technical: vec![],
                soft: vec![],
            },
            ai_feedback: AiFeedback {
                rating,
                summary: "Solid resume".to_string(),
                improvement_areas: vec![],
                suggested_skills: vec![],
            },
            created_at: created_at.to_string(),
        }
    }

    #[test]
    fn test_rating_bucket_thresholds() {
        assert_eq!(RatingBucket::from_rating(10.0), RatingBucket::Positive);
        assert_eq!(RatingBucket::from_rating(8.5), RatingBucket::Positive);
        assert_eq!(RatingBucket::from_rating(8.0), RatingBucket::Positive);
        assert_eq!(RatingBucket::from_rating(7.99), RatingBucket::Warning);
        assert_eq!(RatingBucket::from_rating(6.0), RatingBucket::Warning);
        assert_eq!(RatingBucket::from_rating(5.99), RatingBucket::Negative);
        assert_eq!(RatingBucket::from_rating(0.0), RatingBucket::Negative);
    }

    #[test]
    fn test_round_trip_preserves_every_field() {
        let mut record = minimal_record("rec-1", 8.5, "2024-01-15T10:30:00Z");
        record.personal_details.linkedin = Some("linkedin.com/in/ada".to_string());
        record.summary = Some("Engine programmer".to_string());
        record.work_experience.push(WorkExperience {
            company: "Analytical Engines Ltd".to_string(),
            position: "Lead Programmer".to_string(),
            duration: "1842 - 1843".to_string(),
            description: vec!["Wrote the first published program".to_string()],
        });
        record.education.push(Education {
            institution: "Private tutors".to_string(),
            degree: "Mathematics".to_string(),
            duration: "1825 - 1835".to_string(),
            gpa: Some("4.0".to_string()),
        });
        record.projects.push(Project {
            name: "Note G".to_string(),
            description: "Bernoulli number computation".to_string(),
            technologies: vec!["Punched cards".to_string()],
            duration: None,
        });
        record.certifications.push(Certification {
            name: "Royal Society mention".to_string(),
            issuer: "Royal Society".to_string(),
            date: "1843".to_string(),
        });
        record.skills.technical.push("Algorithms".to_string());
        record.skills.soft.push("Correspondence".to_string());
        record.ai_feedback.improvement_areas.push("Add metrics".to_string());
        record.ai_feedback.suggested_skills.push("Rust".to_string());

        let json = encode_record(&record).unwrap();
        let parsed = decode_record(&json).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_absent_optionals_stay_absent_on_the_wire() {
        let record = minimal_record("rec-2", 7.0, "2024-01-15T10:30:00Z");
        let json = encode_record(&record).unwrap();

        assert!(!json.contains("\"summary\""));
        assert!(!json.contains("\"linkedin\""));
        assert!(!json.contains("\"portfolio\""));
        assert!(json.contains("\"fileName\""));
        assert!(json.contains("\"personalDetails\""));
        assert!(json.contains("\"aiFeedback\""));
        assert!(json.contains("\"createdAt\""));

        let parsed = decode_record(&json).unwrap();
        assert!(parsed.summary.is_none());
        assert!(parsed.personal_details.linkedin.is_none());
        assert!(parsed.personal_details.portfolio.is_none());
    }

    #[test]
    fn test_validate_rejects_out_of_range_rating() {
        let record = minimal_record("rec-3", 10.5, "2024-01-15T10:30:00Z");
        let err = validate_record(&record).unwrap_err();
        assert!(matches!(err, ResumeLensError::InvalidRecord(_)));

        let record = minimal_record("rec-4", -0.1, "2024-01-15T10:30:00Z");
        assert!(validate_record(&record).is_err());

        let record = minimal_record("rec-5", f64::NAN, "2024-01-15T10:30:00Z");
        assert!(validate_record(&record).is_err());
    }

    #[test]
    fn test_validate_rejects_missing_contact_fields() {
        let mut record = minimal_record("rec-6", 8.0, "2024-01-15T10:30:00Z");
        record.personal_details.email = "  ".to_string();
        assert!(validate_record(&record).is_err());

        let mut record = minimal_record("", 8.0, "2024-01-15T10:30:00Z");
        record.id = String::new();
        assert!(validate_record(&record).is_err());
    }

    #[test]
    fn test_validate_rejects_bad_timestamp() {
        let record = minimal_record("rec-7", 8.0, "January 15th");
        assert!(validate_record(&record).is_err());
    }

    #[test]
    fn test_decode_rejects_missing_required_list() {
        // Lists must be present even when empty; no serde defaults.
        let json = r#"{
            "id": "rec-8",
            "fileName": "a.pdf",
            "personalDetails": {"name": "A", "email": "a@b.c", "phone": "1"},
            "workExperience": [],
            "education": [],
            "certifications": [],
            "skills": {"technical": [], "soft": []},
            "aiFeedback": {"rating": 7.0, "summary": "ok", "improvementAreas": [], "suggestedSkills": []},
            "createdAt": "2024-01-15T10:30:00Z"
        }"#;
        let err = decode_record(json).unwrap_err();
        assert!(err.to_string().contains("projects"));
    }

    #[test]
    fn test_decode_history_skips_malformed_records() {
        let good = encode_record(&minimal_record("rec-9", 9.1, "2024-01-05T09:15:00Z")).unwrap();
        let bad_rating =
            encode_record(&minimal_record("rec-10", 42.0, "2024-01-06T09:15:00Z")).unwrap();
        let json = format!("[{}, {}, {{\"id\": \"junk\"}}]", good, bad_rating);

        let decoded = decode_history(&json).unwrap();
        assert_eq!(decoded.records.len(), 1);
        assert_eq!(decoded.records[0].id, "rec-9");
        assert_eq!(decoded.rejected.len(), 2);
    }

    #[test]
    fn test_decode_history_rejects_non_array_payload() {
        assert!(decode_history("{\"not\": \"a list\"}").is_err());
    }
}
