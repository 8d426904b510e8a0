//! Aggregates over the history collection.

use crate::model::ResumeAnalysis;

/// Summary numbers for the history page stat cards.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryStats {
    pub count: usize,
    /// Arithmetic mean of all ratings; None for an empty collection.
    pub average_rating: Option<f64>,
    /// `created_at` of the most recent record, regardless of the
    /// collection's insertion order.
    pub latest_created_at: Option<String>,
}

impl HistoryStats {
    pub fn compute(records: &[ResumeAnalysis]) -> Self {
        let count = records.len();
        let average_rating = if count == 0 {
            None
        } else {
            let sum: f64 = records.iter().map(|r| r.ai_feedback.rating).sum();
            Some(sum / count as f64)
        };
        let latest_created_at = records
            .iter()
            .max_by_key(|r| r.created_at_parsed())
            .map(|r| r.created_at.clone());

        HistoryStats {
            count,
            average_rating,
            latest_created_at,
        }
    }

    /// Average rounded to one decimal for display, e.g. "8.3".
    pub fn average_display(&self) -> Option<String> {
        self.average_rating.map(|avg| format!("{:.1}", avg))
    }
}

/// Sort a collection descending by `created_at`. Records with a
/// malformed timestamp sink to the end.
pub fn sort_newest_first(records: &mut [ResumeAnalysis]) {
    records.sort_by(|a, b| b.created_at_parsed().cmp(&a.created_at_parsed()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AiFeedback, PersonalDetails, Skills};

    fn record(id: &str, rating: f64, created_at: &str) -> ResumeAnalysis {
        ResumeAnalysis {
            id: id.to_string(),
            file_name: format!("{}.pdf", id),
            personal_details: PersonalDetails {
                name: "Test Person".to_string(),
                email: "test@example.com".to_string(),
                phone: "+1 555 0100".to_string(),
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
                summary: String::new(),
                improvement_areas: vec![],
                suggested_skills: vec![],
            },
            created_at: created_at.to_string(),
        }
    }

    #[test]
    fn test_average_rounds_to_one_decimal() {
        let records = vec![
            record("a", 8.5, "2024-01-15T10:30:00Z"),
            record("b", 7.2, "2024-01-10T14:20:00Z"),
            record("c", 9.1, "2024-01-05T09:15:00Z"),
        ];
        let stats = HistoryStats::compute(&records);
        assert_eq!(stats.count, 3);
        assert_eq!(stats.average_display(), Some("8.3".to_string()));
    }

    #[test]
    fn test_empty_collection_has_no_average_or_latest() {
        let stats = HistoryStats::compute(&[]);
        assert_eq!(stats.count, 0);
        assert_eq!(stats.average_rating, None);
        assert_eq!(stats.average_display(), None);
        assert_eq!(stats.latest_created_at, None);
    }

    #[test]
    fn test_latest_ignores_insertion_order() {
        let records = vec![
            record("old", 5.0, "2024-01-05T09:15:00Z"),
            record("newest", 6.0, "2024-03-01T08:00:00Z"),
            record("mid", 7.0, "2024-01-15T10:30:00Z"),
        ];
        let stats = HistoryStats::compute(&records);
        assert_eq!(
            stats.latest_created_at,
            Some("2024-03-01T08:00:00Z".to_string())
        );
    }

    #[test]
    fn test_sort_newest_first() {
        let mut records = vec![
            record("mid", 7.0, "2024-01-10T14:20:00Z"),
            record("new", 8.0, "2024-01-15T10:30:00Z"),
            record("old", 9.0, "2024-01-05T09:15:00Z"),
        ];
        sort_newest_first(&mut records);
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_sort_sinks_malformed_timestamps() {
        let mut records = vec![
            record("bad", 7.0, "not a date"),
            record("good", 8.0, "2024-01-15T10:30:00Z"),
        ];
        sort_newest_first(&mut records);
        assert_eq!(records[0].id, "good");
        assert_eq!(records[1].id, "bad");
    }
}
