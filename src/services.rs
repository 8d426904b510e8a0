//! Capability seams for the two external collaborators a real system
//! would have: the analysis backend and the history store.
//!
//! The UI core only ever talks to these traits; the mock implementations
//! below stand in for a document-extraction + inference service and a
//! per-user history API. Swapping in real HTTP-backed implementations
//! means providing a different [`Services`] value in `app.rs`, nothing
//! else changes.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use uuid::Uuid;
use wasm_bindgen_futures::JsFuture;

use crate::error::ResumeLensError;
use crate::model::{
    self, AiFeedback, Certification, Education, PersonalDetails, Project, ResumeAnalysis, Skills,
    WorkExperience,
};
use crate::stats::sort_newest_first;
use crate::upload::UploadedResume;

/// Single-threaded future type; WASM has no Send executor.
pub type ServiceFuture<T> = Pin<Box<dyn Future<Output = Result<T, ResumeLensError>>>>;

/// Submits one validated upload and resolves to a fully-populated
/// record or an error. Never a partial result.
pub trait AnalysisService {
    fn submit(&self, upload: &UploadedResume) -> ServiceFuture<ResumeAnalysis>;
}

/// Read-only access to previously completed analyses.
pub trait HistoryStore {
    /// All records for the current user, newest first.
    fn list(&self) -> ServiceFuture<Vec<ResumeAnalysis>>;
    fn get(&self, id: &str) -> ServiceFuture<Option<ResumeAnalysis>>;
}

/// The injected capability bundle, provided as context in `app.rs`.
#[derive(Clone)]
pub struct Services {
    pub analysis: Arc<dyn AnalysisService + Send + Sync>,
    pub history: Arc<dyn HistoryStore + Send + Sync>,
}

impl Services {
    /// Mock wiring: simulated analysis plus a static seed history.
    pub fn mock() -> Self {
        Services {
            analysis: Arc::new(MockAnalysisService::default()),
            history: Arc::new(SeedHistoryStore),
        }
    }
}

/// How long the simulated analysis step takes.
const ANALYSIS_DELAY_MS: i32 = 3_000;

/// Simulated analysis backend. Waits a fixed delay, then returns static
/// content stamped with a fresh id and completion timestamp; the
/// uploaded file's bytes are never read.
pub struct MockAnalysisService {
    delay_ms: i32,
}

impl Default for MockAnalysisService {
    fn default() -> Self {
        MockAnalysisService {
            delay_ms: ANALYSIS_DELAY_MS,
        }
    }
}

impl AnalysisService for MockAnalysisService {
    fn submit(&self, upload: &UploadedResume) -> ServiceFuture<ResumeAnalysis> {
        let file_name = upload.file_name.clone();
        let delay_ms = self.delay_ms;
        Box::pin(async move {
            sleep_ms(delay_ms).await;
            let id = Uuid::new_v4().to_string();
            let created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
            Ok(sample_analysis(&file_name, id, created_at))
        })
    }
}

const SEED_JSON: &str = include_str!("seed_history.json");

/// History store backed by an embedded seed payload, parsed through the
/// same wire schema a real `GET /analyses` response would use.
pub struct SeedHistoryStore;

impl SeedHistoryStore {
    fn load() -> Result<Vec<ResumeAnalysis>, ResumeLensError> {
        let decoded = model::decode_history(SEED_JSON)?;
        for err in &decoded.rejected {
            web_sys::console::warn_1(
                &format!("Dropping malformed history record: {}", err).into(),
            );
        }
        let mut records = decoded.records;
        sort_newest_first(&mut records);
        Ok(records)
    }
}

impl HistoryStore for SeedHistoryStore {
    fn list(&self) -> ServiceFuture<Vec<ResumeAnalysis>> {
        Box::pin(async move { Self::load() })
    }

    fn get(&self, id: &str) -> ServiceFuture<Option<ResumeAnalysis>> {
        let id = id.to_string();
        Box::pin(async move {
            let records = Self::load()?;
            Ok(records.into_iter().find(|r| r.id == id))
        })
    }
}

/// Await a browser `setTimeout` as a future.
async fn sleep_ms(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let _ = web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
    });
    let _ = JsFuture::from(promise).await;
}

/// The static analysis content the mock backend returns.
fn sample_analysis(file_name: &str, id: String, created_at: String) -> ResumeAnalysis {
    ResumeAnalysis {
        id,
        file_name: file_name.to_string(),
        personal_details: PersonalDetails {
            name: "John Doe".to_string(),
            email: "john.doe@email.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            linkedin: Some("linkedin.com/in/johndoe".to_string()),
            portfolio: Some("johndoe.dev".to_string()),
        },
        summary: Some(
            "Experienced software developer with 5+ years in full-stack development, \
             specializing in React and Node.js applications."
                .to_string(),
        ),
        work_experience: vec![WorkExperience {
            company: "Tech Corp".to_string(),
            position: "Senior Software Developer".to_string(),
            duration: "2021 - Present".to_string(),
            description: vec![
                "Led development of React applications serving 10k+ users".to_string(),
                "Implemented CI/CD pipelines reducing deployment time by 60%".to_string(),
                "Mentored junior developers and conducted code reviews".to_string(),
            ],
        }],
        education: vec![Education {
            institution: "University of Technology".to_string(),
            degree: "Bachelor of Computer Science".to_string(),
            duration: "2015 - 2019".to_string(),
            gpa: Some("3.8".to_string()),
        }],
        projects: vec![Project {
            name: "E-commerce Platform".to_string(),
            description: "Full-stack e-commerce solution with React and Node.js".to_string(),
            technologies: vec![
                "React".to_string(),
                "Node.js".to_string(),
                "MongoDB".to_string(),
                "Stripe".to_string(),
            ],
            duration: Some("3 months".to_string()),
        }],
        certifications: vec![Certification {
            name: "AWS Certified Developer".to_string(),
            issuer: "Amazon Web Services".to_string(),
            date: "2023".to_string(),
        }],
        skills: Skills {
            technical: vec![
                "JavaScript".to_string(),
                "React".to_string(),
                "Node.js".to_string(),
                "Python".to_string(),
                "AWS".to_string(),
                "Docker".to_string(),
            ],
            soft: vec![
                "Leadership".to_string(),
                "Problem Solving".to_string(),
                "Communication".to_string(),
                "Team Collaboration".to_string(),
            ],
        },
        ai_feedback: AiFeedback {
            rating: 8.5,
            summary: "Strong technical background with good project diversity. Resume shows \
                      clear career progression and relevant skills."
                .to_string(),
            improvement_areas: vec![
                "Add more quantified achievements and metrics".to_string(),
                "Include more soft skills examples in experience descriptions".to_string(),
                "Consider adding a professional summary section".to_string(),
            ],
            suggested_skills: vec![
                "Kubernetes".to_string(),
                "GraphQL".to_string(),
                "TypeScript".to_string(),
                "Machine Learning basics".to_string(),
            ],
        },
        created_at,
    }
}
