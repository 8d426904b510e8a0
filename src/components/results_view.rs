//! Read-only presentation of one analysis record.
//!
//! Pure view of a [`ResumeAnalysis`]: every field is rendered, optional
//! fields are omitted entirely when absent. The record is never mutated;
//! the only output is the back callback.

use leptos::prelude::*;

use crate::format::format_rating;
use crate::model::{RatingBucket, ResumeAnalysis};

/// Full results view, used by both the live flow and the history
/// drill-down.
#[component]
pub fn AnalysisResultsView(
    analysis: ResumeAnalysis,
    /// Invoked when the user asks to go back to the upload flow.
    on_back: Callback<()>,
    /// Label for the back action; the history overlay relabels it.
    #[prop(optional, into)]
    back_label: Option<String>,
) -> impl IntoView {
    let back_label = back_label.unwrap_or_else(|| "Analyze New Resume".to_string());
    let bucket = RatingBucket::from_rating(analysis.ai_feedback.rating);
    let rating_display = format_rating(analysis.ai_feedback.rating);

    view! {
        <div class="results-view">
            <style>{include_str!("results_view.css")}</style>

            <div class="results-header">
                <div>
                    <h2>"Analysis Results"</h2>
                    <p class="results-file-name">{analysis.file_name.clone()}</p>
                </div>
                <button class="btn btn-secondary" on:click=move |_| on_back.run(())>
                    {back_label}
                </button>
            </div>

            // AI score card, tinted by rating bucket
            <div class=format!("card score-card {}", bucket.css_class())>
                <h3>"AI Analysis Score"</h3>
                <div class="score-row">
                    <div class="score-number-block">
                        <span class="score-number">{rating_display}</span>
                        <span class="score-denominator">"out of 10"</span>
                    </div>
                    <p class="score-summary">{analysis.ai_feedback.summary.clone()}</p>
                </div>
            </div>

            // Personal details
            <div class="card">
                <h3>"Personal Information"</h3>
                <div class="personal-grid">
                    <div class="personal-column">
                        <div class="personal-row">
                            <span class="personal-label">"Name"</span>
                            <span class="personal-value name">{analysis.personal_details.name.clone()}</span>
                        </div>
                        <div class="personal-row">
                            <span class="personal-label">"Email"</span>
                            <span class="personal-value">{analysis.personal_details.email.clone()}</span>
                        </div>
                        <div class="personal-row">
                            <span class="personal-label">"Phone"</span>
                            <span class="personal-value">{analysis.personal_details.phone.clone()}</span>
                        </div>
                    </div>
                    <div class="personal-column">
                        {analysis.personal_details.linkedin.clone().map(|url| view! {
                            <div class="personal-row">
                                <span class="personal-label">"LinkedIn"</span>
                                <span class="personal-value">{url}</span>
                            </div>
                        })}
                        {analysis.personal_details.portfolio.clone().map(|url| view! {
                            <div class="personal-row">
                                <span class="personal-label">"Portfolio"</span>
                                <span class="personal-value">{url}</span>
                            </div>
                        })}
                    </div>
                </div>
            </div>

            // Professional summary, only when present
            {analysis.summary.clone().map(|summary| view! {
                <div class="card">
                    <h3>"Professional Summary"</h3>
                    <p class="summary-text">{summary}</p>
                </div>
            })}

            // Work experience
            <div class="card">
                <h3>"Work Experience"</h3>
                <div class="experience-list">
                    {analysis.work_experience.iter().map(|exp| view! {
                        <div class="experience-entry">
                            <div class="experience-head">
                                <div>
                                    <h4>{exp.position.clone()}</h4>
                                    <p class="entry-subtitle">{exp.company.clone()}</p>
                                </div>
                                <span class="badge badge-outline">{exp.duration.clone()}</span>
                            </div>
                            <ul class="experience-bullets">
                                {exp.description.iter().map(|line| view! {
                                    <li>{line.clone()}</li>
                                }).collect::<Vec<_>>()}
                            </ul>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>
            </div>

            <div class="results-grid">
                // Education
                <div class="card">
                    <h3>"Education"</h3>
                    <div class="entry-list">
                        {analysis.education.iter().map(|edu| view! {
                            <div class="entry">
                                <h4>{edu.degree.clone()}</h4>
                                <p class="entry-subtitle">{edu.institution.clone()}</p>
                                <div class="badge-row">
                                    <span class="badge badge-outline">{edu.duration.clone()}</span>
                                    {edu.gpa.clone().map(|gpa| view! {
                                        <span class="badge badge-secondary">{format!("GPA: {}", gpa)}</span>
                                    })}
                                </div>
                            </div>
                        }).collect::<Vec<_>>()}
                    </div>
                </div>

                // Skills
                <div class="card">
                    <h3>"Skills"</h3>
                    <div class="entry-list">
                        <div>
                            <h4>"Technical Skills"</h4>
                            <div class="badge-row wrap">
                                {analysis.skills.technical.iter().map(|skill| view! {
                                    <span class="badge badge-primary">{skill.clone()}</span>
                                }).collect::<Vec<_>>()}
                            </div>
                        </div>
                        <div>
                            <h4>"Soft Skills"</h4>
                            <div class="badge-row wrap">
                                {analysis.skills.soft.iter().map(|skill| view! {
                                    <span class="badge badge-secondary">{skill.clone()}</span>
                                }).collect::<Vec<_>>()}
                            </div>
                        </div>
                    </div>
                </div>
            </div>

            <div class="results-grid">
                // Projects
                <div class="card">
                    <h3>"Projects"</h3>
                    <div class="entry-list">
                        {analysis.projects.iter().map(|project| view! {
                            <div class="entry">
                                <h4>{project.name.clone()}</h4>
                                <p class="entry-description">{project.description.clone()}</p>
                                <div class="badge-row wrap">
                                    {project.technologies.iter().map(|tech| view! {
                                        <span class="badge badge-outline">{tech.clone()}</span>
                                    }).collect::<Vec<_>>()}
                                    {project.duration.clone().map(|duration| view! {
                                        <span class="badge badge-secondary">{duration}</span>
                                    })}
                                </div>
                            </div>
                        }).collect::<Vec<_>>()}
                    </div>
                </div>

                // Certifications
                <div class="card">
                    <h3>"Certifications"</h3>
                    <div class="entry-list">
                        {analysis.certifications.iter().map(|cert| view! {
                            <div class="entry">
                                <h4>{cert.name.clone()}</h4>
                                <p class="entry-subtitle">{cert.issuer.clone()}</p>
                                <div class="badge-row">
                                    <span class="badge badge-outline">{cert.date.clone()}</span>
                                </div>
                            </div>
                        }).collect::<Vec<_>>()}
                    </div>
                </div>
            </div>

            <div class="results-grid">
                // Improvement areas
                <div class="card">
                    <h3>"Areas for Improvement"</h3>
                    <ul class="improvement-list">
                        {analysis.ai_feedback.improvement_areas.iter().map(|area| view! {
                            <li>{area.clone()}</li>
                        }).collect::<Vec<_>>()}
                    </ul>
                </div>

                // Suggested skills
                <div class="card">
                    <h3>"Suggested Skills to Learn"</h3>
                    <div class="badge-row wrap">
                        {analysis.ai_feedback.suggested_skills.iter().map(|skill| view! {
                            <span class="badge badge-outline suggested">{skill.clone()}</span>
                        }).collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
        </div>
    }
}
