//! Historical list page.
//!
//! Read-only browsing surface over previously completed analyses, with
//! aggregate stat cards and per-row drill-down into the full results
//! view, shown in an overlay so the list never navigates away.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::rating_badge::RatingBadge;
use crate::components::results_view::AnalysisResultsView;
use crate::format::{format_date, format_time, format_timestamp};
use crate::model::ResumeAnalysis;
use crate::services::Services;
use crate::stats::HistoryStats;

#[component]
pub fn HistoryPage() -> impl IntoView {
    let services = expect_context::<Services>();

    let (records, set_records) = signal::<Option<Vec<ResumeAnalysis>>>(None);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (selected, set_selected) = signal::<Option<ResumeAnalysis>>(None);

    // Load history on mount
    {
        let history = services.history.clone();
        Effect::new(move |_| {
            let history = history.clone();
            spawn_local(async move {
                match history.list().await {
                    Ok(list) => set_records.set(Some(list)),
                    Err(e) => set_error.set(Some(String::from(e))),
                }
                set_loading.set(false);
            });
        });
    }

    view! {
        <div class="page history-page">
            <style>{include_str!("history.css")}</style>

            <h2>"Analysis History"</h2>
            <p class="page-description">
                "View all previously analyzed resumes and their AI-generated feedback."
            </p>

            {move || {
                if loading.get() {
                    view! { <p class="history-loading">"Loading history..."</p> }.into_any()
                } else if let Some(err) = error.get() {
                    view! { <p class="history-error">{err}</p> }.into_any()
                } else if let Some(records) = records.get() {
                    if records.is_empty() {
                        view! {
                            <div class="card empty-state">
                                <h3>"No Analysis History"</h3>
                                <p>
                                    "You haven't analyzed any resumes yet. Upload a resume in the "
                                    "Live Analysis tab to get started."
                                </p>
                            </div>
                        }.into_any()
                    } else {
                        let stats = HistoryStats::compute(&records);
                        view! {
                            <div class="history-content">
                                <HistoryStatCards stats=stats />
                                <div class="card">
                                    <h3>"Analyzed Resumes"</h3>
                                    <table class="history-table">
                                        <thead>
                                            <tr>
                                                <th>"Name"</th>
                                                <th>"Email"</th>
                                                <th>"File Name"</th>
                                                <th>"Rating"</th>
                                                <th>"Analyzed"</th>
                                                <th>"Actions"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {records.iter().map(|record| {
                                                let row = record.clone();
                                                view! {
                                                    <tr>
                                                        <td class="cell-name">{record.personal_details.name.clone()}</td>
                                                        <td>{record.personal_details.email.clone()}</td>
                                                        <td class="cell-file">{record.file_name.clone()}</td>
                                                        <td><RatingBadge rating=record.ai_feedback.rating /></td>
                                                        <td class="cell-date">{format_timestamp(&record.created_at)}</td>
                                                        <td>
                                                            <button
                                                                class="btn btn-small btn-secondary"
                                                                on:click=move |_| set_selected.set(Some(row.clone()))
                                                            >
                                                                "Details"
                                                            </button>
                                                        </td>
                                                    </tr>
                                                }
                                            }).collect::<Vec<_>>()}
                                        </tbody>
                                    </table>
                                </div>
                            </div>
                        }.into_any()
                    }
                } else {
                    view! { <p class="history-loading">"No data"</p> }.into_any()
                }
            }}

            // Drill-down overlay, scoped to one record
            {move || selected.get().map(|analysis| view! {
                <div class="record-overlay">
                    <div class="record-dialog">
                        <AnalysisResultsView
                            analysis=analysis
                            on_back=Callback::new(move |_| set_selected.set(None))
                            back_label="Close".to_string()
                        />
                    </div>
                </div>
            })}
        </div>
    }
}

/// The three aggregate stat cards above the table.
#[component]
fn HistoryStatCards(stats: HistoryStats) -> impl IntoView {
    let latest = stats.latest_created_at.clone();

    view! {
        <div class="stat-card-grid">
            <div class="card stat-card">
                <span class="stat-label">"Total Analyses"</span>
                <span class="stat-value">{stats.count}</span>
                <span class="stat-hint">"Resumes analyzed"</span>
            </div>
            <div class="card stat-card">
                <span class="stat-label">"Average Rating"</span>
                <span class="stat-value">
                    {stats.average_display().unwrap_or_else(|| "-".to_string())}
                </span>
                <span class="stat-hint">"Out of 10"</span>
            </div>
            <div class="card stat-card">
                <span class="stat-label">"Latest Analysis"</span>
                {match latest {
                    Some(created_at) => view! {
                        <span class="stat-value small">{format_date(&created_at)}</span>
                        <span class="stat-hint">{format_time(&created_at)}</span>
                    }.into_any(),
                    None => view! {
                        <span class="stat-value small">"-"</span>
                        <span class="stat-hint">""</span>
                    }.into_any(),
                }}
            </div>
        </div>
    }
}
