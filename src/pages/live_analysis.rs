//! Live analysis page: upload a resume, run the (simulated) analysis,
//! show the results.
//!
//! Users can drag-and-drop or browse for a PDF. Only one analysis runs
//! at a time; a completed run that was superseded by a reset or a newer
//! file is dropped, never rendered.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::components::results_view::AnalysisResultsView;
use crate::components::toast::ToastContext;
use crate::error::ResumeLensError;
use crate::format::format_file_size;
use crate::model::ResumeAnalysis;
use crate::services::Services;
use crate::upload::{validate_upload, UploadedResume};

/// Live-flow state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisState {
    /// Waiting for a file.
    Idle,
    /// File accepted, ready to analyze.
    Ready(UploadedResume),
    /// Analysis in flight; the trigger is disabled.
    Analyzing(UploadedResume),
    /// Analysis finished; results on screen.
    Complete(UploadedResume, ResumeAnalysis),
}

/// Lifted into an app-level context so switching tabs never loses an
/// in-progress analysis.
#[derive(Clone, Copy)]
pub struct LiveAnalysisContext {
    pub state: RwSignal<AnalysisState>,
    /// Monotonic attempt token; bumping it invalidates whatever is in
    /// flight.
    attempt: StoredValue<u64>,
}

impl LiveAnalysisContext {
    pub fn new() -> Self {
        LiveAnalysisContext {
            state: RwSignal::new(AnalysisState::Idle),
            attempt: StoredValue::new(0),
        }
    }

    fn bump(&self) -> u64 {
        let next = self.attempt.get_value() + 1;
        self.attempt.set_value(next);
        next
    }

    fn current_attempt(&self) -> u64 {
        self.attempt.get_value()
    }
}

#[component]
pub fn LiveAnalysisPage() -> impl IntoView {
    let ctx = expect_context::<LiveAnalysisContext>();
    let toasts = expect_context::<ToastContext>();
    // Local storage: the service bundle holds Rc handles.
    let services = StoredValue::new_local(expect_context::<Services>());

    let selected = Signal::derive(move || match ctx.state.get() {
        AnalysisState::Ready(upload) | AnalysisState::Analyzing(upload) => Some(upload),
        _ => None,
    });
    let busy = Signal::derive(move || matches!(ctx.state.get(), AnalysisState::Analyzing(_)));

    // A valid file clears any displayed result; a rejected one changes
    // nothing at all.
    let on_file = Callback::new(move |file: web_sys::File| {
        match validate_upload(&file.name(), &file.type_(), file.size()) {
            Ok(upload) => {
                ctx.bump();
                ctx.state.set(AnalysisState::Ready(upload));
            }
            Err(err) => {
                let (title, description) = match &err {
                    ResumeLensError::InvalidFileType(_) => (
                        "Invalid file type",
                        "Please upload a PDF file only.".to_string(),
                    ),
                    other => ("File too large", other.to_string()),
                };
                toasts.error(title, &description);
            }
        }
    });

    let on_analyze = move |_| {
        let AnalysisState::Ready(upload) = ctx.state.get() else {
            return;
        };
        let token = ctx.bump();
        ctx.state.set(AnalysisState::Analyzing(upload.clone()));

        let analysis_service = services.with_value(|s| s.analysis.clone());
        spawn_local(async move {
            let result = analysis_service.submit(&upload).await;
            if ctx.current_attempt() != token {
                // Superseded by a reset or a newer file.
                return;
            }
            match result {
                Ok(analysis) => {
                    ctx.state.set(AnalysisState::Complete(upload, analysis));
                    toasts.success(
                        "Analysis Complete!",
                        "Your resume has been successfully analyzed.",
                    );
                }
                Err(err) => {
                    // Back to ready-with-file so the user can retry
                    // without re-uploading.
                    ctx.state.set(AnalysisState::Ready(upload));
                    toasts.error("Analysis Failed", &String::from(err));
                }
            }
        });
    };

    let on_reset = Callback::new(move |_| {
        ctx.bump();
        ctx.state.set(AnalysisState::Idle);
    });

    view! {
        <div class="page live-analysis-page">
            <style>{include_str!("live_analysis.css")}</style>

            {move || {
                match ctx.state.get() {
                    AnalysisState::Complete(_, analysis) => view! {
                        <AnalysisResultsView analysis=analysis on_back=on_reset />
                    }.into_any(),

                    state => {
                        let has_file = !matches!(&state, AnalysisState::Idle);
                        let analyzing = matches!(&state, AnalysisState::Analyzing(_));
                        view! {
                            <div class="upload-flow">
                                <h2>"Resume Analysis"</h2>
                                <p class="page-description">
                                    "Upload a PDF resume to get instant AI-powered analysis and feedback."
                                </p>

                                <ResumeDropZone selected=selected busy=busy on_file=on_file />

                                {has_file.then(|| view! {
                                    <div class="analyze-actions">
                                        <button
                                            class="btn btn-primary btn-wide"
                                            on:click=on_analyze
                                            disabled=move || busy.get()
                                        >
                                            {move || if busy.get() { "Analyzing Resume..." } else { "Analyze Resume" }}
                                        </button>
                                        {analyzing.then(|| view! {
                                            <div class="analyzing-indicator">
                                                <div class="spinner"></div>
                                                <p class="hint">
                                                    "This may take a few moments while we analyze your resume..."
                                                </p>
                                            </div>
                                        })}
                                    </div>
                                })}

                                <div class="info-card-grid">
                                    <div class="card info-card">
                                        <h4>"AI Analysis"</h4>
                                        <p>"Advanced AI reviews your resume structure, content, and provides improvement suggestions"</p>
                                    </div>
                                    <div class="card info-card">
                                        <h4>"Skill Assessment"</h4>
                                        <p>"Get personalized skill recommendations based on your experience and industry trends"</p>
                                    </div>
                                    <div class="card info-card">
                                        <h4>"Instant Feedback"</h4>
                                        <p>"Receive detailed feedback and actionable insights to enhance your resume's impact"</p>
                                    </div>
                                </div>
                            </div>
                        }.into_any()
                    }
                }
            }}
        </div>
    }
}

/// Drop zone with drag-and-drop and a browse button.
#[component]
fn ResumeDropZone(
    selected: Signal<Option<UploadedResume>>,
    busy: Signal<bool>,
    on_file: Callback<web_sys::File>,
) -> impl IntoView {
    let (is_over, set_is_over) = signal(false);
    let file_input_id = "resume-file-input";

    let on_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        set_is_over.set(false);
        if busy.get() {
            return;
        }

        if let Some(dt) = ev.data_transfer() {
            if let Some(files) = dt.files() {
                if let Some(file) = files.get(0) {
                    on_file.run(file);
                }
            }
        }
    };

    let on_input_change = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        if let Some(files) = input.files() {
            if let Some(file) = files.get(0) {
                on_file.run(file);
            }
        }
        // Clear so re-selecting the same file fires change again.
        input.set_value("");
    };

    view! {
        <div
            class="drop-zone"
            class:drop-zone-active=move || is_over.get()
            class:drop-zone-filled=move || selected.get().is_some()
            on:dragover=move |ev: web_sys::DragEvent| {
                ev.prevent_default();
                set_is_over.set(true);
            }
            on:dragleave=move |_| set_is_over.set(false)
            on:drop=on_drop
        >
            {move || {
                match selected.get() {
                    Some(upload) => view! {
                        <div class="drop-zone-content">
                            <div class="drop-icon accepted">"\u{2713}"</div>
                            <p class="drop-main">"File Selected"</p>
                            <p class="drop-file-name">{upload.file_name.clone()}</p>
                            <p class="drop-hint">{format_file_size(upload.size_bytes)}</p>
                        </div>
                    }.into_any(),
                    None => view! {
                        <div class="drop-zone-content">
                            <div class="drop-icon">"\u{2191}"</div>
                            <p class="drop-main">"Upload Your Resume"</p>
                            <p class="drop-hint">"Drag and drop your PDF resume here, or"</p>
                            <label for=file_input_id class="btn btn-secondary">
                                "Browse Files"
                            </label>
                            <p class="drop-formats">"Only PDF files are supported (max 10 MB)"</p>
                        </div>
                    }.into_any(),
                }
            }}
            <input
                type="file"
                id=file_input_id
                accept=".pdf"
                style="display: none"
                disabled=move || busy.get()
                on:change=on_input_change
            />
        </div>
    }
}

/// Helper to get a typed event target.
fn event_target<T: wasm_bindgen::JsCast>(ev: &web_sys::Event) -> T {
    ev.target().unwrap().dyn_into::<T>().unwrap()
}
