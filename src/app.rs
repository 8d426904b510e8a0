use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::hooks::use_location;
use leptos_router::path;

use crate::components::toast::{ToastContext, ToastHost};
use crate::pages::history::HistoryPage;
use crate::pages::live_analysis::{LiveAnalysisContext, LiveAnalysisPage};
use crate::services::Services;
use crate::theme::{apply_theme, ThemeContext, ThemePref};

#[component]
pub fn App() -> impl IntoView {
    // Capability wiring: swap Services::mock() for real HTTP-backed
    // implementations without touching the pages.
    provide_context(Services::mock());
    // Live-flow state lives above the router so tab switches never
    // lose an in-progress analysis.
    provide_context(LiveAnalysisContext::new());
    provide_context(ToastContext::new());

    let theme = ThemeContext {
        pref: RwSignal::new(ThemePref::System),
    };
    provide_context(theme);

    // Apply theme to DOM whenever the preference changes
    Effect::new(move |_| {
        apply_theme(theme.pref.get());
    });

    view! {
        <Router>
            <div class="app-layout">
                <AppHeader />
                <main class="content">
                    <Routes fallback=|| view! { <p>"Page not found"</p> }>
                        <Route path=path!("/") view=LiveAnalysisPage />
                        <Route path=path!("/history") view=HistoryPage />
                    </Routes>
                </main>
                <ToastHost />
            </div>
        </Router>
    }
}

/// Brand header with the two-tab navigation and the theme toggle.
#[component]
fn AppHeader() -> impl IntoView {
    let theme = expect_context::<ThemeContext>();
    let pathname = use_location().pathname;

    view! {
        <header class="app-header">
            <div class="brand">
                <h1 class="brand-title">"ResumeLens"</h1>
                <p class="brand-subtitle">
                    "Upload your resume for AI-powered analysis and personalized feedback"
                </p>
            </div>
            <div class="header-row">
                <nav class="tab-bar">
                    <a href="/" class="tab" class:tab-active=move || pathname.get() == "/">
                        "Live Analysis"
                    </a>
                    <a
                        href="/history"
                        class="tab"
                        class:tab-active=move || pathname.get() == "/history"
                    >
                        "History"
                    </a>
                </nav>
                <button
                    class="btn btn-small btn-secondary"
                    on:click=move |_| theme.pref.update(|p| *p = p.next())
                >
                    {move || theme.pref.get().label()}
                </button>
            </div>
        </header>
    }
}
