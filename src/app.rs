//! Root application module.
//!
//! Contains the main App component, AppContext definition, and report
//! loading, following Leptos conventions.

use leptos::prelude::*;
use sizescope_core::{ReportError, SizeType};

use crate::components::tabs::ActiveTab;
use crate::components::ReportView;
use crate::config::{APP_NAME, REPORT_URL};
use crate::utils::fetch_report;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from any child
/// component using `use_context::<AppContext>()`.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Size metric every size label displays.
    pub size_type: RwSignal<SizeType>,
    /// Report view selected in the tab bar.
    pub active_tab: RwSignal<ActiveTab>,
}

impl AppContext {
    /// Creates a new application context with default state: download sizes
    /// and the breakdown tab.
    pub fn new() -> Self {
        Self {
            size_type: RwSignal::new(SizeType::default()),
            active_tab: RwSignal::new(ActiveTab::default()),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// App
// ============================================================================

/// Root application component.
///
/// Creates and provides the global AppContext, loads the report, and renders
/// a spinner while loading, an alert on failure, or the report view.
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    let report = LocalResource::new(move || async move {
        let result = fetch_report(REPORT_URL).await;
        if let Err(err) = &result {
            web_sys::console::error_1(&format!("{APP_NAME}: {err}").into());
        }
        result
    });

    view! {
        <Suspense fallback=move || view! { <LoadingView /> }>
            {move || {
                report
                    .get()
                    .map(|result| match result {
                        Ok(report) => view! { <ReportView report=report /> }.into_any(),
                        Err(error) => view! { <LoadErrorView error=error /> }.into_any(),
                    })
            }}
        </Suspense>
    }
}

#[component]
fn LoadingView() -> impl IntoView {
    view! {
        <div class="d-flex justify-content-center py-5">
            <div class="spinner-border text-secondary" role="status">
                <span class="visually-hidden">"Loading report..."</span>
            </div>
        </div>
    }
}

#[component]
fn LoadErrorView(error: ReportError) -> impl IntoView {
    view! {
        <div class="container my-4">
            <div class="alert alert-danger" role="alert">
                <h4 class="alert-heading">"Failed to load report"</h4>
                <p class="mb-0">{error.to_string()}</p>
            </div>
        </div>
    }
}
