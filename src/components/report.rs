//! Top-level report view: header, size type selection, and tab content.

use leptos::prelude::*;
use sizescope_core::{format_size, AppReport, SizeType};

use crate::app::AppContext;
use crate::components::breakdown::{Breakdown, DynamicFeatures};
use crate::components::tabs::{ActiveTab, TabBar};

#[component]
pub fn ReportView(report: AppReport) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let has_dynamic_features = report.has_dynamic_features();
    let components = report.components.clone();
    let dynamic_features = report.dynamic_features.clone();

    // Tab content is rebuilt on every switch, so table and expansion state
    // start fresh each time a tab is entered.
    let content = move || match ctx.active_tab.get() {
        ActiveTab::Breakdown => {
            view! { <Breakdown components=components.clone() /> }.into_any()
        }
        ActiveTab::DynamicFeatures => {
            view! { <DynamicFeatures features=dynamic_features.clone() /> }.into_any()
        }
    };

    view! {
        <div class="container my-4">
            <ReportHeader report=report />
            <TabBar has_dynamic_features=has_dynamic_features />
            {content}
        </div>
    }
}

#[component]
fn ReportHeader(report: AppReport) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let name = report.name.clone();
    let build = format!("{} ({})", report.version, report.variant);
    let total = move || format_size(&report, ctx.size_type.get());

    let handle_size_type = move |ev: leptos::ev::Event| {
        if let Some(size_type) = SizeType::from_key(&event_target_value(&ev)) {
            ctx.size_type.set(size_type);
        }
    };

    view! {
        <header class="d-flex align-items-center mb-4">
            <div>
                <h2 class="mb-0">{name}</h2>
                <span class="text-muted">{build}</span>
            </div>
            <div class="d-flex align-items-center ms-auto">
                <span class="fs-5 text-nowrap me-3"><strong>{total}</strong></span>
                <select
                    class="form-select w-auto"
                    prop:value=move || ctx.size_type.get().key().to_string()
                    on:change=handle_size_type
                >
                    {SizeType::ALL
                        .into_iter()
                        .map(|size_type| {
                            view! { <option value=size_type.key()>{size_type.label()}</option> }
                        })
                        .collect_view()}
                </select>
            </div>
        </header>
    }
}
