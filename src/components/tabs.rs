//! Tab navigation between report views.

use icondata::Icon as IconData;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;

/// Report views reachable from the tab bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActiveTab {
    #[default]
    Breakdown,
    DynamicFeatures,
}

impl ActiveTab {
    pub fn label(&self) -> &'static str {
        match self {
            ActiveTab::Breakdown => "Breakdown",
            ActiveTab::DynamicFeatures => "Dynamic features",
        }
    }
}

#[component]
pub fn TabBar(has_dynamic_features: bool) -> impl IntoView {
    view! {
        <ul class="nav nav-tabs mb-4">
            <TabItem tab=ActiveTab::Breakdown icon=ic::BREAKDOWN />
            {has_dynamic_features
                .then(|| view! { <TabItem tab=ActiveTab::DynamicFeatures icon=ic::DYNAMIC_FEATURES /> })}
        </ul>
    }
}

#[component]
fn TabItem(tab: ActiveTab, icon: IconData) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let class = move || {
        if ctx.active_tab.get() == tab {
            "nav-link active"
        } else {
            "nav-link"
        }
    };

    view! {
        <li class="nav-item">
            <button type="button" class=class on:click=move |_| ctx.active_tab.set(tab)>
                <Icon icon=icon />
                " "
                {tab.label()}
            </button>
        </li>
    }
}
