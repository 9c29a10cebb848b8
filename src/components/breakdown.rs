//! Paginated container tables: the component breakdown and dynamic features.

use leptos::prelude::*;
use sizescope_core::{AppComponent, DynamicFeature, FileContainer};

use crate::components::container::ContainerListItem;
use crate::components::pagination::ContainerPagination;
use crate::components::table::TableState;
use crate::config::DEFAULT_PAGE_SIZE;

#[component]
pub fn Breakdown(components: Vec<AppComponent>) -> impl IntoView {
    let heading = format!("Breakdown ({} components)", components.len());

    view! {
        <h4 class="mb-3">{heading}</h4>
        <div class="row">
            <ContainerList containers=components />
        </div>
    }
}

#[component]
pub fn DynamicFeatures(features: Vec<DynamicFeature>) -> impl IntoView {
    let heading = format!("Dynamic features ({} features)", features.len());

    view! {
        <h4 class="mb-3">{heading}</h4>
        <div class="row">
            <ContainerList containers=features />
        </div>
    }
}

/// Pageable accordion over any kind of file container.
#[component]
pub fn ContainerList<C: FileContainer + Clone + Send + Sync + 'static>(
    containers: Vec<C>,
) -> impl IntoView {
    let table = TableState::new(DEFAULT_PAGE_SIZE, containers.len());
    let has_rows = !containers.is_empty();

    // Rows on the current page. Flipping pages rebuilds the row views, which
    // also resets their expansion state.
    let rows = move || {
        containers[table.window()]
            .iter()
            .cloned()
            .enumerate()
            .map(|(index, container)| {
                view! { <ContainerListItem index=index container=container /> }
            })
            .collect_view()
    };

    view! {
        <div class="accordion">{rows}</div>
        {has_rows
            .then(|| {
                view! {
                    <div class="row">
                        <ContainerPagination table=table />
                    </div>
                }
            })}
    }
}
