//! Expandable accordion rows for file containers.
//!
//! Expansion state lives in a per-row signal, so it resets whenever the row
//! is rebuilt (page flips, tab switches). File rows are only built once a row
//! has been expanded.

use leptos::prelude::*;
use sizescope_core::{format_size, FileContainer};

use crate::app::AppContext;
use crate::components::file_list::FileList;

#[component]
pub fn ContainerListItem<C: FileContainer + Clone + Send + Sync + 'static>(
    index: usize,
    container: C,
) -> impl IntoView {
    let expanded = RwSignal::new(false);

    view! {
        <div class="accordion-item">
            <ContainerListItemHeader index=index container=container.clone() expanded=expanded />
            <ContainerListItemBody index=index container=container expanded=expanded />
        </div>
    }
}

#[component]
fn ContainerListItemHeader<C: FileContainer + Clone + Send + Sync + 'static>(
    index: usize,
    container: C,
    expanded: RwSignal<bool>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let name = container.name().to_string();
    let owner = container.owner().map(str::to_string);
    // Rows without file data cannot be expanded
    let contains_files = container.files().is_some();

    let size = move || format_size(&container, ctx.size_type.get());
    let size_class = if contains_files {
        "ms-auto text-nowrap me-3"
    } else {
        "ms-auto text-nowrap"
    };

    let handle_toggle = move |_: leptos::ev::MouseEvent| {
        if contains_files {
            expanded.update(|value| *value = !*value);
        }
    };

    view! {
        <h2 class="accordion-header">
            <button
                type="button"
                class="accordion-button"
                class:collapsed=move || !expanded.get()
                class:disabled=!contains_files
                aria-expanded=move || expanded.get().to_string()
                aria-controls=format!("module-{index}-body")
                on:click=handle_toggle
            >
                <span class="font-monospace text-truncate me-3">{name}</span>
                {owner.map(|owner| view! { <span class="badge bg-secondary me-3">{owner}</span> })}
                <span class=size_class>{size}</span>
            </button>
        </h2>
    }
}

#[component]
fn ContainerListItemBody<C: FileContainer + Clone + Send + Sync + 'static>(
    index: usize,
    container: C,
    expanded: RwSignal<bool>,
) -> impl IntoView {
    let files = container.files().map(<[_]>::to_vec).unwrap_or_default();

    view! {
        <div
            class="accordion-collapse collapse"
            class:show=move || expanded.get()
            id=format!("module-{index}-body")
        >
            <div class="accordion-body p-0">
                <Show when=move || expanded.get()>
                    <FileList files=files.clone() />
                </Show>
            </div>
        </div>
    }
}
