//! File rows shown inside an expanded container.

use leptos::prelude::*;
use sizescope_core::{format_size, AppFile};

use crate::app::AppContext;

#[component]
pub fn FileList(files: Vec<AppFile>) -> impl IntoView {
    view! {
        <div class="list-group list-group-flush">
            {files
                .into_iter()
                .map(|file| view! { <FileListItem file=file /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn FileListItem(file: AppFile) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let name = file.name.clone();
    let size = move || format_size(&file, ctx.size_type.get());

    view! {
        <div class="list-group-item d-flex border-0">
            <span class="font-monospace text-truncate me-2">{name}</span>
            <span class="ms-auto me-custom text-nowrap">{size}</span>
        </div>
    }
}
