//! Pagination controls for container tables.
//!
//! Bootstrap pagination markup: first/previous/next/last buttons, the
//! current position, and a page size selector. Buttons that cannot move
//! further render as disabled instead of disappearing.

use leptos::prelude::*;

use crate::components::table::TableState;
use crate::config::PAGE_SIZE_OPTIONS;

#[component]
pub fn ContainerPagination(table: TableState) -> impl IntoView {
    let previous_class = move || {
        if table.can_previous() {
            "page-item"
        } else {
            "page-item disabled"
        }
    };
    let next_class = move || {
        if table.can_next() {
            "page-item"
        } else {
            "page-item disabled"
        }
    };
    let position = move || format!("{} of {}", table.page_index() + 1, table.page_count());

    let handle_page_size = move |ev: leptos::ev::Event| {
        if let Ok(page_size) = event_target_value(&ev).parse::<usize>() {
            table.set_page_size(page_size);
        }
    };

    view! {
        <div class="col">
            <nav aria-label="Table pages">
                <ul class="pagination justify-content-center">
                    <li class=previous_class>
                        <button type="button" class="page-link" on:click=move |_| table.goto_first()>
                            "<<"
                        </button>
                    </li>
                    <li class=previous_class>
                        <button type="button" class="page-link" on:click=move |_| table.previous_page()>
                            "<"
                        </button>
                    </li>
                    <li class=next_class>
                        <button type="button" class="page-link" on:click=move |_| table.next_page()>
                            ">"
                        </button>
                    </li>
                    <li class=next_class>
                        <button type="button" class="page-link" on:click=move |_| table.goto_last()>
                            ">>"
                        </button>
                    </li>
                    <li class="page-item">
                        <span class="page-link">"Page " <strong>{position}</strong></span>
                    </li>
                </ul>
            </nav>
        </div>
        <div class="col">
            <select
                class="form-select"
                prop:value=move || table.page_size().to_string()
                on:change=handle_page_size
            >
                {PAGE_SIZE_OPTIONS
                    .iter()
                    .map(|page_size| {
                        view! { <option value=page_size.to_string()>{format!("Show {page_size}")}</option> }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
