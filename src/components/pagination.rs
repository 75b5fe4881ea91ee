//! Page-number strip with previous/next controls.

use leptos::prelude::*;

use crate::state::collection::{PageMark, page_marks};

/// Pagination controls. `page` is clamped by the caller; `total_pages` is
/// derived from the filtered collection.
#[component]
pub fn Pagination(page: RwSignal<usize>, total_pages: Signal<usize>) -> impl IntoView {
    let go = move |target: usize| {
        page.set(target.clamp(1, total_pages.get_untracked().max(1)));
    };

    view! {
        <div class="pagination">
            <button
                class="page-button"
                disabled=move || page.get() <= 1
                on:click=move |_| go(page.get_untracked().saturating_sub(1))
            >
                "Previous"
            </button>

            {move || {
                let current = page.get();
                let total = total_pages.get();
                page_marks(current, total)
                    .into_iter()
                    .map(|mark| match mark {
                        PageMark::Page(n) => {
                            let class = if n == current {
                                "page-button page-button--active"
                            } else {
                                "page-button"
                            };
                            view! {
                                <button class=class on:click=move |_| go(n)>
                                    {n}
                                </button>
                            }
                                .into_any()
                        }
                        PageMark::Ellipsis => {
                            view! { <span class="pagination__ellipsis">"..."</span> }.into_any()
                        }
                    })
                    .collect::<Vec<_>>()
            }}

            <button
                class="page-button"
                disabled=move || page.get() >= total_pages.get()
                on:click=move |_| go(page.get_untracked() + 1)
            >
                "Next"
            </button>
        </div>
    }
}
