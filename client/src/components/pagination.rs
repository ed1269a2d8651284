//! Page-number control for list tables.

use content::listing::PageButton;
use leptos::prelude::*;

/// Renders prev/next and numbered buttons; ten or fewer pages are all shown,
/// more collapse to the first nine, an ellipsis, and the last page.
#[component]
pub fn Pagination(
    #[prop(into)] page: Signal<usize>,
    #[prop(into)] buttons: Signal<Vec<PageButton>>,
    #[prop(into)] total_pages: Signal<usize>,
    on_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <Show when=move || { total_pages.get() > 1 }>
            <nav class="pagination" aria-label="Pagination">
                <button
                    class="pagination__step"
                    disabled=move || page.get() <= 1
                    on:click=move |_| on_change.run(page.get().saturating_sub(1).max(1))
                >
                    "Previous"
                </button>
                {move || {
                    buttons
                        .get()
                        .into_iter()
                        .map(|button| match button {
                            PageButton::Page(n) => {
                                view! {
                                    <button
                                        class="pagination__page"
                                        class:pagination__page--active=move || page.get() == n
                                        on:click=move |_| on_change.run(n)
                                    >
                                        {n.to_string()}
                                    </button>
                                }
                                    .into_any()
                            }
                            PageButton::Ellipsis => view! { <span class="pagination__ellipsis">"…"</span> }.into_any(),
                        })
                        .collect::<Vec<_>>()
                }}
                <button
                    class="pagination__step"
                    disabled=move || page.get() >= total_pages.get()
                    on:click=move |_| on_change.run((page.get() + 1).min(total_pages.get()))
                >
                    "Next"
                </button>
            </nav>
        </Show>
    }
}
