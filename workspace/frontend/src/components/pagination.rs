use common::paging::{page_count, page_links, PageLink};
use common::ROWS_PER_PAGE_OPTIONS;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub current_page: usize,
    pub total_items: usize,
    pub rows_per_page: usize,
    pub on_page_change: Callback<usize>,
    pub on_rows_per_page_change: Callback<usize>,
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let total_pages = page_count(props.total_items, props.rows_per_page);
    let current = props.current_page;

    let on_previous = {
        let on_page_change = props.on_page_change.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if current > 1 {
                on_page_change.emit(current - 1);
            }
        })
    };

    let on_next = {
        let on_page_change = props.on_page_change.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if current < total_pages {
                on_page_change.emit(current + 1);
            }
        })
    };

    let on_rows_change = {
        let on_rows_per_page_change = props.on_rows_per_page_change.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                if let Ok(rows) = select.value().parse::<usize>() {
                    on_rows_per_page_change.emit(rows);
                }
            }
        })
    };

    let first_row = if props.total_items == 0 { 0 } else { (current - 1) * props.rows_per_page + 1 };
    let last_row = (current * props.rows_per_page).min(props.total_items);

    html! {
        <div class="flex flex-wrap justify-end items-center gap-2 my-4">
            <span class="text-sm text-base-content/70">{"Số dòng mỗi trang:"}</span>
            <select class="select select-sm select-bordered" onchange={on_rows_change}>
                { for ROWS_PER_PAGE_OPTIONS.iter().map(|&rows| html! {
                    <option value={rows.to_string()} selected={rows == props.rows_per_page}>{rows}</option>
                })}
            </select>

            <div class="ml-4 text-sm text-base-content/70">
                {format!("{}–{} / {}", first_row, last_row, props.total_items)}
            </div>

            if total_pages > 1 {
                <>
                <button
                    class="btn btn-sm"
                    disabled={current <= 1}
                    onclick={on_previous}
                >
                    <i class="fas fa-chevron-left"></i>
                </button>

                { for page_links(current, total_pages).into_iter().map(|link| match link {
                    PageLink::Ellipsis => html! {
                        <span class="px-2">{"..."}</span>
                    },
                    PageLink::Page(page) => {
                        let on_click = {
                            let on_page_change = props.on_page_change.clone();
                            Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                on_page_change.emit(page);
                            })
                        };

                        html! {
                            <button
                                class={classes!(
                                    "btn",
                                    "btn-sm",
                                    if page == current { "btn-primary" } else { "" }
                                )}
                                onclick={on_click}
                            >
                                {page}
                            </button>
                        }
                    }
                })}

                <button
                    class="btn btn-sm"
                    disabled={current >= total_pages}
                    onclick={on_next}
                >
                    <i class="fas fa-chevron-right"></i>
                </button>
                </>
            }
        </div>
    }
}
