use std::rc::Rc;

use common::paging::{clamp_page, page_range};
use common::{sorted_rows, Commune, CommuneColumn, SortDirection, SortOrder};
use yew::prelude::*;

use super::pagination::Pagination;
use crate::settings::{self, SettingKey};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub communes: Rc<Vec<Commune>>,
}

/// Paginated, sortable list of the selected province's communes.
#[function_component(CommuneTable)]
pub fn commune_table(props: &Props) -> Html {
    log::trace!("CommuneTable rendering {} rows", props.communes.len());
    let sort_order = use_state(|| None::<SortOrder>);
    let page = use_state(|| 1usize);
    let rows_per_page = use_state(|| settings::get_settings().rows_per_page);

    // A new list starts again on the first page.
    {
        let page = page.clone();
        use_effect_with(props.communes.clone(), move |_| {
            page.set(1);
            || ()
        });
    }

    let on_sort = {
        let sort_order = sort_order.clone();
        Callback::from(move |column: CommuneColumn| {
            sort_order.set(SortOrder::clicked(*sort_order, column));
        })
    };

    let on_page_change = {
        let page = page.clone();
        Callback::from(move |next: usize| page.set(next))
    };

    let on_rows_per_page_change = {
        let rows_per_page = rows_per_page.clone();
        let page = page.clone();
        Callback::from(move |rows: usize| {
            log::debug!("Rows per page changed to {}", rows);
            rows_per_page.set(rows);
            page.set(1);
            if let Err(err) = settings::update_settings(&[SettingKey::RowsPerPage], |s| s.rows_per_page = rows) {
                log::warn!("Could not persist rows per page: {:?}", err);
            }
        })
    };

    let rows = sorted_rows(&props.communes, *sort_order);
    let current_page = clamp_page(*page, rows.len(), *rows_per_page);
    let visible = &rows[page_range(current_page, rows.len(), *rows_per_page)];

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">{"📋 Danh sách xã/phường"}</h2>
                <div class="overflow-x-auto">
                    <table class="table table-zebra">
                        <thead>
                            <tr>
                                { for CommuneColumn::ALL.iter().map(|&column| {
                                    render_header(column, *sort_order, on_sort.clone())
                                })}
                            </tr>
                        </thead>
                        <tbody>
                            if visible.is_empty() {
                                <tr>
                                    <td colspan={CommuneColumn::ALL.len().to_string()} class="text-center text-gray-500">
                                        {"Không có dữ liệu"}
                                    </td>
                                </tr>
                            } else {
                                { for visible.iter().map(|commune| render_row(commune)) }
                            }
                        </tbody>
                    </table>
                </div>
                <Pagination
                    current_page={current_page}
                    total_items={rows.len()}
                    rows_per_page={*rows_per_page}
                    on_page_change={on_page_change}
                    on_rows_per_page_change={on_rows_per_page_change}
                />
            </div>
        </div>
    }
}

fn render_header(column: CommuneColumn, current: Option<SortOrder>, on_sort: Callback<CommuneColumn>) -> Html {
    if !column.sortable() {
        return html! { <th>{column.label()}</th> };
    }

    let icon = match current {
        Some(order) if order.column == column => match order.direction {
            SortDirection::Ascending => html! { <i class="fas fa-sort-up ml-1"></i> },
            SortDirection::Descending => html! { <i class="fas fa-sort-down ml-1"></i> },
        },
        _ => html! { <i class="fas fa-sort ml-1 opacity-30"></i> },
    };

    let onclick = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        on_sort.emit(column);
    });

    html! {
        <th class="cursor-pointer hover:bg-base-200 select-none" onclick={onclick}>
            <div class="flex items-center gap-1">
                {column.label()}
                {icon}
            </div>
        </th>
    }
}

fn render_row(commune: &Commune) -> Html {
    html! {
        <tr class="hover">
            { for CommuneColumn::ALL.iter().map(|&column| {
                let wrap = if column.wraps() { "whitespace-normal break-words" } else { "whitespace-nowrap" };
                html! { <td class={wrap}>{column.cell(commune)}</td> }
            })}
        </tr>
    }
}
