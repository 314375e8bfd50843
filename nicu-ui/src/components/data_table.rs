//! Paginated view of an uploaded table.

use dioxus::prelude::*;
use nicu_core::Table;

/// Rows shown per page.
pub const PAGE_SIZE: usize = 15;

#[derive(Props, Clone, PartialEq)]
pub struct DataTableProps {
    pub table: Table,
}

/// One column per source column, in source order, with previous/next paging.
#[component]
pub fn DataTable(props: DataTableProps) -> Element {
    let mut page = use_signal(|| 0usize);
    let pages = props.table.page_count(PAGE_SIZE);
    // A re-upload can shrink the table under a page that no longer exists.
    let current = page().min(pages - 1);

    let columns = props.table.columns().to_vec();
    let rows: Vec<Vec<String>> = props
        .table
        .page(current, PAGE_SIZE)
        .iter()
        .map(|row| row.iter().map(ToString::to_string).collect())
        .collect();

    rsx! {
        div {
            style: "overflow-x: auto;",
            table {
                style: "border-collapse: collapse; font-size: 13px;",
                thead {
                    tr {
                        for column in columns.iter() {
                            th {
                                style: "padding: 4px 8px; border-bottom: 2px solid #ddd; text-align: left; white-space: nowrap;",
                                "{column}"
                            }
                        }
                    }
                }
                tbody {
                    for row in rows.iter() {
                        tr {
                            for value in row.iter() {
                                td {
                                    style: "padding: 4px 8px; border-bottom: 1px solid #eee; white-space: nowrap;",
                                    "{value}"
                                }
                            }
                        }
                    }
                }
            }
            div {
                style: "margin-top: 6px; display: flex; gap: 8px; align-items: center; justify-content: flex-end;",
                button {
                    disabled: current == 0,
                    onclick: move |_| page.set(current.saturating_sub(1)),
                    "<"
                }
                span { "{current + 1} / {pages}" }
                button {
                    disabled: current + 1 >= pages,
                    onclick: move |_| page.set(current + 1),
                    ">"
                }
            }
        }
    }
}
