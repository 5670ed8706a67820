//! Scan result table rendered under a bot reply.

use leptos::prelude::*;

use crate::util::data_panel::{Cell, DataPanel};

/// Device or port table with an optional overflow note.
#[component]
pub fn DataTable(panel: DataPanel) -> impl IntoView {
    let DataPanel { headers, rows, note } = panel;

    view! {
        <div class="data-panel">
            <table class="data-table">
                <thead>
                    <tr>{headers.into_iter().map(|h| view! { <th>{h}</th> }).collect_view()}</tr>
                </thead>
                <tbody>
                    {rows
                        .into_iter()
                        .map(|row| view! { <tr>{row.into_iter().map(cell_view).collect_view()}</tr> })
                        .collect_view()}
                </tbody>
            </table>
            {note.map(|note| view! { <p class="data-panel__note">{note}</p> })}
        </div>
    }
}

fn cell_view(cell: Cell) -> AnyView {
    match cell {
        Cell::Code(value) => view! { <td><code>{value}</code></td> }.into_any(),
        Cell::Text(value) => view! { <td>{value}</td> }.into_any(),
        Cell::Badge { label, tone } => {
            let class = format!("status-badge {}", tone.class());
            view! { <td><span class=class>{label}</span></td> }.into_any()
        }
    }
}
