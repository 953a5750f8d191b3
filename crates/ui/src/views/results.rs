use dioxus::prelude::*;

use crate::vm::ReportRowVm;

#[component]
pub fn ResultsTable(rows: Vec<ReportRowVm>) -> Element {
    rsx! {
        table { id: "results-table", class: "results",
            for row in rows {
                tr { key: "{row.label}",
                    th { "{row.label}" }
                    td { "{row.value}" }
                }
            }
        }
    }
}
