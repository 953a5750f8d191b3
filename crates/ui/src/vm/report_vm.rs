use drill_core::SessionReport;

/// One label/value row of the results table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportRowVm {
    pub label: String,
    pub value: String,
}

impl ReportRowVm {
    fn new(label: &str, value: String) -> Self {
        Self {
            label: label.to_string(),
            value,
        }
    }
}

/// Accuracy to two decimals, or `N/A` when no card was graded.
#[must_use]
pub fn format_accuracy(accuracy_percent: Option<f64>) -> String {
    accuracy_percent.map_or_else(|| "N/A".to_string(), |value| format!("{value:.2}%"))
}

#[must_use]
pub fn map_report_rows(report: &SessionReport) -> Vec<ReportRowVm> {
    vec![
        ReportRowVm::new("Total Cards Seen", report.total_graded().to_string()),
        ReportRowVm::new(
            "Accuracy (Correct Marks)",
            format_accuracy(report.accuracy_percent()),
        ),
        ReportRowVm::new(
            "Time Taken",
            format!("{:.2} seconds", report.time_taken_secs()),
        ),
        ReportRowVm::new(
            "Seconds per Card",
            format!("{:.2}", report.seconds_per_card()),
        ),
        ReportRowVm::new(
            "Cards per Second",
            format!("{:.2}", report.cards_per_second()),
        ),
    ]
}
