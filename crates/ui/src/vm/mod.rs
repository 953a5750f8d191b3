mod drill_vm;
mod gesture;
mod report_vm;

pub use drill_vm::{DrillIntent, DrillScreen, DrillVm};
pub use gesture::{Gesture, SwipeTracker};
pub use report_vm::{ReportRowVm, format_accuracy, map_report_rows};
