mod fact;
mod grade;
mod report;

pub use fact::{Fact, FactError, TABLE_MAX, TOTAL_FACTS, fact_table};
pub use grade::{Grade, SwipeDirection};
pub use report::SessionReport;
