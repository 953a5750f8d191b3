#![forbid(unsafe_code)]

pub mod card;
pub mod metrics;
pub mod model;
pub mod pool;
pub mod time;

pub use card::{CardMachine, CardState, GradeOutcome, LoadOutcome};
pub use metrics::SessionMetrics;
pub use model::{Fact, FactError, Grade, SessionReport, SwipeDirection, TABLE_MAX, TOTAL_FACTS};
pub use pool::FactPool;
pub use time::Clock;
