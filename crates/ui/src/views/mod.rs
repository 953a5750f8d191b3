mod card;
mod drill;
mod results;
mod start;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use card::CardFace;
pub use drill::DrillView;
pub use results::ResultsTable;
pub use start::StartScreen;
