//! Domain types for timetable results.
//!
//! Values here are built fresh from each upstream response and are never
//! cached. None of them validate their contents beyond what the upstream
//! site guarantees: times stay as the text the site printed.

mod journey;
mod station;
mod train;

pub use journey::{Journey, dedup_journeys};
pub use station::Station;
pub use train::{LabelColour, TrainLabel};
