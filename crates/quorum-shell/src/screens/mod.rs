//! Headless screen controllers for the three assistant screens.

pub mod curator;
pub mod pillar;
pub mod resolver;
pub mod track_record;

pub use curator::{format_time, MinutesCurator};
pub use pillar::{DashboardOverview, PillarScreen};
pub use resolver::ResolutionResolver;
pub use track_record::TrackRecordScreen;
