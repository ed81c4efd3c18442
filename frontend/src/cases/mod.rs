pub mod catalog;
pub mod expansion;
pub mod model;

pub use catalog::{case_slugs, case_studies};
pub use expansion::{CaseExpansion, DEEP_LINK_SCROLL_DELAY_MS};
pub use model::{CaseStudy, ComparisonPoint, Direction, Metric, TrendPoint};
