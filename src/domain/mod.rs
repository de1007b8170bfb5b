//! Domain layer: hazard feed types, derived metrics and list filters

pub mod feed;
pub mod filter;
pub mod metrics;

pub use feed::Feed;
pub use filter::FilterState;
pub use metrics::Summary;
