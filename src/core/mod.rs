pub mod calculator;
pub mod drilldown;
pub mod filters;
pub mod normalize;
pub mod pipeline;
pub mod summary;
