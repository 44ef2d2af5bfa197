pub mod gaps;
pub mod ranking;
pub mod timeline;
