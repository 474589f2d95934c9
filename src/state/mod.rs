//! State module for tracking crawl progress
//!
//! # Components
//!
//! - `CrawlMode` / `CrawlStage`: the two-mode state machine one seed moves through
//! - `PageOutcome`: the terminal result of processing a single page

mod crawl_state;
mod page_state;

// Re-export main types
pub use crawl_state::{CrawlMode, CrawlStage};
pub use page_state::PageOutcome;
