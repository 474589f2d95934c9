/// Crawl stage definitions
///
/// A seed URL moves through a fixed sequence of stages whose shape depends on
/// the crawl mode chosen when the run starts.
use std::fmt;

/// How far a crawl reaches from its seed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrawlMode {
    /// Convert the seed page only; no link extraction
    SinglePage,

    /// Convert every link on the seed page that passes the domain policy
    Full,
}

/// Stage of a single seed's crawl
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrawlStage {
    /// Seed markup is being fetched
    FetchSeed,

    /// Links are being extracted from the seed and filtered (full mode only)
    ExtractLinks,

    /// Pages are being fetched, transformed and written
    ProcessPages,

    /// Nothing left to do for this seed
    Done,
}

impl CrawlMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SinglePage => "single-page",
            Self::Full => "full",
        }
    }

    /// Returns the stage that normally follows `stage` in this mode
    pub fn next_stage(&self, stage: CrawlStage) -> Option<CrawlStage> {
        match (self, stage) {
            (Self::SinglePage, CrawlStage::FetchSeed) => Some(CrawlStage::ProcessPages),
            (Self::Full, CrawlStage::FetchSeed) => Some(CrawlStage::ExtractLinks),
            (_, CrawlStage::ExtractLinks) => Some(CrawlStage::ProcessPages),
            (_, CrawlStage::ProcessPages) => Some(CrawlStage::Done),
            (_, CrawlStage::Done) => None,
        }
    }
}

impl CrawlStage {
    /// Returns true if no further work happens in this stage
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Checks whether moving from `self` to `next` is legal in `mode`
    ///
    /// Besides the regular successor, any stage may jump straight to `Done`
    /// (an unavailable seed ends its crawl early).
    pub fn can_transition_to(&self, next: CrawlStage, mode: CrawlMode) -> bool {
        if self.is_terminal() {
            return false;
        }
        next == CrawlStage::Done || mode.next_stage(*self) == Some(next)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FetchSeed => "fetch_seed",
            Self::ExtractLinks => "extract_links",
            Self::ProcessPages => "process_pages",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for CrawlMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for CrawlStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
