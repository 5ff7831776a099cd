pub mod ranker;

pub use ranker::{RankedSites, SiteRanker};
