//! Concrete trend providers, one per ad network.

mod meta;
mod tiktok;

pub use meta::MetaTrendProvider;
pub use tiktok::TikTokTrendProvider;
