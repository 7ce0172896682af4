pub mod classify;
pub mod client;
pub mod error;
pub mod fetch_all;
pub mod freshness;
pub mod location;
pub mod normalize;
pub mod tokenize;
pub mod types;

mod rate_limit;

pub use client::SheetClient;
pub use error::SheetError;
pub use fetch_all::{fetch_and_normalize, fetch_provinces};
pub use freshness::extract_freshness_date;
pub use location::{resolve_location, SheetLocation};
pub use normalize::{normalize, normalize_all};
pub use tokenize::tokenize;
pub use types::SheetPayload;
