//! Provider implementations

pub mod fixture;
pub mod http;

pub use fixture::{FixtureCall, FixtureProvider};
pub use http::HttpProvider;
