//! Client side of the scoring backend: wire types and the HTTP client.

pub mod client;
pub mod types;

pub use client::{HttpLocationApi, LocationApi};
pub use types::{AreaQuery, AreaScore, LockerQuery, ParcelLocker, ScoreGrade};
