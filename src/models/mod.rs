//! Core data models for contact resolution.

pub mod category;
pub mod facility;
pub mod region;

pub use category::Category;
pub use facility::{ContactResult, FacilityRecord, GeoPoint, ScoredCandidate};
pub use region::Region;
