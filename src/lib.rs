//! Madoguchi - public-service contact resolution for Japanese addresses
//!
//! Resolves a free-form postal address into ranked lists of relevant
//! public-service contacts (police, fire, hospitals, utilities, municipal
//! offices) per category, using a static regional directory and a
//! progressively expanding nearest-facility search.

pub mod address;
pub mod directory;
pub mod geo;
pub mod geocode;
pub mod models;
pub mod resolve;

pub use directory::Directory;
pub use models::{Category, ContactResult, FacilityRecord, GeoPoint, Region};
pub use resolve::{ResolveConfig, Resolver};
