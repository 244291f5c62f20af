//! Facade and validated mutation services over the persisted collections.

pub mod services;
pub mod tracker;

pub use tracker::Tracker;
