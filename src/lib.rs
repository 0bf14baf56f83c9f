//! geofinder - Look up place names and coordinates via OpenStreetMap Nominatim

pub mod api;
pub mod config;
pub mod domain;
pub mod render;
