use serde::Deserialize;

/// A single geocoding match.
///
/// Coordinates stay as the decimal text Nominatim sent, so no precision is
/// lost to float rounding.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Location {
    pub display_name: String,
    pub lat: String,
    pub lon: String,
}

impl Location {
    pub fn new(
        display_name: impl Into<String>,
        lat: impl Into<String>,
        lon: impl Into<String>,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            lat: lat.into(),
            lon: lon.into(),
        }
    }
}
