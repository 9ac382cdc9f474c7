use serde::Serialize;

/// A parsed coordinate pair. (0,0) never reaches this type: the
/// terminals emit it when the GPS fix is missing, so it is treated as
/// "no coordinate" during normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

/// A map hyperlink: URL plus the label shown in its place. The export
/// collaborator decides the physical encoding (rich hyperlink cell in
/// XLSX, plain URL in CSV).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapLink {
    pub url: String,
    pub label: String,
}
