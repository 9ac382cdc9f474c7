//! Header resolution: case-insensitive, trimmed mapping from the raw
//! column names of the export to the semantic roles the pipeline needs.

use crate::errors::{AppError, AppResult};
use crate::models::raw::Header;
use std::collections::HashMap;

/// Accepted spellings per role. The attendance terminals export Spanish
/// headers; English spellings are accepted for hand-made files.
const USER_ID: &[&str] = &["usuario", "user", "user_id", "userid"];
const FIRST_NAME: &[&str] = &["nombre", "first_name", "first name", "name"];
const LAST_NAME: &[&str] = &["apellidos", "apellido", "last_name", "last name", "surname"];
const START: &[&str] = &["inicio", "start", "entrada", "clock_in", "clock in"];
const END: &[&str] = &["fin", "end", "salida", "clock_out", "clock out"];

const LAT_START: &[&str] = &["lat inicio", "lat_inicio", "lat_start", "latitud inicio", "start lat"];
const LON_START: &[&str] = &["lon inicio", "lon_inicio", "lon_start", "longitud inicio", "start lon"];
const LAT_END: &[&str] = &["lat fin", "lat_fin", "lat_end", "latitud fin", "end lat"];
const LON_END: &[&str] = &["lon fin", "lon_fin", "lon_end", "longitud fin", "end lon"];

/// Indices of the optional coordinate columns. Each endpoint is resolved
/// on its own; the map link for an endpoint only needs that endpoint's pair.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeoColumns {
    pub lat_start: Option<usize>,
    pub lon_start: Option<usize>,
    pub lat_end: Option<usize>,
    pub lon_end: Option<usize>,
}

impl GeoColumns {
    fn is_empty(&self) -> bool {
        self.lat_start.is_none()
            && self.lon_start.is_none()
            && self.lat_end.is_none()
            && self.lon_end.is_none()
    }
}

/// Resolved positions of every semantic role inside the raw header.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnMap {
    pub user_id: usize,
    pub first_name: usize,
    pub last_name: usize,
    pub start: usize,
    pub end: usize,
    /// None when the export carries no coordinate columns at all;
    /// the whole geo capability switches off in that case.
    pub geo: Option<GeoColumns>,
}

impl ColumnMap {
    /// Resolve the header or fail naming the missing role and listing the
    /// columns that were actually found. Resolution failures are fatal:
    /// nothing downstream can be trusted without the identity/time fields.
    pub fn resolve(header: &Header) -> AppResult<Self> {
        let lookup: HashMap<String, usize> = header
            .columns
            .iter()
            .enumerate()
            .map(|(i, c)| (c.trim().to_lowercase(), i))
            .collect();

        let find = |aliases: &[&str]| -> Option<usize> {
            aliases.iter().find_map(|a| lookup.get(*a).copied())
        };

        let require = |role: &'static str, aliases: &[&str]| -> AppResult<usize> {
            find(aliases).ok_or_else(|| AppError::Schema {
                role,
                found: header.columns.clone(),
            })
        };

        let geo = GeoColumns {
            lat_start: find(LAT_START),
            lon_start: find(LON_START),
            lat_end: find(LAT_END),
            lon_end: find(LON_END),
        };

        Ok(ColumnMap {
            user_id: require("usuario", USER_ID)?,
            first_name: require("nombre", FIRST_NAME)?,
            last_name: require("apellidos", LAST_NAME)?,
            start: require("inicio", START)?,
            end: require("fin", END)?,
            geo: if geo.is_empty() { None } else { Some(geo) },
        })
    }
}
