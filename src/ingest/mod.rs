pub mod reader;
pub mod schema;

pub use reader::read_raw;
pub use schema::{ColumnMap, GeoColumns};
