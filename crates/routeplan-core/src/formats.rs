//! Path-interchange formats for exporting routes

pub mod gpx;

pub use self::gpx::{route_to_gpx, write_gpx};
