pub mod coordinate;
pub mod itinerary;
pub mod place;
pub mod route_record;

pub use coordinate::{BoundingBox, Coordinate};
pub use itinerary::Itinerary;
pub use place::{OutlierStatus, Place, ResolvedPlace};
pub use route_record::{ExtraInfo, ExtraSegment, RouteOptions, RouteRecord, SummaryEntry};
