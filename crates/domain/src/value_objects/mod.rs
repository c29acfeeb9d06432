//! Value Objects - Immutable, identity-less domain primitives

mod coordinate;
mod hex_color;
mod locale;
mod vehicle_type;

pub use coordinate::{Coordinate, InvalidCoordinates};
pub use hex_color::HexColor;
pub use locale::Locale;
pub use vehicle_type::VehicleType;
