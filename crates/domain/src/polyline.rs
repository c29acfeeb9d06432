//! Encoded polyline codec
//!
//! Converts between the compact ASCII path encoding used by directions
//! providers and ordered [`Coordinate`] sequences. Each component is a
//! zig-zag encoded delta against the previous point, split into 5-bit
//! groups offset by 63, with `0x20` marking that another group follows.
//! Latitude precedes longitude; values are scaled by `1e5`.

use thiserror::Error;

use crate::value_objects::Coordinate;

/// Scale factor between degrees and encoded integers
pub const PRECISION: f64 = 1e5;

const CHAR_OFFSET: u8 = 63;
const CONTINUATION_BIT: u64 = 0x20;
const CHUNK_MASK: u64 = 0x1f;
/// Seven groups carry 35 bits, far beyond any valid degree delta
const MAX_SHIFT: u32 = 35;

/// Errors raised for malformed geometry strings
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PolylineError {
    /// A byte outside the printable encoding range
    #[error("Invalid character {character:?} at position {position}")]
    InvalidCharacter {
        /// Byte offset in the input
        position: usize,
        /// Offending character
        character: char,
    },

    /// Input ended while a value still expected continuation groups
    #[error("Truncated value starting at position {position}")]
    TruncatedChunk {
        /// Byte offset where the unfinished value starts
        position: usize,
    },

    /// A latitude value without its longitude partner
    #[error("Unpaired latitude value at position {position}")]
    UnpairedValue {
        /// Byte offset where the dangling value starts
        position: usize,
    },

    /// A value spanning more groups than any coordinate can need
    #[error("Value starting at position {position} is too wide")]
    Overflow {
        /// Byte offset where the value starts
        position: usize,
    },

    /// Accumulated coordinate left the WGS84 range
    #[error("Decoded point {index} ({latitude}, {longitude}) is out of range")]
    OutOfRange {
        /// Index of the point in the output sequence
        index: usize,
        /// Decoded latitude
        latitude: f64,
        /// Decoded longitude
        longitude: f64,
    },
}

/// Decode an encoded polyline into coordinates
///
/// An empty string yields an empty sequence.
///
/// # Errors
///
/// Returns a [`PolylineError`] when the input is not a well-formed sequence
/// of latitude/longitude pairs or decodes to an invalid coordinate.
pub fn decode(encoded: &str) -> Result<Vec<Coordinate>, PolylineError> {
    let bytes = encoded.as_bytes();
    let mut coordinates = Vec::with_capacity(bytes.len() / 6);
    let mut index = 0;
    let mut latitude: i64 = 0;
    let mut longitude: i64 = 0;

    while index < bytes.len() {
        let pair_start = index;
        latitude += next_value(bytes, &mut index)?;
        if index >= bytes.len() {
            return Err(PolylineError::UnpairedValue {
                position: pair_start,
            });
        }
        longitude += next_value(bytes, &mut index)?;

        let lat = to_degrees(latitude);
        let lng = to_degrees(longitude);
        let coordinate = Coordinate::new(lat, lng).map_err(|_| PolylineError::OutOfRange {
            index: coordinates.len(),
            latitude: lat,
            longitude: lng,
        })?;
        coordinates.push(coordinate);
    }

    Ok(coordinates)
}

/// Encode coordinates into a polyline string
///
/// Components are rounded to the nearest `1e-5` degree, so
/// `decode(&encode(points))` reproduces `points` at that precision.
#[must_use]
pub fn encode(coordinates: &[Coordinate]) -> String {
    let mut encoded = String::with_capacity(coordinates.len() * 8);
    let mut previous_lat: i64 = 0;
    let mut previous_lng: i64 = 0;

    for coordinate in coordinates {
        let lat = to_units(coordinate.latitude());
        let lng = to_units(coordinate.longitude());
        push_value(lat - previous_lat, &mut encoded);
        push_value(lng - previous_lng, &mut encoded);
        previous_lat = lat;
        previous_lng = lng;
    }

    encoded
}

fn next_value(bytes: &[u8], index: &mut usize) -> Result<i64, PolylineError> {
    let start = *index;
    let mut result: u64 = 0;
    let mut shift: u32 = 0;

    loop {
        let Some(&byte) = bytes.get(*index) else {
            return Err(PolylineError::TruncatedChunk { position: start });
        };
        if !(CHAR_OFFSET..=126).contains(&byte) {
            return Err(PolylineError::InvalidCharacter {
                position: *index,
                character: char::from(byte),
            });
        }
        if shift >= MAX_SHIFT {
            return Err(PolylineError::Overflow { position: start });
        }
        *index += 1;

        let group = u64::from(byte - CHAR_OFFSET);
        result |= (group & CHUNK_MASK) << shift;
        shift += 5;

        if group < CONTINUATION_BIT {
            break;
        }
    }

    let magnitude =
        i64::try_from(result >> 1).map_err(|_| PolylineError::Overflow { position: start })?;
    Ok(if result & 1 == 1 { !magnitude } else { magnitude })
}

fn push_value(delta: i64, out: &mut String) {
    let zigzag = if delta < 0 { !(delta << 1) } else { delta << 1 };
    let mut value = zigzag.unsigned_abs();

    while value >= CONTINUATION_BIT {
        out.push(to_char((value & CHUNK_MASK) | CONTINUATION_BIT));
        value >>= 5;
    }
    out.push(to_char(value));
}

#[allow(clippy::cast_possible_truncation)] // group values are below 0x40
fn to_char(group: u64) -> char {
    char::from(group as u8 + CHAR_OFFSET)
}

#[allow(clippy::cast_possible_truncation)] // degrees * 1e5 fits comfortably in i64
fn to_units(degrees: f64) -> i64 {
    (degrees * PRECISION).round() as i64
}

#[allow(clippy::cast_precision_loss)] // accumulators stay far below 2^52
fn to_degrees(units: i64) -> f64 {
    units as f64 / PRECISION
}
