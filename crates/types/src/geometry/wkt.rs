//! WKT (Well-Known Text) parsing
//!
//! Supports `POINT` and single-ring `POLYGON` only. Parsing never fails
//! loudly: anything that cannot be turned into a complete geometry yields
//! `None`.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, warn};

use super::{Geometry, GeometryType, Position};

/// Minimum number of positions in a polygon ring
pub const MIN_POLYGON_POSITIONS: usize = 3;

lazy_static! {
	static ref POINT_PATTERN: Regex =
		Regex::new(r"POINT\s*\(\s*([+-]?\d*\.?\d+)\s+([+-]?\d*\.?\d+)\s*\)")
			.expect("point pattern is a valid regex");
}

/// Parse a WKT string into a [`Geometry`]
///
/// The input is trimmed and upper-cased before dispatching on its leading
/// keyword. Unsupported keywords are logged and yield `None`; so do blank
/// input and text that does not match the expected structure.
///
/// Polygon rings are not checked for closure, holes are not supported and
/// coordinate pairs that do not parse as two numbers are skipped.
pub fn parse_wkt(text: &str) -> Option<Geometry> {
	let wkt = text.trim().to_uppercase();
	if wkt.is_empty() {
		return None;
	}

	match GeometryType::from_wkt_keyword(&wkt) {
		Some(GeometryType::Point) => parse_point(&wkt),
		Some(GeometryType::Polygon) => parse_polygon(&wkt),
		_ => {
			warn!("Unsupported WKT geometry type: {}", wkt);
			None
		},
	}
}

fn parse_point(wkt: &str) -> Option<Geometry> {
	let captures = POINT_PATTERN.captures(wkt)?;
	let x = captures.get(1)?.as_str().parse::<f64>().ok()?;
	let y = captures.get(2)?.as_str().parse::<f64>().ok()?;
	Some(Geometry::Point([x, y]))
}

fn parse_polygon(wkt: &str) -> Option<Geometry> {
	let (Some(open), Some(close)) = (wkt.find("(("), wkt.rfind("))")) else {
		debug!("Failed to parse polygon WKT, missing ring delimiters: {}", wkt);
		return None;
	};

	let start = open + 2;
	if close < start {
		debug!("Failed to parse polygon WKT, malformed ring delimiters: {}", wkt);
		return None;
	}

	let ring: Vec<Position> = wkt[start..close]
		.split(',')
		.filter_map(parse_position)
		.collect();

	if ring.len() < MIN_POLYGON_POSITIONS {
		debug!(
			"Failed to parse polygon WKT, {} usable positions: {}",
			ring.len(),
			wkt
		);
		return None;
	}

	Some(Geometry::polygon(ring))
}

fn parse_position(token: &str) -> Option<Position> {
	let mut parts = token.split_whitespace();
	let x = parse_coordinate(parts.next()?)?;
	let y = parse_coordinate(parts.next()?)?;
	Some([x, y])
}

/// `f64` parsing also accepts `NAN` and `INF`; those are not coordinates
fn parse_coordinate(part: &str) -> Option<f64> {
	part.parse::<f64>().ok().filter(|value| value.is_finite())
}
