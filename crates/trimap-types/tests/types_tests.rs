//! Integration tests for trimap-types.

use trimap_types::{CellId, Crs, GeoExtent, PointId, TriangleId, TrimapError};

// ─── ID Tests ──────────────────────────────────────────────────

#[test]
fn point_id_index() {
    let id = PointId(42);
    assert_eq!(id.index(), 42);
}

#[test]
fn point_id_maps_to_owning_cell() {
    assert_eq!(PointId(0).cell(), CellId(0));
    assert_eq!(PointId(2).cell(), CellId(0));
    assert_eq!(PointId(3).cell(), CellId(1));
    assert_eq!(PointId(14).cell(), CellId(4));
}

#[test]
fn triangle_id_matches_cell() {
    let id = TriangleId(7);
    assert_eq!(id.index(), 7);
    assert_eq!(id.cell(), CellId(7));
}

#[test]
fn ids_are_serializable() {
    let id = TriangleId(100);
    let json = serde_json::to_string(&id).unwrap();
    let deserialized: TriangleId = serde_json::from_str(&json).unwrap();
    assert_eq!(id, deserialized);
}

// ─── Error Tests ──────────────────────────────────────────────

#[test]
fn error_display() {
    let err = TrimapError::InvalidGrid("cell 4 has 4 vertices".into());
    assert!(err.to_string().contains("cell 4 has 4 vertices"));
}

#[test]
fn shape_mismatch_display() {
    let err = TrimapError::shape_mismatch("cell field", 5, 4);
    let msg = err.to_string();
    assert!(msg.contains("cell field"));
    assert!(msg.contains('5'));
    assert!(msg.contains('4'));
}

#[test]
fn io_error_converts() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "grid.json");
    let err: TrimapError = io.into();
    assert!(matches!(err, TrimapError::Io(_)));
}

// ─── Extent Tests ─────────────────────────────────────────────

#[test]
fn extent_valid() {
    let e = GeoExtent::new(7.0, 13.0, 53.0, 58.0).unwrap();
    assert!((e.width() - 6.0).abs() < 1e-12);
    assert!((e.height() - 5.0).abs() < 1e-12);
    assert!(e.contains(10.0, 55.0));
    assert!(!e.contains(14.0, 55.0));
}

#[test]
fn extent_rejects_inverted_bounds() {
    assert!(GeoExtent::new(13.0, 7.0, 53.0, 58.0).is_err());
    assert!(GeoExtent::new(7.0, 13.0, 58.0, 53.0).is_err());
}

#[test]
fn extent_rejects_out_of_range_latitude() {
    assert!(GeoExtent::new(-10.0, 10.0, -95.0, 10.0).is_err());
}

#[test]
fn extent_rejects_nan() {
    assert!(GeoExtent::new(f64::NAN, 10.0, 0.0, 10.0).is_err());
}

#[test]
fn extent_overlap() {
    let e = GeoExtent::new(7.0, 13.0, 53.0, 58.0).unwrap();
    assert!(e.overlaps_points(&[12.0, 14.0, 13.5], &[57.0, 57.5, 59.0]));
    assert!(!e.overlaps_points(&[20.0, 21.0, 22.0], &[55.0, 55.0, 56.0]));
}

#[test]
fn extent_serializes_as_array() {
    let e = GeoExtent::new(-28.0, 67.0, 26.0, 73.0).unwrap();
    let json = serde_json::to_string(&e).unwrap();
    assert_eq!(json, "[-28.0,67.0,26.0,73.0]");
    let back: GeoExtent = serde_json::from_str(&json).unwrap();
    assert_eq!(back, e);
}

#[test]
fn extent_deserialize_validates() {
    let bad: Result<GeoExtent, _> = serde_json::from_str("[10.0, 0.0, 0.0, 10.0]");
    assert!(bad.is_err());
}

#[test]
fn crs_default_is_plate_carree() {
    assert_eq!(Crs::default(), Crs::PlateCarree);
    assert_eq!(Crs::PlateCarree.name(), "plate_carree");
}
