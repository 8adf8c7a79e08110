//! Integration tests for trimap-mesh.

use trimap_mesh::generators::{cell_centroids_deg, icosahedral_grid, regional_grid};
use trimap_mesh::{
    max_lon_span, CellVertexArray, DatelineMasker, FlatPointSet, MaskState, TriangleIndex,
    Triangulation, TriangulationBuilder, VertexExpander,
};
use trimap_types::{GeoExtent, PointId, TriangleId, TrimapError};

/// Builds a triangulation directly in degrees, one triangle per entry.
fn tri_from_degrees(lons: &[[f64; 3]], lats: &[[f64; 3]]) -> Triangulation {
    let points = FlatPointSet {
        lon: lons.iter().flatten().copied().collect(),
        lat: lats.iter().flatten().copied().collect(),
    };
    let triangles = TriangleIndex::consecutive(lons.len()).unwrap();
    Triangulation::new(points, triangles).unwrap()
}

fn five_cells_radians() -> CellVertexArray {
    let lon: Vec<[f64; 3]> = (0..5)
        .map(|c| {
            let base = c as f64 * 10.0;
            [base, base + 1.0, base + 0.5].map(f64::to_radians)
        })
        .collect();
    let lat: Vec<[f64; 3]> = (0..5)
        .map(|_| [0.0, 0.0, 1.0].map(f64::to_radians))
        .collect();
    CellVertexArray::from_triples(lon, lat).unwrap()
}

// ─── CellVertexArray Tests ────────────────────────────────────

#[test]
fn nested_rows_accepted() {
    let lon = vec![vec![0.0, 0.1, 0.2], vec![1.0, 1.1, 1.2]];
    let lat = vec![vec![0.0, 0.0, 0.1], vec![0.5, 0.5, 0.6]];
    let cells = CellVertexArray::from_nested(&lon, &lat).unwrap();
    assert_eq!(cells.ncell(), 2);
    assert_eq!(cells.cell(1).0, [1.0, 1.1, 1.2]);
}

#[test]
fn nested_rejects_four_vertex_cell() {
    let lon = vec![vec![0.0, 0.1, 0.2], vec![1.0, 1.1, 1.2, 1.3]];
    let lat = vec![vec![0.0, 0.0, 0.1], vec![0.5, 0.5, 0.6, 0.7]];
    let err = CellVertexArray::from_nested(&lon, &lat).unwrap_err();
    assert!(matches!(err, TrimapError::InvalidGrid(_)));
}

#[test]
fn nested_rejects_ragged_lon_lat() {
    let lon = vec![vec![0.0, 0.1, 0.2]];
    let lat = vec![vec![0.0, 0.0]];
    assert!(matches!(
        CellVertexArray::from_nested(&lon, &lat),
        Err(TrimapError::InvalidGrid(_))
    ));
}

#[test]
fn nested_rejects_cell_count_mismatch() {
    let lon = vec![vec![0.0, 0.1, 0.2], vec![0.0, 0.1, 0.2]];
    let lat = vec![vec![0.0, 0.0, 0.1]];
    assert!(CellVertexArray::from_nested(&lon, &lat).is_err());
}

#[test]
fn flat_rejects_wrong_vertex_count() {
    let err = CellVertexArray::from_flat(vec![0.0; 8], vec![0.0; 8], 4).unwrap_err();
    assert!(matches!(err, TrimapError::InvalidGrid(_)));
}

#[test]
fn flat_rejects_partial_cell() {
    assert!(CellVertexArray::from_flat(vec![0.0; 7], vec![0.0; 7], 3).is_err());
}

// ─── VertexExpander Tests ─────────────────────────────────────

#[test]
fn expand_counts() {
    let cells = five_cells_radians();
    let grid = VertexExpander::expand(&cells).unwrap();
    assert_eq!(grid.points.len(), 15);
    assert_eq!(grid.triangles.len(), 5);
}

#[test]
fn expand_consecutive_triples() {
    let grid = VertexExpander::expand(&five_cells_radians()).unwrap();
    for t in 0..5u32 {
        assert_eq!(grid.triangles.triangle(t as usize), [3 * t, 3 * t + 1, 3 * t + 2]);
    }
    assert!(grid.triangles.is_partition());
}

#[test]
fn expand_converts_to_degrees() {
    let degrees: [f64; 6] = [-179.75, -45.0, 0.0, 12.345, 90.0, 179.999];
    let lon: Vec<[f64; 3]> = degrees
        .chunks(3)
        .map(|c| [c[0].to_radians(), c[1].to_radians(), c[2].to_radians()])
        .collect();
    let lat = vec![[0.0; 3]; lon.len()];
    let cells = CellVertexArray::from_triples(lon, lat).unwrap();
    let grid = VertexExpander::expand(&cells).unwrap();
    for (got, want) in grid.points.lon.iter().zip(degrees.iter()) {
        assert!((got - want).abs() < 1e-9, "{got} != {want}");
    }
}

#[test]
fn point_lookup_by_id() {
    let grid = VertexExpander::expand(&five_cells_radians()).unwrap();
    for p in 0..grid.points.len() {
        let (lon, lat) = grid.points.point(PointId(p as u32));
        assert_eq!(lon, grid.points.lon[p]);
        assert_eq!(lat, grid.points.lat[p]);
    }
}

#[test]
fn expand_does_not_wrap_longitudes() {
    let lon = vec![[190.0_f64.to_radians(), 200.0_f64.to_radians(), 195.0_f64.to_radians()]];
    let lat = vec![[0.0; 3]];
    let cells = CellVertexArray::from_triples(lon, lat).unwrap();
    let grid = VertexExpander::expand(&cells).unwrap();
    assert!((grid.points.lon[0] - 190.0).abs() < 1e-9);
}

#[test]
fn expand_empty_grid() {
    let cells = CellVertexArray::from_triples(Vec::new(), Vec::new()).unwrap();
    let grid = VertexExpander::expand(&cells).unwrap();
    assert!(grid.points.is_empty());
    assert!(grid.triangles.is_empty());
}

#[test]
fn partition_detects_shared_index() {
    let shared = TriangleIndex {
        indices: vec![0, 1, 2, 2, 3, 4],
    };
    assert!(!shared.is_partition());
}

// ─── Triangulation Tests ──────────────────────────────────────

#[test]
fn new_triangulation_is_unmasked() {
    let tri = Triangulation::from_cells(&five_cells_radians()).unwrap();
    assert_eq!(tri.state(), MaskState::Unmasked);
    assert!(tri.mask().is_none());
    assert_eq!(tri.masked_count(), 0);
    assert_eq!(tri.visible_triangles().count(), 5);
}

#[test]
fn builder_assembles_expander_output() {
    let expanded = VertexExpander::expand(&five_cells_radians()).unwrap();
    let points = expanded.points.clone();
    let tri = TriangulationBuilder::build(expanded).unwrap();
    assert_eq!(tri.state(), MaskState::Unmasked);
    assert_eq!(tri.point_count(), 15);
    assert_eq!(tri.triangle_count(), 5);
    assert_eq!(tri.points(), &points);
    assert_eq!(tri.triangle(4), [12, 13, 14]);
}

#[test]
fn builder_rejects_out_of_range_index() {
    let points = FlatPointSet {
        lon: vec![0.0, 1.0, 2.0],
        lat: vec![0.0, 0.0, 1.0],
    };
    let triangles = TriangleIndex {
        indices: vec![0, 1, 3],
    };
    assert!(matches!(
        Triangulation::new(points, triangles),
        Err(TrimapError::InvalidGrid(_))
    ));
}

#[test]
fn builder_rejects_inconsistent_points() {
    let points = FlatPointSet {
        lon: vec![0.0, 1.0, 2.0],
        lat: vec![0.0, 0.0],
    };
    let triangles = TriangleIndex::consecutive(1).unwrap();
    assert!(Triangulation::new(points, triangles).is_err());
}

#[test]
fn builder_accepts_overlapping_geometry() {
    let tri = tri_from_degrees(&[[0.0, 1.0, 0.0], [0.0, 1.0, 0.0]], &[[0.0, 0.0, 1.0]; 2]);
    assert_eq!(tri.triangle_count(), 2);
    assert_eq!(tri.point_count(), 6);
}

#[test]
fn set_mask_wrong_length() {
    let mut tri = Triangulation::from_cells(&five_cells_radians()).unwrap();
    let err = tri.set_mask(vec![false; 4]).unwrap_err();
    assert!(matches!(err, TrimapError::ShapeMismatch { expected: 5, actual: 4, .. }));
    assert_eq!(tri.state(), MaskState::Unmasked);
}

#[test]
fn require_mask_on_unmasked() {
    let tri = Triangulation::from_cells(&five_cells_radians()).unwrap();
    assert!(matches!(
        tri.require_mask("render"),
        Err(TrimapError::Precondition(_))
    ));
}

#[test]
fn visible_triangles_skip_masked() {
    let mut tri = Triangulation::from_cells(&five_cells_radians()).unwrap();
    tri.set_mask(vec![false, true, false, true, false]).unwrap();
    let visible: Vec<TriangleId> = tri.visible_triangles().collect();
    assert_eq!(visible, vec![TriangleId(0), TriangleId(2), TriangleId(4)]);
    assert_eq!(tri.masked_count(), 2);
    tri.clear_mask();
    assert_eq!(tri.state(), MaskState::Unmasked);
}

#[test]
fn lon_lat_range() {
    let tri = tri_from_degrees(&[[-10.0, 5.0, 20.0]], &[[-3.0, 4.0, 1.0]]);
    assert_eq!(tri.lon_range(), Some((-10.0, 20.0)));
    assert_eq!(tri.lat_range(), Some((-3.0, 4.0)));
}

#[test]
fn deserialize_rejects_overlong_mask() {
    let json = r#"{"points":{"lon":[0,1,0],"lat":[0,0,1]},"triangles":{"indices":[0,1,2]},"mask":[true,true]}"#;
    assert!(serde_json::from_str::<Triangulation>(json).is_err());
}

#[test]
fn deserialize_rejects_short_mask() {
    let json = r#"{"points":{"lon":[0,1,0,5,6,5],"lat":[0,0,1,0,0,1]},"triangles":{"indices":[0,1,2,3,4,5]},"mask":[false]}"#;
    assert!(serde_json::from_str::<Triangulation>(json).is_err());
}

#[test]
fn deserialize_rejects_out_of_range_index() {
    let json = r#"{"points":{"lon":[0,1,0],"lat":[0,0,1]},"triangles":{"indices":[0,1,7]},"mask":null}"#;
    assert!(serde_json::from_str::<Triangulation>(json).is_err());
}

#[test]
fn serde_round_trip_keeps_mask() {
    let mut tri = tri_from_degrees(&[[179.0, -179.0, 178.0], [10.0, 11.0, 12.0]], &[[0.0; 3], [0.0; 3]]);
    DatelineMasker::new().apply(&mut tri).unwrap();
    let json = serde_json::to_string(&tri).unwrap();
    let back: Triangulation = serde_json::from_str(&json).unwrap();
    assert_eq!(back.mask(), Some(&[true, false][..]));
    assert_eq!(back.state(), MaskState::Masked);
}

// ─── DatelineMasker Tests ─────────────────────────────────────

#[test]
fn span_uses_all_pairs() {
    assert_eq!(max_lon_span([-179.0, 0.0, 179.0]), 358.0);
    assert_eq!(max_lon_span([10.0, 11.0, 12.0]), 2.0);
}

#[test]
fn seam_crossing_triangle_masked() {
    let mut tri = tri_from_degrees(&[[-179.0, 1.5, -178.0]], &[[0.0, 1.0, 0.0]]);
    DatelineMasker::new().apply(&mut tri).unwrap();
    assert_eq!(tri.mask(), Some(&[true][..]));
}

#[test]
fn ordinary_triangle_not_masked() {
    let mut tri = tri_from_degrees(&[[10.0, 11.0, 12.0]], &[[0.0, 1.0, 0.0]]);
    DatelineMasker::new().apply(&mut tri).unwrap();
    assert_eq!(tri.mask(), Some(&[false][..]));
}

#[test]
fn span_of_exactly_180_not_masked() {
    let mut tri = tri_from_degrees(
        &[[-179.0, 1.0, -178.0], [0.0, 180.0, 90.0]],
        &[[0.0, 1.0, 0.0]; 2],
    );
    DatelineMasker::new().apply(&mut tri).unwrap();
    assert_eq!(tri.mask(), Some(&[false, false][..]));
}

#[test]
fn full_seam_triangle_masked() {
    // Pairwise spans 180, 180 and 360.
    let mut tri = tri_from_degrees(&[[-180.0, 0.0, 180.0]], &[[0.0, 1.0, 0.0]]);
    DatelineMasker::new().apply(&mut tri).unwrap();
    assert_eq!(tri.mask(), Some(&[true][..]));
}

#[test]
fn polar_triangle_masked() {
    // Converging meridians near the pole: kept as masked.
    let mut tri = tri_from_degrees(&[[0.0, 120.0, -120.0]], &[[89.0, 89.0, 89.0]]);
    DatelineMasker::new().apply(&mut tri).unwrap();
    assert!(tri.is_masked(0));
}

#[test]
fn nan_longitude_not_masked() {
    let mut tri = tri_from_degrees(&[[f64::NAN, 0.0, 1.0]], &[[0.0, 1.0, 0.0]]);
    DatelineMasker::new().apply(&mut tri).unwrap();
    assert!(!tri.is_masked(0));
}

#[test]
fn apply_replaces_prior_mask() {
    let mut tri = tri_from_degrees(&[[10.0, 11.0, 12.0]], &[[0.0, 1.0, 0.0]]);
    tri.set_mask(vec![true]).unwrap();
    DatelineMasker::new().apply(&mut tri).unwrap();
    assert!(!tri.is_masked(0));
}

#[test]
fn masking_is_idempotent() {
    let mut tri = Triangulation::from_cells(&icosahedral_grid(6).unwrap()).unwrap();
    let masker = DatelineMasker::new();
    let first = masker.apply(&mut tri).unwrap();
    let mask_a = tri.mask().unwrap().to_vec();
    let second = masker.apply(&mut tri).unwrap();
    assert_eq!(first, second);
    assert_eq!(tri.mask().unwrap(), &mask_a[..]);
}

#[test]
fn parallel_matches_sequential() {
    let tri = Triangulation::from_cells(&icosahedral_grid(10).unwrap()).unwrap();
    let seq = DatelineMasker::new().compute(&tri);
    let par = DatelineMasker::new().with_parallel(true).compute(&tri);
    assert_eq!(seq, par);
}

#[test]
fn custom_threshold() {
    let tri = tri_from_degrees(&[[0.0, 100.0, 50.0]], &[[0.0, 1.0, 0.0]]);
    let strict = DatelineMasker::new().with_threshold(90.0).unwrap();
    assert_eq!(strict.compute(&tri), vec![true]);
    assert_eq!(DatelineMasker::new().compute(&tri), vec![false]);
}

#[test]
fn invalid_threshold_rejected() {
    assert!(DatelineMasker::new().with_threshold(0.0).is_err());
    assert!(DatelineMasker::new().with_threshold(f64::NAN).is_err());
}

#[test]
fn global_grid_masks_only_wide_triangles() {
    let mut tri = Triangulation::from_cells(&icosahedral_grid(8).unwrap()).unwrap();
    let summary = DatelineMasker::new().apply(&mut tri).unwrap();
    assert_eq!(summary.triangles, 1280);
    assert!(summary.masked > 0);
    assert!(summary.masked_fraction() < 0.1);
    for t in 0..tri.triangle_count() {
        assert_eq!(tri.is_masked(t), max_lon_span(tri.triangle_lons(t)) > 180.0);
    }
}

#[test]
fn regional_grid_masks_nothing() {
    let extent = GeoExtent::new(-28.0, 67.0, 26.0, 73.0).unwrap();
    let mut tri = Triangulation::from_cells(&regional_grid(extent, 20, 10).unwrap()).unwrap();
    let summary = DatelineMasker::new().apply(&mut tri).unwrap();
    assert_eq!(summary.masked, 0);
    assert_eq!(tri.state(), MaskState::Masked);
}

// ─── Generator Tests ──────────────────────────────────────────

#[test]
fn icosahedral_cell_count() {
    assert_eq!(icosahedral_grid(1).unwrap().ncell(), 20);
    assert_eq!(icosahedral_grid(3).unwrap().ncell(), 180);
}

#[test]
fn icosahedral_rejects_zero_subdivisions() {
    assert!(matches!(icosahedral_grid(0), Err(TrimapError::InvalidGrid(_))));
}

#[test]
fn icosahedral_coordinates_in_range() {
    let cells = icosahedral_grid(4).unwrap();
    let pi = std::f64::consts::PI;
    assert!(cells.lon_radians().iter().all(|l| (-pi..=pi).contains(l)));
    assert!(cells
        .lat_radians()
        .iter()
        .all(|l| (-pi / 2.0..=pi / 2.0).contains(l)));
}

#[test]
fn regional_grid_counts() {
    let extent = GeoExtent::new(7.0, 13.0, 53.0, 58.0).unwrap();
    let cells = regional_grid(extent, 6, 5).unwrap();
    assert_eq!(cells.ncell(), 60);
}

#[test]
fn regional_grid_rejects_zero_columns() {
    let extent = GeoExtent::new(7.0, 13.0, 53.0, 58.0).unwrap();
    assert!(matches!(
        regional_grid(extent, 0, 5),
        Err(TrimapError::InvalidGrid(_))
    ));
}

#[test]
fn regional_centroids_inside_extent() {
    let extent = GeoExtent::new(7.0, 13.0, 53.0, 58.0).unwrap();
    let cells = regional_grid(extent, 6, 5).unwrap();
    for (lon, lat) in cell_centroids_deg(&cells) {
        assert!(extent.contains(lon, lat), "({lon}, {lat}) outside extent");
    }
}
