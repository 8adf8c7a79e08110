//! Procedural grids for tests, demos, and benchmarks.
//!
//! Both generators emit cells with independent vertices in radians, exactly
//! as a grid data source would.

use glam::DVec3;
use trimap_types::{GeoExtent, TrimapError, TrimapResult};

use crate::cells::CellVertexArray;

/// Generates a global geodesic grid by subdividing an icosahedron.
///
/// Each of the 20 faces is split into `subdivisions²` triangles and the
/// vertices are projected onto the unit sphere, giving `20·n²` cells. Cells
/// along the ±180° meridian straddle the seam, as in real global grids.
/// Zero subdivisions is an `InvalidGrid`.
///
/// # Example
/// ```
/// use trimap_mesh::generators::icosahedral_grid;
/// let cells = icosahedral_grid(2).unwrap();
/// assert_eq!(cells.ncell(), 80);
/// ```
pub fn icosahedral_grid(subdivisions: usize) -> TrimapResult<CellVertexArray> {
    if subdivisions == 0 {
        return Err(TrimapError::InvalidGrid(
            "Icosahedral grid needs at least one subdivision".into(),
        ));
    }
    let n = subdivisions;
    let (corners, faces) = icosahedron();

    let mut lon = Vec::with_capacity(60 * n * n);
    let mut lat = Vec::with_capacity(60 * n * n);

    for [ia, ib, ic] in faces {
        let (a, b, c) = (corners[ia], corners[ib], corners[ic]);
        let at = |i: usize, j: usize| -> DVec3 {
            let u = i as f64 / n as f64;
            let v = j as f64 / n as f64;
            (a + (b - a) * u + (c - a) * v).normalize()
        };

        for i in 0..n {
            for j in 0..n - i {
                push_cell(&mut lon, &mut lat, [at(i, j), at(i + 1, j), at(i, j + 1)]);
                if i + j + 1 < n {
                    push_cell(
                        &mut lon,
                        &mut lat,
                        [at(i + 1, j), at(i + 1, j + 1), at(i, j + 1)],
                    );
                }
            }
        }
    }

    Ok(CellVertexArray::from_parts(lon, lat))
}

/// Generates a limited-area grid covering `extent` with `2·nx·ny` cells.
///
/// Each of the `nx × ny` lon/lat rectangles is split into two triangles.
pub fn regional_grid(extent: GeoExtent, nx: usize, ny: usize) -> TrimapResult<CellVertexArray> {
    extent.validate()?;
    if nx == 0 || ny == 0 {
        return Err(TrimapError::InvalidGrid(format!(
            "Regional grid needs at least one column and row, got {}x{}",
            nx, ny
        )));
    }

    let dx = extent.width() / nx as f64;
    let dy = extent.height() / ny as f64;

    let mut lon = Vec::with_capacity(2 * nx * ny);
    let mut lat = Vec::with_capacity(2 * nx * ny);

    for j in 0..ny {
        for i in 0..nx {
            let x0 = (extent.lon_min + i as f64 * dx).to_radians();
            let x1 = (extent.lon_min + (i + 1) as f64 * dx).to_radians();
            let y0 = (extent.lat_min + j as f64 * dy).to_radians();
            let y1 = (extent.lat_min + (j + 1) as f64 * dy).to_radians();

            lon.push([x0, x1, x0]);
            lat.push([y0, y0, y1]);

            lon.push([x1, x1, x0]);
            lat.push([y0, y1, y1]);
        }
    }

    CellVertexArray::from_triples(lon, lat)
}

/// Cell centroids `(lon, lat)` in degrees, averaged on the sphere so that
/// seam-crossing cells get a sensible center.
pub fn cell_centroids_deg(cells: &CellVertexArray) -> Vec<(f64, f64)> {
    (0..cells.ncell())
        .map(|c| {
            let (lons, lats) = cells.cell(c);
            let sum: DVec3 = lons
                .iter()
                .zip(lats.iter())
                .map(|(&lo, &la)| to_cartesian(lo, la))
                .sum();
            let (lo, la) = to_lon_lat(sum.normalize_or_zero());
            (lo.to_degrees(), la.to_degrees())
        })
        .collect()
}

fn push_cell(lon: &mut Vec<f64>, lat: &mut Vec<f64>, verts: [DVec3; 3]) {
    for v in verts {
        let (lo, la) = to_lon_lat(v);
        lon.push(lo);
        lat.push(la);
    }
}

/// Unit vector → `(lon, lat)` in radians, lon in `[-π, π]`.
#[inline]
fn to_lon_lat(v: DVec3) -> (f64, f64) {
    (v.y.atan2(v.x), v.z.clamp(-1.0, 1.0).asin())
}

#[inline]
fn to_cartesian(lon: f64, lat: f64) -> DVec3 {
    DVec3::new(lat.cos() * lon.cos(), lat.cos() * lon.sin(), lat.sin())
}

/// Unit icosahedron corners and counter-clockwise faces.
fn icosahedron() -> ([DVec3; 12], [[usize; 3]; 20]) {
    let phi = (1.0 + 5.0_f64.sqrt()) / 2.0;
    let corners = [
        DVec3::new(-1.0, phi, 0.0),
        DVec3::new(1.0, phi, 0.0),
        DVec3::new(-1.0, -phi, 0.0),
        DVec3::new(1.0, -phi, 0.0),
        DVec3::new(0.0, -1.0, phi),
        DVec3::new(0.0, 1.0, phi),
        DVec3::new(0.0, -1.0, -phi),
        DVec3::new(0.0, 1.0, -phi),
        DVec3::new(phi, 0.0, -1.0),
        DVec3::new(phi, 0.0, 1.0),
        DVec3::new(-phi, 0.0, -1.0),
        DVec3::new(-phi, 0.0, 1.0),
    ]
    .map(DVec3::normalize);

    let faces = [
        [0, 11, 5],
        [0, 5, 1],
        [0, 1, 7],
        [0, 7, 10],
        [0, 10, 11],
        [1, 5, 9],
        [5, 11, 4],
        [11, 10, 2],
        [10, 7, 6],
        [7, 1, 8],
        [3, 9, 4],
        [3, 4, 2],
        [3, 2, 6],
        [3, 6, 8],
        [3, 8, 9],
        [4, 9, 5],
        [2, 4, 11],
        [6, 2, 10],
        [8, 6, 7],
        [9, 8, 1],
    ];

    (corners, faces)
}
