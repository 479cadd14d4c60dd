//! Static PNG rendering of a computed field with the sources drawn on top.
//!
//! Planar grids get a heatmap of the in-plane magnitude with direction arrows.
//! Volume grids get a 3D view of direction arrows colored by magnitude.
//! Both carry a title, axis labels and a log10 |B| color bar.
use std::path::Path;

use nalgebra::{Rotation2, Vector2, Vector3};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::colors::colormaps::{ColorMap, ViridisRGB};
use thiserror::Error;
use tracing::{debug, info};

use crate::error::FieldError;
use crate::field::VectorField;
use crate::mesh::{linspace, GridLayout, Plane, PointGrid};
use crate::physics::Source;

/// Errors that can occur while rendering a plot.
#[derive(Debug, Error)]
pub enum PlotError {
    #[error("drawing failed: {0}")]
    Backend(String),
    #[error("grid has no points to plot")]
    EmptyGrid,
    #[error(transparent)]
    Field(#[from] FieldError),
    #[error("failed to prepare output: {0}")]
    Io(#[from] std::io::Error),
}

fn backend<E: std::fmt::Display>(e: E) -> PlotError {
    PlotError::Backend(e.to_string())
}

/// Image size and arrow density.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotOptions {
    /// (px)
    pub width: u32,
    /// (px)
    pub height: u32,
    /// Upper bound on arrows drawn along each grid axis.
    pub arrows_per_axis: usize,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            width: 700,
            height: 700,
            arrows_per_axis: 15,
        }
    }
}

fn font_family() -> FontFamily<'static> {
    if cfg!(target_os = "macos") {
        FontFamily::Name("Helvetica")
    } else if cfg!(target_os = "windows") {
        FontFamily::Name("Arial")
    } else {
        FontFamily::Name("DejaVu Sans")
    }
}

/// Viridis color for `t` on `[0, 1]`; out-of-range and NaN inputs are clamped.
pub fn viridis(t: f64) -> RGBColor {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    ViridisRGB.get_color(t as f32)
}

/// Finite range of `values`, or `(0, 1)` when nothing is finite.
/// A single repeated value gets a unit-wide range above it.
fn finite_range(values: &[f64]) -> (f64, f64) {
    let (lo, hi) = values
        .iter()
        .filter(|m| m.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), m| {
            (lo.min(*m), hi.max(*m))
        });
    if !lo.is_finite() {
        (0.0, 1.0)
    } else if hi > lo {
        (lo, hi)
    } else {
        (lo, lo + 1.0)
    }
}

/// Shaft and head of an arrow of `length` starting at `origin` along `direction`,
/// or `None` when the direction is zero or not finite.
pub fn arrow_paths(
    origin: (f64, f64),
    direction: (f64, f64),
    length: f64,
) -> Option<[Vec<(f64, f64)>; 2]> {
    let d = Vector2::new(direction.0, direction.1);
    let norm = d.norm();
    if !(norm > 0.0) || !norm.is_finite() {
        return None;
    }
    let d = d / norm * length;
    let o = Vector2::new(origin.0, origin.1);
    let tip = o + d;

    // Barbs swept back 150 degrees either side of the shaft
    let barb = d * 0.3;
    let left = tip + Rotation2::new(5.0 * core::f64::consts::PI / 6.0) * barb;
    let right = tip + Rotation2::new(-5.0 * core::f64::consts::PI / 6.0) * barb;

    Some([
        vec![(o.x, o.y), (tip.x, tip.y)],
        vec![(left.x, left.y), (tip.x, tip.y), (right.x, right.y)],
    ])
}

/// 3D counterpart of [`arrow_paths`]; the head lies in a plane containing the shaft.
pub fn arrow_paths_3d(
    origin: (f64, f64, f64),
    direction: (f64, f64, f64),
    length: f64,
) -> Option<[Vec<(f64, f64, f64)>; 2]> {
    let d = Vector3::new(direction.0, direction.1, direction.2);
    let norm = d.norm();
    if !(norm > 0.0) || !norm.is_finite() {
        return None;
    }
    let d = d / norm;
    let o = Vector3::new(origin.0, origin.1, origin.2);
    let tip = o + d * length;

    // Any direction not parallel to the shaft spans the head plane
    let helper = if d.z.abs() < 0.9 {
        Vector3::z()
    } else {
        Vector3::x()
    };
    let side = d.cross(&helper).normalize();
    let back = tip - d * (0.3 * length);
    let left = back + side * (0.15 * length);
    let right = back - side * (0.15 * length);

    let t = |v: Vector3<f64>| (v.x, v.y, v.z);
    Some([
        vec![t(o), t(tip)],
        vec![t(left), t(tip), t(right)],
    ])
}

/// Outline of a source projected onto `plane`, as polylines in plane coordinates.
/// Outlines that collapse to a single point are returned as one-point polylines.
pub fn source_outline(source: &Source, plane: Plane) -> Vec<Vec<(f64, f64)>> {
    match (source, plane) {
        (Source::Wire(_), Plane::Xy) => vec![vec![(0.0, 0.0)]],
        (Source::Wire(w), Plane::Xz) => vec![vec![(0.0, -w.length / 2.0), (0.0, w.length / 2.0)]],
        (Source::Loop(_), Plane::Xy) => vec![source_outline_3d(source)
            .into_iter()
            .map(|p| (p.0, p.1))
            .collect()],
        (Source::Loop(l), Plane::Xz) => vec![vec![(-l.radius, 0.0)], vec![(l.radius, 0.0)]],
    }
}

/// (m) Outline of a source in space, as a polyline.
pub fn source_outline_3d(source: &Source) -> Vec<(f64, f64, f64)> {
    match source {
        Source::Wire(w) => vec![(0.0, 0.0, -w.length / 2.0), (0.0, 0.0, w.length / 2.0)],
        Source::Loop(l) => linspace(0.0, 2.0 * core::f64::consts::PI, 100)
            .into_iter()
            .map(|theta| (l.radius * theta.cos(), l.radius * theta.sin(), 0.0))
            .collect(),
    }
}

fn source_color(source: &Source) -> RGBColor {
    match source {
        Source::Wire(_) => RED,
        Source::Loop(_) => CYAN,
    }
}

/// Half the spacing of a sorted axis, or half of `fallback` when there is one sample.
fn half_step(axis: &[f64], fallback: f64) -> f64 {
    if axis.len() > 1 {
        (axis[1] - axis[0]) / 2.0
    } else {
        fallback / 2.0
    }
}

fn prepare_output(path: &Path) -> Result<(), PlotError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Vertical log10 |B| scale spanning `lo..hi`.
fn draw_colorbar<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    lo: f64,
    hi: f64,
    label: &str,
) -> Result<(), PlotError> {
    let label_font = FontDesc::new(font_family(), 14.0, FontStyle::Normal);
    let mut chart = ChartBuilder::on(area)
        .margin_left(5)
        .margin_right(15)
        .margin_top(45)
        .margin_bottom(55)
        .x_label_area_size(0)
        .y_label_area_size(55)
        .build_cartesian_2d(0.0..1.0, lo..hi)
        .map_err(backend)?;

    let steps = 200;
    chart
        .draw_series((0..steps).map(|i| {
            let t0 = i as f64 / steps as f64;
            let t1 = (i + 1) as f64 / steps as f64;
            Rectangle::new(
                [(0.0, lo + (hi - lo) * t0), (1.0, lo + (hi - lo) * t1)],
                viridis(t0).filled(),
            )
        }))
        .map_err(backend)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(0)
        .y_labels(6)
        .y_desc(label)
        .y_label_style(label_font.clone())
        .axis_desc_style(label_font)
        .y_label_formatter(&|v| format!("{v:.1}"))
        .draw()
        .map_err(backend)?;
    Ok(())
}

/// Render `field`, sampled on `grid`, to a PNG at `path`.
///
/// Planar grids show the base-10 log of the in-plane field magnitude as a heatmap
/// with fixed-length direction arrows. Volume grids show fixed-length 3D arrows
/// colored by the log of the full magnitude, with z pointing up. Each source
/// in `sources` is drawn on top.
pub fn render_field_png<P: AsRef<Path>>(
    path: P,
    grid: &PointGrid,
    field: &VectorField,
    sources: &[Source],
    options: &PlotOptions,
) -> Result<(), PlotError> {
    if field.len() != grid.len() {
        return Err(FieldError::LengthMismatch("plotted grid and field").into());
    }
    if grid.is_empty() {
        return Err(PlotError::EmptyGrid);
    }
    let path = path.as_ref();
    prepare_output(path)?;

    let root = BitMapBackend::new(path, (options.width, options.height)).into_drawing_area();
    root.fill(&WHITE).map_err(backend)?;
    let legend_width = (options.width as i32 / 5).clamp(90, 140);
    let (plot_area, legend_area) =
        root.split_horizontally((options.width as i32 - legend_width).max(1));

    match &grid.layout {
        GridLayout::Planar {
            plane,
            offset,
            u,
            v,
        } => {
            if u.len() * v.len() != grid.len() {
                return Err(FieldError::LengthMismatch("planar grid axes").into());
            }
            draw_planar(&plot_area, &legend_area, *plane, *offset, u, v, field, sources, options)?
        }
        GridLayout::Volume { nx, ny, nz } => {
            if nx * ny * nz != grid.len() {
                return Err(FieldError::LengthMismatch("volume grid shape").into());
            }
            draw_volume(
                &plot_area,
                &legend_area,
                grid,
                (*nx, *ny, *nz),
                field,
                sources,
                options,
            )?
        }
    }

    root.present().map_err(backend)?;
    info!(path = %path.display(), "wrote field plot");
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn draw_planar<DB: DrawingBackend>(
    plot_area: &DrawingArea<DB, Shift>,
    legend_area: &DrawingArea<DB, Shift>,
    plane: Plane,
    offset: f64,
    u: &[f64],
    v: &[f64],
    field: &VectorField,
    sources: &[Source],
    options: &PlotOptions,
) -> Result<(), PlotError> {
    let (nu, nv) = (u.len(), v.len());

    // In-plane components and their log magnitude
    let inplane: Vec<(f64, f64)> = (0..field.len())
        .map(|i| plane.project((field.x[i], field.y[i], field.z[i])))
        .collect();
    let logmag: Vec<f64> = inplane.iter().map(|(a, b)| a.hypot(*b).log10()).collect();
    let (lo, hi) = finite_range(&logmag);
    let (u_axis, v_axis) = plane.axis_names();
    let normal_axis = match plane {
        Plane::Xy => "z",
        Plane::Xz => "y",
    };
    debug!(u_axis, v_axis, nu, nv, log10_min = lo, log10_max = hi, "rendering planar field");

    let (hu, hv) = (half_step(u, 1.0), half_step(v, 1.0));
    let (umin, umax) = (u[0] - hu, u[nu - 1] + hu);
    let (vmin, vmax) = (v[0] - hv, v[nv - 1] + hv);

    let caption_font = FontDesc::new(font_family(), 22.0, FontStyle::Bold);
    let label_font = FontDesc::new(font_family(), 15.0, FontStyle::Normal);
    let mut chart = ChartBuilder::on(plot_area)
        .margin(15)
        .caption(
            format!("Magnetic field in the {u_axis}{v_axis} plane, {normal_axis} = {offset} m"),
            caption_font,
        )
        .x_label_area_size(45)
        .y_label_area_size(55)
        .build_cartesian_2d(umin..umax, vmin..vmax)
        .map_err(backend)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc(format!("{u_axis} (m)"))
        .y_desc(format!("{v_axis} (m)"))
        .label_style(label_font.clone())
        .axis_desc_style(label_font)
        .x_labels(6)
        .y_labels(6)
        .draw()
        .map_err(backend)?;

    chart
        .draw_series((0..nv).flat_map(|j| (0..nu).map(move |i| (i, j))).map(|(i, j)| {
            let m = logmag[j * nu + i];
            let color = if m.is_finite() {
                viridis((m - lo) / (hi - lo))
            } else {
                BLACK
            };
            Rectangle::new(
                [(u[i] - hu, v[j] - hv), (u[i] + hu, v[j] + hv)],
                color.filled(),
            )
        }))
        .map_err(backend)?;

    // Subsample arrows so they stay legible on dense grids
    let stride_u = (nu / options.arrows_per_axis.max(1)).max(1);
    let stride_v = (nv / options.arrows_per_axis.max(1)).max(1);
    let arrow_len = 1.6 * (hu * stride_u as f64).min(hv * stride_v as f64);
    let mut arrows = Vec::new();
    for j in (0..nv).step_by(stride_v) {
        for i in (0..nu).step_by(stride_u) {
            if let Some(paths) = arrow_paths((u[i], v[j]), inplane[j * nu + i], arrow_len) {
                arrows.extend(paths);
            }
        }
    }
    chart
        .draw_series(
            arrows
                .into_iter()
                .map(|p| PathElement::new(p, WHITE.stroke_width(1))),
        )
        .map_err(backend)?;

    for source in sources {
        let color = source_color(source);
        for outline in source_outline(source, plane) {
            if outline.len() == 1 {
                chart
                    .draw_series(std::iter::once(Circle::new(outline[0], 5, color.filled())))
                    .map_err(backend)?;
            } else {
                chart
                    .draw_series(std::iter::once(PathElement::new(outline, color.stroke_width(3))))
                    .map_err(backend)?;
            }
        }
    }

    draw_colorbar(legend_area, lo, hi, "log10 |B in plane| (T)")
}

fn draw_volume<DB: DrawingBackend>(
    plot_area: &DrawingArea<DB, Shift>,
    legend_area: &DrawingArea<DB, Shift>,
    grid: &PointGrid,
    shape: (usize, usize, usize),
    field: &VectorField,
    sources: &[Source],
    options: &PlotOptions,
) -> Result<(), PlotError> {
    let (nx, ny, nz) = shape;
    let logmag: Vec<f64> = field.magnitude().iter().map(|b| b.log10()).collect();
    let (lo, hi) = finite_range(&logmag);
    debug!(nx, ny, nz, log10_min = lo, log10_max = hi, "rendering volume field");

    // Bounds cover the grid and every source outline
    let outlines: Vec<Vec<(f64, f64, f64)>> = sources.iter().map(source_outline_3d).collect();
    let mut bounds = [(f64::INFINITY, f64::NEG_INFINITY); 3];
    let points = (0..grid.len())
        .map(|i| (grid.x[i], grid.y[i], grid.z[i]))
        .chain(outlines.iter().flatten().copied());
    for p in points {
        for (b, c) in bounds.iter_mut().zip([p.0, p.1, p.2]) {
            *b = (b.0.min(c), b.1.max(c));
        }
    }
    let spans = bounds.map(|(lo, hi)| (hi - lo).max(1e-9));
    let pad = 0.05 * spans.iter().cloned().fold(0.0, f64::max);
    let [bx, by, bz] = bounds.map(|(lo, hi)| (lo - pad)..(hi + pad));

    let caption_font = FontDesc::new(font_family(), 22.0, FontStyle::Bold);
    let label_font = FontDesc::new(font_family(), 15.0, FontStyle::Normal);

    // Chart axes are (x, z, y) so that physical z is vertical
    let mut chart = ChartBuilder::on(plot_area)
        .margin(15)
        .caption("Magnetic field, 3D view", caption_font)
        .build_cartesian_3d(bx.clone(), bz.clone(), by.clone())
        .map_err(backend)?;
    chart.with_projection(|mut pb| {
        pb.yaw = 0.6;
        pb.pitch = 0.35;
        pb.scale = 0.85;
        pb.into_matrix()
    });
    chart
        .configure_axes()
        .label_style(label_font.clone())
        .max_light_lines(3)
        .draw()
        .map_err(backend)?;
    let to_chart = |p: (f64, f64, f64)| (p.0, p.2, p.1);

    let axis_labels = [
        ("x (m)", (bx.end, bz.start, by.start)),
        ("y (m)", (bx.start, bz.start, by.end)),
        ("z (m)", (bx.start, bz.end, by.start)),
    ];
    chart
        .draw_series(
            axis_labels
                .into_iter()
                .map(|(text, pos)| Text::new(text, pos, label_font.clone())),
        )
        .map_err(backend)?;

    let per_axis = options.arrows_per_axis.max(1);
    let (sx, sy, sz) = (
        (nx / per_axis).max(1),
        (ny / per_axis).max(1),
        (nz / per_axis).max(1),
    );
    let step = |n: usize, s: usize| {
        if n > 1 {
            s as f64 / (n - 1) as f64
        } else {
            1.0
        }
    };
    let arrow_len = 0.8
        * [
            spans[0] * step(nx, sx),
            spans[1] * step(ny, sy),
            spans[2] * step(nz, sz),
        ]
        .into_iter()
        .fold(f64::INFINITY, f64::min);

    let mut arrows = Vec::new();
    for k in (0..nz).step_by(sz) {
        for j in (0..ny).step_by(sy) {
            for i in (0..nx).step_by(sx) {
                let idx = (k * ny + j) * nx + i;
                let origin = (grid.x[idx], grid.y[idx], grid.z[idx]);
                let b = (field.x[idx], field.y[idx], field.z[idx]);
                if let Some(paths) = arrow_paths_3d(origin, b, arrow_len) {
                    let color = viridis((logmag[idx] - lo) / (hi - lo));
                    arrows.extend(paths.map(|p| (p, color)));
                }
            }
        }
    }
    chart
        .draw_series(arrows.into_iter().map(|(p, color)| {
            PathElement::new(
                p.into_iter().map(to_chart).collect::<Vec<_>>(),
                color.stroke_width(2),
            )
        }))
        .map_err(backend)?;

    for (source, outline) in sources.iter().zip(outlines) {
        chart
            .draw_series(std::iter::once(PathElement::new(
                outline.into_iter().map(to_chart).collect::<Vec<_>>(),
                source_color(source).stroke_width(3),
            )))
            .map_err(backend)?;
    }

    draw_colorbar(legend_area, lo, hi, "log10 |B| (T)")
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::physics::{superpose, CircularLoop, StraightWire};

    fn sources() -> [Source; 2] {
        [
            Source::Wire(StraightWire::new(1.0, 2.0, 100)),
            Source::Loop(CircularLoop::new(1.0, 0.5, 100)),
        ]
    }

    fn options() -> PlotOptions {
        PlotOptions {
            width: 480,
            height: 400,
            arrows_per_axis: 6,
        }
    }

    #[test]
    fn viridis_clamps_and_runs_dark_to_light() {
        assert_eq!(viridis(-3.0), viridis(0.0));
        assert_eq!(viridis(7.0), viridis(1.0));
        assert_eq!(viridis(f64::NAN), viridis(0.0));

        let brightness = |c: RGBColor| c.0 as u32 + c.1 as u32 + c.2 as u32;
        assert!(brightness(viridis(0.0)) < brightness(viridis(0.5)));
        assert!(brightness(viridis(0.5)) < brightness(viridis(1.0)));
    }

    #[test]
    fn finite_range_ignores_non_finite_values() {
        assert_eq!(finite_range(&[f64::NEG_INFINITY, -6.0, -4.5, f64::NAN]), (-6.0, -4.5));
        assert_eq!(finite_range(&[-5.0, -5.0]), (-5.0, -4.0));
        assert_eq!(finite_range(&[f64::NAN]), (0.0, 1.0));
    }

    #[test]
    fn arrow_points_along_direction() {
        let [shaft, head] = arrow_paths((1.0, 1.0), (0.0, 2.0), 0.5).unwrap();
        assert_eq!(shaft[0], (1.0, 1.0));
        assert_relative_eq!(shaft[1].0, 1.0, epsilon = 1e-15);
        assert_relative_eq!(shaft[1].1, 1.5, epsilon = 1e-15);
        assert_eq!(head.len(), 3);
        // Barbs trail behind the tip on either side
        assert!(head[0].1 < 1.5 && head[2].1 < 1.5);
        assert!((head[0].0 - 1.0) * (head[2].0 - 1.0) < 0.0);
    }

    #[test]
    fn zero_or_nan_direction_has_no_arrow() {
        assert!(arrow_paths((0.0, 0.0), (0.0, 0.0), 1.0).is_none());
        assert!(arrow_paths((0.0, 0.0), (f64::NAN, 1.0), 1.0).is_none());
        assert!(arrow_paths_3d((0.0, 0.0, 0.0), (0.0, 0.0, 0.0), 1.0).is_none());
        assert!(arrow_paths_3d((0.0, 0.0, 0.0), (0.0, f64::INFINITY, 0.0), 1.0).is_none());
    }

    #[test]
    fn arrow_3d_has_requested_length_and_trailing_head() {
        for dir in [(3.0, 0.0, 0.0), (0.0, 0.0, -2.0), (1.0, 1.0, 1.0)] {
            let [shaft, head] = arrow_paths_3d((1.0, 2.0, 3.0), dir, 0.5).unwrap();
            let (o, tip) = (shaft[0], shaft[1]);
            let len = ((tip.0 - o.0).powi(2) + (tip.1 - o.1).powi(2) + (tip.2 - o.2).powi(2)).sqrt();
            assert_relative_eq!(len, 0.5, epsilon = 1e-12);
            assert_eq!(head[1], tip);

            // Barbs sit behind the tip along the shaft
            let along = |p: (f64, f64, f64)| {
                (p.0 - o.0) * dir.0 + (p.1 - o.1) * dir.1 + (p.2 - o.2) * dir.2
            };
            assert!(along(head[0]) < along(tip));
            assert!(along(head[2]) < along(tip));
        }
    }

    #[test]
    fn outlines_depend_on_plane() {
        let [wire, coil] = sources();
        assert_eq!(source_outline(&wire, Plane::Xy), vec![vec![(0.0, 0.0)]]);
        assert_eq!(source_outline(&wire, Plane::Xz), vec![vec![(0.0, -1.0), (0.0, 1.0)]]);
        assert_eq!(source_outline(&coil, Plane::Xy)[0].len(), 100);
        assert_eq!(source_outline(&coil, Plane::Xz).len(), 2);
    }

    #[test]
    fn outlines_in_space() {
        let [wire, coil] = sources();
        assert_eq!(source_outline_3d(&wire), vec![(0.0, 0.0, -1.0), (0.0, 0.0, 1.0)]);
        let circle = source_outline_3d(&coil);
        assert_eq!(circle.len(), 100);
        for p in circle {
            assert_relative_eq!(p.0.hypot(p.1), 0.5, epsilon = 1e-12);
            assert_eq!(p.2, 0.0);
        }
    }

    #[test]
    fn renders_png_for_planar_grid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("field.png");
        let grid = PointGrid::planar(Plane::Xy, 0.0, [-1.0, -1.0], [1.0, 1.0], [12, 12]);
        let sources = sources();
        let refs: Vec<&Source> = sources.iter().collect();
        let field = superpose(&refs, grid.coords()).unwrap();
        render_field_png(&path, &grid, &field, &sources, &options()).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn renders_png_for_volume_grid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/volume.png");
        let grid = PointGrid::volume([-1.0; 3], [1.0; 3], [5, 5, 5]);
        let sources = sources();
        let refs: Vec<&Source> = sources.iter().collect();
        let field = superpose(&refs, grid.coords()).unwrap();
        render_field_png(&path, &grid, &field, &sources, &options()).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn empty_or_mismatched_grids_are_rejected() {
        let grid = PointGrid::volume([0.0; 3], [1.0; 3], [0, 2, 2]);
        let err = render_field_png(
            "unused.png",
            &grid,
            &VectorField::zeros(0),
            &[],
            &PlotOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, PlotError::EmptyGrid));

        let grid = PointGrid::volume([0.0; 3], [1.0; 3], [2, 2, 2]);
        let err = render_field_png(
            "unused.png",
            &grid,
            &VectorField::zeros(3),
            &[],
            &PlotOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, PlotError::Field(_)));
    }
}
