// Static route map rendering with plotters

use std::fmt::Display;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::info;

use crate::error::{Error, Result};
use crate::models::{Route, RouteSummary, StopRole};

const MARKER_RADIUS: i32 = 12;
const MIN_PADDING_DEGREES: f64 = 0.05;

/// Appearance of a rendered route map
#[derive(Debug, Clone, PartialEq)]
pub struct MapOptions {
    pub width: u32,
    pub height: u32,
    pub title: String,
    /// Caption, axes, stop numbers and legend; turning it off draws shapes only
    pub draw_labels: bool,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 800,
            title: "Campsite route".to_string(),
            draw_labels: true,
        }
    }
}

fn render_error<E: Display>(err: E) -> Error {
    Error::Render(err.to_string())
}

pub fn marker_color(role: StopRole) -> RGBColor {
    match role {
        StopRole::Start => GREEN,
        StopRole::End => RED,
        StopRole::Intermediate => BLUE,
    }
}

/// Longitude and latitude ranges covering every stop with 10% padding
pub fn map_bounds(route: &Route) -> Option<(f64, f64, f64, f64)> {
    let first = route.start()?;
    let mut min_lon = first.longitude;
    let mut max_lon = first.longitude;
    let mut min_lat = first.latitude;
    let mut max_lat = first.latitude;

    for stop in route.stops() {
        min_lon = min_lon.min(stop.longitude);
        max_lon = max_lon.max(stop.longitude);
        min_lat = min_lat.min(stop.latitude);
        max_lat = max_lat.max(stop.latitude);
    }

    let padding_lon = ((max_lon - min_lon) * 0.1).max(MIN_PADDING_DEGREES);
    let padding_lat = ((max_lat - min_lat) * 0.1).max(MIN_PADDING_DEGREES);

    Some((
        min_lon - padding_lon,
        max_lon + padding_lon,
        min_lat - padding_lat,
        max_lat + padding_lat,
    ))
}

/// Draws the route onto any plotters drawing area
pub fn draw_route_map<DB>(
    root: &DrawingArea<DB, Shift>,
    route: &Route,
    summary: &RouteSummary,
    options: &MapOptions,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let (min_lon, max_lon, min_lat, max_lat) = map_bounds(route).ok_or(Error::EmptyRoute)?;

    root.fill(&WHITE).map_err(render_error)?;

    let mut builder = ChartBuilder::on(root);
    builder.margin(10);
    if options.draw_labels {
        builder
            .caption(
                format!(
                    "{} ({} stops, {:.1} km, €{:.2})",
                    options.title,
                    route.len(),
                    summary.total_distance_km,
                    summary.total_cost
                ),
                ("sans-serif", 20).into_font(),
            )
            .x_label_area_size(30)
            .y_label_area_size(50);
    }

    let mut chart = builder
        .build_cartesian_2d(min_lon..max_lon, min_lat..max_lat)
        .map_err(render_error)?;

    if options.draw_labels {
        chart
            .configure_mesh()
            .x_desc("Longitude")
            .y_desc("Latitude")
            .draw()
            .map_err(render_error)?;
    }

    let line_style = BLUE.mix(0.7).stroke_width(3);
    let path: Vec<(f64, f64)> = route
        .stops()
        .iter()
        .map(|stop| (stop.longitude, stop.latitude))
        .collect();
    let series = chart
        .draw_series(LineSeries::new(path, line_style))
        .map_err(render_error)?;
    if options.draw_labels {
        series
            .label("Route")
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));
    }

    for (index, stop) in route.stops().iter().enumerate() {
        let role = route.role_of(index).unwrap_or(StopRole::Intermediate);
        let color = marker_color(role);
        let position = (stop.longitude, stop.latitude);

        chart
            .draw_series(std::iter::once(Circle::new(
                position,
                MARKER_RADIUS,
                WHITE.filled(),
            )))
            .map_err(render_error)?;
        chart
            .draw_series(std::iter::once(Circle::new(
                position,
                MARKER_RADIUS,
                color.stroke_width(2),
            )))
            .map_err(render_error)?;

        if options.draw_labels {
            let label = EmptyElement::at(position)
                + Text::new(
                    (index + 1).to_string(),
                    (-4, -7),
                    ("sans-serif", 14).into_font().color(&color),
                );
            chart
                .draw_series(std::iter::once(label))
                .map_err(render_error)?;
        }
    }

    if options.draw_labels {
        for (role, name) in [
            (StopRole::Start, "Start"),
            (StopRole::End, "End"),
            (StopRole::Intermediate, "Intermediate"),
        ] {
            let style = marker_color(role).filled();
            chart
                .draw_series(std::iter::empty::<Circle<(f64, f64), i32>>())
                .map_err(render_error)?
                .label(name)
                .legend(move |(x, y)| Circle::new((x + 10, y), 5, style));
        }

        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .position(SeriesLabelPosition::UpperRight)
            .draw()
            .map_err(render_error)?;
    }

    root.present().map_err(render_error)?;
    Ok(())
}

/// Renders the route to an image file, SVG for `.svg` paths and PNG otherwise
pub fn render_route_map<P: AsRef<Path>>(
    path: P,
    route: &Route,
    summary: &RouteSummary,
    options: &MapOptions,
) -> Result<()> {
    let path = path.as_ref();
    let size = (options.width, options.height);
    let is_svg = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));

    if is_svg {
        let root = SVGBackend::new(path, size).into_drawing_area();
        draw_route_map(&root, route, summary, options)?;
    } else {
        let root = BitMapBackend::new(path, size).into_drawing_area();
        draw_route_map(&root, route, summary, options)?;
    }

    info!(path = %path.display(), stops = route.len(), "route map rendered");
    Ok(())
}
