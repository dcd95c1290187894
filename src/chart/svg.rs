//! SVG document backend.
//!
//! Translates a [`Scene`] into standalone vector markup for report
//! embedding and web handoff. Pure adapter: every coordinate comes from
//! the scene, every color from [`Appearance`].

use std::fmt::Write as _;
use std::io;
use std::path::Path;

use data::chart::geometry::LabelAnchor;
use data::chart::hover::HoverState;
use data::chart::scene::{
    LineScene, MEAN_MARKER_RADIUS, RadarScene, SELECTED_MARKER_RADIUS, Scene, TOOLTIP_HEIGHT,
    TOOLTIP_WIDTH,
};
use data::config::theme::color_to_hex;

use crate::chart::{Appearance, MEAN_FILL_ALPHA, SELECTED_FILL_ALPHA};

const FONT_FAMILY: &str = "Inter, Segoe UI, sans-serif";
const TEXT_SIZE: f32 = 12.0;

pub fn render(scene: &Scene, hover: &HoverState, appearance: &Appearance) -> String {
    let (width, height) = match scene {
        Scene::Radar(radar) => (radar.layout.width, radar.layout.height),
        Scene::Line(line) => (line.layout.width, line.layout.height),
        Scene::Empty => (320.0, 240.0),
    };

    let mut svg = String::new();

    let _ = writeln!(
        svg,
        "<svg xmlns='http://www.w3.org/2000/svg' width='{width:.0}' height='{height:.0}' viewBox='0 0 {width:.0} {height:.0}' role='img'>",
    );
    let _ = writeln!(
        svg,
        "  <rect width='{width:.0}' height='{height:.0}' fill='{}'/>",
        color_to_hex(appearance.background)
    );

    match scene {
        Scene::Radar(radar) => write_radar(&mut svg, radar, appearance),
        Scene::Line(line) => write_line(&mut svg, line, appearance),
        Scene::Empty => {
            let _ = writeln!(
                svg,
                "  <text x='{:.1}' y='{:.1}' text-anchor='middle' font-family='{FONT_FAMILY}' font-size='{TEXT_SIZE}' fill='{}'>No evaluations yet</text>",
                width * 0.5,
                height * 0.5,
                color_to_hex(appearance.muted_text)
            );
        }
    }

    write_tooltip(&mut svg, hover, appearance);

    let _ = writeln!(svg, "</svg>");

    svg
}

pub fn save(path: &Path, markup: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, markup)
}

fn write_radar(svg: &mut String, scene: &RadarScene, appearance: &Appearance) {
    let frame = &scene.frame;
    let grid = color_to_hex(appearance.grid);

    for ring in frame.rings {
        let _ = writeln!(
            svg,
            "  <circle cx='{:.1}' cy='{:.1}' r='{ring:.1}' fill='none' stroke='{grid}' stroke-width='1' stroke-dasharray='3 3'/>",
            frame.center_x, frame.center_y,
        );
    }

    for axis in &frame.axes {
        let _ = writeln!(
            svg,
            "  <line x1='{:.1}' y1='{:.1}' x2='{:.1}' y2='{:.1}' stroke='{grid}' stroke-width='1'/>",
            frame.center_x, frame.center_y, axis.end_x, axis.end_y,
        );
        let _ = writeln!(
            svg,
            "  <text x='{:.1}' y='{:.1}' text-anchor='{}' dominant-baseline='middle' font-family='{FONT_FAMILY}' font-size='{TEXT_SIZE}' fill='{}'>{}</text>",
            axis.label_x,
            axis.label_y,
            anchor_attr(axis.anchor),
            color_to_hex(appearance.muted_text),
            escape_text(&axis.label),
        );
    }

    write_polygon(svg, &scene.mean, appearance.mean, MEAN_FILL_ALPHA);
    write_markers(svg, &scene.mean, appearance.mean, MEAN_MARKER_RADIUS);

    if let Some(selected) = &scene.selected {
        write_polygon(
            svg,
            &selected.vertices,
            appearance.selected,
            SELECTED_FILL_ALPHA,
        );
        write_markers(
            svg,
            &selected.vertices,
            appearance.selected,
            SELECTED_MARKER_RADIUS,
        );
    }
}

fn write_polygon(
    svg: &mut String,
    vertices: &[data::chart::ChartPoint],
    color: iced::Color,
    fill_alpha: f32,
) {
    if vertices.is_empty() {
        return;
    }

    let points: String = vertices
        .iter()
        .map(|point| format!("{:.1},{:.1}", point.x, point.y))
        .collect::<Vec<_>>()
        .join(" ");
    let hex = color_to_hex(color);

    let _ = writeln!(
        svg,
        "  <polygon points='{points}' fill='{hex}' fill-opacity='{fill_alpha}' stroke='{hex}' stroke-width='2' stroke-linejoin='round'/>",
    );
}

fn write_markers(
    svg: &mut String,
    vertices: &[data::chart::ChartPoint],
    color: iced::Color,
    radius: f32,
) {
    let hex = color_to_hex(color);
    for point in vertices {
        let _ = writeln!(
            svg,
            "  <circle cx='{:.1}' cy='{:.1}' r='{radius}' fill='{hex}'/>",
            point.x, point.y,
        );
    }
}

fn write_line(svg: &mut String, scene: &LineScene, appearance: &Appearance) {
    let grid = color_to_hex(appearance.grid);
    let muted = color_to_hex(appearance.muted_text);
    let layout = &scene.layout;

    for (tick_y, label) in &scene.geometry.y_ticks {
        let _ = writeln!(
            svg,
            "  <line x1='{:.1}' y1='{tick_y:.1}' x2='{:.1}' y2='{tick_y:.1}' stroke='{grid}' stroke-width='1' stroke-dasharray='3 3'/>",
            data::chart::geometry::LINE_PADDING,
            layout.width - data::chart::geometry::LINE_PADDING,
        );
        let _ = writeln!(
            svg,
            "  <text x='{:.1}' y='{tick_y:.1}' text-anchor='end' dominant-baseline='middle' font-family='{FONT_FAMILY}' font-size='{TEXT_SIZE}' fill='{muted}'>{label}</text>",
            data::chart::geometry::LINE_PADDING - 8.0,
        );
    }

    let points = &scene.geometry.points;
    if !points.is_empty() {
        let mut path = String::new();
        for (i, point) in points.iter().enumerate() {
            let command = if i == 0 { 'M' } else { 'L' };
            let _ = write!(path, "{command}{:.1} {:.1} ", point.x, point.y);
        }
        let _ = writeln!(
            svg,
            "  <path d='{}' fill='none' stroke='{}' stroke-width='2' stroke-linecap='round' stroke-linejoin='round'/>",
            path.trim_end(),
            color_to_hex(appearance.mean),
        );
    }

    for (index, point) in points.iter().enumerate() {
        let (radius, color) = if scene.highlighted == Some(index) {
            (SELECTED_MARKER_RADIUS, appearance.selected)
        } else {
            (MEAN_MARKER_RADIUS, appearance.mean)
        };
        let _ = writeln!(
            svg,
            "  <circle cx='{:.1}' cy='{:.1}' r='{radius}' fill='{}'/>",
            point.x,
            point.y,
            color_to_hex(color),
        );
        let _ = writeln!(
            svg,
            "  <text x='{:.1}' y='{:.1}' text-anchor='middle' font-family='{FONT_FAMILY}' font-size='{TEXT_SIZE}' fill='{muted}'>{}</text>",
            point.x,
            layout.height - data::chart::geometry::LINE_PADDING + 18.0,
            escape_text(&point.key),
        );
    }
}

fn write_tooltip(svg: &mut String, hover: &HoverState, appearance: &Appearance) {
    let HoverState::Hovering { title, value, x, y } = hover else {
        return;
    };

    let _ = writeln!(
        svg,
        "  <g transform='translate({x:.1} {y:.1})'>",
    );
    let _ = writeln!(
        svg,
        "    <rect width='{TOOLTIP_WIDTH:.0}' height='{TOOLTIP_HEIGHT:.0}' rx='4' fill='{}'/>",
        color_to_hex(appearance.tooltip_bg),
    );
    let _ = writeln!(
        svg,
        "    <text x='8' y='14' font-family='{FONT_FAMILY}' font-size='{TEXT_SIZE}' font-weight='600' fill='{}'>{}</text>",
        color_to_hex(appearance.tooltip_text),
        escape_text(title),
    );
    let _ = writeln!(
        svg,
        "    <text x='8' y='28' font-family='{FONT_FAMILY}' font-size='{TEXT_SIZE}' fill='{}'>{}</text>",
        color_to_hex(appearance.tooltip_text),
        escape_text(value),
    );
    let _ = writeln!(svg, "  </g>");
}

fn anchor_attr(anchor: LabelAnchor) -> &'static str {
    match anchor {
        LabelAnchor::Start => "start",
        LabelAnchor::Middle => "middle",
        LabelAnchor::End => "end",
    }
}

fn escape_text(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
