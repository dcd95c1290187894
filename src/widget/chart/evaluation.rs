use crate::chart::{Appearance, MEAN_FILL_ALPHA, SELECTED_FILL_ALPHA};
use crate::style;
use crate::widget::chart::horizontal_alignment;

use club::EvaluationRecord;
use data::chart::ChartPoint;
use data::chart::geometry::LINE_PADDING;
use data::chart::hover::HoverState;
use data::chart::layout as chart_layout;
use data::chart::scene::{
    LineScene, MEAN_MARKER_RADIUS, RadarScene, SELECTED_MARKER_RADIUS, Scene, TOOLTIP_HEIGHT,
    TOOLTIP_WIDTH, SelectedSeries,
};

use iced::advanced::widget::tree::{self, Tree};
use iced::advanced::{self, Clipboard, Layout, Shell, Widget, layout, renderer};
use iced::theme::palette::Extended;
use iced::widget::canvas;
use iced::{
    Color, Element, Event, Length, Point, Rectangle, Renderer, Size, Theme, Vector, mouse, window,
};

#[derive(Debug, Clone)]
pub enum EvaluationChartEvent {
    PointPressed(EvaluationRecord),
}

struct State {
    chart_cache: canvas::Cache,
    overlay_cache: canvas::Cache,
    last_cache_rev: u64,
}

impl Default for State {
    fn default() -> Self {
        Self {
            chart_cache: canvas::Cache::new(),
            overlay_cache: canvas::Cache::new(),
            last_cache_rev: 0,
        }
    }
}

/// Interactive evaluation chart on the iced canvas.
///
/// Holds only borrowed inputs; every geometric fact is re-derived from the
/// record snapshot, the highlight, and the measured bounds on each pass.
pub struct EvaluationChart<'a> {
    records: &'a [EvaluationRecord],
    highlighted: Option<&'a str>,
    version: u64,
}

impl<'a> EvaluationChart<'a> {
    pub fn new(records: &'a [EvaluationRecord]) -> Self {
        Self {
            records,
            highlighted: None,
            version: 0,
        }
    }

    pub fn highlighted(mut self, evaluation_id: Option<&'a str>) -> Self {
        self.highlighted = evaluation_id;
        self
    }

    /// Bump to invalidate the cached chart layers after a snapshot or
    /// highlight change.
    pub fn version(mut self, rev: u64) -> Self {
        self.version = rev;
        self
    }

    fn compute_scene(&self, bounds: Rectangle) -> (Scene, Vector) {
        let config = chart_layout::resolve(bounds.width);
        let scene = Scene::build(self.records, self.highlighted, &config);
        let offset = Vector::new(
            ((bounds.width - config.width) * 0.5).max(0.0),
            ((bounds.height - config.height) * 0.5).max(0.0),
        );

        (scene, offset)
    }
}

impl<'a, M> Widget<M, Theme, Renderer> for EvaluationChart<'a>
where
    M: Clone + 'static + From<EvaluationChartEvent>,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::default())
    }

    fn size(&self) -> Size<Length> {
        Size {
            width: Length::Fill,
            height: Length::Fill,
        }
    }

    fn layout(
        &mut self,
        _tree: &mut Tree,
        _renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        layout::atomic(limits, Length::Fill, Length::Fill)
    }

    fn update(
        &mut self,
        tree: &mut Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, M>,
        _viewport: &Rectangle,
    ) {
        if shell.is_event_captured() {
            return;
        }

        match event {
            Event::Mouse(mouse_event) => {
                let state = tree.state.downcast_mut::<State>();
                let bounds = layout.bounds();

                let Some(cursor_pos) = cursor.position_in(bounds) else {
                    // Pointer left the chart: hovering -> idle.
                    state.overlay_cache.clear();
                    return;
                };

                match mouse_event {
                    mouse::Event::CursorMoved { .. } => {
                        state.overlay_cache.clear();
                    }
                    mouse::Event::ButtonPressed(mouse::Button::Left) => {
                        let (scene, offset) = self.compute_scene(bounds);
                        let local = cursor_pos - offset;

                        if let Some(record_id) = scene.pressed(local.x, local.y)
                            && let Some(record) =
                                self.records.iter().find(|r| r.id == record_id)
                        {
                            shell.publish(M::from(EvaluationChartEvent::PointPressed(
                                record.clone(),
                            )));
                        }
                    }
                    _ => {}
                }
            }
            Event::Window(window::Event::RedrawRequested(_)) => {
                let state = tree.state.downcast_mut::<State>();

                if state.last_cache_rev != self.version {
                    state.chart_cache.clear();
                    state.overlay_cache.clear();
                    state.last_cache_rev = self.version;
                }
            }
            _ => {}
        }
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        _style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
    ) {
        use advanced::Renderer as _;

        let state = tree.state.downcast_ref::<State>();
        let bounds = layout.bounds();
        let (scene, offset) = self.compute_scene(bounds);

        if matches!(scene, Scene::Empty) {
            return;
        }

        let appearance = Appearance::from_theme(theme);
        let palette = theme.extended_palette();

        let chart_geom = state.chart_cache.draw(renderer, bounds.size(), |frame| {
            frame.translate(offset);
            match &scene {
                Scene::Radar(radar) => fill_radar(frame, radar, &appearance, palette),
                Scene::Line(line) => fill_line(frame, line, &appearance, palette),
                Scene::Empty => {}
            }
        });

        let hover = cursor
            .position_in(bounds)
            .map(|pos| scene.hover(pos.x - offset.x, pos.y - offset.y))
            .unwrap_or_default();

        let overlay_geom = state.overlay_cache.draw(renderer, bounds.size(), |frame| {
            frame.translate(offset);
            fill_tooltip(frame, &hover, &appearance);
        });

        renderer.with_translation(Vector::new(bounds.x, bounds.y), |r| {
            use iced::advanced::graphics::geometry::Renderer as _;
            r.draw_geometry(chart_geom);
            r.draw_geometry(overlay_geom);
        });
    }

    fn mouse_interaction(
        &self,
        _state: &Tree,
        layout: Layout<'_>,
        cursor: advanced::mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> advanced::mouse::Interaction {
        let Some(cursor_pos) = cursor.position_in(layout.bounds()) else {
            return advanced::mouse::Interaction::default();
        };

        let (scene, offset) = self.compute_scene(layout.bounds());
        let local = cursor_pos - offset;

        if scene.pressed(local.x, local.y).is_some() {
            advanced::mouse::Interaction::Pointer
        } else if !scene.hover(local.x, local.y).is_idle() {
            advanced::mouse::Interaction::Crosshair
        } else {
            advanced::mouse::Interaction::default()
        }
    }
}

fn fill_radar(
    frame: &mut canvas::Frame,
    scene: &RadarScene,
    appearance: &Appearance,
    palette: &Extended,
) {
    let geometry = &scene.frame;
    let center = Point::new(geometry.center_x, geometry.center_y);

    for ring in geometry.rings {
        frame.stroke(
            &canvas::Path::circle(center, ring),
            style::dashed_line_from_palette(palette),
        );
    }

    for axis in &geometry.axes {
        let mut builder = canvas::path::Builder::new();
        builder.move_to(center);
        builder.line_to(Point::new(axis.end_x, axis.end_y));
        frame.stroke(&builder.build(), style::grid_stroke(palette));

        frame.fill_text(canvas::Text {
            content: axis.label.clone(),
            position: Point::new(axis.label_x, axis.label_y),
            color: appearance.muted_text,
            size: style::TEXT_SIZE.into(),
            font: style::MONO,
            align_x: horizontal_alignment(axis.anchor).into(),
            align_y: iced::Alignment::Center.into(),
            ..Default::default()
        });
    }

    fill_series(
        frame,
        &scene.mean,
        appearance.mean,
        MEAN_FILL_ALPHA,
        MEAN_MARKER_RADIUS,
    );

    if let Some(SelectedSeries { vertices, .. }) = &scene.selected {
        fill_series(
            frame,
            vertices,
            appearance.selected,
            SELECTED_FILL_ALPHA,
            SELECTED_MARKER_RADIUS,
        );
    }
}

fn fill_series(
    frame: &mut canvas::Frame,
    vertices: &[ChartPoint],
    color: Color,
    fill_alpha: f32,
    marker_radius: f32,
) {
    if vertices.is_empty() {
        return;
    }

    let mut builder = canvas::path::Builder::new();
    builder.move_to(Point::new(vertices[0].x, vertices[0].y));
    for vertex in &vertices[1..] {
        builder.line_to(Point::new(vertex.x, vertex.y));
    }
    builder.close();
    let path = builder.build();

    frame.fill(&path, color.scale_alpha(fill_alpha));
    frame.stroke(
        &path,
        canvas::Stroke::default().with_color(color).with_width(2.0),
    );

    for vertex in vertices {
        frame.fill(
            &canvas::Path::circle(Point::new(vertex.x, vertex.y), marker_radius),
            color,
        );
    }
}

fn fill_line(
    frame: &mut canvas::Frame,
    scene: &LineScene,
    appearance: &Appearance,
    palette: &Extended,
) {
    let layout = &scene.layout;

    for (tick_y, label) in &scene.geometry.y_ticks {
        let mut builder = canvas::path::Builder::new();
        builder.move_to(Point::new(LINE_PADDING, *tick_y));
        builder.line_to(Point::new(layout.width - LINE_PADDING, *tick_y));
        frame.stroke(&builder.build(), style::dashed_line_from_palette(palette));

        frame.fill_text(canvas::Text {
            content: label.clone(),
            position: Point::new(LINE_PADDING - 8.0, *tick_y),
            color: appearance.muted_text,
            size: style::TEXT_SIZE.into(),
            font: style::MONO,
            align_x: iced::Alignment::End.into(),
            align_y: iced::Alignment::Center.into(),
            ..Default::default()
        });
    }

    let points = &scene.geometry.points;
    if points.is_empty() {
        return;
    }

    let mut builder = canvas::path::Builder::new();
    builder.move_to(Point::new(points[0].x, points[0].y));
    for point in &points[1..] {
        builder.line_to(Point::new(point.x, point.y));
    }
    frame.stroke(
        &builder.build(),
        canvas::Stroke::default()
            .with_color(appearance.mean)
            .with_width(2.0),
    );

    let mut last_right = f32::NEG_INFINITY;
    for (index, point) in points.iter().enumerate() {
        let (marker_radius, color) = if scene.highlighted == Some(index) {
            (SELECTED_MARKER_RADIUS, appearance.selected)
        } else {
            (MEAN_MARKER_RADIUS, appearance.mean)
        };
        frame.fill(
            &canvas::Path::circle(Point::new(point.x, point.y), marker_radius),
            color,
        );

        // Date labels skip when they would overlap the previous one.
        let est_w = point.key.len() as f32 * style::CHAR_W + 8.0;
        let left = point.x - est_w * 0.5;
        if left > last_right {
            frame.fill_text(canvas::Text {
                content: point.key.clone(),
                position: Point::new(point.x, layout.height - LINE_PADDING + 14.0),
                color: appearance.muted_text,
                size: style::TEXT_SIZE.into(),
                font: style::MONO,
                align_x: iced::Alignment::Center.into(),
                align_y: iced::Alignment::Center.into(),
                ..Default::default()
            });
            last_right = point.x + est_w * 0.5;
        }
    }
}

fn fill_tooltip(frame: &mut canvas::Frame, hover: &HoverState, appearance: &Appearance) {
    let HoverState::Hovering { title, value, x, y } = hover else {
        return;
    };

    frame.fill_rectangle(
        Point::new(*x, *y),
        Size::new(TOOLTIP_WIDTH, TOOLTIP_HEIGHT),
        appearance.tooltip_bg,
    );

    frame.fill_text(canvas::Text {
        content: title.clone(),
        position: Point::new(x + 8.0, y + 10.0),
        color: appearance.tooltip_text,
        size: style::TEXT_SIZE.into(),
        font: style::MONO,
        align_x: iced::Alignment::Start.into(),
        align_y: iced::Alignment::Center.into(),
        ..Default::default()
    });

    frame.fill_text(canvas::Text {
        content: value.clone(),
        position: Point::new(x + 8.0, y + 24.0),
        color: appearance.tooltip_text,
        size: style::TEXT_SIZE.into(),
        font: style::MONO,
        align_x: iced::Alignment::Start.into(),
        align_y: iced::Alignment::Center.into(),
        ..Default::default()
    });
}

impl<'a, M> From<EvaluationChart<'a>> for Element<'a, M, Theme, Renderer>
where
    M: Clone + 'a + 'static + From<EvaluationChartEvent>,
{
    fn from(chart: EvaluationChart<'a>) -> Self {
        Element::new(chart)
    }
}
