//! Self-contained animated SVG output.
//!
//! Each stroke is a `<line>` that starts hidden and becomes visible at
//! `frame * frame_interval` through an SMIL `<set>`, so any SVG-capable browser
//! replays the growth without a script.

use super::{Animation, SegmentSink, ViewSetup};
use crate::error::Result;
use crate::segment::{Bounds, Segment};
use glam::Vec2;
use std::fmt::Write as _;
use std::time::Duration;

/// Matplotlib's default colour cycle, applied one colour per stroke.
const PALETTE: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

const WIDTH: f32 = 640.0;
const HEIGHT: f32 = 480.0;
const MARGIN_LEFT: f32 = 64.0;
const MARGIN_RIGHT: f32 = 24.0;
const MARGIN_TOP: f32 = 48.0;
const MARGIN_BOTTOM: f32 = 56.0;

pub struct SvgSink {
    frame_interval: Duration,
    bounds: Bounds,
    line_width: f32,
    body: String,
    document: Option<String>,
}

impl SvgSink {
    pub fn new() -> Self {
        Self {
            frame_interval: Duration::ZERO,
            bounds: ViewSetup::default().bounds,
            line_width: 2.0,
            body: String::new(),
            document: None,
        }
    }

    /// The finished document, once [`finish`](SegmentSink::finish) has run.
    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }

    /// Consumes the sink and returns the finished document (empty if unfinished).
    pub fn into_string(self) -> String {
        self.document.unwrap_or_default()
    }

    /// Maps a world point into the plot area, flipping `y` so world `+Y` is up.
    fn project(&self, point: Vec2) -> Vec2 {
        let plot_w = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
        let plot_h = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
        let span = (self.bounds.max - self.bounds.min).max(Vec2::splat(f32::EPSILON));
        Vec2::new(
            MARGIN_LEFT + (point.x - self.bounds.min.x) / span.x * plot_w,
            MARGIN_TOP + (self.bounds.max.y - point.y) / span.y * plot_h,
        )
    }

    fn write_frame(&mut self, view: &ViewSetup) -> Result<()> {
        let plot_w = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
        let plot_h = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
        let b = &view.bounds;
        let body = &mut self.body;

        writeln!(
            body,
            r#"<defs><clipPath id="plot"><rect x="{MARGIN_LEFT}" y="{MARGIN_TOP}" width="{plot_w}" height="{plot_h}"/></clipPath></defs>"#
        )?;
        writeln!(
            body,
            r#"<rect x="{MARGIN_LEFT}" y="{MARGIN_TOP}" width="{plot_w}" height="{plot_h}" fill="none" stroke="black"/>"#
        )?;
        writeln!(
            body,
            r#"<text x="{}" y="{}" text-anchor="middle" font-size="16">{}</text>"#,
            MARGIN_LEFT + plot_w / 2.0,
            MARGIN_TOP / 2.0 + 6.0,
            escape(&view.title)
        )?;
        writeln!(
            body,
            r#"<text x="{}" y="{}" text-anchor="middle" font-size="13">{}</text>"#,
            MARGIN_LEFT + plot_w / 2.0,
            HEIGHT - 12.0,
            escape(&view.x_label)
        )?;
        writeln!(
            body,
            r#"<text x="16" y="{y}" text-anchor="middle" font-size="13" transform="rotate(-90 16 {y})">{}</text>"#,
            escape(&view.y_label),
            y = MARGIN_TOP + plot_h / 2.0
        )?;

        // Range ticks at the corners.
        let bottom = MARGIN_TOP + plot_h;
        writeln!(
            body,
            r#"<text x="{MARGIN_LEFT}" y="{}" text-anchor="middle" font-size="11">{}</text>"#,
            bottom + 16.0,
            b.min.x
        )?;
        writeln!(
            body,
            r#"<text x="{}" y="{}" text-anchor="middle" font-size="11">{}</text>"#,
            MARGIN_LEFT + plot_w,
            bottom + 16.0,
            b.max.x
        )?;
        writeln!(
            body,
            r#"<text x="{}" y="{bottom}" text-anchor="end" font-size="11">{}</text>"#,
            MARGIN_LEFT - 6.0,
            b.min.y
        )?;
        writeln!(
            body,
            r#"<text x="{}" y="{}" text-anchor="end" font-size="11">{}</text>"#,
            MARGIN_LEFT - 6.0,
            MARGIN_TOP + 4.0,
            b.max.y
        )?;
        writeln!(body, r#"<g clip-path="url(#plot)" stroke-linecap="round">"#)?;
        Ok(())
    }
}

impl Default for SvgSink {
    fn default() -> Self {
        Self::new()
    }
}

impl SegmentSink for SvgSink {
    fn begin(
        &mut self,
        view: &ViewSetup,
        animation: &Animation,
        frame_count: usize,
    ) -> Result<()> {
        self.frame_interval = animation.frame_interval;
        self.bounds = view.bounds;
        self.line_width = view.line_width;
        self.body.clear();
        self.document = None;
        self.write_frame(view)?;
        tracing::debug!(frame_count, "svg sink ready");
        Ok(())
    }

    fn reveal(&mut self, frame: usize, segment: &Segment) -> Result<()> {
        let a = self.project(segment.start);
        let b = self.project(segment.end);
        let begin = self.frame_interval.as_secs_f64() * frame as f64;
        let color = PALETTE[frame % PALETTE.len()];
        writeln!(
            self.body,
            r#"<line x1="{:.3}" y1="{:.3}" x2="{:.3}" y2="{:.3}" stroke="{color}" stroke-width="{}" visibility="hidden"><set attributeName="visibility" to="visible" begin="{begin:.3}s" fill="freeze"/></line>"#,
            a.x, a.y, b.x, b.y, self.line_width
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let mut doc = String::with_capacity(self.body.len() + 256);
        writeln!(
            doc,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" viewBox="0 0 {WIDTH} {HEIGHT}">"#
        )?;
        writeln!(doc, r#"<rect width="100%" height="100%" fill="white"/>"#)?;
        doc.push_str(&self.body);
        writeln!(doc, "</g>")?;
        writeln!(doc, "</svg>")?;
        self.document = Some(doc);
        Ok(())
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
