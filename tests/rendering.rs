// tests/rendering.rs
use glam::Vec2;
use std::time::Duration;
use symbios_plant::error::Result;
use symbios_plant::render::JsonFrames;
use symbios_plant::{
    Animation, Bounds, JsonFrameSink, PlantConfig, Segment, SegmentSink, SvgSink, ViewSetup,
    pipeline,
};

/// Records every call so ordering can be checked.
#[derive(Default)]
struct RecordingSink {
    begun: Option<(ViewSetup, Animation, usize)>,
    revealed: Vec<(usize, Segment)>,
    finished: bool,
}

impl SegmentSink for RecordingSink {
    fn begin(
        &mut self,
        view: &ViewSetup,
        animation: &Animation,
        frame_count: usize,
    ) -> Result<()> {
        self.begun = Some((view.clone(), *animation, frame_count));
        Ok(())
    }

    fn reveal(&mut self, frame: usize, segment: &Segment) -> Result<()> {
        assert!(self.begun.is_some(), "reveal before begin");
        self.revealed.push((frame, *segment));
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.finished = true;
        Ok(())
    }
}

fn sample_segments() -> Vec<Segment> {
    vec![
        Segment::new(Vec2::ZERO, Vec2::new(0.0, 1.0)),
        Segment::new(Vec2::new(0.0, 1.0), Vec2::new(-0.5, 1.8)),
        Segment::new(Vec2::new(0.0, 1.0), Vec2::new(0.0, 2.0)),
    ]
}

#[test]
fn test_animation_reveals_in_order() {
    let segments = sample_segments();
    let view = ViewSetup::default();
    let mut sink = RecordingSink::default();

    Animation::default().play(&segments, &view, &mut sink).unwrap();

    let (seen_view, seen_animation, count) = sink.begun.unwrap();
    assert_eq!(seen_view, view);
    assert_eq!(seen_animation, Animation::default());
    assert_eq!(count, 3);
    assert!(sink.finished);
    let frames: Vec<usize> = sink.revealed.iter().map(|(f, _)| *f).collect();
    assert_eq!(frames, vec![0, 1, 2]);
    let revealed: Vec<Segment> = sink.revealed.iter().map(|(_, s)| *s).collect();
    assert_eq!(revealed, segments);
}

#[test]
fn test_animation_with_no_segments() {
    let mut sink = RecordingSink::default();
    Animation::default()
        .play(&[], &ViewSetup::default(), &mut sink)
        .unwrap();
    assert_eq!(sink.begun.map(|(_, _, n)| n), Some(0));
    assert!(sink.revealed.is_empty());
    assert!(sink.finished);
}

#[test]
fn test_animation_duration() {
    let anim = Animation::new(Duration::from_millis(50));
    assert_eq!(anim.duration(10), Duration::from_millis(500));
    assert_eq!(anim.duration(0), Duration::ZERO);
}

#[test]
fn test_default_view_matches_classic_figure() {
    let view = ViewSetup::default();
    assert_eq!(view.bounds, Bounds::from_ranges((-10.0, 10.0), (0.0, 20.0)));
    assert_eq!(view.x_label, "X");
    assert_eq!(view.y_label, "Y");
    assert_eq!(view.line_width, 2.0);
}

#[test]
fn test_svg_has_one_line_per_segment() {
    let segments = sample_segments();
    let view = ViewSetup {
        title: "Weeds & <Roots>".to_string(),
        ..Default::default()
    };
    let mut sink = SvgSink::new();
    Animation::new(Duration::from_millis(100))
        .play(&segments, &view, &mut sink)
        .unwrap();

    let svg = sink.into_string();
    assert!(svg.starts_with("<svg"));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert_eq!(svg.matches("<line ").count(), segments.len());
    assert!(svg.contains(r#"begin="0.000s""#));
    assert!(svg.contains(r#"begin="0.200s""#));
    assert!(svg.contains("Weeds &amp; &lt;Roots&gt;"));
}

#[test]
fn test_svg_flips_y_axis() {
    let view = ViewSetup::default();
    let mut sink = SvgSink::default();
    Animation::default()
        .play(
            &[Segment::new(Vec2::new(0.0, 0.0), Vec2::new(0.0, 20.0))],
            &view,
            &mut sink,
        )
        .unwrap();
    let svg = sink.document().unwrap().to_string();
    let line = svg.lines().find(|l| l.starts_with("<line")).unwrap();

    let attr = |name: &str| -> f32 {
        let key = format!(r#"{name}=""#);
        let start = line.find(&key).unwrap() + key.len();
        let end = start + line[start..].find('"').unwrap();
        line[start..end].parse().unwrap()
    };
    // World y = 0 is at the bottom of the plot, so its pixel y is larger.
    assert!(attr("y1") > attr("y2"));
    assert_eq!(attr("x1"), attr("x2"));
}

#[test]
fn test_json_sink_round_trip() {
    let segments = sample_segments();
    let mut sink = JsonFrameSink::new();
    Animation::default()
        .play(&segments, &ViewSetup::default(), &mut sink)
        .unwrap();

    let json = sink.to_json().unwrap();
    let parsed: JsonFrames = serde_json::from_str(&json).unwrap();
    assert_eq!(&parsed, sink.frames());
    assert_eq!(parsed.frame_interval_ms, 200);
    assert_eq!(parsed.frames.len(), 3);
    assert_eq!(parsed.frames[2].frame, 2);
    assert_eq!(parsed.frames[1].segment, segments[1]);
}

#[test]
fn test_bounds_enclosing_and_padding() {
    assert!(Bounds::enclosing(&[]).is_none());

    let bounds = Bounds::enclosing(&sample_segments()).unwrap();
    assert_eq!(bounds.min, Vec2::new(-0.5, 0.0));
    assert_eq!(bounds.max, Vec2::new(0.0, 2.0));
    assert_eq!(bounds.width(), 0.5);
    assert_eq!(bounds.height(), 2.0);
    assert!(bounds.contains(Vec2::new(-0.25, 1.0)));
    assert!(!bounds.contains(Vec2::new(0.1, 1.0)));

    let padded = bounds.padded(1.0);
    assert_eq!(padded.min, Vec2::new(-1.5, -1.0));
    assert!(padded.contains(Vec2::new(0.1, 1.0)));
}

#[test]
fn test_segment_measures() {
    let seg = Segment::new(Vec2::new(0.0, 0.0), Vec2::new(3.0, 4.0));
    assert_eq!(seg.length(), 5.0);
    assert_eq!(seg.midpoint(), Vec2::new(1.5, 2.0));
}

#[test]
fn test_pipeline_renders_default_plant() {
    let config = PlantConfig {
        iterations: 2,
        ..Default::default()
    };
    let growth = pipeline::grow(&config).unwrap();
    assert_eq!(growth.segments.len(), 25);

    let mut sink = JsonFrameSink::new();
    pipeline::render(&config, &growth, &mut sink).unwrap();
    let frames = sink.into_frames();
    assert_eq!(frames.frames.len(), 25);
    assert_eq!(frames.frame_interval_ms, config.frame_interval_ms);
    assert_eq!(frames.view, Some(config.view_setup()));
}

#[test]
fn test_sinks_take_timing_from_animation() {
    let segments = sample_segments();
    let view = ViewSetup::default();
    let animation = Animation::new(Duration::from_millis(50));

    let mut svg = SvgSink::default();
    animation.play(&segments, &view, &mut svg).unwrap();
    let svg = svg.into_string();
    assert!(svg.contains(r#"begin="0.050s""#));
    assert!(svg.contains(r#"begin="0.100s""#));
    assert!(!svg.contains(r#"begin="0.200s""#));

    let mut json = JsonFrameSink::default();
    animation.play(&segments, &view, &mut json).unwrap();
    assert_eq!(json.frames().frame_interval_ms, 50);

    // Replaying the same sink with a slower animation picks up the new timing.
    let mut svg = SvgSink::new();
    Animation::new(Duration::from_millis(50))
        .play(&segments, &view, &mut svg)
        .unwrap();
    Animation::new(Duration::from_millis(300))
        .play(&segments, &view, &mut svg)
        .unwrap();
    assert!(svg.document().unwrap().contains(r#"begin="0.600s""#));
}
