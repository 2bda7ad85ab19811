//! Grow a plant and write its animated rendering.
use clap::{Parser, ValueEnum};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use symbios_plant::{Bounds, JsonFrameSink, PlantConfig, PlantError, SvgSink, pipeline};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Svg,
    Json,
}

#[derive(Parser)]
#[command(name = "symbios-plant")]
#[command(about = "Grow an L-System plant and render it frame by frame")]
struct Args {
    /// JSON config file; missing fields take the built-in defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the number of rewrite iterations
    #[arg(long)]
    iterations: Option<usize>,

    /// Override the turn angle, in degrees
    #[arg(long)]
    angle_deg: Option<f32>,

    /// Override light intensity (0..1)
    #[arg(long)]
    light: Option<f32>,

    /// Override water availability (0..1)
    #[arg(long)]
    water: Option<f32>,

    /// Output format
    #[arg(long, value_enum, default_value = "svg")]
    format: Format,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Fit the view to the plant instead of the configured ranges
    #[arg(long)]
    fit: bool,

    /// Print the expanded sentence to stderr
    #[arg(long)]
    print_sentence: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(Args::parse()) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), PlantError> {
    let mut config = match &args.config {
        Some(path) => PlantConfig::load(path)?,
        None => PlantConfig::default(),
    };
    if let Some(n) = args.iterations {
        config.iterations = n;
    }
    if let Some(deg) = args.angle_deg {
        config.angle = deg.to_radians();
    }
    if let Some(light) = args.light {
        config.environment.light_intensity = light;
    }
    if let Some(water) = args.water {
        config.environment.water_availability = water;
    }
    config.validate()?;

    let growth = pipeline::grow(&config)?;
    if args.print_sentence {
        eprintln!("{}", growth.sentence);
    }

    let mut view = config.view_setup();
    if args.fit
        && let Some(bounds) = Bounds::enclosing(&growth.segments)
    {
        let margin = bounds.width().max(bounds.height()) * 0.05;
        view.bounds = bounds.padded(margin.max(f32::EPSILON));
    }

    let rendered = match args.format {
        Format::Svg => {
            let mut sink = SvgSink::new();
            pipeline::render_with_view(&config, &view, &growth, &mut sink)?;
            sink.into_string()
        }
        Format::Json => {
            let mut sink = JsonFrameSink::new();
            pipeline::render_with_view(&config, &view, &growth, &mut sink)?;
            sink.to_json()?
        }
    };

    match &args.output {
        Some(path) => {
            fs::write(path, rendered)?;
            tracing::info!(path = %path.display(), "wrote output");
        }
        None => io::stdout().write_all(rendered.as_bytes())?,
    }
    Ok(())
}
