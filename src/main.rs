//! Line-oriented development harness for the estimate pipeline.
//!
//! Drives a live store + placeholder estimator from stdin so the debounce,
//! derivation and export wiring can be exercised without a front-end.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use mokumitsu::config::AppConfig;
use mokumitsu::estimate::{EstimatePipeline, PlaceholderEstimator};
use mokumitsu::export::{
    Capture, CaptureFuture, CaptureTarget, ExportError, Exporter, Orientation, PagePlacement,
    PdfSink, Raster,
};
use mokumitsu::render::{
    AmountLine, HideOnExport, InputSummary, Renderer, ShowOnExport, Stack, Text, View,
};
use mokumitsu::store::{ProjectStore, FIRE_PREVENTION_CATEGORIES};

#[derive(Parser)]
#[command(name = "mokumitsu", about = "Estimate pipeline development harness")]
struct Cli {
    /// Path to a TOML config file (default: per-user config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the debounce quiet period in milliseconds.
    #[arg(long)]
    debounce_ms: Option<u64>,
}

/// Initialize tracing to stderr.
///
/// The filter comes from the `MOKUMITSU_LOG` env var (e.g. `debug`,
/// `mokumitsu=trace`), defaulting to `info`.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("MOKUMITSU_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .init();
}

/// Capture collaborator that rasterizes the renderer's text frame.
///
/// Stands in for a real DOM screenshot: one "pixel row" per text line,
/// so long summaries exercise the multi-page path.
struct FrameCapture {
    renderer: Arc<Renderer>,
}

impl Capture for FrameCapture {
    fn capture(&self, _target: &CaptureTarget, scale: u32) -> CaptureFuture {
        let frame = self.renderer.frame();
        Box::pin(async move {
            let height = frame.lines().count() as u32 * 40 * scale;
            Ok(Raster {
                width_px: 800 * scale,
                height_px: height,
                data: frame.into_bytes(),
            })
        })
    }
}

/// Sink that just reports what a real PDF assembler would have written.
struct StdoutSink;

impl PdfSink for StdoutSink {
    fn write(
        &self,
        raster: &Raster,
        pages: &[PagePlacement],
        orientation: Orientation,
    ) -> Result<(), ExportError> {
        println!(
            "export: {} page(s), {:?}, capture {}x{}px",
            pages.len(),
            orientation,
            raster.width_px,
            raster.height_px
        );
        Ok(())
    }
}

fn summary_view() -> impl View {
    Stack(vec![
        Box::new(ShowOnExport(Text::new("木造建築 概算見積書"))),
        Box::new(InputSummary),
        Box::new(AmountLine),
        Box::new(HideOnExport(Text::new("[area|floors|span|depth <値>] [show] [export] [reset] [quit]"))),
    ])
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => AppConfig::load().context("loading config")?,
    };
    let debounce = cli
        .debounce_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| config.debounce());

    let store = ProjectStore::new();
    let estimator = Arc::new(PlaceholderEstimator::new(config.estimate.simulate_delay()));
    let pipeline = EstimatePipeline::start(store.clone(), estimator, debounce);
    let renderer = Arc::new(Renderer::attach(&store, summary_view()));

    let exporter = Exporter::new(
        Arc::new(FrameCapture {
            renderer: Arc::clone(&renderer),
        }),
        Arc::new(StdoutSink),
        &config.export,
    );
    let export_target = CaptureTarget::new("estimate-summary");

    println!("{}", renderer.frame());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            continue;
        };
        let rest = parts.collect::<Vec<_>>().join(" ");

        match command {
            "area" => {
                if !FIRE_PREVENTION_CATEGORIES.contains(&rest.as_str()) {
                    eprintln!("unknown category (expected one of {:?})", FIRE_PREVENTION_CATEGORIES);
                }
                store.set_fire_prevention_area(rest);
            }
            "floors" => match rest.parse() {
                Ok(floors) => store.set_floors(floors),
                Err(_) => eprintln!("floors expects an integer"),
            },
            "span" => match rest.parse() {
                Ok(span) => store.set_span(span),
                Err(_) => eprintln!("span expects meters"),
            },
            "depth" => match rest.parse() {
                Ok(depth) => store.set_depth(depth),
                Err(_) => eprintln!("depth expects meters"),
            },
            "show" => println!("{}", renderer.frame()),
            "reset" => store.reset(),
            "export" => {
                if let Err(e) = exporter.export(&store, &export_target).await {
                    eprintln!("export failed: {}", e);
                }
            }
            "quit" | "exit" => break,
            _ => eprintln!("unknown command: {}", command),
        }
    }

    pipeline.stop();
    renderer.detach();
    Ok(())
}
