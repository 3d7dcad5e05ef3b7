use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use controller::{ControllerConfig, ViewportPointsController};
use foundation::{LatLng, LatLngBounds, Viewport};
use layers::{legend, HeatmapLayer, MarkerLayer};
use points::{HttpPointsSource, ServiceConfig, BASE_URL_ENV};
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod driver;

/// Drives the points controller over a scripted pan session against the
/// live service and logs what a map surface would render.
#[derive(Debug, Parser)]
#[command(name = "viewer")]
struct Args {
    /// Initial center latitude.
    #[arg(long, default_value_t = 12.9716)]
    lat: f64,
    /// Initial center longitude.
    #[arg(long, default_value_t = 77.5946)]
    lng: f64,
    /// Zoom level for the whole session.
    #[arg(long, default_value_t = 12)]
    zoom: u8,
    /// Half-extent of the viewport in degrees.
    #[arg(long, default_value_t = 0.02)]
    span: f64,
    /// Eastward pan steps after the initial view.
    #[arg(long, default_value_t = 3)]
    steps: u32,
    /// Degrees panned per step.
    #[arg(long, default_value_t = 0.01)]
    pan: f64,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = ServiceConfig::from_env();
    if config.base_url.is_none() {
        warn!("{BASE_URL_ENV} is not set; fetches will fail with a configuration error");
    }

    let mut ctl = ViewportPointsController::new(ControllerConfig::default());
    let source: Arc<dyn points::PointsSource> = Arc::new(HttpPointsSource::new(config));
    let heatmap = HeatmapLayer::new(1);
    let markers = MarkerLayer::new(2).with_min_zoom(ctl.config().min_zoom_for_markers);

    for entry in legend() {
        info!(tier = entry.tier.tier(), label = entry.label, "legend entry");
    }

    let (tx, rx) = mpsc::channel(8);
    let session = tokio::spawn(async move {
        let mut center = LatLng::new(args.lat, args.lng);
        for step in 0..=args.steps {
            if step > 0 {
                center.lng += args.pan;
                tokio::time::sleep(Duration::from_millis(800)).await;
            }
            let viewport = Viewport::new(LatLngBounds::around(center, args.span), args.zoom);
            if tx.send(viewport).await.is_err() {
                break;
            }
        }
    });

    driver::drive(&mut ctl, source, rx, |c| {
        if let Some(err) = c.error() {
            warn!("points fetch failed: {err}");
        } else if c.loading() {
            info!(retained = c.points().len(), "fetching points for viewport");
        } else {
            let zoom = c.viewport().map(|v| v.zoom).unwrap_or(0);
            let samples = heatmap.extract(c.points());
            let pins = markers.extract(zoom, c.points());
            info!(
                points = c.points().len(),
                heatmap_samples = samples.len(),
                markers = pins.len(),
                zoom,
                "viewport reconciled"
            );
        }
    })
    .await;

    let _ = session.await;
}
