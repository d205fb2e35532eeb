use std::env;
use std::f64::consts::TAU;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use anatomy::RegionCatalog;
use foundation::math::{Vec2, Vec3};
use scene::{Camera, fit_camera_distance};

mod app;
mod demo_model;

use app::{MODEL_MAX_SIZE, ViewerApp};
use demo_model::demo_model;

/// Headless demo run: load (or fall back to) a region catalog, install the
/// procedural demo model, apply the selection given on the command line, and
/// sweep the camera around the model logging what each frame would display.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let catalog = match env::var("REGION_CATALOG") {
        Ok(path) => match formats::load_catalog_from_path(&path) {
            Ok(catalog) => {
                info!(%path, "loaded region catalog");
                catalog
            }
            Err(err) => {
                warn!(%path, %err, "catalog load failed, using built-in table");
                RegionCatalog::builtin()
            }
        },
        Err(_) => RegionCatalog::builtin(),
    };

    let mut viewer = ViewerApp::new(catalog);
    viewer.load_model(demo_model());

    let selection = env::args().nth(1);
    viewer.select_region(selection.as_deref());
    info!(
        selection = selection.as_deref().unwrap_or(""),
        "description: {}",
        viewer.description()
    );
    for part in &viewer.model().parts {
        if part.material().is_tinted() {
            info!(part = %part.name, "highlighted");
        }
    }

    let viewport = Vec2::new(1280.0, 720.0);
    let distance = fit_camera_distance(MODEL_MAX_SIZE);
    let steps = 12;

    // One orbit at the equator, one from below.
    for elevation in [0.0, -3.0] {
        for step in 0..steps {
            let azimuth = step as f64 / steps as f64 * TAU;
            let camera = Camera::orbit(
                Vec3::new(distance * azimuth.sin(), elevation, distance * azimuth.cos()),
                viewport,
            );
            viewer.tick(&camera);

            let shown: Vec<String> = viewer
                .labels()
                .iter()
                .filter(|l| l.visible)
                .map(|l| {
                    format!(
                        "{}@({:.0},{:.0})",
                        l.region,
                        l.screen_px.x.round(),
                        l.screen_px.y.round()
                    )
                })
                .collect();
            info!(elevation, step, labels = %shown.join(" "), "frame");
        }
    }
}
