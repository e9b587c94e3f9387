use quakemap::{
    app::{App, AppConfig},
    layers::base::{LayerTrait, LayerType},
};

/// Headless earthquake map viewer: builds the scene, fetches the
/// all-week USGS feed, and reports what the mounted map contains.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = AppConfig::default();
    println!("🗺️ quakemap viewer");
    println!("Feed: {}", config.feed_url);

    let mut app = App::new(config)?;

    println!("\nBase layers:");
    app.map().for_each_layer(|layer| {
        if layer.layer_type() == LayerType::Tile {
            let marker = if layer.is_visible() { "●" } else { "○" };
            println!("   {} {}", marker, layer.name());
        }
    });

    let report = match app.mount().await {
        Ok(report) => report,
        Err(e) => {
            log::error!("mount failed: {}", e);
            anyhow::bail!("could not fetch the earthquake feed: {}", e);
        }
    };

    println!("\n📍 Rendered {} earthquake markers", report.markers_added);
    println!(
        "   Center: {:.4}, {:.4} at zoom {}",
        app.map().center().lat,
        app.map().center().lng,
        app.map().zoom()
    );

    println!("\nDepth legend ({:?}):", app.legend().position());
    for entry in app.legend().entries() {
        println!("   {} {}", entry.color, entry.label());
    }

    Ok(())
}
