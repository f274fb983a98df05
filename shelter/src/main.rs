//! Animal Shelter Server Entry Point

use animal_shelter::{config, logging, registry::ShelterRegistry, server, AppState};
use animal_shelter_common::types::Species;
use tracing::{debug, error, info};

#[tokio::main]
async fn main() {
    let _log_guard = logging::init().expect("failed to initialize logging");

    info!("Animal Shelter v{}", env!("CARGO_PKG_VERSION"));

    let config = config::server_config_from_env();
    if let Err(e) = config.validate() {
        error!("{}", e);
        std::process::exit(1);
    }

    // シェルターを初期データで作成
    let registry = ShelterRegistry::with_seed();
    for species in Species::ALL {
        let animals = registry.list(species).await;
        info!("Seeded {} shelter with {} animals", species, animals.len());
        for animal in &animals {
            debug!(species = %species, name = %animal.name, breed = %animal.breed, "Seed animal");
        }
    }

    let state = AppState { registry, config };

    if let Err(e) = server::run(state).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}
