use distant_countries::catalogue::StaticCatalogue;
use distant_countries::config::SelectorConfig;
use distant_countries::ledger::MemoryVisitLedger;
use distant_countries::models::{Coordinates, Location};
use distant_countries::AppState;
use std::sync::Arc;

/// Create a test location
#[allow(dead_code)]
pub fn location(name: &str, lat: f64, lng: f64) -> Location {
    Location::new(name, Coordinates::new(lat, lng).unwrap())
}

/// Roughly one country per region, using REST Countries' representative points.
#[allow(dead_code)]
pub fn world_catalogue() -> Vec<Location> {
    [
        ("France", 46.0, 2.0),
        ("Germany", 51.0, 9.0),
        ("Belgium", 50.83, 4.0),
        ("Spain", 40.0, -4.0),
        ("Italy", 42.83, 12.83),
        ("United Kingdom", 54.0, -2.0),
        ("Iceland", 65.0, -18.0),
        ("Norway", 62.0, 10.0),
        ("Poland", 52.0, 20.0),
        ("Greece", 39.0, 22.0),
        ("Turkey", 39.0, 35.0),
        ("Egypt", 27.0, 30.0),
        ("Morocco", 32.0, -5.0),
        ("Nigeria", 10.0, 8.0),
        ("Kenya", 1.0, 38.0),
        ("South Africa", -29.0, 24.0),
        ("Madagascar", -20.0, 47.0),
        ("Saudi Arabia", 25.0, 45.0),
        ("India", 20.0, 77.0),
        ("China", 35.0, 105.0),
        ("Mongolia", 46.0, 105.0),
        ("Japan", 36.0, 138.0),
        ("Indonesia", -5.0, 120.0),
        ("Australia", -27.0, 133.0),
        ("New Zealand", -41.0, 174.0),
        ("Fiji", -18.0, 175.0),
        ("Russia", 60.0, 100.0),
        ("Canada", 60.0, -95.0),
        ("United States", 38.0, -97.0),
        ("Mexico", 23.0, -102.0),
        ("Cuba", 21.5, -80.0),
        ("Colombia", 4.0, -72.0),
        ("Brazil", -10.0, -55.0),
        ("Peru", -10.0, -76.0),
        ("Argentina", -34.0, -64.0),
        ("Chile", -30.0, -71.0),
        ("Greenland", 72.0, -40.0),
    ]
    .into_iter()
    .map(|(name, lat, lng)| location(name, lat, lng))
    .collect()
}

/// Five places within ~50 km of each other (Luxembourg and surroundings).
#[allow(dead_code)]
pub fn clustered_catalogue() -> Vec<Location> {
    vec![
        location("Luxembourg City", 49.61, 6.13),
        location("Esch-sur-Alzette", 49.50, 5.98),
        location("Differdange", 49.52, 5.89),
        location("Ettelbruck", 49.85, 6.10),
        location("Remich", 49.55, 6.37),
    ]
}

/// App state over a static catalogue and an empty in-memory ledger
#[allow(dead_code)]
pub fn test_state(locations: Vec<Location>) -> (Arc<AppState>, Arc<MemoryVisitLedger>) {
    let ledger = Arc::new(MemoryVisitLedger::new());
    let state = Arc::new(AppState::new(
        Arc::new(StaticCatalogue::new(locations)),
        ledger.clone(),
        SelectorConfig::default(),
    ));
    (state, ledger)
}
