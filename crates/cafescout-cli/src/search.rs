//! `search` command: fetch cafes for a city, annotate each with the distance
//! from the user's position, and mark saved favorites.

use anyhow::Context;
use cafescout_core::{distance_km, AppConfig, Cafe, Coordinate};
use cafescout_favorites::{FavoritesStore, FileStore};
use cafescout_search::{GeoClient, SearchClient, SequencedClient};

pub async fn run(config: &AppConfig, city: &str, toggle_ids: &[i64]) -> anyhow::Result<()> {
    let client = SearchClient::new(&config.search_url, config.request_timeout_secs)?;
    let client = SequencedClient::new(client);

    let user_location = locate_user(config).await;

    let Some(results) = client
        .search_latest(city)
        .await
        .with_context(|| format!("search for '{city}' failed"))?
    else {
        // Superseded by a newer search in this session; nothing to print.
        return Ok(());
    };

    let mut favorites = FavoritesStore::open(FileStore::open(&config.data_dir)?);

    for id in toggle_ids {
        match results.cafes.iter().find(|c| c.id == *id) {
            Some(cafe) => {
                favorites.toggle(cafe.clone())?;
            }
            None => tracing::warn!(id, "no search result with this id, not toggled"),
        }
    }

    let center = results.center();
    println!(
        "{} cafes in {city} (center {:.4}, {:.4})",
        results.cafes.len(),
        center.lat,
        center.lon
    );
    for cafe in &results.cafes {
        println!(
            "{}",
            render_line(cafe, favorites.contains(cafe.id), user_location)
        );
    }

    Ok(())
}

/// Best-effort geolocation. Denial or transport failure degrades to `None`
/// and the listing simply omits distance annotations.
async fn locate_user(config: &AppConfig) -> Option<Coordinate> {
    let client = match GeoClient::new(&config.geolocate_url, config.request_timeout_secs) {
        Ok(client) => client,
        Err(e) => {
            tracing::warn!(error = %e, "geolocation unavailable");
            return None;
        }
    };
    match client.locate().await {
        Ok(position) => Some(position),
        Err(e) => {
            tracing::warn!(error = %e, "geolocation failed, distances omitted");
            None
        }
    }
}

fn render_line(cafe: &Cafe, is_favorite: bool, user_location: Option<Coordinate>) -> String {
    let marker = if is_favorite { "*" } else { " " };
    let mut line = format!(
        "{marker} [{}] {} ({:.3}, {:.3})",
        cafe.id, cafe.name, cafe.location.lat, cafe.location.lon
    );
    if let Some(here) = user_location {
        let km = distance_km(here, cafe.location);
        line.push_str(&format!(" - {km:.2} km from you"));
    }
    line
}
