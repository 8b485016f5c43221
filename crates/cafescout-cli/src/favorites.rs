//! `favorites` subcommands: list saved cafes and toggle one directly.

use cafescout_core::{distance_km, AppConfig, Cafe, Coordinate};
use cafescout_favorites::{FavoritesStore, FileStore};
use clap::Subcommand;

#[derive(Debug, Subcommand)]
pub enum FavoritesCommand {
    /// List saved favorites in insertion order
    List,
    /// Save a cafe, or remove it if already saved
    Toggle {
        /// Stable cafe id from the search service
        #[arg(long)]
        id: i64,
        #[arg(long)]
        name: String,
        #[arg(long)]
        lat: f64,
        #[arg(long)]
        lon: f64,
    },
}

pub fn run(config: &AppConfig, command: FavoritesCommand) -> anyhow::Result<()> {
    let mut favorites = FavoritesStore::open(FileStore::open(&config.data_dir)?);

    match command {
        FavoritesCommand::List => {
            if favorites.is_empty() {
                println!("no favorites saved");
                return Ok(());
            }
            for cafe in favorites.list() {
                println!("{}", render_line(cafe, config.default_center));
            }
        }
        FavoritesCommand::Toggle { id, name, lat, lon } => {
            let was_saved = favorites.contains(id);
            favorites.toggle(Cafe {
                id,
                name,
                location: Coordinate { lat, lon },
            })?;
            if was_saved {
                println!("removed favorite {id}");
            } else {
                println!("saved favorite {id}");
            }
        }
    }

    Ok(())
}

fn render_line(cafe: &Cafe, center: Coordinate) -> String {
    format!(
        "[{}] {} ({:.3}, {:.3}) - {:.2} km from center",
        cafe.id,
        cafe.name,
        cafe.location.lat,
        cafe.location.lon,
        distance_km(center, cafe.location)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_line_includes_distance_from_center() {
        let cafe = Cafe {
            id: 9,
            name: "Roast".to_string(),
            location: Coordinate {
                lat: 51.5074,
                lon: -0.1278,
            },
        };
        let paris = Coordinate {
            lat: 48.8566,
            lon: 2.3522,
        };
        let line = render_line(&cafe, paris);
        assert!(line.starts_with("[9] Roast"));
        assert!(line.contains("343.") && line.ends_with("km from center"), "got: {line}");
    }
}
