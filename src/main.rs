use anyhow::Result;
use clap::Parser;

mod client;
mod config;
mod features;
mod models;
mod selection;

#[cfg(test)]
mod selection_tests;

use crate::client::CatalogClient;
use crate::config::load_config;
use crate::features::{Aggregator, Axis, FeatureExtractor};
use crate::models::Track;
use crate::selection::{ExpandError, MAX_CHILDREN, SelectedSongs, SelectionTree};

/// Default playlist for the distribution views (the catalog's top-hits list)
const DEFAULT_PLAYLIST_ID: &str = "37i9dQZF1DXcBWIGoYBM5M";

#[derive(Parser)]
#[command(name = "track-explorer")]
#[command(about = "Explore audio features, playlist statistics and similar-track trees")]
#[command(version)]
struct Args {
    /// Search text for the seed track of the selection tree
    #[arg(short = 'q', long = "query")]
    query: String,

    /// Playlist id for the distribution and heat-map summaries
    #[arg(short = 'p', long = "playlist", default_value = DEFAULT_PLAYLIST_ID)]
    playlist: String,

    /// How many levels of the recommendation tree to expand
    #[arg(long = "depth", default_value_t = 2)]
    depth: usize,

    /// How many playlist tracks to fetch for the statistics
    #[arg(short = 'l', long = "limit", default_value_t = 100)]
    limit: u32,

    /// Print every normalized heat-map row instead of just the summary
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration from .env
    let config = load_config()?;

    // Initialize API client
    let client = CatalogClient::new(config);

    // Find the seed track
    println!("Searching for '{}'...", args.query);
    let results = client.search_tracks(&args.query, 5)?;
    let seed = results
        .first()
        .ok_or_else(|| anyhow::anyhow!("No tracks found for query '{}'", args.query))?;

    let seed_features = client.get_audio_features(&[seed.id.clone()])?;
    let root_track =
        FeatureExtractor::build_track(seed, seed_features.first().and_then(Option::as_ref));

    println!(
        "Seed track: \"{}\" by {} ({}:{:02})",
        root_track.name,
        root_track.artist_line(),
        root_track.duration_ms / 60_000,
        root_track.duration_ms % 60_000 / 1_000
    );

    print_feature_vector(&root_track);

    // Grow the similar-track tree from the seed, respecting the song limit
    println!("\nExpanding similar-track tree to depth {}...", args.depth);
    let mut selected = SelectedSongs::new();
    let mut tree = SelectionTree::new(root_track.clone());

    let mut frontier = vec![root_track.id.clone()];
    'levels: for level in 0..args.depth {
        let mut next_frontier = Vec::new();

        for node_id in &frontier {
            match tree.request_expansion(&mut selected, node_id) {
                Ok(()) => {}
                Err(ExpandError::SelectionFull) => {
                    println!("Song limit reached, stopping expansion.");
                    break 'levels;
                }
                Err(e) => {
                    eprintln!("Skipping node {node_id}: {e}");
                    continue;
                }
            }

            let candidates = match client.get_recommendations(node_id) {
                Ok(candidates) => candidates,
                Err(e) => {
                    eprintln!("Recommendation fetch failed for {node_id}: {e}");
                    tree.cancel_expansion(node_id)?;
                    continue;
                }
            };

            let picked: Vec<_> = candidates.into_iter().take(MAX_CHILDREN).collect();
            let picked_ids: Vec<String> = picked.iter().map(|t| t.id.clone()).collect();
            let picked_features = client.get_audio_features(&picked_ids)?;
            let children = FeatureExtractor::build_tracks(&picked, &picked_features);

            let attached = tree.populate_children(node_id, children, MAX_CHILDREN)?;
            println!("  Level {}: {} -> {} similar tracks", level + 1, node_id, attached);

            if let Some(node) = tree.node(node_id) {
                next_frontier.extend(node.children.iter().map(|c| c.track.id.clone()));
            }
        }

        if next_frontier.is_empty() {
            break;
        }
        frontier = next_frontier;
    }

    println!("\n=== SELECTION TREE ===");
    for (node, parent) in tree.layout_pairs() {
        match parent {
            None => println!(
                "{} by {} (seed)",
                node.track.name,
                node.track.primary_artist()
            ),
            Some(parent) => println!(
                "{} -> {} by {}",
                parent.track.name,
                node.track.name,
                node.track.primary_artist()
            ),
        }
    }

    println!("\n=== SELECTED SONGS ({}/10) ===", selected.len());
    for track in selected.iter() {
        println!("- \"{}\" by {}", track.name, track.artist_line());
    }

    // Playlist-wide statistics with batch-observed normalization
    println!("\nFetching playlist for distribution statistics...");
    let playlist = client.get_playlist(&args.playlist)?;
    let playlist_tracks = client.get_playlist_tracks(&args.playlist, args.limit)?;
    let track_ids: Vec<String> = playlist_tracks.iter().map(|t| t.id.clone()).collect();
    let audio_features = client.get_audio_features(&track_ids)?;

    let rows = FeatureExtractor::build_tracks_batch_scaled(&playlist_tracks, &audio_features);

    println!(
        "\n=== PLAYLIST \"{}\" ({} tracks) ===",
        playlist.name,
        rows.len()
    );

    if args.debug {
        for row in &rows {
            print!("{:<30.30}", row.name);
            if let Some(vector) = &row.features {
                for av in vector.iter() {
                    print!(" {:>5.2}", av.value);
                }
            } else {
                print!(" (no audio features)");
            }
            println!();
        }
        println!();
    }

    for axis in Axis::ALL {
        match Aggregator::aggregate_tracks(axis, &rows) {
            Some(stats) => println!(
                "{:<18} q1 {:>5.2} | median {:>5.2} | q3 {:>5.2} | whiskers [{:.2}, {:.2}]",
                axis.name(),
                stats.q1,
                stats.median,
                stats.q3,
                stats.iqr_low,
                stats.iqr_high
            ),
            None => println!("{:<18} (no data, skipped)", axis.name()),
        }
    }

    Ok(())
}

/// Print one track's normalized 0-10 feature vector, rounded for display only
fn print_feature_vector(track: &Track) {
    match &track.features {
        Some(vector) => {
            for av in vector.iter() {
                println!("  {:<18} {:>5.2}", av.axis.name(), av.value);
            }
        }
        None => println!("  (no audio features available for this track)"),
    }
}
