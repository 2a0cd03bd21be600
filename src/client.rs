use crate::config::Config;
use crate::models::{
    AudioFeatures, AudioFeaturesResponse, PlaylistResponse, PlaylistTracksResponse,
    RecommendationsResponse, SearchResponse, TrackObject,
};
use anyhow::Result;
use ureq::Agent;
use urlencoding::encode;

/// A catalog API client using bearer-token authentication
pub struct CatalogClient {
    agent: Agent,
    base_url: String,
    access_token: String,
}

impl CatalogClient {
    /// Create a new client with configuration from environment
    pub fn new(config: Config) -> Self {
        let agent = Agent::new();

        CatalogClient {
            agent,
            base_url: config.base_url,
            access_token: config.access_token,
        }
    }

    /// Perform an authenticated GET and return the response body
    fn get(&self, path_and_query: &str) -> Result<String> {
        let url = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path_and_query
        );

        let response = self
            .agent
            .get(&url)
            .set("Authorization", &format!("Bearer {}", self.access_token))
            .call()
            .map_err(|e| anyhow::anyhow!("HTTP request failed ({}): {}", path_and_query, e))?;

        Ok(response.into_string()?)
    }

    /// Search the catalog for tracks matching a query
    pub fn search_tracks(&self, query: &str, limit: u32) -> Result<Vec<TrackObject>> {
        let body = self.get(&format!(
            "search?q={}&type=track&limit={}",
            encode(query),
            limit
        ))?;

        let parsed: SearchResponse = serde_json::from_str(&body)
            .map_err(|e| anyhow::anyhow!("Failed to parse search response: {}", e))?;

        Ok(parsed.tracks.items)
    }

    /// Fetch raw audio features for a batch of track ids.
    /// The response is order-preserving and 1:1 with the ids; entries the
    /// catalog has no analysis for are `None`.
    pub fn get_audio_features(&self, track_ids: &[String]) -> Result<Vec<Option<AudioFeatures>>> {
        if track_ids.is_empty() {
            return Ok(vec![]);
        }

        let ids = track_ids.join(",");
        let body = self.get(&format!("audio-features?ids={}", encode(&ids)))?;

        let parsed: AudioFeaturesResponse = serde_json::from_str(&body)
            .map_err(|e| anyhow::anyhow!("Failed to parse audio features response: {}", e))?;

        if parsed.audio_features.len() != track_ids.len() {
            return Err(anyhow::anyhow!(
                "Audio features count mismatch: requested {}, got {}",
                track_ids.len(),
                parsed.audio_features.len()
            ));
        }

        Ok(parsed.audio_features)
    }

    /// Fetch similar-track candidates seeded on one track
    pub fn get_recommendations(&self, seed_track_id: &str) -> Result<Vec<TrackObject>> {
        let body = self.get(&format!(
            "recommendations?seed_tracks={}",
            encode(seed_track_id)
        ))?;

        let parsed: RecommendationsResponse = serde_json::from_str(&body)
            .map_err(|e| anyhow::anyhow!("Failed to parse recommendations response: {}", e))?;

        Ok(parsed.tracks)
    }

    /// Fetch a playlist's display metadata
    pub fn get_playlist(&self, playlist_id: &str) -> Result<PlaylistResponse> {
        let body = self.get(&format!(
            "playlists/{}?fields=name,description,images(url)",
            encode(playlist_id)
        ))?;

        let parsed: PlaylistResponse = serde_json::from_str(&body)
            .map_err(|e| anyhow::anyhow!("Failed to parse playlist response: {}", e))?;

        Ok(parsed)
    }

    /// Fetch a playlist's tracks, skipping entries the catalog can no longer
    /// resolve
    pub fn get_playlist_tracks(&self, playlist_id: &str, limit: u32) -> Result<Vec<TrackObject>> {
        let body = self.get(&format!(
            "playlists/{}/tracks?limit={}&offset=0",
            encode(playlist_id),
            limit
        ))?;

        let parsed: PlaylistTracksResponse = serde_json::from_str(&body)
            .map_err(|e| anyhow::anyhow!("Failed to parse playlist tracks response: {}", e))?;

        Ok(parsed
            .items
            .into_iter()
            .filter_map(|item| item.track)
            .collect())
    }
}
