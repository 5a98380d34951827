//! Remote logo fetching.
//!
//! Logos are optional decoration, so every failure here is degraded-mode:
//! fetch problems are logged as warnings and the cover renders without the
//! asset.

use std::time::Duration;

use image::DynamicImage;
use log::warn;
use reqwest::blocking::Client;

use crate::{Error, Result};

/// Fixed connect/read timeout for logo downloads.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(12);

/// GET `url` and decode the payload as an image.
pub fn fetch_image(client: &Client, url: &str) -> Result<DynamicImage> {
    let response = client
        .get(url)
        .send()
        .map_err(|e| Error::Network(format!("HTTP GET failed: {e}")))?;
    if !response.status().is_success() {
        return Err(Error::Network(format!(
            "HTTP {} fetching {url}",
            response.status()
        )));
    }
    let bytes = response
        .bytes()
        .map_err(|e| Error::Network(format!("Failed to read response body: {e}")))?;
    image::load_from_memory(&bytes).map_err(|e| Error::Decode(e.to_string()))
}

/// Fetch every logo URL, skipping (with a warning) any that fail.
pub fn fetch_logos(urls: &[String]) -> Vec<DynamicImage> {
    if urls.is_empty() {
        return Vec::new();
    }
    let client = match Client::builder().timeout(FETCH_TIMEOUT).build() {
        Ok(client) => client,
        Err(err) => {
            warn!("Failed to build HTTP client, skipping logo fetch: {err}");
            return Vec::new();
        }
    };
    let mut logos = Vec::new();
    for url in urls {
        match fetch_image(&client, url) {
            Ok(image) => logos.push(image),
            Err(err) => warn!("Failed to fetch logo from '{url}': {err}"),
        }
    }
    logos
}
