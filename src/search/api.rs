use rand::seq::IndexedRandom;
use reqwest::{
    Client,
    StatusCode,
};
use serde::Deserialize;

use super::CredentialPool;
use crate::core::{
    FlashdeckError,
    ImageData,
};

const SEARCH_ENDPOINT: &str = "https://www.googleapis.com/customsearch/v1";

// Fixed custom-search collection id; image results only.
const SEARCH_CONTEXT: &str = "f2b3e538648504c9f";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    items: Option<Vec<SearchItem>>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    link: String,
}

/// Outcome of one request against one credential.
#[derive(Debug, PartialEq, Eq)]
enum Attempt {
    Found(String),
    NoResults,
    QuotaExceeded,
    Failed(String),
}

fn classify_response(status: StatusCode, body: &str) -> Attempt {
    if status == StatusCode::TOO_MANY_REQUESTS {
        return Attempt::QuotaExceeded;
    }

    if !status.is_success() {
        return Attempt::Failed(format!("HTTP {}", status));
    }

    match serde_json::from_str::<SearchResponse>(body) {
        Ok(response) => match response.items {
            Some(items) if !items.is_empty() => {
                let picked = items
                    .choose(&mut rand::rng())
                    .map(|item| item.link.clone())
                    .unwrap_or_default();
                Attempt::Found(picked)
            }
            _ => Attempt::NoResults,
        },
        Err(e) => Attempt::Failed(format!("malformed response body: {}", e)),
    }
}

/// Runs one image search, rotating through the credential pool in order.
///
/// A 200 response with at least one item resolves immediately with one item's
/// link chosen uniformly at random. Quota rejections (429) advance to the
/// next key silently; any other failure is logged and also advances. `None`
/// means every credential was exhausted without a result.
pub async fn search_image(client: &Client, pool: &CredentialPool, query: &str) -> Option<String> {
    for key in pool.keys() {
        let response = client
            .get(SEARCH_ENDPOINT)
            .query(&[
                ("key", key.as_str()),
                ("cx", SEARCH_CONTEXT),
                ("q", query),
                ("searchType", "image"),
            ])
            .send()
            .await;

        let response = match response {
            Ok(response) => response,
            Err(e) => {
                eprintln!("Error fetching image for '{}': {}", query, e);
                continue;
            }
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                eprintln!("Error reading image search response for '{}': {}", query, e);
                continue;
            }
        };

        match classify_response(status, &body) {
            Attempt::Found(link) => return Some(link),
            Attempt::NoResults | Attempt::QuotaExceeded => continue,
            Attempt::Failed(reason) => {
                eprintln!("Error fetching image for '{}': {}", query, reason);
                continue;
            }
        }
    }

    None
}

/// Downloads and decodes an image so the GUI can upload it as a texture.
pub async fn fetch_image_data(client: &Client, url: &str) -> Result<ImageData, FlashdeckError> {
    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        return Err(FlashdeckError::Custom(format!(
            "HTTP {} fetching image {}",
            response.status(),
            url
        )));
    }

    let bytes = response.bytes().await?;
    let rgba = image::load_from_memory(&bytes)?.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(ImageData { width, height, rgba: rgba.into_vec() })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok() -> StatusCode {
        StatusCode::OK
    }

    #[test]
    fn quota_rejection_rotates_without_erroring() {
        // A full pool of 429s must classify every attempt as quota, which the
        // search loop turns into NotFound rather than a panic or error.
        for _ in 0..3 {
            let attempt = classify_response(StatusCode::TOO_MANY_REQUESTS, "");
            assert_eq!(attempt, Attempt::QuotaExceeded);
        }
    }

    #[test]
    fn single_item_is_picked_every_time() {
        let body = r#"{ "items": [ { "link": "https://img.example/cat.png" } ] }"#;

        let first = classify_response(ok(), body);
        let second = classify_response(ok(), body);
        assert_eq!(first, Attempt::Found("https://img.example/cat.png".to_string()));
        assert_eq!(first, second);
    }

    #[test]
    fn picked_link_comes_from_the_result_list() {
        let body = r#"{ "items": [
            { "link": "https://img.example/1.png" },
            { "link": "https://img.example/2.png" },
            { "link": "https://img.example/3.png" }
        ] }"#;

        for _ in 0..20 {
            match classify_response(ok(), body) {
                Attempt::Found(link) => {
                    assert!(link.starts_with("https://img.example/"));
                }
                other => panic!("expected a result, got {:?}", other),
            }
        }
    }

    #[test]
    fn empty_or_missing_items_means_no_results() {
        assert_eq!(classify_response(ok(), r#"{ "items": [] }"#), Attempt::NoResults);
        assert_eq!(classify_response(ok(), r#"{}"#), Attempt::NoResults);
    }

    #[test]
    fn server_errors_and_bad_bodies_are_failures() {
        assert!(matches!(
            classify_response(StatusCode::INTERNAL_SERVER_ERROR, ""),
            Attempt::Failed(_)
        ));
        assert!(matches!(classify_response(ok(), "not json"), Attempt::Failed(_)));
    }

    #[test]
    fn extra_response_fields_are_ignored() {
        let body = r#"{
            "kind": "customsearch#search",
            "items": [ { "link": "https://img.example/a.png", "title": "a" } ]
        }"#;
        assert_eq!(
            classify_response(ok(), body),
            Attempt::Found("https://img.example/a.png".to_string())
        );
    }
}
