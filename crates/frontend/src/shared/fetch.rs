//! Fetch plumbing for the aggregation endpoints.
//!
//! All category fetches go through here: GET the endpoint, treat non-2xx and
//! parse failures as errors, unwrap the `{ "data": ... }` envelope, and let
//! the caller settle failures to category defaults with [`or_default`].

use crate::shared::api_utils::request_url;
use contracts::shared::envelope::ApiEnvelope;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

/// GET an absolute URL and parse the JSON body.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Fetch an enveloped row array from an API path. A missing or null `data`
/// field is an empty row set, not an error.
pub async fn fetch_rows<T: DeserializeOwned>(path: &str, query: &str) -> Result<Vec<T>, String> {
    let envelope: ApiEnvelope<Vec<T>> = fetch_json(&request_url(path, query)).await?;
    Ok(envelope.into_data())
}

/// Fetch an enveloped single object from an API path.
pub async fn fetch_object<T: DeserializeOwned + Default>(
    path: &str,
    query: &str,
) -> Result<T, String> {
    let envelope: ApiEnvelope<T> = fetch_json(&request_url(path, query)).await?;
    Ok(envelope.into_data())
}

/// The per-category error boundary: network failures, non-success statuses
/// and malformed payloads all collapse to the category's default value here,
/// so one failed category never suppresses the others in a fan-out.
pub fn or_default<T: Default>(result: Result<T, String>, category: &str) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            log::warn!("{} fetch failed, using default: {}", category, err);
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::or_default;

    #[test]
    fn failures_collapse_to_the_category_default() {
        assert_eq!(
            or_default::<Vec<i32>>(Err("network down".to_string()), "revenue"),
            Vec::<i32>::new()
        );
        assert_eq!(or_default(Ok(vec![1, 2]), "revenue"), vec![1, 2]);
    }

    #[test]
    fn settle_all_join_never_rejects_as_a_whole() {
        // Five categories, two of them failing: the join completes and only
        // the failed arms settle to defaults.
        let (a, b, c, d, e) = futures::executor::block_on(async {
            futures::join!(
                async { Ok::<Vec<i32>, String>(vec![1]) },
                async { Err::<Vec<i32>, String>("HTTP error: 500".to_string()) },
                async { Ok::<Vec<i32>, String>(vec![3]) },
                async { Err::<Vec<i32>, String>("Failed to parse response".to_string()) },
                async { Ok::<Vec<i32>, String>(vec![5]) },
            )
        });

        assert_eq!(or_default(a, "a"), vec![1]);
        assert_eq!(or_default(b, "b"), Vec::<i32>::new());
        assert_eq!(or_default(c, "c"), vec![3]);
        assert_eq!(or_default(d, "d"), Vec::<i32>::new());
        assert_eq!(or_default(e, "e"), vec![5]);
    }
}
