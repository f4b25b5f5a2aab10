//! URL helpers for talking to the aggregation API.

/// Base URL for the aggregation API, derived from the current window
/// location with the backend's port 8000. Empty when no window is available.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:8000", protocol, hostname)
}

/// Full request URL for an API path plus a pre-built query string, e.g.
/// `request_url("/api/insights/cost-breakdown", "type=salon")`.
pub fn request_url(path: &str, query: &str) -> String {
    if query.is_empty() {
        return format!("{}{}", api_base(), path);
    }
    format!("{}{}?{}", api_base(), path, query)
}
