use serde::Deserialize;

/// Wire envelope used by every insights endpoint: `{ "data": <payload> }`.
///
/// A missing or `null` `data` field means "no rows", not an error, so
/// unwrapping always succeeds with the payload's default value.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub data: Option<T>,
}

impl<T: Default> ApiEnvelope<T> {
    pub fn into_data(self) -> T {
        self.data.unwrap_or_default()
    }
}
