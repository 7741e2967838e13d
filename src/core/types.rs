use crate::core::errors::BlindPayError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Message reported by the remote service for a failed call
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{message}")]
pub struct ErrorInfo {
    pub message: String,
}

impl ErrorInfo {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Outcome of a single remote call.
///
/// Exactly one of data or error is present. Remote failures are always
/// returned through this type and never raised.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse<T> {
    Success(T),
    Error(ErrorInfo),
}

impl<T> ApiResponse<T> {
    pub const fn success(data: T) -> Self {
        Self::Success(data)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(ErrorInfo::new(message))
    }

    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    pub const fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            Self::Error(_) => None,
        }
    }

    pub const fn error_info(&self) -> Option<&ErrorInfo> {
        match self {
            Self::Success(_) => None,
            Self::Error(info) => Some(info),
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            Self::Success(data) => Some(data),
            Self::Error(_) => None,
        }
    }

    pub fn into_result(self) -> Result<T, ErrorInfo> {
        match self {
            Self::Success(data) => Ok(data),
            Self::Error(info) => Err(info),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        match self {
            Self::Success(data) => ApiResponse::Success(f(data)),
            Self::Error(info) => ApiResponse::Error(info),
        }
    }

    /// Map the success payload with a fallible conversion, leaving error
    /// envelopes untouched
    pub fn try_map<U, E>(self, f: impl FnOnce(T) -> Result<U, E>) -> Result<ApiResponse<U>, E> {
        match self {
            Self::Success(data) => f(data).map(ApiResponse::Success),
            Self::Error(info) => Ok(ApiResponse::Error(info)),
        }
    }
}

/// Cursor and page-window parameters accepted by list endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationParams {
    limit: Option<u32>,
    offset: Option<u32>,
    starting_after: Option<String>,
    ending_before: Option<String>,
}

impl PaginationParams {
    pub const VALID_LIMITS: [u32; 5] = [10, 50, 100, 200, 1000];
    pub const VALID_OFFSETS: [u32; 6] = [0, 10, 50, 100, 200, 1000];

    pub fn new(
        limit: Option<u32>,
        offset: Option<u32>,
        starting_after: Option<String>,
        ending_before: Option<String>,
    ) -> Result<Self, BlindPayError> {
        if let Some(limit) = limit {
            Self::check(limit, &Self::VALID_LIMITS, "limit")?;
        }
        if let Some(offset) = offset {
            Self::check(offset, &Self::VALID_OFFSETS, "offset")?;
        }

        Ok(Self {
            limit,
            offset,
            starting_after,
            ending_before,
        })
    }

    pub fn with_limit(self, limit: u32) -> Result<Self, BlindPayError> {
        Self::new(Some(limit), self.offset, self.starting_after, self.ending_before)
    }

    pub fn with_offset(self, offset: u32) -> Result<Self, BlindPayError> {
        Self::new(self.limit, Some(offset), self.starting_after, self.ending_before)
    }

    pub fn starting_after(mut self, cursor: impl Into<String>) -> Self {
        self.starting_after = Some(cursor.into());
        self
    }

    pub fn ending_before(mut self, cursor: impl Into<String>) -> Self {
        self.ending_before = Some(cursor.into());
        self
    }

    pub const fn limit(&self) -> Option<u32> {
        self.limit
    }

    pub const fn offset(&self) -> Option<u32> {
        self.offset
    }

    fn check(value: u32, allowed: &[u32], name: &str) -> Result<(), BlindPayError> {
        if allowed.contains(&value) {
            return Ok(());
        }
        let listed = allowed
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        Err(BlindPayError::validation_with(
            format!("Invalid {}. Must be one of: {}", name, listed),
            name,
            value.to_string(),
        ))
    }

    /// Set parameters as query pairs, in wire order
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(offset) = self.offset {
            pairs.push(("offset", offset.to_string()));
        }
        if let Some(ref cursor) = self.starting_after {
            pairs.push(("starting_after", cursor.clone()));
        }
        if let Some(ref cursor) = self.ending_before {
            pairs.push(("ending_before", cursor.clone()));
        }
        pairs
    }

    pub fn to_query_string(&self) -> String {
        build_query_string(&self.to_query_pairs())
    }
}

/// Render `?k=v&..` from pairs, or an empty string when there are none
pub fn build_query_string(pairs: &[(&str, String)]) -> String {
    if pairs.is_empty() {
        return String::new();
    }
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        serializer.append_pair(key, value);
    }
    format!("?{}", serializer.finish())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMetadata {
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub next_page: i64,
    #[serde(default)]
    pub prev_page: i64,
}

/// List payload shaped as `{data, pagination}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub pagination: PaginationMetadata,
}

/// Field state for sparse updates: left out, cleared, or set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Patch<T> {
    #[default]
    Omit,
    Null,
    Set(T),
}

impl<T> Patch<T> {
    pub const fn is_omit(&self) -> bool {
        matches!(self, Self::Omit)
    }

    pub const fn as_set(&self) -> Option<&T> {
        match self {
            Self::Set(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> From<T> for Patch<T> {
    fn from(value: T) -> Self {
        Self::Set(value)
    }
}

impl<T: Serialize> Serialize for Patch<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Set(value) => value.serialize(serializer),
            Self::Omit | Self::Null => serializer.serialize_none(),
        }
    }
}

// Missing keys never reach this impl; pair it with #[serde(default)].
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<T>::deserialize(deserializer)?.map_or(Self::Null, Self::Set))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_accessors() {
        let ok: ApiResponse<u32> = ApiResponse::success(7);
        assert!(ok.is_success());
        assert!(!ok.is_error());
        assert_eq!(ok.data(), Some(&7));
        assert!(ok.error_info().is_none());

        let err: ApiResponse<u32> = ApiResponse::error("not found");
        assert!(err.is_error());
        assert!(err.data().is_none());
        assert_eq!(err.error_info().unwrap().message, "not found");
    }

    #[test]
    fn test_try_map_keeps_error_envelope() {
        let err: ApiResponse<u32> = ApiResponse::error("boom");
        let mapped: Result<ApiResponse<String>, ()> = err.try_map(|_| Err(()));
        assert_eq!(mapped.unwrap().error_info().unwrap().message, "boom");
    }

    #[test]
    fn test_pagination_accepts_every_documented_combination() {
        for limit in PaginationParams::VALID_LIMITS {
            for offset in PaginationParams::VALID_OFFSETS {
                let params = PaginationParams::new(Some(limit), Some(offset), None, None).unwrap();
                assert_eq!(
                    params.to_query_string(),
                    format!("?limit={}&offset={}", limit, offset)
                );
            }
        }
    }

    #[test]
    fn test_pagination_rejects_out_of_set_values() {
        let err = PaginationParams::new(Some(25), None, None, None).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Invalid limit. Must be one of: 10, 50, 100, 200, 1000"
        );

        let err = PaginationParams::new(None, Some(5), None, None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid offset. Must be one of: 0, 10, 50, 100, 200, 1000"
        );

        assert!(PaginationParams::default().with_limit(0).is_err());
        assert!(PaginationParams::new(Some(10), Some(1), None, None).is_err());
    }

    #[test]
    fn test_pagination_query_string() {
        assert_eq!(PaginationParams::default().to_query_string(), "");

        let params = PaginationParams::default()
            .with_limit(50)
            .unwrap()
            .starting_after("pa_abc")
            .ending_before("pa_xyz");
        assert_eq!(
            params.to_query_string(),
            "?limit=50&starting_after=pa_abc&ending_before=pa_xyz"
        );
    }

    #[test]
    fn test_pagination_metadata_defaults() {
        let meta: PaginationMetadata = serde_json::from_value(json!({})).unwrap();
        assert_eq!(meta, PaginationMetadata::default());

        let meta: PaginationMetadata =
            serde_json::from_value(json!({"has_more": true, "next_page": 3, "prev_page": 1}))
                .unwrap();
        assert!(meta.has_more);
        assert_eq!(meta.next_page, 3);
        assert_eq!(meta.prev_page, 1);
    }

    #[derive(Serialize, Deserialize, Default)]
    struct Sparse {
        #[serde(default, skip_serializing_if = "Patch::is_omit")]
        email: Patch<String>,
        #[serde(default, skip_serializing_if = "Patch::is_omit")]
        website: Patch<String>,
        #[serde(default, skip_serializing_if = "Patch::is_omit")]
        city: Patch<String>,
    }

    #[test]
    fn test_patch_distinguishes_omit_from_null() {
        let body = Sparse {
            email: Patch::Set("a@b.co".to_string()),
            website: Patch::Null,
            city: Patch::Omit,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"email": "a@b.co", "website": null})
        );

        let back: Sparse = serde_json::from_value(json!({"email": "a@b.co", "website": null})).unwrap();
        assert_eq!(back.email, Patch::Set("a@b.co".to_string()));
        assert_eq!(back.website, Patch::Null);
        assert_eq!(back.city, Patch::Omit);
    }
}
