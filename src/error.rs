use thiserror::Error;

/// Errors that can occur while searching for recipes
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The query was empty or whitespace only
    #[error("Please enter at least one ingredient to search for")]
    EmptyQuery,

    /// The application id or key is not configured
    #[error("Recipe search is not configured: application id and key are required")]
    MissingCredentials,

    /// Another search on the same controller has not settled yet
    #[error("A search is already in progress")]
    SearchInProgress,

    /// The request did not complete within the fixed timeout
    #[error("The recipe service took too long to respond")]
    Timeout,

    /// No response was received from the recipe service
    #[error("Could not reach the recipe service: {0}")]
    NetworkError(String),

    #[error("The recipe service rejected the credentials (401)")]
    Unauthorized,

    #[error("Access to the recipe service is forbidden (403)")]
    Forbidden,

    #[error("Too many requests to the recipe service, try again later (429)")]
    RateLimited,

    #[error("The recipe service could not understand the request (400)")]
    BadRequest,

    #[error("The recipe service endpoint was not found (404)")]
    EndpointNotFound,

    #[error("The recipe service is unavailable ({0})")]
    ServiceUnavailable(u16),

    #[error("Unexpected response from the recipe service (HTTP {0})")]
    UnknownHttpError(u16),

    /// The response body did not carry a `hits` array
    #[error("The recipe service returned an unexpected response")]
    MalformedResponse,

    /// The service answered with an empty `hits` array
    #[error("No recipes found for these ingredients")]
    NoResults,

    /// Every returned recipe failed validation
    #[error("No usable recipes found for these ingredients")]
    NoValidResults,

    /// The results could not be written to session storage
    #[error("Failed to store search results: {0}")]
    CacheWrite(String),
}

impl SearchError {
    /// Map a non-success HTTP status to its error variant
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => SearchError::BadRequest,
            401 => SearchError::Unauthorized,
            403 => SearchError::Forbidden,
            404 => SearchError::EndpointNotFound,
            429 => SearchError::RateLimited,
            500 | 502 | 503 | 504 => SearchError::ServiceUnavailable(status),
            other => SearchError::UnknownHttpError(other),
        }
    }
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SearchError::Timeout
        } else if err.is_decode() {
            SearchError::MalformedResponse
        } else {
            SearchError::NetworkError(err.to_string())
        }
    }
}

/// Errors that can occur while resolving a slug against cached results
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("There are no search results to show, run a search first")]
    NoCachedResults,

    #[error("'{0}' is not a valid recipe link")]
    InvalidSlug(String),

    #[error("No recipe at '{slug}', only {len} results are cached")]
    IndexOutOfRange { slug: String, len: usize },
}

/// Errors that can occur while setting up a finder
#[derive(Error, Debug)]
pub enum FinderError {
    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// HTTP client could not be created
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Session storage could not be prepared
    #[error("Storage error: {0}")]
    StorageError(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(SearchError::from_status(400), SearchError::BadRequest);
        assert_eq!(SearchError::from_status(401), SearchError::Unauthorized);
        assert_eq!(SearchError::from_status(403), SearchError::Forbidden);
        assert_eq!(SearchError::from_status(404), SearchError::EndpointNotFound);
        assert_eq!(SearchError::from_status(429), SearchError::RateLimited);
        for status in [500, 502, 503, 504] {
            assert_eq!(
                SearchError::from_status(status),
                SearchError::ServiceUnavailable(status)
            );
        }
        assert_eq!(SearchError::from_status(418), SearchError::UnknownHttpError(418));
        assert_eq!(SearchError::from_status(501), SearchError::UnknownHttpError(501));
    }

    #[test]
    fn test_messages_are_displayable() {
        assert!(SearchError::EmptyQuery.to_string().contains("ingredient"));
        assert!(SearchError::UnknownHttpError(418).to_string().contains("418"));
        let err = ResolveError::IndexOutOfRange {
            slug: "x-99".to_string(),
            len: 3,
        };
        assert!(err.to_string().contains("x-99"));
        assert!(err.to_string().contains('3'));
    }
}
