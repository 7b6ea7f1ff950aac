use crate::cache::ResultCache;
use crate::error::SearchError;
use crate::model::Recipe;
use crate::source::RecipeSource;
use log::{debug, info, warn};
use serde_json::Value;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

/// Query and outcome of the most recent search
#[derive(Debug, Default)]
struct SearchState {
    query: Option<String>,
    last_error: Option<SearchError>,
}

/// Runs ingredient searches and publishes the results to the cache
///
/// At most one search is in flight per controller; a call made while
/// another is pending fails with [`SearchError::SearchInProgress`].
pub struct SearchController {
    source: Box<dyn RecipeSource>,
    cache: ResultCache,
    in_flight: AtomicBool,
    state: Mutex<SearchState>,
}

impl SearchController {
    pub fn new(source: Box<dyn RecipeSource>, cache: ResultCache) -> Self {
        Self {
            source,
            cache,
            in_flight: AtomicBool::new(false),
            state: Mutex::new(SearchState::default()),
        }
    }

    /// Search for recipes matching a free-text ingredient list
    ///
    /// On success the cache is overwritten with the returned records, in
    /// the order the service sent them. On failure the cache is untouched.
    pub async fn search(&self, query: &str) -> Result<Vec<Recipe>, SearchError> {
        let _guard = InFlightGuard::acquire(&self.in_flight).ok_or(SearchError::SearchInProgress)?;

        let query = query.trim();
        let result = self.run(query).await;

        let mut state = self.state();
        state.query = Some(query.to_string()).filter(|q| !q.is_empty());
        state.last_error = result.as_ref().err().cloned();
        result
    }

    async fn run(&self, query: &str) -> Result<Vec<Recipe>, SearchError> {
        if query.is_empty() {
            return Err(SearchError::EmptyQuery);
        }

        let body = self.source.fetch(query).await?;
        let records = select_records(&body)?;
        debug!(
            "{} results from {} for {:?}",
            records.len(),
            self.source.source_name(),
            query
        );

        self.cache
            .write(&records)
            .map_err(|e| SearchError::CacheWrite(e.to_string()))?;
        Ok(records)
    }

    /// Clear the cached results along with the held query and error
    pub fn reset(&self) {
        if let Err(e) = self.cache.clear() {
            warn!("Failed to clear cached results: {}", e);
        }
        let mut state = self.state();
        state.query = None;
        state.last_error = None;
        info!("Search state reset");
    }

    /// Trimmed query of the most recent search, if any
    pub fn query(&self) -> Option<String> {
        self.state().query.clone()
    }

    /// Error of the most recent search, if it failed
    pub fn last_error(&self) -> Option<SearchError> {
        self.state().last_error.clone()
    }

    pub fn is_searching(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    fn state(&self) -> MutexGuard<'_, SearchState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Validate a response body and keep the usable records in order
fn select_records(body: &Value) -> Result<Vec<Recipe>, SearchError> {
    let hits = body
        .get("hits")
        .and_then(Value::as_array)
        .ok_or(SearchError::MalformedResponse)?;

    if hits.is_empty() {
        return Err(SearchError::NoResults);
    }

    let records: Vec<Recipe> = hits.iter().filter_map(Recipe::from_hit).collect();
    if records.is_empty() {
        return Err(SearchError::NoValidResults);
    }
    if records.len() < hits.len() {
        debug!("Dropped {} of {} hits", hits.len() - records.len(), hits.len());
    }

    Ok(records)
}

struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlightGuard(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
