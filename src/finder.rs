use std::path::PathBuf;
use std::sync::Arc;

use crate::cache::ResultCache;
use crate::config::FinderConfig;
use crate::error::{FinderError, ResolveError, SearchError};
use crate::model::Recipe;
use crate::resolver::ResultResolver;
use crate::search::SearchController;
use crate::slug;
use crate::source::{EdamamClient, RecipeSource};
use crate::storage::{FileStorage, MemoryStorage, SessionStorage};

/// Builder for wiring a [`RecipeFinder`] to its configuration, storage and source
#[derive(Default)]
pub struct RecipeFinderBuilder {
    config: Option<FinderConfig>,
    app_id: Option<String>,
    app_key: Option<String>,
    endpoint: Option<String>,
    session_dir: Option<PathBuf>,
    storage: Option<Arc<dyn SessionStorage>>,
    source: Option<Box<dyn RecipeSource>>,
}

impl RecipeFinderBuilder {
    /// Start from a loaded configuration
    ///
    /// # Example
    /// ```
    /// use recipe_finder::{FinderConfig, RecipeFinder};
    ///
    /// let builder = RecipeFinder::builder().config(FinderConfig::default());
    /// ```
    pub fn config(mut self, config: FinderConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the application id, overriding the configuration
    ///
    /// # Example
    /// ```
    /// use recipe_finder::RecipeFinder;
    ///
    /// let builder = RecipeFinder::builder()
    ///     .app_id("your-app-id")
    ///     .app_key("your-app-key");
    /// ```
    pub fn app_id(mut self, app_id: impl Into<String>) -> Self {
        self.app_id = Some(app_id.into());
        self
    }

    /// Set the application key, overriding the configuration
    pub fn app_key(mut self, app_key: impl Into<String>) -> Self {
        self.app_key = Some(app_key.into());
        self
    }

    /// Set the recipe search endpoint, overriding the configuration
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Keep the session in files under `dir`
    ///
    /// Without this (or [`storage`](Self::storage)) results are held in
    /// memory and vanish with the finder.
    pub fn session_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.session_dir = Some(dir.into());
        self
    }

    /// Use a custom session storage
    pub fn storage(mut self, storage: impl SessionStorage + 'static) -> Self {
        self.storage = Some(Arc::new(storage));
        self
    }

    /// Use a custom recipe source instead of the Edamam client
    pub fn source(mut self, source: impl RecipeSource + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Build the finder
    ///
    /// # Errors
    /// Returns `FinderError` if:
    /// - Both a session directory and a custom storage were given
    /// - The session directory cannot be created
    /// - The HTTP client cannot be created
    pub fn build(self) -> Result<RecipeFinder, FinderError> {
        let mut config = self.config.unwrap_or_default();
        if let Some(app_id) = self.app_id {
            config.app_id = Some(app_id);
        }
        if let Some(app_key) = self.app_key {
            config.app_key = Some(app_key);
        }
        if let Some(endpoint) = self.endpoint {
            config.endpoint = endpoint;
        }

        let storage: Arc<dyn SessionStorage> = match (self.storage, self.session_dir) {
            (Some(_), Some(_)) => {
                return Err(FinderError::BuilderError(
                    "Cannot use both session_dir() and storage()".to_string(),
                ))
            }
            (Some(storage), None) => storage,
            (None, Some(dir)) => Arc::new(FileStorage::open(dir)?),
            (None, None) => Arc::new(MemoryStorage::new()),
        };

        let source: Box<dyn RecipeSource> = match self.source {
            Some(source) => source,
            None => Box::new(EdamamClient::new(&config)?),
        };

        let cache = ResultCache::with_key(storage, config.cache_key.clone());
        Ok(RecipeFinder {
            controller: SearchController::new(source, cache.clone()),
            resolver: ResultResolver::new(cache),
        })
    }
}

/// Search and result lookup over one shared session cache
pub struct RecipeFinder {
    controller: SearchController,
    resolver: ResultResolver,
}

impl RecipeFinder {
    /// Creates a new builder
    ///
    /// # Example
    /// ```
    /// use recipe_finder::RecipeFinder;
    ///
    /// let builder = RecipeFinder::builder();
    /// ```
    pub fn builder() -> RecipeFinderBuilder {
        RecipeFinderBuilder::default()
    }

    /// # Example
    /// ```no_run
    /// # use recipe_finder::RecipeFinder;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let finder = RecipeFinder::builder()
    ///     .app_id("your-app-id")
    ///     .app_key("your-app-key")
    ///     .build()?;
    /// let recipes = finder.search("chicken, lemon").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search(&self, query: &str) -> Result<Vec<Recipe>, SearchError> {
        self.controller.search(query).await
    }

    pub fn resolve(&self, slug: &str) -> Result<Recipe, ResolveError> {
        self.resolver.resolve(slug)
    }

    pub fn entries(&self) -> Result<Vec<(String, Recipe)>, ResolveError> {
        self.resolver.entries()
    }

    pub fn reset(&self) {
        self.controller.reset()
    }

    pub fn build_slug(title: &str, index: usize) -> String {
        slug::build_slug(title, index)
    }

    pub fn controller(&self) -> &SearchController {
        &self.controller
    }

    pub fn resolver(&self) -> &ResultResolver {
        &self.resolver
    }
}
