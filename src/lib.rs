pub mod cache;
pub mod config;
pub mod error;
pub mod finder;
pub mod model;
pub mod resolver;
pub mod search;
pub mod slug;
pub mod source;
pub mod storage;

pub use cache::{ResultCache, DEFAULT_CACHE_KEY};
pub use config::FinderConfig;
pub use error::{FinderError, ResolveError, SearchError};
pub use finder::{RecipeFinder, RecipeFinderBuilder};
pub use model::Recipe;
pub use resolver::ResultResolver;
pub use search::SearchController;
pub use slug::build_slug;
pub use source::{EdamamClient, RecipeSource};
pub use storage::{FileStorage, MemoryStorage, SessionStorage};
