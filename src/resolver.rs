use crate::cache::ResultCache;
use crate::error::ResolveError;
use crate::model::Recipe;
use crate::slug::{build_slug, parse_slug_index, SlugIndex};

/// Read-only view of the cached results, addressed by slug
#[derive(Debug, Clone)]
pub struct ResultResolver {
    cache: ResultCache,
}

impl ResultResolver {
    pub fn new(cache: ResultCache) -> Self {
        Self { cache }
    }

    /// Look up the cached record a slug points at
    ///
    /// Only the trailing index of the slug is used. Slugs are meaningful
    /// only against the cache that produced them.
    pub fn resolve(&self, slug: &str) -> Result<Recipe, ResolveError> {
        let records = self.cache.read().ok_or(ResolveError::NoCachedResults)?;
        let out_of_range = || ResolveError::IndexOutOfRange {
            slug: slug.to_string(),
            len: records.len(),
        };

        match parse_slug_index(slug) {
            SlugIndex::At(index) => records.get(index).cloned().ok_or_else(out_of_range),
            SlugIndex::Overflow => Err(out_of_range()),
            SlugIndex::Invalid => Err(ResolveError::InvalidSlug(slug.to_string())),
        }
    }

    /// Every cached record paired with its slug, in cached order
    pub fn entries(&self) -> Result<Vec<(String, Recipe)>, ResolveError> {
        let records = self.cache.read().ok_or(ResolveError::NoCachedResults)?;
        Ok(records
            .into_iter()
            .enumerate()
            .map(|(index, recipe)| (build_slug(&recipe.title, index), recipe))
            .collect())
    }
}
