use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fields requested from the lookup service, in the service's own naming
pub const RECIPE_FIELDS: &[&str] = &[
    "label",
    "image",
    "ingredientLines",
    "url",
    "yield",
    "totalTime",
    "cuisineType",
    "mealType",
    "dishType",
    "source",
    "calories",
];

/// A validated recipe search result
///
/// This is the shape stored in session storage; it is serialized with
/// camelCase keys (`title`, `imageUrl`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub title: String,
    pub image_url: String,
    #[serde(default)]
    pub ingredient_lines: Vec<String>,
    #[serde(default)]
    pub source_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
    /// `None` when the service reports zero or nothing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_time_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cuisine_types: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub meal_types: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dish_types: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
}

impl Recipe {
    /// A record is usable only with both a title and an image
    pub fn is_valid(&self) -> bool {
        !self.title.trim().is_empty() && !self.image_url.trim().is_empty()
    }

    /// Convert one entry of the service's `hits` array
    ///
    /// Returns `None` when the entry has no `recipe` object, when any
    /// field has the wrong type, or when the result is not valid.
    pub fn from_hit(hit: &Value) -> Option<Recipe> {
        let raw = hit.get("recipe")?;
        let api: ApiRecipe = match serde_json::from_value(raw.clone()) {
            Ok(api) => api,
            Err(e) => {
                warn!("Dropping malformed recipe hit: {}", e);
                return None;
            }
        };

        let recipe = Recipe::from(api);
        if recipe.is_valid() {
            Some(recipe)
        } else {
            warn!("Dropping recipe hit without title or image");
            None
        }
    }
}

/// Wire shape of `hits[].recipe` as returned by the lookup service
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiRecipe {
    label: Option<String>,
    image: Option<String>,
    ingredient_lines: Option<Vec<String>>,
    url: Option<String>,
    #[serde(rename = "yield")]
    servings: Option<f64>,
    total_time: Option<f64>,
    cuisine_type: Option<Vec<String>>,
    meal_type: Option<Vec<String>>,
    dish_type: Option<Vec<String>>,
    source: Option<String>,
    calories: Option<f64>,
}

impl From<ApiRecipe> for Recipe {
    fn from(api: ApiRecipe) -> Self {
        Recipe {
            title: api.label.unwrap_or_default(),
            image_url: api.image.unwrap_or_default(),
            ingredient_lines: api.ingredient_lines.unwrap_or_default(),
            source_url: api.url.unwrap_or_default(),
            servings: api.servings.and_then(positive_whole),
            total_time_minutes: api.total_time.and_then(positive_whole),
            cuisine_types: api.cuisine_type.unwrap_or_default(),
            meal_types: api.meal_type.unwrap_or_default(),
            dish_types: api.dish_type.unwrap_or_default(),
            source_name: api.source.filter(|s| !s.trim().is_empty()),
            calories: api.calories.filter(|c| c.is_finite() && *c >= 0.0),
        }
    }
}

fn positive_whole(value: f64) -> Option<u32> {
    let rounded = value.round();
    if rounded.is_finite() && rounded >= 1.0 && rounded <= u32::MAX as f64 {
        Some(rounded as u32)
    } else {
        None
    }
}
