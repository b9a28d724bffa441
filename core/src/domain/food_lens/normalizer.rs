use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::domain::{
    common::entities::app_errors::CoreError,
    completion::{entities::RequestKind, extractor::ExtractedPayload},
    food_lens::entities::{
        DishAnalysis, DishRecommendation, DomainRecord, IngredientRisk, Recipe, Restaurant,
        ScanResult,
    },
};

/// Field names the model has been seen to use for a restaurant's dish list, in
/// order of preference.
const DISH_LIST_FIELDS: [&str; 3] = [
    "recommendedDishes",
    "suggested_fodmap_dishes",
    "suggested_dishes",
];

type JsonObject = Map<String, Value>;

/// Parse an extracted payload and coerce it into the record for `kind`.
///
/// Lists always come out as well-typed sequences: a missing or non-list field is
/// empty and elements that do not read as the element type are dropped. Text
/// fields take numbers and booleans as their textual form, flags take `"true"` /
/// `"false"`, and anything else falls back to the empty value. Only a required
/// enumeration that is missing or outside its set is a [`CoreError::SchemaMismatch`].
pub fn normalize(payload: &ExtractedPayload<'_>, kind: RequestKind) -> Result<DomainRecord, CoreError> {
    let value: Value = serde_json::from_str(payload.text).map_err(|e| {
        if payload.located {
            CoreError::MalformedResponse(e.to_string())
        } else {
            CoreError::ExtractionFailure
        }
    })?;

    match kind {
        RequestKind::AnalyzeDish => normalize_dish_analysis(value).map(DomainRecord::DishAnalysis),
        RequestKind::GetRecipe => normalize_recipe(value).map(DomainRecord::Recipe),
        RequestKind::SuggestDishes => Ok(DomainRecord::SuggestionList(normalize_suggestions(value))),
        RequestKind::ScanImage => normalize_scan_result(value).map(DomainRecord::ScanResult),
        RequestKind::FindRestaurants => Ok(DomainRecord::RestaurantList(normalize_restaurants(
            value,
        ))),
    }
}

fn normalize_dish_analysis(value: Value) -> Result<DishAnalysis, CoreError> {
    let mut object = expect_object(value)?;
    let ingredients_breakdown = typed_list(take_list(&mut object, "ingredientsBreakdown"));
    let modifications = typed_list(take_list(&mut object, "modifications"));
    coerce_text_fields(&mut object, &["dishName", "explanation"]);
    coerce_flag(&mut object, "isSafe");

    let mut analysis: DishAnalysis = from_object(object)?;
    analysis.ingredients_breakdown = ingredients_breakdown;
    analysis.modifications = modifications;
    Ok(analysis)
}

fn normalize_recipe(value: Value) -> Result<Recipe, CoreError> {
    let mut object = expect_object(value)?;
    let ingredients = typed_list(take_list(&mut object, "ingredients"));
    let instructions = typed_list(take_list(&mut object, "instructions"));
    coerce_text_fields(&mut object, &["title", "description", "fodmapNotes"]);

    let mut recipe: Recipe = from_object(object)?;
    recipe.ingredients = ingredients;
    recipe.instructions = instructions;
    Ok(recipe)
}

fn normalize_scan_result(value: Value) -> Result<ScanResult, CoreError> {
    let mut object = expect_object(value)?;
    coerce_text_fields(&mut object, &["identifiedFood", "reasoning"]);
    from_object(object)
}

fn normalize_suggestions(value: Value) -> Vec<String> {
    typed_list(first_sequence(value))
}

fn normalize_restaurants(value: Value) -> Vec<Restaurant> {
    first_sequence(value)
        .into_iter()
        .filter_map(|entry| match entry {
            Value::Object(place) => normalize_restaurant(place),
            other => {
                debug!(value = %other, "Dropping non-object restaurant entry");
                None
            }
        })
        .collect()
}

fn normalize_restaurant(mut place: JsonObject) -> Option<Restaurant> {
    let dishes = take_dish_list(&mut place);
    coerce_text_fields(&mut place, &["name", "address", "rating", "description"]);

    match from_object::<Restaurant>(place) {
        Ok(mut restaurant) => {
            restaurant.recommended_dishes = dishes;
            Some(restaurant)
        }
        Err(e) => {
            warn!(error = %e, "Dropping unreadable restaurant entry");
            None
        }
    }
}

/// Resolve the dish list across its synonyms. The first *truthy* field wins, so
/// an empty string or `false` under the preferred name defers to the next one,
/// while an empty list does not.
fn take_dish_list(place: &mut JsonObject) -> Vec<DishRecommendation> {
    let mut chosen = None;
    for field in DISH_LIST_FIELDS {
        if let Some(value) = place.remove(field) {
            if chosen.is_none() && is_truthy(&value) {
                chosen = Some(value);
            }
        }
    }

    match chosen {
        Some(Value::Array(items)) => items.into_iter().filter_map(read_dish).collect(),
        _ => Vec::new(),
    }
}

fn read_dish(item: Value) -> Option<DishRecommendation> {
    match item {
        Value::String(name) => Some(DishRecommendation::with_default_caution(name)),
        Value::Object(dish) => from_object(dish).ok(),
        _ => None,
    }
}

/// Top-level sequence, or the first sequence-valued field when the model wrapped
/// it in an object.
fn first_sequence(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        Value::Object(object) => object
            .into_iter()
            .find_map(|(_, v)| match v {
                Value::Array(items) => Some(items),
                _ => None,
            })
            .unwrap_or_default(),
        _ => Vec::new(),
    }
}

fn coerce_text_fields(object: &mut JsonObject, fields: &[&str]) {
    for field in fields {
        coerce_text(object, field);
    }
}

/// Numbers and booleans become their textual form; other non-strings are dropped
/// so the field takes its default.
fn coerce_text(object: &mut JsonObject, field: &str) {
    let text = match object.remove(field) {
        Some(Value::String(text)) => text,
        Some(Value::Number(number)) => number.to_string(),
        Some(Value::Bool(flag)) => flag.to_string(),
        Some(Value::Null) | None => return,
        Some(other) => {
            warn!(field, value = %other, "Expected text, treating as absent");
            return;
        }
    };
    object.insert(field.to_string(), Value::String(text));
}

fn coerce_flag(object: &mut JsonObject, field: &str) {
    let flag = match object.remove(field) {
        Some(Value::Bool(flag)) => flag,
        Some(Value::String(text)) if text.trim().eq_ignore_ascii_case("true") => true,
        Some(Value::String(text)) if text.trim().eq_ignore_ascii_case("false") => false,
        Some(Value::Null) | None => return,
        Some(other) => {
            warn!(field, value = %other, "Expected a boolean, treating as absent");
            return;
        }
    };
    object.insert(field.to_string(), Value::Bool(flag));
}

fn take_list(object: &mut JsonObject, field: &str) -> Vec<Value> {
    match object.remove(field) {
        Some(Value::Array(items)) => items,
        Some(Value::Null) | None => Vec::new(),
        Some(other) => {
            warn!(field, value = %other, "Expected a list, defaulting to empty");
            Vec::new()
        }
    }
}

fn typed_list<T: DeserializeOwned>(items: Vec<Value>) -> Vec<T> {
    items
        .into_iter()
        .filter_map(|item| {
            let item = match item {
                Value::Object(object) => Value::Object(without_nulls(object)),
                other => other,
            };
            serde_json::from_value(item).ok()
        })
        .collect()
}

fn expect_object(value: Value) -> Result<JsonObject, CoreError> {
    match value {
        Value::Object(object) => Ok(object),
        other => Err(CoreError::SchemaMismatch(format!(
            "expected a JSON object, got {}",
            json_type(&other)
        ))),
    }
}

fn from_object<T: DeserializeOwned>(object: JsonObject) -> Result<T, CoreError> {
    serde_json::from_value(Value::Object(without_nulls(object)))
        .map_err(|e| CoreError::SchemaMismatch(e.to_string()))
}

/// `null` fields are treated as absent so that their defaults apply.
fn without_nulls(mut object: JsonObject) -> JsonObject {
    object.retain(|_, value| !value.is_null());
    object
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
