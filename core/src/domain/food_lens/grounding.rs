use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{
    completion::entities::GroundingChunk,
    food_lens::entities::{Citation, DomainRecord, Restaurant},
};

pub const MAPS_SEARCH_URL: &str = "https://www.google.com/maps/search/?api=1&query=";

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Attach grounding citations to a normalized record.
///
/// Recipes take the first web citation with both a title and a URL. Every
/// restaurant ends up with a map link: the URL of the first matching chunk, or a
/// maps search link built from its name and address. Other records pass through.
pub fn merge(record: DomainRecord, chunks: &[GroundingChunk]) -> DomainRecord {
    match record {
        DomainRecord::Recipe(mut recipe) => {
            recipe.inspiration_source = recipe_citation(chunks);
            DomainRecord::Recipe(recipe)
        }
        DomainRecord::RestaurantList(restaurants) => DomainRecord::RestaurantList(
            restaurants
                .into_iter()
                .map(|mut restaurant| {
                    restaurant.google_maps_uri = map_link(&restaurant, chunks);
                    restaurant
                })
                .collect(),
        ),
        other => other,
    }
}

pub fn recipe_citation(chunks: &[GroundingChunk]) -> Option<Citation> {
    chunks.iter().find_map(|chunk| {
        let title = non_empty(chunk.web_title())?;
        let url = non_empty(chunk.web_uri())?;
        Some(Citation {
            title: title.to_string(),
            url: url.to_string(),
        })
    })
}

pub fn map_link(restaurant: &Restaurant, chunks: &[GroundingChunk]) -> String {
    let slug = url_slug(&restaurant.name);

    chunks
        .iter()
        .find(|chunk| matches_restaurant(chunk, &restaurant.name, &slug))
        .and_then(|chunk| non_empty(chunk.web_uri()).or_else(|| non_empty(chunk.place_uri())))
        .map(str::to_string)
        .unwrap_or_else(|| fallback_map_link(&restaurant.name, &restaurant.address))
}

/// Maps search URL for `"{name} {address}"`. Only unreserved characters are left
/// bare, so `'()!*` are escaped as well.
pub fn fallback_map_link(name: &str, address: &str) -> String {
    format!(
        "{MAPS_SEARCH_URL}{}",
        urlencoding::encode(&format!("{name} {address}"))
    )
}

/// Case-sensitive match on the web title, or on either URL containing the name
/// with whitespace runs replaced by `+`.
fn matches_restaurant(chunk: &GroundingChunk, name: &str, slug: &str) -> bool {
    // An empty name is contained in every title and URL, so it takes the first
    // chunk that has one.
    chunk.web_title().is_some_and(|title| title.contains(name))
        || chunk.web_uri().is_some_and(|uri| uri.contains(slug))
        || chunk.place_uri().is_some_and(|uri| uri.contains(slug))
}

fn url_slug(name: &str) -> String {
    WHITESPACE_RUN.replace_all(name, "+").into_owned()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        completion::entities::{PlaceCitation, WebCitation},
        food_lens::entities::Recipe,
    };

    fn restaurant(name: &str, address: &str) -> Restaurant {
        Restaurant {
            name: name.to_string(),
            address: address.to_string(),
            rating: None,
            description: None,
            google_maps_uri: String::new(),
            recommended_dishes: Vec::new(),
        }
    }

    fn recipe() -> Recipe {
        Recipe {
            title: "Pad See Ew".to_string(),
            description: String::new(),
            ingredients: Vec::new(),
            instructions: Vec::new(),
            fodmap_notes: String::new(),
            inspiration_source: None,
        }
    }

    #[test]
    fn test_restaurant_without_match_gets_fallback_link() {
        let record = merge(
            DomainRecord::RestaurantList(vec![restaurant("Golden Dragon", "123 Main St")]),
            &[],
        );
        let restaurants = record.into_restaurants().unwrap();
        assert_eq!(
            restaurants[0].google_maps_uri,
            "https://www.google.com/maps/search/?api=1&query=Golden%20Dragon%20123%20Main%20St"
        );
    }

    #[test]
    fn test_fallback_link_escapes_punctuation() {
        assert_eq!(
            fallback_map_link("Joe's (Old) Place", "1 A St"),
            format!("{MAPS_SEARCH_URL}Joe%27s%20%28Old%29%20Place%201%20A%20St")
        );
    }

    #[test]
    fn test_restaurant_without_name_takes_first_linked_chunk() {
        let chunks = vec![
            GroundingChunk::web("Anything", "https://x.example"),
            GroundingChunk::web("Other", "https://y.example"),
        ];
        let link = map_link(&restaurant("", "1 A St"), &chunks);
        assert_eq!(link, "https://x.example");
    }

    #[test]
    fn test_restaurant_matched_by_web_title() {
        let chunks = vec![
            GroundingChunk::web("Best Pho in town", "https://pho.example"),
            GroundingChunk::web("Golden Dragon - Menu", "https://dragon.example/menu"),
        ];
        let link = map_link(&restaurant("Golden Dragon", "123 Main St"), &chunks);
        assert_eq!(link, "https://dragon.example/menu");
    }

    #[test]
    fn test_restaurant_matched_by_place_uri_slug() {
        let chunks = vec![GroundingChunk::place(
            "Somewhere",
            "https://maps.google.com/?q=Golden+Dragon+NYC",
        )];
        let link = map_link(&restaurant("Golden  Dragon", "123 Main St"), &chunks);
        assert_eq!(link, "https://maps.google.com/?q=Golden+Dragon+NYC");
    }

    #[test]
    fn test_title_match_is_case_sensitive() {
        let chunks = vec![GroundingChunk::web("golden dragon", "https://dragon.example")];
        let link = map_link(&restaurant("Golden Dragon", "1 A St"), &chunks);
        assert!(link.starts_with(MAPS_SEARCH_URL));
    }

    #[test]
    fn test_matched_chunk_prefers_web_uri_then_place_uri() {
        let chunk = GroundingChunk {
            web: Some(WebCitation {
                uri: Some(String::new()),
                title: Some("Jade Garden".to_string()),
            }),
            maps: Some(PlaceCitation {
                uri: Some("https://maps.example/jade".to_string()),
                title: None,
            }),
        };
        let link = map_link(&restaurant("Jade Garden", "9 Elm St"), &[chunk]);
        assert_eq!(link, "https://maps.example/jade");
    }

    #[test]
    fn test_recipe_takes_first_complete_web_citation() {
        let chunks = vec![
            GroundingChunk::place("Maps", "https://maps.example"),
            GroundingChunk {
                web: Some(WebCitation {
                    uri: Some("https://untitled.example".to_string()),
                    title: None,
                }),
                maps: None,
            },
            GroundingChunk::web("Xiachufang", "https://xiachufang.example/recipe"),
            GroundingChunk::web("Second", "https://second.example"),
        ];
        let record = merge(DomainRecord::Recipe(recipe()), &chunks);
        assert_eq!(
            record.into_recipe().unwrap().inspiration_source,
            Some(Citation {
                title: "Xiachufang".to_string(),
                url: "https://xiachufang.example/recipe".to_string(),
            })
        );
    }

    #[test]
    fn test_recipe_without_web_chunks_has_no_citation() {
        let record = merge(DomainRecord::Recipe(recipe()), &[]);
        assert!(record.into_recipe().unwrap().inspiration_source.is_none());
    }

    #[test]
    fn test_other_records_pass_through() {
        let record = DomainRecord::SuggestionList(vec!["Pho".to_string()]);
        let chunks = vec![GroundingChunk::web("Pho", "https://pho.example")];
        assert_eq!(merge(record.clone(), &chunks), record);
    }
}
