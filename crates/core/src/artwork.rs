//! The artwork entity as served to clients, plus the reserved category
//! names and the featured-artwork selection rule.

use serde::Serialize;

use crate::types::DbId;

/// Pseudo-category shown first in every category list. Synthesized at read
/// time, never persisted.
pub const CATEGORY_ALL: &str = "All";

/// Label artworks are reassigned to when their category is removed.
pub const CATEGORY_UNCATEGORIZED: &str = "Uncategorized";

/// Categories eligible for the featured strip on the landing page.
pub const FEATURED_CATEGORIES: &[&str] = &["Bridal", "Cultural"];

/// Maximum number of artworks in the featured strip.
pub const FEATURED_LIMIT: usize = 4;

/// A gallery entry in its normalized, client-facing shape.
///
/// Database rows always carry an `image_path` (the object-store key);
/// bundled fallback entries do not, since their images ship with the site.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Artwork {
    pub id: DbId,
    pub title: String,
    pub category: String,
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
    pub display_order: i32,
}

/// Select the artworks for the featured strip: the first
/// [`FEATURED_LIMIT`] entries whose category is in [`FEATURED_CATEGORIES`],
/// in display order.
pub fn featured(artworks: &[Artwork]) -> Vec<Artwork> {
    artworks
        .iter()
        .filter(|a| FEATURED_CATEGORIES.contains(&a.category.as_str()))
        .take(FEATURED_LIMIT)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artwork(id: DbId, category: &str) -> Artwork {
        Artwork {
            id,
            title: format!("Artwork {id}"),
            category: category.to_string(),
            image_url: format!("/images/{id}.jpg"),
            image_path: None,
            display_order: id as i32,
        }
    }

    #[test]
    fn featured_keeps_only_eligible_categories() {
        let list = vec![
            artwork(1, "Mehendi"),
            artwork(2, "Bridal"),
            artwork(3, "Cultural"),
            artwork(4, "Sketch"),
        ];
        let picked = featured(&list);
        assert_eq!(picked.iter().map(|a| a.id).collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn featured_caps_at_limit_preserving_order() {
        let list: Vec<Artwork> = (1..=8).map(|id| artwork(id, "Bridal")).collect();
        let picked = featured(&list);
        assert_eq!(picked.len(), FEATURED_LIMIT);
        assert_eq!(picked[0].id, 1);
        assert_eq!(picked[3].id, 4);
    }

    #[test]
    fn featured_of_empty_is_empty() {
        assert!(featured(&[]).is_empty());
    }
}
