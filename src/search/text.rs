//! Keyword Product Search
//!
//! Scores every product against the whole (lowercased) query:
//!
//! | Match                                         | Points |
//! |-----------------------------------------------|--------|
//! | query is a substring of the name              | 3      |
//! | query is a substring of the description       | 2      |
//! | query is a substring of the category          | 2      |
//! | query is a substring of a feature (each)      | 1      |
//! | synonym hit in name or description (each)     | 2      |
//!
//! A synonym group applies when its key occurs anywhere in the query.
//! Products scoring zero are dropped; the rest are ordered by score, highest
//! first, keeping catalog order between equal scores.

use serde::Serialize;

use crate::models::Product;

/// Query term → related words looked up in product names and descriptions
pub const SYNONYMS: &[(&str, &[&str])] = &[
    ("t-shirt", &["shirt", "top", "tshirt"]),
    ("sports", &["sport", "athletic", "athletics", "training"]),
    ("shoes", &["shoe", "sneakers", "footwear"]),
    ("shorts", &["short"]),
    ("gloves", &["glove"]),
];

const NAME_WEIGHT: u32 = 3;
const DESCRIPTION_WEIGHT: u32 = 2;
const CATEGORY_WEIGHT: u32 = 2;
const FEATURE_WEIGHT: u32 = 1;
const SYNONYM_WEIGHT: u32 = 2;

/// A product together with its relevance score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredProduct {
    pub score: u32,
    pub product: Product,
}

/// Score a single product against an already-lowercased query
pub fn score_product(query_lower: &str, product: &Product) -> u32 {
    let name = product.name.to_lowercase();
    let description = product.description.to_lowercase();
    let mut score = 0;

    if name.contains(query_lower) {
        score += NAME_WEIGHT;
    }
    if description.contains(query_lower) {
        score += DESCRIPTION_WEIGHT;
    }
    if product.category.to_lowercase().contains(query_lower) {
        score += CATEGORY_WEIGHT;
    }

    score += product
        .features
        .iter()
        .filter(|feature| feature.to_lowercase().contains(query_lower))
        .count() as u32
        * FEATURE_WEIGHT;

    for (key, synonyms) in SYNONYMS {
        if !query_lower.contains(*key) {
            continue;
        }
        let hits = synonyms
            .iter()
            .filter(|synonym| name.contains(**synonym) || description.contains(**synonym))
            .count() as u32;
        score += hits * SYNONYM_WEIGHT;
    }

    score
}

/// Score the catalog and return matching products, best first
pub fn rank_products(query: &str, products: &[Product]) -> Vec<ScoredProduct> {
    let query_lower = query.to_lowercase();

    let mut matched: Vec<ScoredProduct> = products
        .iter()
        .filter_map(|product| {
            let score = score_product(&query_lower, product);
            (score > 0).then(|| ScoredProduct {
                score,
                product: product.clone(),
            })
        })
        .collect();

    // Stable: equal scores stay in catalog order
    matched.sort_by(|a, b| b.score.cmp(&a.score));
    matched
}

/// Same as [`rank_products`] without the scores
pub fn search_products_by_text(query: &str, products: &[Product]) -> Vec<Product> {
    rank_products(query, products)
        .into_iter()
        .map(|scored| scored.product)
        .collect()
}
