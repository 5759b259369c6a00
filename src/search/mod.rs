//! Search Module
//!
//! Catalog retrieval used by the commerce agent:
//! - Text search - keyword and synonym scoring over product fields
//! - Image search - placeholder matcher returning a fixed catalog slice

pub mod image;
pub mod text;

pub use image::{search_products_by_image_similarity, ImageQuery};
pub use text::{rank_products, score_product, search_products_by_text, ScoredProduct, SYNONYMS};
