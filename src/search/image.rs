//! Image Product Search
//!
//! No vision model is wired in: an uploaded image is encoded and logged, and
//! the first few catalog entries are returned as its "matches".

use base64::{engine::general_purpose::STANDARD, Engine as _};
use tracing::debug;

use crate::models::{ImageUpload, Product};

/// Image payload prepared for matching
#[derive(Debug, Clone)]
pub struct ImageQuery {
    pub format: String,
    pub base64: String,
}

impl ImageQuery {
    pub fn from_upload(upload: &ImageUpload) -> Self {
        Self {
            format: upload.content_type.clone(),
            base64: STANDARD.encode(&upload.data),
        }
    }
}

pub fn search_products_by_image_similarity(
    image: &ImageQuery,
    products: &[Product],
    count: usize,
) -> Vec<Product> {
    debug!(
        format = %image.format,
        encoded_len = image.base64.len(),
        catalog_size = products.len(),
        "Matching image against catalog"
    );

    products.iter().take(count).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_catalog;

    fn png_upload() -> ImageUpload {
        ImageUpload {
            filename: Some("shoe.png".to_string()),
            content_type: "image/png".to_string(),
            data: bytes::Bytes::from_static(b"\x89PNG\r\n"),
        }
    }

    #[test]
    fn test_image_query_encodes_payload() {
        let query = ImageQuery::from_upload(&png_upload());
        assert_eq!(query.format, "image/png");
        assert_eq!(query.base64, "iVBORw0K");
    }

    #[test]
    fn test_returns_leading_catalog_slice() {
        let catalog = sample_catalog();
        let query = ImageQuery::from_upload(&png_upload());

        let matches = search_products_by_image_similarity(&query, &catalog, 3);
        assert_eq!(matches, catalog[..3].to_vec());
    }

    #[test]
    fn test_small_catalog() {
        let catalog = sample_catalog();
        let query = ImageQuery::from_upload(&png_upload());

        assert_eq!(search_products_by_image_similarity(&query, &catalog[..2], 3).len(), 2);
        assert!(search_products_by_image_similarity(&query, &[], 3).is_empty());
    }
}
