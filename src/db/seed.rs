//! Fixed demo catalog inserted into an empty `products` table.

use crate::models::NewProduct;

fn product(
    name: &str,
    description: &str,
    category: &str,
    price: f64,
    image_url: &str,
    features: &[&str],
) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        price,
        image_url: image_url.to_string(),
        features: features.iter().map(|f| f.to_string()).collect(),
    }
}

pub fn sample_products() -> Vec<NewProduct> {
    vec![
        product(
            "Nike Pro Sport T-Shirt",
            "Performance t-shirt made from breathable Dri-FIT fabric. Perfect for sports and athletic activities.",
            "Clothing > T-Shirts",
            29.99,
            "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?w=400",
            &["Breathable", "Moisture-wicking", "Athletic fit", "Polyester blend"],
        ),
        product(
            "Adidas Running Shorts",
            "Comfortable running shorts with moisture-wicking fabric and built-in brief. Ideal for jogging and workouts.",
            "Clothing > Shorts",
            34.99,
            "https://teamexpress.com/cdn/shop/files/hs7692_6.jpg?v=1754078361&width=1200",
            &["Lightweight", "Quick-dry", "Pocket included", "Elastic waistband"],
        ),
        product(
            "Professional Training Shoes",
            "Versatile training shoes for gym workouts and cross-training. Features responsive cushioning.",
            "Footwear > Athletic Shoes",
            89.99,
            "https://images.unsplash.com/photo-1542291026-7eec264c27ff?w=400",
            &["Cushioned", "Durable", "Non-slip sole", "Breathable"],
        ),
        product(
            "Gym Gloves with Wrist Support",
            "Weightlifting gloves with padded palms and adjustable wrist straps. Protect your hands during workouts.",
            "Accessories > Gym Equipment",
            24.99,
            "https://images.unsplash.com/photo-1581009146145-b5ef050c2e1e?w=400",
            &["Padded", "Wrist support", "Breathable", "Machine washable"],
        ),
        product(
            "Yoga Mat - Premium Edition",
            "Extra thick yoga mat with non-slip surface. Perfect for yoga, pilates, and floor exercises.",
            "Accessories > Yoga",
            39.99,
            "https://images.unsplash.com/photo-1601925260368-ae2f83cf8b7f?w=400",
            &["Non-slip", "Extra thick", "Portable", "Easy to clean"],
        ),
        product(
            "Protein Shaker Bottle",
            "BPA-free plastic shaker bottle with mixing ball. Perfect for protein shakes and supplements.",
            "Accessories > Supplements",
            12.99,
            "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?w=400",
            &["BPA-free", "Leak-proof", "Measurement lines", "Dishwasher safe"],
        ),
        product(
            "Wireless Bluetooth Earbuds",
            "Sweat-proof wireless earbuds with noise cancellation. Perfect for workouts and running.",
            "Electronics > Audio",
            49.99,
            "https://images.unsplash.com/photo-1606225456115-9b4f94c8c4a6?w=400",
            &["Noise cancellation", "Sweat-proof", "8-hour battery", "Bluetooth 5.0"],
        ),
        product(
            "Premium Sports Watch",
            "Fitness tracker with heart rate monitor, GPS, and 7-day battery life. Tracks steps, calories, and sleep.",
            "Electronics > Wearables",
            149.99,
            "https://images.unsplash.com/photo-1544117519-31a4b719223d?w=400",
            &["Heart rate monitor", "GPS", "Waterproof", "Smart notifications"],
        ),
    ]
}
