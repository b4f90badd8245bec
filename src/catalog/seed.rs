//! Demo catalog seed data
//!
//! The six products the storefront ships with. Purely illustrative; a real
//! deployment would load its catalog from a persistence backend.

use chrono::Utc;
use rust_decimal::Decimal;

use crate::catalog::product::Product;

/// The demo product list, ids `"1"` through `"6"`
pub fn demo_products() -> Vec<Product> {
    let entries: [(&str, &str, i64, &str, &str, u32, bool); 6] = [
        (
            "Wireless Bluetooth Headphones",
            "High-quality wireless headphones with noise cancellation",
            19999,
            "Electronics",
            "/images/headphones.svg",
            50,
            true,
        ),
        (
            "Smart Fitness Watch",
            "Advanced fitness tracking with heart rate monitoring",
            29999,
            "Wearables",
            "/images/smartwatch.svg",
            30,
            true,
        ),
        (
            "Premium Coffee Maker",
            "Professional-grade coffee maker with programmable settings",
            14999,
            "Appliances",
            "/images/coffee-maker.svg",
            25,
            false,
        ),
        (
            "Wireless Gaming Mouse",
            "Precision gaming mouse with customizable RGB lighting",
            7999,
            "Electronics",
            "/images/gaming-mouse.svg",
            75,
            false,
        ),
        (
            "Bluetooth Speaker",
            "Portable waterproof speaker with deep bass",
            12999,
            "Electronics",
            "/images/bluetooth-speaker.svg",
            40,
            true,
        ),
        (
            "Yoga Mat Premium",
            "Non-slip eco-friendly yoga mat with carrying strap",
            4999,
            "Sports",
            "/images/yoga-mat.svg",
            60,
            false,
        ),
    ];

    entries
        .into_iter()
        .enumerate()
        .map(
            |(i, (name, description, cents, category, image_url, stock, featured))| Product {
                id: (i + 1).to_string(),
                name: name.to_string(),
                description: description.to_string(),
                price: Decimal::new(cents, 2),
                category: category.to_string(),
                image_url: image_url.to_string(),
                stock,
                featured,
                created_at: Utc::now(),
            },
        )
        .collect()
}
