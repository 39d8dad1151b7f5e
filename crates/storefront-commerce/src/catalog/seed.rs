//! Bundled demo products.

use super::Product;
use crate::money::Money;

pub(super) fn demo_products() -> Vec<Product> {
    vec![
        Product::new("1", "Wireless Headphones", Money::usd(9999), "SoundWave", "Electronics")
            .with_description("Over-ear headphones with 30 hours of battery life.")
            .with_image("/images/headphones.jpg")
            .on_sale(Money::usd(12999))
            .with_rating(4.5, 128),
        Product::new("2", "Smart Watch", Money::usd(19999), "TechTime", "Electronics")
            .with_description("Fitness tracking, notifications and a week of battery.")
            .with_image("/images/smartwatch.jpg")
            .with_rating(4.2, 86),
        Product::new("3", "Running Shoes", Money::usd(7999), "Stride", "Footwear")
            .with_description("Lightweight trainers with a responsive foam sole.")
            .with_image("/images/running-shoes.jpg")
            .on_sale(Money::usd(9999))
            .with_rating(4.7, 203),
        Product::new("4", "Leather Backpack", Money::usd(12900), "Nomad", "Accessories")
            .with_description("Full-grain leather with a padded laptop sleeve.")
            .with_image("/images/backpack.jpg")
            .out_of_stock()
            .with_rating(4.8, 54),
        Product::new("5", "Bluetooth Speaker", Money::usd(4999), "SoundWave", "Electronics")
            .with_description("Water-resistant speaker with 12 hours of playback.")
            .with_image("/images/speaker.jpg")
            .with_rating(4.0, 311),
        Product::new("6", "Trail Boots", Money::usd(14999), "Stride", "Footwear")
            .with_description("Waterproof hiking boots with ankle support.")
            .with_image("/images/trail-boots.jpg")
            .out_of_stock()
            .with_rating(4.4, 77),
        Product::new("7", "Sunglasses", Money::usd(5900), "Nomad", "Accessories")
            .with_description("Polarised lenses in a recycled acetate frame.")
            .with_image("/images/sunglasses.jpg")
            .on_sale(Money::usd(7900))
            .with_rating(3.9, 41),
        Product::new("8", "Mechanical Keyboard", Money::usd(8999), "TechTime", "Electronics")
            .with_description("Hot-swappable switches and a compact 75% layout.")
            .with_image("/images/keyboard.jpg")
            .with_rating(4.6, 159),
        Product::new("9", "Canvas Sneakers", Money::usd(3999), "Stride", "Footwear")
            .with_description("Everyday low-tops in organic cotton canvas.")
            .with_image("/images/sneakers.jpg")
            .with_rating(4.1, 95),
        Product::new("10", "Travel Wallet", Money::usd(2999), "Nomad", "Accessories")
            .with_description("Slim RFID-blocking wallet with passport slot.")
            .with_image("/images/wallet.jpg")
            .with_rating(4.3, 62),
    ]
}
