//! # Seed Data Generator
//!
//! Populates the database with sample products for development.
//!
//! ## Usage
//! ```bash
//! # Generate 200 products (default)
//! cargo run -p stockroom-db --bin seed
//!
//! # Generate custom amount
//! cargo run -p stockroom-db --bin seed -- --count 1000
//!
//! # Specify database path
//! cargo run -p stockroom-db --bin seed -- --db ./data/stockroom.db
//! ```
//!
//! Every product goes through `ProductGateway::save`, the same path the
//! CreateProduct use case takes. Names are `{item} {size}`, prices fall
//! between 0.99 and 24.98, and stock between 0 and 100.

use std::env;
use std::time::Instant;

use stockroom_core::{Product, ProductGateway};
use stockroom_db::{Database, DbConfig};
use tracing_subscriber::EnvFilter;

const DEFAULT_COUNT: usize = 200;
const DEFAULT_DB_PATH: &str = "./stockroom.db";

/// Base item names.
const ITEMS: &[&str] = &[
    "Hex Bolt",
    "Wood Screw",
    "Washer",
    "Hinge",
    "Cable Tie",
    "Wall Anchor",
    "Drill Bit",
    "Sandpaper",
    "Masking Tape",
    "Paint Brush",
    "Pipe Clamp",
    "Shelf Bracket",
    "Door Handle",
    "Padlock",
    "Extension Cord",
    "Light Bulb",
    "Fuse",
    "Glue Stick",
    "Work Gloves",
    "Tape Measure",
];

/// Size variants with a price addon in cents.
const SIZES: &[(&str, u32)] = &[
    ("S", 0),
    ("M", 150),
    ("L", 300),
    ("XL", 500),
    ("10-Pack", 800),
    ("50-Pack", 1500),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Library logs (migrations, pool) follow STOCKROOM_LOG, quiet by default
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("STOCKROOM_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    let mut count = DEFAULT_COUNT;
    let mut db_path = String::from(DEFAULT_DB_PATH);

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(DEFAULT_COUNT);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Stockroom Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of products to generate (default: {DEFAULT_COUNT})");
                println!("  -d, --db <PATH>    Database file path (default: {DEFAULT_DB_PATH})");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Stockroom Seed Data Generator");
    println!("================================");
    println!("Database: {}", db_path);
    println!("Products: {}", count);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;
    let repo = db.products();

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let existing = repo.count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    println!();
    println!("Generating products...");

    let start = Instant::now();
    let mut generated = 0;

    for seed in 0..count {
        let product = generate_product(seed);

        if let Err(e) = repo.save(&product).await {
            eprintln!("Failed to save {}: {}", product.name(), e);
            continue;
        }

        generated += 1;
        if generated % 100 == 0 {
            println!("  Generated {} products...", generated);
        }
    }

    let elapsed = start.elapsed();
    println!();
    println!("✓ Generated {} products in {:?}", generated, elapsed);
    println!("  Stored total: {}", repo.count().await?);

    db.close().await;
    println!();
    println!("✓ Seed complete!");

    Ok(())
}

/// Builds one sample product with stock already on the shelf.
fn generate_product(seed: usize) -> Product {
    let item = ITEMS[seed % ITEMS.len()];
    let (size, addon_cents) = SIZES[(seed / ITEMS.len()) % SIZES.len()];

    let base_cents = 99 + ((seed * 37) % 900) as u32;
    let price = f64::from(base_cents + addon_cents) / 100.0;

    let mut product = Product::create(format!("{} {}", item, size), price);
    product.increase_quantity((seed % 101) as i64);
    product
}
