use anyhow::{anyhow, Result};
use practice_booking_bot::config::Config;
use practice_booking_bot::store::connection::StoreManager;
use practice_booking_bot::store::slots::Slot;
use serde::Deserialize;
use std::env;
use std::path::Path;

/// One line of a seed file: `date,time` with a header row.
#[derive(Debug, Deserialize)]
struct SeedRow {
    date: String,
    time: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize basic logging for the provisioning run
    env_logger::init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let command = args.get(1).map(|s| s.as_str()).unwrap_or("migrate");

    match command {
        "migrate" | "up" => run_migrations().await,
        "check" => check_store().await,
        "seed" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: provision seed <slots.csv>");
                std::process::exit(1);
            };
            seed_slots(path).await
        }
        "list" => list_slots().await,
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {command}");
            print_help();
            std::process::exit(1);
        }
    }
}

async fn run_migrations() -> Result<()> {
    println!("🏀 Practice Booking Bot - Slot Provisioning Tool");
    println!("================================================");

    let store = connect().await?;

    match store.run_migrations().await {
        Ok(_) => {
            println!("✅ Migrations completed successfully!");
            println!("\n🎯 Your booking database is ready!");
        }
        Err(e) => {
            eprintln!("❌ Migration failed: {e}");
            std::process::exit(1);
        }
    }

    Ok(())
}

async fn check_store() -> Result<()> {
    println!("🔍 Checking store connection and schema...");

    let store = connect().await?;

    match check_tables(&store).await {
        Ok(tables) => {
            println!("✅ Store connection successful!");
            println!("📋 Found tables:");
            for table in tables {
                println!("  • {table}");
            }
        }
        Err(e) => {
            println!("⚠️  Store check failed: {e}");
            println!("💡 Try running 'provision migrate' to create the schema");
        }
    }

    Ok(())
}

/// Inserts one free slot row per CSV record. This is the out-of-band
/// provisioning path; the bot itself never creates rows.
async fn seed_slots(path: &str) -> Result<()> {
    println!("🌱 Seeding slots from {path}");

    let store = connect().await?;
    store.run_migrations().await?;

    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| anyhow!("Failed to open {}: {}", path, e))?;

    let mut seeded = 0usize;
    for (index, record) in reader.deserialize::<SeedRow>().enumerate() {
        let row = record.map_err(|e| anyhow!("Bad record on line {}: {}", index + 2, e))?;
        Slot::provision(&store.pool, &row.date, &row.time)
            .await
            .map_err(|e| anyhow!("Rejected record on line {}: {}", index + 2, e))?;
        seeded += 1;
    }

    println!("✅ Seeded {seeded} slots");

    Ok(())
}

async fn list_slots() -> Result<()> {
    let store = connect().await?;

    let slots = Slot::read_all(&store.pool).await?;
    if slots.is_empty() {
        println!("📋 No slots provisioned yet");
        return Ok(());
    }

    println!("📋 {} slots:", slots.len());
    for slot in slots {
        let occupant = if slot.is_free() { "free" } else { slot.player.as_str() };
        println!("  • {} {} [{}]", slot.date, slot.time, occupant);
    }

    Ok(())
}

async fn connect() -> Result<StoreManager> {
    // Load environment configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    println!("📊 Database URL: {}", mask_url(&config.database_url));

    // Ensure data directory exists for SQLite
    if config.database_url.starts_with("sqlite:") {
        let db_path = config.database_url.strip_prefix("sqlite:").unwrap_or(&config.database_url);
        if let Some(parent) = Path::new(db_path).parent() {
            if !parent.exists() {
                println!("📁 Creating directory: {}", parent.display());
                std::fs::create_dir_all(parent)?;
            }
        }
    }

    StoreManager::new(&config.database_url)
        .await
        .map_err(|e| anyhow!("Failed to connect to store: {}", e))
}

async fn check_tables(store: &StoreManager) -> Result<Vec<String>> {
    let tables = sqlx::query_scalar::<_, String>(
        "SELECT name FROM sqlite_master WHERE type='table' ORDER BY name",
    )
    .fetch_all(&store.pool)
    .await?;

    Ok(tables)
}

fn mask_url(url: &str) -> String {
    // Simple URL masking for security (don't show full paths in production)
    if url.starts_with("sqlite:") {
        let path = url.strip_prefix("sqlite:").unwrap_or(url);
        if let Some(filename) = Path::new(path).file_name() {
            format!("sqlite:.../{}", filename.to_string_lossy())
        } else {
            url.to_string()
        }
    } else {
        url.to_string()
    }
}

fn print_help() {
    println!("🏀 Practice Booking Bot - Slot Provisioning Tool");
    println!();
    println!("USAGE:");
    println!("    provision [COMMAND]");
    println!();
    println!("COMMANDS:");
    println!("    migrate, up    Run store migrations (default)");
    println!("    check          Check store connection and schema");
    println!("    seed <file>    Insert free slots from a date,time CSV file");
    println!("    list           Print every slot and its occupant");
    println!("    help           Show this help message");
    println!();
    println!("ENVIRONMENT:");
    println!("    DATABASE_URL   Database connection string (default: sqlite:./data/bookings.db)");
    println!();
    println!("EXAMPLES:");
    println!("    provision                  # Run migrations");
    println!("    provision seed slots.csv   # Provision the week's slots");
    println!("    provision list             # Show the current schedule");
    println!();
}
