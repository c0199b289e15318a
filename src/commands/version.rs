//! Version command implementation

use crate::config::CONFIG_FILE;
use crate::domain::RootCategory;
use crate::error::Result;
use crate::library::table::LIBRARY_TABLE_FILE;

/// Run version command
pub fn run() -> Result<()> {
    println!("rootsync {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    println!("  Profile: {}", build_profile());
    println!();
    println!("Defaults:");
    println!("  Config file: {CONFIG_FILE}");
    println!("  Library table: {LIBRARY_TABLE_FILE}");
    let categories: Vec<&str> = RootCategory::ALL.iter().map(|c| c.as_str()).collect();
    println!("  Root categories: {}", categories.join(", "));

    Ok(())
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
