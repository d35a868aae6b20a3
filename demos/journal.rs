//! Journal Persistence Example
//!
//! The journal records entries; a separate manager writes them to disk.
//!
//! Run with: cargo run --example journal

use sift::{Journal, PersistenceManager};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Journal Persistence Example ===\n");

    let mut journal = Journal::new("Dear diary");
    journal.add_entry("I ate a bug");
    journal.add_entry("I cried today");
    println!("{}\n", journal);

    let path = std::env::temp_dir().join("diary.txt");
    PersistenceManager::save(&journal, &path)?;
    println!("saved {} entries to {}", journal.len(), path.display());

    // Saving somewhere unwritable surfaces a typed error
    let bad = path.join("not-a-directory").join("diary.txt");
    match PersistenceManager::save(&journal, &bad) {
        Ok(()) => println!("unexpectedly saved to {}", bad.display()),
        Err(err) => println!("error: {}", err),
    }

    Ok(())
}
