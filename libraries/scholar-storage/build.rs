//! Build script for scholar-storage.
//!
//! `sqlx::migrate!` embeds the SQL files at compile time, so any edit under
//! `migrations/` has to trigger a rebuild.

fn main() {
    println!("cargo:rerun-if-changed=migrations");
}
