pub mod categorize;
pub mod classify;
pub mod items;
pub mod taxonomy;

use super::Context;
use crate::error::AppError;
use crate::store::JsonFileStore;

/// Serialize a value as pretty-printed JSON and print it to stdout.
fn print_json(value: &impl serde::Serialize) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}

/// Open the item store under the configured data directory.
fn open_store(ctx: &Context) -> Result<JsonFileStore, AppError> {
    Ok(JsonFileStore::open(&ctx.data_dir)?)
}
