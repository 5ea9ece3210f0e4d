//! Assertions over the `{ badge, content, suggestions }` JSON envelope.

use anyhow::{Context, Result};
use serde_json::Value;

/// Letter ids of a `letter list` result, in output order.
pub fn letter_ids(json: &Value) -> Result<Vec<String>> {
    let letters = json["content"]["letters"]
        .as_array()
        .context("Expected 'content.letters' array in JSON")?;

    letters
        .iter()
        .enumerate()
        .map(|(i, letter)| {
            letter["letter_id"]
                .as_str()
                .map(String::from)
                .with_context(|| format!("Letter {} missing letter_id", i))
        })
        .collect()
}

pub fn assert_letter_ids(json: &Value, expected: &[&str]) -> Result<()> {
    let ids = letter_ids(json)?;
    if ids != expected {
        anyhow::bail!("Expected letters {:?}, got {:?}", expected, ids);
    }
    Ok(())
}

/// Assert the badge level ("success", "info", "warning", "error").
pub fn assert_badge_level(json: &Value, expected: &str) -> Result<()> {
    let level = json["badge"]["level"]
        .as_str()
        .context("Expected 'badge.level' in JSON")?;

    if level != expected {
        anyhow::bail!("Expected badge level {}, got {}", expected, level);
    }
    Ok(())
}

/// Find the suggestion whose command starts with `prefix`.
pub fn suggested_command(json: &Value, prefix: &str) -> Option<String> {
    json["suggestions"]
        .as_array()?
        .iter()
        .filter_map(|s| s["command"].as_str())
        .find(|cmd| cmd.starts_with(prefix))
        .map(String::from)
}
