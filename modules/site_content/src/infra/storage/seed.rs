//! Initial content written into an empty document store
//!
//! The seed file is YAML with an optional `home` mapping and one list per
//! collection. List entries use the stored camelCase field names plus `id`.

use crate::contract::{Collection, SiteData};
use crate::domain::service::default_home;
use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

use super::document::{home_from_json, item_from_json};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SeedFile {
    #[serde(default)]
    home: Option<Value>,
    #[serde(default)]
    services: Vec<Value>,
    #[serde(default)]
    portfolio: Vec<Value>,
    #[serde(default)]
    blog: Vec<Value>,
    #[serde(default)]
    contact: Vec<Value>,
}

impl SeedFile {
    fn entries(&mut self, collection: Collection) -> Vec<Value> {
        std::mem::take(match collection {
            Collection::Services => &mut self.services,
            Collection::Portfolio => &mut self.portfolio,
            Collection::Blog => &mut self.blog,
            Collection::Contact => &mut self.contact,
        })
    }
}

/// Seed data without a seed file: the default home document only
pub fn default_seed() -> SiteData {
    SiteData {
        home: default_home(),
        ..Default::default()
    }
}

/// Read seed data from a YAML file
pub fn load_seed(path: &Path) -> Result<SiteData> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read seed file {}", path.display()))?;
    parse_seed(&text).with_context(|| format!("invalid seed file {}", path.display()))
}

/// Parse seed YAML
pub fn parse_seed(text: &str) -> Result<SiteData> {
    let mut file: SeedFile = serde_yaml::from_str(text)?;

    let mut data = SiteData {
        home: match file.home.take() {
            Some(home) => home_from_json(home)?,
            None => default_home(),
        },
        ..Default::default()
    };

    for collection in Collection::ALL {
        for entry in file.entries(collection) {
            let Value::Object(mut fields) = entry else {
                return Err(anyhow!("{} entries must be mappings", collection));
            };
            let id = match fields.remove("id") {
                Some(Value::String(id)) if !id.is_empty() => id,
                _ => return Err(anyhow!("{} entry without an id", collection)),
            };
            let item = item_from_json(&id, Value::Object(fields))?;
            data.items_mut(collection).push(item);
        }
    }

    Ok(data)
}
