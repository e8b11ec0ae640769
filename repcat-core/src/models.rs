use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A catalog entry describing one organizational report
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: String,
    pub name: String,
    pub reporting_domain: String,
    pub process_owner: String,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    pub reporting_frequency: String,
    pub short_description: String,
    #[serde(default)]
    pub detailed_description: String,
    #[serde(default)]
    pub source_tables: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub destination_link: Option<String>,
    #[serde(default)]
    pub access_needed: Option<String>,
    #[serde(default)]
    pub access_instructions: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub last_updated: String,
    #[serde(default)]
    pub business_days: Option<Vec<u8>>,
    #[serde(default)]
    pub team_tags: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// Anything the free-text search can look into
pub trait Searchable {
    fn name(&self) -> &str;
    fn short_description(&self) -> &str;
}

impl Searchable for Report {
    fn name(&self) -> &str {
        &self.name
    }

    fn short_description(&self) -> &str {
        &self.short_description
    }
}

/// Reporting cadence, used for badges on cards and detail pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Annual,
}

impl Frequency {
    pub const ALL: [Frequency; 5] = [
        Frequency::Daily,
        Frequency::Weekly,
        Frequency::Monthly,
        Frequency::Quarterly,
        Frequency::Annual,
    ];

    /// Parse a frequency label, ignoring case
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_lowercase().as_str() {
            "daily" => Some(Frequency::Daily),
            "weekly" => Some(Frequency::Weekly),
            "monthly" => Some(Frequency::Monthly),
            "quarterly" => Some(Frequency::Quarterly),
            "annual" => Some(Frequency::Annual),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Frequency::Daily => "Daily",
            Frequency::Weekly => "Weekly",
            Frequency::Monthly => "Monthly",
            Frequency::Quarterly => "Quarterly",
            Frequency::Annual => "Annual",
        }
    }
}

impl Report {
    pub fn frequency(&self) -> Option<Frequency> {
        Frequency::from_label(&self.reporting_frequency)
    }
}

/// An entry of the process owner contact directory
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ProcessOwner {
    pub eid: String,
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub team: String,
}

/// One entry of a baseline option list: either a bare string or a record with a `name`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum BaselineEntry {
    Plain(String),
    Named {
        name: String,
        #[serde(flatten)]
        extra: HashMap<String, serde_json::Value>,
    },
}

impl BaselineEntry {
    pub fn name(&self) -> &str {
        match self {
            BaselineEntry::Plain(s) => s,
            BaselineEntry::Named { name, .. } => name,
        }
    }

    pub fn is_plain(&self) -> bool {
        matches!(self, BaselineEntry::Plain(_))
    }
}

/// Seed values for filter option lists, keyed by source key
///
/// Values that are neither a list of strings nor a list of named records
/// are kept as raw JSON and treated as an empty baseline.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct BaselineConfig {
    #[serde(flatten)]
    pub sources: HashMap<String, serde_json::Value>,
}

impl BaselineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style helper for plain string lists
    pub fn with_values<I, S>(mut self, key: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<serde_json::Value> = values
            .into_iter()
            .map(|v| serde_json::Value::String(v.into()))
            .collect();
        self.sources
            .insert(key.to_string(), serde_json::Value::Array(values));
        self
    }

    /// Entries listed under a source key; malformed entries are dropped
    pub fn entries(&self, key: &str) -> Vec<BaselineEntry> {
        match self.sources.get(key) {
            Some(serde_json::Value::Array(arr)) => arr
                .iter()
                .filter_map(|v| serde_json::from_value(v.clone()).ok())
                .collect(),
            Some(_) => {
                log::warn!("baseline source '{}' is not a list; ignoring it", key);
                Vec::new()
            }
            None => Vec::new(),
        }
    }

    /// The contact directory stored under `processOwners`
    pub fn process_owners(&self) -> Vec<ProcessOwner> {
        match self.sources.get("processOwners") {
            Some(serde_json::Value::Array(arr)) => arr
                .iter()
                .filter_map(|v| serde_json::from_value(v.clone()).ok())
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// Everything the catalog browser loads at startup
#[derive(Debug, Clone, Default)]
pub struct CatalogData {
    pub reports: Vec<Report>,
    pub config: BaselineConfig,
}

/// Look up a single report by id
pub fn find_report<'a>(reports: &'a [Report], id: &str) -> Option<&'a Report> {
    reports.iter().find(|r| r.id == id)
}
