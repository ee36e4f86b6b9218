//! Service directory record types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

/// Maximum number of entries retained per service status history.
pub const STATUS_HISTORY_CAPACITY: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Online,
    Offline,
    Error,
}

impl ServiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceStatus::Online => "online",
            ServiceStatus::Offline => "offline",
            ServiceStatus::Error => "error",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "online" => Some(ServiceStatus::Online),
            "offline" => Some(ServiceStatus::Offline),
            "error" => Some(ServiceStatus::Error),
            _ => None,
        }
    }

    pub const ALL: [ServiceStatus; 3] = [
        ServiceStatus::Online,
        ServiceStatus::Offline,
        ServiceStatus::Error,
    ];
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceCategory {
    Infrastructure,
    Api,
    Frontend,
    Backend,
    Database,
    Monitoring,
    Other,
}

impl ServiceCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceCategory::Infrastructure => "infrastructure",
            ServiceCategory::Api => "api",
            ServiceCategory::Frontend => "frontend",
            ServiceCategory::Backend => "backend",
            ServiceCategory::Database => "database",
            ServiceCategory::Monitoring => "monitoring",
            ServiceCategory::Other => "other",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "infrastructure" => Some(ServiceCategory::Infrastructure),
            "api" => Some(ServiceCategory::Api),
            "frontend" => Some(ServiceCategory::Frontend),
            "backend" => Some(ServiceCategory::Backend),
            "database" => Some(ServiceCategory::Database),
            "monitoring" => Some(ServiceCategory::Monitoring),
            "other" => Some(ServiceCategory::Other),
            _ => None,
        }
    }
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grouping key used by filtering and the dashboard: every service falls
/// into exactly one bucket, services without a category into `Uncategorized`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryBucket {
    Infrastructure,
    Api,
    Frontend,
    Backend,
    Database,
    Monitoring,
    Other,
    Uncategorized,
}

impl CategoryBucket {
    pub const ALL: [CategoryBucket; 8] = [
        CategoryBucket::Infrastructure,
        CategoryBucket::Api,
        CategoryBucket::Frontend,
        CategoryBucket::Backend,
        CategoryBucket::Database,
        CategoryBucket::Monitoring,
        CategoryBucket::Other,
        CategoryBucket::Uncategorized,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryBucket::Infrastructure => "infrastructure",
            CategoryBucket::Api => "api",
            CategoryBucket::Frontend => "frontend",
            CategoryBucket::Backend => "backend",
            CategoryBucket::Database => "database",
            CategoryBucket::Monitoring => "monitoring",
            CategoryBucket::Other => "other",
            CategoryBucket::Uncategorized => "uncategorized",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        if value == "uncategorized" {
            return Some(CategoryBucket::Uncategorized);
        }
        ServiceCategory::parse(value).map(CategoryBucket::from)
    }
}

impl From<ServiceCategory> for CategoryBucket {
    fn from(category: ServiceCategory) -> Self {
        match category {
            ServiceCategory::Infrastructure => CategoryBucket::Infrastructure,
            ServiceCategory::Api => CategoryBucket::Api,
            ServiceCategory::Frontend => CategoryBucket::Frontend,
            ServiceCategory::Backend => CategoryBucket::Backend,
            ServiceCategory::Database => CategoryBucket::Database,
            ServiceCategory::Monitoring => CategoryBucket::Monitoring,
            ServiceCategory::Other => CategoryBucket::Other,
        }
    }
}

impl From<Option<ServiceCategory>> for CategoryBucket {
    fn from(category: Option<ServiceCategory>) -> Self {
        match category {
            Some(category) => CategoryBucket::from(category),
            None => CategoryBucket::Uncategorized,
        }
    }
}

impl fmt::Display for CategoryBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusEntry {
    pub status: ServiceStatus,
    pub timestamp: DateTime<Utc>,
}

/// Fixed-capacity status ring: the newest entry goes to the back, the oldest
/// falls off the front once `STATUS_HISTORY_CAPACITY` is reached.
/// Serializes as a plain JSON array (the wire and column format).
#[derive(Debug, Clone)]
pub struct StatusHistory {
    entries: VecDeque<StatusEntry>,
}

impl StatusHistory {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(STATUS_HISTORY_CAPACITY),
        }
    }

    pub fn push(&mut self, entry: StatusEntry) {
        if self.entries.len() == STATUS_HISTORY_CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn latest(&self) -> Option<&StatusEntry> {
        self.entries.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StatusEntry> {
        self.entries.iter()
    }
}

impl Default for StatusHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<StatusEntry>> for StatusHistory {
    fn from(entries: Vec<StatusEntry>) -> Self {
        let mut history = StatusHistory::new();
        for entry in entries {
            history.push(entry);
        }
        history
    }
}

impl Serialize for StatusHistory {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.entries.iter())
    }
}

impl<'de> Deserialize<'de> for StatusHistory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let entries = Vec::<StatusEntry>::deserialize(deserializer)?;
        Ok(StatusHistory::from(entries))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: ServiceStatus,
    pub main_url: String,
    #[serde(default)]
    pub api_url: Option<String>,
    #[serde(default)]
    pub webhook_url: Option<String>,
    #[serde(default)]
    pub category: Option<ServiceCategory>,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub last_checked: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status_history: StatusHistory,
}

impl Service {
    pub fn bucket(&self) -> CategoryBucket {
        CategoryBucket::from(self.category)
    }
}

/// Fields the caller supplies when registering a service. Everything else
/// (id, status, favorite flag, history) is assigned by the store.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewService {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub main_url: String,
    #[serde(default)]
    pub api_url: Option<String>,
    #[serde(default)]
    pub webhook_url: Option<String>,
    #[serde(default)]
    pub category: Option<ServiceCategory>,
}

/// Partial update: present fields overwrite, absent fields are left as-is.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicePatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub main_url: Option<String>,
    #[serde(default)]
    pub api_url: Option<String>,
    #[serde(default)]
    pub webhook_url: Option<String>,
    #[serde(default)]
    pub category: Option<ServiceCategory>,
    #[serde(default)]
    pub is_favorite: Option<bool>,
    #[serde(default)]
    pub status: Option<ServiceStatus>,
}

impl ServicePatch {
    pub fn apply(&self, service: &mut Service) {
        if let Some(name) = &self.name {
            service.name = name.clone();
        }
        if let Some(description) = &self.description {
            service.description = description.clone();
        }
        if let Some(main_url) = &self.main_url {
            service.main_url = main_url.clone();
        }
        if let Some(api_url) = &self.api_url {
            service.api_url = Some(api_url.clone());
        }
        if let Some(webhook_url) = &self.webhook_url {
            service.webhook_url = Some(webhook_url.clone());
        }
        if let Some(category) = self.category {
            service.category = Some(category);
        }
        if let Some(is_favorite) = self.is_favorite {
            service.is_favorite = is_favorite;
        }
        if let Some(status) = self.status {
            service.status = status;
        }
    }
}
