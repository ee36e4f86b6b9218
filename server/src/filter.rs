//! Filter engine for the service list.
//!
//! Pure and order-preserving: the output is always a subsequence of the
//! input. All active criteria must match (AND semantics); nothing besides
//! the documented fields influences the result.

use crate::registry::types::{CategoryBucket, Service, ServiceStatus};

#[derive(Debug, Clone)]
pub struct ServiceFilter {
    /// Case-insensitive substring over name, description and main URL.
    /// Empty matches everything.
    pub text: String,
    pub statuses: Vec<ServiceStatus>,
    pub categories: Vec<CategoryBucket>,
    /// `None` matches both favorites and non-favorites.
    pub favorite: Option<bool>,
}

impl Default for ServiceFilter {
    fn default() -> Self {
        Self {
            text: String::new(),
            statuses: ServiceStatus::ALL.to_vec(),
            categories: CategoryBucket::ALL.to_vec(),
            favorite: None,
        }
    }
}

pub fn filter_services(services: &[Service], filter: &ServiceFilter) -> Vec<Service> {
    let needle = filter.text.to_lowercase();

    services
        .iter()
        .filter(|service| matches_text(service, &needle))
        .filter(|service| filter.statuses.contains(&service.status))
        .filter(|service| filter.categories.contains(&service.bucket()))
        .filter(|service| match filter.favorite {
            Some(wanted) => service.is_favorite == wanted,
            None => true,
        })
        .cloned()
        .collect()
}

fn matches_text(service: &Service, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    service.name.to_lowercase().contains(needle)
        || service.description.to_lowercase().contains(needle)
        || service.main_url.to_lowercase().contains(needle)
}
