//! Common test data builders for service records.

use chrono::Utc;

use servicewatch::registry::types::{
    NewService, Service, ServiceCategory, ServiceStatus, StatusEntry, StatusHistory,
};

/// Minimal online service with the given id; name and URL derive from it.
pub fn service(id: &str) -> Service {
    Service {
        id: id.to_string(),
        name: format!("service-{}", id),
        description: String::new(),
        status: ServiceStatus::Online,
        main_url: format!("https://{}.example.test", id),
        api_url: None,
        webhook_url: None,
        category: None,
        is_favorite: false,
        last_checked: None,
        status_history: StatusHistory::new(),
    }
}

/// Service with explicit status, category and favorite flag.
pub fn service_with(
    id: &str,
    status: ServiceStatus,
    category: Option<ServiceCategory>,
    is_favorite: bool,
) -> Service {
    let mut service = service(id);
    service.status = status;
    service.category = category;
    service.is_favorite = is_favorite;
    service
}

/// Registration payload with just the required fields.
pub fn new_service(name: &str, main_url: &str) -> NewService {
    NewService {
        name: name.to_string(),
        description: String::new(),
        main_url: main_url.to_string(),
        api_url: None,
        webhook_url: None,
        category: None,
    }
}

/// Status history entry stamped now.
pub fn history_entry(status: ServiceStatus) -> StatusEntry {
    StatusEntry {
        status,
        timestamp: Utc::now(),
    }
}
