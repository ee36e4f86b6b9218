//! Dashboard aggregation over the service list.

use serde::Serialize;

use crate::registry::types::{CategoryBucket, Service, ServiceStatus};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusSummary {
    pub status: ServiceStatus,
    pub count: usize,
    pub percent: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub category: CategoryBucket,
    pub count: usize,
    pub online: usize,
    pub online_percent: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total: usize,
    pub statuses: Vec<StatusSummary>,
    pub categories: Vec<CategorySummary>,
}

/// Counts and percentages per status and per category bucket. Every status
/// and every bucket appears in the output, zeroed when empty.
pub fn summarize(services: &[Service]) -> DashboardSummary {
    let total = services.len();

    let statuses = ServiceStatus::ALL
        .iter()
        .map(|&status| {
            let count = services.iter().filter(|s| s.status == status).count();
            StatusSummary {
                status,
                count,
                percent: percent_of(count, total),
            }
        })
        .collect();

    let categories = CategoryBucket::ALL
        .iter()
        .map(|&bucket| {
            let count = services.iter().filter(|s| s.bucket() == bucket).count();
            let online = services
                .iter()
                .filter(|s| s.bucket() == bucket && s.status == ServiceStatus::Online)
                .count();
            CategorySummary {
                category: bucket,
                count,
                online,
                online_percent: percent_of(online, count),
            }
        })
        .collect();

    DashboardSummary {
        total,
        statuses,
        categories,
    }
}

/// 0.0 when the base is empty.
fn percent_of(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        (count as f64 / total as f64) * 100.0
    }
}
