//! Default service catalog.
//!
//! Seeds the backing store on first run and serves as the in-memory
//! fallback when the store cannot be read at all.

use chrono::{DateTime, Utc};

use super::types::{Service, ServiceCategory, ServiceStatus, StatusHistory};

#[allow(clippy::too_many_arguments)]
fn seed(
    id: &str,
    name: &str,
    description: &str,
    main_url: &str,
    api_url: Option<&str>,
    webhook_url: Option<&str>,
    category: ServiceCategory,
    is_favorite: bool,
    seeded_at: DateTime<Utc>,
) -> Service {
    Service {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        status: ServiceStatus::Online,
        main_url: main_url.to_string(),
        api_url: api_url.map(str::to_string),
        webhook_url: webhook_url.map(str::to_string),
        category: Some(category),
        is_favorite,
        last_checked: Some(seeded_at),
        status_history: StatusHistory::new(),
    }
}

pub fn default_catalog() -> Vec<Service> {
    use ServiceCategory::*;

    let now = Utc::now();
    vec![
        seed("1", "WOOFED CRM", "Customer Relationship Management System", "https://woofedcrm.aetherlogik.com", None, None, Frontend, true, now),
        seed("2", "BOLT", "Fast and reliable web performance tool", "https://bolt.aetherlogik.com", None, None, Monitoring, false, now),
        seed("3", "YOURLS", "URL shortener service", "https://yourls.aetherlogik.com/admin", None, None, Frontend, false, now),
        seed("4", "DOCUSEAL", "Document signing platform", "https://docuseal.aetherlogik.com", None, None, Frontend, true, now),
        seed("5", "CAL.COM", "Scheduling and calendar management", "https://cal.aetherlogik.com", None, None, Frontend, false, now),
        seed("6", "EVOLUTION API", "API management platform", "https://evoapi.aetherlogik.com/manager", Some("https://evoapi.aetherlogik.com"), None, Api, false, now),
        seed("7", "BOTPRESS", "Conversational AI platform", "https://botpress.aetherlogik.com", None, None, Frontend, false, now),
        seed("8", "DIFY AI", "AI development platform", "https://dify.aetherlogik.com", None, None, Frontend, false, now),
        seed("9", "FLOWISE", "Workflow automation tool", "https://flowise.aetherlogik.com", None, None, Backend, false, now),
        seed("10", "TYPEBOT", "Chatbot builder platform", "https://builder.aetherlogik.com", None, None, Frontend, false, now),
        seed("11", "CHATWOOT", "Customer engagement platform", "https://chatwoot.aetherlogik.com", None, None, Frontend, false, now),
        seed("12", "NOCODB", "No-code database platform", "https://nocodb.aetherlogik.com", None, None, Database, false, now),
        seed("13", "MINIO", "Object storage service", "https://miniofront.aetherlogik.com", Some("https://minioback.aetherlogik.com"), None, Infrastructure, false, now),
        seed("14", "RABBITMQ", "Message broker service", "https://rabbitmq.aetherlogik.com", None, None, Infrastructure, false, now),
        seed("15", "QDRANT", "Vector database for similarity search", "http://qdrant.aetherlogik.com:6333/dashboard", None, None, Database, false, now),
        seed("16", "GRAFANA", "Analytics and monitoring platform", "https://grafana.aetherlogik.com", None, None, Monitoring, true, now),
        seed("17", "N8N", "Workflow automation platform", "https://n8n.aetherlogik.com", None, Some("https://webhook.aetherlogik.com"), Backend, false, now),
        seed("18", "PORTAINER", "Container management platform", "https://portainer.aetherlogik.com", None, None, Infrastructure, false, now),
    ]
}
