//! Contact form messages

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: Uuid,
    pub nom: String,
    pub email: String,
    pub telephone: Option<String>,
    pub entreprise: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}
