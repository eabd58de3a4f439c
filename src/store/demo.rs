//! Offline store used when no endpoint is configured.

use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::RsvpStore;
use crate::auth::constant_time_compare;
use crate::errors::AppError;
use crate::models::{Attendance, RsvpRecord};

/// Demo store with fixed sample data and simulated latency.
pub struct DemoStore {
    admin_password: Option<String>,
    delay: Duration,
    records: RwLock<Vec<RsvpRecord>>,
}

impl DemoStore {
    pub fn new(admin_password: Option<String>, delay: Duration) -> Self {
        Self {
            admin_password,
            delay,
            records: RwLock::new(sample_records()),
        }
    }

    fn authenticate(&self, password: &str) -> Result<(), AppError> {
        match &self.admin_password {
            Some(expected) if constant_time_compare(password, expected) => Ok(()),
            _ => Err(AppError::InvalidPassword),
        }
    }
}

#[async_trait]
impl RsvpStore for DemoStore {
    async fn submit(&self, record: &RsvpRecord) -> Result<(), AppError> {
        tracing::info!(
            name = record.name.as_deref().unwrap_or("-"),
            attending = record.attending.map(|a| a.as_str()).unwrap_or("-"),
            guests = record.guests.as_deref().unwrap_or("-"),
            "Demo mode - RSVP received"
        );
        tokio::time::sleep(self.delay).await;
        Ok(())
    }

    async fn fetch(&self, password: &str) -> Result<Vec<RsvpRecord>, AppError> {
        self.authenticate(password)?;
        Ok(self.records.read().await.clone())
    }

    async fn delete(&self, password: &str, row_id: &str) -> Result<(), AppError> {
        self.authenticate(password)?;

        let mut records = self.records.write().await;
        let position = records
            .iter()
            .enumerate()
            .position(|(index, record)| record.row_id(index) == row_id)
            .ok_or_else(|| AppError::Endpoint(format!("Row {} not found", row_id)))?;

        records.remove(position);
        tracing::info!("Demo mode - deleted row {}", row_id);
        Ok(())
    }
}

#[allow(clippy::too_many_arguments)]
fn sample(
    id: &str,
    name: &str,
    email: &str,
    attending: Attendance,
    guests: &str,
    dietary: Option<&str>,
    message: Option<&str>,
    timestamp: &str,
) -> RsvpRecord {
    RsvpRecord {
        id: Some(id.to_string()),
        name: Some(name.to_string()),
        email: Some(email.to_string()),
        phone: Some("555-0100".to_string()),
        attending: Some(attending),
        guests: Some(guests.to_string()),
        dietary: dietary.map(String::from),
        message: message.map(String::from),
        timestamp: Some(timestamp.to_string()),
    }
}

fn sample_records() -> Vec<RsvpRecord> {
    vec![
        sample(
            "2",
            "Maria Santos",
            "maria.santos@example.com",
            Attendance::Yes,
            "2",
            Some("Vegetarian"),
            Some("Can't wait to celebrate with you!"),
            "2026-02-14T09:30:00.000Z",
        ),
        sample(
            "3",
            "James Cooper",
            "james.cooper@example.com",
            Attendance::No,
            "1",
            None,
            Some("Sorry we can't make it. Congratulations!"),
            "2026-02-20T18:05:00.000Z",
        ),
        sample(
            "4",
            "Aiko Tanaka",
            "aiko.tanaka@example.com",
            Attendance::Yes,
            "1",
            Some("No shellfish"),
            None,
            "2026-03-02T12:45:00.000Z",
        ),
    ]
}
