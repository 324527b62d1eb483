use crate::config::Config;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Festival registration payload as the external submission API expects
/// it (camelCase JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FestivalSubmission {
    pub name: String,
    pub description: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub contact_email: String,
}

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex should compile")
    })
}

impl FestivalSubmission {
    /// Validate the payload before it is forwarded upstream.
    ///
    /// Errors here are reported inline next to the submission form and
    /// never reach the upstream API.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            anyhow::bail!("Festival name must not be empty");
        }
        if self.contact_email.trim().is_empty() {
            anyhow::bail!("Contact email must not be empty");
        }
        if !email_regex().is_match(self.contact_email.trim()) {
            anyhow::bail!("Contact email '{}' is not a valid address", self.contact_email);
        }

        let start = NaiveDate::parse_from_str(&self.start_date, "%Y-%m-%d")
            .with_context(|| format!("Invalid start date: '{}'", self.start_date))?;
        let end = NaiveDate::parse_from_str(&self.end_date, "%Y-%m-%d")
            .with_context(|| format!("Invalid end date: '{}'", self.end_date))?;

        if end < start {
            anyhow::bail!("End date {} is before start date {}", end, start);
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct CreateResponse {
    #[serde(default)]
    id: Option<String>,
}

/// Forward a validated festival registration to the submission API.
///
/// Returns the upstream id when the API provides one.
pub async fn submit_festival(
    client: &reqwest::Client,
    config: &Config,
    submission: &FestivalSubmission,
) -> Result<Option<String>> {
    submission.validate()?;

    let url = format!("{}/api/v1/festival/create", config.festival_api_url);

    let response = client
        .post(&url)
        .header("Content-Type", "application/json")
        .json(submission)
        .send()
        .await
        .context("Failed to send request to festival submission API")?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        anyhow::bail!("Festival submission API error ({}): {}", status, body);
    }

    let created: CreateResponse = response
        .json()
        .await
        .context("Failed to parse festival submission response")?;

    Ok(created.id)
}
