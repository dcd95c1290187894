use crate::{ClubError, EvaluationRecord};

const EVALUATIONS_PATH: &str = "/evaluations";

/// Read-only HTTP client for the club-management backend.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetches every stored evaluation. Callers filter by athlete with
    /// [`crate::evaluations_for_athlete`].
    pub async fn fetch_historical_evaluations(
        &self,
    ) -> Result<Vec<EvaluationRecord>, ClubError> {
        let url = format!("{}{}", self.base_url.trim_end_matches('/'), EVALUATIONS_PATH);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ClubError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClubError::Status(status.as_u16()));
        }

        let records: Vec<EvaluationRecord> = response
            .json()
            .await
            .map_err(|e| ClubError::Parse(e.to_string()))?;

        log::debug!("fetched {} evaluation records", records.len());

        Ok(records)
    }
}
