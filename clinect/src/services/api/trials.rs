//! # Trial Search and Protocol Record Endpoints
//!
//! Both pass-through: error envelopes come back as decoded bodies with an
//! `error` field and the caller branches.

use shared::{RecruitmentStatus, TrialDetailsResponse, TrialsSearchResponse};

use super::client::{read_json, ApiClient};

/// Search filters. Only present/non-default fields become query parameters;
/// see [`SearchParams::to_query`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchParams {
    pub condition: String,
    pub location: String,
    pub status: RecruitmentStatus,
    pub page_size: Option<u32>,
    pub page_token: Option<String>,
    /// Backend-side caching hint. Forwarded verbatim; the client itself
    /// never caches.
    pub use_cache: Option<bool>,
}

impl SearchParams {
    /// Serialize the filters as query pairs.
    ///
    /// Empty and default fields are omitted entirely: an empty `condition`
    /// or `location` sends nothing, the `All` status is omitted rather than
    /// sent literally, and a zero page size is dropped. `use_cache` is the
    /// exception to the casing convention (snake on the wire) and is sent
    /// whenever set, including `false`.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();

        if !self.condition.is_empty() {
            query.push(("condition", self.condition.clone()));
        }
        if !self.location.is_empty() {
            query.push(("location", self.location.clone()));
        }
        if let Some(status) = self.status.as_param() {
            query.push(("status", status.to_string()));
        }
        if let Some(page_size) = self.page_size.filter(|n| *n > 0) {
            query.push(("pageSize", page_size.to_string()));
        }
        if let Some(token) = self.page_token.as_deref().filter(|t| !t.is_empty()) {
            query.push(("pageToken", token.to_string()));
        }
        if let Some(use_cache) = self.use_cache {
            query.push(("use_cache", use_cache.to_string()));
        }

        query
    }
}

/// Query trials by condition/location/status with pagination.
#[tracing::instrument(skip(client, params), fields(condition = %params.condition, status = ?params.status))]
pub async fn search_trials(
    client: &ApiClient,
    params: SearchParams,
) -> Result<TrialsSearchResponse, String> {
    tracing::debug!("Searching trials");
    let start = std::time::Instant::now();

    let response = client
        .client
        .get(format!("{}/api/trials/search", ApiClient::base_url()))
        .query(&params.to_query())
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Trial search network error");
            format!("Network error: {}", e)
        })?;

    let result: Result<TrialsSearchResponse, String> = read_json(response).await;

    if let Ok(ref body) = result {
        tracing::info!(
            duration_ms = start.elapsed().as_millis(),
            hits = body.studies.as_ref().map(Vec::len).unwrap_or(0),
            total = body.total_count.unwrap_or(0),
            cached = body.cached.unwrap_or(false),
            "Trial search completed"
        );
    }
    result
}

/// Fetch one trial's full protocol record.
#[tracing::instrument(skip(client))]
pub async fn get_trial_details(
    client: &ApiClient,
    nct_id: &str,
) -> Result<TrialDetailsResponse, String> {
    let response = client
        .client
        .get(format!("{}/api/trials/{}", ApiClient::base_url(), nct_id))
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Trial details network error");
            format!("Network error: {}", e)
        })?;

    read_json(response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params_serialize_to_nothing() {
        assert!(SearchParams::default().to_query().is_empty());
    }

    #[test]
    fn condition_with_page_size_emits_exactly_two_pairs() {
        let params = SearchParams {
            condition: "diabetes".to_string(),
            location: String::new(),
            status: RecruitmentStatus::All,
            page_size: Some(20),
            ..Default::default()
        };
        assert_eq!(
            params.to_query(),
            vec![
                ("condition", "diabetes".to_string()),
                ("pageSize", "20".to_string()),
            ]
        );
    }

    #[test]
    fn all_status_is_omitted_but_real_statuses_are_sent() {
        let mut params = SearchParams {
            status: RecruitmentStatus::All,
            ..Default::default()
        };
        assert!(params.to_query().is_empty());

        params.status = RecruitmentStatus::Recruiting;
        assert_eq!(params.to_query(), vec![("status", "RECRUITING".to_string())]);
    }

    #[test]
    fn zero_page_size_is_dropped() {
        let params = SearchParams {
            page_size: Some(0),
            ..Default::default()
        };
        assert!(params.to_query().is_empty());
    }

    #[test]
    fn page_token_rides_along_when_present() {
        let params = SearchParams {
            condition: "asthma".to_string(),
            page_size: Some(20),
            page_token: Some("tok123".to_string()),
            ..Default::default()
        };
        let query = params.to_query();
        assert!(query.contains(&("pageToken", "tok123".to_string())));
    }

    #[test]
    fn cache_hint_is_sent_even_when_false() {
        let params = SearchParams {
            use_cache: Some(false),
            ..Default::default()
        };
        assert_eq!(params.to_query(), vec![("use_cache", "false".to_string())]);
    }
}
