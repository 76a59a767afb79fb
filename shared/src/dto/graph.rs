//! Graph-based matching outputs: smart-match results, related trials,
//! personalized recommendations, and the condition taxonomy. All of these
//! are computed backend-side; the client only displays them.

use serde::{Deserialize, Serialize};

/// Structured matching criteria for `POST /api/trials/smart-match`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SmartMatchRequest {
    pub conditions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_distance: Option<f64>,
}

/// One scored match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    #[serde(default)]
    pub nct_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub phase: Vec<String>,
    #[serde(default)]
    pub match_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SmartMatchResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub matches: Vec<MatchResult>,
    #[serde(default)]
    pub total_matches: u64,
    #[serde(default)]
    pub method: String,
}

/// A trial related to another through shared graph relationships.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RelatedTrial {
    #[serde(default)]
    pub nct_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub phase: Vec<String>,
    #[serde(default)]
    pub shared_conditions: Vec<String>,
    #[serde(default)]
    pub shared_locations: Vec<String>,
    #[serde(default)]
    pub relationship_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RelatedTrialsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub nct_id: String,
    #[serde(default)]
    pub related_trials: Vec<RelatedTrial>,
    #[serde(default)]
    pub total_found: u64,
}

/// A personalized suggestion derived from the user's stored history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    #[serde(default)]
    pub nct_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub phase: Vec<String>,
    #[serde(default)]
    pub matching_conditions: Vec<String>,
    #[serde(default)]
    pub match_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
    #[serde(default)]
    pub total_found: u64,
}

/// Parent/child placement of one condition in the taxonomy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ConditionHierarchy {
    #[serde(default)]
    pub condition: String,
    #[serde(default)]
    pub parents: Vec<String>,
    #[serde(default)]
    pub children: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ConditionHierarchyResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub hierarchy: ConditionHierarchy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smart_match_request_omits_unset_criteria() {
        let request = SmartMatchRequest {
            conditions: vec!["asthma".to_string()],
            location: Some("Denver".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"conditions":["asthma"],"location":"Denver"}"#);
    }

    #[test]
    fn match_result_decodes_camel_case_scores() {
        let result: MatchResult = serde_json::from_str(
            r#"{"nctId":"NCT00000001","title":"T","status":"RECRUITING","phase":["PHASE3"],"matchScore":0.92}"#,
        )
        .unwrap();
        assert_eq!(result.nct_id, "NCT00000001");
        assert!((result.match_score - 0.92).abs() < f64::EPSILON);
    }

    #[test]
    fn related_trials_response_defaults_missing_collections() {
        let resp: RelatedTrialsResponse =
            serde_json::from_str(r#"{"success":true,"nctId":"NCT00000001"}"#).unwrap();
        assert!(resp.related_trials.is_empty());
        assert_eq!(resp.total_found, 0);
    }
}
