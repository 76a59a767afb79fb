//! Trial records, search results, and saved-trial bookmarks.
//!
//! The nested protocol-section shape mirrors the public trials registry
//! schema. The backend owns it; the client treats every field as optional
//! and renders whatever is present.

use serde::{Deserialize, Serialize};

use crate::utils::truncate_text;

/// Recruitment status filter for trial search. `All` is the UI-only
/// "no filter" value and is never sent on the wire.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecruitmentStatus {
    #[default]
    All,
    Recruiting,
    NotYetRecruiting,
    EnrollingByInvitation,
}

impl RecruitmentStatus {
    /// All selectable filter values, in display order.
    pub fn all() -> [RecruitmentStatus; 4] {
        [
            RecruitmentStatus::All,
            RecruitmentStatus::Recruiting,
            RecruitmentStatus::NotYetRecruiting,
            RecruitmentStatus::EnrollingByInvitation,
        ]
    }

    /// Human-readable label for dropdowns.
    pub fn label(self) -> &'static str {
        match self {
            RecruitmentStatus::All => "All",
            RecruitmentStatus::Recruiting => "Recruiting",
            RecruitmentStatus::NotYetRecruiting => "Not Yet Recruiting",
            RecruitmentStatus::EnrollingByInvitation => "Enrolling by Invitation",
        }
    }

    /// Wire value for the `status` query parameter. `None` for [`Self::All`],
    /// which is omitted rather than sent literally.
    pub fn as_param(self) -> Option<&'static str> {
        match self {
            RecruitmentStatus::All => None,
            RecruitmentStatus::Recruiting => Some("RECRUITING"),
            RecruitmentStatus::NotYetRecruiting => Some("NOT_YET_RECRUITING"),
            RecruitmentStatus::EnrollingByInvitation => Some("ENROLLING_BY_INVITATION"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct IdentificationModule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nct_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brief_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub official_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<Organization>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DateStruct {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub date_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct StatusModule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_verified_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_known_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date_struct: Option<DateStruct>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_date_struct: Option<DateStruct>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DescriptionModule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brief_summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detailed_description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ConditionsModule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub enrollment_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DesignModule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub study_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phases: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrollment_info: Option<EnrollmentInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Intervention {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub intervention_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ArmsInterventionsModule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interventions: Option<Vec<Intervention>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityModule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eligibility_criteria: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub healthy_volunteers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_age: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_age: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub std_ages: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CentralContact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct GeoPoint {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TrialLocation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facility: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo_point: Option<GeoPoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ContactsLocationsModule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub central_contacts: Option<Vec<CentralContact>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<TrialLocation>>,
}

/// One trial's full protocol record, straight from the registry schema.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProtocolSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identification_module: Option<IdentificationModule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_module: Option<StatusModule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_module: Option<DescriptionModule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions_module: Option<ConditionsModule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub design_module: Option<DesignModule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arms_interventions_module: Option<ArmsInterventionsModule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eligibility_module: Option<EligibilityModule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contacts_locations_module: Option<ContactsLocationsModule>,
}

impl ProtocolSection {
    pub fn nct_id(&self) -> Option<&str> {
        self.identification_module.as_ref()?.nct_id.as_deref()
    }

    /// Brief title, falling back to the official title.
    pub fn title(&self) -> Option<&str> {
        let ident = self.identification_module.as_ref()?;
        ident.brief_title.as_deref().or(ident.official_title.as_deref())
    }

    pub fn overall_status(&self) -> Option<&str> {
        self.status_module.as_ref()?.overall_status.as_deref()
    }

    pub fn brief_summary(&self) -> Option<&str> {
        self.description_module.as_ref()?.brief_summary.as_deref()
    }

    pub fn phases(&self) -> &[String] {
        self.design_module
            .as_ref()
            .and_then(|d| d.phases.as_deref())
            .unwrap_or_default()
    }

    pub fn conditions(&self) -> &[String] {
        self.conditions_module
            .as_ref()
            .and_then(|c| c.conditions.as_deref())
            .unwrap_or_default()
    }
}

/// One search hit. The registry wraps each record in a `protocolSection`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Study {
    #[serde(default)]
    pub protocol_section: ProtocolSection,
}

/// Response for `GET /api/trials/search`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TrialsSearchResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub studies: Option<Vec<Study>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cached: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Response for `GET /api/trials/{nctId}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TrialDetailsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol_section: Option<ProtocolSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cached: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Denormalized display fields stored alongside a bookmark so the saved list
/// renders without refetching each protocol record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SavedTrialData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl SavedTrialData {
    /// Snapshot the display fields of a protocol record, truncating the
    /// summary to a list-friendly length.
    pub fn from_protocol(protocol: &ProtocolSection) -> Self {
        SavedTrialData {
            title: protocol.title().map(str::to_string),
            status: protocol.overall_status().map(str::to_string),
            summary: protocol
                .brief_summary()
                .map(|s| truncate_text(s, 200)),
        }
    }
}

/// A user's bookmark of a trial. The backend is the source of truth.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SavedTrial {
    pub nct_id: String,
    #[serde(default)]
    pub trial_data: SavedTrialData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<String>,
}

/// Request body for `POST /api/saved-trials`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SaveTrialRequest {
    pub nct_id: String,
    pub trial_data: SavedTrialData,
}

/// Response for saving or removing a bookmark.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SaveTrialResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_params_omit_the_all_filter() {
        assert_eq!(RecruitmentStatus::All.as_param(), None);
        assert_eq!(
            RecruitmentStatus::NotYetRecruiting.as_param(),
            Some("NOT_YET_RECRUITING")
        );
    }

    #[test]
    fn status_round_trips_through_wire_names() {
        let json = serde_json::to_string(&RecruitmentStatus::EnrollingByInvitation).unwrap();
        assert_eq!(json, r#""ENROLLING_BY_INVITATION""#);
        let back: RecruitmentStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, RecruitmentStatus::EnrollingByInvitation);
    }

    #[test]
    fn study_decodes_registry_shape() {
        let json = r#"{
            "protocolSection": {
                "identificationModule": {"nctId": "NCT01234567", "briefTitle": "A Study"},
                "statusModule": {"overallStatus": "RECRUITING"},
                "designModule": {"studyType": "INTERVENTIONAL", "phases": ["PHASE2"]}
            }
        }"#;
        let study: Study = serde_json::from_str(json).unwrap();
        let protocol = &study.protocol_section;
        assert_eq!(protocol.nct_id(), Some("NCT01234567"));
        assert_eq!(protocol.title(), Some("A Study"));
        assert_eq!(protocol.overall_status(), Some("RECRUITING"));
        assert_eq!(protocol.phases(), ["PHASE2".to_string()]);
    }

    #[test]
    fn title_falls_back_to_official_title() {
        let protocol = ProtocolSection {
            identification_module: Some(IdentificationModule {
                official_title: Some("Official Name".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(protocol.title(), Some("Official Name"));
    }

    #[test]
    fn search_response_decodes_error_envelope() {
        let resp: TrialsSearchResponse =
            serde_json::from_str(r#"{"error":"upstream unavailable"}"#).unwrap();
        assert!(resp.studies.is_none());
        assert_eq!(resp.error.as_deref(), Some("upstream unavailable"));
    }

    #[test]
    fn save_request_serializes_camel_case() {
        let request = SaveTrialRequest {
            nct_id: "NCT01234567".to_string(),
            trial_data: SavedTrialData {
                title: Some("A Study".to_string()),
                status: None,
                summary: None,
            },
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"nctId":"NCT01234567","trialData":{"title":"A Study"}}"#);
    }

    #[test]
    fn snapshot_truncates_long_summaries() {
        let protocol = ProtocolSection {
            description_module: Some(DescriptionModule {
                brief_summary: Some("x".repeat(500)),
                detailed_description: None,
            }),
            ..Default::default()
        };
        let data = SavedTrialData::from_protocol(&protocol);
        assert_eq!(data.summary.unwrap().chars().count(), 200 + 3);
    }
}
