use serde::{Deserialize, Serialize};

/// A user's medical history profile. Loaded and saved wholesale; every field
/// is optional and blank fields are omitted on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct MedicalHistory {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medications: Option<String>,
}

impl MedicalHistory {
    /// Compose a first-person summary suitable as a chat message, e.g.
    /// "I have the following conditions: asthma. I'm located in Denver.
    /// I'm 34 years old. My gender is female."
    ///
    /// Returns `None` when the profile has nothing to say (all fields blank;
    /// an age of zero counts as blank).
    pub fn summary_message(&self) -> Option<String> {
        fn present(field: &Option<String>) -> Option<&str> {
            field.as_deref().filter(|s| !s.trim().is_empty())
        }

        let mut parts = Vec::new();
        if let Some(conditions) = present(&self.conditions) {
            parts.push(format!("I have the following conditions: {}", conditions));
        }
        if let Some(location) = present(&self.location) {
            parts.push(format!("I'm located in {}", location));
        }
        if let Some(age) = self.age.filter(|a| *a > 0) {
            parts.push(format!("I'm {} years old", age));
        }
        if let Some(gender) = present(&self.gender) {
            parts.push(format!("My gender is {}", gender));
        }

        if parts.is_empty() {
            None
        } else {
            Some(format!("{}.", parts.join(". ")))
        }
    }
}

/// Read/write response for the medical-history endpoints. Reads return the
/// stored profile in `data`; writes echo `success` plus an optional `error`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct MedicalHistoryResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<MedicalHistory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_history() -> MedicalHistory {
        MedicalHistory {
            age: Some(34),
            gender: Some("female".to_string()),
            location: Some("Denver".to_string()),
            conditions: Some("asthma, hypertension".to_string()),
            medications: Some("albuterol".to_string()),
        }
    }

    #[test]
    fn summary_orders_parts_conditions_location_age_gender() {
        let message = full_history().summary_message().unwrap();
        assert_eq!(
            message,
            "I have the following conditions: asthma, hypertension. \
             I'm located in Denver. I'm 34 years old. My gender is female."
        );
    }

    #[test]
    fn summary_skips_blank_and_zero_fields() {
        let history = MedicalHistory {
            age: Some(0),
            gender: Some("  ".to_string()),
            location: None,
            conditions: Some("asthma".to_string()),
            medications: None,
        };
        assert_eq!(
            history.summary_message().unwrap(),
            "I have the following conditions: asthma."
        );
    }

    #[test]
    fn summary_of_empty_profile_is_none() {
        assert_eq!(MedicalHistory::default().summary_message(), None);
    }

    #[test]
    fn blank_fields_are_omitted_on_the_wire() {
        let history = MedicalHistory {
            age: Some(34),
            ..Default::default()
        };
        let json = serde_json::to_string(&history).unwrap();
        assert_eq!(json, r#"{"age":34}"#);
    }
}
