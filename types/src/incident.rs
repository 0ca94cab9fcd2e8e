use serde::{Deserialize, Serialize};

/// Status flag used by the backend: `1` = active, `0` = inactive.
pub const STATUS_ACTIVE: u8 = 1;

/// A server-owned incident record. The client never mutates one of these
/// directly; edits go through an [`IncidentDraft`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Incident {
    pub id: String,
    pub incident_code: String,
    pub incident_name: String,
    pub incident_status: u8,
}

impl Incident {
    pub fn is_active(&self) -> bool {
        self.incident_status == STATUS_ACTIVE
    }
}

/// Client-side staging copy of the editable fields, shared between the
/// create and edit forms. Doubles as the create request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentDraft {
    pub incident_code: String,
    pub incident_name: String,
    pub incident_status: u8,
}

impl Default for IncidentDraft {
    fn default() -> Self {
        Self {
            incident_code: String::new(),
            incident_name: String::new(),
            incident_status: STATUS_ACTIVE,
        }
    }
}

impl From<&Incident> for IncidentDraft {
    fn from(incident: &Incident) -> Self {
        Self {
            incident_code: incident.incident_code.clone(),
            incident_name: incident.incident_name.clone(),
            incident_status: incident.incident_status,
        }
    }
}

/// Update request body: the retained record id plus the draft fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateIncident {
    pub id: String,
    #[serde(flatten)]
    pub draft: IncidentDraft,
}

/// Delete request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteIncident {
    pub id: String,
}

/// One page of the incident list as the backend returns it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IncidentPage {
    #[serde(default)]
    pub data: Vec<Incident>,
    #[serde(rename = "totalPages", default = "one")]
    pub total_pages: u32,
    #[serde(default)]
    pub total: u64,
}

fn one() -> u32 {
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Incident {
        Incident {
            id: "42".into(),
            incident_code: "INC-042".into(),
            incident_name: "Falta injustificada".into(),
            incident_status: 0,
        }
    }

    #[test]
    fn create_draft_defaults_to_active_and_empty_fields() {
        let draft = IncidentDraft::default();
        assert_eq!(draft.incident_status, STATUS_ACTIVE);
        assert!(draft.incident_code.is_empty());
        assert!(draft.incident_name.is_empty());
    }

    #[test]
    fn edit_draft_seeds_from_selected_record() {
        let incident = sample();
        let draft = IncidentDraft::from(&incident);
        assert_eq!(draft.incident_code, "INC-042");
        assert_eq!(draft.incident_name, "Falta injustificada");
        assert_eq!(draft.incident_status, 0);
    }

    #[test]
    fn update_body_carries_id_and_flattened_fields() {
        let body = UpdateIncident {
            id: "42".into(),
            draft: IncidentDraft::from(&sample()),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "42",
                "incident_code": "INC-042",
                "incident_name": "Falta injustificada",
                "incident_status": 0,
            })
        );
    }

    #[test]
    fn delete_body_is_just_the_id() {
        let json = serde_json::to_value(DeleteIncident { id: "42".into() }).unwrap();
        assert_eq!(json, serde_json::json!({ "id": "42" }));
    }

    #[test]
    fn page_parses_backend_shape() {
        let page: IncidentPage = serde_json::from_str(
            r#"{
                "data": [{
                    "id": "1",
                    "incident_code": "INC-001",
                    "incident_name": "Retardo",
                    "incident_status": 1
                }],
                "totalPages": 3,
                "total": 25
            }"#,
        )
        .unwrap();
        assert_eq!(page.data.len(), 1);
        assert!(page.data[0].is_active());
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total, 25);
    }

    #[test]
    fn page_tolerates_missing_fields() {
        let page: IncidentPage = serde_json::from_str("{}").unwrap();
        assert!(page.data.is_empty());
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.total, 0);
    }
}
