use askama::Template;
use facility_finder::data::FacilityRecord;
use serde_json::Value;

pub struct AttributeView {
    pub key: String,
    pub value: String,
}

/// Display form of a facility record.
pub struct FacilityView {
    pub id: String,
    pub name: String,
    pub attributes: Vec<AttributeView>,
}

impl From<&FacilityRecord> for FacilityView {
    fn from(record: &FacilityRecord) -> Self {
        Self {
            id: record.id.to_string(),
            name: record.name.clone(),
            attributes: record
                .extra
                .iter()
                .map(|(key, value)| AttributeView {
                    key: key.clone(),
                    value: match value {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    },
                })
                .collect(),
        }
    }
}

/// Search page. `results` is `None` until a keyword has been submitted.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub keyword: String,
    pub results: Option<Vec<FacilityView>>,
    pub options: Vec<FacilityView>,
    pub total: usize,
}

#[derive(Template)]
#[template(path = "selected.html")]
pub struct SelectedTemplate {
    pub facility: FacilityView,
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub id: String,
}
