use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub name: String,
    pub organisation_id: i64,
    pub image: String,
    pub role_id: i64,
    pub enable_screenshot: i32,
    pub description: String,
    pub role: String,
    pub other_role_ids: Vec<i64>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganisationListData {
    pub organisation_list: Vec<Organization>,
}
