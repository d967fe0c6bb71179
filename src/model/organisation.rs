use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::address::{Address, Nation};

/// An organisation the signed-in user is connected to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organisation {
    pub id: Uuid,
    pub name: String,
    pub organisation_number: String,
    #[serde(default)]
    pub companies_house_number: Option<String>,
    /// Companies House registered organisations take their details from Companies House
    /// and cannot change them through the portal.
    #[serde(default)]
    pub is_companies_house_company: bool,
    #[serde(default)]
    pub nation_id: Option<i32>,
    #[serde(default)]
    pub address: Address,
}

impl Organisation {
    pub fn nation(&self) -> Option<Nation> {
        self.nation_id.and_then(Nation::from_id)
    }
}
