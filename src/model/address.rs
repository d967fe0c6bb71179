use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A postal address as returned by the facade's address lookup or entered manually.
///
/// Every part is optional because lookup results vary: some addresses carry a building
/// name but no number, some a sub building, some no street at all.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default)]
    pub sub_building_name: Option<String>,
    #[serde(default)]
    pub building_name: Option<String>,
    #[serde(default)]
    pub building_number: Option<String>,
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub locality: Option<String>,
    #[serde(default)]
    pub town: Option<String>,
    #[serde(default)]
    pub county: Option<String>,
    #[serde(default)]
    pub postcode: Option<String>,
}

impl Address {
    /// Non-empty address lines in display order.
    ///
    /// The building number and street share a line ("10 Downing Street") as they would on
    /// an envelope.
    pub fn lines(&self) -> Vec<String> {
        let street_line = match (non_empty(&self.building_number), non_empty(&self.street)) {
            (Some(number), Some(street)) => Some(format!("{} {}", number, street)),
            (Some(number), None) => Some(number.to_string()),
            (None, Some(street)) => Some(street.to_string()),
            (None, None) => None,
        };

        [
            non_empty(&self.sub_building_name).map(str::to_string),
            non_empty(&self.building_name).map(str::to_string),
            street_line,
            non_empty(&self.locality).map(str::to_string),
            non_empty(&self.town).map(str::to_string),
            non_empty(&self.county).map(str::to_string),
            non_empty(&self.postcode).map(str::to_string),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// The address on one line, comma separated, as shown in the address picker.
    pub fn single_line(&self) -> String {
        self.lines().join(", ")
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

/// Response body of the facade's address lookup endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressList {
    #[serde(default)]
    pub addresses: Vec<Address>,
}

/// The UK nation an organisation is registered in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Nation {
    England,
    Scotland,
    Wales,
    NorthernIreland,
}

impl Nation {
    pub const ALL: [Nation; 4] = [
        Nation::England,
        Nation::Scotland,
        Nation::Wales,
        Nation::NorthernIreland,
    ];

    /// Numeric identifier the facade uses for the nation.
    pub fn id(self) -> i32 {
        match self {
            Nation::England => 1,
            Nation::Scotland => 2,
            Nation::Wales => 3,
            Nation::NorthernIreland => 4,
        }
    }

    pub fn from_id(id: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|nation| nation.id() == id)
    }

    /// Form value used by the radio buttons on the nation page.
    pub fn key(self) -> &'static str {
        match self {
            Nation::England => "England",
            Nation::Scotland => "Scotland",
            Nation::Wales => "Wales",
            Nation::NorthernIreland => "NorthernIreland",
        }
    }
}

impl fmt::Display for Nation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Nation::England => "England",
            Nation::Scotland => "Scotland",
            Nation::Wales => "Wales",
            Nation::NorthernIreland => "Northern Ireland",
        };

        f.write_str(name)
    }
}

impl FromStr for Nation {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|nation| nation.key() == value)
            .ok_or(())
    }
}
