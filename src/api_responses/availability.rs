use serde::Deserialize;

use super::VendorError;

/// Body of `GET /availableNpaNxx` responses, both the 200 and the 400
/// (error-carrying) variants.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SearchResultForAvailableNpaNxx {
	#[serde(rename = "AvailableNpaNxxList")]
	pub available_npa_nxx_list: Option<AvailableNpaNxxList>,
	#[serde(rename = "Error")]
	pub error: Option<VendorError>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AvailableNpaNxxList {
	#[serde(rename = "AvailableNpaNxx")]
	pub entries: Vec<AvailableNpaNxxEntry>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AvailableNpaNxxEntry {
	#[serde(rename = "Nxx")]
	pub nxx: Option<String>,
	#[serde(rename = "Quantity")]
	pub quantity: Option<u32>,
}
