use serde::{Deserialize, Serialize};

use super::VendorError;

/// Body of `POST /orders` requests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename = "Order", rename_all = "PascalCase")]
pub struct OrderRequest {
	pub site_id: String,
	#[serde(rename = "NPANXXSearchAndOrderType")]
	pub npa_nxx_search_and_order_type: NpaNxxSearchAndOrderType,
}

impl OrderRequest {
	pub fn new(site_id: impl Into<String>, npa_nxx: impl Into<String>, quantity: u32) -> Self {
		Self {
			site_id: site_id.into(),
			npa_nxx_search_and_order_type: NpaNxxSearchAndOrderType {
				npa_nxx: npa_nxx.into(),
				quantity,
				// Local calling area expansion is never wanted for these orders.
				enable_lca: false,
			},
		}
	}

	pub fn to_xml(&self) -> Result<String, OrderEncodeError> {
		quick_xml::se::to_string(self).map_err(|e| OrderEncodeError(e.to_string()))
	}
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unable to encode order request: {0}")]
pub struct OrderEncodeError(String);

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NpaNxxSearchAndOrderType {
	#[serde(rename = "NpaNxx")]
	pub npa_nxx: String,
	#[serde(rename = "Quantity")]
	pub quantity: u32,
	#[serde(rename = "EnableLCA")]
	pub enable_lca: bool,
}

/// Body of both `POST /orders` (201) and `GET /orders/{id}` (200)
/// responses. Bandwidth reuses the root element across the two.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OrderResponse {
	#[serde(rename = "Order")]
	pub order: Option<OrderDetail>,
	#[serde(rename = "ErrorList")]
	pub error_list: Option<ErrorList>,
	#[serde(rename = "CompletedNumbers")]
	pub completed_numbers: Option<CompletedNumbers>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OrderDetail {
	#[serde(rename = "id")]
	pub id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ErrorList {
	#[serde(rename = "Error")]
	pub errors: Vec<VendorError>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CompletedNumbers {
	#[serde(rename = "TelephoneNumber")]
	pub telephone_numbers: Vec<TelephoneNumber>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TelephoneNumber {
	#[serde(rename = "FullNumber")]
	pub full_number: Option<String>,
}
