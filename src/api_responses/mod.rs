//! Serde mappings for the Bandwidth XML schemas.
//!
//! Every element the interpreter must check for is an `Option` or a `Vec`
//! with `#[serde(default)]`, so absent, singular and repeated elements all
//! deserialize without error; the client decides which absences are fatal.

mod availability;
mod orders;

pub use availability::*;
pub use orders::*;

use quick_xml::events::Event;
use quick_xml::reader::Reader;
use serde::Deserialize;

/// Name of the document's root element, if the body is XML at all.
///
/// quick-xml ignores the root element's name when deserializing into a
/// struct, but the Bandwidth schemas are distinguished by it, so it gets
/// checked separately.
pub fn root_element_name(body: &str) -> Option<String> {
	let mut reader = Reader::from_str(body);
	loop {
		match reader.read_event() {
			Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
				return String::from_utf8(e.name().as_ref().to_vec()).ok();
			}
			Ok(Event::Eof) | Err(_) => return None,
			_ => {}
		}
	}
}

/// `<Error>` element carried by both the availability and order schemas.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct VendorError {
	#[serde(rename = "Code")]
	pub code: Option<String>,
	#[serde(rename = "Description")]
	pub description: Option<String>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_root_element_name() {
		assert_eq!(
			root_element_name("<OrderResponse><Order/></OrderResponse>").as_deref(),
			Some("OrderResponse")
		);
		assert_eq!(root_element_name("<Empty/>").as_deref(), Some("Empty"));
		assert_eq!(
			root_element_name("<?xml version=\"1.0\"?>\n<SearchResultForAvailableNpaNxx/>")
				.as_deref(),
			Some("SearchResultForAvailableNpaNxx")
		);
		assert_eq!(root_element_name("not xml at all"), None);
		assert_eq!(root_element_name(""), None);
	}
}
