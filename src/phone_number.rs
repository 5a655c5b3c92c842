use regex::Regex;
use std::fmt;
use std::str::FromStr;

lazy_static! {
	// 10-digit NANP number: NPA and NXX may not start with 0 or 1.
	static ref NANP_NUMBER: Regex = Regex::new(r"^[2-9]\d{2}[2-9]\d{2}\d{4}$").unwrap();
}

/// A validated 10-digit North American phone number, as returned by
/// Bandwidth in `FullNumber` elements.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
	pub fn new(number: impl Into<String>) -> Result<Self, InvalidPhoneNumber> {
		let number = number.into();
		if NANP_NUMBER.is_match(&number) {
			Ok(Self(number))
		} else {
			Err(InvalidPhoneNumber(number))
		}
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// The area code (first three digits).
	pub fn npa(&self) -> &str {
		&self.0[..3]
	}

	/// The exchange code (digits four through six).
	pub fn nxx(&self) -> &str {
		&self.0[3..6]
	}
}

impl fmt::Display for PhoneNumber {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl FromStr for PhoneNumber {
	type Err = InvalidPhoneNumber;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::new(s)
	}
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("not a valid NANP phone number: {0:?}")]
pub struct InvalidPhoneNumber(pub String);
