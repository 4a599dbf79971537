use std::collections::HashMap;

/// Phone types for lines we are willing to accept.
pub const VALID_PHONE_TYPES: [&str; 3] = ["FIXED_LINE", "MOBILE", "VALID"];

/// Phone types for lines that are cheap to obtain or hide behind, the usual
/// fraud vectors. Must never overlap with [`VALID_PHONE_TYPES`].
pub const INVALID_PHONE_TYPES: [&str; 5] =
	["PREPAID", "VOIP", "INVALID", "PAYPHONE", "RESTRICTED"];

/// Which bucket a phone-type label falls into. Anything the policy table does
/// not recognize is `Unknown`, and unknown means rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneTypeCategory {
	Valid,
	Invalid,
	Unknown,
}

lazy_static! {
	static ref PHONE_TYPE_CATEGORIES: HashMap<&'static str, PhoneTypeCategory> = {
		let mut table = HashMap::new();
		for label in VALID_PHONE_TYPES.iter() {
			table.insert(*label, PhoneTypeCategory::Valid);
		}
		for label in INVALID_PHONE_TYPES.iter() {
			table.insert(*label, PhoneTypeCategory::Invalid);
		}
		table
	};
}

/// Normalizes a raw phone-type label to uppercase and classifies it with a
/// single table lookup.
pub fn categorize_phone_type(label: &str) -> PhoneTypeCategory {
	let normalized = label.to_uppercase();
	*PHONE_TYPE_CATEGORIES
		.get(normalized.as_str())
		.unwrap_or(&PhoneTypeCategory::Unknown)
}
