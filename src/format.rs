//! Brazilian phone display formatting
//!
//! Two formatters with different contracts: the live input mask, which
//! renders whatever digits have been typed so far, and the strict
//! formatter, which only touches complete 11-digit numbers.

use crate::validators::digits_only;

/// Live input mask for the WhatsApp field.
///
/// Keeps digits only, then renders them progressively as
/// `(DD) DDDDD-DDDD` while the user types: the area code is wrapped
/// once a third digit arrives, and the hyphen appears after the fifth
/// local digit. One or two digits are left as typed.
///
/// The returned string is what the input should display; feeding it
/// back in is a no-op, so the mask can be reapplied on every
/// keystroke.
///
/// # Examples
///
/// ```
/// use leadform::format_phone_input;
///
/// assert_eq!(format_phone_input("11"), "11");
/// assert_eq!(format_phone_input("119"), "(11) 9");
/// assert_eq!(format_phone_input("1199999"), "(11) 99999");
/// assert_eq!(format_phone_input("11999998888"), "(11) 99999-8888");
/// assert_eq!(format_phone_input("(11) 99999-8888"), "(11) 99999-8888");
/// ```
pub fn format_phone_input(raw: &str) -> String {
	let digits = digits_only(raw);
	if digits.len() <= 2 {
		return digits;
	}

	let (area, local) = digits.split_at(2);
	let mut out = String::with_capacity(digits.len() + 4);
	out.push('(');
	out.push_str(area);
	out.push_str(") ");
	if local.len() <= 5 {
		out.push_str(local);
	} else {
		let (prefix, suffix) = local.split_at(5);
		out.push_str(prefix);
		out.push('-');
		out.push_str(suffix);
	}
	out
}

/// Strict formatter for complete Brazilian mobile numbers.
///
/// Exactly 11 digits (after stripping punctuation) are rendered as
/// `(DD) DDDDD-DDDD`; anything else is returned unchanged.
///
/// # Examples
///
/// ```
/// use leadform::format_phone;
///
/// assert_eq!(format_phone("11999998888"), "(11) 99999-8888");
/// assert_eq!(format_phone("1133334444"), "1133334444");
/// assert_eq!(format_phone("not a phone"), "not a phone");
/// ```
pub fn format_phone(raw: &str) -> String {
	let digits = digits_only(raw);
	if digits.len() != 11 {
		return raw.to_string();
	}
	format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..])
}
