/// Formats a number the way `Number.toLocaleString("en-US")` does:
/// comma-grouped integer part, up to three fraction digits, no trailing zeros.
pub fn group_thousands(value: f64) -> String {
	if !value.is_finite() {
		return value.to_string();
	}

	let rounded = (value * 1000.0).round() / 1000.0;
	let fixed = format!("{:.3}", rounded.abs());
	let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

	let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
	if rounded < 0.0 {
		out.push('-');
	}
	for (i, digit) in int_part.chars().enumerate() {
		if i > 0 && (int_part.len() - i) % 3 == 0 {
			out.push(',');
		}
		out.push(digit);
	}

	let frac = frac_part.trim_end_matches('0');
	if !frac.is_empty() {
		out.push('.');
		out.push_str(frac);
	}
	out
}

pub fn price(value: f64) -> String {
	format!("${}", group_thousands(value))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn groups_like_en_us_locale() {
		assert_eq!(group_thousands(0.0), "0");
		assert_eq!(group_thousands(999.0), "999");
		assert_eq!(group_thousands(1000.0), "1,000");
		assert_eq!(group_thousands(18000.0), "18,000");
		assert_eq!(group_thousands(3_600_000.0), "3,600,000");
		assert_eq!(group_thousands(1234.5), "1,234.5");
		assert_eq!(group_thousands(1234.56789), "1,234.568");
		assert_eq!(group_thousands(-45000.0), "-45,000");
	}

	#[test]
	fn price_has_leading_dollar() {
		assert_eq!(price(110000.0), "$110,000");
	}
}
