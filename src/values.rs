//! Canonical value codec.
//!
//! P4Runtime mandates the minimum-byte-length big-endian representation for
//! all binary values; deviations may be rejected by the target. A value equal
//! to zero encodes to the empty byte string, never a single zero byte.

use std::net::{Ipv4Addr, Ipv6Addr};

use crate::error::{Error, Result};

/// Widest field this library encodes. The schema rejects wider fields at
/// load time.
pub const MAX_BITWIDTH: u32 = 128;

/// All-ones value of the given bitwidth.
pub fn all_ones(bitwidth: u32) -> u128 {
	if bitwidth >= 128 {
		u128::MAX
	} else {
		(1u128 << bitwidth) - 1
	}
}

/// The mask selecting the upper `prefix_len` bits of a `bitwidth`-wide field.
pub fn prefix_mask(prefix_len: u32, bitwidth: u32) -> u128 {
	all_ones(bitwidth) & !all_ones(bitwidth.saturating_sub(prefix_len))
}

fn check_bitwidth(bitwidth: u32) -> Result<()> {
	if bitwidth == 0 || bitwidth > MAX_BITWIDTH {
		return Err(Error::InvalidValue(format!(
			"unsupported bitwidth {}",
			bitwidth
		)));
	}
	Ok(())
}

/// Encode an unsigned integer as its canonical byte string: big-endian with
/// leading zero bytes stripped, empty iff zero.
pub fn encode_uint(value: u128, bitwidth: u32) -> Result<Vec<u8>> {
	check_bitwidth(bitwidth)?;
	if value > all_ones(bitwidth) {
		return Err(Error::ValueOverflow { value, bitwidth });
	}
	let bytes = value.to_be_bytes();
	let skip = bytes.iter().take_while(|b| **b == 0).count();
	Ok(bytes[skip..].to_vec())
}

/// Decode a canonical byte string. Leading zero bytes are accepted (targets
/// are permitted to zero-pad), but the decoded magnitude must fit the
/// declared bitwidth.
pub fn decode_uint(data: &[u8], bitwidth: u32) -> Result<u128> {
	check_bitwidth(bitwidth)?;
	let stripped = strip_leading_zeros(data);
	if stripped.len() > 16 {
		return Err(Error::ValueOverflow { value: u128::MAX, bitwidth });
	}
	let mut bytes = [0u8; 16];
	bytes[16 - stripped.len()..].copy_from_slice(stripped);
	let value = u128::from_be_bytes(bytes);
	if value > all_ones(bitwidth) {
		return Err(Error::ValueOverflow { value, bitwidth });
	}
	Ok(value)
}

/// The canonical form of an already-encoded byte string.
pub fn strip_leading_zeros(data: &[u8]) -> &[u8] {
	let skip = data.iter().take_while(|b| **b == 0).count();
	&data[skip..]
}

/// Parse a textual MAC address (`aa:bb:cc:dd:ee:ff` or dash separated) and
/// encode it as a 48-bit canonical value.
pub fn encode_mac(text: &str) -> Result<Vec<u8>> {
	let parts: Vec<&str> = if text.contains(':') {
		text.split(':').collect()
	} else {
		text.split('-').collect()
	};
	if parts.len() != 6 {
		return Err(Error::InvalidValue(format!("bad MAC address {:?}", text)));
	}
	let mut value: u128 = 0;
	for part in parts {
		let octet = u8::from_str_radix(part, 16).map_err(|_| {
			Error::InvalidValue(format!("bad MAC address {:?}", text))
		})?;
		value = (value << 8) | octet as u128;
	}
	encode_uint(value, 48)
}

/// Parse a textual IPv4 address and encode it as a 32-bit canonical value.
pub fn encode_ip4(text: &str) -> Result<Vec<u8>> {
	let addr: Ipv4Addr = text.parse().map_err(|_| {
		Error::InvalidValue(format!("bad IPv4 address {:?}", text))
	})?;
	encode_uint(u32::from(addr) as u128, 32)
}

/// Parse a textual IPv6 address and encode it as a 128-bit canonical value.
pub fn encode_ip6(text: &str) -> Result<Vec<u8>> {
	let addr: Ipv6Addr = text.parse().map_err(|_| {
		Error::InvalidValue(format!("bad IPv6 address {:?}", text))
	})?;
	encode_uint(u128::from(addr), 128)
}

/// Serialized form of an LPM match: canonical value plus prefix length.
/// `None` means the field is a wildcard and must be omitted from the entry.
pub fn encode_lpm(
	value: u128,
	prefix_len: u32,
	bitwidth: u32,
) -> Result<Option<(Vec<u8>, i32)>> {
	check_bitwidth(bitwidth)?;
	if prefix_len > bitwidth {
		return Err(Error::InvalidMask(format!(
			"prefix {} exceeds bitwidth {}",
			prefix_len, bitwidth
		)));
	}
	if value & !prefix_mask(prefix_len, bitwidth) != 0 {
		return Err(Error::InvalidMask(format!(
			"value {:#x} has bits outside /{} prefix",
			value, prefix_len
		)));
	}
	if prefix_len == 0 {
		return Ok(None);
	}
	Ok(Some((encode_uint(value, bitwidth)?, prefix_len as i32)))
}

/// Serialized form of a ternary match: canonical value plus canonical mask.
/// `None` means the field is a wildcard and must be omitted from the entry.
pub fn encode_ternary(
	value: u128,
	mask: u128,
	bitwidth: u32,
) -> Result<Option<(Vec<u8>, Vec<u8>)>> {
	check_bitwidth(bitwidth)?;
	if mask > all_ones(bitwidth) {
		return Err(Error::ValueOverflow { value: mask, bitwidth });
	}
	if value & !mask != 0 {
		return Err(Error::InvalidMask(format!(
			"value {:#x} has bits outside mask {:#x}",
			value, mask
		)));
	}
	if mask == 0 {
		return Ok(None);
	}
	Ok(Some((encode_uint(value, bitwidth)?, encode_uint(mask, bitwidth)?)))
}

/// Serialized form of a range match. `None` means the full range, which must
/// be omitted from the entry.
pub fn encode_range(
	low: u128,
	high: u128,
	bitwidth: u32,
) -> Result<Option<(Vec<u8>, Vec<u8>)>> {
	check_bitwidth(bitwidth)?;
	if low > high {
		return Err(Error::InvalidRange { low, high });
	}
	if low == 0 && high == all_ones(bitwidth) {
		return Ok(None);
	}
	Ok(Some((encode_uint(low, bitwidth)?, encode_uint(high, bitwidth)?)))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn uint_roundtrip() {
		for bitwidth in [1u32, 7, 8, 9, 32, 48, 127, 128] {
			for value in [0u128, 1] {
				let bytes = encode_uint(value, bitwidth).unwrap();
				assert_eq!(decode_uint(&bytes, bitwidth).unwrap(), value);
			}
			let max = all_ones(bitwidth);
			let bytes = encode_uint(max, bitwidth).unwrap();
			assert_eq!(decode_uint(&bytes, bitwidth).unwrap(), max);
		}
	}

	#[test]
	fn zero_encodes_empty() {
		assert_eq!(encode_uint(0, 32).unwrap(), Vec::<u8>::new());
		assert_eq!(decode_uint(&[], 32).unwrap(), 0);
		assert_eq!(decode_uint(&[0, 0, 0, 0], 32).unwrap(), 0);
	}

	#[test]
	fn minimal_length() {
		assert_eq!(encode_uint(1, 32).unwrap(), vec![1]);
		assert_eq!(encode_uint(0x1234, 32).unwrap(), vec![0x12, 0x34]);
		assert_eq!(
			encode_uint(0x0a000001, 32).unwrap(),
			vec![0x0a, 0x00, 0x00, 0x01]
		);
	}

	#[test]
	fn overflow_rejected() {
		assert!(matches!(
			encode_uint(256, 8),
			Err(Error::ValueOverflow { value: 256, bitwidth: 8 })
		));
		assert!(matches!(encode_uint(2, 1), Err(Error::ValueOverflow { .. })));
		assert!(encode_uint(1, 1).is_ok());
		// bitwidth 128 accepts everything representable
		assert!(encode_uint(u128::MAX, 128).is_ok());
	}

	#[test]
	fn decode_rejects_oversized() {
		// zero padding is fine, actual magnitude is not
		assert_eq!(decode_uint(&[0, 0, 1], 8).unwrap(), 1);
		assert!(matches!(
			decode_uint(&[1, 0], 8),
			Err(Error::ValueOverflow { .. })
		));
		assert!(decode_uint(&[0u8; 20], 128).is_ok());
		assert!(decode_uint(&[1u8; 17], 128).is_err());
	}

	#[test]
	fn ip_and_mac_text_forms() {
		assert_eq!(
			encode_ip4("10.0.0.1").unwrap(),
			vec![0x0a, 0x00, 0x00, 0x01]
		);
		assert_eq!(encode_ip4("0.0.0.0").unwrap(), Vec::<u8>::new());
		assert_eq!(
			encode_mac("01:02:03:04:05:06").unwrap(),
			vec![1, 2, 3, 4, 5, 6]
		);
		assert_eq!(
			encode_mac("01-02-03-04-05-06").unwrap(),
			vec![1, 2, 3, 4, 5, 6]
		);
		assert_eq!(encode_ip6("::1").unwrap(), vec![1]);
		assert!(encode_ip4("10.0.0.256").is_err());
		assert!(encode_mac("01:02:03").is_err());
	}

	#[test]
	fn lpm_edges() {
		// prefix 0 is a wildcard and omitted
		assert_eq!(encode_lpm(0, 0, 32).unwrap(), None);
		assert_eq!(
			encode_lpm(0x0a000000, 24, 32).unwrap(),
			Some((vec![0x0a, 0, 0, 0], 24))
		);
		// prefix == bitwidth is a full exact match
		assert_eq!(encode_lpm(1, 32, 32).unwrap(), Some((vec![1], 32)));
		assert!(matches!(encode_lpm(1, 0, 32), Err(Error::InvalidMask(_))));
		assert!(matches!(
			encode_lpm(0x0a000001, 24, 32),
			Err(Error::InvalidMask(_))
		));
		assert!(matches!(encode_lpm(0, 33, 32), Err(Error::InvalidMask(_))));
	}

	#[test]
	fn ternary_edges() {
		assert_eq!(encode_ternary(0, 0, 32).unwrap(), None);
		assert_eq!(
			encode_ternary(0x0a, 0xff, 32).unwrap(),
			Some((vec![0x0a], vec![0xff]))
		);
		assert!(matches!(
			encode_ternary(0x100, 0xff, 32),
			Err(Error::InvalidMask(_))
		));
		assert!(matches!(
			encode_ternary(0, u128::MAX, 32),
			Err(Error::ValueOverflow { .. })
		));
	}

	#[test]
	fn range_edges() {
		assert_eq!(encode_range(0, 0xffff_ffff, 32).unwrap(), None);
		assert_eq!(
			encode_range(5, 10, 32).unwrap(),
			Some((vec![5], vec![10]))
		);
		assert!(matches!(
			encode_range(10, 5, 32),
			Err(Error::InvalidRange { low: 10, high: 5 })
		));
	}

	#[test]
	fn prefix_mask_values() {
		assert_eq!(prefix_mask(24, 32), 0xffff_ff00);
		assert_eq!(prefix_mask(0, 32), 0);
		assert_eq!(prefix_mask(32, 32), 0xffff_ffff);
		assert_eq!(prefix_mask(128, 128), u128::MAX);
	}
}
