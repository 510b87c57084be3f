//! gNMI path string grammar.
//!
//! Compatible with the `openconfig/reference/cmd/gnmi_cli` notation:
//! slash-delimited elements with bracketed `[key=value]` predicates, e.g.
//! `interfaces/interface[name=eth1]/state/oper-status`. Backslash escapes
//! the next character anywhere; inside a key value that is the way to write
//! a literal `]` or `\`.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::proto::gnmi;

/// A `gnmi.Path` with parsing, formatting and keyed-element access.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GnmiPath {
	pub path: gnmi::Path,
}

impl GnmiPath {
	/// Wrap an existing `gnmi.Path`.
	pub fn from_wire(path: gnmi::Path) -> GnmiPath {
		GnmiPath { path }
	}

	/// Parse a path string. A prefix before an unescaped `:` (appearing
	/// before any `/` or `[`) is the origin, e.g. `openconfig:/interfaces`.
	pub fn parse(text: &str) -> Result<GnmiPath> {
		let mut path = gnmi::Path::default();
		let rest = match split_origin(text) {
			Some((origin, rest)) => {
				path.origin = origin.to_string();
				rest
			}
			None => text,
		};
		path.elem = parse_elements(rest)?;
		Ok(GnmiPath { path })
	}

	/// Set the origin; builder style.
	pub fn origin(mut self, origin: impl Into<String>) -> Self {
		self.path.origin = origin.into();
		self
	}

	/// Set the target; builder style.
	pub fn target(mut self, target: impl Into<String>) -> Self {
		self.path.target = target.into();
		self
	}

	pub fn len(&self) -> usize {
		self.path.elem.len()
	}

	pub fn is_empty(&self) -> bool {
		self.path.elem.is_empty()
	}

	/// Name of the first element.
	pub fn first(&self) -> Option<&str> {
		self.path.elem.first().map(|e| e.name.as_str())
	}

	/// Name of the last element.
	pub fn last(&self) -> Option<&str> {
		self.path.elem.last().map(|e| e.name.as_str())
	}

	/// Name of the i-th element.
	pub fn element(&self, index: usize) -> Option<&str> {
		self.path.elem.get(index).map(|e| e.name.as_str())
	}

	/// Key value of the named element.
	pub fn key_value(&self, element: &str, key: &str) -> Option<&str> {
		self.path
			.elem
			.iter()
			.find(|e| e.name == element)?
			.key
			.get(key)
			.map(String::as_str)
	}

	/// A copy of this path with one key set on the named element. The
	/// original is untouched, so a path can serve as a template.
	pub fn with_key(
		&self,
		element: &str,
		key: impl Into<String>,
		value: impl Into<String>,
	) -> Result<GnmiPath> {
		let mut copy = self.clone();
		let elem = copy
			.path
			.elem
			.iter_mut()
			.find(|e| e.name == element)
			.ok_or_else(|| {
				Error::InvalidValue(format!("unknown path element {:?}", element))
			})?;
		elem.key.insert(key.into(), value.into());
		Ok(copy)
	}
}

impl std::str::FromStr for GnmiPath {
	type Err = Error;

	fn from_str(text: &str) -> Result<GnmiPath> {
		GnmiPath::parse(text)
	}
}

impl std::fmt::Display for GnmiPath {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		if !self.path.origin.is_empty() {
			write!(f, "{}:", self.path.origin)?;
		}
		for (i, elem) in self.path.elem.iter().enumerate() {
			if i > 0 {
				write!(f, "/")?;
			}
			write_escaped(f, &elem.name, &['/', '[', '\\'])?;
			let mut keys: Vec<_> = elem.key.iter().collect();
			keys.sort();
			for (key, value) in keys {
				write!(f, "[")?;
				write_escaped(f, key, &['=', ']', '\\'])?;
				write!(f, "=")?;
				write_escaped(f, value, &[']', '\\'])?;
				write!(f, "]")?;
			}
		}
		Ok(())
	}
}

fn write_escaped(
	f: &mut std::fmt::Formatter,
	text: &str,
	special: &[char],
) -> std::fmt::Result {
	for c in text.chars() {
		if special.contains(&c) {
			write!(f, "\\")?;
		}
		write!(f, "{}", c)?;
	}
	Ok(())
}

/// Split `origin:rest` when an unescaped `:` appears before any `/` or `[`.
fn split_origin(text: &str) -> Option<(&str, &str)> {
	let mut escaped = false;
	for (i, c) in text.char_indices() {
		if escaped {
			escaped = false;
			continue;
		}
		match c {
			'\\' => escaped = true,
			':' if i > 0 => return Some((&text[..i], &text[i + 1..])),
			':' => return None,
			'/' | '[' => return None,
			_ => {}
		}
	}
	None
}

fn parse_elements(text: &str) -> Result<Vec<gnmi::PathElem>> {
	let chars: Vec<char> = text.chars().collect();
	let len = chars.len();
	let mut elems = Vec::new();
	let mut i = 0;
	while i < len {
		if chars[i] == '/' {
			i += 1;
			continue;
		}
		// element name
		let mut name = String::new();
		while i < len && chars[i] != '/' && chars[i] != '[' {
			if chars[i] == '\\' {
				i += 1;
				if i >= len {
					return Err(Error::InvalidValue(format!(
						"dangling escape in path {:?}",
						text
					)));
				}
			}
			name.push(chars[i]);
			i += 1;
		}
		if name.is_empty() {
			return Err(Error::InvalidValue(format!(
				"empty element in path {:?}",
				text
			)));
		}
		let mut key = HashMap::new();
		// key predicates
		while i < len && chars[i] == '[' {
			i += 1;
			let mut key_name = String::new();
			while i < len && chars[i] != '=' && chars[i] != ']' {
				if chars[i] == '\\' {
					i += 1;
					if i >= len {
						break;
					}
				}
				key_name.push(chars[i]);
				i += 1;
			}
			if i >= len || chars[i] != '=' {
				return Err(Error::InvalidValue(format!(
					"key without '=' in path {:?}",
					text
				)));
			}
			i += 1;
			let mut value = String::new();
			while i < len && chars[i] != ']' {
				if chars[i] == '\\' {
					i += 1;
					if i >= len {
						break;
					}
				}
				value.push(chars[i]);
				i += 1;
			}
			if i >= len {
				return Err(Error::InvalidValue(format!(
					"unterminated key in path {:?}",
					text
				)));
			}
			i += 1;
			if key_name.is_empty() {
				return Err(Error::InvalidValue(format!(
					"empty key name in path {:?}",
					text
				)));
			}
			key.insert(key_name, value);
		}
		if i < len && chars[i] != '/' {
			return Err(Error::InvalidValue(format!(
				"unexpected {:?} after keys in path {:?}",
				chars[i], text
			)));
		}
		elems.push(gnmi::PathElem { name, key });
	}
	Ok(elems)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn simple_path() {
		let path = GnmiPath::parse("interfaces/interface/state").unwrap();
		assert_eq!(path.len(), 3);
		assert_eq!(path.first(), Some("interfaces"));
		assert_eq!(path.last(), Some("state"));
		assert_eq!(path.to_string(), "interfaces/interface/state");
	}

	#[test]
	fn keyed_path() {
		let path =
			GnmiPath::parse("interfaces/interface[name=eth1]/state").unwrap();
		assert_eq!(path.key_value("interface", "name"), Some("eth1"));
		assert_eq!(
			path.to_string(),
			"interfaces/interface[name=eth1]/state"
		);
	}

	#[test]
	fn multiple_keys() {
		let path = GnmiPath::parse("a/b[k1=v1][k2=v2]/c").unwrap();
		assert_eq!(path.key_value("b", "k1"), Some("v1"));
		assert_eq!(path.key_value("b", "k2"), Some("v2"));
		// keys render sorted
		assert_eq!(path.to_string(), "a/b[k1=v1][k2=v2]/c");
	}

	#[test]
	fn escapes_roundtrip() {
		let path = GnmiPath::parse(r"a/b[k=v\]w]/c").unwrap();
		assert_eq!(path.key_value("b", "k"), Some("v]w"));
		assert_eq!(path.to_string(), r"a/b[k=v\]w]/c");

		let path = GnmiPath::parse(r"up\/down/next").unwrap();
		assert_eq!(path.first(), Some("up/down"));
		assert_eq!(path.to_string(), r"up\/down/next");
	}

	#[test]
	fn key_values_may_contain_slashes() {
		let path = GnmiPath::parse("a[k=x/y]/b").unwrap();
		assert_eq!(path.key_value("a", "k"), Some("x/y"));
	}

	#[test]
	fn origin_prefix() {
		let path = GnmiPath::parse("openconfig:interfaces/interface").unwrap();
		assert_eq!(path.path.origin, "openconfig");
		assert_eq!(path.first(), Some("interfaces"));
		assert_eq!(path.to_string(), "openconfig:interfaces/interface");

		// a colon after the first slash is not an origin
		let path = GnmiPath::parse("a/b:c").unwrap();
		assert_eq!(path.path.origin, "");
		assert_eq!(path.len(), 2);
	}

	#[test]
	fn leading_and_trailing_slashes() {
		let path = GnmiPath::parse("/interfaces/interface/").unwrap();
		assert_eq!(path.len(), 2);
	}

	#[test]
	fn template_key_does_not_mutate_original() {
		let oper = GnmiPath::parse("interfaces/interface/state/oper-status")
			.unwrap();
		let eth1 = oper.with_key("interface", "name", "eth1").unwrap();
		assert_eq!(oper.key_value("interface", "name"), None);
		assert_eq!(eth1.key_value("interface", "name"), Some("eth1"));
	}

	#[test]
	fn parse_failures() {
		assert!(GnmiPath::parse("a//b").is_ok()); // empty segments skipped
		assert!(GnmiPath::parse("a[k]/b").is_err()); // key without value
		assert!(GnmiPath::parse("a[k=v/b").is_err()); // unterminated
		assert!(GnmiPath::parse(r"a\").is_err()); // dangling escape
	}
}
