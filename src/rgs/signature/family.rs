// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgensig
// File: family.rs
// Author: Volker Schwaberow <volker@schwaberow.de>

//! Hash family selector used inside the HMAC construction.

use digest::core_api::BlockSizeUser;
use digest::OutputSizeUser;
use md5::Md5;
use sha1::Sha1;
use sha2::{Sha256, Sha512};
use std::fmt;
use std::str::FromStr;
use strum::{EnumIter, IntoEnumIterator};

use super::registry::{SignatureError, SignatureErrorKind};

/// The closed set of hash constructions an HMAC signature may use.
#[derive(Clone, Copy, Debug, EnumIter, Eq, Hash, PartialEq)]
pub enum HashFamily {
	Md5,
	Sha1,
	Sha256,
	Sha512,
}

impl HashFamily {
	/// Canonical lowercase identifier (`md5`, `sha1`, ...).
	pub const fn identifier(self) -> &'static str {
		match self {
			Self::Md5 => "md5",
			Self::Sha1 => "sha1",
			Self::Sha256 => "sha256",
			Self::Sha512 => "sha512",
		}
	}

	pub const fn display_name(self) -> &'static str {
		match self {
			Self::Md5 => "MD5",
			Self::Sha1 => "SHA-1",
			Self::Sha256 => "SHA-256",
			Self::Sha512 => "SHA-512",
		}
	}

	/// Raw digest length in bytes.
	pub fn digest_size(self) -> usize {
		match self {
			Self::Md5 => <Md5 as OutputSizeUser>::output_size(),
			Self::Sha1 => <Sha1 as OutputSizeUser>::output_size(),
			Self::Sha256 => {
				<Sha256 as OutputSizeUser>::output_size()
			}
			Self::Sha512 => {
				<Sha512 as OutputSizeUser>::output_size()
			}
		}
	}

	/// Internal block length in bytes; keys longer than this are
	/// hashed before padding.
	pub fn block_size(self) -> usize {
		match self {
			Self::Md5 => <Md5 as BlockSizeUser>::block_size(),
			Self::Sha1 => <Sha1 as BlockSizeUser>::block_size(),
			Self::Sha256 => <Sha256 as BlockSizeUser>::block_size(),
			Self::Sha512 => <Sha512 as BlockSizeUser>::block_size(),
		}
	}

	/// Length of the lowercase hex rendering of a signature.
	pub fn hex_len(self) -> usize {
		self.digest_size() * 2
	}

	/// MD5 and SHA-1 are retained for interoperability only.
	pub const fn is_legacy(self) -> bool {
		matches!(self, Self::Md5 | Self::Sha1)
	}

	/// Resolves a textual identifier. Matching ignores ASCII case, an
	/// optional `hmac-` prefix and dashes, so `HMAC-SHA-256` selects
	/// [`HashFamily::Sha256`].
	pub fn from_identifier(
		identifier: &str,
	) -> Result<Self, SignatureError> {
		let lowered = identifier.trim().to_ascii_lowercase();
		let stripped =
			lowered.strip_prefix("hmac-").unwrap_or(&lowered);
		let needle: String =
			stripped.chars().filter(|c| *c != '-').collect();
		Self::iter()
			.find(|family| family.identifier() == needle)
			.ok_or_else(|| {
				SignatureError::new(
					SignatureErrorKind::UnsupportedAlgorithm,
					format!(
						"unsupported hash family `{}` (expected one of: {})",
						identifier,
						Self::iter()
							.map(|f| f.identifier())
							.collect::<Vec<_>>()
							.join(", ")
					),
				)
			})
	}
}

impl fmt::Display for HashFamily {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.display_name())
	}
}

impl FromStr for HashFamily {
	type Err = SignatureError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::from_identifier(s)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn sizes_match_hash_definitions() {
		assert_eq!(HashFamily::Md5.digest_size(), 16);
		assert_eq!(HashFamily::Sha1.digest_size(), 20);
		assert_eq!(HashFamily::Sha256.digest_size(), 32);
		assert_eq!(HashFamily::Sha512.digest_size(), 64);

		assert_eq!(HashFamily::Md5.block_size(), 64);
		assert_eq!(HashFamily::Sha1.block_size(), 64);
		assert_eq!(HashFamily::Sha256.block_size(), 64);
		assert_eq!(HashFamily::Sha512.block_size(), 128);
	}

	#[test]
	fn parses_identifier_variants() {
		for input in ["sha256", "SHA256", "sha-256", "hmac-sha256", "HMAC-SHA-256"]
		{
			assert_eq!(
				input.parse::<HashFamily>().unwrap(),
				HashFamily::Sha256,
				"input `{}`",
				input
			);
		}
		assert_eq!(
			"md5".parse::<HashFamily>().unwrap(),
			HashFamily::Md5
		);
		assert_eq!(
			"Sha-1".parse::<HashFamily>().unwrap(),
			HashFamily::Sha1
		);
	}

	#[test]
	fn rejects_unknown_identifier() {
		let err = "sha3-256".parse::<HashFamily>().unwrap_err();
		assert_eq!(err.kind(), SignatureErrorKind::UnsupportedAlgorithm);
		assert!(err.message().contains("sha3-256"));
	}

	#[test]
	fn legacy_flags() {
		assert!(HashFamily::Md5.is_legacy());
		assert!(HashFamily::Sha1.is_legacy());
		assert!(!HashFamily::Sha256.is_legacy());
		assert!(!HashFamily::Sha512.is_legacy());
	}
}
