// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgensig
// Module: signature (HMAC signatures)
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

//! HMAC signature generation over MD5, SHA-1, SHA-256 and SHA-512.
//!
//! [`generate_signature`] is the one-shot entry point: it keys the
//! selected hash family with the caller's secret, authenticates the
//! message and returns the digest as lowercase hex. It is a pure function
//! of its inputs and safe to call from any number of threads.
//!
//! ```
//! use rustgensig::rgs::signature::{generate_signature, HashFamily};
//!
//! let sig = generate_signature(HashFamily::Sha1, b"secret", b"something");
//! assert_eq!(sig, "889b4bc00e8a5d6b05c3cb47db58217cac788526");
//! ```
//!
//! Submodules provide the registry, streaming executors, secret loading
//! and CLI handlers.

pub mod commands;
pub mod executor;
pub mod family;
pub mod hmac;
pub mod registry;
pub mod secret;

pub use family::HashFamily;
pub use registry::{SignatureError, SignatureErrorKind};

/// Computes the HMAC of `message` keyed with `secret` and returns its
/// lowercase hex encoding (`2 * family.digest_size()` characters).
///
/// Secrets of any length are accepted, including empty ones and ones
/// longer than the hash block size.
pub fn generate_signature(
	family: HashFamily,
	secret: &[u8],
	message: &[u8],
) -> String {
	tracing::debug!(
		algorithm = family.identifier(),
		message_len = message.len(),
		"generating signature"
	);
	executor::digest_to_hex(&hmac::compute(family, secret, message))
}

/// Like [`generate_signature`], with the family given by identifier.
/// The identifier is resolved before any hashing takes place.
pub fn sign_with(
	identifier: &str,
	secret: &[u8],
	message: &[u8],
) -> Result<String, SignatureError> {
	let family = HashFamily::from_identifier(identifier)?;
	Ok(generate_signature(family, secret, message))
}
