// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgensig
// File: registry.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025

//! Registry definitions for HMAC signature algorithms, including factory
//! dispatch and metadata helpers shared by the library API and the CLI.

use std::borrow::Cow;

use super::family::HashFamily;
use super::hmac;

pub trait SignatureExecutor: Send + 'static {
	fn update(&mut self, data: &[u8]);
	fn finalize(self: Box<Self>) -> Vec<u8>;
}

#[derive(Clone, Copy, Debug)]
pub struct SignatureAlgorithmMetadata {
	pub identifier: &'static str,
	pub display_name: &'static str,
	pub family: HashFamily,
	pub legacy: bool,
}

impl SignatureAlgorithmMetadata {
	pub const fn new(
		identifier: &'static str,
		display_name: &'static str,
		family: HashFamily,
		legacy: bool,
	) -> Self {
		Self {
			identifier,
			display_name,
			family,
			legacy,
		}
	}

	pub const fn legacy(
		identifier: &'static str,
		display_name: &'static str,
		family: HashFamily,
	) -> Self {
		Self::new(identifier, display_name, family, true)
	}

	pub const fn current(
		identifier: &'static str,
		display_name: &'static str,
		family: HashFamily,
	) -> Self {
		Self::new(identifier, display_name, family, false)
	}

	pub fn is_legacy(&self) -> bool {
		self.legacy
	}
}

pub type SignatureFactory = fn(&[u8]) -> Box<dyn SignatureExecutor>;

#[derive(Clone, Copy)]
pub struct SignatureAlgorithm {
	pub metadata: SignatureAlgorithmMetadata,
	pub factory: SignatureFactory,
}

impl SignatureAlgorithm {
	pub const fn new(
		metadata: SignatureAlgorithmMetadata,
		factory: SignatureFactory,
	) -> Self {
		Self { metadata, factory }
	}
}

/// Signing itself never fails; these kinds cover what happens around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureErrorKind {
	/// The requested hash family is not one of MD5, SHA-1, SHA-256 or
	/// SHA-512. Raised before any hashing.
	UnsupportedAlgorithm,
	/// The secret could not be obtained from its file or environment
	/// variable. Never carries secret bytes.
	InvalidSecret,
	/// The message to sign could not be read.
	Io,
}

/// Error raised while resolving a hash family, loading a secret or
/// reading a message. The message names the source (path, variable,
/// identifier) and never includes the secret.
#[derive(Debug)]
pub struct SignatureError {
	kind: SignatureErrorKind,
	message: Cow<'static, str>,
}

impl SignatureError {
	pub fn new(
		kind: SignatureErrorKind,
		message: impl Into<Cow<'static, str>>,
	) -> Self {
		Self {
			kind,
			message: message.into(),
		}
	}

	pub fn kind(&self) -> SignatureErrorKind {
		self.kind
	}

	pub fn message(&self) -> &str {
		self.message.as_ref()
	}
}

impl std::fmt::Display for SignatureError {
	fn fmt(
		&self,
		f: &mut std::fmt::Formatter<'_>,
	) -> std::fmt::Result {
		write!(f, "{}", self.message)
	}
}

impl std::error::Error for SignatureError {}

pub fn algorithms() -> impl Iterator<Item = &'static SignatureAlgorithm>
{
	hmac::catalog().iter()
}

pub fn metadata() -> Vec<SignatureAlgorithmMetadata> {
	algorithms().map(|alg| alg.metadata).collect()
}

pub fn algorithm_for(family: HashFamily) -> &'static SignatureAlgorithm {
	hmac::algorithm(family)
}

/// Looks up a catalog entry by identifier (`hmac-sha256`, `sha256`,
/// `SHA-256`, ...).
pub fn find_algorithm(
	identifier: &str,
) -> Result<&'static SignatureAlgorithm, SignatureError> {
	let family = HashFamily::from_identifier(identifier)?;
	Ok(algorithm_for(family))
}

/// Creates a streaming executor keyed with `secret`. HMAC accepts secrets
/// of any length, so this never fails once the family is known.
pub fn create_executor(
	family: HashFamily,
	secret: &[u8],
) -> (Box<dyn SignatureExecutor>, SignatureAlgorithmMetadata) {
	let algorithm = algorithm_for(family);
	tracing::debug!(
		algorithm = algorithm.metadata.identifier,
		secret_len = secret.len(),
		"creating signature executor"
	);
	((algorithm.factory)(secret), algorithm.metadata)
}
