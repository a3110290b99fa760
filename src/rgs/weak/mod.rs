// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgensig
// Module: legacy algorithm warnings helper
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

//! Helpers for identifying legacy hash families and presenting consistent
//! warning banners when they are used for signing.

use colored::Colorize;

use crate::rgs::signature::HashFamily;

const NIST_REFERENCE: &str =
	"https://doi.org/10.6028/NIST.SP.800-131Ar2";
const RFC6151_REFERENCE: &str = "https://www.rfc-editor.org/rfc/rfc6151";

const REFERENCES: &[&str] = &[NIST_REFERENCE, RFC6151_REFERENCE];

/// Metadata describing a legacy family entry.
#[derive(Debug, Clone)]
pub struct WeakAlgorithmMetadata {
	pub family: HashFamily,
	/// Replacement suggestion shown to the user.
	pub replacement_hint: &'static str,
}

/// Warning banner content emitted to stderr when a legacy family is used.
#[derive(Debug, Clone)]
pub struct WarningMessage {
	pub severity_icon: &'static str,
	pub headline: String,
	pub body: String,
	pub references: &'static [&'static str],
}

impl WarningMessage {
	/// Returns the banner text as displayed on stderr.
	pub fn banner(&self) -> String {
		format!(
			"{} {} {}",
			self.severity_icon, self.headline, self.body
		)
	}
}

const WEAK_ALGORITHMS: &[WeakAlgorithmMetadata] = &[
	WeakAlgorithmMetadata {
		family: HashFamily::Md5,
		replacement_hint: "Use HMAC-SHA256 or HMAC-SHA512 for new signatures",
	},
	WeakAlgorithmMetadata {
		family: HashFamily::Sha1,
		replacement_hint: "Use HMAC-SHA256 or HMAC-SHA512 for new signatures",
	},
];

pub fn metadata_for(
	family: HashFamily,
) -> Option<&'static WeakAlgorithmMetadata> {
	WEAK_ALGORITHMS.iter().find(|entry| entry.family == family)
}

/// Returns warning banner content for legacy families, `None` otherwise.
pub fn warning_for(family: HashFamily) -> Option<WarningMessage> {
	let metadata = metadata_for(family)?;
	let headline = format!(
		"WARNING: HMAC-{} is a legacy construction kept for interoperability",
		metadata.family.display_name()
	);
	let body = format!(
		"See NIST SP 800-131A rev.2 and RFC 6151. {}.",
		metadata.replacement_hint
	);
	Some(WarningMessage {
		severity_icon: "⚠",
		headline,
		body,
		references: REFERENCES,
	})
}

pub fn all_metadata() -> &'static [WeakAlgorithmMetadata] {
	WEAK_ALGORITHMS
}

/// Emit the warning banner and supporting references to stderr. Colour
/// is dropped when `NO_COLOR` is set.
pub fn emit_warning_banner(message: &WarningMessage) {
	let banner = message.banner();
	let references = message.references.join(" | ");
	eprintln!("{}", banner.yellow().bold());
	eprintln!("{}", format!("References: {}", references).yellow());
}
