// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgensig
// File: secret.rs
// Author: Volker Schwaberow <volker@schwaberow.de>

//! Loads signing secrets from inline values, files or environment
//! variables. Secret bytes are kept in zeroizing buffers and never logged.

use std::fs;
use std::path::PathBuf;

use super::registry::{SignatureError, SignatureErrorKind};
use zeroize::Zeroizing;

pub enum SecretSource {
	Inline(Zeroizing<Vec<u8>>),
	File(PathBuf),
	Env(String),
}

impl std::fmt::Debug for SecretSource {
	fn fmt(
		&self,
		f: &mut std::fmt::Formatter<'_>,
	) -> std::fmt::Result {
		match self {
			SecretSource::Inline(_) => {
				f.write_str("Inline(<redacted>)")
			}
			SecretSource::File(path) => {
				f.debug_tuple("File").field(path).finish()
			}
			SecretSource::Env(name) => {
				f.debug_tuple("Env").field(name).finish()
			}
		}
	}
}

impl SecretSource {
	pub fn description(&self) -> &'static str {
		match self {
			SecretSource::Inline(_) => "inline",
			SecretSource::File(_) => "file",
			SecretSource::Env(_) => "env",
		}
	}
}

/// Reads the secret. Empty secrets are valid HMAC keys and are accepted;
/// file contents are taken verbatim, including any trailing newline.
pub fn load_secret(
	source: &SecretSource,
) -> Result<Zeroizing<Vec<u8>>, SignatureError> {
	let secret = match source {
		SecretSource::Inline(bytes) => {
			Zeroizing::new(bytes.as_slice().to_vec())
		}
		SecretSource::File(path) => {
			Zeroizing::new(fs::read(path).map_err(|err| {
				SignatureError::new(
					SignatureErrorKind::InvalidSecret,
					format!(
						"failed to read secret file `{}`: {}",
						path.display(),
						err
					),
				)
			})?)
		}
		SecretSource::Env(name) => {
			let value = std::env::var(name).map_err(|err| {
				SignatureError::new(
					SignatureErrorKind::InvalidSecret,
					format!(
						"failed to read secret from environment variable `{}`: {}",
						name, err
					),
				)
			})?;
			Zeroizing::new(value.into_bytes())
		}
	};
	tracing::debug!(
		source = source.description(),
		secret_len = secret.len(),
		"loaded signing secret"
	);
	Ok(secret)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	#[test]
	fn inline_secret_may_be_empty() {
		let secret =
			load_secret(&SecretSource::Inline(Zeroizing::new(Vec::new())))
				.unwrap();
		assert!(secret.is_empty());
	}

	#[test]
	fn file_secret_is_read_verbatim() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		file.write_all(b"secret\n").unwrap();
		let secret = load_secret(&SecretSource::File(
			file.path().to_path_buf(),
		))
		.unwrap();
		assert_eq!(secret.as_slice(), b"secret\n");
	}

	#[test]
	fn debug_output_redacts_inline_secret() {
		let source = SecretSource::Inline(Zeroizing::new(
			b"hunter2".to_vec(),
		));
		let rendered = format!("{:?}", source);
		assert!(!rendered.contains("hunter2"));
		assert!(!rendered.contains("104"));
	}

	#[test]
	fn missing_file_reports_invalid_secret() {
		let err = load_secret(&SecretSource::File(PathBuf::from(
			"/nonexistent/rgs/secret.key",
		)))
		.unwrap_err();
		assert_eq!(err.kind(), SignatureErrorKind::InvalidSecret);
		assert!(err.message().contains("secret.key"));
	}

	#[test]
	fn missing_env_reports_invalid_secret() {
		let err = load_secret(&SecretSource::Env(
			"RGS_TEST_SECRET_THAT_IS_NEVER_SET".to_string(),
		))
		.unwrap_err();
		assert_eq!(err.kind(), SignatureErrorKind::InvalidSecret);
	}
}
