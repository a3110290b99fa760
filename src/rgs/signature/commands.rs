// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgensig
// File: commands.rs
// Author: Volker Schwaberow <volker@schwaberow.de>

//! CLI dispatch for `rgs sign` and `rgs list`.

use crate::rgs::signature::executor::{
	consume_bytes, consume_reader, digest_to_hex,
};
use crate::rgs::signature::family::HashFamily;
use crate::rgs::signature::registry::{
	self, SignatureAlgorithmMetadata, SignatureError,
	SignatureErrorKind,
};
use crate::rgs::signature::secret::{load_secret, SecretSource};
use crate::rgs::weak;
use serde_json::json;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead};
use std::path::PathBuf;

#[derive(Debug)]
pub struct SignOptions {
	pub family: HashFamily,
	pub secret_source: SecretSource,
	pub input: SignInput,
	pub hash_only: bool,
	pub json: bool,
	pub quiet_legacy: bool,
}

#[derive(Debug)]
pub enum SignInput {
	Inline(String),
	File(PathBuf),
	Stdin,
}

enum SignOutput<'a> {
	Inline(&'a str),
	File(&'a PathBuf),
	StdinLine(&'a [u8]),
}

pub fn run_sign(options: SignOptions) -> Result<(), Box<dyn Error>> {
	let secret = load_secret(&options.secret_source)?;
	if !options.quiet_legacy {
		if let Some(warning) = weak::warning_for(options.family) {
			weak::emit_warning_banner(&warning);
		}
	}

	match &options.input {
		SignInput::Inline(text) => {
			let (executor, metadata) =
				registry::create_executor(options.family, &secret);
			let digest = consume_bytes(text.as_bytes(), executor);
			emit_output(
				&options,
				&metadata,
				SignOutput::Inline(text),
				&digest,
			);
		}
		SignInput::File(path) => {
			let file = File::open(path).map_err(|err| {
				SignatureError::new(
					SignatureErrorKind::Io,
					format!(
						"failed to open `{}`: {}",
						path.display(),
						err
					),
				)
			})?;
			let (executor, metadata) =
				registry::create_executor(options.family, &secret);
			let digest =
				consume_reader(file, executor).map_err(|err| {
					SignatureError::new(
						SignatureErrorKind::Io,
						format!(
							"failed to read `{}`: {}",
							path.display(),
							err
						),
					)
				})?;
			emit_output(
				&options,
				&metadata,
				SignOutput::File(path),
				&digest,
			);
		}
		SignInput::Stdin => {
			let stdin = io::stdin();
			for line_result in stdin.lock().split(b'\n') {
				let mut line = line_result.map_err(|err| {
					SignatureError::new(
						SignatureErrorKind::Io,
						format!("failed to read stdin: {}", err),
					)
				})?;
				trim_carriage_return(&mut line);
				// An empty line is an empty message, which is still signed.
				let (executor, metadata) =
					registry::create_executor(options.family, &secret);
				let digest = consume_bytes(&line, executor);
				emit_output(
					&options,
					&metadata,
					SignOutput::StdinLine(&line),
					&digest,
				);
			}
		}
	}

	Ok(())
}

/// Lines are split on `\n`; a preceding `\r` belongs to the terminator.
fn trim_carriage_return(line: &mut Vec<u8>) {
	if line.last() == Some(&b'\r') {
		line.pop();
	}
}

fn emit_output(
	options: &SignOptions,
	metadata: &SignatureAlgorithmMetadata,
	context: SignOutput,
	digest: &[u8],
) {
	let hex = digest_to_hex(digest);

	if options.hash_only {
		println!("{}", hex);
		return;
	}

	if options.json {
		let input_value = match &context {
			SignOutput::Inline(text) => {
				json!({ "type": "inline", "value": text })
			}
			SignOutput::File(path) => {
				json!({ "type": "file", "value": path.display().to_string() })
			}
			SignOutput::StdinLine(line) => {
				json!({
					"type": "stdin",
					"value": String::from_utf8_lossy(line),
				})
			}
		};
		let payload = json!({
			"algorithm": metadata.identifier,
			"display_name": metadata.display_name,
			"legacy": metadata.is_legacy(),
			"signature": hex,
			"input": input_value,
			"secret_source": options.secret_source.description(),
		});
		println!("{}", payload);
	} else {
		match &context {
			SignOutput::Inline(text) => println!("{} {}", hex, text),
			SignOutput::File(path) => {
				println!("{} {}", hex, path.display())
			}
			SignOutput::StdinLine(line) => {
				println!("{} {}", hex, String::from_utf8_lossy(line))
			}
		};
	}
}

pub fn list_algorithms(json: bool) {
	for metadata in registry::metadata() {
		let family = metadata.family;
		if json {
			println!(
				"{}",
				json!({
					"algorithm": metadata.identifier,
					"display_name": metadata.display_name,
					"family": family.identifier(),
					"digest_bytes": family.digest_size(),
					"block_bytes": family.block_size(),
					"legacy": metadata.is_legacy(),
				})
			);
		} else {
			let legacy = if metadata.is_legacy() { " (legacy)" } else { "" };
			println!(
				"{:<12} {:>3} bytes digest, {:>3} bytes block{}",
				metadata.identifier,
				family.digest_size(),
				family.block_size(),
				legacy
			);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn carriage_return_is_stripped_once() {
		let mut line = b"payload\r".to_vec();
		trim_carriage_return(&mut line);
		assert_eq!(line, b"payload");

		let mut line = b"payload\r\r".to_vec();
		trim_carriage_return(&mut line);
		assert_eq!(line, b"payload\r");

		let mut line = vec![0xff, 0xfe];
		trim_carriage_return(&mut line);
		assert_eq!(line, vec![0xff, 0xfe]);
	}
}
