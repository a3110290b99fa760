// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgensig
// File: executor.rs
// Author: Volker Schwaberow <volker@schwaberow.de>

//! Streaming helpers for signature computation.

use super::registry::SignatureExecutor;
use hex::encode;
use std::io::{self, Read};

const SIGNATURE_BUFFER_SIZE: usize = 8192;

pub fn consume_reader<R: Read>(
	mut reader: R,
	mut executor: Box<dyn SignatureExecutor>,
) -> io::Result<Vec<u8>> {
	let mut buffer = [0u8; SIGNATURE_BUFFER_SIZE];
	let mut total = 0usize;
	loop {
		let n = match reader.read(&mut buffer) {
			Ok(0) => break,
			Ok(n) => n,
			Err(err) if err.kind() == io::ErrorKind::Interrupted => {
				continue
			}
			Err(err) => return Err(err),
		};
		total += n;
		executor.update(&buffer[..n]);
	}
	tracing::debug!(bytes = total, "consumed reader");
	Ok(executor.finalize())
}

pub fn consume_bytes(
	data: &[u8],
	mut executor: Box<dyn SignatureExecutor>,
) -> Vec<u8> {
	executor.update(data);
	executor.finalize()
}

/// Lowercase hex, no separators or prefix.
pub fn digest_to_hex(bytes: &[u8]) -> String {
	encode(bytes)
}
