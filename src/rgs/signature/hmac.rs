// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgensig
// File: hmac.rs
// Author: Volker Schwaberow <volker@schwaberow.de>

//! HMAC executors covering SHA-2 variants and the legacy MD5/SHA-1
//! constructions.

use super::family::HashFamily;
use super::registry::{
	SignatureAlgorithm, SignatureAlgorithmMetadata, SignatureExecutor,
};
use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use md5::Md5;
use sha1::Sha1;
use sha2::{Sha256, Sha512};

type HmacMd5 = Hmac<Md5>;
type HmacSha1 = Hmac<Sha1>;
type HmacSha256 = Hmac<Sha256>;
type HmacSha512 = Hmac<Sha512>;

const ALGORITHMS: &[SignatureAlgorithm] = &[
	SignatureAlgorithm::new(
		SignatureAlgorithmMetadata::legacy(
			"hmac-sha1",
			"HMAC-SHA1",
			HashFamily::Sha1,
		),
		create_executor::<HmacSha1>,
	),
	SignatureAlgorithm::new(
		SignatureAlgorithmMetadata::current(
			"hmac-sha256",
			"HMAC-SHA256",
			HashFamily::Sha256,
		),
		create_executor::<HmacSha256>,
	),
	SignatureAlgorithm::new(
		SignatureAlgorithmMetadata::current(
			"hmac-sha512",
			"HMAC-SHA512",
			HashFamily::Sha512,
		),
		create_executor::<HmacSha512>,
	),
	SignatureAlgorithm::new(
		SignatureAlgorithmMetadata::legacy(
			"hmac-md5",
			"HMAC-MD5",
			HashFamily::Md5,
		),
		create_executor::<HmacMd5>,
	),
];

pub fn catalog() -> &'static [SignatureAlgorithm] {
	ALGORITHMS
}

pub fn algorithm(family: HashFamily) -> &'static SignatureAlgorithm {
	match family {
		HashFamily::Sha1 => &ALGORITHMS[0],
		HashFamily::Sha256 => &ALGORITHMS[1],
		HashFamily::Sha512 => &ALGORITHMS[2],
		HashFamily::Md5 => &ALGORITHMS[3],
	}
}

/// One-shot HMAC over `message`, statically dispatched per family.
pub fn compute(
	family: HashFamily,
	secret: &[u8],
	message: &[u8],
) -> Vec<u8> {
	match family {
		HashFamily::Md5 => mac_once::<HmacMd5>(secret, message),
		HashFamily::Sha1 => mac_once::<HmacSha1>(secret, message),
		HashFamily::Sha256 => mac_once::<HmacSha256>(secret, message),
		HashFamily::Sha512 => mac_once::<HmacSha512>(secret, message),
	}
}

struct HmacExecutor<M> {
	mac: M,
}

impl<M> SignatureExecutor for HmacExecutor<M>
where
	M: Mac + Send + 'static,
{
	fn update(&mut self, data: &[u8]) {
		self.mac.update(data);
	}

	fn finalize(self: Box<Self>) -> Vec<u8> {
		self.mac.finalize().into_bytes().to_vec()
	}
}

fn create_executor<M>(secret: &[u8]) -> Box<dyn SignatureExecutor>
where
	M: Mac + KeyInit + Send + 'static,
{
	Box::new(HmacExecutor {
		mac: keyed::<M>(secret),
	})
}

fn mac_once<M>(secret: &[u8], message: &[u8]) -> Vec<u8>
where
	M: Mac + KeyInit,
{
	let mut mac = keyed::<M>(secret);
	mac.update(message);
	mac.finalize().into_bytes().to_vec()
}

fn keyed<M>(secret: &[u8]) -> M
where
	M: Mac + KeyInit,
{
	// HMAC hashes or zero-pads the key to the block size; any length is valid.
	<M as Mac>::new_from_slice(secret)
		.expect("HMAC accepts keys of any length")
}
