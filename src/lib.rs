// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgensig
// File: lib.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

pub mod rgs {
	pub mod app;
	pub mod signature;
	pub mod weak;
}

pub use rgs::signature::{generate_signature, HashFamily};
