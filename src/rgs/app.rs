// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgensig
// File: app.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

use crate::rgs::signature::commands::{
	list_algorithms, run_sign, SignInput, SignOptions,
};
use crate::rgs::signature::HashFamily;
use crate::rgs::signature::secret::SecretSource;
use clap::{crate_name, Arg, ArgAction, ArgGroup, ArgMatches};
use clap_complete::{generate, Generator, Shell};
use std::error::Error;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use zeroize::Zeroizing;

const HELP_TEMPLATE: &str = "{before-help}{name} {version}
Written by {author-with-newline}{about-with-newline}
Primary command families:
  rgs sign <mode>   Sign strings/files/stdin (e.g. rgs sign string -a sha256 --secret s 'text')
  rgs list          Show supported HMAC algorithms
{usage-heading} {usage}

{all-args}{after-help}
";

const DEFAULT_LOG_FILTER: &str = "warn";

fn algorithm_arg() -> Arg {
	Arg::new("algorithm")
		.short('a')
		.long("algorithm")
		.help("Hash family (md5, sha1, sha256, sha512; `hmac-` prefix accepted)")
		.value_parser(HashFamily::from_identifier)
		.required(true)
}

fn with_sign_args(cmd: clap::Command) -> clap::Command {
	cmd.arg(algorithm_arg())
		.arg(
			Arg::new("secret")
				.long("secret")
				.value_name("TEXT")
				.help("Secret given inline (visible in process listings)"),
		)
		.arg(
			Arg::new("secret-file")
				.long("secret-file")
				.value_name("PATH")
				.value_parser(clap::value_parser!(PathBuf))
				.help("Read the secret verbatim from a file"),
		)
		.arg(
			Arg::new("secret-env")
				.long("secret-env")
				.value_name("VAR")
				.help("Read the secret from an environment variable"),
		)
		.group(
			ArgGroup::new("secret-source")
				.args(["secret", "secret-file", "secret-env"])
				.required(true)
				.multiple(false),
		)
		.arg(
			Arg::new("hash-only")
				.long("hash-only")
				.help("Emit only signatures without the signed input")
				.action(ArgAction::SetTrue),
		)
		.arg(
			Arg::new("json")
				.long("json")
				.help("Emit one JSON object per signature")
				.conflicts_with("hash-only")
				.action(ArgAction::SetTrue),
		)
		.arg(
			Arg::new("quiet-legacy")
				.long("quiet-legacy")
				.help("Suppress the MD5/SHA-1 legacy warning")
				.action(ArgAction::SetTrue),
		)
}

pub fn build_cli() -> clap::Command {
	clap::Command::new(crate_name!())
		.color(clap::ColorChoice::Never)
		.help_template(HELP_TEMPLATE)
		.bin_name("rgs")
		.version(clap::crate_version!())
		.author(clap::crate_authors!())
		.about("A simple HMAC signing utility")
		.subcommand_required(true)
		.arg_required_else_help(true)
		.arg(
			Arg::new("log")
				.long("log")
				.value_name("FILTER")
				.help("Diagnostic log filter, e.g. `debug` (defaults to RUST_LOG or `warn`)"),
		)
		.subcommand(
			clap::Command::new("sign")
				.about("Sign data with an HMAC")
				.subcommand_required(true)
				.arg_required_else_help(true)
				.subcommand(with_sign_args(
					clap::Command::new("string")
						.about("Sign a provided string")
						.arg(
							Arg::new("input")
								.help("String to sign")
								.required(true),
						),
				))
				.subcommand(with_sign_args(
					clap::Command::new("file")
						.about("Sign the contents of a file")
						.arg(
							Arg::new("path")
								.help("File to sign")
								.value_parser(clap::value_parser!(PathBuf))
								.required(true),
						),
				))
				.subcommand(with_sign_args(
					clap::Command::new("stdio").about(
						"Sign each line read from stdin",
					),
				)),
		)
		.subcommand(
			clap::Command::new("list")
				.about("List supported HMAC algorithms")
				.arg(
					Arg::new("json")
						.long("json")
						.help("Emit JSON lines")
						.action(ArgAction::SetTrue),
				),
		)
		.subcommand(
			clap::Command::new("completions")
				.about("Generate shell completions")
				.arg(
					Arg::new("shell")
						.required(true)
						.value_parser(clap::value_parser!(Shell)),
				),
		)
}

fn log_filter(
	explicit: Option<&String>,
) -> Result<EnvFilter, Box<dyn Error>> {
	match explicit {
		Some(directives) => {
			EnvFilter::try_new(directives).map_err(|err| {
				Box::new(io::Error::other(format!(
					"invalid --log filter `{}`: {}",
					directives, err
				))) as Box<dyn Error>
			})
		}
		None => Ok(EnvFilter::try_from_default_env()
			.unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))),
	}
}

fn init_logging(
	explicit: Option<&String>,
) -> Result<(), Box<dyn Error>> {
	let filter = log_filter(explicit)?;
	// A subscriber may already be installed when embedded in tests.
	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(io::stderr)
		.try_init();
	Ok(())
}

fn secret_source(matches: &ArgMatches) -> SecretSource {
	if let Some(text) = matches.get_one::<String>("secret") {
		SecretSource::Inline(Zeroizing::new(text.as_bytes().to_vec()))
	} else if let Some(path) = matches.get_one::<PathBuf>("secret-file")
	{
		SecretSource::File(path.clone())
	} else if let Some(name) = matches.get_one::<String>("secret-env") {
		SecretSource::Env(name.clone())
	} else {
		unreachable!("clap enforces the secret-source group")
	}
}

fn sign_options(matches: &ArgMatches, input: SignInput) -> SignOptions {
	SignOptions {
		family: *matches
			.get_one::<HashFamily>("algorithm")
			.expect("algorithm is required"),
		secret_source: secret_source(matches),
		input,
		hash_only: matches.get_flag("hash-only"),
		json: matches.get_flag("json"),
		quiet_legacy: matches.get_flag("quiet-legacy"),
	}
}

fn handle_sign_command(
	matches: &ArgMatches,
) -> Result<(), Box<dyn Error>> {
	let options = match matches.subcommand() {
		Some(("string", sub)) => {
			let input = sub
				.get_one::<String>("input")
				.expect("input is required")
				.clone();
			sign_options(sub, SignInput::Inline(input))
		}
		Some(("file", sub)) => {
			let path = sub
				.get_one::<PathBuf>("path")
				.expect("path is required")
				.clone();
			sign_options(sub, SignInput::File(path))
		}
		Some(("stdio", sub)) => sign_options(sub, SignInput::Stdin),
		_ => unreachable!("clap enforces a sign subcommand"),
	};
	tracing::debug!(
		algorithm = options.family.identifier(),
		secret_source = options.secret_source.description(),
		"dispatching sign command"
	);
	run_sign(options)
}

pub fn run() -> Result<(), Box<dyn Error>> {
	let m = build_cli().get_matches();
	init_logging(m.get_one::<String>("log"))?;

	match m.subcommand() {
		Some(("sign", matches)) => handle_sign_command(matches)?,
		Some(("list", matches)) => {
			list_algorithms(matches.get_flag("json"))
		}
		Some(("completions", matches)) => {
			let shell = *matches
				.get_one::<Shell>("shell")
				.expect("shell is required");
			print_completions(shell, &mut build_cli());
		}
		_ => {}
	}
	Ok(())
}

fn print_completions<G: Generator>(gen: G, cmd: &mut clap::Command) {
	generate(gen, cmd, "rgs", &mut std::io::stdout());
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn cli_definition_is_consistent() {
		build_cli().debug_assert();
	}

	#[test]
	fn parses_sign_string_with_inline_secret() {
		let m = build_cli()
			.try_get_matches_from([
				"rgs",
				"sign",
				"string",
				"-a",
				"hmac-sha512",
				"--secret",
				"secret",
				"something",
			])
			.unwrap();
		let (_, sign) = m.subcommand().unwrap();
		let (_, sub) = sign.subcommand().unwrap();
		let options = sign_options(
			sub,
			SignInput::Inline("something".to_string()),
		);
		assert_eq!(options.family, HashFamily::Sha512);
		assert_eq!(options.secret_source.description(), "inline");
		assert!(!options.hash_only);
	}

	#[test]
	fn rejects_two_secret_sources() {
		let result = build_cli().try_get_matches_from([
			"rgs",
			"sign",
			"string",
			"-a",
			"sha1",
			"--secret",
			"a",
			"--secret-env",
			"B",
			"x",
		]);
		assert!(result.is_err());
	}

	#[test]
	fn malformed_log_filter_is_rejected() {
		let bad = "rgs=notalevel".to_string();
		let err = log_filter(Some(&bad)).unwrap_err();
		assert!(err.to_string().contains("invalid --log filter"));

		let good = "rustgensig=debug".to_string();
		assert!(log_filter(Some(&good)).is_ok());
	}

	#[test]
	fn rejects_unknown_algorithm() {
		let result = build_cli().try_get_matches_from([
			"rgs", "sign", "string", "-a", "crc32", "--secret", "a",
			"x",
		]);
		assert!(result.is_err());
	}
}
