use std::sync::Arc;

use clap::Parser;
use log::*;
use phoneid::{ApiCredentials, FileFailureLog, PhoneValidator, WebApiTransport};
use secrecy::SecretString;

#[macro_use]
extern crate anyhow;

mod cli;

fn main() {
	let args = cli::Args::parse();

	stderrlog::new()
		.verbosity(args.verbosity as usize)
		.module(module_path!())
		.module("phoneid")
		.init()
		.unwrap();

	let api_key = match args.api_key {
		Some(key) => SecretString::new(key),
		None => match rpassword::prompt_password("API key: ") {
			Ok(key) => SecretString::new(key),
			Err(err) => {
				error!("Failed to read API key: {}", err);
				std::process::exit(2);
			}
		},
	};

	let credentials = ApiCredentials::new(args.customer_id, api_key);
	let transport = match &args.failure_log {
		Some(path) => WebApiTransport::with_failure_log(
			credentials,
			Arc::new(FileFailureLog::new(path)),
		),
		None => WebApiTransport::new(credentials),
	};
	let validator = PhoneValidator::with_transport(transport);

	let mut all_valid = true;
	for number in &args.phone_numbers {
		debug!("checking {}", number);
		let valid = validator.is_valid_phone_number(number);
		println!("{}\t{}", number, if valid { "valid" } else { "invalid" });
		all_valid = all_valid && valid;
	}

	std::process::exit(if all_valid { 0 } else { 1 });
}
