use clap::{clap_derive::ArgEnum, Parser};
use std::str::FromStr;

#[derive(Debug, Clone, Parser)]
#[clap(name = "phoneid-cli", bin_name = "phoneid", author, version, about = "Check phone numbers for fraud risk from the command line.", long_about = None)]
pub(crate) struct Args {
	#[clap(
		short,
		long,
		env = "PHONEID_CUSTOMER_ID",
		help = "TeleSign customer ID used to authenticate API requests."
	)]
	pub customer_id: String,
	#[clap(
		short = 'k',
		long,
		env = "PHONEID_API_KEY",
		help = "TeleSign API key. If omitted, you will be prompted for it so it stays out of your shell history."
	)]
	pub api_key: Option<String>,
	#[clap(
		long,
		help = "Append failure diagnostics to this file instead of the default log path."
	)]
	pub failure_log: Option<String>,
	#[clap(short, long, arg_enum, default_value_t = Verbosity::Info, help = "Set the log level.")]
	pub verbosity: Verbosity,
	#[clap(
		required = true,
		help = "Phone numbers to check, with country code, eg. 15555550100."
	)]
	pub phone_numbers: Vec<String>,
}

#[derive(Debug, Clone, Copy, ArgEnum)]
pub(crate) enum Verbosity {
	Error = 0,
	Warn = 1,
	Info = 2,
	Debug = 3,
	Trace = 4,
}

impl std::fmt::Display for Verbosity {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_fmt(format_args!(
			"{}",
			match self {
				Verbosity::Error => "error",
				Verbosity::Warn => "warn",
				Verbosity::Info => "info",
				Verbosity::Debug => "debug",
				Verbosity::Trace => "trace",
			}
		))
	}
}

impl FromStr for Verbosity {
	type Err = anyhow::Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"error" => Ok(Verbosity::Error),
			"warn" => Ok(Verbosity::Warn),
			"info" => Ok(Verbosity::Info),
			"debug" => Ok(Verbosity::Debug),
			"trace" => Ok(Verbosity::Trace),
			_ => Err(anyhow!("Invalid verbosity level: {}", s)),
		}
	}
}
