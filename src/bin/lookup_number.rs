//! CLI utility to look up a single phone number and print the result.

use rust_lookup_api::config::Config;
use rust_lookup_api::lookup_client::{LookupClient, LookupOutcome};
use rust_lookup_api::models::{LookupOptions, LookupType};

const USAGE: &str =
    "usage: lookup_number <phone> [--type carrier|caller-name] [--country-code CC] [--add-ons LIST]";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let phone_number = args.next().ok_or_else(|| anyhow::anyhow!(USAGE))?;

    let mut options = LookupOptions::default();
    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--type" => {
                let value = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--type requires a value"))?;
                options.lookup_type = Some(match value.as_str() {
                    "carrier" => LookupType::Carrier,
                    "caller-name" => LookupType::CallerName,
                    other => anyhow::bail!("unknown lookup type: {}", other),
                });
            }
            "--country-code" => {
                options.country_code = Some(
                    args.next()
                        .ok_or_else(|| anyhow::anyhow!("--country-code requires a value"))?,
                );
            }
            "--add-ons" => {
                options.add_ons = Some(
                    args.next()
                        .ok_or_else(|| anyhow::anyhow!("--add-ons requires a value"))?,
                );
            }
            _ => anyhow::bail!(USAGE),
        }
    }

    let config = Config::from_env()?;
    let client = LookupClient::new(&config)?;

    match client.lookup(&phone_number, &options).await? {
        LookupOutcome::Success(response) => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        LookupOutcome::Failure(failure) => {
            eprintln!("Lookup failed ({}): {}", failure.status, failure.message);
            eprintln!("{}", serde_json::to_string_pretty(&failure)?);
            std::process::exit(1);
        }
    }

    Ok(())
}
