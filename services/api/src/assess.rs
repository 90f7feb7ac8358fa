use chrono::{Local, NaiveDate};
use clap::Args;
use risk_profile::config::AppConfig;
use risk_profile::error::AppError;
use risk_profile::policies::{FixedClock, PolicyService, ScoringConfig};
use risk_profile::telemetry;
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct AssessArgs {
    /// Policy request JSON file. Reads stdin when omitted.
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
    /// Evaluation date (YYYY-MM-DD), defaults to today
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) as_of: Option<NaiveDate>,
    /// Print the rule trail and pre-override tiers alongside the response
    #[arg(long)]
    pub(crate) explain: bool,
    /// Pretty-print the JSON output
    #[arg(long)]
    pub(crate) pretty: bool,
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init_stderr(&config.telemetry)?;

    let body = match &args.input {
        Some(path) => std::fs::read(path)?,
        None => {
            let mut buffer = Vec::new();
            std::io::stdin().read_to_end(&mut buffer)?;
            buffer
        }
    };

    let as_of = args.as_of.unwrap_or_else(|| Local::now().date_naive());
    let rendered = assess_body(&body, as_of, args.explain, args.pretty)?;
    println!("{rendered}");
    Ok(())
}

pub(crate) fn assess_body(
    body: &[u8],
    as_of: NaiveDate,
    explain: bool,
    pretty: bool,
) -> Result<String, AppError> {
    let service = PolicyService::new(Arc::new(FixedClock(as_of)), ScoringConfig::default());
    let output = if explain {
        serde_json::to_value(service.evaluate_json(body)?)
    } else {
        serde_json::to_value(service.assess_json(body)?)
    }
    .map_err(|err| AppError::Internal(err.to_string()))?;

    let rendered = if pretty {
        serde_json::to_string_pretty(&output)
    } else {
        serde_json::to_string(&output)
    }
    .map_err(|err| AppError::Internal(err.to_string()))?;

    Ok(rendered)
}
