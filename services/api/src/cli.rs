use crate::assess::{run_assess, AssessArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use risk_profile::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Risk Profile API",
    about = "Serve or run insurance risk profile assessments from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a single policy request read from a file or stdin
    Assess(AssessArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Assess(args) => run_assess(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["risk-profile-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn serve_accepts_host_and_port_overrides() {
        let cli = Cli::try_parse_from([
            "risk-profile-api",
            "serve",
            "--host",
            "0.0.0.0",
            "--port",
            "8080",
        ])
        .expect("parses");
        match cli.command {
            Some(Command::Serve(args)) => {
                assert_eq!(args.host.as_deref(), Some("0.0.0.0"));
                assert_eq!(args.port, Some(8080));
            }
            other => panic!("expected serve command, got {other:?}"),
        }
    }

    #[test]
    fn assess_parses_evaluation_date() {
        let cli = Cli::try_parse_from([
            "risk-profile-api",
            "assess",
            "--input",
            "request.json",
            "--as-of",
            "2023-06-01",
            "--explain",
        ])
        .expect("parses");
        match cli.command {
            Some(Command::Assess(args)) => {
                assert_eq!(args.as_of, chrono::NaiveDate::from_ymd_opt(2023, 6, 1));
                assert!(args.explain);
                assert!(!args.pretty);
            }
            other => panic!("expected assess command, got {other:?}"),
        }
    }

    #[test]
    fn assess_rejects_malformed_dates() {
        let err = Cli::try_parse_from(["risk-profile-api", "assess", "--as-of", "June 1st"])
            .expect_err("bad date rejected");
        assert!(err.to_string().contains("YYYY-MM-DD"));
    }
}
