use clap::{Args, Parser, Subcommand};

use crate::config::Config;
use crate::constants::Message;
use crate::xray_api::cloud::XrayCloudClient;
use crate::xray_api::datacenter::XrayDatacenterClient;
use crate::xray_api::models::report_config::ReportConfig;
use crate::xray_api::XrayError;

#[derive(Parser)]
#[command(
    name = "wox",
    version,
    about = "CLI for Xray Test Management <https://www.getxray.app/>. wox - WrapperOverXray",
    long_about = None,
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Submit a test report to Xray
    Submit(SubmitArgs),
    /// Associate a Test Execution to a Test Plan
    Associate(AssociateArgs),
}

#[derive(Args)]
pub struct SubmitArgs {
    /// Path to the report file
    #[arg(long, short, required = true)]
    pub report_file: String,
    /// Report format: xray, junit, testng, robot, nunit, xunit, cucumber, behave
    #[arg(long, short, required = true)]
    pub format: String,
    #[arg(long)]
    pub project_key: Option<String>,
    #[arg(long)]
    pub test_plan_key: Option<String>,
    #[arg(long)]
    pub test_exec_key: Option<String>,
    /// Fix version
    #[arg(long)]
    pub fix_version: Option<String>,
    #[arg(long)]
    pub revision: Option<String>,
    /// May be passed multiple times
    #[arg(long = "test-environment")]
    pub test_environment: Vec<String>,
    /// Use the multipart endpoint
    #[arg(long)]
    pub multipart: bool,
    /// Test Execution fields file for multipart submissions
    #[arg(long)]
    pub test_exec_info_file: Option<String>,
    /// Test fields file for multipart submissions
    #[arg(long)]
    pub test_info_file: Option<String>,
    /// Target a server/datacenter instance instead of the cloud
    #[arg(long)]
    pub server: bool,
}

#[derive(Args)]
pub struct AssociateArgs {
    /// Test Execution key (issue id for the cloud)
    #[arg(long, short = 'e', required = true)]
    pub test_exec: String,
    /// Test Plan key
    #[arg(long, short = 'p', required = true)]
    pub test_plan: String,
    /// Target a server/datacenter instance instead of the cloud
    #[arg(long)]
    pub server: bool,
}

impl SubmitArgs {
    fn report_config(&self) -> ReportConfig {
        let mut config = ReportConfig::new(&self.format);
        config.project_key = self.project_key.clone();
        config.test_plan_key = self.test_plan_key.clone();
        config.test_exec_key = self.test_exec_key.clone();
        config.version = self.fix_version.clone();
        config.revision = self.revision.clone();
        match self.test_environment.len() {
            0 => {}
            1 => config.test_environment = Some(self.test_environment[0].clone()),
            _ => config.test_environments = Some(self.test_environment.clone()),
        }
        config.test_exec_info_file = self.test_exec_info_file.clone().map(Into::into);
        config.test_info_file = self.test_info_file.clone().map(Into::into);
        config
    }
}

async fn submit(args: &SubmitArgs, config: &Config) -> Result<Message, XrayError> {
    let report_config = args.report_config();
    let response = if args.server {
        let client = XrayDatacenterClient::new(config.datacenter_settings()?)?;
        if args.multipart {
            client
                .submit_results_multipart(&args.report_file, &report_config)
                .await?
        } else {
            client.submit_results(&args.report_file, &report_config).await?
        }
    } else {
        let client = XrayCloudClient::new(config.cloud_settings()?)?;
        if args.multipart {
            client
                .submit_results_multipart(&args.report_file, &report_config)
                .await?
        } else {
            client.submit_results(&args.report_file, &report_config).await?
        }
    };
    Ok(Message::ExecutionImported(response.key, response.self_url))
}

async fn associate(args: &AssociateArgs, config: &Config) -> Result<Message, XrayError> {
    if args.server {
        let client = XrayDatacenterClient::new(config.datacenter_settings()?)?;
        let exec = client
            .associate_test_execution_to_test_plan(&args.test_exec, &args.test_plan)
            .await?;
        Ok(Message::ExecutionAssociated(exec, args.test_plan.clone()))
    } else {
        let client = XrayCloudClient::new(config.cloud_settings()?)?;
        let test_plan_id = client.get_test_plan_id(&args.test_plan).await?;
        let exec = client
            .associate_test_execution_to_test_plan_by_ids(&args.test_exec, &test_plan_id)
            .await?;
        Ok(Message::ExecutionAssociated(exec, args.test_plan.clone()))
    }
}

pub async fn handle_command(cli: Cli, config: &Config) {
    match &cli.command {
        Commands::Submit(args) => match submit(args, config).await {
            Ok(message) => println!("{}", message.to_formatted_string()),
            Err(e) => eprintln!("Failed to submit results: {}", e),
        },
        Commands::Associate(args) => match associate(args, config).await {
            Ok(message) => println!("{}", message.to_formatted_string()),
            Err(e) => eprintln!("Failed to associate test execution: {}", e),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("report.xml", "-r")]
    #[case("./results/report.xml", "--report-file")]
    fn test_submit_command_parsing(#[case] report: String, #[case] flag: String) {
        let args = Cli::parse_from([
            "wox",
            "submit",
            &flag,
            &report,
            "--format",
            "junit",
            "--project-key",
            "XRAY",
        ]);
        match args.command {
            Commands::Submit(value) => {
                assert_eq!(value.report_file, report);
                assert_eq!(value.format, "junit");
                assert_eq!(value.project_key.as_deref(), Some("XRAY"));
                assert!(!value.multipart);
                assert!(!value.server);
            }
            _ => panic!("expected the submit command"),
        }
    }

    #[test]
    fn test_submit_command_collects_repeated_test_environments() {
        let args = Cli::parse_from([
            "wox",
            "submit",
            "-r",
            "report.xml",
            "-f",
            "junit",
            "--test-environment",
            "chrome",
            "--test-environment",
            "mac",
        ]);
        match args.command {
            Commands::Submit(value) => {
                let config = value.report_config();
                assert_eq!(
                    config.test_environments,
                    Some(vec!["chrome".to_string(), "mac".to_string()])
                );
                assert!(config.test_environment.is_none());
            }
            _ => panic!("expected the submit command"),
        }
    }

    #[test]
    fn test_submit_command_single_test_environment_stays_scalar() {
        let args = Cli::parse_from([
            "wox",
            "submit",
            "-r",
            "report.xml",
            "-f",
            "junit",
            "--test-environment",
            "chrome",
        ]);
        match args.command {
            Commands::Submit(value) => {
                let config = value.report_config();
                assert_eq!(config.test_environment.as_deref(), Some("chrome"));
                assert!(config.test_environments.is_none());
            }
            _ => panic!("expected the submit command"),
        }
    }

    #[rstest]
    #[case(vec!["wox", "submit", "-r", "report.xml"])]
    #[case(vec!["wox", "associate", "-e", "XRAY-11"])]
    #[case(vec!["wox", "unknown"])]
    fn test_invalid_command_lines(#[case] argv: Vec<&str>) {
        assert!(Cli::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_associate_command_parsing() {
        let args = Cli::parse_from([
            "wox",
            "associate",
            "-e",
            "XRAY-11",
            "-p",
            "XRAY-10",
            "--server",
        ]);
        match args.command {
            Commands::Associate(value) => {
                assert_eq!(value.test_exec, "XRAY-11");
                assert_eq!(value.test_plan, "XRAY-10");
                assert!(value.server);
            }
            _ => panic!("expected the associate command"),
        }
    }
}
