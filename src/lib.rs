pub mod cli_app;
pub mod config;
pub mod constants;
pub mod utils;
pub mod xray_api;

pub use xray_api::cloud::{XrayCloudClient, XRAY_CLOUD_BASE_URL};
pub use xray_api::datacenter::XrayDatacenterClient;
pub use xray_api::format::{
    BEHAVE_FORMAT, CUCUMBER_FORMAT, JUNIT_FORMAT, NUNIT_FORMAT, ROBOT_FORMAT, TESTNG_FORMAT,
    XRAY_FORMAT, XUNIT_FORMAT,
};
pub use xray_api::models::report_config::ReportConfig;
pub use xray_api::models::settings::{XrayCloudSettings, XrayDatacenterSettings, DEFAULT_TIMEOUT};
pub use xray_api::models::xray_response::{RawResponse, XrayResponse};
pub use xray_api::XrayError;
