use super::XrayError;

pub const XRAY_FORMAT: &str = "xray";
pub const JUNIT_FORMAT: &str = "junit";
pub const TESTNG_FORMAT: &str = "testng";
pub const ROBOT_FORMAT: &str = "robot";
pub const NUNIT_FORMAT: &str = "nunit";
pub const XUNIT_FORMAT: &str = "xunit";
pub const CUCUMBER_FORMAT: &str = "cucumber";
pub const BEHAVE_FORMAT: &str = "behave";

pub(crate) const APPLICATION_XML: &str = "application/xml";
pub(crate) const APPLICATION_JSON: &str = "application/json";

/// Wire description of one supported report format: the path segment of its
/// import endpoints (empty for the native format), the payload content-type,
/// and whether its standard endpoint accepts query-string metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatInfo {
    pub name: &'static str,
    pub endpoint: &'static str,
    pub content_type: &'static str,
    pub supports_query_params: bool,
}

impl FormatInfo {
    pub fn is_xml(&self) -> bool {
        self.content_type == APPLICATION_XML
    }

    pub fn file_extension(&self) -> &'static str {
        if self.is_xml() {
            "xml"
        } else {
            "json"
        }
    }
}

const FORMATS: [FormatInfo; 8] = [
    FormatInfo {
        name: XRAY_FORMAT,
        endpoint: "",
        content_type: APPLICATION_JSON,
        supports_query_params: false,
    },
    FormatInfo {
        name: JUNIT_FORMAT,
        endpoint: "junit",
        content_type: APPLICATION_XML,
        supports_query_params: true,
    },
    FormatInfo {
        name: TESTNG_FORMAT,
        endpoint: "testng",
        content_type: APPLICATION_XML,
        supports_query_params: true,
    },
    FormatInfo {
        name: ROBOT_FORMAT,
        endpoint: "robot",
        content_type: APPLICATION_XML,
        supports_query_params: true,
    },
    FormatInfo {
        name: NUNIT_FORMAT,
        endpoint: "nunit",
        content_type: APPLICATION_XML,
        supports_query_params: true,
    },
    FormatInfo {
        name: XUNIT_FORMAT,
        endpoint: "xunit",
        content_type: APPLICATION_XML,
        supports_query_params: true,
    },
    FormatInfo {
        name: CUCUMBER_FORMAT,
        endpoint: "cucumber",
        content_type: APPLICATION_JSON,
        supports_query_params: false,
    },
    FormatInfo {
        name: BEHAVE_FORMAT,
        endpoint: "behave",
        content_type: APPLICATION_JSON,
        supports_query_params: false,
    },
];

pub fn lookup(format: Option<&str>) -> Result<&'static FormatInfo, XrayError> {
    let name = match format {
        Some(value) if !value.is_empty() => value,
        _ => return Err(XrayError::message("format must be specified")),
    };
    FORMATS
        .iter()
        .find(|info| info.name == name)
        .ok_or_else(|| XrayError::message(format!("unsupported format {name}")))
}
