/// User agent string for HTTP requests
pub const USER_AGENT: &str = "acuparse-client/0.1.0";

/// System health endpoint
pub const HEALTH_PATH: &str = "/api/system/health";

/// Current-conditions dashboard endpoint
pub const DASHBOARD_PATH: &str = "/api/v1/json/dashboard/?main";

/// Historical archive endpoint
pub const ARCHIVE_PATH: &str = "/api/v1/json/archive";
