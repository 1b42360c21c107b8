/// Base URL the SDK talks to when none is configured on the builder.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

// Endpoint paths, relative to the base URL.
pub const AUTH_LOGIN: &str = "/auth/login";
pub const PRINT_PRICES: &str = "/print-prices";
pub const PRINT_PRICES_UPDATE: &str = "/print-prices/update";
pub const JOBS_BY_DATE: &str = "/maintop/by-date";
pub const JOBS_BY_MONTH: &str = "/maintop/by-month";
pub const DASHBOARD_STATS: &str = "/impressions/stats";
pub const USER_PROFILE: &str = "/api/user/profile";
pub const CHANGE_PASSWORD: &str = "/api/user/change-password";
pub const MAIN_TOP_PATH: &str = "/settings/main-top-path";
pub const MAIN_TOP_PATH_DETECT: &str = "/settings/main-top-path/detect";
