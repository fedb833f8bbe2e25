/// Default input locations, relative to the Android project root
pub mod paths {
    /// Company configuration document
    pub const CONFIG_FILE: &str = "config.json";

    /// Firebase services descriptor
    pub const SERVICES_FILE: &str = "app/google-services.json";

    /// Root of the Gradle APK outputs
    pub const APK_OUTPUT_ROOT: &str = "app/build/outputs/apk";
}

/// Environment variable names
pub mod env {
    /// File GitHub Actions reads step outputs from
    pub const GITHUB_OUTPUT: &str = "GITHUB_OUTPUT";
}

/// Flavour constants
pub mod flavour {
    /// Flavour whose package id carries no suffix
    pub const PROD: &str = "prod";
}

/// Process exit codes, stable for CI callers
pub mod exit_code {
    /// Generic failure (rename errors, unexpected errors)
    pub const FAILURE: i32 = 1;

    /// Bad command-line arguments (clap uses the same code)
    pub const USAGE: i32 = 2;

    /// Company configuration could not be read or parsed
    pub const CONFIG_READ: i32 = 3;

    /// No company matched the requested name
    pub const COMPANY_NOT_FOUND: i32 = 4;

    /// Services descriptor could not be read or parsed
    pub const SERVICES_READ: i32 = 5;

    /// Matched company has no app.id
    pub const MISSING_COMPANY_APP_ID: i32 = 6;

    /// No client matched the qualified package id
    pub const CLIENT_NOT_FOUND: i32 = 7;

    /// Matched client has no mobilesdk_app_id
    pub const MISSING_CLIENT_APP_ID: i32 = 8;

    /// No company given and the client list is not exactly one entry
    pub const AMBIGUOUS_CLIENT: i32 = 9;
}
