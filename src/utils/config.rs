use std::env;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: expected {expected}")]
    InvalidValue {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Which of the two contract shapes the server speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiVariant {
    /// Projects under `POST /api/organisation/getUserOrganization`, strict activity records.
    V1,
    /// Projects under `POST /api/project/getProjectList`, lenient activity records, sign-out.
    V2,
}

impl FromStr for ApiVariant {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "v1" | "1" => Ok(ApiVariant::V1),
            "v2" | "2" => Ok(ApiVariant::V2),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// Project, task and activity routes require a `Bearer ` header.
    Strict,
    Open,
}

impl FromStr for AuthMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "strict" | "strict-auth" => Ok(AuthMode::Strict),
            "open" | "open-auth" => Ok(AuthMode::Open),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskListing {
    /// Every task in the table, whatever the request asks for.
    Fixed,
    /// Only tasks whose `projectId` equals the requested one.
    Filtered,
}

impl FromStr for TaskListing {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fixed" | "fixed-list" => Ok(TaskListing::Fixed),
            "filtered" | "filtered-list" => Ok(TaskListing::Filtered),
            _ => Err(()),
        }
    }
}

/// The single account sign-in accepts.
#[derive(Debug, Clone)]
pub struct DemoAccount {
    pub email: String,
    pub password: String,
    pub user_id: i64,
    pub first_name: String,
    pub last_name: String,
}

impl Default for DemoAccount {
    fn default() -> Self {
        DemoAccount {
            email: String::from("john.doe@example.com"),
            password: String::from("securePassword123"),
            user_id: 101,
            first_name: String::from("John"),
            last_name: String::from("Doe"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub variant: ApiVariant,
    pub auth_mode: AuthMode,
    pub task_listing: TaskListing,
    pub account: DemoAccount,
    pub token_secret: String,
}

impl Settings {
    /// Profile defaults for a variant: v1 gates routes and returns fixed task
    /// lists, v2 is open and filters tasks by project.
    pub fn for_variant(variant: ApiVariant) -> Settings {
        let (auth_mode, task_listing) = match variant {
            ApiVariant::V1 => (AuthMode::Strict, TaskListing::Fixed),
            ApiVariant::V2 => (AuthMode::Open, TaskListing::Filtered),
        };

        Settings {
            host: String::from("0.0.0.0"),
            port: 8000,
            variant,
            auth_mode,
            task_listing,
            account: DemoAccount::default(),
            token_secret: String::from("temporary-test-key"),
        }
    }

    pub fn from_env() -> Result<Settings, ConfigError> {
        Settings::from_lookup(|key| env::var(key).ok())
    }

    /// Builds settings from any key lookup so tests do not touch the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Settings, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let variant = parse_var(&lookup, "API_VARIANT", "v1 or v2")?.unwrap_or(ApiVariant::V2);
        let mut settings = Settings::for_variant(variant);

        if let Some(host) = lookup("SERVER_HOST") {
            settings.host = host;
        }
        if let Some(port) = parse_var(&lookup, "SERVER_PORT", "a port number")? {
            settings.port = port;
        }
        if let Some(mode) = parse_var(&lookup, "AUTH_MODE", "strict or open")? {
            settings.auth_mode = mode;
        }
        if let Some(listing) = parse_var(&lookup, "TASK_LISTING", "fixed or filtered")? {
            settings.task_listing = listing;
        }
        if let Some(email) = lookup("AUTH_EMAIL") {
            settings.account.email = email;
        }
        if let Some(password) = lookup("AUTH_PASSWORD") {
            settings.account.password = password;
        }
        if let Some(user_id) = parse_var(&lookup, "AUTH_USER_ID", "an integer")? {
            settings.account.user_id = user_id;
        }
        if let Some(first_name) = lookup("AUTH_FIRST_NAME") {
            settings.account.first_name = first_name;
        }
        if let Some(last_name) = lookup("AUTH_LAST_NAME") {
            settings.account.last_name = last_name;
        }
        if let Some(secret) = lookup("TOKEN_SECRET") {
            settings.token_secret = secret;
        }

        Ok(settings)
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

fn parse_var<F, T>(lookup: &F, key: &'static str, expected: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(None),
        Some(value) => match value.trim().parse::<T>() {
            Ok(parsed) => Ok(Some(parsed)),
            Err(_) => Err(ConfigError::InvalidValue { key, value, expected }),
        },
    }
}
