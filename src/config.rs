use crate::cli::CommonArgs;
use crate::util::normalize_token;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Runtime settings resolved from command-line flags and the environment.
#[derive(Clone)]
pub struct Settings {
    pub api_url: String,
    pub token: Option<String>,
    pub user_agent: String,
    pub timeout: Option<Duration>,
}

impl Settings {
    pub fn from_common(common: &CommonArgs) -> Self {
        Self {
            api_url: common
                .api_url
                .clone()
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            token: normalize_token(common.token.as_deref()).map(str::to_string),
            user_agent: default_user_agent(),
            timeout: common.timeout.map(Duration::from_secs),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token: None,
            user_agent: default_user_agent(),
            timeout: None,
        }
    }
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("api_url", &self.api_url)
            .field("token", &self.token.as_ref().map(|_| "***"))
            .field("user_agent", &self.user_agent)
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn common() -> CommonArgs {
        CommonArgs {
            token: None,
            api_url: None,
            timeout: None,
            verbose: 0,
            quiet: false,
        }
    }

    #[test]
    fn defaults_to_public_api() {
        let settings = Settings::from_common(&common());
        assert_eq!(settings.api_url, DEFAULT_API_URL);
        assert!(settings.token.is_none());
        assert!(settings.timeout.is_none());
        assert!(settings.user_agent.starts_with("ghpulse/"));
    }

    #[test]
    fn blank_token_is_dropped() {
        let mut args = common();
        args.token = Some("   ".to_string());
        assert!(Settings::from_common(&args).token.is_none());
    }

    #[test]
    fn debug_masks_token() {
        let mut args = common();
        args.token = Some("ghp_secret".to_string());
        args.timeout = Some(5);
        let settings = Settings::from_common(&args);
        let rendered = format!("{settings:?}");
        assert!(!rendered.contains("ghp_secret"));
        assert_eq!(settings.timeout, Some(Duration::from_secs(5)));
    }
}
