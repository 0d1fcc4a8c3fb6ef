//! CLI definitions shared by `fetch-kit` and `kitgen`.

use clap::{Args, Parser};
use typekit::{
    ClientConfig,
    config::{API_BASE_URL, API_URL_ENV, TOKEN_ENV},
};

use crate::error::UsageError;

/// Options every tool needs to reach the API.
#[derive(Debug, Clone, Args)]
pub struct ApiArgs {
    /// Authentication token to use
    #[arg(short, long, value_name = "TOKEN", env = TOKEN_ENV, hide_env_values = true)]
    pub token: Option<String>,

    /// Enable extra debugging information
    #[arg(long)]
    pub debug: bool,

    #[arg(long, value_name = "URL", env = API_URL_ENV, default_value = API_BASE_URL, hide = true)]
    pub api_url: String,
}

impl ApiArgs {
    /// Client configuration, or a usage error when no token was given.
    pub fn client_config(&self) -> Result<ClientConfig, UsageError> {
        let token = self
            .token
            .as_deref()
            .filter(|t| !t.is_empty())
            .ok_or(UsageError::MissingToken)?;
        Ok(ClientConfig::new(token)
            .with_base_url(&self.api_url)
            .with_debug(self.debug))
    }
}

#[derive(Debug, Parser)]
#[command(name = "fetch-kit")]
#[command(about = "Browse the kits of a Typekit account")]
#[command(override_usage = "fetch-kit --token=TOKEN [OPTIONS]")]
pub struct FetchKitCli {
    #[command(flatten)]
    pub api: ApiArgs,

    /// Delete the kit with this ID before listing (repeatable)
    #[arg(long = "delete", value_name = "ID")]
    pub delete: Vec<String>,
}

#[derive(Debug, Parser)]
#[command(name = "kitgen")]
#[command(about = "Create a Typekit kit from font family slugs")]
#[command(override_usage = "kitgen --token=TOKEN [OPTIONS] FAMILY...")]
pub struct KitgenCli {
    /// Font families as slug[:variations] (e.g., droid-sans:n4,i7)
    #[arg(value_name = "FAMILY")]
    pub families: Vec<String>,

    #[command(flatten)]
    pub api: ApiArgs,

    /// Name for generated kit (default: first domain)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Domain(s) this kit will be used on (default: localhost)
    #[arg(short, long = "domain", value_name = "DOMAIN")]
    pub domains: Vec<String>,

    /// Show version
    #[arg(short = 'v', long)]
    pub version: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kitgen_args() {
        let cli = KitgenCli::try_parse_from([
            "kitgen",
            "--token=abc",
            "-d",
            "example.com",
            "--domain=example.org",
            "-n",
            "My Kit",
            "droid-sans:n4",
            "proxima-nova",
        ])
        .unwrap();
        assert_eq!(cli.families, vec!["droid-sans:n4", "proxima-nova"]);
        assert_eq!(cli.domains, vec!["example.com", "example.org"]);
        assert_eq!(cli.name.as_deref(), Some("My Kit"));

        let config = cli.api.client_config().unwrap();
        assert_eq!(config.token, "abc");
        assert_eq!(config.base_url, API_BASE_URL);
        assert!(!config.debug);
    }

    #[test]
    fn test_empty_token_is_usage_error() {
        let cli = FetchKitCli::try_parse_from(["fetch-kit", "--token="]).unwrap();
        assert!(matches!(cli.api.client_config(), Err(UsageError::MissingToken)));
    }

    #[test]
    fn test_version_flag_without_token() {
        let cli = KitgenCli::try_parse_from(["kitgen", "-v"]).unwrap();
        assert!(cli.version);
    }

    #[test]
    fn test_fetch_kit_debug_and_delete() {
        let cli = FetchKitCli::try_parse_from([
            "fetch-kit", "-t", "abc", "--debug", "--delete", "k1", "--delete=k2",
        ])
        .unwrap();
        assert!(cli.api.client_config().unwrap().debug);
        assert_eq!(cli.delete, vec!["k1", "k2"]);
    }
}
