//! StoreApp configuration and setup.

use std::path::Path;
use std::time::Duration;

use blush_auth::DEFAULT_LOGIN_PATH;
use blush_router::{storefront_routes, RouteTable};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::StoreError;
use crate::navigator::Navigator;
use crate::telemetry::TelemetryConfig;

/// Configuration for a Blush storefront.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Application name.
    pub name: String,
    /// Default page title.
    pub default_title: String,
    /// Where the auth guard sends signed-out visitors.
    pub login_path: String,
    /// Simulated latency of the stub data hooks, in milliseconds.
    pub data_latency_ms: u64,
    /// Page size for product and order listings.
    pub per_page: u32,
    /// CSS file path.
    pub css_path: Option<String>,
    pub log: TelemetryConfig,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: "Blush".to_string(),
            default_title: "Blush | Beauty & Skincare".to_string(),
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            data_latency_ms: 500,
            per_page: 24,
            css_path: None,
            log: TelemetryConfig::default(),
        }
    }
}

impl StoreConfig {
    /// Create a new configuration with the given store name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the default page title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.default_title = title.into();
        self
    }

    /// Set the login path used by the auth guard.
    pub fn with_login_path(mut self, path: impl Into<String>) -> Self {
        self.login_path = path.into();
        self
    }

    /// Set the simulated data latency.
    pub fn with_latency(mut self, millis: u64) -> Self {
        self.data_latency_ms = millis;
        self
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    /// Set the CSS file path.
    pub fn with_css(mut self, path: impl Into<String>) -> Self {
        self.css_path = Some(path.into());
        self
    }

    pub fn with_log(mut self, log: TelemetryConfig) -> Self {
        self.log = log;
        self
    }

    pub fn data_latency(&self) -> Duration {
        Duration::from_millis(self.data_latency_ms)
    }

    /// Parse and validate a TOML document. Missing keys take defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, StoreError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&source)?;
        debug!(path = %path.display(), name = %config.name, "loaded store config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), StoreError> {
        if self.name.trim().is_empty() {
            return Err(StoreError::Config("name must not be empty".to_string()));
        }
        if !self.login_path.starts_with('/') {
            return Err(StoreError::Config(format!(
                "login_path must start with '/': {}",
                self.login_path
            )));
        }
        if self.per_page == 0 {
            return Err(StoreError::Config("per_page must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// Blush application builder.
///
/// # Example
///
/// ```rust
/// use blush_core::StoreApp;
///
/// let (config, routes) = StoreApp::new("blush")
///     .with_title("Blush")
///     .with_css("/pkg/blush.css")
///     .build()
///     .unwrap();
/// assert_eq!(config.default_title, "Blush");
/// assert!(routes.resolve("/cart").is_ok());
/// ```
#[derive(Debug)]
pub struct StoreApp {
    config: StoreConfig,
    routes: RouteTable,
}

impl StoreApp {
    /// Create a new app with the given name and the storefront route table.
    pub fn new(name: impl Into<String>) -> Self {
        Self::from_config(StoreConfig::new(name))
    }

    pub fn from_config(config: StoreConfig) -> Self {
        Self {
            config,
            routes: storefront_routes(),
        }
    }

    /// Set the default page title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.config = self.config.with_title(title);
        self
    }

    /// Set the CSS file path.
    pub fn with_css(mut self, path: impl Into<String>) -> Self {
        self.config = self.config.with_css(path);
        self
    }

    pub fn with_login_path(mut self, path: impl Into<String>) -> Self {
        self.config = self.config.with_login_path(path);
        self
    }

    pub fn with_latency(mut self, millis: u64) -> Self {
        self.config = self.config.with_latency(millis);
        self
    }

    /// Replace the route table.
    pub fn with_routes(mut self, routes: RouteTable) -> Self {
        self.routes = routes;
        self
    }

    /// Get the configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Get the route table.
    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Validate and hand back the configuration and route table.
    pub fn build(self) -> Result<(StoreConfig, RouteTable), StoreError> {
        self.config.validate()?;
        Ok((self.config, self.routes))
    }

    /// Install the tracing subscriber described by the `[log]` table.
    ///
    /// Returns `false` if one was already installed.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn init_tracing(&self) -> bool {
        crate::telemetry::init_tracing(&self.config.log)
    }

    /// Validate and build a headless navigator.
    pub fn navigator(self) -> Result<Navigator, StoreError> {
        let (config, routes) = self.build()?;
        Ok(Navigator::new(routes, config.login_path))
    }
}
