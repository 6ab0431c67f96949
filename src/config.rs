//! Processing configuration.
//!
//! `Config` is an immutable-by-convention snapshot of the behavior flags
//! that drive one processing call. Process-wide defaults live in a single
//! cell ([`configure`] / [`reset_config`] / [`snapshot`]); every call
//! duplicates them, optionally tweaks the duplicate through a callback,
//! then merges per-call [`Overrides`] on top (overrides win on conflict).
//! The snapshot is consumed by exactly one success or failure execution,
//! so concurrent calls with different overrides never interfere.
//!
//! Reconfiguring the process-wide defaults is **not** ordered with respect
//! to in-flight processing calls. Hosts should reconfigure at startup only
//! and serialize any later reconfiguration themselves.
//!
//! # Examples
//!
//! ```rust
//! use api_response::{Config, Overrides};
//!
//! let mut config = Config::default();
//! config.monad = true;
//!
//! let overrides = Overrides::new().monad(false).error_json(true);
//! overrides.apply(&mut config);
//! assert!(!config.monad);
//! assert!(config.error_json);
//! ```

use std::fmt;
use std::sync::{Arc, RwLock};

use lazy_static::lazy_static;
use serde_json::Value;

use crate::extract::{identity, Projection};
use crate::outcome::StatusTag;
use crate::parser::{BodyParser, JsonParser};
use crate::processor::failure::FailureHandler;
use crate::processor::success::SuccessHandler;
use crate::processor::Handler;
use crate::response::Adapter;
use crate::structmap::StructMapper;

const DEFAULT_ERROR: &str = "External Api error";
const DEFAULT_ERROR_KEY: &str = "external_api_error";

/// Behavior flags for one processing call.
#[derive(Clone)]
pub struct Config {
    /// Which status accessor responses expose.
    pub adapter: Adapter,
    /// Return the original response unchanged, skipping everything else.
    pub raw_response: bool,
    /// Wrap the final value in a Success/Failure outcome instead of
    /// returning it bare.
    pub monad: bool,
    /// Projection applied to the parsed body (default: identity).
    pub extract_from_body: Projection,
    /// Target type for struct mapping; `None` skips mapping.
    pub struct_mapper: Option<StructMapper>,
    /// Failure path only: attempt to parse the body as structured JSON.
    pub error_json: bool,
    /// Fallback value when failure-path JSON parsing is skipped or errors.
    pub default_return_value: Option<Value>,
    /// Default status label for a wrapped failure.
    pub default_status: Option<StatusTag>,
    /// Whether a wrapped failure's status is symbolic or numeric.
    pub symbol_status: bool,
    /// Default error identity for a wrapped failure.
    pub default_error_key: Option<String>,
    pub default_error: Option<String>,
    /// Pluggable strategies.
    pub parser: Arc<dyn BodyParser>,
    pub success_handler: Arc<dyn Handler>,
    pub failure_handler: Arc<dyn Handler>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            adapter: Adapter::Faraday,
            raw_response: false,
            monad: false,
            extract_from_body: identity(),
            struct_mapper: None,
            error_json: false,
            default_return_value: None,
            default_status: Some(StatusTag::symbol("conflict")),
            symbol_status: true,
            default_error_key: Some(DEFAULT_ERROR_KEY.to_string()),
            default_error: Some(DEFAULT_ERROR.to_string()),
            parser: Arc::new(JsonParser),
            success_handler: Arc::new(SuccessHandler),
            failure_handler: Arc::new(FailureHandler),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("adapter", &self.adapter)
            .field("raw_response", &self.raw_response)
            .field("monad", &self.monad)
            .field("struct_mapper", &self.struct_mapper)
            .field("error_json", &self.error_json)
            .field("default_return_value", &self.default_return_value)
            .field("default_status", &self.default_status)
            .field("symbol_status", &self.symbol_status)
            .field("default_error_key", &self.default_error_key)
            .field("default_error", &self.default_error)
            .finish_non_exhaustive()
    }
}

lazy_static! {
    static ref DEFAULTS: RwLock<Config> = RwLock::new(Config::default());
}

/// Mutates the process-wide default configuration. Startup-time operation;
/// see the module docs for the ordering caveat.
pub fn configure(f: impl FnOnce(&mut Config)) {
    let mut defaults = DEFAULTS.write().unwrap();
    f(&mut defaults);
}

/// Restores the process-wide defaults to their crate-default values.
pub fn reset_config() {
    *DEFAULTS.write().unwrap() = Config::default();
}

/// Duplicates the process-wide defaults for one call.
pub fn snapshot() -> Config {
    DEFAULTS.read().unwrap().clone()
}

/// Per-call overrides: every field mirrors a [`Config`] field and is merged
/// only when set. Built in the same fluent style as the config builders
/// elsewhere; use a config callback instead when a field must be cleared
/// back to `None`.
#[derive(Clone, Default)]
pub struct Overrides {
    pub adapter: Option<Adapter>,
    pub raw_response: Option<bool>,
    pub monad: Option<bool>,
    pub extract_from_body: Option<Projection>,
    pub struct_mapper: Option<StructMapper>,
    pub error_json: Option<bool>,
    pub default_return_value: Option<Value>,
    pub default_status: Option<StatusTag>,
    pub symbol_status: Option<bool>,
    pub default_error_key: Option<String>,
    pub default_error: Option<String>,
    pub parser: Option<Arc<dyn BodyParser>>,
    pub success_handler: Option<Arc<dyn Handler>>,
    pub failure_handler: Option<Arc<dyn Handler>>,
}

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    fn map(mut self, f: impl FnOnce(&mut Overrides)) -> Self {
        f(&mut self);
        self
    }

    pub fn adapter(self, a: Adapter) -> Self {
        self.map(|o| o.adapter = Some(a))
    }
    pub fn raw_response(self, on: bool) -> Self {
        self.map(|o| o.raw_response = Some(on))
    }
    pub fn monad(self, on: bool) -> Self {
        self.map(|o| o.monad = Some(on))
    }
    pub fn extract_from_body(self, p: Projection) -> Self {
        self.map(|o| o.extract_from_body = Some(p))
    }
    pub fn struct_mapper(self, m: StructMapper) -> Self {
        self.map(|o| o.struct_mapper = Some(m))
    }
    pub fn error_json(self, on: bool) -> Self {
        self.map(|o| o.error_json = Some(on))
    }
    pub fn default_return_value(self, v: Value) -> Self {
        self.map(|o| o.default_return_value = Some(v))
    }
    pub fn default_status(self, s: StatusTag) -> Self {
        self.map(|o| o.default_status = Some(s))
    }
    pub fn symbol_status(self, on: bool) -> Self {
        self.map(|o| o.symbol_status = Some(on))
    }
    pub fn default_error_key<S: Into<String>>(self, k: S) -> Self {
        self.map(|o| o.default_error_key = Some(k.into()))
    }
    pub fn default_error<S: Into<String>>(self, e: S) -> Self {
        self.map(|o| o.default_error = Some(e.into()))
    }
    pub fn parser(self, p: Arc<dyn BodyParser>) -> Self {
        self.map(|o| o.parser = Some(p))
    }
    pub fn success_handler(self, h: Arc<dyn Handler>) -> Self {
        self.map(|o| o.success_handler = Some(h))
    }
    pub fn failure_handler(self, h: Arc<dyn Handler>) -> Self {
        self.map(|o| o.failure_handler = Some(h))
    }

    /// Merges the set fields onto `config`, overwriting named fields only.
    pub fn apply(&self, config: &mut Config) {
        if let Some(a) = self.adapter {
            config.adapter = a;
        }
        if let Some(on) = self.raw_response {
            config.raw_response = on;
        }
        if let Some(on) = self.monad {
            config.monad = on;
        }
        if let Some(p) = &self.extract_from_body {
            config.extract_from_body = p.clone();
        }
        if let Some(m) = &self.struct_mapper {
            config.struct_mapper = Some(m.clone());
        }
        if let Some(on) = self.error_json {
            config.error_json = on;
        }
        if let Some(v) = &self.default_return_value {
            config.default_return_value = Some(v.clone());
        }
        if let Some(s) = &self.default_status {
            config.default_status = Some(s.clone());
        }
        if let Some(on) = self.symbol_status {
            config.symbol_status = on;
        }
        if let Some(k) = &self.default_error_key {
            config.default_error_key = Some(k.clone());
        }
        if let Some(e) = &self.default_error {
            config.default_error = Some(e.clone());
        }
        if let Some(p) = &self.parser {
            config.parser = p.clone();
        }
        if let Some(h) = &self.success_handler {
            config.success_handler = h.clone();
        }
        if let Some(h) = &self.failure_handler {
            config.failure_handler = h.clone();
        }
    }
}
