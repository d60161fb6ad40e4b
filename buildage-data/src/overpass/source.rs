//! Element sources backed by an Overpass HTTP endpoint.
//!
//! The [`ElementSource`] trait is synchronous so the pipeline can stay a
//! plain loop. [`HttpOverpassSource`] bridges to the async `reqwest` client by
//! blocking on a Tokio runtime it owns.

use std::time::Duration;

use buildage_core::District;
use reqwest::Client;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};

use super::{ClientBuildError, FetchError, OverpassDocument, building_query};

/// Public Overpass interpreter endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://overpass-api.de/api/interpreter";

/// Default user agent for Overpass requests.
pub const DEFAULT_USER_AGENT: &str = "buildage-overpass/0.1";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Form field carrying the query text.
const QUERY_FIELD: &str = "data";

/// Source of raw upstream elements for a district.
pub trait ElementSource {
    /// Fetch every building way inside `district`'s bounding box.
    ///
    /// One call issues one upstream request; implementations must not retry.
    fn fetch_elements(&self, district: &District) -> Result<OverpassDocument, FetchError>;
}

impl<S: ElementSource + ?Sized> ElementSource for &S {
    fn fetch_elements(&self, district: &District) -> Result<OverpassDocument, FetchError> {
        (**self).fetch_elements(district)
    }
}

/// Configuration for [`HttpOverpassSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpOverpassSourceConfig {
    /// Interpreter endpoint URL.
    pub endpoint: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl Default for HttpOverpassSourceConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl HttpOverpassSourceConfig {
    /// Create a new configuration for the given endpoint.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Overpass-backed [`ElementSource`].
///
/// Each call sends one form-encoded POST with the query in the `data` field
/// and decodes the JSON body. Any status outside `2xx` becomes
/// [`FetchError::Http`].
///
/// # Runtime behaviour
///
/// Outside any Tokio runtime, or inside a `current_thread` runtime, requests
/// run on the source's own runtime. Inside a multi-threaded runtime the
/// caller's handle is used via [`tokio::task::block_in_place`].
///
/// # Example
///
/// ```no_run
/// use buildage_core::Catalog;
/// use buildage_data::overpass::{ElementSource, HttpOverpassSource};
///
/// let source = HttpOverpassSource::new("https://overpass-api.de/api/interpreter")?;
/// let catalog = Catalog::cologne();
/// for district in &catalog {
///     let document = source.fetch_elements(district)?;
///     println!("{}: {} elements", district.name(), document.elements.len());
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct HttpOverpassSource {
    client: Client,
    config: HttpOverpassSourceConfig,
    runtime: Runtime,
}

impl std::fmt::Debug for HttpOverpassSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpOverpassSource")
            .field("client", &self.client)
            .field("config", &self.config)
            .field("runtime", &"<tokio::runtime::Runtime>")
            .finish()
    }
}

impl HttpOverpassSource {
    /// Create a source with default timeout and user agent.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, ClientBuildError> {
        Self::with_config(HttpOverpassSourceConfig::new(endpoint))
    }

    /// Create a source with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn with_config(config: HttpOverpassSourceConfig) -> Result<Self, ClientBuildError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(ClientBuildError::HttpClient)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ClientBuildError::Runtime)?;
        Ok(Self {
            client,
            config,
            runtime,
        })
    }

    /// Configuration the source was built with.
    #[must_use]
    pub const fn config(&self) -> &HttpOverpassSourceConfig {
        &self.config
    }

    async fn fetch_async(&self, query: String) -> Result<OverpassDocument, FetchError> {
        let url = self.config.endpoint.as_str();
        let response = self
            .client
            .post(url)
            .form(&[(QUERY_FIELD, query)])
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err))?;

        // Anything but 2xx is a failure, including unfollowed 3xx responses.
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                url: url.to_owned(),
                status: status.as_u16(),
                message: status
                    .canonical_reason()
                    .unwrap_or("non-success status")
                    .to_owned(),
            });
        }

        response
            .json::<OverpassDocument>()
            .await
            .map_err(|err| FetchError::Decode {
                url: url.to_owned(),
                message: err.to_string(),
            })
    }

    fn convert_reqwest_error(&self, error: &reqwest::Error) -> FetchError {
        let url = self.config.endpoint.clone();
        if error.is_timeout() {
            return FetchError::Timeout {
                url,
                timeout_secs: self.config.timeout.as_secs(),
            };
        }

        if let Some(status) = error.status() {
            return FetchError::Http {
                url,
                status: status.as_u16(),
                message: error.to_string(),
            };
        }

        FetchError::Network {
            url,
            message: error.to_string(),
        }
    }
}

impl ElementSource for HttpOverpassSource {
    fn fetch_elements(&self, district: &District) -> Result<OverpassDocument, FetchError> {
        let future = self.fetch_async(building_query(district));
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(future))
            }
            // No runtime detected, or current_thread runtime: use our own runtime.
            _ => self.runtime.block_on(future),
        }
    }
}
