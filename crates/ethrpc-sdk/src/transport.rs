//! Transport layer for RPC communication

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::SdkError;

/// Transport trait for RPC communication (object-safe)
///
/// A transport returns the raw `result` member of the response. A missing or
/// `null` result is returned as [`Value::Null`]; deciding whether that is an
/// error is left to the caller.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send an RPC request and get JSON response
    async fn request_json(&self, method: &str, params: Vec<Value>) -> Result<Value, SdkError>;
}

/// A request seen by [`MockTransport`]
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    /// RPC method
    pub method: String,
    /// Positional parameters
    pub params: Vec<Value>,
}

/// Mock transport for testing
///
/// Clones share state, so a test can keep a handle after moving one into a
/// client.
#[derive(Clone)]
pub struct MockTransport {
    responses: Arc<Mutex<HashMap<String, Value>>>,
    default_responses: Arc<Mutex<HashMap<String, Value>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockTransport {
    /// Create a new mock transport
    pub fn new() -> Self {
        let mut defaults = HashMap::new();

        let mut set = |method: &str, value: Value| {
            defaults.insert(method.to_string(), value);
        };
        set("web3_clientVersion", Value::from("Geth/v1.13.0-stable/linux-amd64/go1.21"));
        set("net_version", Value::from("1"));
        set("net_listening", Value::Bool(true));
        set("net_peerCount", Value::from("0x19"));
        set("eth_protocolVersion", Value::from("0x41"));
        set("eth_syncing", Value::Bool(false));
        set("eth_mining", Value::Bool(false));
        set("eth_hashrate", Value::from("0x0"));
        set("eth_gasPrice", Value::from("0x3b9aca00")); // 1 gwei
        set("eth_blockNumber", Value::from("0x100")); // Block 256
        set("eth_getBalance", Value::from("0xde0b6b3a7640000")); // 1 ETH
        set("eth_getTransactionCount", Value::from("0x0"));
        set("eth_accounts", Value::Array(vec![]));
        set("eth_call", Value::from("0x"));

        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            default_responses: Arc::new(Mutex::new(defaults)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Set a mock response for a specific method
    ///
    /// # Panics
    ///
    /// Panics if the mutex is poisoned (only possible if another thread panicked
    /// while holding the lock).
    pub fn set_response(&self, method: &str, response: Value) {
        self.responses
            .lock()
            .expect("MockTransport mutex poisoned")
            .insert(method.to_string(), response);
    }

    /// Clear custom responses
    ///
    /// # Panics
    ///
    /// Panics if the mutex is poisoned.
    pub fn clear_responses(&self) {
        self.responses
            .lock()
            .expect("MockTransport mutex poisoned")
            .clear();
    }

    /// Requests received so far, oldest first
    ///
    /// # Panics
    ///
    /// Panics if the mutex is poisoned.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .expect("MockTransport mutex poisoned")
            .clone()
    }

    /// Most recent request
    ///
    /// # Panics
    ///
    /// Panics if the mutex is poisoned.
    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.requests
            .lock()
            .expect("MockTransport mutex poisoned")
            .last()
            .cloned()
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned() -> SdkError {
    SdkError::Transport("MockTransport mutex poisoned".to_string())
}

#[async_trait]
impl Transport for MockTransport {
    async fn request_json(&self, method: &str, params: Vec<Value>) -> Result<Value, SdkError> {
        self.requests
            .lock()
            .map_err(|_| poisoned())?
            .push(RecordedRequest {
                method: method.to_string(),
                params,
            });

        // Check custom responses first
        let custom_response = self
            .responses
            .lock()
            .map_err(|_| poisoned())?
            .get(method)
            .cloned();

        if let Some(response) = custom_response {
            return Ok(response);
        }

        let default_response = self
            .default_responses
            .lock()
            .map_err(|_| poisoned())?
            .get(method)
            .cloned();

        if let Some(response) = default_response {
            return Ok(response);
        }

        Err(SdkError::Rpc {
            code: -32601,
            message: format!("Method not found: {}", method),
        })
    }
}

#[cfg(feature = "http")]
pub use http::HttpTransport;

#[cfg(feature = "http")]
mod http {
    use super::*;
    use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::Duration;
    use tracing::{debug, trace, warn};

    use crate::config::{BasicAuth, ClientConfig};

    /// HTTP transport for real RPC communication
    pub struct HttpTransport {
        client: reqwest::Client,
        url: String,
        basic_auth: Option<BasicAuth>,
        request_id: AtomicU64,
    }

    impl HttpTransport {
        /// Create a new HTTP transport with default settings
        pub fn new(url: &str) -> Self {
            Self {
                client: reqwest::Client::new(),
                url: url.to_string(),
                basic_auth: None,
                request_id: AtomicU64::new(1),
            }
        }

        /// Create a transport with timeout, headers and credentials from a config
        pub fn from_config(config: &ClientConfig) -> Result<Self, SdkError> {
            let mut headers = HeaderMap::new();
            for (name, value) in &config.headers {
                let name = HeaderName::from_bytes(name.as_bytes())
                    .map_err(|e| SdkError::Config(format!("header {:?}: {}", name, e)))?;
                let value = HeaderValue::from_str(value)
                    .map_err(|e| SdkError::Config(format!("header {:?}: {}", name, e)))?;
                headers.insert(name, value);
            }

            let client = reqwest::Client::builder()
                .timeout(Duration::from_secs(config.timeout_secs))
                .default_headers(headers)
                .build()
                .map_err(|e| SdkError::Config(e.to_string()))?;

            Ok(Self {
                client,
                url: config.rpc_url.clone(),
                basic_auth: config.basic_auth.clone(),
                request_id: AtomicU64::new(1),
            })
        }

        /// Endpoint URL
        pub fn url(&self) -> &str {
            &self.url
        }

        fn next_id(&self) -> u64 {
            self.request_id.fetch_add(1, Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Transport for HttpTransport {
        async fn request_json(&self, method: &str, params: Vec<Value>) -> Result<Value, SdkError> {
            let id = self.next_id();
            let request = serde_json::json!({
                "jsonrpc": "2.0",
                "id": id,
                "method": method,
                "params": params,
            });
            debug!(method, id, "Sending RPC request");

            let mut builder = self.client.post(&self.url).json(&request);
            if let Some(auth) = &self.basic_auth {
                builder = builder.basic_auth(&auth.username, Some(&auth.password));
            }

            let response = builder
                .send()
                .await
                .map_err(|e| SdkError::Transport(e.to_string()))?;

            let response: JsonRpcResponse = response
                .json()
                .await
                .map_err(|e| SdkError::Transport(e.to_string()))?;

            if let Some(error) = response.error {
                warn!(method, id, code = error.code, message = %error.message, "RPC error");
                return Err(SdkError::Rpc {
                    code: error.code,
                    message: error.message,
                });
            }

            trace!(method, id, result = %response.result, "RPC result");
            Ok(response.result)
        }
    }

    #[derive(serde::Deserialize)]
    struct JsonRpcResponse {
        #[serde(default)]
        result: Value,
        error: Option<JsonRpcError>,
    }

    #[derive(serde::Deserialize)]
    struct JsonRpcError {
        code: i64,
        message: String,
    }

}
