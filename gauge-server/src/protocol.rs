//! JSON-RPC request handling
//!
//! Methods:
//! - initialize: server info, category names and app chrome
//! - ping
//! - categories/list: categories with their style and units
//! - units/list: units of one category with their affine factors
//! - convert: run one conversion from raw input text

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};
use tracing::{debug, warn};
use gauge_app::{CategoryStyle, Color, APP_TITLE};
use gauge_core::{GaugeError, InputValue};
use gauge_units::{parse_unit, Category, ConversionRequest, ConversionResult};
use crate::config::ServerConfig;

pub const SERVER_NAME: &str = "gauge";
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const PARSE_ERROR: i32 = -32700;
pub const INVALID_REQUEST: i32 = -32600;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;
pub const INTERNAL_ERROR: i32 = -32603;

#[derive(Debug, Deserialize)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub id: Option<JsonValue>,
    pub method: String,
    #[serde(default)]
    pub params: Option<JsonValue>,
}

#[derive(Debug, Serialize)]
pub struct RpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
}

#[derive(Debug, Serialize)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<JsonValue>,
}

impl RpcError {
    fn new(code: i32, message: impl Into<String>) -> Self {
        RpcError { code, message: message.into(), data: None }
    }

    fn invalid_params(message: impl Into<String>) -> Self {
        Self::new(INVALID_PARAMS, message)
    }
}

impl From<GaugeError> for RpcError {
    fn from(e: GaugeError) -> Self {
        RpcError::invalid_params(e.to_string())
    }
}

impl RpcResponse {
    fn success(id: Option<JsonValue>, result: JsonValue) -> Self {
        RpcResponse { jsonrpc: "2.0".to_string(), id, result: Some(result), error: None }
    }

    fn failure(id: Option<JsonValue>, error: RpcError) -> Self {
        RpcResponse { jsonrpc: "2.0".to_string(), id, result: None, error: Some(error) }
    }
}

#[derive(Debug, Deserialize)]
struct UnitsParams {
    category: String,
}

#[derive(Debug, Serialize)]
struct ConvertOutput {
    category: Category,
    from: &'static str,
    to: &'static str,
    input: InputValue,
    #[serde(flatten)]
    result: ConversionResult,
    display: String,
}

/// Stateless request handler
pub struct Handler {
    config: ServerConfig,
}

impl Handler {
    pub fn new(config: ServerConfig) -> Self {
        Handler { config }
    }

    /// Handle one input line; `None` when no response is due (notifications)
    pub fn handle_line(&self, line: &str) -> Option<RpcResponse> {
        let request: RpcRequest = match serde_json::from_str(line) {
            Ok(r) => r,
            Err(e) => {
                warn!("Error parsing request: {}", e);
                return Some(RpcResponse::failure(
                    None,
                    RpcError::new(PARSE_ERROR, format!("Parse error: {}", e)),
                ));
            }
        };

        let response = self.handle(&request);

        if request.id.is_none() {
            debug!(method = %request.method, "notification processed");
            return None;
        }
        Some(response)
    }

    pub fn handle(&self, request: &RpcRequest) -> RpcResponse {
        if request.jsonrpc != "2.0" {
            return RpcResponse::failure(
                request.id.clone(),
                RpcError::new(INVALID_REQUEST, format!("Unsupported jsonrpc version: {}", request.jsonrpc)),
            );
        }

        let result = match request.method.as_str() {
            "initialize" => Ok(self.initialize()),
            "initialized" | "ping" => Ok(json!({})),
            "categories/list" => Ok(self.categories_list()),
            "units/list" => self.units_list(&request.params),
            "convert" => self.convert(&request.params),
            _ => Err(RpcError::new(METHOD_NOT_FOUND, format!("Method not found: {}", request.method))),
        };

        match result {
            Ok(r) => RpcResponse::success(request.id.clone(), r),
            Err(e) => {
                debug!(method = %request.method, code = e.code, message = %e.message, "request failed");
                RpcResponse::failure(request.id.clone(), e)
            }
        }
    }

    fn initialize(&self) -> JsonValue {
        json!({
            "serverInfo": {
                "name": SERVER_NAME,
                "version": SERVER_VERSION,
            },
            "title": APP_TITLE,
            "tabBarColor": Color::TAB_BAR,
            "categories": Category::ALL.iter().map(|c| c.name()).collect::<Vec<_>>(),
            "fractionDigits": self.config.fraction_digits,
        })
    }

    fn categories_list(&self) -> JsonValue {
        let categories: Vec<JsonValue> = Category::ALL
            .iter()
            .map(|category| {
                let units: Vec<JsonValue> = category
                    .units()
                    .iter()
                    .map(|u| json!({ "name": u.name(), "symbol": u.symbol() }))
                    .collect();
                json!({
                    "name": category.name(),
                    "base": category.base_unit().name(),
                    "symbol_name": category.symbol_name(),
                    "color": category.background_color(),
                    "units": units,
                })
            })
            .collect();
        json!({ "categories": categories })
    }

    fn units_list(&self, params: &Option<JsonValue>) -> Result<JsonValue, RpcError> {
        let params: UnitsParams = parse_params(params.clone().unwrap_or(JsonValue::Null))?;
        let category: Category = params.category.parse()?;
        let units: Vec<JsonValue> = category
            .units()
            .iter()
            .map(|u| {
                let affine = u.affine();
                json!({
                    "name": u.name(),
                    "symbol": u.symbol(),
                    "scale": affine.scale(),
                    "offset": affine.offset(),
                })
            })
            .collect();
        Ok(json!({ "category": category, "units": units }))
    }

    fn convert(&self, params: &Option<JsonValue>) -> Result<JsonValue, RpcError> {
        let params = with_inferred_category(params.clone().unwrap_or(JsonValue::Null))?;
        let request: ConversionRequest = parse_params(params)?;
        let result = request.evaluate()?;

        let output = ConvertOutput {
            category: request.category,
            from: request.from.symbol(),
            to: request.to.symbol(),
            input: InputValue::classify(&request.input),
            result,
            display: result.display(self.config.fraction_digits),
        };
        serde_json::to_value(&output)
            .map_err(|e| RpcError::new(INTERNAL_ERROR, format!("Error encoding result: {}", e)))
    }
}

fn parse_params<T: DeserializeOwned>(params: JsonValue) -> Result<T, RpcError> {
    serde_json::from_value(params).map_err(|e| RpcError::invalid_params(format!("Invalid params: {}", e)))
}

/// Fill in a missing `category` from the category of the `from` unit
fn with_inferred_category(mut params: JsonValue) -> Result<JsonValue, RpcError> {
    if let JsonValue::Object(map) = &mut params {
        let inferred = match (map.get("category"), map.get("from")) {
            (None, Some(JsonValue::String(from))) => Some(parse_unit(from)?.category()),
            _ => None,
        };
        if let Some(category) = inferred {
            map.insert("category".to_string(), json!(category));
        }
    }
    Ok(params)
}
