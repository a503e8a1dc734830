// ABOUTME: Brew calculator route handlers for recipes, method catalog and unit conversion
// ABOUTME: Parses lenient JSON/query input, applies the volume range and delegates to icb_brewing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Indian Coffee Beans

//! Brew calculator routes
//!
//! The handlers mirror what the website's calculator form does: strength and
//! roast level fall back to their defaults when unrecognized, the volume is
//! converted to milliliters and range-checked, then the pure calculator runs.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use icb_brewing::{
    brewing_methods, calculate_brew_ratio, convert_volume, find_method, format_ratio,
    to_milliliters, BrewingConfig, BrewingMethod, CalculatorInput, CalculatorResult, RoastLevel,
    Strength, VolumeUnit,
};
use icb_core::errors::AppError;
use serde::{Deserialize, Serialize};

use crate::logging::AppLogger;
use crate::middleware::REQUEST_ID_HEADER;

/// Body of `POST /api/brew/calculate`
#[derive(Debug, Deserialize)]
pub struct CalculateRequest {
    /// Brewing method id
    pub method: String,
    /// Drink volume, in `unit`
    #[serde(alias = "volume_ml")]
    pub volume: f64,
    /// `mild`, `average` or `robust`; anything else means `average`
    #[serde(default)]
    pub strength: Option<String>,
    /// `light`, `medium` or `dark`; anything else means `medium`
    #[serde(default)]
    pub roast_level: Option<String>,
    /// Unit of `volume` (`ml`, `cups`, `oz`); defaults to `ml`
    #[serde(default)]
    pub unit: Option<String>,
}

/// Computed recipe returned to the client
#[derive(Debug, Serialize, Deserialize)]
pub struct CalculateResponse {
    /// Method id
    pub method_id: String,
    /// Method display name
    pub method_name: String,
    /// Strength actually used
    pub strength: Strength,
    /// Roast level actually used
    pub roast_level: RoastLevel,
    /// Coffee in grams, unrounded
    pub coffee_amount_g: f64,
    /// Coffee in grams, rounded for display
    pub coffee_amount_display_g: f64,
    /// Water in milliliters
    pub water_amount_ml: f64,
    /// Ratio such as `1:15`
    pub ratio: String,
    /// Water temperature
    pub temperature: String,
    /// Grind size label
    pub grind_size: String,
    /// Brew time label
    pub brew_time: String,
}

impl CalculateResponse {
    fn from_result(
        result: &CalculatorResult,
        input: &CalculatorInput,
        display_decimals: u8,
    ) -> Self {
        Self {
            method_id: result.method.id.to_owned(),
            method_name: result.method.name.to_owned(),
            strength: input.strength,
            roast_level: input.roast_level,
            coffee_amount_g: result.coffee_amount_g,
            coffee_amount_display_g: result.coffee_amount_rounded(display_decimals),
            water_amount_ml: result.water_amount_ml,
            ratio: result.ratio.clone(),
            temperature: result.temperature.to_owned(),
            grind_size: result.grind_size.to_owned(),
            brew_time: result.brew_time.to_owned(),
        }
    }
}

/// Catalog entry in the method listing
#[derive(Debug, Serialize, Deserialize)]
pub struct MethodSummary {
    /// Method id
    pub id: String,
    /// Display name
    pub name: String,
    /// Grind size label
    pub grind_size: String,
    /// Brew time label
    pub brew_time: String,
    /// Ratio at average strength
    pub default_ratio: String,
    /// Drink size the calculator starts from
    pub default_volume_ml: f64,
}

impl From<&BrewingMethod> for MethodSummary {
    fn from(method: &BrewingMethod) -> Self {
        Self {
            id: method.id.to_owned(),
            name: method.name.to_owned(),
            grind_size: method.grind_size.to_owned(),
            brew_time: method.brew_time.to_owned(),
            default_ratio: format_ratio(method.ratios.average),
            default_volume_ml: method.default_volume_ml,
        }
    }
}

/// Response of `GET /api/brew/methods`
#[derive(Debug, Serialize, Deserialize)]
pub struct MethodListResponse {
    /// Methods in display order
    pub methods: Vec<MethodSummary>,
    /// Number of methods
    pub total: usize,
}

/// Query of `GET /api/brew/convert`
#[derive(Debug, Deserialize)]
pub struct ConvertQuery {
    /// Amount to convert
    pub value: f64,
    /// Source unit
    pub from: String,
    /// Target unit
    pub to: String,
}

/// Response of `GET /api/brew/convert`
#[derive(Debug, Serialize, Deserialize)]
pub struct ConvertResponse {
    /// Amount as given
    pub value: f64,
    /// Source unit
    pub from: VolumeUnit,
    /// Target unit
    pub to: VolumeUnit,
    /// Converted amount
    pub result: f64,
}

/// Brew calculator routes
pub struct BrewRoutes;

impl BrewRoutes {
    /// Create all brew routes
    pub fn routes(config: Arc<BrewingConfig>) -> Router {
        Router::new()
            .route("/api/brew/methods", get(Self::handle_list_methods))
            .route("/api/brew/methods/:method_id", get(Self::handle_get_method))
            .route("/api/brew/calculate", post(Self::handle_calculate))
            .route("/api/brew/convert", get(Self::handle_convert))
            .with_state(config)
    }

    fn request_id(headers: &HeaderMap) -> Option<String> {
        headers
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
    }

    fn tag(error: impl Into<AppError>, headers: &HeaderMap) -> AppError {
        let error = error.into();
        match Self::request_id(headers) {
            Some(id) => error.with_request_id(id),
            None => error,
        }
    }

    /// Handle list brewing methods
    async fn handle_list_methods() -> Result<Response, AppError> {
        let methods: Vec<MethodSummary> = brewing_methods().iter().map(Into::into).collect();
        let total = methods.len();

        Ok((StatusCode::OK, Json(MethodListResponse { methods, total })).into_response())
    }

    /// Handle get one brewing method
    async fn handle_get_method(
        headers: HeaderMap,
        Path(method_id): Path<String>,
    ) -> Result<Response, AppError> {
        let method = find_method(&method_id).ok_or_else(|| {
            Self::tag(
                AppError::not_found(format!("Brewing method '{method_id}'"))
                    .with_resource_id(method_id.clone()),
                &headers,
            )
        })?;

        Ok((StatusCode::OK, Json(method)).into_response())
    }

    /// Handle recipe calculation
    async fn handle_calculate(
        State(config): State<Arc<BrewingConfig>>,
        headers: HeaderMap,
        Json(request): Json<CalculateRequest>,
    ) -> Result<Response, AppError> {
        let unit = match request.unit.as_deref() {
            Some(raw) => raw
                .parse::<VolumeUnit>()
                .map_err(|e| Self::tag(e, &headers))?,
            None => VolumeUnit::Milliliters,
        };
        let volume_ml = config
            .validate_volume(to_milliliters(request.volume, unit))
            .map_err(|e| {
                AppLogger::log_calculation(&request.method, request.volume, false);
                Self::tag(e, &headers)
            })?;

        let input = CalculatorInput::new(
            request.method,
            volume_ml,
            request
                .strength
                .as_deref()
                .map_or_else(Strength::default, Strength::from_str_or_default),
            request
                .roast_level
                .as_deref()
                .map_or_else(RoastLevel::default, RoastLevel::from_str_or_default),
        );

        let result = calculate_brew_ratio(&input);
        AppLogger::log_calculation(&input.method, input.volume_ml, result.is_ok());
        let result = result.map_err(|e| Self::tag(e, &headers))?;

        let response = CalculateResponse::from_result(&result, &input, config.display_decimals);
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle volume conversion
    async fn handle_convert(
        headers: HeaderMap,
        Query(query): Query<ConvertQuery>,
    ) -> Result<Response, AppError> {
        let from = query
            .from
            .parse::<VolumeUnit>()
            .map_err(|e| Self::tag(e, &headers))?;
        let to = query
            .to
            .parse::<VolumeUnit>()
            .map_err(|e| Self::tag(e, &headers))?;

        let response = ConvertResponse {
            value: query.value,
            from,
            to,
            result: convert_volume(query.value, from, to),
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
