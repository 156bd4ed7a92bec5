use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// What kind of analysis the external service should run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisType {
    Fundamental,
    Technical,
    Comprehensive,
}

/// The lookback window for an analysis request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResearchTimeframe {
    #[serde(rename = "1month")]
    OneMonth,
    #[serde(rename = "3months")]
    ThreeMonths,
    #[serde(rename = "6months")]
    SixMonths,
    #[serde(rename = "1year")]
    OneYear,
}

/// The service's verdict on a ticker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    Buy,
    Sell,
    Hold,
}

/// A research request as sent to the external analysis service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResearchRequest {
    pub ticker: String,
    pub analysis_type: AnalysisType,
    pub timeframe: ResearchTimeframe,
}

/// A completed analysis as returned by the external service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResearchResponse {
    pub id: String,
    pub ticker: String,
    pub timestamp: DateTime<Utc>,
    pub analysis_type: AnalysisType,
    pub timeframe: ResearchTimeframe,
    /// Free-text analysis body.
    pub analysis: String,
    pub recommendation: Recommendation,
    /// Confidence in the recommendation, 0-100.
    pub confidence: u8,
    pub key_points: Vec<String>,
    pub risks: Vec<String>,
    pub catalysts: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_loss: Option<Decimal>,
}
