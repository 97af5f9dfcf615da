use crate::error::Result;
use crate::model::{ForecastModel, SeasonalTrendModel};
use crate::schema::{EntryKind, Transaction};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of calendar days projected past the last observed date.
pub const FORECAST_HORIZON_DAYS: u32 = 30;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    /// Short day label in `DD/MM` form.
    pub day: String,
    pub value: f64,
    pub kind: EntryKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Short day label in `DD/MM` form.
    pub day: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ForecastResult {
    /// One point per input transaction, in input order.
    pub history: Vec<HistoryPoint>,

    /// The 30-day projection past the last observed date, rounded to cents.
    pub prediction: Vec<ForecastPoint>,

    /// True when any value of the full predicted curve dips below zero,
    /// including the refit of the historical region. Evaluated before
    /// rounding.
    pub negative_flag: bool,
}

pub struct ForecastEngine {
    model: Box<dyn ForecastModel>,
}

impl ForecastEngine {
    pub fn new() -> Self {
        Self {
            model: Box::new(SeasonalTrendModel),
        }
    }

    pub fn with_model(model: Box<dyn ForecastModel>) -> Self {
        Self { model }
    }

    pub fn generate_forecast(&self, transactions: &[Transaction]) -> Result<ForecastResult> {
        if transactions.is_empty() {
            return Ok(ForecastResult::default());
        }

        let history: Vec<HistoryPoint> = transactions
            .iter()
            .map(|tx| HistoryPoint {
                day: day_label(tx.date),
                value: tx.amount,
                kind: tx.kind(),
            })
            .collect();

        let observations: Vec<(NaiveDate, f64)> = transactions
            .iter()
            .map(|tx| (tx.date, tx.amount))
            .collect();

        let curve = self
            .model
            .fit_and_predict(&observations, FORECAST_HORIZON_DAYS)?;

        let negative_flag = curve.iter().any(|(_, value)| *value < 0.0);

        let start = curve.len().saturating_sub(FORECAST_HORIZON_DAYS as usize);
        let prediction: Vec<ForecastPoint> = curve[start..]
            .iter()
            .map(|(date, value)| ForecastPoint {
                day: day_label(*date),
                value: round_to_cents(*value),
            })
            .collect();

        Ok(ForecastResult {
            history,
            prediction,
            negative_flag,
        })
    }
}

impl Default for ForecastEngine {
    fn default() -> Self {
        Self::new()
    }
}

pub fn generate_forecast(transactions: &[Transaction]) -> Result<ForecastResult> {
    ForecastEngine::new().generate_forecast(transactions)
}

fn day_label(date: NaiveDate) -> String {
    date.format("%d/%m").to_string()
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
