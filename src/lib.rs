//! # Cashflow Insight
//!
//! A library for turning a raw transaction history into a 30-day cash-flow
//! forecast, overdraft and budget alerts, and a financial health verdict with
//! plain-language advice.
//!
//! ## Core Concepts
//!
//! - **Transactions**: Dated, categorized, signed amounts (income >= 0, expenses < 0)
//! - **Alerts**: Overdraft detection plus per-category budget ceilings
//! - **Forecast**: An additive trend + weekly seasonality model projected 30 days past the last observation
//! - **Health Verdict**: A score-driven label (Healthy/Fragile/Critical) with the first advice rule that applies
//!
//! All computations are pure and deterministic: the same inputs always produce
//! bit-identical outputs, and nothing here performs I/O.
//!
//! ## Example
//!
//! ```rust,ignore
//! use cashflow_insight::*;
//! use chrono::NaiveDate;
//!
//! let transactions = vec![
//!     Transaction {
//!         date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
//!         category: "Salary".to_string(),
//!         amount: 2000.0,
//!     },
//!     Transaction {
//!         date: NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
//!         category: "Rent".to_string(),
//!         amount: -500.0,
//!     },
//!     Transaction {
//!         date: NaiveDate::from_ymd_opt(2024, 3, 3).unwrap(),
//!         category: "Food".to_string(),
//!         amount: -300.0,
//!     },
//! ];
//! let budgets = vec![BudgetRule::new("Food", 200.0).unwrap()];
//!
//! let overview = analyze_finances(&transactions, &budgets).unwrap();
//! println!("{}", overview.to_json().unwrap());
//! ```

pub mod alerts;
pub mod categories;
pub mod error;
pub mod forecast;
pub mod health;
pub mod model;
pub mod schema;

pub use alerts::{alert_messages, generate_alerts, Alert};
pub use categories::{expense_breakdown, CategorySpend};
pub use error::{InsightError, Result};
pub use forecast::{
    generate_forecast, ForecastEngine, ForecastPoint, ForecastResult, HistoryPoint,
    FORECAST_HORIZON_DAYS,
};
pub use health::{
    aggregate_totals, score_health, CashflowTotals, HealthLabel, HealthVerdict, Trend,
};
pub use model::{ForecastModel, SeasonalTrendModel};
pub use schema::*;

use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Everything the dashboard needs to render one period, in a single payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialOverview {
    pub alerts: Vec<Alert>,
    pub forecast: ForecastResult,
    /// False when the history was too thin to fit a projection. The rest of
    /// the payload is still populated.
    pub forecast_available: bool,
    pub totals: CashflowTotals,
    pub health: HealthVerdict,
}

impl FinancialOverview {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub struct InsightProcessor {
    forecast_engine: ForecastEngine,
}

impl InsightProcessor {
    pub fn new() -> Self {
        Self {
            forecast_engine: ForecastEngine::new(),
        }
    }

    pub fn with_model(model: Box<dyn ForecastModel>) -> Self {
        Self {
            forecast_engine: ForecastEngine::with_model(model),
        }
    }

    pub fn analyze(
        &self,
        transactions: &[Transaction],
        budgets: &[BudgetRule],
    ) -> Result<FinancialOverview> {
        validate_transactions(transactions)?;
        validate_budget_rules(budgets)?;

        info!(
            "Analyzing {} transactions against {} budget rules",
            transactions.len(),
            budgets.len()
        );

        let alerts = generate_alerts(transactions, budgets);
        debug!("Raised {} alerts", alerts.len());

        let (forecast, forecast_available) =
            match self.forecast_engine.generate_forecast(transactions) {
                Ok(forecast) => (forecast, true),
                Err(InsightError::ForecastUnavailable { details }) => {
                    // The dashboard still renders without a projection.
                    debug!("Forecast skipped: {}", details);
                    (ForecastResult::default(), false)
                }
                Err(err) => return Err(err),
            };

        let totals = aggregate_totals(transactions, &forecast);
        let health = health::verdict_from_totals(transactions, &forecast, &totals);

        Ok(FinancialOverview {
            alerts,
            forecast,
            forecast_available,
            totals,
            health,
        })
    }
}

impl Default for InsightProcessor {
    fn default() -> Self {
        Self::new()
    }
}

pub fn analyze_finances(
    transactions: &[Transaction],
    budgets: &[BudgetRule],
) -> Result<FinancialOverview> {
    InsightProcessor::new().analyze(transactions, budgets)
}
