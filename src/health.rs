use crate::forecast::{ForecastPoint, ForecastResult};
use crate::schema::Transaction;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthLabel {
    Healthy,
    Fragile,
    Critical,
}

impl HealthLabel {
    pub fn from_score(score: f64) -> Self {
        if score >= 1000.0 {
            HealthLabel::Healthy
        } else if score >= 0.0 {
            HealthLabel::Fragile
        } else {
            HealthLabel::Critical
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Rising,
    Falling,
    Stable,
}

/// Raw aggregates shown on the dashboard next to the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CashflowTotals {
    pub total_income: f64,
    pub total_expense: f64,
    pub projected_balance: f64,
}

impl CashflowTotals {
    pub fn health_score(&self) -> f64 {
        self.projected_balance + self.total_income - self.total_expense
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthVerdict {
    pub label: HealthLabel,
    pub trend: Trend,
    pub advice: String,
}

pub fn aggregate_totals(transactions: &[Transaction], forecast: &ForecastResult) -> CashflowTotals {
    let total_income: f64 = transactions
        .iter()
        .filter(|tx| tx.amount >= 0.0)
        .map(|tx| tx.amount)
        .sum();

    let total_expense: f64 = transactions
        .iter()
        .filter(|tx| tx.amount < 0.0)
        .map(|tx| tx.amount)
        .sum::<f64>()
        .abs();

    let projected_balance = forecast
        .prediction
        .last()
        .map(|point| point.value)
        .unwrap_or(0.0);

    CashflowTotals {
        total_income,
        total_expense,
        projected_balance,
    }
}

/// Scores the history against its forecast and picks the first advice rule
/// that applies.
pub fn score_health(transactions: &[Transaction], forecast: &ForecastResult) -> HealthVerdict {
    let totals = aggregate_totals(transactions, forecast);
    verdict_from_totals(transactions, forecast, &totals)
}

/// Same scoring, for callers that already aggregated the totals.
pub(crate) fn verdict_from_totals(
    transactions: &[Transaction],
    forecast: &ForecastResult,
    totals: &CashflowTotals,
) -> HealthVerdict {
    let trend = prediction_trend(&forecast.prediction);
    let label = HealthLabel::from_score(totals.health_score());
    let advice = select_advice(transactions, forecast, totals).to_string();

    HealthVerdict {
        label,
        trend,
        advice,
    }
}

fn prediction_trend(prediction: &[ForecastPoint]) -> Trend {
    if prediction.len() < 2 {
        return Trend::Stable;
    }

    let first = prediction[0].value;
    let last = prediction[prediction.len() - 1].value;

    if last > first {
        Trend::Rising
    } else {
        Trend::Falling
    }
}

fn select_advice(
    transactions: &[Transaction],
    forecast: &ForecastResult,
    totals: &CashflowTotals,
) -> &'static str {
    if transactions.is_empty() {
        return "Start recording your transactions to get a personalized reading of your finances.";
    }

    if forecast.negative_flag {
        return "Your balance is heading into negative territory. Cut back on non-essential spending now.";
    }

    if totals.total_expense > totals.total_income {
        return "You are spending more than you earn. Review your recurring charges.";
    }

    if totals.total_income > totals.total_expense * 1.5 {
        return "You have a comfortable surplus. Consider moving part of it into savings or investments.";
    }

    if totals.total_income == 0.0 {
        return "No income recorded over this period. Add your income sources for a fuller picture.";
    }

    "Your finances look stable. Keep tracking your spending to stay on course."
}
