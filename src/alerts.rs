use crate::schema::{BudgetRule, Transaction};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Alert {
    /// The signed sum of the whole history is below zero.
    Overdraft,

    /// Net spending in a category went past its ceiling.
    BudgetExceeded {
        category: String,
        spent: f64,
        cap: f64,
    },
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alert::Overdraft => write!(f, "Warning: your balance is negative!"),
            Alert::BudgetExceeded {
                category,
                spent,
                cap,
            } => write!(
                f,
                "Budget exceeded for {}: {:.2} spent against a cap of {:.2}",
                category, spent, cap
            ),
        }
    }
}

/// Scans the history for an overdraft, then checks every budget rule in
/// registry order. Duplicate rules each fire on their own.
pub fn generate_alerts(transactions: &[Transaction], budgets: &[BudgetRule]) -> Vec<Alert> {
    let mut alerts = Vec::new();

    let total: f64 = transactions.iter().map(|tx| tx.amount).sum();
    if total < 0.0 {
        alerts.push(Alert::Overdraft);
    }

    for rule in budgets {
        // Income posted to the category offsets its spending before the
        // ceiling is checked.
        let net: f64 = transactions
            .iter()
            .filter(|tx| tx.category == rule.category)
            .map(|tx| tx.amount)
            .sum();
        let spent = net.abs();

        if spent > rule.cap {
            alerts.push(Alert::BudgetExceeded {
                category: rule.category.clone(),
                spent,
                cap: rule.cap,
            });
        }
    }

    alerts
}

pub fn alert_messages(alerts: &[Alert]) -> Vec<String> {
    alerts.iter().map(|alert| alert.to_string()).collect()
}
