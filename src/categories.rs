use crate::schema::Transaction;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySpend {
    pub category: String,
    pub spent: f64,
}

/// Sums absolute expense amounts per category, largest spender first.
/// Income rows are left out entirely; refunds do not offset this view.
pub fn expense_breakdown(transactions: &[Transaction]) -> Vec<CategorySpend> {
    let mut by_category: BTreeMap<&str, f64> = BTreeMap::new();

    for tx in transactions {
        if tx.amount < 0.0 {
            *by_category.entry(tx.category.as_str()).or_insert(0.0) += tx.amount.abs();
        }
    }

    let mut breakdown: Vec<CategorySpend> = by_category
        .into_iter()
        .map(|(category, spent)| CategorySpend {
            category: category.to_string(),
            spent,
        })
        .collect();

    breakdown.sort_by(|a, b| {
        b.spent
            .total_cmp(&a.spent)
            .then_with(|| a.category.cmp(&b.category))
    });

    breakdown
}
