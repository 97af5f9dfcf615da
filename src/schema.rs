use crate::error::{InsightError, Result};
use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    Income,
    Expense,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Transaction {
    #[schemars(description = "Calendar date of the transaction in YYYY-MM-DD format (no time of day, no timezone)")]
    pub date: NaiveDate,

    #[schemars(
        description = "Free-form category label (e.g. 'Food', 'Rent', 'Salary'). Categories are an open set matched by exact string equality; there is no fixed taxonomy."
    )]
    pub category: String,

    #[schemars(
        description = "Signed monetary amount. Non-negative values are income, negative values are expenses."
    )]
    pub amount: f64,
}

impl Transaction {
    pub fn kind(&self) -> EntryKind {
        if self.amount >= 0.0 {
            EntryKind::Income
        } else {
            EntryKind::Expense
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BudgetRule {
    #[schemars(description = "Category this ceiling applies to, matched by exact string equality")]
    pub category: String,

    #[schemars(
        description = "Maximum absolute spend allowed for the category over the analysed history. Must be non-negative; a cap of zero flags any net spending."
    )]
    pub cap: f64,
}

impl BudgetRule {
    pub fn new(category: &str, cap: f64) -> Result<Self> {
        let rule = Self {
            category: category.to_string(),
            cap,
        };
        check_budget_rule(&rule)?;
        Ok(rule)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct LedgerInput {
    #[schemars(
        description = "Complete transaction history for the period under analysis, ordered oldest to newest"
    )]
    pub transactions: Vec<Transaction>,

    #[serde(default)]
    #[schemars(
        description = "Per-category spending ceilings. May be empty. Duplicate rules for the same category each apply independently."
    )]
    pub budgets: Vec<BudgetRule>,
}

impl LedgerInput {
    pub fn generate_json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(LedgerInput)
    }

    pub fn schema_as_json() -> Result<String> {
        let schema = Self::generate_json_schema();
        Ok(serde_json::to_string_pretty(&schema)?)
    }

    /// Runs the full analysis pipeline on this document.
    pub fn analyze(&self) -> Result<crate::FinancialOverview> {
        crate::analyze_finances(&self.transactions, &self.budgets)
    }
}

pub fn validate_transactions(transactions: &[Transaction]) -> Result<()> {
    for (index, tx) in transactions.iter().enumerate() {
        if !tx.amount.is_finite() {
            return Err(InsightError::InvalidTransaction {
                index,
                details: format!("amount {} is not a finite number", tx.amount),
            });
        }

        if tx.category.trim().is_empty() {
            return Err(InsightError::InvalidTransaction {
                index,
                details: "category label is empty".to_string(),
            });
        }
    }

    Ok(())
}

pub fn validate_budget_rules(budgets: &[BudgetRule]) -> Result<()> {
    for rule in budgets {
        check_budget_rule(rule)?;
    }

    Ok(())
}

fn check_budget_rule(rule: &BudgetRule) -> Result<()> {
    if rule.category.trim().is_empty() {
        return Err(InsightError::InvalidBudgetRule {
            category: rule.category.clone(),
            details: "category label is empty".to_string(),
        });
    }

    if !rule.cap.is_finite() || rule.cap < 0.0 {
        return Err(InsightError::InvalidBudgetRule {
            category: rule.category.clone(),
            details: format!("cap {} must be a non-negative finite number", rule.cap),
        });
    }

    Ok(())
}
