use cashflow_insight::{analyze_finances, expense_breakdown, BudgetRule, Transaction};
use chrono::NaiveDate;

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn tx(date: NaiveDate, category: &str, amount: f64) -> Transaction {
    Transaction {
        date,
        category: category.to_string(),
        amount,
    }
}

fn main() -> anyhow::Result<()> {
    let transactions = vec![
        tx(day(2024, 3, 1), "Salary", 2400.0),
        tx(day(2024, 3, 2), "Rent", -850.0),
        tx(day(2024, 3, 4), "Food", -120.0),
        tx(day(2024, 3, 7), "Transport", -60.0),
        tx(day(2024, 3, 9), "Food", -95.5),
        tx(day(2024, 3, 12), "Leisure", -140.0),
        tx(day(2024, 3, 15), "Freelance", 400.0),
        tx(day(2024, 3, 18), "Food", -180.0),
        tx(day(2024, 3, 22), "Utilities", -75.0),
        tx(day(2024, 3, 26), "Food", -66.5),
    ];
    let budgets = vec![
        BudgetRule::new("Food", 350.0)?,
        BudgetRule::new("Leisure", 120.0)?,
    ];

    let overview = analyze_finances(&transactions, &budgets)?;

    println!("Alerts:");
    if overview.alerts.is_empty() {
        println!("  (none)");
    }
    for alert in &overview.alerts {
        println!("  - {}", alert);
    }

    println!("\nTotals:");
    println!("  income:    {:>10.2}", overview.totals.total_income);
    println!("  expenses:  {:>10.2}", overview.totals.total_expense);
    println!("  projected: {:>10.2}", overview.totals.projected_balance);

    if overview.forecast_available {
        let prediction = &overview.forecast.prediction;
        println!("\n30-day projection ({} points):", prediction.len());
        if let (Some(first), Some(last)) = (prediction.first(), prediction.last()) {
            println!("  {}: {:.2}", first.day, first.value);
            println!("  ...");
            println!("  {}: {:.2}", last.day, last.value);
        }
        if overview.forecast.negative_flag {
            println!("  (projection dips below zero)");
        }
    } else {
        println!("\nNo projection: the history is too thin to fit a trend.");
    }

    println!("\nSpending by category:");
    for row in expense_breakdown(&transactions) {
        println!("  {:<12} {:>10.2}", row.category, row.spent);
    }

    println!(
        "\nVerdict: {:?} ({:?}) - {}",
        overview.health.label, overview.health.trend, overview.health.advice
    );

    Ok(())
}
