//! Property Engine CLI
//!
//! Analyze a single property from flags, or a whole portfolio CSV, printing
//! investment metrics and a multi-year equity projection.

use anyhow::{anyhow, Result};
use clap::Parser;
use property_engine::assumptions::{
    DEFAULT_APPRECIATION_RATE, DEFAULT_PROJECTION_DOWN_PAYMENT_PCT, DEFAULT_PROJECTION_YEARS,
};
use property_engine::financials::load_properties;
use property_engine::{
    ProjectionAssumptions, ProjectionConfig, PropertyAnalysis, PropertyFinancials, ScenarioRunner,
};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "property_engine",
    about = "Investment metrics and equity projections for rental properties"
)]
struct Cli {
    /// Portfolio CSV (PurchasePrice,CurrentValue,MonthlyRent,MonthlyExpenses);
    /// overrides the single-property flags
    #[arg(long)]
    portfolio: Option<PathBuf>,

    /// Purchase price
    #[arg(long, default_value_t = 300_000.0)]
    price: f64,

    /// Current market value (0 = unknown, falls back to price)
    #[arg(long, default_value_t = 0.0)]
    value: f64,

    /// Gross monthly rent
    #[arg(long, default_value_t = 2_000.0)]
    rent: f64,

    /// Monthly operating expenses (defaults to 35% of rent)
    #[arg(long)]
    expenses: Option<f64>,

    /// Down payment percentage for the projection
    #[arg(long, default_value_t = DEFAULT_PROJECTION_DOWN_PAYMENT_PCT)]
    down_payment_pct: f64,

    /// Annual appreciation rate as a decimal
    #[arg(long, default_value_t = DEFAULT_APPRECIATION_RATE)]
    appreciation: f64,

    /// Years to project
    #[arg(long, default_value_t = DEFAULT_PROJECTION_YEARS)]
    years: u32,

    /// Emit JSON instead of tables
    #[arg(long)]
    json: bool,

    /// Write the projection series to a CSV file
    #[arg(long)]
    out_csv: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = ProjectionConfig {
        down_payment_pct: cli.down_payment_pct,
        appreciation_rate: cli.appreciation,
        years: cli.years,
    };
    let runner = ScenarioRunner::new();

    if let Some(path) = &cli.portfolio {
        let properties = load_properties(path).map_err(|e| anyhow!(e.to_string()))?;
        let analyses = runner.analyze_batch(&properties, &config)?;
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&analyses)?);
        } else {
            print_portfolio_table(&properties, &analyses);
        }
        return Ok(());
    }

    let financials = PropertyFinancials::new(cli.price, cli.value, cli.rent, cli.expenses);
    let analysis = runner.analyze(&financials, &config)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print_single_analysis(&financials, &analysis, &config, runner.engine().assumptions());
    }

    if let Some(path) = &cli.out_csv {
        write_projection_csv(path, &analysis)?;
        log::info!("projection written to {}", path.display());
    }

    Ok(())
}

fn print_single_analysis(
    financials: &PropertyFinancials,
    analysis: &PropertyAnalysis,
    config: &ProjectionConfig,
    assumptions: &ProjectionAssumptions,
) {
    let m = &analysis.metrics;

    println!("Property Engine v0.1.0");
    println!("======================\n");
    println!("Inputs:");
    println!("  Purchase Price:   ${:.2}", financials.purchase_price);
    println!("  Current Value:    ${:.2}", financials.effective_value());
    println!("  Monthly Rent:     ${:.2}", financials.monthly_rent);
    println!("  Monthly Expenses: ${:.2}", financials.effective_expenses());
    println!();
    println!("Metrics:");
    println!("  NOI:              ${:.2}", m.noi);
    println!("  Cap Rate:         {:.2}%", m.cap_rate);
    println!("  Monthly Cashflow: ${:.2}", m.monthly_cashflow);
    println!(
        "  Cash-on-Cash:     {:.2}%  ({:.0}% down)",
        m.cash_on_cash,
        m.down_payment_fraction * 100.0
    );
    println!("  1% Rule:          {:.2}%", m.one_percent_rule);
    println!("  Gross Yield:      {:.2}%", m.gross_yield);
    println!("  Equity:           ${:.2}", m.equity);
    println!();

    println!(
        "Projection ({} years, {:.1}% appreciation; assumes {:.1}% mortgage, {}-month term):",
        config.years,
        config.appreciation_rate * 100.0,
        assumptions.mortgage_rate * 100.0,
        assumptions.mortgage_term_months
    );
    println!(
        "{:>5} {:>14} {:>14} {:>14}",
        "Year", "Value", "Loan Balance", "Equity"
    );
    println!("{}", "-".repeat(50));
    for point in &analysis.projection.points {
        println!(
            "{:>5} {:>14.2} {:>14.2} {:>14.2}",
            point.year, point.property_value, point.loan_balance, point.equity
        );
    }

    let summary = analysis.projection.summary();
    println!();
    println!("  Total Appreciation: ${:.2}", summary.total_appreciation);
    println!("  Initial Equity:     ${:.2}", summary.initial_equity);
    println!("  Final Equity:       ${:.2}", summary.final_equity);
}

fn print_portfolio_table(properties: &[PropertyFinancials], analyses: &[PropertyAnalysis]) {
    println!(
        "{:>3} {:>12} {:>10} {:>12} {:>8} {:>8} {:>12}",
        "#", "Price", "Rent", "NOI", "Cap%", "CoC%", "Final Eq"
    );
    println!("{}", "-".repeat(72));
    for (i, (property, analysis)) in properties.iter().zip(analyses).enumerate() {
        let final_equity = analysis
            .projection
            .points
            .last()
            .map(|p| p.equity)
            .unwrap_or(0.0);
        println!(
            "{:>3} {:>12.0} {:>10.0} {:>12.0} {:>8.2} {:>8.2} {:>12.0}",
            i + 1,
            property.purchase_price,
            property.monthly_rent,
            analysis.metrics.noi,
            analysis.metrics.cap_rate,
            analysis.metrics.cash_on_cash,
            final_equity
        );
    }
}

fn write_projection_csv(path: &std::path::Path, analysis: &PropertyAnalysis) -> Result<()> {
    let mut file = File::create(path)?;
    writeln!(file, "Year,PropertyValue,LoanBalance,Equity")?;
    for point in &analysis.projection.points {
        writeln!(
            file,
            "{},{:.2},{:.2},{:.2}",
            point.year, point.property_value, point.loan_balance, point.equity
        )?;
    }
    Ok(())
}
