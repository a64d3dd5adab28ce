//! CLI administration tool for budget-tracker.
//!
//! Manages expenses and checks the database without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List all expenses
//! cargo run --bin admin -- expense list
//!
//! # Add an expense (missing fields are prompted for)
//! cargo run --bin admin -- expense add --title "Groceries" --category Food \
//!     --amount 42.5 --date 2025-03-14 --payment-method Card
//!
//! # Delete an expense
//! cargo run --bin admin -- expense delete 7
//!
//! # Totals per category
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_HOST`/`DB_PORT`/`DB_USER`/`DB_PASSWORD`/`DB_NAME`

use budget_tracker::application::services::ExpenseService;
use budget_tracker::config::{Config, mask_connection_string};
use budget_tracker::domain::entities::{Expense, ExpenseDraft};
use budget_tracker::infrastructure::persistence::PgExpenseRepository;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::collections::BTreeMap;
use std::sync::Arc;

/// CLI tool for managing budget-tracker.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage expenses
    Expense {
        #[command(subcommand)]
        action: ExpenseAction,
    },

    /// Show spending totals
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Expense management subcommands.
#[derive(Subcommand)]
enum ExpenseAction {
    /// List all expenses
    List,

    /// Add a new expense
    Add {
        #[arg(short, long)]
        title: Option<String>,

        /// Food, Travel, Bills, Shopping, Entertainment, Other
        #[arg(short, long)]
        category: Option<String>,

        #[arg(short, long)]
        amount: Option<f64>,

        /// Date in YYYY-MM-DD format
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// Cash, Card, Online
        #[arg(short, long)]
        payment_method: Option<String>,
    },

    /// Delete an expense by id
    Delete {
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = Config::load_database_url()?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    let service = ExpenseService::new(Arc::new(PgExpenseRepository::new(Arc::new(
        pool.clone(),
    ))));

    match cli.command {
        Commands::Expense { action } => handle_expense_action(action, &service).await?,
        Commands::Stats => show_stats(&service).await?,
        Commands::Db { action } => handle_db_action(action, &pool, &database_url).await?,
    }

    Ok(())
}

/// Dispatches expense management commands.
async fn handle_expense_action(action: ExpenseAction, service: &ExpenseService) -> Result<()> {
    match action {
        ExpenseAction::List => list_expenses(service).await,
        ExpenseAction::Add {
            title,
            category,
            amount,
            date,
            payment_method,
        } => add_expense(service, title, category, amount, date, payment_method).await,
        ExpenseAction::Delete { id, yes } => delete_expense(service, id, yes).await,
    }
}

async fn list_expenses(service: &ExpenseService) -> Result<()> {
    let expenses = service.find_all().await?;

    if expenses.is_empty() {
        println!("{}", "No expenses recorded yet.".yellow());
        return Ok(());
    }

    println!(
        "{}",
        format!(
            "{:>6}  {:<24} {:<14} {:>10}  {:<10}  {:<8}",
            "ID", "Title", "Category", "Amount", "Date", "Payment"
        )
        .bold()
    );

    for expense in &expenses {
        print_expense(expense);
    }

    let total: f64 = expenses.iter().map(|e| e.amount).sum();
    println!();
    println!(
        "{} {} expenses, total {}",
        "Summary:".bright_blue().bold(),
        expenses.len(),
        format!("{:.2}", total).green().bold()
    );

    Ok(())
}

fn print_expense(expense: &Expense) {
    println!(
        "{:>6}  {:<24} {:<14} {:>10.2}  {:<10}  {:<8}",
        expense.id,
        truncate(&expense.title, 24),
        expense.category,
        expense.amount,
        expense.date,
        expense.payment_method
    );
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max - 1).collect();
        out.push('~');
        out
    }
}

/// Adds an expense, prompting for any field not given on the command line.
async fn add_expense(
    service: &ExpenseService,
    title: Option<String>,
    category: Option<String>,
    amount: Option<f64>,
    date: Option<NaiveDate>,
    payment_method: Option<String>,
) -> Result<()> {
    println!("{}", "Add Expense".bright_blue().bold());
    println!();

    let title = match title {
        Some(t) => t,
        None => Input::new().with_prompt("Title").interact_text()?,
    };

    let category = match category {
        Some(c) => c,
        None => Input::new()
            .with_prompt("Category")
            .with_initial_text("Other")
            .interact_text()?,
    };

    let amount = match amount {
        Some(a) => a,
        None => Input::<f64>::new().with_prompt("Amount").interact_text()?,
    };

    let date = match date {
        Some(d) => d,
        None => {
            let raw: String = Input::new()
                .with_prompt("Date (YYYY-MM-DD)")
                .with_initial_text(chrono::Local::now().date_naive().to_string())
                .interact_text()?;
            raw.parse()
                .with_context(|| format!("'{}' is not a YYYY-MM-DD date", raw))?
        }
    };

    let payment_method = match payment_method {
        Some(p) => p,
        None => Input::new()
            .with_prompt("Payment method")
            .with_initial_text("Cash")
            .interact_text()?,
    };

    let expense = service
        .save(ExpenseDraft {
            id: None,
            title,
            category,
            amount,
            date,
            payment_method,
        })
        .await?;

    println!("{}", "Expense saved".green().bold());
    print_expense(&expense);

    Ok(())
}

/// Deletes an expense after confirmation (unless `--yes`).
async fn delete_expense(service: &ExpenseService, id: i64, skip_confirm: bool) -> Result<()> {
    let expenses = service.find_all().await?;

    let Some(expense) = expenses.iter().find(|e| e.id == id) else {
        println!("{}", format!("No expense with id {}", id).yellow());
        return Ok(());
    };

    print_expense(expense);

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this expense?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".yellow());
            return Ok(());
        }
    }

    service.delete_by_id(id).await?;
    println!("{}", format!("Expense {} deleted", id).green());

    Ok(())
}

/// Prints count, grand total and per-category totals.
async fn show_stats(service: &ExpenseService) -> Result<()> {
    let expenses = service.find_all().await?;

    let mut by_category: BTreeMap<&str, (usize, f64)> = BTreeMap::new();
    for expense in &expenses {
        let entry = by_category.entry(expense.category.as_str()).or_default();
        entry.0 += 1;
        entry.1 += expense.amount;
    }

    let total: f64 = expenses.iter().map(|e| e.amount).sum();

    println!("{}", "Spending Statistics".bright_blue().bold());
    println!();
    println!("  Expenses: {}", expenses.len().to_string().bold());
    println!("  Total:    {}", format!("{:.2}", total).green().bold());
    println!();

    for (category, (count, sum)) in by_category {
        println!("  {:<14} {:>4}  {:>10.2}", category, count, sum);
    }

    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, pool: &PgPool, database_url: &str) -> Result<()> {
    match action {
        DbAction::Check => {
            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await
                .context("Database query failed")?;

            println!("{}", "Database connection OK".green().bold());
            println!("  URL:     {}", mask_connection_string(database_url));
            println!("  Server:  {}", version);
        }
    }

    Ok(())
}
