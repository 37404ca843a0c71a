//! Expense CLI commands
//!
//! Add, delete, list and reset, plus the filter flags shared with the
//! report commands.

use chrono::NaiveDate;
use clap::Args;

use crate::config::settings::Settings;
use crate::display::{format_expense_details, format_expense_table};
use crate::error::{MoodspendError, MoodspendResult};
use crate::models::{ExpenseForm, Mood, ISO_DATE_FORMAT};
use crate::query::ExpenseFilter;
use crate::services::ExpenseService;
use crate::storage::Storage;

/// Filter flags; leaving them all out clears the filter
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Search description and category (case-insensitive)
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only this mood
    #[arg(short, long)]
    pub mood: Option<String>,

    /// Only this month (YYYY-MM)
    #[arg(long)]
    pub month: Option<String>,
}

impl FilterArgs {
    /// Validate the flags and build the filter
    pub fn to_filter(&self) -> MoodspendResult<ExpenseFilter> {
        let mut criteria = ExpenseFilter::new();

        if let Some(text) = &self.search {
            criteria = criteria.text(text.as_str());
        }

        if let Some(mood) = &self.mood {
            if let Ok(mood) = mood.parse::<Mood>() {
                criteria = criteria.mood(mood);
            }
        }

        if let Some(month) = &self.month {
            let month = month.trim();
            if !month.is_empty() {
                let first_day = format!("{}-01", month);
                if month.len() != 7 || NaiveDate::parse_from_str(&first_day, ISO_DATE_FORMAT).is_err()
                {
                    return Err(MoodspendError::Validation(format!(
                        "Invalid month '{}'. Use YYYY-MM",
                        month
                    )));
                }
                criteria = criteria.month(month);
            }
        }

        Ok(criteria)
    }
}

/// Arguments for `add`
#[derive(Args, Debug, Clone)]
pub struct AddArgs {
    /// Amount spent (e.g. "120" or "45.50")
    pub amount: String,

    /// How you felt (Happy, Calm, Stressed, Sad, Anxious, Excited, Bored or your own)
    pub mood: String,

    /// Date of the purchase (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    pub date: Option<String>,

    /// Category
    #[arg(short, long)]
    pub category: Option<String>,

    /// Description
    #[arg(short = 'n', long)]
    pub description: Option<String>,

    /// Payment method
    #[arg(short, long)]
    pub payment: Option<String>,
}

impl AddArgs {
    fn into_form(self) -> ExpenseForm {
        let date = self
            .date
            .unwrap_or_else(|| chrono::Local::now().date_naive().format(ISO_DATE_FORMAT).to_string());

        ExpenseForm {
            amount: Some(self.amount),
            date: Some(date),
            mood: Some(self.mood),
            category: self.category,
            description: self.description,
            payment: self.payment,
        }
    }
}

/// Handle `add`
pub fn handle_add(storage: &Storage, settings: &Settings, args: AddArgs) -> MoodspendResult<()> {
    let service = ExpenseService::new(storage, settings);

    match service.submit(args.into_form())? {
        Some(record) => {
            println!("Added expense:");
            print!("{}", format_expense_details(&record, settings));
        }
        None => println!("Nothing added: amount, mood and date are required."),
    }

    Ok(())
}

/// Handle `delete`
pub fn handle_delete(storage: &Storage, settings: &Settings, id: &str) -> MoodspendResult<()> {
    let service = ExpenseService::new(storage, settings);

    let deleted = service
        .delete(id)?
        .ok_or_else(|| MoodspendError::expense_not_found(id))?;

    println!(
        "Deleted expense: {} ({} {}, {})",
        deleted.id,
        deleted.date.format(ISO_DATE_FORMAT),
        deleted.amount.format_with_symbol(&settings.currency_symbol),
        deleted.mood
    );

    Ok(())
}

/// Handle `list`
pub fn handle_list(
    storage: &Storage,
    settings: &Settings,
    filters: &FilterArgs,
    limit: Option<usize>,
) -> MoodspendResult<()> {
    let service = ExpenseService::new(storage, settings);
    let criteria = filters.to_filter()?;

    let mut records = service.list(&criteria)?;
    let matched = records.len();
    if let Some(limit) = limit {
        records.truncate(limit);
    }

    print!("{}", format_expense_table(&records, settings));
    if records.len() < matched {
        println!("\nShowing {} of {} expenses", records.len(), matched);
    } else {
        println!("\nShowing {} expenses", matched);
    }

    Ok(())
}

/// Handle `reset`
///
/// Without `force` this only reports what would be deleted.
pub fn handle_reset(storage: &Storage, settings: &Settings, force: bool) -> MoodspendResult<()> {
    let service = ExpenseService::new(storage, settings);

    if !force {
        match storage.expenses.count() {
            Ok(count) => println!("About to delete {} expenses.", count),
            Err(e) if e.is_corrupt_data() => {
                println!("About to discard the unreadable expense file.")
            }
            Err(e) => return Err(e),
        }
        println!();
        println!("Use --force to confirm reset");
        return Ok(());
    }

    let removed = service.reset()?;
    println!("Reset complete: deleted {} expenses.", removed);

    Ok(())
}
