//! Query and aggregation engine
//!
//! Pure functions over an in-memory expense list: filtering, sorting,
//! grouped sums and insight derivation. Nothing here touches storage.

pub mod aggregate;
pub mod filter;
pub mod insights;

pub use aggregate::{
    compute_totals, group_sum_by, group_sum_by_key, sort_by_date_descending, spend_by_date,
    top_mood_by_spend, GroupKey, GroupedTotals, Totals,
};
pub use filter::{filter, ExpenseFilter};
pub use insights::{
    average_ticket, derive_insights, peak_day_of_week, weekday_name, Insight,
    MIN_RECORDS_FOR_INSIGHTS,
};
