//! Grouping and totals over an expense list
//!
//! Group results keep the order in which each key was first seen, so a
//! renderer can show them without re-sorting. The time series is the one
//! exception and is ordered by date.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;

use crate::models::{ExpenseRecord, Money, ISO_DATE_FORMAT, UNCATEGORIZED};

/// Sums per group label, in first-occurrence order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupedTotals {
    entries: Vec<(String, Money)>,
    index: HashMap<String, usize>,
}

impl GroupedTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to `key`, appending the key if it is new
    pub fn add(&mut self, key: &str, amount: Money) {
        match self.index.get(key) {
            Some(&position) => self.entries[position].1 += amount,
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries.push((key.to_string(), amount));
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<Money> {
        self.index.get(key).map(|&position| self.entries[position].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Money)> {
        self.entries.iter().map(|(key, amount)| (key.as_str(), *amount))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum over every group
    pub fn total(&self) -> Money {
        self.entries.iter().map(|(_, amount)| *amount).sum()
    }

    /// Group with the highest sum; the earliest key wins a tie
    pub fn max(&self) -> Option<(&str, Money)> {
        self.iter().fold(None, |best, (key, amount)| match best {
            Some((_, best_amount)) if amount <= best_amount => best,
            _ => Some((key, amount)),
        })
    }
}

/// Built-in grouping keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKey {
    Mood,
    Category,
    Payment,
    /// Calendar date as "YYYY-MM-DD"
    Date,
    /// Calendar month as "YYYY-MM"
    Month,
}

impl GroupKey {
    /// Raw key value for a record (`None` when the field is absent)
    pub fn key_of(&self, record: &ExpenseRecord) -> Option<String> {
        match self {
            GroupKey::Mood => Some(record.mood.label().to_string()),
            GroupKey::Category => record.category.clone(),
            GroupKey::Payment => record.payment.clone(),
            GroupKey::Date => Some(record.date.format(ISO_DATE_FORMAT).to_string()),
            GroupKey::Month => Some(record.year_month()),
        }
    }
}

/// Total amount and number of expenses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    pub total: Money,
    pub count: usize,
}

/// Newest first; expenses on the same date keep their input order
pub fn sort_by_date_descending(mut records: Vec<ExpenseRecord>) -> Vec<ExpenseRecord> {
    records.sort_by(|a, b| b.date.cmp(&a.date));
    records
}

/// Sum amounts per key
///
/// Missing or blank keys are grouped under "Uncategorized".
pub fn group_sum_by<F, K>(records: &[ExpenseRecord], key_fn: F) -> GroupedTotals
where
    F: Fn(&ExpenseRecord) -> Option<K>,
    K: AsRef<str>,
{
    let mut totals = GroupedTotals::new();
    for record in records {
        let key = key_fn(record);
        let label = match key.as_ref().map(|k| k.as_ref().trim()) {
            Some(label) if !label.is_empty() => label,
            _ => UNCATEGORIZED,
        };
        totals.add(label, record.amount);
    }
    totals
}

/// `group_sum_by` with one of the built-in keys
pub fn group_sum_by_key(records: &[ExpenseRecord], key: GroupKey) -> GroupedTotals {
    group_sum_by(records, |record| key.key_of(record))
}

pub fn compute_totals(records: &[ExpenseRecord]) -> Totals {
    Totals {
        total: records.iter().map(|r| r.amount).sum(),
        count: records.len(),
    }
}

/// Mood with the highest total spend, if there are any expenses
pub fn top_mood_by_spend(records: &[ExpenseRecord]) -> Option<(String, Money)> {
    group_sum_by_key(records, GroupKey::Mood)
        .max()
        .map(|(mood, amount)| (mood.to_string(), amount))
}

/// Daily totals in ascending date order
pub fn spend_by_date(records: &[ExpenseRecord]) -> Vec<(NaiveDate, Money)> {
    let mut by_date: BTreeMap<NaiveDate, Money> = BTreeMap::new();
    for record in records {
        *by_date.entry(record.date).or_default() += record.amount;
    }
    by_date.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Mood;

    fn expense(cents: i64, day: u32, mood: Mood) -> ExpenseRecord {
        ExpenseRecord::new(
            Money::from_cents(cents),
            NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            mood,
        )
    }

    fn sample() -> Vec<ExpenseRecord> {
        vec![
            expense(1000, 5, Mood::Calm).with_category("Food").with_payment("Card"),
            expense(2500, 2, Mood::Stressed).with_category("Travel"),
            expense(500, 5, Mood::Calm),
            expense(4000, 9, Mood::Happy).with_category("Food").with_payment("Cash"),
            expense(250, 2, Mood::Stressed).with_category("  "),
        ]
    }

    #[test]
    fn test_sort_by_date_descending_is_stable() {
        let records = sample();
        let sorted = sort_by_date_descending(records.clone());

        let dates: Vec<u32> = sorted.iter().map(|r| chrono::Datelike::day(&r.date)).collect();
        assert_eq!(dates, vec![9, 5, 5, 2, 2]);
        // Same-day expenses keep their input order
        assert_eq!(sorted[1].id, records[0].id);
        assert_eq!(sorted[2].id, records[2].id);
        assert_eq!(sorted[3].id, records[1].id);
        assert_eq!(sorted[4].id, records[4].id);
    }

    #[test]
    fn test_group_by_category_in_first_seen_order() {
        let by_category = group_sum_by_key(&sample(), GroupKey::Category);

        let keys: Vec<&str> = by_category.keys().collect();
        assert_eq!(keys, vec!["Food", "Travel", UNCATEGORIZED]);
        assert_eq!(by_category.get("Food"), Some(Money::from_cents(5000)));
        assert_eq!(by_category.get(UNCATEGORIZED), Some(Money::from_cents(750)));
    }

    #[test]
    fn test_group_with_custom_key() {
        let by_weekend = group_sum_by(&sample(), |r| {
            use chrono::Datelike;
            let day = r.date.weekday().num_days_from_sunday();
            Some(if day == 0 || day == 6 { "weekend" } else { "weekday" })
        });
        assert_eq!(by_weekend.total(), Money::from_cents(8250));
    }

    #[test]
    fn test_group_totals_match_grand_total() {
        let records = sample();
        let totals = compute_totals(&records);
        for key in [
            GroupKey::Mood,
            GroupKey::Category,
            GroupKey::Payment,
            GroupKey::Date,
            GroupKey::Month,
        ] {
            assert_eq!(group_sum_by_key(&records, key).total(), totals.total, "{:?}", key);
        }
    }

    #[test]
    fn test_compute_totals() {
        let totals = compute_totals(&sample());
        assert_eq!(totals.total, Money::from_cents(8250));
        assert_eq!(totals.count, 5);
        assert_eq!(compute_totals(&[]), Totals::default());
    }

    #[test]
    fn test_top_mood() {
        let (mood, amount) = top_mood_by_spend(&sample()).unwrap();
        assert_eq!(mood, "Happy");
        assert_eq!(amount, Money::from_cents(4000));
        assert_eq!(top_mood_by_spend(&[]), None);
    }

    #[test]
    fn test_top_mood_tie_goes_to_first_seen() {
        let records = vec![
            expense(300, 1, Mood::Sad),
            expense(500, 2, Mood::Bored),
            expense(200, 3, Mood::Sad),
        ];
        assert_eq!(top_mood_by_spend(&records).unwrap().0, "Sad");
    }

    #[test]
    fn test_spend_by_date_ascending() {
        let series = spend_by_date(&sample());
        let days: Vec<String> = series
            .iter()
            .map(|(d, _)| d.format(ISO_DATE_FORMAT).to_string())
            .collect();
        assert_eq!(days, vec!["2024-01-02", "2024-01-05", "2024-01-09"]);
        assert_eq!(series[0].1, Money::from_cents(2750));
    }
}
