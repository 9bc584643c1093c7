//! Aggregate queries over the transaction store
//!
//! Every query is a pure function of the store and its parameters. None of them
//! depends on another query's result, so they can run in any order.

use crate::core::TransactionStore;
use crate::types::{Cents, TransactionId};
use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};
use chrono_tz::Tz;
use log::debug;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

/// Sum of amounts for one institution and payment type (exact string match)
pub fn total_by_institution_and_payment_type(
    store: &TransactionStore,
    institution: &str,
    payment_type: &str,
) -> Cents {
    store
        .iter()
        .filter(|tx| tx.institution == institution && tx.payment_type == payment_type)
        .map(|tx| tx.amount_cents)
        .sum()
}

/// Distinct vendor names in order of first appearance
pub fn unique_vendors(store: &TransactionStore) -> Vec<&str> {
    let mut seen = HashSet::new();
    store
        .iter()
        .map(|tx| tx.vendor.as_str())
        .filter(|vendor| seen.insert(*vendor))
        .collect()
}

/// Sum of amounts for transactions carrying at least one of `tags`
pub fn tagged_spend(store: &TransactionStore, tags: &[String]) -> Cents {
    store
        .iter()
        .filter(|tx| tags.iter().any(|tag| tx.has_tag(tag)))
        .map(|tx| tx.amount_cents)
        .sum()
}

/// Sum of amounts strictly between two instants
///
/// Both bounds are exclusive: a transaction stamped exactly `after` or exactly
/// `before` is left out.
pub fn spend_between(
    store: &TransactionStore,
    after: DateTime<Utc>,
    before: DateTime<Utc>,
) -> Cents {
    store
        .iter()
        .filter(|tx| tx.timestamp > after && tx.timestamp < before)
        .map(|tx| tx.amount_cents)
        .sum()
}

/// Parameters of the night-out query
#[derive(Debug, Clone, PartialEq)]
pub struct NightOutFilter {
    /// Civil calendar used for month, hour and date bucketing
    pub timezone: Tz,
    /// Local month (1-12) a transaction must fall in
    pub month: u32,
    /// First local hour (0-23) that counts; runs to the end of the same local day
    pub from_hour: u32,
    /// Vendors that count as bars (exact match)
    pub vendors: Vec<String>,
    /// Distinct bars needed on one local date for it to count
    pub min_distinct_vendors: usize,
}

/// Count local dates on which enough distinct bars were visited
///
/// A transaction qualifies when, in `filter.timezone`, it falls in
/// `filter.month` at or after `filter.from_hour`, and its vendor is one of
/// `filter.vendors`. The window never crosses midnight: early hours of the next
/// day are not attributed to the previous night. Repeat visits to the same bar
/// on the same date count once.
pub fn nights_out(store: &TransactionStore, filter: &NightOutFilter) -> usize {
    let visits: BTreeSet<(NaiveDate, &str)> = store
        .iter()
        .filter(|tx| filter.vendors.iter().any(|bar| *bar == tx.vendor))
        .filter_map(|tx| {
            let local = tx.timestamp.with_timezone(&filter.timezone);
            (local.month() == filter.month && local.hour() >= filter.from_hour)
                .then(|| (local.date_naive(), tx.vendor.as_str()))
        })
        .collect();

    let mut bars_per_date: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for (date, _) in visits {
        *bars_per_date.entry(date).or_insert(0) += 1;
    }

    bars_per_date
        .values()
        .filter(|&&bars| bars >= filter.min_distinct_vendors)
        .count()
}

/// Running aggregate of one vendor's amounts
///
/// Holds count, sum and sum of squares so the squared deviation from any
/// integer mean can be recovered exactly without a second pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VendorStats {
    pub count: u64,
    pub sum: i128,
    pub sum_of_squares: i128,
}

impl VendorStats {
    /// Fold one amount into the aggregate
    pub fn add(&mut self, amount: Cents) {
        let amount = i128::from(amount);
        self.count += 1;
        self.sum += amount;
        self.sum_of_squares += amount * amount;
    }

    /// Integer mean, truncated toward zero
    ///
    /// `None` for an empty aggregate.
    pub fn mean(&self) -> Option<Cents> {
        if self.count == 0 {
            return None;
        }
        Some((self.sum / i128::from(self.count)) as Cents)
    }

    /// Sample standard deviation around the truncated mean
    ///
    /// Bessel-corrected (divides by `count - 1`), so it is `None` when fewer
    /// than two amounts were seen.
    pub fn stdev(&self) -> Option<f64> {
        if self.count < 2 {
            return None;
        }
        let mean = i128::from(self.mean()?);
        let n = i128::from(self.count);
        // sum((x - m)^2) = sum(x^2) - 2m*sum(x) + n*m^2
        let squared_deviation = self.sum_of_squares - 2 * mean * self.sum + n * mean * mean;
        Some((squared_deviation as f64 / (n - 1) as f64).sqrt())
    }

    /// `floor(mean + sigma * stdev)`, or `None` when stdev is undefined
    pub fn limit(&self, sigma: f64) -> Option<Cents> {
        let mean = self.mean()?;
        let stdev = self.stdev()?;
        Some((mean as f64 + sigma * stdev).floor() as Cents)
    }
}

/// Vendor with at least one transaction above its limit
#[derive(Debug, Clone, PartialEq)]
pub struct SuspiciousVendor {
    pub vendor: String,
    pub transaction_count: u64,
    pub mean: Cents,
    pub stdev: f64,
    pub limit: Cents,
    /// Flagged transaction ids in file order
    pub transaction_ids: Vec<TransactionId>,
}

impl SuspiciousVendor {
    /// Number of flagged transactions
    pub fn suspicious_count(&self) -> usize {
        self.transaction_ids.len()
    }
}

/// Group amounts by vendor, keeping vendors in order of first appearance
pub fn vendor_stats(store: &TransactionStore) -> Vec<(&str, VendorStats)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, VendorStats)> = Vec::new();

    for tx in store {
        let slot = *index.entry(tx.vendor.as_str()).or_insert_with(|| {
            groups.push((tx.vendor.as_str(), VendorStats::default()));
            groups.len() - 1
        });
        groups[slot].1.add(tx.amount_cents);
    }

    groups
}

/// Flag transactions whose amount exceeds their vendor's limit
///
/// A vendor's limit is `floor(mean + sigma * stdev)` over all of that vendor's
/// amounts. Vendors with a single transaction have no limit and are never
/// flagged. Only vendors with at least one flagged transaction are returned, in
/// order of first appearance.
pub fn suspicious_spends(store: &TransactionStore, sigma: f64) -> Vec<SuspiciousVendor> {
    let mut suspects: Vec<SuspiciousVendor> = Vec::new();
    let mut by_vendor: HashMap<&str, usize> = HashMap::new();

    for (vendor, stats) in vendor_stats(store) {
        let (Some(mean), Some(stdev), Some(limit)) =
            (stats.mean(), stats.stdev(), stats.limit(sigma))
        else {
            continue;
        };
        debug!(
            "Vendor '{}': n={} mean={} stdev={:.4} limit={}",
            vendor, stats.count, mean, stdev, limit
        );
        by_vendor.insert(vendor, suspects.len());
        suspects.push(SuspiciousVendor {
            vendor: vendor.to_string(),
            transaction_count: stats.count,
            mean,
            stdev,
            limit,
            transaction_ids: Vec::new(),
        });
    }

    for tx in store {
        if let Some(&slot) = by_vendor.get(tx.vendor.as_str()) {
            let suspect = &mut suspects[slot];
            if tx.amount_cents > suspect.limit {
                suspect.transaction_ids.push(tx.id.clone());
            }
        }
    }

    suspects.retain(|suspect| !suspect.transaction_ids.is_empty());
    suspects
}
