//! Report assembly
//!
//! [`ReportConfig`] carries every query parameter; its `Default` asks the six
//! fixed questions. [`Report::build`] runs all queries against a store and keeps
//! the results for the writer.

use crate::core::queries::{self, NightOutFilter, SuspiciousVendor};
use crate::core::TransactionStore;
use crate::types::Cents;
use chrono::{DateTime, Duration, Utc};
use log::info;

/// Query parameters for one report
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    /// Institution for the spend total
    pub institution: String,
    /// Payment type for the spend total
    pub payment_type: String,
    /// A transaction carrying any of these tags counts toward tagged spend
    pub tags: Vec<String>,
    /// Exclusive lower bound of the spend window
    pub window_after: DateTime<Utc>,
    /// Exclusive upper bound of the spend window
    pub window_before: DateTime<Utc>,
    /// Bar-night parameters
    pub night_out: NightOutFilter,
    /// Standard deviations above the vendor mean before an amount is suspicious
    pub sigma: f64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            institution: "Wells Fargo".to_string(),
            payment_type: "Debit Card".to_string(),
            tags: vec!["food".to_string(), "personal".to_string()],
            window_after: from_unix_seconds(WINDOW_AFTER_SECS),
            window_before: from_unix_seconds(WINDOW_BEFORE_SECS),
            night_out: NightOutFilter {
                timezone: chrono_tz::America::Los_Angeles,
                month: 12,
                from_hour: 18,
                vendors: ["RICKHOUSE", "P.C.H.", "BLOODHOUND", "IRISH BANK"]
                    .iter()
                    .map(|v| v.to_string())
                    .collect(),
                min_distinct_vendors: 2,
            },
            sigma: 1.75,
        }
    }
}

/// 2012-01-23T00:00:00Z
const WINDOW_AFTER_SECS: i64 = 1_327_276_800;
/// 2012-01-26T00:00:00Z
const WINDOW_BEFORE_SECS: i64 = 1_327_536_000;

fn from_unix_seconds(seconds: i64) -> DateTime<Utc> {
    DateTime::<Utc>::default() + Duration::seconds(seconds)
}

/// Results of every query, ready to print
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub institution: String,
    pub payment_type: String,
    pub institution_total: Cents,
    pub unique_vendors: Vec<String>,
    pub tags: Vec<String>,
    pub tagged_spend: Cents,
    pub window_spend: Cents,
    pub nights_out: usize,
    pub suspicious: Vec<SuspiciousVendor>,
}

impl Report {
    /// Run every query against `store`
    pub fn build(store: &TransactionStore, config: &ReportConfig) -> Self {
        let report = Report {
            institution: config.institution.clone(),
            payment_type: config.payment_type.clone(),
            institution_total: queries::total_by_institution_and_payment_type(
                store,
                &config.institution,
                &config.payment_type,
            ),
            unique_vendors: queries::unique_vendors(store)
                .into_iter()
                .map(str::to_string)
                .collect(),
            tags: config.tags.clone(),
            tagged_spend: queries::tagged_spend(store, &config.tags),
            window_spend: queries::spend_between(store, config.window_after, config.window_before),
            nights_out: queries::nights_out(store, &config.night_out),
            suspicious: queries::suspicious_spends(store, config.sigma),
        };

        info!(
            "Built report over {} transactions: {} vendors, {} with suspicious spends",
            store.len(),
            report.unique_vendors.len(),
            report.suspicious.len()
        );

        report
    }

    /// Number of distinct vendors
    pub fn unique_vendor_count(&self) -> usize {
        self.unique_vendors.len()
    }
}
