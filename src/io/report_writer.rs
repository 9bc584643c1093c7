//! Plain-text report output
//!
//! Writes one labelled line per query result in a fixed order:
//!
//! ```text
//! Spent on Wells Fargo Debit Card = <int>
//! Unique vendors = <int>
//! Unique vendors = [<vendor>, <vendor>, ...]
//! Amount on food or personal: <int>
//! London party = <int>
//! Days at two distinct bars <int>
//! <vendor> had <int> suspicious transactions
//! ```
//!
//! The last line repeats once per vendor with suspicious activity.

use crate::core::Report;
use crate::types::ChallengeError;
use std::io::Write;

/// Write the report to `output`
///
/// With `list_ids` set, each suspicious-vendor line is followed by an indented
/// `ids:` line naming the flagged transactions.
///
/// # Errors
///
/// Returns `ChallengeError::IoError` if writing or flushing fails.
pub fn write_report(
    report: &Report,
    list_ids: bool,
    output: &mut dyn Write,
) -> Result<(), ChallengeError> {
    writeln!(
        output,
        "Spent on {} {} = {}",
        report.institution, report.payment_type, report.institution_total
    )?;
    writeln!(output, "Unique vendors = {}", report.unique_vendor_count())?;
    writeln!(output, "Unique vendors = [{}]", report.unique_vendors.join(", "))?;
    writeln!(
        output,
        "Amount on {}: {}",
        report.tags.join(" or "),
        report.tagged_spend
    )?;
    writeln!(output, "London party = {}", report.window_spend)?;
    writeln!(output, "Days at two distinct bars {}", report.nights_out)?;

    for suspect in &report.suspicious {
        writeln!(
            output,
            "{} had {} suspicious transactions",
            suspect.vendor,
            suspect.suspicious_count()
        )?;
        if list_ids {
            writeln!(output, "  ids: {}", suspect.transaction_ids.join(", "))?;
        }
    }

    output.flush()?;
    Ok(())
}
