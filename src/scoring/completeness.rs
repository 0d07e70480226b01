//! Multi-source data completeness.
//!
//! Seven sources count toward completeness; each is either populated or
//! not. Media reports need more than two entries to count; a pair of
//! wire-service rewrites is not independent coverage.

use crate::core::records::MultiSourceData;
use crate::core::Score0To1;

const SOURCE_COUNT: usize = 7;

/// Which of the seven sources are populated, in display order.
pub fn source_checklist(data: &MultiSourceData) -> [(&'static str, bool); SOURCE_COUNT] {
    [
        ("un_ocha_report", data.un_ocha_report.is_some()),
        (
            "government_official_statement",
            data.government_official_statement.is_some(),
        ),
        ("ngo_field_reports", !data.ngo_field_reports.is_empty()),
        ("media_reports", data.media_reports.len() > 2),
        ("satellite_analysis", data.satellite_analysis.is_some()),
        (
            "local_authority_reports",
            !data.local_authority_reports.is_empty(),
        ),
        (
            "humanitarian_partner_intel",
            !data.humanitarian_partner_intel.is_empty(),
        ),
    ]
}

/// Fraction of the seven sources that are populated.
pub fn data_completeness(data: &MultiSourceData) -> Score0To1 {
    let populated = source_checklist(data).iter().filter(|(_, p)| *p).count();
    Score0To1::new(populated as f64 / SOURCE_COUNT as f64)
}
