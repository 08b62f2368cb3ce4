//! CVSS severity extraction from NVD impact blocks.
//!
//! Both a v3 and a v2 block may be present on the same record; each
//! contributes one `severity[]` entry. Only the v3 block carries the
//! details (and associated CWE ids) that feed the `database_specific`
//! extension block, so they are bundled behind one `Option` and cannot be
//! emitted for a v2-only record.

use crate::model::nvd::CveItem;
use crate::model::osv::{SeverityEntry, SeverityKind};

/// CVSS v3 details propagated into the product extension block.
#[derive(Debug, Clone, PartialEq)]
pub struct V3Details {
    pub score: f64,
    pub severity: String,
    pub vector: String,
    pub cwes: Vec<String>,
}

/// Severity entries plus the optional v3 detail block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedSeverity {
    pub entries: Vec<SeverityEntry>,
    pub v3: Option<V3Details>,
}

/// Extract severity entries from a CVE item's impact blocks.
pub fn extract(item: &CveItem) -> ExtractedSeverity {
    let mut extracted = ExtractedSeverity::default();

    if let Some(v3) = &item.impact.base_metric_v3 {
        extracted.entries.push(SeverityEntry {
            kind: SeverityKind::CvssV3,
            score: v3.cvss_v3.base_score,
        });
        extracted.v3 = Some(V3Details {
            score: v3.cvss_v3.base_score,
            severity: v3.cvss_v3.base_severity.clone(),
            vector: v3.cvss_v3.vector_string.clone(),
            cwes: item.cwe_ids(),
        });
    }

    if let Some(v2) = &item.impact.base_metric_v2 {
        extracted.entries.push(SeverityEntry {
            kind: SeverityKind::CvssV2,
            score: v2.cvss_v2.base_score,
        });
    }

    extracted
}
