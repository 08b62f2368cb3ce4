//! Per-product OSV record assembly.
//!
//! `transform_item` runs one CVE item through the whole record-level
//! transform: scope filter, reference classification, identifier
//! normalization, severity extraction, then one assembled record per
//! normalized product key.

use crate::classify;
use crate::cpe::{self, ProductVersions};
use crate::model::nvd::CveItem;
use crate::model::osv::{
    AffectedEntry, ClassifiedReference, CvssDetails, DatabaseSpecific, GitRange, OsvRecord,
    Package, ReferenceType, SCHEMA_VERSION,
};
use crate::severity::{self, ExtractedSeverity};

/// One assembled record, tagged with the product subdirectory it belongs
/// under.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub product: String,
    pub record: OsvRecord,
}

/// Transform a single CVE item into per-product OSV records.
///
/// Returns `None` when the item is out of scope (no commit-trackable
/// reference) or when no usable product key survives normalization.
pub fn transform_item(item: &CveItem) -> Option<Vec<ProductRecord>> {
    let urls = dedup_urls(item.reference_urls());
    if !classify::is_oss(urls.iter().map(String::as_str)) {
        tracing::debug!("{}: no commit reference, out of scope", item.id());
        return None;
    }

    let references = classify::classify_references(&urls);

    let mut products = ProductVersions::default();
    for cpe_match in item.configurations.vulnerable_matches() {
        if let Err(e) = products.record(&cpe_match.cpe23_uri) {
            tracing::warn!("{}: skipping CPE entry: {e}", item.id());
        }
    }
    if products.is_empty() {
        return None;
    }

    let extracted = severity::extract(item);
    let ranges = collect_ranges(item.id(), &references);
    let aliases = collect_aliases(&references);

    let records = products
        .iter()
        .map(|(key, versions)| ProductRecord {
            product: cpe::product_name(key).to_string(),
            record: assemble(item, key, versions, &references, &ranges, &aliases, &extracted),
        })
        .collect();
    Some(records)
}

/// Build the OSV record for one normalized product key.
fn assemble(
    item: &CveItem,
    key: &str,
    versions: &[String],
    references: &[ClassifiedReference],
    ranges: &[GitRange],
    aliases: &[String],
    extracted: &ExtractedSeverity,
) -> OsvRecord {
    let mut affected = vec![
        AffectedEntry::Package {
            package: Package {
                name: cpe::product_name(key).to_string(),
                cpe: key.to_string(),
            },
        },
        AffectedEntry::Ranges {
            ranges: ranges.to_vec(),
        },
    ];

    let versions = dedup_preserving_order(versions);
    if !versions.is_empty() {
        affected.push(AffectedEntry::Versions { versions });
    }

    if let Some(v3) = &extracted.v3 {
        affected.push(AffectedEntry::DatabaseSpecific {
            database_specific: DatabaseSpecific {
                cwe: v3.cwes.clone(),
                cvss: CvssDetails {
                    score: v3.score,
                    severity: v3.severity.clone(),
                    code: v3.vector.clone(),
                },
            },
        });
    }

    OsvRecord {
        schema_version: SCHEMA_VERSION.to_string(),
        id: item.id().to_string(),
        aliases: aliases.to_vec(),
        modified: item.last_modified_date.clone(),
        published: item.published_date.clone(),
        details: item.details().to_string(),
        severity: extracted.entries.clone(),
        affected,
        references: references.to_vec(),
    }
}

/// One GIT range per parseable FIX reference. Unparseable fix URLs are
/// logged with the vulnerability id and contribute no range; they still
/// appear in the reference list.
fn collect_ranges(id: &str, references: &[ClassifiedReference]) -> Vec<GitRange> {
    references
        .iter()
        .filter(|r| r.ref_type == ReferenceType::Fix)
        .filter_map(|r| {
            let range = classify::parse_fix_url(&r.url);
            if range.is_none() {
                tracing::warn!("{id}: cannot extract commit from fix URL {}", r.url);
            }
            range
        })
        .collect()
}

/// Aliases: GHSA ids from ADVISORY references plus `OSV-...` tokens from
/// any reference (trailing `.yaml` stripped), deduplicated in first-seen
/// order.
pub fn collect_aliases(references: &[ClassifiedReference]) -> Vec<String> {
    let mut aliases = Vec::new();
    for reference in references {
        if reference.ref_type == ReferenceType::Advisory && reference.url.contains("GHSA") {
            push_unique(&mut aliases, last_path_segment(&reference.url).to_string());
        }
        if reference.url.contains("OSV-") {
            let alias = last_path_segment(&reference.url)
                .trim_end_matches(".yaml")
                .to_string();
            push_unique(&mut aliases, alias);
        }
    }
    aliases
}

fn last_path_segment(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}

fn push_unique(list: &mut Vec<String>, value: String) {
    if !list.contains(&value) {
        list.push(value);
    }
}

/// Deduplicate reference URLs, keeping first-seen order. The source used
/// an unordered set here; a stable order makes output deterministic.
fn dedup_urls<'a>(urls: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for url in urls {
        if !out.iter().any(|seen| seen == url) {
            out.push(url.to_string());
        }
    }
    out
}

fn dedup_preserving_order(versions: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for version in versions {
        if !out.contains(version) {
            out.push(version.clone());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::osv::SeverityKind;

    fn item(json: &str) -> CveItem {
        serde_json::from_str(json).expect("item decodes")
    }

    fn two_product_item() -> CveItem {
        item(
            r#"{
                "cve": {
                    "CVE_data_meta": {"ID": "CVE-2021-0003"},
                    "problemtype": {"problemtype_data": [
                        {"description": [{"lang": "en", "value": "CWE-787"}]}
                    ]},
                    "references": {"reference_data": [
                        {"url": "https://github.com/org/repo/commit/abcdef123456"},
                        {"url": "https://github.com/org/repo/security/advisories/GHSA-aaaa-bbbb-cccc"},
                        {"url": "https://osv.dev/vulnerability/OSV-2021-777.yaml"},
                        {"url": "https://example.com/writeup"}
                    ]},
                    "description": {"description_data": [
                        {"lang": "en", "value": "Out-of-bounds write."}
                    ]}
                },
                "configurations": {"nodes": [
                    {"operator": "OR", "cpe_match": [
                        {"vulnerable": true, "cpe23Uri": "cpe:2.3:a:org:repo:1.0:*:*:*:*:*:*:*"},
                        {"vulnerable": true, "cpe23Uri": "cpe:2.3:a:org:repo:1.0:*:*:*:*:*:*:*"},
                        {"vulnerable": true, "cpe23Uri": "cpe:2.3:o:vendor:os:*:*:*:*:*:*:*:*"}
                    ]}
                ]},
                "impact": {
                    "baseMetricV3": {"cvssV3": {
                        "baseScore": 9.8,
                        "baseSeverity": "CRITICAL",
                        "vectorString": "CVSS:3.1/AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H"
                    }}
                },
                "publishedDate": "2021-05-18T12:15Z",
                "lastModifiedDate": "2021-05-20T16:02Z"
            }"#,
        )
    }

    #[test]
    fn two_products_share_references_and_severity() {
        let records = transform_item(&two_product_item()).expect("in scope");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].product, "repo");
        assert_eq!(records[1].product, "os");

        assert_eq!(records[0].record.references, records[1].record.references);
        assert_eq!(records[0].record.severity, records[1].record.severity);
        assert_ne!(records[0].record.affected[0], records[1].record.affected[0]);
    }

    #[test]
    fn versions_dedup_and_wildcards_stay_out() {
        let records = transform_item(&two_product_item()).expect("in scope");

        // repo saw 1.0 twice; deduplicated to one entry
        let versions = records[0]
            .record
            .affected
            .iter()
            .find_map(|e| match e {
                AffectedEntry::Versions { versions } => Some(versions.clone()),
                _ => None,
            })
            .expect("repo has versions");
        assert_eq!(versions, vec!["1.0".to_string()]);

        // os only saw a wildcard version; no versions entry at all
        assert!(!records[1]
            .record
            .affected
            .iter()
            .any(|e| matches!(e, AffectedEntry::Versions { .. })));
    }

    #[test]
    fn aliases_collect_ghsa_and_osv_tokens_once() {
        let records = transform_item(&two_product_item()).expect("in scope");
        assert_eq!(
            records[0].record.aliases,
            vec!["GHSA-aaaa-bbbb-cccc".to_string(), "OSV-2021-777".to_string()]
        );
    }

    #[test]
    fn database_specific_carries_v3_details() {
        let records = transform_item(&two_product_item()).expect("in scope");
        let db = records[0]
            .record
            .affected
            .iter()
            .find_map(|e| match e {
                AffectedEntry::DatabaseSpecific { database_specific } => Some(database_specific),
                _ => None,
            })
            .expect("v3 block present");
        assert_eq!(db.cwe, vec!["CWE-787".to_string()]);
        assert_eq!(db.cvss.severity, "CRITICAL");
        assert_eq!(db.cvss.score, 9.8);

        assert_eq!(records[0].record.severity.len(), 1);
        assert_eq!(records[0].record.severity[0].kind, SeverityKind::CvssV3);
    }

    #[test]
    fn out_of_scope_item_yields_nothing() {
        let no_commit = item(
            r#"{
                "cve": {
                    "CVE_data_meta": {"ID": "CVE-2021-0004"},
                    "references": {"reference_data": [
                        {"url": "https://example.com/post"}
                    ]}
                }
            }"#,
        );
        assert!(transform_item(&no_commit).is_none());
    }

    #[test]
    fn placeholder_cpe_is_skipped_without_dropping_the_item() {
        let mixed = item(
            r#"{
                "cve": {
                    "CVE_data_meta": {"ID": "CVE-2021-0005"},
                    "references": {"reference_data": [
                        {"url": "https://github.com/org/repo/commit/abc"}
                    ]}
                },
                "configurations": {"nodes": [
                    {"operator": "OR", "cpe_match": [
                        {"vulnerable": true, "cpe23Uri": "cpe:2.3:a:org:*:1.0:*:*:*:*:*:*:*"},
                        {"vulnerable": true, "cpe23Uri": "cpe:2.3:a:org:repo:1.0:*:*:*:*:*:*:*"}
                    ]}
                ]}
            }"#,
        );
        let records = transform_item(&mixed).expect("good entry survives");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].product, "repo");
    }

    #[test]
    fn duplicate_reference_urls_classify_once() {
        let duplicated = item(
            r#"{
                "cve": {
                    "CVE_data_meta": {"ID": "CVE-2021-0006"},
                    "references": {"reference_data": [
                        {"url": "https://github.com/org/repo/commit/abc"},
                        {"url": "https://github.com/org/repo/commit/abc"}
                    ]}
                },
                "configurations": {"nodes": [
                    {"operator": "OR", "cpe_match": [
                        {"vulnerable": true, "cpe23Uri": "cpe:2.3:a:org:repo:-:*:*:*:*:*:*:*"}
                    ]}
                ]}
            }"#,
        );
        let records = transform_item(&duplicated).expect("in scope");
        assert_eq!(records[0].record.references.len(), 1);

        // one deduplicated FIX reference yields exactly one range
        let ranges = records[0]
            .record
            .affected
            .iter()
            .find_map(|e| match e {
                AffectedEntry::Ranges { ranges } => Some(ranges.clone()),
                _ => None,
            })
            .expect("ranges entry");
        assert_eq!(ranges.len(), 1);
    }
}
