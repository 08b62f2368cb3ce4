//! Legacy NVD 1.1 feed schema, reduced to the fields the conversion reads.
//!
//! Every fragment is a declared `Deserialize` struct so a malformed feed
//! fails at the loader boundary with a descriptive serde error instead of
//! a late key-lookup failure. Unknown fields are ignored; optional blocks
//! default to empty.

use serde::Deserialize;

/// One NVD feed file: a single object holding a sequence of CVE items.
#[derive(Debug, Deserialize)]
pub struct NvdFeed {
    #[serde(rename = "CVE_Items")]
    pub cve_items: Vec<CveItem>,
}

/// A single CVE entry in the feed.
#[derive(Debug, Deserialize)]
pub struct CveItem {
    pub cve: Cve,
    #[serde(default)]
    pub configurations: Configurations,
    #[serde(default)]
    pub impact: Impact,
    #[serde(rename = "publishedDate", default)]
    pub published_date: String,
    #[serde(rename = "lastModifiedDate", default)]
    pub last_modified_date: String,
}

impl CveItem {
    /// The CVE identifier, e.g. `CVE-2021-12345`.
    pub fn id(&self) -> &str {
        &self.cve.meta.id
    }

    /// First description value, or empty when the feed carries none.
    pub fn details(&self) -> &str {
        self.cve
            .description
            .description_data
            .first()
            .map_or("", |d| d.value.as_str())
    }

    /// Reference URLs in feed order.
    pub fn reference_urls(&self) -> impl Iterator<Item = &str> {
        self.cve
            .references
            .reference_data
            .iter()
            .map(|r| r.url.as_str())
    }

    /// Weakness (CWE) identifiers from the first problemtype block.
    pub fn cwe_ids(&self) -> Vec<String> {
        self.cve
            .problemtype
            .problemtype_data
            .first()
            .map(|p| p.description.iter().map(|d| d.value.clone()).collect())
            .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
pub struct Cve {
    #[serde(rename = "CVE_data_meta")]
    pub meta: CveMeta,
    #[serde(default)]
    pub problemtype: ProblemType,
    #[serde(default)]
    pub references: References,
    #[serde(default)]
    pub description: Description,
}

#[derive(Debug, Deserialize)]
pub struct CveMeta {
    #[serde(rename = "ID")]
    pub id: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProblemType {
    #[serde(default)]
    pub problemtype_data: Vec<ProblemTypeData>,
}

#[derive(Debug, Deserialize)]
pub struct ProblemTypeData {
    #[serde(default)]
    pub description: Vec<LangValue>,
}

/// `{lang, value}` pair; only the value is consumed.
#[derive(Debug, Deserialize)]
pub struct LangValue {
    pub value: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct References {
    #[serde(default)]
    pub reference_data: Vec<Reference>,
}

#[derive(Debug, Deserialize)]
pub struct Reference {
    pub url: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct Description {
    #[serde(default)]
    pub description_data: Vec<LangValue>,
}

/// Applicability tree: a flat list of nodes, each either an `OR` node
/// carrying its own matches or a grouping node carrying children.
#[derive(Debug, Default, Deserialize)]
pub struct Configurations {
    #[serde(default)]
    pub nodes: Vec<ConfigNode>,
}

impl Configurations {
    /// All CPE matches flagged vulnerable, in feed order.
    ///
    /// `OR` nodes contribute their own `cpe_match` list; any other
    /// operator contributes the matches of its direct children.
    pub fn vulnerable_matches(&self) -> Vec<&CpeMatch> {
        let mut out = Vec::new();
        for node in &self.nodes {
            if node.operator == "OR" {
                out.extend(node.cpe_match.iter().filter(|m| m.vulnerable));
            } else {
                for child in &node.children {
                    out.extend(child.cpe_match.iter().filter(|m| m.vulnerable));
                }
            }
        }
        out
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ConfigNode {
    #[serde(default)]
    pub operator: String,
    #[serde(default)]
    pub cpe_match: Vec<CpeMatch>,
    #[serde(default)]
    pub children: Vec<ConfigNode>,
}

#[derive(Debug, Deserialize)]
pub struct CpeMatch {
    #[serde(default)]
    pub vulnerable: bool,
    #[serde(rename = "cpe23Uri")]
    pub cpe23_uri: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct Impact {
    #[serde(rename = "baseMetricV3")]
    pub base_metric_v3: Option<BaseMetricV3>,
    #[serde(rename = "baseMetricV2")]
    pub base_metric_v2: Option<BaseMetricV2>,
}

#[derive(Debug, Deserialize)]
pub struct BaseMetricV3 {
    #[serde(rename = "cvssV3")]
    pub cvss_v3: CvssV3,
}

#[derive(Debug, Deserialize)]
pub struct CvssV3 {
    #[serde(rename = "baseScore")]
    pub base_score: f64,
    #[serde(rename = "baseSeverity", default)]
    pub base_severity: String,
    #[serde(rename = "vectorString", default)]
    pub vector_string: String,
}

#[derive(Debug, Deserialize)]
pub struct BaseMetricV2 {
    #[serde(rename = "cvssV2")]
    pub cvss_v2: CvssV2,
}

#[derive(Debug, Deserialize)]
pub struct CvssV2 {
    #[serde(rename = "baseScore")]
    pub base_score: f64,
}
