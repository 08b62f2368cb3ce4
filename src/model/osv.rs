//! OSV output record shape.
//!
//! Field order on [`OsvRecord`] matches assembly order and is preserved by
//! the YAML serializer, so output files keep a stable, non-alphabetized
//! key ordering.

use serde::Serialize;

/// OSV schema version tag written into every record.
pub const SCHEMA_VERSION: &str = "1.2.0";

/// One output record per (vulnerability, product) pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OsvRecord {
    pub schema_version: String,
    pub id: String,
    pub aliases: Vec<String>,
    pub modified: String,
    pub published: String,
    pub details: String,
    pub severity: Vec<SeverityEntry>,
    pub affected: Vec<AffectedEntry>,
    pub references: Vec<ClassifiedReference>,
}

/// Semantic category of a reference URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReferenceType {
    Fix,
    Report,
    Advisory,
    Article,
    Web,
}

/// A reference URL with its assigned category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedReference {
    #[serde(rename = "type")]
    pub ref_type: ReferenceType,
    pub url: String,
}

/// CVSS scale the score was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeverityKind {
    CvssV3,
    CvssV2,
}

/// One `severity[]` entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeverityEntry {
    #[serde(rename = "type")]
    pub kind: SeverityKind,
    pub score: f64,
}

/// Elements of the `affected[]` list. Each serializes as a single-key map,
/// mirroring the OSV affected-package block layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AffectedEntry {
    Package { package: Package },
    Ranges { ranges: Vec<GitRange> },
    Versions { versions: Vec<String> },
    DatabaseSpecific { database_specific: DatabaseSpecific },
}

/// Affected package: short product name plus its normalized CPE key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Package {
    pub name: String,
    pub cpe: String,
}

/// A GIT version range: introduced at the beginning of history, fixed at
/// an extracted commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GitRange {
    #[serde(rename = "type")]
    pub kind: RangeKind,
    pub repo: String,
    pub events: Vec<RangeEvent>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RangeKind {
    Git,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RangeEvent {
    Introduced { introduced: String },
    Fixed { fixed: String },
}

impl GitRange {
    /// Range covering everything up to `fixed` in `repo`.
    pub fn fixed_at(repo: impl Into<String>, fixed: impl Into<String>) -> Self {
        Self {
            kind: RangeKind::Git,
            repo: repo.into(),
            events: vec![
                RangeEvent::Introduced {
                    introduced: "0".to_string(),
                },
                RangeEvent::Fixed {
                    fixed: fixed.into(),
                },
            ],
        }
    }
}

/// Database-specific extension block, emitted only when a CVSS v3 block
/// was present on the input record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatabaseSpecific {
    #[serde(rename = "CWE")]
    pub cwe: Vec<String>,
    #[serde(rename = "CVSS")]
    pub cvss: CvssDetails,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CvssDetails {
    #[serde(rename = "Score")]
    pub score: f64,
    #[serde(rename = "Severity")]
    pub severity: String,
    #[serde(rename = "Code")]
    pub code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_types_serialize_screaming() {
        let r = ClassifiedReference {
            ref_type: ReferenceType::Fix,
            url: "https://example.com/commit/abc".to_string(),
        };
        let yaml = serde_yaml::to_string(&r).expect("serializes");
        assert!(yaml.contains("type: FIX"));
        assert!(yaml.contains("url: https://example.com/commit/abc"));
    }

    #[test]
    fn affected_entries_serialize_as_single_key_maps() {
        let entries = vec![
            AffectedEntry::Package {
                package: Package {
                    name: "repo".to_string(),
                    cpe: "cpe:2.3:a:org:repo".to_string(),
                },
            },
            AffectedEntry::Ranges {
                ranges: vec![GitRange::fixed_at("https://github.com/org/repo", "abc")],
            },
            AffectedEntry::Versions {
                versions: vec!["1.0".to_string()],
            },
        ];
        let yaml = serde_yaml::to_string(&entries).expect("serializes");
        assert!(yaml.contains("package:"));
        assert!(yaml.contains("name: repo"));
        assert!(yaml.contains("type: GIT"));
        assert!(yaml.contains("introduced: '0'"));
        assert!(yaml.contains("fixed: abc"));
        assert!(yaml.contains("versions:"));
    }

    #[test]
    fn record_keeps_assembly_key_order() {
        let record = OsvRecord {
            schema_version: SCHEMA_VERSION.to_string(),
            id: "CVE-2021-0001".to_string(),
            aliases: vec![],
            modified: "2021-05-20T16:02Z".to_string(),
            published: "2021-05-18T12:15Z".to_string(),
            details: "demo".to_string(),
            severity: vec![],
            affected: vec![],
            references: vec![],
        };
        let yaml = serde_yaml::to_string(&record).expect("serializes");
        let schema_pos = yaml.find("schema_version").expect("schema_version key");
        let id_pos = yaml.find("\nid:").expect("id key");
        let refs_pos = yaml.find("\nreferences:").expect("references key");
        assert!(schema_pos < id_pos && id_pos < refs_pos);
    }
}
