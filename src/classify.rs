//! Reference URL classification and fix-commit extraction.
//!
//! Classification is an ordered table of substring rules evaluated in
//! fixed priority order (`FIX > REPORT > ADVISORY > ARTICLE`, `WEB` as the
//! default). The first matching rule wins; a URL is never multi-tagged, so
//! a commit link inside an issue tracker still classifies as `FIX`.

use crate::model::osv::{ClassifiedReference, GitRange, ReferenceType};

/// Ordered classification rules: any-substring-of predicate → category.
const RULES: &[(&[&str], ReferenceType)] = &[
    (&["commit/", "commits/"], ReferenceType::Fix),
    (
        &[
            "issue",
            "issues",
            "show_bug",
            "bugs.debian.org/",
            "bugs.gentoo.org/",
            "syzkaller.appspot.com/bug?",
            "savannah.gnu.org/bugs",
            "bugs.launchpad.net",
            "hackerone.com/bugs",
        ],
        ReferenceType::Report,
    ),
    (
        &["advisory", "advisories", "www.debian.org/security/"],
        ReferenceType::Advisory,
    ),
    (&["arxiv.org"], ReferenceType::Article),
];

/// Assign a single category to a reference URL.
pub fn classify_url(url: &str) -> ReferenceType {
    for (needles, category) in RULES {
        if needles.iter().any(|needle| url.contains(needle)) {
            return *category;
        }
    }
    ReferenceType::Web
}

/// A vulnerability is commit-trackable (open source) when at least one of
/// its reference URLs carries a `commit/` path segment. This is the sole
/// in-scope signal.
pub fn is_oss<'a>(urls: impl IntoIterator<Item = &'a str>) -> bool {
    urls.into_iter().any(|url| url.contains("commit/"))
}

/// Classify every URL exactly once, preserving input order.
pub fn classify_references(urls: &[String]) -> Vec<ClassifiedReference> {
    urls.iter()
        .map(|url| ClassifiedReference {
            ref_type: classify_url(url),
            url: url.clone(),
        })
        .collect()
}

/// Parse a FIX reference URL into a GIT range.
///
/// Primary pattern splits on `/commit/`; the fallback handles pull-request
/// commit pages by splitting on `/commits/` and dropping the `/pull/<id>`
/// suffix from the repository link. `/-/` path segments (a GitLab artifact)
/// are collapsed and trailing `?id=` query fragments stripped. Returns
/// `None` when neither pattern yields exactly two parts; the caller logs
/// and the reference contributes no range.
pub fn parse_fix_url(url: &str) -> Option<GitRange> {
    if let Some((repo, commit)) = split_exactly_once(url, "/commit/") {
        return Some(GitRange::fixed_at(clean_repo(repo), clean_commit(commit)));
    }
    if let Some((repo, commit)) = split_exactly_once(url, "/commits/") {
        let repo = repo.split("/pull/").next().unwrap_or(repo);
        return Some(GitRange::fixed_at(clean_repo(repo), clean_commit(commit)));
    }
    None
}

/// Split `s` on `pattern` only when the pattern occurs exactly once.
fn split_exactly_once<'a>(s: &'a str, pattern: &str) -> Option<(&'a str, &'a str)> {
    let mut parts = s.split(pattern);
    let left = parts.next()?;
    let right = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    Some((left, right))
}

fn clean_repo(repo: &str) -> String {
    repo.replace("/-/", "/")
}

fn clean_commit(commit: &str) -> String {
    commit.replace("?id=", "")
}
