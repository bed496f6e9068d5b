use regex::Regex;
use std::sync::LazyLock;
use xjs_types::{DEFAULT_CHARM_ORIGIN, NOT_AVAILABLE};

static CHARM_REF_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:(?P<source>[a-z][a-z0-9+.-]*):)?(?:~(?P<owner>[^/\s]+)/)?(?P<path>(?:[^/\s]+/)*)(?P<name>[^/\s]+?)(?:-(?P<rev>\d+))?$",
    )
    .unwrap()
});

static UPGRADE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\D+(\d+)$").unwrap());

/// Source prefix of the public charm store
const STORE_SOURCE: &str = "cs";

/// A charm reference such as `cs:~owner/bionic/mysql-42` taken apart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharmRef {
    /// `cs`, `local`, `ch`; absent for bare names
    pub source: Option<String>,
    pub owner: Option<String>,
    pub series: Option<String>,
    pub name: String,
    pub revision: Option<i64>,
}

impl CharmRef {
    /// `None` when the reference is not a charm reference at all
    pub fn parse(reference: &str) -> Option<Self> {
        let caps = CHARM_REF_REGEX.captures(reference.trim())?;

        let series = caps
            .name("path")
            .map(|m| m.as_str().trim_end_matches('/'))
            .and_then(|path| path.rsplit('/').next())
            .filter(|series| !series.is_empty())
            .map(str::to_string);

        Some(Self {
            source: caps.name("source").map(|m| m.as_str().to_string()),
            owner: caps.name("owner").map(|m| m.as_str().to_string()),
            series,
            name: caps["name"].to_string(),
            revision: caps.name("rev").and_then(|m| m.as_str().parse().ok()),
        })
    }

    /// Registry the charm came from. The public store only counts when the
    /// charm is not published under a personal namespace.
    pub fn origin(&self) -> Option<String> {
        match (self.source.as_deref(), &self.owner) {
            (Some(STORE_SOURCE), None) => Some(DEFAULT_CHARM_ORIGIN.to_string()),
            (Some(source), _) => Some(source.to_string()),
            (None, _) => None,
        }
    }

    /// Revision lookup key: `cs:~owner/<series>/<name>` or `cs:<series>/<name>`.
    ///
    /// Empty for charms outside the public store. The series segment is left
    /// out when it is unknown.
    pub fn store_id(&self, series: &str) -> String {
        if self.source.as_deref() != Some(STORE_SOURCE) {
            return String::new();
        }

        let mut id = String::from("cs:");
        if let Some(owner) = &self.owner {
            id.push('~');
            id.push_str(owner);
            id.push('/');
        }
        if !series.is_empty() && series != NOT_AVAILABLE {
            id.push_str(series);
            id.push('/');
        }
        id.push_str(&self.name);
        id
    }
}

/// Trailing revision of a `can-upgrade-to` value (`"cs:mysql-60"` -> 60)
pub fn latest_revision_from_upgrade(value: &str) -> Option<i64> {
    UPGRADE_REGEX
        .captures(value.trim())
        .and_then(|caps| caps[1].parse().ok())
}
