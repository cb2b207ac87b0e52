use hashbrown::HashMap;
use serde::Deserialize;

/// A list of patterns, written either as a TOML array or as a single
/// comma-separated string.
///
/// Note that the string form splits on every comma, so a pattern that needs a
/// comma (e.g. `sd[a-z]{1,2}`) has to use the array form.
#[derive(Clone, Debug, Deserialize)]
#[cfg_attr(test, derive(PartialEq, Eq))]
#[serde(untagged)]
pub(crate) enum PatternList {
    List(Vec<String>),
    Joined(String),
}

impl PatternList {
    /// Returns the individual patterns with surrounding whitespace removed.
    pub(crate) fn patterns(&self) -> Vec<&str> {
        match self {
            PatternList::List(list) => list.iter().map(|p| p.trim()).collect(),
            PatternList::Joined(joined) => joined.split(',').map(str::trim).collect(),
        }
    }
}

/// Disk I/O configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[cfg_attr(test, derive(PartialEq))]
#[serde(deny_unknown_fields)]
pub(crate) struct DiskIoConfig {
    /// Disks to show. If unset or empty, all disks are shown.
    pub(crate) show: Option<PatternList>,

    /// Disks to hide. Takes precedence over `show`.
    pub(crate) hide: Option<PatternList>,

    /// Hide disks without activity.
    pub(crate) hide_zero: Option<bool>,

    /// With `hide_zero`, the combined rate at or below which a disk is hidden.
    pub(crate) hide_threshold_bytes: Option<f64>,

    /// Raw disk name to display name.
    pub(crate) alias: Option<HashMap<String, String>>,
}
