use serde::Deserialize;

use super::StringOrNum;

/// General flags, mirroring the command-line arguments.
#[derive(Clone, Debug, Default, Deserialize)]
#[cfg_attr(test, derive(PartialEq))]
#[serde(deny_unknown_fields)]
pub(crate) struct FlagConfig {
    pub(crate) rate: Option<StringOrNum>,
    pub(crate) iops: Option<bool>,
    pub(crate) binary_prefix: Option<bool>,
    pub(crate) count: Option<u64>,
}
