use regex::Regex;

/// A list of regexes matched against the _whole_ device name.
#[derive(Debug, Clone, Default)]
pub struct Filter {
    list: Vec<Regex>,
}

impl Filter {
    /// Compiles each pattern so that it must match the entire name. For
    /// example, `sda1` will not match `sda10`.
    ///
    /// Each pattern must be a valid regex on its own before it is anchored.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self, regex::Error> {
        let list = patterns
            .iter()
            .map(|pattern| {
                let pattern = pattern.as_ref();
                Regex::new(pattern)?;
                Regex::new(&format!("^(?:{pattern})$"))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { list })
    }

    /// Whether there is a pattern that matches the value.
    #[inline]
    pub(crate) fn has_match(&self, value: &str) -> bool {
        self.list.iter().any(|regex| regex.is_match(value))
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

/// Decides which disks are shown, based on a show list and a hide list.
#[derive(Debug, Clone, Default)]
pub struct DiskFilter {
    show: Option<Filter>,
    hide: Option<Filter>,
}

impl DiskFilter {
    pub fn new(show: Option<Filter>, hide: Option<Filter>) -> Self {
        Self { show, hide }
    }

    /// Whether a disk should be shown.
    ///
    /// A non-empty show list only lets through names matching it. A name
    /// matching the hide list is always rejected, even if it also matches the
    /// show list.
    pub fn is_visible(&self, name: &str) -> bool {
        let shown = match &self.show {
            Some(show) if !show.is_empty() => show.has_match(name),
            _ => true,
        };

        if !shown {
            return false;
        }

        !self.hide.as_ref().is_some_and(|hide| hide.has_match(name))
    }
}
