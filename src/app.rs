pub mod alias;
pub mod filter;
pub mod rates;
pub mod rows;
pub mod suppression;

use std::time::Duration;

use alias::AliasTable;
use filter::DiskFilter;
use rates::{RateEngine, UnitMode};
use rows::{build_rows, DiskIoRow};
use suppression::SuppressionConfig;

use crate::collection::Data;

/// Settings that don't change after startup.
#[derive(Debug, Clone)]
pub struct AppConfigFields {
    pub update_rate: Duration,
    pub use_binary_prefix: bool,
    /// Stop after this many printed refreshes, if set.
    pub refresh_count: Option<u64>,
}

impl Default for AppConfigFields {
    fn default() -> Self {
        Self {
            update_rate: Duration::from_millis(crate::constants::DEFAULT_REFRESH_RATE_IN_MILLISECONDS),
            use_binary_prefix: false,
            refresh_count: None,
        }
    }
}

/// Everything that decides which disks are shown and how.
#[derive(Debug, Clone, Default)]
pub struct DiskIoSettings {
    pub filter: DiskFilter,
    pub suppression: SuppressionConfig,
    pub aliases: AliasTable,
}

/// The main program state. Owns the previous-sample memory, so it must only
/// ever be touched from one thread.
#[derive(Debug)]
pub struct App {
    pub app_config_fields: AppConfigFields,
    settings: DiskIoSettings,
    rate_engine: RateEngine,
    unit_mode: UnitMode,
    rows: Vec<DiskIoRow>,
    primed: bool,
    refreshes: u64,
}

impl App {
    pub fn new(app_config_fields: AppConfigFields, settings: DiskIoSettings, unit_mode: UnitMode) -> Self {
        Self {
            app_config_fields,
            settings,
            rate_engine: RateEngine::default(),
            unit_mode,
            rows: Vec::new(),
            primed: false,
            refreshes: 0,
        }
    }

    /// Feeds a new round of samples through the pipeline, returning whether
    /// there is something new to draw. The very first round only primes the
    /// rate engine.
    pub fn eat_data(&mut self, data: Data) -> bool {
        let primed = self.primed;
        let rates = self.rate_engine.update(&data.disks, self.unit_mode);

        let visible: Vec<_> = rates
            .into_iter()
            .filter(|rate| self.settings.filter.is_visible(&rate.name))
            .filter(|rate| self.settings.suppression.should_display(rate))
            .collect();

        self.rows = build_rows(
            &visible,
            &self.settings.aliases,
            self.app_config_fields.use_binary_prefix,
        );

        if primed {
            self.refreshes += 1;
        } else {
            log::debug!("primed rate engine with {} devices", data.disks.len());
            self.primed = true;
        }

        primed
    }

    /// The rows from the latest refresh.
    pub fn rows(&self) -> &[DiskIoRow] {
        &self.rows
    }

    pub fn unit_mode(&self) -> UnitMode {
        self.unit_mode
    }

    /// Switches between throughput and IOPS. Takes effect on the next refresh.
    pub fn toggle_unit_mode(&mut self) {
        self.unit_mode = self.unit_mode.toggled();
        log::debug!("switched to {:?} mode", self.unit_mode);
    }

    /// Forgets all previous samples and rows.
    pub fn reset(&mut self) {
        self.rate_engine.reset();
        self.rows.clear();
        self.primed = false;
    }

    /// Whether we've printed as many refreshes as were asked for.
    pub fn is_done(&self) -> bool {
        self.app_config_fields
            .refresh_count
            .is_some_and(|count| self.refreshes >= count)
    }
}
