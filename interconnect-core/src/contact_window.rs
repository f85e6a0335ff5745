//! Contact window derivation.
//!
//! Windows are not modelled physically: the fixed policy hands out the same
//! time span and spectrum envelope for every (transceiver, target) pair.

use std::fmt::Debug;

use chrono::{DateTime, Duration, Utc};
use interconnect_model::{
    Collection, ContactWindow, FrequencyRange, SpectrumEnvelope, Target, TimeInterval,
    Transceiver, split_name,
};
use serde::{Deserialize, Serialize};

use crate::error::{InterconnectError, Result};

/// Strategy producing the windows for a freshly created transceiver.
pub trait WindowPolicy: Send + Sync + Debug {
    /// One window per target. `transceiver` already carries its assigned
    /// name.
    fn generate(
        &self,
        transceiver: &Transceiver,
        targets: &[Target],
        now: DateTime<Utc>,
    ) -> Result<Vec<ContactWindow>>;
}

/// Parameters of [`FixedWindowPolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub duration_hours: u32,
    pub rx: SpectrumEnvelope,
    pub tx: SpectrumEnvelope,
}

/// Upper bound on `duration_hours`, one century.
pub const MAX_WINDOW_HOURS: u32 = 24 * 366 * 100;

pub const DEFAULT_ENVELOPE: SpectrumEnvelope = SpectrumEnvelope::new(
    FrequencyRange::new(12_000_000_000, 18_000_000_000),
    FrequencyRange::new(20_000_000, 40_000_000),
);

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            duration_hours: 24,
            rx: DEFAULT_ENVELOPE,
            tx: DEFAULT_ENVELOPE,
        }
    }
}

impl WindowSettings {
    pub fn validate(&self) -> Result<()> {
        if self.duration_hours == 0 {
            return Err(InterconnectError::invalid_argument(
                "window duration must be at least one hour",
            ));
        }
        if self.duration_hours > MAX_WINDOW_HOURS {
            return Err(InterconnectError::invalid_argument(format!(
                "window duration of {} hours exceeds the maximum of {MAX_WINDOW_HOURS}",
                self.duration_hours
            )));
        }

        for (label, range) in [
            ("rx center frequency", self.rx.center_frequency),
            ("rx bandwidth", self.rx.bandwidth),
            ("tx center frequency", self.tx.center_frequency),
            ("tx bandwidth", self.tx.bandwidth),
        ] {
            if range.is_inverted() {
                return Err(InterconnectError::invalid_argument(format!(
                    "{label} bounds are inverted ({} > {})",
                    range.min_hz, range.max_hz
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct FixedWindowPolicy {
    settings: WindowSettings,
}

impl FixedWindowPolicy {
    pub fn new(settings: WindowSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self { settings })
    }

    pub fn settings(&self) -> &WindowSettings {
        &self.settings
    }
}

/// `contactWindow/<transceiverId><targetId>`. Names that do not carry a
/// collection prefix are used as-is.
pub fn window_name(transceiver: &str, target: &str) -> String {
    let transceiver_id = split_name(transceiver).map_or(transceiver, |(_, id)| id);
    let target_id = split_name(target).map_or(target, |(_, id)| id);
    Collection::ContactWindows.qualify(&format!("{transceiver_id}{target_id}"))
}

impl WindowPolicy for FixedWindowPolicy {
    fn generate(
        &self,
        transceiver: &Transceiver,
        targets: &[Target],
        now: DateTime<Utc>,
    ) -> Result<Vec<ContactWindow>> {
        let duration = Duration::hours(i64::from(self.settings.duration_hours));
        let interval = TimeInterval::checked_starting_at(now, duration).ok_or_else(|| {
            InterconnectError::failed_precondition(format!(
                "contact window of {} hours starting at {now} is out of range",
                self.settings.duration_hours
            ))
        })?;

        Ok(targets
            .iter()
            .map(|target| ContactWindow {
                name: window_name(&transceiver.name, &target.name),
                transceiver: transceiver.name.clone(),
                target: target.name.clone(),
                interval,
                rx: self.settings.rx,
                tx: self.settings.tx,
            })
            .collect())
    }
}
