//! Bearer and attachment circuit admission.
//!
//! A bearer is admitted when a contact window for its (transceiver, target)
//! pair covers it in time and spectrum, and no other bearer on that pair
//! occupies an overlapping time span with overlapping spectrum. Circuits are
//! admitted when their bearer exists and covers them in time.

use interconnect_model::{AttachmentCircuit, Bearer, ContactWindow};
use tracing::debug;

use crate::error::{InterconnectError, Result};

/// True when `window` serves the bearer's link, contains its interval and
/// strictly contains all four frequency parameters.
pub fn window_covers(window: &ContactWindow, bearer: &Bearer) -> bool {
    window.serves(&bearer.transceiver, &bearer.target)
        && window.interval.contains(&bearer.interval)
        && window
            .rx
            .admits(bearer.rx_center_frequency_hz, bearer.rx_bandwidth_hz)
        && window
            .tx
            .admits(bearer.tx_center_frequency_hz, bearer.tx_bandwidth_hz)
}

/// `|c_a - c_b| > (bw_a + bw_b) / 2`, evaluated without division.
fn band_disjoint(center_a: u64, bandwidth_a: u64, center_b: u64, bandwidth_b: u64) -> bool {
    let gap = u128::from(center_a.abs_diff(center_b)) * 2;
    gap > u128::from(bandwidth_a) + u128::from(bandwidth_b)
}

/// Two bearers are spectrally separate only if both their receive and
/// transmit bands are disjoint.
pub fn frequency_disjoint(a: &Bearer, b: &Bearer) -> bool {
    band_disjoint(
        a.rx_center_frequency_hz,
        a.rx_bandwidth_hz,
        b.rx_center_frequency_hz,
        b.rx_bandwidth_hz,
    ) && band_disjoint(
        a.tx_center_frequency_hz,
        a.tx_bandwidth_hz,
        b.tx_center_frequency_hz,
        b.tx_bandwidth_hz,
    )
}

pub fn conflicts(a: &Bearer, b: &Bearer) -> bool {
    a.shares_link_with(b) && a.interval.overlaps(&b.interval) && !frequency_disjoint(a, b)
}

/// Decide whether `candidate` may join `existing`.
pub fn admit_bearer<'a>(
    candidate: &Bearer,
    windows: impl IntoIterator<Item = &'a ContactWindow>,
    existing: impl IntoIterator<Item = &'a Bearer>,
) -> Result<()> {
    if candidate.interval.is_inverted() {
        return Err(InterconnectError::invalid_argument(
            "bearer interval ends before it starts",
        ));
    }

    let Some(window) = windows
        .into_iter()
        .find(|window| window_covers(window, candidate))
    else {
        debug!(
            transceiver = %candidate.transceiver,
            target = %candidate.target,
            "bearer rejected: no covering contact window"
        );
        return Err(InterconnectError::failed_precondition(
            "no sufficient contact window available",
        ));
    };

    let clashing: Vec<&str> = existing
        .into_iter()
        .filter(|other| conflicts(candidate, other))
        .map(|other| other.name.as_str())
        .collect();

    if !clashing.is_empty() {
        debug!(
            window = %window.name,
            conflicting = ?clashing,
            "bearer rejected: conflicts with existing bearers"
        );
        return Err(InterconnectError::failed_precondition(format!(
            "bearer conflicts with existing bearers: {}",
            clashing.join(", ")
        )));
    }

    Ok(())
}

/// Decide whether `candidate` may be layered on its bearer.
pub fn admit_attachment_circuit<'a>(
    candidate: &AttachmentCircuit,
    bearers: impl IntoIterator<Item = &'a Bearer>,
) -> Result<()> {
    if candidate.interval.is_inverted() {
        return Err(InterconnectError::invalid_argument(
            "attachment circuit interval ends before it starts",
        ));
    }

    let Some(bearer) = bearers
        .into_iter()
        .find(|bearer| bearer.name == candidate.bearer)
    else {
        return Err(InterconnectError::failed_precondition(format!(
            "bearer {} does not exist",
            candidate.bearer
        )));
    };

    if !bearer.interval.contains(&candidate.interval) {
        debug!(
            bearer = %bearer.name,
            "attachment circuit rejected: interval outside bearer"
        );
        return Err(InterconnectError::failed_precondition(
            "attachment circuit interval is not covered by its bearer",
        ));
    }

    Ok(())
}
