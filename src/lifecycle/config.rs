//! Settings for starting a [`ClinicSystem`](super::ClinicSystem).

use std::num::NonZeroU32;

/// Runtime settings of the clinic actors.
///
/// Log verbosity is not part of this struct; it is read from `RUST_LOG` by
/// [`setup_tracing`](actor_framework::tracing::setup_tracing).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClinicConfig {
    /// Number of requests each actor can queue before senders wait.
    pub mailbox_capacity: usize,
    /// First value handed out by the shared id counter.
    pub first_id: NonZeroU32,
}

impl Default for ClinicConfig {
    fn default() -> Self {
        Self {
            mailbox_capacity: 32,
            first_id: NonZeroU32::MIN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_starts_ids_at_one() {
        let config = ClinicConfig::default();
        assert_eq!(config.first_id.get(), 1);
        assert_eq!(config.mailbox_capacity, 32);
    }
}
