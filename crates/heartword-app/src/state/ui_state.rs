use crate::action::ModalRequest;

/// How long the completion banner stays up, in seconds.
pub(crate) const CELEBRATION_SECS: f64 = 5.0;

// UiState holds ephemeral UI-only state (modal, keypad, celebration). It is not persisted.
#[derive(Debug, Default)]
pub(crate) struct UiState {
    pub(crate) active_modal: Option<ModalRequest>,
    pub(crate) keypad_open: bool,
    pub(crate) celebration: CelebrationState,
}

impl UiState {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, derive_more::IsVariant)]
pub(crate) enum CelebrationState {
    #[default]
    Idle,
    /// Waiting for the next frame to learn the current time.
    Requested,
    Showing {
        until: f64,
    },
}

impl CelebrationState {
    pub(crate) fn request(&mut self) {
        *self = Self::Requested;
    }

    /// Advances the timer to `now` (seconds) and returns whether the banner is visible.
    pub(crate) fn tick(&mut self, now: f64) -> bool {
        match *self {
            Self::Idle => false,
            Self::Requested => {
                *self = Self::Showing {
                    until: now + CELEBRATION_SECS,
                };
                true
            }
            Self::Showing { until } if now >= until => {
                *self = Self::Idle;
                false
            }
            Self::Showing { .. } => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn celebration_shows_for_fixed_duration() {
        let mut celebration = CelebrationState::default();
        assert!(!celebration.tick(1.0));

        celebration.request();
        assert!(celebration.is_requested());
        assert!(celebration.tick(10.0));
        assert_eq!(celebration, CelebrationState::Showing { until: 15.0 });
        assert!(celebration.tick(14.9));
        assert!(!celebration.tick(15.0));
        assert!(celebration.is_idle());
    }
}
