//! AR session notifications and the alerts they raise

/// Camera tracking quality reported by the AR session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingState {
    Normal,
    NotAvailable,
    Limited(LimitedReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitedReason {
    Initializing,
    Relocalizing,
    ExcessiveMotion,
    InsufficientFeatures,
    Other,
}

/// A modal message for the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn session_failure(message: &str) -> Self {
        Self::new("Session Failure", message)
    }

    pub fn session_interrupted() -> Self {
        Self::new("AR Session", "Session was interrupted 😔")
    }
}

/// Alert to show for a tracking change, if any
pub fn tracking_alert(state: TrackingState) -> Option<Alert> {
    let message = match state {
        TrackingState::Normal => return None,
        TrackingState::NotAvailable => "AR not available",
        TrackingState::Limited(LimitedReason::ExcessiveMotion) => "Excessive motion!",
        TrackingState::Limited(LimitedReason::InsufficientFeatures) => "Insufficient features!",
        // Transient while the session settles
        TrackingState::Limited(
            LimitedReason::Initializing | LimitedReason::Relocalizing | LimitedReason::Other,
        ) => return None,
    };
    Some(Alert::new("Tracking Limited", message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracking_alerts() {
        assert_eq!(tracking_alert(TrackingState::Normal), None);
        assert_eq!(
            tracking_alert(TrackingState::NotAvailable),
            Some(Alert::new("Tracking Limited", "AR not available"))
        );
        assert_eq!(
            tracking_alert(TrackingState::Limited(LimitedReason::ExcessiveMotion)),
            Some(Alert::new("Tracking Limited", "Excessive motion!"))
        );
        assert_eq!(
            tracking_alert(TrackingState::Limited(LimitedReason::InsufficientFeatures)),
            Some(Alert::new("Tracking Limited", "Insufficient features!"))
        );
        for reason in [
            LimitedReason::Initializing,
            LimitedReason::Relocalizing,
            LimitedReason::Other,
        ] {
            assert_eq!(tracking_alert(TrackingState::Limited(reason)), None);
        }
    }
}
