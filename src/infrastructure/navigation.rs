//! Navigation hand-off over a channel.

use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::domain::entities::LaunchPayload;
use crate::domain::ports::NavigationPort;

/// Forwards launch payloads to whoever owns the receiving end.
#[derive(Debug, Clone)]
pub struct ChannelNavigator {
    tx: mpsc::UnboundedSender<LaunchPayload>,
}

impl ChannelNavigator {
    /// Creates a navigator and the receiver the host listens on.
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<LaunchPayload>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl NavigationPort for ChannelNavigator {
    fn launch(&self, payload: LaunchPayload) {
        info!(image = %payload.image, "Handing off to game screen");
        if self.tx.send(payload).is_err() {
            warn!("Game screen receiver dropped, launch ignored");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::DifficultyLevel;

    #[tokio::test]
    async fn test_launch_is_forwarded() {
        let (navigator, mut rx) = ChannelNavigator::new();
        let payload = LaunchPayload::new(
            "https://h/upload/a.jpg".to_string(),
            DifficultyLevel::Easy.default_size(),
            DifficultyLevel::Easy,
        );

        navigator.launch(payload.clone());

        assert_eq!(rx.recv().await, Some(payload));
    }

    #[test]
    fn test_launch_without_receiver_does_not_panic() {
        let (navigator, rx) = ChannelNavigator::new();
        drop(rx);

        navigator.launch(LaunchPayload::new(
            "https://h/upload/a.jpg".to_string(),
            DifficultyLevel::Hard.default_size(),
            DifficultyLevel::Hard,
        ));
    }
}
