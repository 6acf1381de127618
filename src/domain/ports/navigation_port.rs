//! Port definition for the hand-off to the gameplay screen.

use crate::domain::entities::LaunchPayload;

/// Moves the user to the game screen carrying the setup selection.
#[cfg_attr(test, mockall::automock)]
pub trait NavigationPort: Send + Sync {
    /// Transitions to gameplay with `payload` attached.
    fn launch(&self, payload: LaunchPayload);
}
