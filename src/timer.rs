//! Countdown driver for toasts.

use std::time::Duration;

use tracing::trace;

use crate::components::Toast;
use crate::error::Result;

/// Tick a visible, auto-hiding toast down until it hides.
///
/// Each tick sleeps `tick`, then subtracts it from the remaining time through
/// [`Toast::update_timer`]. Returns immediately when the toast is hidden or
/// does not auto-hide. A zero `tick` is treated as one millisecond.
pub async fn run_countdown(toast: &mut Toast, tick: Duration) -> Result<()> {
    let tick = tick.max(Duration::from_millis(1));
    let step = i64::try_from(tick.as_millis()).unwrap_or(i64::MAX);
    while toast.is_visible() && toast.auto_hides() {
        tokio::time::sleep(tick).await;
        let remaining = toast.remaining_time().saturating_sub(step);
        trace!(remaining, "toast tick");
        toast.update_timer(remaining)?;
    }
    Ok(())
}
