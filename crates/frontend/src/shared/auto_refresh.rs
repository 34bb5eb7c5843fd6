//! Periodic refresh of order screens driven by the `order_refresh_timeout`
//! global setting.

use contracts::shared::refresh::order_refresh_interval;
use gloo_timers::callback::Interval;

pub const ORDER_REFRESH_SETTING: &str = "order_refresh_timeout";

/// Start the repeating timer. `None` when the setting disables refreshing.
/// Dropping the returned handle stops the timer.
pub fn auto_refresh_order<F>(setting: Option<&str>, callback: F) -> Option<Interval>
where
    F: FnMut() + 'static,
{
    match order_refresh_interval(setting).as_millis() {
        Some(millis) => {
            log::debug!("order auto-refresh every {} ms", millis);
            Some(Interval::new(millis, callback))
        }
        None => {
            log::debug!("order auto-refresh disabled");
            None
        }
    }
}
