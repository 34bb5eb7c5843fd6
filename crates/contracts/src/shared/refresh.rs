use crate::shared::config::DEFAULT_ORDER_TIMEOUT;
use std::time::Duration;

const MIN_INTERVAL: Duration = Duration::from_secs(1);
const MAX_TIMER_MS: u32 = i32::MAX as u32;

/// Period of the order auto-refresh timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshInterval {
    /// Setting is `0`: the timer never fires
    Disabled,
    Every(Duration),
}

impl RefreshInterval {
    pub fn as_millis(&self) -> Option<u32> {
        match self {
            RefreshInterval::Disabled => None,
            // таймеры браузера переполняются выше i32::MAX мс
            RefreshInterval::Every(d) => Some(d.as_millis().min(MAX_TIMER_MS as u128) as u32),
        }
    }
}

/// Interpret the `order_refresh_timeout` global setting.
///
/// Numeric parsing follows the admin panel's historical behaviour: an empty
/// or blank string counts as `0`. Anything that is not a finite,
/// non-negative number falls back to [`DEFAULT_ORDER_TIMEOUT`]; periods
/// shorter than a second are raised to one second.
pub fn order_refresh_interval(setting: Option<&str>) -> RefreshInterval {
    let default = RefreshInterval::Every(Duration::from_secs(DEFAULT_ORDER_TIMEOUT));
    let Some(raw) = setting else {
        return default;
    };
    let trimmed = raw.trim();
    let value = if trimmed.is_empty() {
        0.0
    } else {
        match trimmed.parse::<f64>() {
            Ok(v) if v.is_finite() => v,
            _ => return default,
        }
    };
    if value == 0.0 {
        RefreshInterval::Disabled
    } else if value < 0.0 {
        default
    } else {
        match Duration::try_from_secs_f64(value) {
            Ok(d) => RefreshInterval::Every(d.max(MIN_INTERVAL)),
            Err(_) => default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_disables() {
        assert_eq!(order_refresh_interval(Some("0")), RefreshInterval::Disabled);
        assert_eq!(order_refresh_interval(Some("")), RefreshInterval::Disabled);
        assert_eq!(RefreshInterval::Disabled.as_millis(), None);
    }

    #[test]
    fn test_invalid_or_missing_uses_default() {
        assert_eq!(order_refresh_interval(Some("abc")).as_millis(), Some(30_000));
        assert_eq!(order_refresh_interval(None).as_millis(), Some(30_000));
        assert_eq!(order_refresh_interval(Some("-5")).as_millis(), Some(30_000));
    }

    #[test]
    fn test_configured_seconds() {
        assert_eq!(order_refresh_interval(Some("15")).as_millis(), Some(15_000));
        assert_eq!(order_refresh_interval(Some(" 2.5 ")).as_millis(), Some(2_500));
    }

    #[test]
    fn test_out_of_range_settings() {
        // слишком большое значение не помещается в Duration
        assert_eq!(order_refresh_interval(Some("1e300")).as_millis(), Some(30_000));
        assert_eq!(order_refresh_interval(Some("0.0001")).as_millis(), Some(1_000));
        // ~115 дней: ограничено максимальной задержкой таймера
        assert_eq!(
            order_refresh_interval(Some("10000000")).as_millis(),
            Some(i32::MAX as u32)
        );
    }
}
