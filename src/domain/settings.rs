use std::collections::HashMap;

/// Option toggling the expiry date feature (bool-like, default `no`).
pub const EXPIRY_ENABLED_OPTION: &str = "activate_expiry_days_setting";
/// Option holding the number of days until a payment expires (int-like).
pub const EXPIRY_DAYS_OPTION: &str = "order_dueDate";
/// Option sending the shopper straight to the order received page.
pub const SKIP_PAYMENT_SCREEN_OPTION: &str = "skip_mollie_payment_screen";
/// Option holding the strftime pattern used for rendered dates.
pub const DATE_FORMAT_OPTION: &str = "date_format";

pub const EXPIRY_DEFAULT_DAYS: i64 = 12;
pub const EXPIRY_MIN_DAYS: i64 = 5;
pub const EXPIRY_MAX_DAYS: i64 = 60;

/// Renders as e.g. `May 1, 2024`.
pub const DEFAULT_DATE_FORMAT: &str = "%B %-d, %Y";

/// Normalized gateway configuration for a single payment method.
///
/// Settings stores hand back strings; [`GatewaySettings::from_lookup`] turns them
/// into typed values once per request. Values are never re-read afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewaySettings {
    pub expiry_enabled: bool,
    /// Raw configured value. Only applied when inside `[EXPIRY_MIN_DAYS, EXPIRY_MAX_DAYS]`.
    pub expiry_days: i64,
    pub skip_payment_screen: bool,
    pub date_format: String,
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            expiry_enabled: false,
            expiry_days: EXPIRY_DEFAULT_DAYS,
            skip_payment_screen: false,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl GatewaySettings {
    /// Option names read by [`GatewaySettings::from_lookup`].
    pub const OPTIONS: [&'static str; 4] = [
        EXPIRY_ENABLED_OPTION,
        EXPIRY_DAYS_OPTION,
        SKIP_PAYMENT_SCREEN_OPTION,
        DATE_FORMAT_OPTION,
    ];

    /// Builds settings from a string lookup, falling back to defaults for missing options.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            expiry_enabled: lookup(EXPIRY_ENABLED_OPTION)
                .map(|v| parse_bool_option(&v))
                .unwrap_or(defaults.expiry_enabled),
            expiry_days: lookup(EXPIRY_DAYS_OPTION)
                .map(|v| parse_int_option(&v))
                .unwrap_or(defaults.expiry_days),
            skip_payment_screen: lookup(SKIP_PAYMENT_SCREEN_OPTION)
                .map(|v| parse_bool_option(&v))
                .unwrap_or(defaults.skip_payment_screen),
            date_format: lookup(DATE_FORMAT_OPTION)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.date_format),
        }
    }

    pub fn from_options(options: &HashMap<String, String>) -> Self {
        Self::from_lookup(|name| options.get(name).cloned())
    }
}

/// `yes`, `true`, `1` and `on` (any case, surrounding whitespace ignored) are true.
pub fn parse_bool_option(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "yes" | "true" | "1" | "on"
    )
}

/// Parses the leading integer of `value`; anything unparsable becomes `0`.
///
/// `"12"`, `" 12 "`, `"12.5"` and `"12days"` all yield `12`.
pub fn parse_int_option(value: &str) -> i64 {
    let trimmed = value.trim();
    let (sign, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end]
        .parse::<i64>()
        .map(|n| sign * n)
        .unwrap_or(0)
}
