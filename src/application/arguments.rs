use crate::domain::arguments::{BILLING_EMAIL_KEY, DUE_DATE_KEY, PaymentArguments};
use crate::domain::expiry::compute_due_date;
use crate::domain::order::OrderIdentity;
use crate::domain::settings::GatewaySettings;
use chrono::NaiveDate;

/// Adds the expiry window and billing email to an outgoing payment request.
///
/// The due date goes into the nested `payment` object when the request has one,
/// otherwise at the top level. `billingEmail` is always top level and is only
/// attached together with a due date: when no due date applies, `args` comes
/// back untouched.
pub fn build_payment_arguments(
    settings: &GatewaySettings,
    order: &OrderIdentity,
    today: NaiveDate,
    mut args: PaymentArguments,
) -> PaymentArguments {
    let Some(due_date) = compute_due_date(settings.expiry_enabled, settings.expiry_days, today)
    else {
        return args;
    };

    let due_date = due_date.to_string();
    match args.payment_mut() {
        Some(payment) => {
            payment.insert(DUE_DATE_KEY.to_string(), due_date.into());
        }
        None => {
            args.insert(DUE_DATE_KEY, due_date);
        }
    }

    if let Some(email) = order.billing_email() {
        args.insert(BILLING_EMAIL_KEY, email);
    }

    args
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::OrderStatus;
    use serde_json::json;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    fn enabled(days: i64) -> GatewaySettings {
        GatewaySettings {
            expiry_enabled: true,
            expiry_days: days,
            ..GatewaySettings::default()
        }
    }

    fn order() -> OrderIdentity {
        OrderIdentity::new(7, OrderStatus::Pending).with_billing_email("a@b.com")
    }

    fn args(value: serde_json::Value) -> PaymentArguments {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_flat_request_gets_top_level_due_date_and_email() {
        let result = build_payment_arguments(&enabled(12), &order(), today(), PaymentArguments::new());

        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({"dueDate": "2024-03-13", "billingEmail": "a@b.com"})
        );
    }

    #[test]
    fn test_nested_request_gets_due_date_inside_payment() {
        let result = build_payment_arguments(
            &enabled(12),
            &order(),
            today(),
            args(json!({"payment": {"method": "banktransfer"}})),
        );

        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({
                "payment": {"method": "banktransfer", "dueDate": "2024-03-13"},
                "billingEmail": "a@b.com"
            })
        );
    }

    #[test]
    fn test_no_due_date_leaves_request_untouched() {
        let original = args(json!({"amount": {"currency": "EUR", "value": "10.00"}}));

        let disabled = GatewaySettings::default();
        assert_eq!(
            build_payment_arguments(&disabled, &order(), today(), original.clone()),
            original
        );

        for days in [4, 61] {
            let result = build_payment_arguments(&enabled(days), &order(), today(), original.clone());
            assert_eq!(result, original);
            assert!(result.get(BILLING_EMAIL_KEY).is_none());
        }
    }

    #[test]
    fn test_whitespace_email_is_not_attached() {
        let order = OrderIdentity::new(7, OrderStatus::Pending).with_billing_email("   ");
        let result = build_payment_arguments(&enabled(5), &order, today(), PaymentArguments::new());

        assert_eq!(result.get(DUE_DATE_KEY), Some(&json!("2024-03-06")));
        assert!(result.get(BILLING_EMAIL_KEY).is_none());
    }

    #[test]
    fn test_scalar_payment_key_falls_back_to_top_level() {
        let result = build_payment_arguments(
            &enabled(60),
            &order(),
            today(),
            args(json!({"payment": "banktransfer"})),
        );

        assert_eq!(result.get("payment"), Some(&json!("banktransfer")));
        assert_eq!(result.get(DUE_DATE_KEY), Some(&json!("2024-04-30")));
    }
}
