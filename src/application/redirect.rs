use crate::domain::settings::GatewaySettings;
use url::Url;

/// Query parameter that stops analytics from attributing the visit to the provider.
pub const UTM_NOOVERRIDE: &str = "utm_nooverride";

/// Picks where the shopper goes after submitting checkout.
///
/// With the payment screen skipped the shopper lands on the order received
/// page; otherwise `default_redirect` decides and its URL is returned as is.
pub fn resolve_redirect<F>(
    settings: &GatewaySettings,
    order_received: Url,
    default_redirect: F,
) -> Url
where
    F: FnOnce() -> Url,
{
    if settings.skip_payment_screen {
        return with_no_override(order_received);
    }
    default_redirect()
}

/// Sets `utm_nooverride=1`, keeping every other query pair.
fn with_no_override(mut url: Url) -> Url {
    let retained: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != UTM_NOOVERRIDE)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    url.query_pairs_mut()
        .clear()
        .extend_pairs(retained)
        .append_pair(UTM_NOOVERRIDE, "1");
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    fn received() -> Url {
        Url::parse("https://shop.test/checkout/order-received/42/?key=wc_order_abc").unwrap()
    }

    fn fallback() -> Url {
        Url::parse("https://pay.provider.test/select/tr_123?lang=nl").unwrap()
    }

    #[test]
    fn test_skip_payment_screen_redirects_to_order_received() {
        let settings = GatewaySettings {
            skip_payment_screen: true,
            ..GatewaySettings::default()
        };

        let url = resolve_redirect(&settings, received(), || panic!("fallback must not run"));

        assert_eq!(
            url.as_str(),
            "https://shop.test/checkout/order-received/42/?key=wc_order_abc&utm_nooverride=1"
        );
    }

    #[test]
    fn test_default_redirect_is_returned_untouched() {
        let url = resolve_redirect(&GatewaySettings::default(), received(), fallback);
        assert_eq!(url, fallback());
    }

    #[test]
    fn test_existing_utm_nooverride_is_replaced() {
        let settings = GatewaySettings {
            skip_payment_screen: true,
            ..GatewaySettings::default()
        };
        let url = Url::parse("https://shop.test/received/?utm_nooverride=0&a=b").unwrap();

        let result = resolve_redirect(&settings, url, fallback);
        let pairs: Vec<(String, String)> = result
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        assert_eq!(
            pairs,
            vec![
                ("a".to_string(), "b".to_string()),
                (UTM_NOOVERRIDE.to_string(), "1".to_string())
            ]
        );
    }
}
