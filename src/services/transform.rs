//! Normalizes upstream Purch gift records into the public `GiftItem` shape.
//!
//! Pure functions: output order matches input order, length is preserved,
//! and the same input always produces the same output.

use regex::Regex;
use std::sync::OnceLock;

use crate::clients::purch::PurchGift;
use crate::constants::gifts::{AMAZON_PRODUCT_BASE, CHECKOUT_URL, FALLBACK_REASON, UNKNOWN_ASIN};
use crate::models::gift::GiftItem;

fn get_regex(re: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    re.get_or_init(|| Regex::new(pattern).expect("Invalid regex pattern defined in code"))
}

fn purch_link_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    get_regex(&RE, r"/product/([A-Z0-9]{10})")
}

fn product_link_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    get_regex(&RE, r"/dp/([A-Z0-9]{10})")
}

/// Derives an ASIN from the purch product link first, then the direct
/// marketplace link. Falls back to the literal `UNKNOWN`.
#[must_use]
pub fn extract_asin(purch_link: Option<&str>, product_link: Option<&str>) -> String {
    let from_purch = purch_link
        .and_then(|link| purch_link_regex().captures(link))
        .and_then(|c| c.get(1));

    let from_product = product_link
        .and_then(|link| product_link_regex().captures(link))
        .and_then(|c| c.get(1));

    from_purch
        .or(from_product)
        .map_or_else(|| UNKNOWN_ASIN.to_string(), |m| m.as_str().to_string())
}

#[must_use]
pub fn transform_gift(gift: &PurchGift) -> GiftItem {
    let asin = extract_asin(gift.purch_link.as_deref(), gift.product_link.as_deref());

    let product_url = gift
        .product_link
        .clone()
        .unwrap_or_else(|| format!("{AMAZON_PRODUCT_BASE}/{asin}"));

    GiftItem {
        title: gift.title.clone(),
        price: gift.price,
        image: gift.image.clone(),
        reason: gift
            .reason
            .clone()
            .unwrap_or_else(|| FALLBACK_REASON.to_string()),
        category: gift.category.clone(),
        asin,
        product_url,
        checkout_url: CHECKOUT_URL.to_string(),
        confidence: None,
    }
}

#[must_use]
pub fn transform_gifts(gifts: &[PurchGift]) -> Vec<GiftItem> {
    gifts.iter().map(transform_gift).collect()
}
