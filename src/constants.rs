pub mod upstream {

    pub const DEFAULT_PURCH_API_URL: &str = "https://api.purch.xyz/api/gifts";

    pub const DEFAULT_TIMEOUT_SECONDS: u64 = 240;
}

pub mod gifts {

    /// Every gift checks out through the same x-purch endpoint.
    pub const CHECKOUT_URL: &str = "https://x-purch-741433844771.us-east1.run.app/orders/solana";

    pub const AMAZON_PRODUCT_BASE: &str = "https://www.amazon.com/dp";

    pub const FALLBACK_REASON: &str = "Based on profile interests";

    pub const UNKNOWN_ASIN: &str = "UNKNOWN";
}

pub mod cache {

    pub const SUGGESTION_TTL_HOURS: i64 = 24;

    pub const TRENDING_WINDOW_DAYS: i64 = 7;

    pub const TRENDING_SAMPLE_LIMIT: u64 = 100;

    pub const TRENDING_TOP_N: usize = 10;
}
