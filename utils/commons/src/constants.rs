use super::*;

/// Fee charged for listing an item until the owner sets another one (0.025 CCD).
pub const DEFAULT_LISTING_PRICE: Amount = Amount { micro_ccd: 25_000 };

/// Tag for the Custom Listing Price Updated event.
pub const LISTING_PRICE_TAG: u8 = u8::MAX - 5;

/// Tag for the Custom Market Item Listed event.
pub const MARKET_ITEM_LISTED_TAG: u8 = u8::MAX - 6;

/// Tag for the Custom Market Sale event.
pub const MARKET_SALE_TAG: u8 = u8::MAX - 7;
