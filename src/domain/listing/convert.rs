//! Conversions: price spread wire types → domain types.

use super::wire::PriceSpreadWire;
use super::PriceSpread;

impl From<PriceSpreadWire> for PriceSpread {
    fn from(w: PriceSpreadWire) -> Self {
        let security_identifier = w
            .security_identifier
            .or_else(|| w.listing.as_ref().map(|l| l.security_identifier.clone()))
            .unwrap_or_default();
        let name = w
            .name
            .or_else(|| w.listing.as_ref().map(|l| l.name.clone()))
            .unwrap_or_default();

        PriceSpread {
            security_identifier,
            name,
            listing: w.listing,
            ask_price: w.ask_price,
            ask_size: w.ask_size,
            bid_price: w.bid_price,
            bid_size: w.bid_size,
            last_price: w.last_price,
            spread_abs: w.spread_abs,
            spread_percent: w.spread_percent,
            date: w.date,
        }
    }
}
