use crate::Vat;

/// Watt-hours per megawatt-hour.
pub const WH_PER_MWH: f64 = 1_000_000.0;

/// Convert a wholesale EUR/MWh price into a VAT-inclusive EUR/Wh price.
pub fn consumer_price(raw_price: f64, vat: Vat) -> f64 {
    raw_price * vat.multiplier() / WH_PER_MWH
}
