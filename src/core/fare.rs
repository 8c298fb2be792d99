use crate::models::FareConstants;

/// Suggested contribution for a shared trip, rounded to cents
///
/// Formula:
/// fare = base_fare
///     + (distance / assumed_mpg) * gas_price   # fuel share
///     + distance * wear_rate_per_mile          # wear-and-tear buffer
///
/// Negative inputs are treated as zero. `f64::max` also maps NaN to zero.
/// There is no upper cap.
pub fn calculate_payment_suggestion(
    distance_miles: f64,
    gas_price: f64,
    constants: &FareConstants,
) -> f64 {
    let safe_distance = distance_miles.max(0.0);
    let safe_gas_price = gas_price.max(0.0);

    let fuel_cost = (safe_distance / constants.assumed_mpg) * safe_gas_price;
    let wear_buffer = safe_distance * constants.wear_rate_per_mile;

    round_to_cents(constants.base_fare + fuel_cost + wear_buffer)
}

/// Round half away from zero to two decimal places
#[inline]
fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Fare calculator bound to a fixed set of formula constants
#[derive(Debug, Clone, Copy, Default)]
pub struct FareEstimator {
    constants: FareConstants,
}

impl FareEstimator {
    pub fn new(constants: FareConstants) -> Self {
        Self { constants }
    }

    pub fn constants(&self) -> &FareConstants {
        &self.constants
    }

    pub fn estimate(&self, distance_miles: f64, gas_price: f64) -> f64 {
        calculate_payment_suggestion(distance_miles, gas_price, &self.constants)
    }
}
