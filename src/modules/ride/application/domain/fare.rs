use serde::Serialize;

/// Booking fee and tax applied on top of the seat fare.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FarePolicy {
    pub platform_fee: f64,
    pub tax_rate: f64,
}

impl Default for FarePolicy {
    fn default() -> Self {
        Self {
            platform_fee: 20.0,
            tax_rate: 0.18,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FareBreakdown {
    pub price_per_seat: f64,
    pub seats: i32,
    pub fare: f64,
    pub platform_fee: f64,
    pub tax: f64,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FareError {
    #[error("At least one seat must be booked")]
    InvalidSeats,

    #[error("Price per seat must be a finite, non-negative number")]
    InvalidPrice,

    #[error("Only {available} seat(s) available, {requested} requested")]
    SeatsUnavailable { requested: i32, available: i32 },
}

impl FarePolicy {
    /// `tax = round_half_up((fare + fee) * rate)`, `total = fare + fee + tax`.
    pub fn quote(
        &self,
        price_per_seat: f64,
        seats: i32,
        available_seats: i32,
    ) -> Result<FareBreakdown, FareError> {
        if seats < 1 {
            return Err(FareError::InvalidSeats);
        }

        if !price_per_seat.is_finite() || price_per_seat < 0.0 {
            return Err(FareError::InvalidPrice);
        }

        if seats > available_seats {
            return Err(FareError::SeatsUnavailable {
                requested: seats,
                available: available_seats,
            });
        }

        let fare = price_per_seat * f64::from(seats);
        let tax = round_half_up((fare + self.platform_fee) * self.tax_rate);

        Ok(FareBreakdown {
            price_per_seat,
            seats,
            fare,
            platform_fee: self.platform_fee,
            tax,
            total: fare + self.platform_fee + tax,
        })
    }
}

/// Halves go up, as the booking page has always displayed them.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}
