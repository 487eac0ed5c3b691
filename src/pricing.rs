//! Swap pricing for the constant-product curve.
//!
//! One pure function prices every swap in both directions:
//!
//! ```text
//! output = (input · fee_num · output_reserve)
//!          ─────────────────────────────────────
//!          (input_reserve · fee_den + input · fee_num)
//! ```
//!
//! This is the fee-inclusive closed form of `x · y = k`: the fee-discounted
//! input is priced against the curve in a single expression, so the only
//! rounding is the final floor division. Because the fee share of the input
//! stays in the pool but never enters the pricing, every swap with a nonzero
//! fee strictly grows the reserve product; the invariant check is implicit
//! in the formula.
//!
//! All arithmetic is checked `u128`; an intermediate product beyond `u128`
//! surfaces [`PoolError::Overflow`] rather than wrapping.

use crate::domain::{Amount, SwapFee};
use crate::error::PoolError;

/// Quotes the output amount for a swap against the given reserves.
///
/// Pure function: reads no state, mutates nothing, and is safe to call any
/// number of times. Callers are responsible for supplying reserves measured
/// *before* the input lands (see the controller for the two measurement
/// rules).
///
/// A zero `input` quotes to zero. Output is monotonically non-decreasing in
/// `input` and stays strictly below `output_reserve` for any finite input.
///
/// # Errors
///
/// - [`PoolError::ZeroReserve`] if either reserve is zero.
/// - [`PoolError::Overflow`] if an intermediate product exceeds `u128`.
///
/// # Examples
///
/// ```
/// use eddy_amm::domain::{Amount, SwapFee};
/// use eddy_amm::pricing::quote;
///
/// // 100 in against 1000/1000 reserves at the standard 0.3% fee.
/// let out = quote(
///     Amount::new(100),
///     Amount::new(1_000),
///     Amount::new(1_000),
///     SwapFee::STANDARD,
/// );
/// assert_eq!(out, Ok(Amount::new(90)));
/// ```
pub fn quote(
    input: Amount,
    input_reserve: Amount,
    output_reserve: Amount,
    fee: SwapFee,
) -> crate::error::Result<Amount> {
    if input_reserve.is_zero() || output_reserve.is_zero() {
        return Err(PoolError::ZeroReserve);
    }
    if input.is_zero() {
        return Ok(Amount::ZERO);
    }

    let fee_num = Amount::new(u128::from(fee.numerator()));
    let fee_den = Amount::new(u128::from(fee.denominator()));

    let scaled_input = input
        .checked_mul(&fee_num)
        .ok_or(PoolError::Overflow("quote fee scaling"))?;
    let numerator = scaled_input
        .checked_mul(&output_reserve)
        .ok_or(PoolError::Overflow("quote numerator"))?;
    let scaled_reserve = input_reserve
        .checked_mul(&fee_den)
        .ok_or(PoolError::Overflow("quote reserve scaling"))?;
    let denominator = scaled_reserve
        .checked_add(&scaled_input)
        .ok_or(PoolError::Overflow("quote denominator"))?;

    numerator
        .checked_div(&denominator)
        .ok_or(PoolError::DivisionByZero)
}
