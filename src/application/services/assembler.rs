//! # Quote Assembly
//!
//! Turns priced options into the final caller-facing quote: rounds every
//! monetary component up, derives the grand total from the rounded
//! components, renders the delivery display, and computes the summary.
//!
//! Rounding order is load-bearing: each component is rounded up first and
//! the grand total is the sum of those integers. Summing before rounding
//! would undercharge whenever two fractional components share a quote.

use crate::application::error::{QuoteError, QuoteResult};
use crate::domain::entities::{
    AppliedRule, FinalQuoteOption, PricedOption, PricedQuote, QuoteSummary, ResolvedLocation,
};
use crate::domain::services::delivery_format::format_delivery_display;
use crate::domain::value_objects::money::ceil_to_unit;

fn finalize_option(priced: PricedOption) -> QuoteResult<FinalQuoteOption> {
    let to_unit = |amount| {
        ceil_to_unit(amount).map_err(|e| QuoteError::Internal(format!("rounding failed: {}", e)))
    };

    let base_price_after_rule = to_unit(priced.base_after_rule)?;
    let remote_area_surcharge = to_unit(priced.remote_after_markup)?;
    let special_handling_surcharge = to_unit(priced.special_after_markup)?;

    let delivery_display = priced
        .option
        .delivery_timestamp
        .as_deref()
        .and_then(|ts| format_delivery_display(&priced.option.product_code, ts));

    Ok(FinalQuoteOption {
        product_code: priced.option.product_code,
        product_name: priced.option.product_name,
        currency: priced.option.currency,
        base_price_after_rule,
        remote_area_surcharge,
        special_handling_surcharge,
        grand_total: base_price_after_rule + remote_area_surcharge + special_handling_surcharge,
        delivery_display,
    })
}

fn summarize(options: &[FinalQuoteOption]) -> QuoteSummary {
    let totals = options.iter().map(|o| o.grand_total);
    QuoteSummary {
        currency: options
            .first()
            .map(|o| o.currency.clone())
            .unwrap_or_default(),
        min_total: totals.clone().min().unwrap_or_default(),
        max_total: totals.max().unwrap_or_default(),
        count: options.len(),
    }
}

/// Assembles the final priced quote.
///
/// # Errors
///
/// Returns [`QuoteError::NoValidOptions`] when no option survived
/// pricing, or an internal error if a rounded amount does not fit.
pub fn assemble(
    priced: Vec<PricedOption>,
    applied_rule: AppliedRule,
    origin: ResolvedLocation,
    destination: ResolvedLocation,
) -> QuoteResult<PricedQuote> {
    if priced.is_empty() {
        return Err(QuoteError::NoValidOptions);
    }

    let options = priced
        .into_iter()
        .map(finalize_option)
        .collect::<QuoteResult<Vec<_>>>()?;
    let summary = summarize(&options);

    Ok(PricedQuote {
        options,
        summary,
        applied_rule,
        origin,
        destination,
    })
}
