//! # Pricing Rule Engine
//!
//! Selects the markup rule for a role and billed weight and applies it,
//! together with the role's surcharge markups, to normalized options.
//!
//! Selection walks the role's bands in ascending order of band maximum
//! and takes the first band whose maximum covers the billed weight;
//! weights beyond the heaviest band fall into that heaviest band. A role
//! with no bands at all cannot be priced.
//!
//! A rule or surcharge markup whose stored mode string is not recognized
//! poisons only the options it touches: those are logged and dropped,
//! the rest of the quote proceeds.

use crate::application::error::{QuoteError, QuoteResult};
use crate::domain::entities::{
    AppliedRule, MarkupMode, NormalizedQuoteOption, PricedOption, PricingRule, RolePricingConfig,
};
use crate::domain::errors::DomainError;
use crate::domain::value_objects::money::ArithmeticError;
use rust_decimal::Decimal;

/// Why one option could not be priced; the option is dropped.
#[derive(Debug)]
enum OptionPricingError {
    UnknownMode(String),
    Arithmetic(ArithmeticError),
}

impl From<DomainError> for OptionPricingError {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::UnknownPricingMode(mode) => Self::UnknownMode(mode),
            other => Self::UnknownMode(other.to_string()),
        }
    }
}

impl From<ArithmeticError> for OptionPricingError {
    fn from(error: ArithmeticError) -> Self {
        Self::Arithmetic(error)
    }
}

/// Selects the rule covering the billed weight.
///
/// Returns `None` only when the configuration has no bands.
#[must_use]
pub fn select_rule(config: &RolePricingConfig, billed_weight_kg: u32) -> Option<&PricingRule> {
    let mut rules: Vec<&PricingRule> = config.bands.iter().collect();
    rules.sort_by_key(|rule| rule.band.max_kg);

    rules
        .iter()
        .find(|rule| rule.band.max_kg >= billed_weight_kg)
        .or_else(|| rules.last())
        .copied()
}

/// Applies a markup to a surcharge, leaving zero surcharges untouched.
fn apply_surcharge(
    amount: Decimal,
    mode: &str,
    value: Decimal,
) -> Result<Decimal, OptionPricingError> {
    if amount <= Decimal::ZERO {
        return Ok(amount);
    }
    Ok(MarkupMode::parse(mode)?.apply(amount, value)?)
}

/// Prices one normalized option under the selected rule.
fn price_option(
    option: NormalizedQuoteOption,
    rule: &PricingRule,
    config: &RolePricingConfig,
) -> Result<PricedOption, OptionPricingError> {
    let base_after_rule = MarkupMode::parse(&rule.mode)?.apply(option.base_price, rule.value)?;

    let remote = &config.surcharges.remote_area;
    let remote_after_markup =
        apply_surcharge(option.remote_area_surcharge, &remote.mode, remote.value)?;

    let special = &config.surcharges.special_handling;
    let special_after_markup = apply_surcharge(
        option.special_handling_surcharge,
        &special.mode,
        special.value,
    )?;

    Ok(PricedOption {
        option,
        base_after_rule,
        remote_after_markup,
        special_after_markup,
    })
}

/// Prices normalized options under a role's configuration.
///
/// Unpriceable options are dropped with a warning; the echoed
/// [`AppliedRule`] describes the selected band.
///
/// # Errors
///
/// Returns [`QuoteError::NoPricingRule`] when the role has no bands.
pub fn price_options(
    options: Vec<NormalizedQuoteOption>,
    config: &RolePricingConfig,
    billed_weight_kg: u32,
) -> QuoteResult<(Vec<PricedOption>, AppliedRule)> {
    let rule = select_rule(config, billed_weight_kg).ok_or(QuoteError::NoPricingRule {
        role: config.role,
        billed_weight_kg,
    })?;

    let applied = AppliedRule {
        band: rule.band,
        mode: rule.mode.clone(),
        value: rule.value,
        currency: rule.currency.clone(),
    };

    let mut priced = Vec::with_capacity(options.len());
    for option in options {
        let product_code = option.product_code.clone();
        match price_option(option, rule, config) {
            Ok(p) => priced.push(p),
            Err(reason) => {
                tracing::warn!(
                    product_code = %product_code,
                    reason = ?reason,
                    "dropping unpriceable quote option"
                );
            }
        }
    }

    Ok((priced, applied))
}
