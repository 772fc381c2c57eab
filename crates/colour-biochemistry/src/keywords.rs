//! Keyword-argument entry points.
//!
//! Callers that assemble arguments by name (configuration files, the
//! command line) pass an ordered keyword map. Deprecated argument names are
//! rewritten through [`handle_arguments_deprecation`] before the model runs.

use colour_deprecation::{ArgumentChange, WarningSink, handle_arguments_deprecation};
use colour_errors::{ConfigError, Result, ValidationError};
use indexmap::IndexMap;

use crate::{
    MichaelisMenten, MichaelisMentenMethod, api_changes, try_reaction_rate_michaelis_menten,
    try_substrate_concentration_michaelis_menten,
};

/// Keyword arguments, in the order they were given.
pub type Keywords = IndexMap<String, f64>;

/// Argument changes declared in [`api_changes`], applied by the keyword
/// entry points.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidDescriptor`] if an argument descriptor is
/// malformed.
pub fn argument_changes() -> std::result::Result<Vec<ArgumentChange>, ConfigError> {
    api_changes().argument_changes()
}

/// Reaction rate from keyword arguments `s`, `v_max`, `k_m` and, for
/// Abebe 2017, `b_m`.
///
/// # Errors
///
/// Returns [`ValidationError::Required`] for a missing argument,
/// [`ValidationError::InvalidEnumValue`] for an unexpected one, and any
/// error raised by [`try_reaction_rate_michaelis_menten`], all wrapped in
/// [`ColourError::Validation`](colour_errors::ColourError::Validation).
/// A malformed argument declaration surfaces as a configuration error.
pub fn reaction_rate_from_keywords(
    keywords: Keywords,
    method: MichaelisMentenMethod,
    sink: &dyn WarningSink,
) -> Result<f64> {
    let args = Arguments::parse(keywords, "s", method, sink)?;
    Ok(try_reaction_rate_michaelis_menten(args.input, args.v_max, args.k_m, args.model)?)
}

/// Substrate concentration from keyword arguments `v`, `v_max`, `k_m` and,
/// for Abebe 2017, `b_m`.
///
/// # Errors
///
/// See [`reaction_rate_from_keywords`].
pub fn substrate_concentration_from_keywords(
    keywords: Keywords,
    method: MichaelisMentenMethod,
    sink: &dyn WarningSink,
) -> Result<f64> {
    let args = Arguments::parse(keywords, "v", method, sink)?;
    Ok(try_substrate_concentration_michaelis_menten(args.input, args.v_max, args.k_m, args.model)?)
}

struct Arguments {
    input: f64,
    v_max: f64,
    k_m: f64,
    model: MichaelisMenten,
}

impl Arguments {
    fn parse(
        keywords: Keywords,
        input: &'static str,
        method: MichaelisMentenMethod,
        sink: &dyn WarningSink,
    ) -> Result<Self> {
        let passed = keywords.len();
        let mut keywords = handle_arguments_deprecation(&argument_changes()?, keywords, sink);
        tracing::trace!(%method, input, passed, "keyword arguments rewritten");

        let expected: &[&str] = match method {
            MichaelisMentenMethod::Michaelis1913 => &[input, "v_max", "k_m"],
            MichaelisMentenMethod::Abebe2017 => &[input, "v_max", "k_m", "b_m"],
        };
        if let Some(unexpected) = keywords.keys().find(|key| !expected.contains(&key.as_str())) {
            return Err(ValidationError::invalid_enum_value(
                "argument",
                unexpected.as_str(),
                expected,
            )
            .into());
        }

        let mut take = |name: &str| {
            keywords
                .shift_remove(name)
                .ok_or_else(|| ValidationError::Required(name.to_owned()))
        };
        let input = take(input)?;
        let v_max = take("v_max")?;
        let k_m = take("k_m")?;
        let b_m = match method {
            MichaelisMentenMethod::Michaelis1913 => None,
            MichaelisMentenMethod::Abebe2017 => Some(take("b_m")?),
        };

        Ok(Self {
            input,
            v_max,
            k_m,
            model: MichaelisMenten::from_method(method, b_m)?,
        })
    }
}
