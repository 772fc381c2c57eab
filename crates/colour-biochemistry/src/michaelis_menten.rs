//! Michaelis-Menten kinetics.
//!
//! Reaction rate and its inverse, substrate concentration, for two models:
//!
//! - **Michaelis 1913**: `v = V_max · S / (K_m + S)`
//! - **Abebe 2017**: `v = V_max · S / (b_m · V_max + S + K_m)`, the modified
//!   form used to describe photoreceptor responses to light
//!
//! # Example
//!
//! ```
//! use colour_biochemistry::{MichaelisMenten, reaction_rate_michaelis_menten,
//!     substrate_concentration_michaelis_menten};
//!
//! let v = reaction_rate_michaelis_menten(0.5, 2.5, 0.8, MichaelisMenten::Michaelis1913);
//! assert!((v - 0.961_538_461_538_461_5).abs() < 1e-12);
//!
//! let s = substrate_concentration_michaelis_menten(v, 2.5, 0.8, MichaelisMenten::Michaelis1913);
//! assert!((s - 0.5).abs() < 1e-12);
//! ```

use std::fmt;
use std::str::FromStr;

use colour_errors::ValidationError;
use serde::{Deserialize, Serialize};

/// Name of a Michaelis-Menten model, as accepted by the dispatching entry
/// points.
///
/// Labels are matched case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MichaelisMentenMethod {
    /// Michaelis and Menten (1913)
    #[default]
    #[serde(rename = "Michaelis 1913")]
    Michaelis1913,
    /// Abebe et al. (2017)
    #[serde(rename = "Abebe 2017")]
    Abebe2017,
}

impl MichaelisMentenMethod {
    /// Every supported method.
    pub const ALL: [MichaelisMentenMethod; 2] = [
        MichaelisMentenMethod::Michaelis1913,
        MichaelisMentenMethod::Abebe2017,
    ];

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            MichaelisMentenMethod::Michaelis1913 => "Michaelis 1913",
            MichaelisMentenMethod::Abebe2017 => "Abebe 2017",
        }
    }

    fn labels() -> [&'static str; 2] {
        Self::ALL.map(Self::label)
    }
}

impl fmt::Display for MichaelisMentenMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MichaelisMentenMethod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|method| method.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ValidationError::invalid_enum_value("method", s, &Self::labels()))
    }
}

/// A Michaelis-Menten model together with its extra parameters.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "method")]
pub enum MichaelisMenten {
    /// Michaelis and Menten (1913).
    #[default]
    #[serde(rename = "Michaelis 1913")]
    Michaelis1913,
    /// Abebe et al. (2017).
    #[serde(rename = "Abebe 2017")]
    Abebe2017 {
        /// Bleaching constant
        b_m: f64,
    },
}

impl MichaelisMenten {
    /// Build a model from its method name.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Required`] when `method` needs `b_m` and
    /// none is given.
    pub fn from_method(
        method: MichaelisMentenMethod,
        b_m: Option<f64>,
    ) -> Result<Self, ValidationError> {
        match method {
            MichaelisMentenMethod::Michaelis1913 => Ok(MichaelisMenten::Michaelis1913),
            MichaelisMentenMethod::Abebe2017 => b_m
                .map(|b_m| MichaelisMenten::Abebe2017 { b_m })
                .ok_or_else(|| ValidationError::Required("b_m".to_owned())),
        }
    }

    /// Method name of this model.
    pub fn method(&self) -> MichaelisMentenMethod {
        match self {
            MichaelisMenten::Michaelis1913 => MichaelisMentenMethod::Michaelis1913,
            MichaelisMenten::Abebe2017 { .. } => MichaelisMentenMethod::Abebe2017,
        }
    }

    /// Reaction rate `v` for substrate concentration `s`.
    pub fn reaction_rate(&self, s: f64, v_max: f64, k_m: f64) -> f64 {
        match *self {
            MichaelisMenten::Michaelis1913 => {
                reaction_rate_michaelis_menten_michaelis1913(s, v_max, k_m)
            }
            MichaelisMenten::Abebe2017 { b_m } => {
                reaction_rate_michaelis_menten_abebe2017(s, v_max, k_m, b_m)
            }
        }
    }

    /// Substrate concentration `S` producing reaction rate `v`.
    pub fn substrate_concentration(&self, v: f64, v_max: f64, k_m: f64) -> f64 {
        match *self {
            MichaelisMenten::Michaelis1913 => {
                substrate_concentration_michaelis_menten_michaelis1913(v, v_max, k_m)
            }
            MichaelisMenten::Abebe2017 { b_m } => {
                substrate_concentration_michaelis_menten_abebe2017(v, v_max, k_m, b_m)
            }
        }
    }

    fn check(&self) -> Result<(), ValidationError> {
        if let MichaelisMenten::Abebe2017 { b_m } = *self {
            non_negative("b_m", b_m)?;
        }
        Ok(())
    }
}

/// Reaction rate `v` of the Michaelis 1913 model.
pub fn reaction_rate_michaelis_menten_michaelis1913(s: f64, v_max: f64, k_m: f64) -> f64 {
    (v_max * s) / (k_m + s)
}

/// Substrate concentration `S` of the Michaelis 1913 model.
pub fn substrate_concentration_michaelis_menten_michaelis1913(
    v: f64,
    v_max: f64,
    k_m: f64,
) -> f64 {
    (v * k_m) / (v_max - v)
}

/// Reaction rate `v` of the Abebe 2017 model.
pub fn reaction_rate_michaelis_menten_abebe2017(s: f64, v_max: f64, k_m: f64, b_m: f64) -> f64 {
    (v_max * s) / (b_m * v_max + s + k_m)
}

/// Substrate concentration `S` of the Abebe 2017 model.
pub fn substrate_concentration_michaelis_menten_abebe2017(
    v: f64,
    v_max: f64,
    k_m: f64,
    b_m: f64,
) -> f64 {
    (v * (b_m * v_max + k_m)) / (v_max - v)
}

/// Reaction rate `v` for substrate concentration `s` under `model`.
///
/// Inputs are not validated; see [`try_reaction_rate_michaelis_menten`].
pub fn reaction_rate_michaelis_menten(s: f64, v_max: f64, k_m: f64, model: MichaelisMenten) -> f64 {
    model.reaction_rate(s, v_max, k_m)
}

/// Substrate concentration `S` producing reaction rate `v` under `model`.
///
/// Inputs are not validated; `v == v_max` divides by zero.
pub fn substrate_concentration_michaelis_menten(
    v: f64,
    v_max: f64,
    k_m: f64,
    model: MichaelisMenten,
) -> f64 {
    model.substrate_concentration(v, v_max, k_m)
}

/// Checked [`reaction_rate_michaelis_menten`].
///
/// # Errors
///
/// Returns [`ValidationError::NonFinite`] or [`ValidationError::OutOfRange`]
/// for non-finite or negative inputs, [`ValidationError::OutOfRange`] when
/// the denominator vanishes (`s`, `k_m` and, for Abebe 2017, `b_m * v_max`
/// all zero) and [`ValidationError::NonFinite`] when the rate overflows.
pub fn try_reaction_rate_michaelis_menten(
    s: f64,
    v_max: f64,
    k_m: f64,
    model: MichaelisMenten,
) -> Result<f64, ValidationError> {
    non_negative("s", s)?;
    non_negative("v_max", v_max)?;
    non_negative("k_m", k_m)?;
    model.check()?;
    let denominator = match model {
        MichaelisMenten::Michaelis1913 => k_m + s,
        MichaelisMenten::Abebe2017 { b_m } => b_m * v_max + s + k_m,
    };
    if denominator <= 0.0 {
        return Err(ValidationError::out_of_range(
            "k_m",
            k_m,
            "(0, inf) when the substrate concentration is zero",
        ));
    }
    ValidationError::check_finite("v", model.reaction_rate(s, v_max, k_m))
}

/// Checked [`substrate_concentration_michaelis_menten`].
///
/// # Errors
///
/// Returns [`ValidationError::NonFinite`] or [`ValidationError::OutOfRange`]
/// for non-finite or negative inputs, [`ValidationError::OutOfRange`]
/// when `v` is not below `v_max`, and [`ValidationError::NonFinite`] when
/// the concentration overflows.
pub fn try_substrate_concentration_michaelis_menten(
    v: f64,
    v_max: f64,
    k_m: f64,
    model: MichaelisMenten,
) -> Result<f64, ValidationError> {
    non_negative("v", v)?;
    non_negative("v_max", v_max)?;
    non_negative("k_m", k_m)?;
    model.check()?;
    if v >= v_max {
        return Err(ValidationError::out_of_range("v", v, format!("[0, {v_max})")));
    }
    ValidationError::check_finite("s", model.substrate_concentration(v, v_max, k_m))
}

fn non_negative(field: &str, value: f64) -> Result<f64, ValidationError> {
    let value = ValidationError::check_finite(field, value)?;
    if value < 0.0 {
        return Err(ValidationError::out_of_range(field, value, "[0, inf)"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use colour_test_helpers::prelude::*;

    #[test]
    fn test_michaelis1913_reaction_rate() {
        assert_approx_eq!(
            reaction_rate_michaelis_menten_michaelis1913(0.5, 2.5, 0.8),
            0.961_538_461_538_461_5,
            1e-12
        );
        assert_approx_eq!(
            reaction_rate_michaelis_menten_michaelis1913(1.0, 2.5, 0.8),
            1.388_888_888_888_889,
            1e-12
        );
    }

    #[test]
    fn test_abebe2017_reaction_rate() {
        assert_approx_eq!(
            reaction_rate_michaelis_menten_abebe2017(0.5, 1.448, 0.635, 0.813),
            0.313_118_452_191_483_2,
            1e-9
        );
    }

    #[test]
    fn test_michaelis1913_substrate_concentration() {
        assert_approx_eq!(
            substrate_concentration_michaelis_menten_michaelis1913(
                0.961_538_461_538_461_5,
                2.5,
                0.8
            ),
            0.5,
            1e-12
        );
    }

    #[test]
    fn test_abebe2017_substrate_concentration() {
        assert_approx_eq!(
            substrate_concentration_michaelis_menten_abebe2017(
                0.313_118_452_191_483_2,
                1.448,
                0.635,
                0.813
            ),
            0.5,
            1e-9
        );
    }

    #[test]
    fn test_method_labels_case_insensitive() {
        assert_eq!(
            "abebe 2017".parse::<MichaelisMentenMethod>().ok(),
            Some(MichaelisMentenMethod::Abebe2017)
        );
        assert_eq!(
            "MICHAELIS 1913".parse::<MichaelisMentenMethod>().ok(),
            Some(MichaelisMentenMethod::Michaelis1913)
        );
        match "Henri 1902".parse::<MichaelisMentenMethod>() {
            Err(ValidationError::InvalidEnumValue { expected, .. }) => {
                assert_eq!(expected, "Michaelis 1913, Abebe 2017");
            }
            other => panic!("expected invalid method, got {other:?}"),
        }
    }

    #[test]
    fn test_from_method_requires_b_m() {
        assert_eq!(
            MichaelisMenten::from_method(MichaelisMentenMethod::Abebe2017, None),
            Err(ValidationError::Required("b_m".into()))
        );
        assert_eq!(
            MichaelisMenten::from_method(MichaelisMentenMethod::Abebe2017, Some(0.8))
                .map(|m| m.method()),
            Ok(MichaelisMentenMethod::Abebe2017)
        );
        assert_eq!(
            MichaelisMenten::from_method(MichaelisMentenMethod::Michaelis1913, Some(0.8)),
            Ok(MichaelisMenten::Michaelis1913)
        );
    }

    #[test]
    fn test_default_method() {
        assert_eq!(MichaelisMenten::default().method(), MichaelisMentenMethod::default());
        assert_eq!(MichaelisMentenMethod::default().to_string(), "Michaelis 1913");
    }

    #[test]
    fn test_try_rejects_invalid_inputs() {
        let model = MichaelisMenten::Michaelis1913;
        assert_eq!(
            try_reaction_rate_michaelis_menten(f64::NAN, 2.5, 0.8, model),
            Err(ValidationError::non_finite("s"))
        );
        assert!(matches!(
            try_reaction_rate_michaelis_menten(0.5, -2.5, 0.8, model),
            Err(ValidationError::OutOfRange { ref field, .. }) if field == "v_max"
        ));
        assert!(matches!(
            try_substrate_concentration_michaelis_menten(2.5, 2.5, 0.8, model),
            Err(ValidationError::OutOfRange { ref field, .. }) if field == "v"
        ));
        assert!(matches!(
            try_reaction_rate_michaelis_menten(
                0.5,
                2.5,
                0.8,
                MichaelisMenten::Abebe2017 { b_m: -1.0 }
            ),
            Err(ValidationError::OutOfRange { ref field, .. }) if field == "b_m"
        ));
    }

    #[test]
    fn test_try_rejects_vanishing_denominator() {
        let michaelis = MichaelisMenten::Michaelis1913;
        let abebe = MichaelisMenten::Abebe2017 { b_m: 0.0 };
        let abebe_without_v_max = MichaelisMenten::Abebe2017 { b_m: 0.5 };
        assert!(matches!(
            try_reaction_rate_michaelis_menten(0.0, 1.0, 0.0, michaelis),
            Err(ValidationError::OutOfRange { ref field, .. }) if field == "k_m"
        ));
        assert!(matches!(
            try_reaction_rate_michaelis_menten(0.0, 1.0, 0.0, abebe),
            Err(ValidationError::OutOfRange { ref field, .. }) if field == "k_m"
        ));
        assert!(matches!(
            try_reaction_rate_michaelis_menten(0.0, 0.0, 0.0, abebe_without_v_max),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_try_zero_substrate_is_zero_rate() -> Result<(), ValidationError> {
        let abebe = MichaelisMenten::Abebe2017 { b_m: 0.5 };
        assert_approx_eq!(try_reaction_rate_michaelis_menten(0.0, 1.0, 0.0, abebe)?, 0.0, 0.0);
        let michaelis = MichaelisMenten::Michaelis1913;
        assert_approx_eq!(try_reaction_rate_michaelis_menten(0.0, 1.0, 0.8, michaelis)?, 0.0, 0.0);
        Ok(())
    }

    #[test]
    fn test_try_rejects_overflowing_result() {
        let model = MichaelisMenten::Michaelis1913;
        assert_eq!(
            try_reaction_rate_michaelis_menten(f64::MAX, f64::MAX, 0.0, model),
            Err(ValidationError::non_finite("v"))
        );
    }

    #[test]
    fn test_try_matches_unchecked() -> Result<(), ValidationError> {
        let model = MichaelisMenten::Abebe2017 { b_m: 0.813 };
        let checked = try_reaction_rate_michaelis_menten(0.5, 1.448, 0.635, model)?;
        assert_approx_eq!(checked, reaction_rate_michaelis_menten(0.5, 1.448, 0.635, model), 0.0);
        Ok(())
    }

    #[test]
    fn test_serde_tagged_by_method() -> Result<(), serde_json::Error> {
        let json = serde_json::to_string(&MichaelisMenten::Abebe2017 { b_m: 0.5 })?;
        assert_eq!(json, r#"{"method":"Abebe 2017","b_m":0.5}"#);
        let back: MichaelisMenten = serde_json::from_str(r#"{"method":"Michaelis 1913"}"#)?;
        assert_eq!(back, MichaelisMenten::Michaelis1913);
        Ok(())
    }
}
