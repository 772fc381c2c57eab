//! Planck's law.
//!
//! Spectral radiance of a blackbody at temperature `T` in a medium of
//! refractive index `n`, expressed in terms of wavelength:
//!
//! ```text
//! L(λ, T) = c1 · n⁻² · λ⁻⁵ / π · 1 / (exp(c2 / (n · λ · T)) − 1)
//! ```
//!
//! Wavelengths are in metres, temperatures in kelvin and the result in
//! watts per steradian per square metre (CIE 15:2004).

use colour_errors::ValidationError;

/// First radiation constant `c1 = 2πhc²` (W·m²).
pub const CONSTANT_C1: f64 = 3.741_771e-16;

/// Second radiation constant `c2 = hc/k` (m·K), as adopted by ITS-90.
pub const CONSTANT_C2: f64 = 1.4388e-2;

/// Refractive index of the medium; CIE 15:2004 recommends 1.
pub const CONSTANT_N: f64 = 1.0;

/// Radiation constants used by [`planck_law_with`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiationConstants {
    /// First radiation constant
    pub c1: f64,
    /// Second radiation constant
    pub c2: f64,
    /// Medium refractive index
    pub n: f64,
}

impl Default for RadiationConstants {
    fn default() -> Self {
        Self {
            c1: CONSTANT_C1,
            c2: CONSTANT_C2,
            n: CONSTANT_N,
        }
    }
}

/// Spectral radiance for `wavelength` (m) and `temperature` (K) with the
/// CIE constants.
///
/// ```
/// use colour_colorimetry::planck_law;
///
/// let radiance = planck_law(500e-9, 5500.0);
/// assert!((radiance / 20_472_701_909_806.5 - 1.0).abs() < 1e-12);
/// ```
pub fn planck_law(wavelength: f64, temperature: f64) -> f64 {
    planck_law_with(wavelength, temperature, RadiationConstants::default())
}

/// Spectral radiance with explicit radiation constants.
pub fn planck_law_with(wavelength: f64, temperature: f64, constants: RadiationConstants) -> f64 {
    let RadiationConstants { c1, c2, n } = constants;
    let l = wavelength;
    ((c1 * n.powi(-2) * l.powi(-5)) / std::f64::consts::PI) / (c2 / (n * l * temperature)).exp_m1()
}

/// Alias of [`planck_law`].
pub fn blackbody_spectral_radiance(wavelength: f64, temperature: f64) -> f64 {
    planck_law(wavelength, temperature)
}

/// Checked [`planck_law_with`].
///
/// # Errors
///
/// Returns [`ValidationError::NonFinite`] for non-finite inputs and
/// [`ValidationError::OutOfRange`] for a non-positive wavelength,
/// temperature or refractive index.
pub fn try_planck_law(
    wavelength: f64,
    temperature: f64,
    constants: RadiationConstants,
) -> Result<f64, ValidationError> {
    positive("wavelength", wavelength)?;
    positive("temperature", temperature)?;
    positive("n", constants.n)?;
    ValidationError::check_finite("c1", constants.c1)?;
    ValidationError::check_finite("c2", constants.c2)?;
    Ok(planck_law_with(wavelength, temperature, constants))
}

fn positive(field: &str, value: f64) -> Result<f64, ValidationError> {
    let value = ValidationError::check_finite(field, value)?;
    if value <= 0.0 {
        return Err(ValidationError::out_of_range(field, value, "(0, inf)"));
    }
    Ok(value)
}
