//! Old names kept as deprecated forwarders.
//!
//! Code compiled against these names keeps building and gets a compiler
//! warning. Lookups by name are redirected by the namespace's change table
//! instead; both paths end at the same functions.

use crate::{
    MichaelisMenten, reaction_rate_michaelis_menten, substrate_concentration_michaelis_menten,
};

/// Misspelled name of [`reaction_rate_michaelis_menten`].
#[deprecated(since = "0.4.0", note = "Use reaction_rate_michaelis_menten instead")]
pub fn reaction_rate_michealis_menten(s: f64, v_max: f64, k_m: f64, model: MichaelisMenten) -> f64 {
    reaction_rate_michaelis_menten(s, v_max, k_m, model)
}

/// Misspelled name of [`substrate_concentration_michaelis_menten`].
#[deprecated(
    since = "0.4.0",
    note = "Use substrate_concentration_michaelis_menten instead"
)]
pub fn substrate_concentration_michealis_menten(
    v: f64,
    v_max: f64,
    k_m: f64,
    model: MichaelisMenten,
) -> f64 {
    substrate_concentration_michaelis_menten(v, v_max, k_m, model)
}
