use serde::{Deserialize, Serialize};

/// Holds the data of a convective boundary (Newton's law of cooling)
///
/// The heat flux leaving the domain is `q = h (T - T∞)`. The coefficient `h` depends on many
/// factors and is usually determined empirically (or from EN ISO 6946).
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct NccBoundary {
    /// Temperature of the environment T∞ (℃)
    pub external_temperature: f64,

    /// Heat transfer coefficient h (W/(m²·K))
    pub heat_transfer_coefficient: f64,
}

impl NccBoundary {
    /// Returns the heat flux leaving the domain at the boundary temperature `t`
    pub fn heat_flux(&self, t: f64) -> f64 {
        self.heat_transfer_coefficient * (t - self.external_temperature)
    }
}

/// Holds the data of a prescribed heat flux boundary
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct NeumannBoundary {
    /// Prescribed heat flux (W/m²)
    pub delta_q: f64,
}

/// Returns the convective boundaries of the floor-heating cross-section
pub fn ncc_boundaries() -> Vec<(&'static str, NccBoundary)> {
    vec![
        (
            "Coverfloor",
            NccBoundary {
                external_temperature: 22.0,
                heat_transfer_coefficient: 10.8,
            },
        ),
        (
            "Hot Inlet",
            NccBoundary {
                external_temperature: 55.0,
                heat_transfer_coefficient: 3000.0,
            },
        ),
        (
            "Cold Outlet",
            NccBoundary {
                external_temperature: 50.0,
                heat_transfer_coefficient: 3000.0,
            },
        ),
    ]
}

/// Returns the prescribed heat flux boundaries of the floor-heating cross-section
pub fn neumann_boundaries() -> Vec<(&'static str, NeumannBoundary)> {
    vec![("Underfloor", NeumannBoundary { delta_q: 0.0 })]
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
