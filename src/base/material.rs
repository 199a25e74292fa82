use crate::StrError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Defines the materials of the floor-heating cross-section
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, Deserialize, Serialize)]
pub enum Material {
    Copper,
    Aluminum,
    Screed,
    Concrete,
    /// Oak
    Wood,
    Polystyrene,
    /// Aluminum-laminated PUR/PIR boards
    PurAlukaschiert,
    Cork,
    Tile,
    Air,
    /// Expanded polystyrene
    Eps,
}

impl Material {
    /// Returns the thermal conductivity in W/(m·K)
    pub fn thermal_conductivity(&self) -> f64 {
        match self {
            Material::Copper => 384.0,
            Material::Aluminum => 220.0,
            Material::Screed => 1.4,
            Material::Concrete => 2.1,
            Material::Wood => 0.2,
            Material::Polystyrene => 0.032,
            Material::PurAlukaschiert => 0.023,
            Material::Cork => 0.05,
            Material::Tile => 1.0,
            Material::Air => 0.0262,
            Material::Eps => 0.04,
        }
    }

    /// Returns the name used in configuration files
    pub fn name(&self) -> &'static str {
        match self {
            Material::Copper => "copper",
            Material::Aluminum => "aluminum",
            Material::Screed => "screed",
            Material::Concrete => "concrete",
            Material::Wood => "wood",
            Material::Polystyrene => "polystyrene",
            Material::PurAlukaschiert => "pur_alukaschiert",
            Material::Cork => "cork",
            Material::Tile => "tile",
            Material::Air => "air",
            Material::Eps => "EPS",
        }
    }

    /// Returns the material with the given name
    pub fn from(name: &str) -> Result<Self, StrError> {
        match name {
            "copper" => Ok(Material::Copper),
            "aluminum" => Ok(Material::Aluminum),
            "screed" => Ok(Material::Screed),
            "concrete" => Ok(Material::Concrete),
            "wood" => Ok(Material::Wood),
            "polystyrene" => Ok(Material::Polystyrene),
            "pur_alukaschiert" => Ok(Material::PurAlukaschiert),
            "cork" => Ok(Material::Cork),
            "tile" => Ok(Material::Tile),
            "air" => Ok(Material::Air),
            "EPS" => Ok(Material::Eps),
            _ => Err("unknown material name"),
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Returns the material of a named subdomain of the floor-heating cross-section
pub fn subdomain_material(subdomain: &str) -> Result<Material, StrError> {
    match subdomain {
        "Hot Inlet" | "Cold Outlet" | "Piping" => Ok(Material::Copper),
        "Screed" => Ok(Material::Screed),
        "Underfloor" => Ok(Material::Concrete),
        "Insulation Heat" => Ok(Material::PurAlukaschiert),
        "Insulation Impact Noise" => Ok(Material::Cork),
        "Floorboarding" => Ok(Material::Tile),
        "Carrier" => Ok(Material::Eps),
        "Profile Sheets" | "Thermal Conduction Sheet" => Ok(Material::Aluminum),
        "Air Gap" => Ok(Material::Air),
        _ => Err("the subdomain has no material assigned"),
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
