//! Vehicle descriptor and classification category.

use serde::{Deserialize, Serialize};

/// Classification of a vehicle for toll purposes.
///
/// Categories are matched by their canonical name, case-sensitively.
/// Unrecognized names are carried through as [`VehicleCategory::Other`]
/// rather than rejected, so they simply never match an exemption.
///
/// # Examples
///
/// ```
/// use u_tolling::models::VehicleCategory;
///
/// assert_eq!(VehicleCategory::from_name("Motorcycle"), VehicleCategory::Motorcycle);
/// assert_eq!(VehicleCategory::Motorcycle.name(), "Motorcycle");
///
/// // Case-sensitive: no canonical match
/// let other = VehicleCategory::from_name("motorcycle");
/// assert_eq!(other, VehicleCategory::Other("motorcycle".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleCategory {
    /// Ordinary passenger car (taxable).
    Car,
    /// Motorcycle (exempt under the default rule).
    Motorcycle,
    /// Tractor (exempt under the default rule).
    Tractor,
    /// Emergency service vehicle (exempt under the default rule).
    Emergency,
    /// Diplomatic vehicle (exempt under the default rule).
    Diplomat,
    /// Foreign-registered vehicle (exempt under the default rule).
    Foreign,
    /// Military vehicle (exempt under the default rule).
    Military,
    /// Any other classification, kept verbatim.
    Other(String),
}

impl VehicleCategory {
    /// Parses a category from its canonical name (case-sensitive).
    ///
    /// Names that match no canonical category become [`VehicleCategory::Other`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "Car" => Self::Car,
            "Motorcycle" => Self::Motorcycle,
            "Tractor" => Self::Tractor,
            "Emergency" => Self::Emergency,
            "Diplomat" => Self::Diplomat,
            "Foreign" => Self::Foreign,
            "Military" => Self::Military,
            other => Self::Other(other.to_string()),
        }
    }

    /// Canonical name of this category.
    pub fn name(&self) -> &str {
        match self {
            Self::Car => "Car",
            Self::Motorcycle => "Motorcycle",
            Self::Tractor => "Tractor",
            Self::Emergency => "Emergency",
            Self::Diplomat => "Diplomat",
            Self::Foreign => "Foreign",
            Self::Military => "Military",
            Self::Other(name) => name,
        }
    }
}

/// An immutable vehicle descriptor.
///
/// Holds only the classification category; a vehicle does not change
/// category for the duration of a calculation.
///
/// # Examples
///
/// ```
/// use u_tolling::models::{Vehicle, VehicleCategory};
///
/// let v = Vehicle::new(VehicleCategory::Car);
/// assert_eq!(v.category(), &VehicleCategory::Car);
/// assert_eq!(v.category().name(), "Car");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    category: VehicleCategory,
}

impl Vehicle {
    /// Creates a vehicle with the given category.
    pub fn new(category: VehicleCategory) -> Self {
        Self { category }
    }

    /// Classification category of this vehicle.
    pub fn category(&self) -> &VehicleCategory {
        &self.category
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_canonical_name() {
        assert_eq!(VehicleCategory::from_name("Car"), VehicleCategory::Car);
        assert_eq!(
            VehicleCategory::from_name("Emergency"),
            VehicleCategory::Emergency
        );
        assert_eq!(
            VehicleCategory::from_name("Military"),
            VehicleCategory::Military
        );
    }

    #[test]
    fn test_category_from_unknown_name() {
        let cat = VehicleCategory::from_name("Hovercraft");
        assert_eq!(cat, VehicleCategory::Other("Hovercraft".to_string()));
        assert_eq!(cat.name(), "Hovercraft");
    }

    #[test]
    fn test_category_case_sensitive() {
        assert_ne!(
            VehicleCategory::from_name("MOTORCYCLE"),
            VehicleCategory::Motorcycle
        );
        assert_ne!(VehicleCategory::from_name(""), VehicleCategory::Car);
    }

    #[test]
    fn test_name_round_trip() {
        for name in [
            "Car",
            "Motorcycle",
            "Tractor",
            "Emergency",
            "Diplomat",
            "Foreign",
            "Military",
        ] {
            assert_eq!(VehicleCategory::from_name(name).name(), name);
        }
    }

    #[test]
    fn test_vehicle_new() {
        let v = Vehicle::new(VehicleCategory::Tractor);
        assert_eq!(v.category(), &VehicleCategory::Tractor);
    }
}
