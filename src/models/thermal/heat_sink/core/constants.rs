use uom::si::{
    dynamic_viscosity::pascal_second,
    f64::{DynamicViscosity, MassDensity, SpecificHeatCapacity, ThermalConductivity},
    mass_density::kilogram_per_cubic_meter,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
};

use crate::support::constraint::{ConstraintError, NonNegative, StrictlyPositive};

use super::ConstantsError;

/// Raw correlation coefficients and fluid and material properties.
///
/// [`FluidConstants::new`] checks these once; [`FluidConstantsParams::default`]
/// is the canonical set, air near room temperature flowing over an aluminium
/// alloy sink.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FluidConstantsParams {
    /// Nusselt blending coefficients.
    pub c1: f64,
    pub c2: f64,
    pub c3: f64,
    pub c4: f64,

    /// Aspect ratio exponent of the fully developed Nusselt asymptote.
    pub gamma: f64,

    pub air_density: MassDensity,
    pub air_specific_heat: SpecificHeatCapacity,
    pub air_conductivity: ThermalConductivity,
    pub air_viscosity: DynamicViscosity,

    /// Conductivity of the fin and baseplate metal.
    pub material_conductivity: ThermalConductivity,
    pub material_density: MassDensity,

    /// Loss coefficient of the duct inlet.
    pub duct_inlet_loss: f64,
}

impl Default for FluidConstantsParams {
    fn default() -> Self {
        Self {
            c1: 3.24,
            c2: 1.5,
            c3: 0.409,
            c4: 2.0,
            gamma: -0.3,
            air_density: MassDensity::new::<kilogram_per_cubic_meter>(1.293),
            air_specific_heat: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(1005.0),
            air_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(0.0261),
            air_viscosity: DynamicViscosity::new::<pascal_second>(18.2e-6),
            material_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(210.0),
            material_density: MassDensity::new::<kilogram_per_cubic_meter>(2699.0),
            duct_inlet_loss: 0.2,
        }
    }
}

/// Validated correlation coefficients and properties.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "FluidConstantsParams", into = "FluidConstantsParams")
)]
pub struct FluidConstants {
    params: FluidConstantsParams,
}

impl Default for FluidConstants {
    fn default() -> Self {
        Self {
            params: FluidConstantsParams::default(),
        }
    }
}

impl FluidConstants {
    /// Validates a set of constants.
    ///
    /// # Errors
    ///
    /// Returns [`ConstantsError`] if a coefficient or property is not
    /// strictly positive, the aspect ratio exponent is not finite, or the
    /// duct inlet loss is negative.
    pub fn new(params: FluidConstantsParams) -> Result<Self, ConstantsError> {
        positive("c1", params.c1)?;
        positive("c2", params.c2)?;
        positive("c3", params.c3)?;
        positive("c4", params.c4)?;
        if !params.gamma.is_finite() {
            return Err(ConstantsError::Property {
                field: "gamma",
                source: ConstraintError::NotANumber,
            });
        }
        positive("air density", params.air_density)?;
        positive("air specific heat", params.air_specific_heat)?;
        positive("air conductivity", params.air_conductivity)?;
        positive("air viscosity", params.air_viscosity)?;
        positive("material conductivity", params.material_conductivity)?;
        positive("material density", params.material_density)?;
        NonNegative::new(params.duct_inlet_loss).map_err(|source| ConstantsError::Property {
            field: "duct inlet loss",
            source,
        })?;

        Ok(Self { params })
    }

    /// Swaps the sink metal, e.g. copper at 401 W/(m·K) and 8960 kg/m³.
    ///
    /// # Errors
    ///
    /// Returns [`ConstantsError`] if either property is not strictly positive.
    pub fn with_material(
        self,
        conductivity: ThermalConductivity,
        density: MassDensity,
    ) -> Result<Self, ConstantsError> {
        Self::new(FluidConstantsParams {
            material_conductivity: conductivity,
            material_density: density,
            ..self.params
        })
    }

    /// The raw record these constants were built from.
    #[must_use]
    pub fn params(&self) -> &FluidConstantsParams {
        &self.params
    }

    #[must_use]
    pub fn air_viscosity(&self) -> DynamicViscosity {
        self.params.air_viscosity
    }

    #[must_use]
    pub fn material_conductivity(&self) -> ThermalConductivity {
        self.params.material_conductivity
    }

    #[must_use]
    pub fn material_density(&self) -> MassDensity {
        self.params.material_density
    }

    pub(super) fn props(&self) -> Props {
        let p = &self.params;
        Props {
            c1: p.c1,
            c2: p.c2,
            c3: p.c3,
            c4: p.c4,
            gamma: p.gamma,
            rho: p.air_density.get::<kilogram_per_cubic_meter>(),
            cp: p.air_specific_heat.get::<joule_per_kilogram_kelvin>(),
            k_air: p.air_conductivity.get::<watt_per_meter_kelvin>(),
            mu: p.air_viscosity.get::<pascal_second>(),
            k_material: p.material_conductivity.get::<watt_per_meter_kelvin>(),
            rho_material: p.material_density.get::<kilogram_per_cubic_meter>(),
            k_venturi: p.duct_inlet_loss,
        }
    }
}

/// Constants as plain SI numbers for the correlations.
#[derive(Debug, Clone, Copy)]
pub(super) struct Props {
    pub c1: f64,
    pub c2: f64,
    pub c3: f64,
    pub c4: f64,
    pub gamma: f64,
    pub rho: f64,
    pub cp: f64,
    pub k_air: f64,
    pub mu: f64,
    pub k_material: f64,
    pub rho_material: f64,
    pub k_venturi: f64,
}

impl TryFrom<FluidConstantsParams> for FluidConstants {
    type Error = ConstantsError;

    fn try_from(params: FluidConstantsParams) -> Result<Self, Self::Error> {
        Self::new(params)
    }
}

impl From<FluidConstants> for FluidConstantsParams {
    fn from(constants: FluidConstants) -> Self {
        constants.params
    }
}

fn positive<Q>(field: &'static str, value: Q) -> Result<(), ConstantsError>
where
    Q: PartialOrd + num_traits::Zero,
{
    StrictlyPositive::new(value)
        .map(|_| ())
        .map_err(|source| ConstantsError::Property { field, source })
}
