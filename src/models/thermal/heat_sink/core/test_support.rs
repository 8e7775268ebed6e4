use uom::si::{
    angle::radian,
    f64::{Angle, Length},
    length::meter,
};

use super::{Geometry, GeometryParams};

/// Published reference sink: 100 mm long, 40 mm wide, five 1 mm fins of
/// 30 mm height on a 3 mm baseplate.
pub(crate) fn reference_params() -> GeometryParams {
    GeometryParams {
        channel_height: Length::new::<meter>(30e-3),
        width: Length::new::<meter>(40e-3),
        length: Length::new::<meter>(100e-3),
        baseplate: Length::new::<meter>(3e-3),
        fin_count: 5,
        fin_thickness: Length::new::<meter>(1e-3),
        duct_angle: Angle::new::<radian>(40_f64.to_radians()),
        min_duct_length: Length::new::<meter>(5e-3),
    }
}

pub(crate) fn reference_geometry() -> Geometry {
    Geometry::new(reference_params()).expect("reference geometry is valid")
}
