//! Static catalog of axial fans with their mechanical envelope.
//!
//! Frame size and axial length are what the volumetric bookkeeping needs;
//! weight and datasheet links are carried for reporting.

use uom::si::{
    f64::{Length, Mass},
    length::meter,
    mass::kilogram,
};

use super::fan_id;

/// Mechanical data of a square-frame axial fan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FanSpec {
    id: &'static str,
    manufacturer: &'static str,
    frame: f64,
    depth: f64,
    weight: Option<f64>,
    datasheet: Option<&'static str>,
}

impl FanSpec {
    /// Identifier used for curve files and lookups, e.g. `orion_od4010m`.
    #[must_use]
    pub fn id(&self) -> &'static str {
        self.id
    }

    #[must_use]
    pub fn manufacturer(&self) -> &'static str {
        self.manufacturer
    }

    #[must_use]
    pub fn model(&self) -> &'static str {
        self.id
            .strip_prefix(self.manufacturer)
            .and_then(|rest| rest.strip_prefix('_'))
            .unwrap_or(self.id)
    }

    /// Width and height of the square frame.
    #[must_use]
    pub fn frame_size(&self) -> Length {
        Length::new::<meter>(self.frame)
    }

    /// Axial length of the fan.
    #[must_use]
    pub fn depth(&self) -> Length {
        Length::new::<meter>(self.depth)
    }

    #[must_use]
    pub fn weight(&self) -> Option<Mass> {
        self.weight.map(Mass::new::<kilogram>)
    }

    #[must_use]
    pub fn datasheet(&self) -> Option<&'static str> {
        self.datasheet
    }
}

/// Looks up a fan by identifier, with or without a `.csv` suffix.
#[must_use]
pub fn lookup(id: &str) -> Option<&'static FanSpec> {
    let id = fan_id(id);
    FANS.iter().find(|spec| spec.id == id)
}

/// All cataloged fans.
#[must_use]
pub fn all() -> &'static [FanSpec] {
    FANS
}

const DATASHEET_3010: &str = "https://www.mouser.de/datasheet/2/1491/OD3010-3239706.pdf";
const DATASHEET_4010: &str = "https://www.mouser.de/datasheet/2/1491/OD4010-3239432.pdf";
const DATASHEET_4015: &str = "https://www.mouser.de/datasheet/2/1491/OD4015-3239663.pdf";
const DATASHEET_4020: &str = "https://www.mouser.de/datasheet/2/1491/OD4020-3239708.pdf";
const DATASHEET_4028: &str = "https://www.mouser.de/datasheet/2/1491/OD4028-3239467.pdf";
const DATASHEET_4028XC: &str = "https://www.mouser.de/datasheet/2/1491/OD4028_XC-3239458.pdf";
const DATASHEET_5010: &str = "https://www.mouser.de/datasheet/2/1491/OD5010-3239362.pdf";
const DATASHEET_5015: &str = "https://www.mouser.de/datasheet/2/1491/OD5015-3239544.pdf";
const DATASHEET_6010: &str = "https://www.mouser.de/datasheet/2/1491/OD6010-3239469.pdf";
const DATASHEET_6015: &str = "https://www.mouser.de/datasheet/2/1491/OD6015-3239460.pdf";
const DATASHEET_6025: &str = "https://www.mouser.de/datasheet/2/1491/OD6025-3239710.pdf";
const DATASHEET_6038XC: &str = "https://www.mouser.de/datasheet/2/1491/OD6038_XC-3239303.pdf";

const fn orion(
    id: &'static str,
    frame: f64,
    depth: f64,
    weight: f64,
    datasheet: &'static str,
) -> FanSpec {
    FanSpec {
        id,
        manufacturer: "orion",
        frame,
        depth,
        weight: Some(weight),
        datasheet: Some(datasheet),
    }
}

#[rustfmt::skip]
static FANS: &[FanSpec] = &[
    orion("orion_od3010h", 30e-3, 10e-3, 0.00907, DATASHEET_3010),
    orion("orion_od3010m", 30e-3, 10e-3, 0.00907, DATASHEET_3010),
    orion("orion_od3010l", 30e-3, 10e-3, 0.00907, DATASHEET_3010),

    orion("orion_od4010h", 40e-3, 10e-3, 0.0227, DATASHEET_4010),
    orion("orion_od4010hh", 40e-3, 10e-3, 0.0227, DATASHEET_4010),
    orion("orion_od4010l", 40e-3, 10e-3, 0.0227, DATASHEET_4010),
    orion("orion_od4010m", 40e-3, 10e-3, 0.0227, DATASHEET_4010),

    orion("orion_od4015h", 40e-3, 15e-3, 0.272, DATASHEET_4015),
    orion("orion_od4015l", 40e-3, 15e-3, 0.272, DATASHEET_4015),
    orion("orion_od4015m", 40e-3, 15e-3, 0.272, DATASHEET_4015),

    orion("orion_od4020h", 40e-3, 20e-3, 0.0317, DATASHEET_4020),
    orion("orion_od4020l", 40e-3, 20e-3, 0.0317, DATASHEET_4020),
    orion("orion_od4020m", 40e-3, 20e-3, 0.0317, DATASHEET_4020),

    orion("orion_od4028h", 40e-3, 28e-3, 0.0454, DATASHEET_4028),
    orion("orion_od4028h3", 40e-3, 28e-3, 0.0454, DATASHEET_4028),
    orion("orion_od4028hh", 40e-3, 28e-3, 0.0454, DATASHEET_4028),
    orion("orion_od4028l", 40e-3, 28e-3, 0.0454, DATASHEET_4028),
    orion("orion_od4028m", 40e-3, 28e-3, 0.0454, DATASHEET_4028),
    orion("orion_od4028xc", 40e-3, 28e-3, 0.0454, DATASHEET_4028XC),

    orion("orion_od5010hh", 50e-3, 10e-3, 0.0317, DATASHEET_5010),
    orion("orion_od5010h", 50e-3, 10e-3, 0.0317, DATASHEET_5010),
    orion("orion_od5010m", 50e-3, 10e-3, 0.0317, DATASHEET_5010),
    orion("orion_od5010l", 50e-3, 10e-3, 0.0317, DATASHEET_5010),

    orion("orion_od5015hh", 50e-3, 15e-3, 0.0363, DATASHEET_5015),
    orion("orion_od5015h", 50e-3, 15e-3, 0.0363, DATASHEET_5015),
    orion("orion_od5015m", 50e-3, 15e-3, 0.0363, DATASHEET_5015),

    orion("orion_od6010h", 60e-3, 10e-3, 0.0227, DATASHEET_6010),
    orion("orion_od6010m", 60e-3, 10e-3, 0.0227, DATASHEET_6010),
    orion("orion_od6010l", 60e-3, 10e-3, 0.0227, DATASHEET_6010),

    orion("orion_od6015hh", 60e-3, 15e-3, 0.0272, DATASHEET_6015),
    orion("orion_od6015h", 60e-3, 15e-3, 0.0272, DATASHEET_6015),
    orion("orion_od6015m", 60e-3, 15e-3, 0.0272, DATASHEET_6015),
    orion("orion_od6015l", 60e-3, 15e-3, 0.0272, DATASHEET_6015),

    orion("orion_od6025hh", 60e-3, 25e-3, 0.0635, DATASHEET_6025),
    orion("orion_od6025h", 60e-3, 25e-3, 0.0635, DATASHEET_6025),
    orion("orion_od6025m", 60e-3, 25e-3, 0.0635, DATASHEET_6025),
    orion("orion_od6025l", 60e-3, 25e-3, 0.0635, DATASHEET_6025),

    orion("orion_od6038xchh", 60e-3, 38e-3, 0.127, DATASHEET_6038XC),
    orion("orion_od6038xch", 60e-3, 38e-3, 0.127, DATASHEET_6038XC),
    orion("orion_od6038xcl", 60e-3, 38e-3, 0.127, DATASHEET_6038XC),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_accepts_curve_file_names() {
        let by_id = lookup("orion_od4010l").unwrap();
        let by_file = lookup("orion_od4010l.csv").unwrap();

        assert_eq!(by_id, by_file);
        assert_eq!(by_id.manufacturer(), "orion");
        assert_eq!(by_id.model(), "od4010l");
        assert_eq!(by_id.frame_size().get::<meter>(), 40e-3);
        assert_eq!(by_id.depth().get::<meter>(), 10e-3);
    }

    #[test]
    fn unknown_fan() {
        assert!(lookup("sunon_mf40100v2").is_none());
    }

    #[test]
    fn identifiers_are_unique() {
        for (index, spec) in all().iter().enumerate() {
            assert!(
                all()[index + 1..].iter().all(|other| other.id != spec.id),
                "duplicate fan id {}",
                spec.id
            );
        }
    }
}
