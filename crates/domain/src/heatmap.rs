use std::{collections::BTreeMap, slice::Iter};

use crate::{MuscleGroup, MuscleGroupStat, Property, Window};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum HeatColor {
    Cold,
    Cool,
    Warm,
    Hot,
}

impl Property for HeatColor {
    fn iter() -> Iter<'static, HeatColor> {
        static COLORS: [HeatColor; 4] = [
            HeatColor::Cold,
            HeatColor::Cool,
            HeatColor::Warm,
            HeatColor::Hot,
        ];
        COLORS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            HeatColor::Cold => "cold",
            HeatColor::Cool => "cool",
            HeatColor::Warm => "warm",
            HeatColor::Hot => "hot",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeatLevel {
    pub intensity: f32,
    pub color: HeatColor,
}

/// Intensity of the engagement of a muscle group relative to the window.
///
/// Intensities are discrete steps (0, 0.3, 0.6, 1) and deliberately not
/// interpolated between the thresholds.
#[must_use]
pub fn intensity(stat: &MuscleGroupStat, window: Window) -> f32 {
    let (hot, warm) = window.thresholds();

    if stat.engagement >= hot {
        1.0
    } else if stat.engagement >= warm {
        0.6
    } else if stat.engagement > 0.0 {
        0.3
    } else {
        0.0
    }
}

#[must_use]
pub fn color(intensity: f32) -> HeatColor {
    if intensity >= 0.8 {
        HeatColor::Hot
    } else if intensity >= 0.5 {
        HeatColor::Warm
    } else if intensity >= 0.2 {
        HeatColor::Cool
    } else {
        HeatColor::Cold
    }
}

#[must_use]
pub fn heatmap(
    stats: &BTreeMap<MuscleGroup, MuscleGroupStat>,
    window: Window,
) -> BTreeMap<MuscleGroup, HeatLevel> {
    stats
        .iter()
        .map(|(muscle_group, stat)| {
            let intensity = intensity(stat, window);
            (
                *muscle_group,
                HeatLevel {
                    intensity,
                    color: color(intensity),
                },
            )
        })
        .collect()
}
