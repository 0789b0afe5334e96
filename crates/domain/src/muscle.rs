use std::{fmt, slice::Iter};

use crate::Property;

/// Canonical muscle groups.
///
/// The declaration order is the canonical order used for statistics and
/// suggestions.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum MuscleGroup {
    Chest,
    Back,
    Shoulders,
    Biceps,
    Triceps,
    Forearms,
    Abdominals,
    Quadriceps,
    Hamstrings,
    Glutes,
    Calves,
    Traps,
    Lats,
    MiddleBack,
    LowerBack,
    Adductors,
    Abductors,
    Neck,
}

impl Property for MuscleGroup {
    fn iter() -> Iter<'static, MuscleGroup> {
        static MUSCLE_GROUPS: [MuscleGroup; 18] = [
            MuscleGroup::Chest,
            MuscleGroup::Back,
            MuscleGroup::Shoulders,
            MuscleGroup::Biceps,
            MuscleGroup::Triceps,
            MuscleGroup::Forearms,
            MuscleGroup::Abdominals,
            MuscleGroup::Quadriceps,
            MuscleGroup::Hamstrings,
            MuscleGroup::Glutes,
            MuscleGroup::Calves,
            MuscleGroup::Traps,
            MuscleGroup::Lats,
            MuscleGroup::MiddleBack,
            MuscleGroup::LowerBack,
            MuscleGroup::Adductors,
            MuscleGroup::Abductors,
            MuscleGroup::Neck,
        ];
        MUSCLE_GROUPS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            MuscleGroup::Chest => "chest",
            MuscleGroup::Back => "back",
            MuscleGroup::Shoulders => "shoulders",
            MuscleGroup::Biceps => "biceps",
            MuscleGroup::Triceps => "triceps",
            MuscleGroup::Forearms => "forearms",
            MuscleGroup::Abdominals => "abdominals",
            MuscleGroup::Quadriceps => "quadriceps",
            MuscleGroup::Hamstrings => "hamstrings",
            MuscleGroup::Glutes => "glutes",
            MuscleGroup::Calves => "calves",
            MuscleGroup::Traps => "traps",
            MuscleGroup::Lats => "lats",
            MuscleGroup::MiddleBack => "middle back",
            MuscleGroup::LowerBack => "lower back",
            MuscleGroup::Adductors => "adductors",
            MuscleGroup::Abductors => "abductors",
            MuscleGroup::Neck => "neck",
        }
    }
}

impl MuscleGroup {
    /// Muscle groups for which engagement statistics are kept.
    ///
    /// The neck can be named in exercise data, but is not tracked.
    pub fn tracked() -> impl Iterator<Item = MuscleGroup> {
        Self::iter().copied().filter(|m| *m != MuscleGroup::Neck)
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// An alias never contains an alias listed before it, so the substring pass
// prefers the more specific name ("lower back" before "back").
static ALIASES: [(&str, MuscleGroup); 41] = [
    ("chest", MuscleGroup::Chest),
    ("pectorals", MuscleGroup::Chest),
    ("pectoralis", MuscleGroup::Chest),
    ("pecs", MuscleGroup::Chest),
    ("upper back", MuscleGroup::Back),
    ("middle back", MuscleGroup::MiddleBack),
    ("mid back", MuscleGroup::MiddleBack),
    ("rhomboids", MuscleGroup::MiddleBack),
    ("lower back", MuscleGroup::LowerBack),
    ("erector spinae", MuscleGroup::LowerBack),
    ("spinal erectors", MuscleGroup::LowerBack),
    ("back", MuscleGroup::Back),
    ("shoulders", MuscleGroup::Shoulders),
    ("deltoids", MuscleGroup::Shoulders),
    ("deltoid", MuscleGroup::Shoulders),
    ("delts", MuscleGroup::Shoulders),
    ("biceps", MuscleGroup::Biceps),
    ("bicep", MuscleGroup::Biceps),
    ("triceps", MuscleGroup::Triceps),
    ("tricep", MuscleGroup::Triceps),
    ("forearms", MuscleGroup::Forearms),
    ("forearm", MuscleGroup::Forearms),
    ("abdominals", MuscleGroup::Abdominals),
    ("obliques", MuscleGroup::Abdominals),
    ("core", MuscleGroup::Abdominals),
    ("abs", MuscleGroup::Abdominals),
    ("quadriceps", MuscleGroup::Quadriceps),
    ("quads", MuscleGroup::Quadriceps),
    ("hamstrings", MuscleGroup::Hamstrings),
    ("glutes", MuscleGroup::Glutes),
    ("gluteus", MuscleGroup::Glutes),
    ("glute", MuscleGroup::Glutes),
    ("calves", MuscleGroup::Calves),
    ("calf", MuscleGroup::Calves),
    ("trapezius", MuscleGroup::Traps),
    ("traps", MuscleGroup::Traps),
    ("latissimus dorsi", MuscleGroup::Lats),
    ("lats", MuscleGroup::Lats),
    ("adductors", MuscleGroup::Adductors),
    ("abductors", MuscleGroup::Abductors),
    ("neck", MuscleGroup::Neck),
];

/// Map a free-text muscle name to its canonical muscle group.
///
/// The name is trimmed and lowercased. An exact alias match is tried first.
/// Otherwise the first alias (in table order) which contains the name or is
/// contained in the name is used. Unknown and empty names yield `None`.
#[must_use]
pub fn normalize(raw_name: &str) -> Option<MuscleGroup> {
    let name = raw_name.trim().to_lowercase();

    if name.is_empty() {
        return None;
    }

    if let Some((_, muscle_group)) = ALIASES.iter().find(|(alias, _)| *alias == name) {
        return Some(*muscle_group);
    }

    ALIASES
        .iter()
        .find(|(alias, _)| name.contains(*alias) || alias.contains(name.as_str()))
        .map(|(_, muscle_group)| *muscle_group)
}
