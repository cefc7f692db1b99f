use crate::note::PitchClass;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The relative natural minor of a major key is rooted on its 6th degree,
/// 9 semitones above the major root. Fixed by the step-pattern structure.
pub const RELATIVE_MINOR_INTERVAL: i32 = 9;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScaleKind {
    Major,
    NaturalMinor,
}

impl ScaleKind {
    pub fn all() -> &'static [ScaleKind; 2] {
        &[ScaleKind::Major, ScaleKind::NaturalMinor]
    }

    pub fn name(self) -> &'static str {
        match self {
            ScaleKind::Major => "Major",
            ScaleKind::NaturalMinor => "Natural Minor",
        }
    }

    /// Semitone deltas between consecutive degrees, not offsets from the
    /// root. Each pattern sums to 12, so degree 8 lands back on the root.
    pub fn steps(self) -> &'static [i32; 7] {
        match self {
            ScaleKind::Major => &[2, 2, 1, 2, 2, 2, 1],
            ScaleKind::NaturalMinor => &[2, 1, 2, 2, 1, 2, 2],
        }
    }
}

impl fmt::Display for ScaleKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An ordered run of pitch-classes walked out from a root by successive
/// step deltas. A 7-step pattern yields 8 notes, octave included.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scale {
    root: PitchClass,
    notes: Vec<PitchClass>,
}

impl Scale {
    pub fn build(root: PitchClass, steps: &[i32]) -> Scale {
        let mut notes = Vec::with_capacity(steps.len() + 1);
        let mut current = root;
        notes.push(current);
        for &step in steps {
            current = current.transpose(step);
            notes.push(current);
        }
        Scale { root, notes }
    }

    pub fn major(root: PitchClass) -> Scale {
        Scale::build(root, ScaleKind::Major.steps())
    }

    pub fn natural_minor(root: PitchClass) -> Scale {
        Scale::build(root, ScaleKind::NaturalMinor.steps())
    }

    pub fn root(&self) -> PitchClass {
        self.root
    }

    pub fn notes(&self) -> &[PitchClass] {
        &self.notes
    }
}

/// Root of the relative natural-minor scale of `major_root`.
pub fn relative_minor_root(major_root: PitchClass) -> PitchClass {
    major_root.transpose(RELATIVE_MINOR_INTERVAL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use PitchClass::*;

    #[test]
    fn test_c_major_scale() {
        let scale = Scale::major(C);
        assert_eq!(scale.notes(), &[C, D, E, F, G, A, B, C]);
    }

    #[test]
    fn test_c_natural_minor_scale() {
        let scale = Scale::natural_minor(C);
        assert_eq!(scale.notes(), &[C, D, DSharp, F, G, GSharp, ASharp, C]);
    }

    #[test]
    fn test_scale_has_eight_notes_and_closes_on_root() {
        for &root in PitchClass::all() {
            for &kind in ScaleKind::all() {
                let scale = Scale::build(root, kind.steps());
                assert_eq!(scale.notes().len(), 8);
                assert_eq!(scale.notes()[0], root);
                assert_eq!(scale.notes()[7], root);
            }
        }
    }

    #[test]
    fn test_relative_minor_root_is_nine_semitones_up() {
        assert_eq!(relative_minor_root(C), A);
        assert_eq!(relative_minor_root(G), E);
        for &root in PitchClass::all() {
            assert_eq!(relative_minor_root(root), root.transpose(9));
        }
    }

    #[test]
    fn test_relative_minor_of_c_shares_pitch_classes() {
        let minor = Scale::natural_minor(relative_minor_root(C));
        assert_eq!(minor.root(), A);
        assert_eq!(minor.notes(), &[A, B, C, D, E, F, G, A]);
    }

    #[test]
    fn test_build_accepts_arbitrary_patterns() {
        // Whole-tone walk: 6 steps of 2, so 7 notes ending back on the root.
        let scale = Scale::build(C, &[2, 2, 2, 2, 2, 2]);
        assert_eq!(scale.notes().len(), 7);
        assert_eq!(scale.notes(), &[C, D, E, FSharp, GSharp, ASharp, C]);
    }
}
