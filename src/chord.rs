use crate::note::PitchClass;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Chord qualities in display order. The order here is the order the chord
/// table is rendered in, so it is load-bearing; do not sort.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChordQuality {
    MajorTriad,
    MinorTriad,
    AugmentedTriad,
    DiminishedTriad,
    MajorSeventh,
    DominantSeventh,
    MinorSeventh,
    HalfDiminishedSeventh,
}

impl ChordQuality {
    pub fn all() -> &'static [ChordQuality; 8] {
        use ChordQuality::*;
        &[
            MajorTriad,
            MinorTriad,
            AugmentedTriad,
            DiminishedTriad,
            MajorSeventh,
            DominantSeventh,
            MinorSeventh,
            HalfDiminishedSeventh,
        ]
    }

    pub fn name(self) -> &'static str {
        use ChordQuality::*;
        match self {
            MajorTriad => "Major Triad",
            MinorTriad => "Minor Triad",
            AugmentedTriad => "Augmented Triad",
            DiminishedTriad => "Diminished Triad",
            MajorSeventh => "Major 7th",
            DominantSeventh => "Dominant 7th",
            MinorSeventh => "Minor 7th",
            HalfDiminishedSeventh => "Half-Diminished 7th",
        }
    }

    /// Semitone offsets above the root; the root itself is implicit at 0.
    pub fn intervals(self) -> &'static [i32] {
        use ChordQuality::*;
        match self {
            MajorTriad => &[4, 7],
            MinorTriad => &[3, 7],
            AugmentedTriad => &[4, 8],
            DiminishedTriad => &[3, 6],
            MajorSeventh => &[4, 7, 11],
            DominantSeventh => &[4, 7, 10],
            MinorSeventh => &[3, 7, 10],
            HalfDiminishedSeventh => &[3, 6, 10],
        }
    }
}

impl fmt::Display for ChordQuality {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A chord spelled out from a root: the root first, then each formula
/// interval resolved, in formula order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chord {
    root: PitchClass,
    quality: ChordQuality,
    notes: Vec<PitchClass>,
}

impl Chord {
    pub fn build(root: PitchClass, quality: ChordQuality) -> Chord {
        let notes = std::iter::once(root)
            .chain(quality.intervals().iter().map(|&i| root.transpose(i)))
            .collect();
        Chord {
            root,
            quality,
            notes,
        }
    }

    pub fn root(&self) -> PitchClass {
        self.root
    }

    pub fn quality(&self) -> ChordQuality {
        self.quality
    }

    pub fn notes(&self) -> &[PitchClass] {
        &self.notes
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for note in &self.notes {
            if !first {
                f.write_str(" + ")?;
            }
            write!(f, "{}", note)?;
            first = false;
        }
        Ok(())
    }
}

/// Every chord quality built on `root`, in `ChordQuality::all()` order.
pub fn chord_set(root: PitchClass) -> Vec<Chord> {
    ChordQuality::all()
        .iter()
        .map(|&quality| Chord::build(root, quality))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use PitchClass::*;

    #[test]
    fn test_c_major_triad() {
        let chord = Chord::build(C, ChordQuality::MajorTriad);
        assert_eq!(chord.notes(), &[C, E, G]);
    }

    #[test]
    fn test_c_dominant_seventh() {
        let chord = Chord::build(C, ChordQuality::DominantSeventh);
        assert_eq!(chord.notes(), &[C, E, G, ASharp]);
    }

    #[test]
    fn test_chord_starts_at_root_with_formula_cardinality() {
        for &root in PitchClass::all() {
            for &quality in ChordQuality::all() {
                let chord = Chord::build(root, quality);
                assert_eq!(chord.notes().len(), quality.intervals().len() + 1);
                assert_eq!(chord.notes()[0], root);
                assert_eq!(chord.root(), root);
            }
        }
    }

    #[test]
    fn test_chord_set_preserves_declaration_order() {
        let chords = chord_set(C);
        assert_eq!(chords.len(), 8);
        let qualities: Vec<ChordQuality> = chords.iter().map(|c| c.quality()).collect();
        assert_eq!(qualities, ChordQuality::all().to_vec());
        assert_eq!(chords[0].quality().name(), "Major Triad");
        assert_eq!(chords[7].quality().name(), "Half-Diminished 7th");
    }

    #[test]
    fn test_chord_set_is_deterministic() {
        for &root in PitchClass::all() {
            assert_eq!(chord_set(root), chord_set(root));
        }
    }

    #[test]
    fn test_chord_display_joins_with_plus() {
        let chord = Chord::build(C, ChordQuality::MajorTriad);
        assert_eq!(chord.to_string(), "C + E + G");
        let chord = Chord::build(ASharp, ChordQuality::MinorTriad);
        assert_eq!(chord.to_string(), "A# / B♭ + C# / D♭ + F");
    }

    #[test]
    fn test_wraparound_chord() {
        let chord = Chord::build(B, ChordQuality::MajorTriad);
        assert_eq!(chord.notes(), &[B, DSharp, FSharp]);
    }
}
