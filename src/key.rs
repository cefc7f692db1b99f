use crate::chord::{Chord, chord_set};
use crate::note::PitchClass;
use crate::scale::{Scale, relative_minor_root};

/// Everything derived from one root, computed together. `set_root` swaps the
/// whole value, so a consumer holding a `&KeyCenter` between frames can never
/// observe chords from one root next to scales from another.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyCenter {
    root: PitchClass,
    chords: Vec<Chord>,
    major_scale: Scale,
    natural_minor_scale: Scale,
    relative_minor_scale: Scale,
}

impl KeyCenter {
    pub fn new(root: PitchClass) -> KeyCenter {
        KeyCenter {
            root,
            chords: chord_set(root),
            major_scale: Scale::major(root),
            natural_minor_scale: Scale::natural_minor(root),
            relative_minor_scale: Scale::natural_minor(relative_minor_root(root)),
        }
    }

    pub fn set_root(&mut self, root: PitchClass) {
        *self = KeyCenter::new(root);
    }

    pub fn root(&self) -> PitchClass {
        self.root
    }

    /// All eight chords on the root, in `ChordQuality::all()` order.
    pub fn chords(&self) -> &[Chord] {
        &self.chords
    }

    pub fn major_scale(&self) -> &Scale {
        &self.major_scale
    }

    pub fn natural_minor_scale(&self) -> &Scale {
        &self.natural_minor_scale
    }

    pub fn relative_minor_scale(&self) -> &Scale {
        &self.relative_minor_scale
    }

    pub fn relative_minor_root(&self) -> PitchClass {
        self.relative_minor_scale.root()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chord::ChordQuality;
    use PitchClass::*;

    #[test]
    fn test_new_derives_all_outputs_from_root() {
        let key = KeyCenter::new(C);
        assert_eq!(key.root(), C);
        assert_eq!(key.chords().len(), 8);
        assert_eq!(key.major_scale().root(), C);
        assert_eq!(key.natural_minor_scale().root(), C);
        assert_eq!(key.relative_minor_root(), A);
        assert_eq!(key.relative_minor_scale().notes(), &[A, B, C, D, E, F, G, A]);
    }

    #[test]
    fn test_set_root_replaces_every_derived_output() {
        let mut key = KeyCenter::new(C);
        key.set_root(G);
        assert_eq!(key.root(), G);
        assert_eq!(key.major_scale().notes()[0], G);
        assert_eq!(key.natural_minor_scale().notes()[0], G);
        assert_eq!(key.relative_minor_root(), E);
        for chord in key.chords() {
            assert_eq!(chord.root(), G);
        }
    }

    #[test]
    fn test_snapshots_for_same_root_are_deep_equal() {
        for &root in PitchClass::all() {
            let a = KeyCenter::new(root);
            let b = KeyCenter::new(root);
            assert_eq!(a, b);
            let ordering: Vec<ChordQuality> = a.chords().iter().map(|c| c.quality()).collect();
            assert_eq!(ordering, ChordQuality::all().to_vec());
        }
    }

    #[test]
    fn test_set_root_round_trip_matches_fresh_snapshot() {
        let mut key = KeyCenter::new(C);
        key.set_root(FSharp);
        key.set_root(C);
        assert_eq!(key, KeyCenter::new(C));
    }
}
