use nom::{
    Parser,
    branch::alt,
    character::complete::{char, one_of},
    combinator::{all_consuming, opt},
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the 12 equal-tempered chromatic pitch-classes, octave-agnostic.
/// Enharmonic pairs are a single variant; display is sharp-first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PitchClass {
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidPitchClass(pub String);

impl fmt::Display for InvalidPitchClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid pitch class: {:?}", self.0)
    }
}

impl std::error::Error for InvalidPitchClass {}

impl PitchClass {
    /// The chromatic domain in cyclic order, C through B.
    pub fn all() -> &'static [PitchClass; 12] {
        use PitchClass::*;
        &[
            C, CSharp, D, DSharp, E, F, FSharp, G, GSharp, A, ASharp, B,
        ]
    }

    /// Semitone distance above C, 0..=11.
    pub fn index(self) -> i32 {
        use PitchClass::*;
        match self {
            C => 0,
            CSharp => 1,
            D => 2,
            DSharp => 3,
            E => 4,
            F => 5,
            FSharp => 6,
            G => 7,
            GSharp => 8,
            A => 9,
            ASharp => 10,
            B => 11,
        }
    }

    /// Total for any integer; reduces with a true mathematical modulo so
    /// negative indices wrap back into the domain.
    pub fn from_index(index: i32) -> PitchClass {
        use PitchClass::*;
        match index.rem_euclid(12) {
            0 => C,
            1 => CSharp,
            2 => D,
            3 => DSharp,
            4 => E,
            5 => F,
            6 => FSharp,
            7 => G,
            8 => GSharp,
            9 => A,
            10 => ASharp,
            11 => B,
            _ => unreachable!(),
        }
    }

    /// The pitch-class `interval` semitones above `self`, modulo the octave.
    /// Accepts any interval, including negative and >= 12.
    pub fn transpose(self, interval: i32) -> PitchClass {
        PitchClass::from_index(self.index() + interval)
    }

    /// Canonical display label. Enharmonic pairs keep the original app's
    /// sharp-first dual form.
    pub fn name(self) -> &'static str {
        use PitchClass::*;
        match self {
            C => "C",
            CSharp => "C# / D♭",
            D => "D",
            DSharp => "D# / E♭",
            E => "E",
            F => "F",
            FSharp => "F# / G♭",
            G => "G",
            GSharp => "G# / A♭",
            A => "A",
            ASharp => "A# / B♭",
            B => "B",
        }
    }

    /// Parses a note name: a letter A-G (either case) plus an optional
    /// accidental, sharp or flat, ASCII or unicode. `"Db"` and `"C#"` name
    /// the same variant.
    pub fn parse(input: &str) -> Result<PitchClass, InvalidPitchClass> {
        match all_consuming(parse_note).parse(input.trim()) {
            Ok((_, pc)) => Ok(pc),
            Err(_) => Err(InvalidPitchClass(input.to_string())),
        }
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn parse_letter(input: &str) -> nom::IResult<&str, i32> {
    let (input, letter) = one_of("ABCDEFGabcdefg").parse(input)?;
    let index = match letter.to_ascii_uppercase() {
        'C' => 0,
        'D' => 2,
        'E' => 4,
        'F' => 5,
        'G' => 7,
        'A' => 9,
        _ => 11,
    };
    Ok((input, index))
}

fn parse_accidental(input: &str) -> nom::IResult<&str, i32> {
    alt((
        char('#').map(|_| 1i32),
        char('♯').map(|_| 1i32),
        char('b').map(|_| -1i32),
        char('♭').map(|_| -1i32),
    ))
    .parse(input)
}

fn parse_note(input: &str) -> nom::IResult<&str, PitchClass> {
    let (input, letter) = parse_letter(input)?;
    let (input, accidental) = opt(parse_accidental).parse(input)?;
    Ok((input, PitchClass::from_index(letter + accidental.unwrap_or(0))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transpose_zero_is_identity() {
        for &pc in PitchClass::all() {
            assert_eq!(pc.transpose(0), pc);
        }
    }

    #[test]
    fn test_transpose_octave_wraps() {
        for &pc in PitchClass::all() {
            assert_eq!(pc.transpose(12), pc);
            for i in -24..24 {
                assert_eq!(pc.transpose(i + 12), pc.transpose(i));
            }
        }
    }

    #[test]
    fn test_transpose_negative_interval() {
        assert_eq!(PitchClass::C.transpose(-3), PitchClass::A);
        assert_eq!(PitchClass::C.transpose(-12), PitchClass::C);
        assert_eq!(PitchClass::D.transpose(-26), PitchClass::C);
    }

    #[test]
    fn test_transpose_wraps_past_top_of_domain() {
        // A# is index 10; +4 must wrap to index 2, not run off the table.
        assert_eq!(PitchClass::ASharp.transpose(4), PitchClass::D);
        assert_eq!(PitchClass::B.transpose(1), PitchClass::C);
    }

    #[test]
    fn test_transpose_stays_in_domain() {
        for &pc in PitchClass::all() {
            for i in 0..12 {
                assert!(PitchClass::all().contains(&pc.transpose(i)));
            }
        }
    }

    #[test]
    fn test_domain_has_twelve_elements() {
        assert_eq!(PitchClass::all().len(), 12);
        for (i, &pc) in PitchClass::all().iter().enumerate() {
            assert_eq!(pc.index(), i as i32);
            assert_eq!(PitchClass::from_index(i as i32), pc);
        }
    }

    #[test]
    fn test_parse_naturals() {
        assert_eq!(PitchClass::parse("C"), Ok(PitchClass::C));
        assert_eq!(PitchClass::parse("a"), Ok(PitchClass::A));
        assert_eq!(PitchClass::parse(" G "), Ok(PitchClass::G));
    }

    #[test]
    fn test_parse_sharps_and_flats_agree() {
        assert_eq!(PitchClass::parse("C#"), Ok(PitchClass::CSharp));
        assert_eq!(PitchClass::parse("Db"), Ok(PitchClass::CSharp));
        assert_eq!(PitchClass::parse("B♭"), Ok(PitchClass::ASharp));
        assert_eq!(PitchClass::parse("a♯"), Ok(PitchClass::ASharp));
    }

    #[test]
    fn test_parse_edge_of_domain_wraps() {
        assert_eq!(PitchClass::parse("Cb"), Ok(PitchClass::B));
        assert_eq!(PitchClass::parse("B#"), Ok(PitchClass::C));
    }

    #[test]
    fn test_parse_rejects_unknown_symbols() {
        assert!(PitchClass::parse("H").is_err());
        assert!(PitchClass::parse("C##").is_err());
        assert!(PitchClass::parse("").is_err());
        assert!(PitchClass::parse("Do").is_err());
    }

    #[test]
    fn test_display_labels_are_sharp_first() {
        assert_eq!(PitchClass::C.to_string(), "C");
        assert_eq!(PitchClass::ASharp.to_string(), "A# / B♭");
        assert_eq!(PitchClass::CSharp.to_string(), "C# / D♭");
    }
}
