//! Creature cry synthesis parameter derivation.
//!
//! A cry is a per-creature synthesized sound effect. Every playback mode maps
//! to a fixed set of synthesis parameters (pitch, length, release, chorus,
//! tone-table direction, optional volume override); the mapping is a pure
//! function so the full table can be regression-tested without an engine.

use num_derive::FromPrimitive;

/// Default cry length in engine units.
const DEFAULT_LENGTH: u32 = 210;
/// Default cry pitch.
const DEFAULT_PITCH: u32 = 15360;

/// Number of creatures with an assigned cry tone. Creature ids above this
/// (and id 0) have no cry and play nothing.
pub const CREATURES_WITH_CRIES: u16 = 440;

/// Playback mode of a creature cry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive)]
pub enum CryMode {
    /// Plain cry with default parameters.
    Normal,
    /// Shortened cry for simultaneous releases.
    Doubles,
    /// Wild-encounter intro cry.
    Encounter,
    /// Raised-pitch variant.
    HighPitch,
    /// Reversed lead-in of an echoed cry.
    EchoStart,
    /// Lowered, fading cry on faint.
    Faint,
    /// Trailing half of an echoed cry.
    EchoEnd,
    /// Short aggressive roar.
    Roar1,
    /// Longer roar variant.
    Roar2,
    /// Reversed growl.
    Growl1,
    /// Longer growl variant.
    Growl2,
    /// Lowered-pitch cry for a weakened creature.
    Weak,
    /// Doubles-length cry at the weakened pitch.
    WeakDoubles,
}

/// Derived synthesis parameter set for one cry playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CryParameters {
    /// Playback volume, possibly overridden by the mode.
    pub volume: i8,
    /// Base pitch.
    pub pitch: u32,
    /// Playback length in engine units.
    pub length: u32,
    /// Release envelope value.
    pub release: u32,
    /// Chorus depth.
    pub chorus: u32,
    /// Whether the reversed tone table is used.
    pub reverse: bool,
}

/// Derive the synthesis parameters for `mode`, passing `volume` through
/// unless the mode overrides it.
///
/// The per-mode constants are load-bearing for existing sound content; in
/// particular `WeakDoubles` takes `Doubles`' length/release and `Weak`'s
/// pitch.
pub fn derive_cry_parameters(mode: CryMode, volume: i8) -> CryParameters {
    let mut p = CryParameters {
        volume,
        pitch: DEFAULT_PITCH,
        length: DEFAULT_LENGTH,
        release: 0,
        chorus: 0,
        reverse: false,
    };

    match mode {
        CryMode::Normal => {}
        CryMode::Doubles => {
            p.length = 20;
            p.release = 225;
        }
        CryMode::Encounter => {
            p.release = 225;
            p.pitch = 15600;
            p.chorus = 20;
            p.volume = 90;
        }
        CryMode::HighPitch => {
            p.length = 50;
            p.release = 200;
            p.pitch = 15800;
            p.chorus = 20;
            p.volume = 90;
        }
        CryMode::EchoStart => {
            p.length = 25;
            p.reverse = true;
            p.release = 100;
            p.pitch = 15600;
            p.chorus = 192;
            p.volume = 90;
        }
        CryMode::Faint => {
            p.release = 200;
            p.pitch = 14440;
        }
        CryMode::EchoEnd => {
            p.release = 220;
            p.pitch = 15555;
            p.chorus = 192;
            p.volume = 90;
        }
        CryMode::Roar1 => {
            p.length = 10;
            p.release = 100;
            p.pitch = 14848;
        }
        CryMode::Roar2 => {
            p.length = 60;
            p.release = 225;
            p.pitch = 15616;
        }
        CryMode::Growl1 => {
            p.length = 15;
            p.reverse = true;
            p.release = 125;
            p.pitch = 15200;
        }
        CryMode::Growl2 => {
            p.length = 100;
            p.release = 225;
            p.pitch = 15200;
        }
        CryMode::WeakDoubles => {
            p.length = 20;
            p.release = 225;
            p.pitch = 15000;
        }
        CryMode::Weak => {
            p.pitch = 15000;
        }
    }

    p
}

/// Zero-based tone table index for a creature, or `None` when the creature
/// has no assigned cry (such a request is a silent no-op).
pub fn cry_index(creature: u16) -> Option<u16> {
    if creature == 0 || creature > CREATURES_WITH_CRIES {
        None
    } else {
        Some(creature - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VOL: i8 = 120;

    fn params(mode: CryMode) -> (i8, u32, u32, u32, u32, bool) {
        let p = derive_cry_parameters(mode, VOL);
        (p.volume, p.pitch, p.length, p.release, p.chorus, p.reverse)
    }

    // Regression table over all 13 modes: (volume, pitch, length, release, chorus, reverse).
    #[test]
    fn mode_parameter_table() {
        assert_eq!(params(CryMode::Normal), (VOL, 15360, 210, 0, 0, false));
        assert_eq!(params(CryMode::Doubles), (VOL, 15360, 20, 225, 0, false));
        assert_eq!(params(CryMode::Encounter), (90, 15600, 210, 225, 20, false));
        assert_eq!(params(CryMode::HighPitch), (90, 15800, 50, 200, 20, false));
        assert_eq!(params(CryMode::EchoStart), (90, 15600, 25, 100, 192, true));
        assert_eq!(params(CryMode::Faint), (VOL, 14440, 210, 200, 0, false));
        assert_eq!(params(CryMode::EchoEnd), (90, 15555, 210, 220, 192, false));
        assert_eq!(params(CryMode::Roar1), (VOL, 14848, 10, 100, 0, false));
        assert_eq!(params(CryMode::Roar2), (VOL, 15616, 60, 225, 0, false));
        assert_eq!(params(CryMode::Growl1), (VOL, 15200, 15, 125, 0, true));
        assert_eq!(params(CryMode::Growl2), (VOL, 15200, 100, 225, 0, false));
        assert_eq!(params(CryMode::Weak), (VOL, 15000, 210, 0, 0, false));
        assert_eq!(params(CryMode::WeakDoubles), (VOL, 15000, 20, 225, 0, false));
    }

    #[test]
    fn weak_doubles_cascade() {
        // WeakDoubles = Doubles' length/release at Weak's pitch.
        let doubles = derive_cry_parameters(CryMode::Doubles, VOL);
        let weak = derive_cry_parameters(CryMode::Weak, VOL);
        let wd = derive_cry_parameters(CryMode::WeakDoubles, VOL);
        assert_eq!(wd.length, doubles.length);
        assert_eq!(wd.release, doubles.release);
        assert_eq!(wd.pitch, weak.pitch);
    }

    #[test]
    fn cry_index_sentinels() {
        assert_eq!(cry_index(0), None);
        assert_eq!(cry_index(1), Some(0));
        assert_eq!(cry_index(CREATURES_WITH_CRIES), Some(CREATURES_WITH_CRIES - 1));
        assert_eq!(cry_index(CREATURES_WITH_CRIES + 1), None);
    }
}
