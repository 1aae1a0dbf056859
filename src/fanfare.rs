//! Fanfare jingle sequencing.
//!
//! A fanfare is a short named jingle that preempts the BGM channel and hands
//! it back automatically. This module owns the static jingle table (song id
//! plus duration in ticks) and the countdown state shared by the manual
//! wait-style API and the periodic completion task. The director performs
//! the actual backend calls; the sequencer only tracks time and arming.

use crate::songs::*;
use num_derive::FromPrimitive;
use num_traits::FromPrimitive as _;

/// Countdown value used while replaying a recorded play log: long enough to
/// cover any real jingle, with no song actually started.
pub const REPLAY_STUB_TICKS: u16 = 0xFF;

/// One entry of the fanfare table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FanfareEntry {
    /// Song played on the BGM channel.
    pub song: SongId,
    /// Ticks until the previous BGM is resumed.
    pub duration: u16,
}

/// Named fanfare jingles, indexing [`FANFARES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive)]
#[allow(missing_docs)]
pub enum Fanfare {
    LevelUp = 0,
    ObtainItem = 1,
    Evolved = 2,
    ObtainTmhm = 3,
    Heal = 4,
    ObtainBadge = 5,
    MoveDeleted = 6,
    ObtainBerry = 7,
    SlotsJackpot = 8,
    SlotsWin = 9,
    TooBad = 10,
    PokeFlute = 11,
    KeyItem = 12,
    DexEval = 13,
    HgObtainKeyItem = 14,
    HgLevelUp = 15,
    HgHeal = 16,
    HgDexRating1 = 17,
    HgDexRating2 = 18,
    HgDexRating3 = 19,
    HgDexRating4 = 20,
    HgDexRating5 = 21,
    HgDexRating6 = 22,
    HgReceiveEgg = 23,
    HgObtainItem = 24,
    HgEvolved = 25,
    HgObtainBadge = 26,
    HgObtainTmhm = 27,
    HgVoltorbFlip1 = 28,
    HgVoltorbFlip2 = 29,
    HgAccessory = 30,
    HgRegisterPokegear = 31,
    HgObtainBerry = 32,
    HgReceivePokemon = 33,
    HgMoveDeleted = 34,
    HgThirdPlace = 35,
    HgSecondPlace = 36,
    HgFirstPlace = 37,
    HgPokeathlonNew = 38,
    HgWinningPokeathlon = 39,
    HgObtainBPoints = 40,
    HgObtainArcadePoints = 41,
    HgObtainCastlePoints = 42,
    HgClearMinigame = 43,
    HgPartner = 44,
}

/// Static fanfare definition table, immutable for the program lifetime.
pub static FANFARES: [FanfareEntry; 45] = [
    FanfareEntry { song: MUS_LEVEL_UP, duration: 80 },
    FanfareEntry { song: MUS_OBTAIN_ITEM, duration: 160 },
    FanfareEntry { song: MUS_EVOLVED, duration: 220 },
    FanfareEntry { song: MUS_OBTAIN_TMHM, duration: 220 },
    FanfareEntry { song: MUS_HEAL, duration: 160 },
    FanfareEntry { song: MUS_OBTAIN_BADGE, duration: 340 },
    FanfareEntry { song: MUS_MOVE_DELETED, duration: 180 },
    FanfareEntry { song: MUS_OBTAIN_BERRY, duration: 120 },
    FanfareEntry { song: MUS_SLOTS_JACKPOT, duration: 250 },
    FanfareEntry { song: MUS_SLOTS_WIN, duration: 150 },
    FanfareEntry { song: MUS_TOO_BAD, duration: 160 },
    FanfareEntry { song: MUS_POKE_FLUTE, duration: 450 },
    FanfareEntry { song: MUS_OBTAIN_KEY_ITEM, duration: 170 },
    FanfareEntry { song: MUS_DEX_RATING, duration: 196 },
    FanfareEntry { song: MUS_HG_OBTAIN_KEY_ITEM, duration: 170 },
    FanfareEntry { song: MUS_HG_LEVEL_UP, duration: 80 },
    FanfareEntry { song: MUS_HG_HEAL, duration: 160 },
    FanfareEntry { song: MUS_HG_DEX_RATING_1, duration: 200 },
    FanfareEntry { song: MUS_HG_DEX_RATING_2, duration: 180 },
    FanfareEntry { song: MUS_HG_DEX_RATING_3, duration: 220 },
    FanfareEntry { song: MUS_HG_DEX_RATING_4, duration: 210 },
    FanfareEntry { song: MUS_HG_DEX_RATING_5, duration: 210 },
    FanfareEntry { song: MUS_HG_DEX_RATING_6, duration: 370 },
    FanfareEntry { song: MUS_HG_OBTAIN_EGG, duration: 155 },
    FanfareEntry { song: MUS_HG_OBTAIN_ITEM, duration: 160 },
    FanfareEntry { song: MUS_HG_EVOLVED, duration: 240 },
    FanfareEntry { song: MUS_HG_OBTAIN_BADGE, duration: 340 },
    FanfareEntry { song: MUS_HG_OBTAIN_TMHM, duration: 220 },
    FanfareEntry { song: MUS_HG_CARD_FLIP, duration: 195 },
    FanfareEntry { song: MUS_HG_CARD_FLIP_GAME_OVER, duration: 240 },
    FanfareEntry { song: MUS_HG_OBTAIN_ACCESSORY, duration: 160 },
    FanfareEntry { song: MUS_HG_POKEGEAR_REGISTERED, duration: 185 },
    FanfareEntry { song: MUS_HG_OBTAIN_BERRY, duration: 120 },
    FanfareEntry { song: MUS_HG_RECEIVE_POKEMON, duration: 150 },
    FanfareEntry { song: MUS_HG_MOVE_DELETED, duration: 180 },
    FanfareEntry { song: MUS_HG_BUG_CONTEST_3RD_PLACE, duration: 130 },
    FanfareEntry { song: MUS_HG_BUG_CONTEST_2ND_PLACE, duration: 225 },
    FanfareEntry { song: MUS_HG_BUG_CONTEST_1ST_PLACE, duration: 250 },
    FanfareEntry { song: MUS_HG_POKEATHLON_READY, duration: 110 },
    FanfareEntry { song: MUS_HG_POKEATHLON_1ST_PLACE, duration: 144 },
    FanfareEntry { song: MUS_HG_OBTAIN_B_POINTS, duration: 264 },
    FanfareEntry { song: MUS_HG_OBTAIN_ARCADE_POINTS, duration: 175 },
    FanfareEntry { song: MUS_HG_OBTAIN_CASTLE_POINTS, duration: 200 },
    FanfareEntry { song: MUS_HG_WIN_MINIGAME, duration: 230 },
    FanfareEntry { song: MUS_HG_LETS_GO_TOGETHER, duration: 180 },
];

impl Fanfare {
    /// Table entry for this fanfare.
    pub fn entry(self) -> FanfareEntry {
        FANFARES[self as usize]
    }

    /// Find the fanfare whose song id matches, if any.
    pub fn by_song(song: SongId) -> Option<Fanfare> {
        FANFARES
            .iter()
            .position(|entry| entry.song == song)
            .and_then(Fanfare::from_usize)
    }
}

/// Shared fanfare countdown plus the completion-task arming flag.
///
/// At most one completion task runs at a time; arming while armed is a no-op.
#[derive(Debug, Default)]
pub struct FanfareSequencer {
    counter: u16,
    task_armed: bool,
}

impl FanfareSequencer {
    /// Create an idle sequencer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the countdown for a jingle of `duration` ticks.
    pub fn start(&mut self, duration: u16) {
        self.counter = duration;
    }

    /// Advance the countdown by one tick.
    ///
    /// Returns `true` once the countdown has elapsed: not-finished for the
    /// first `duration - 1` calls, finished on the `duration`-th.
    pub fn step(&mut self) -> bool {
        self.counter = self.counter.saturating_sub(1);
        self.counter == 0
    }

    /// Ticks remaining before the jingle hands the channel back.
    pub fn remaining(&self) -> u16 {
        self.counter
    }

    /// Register the periodic completion task.
    ///
    /// Returns `false` (and changes nothing) when a task is already armed.
    pub fn arm_task(&mut self) -> bool {
        if self.task_armed {
            return false;
        }
        self.task_armed = true;
        true
    }

    /// Unregister the periodic completion task.
    pub fn disarm_task(&mut self) {
        self.task_armed = false;
    }

    /// True iff the periodic completion task is currently registered.
    pub fn is_task_armed(&self) -> bool {
        self.task_armed
    }
}
