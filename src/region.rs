//! Regional song remapping.
//!
//! The player can pick which regional music set plays from the options menu.
//! Before any song id reaches the backend it passes through [`remap_song`],
//! which either leaves it untouched (the base set) or substitutes the
//! equivalent song from the alternate regional set via an explicit id table.
//!
//! The table is total: ids without an alternate-set equivalent pass through
//! unchanged, so callers never need to handle a miss.

use crate::songs::*;
use serde::{Deserialize, Serialize};

/// Which regional music set the persisted options select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MusicSet {
    /// Base song set; remapping is the identity.
    #[default]
    FireRed,
    /// Alternate regional set; ids are substituted through the table below.
    Hgss,
}

/// Remap a logical song id according to the selected music set.
///
/// Total over all ids: unmapped ids (and the whole base set under
/// [`MusicSet::FireRed`]) are returned unchanged.
pub fn remap_song(set: MusicSet, song: SongId) -> SongId {
    match set {
        MusicSet::FireRed => song,
        MusicSet::Hgss => remap_to_hgss(song),
    }
}

fn remap_to_hgss(song: SongId) -> SongId {
    match song {
        MUS_HEAL | MUS_HEAL_UNUSED => MUS_HG_HEAL,
        MUS_LEVEL_UP => MUS_HG_LEVEL_UP,
        MUS_OBTAIN_ITEM => MUS_HG_OBTAIN_ITEM,
        MUS_EVOLVED => MUS_HG_EVOLVED,
        MUS_OBTAIN_BADGE => MUS_HG_OBTAIN_BADGE,
        MUS_OBTAIN_TMHM => MUS_HG_OBTAIN_TMHM,
        MUS_OBTAIN_BERRY | MUS_BERRY_PICK => MUS_HG_OBTAIN_BERRY,
        MUS_EVOLUTION_INTRO => MUS_HG_EVOLUTION_NO_INTRO,
        MUS_EVOLUTION => MUS_HG_EVOLUTION,
        MUS_RS_VS_GYM_LEADER => MUS_HG_VS_GYM_LEADER,
        MUS_RS_VS_TRAINER => MUS_HG_VS_TRAINER,
        MUS_SCHOOL => MUS_HG_LYRA,
        MUS_SLOTS_JACKPOT | MUS_SLOTS_WIN => MUS_HG_GAME_CORNER_WIN,
        MUS_MOVE_DELETED => MUS_HG_MOVE_DELETED,
        MUS_TOO_BAD => MUS_HG_RADIO_UNOWN,
        MUS_FOLLOW_ME => MUS_HG_FOLLOW_ME_1,
        MUS_GAME_CORNER => MUS_HG_GAME_CORNER,
        MUS_ROCKET_HIDEOUT => MUS_HG_TEAM_ROCKET_HQ,
        MUS_GYM => MUS_HG_GYM,
        MUS_JIGGLYPUFF => MUS_HG_RADIO_LULLABY,
        MUS_INTRO_FIGHT | MUS_GAME_FREAK => MUS_HG_INTRO,
        MUS_TITLE => MUS_HG_TITLE,
        MUS_CINNABAR => MUS_HG_CINNABAR,
        MUS_LAVENDER => MUS_HG_LAVENDER,
        MUS_CYCLING => MUS_HG_CYCLING,
        MUS_ENCOUNTER_ROCKET => MUS_HG_ENCOUNTER_ROCKET,
        MUS_ENCOUNTER_GIRL => MUS_HG_ENCOUNTER_GIRL_1,
        MUS_ENCOUNTER_BOY => MUS_HG_ENCOUNTER_BOY_1,
        MUS_HALL_OF_FAME => MUS_HG_E_DENDOURIRI,
        MUS_VIRIDIAN_FOREST | MUS_SEVII_DUNGEON => MUS_HG_VIRIDIAN_FOREST,
        MUS_MT_MOON => MUS_HG_ROCK_TUNNEL,
        MUS_POKE_MANSION => MUS_HG_RUINS_OF_ALPH,
        MUS_CREDITS => MUS_HG_CREDITS,
        MUS_ROUTE1 => MUS_HG_ROUTE1,
        MUS_ROUTE24 => MUS_HG_ROUTE24,
        MUS_ROUTE3 => MUS_HG_ROUTE3,
        MUS_ROUTE11 => MUS_HG_ROUTE11,
        MUS_VICTORY_ROAD => MUS_HG_VICTORY_ROAD,
        MUS_VS_GYM_LEADER => MUS_HG_VS_GYM_LEADER_KANTO,
        MUS_VS_TRAINER => MUS_HG_VS_TRAINER_KANTO,
        MUS_VS_WILD => MUS_HG_VS_WILD_KANTO,
        MUS_VS_CHAMPION => MUS_HG_VS_CHAMPION,
        MUS_PALLET | MUS_SLOW_PALLET => MUS_HG_PALLET,
        MUS_OAK_LAB => MUS_HG_ELM_LAB,
        MUS_OAK => MUS_HG_OAK,
        MUS_POKE_CENTER | MUS_NET_CENTER => MUS_HG_POKE_CENTER,
        MUS_SS_ANNE => MUS_HG_SS_AQUA,
        MUS_SURF => MUS_HG_SURF,
        MUS_POKE_TOWER => MUS_HG_BELL_TOWER,
        MUS_SILPH => MUS_HG_ROCKET_TAKEOVER,
        MUS_FUCHSIA => MUS_HG_CERULEAN,
        MUS_CELADON => MUS_HG_CELADON,
        MUS_VICTORY_TRAINER | MUS_VICTORY_WILD | MUS_VICTORY_GYM_LEADER => MUS_HG_VICTORY_TRAINER,
        MUS_VERMILLION => MUS_HG_VERMILION,
        MUS_PEWTER => MUS_HG_PEWTER,
        MUS_ENCOUNTER_RIVAL | MUS_ENCOUNTER_DEOXYS => MUS_HG_ENCOUNTER_RIVAL,
        MUS_RIVAL_EXIT => MUS_HG_RIVAL_EXIT,
        MUS_DEX_RATING => MUS_HG_DEX_RATING_1,
        MUS_OBTAIN_KEY_ITEM => MUS_HG_OBTAIN_KEY_ITEM,
        MUS_CAUGHT_INTRO | MUS_PHOTO | MUS_CAUGHT => MUS_HG_CAUGHT,
        MUS_NEW_GAME_INSTRUCT | MUS_NEW_GAME_INTRO | MUS_NEW_GAME_EXIT => MUS_HG_NEW_GAME,
        MUS_POKE_JUMP => MUS_HG_BUG_CATCHING_CONTEST,
        MUS_UNION_ROOM | MUS_SEVII_CAVE => MUS_HG_UNION_CAVE,
        MUS_MYSTERY_GIFT => MUS_HG_MYSTERY_GIFT,
        MUS_TEACHY_TV_SHOW | MUS_TEACHY_TV_MENU => MUS_HG_RADIO_OAK,
        MUS_SEVII_ROUTE => MUS_HG_ROUTE26,
        MUS_SEVII_123 => MUS_HG_CHERRYGROVE,
        MUS_SEVII_45 => MUS_HG_VIOLET,
        MUS_SEVII_67 => MUS_HG_AZALEA,
        MUS_POKE_FLUTE => MUS_HG_RADIO_POKE_FLUTE,
        MUS_VS_DEOXYS | MUS_VS_MEWTWO | MUS_VS_LEGEND => MUS_HG_VS_SUICUNE,
        MUS_ENCOUNTER_GYM_LEADER => MUS_HG_ENCOUNTER_KIMONO_GIRL,
        MUS_TRAINER_TOWER => MUS_HG_B_TOWER,
        _ => song,
    }
}
