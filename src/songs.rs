//! Named song identifiers.
//!
//! Logical ids for every song this crate's control logic can address: jingles,
//! field themes and battle themes in the base set, plus the alternate regional
//! set the remapper can substitute at playback time. Ids are opaque to this
//! crate; only the audio backend knows what data they resolve to.
//!
//! Ids start above every fanfare duration in the table so that a tick count
//! routed through the remapper can never alias a mapped song id.
#![allow(missing_docs)]

/// Logical song identifier understood by the audio backend.
pub type SongId = u16;

/// "No song": cleared slot value; starting it silences the BGM channel.
pub const MUS_NONE: SongId = 0;

// -- Base song set ----------------------------------------------------------
/// Silent placeholder song used to park the BGM channel.
pub const MUS_DUMMY: SongId = 500;
pub const MUS_CAUGHT_INTRO: SongId = 501;
pub const MUS_CAUGHT: SongId = 502;
pub const MUS_PHOTO: SongId = 503;
pub const MUS_NEW_GAME_INSTRUCT: SongId = 504;
pub const MUS_NEW_GAME_INTRO: SongId = 505;
pub const MUS_NEW_GAME_EXIT: SongId = 506;
pub const MUS_TITLE: SongId = 507;
pub const MUS_INTRO_FIGHT: SongId = 508;
pub const MUS_GAME_FREAK: SongId = 509;
pub const MUS_CREDITS: SongId = 510;
pub const MUS_HALL_OF_FAME: SongId = 511;
pub const MUS_LEVEL_UP: SongId = 512;
pub const MUS_OBTAIN_ITEM: SongId = 513;
pub const MUS_OBTAIN_KEY_ITEM: SongId = 514;
pub const MUS_OBTAIN_TMHM: SongId = 515;
pub const MUS_OBTAIN_BADGE: SongId = 516;
pub const MUS_OBTAIN_BERRY: SongId = 517;
pub const MUS_MOVE_DELETED: SongId = 518;
pub const MUS_HEAL: SongId = 519;
pub const MUS_HEAL_UNUSED: SongId = 520;
pub const MUS_EVOLVED: SongId = 521;
pub const MUS_EVOLUTION_INTRO: SongId = 522;
pub const MUS_EVOLUTION: SongId = 523;
pub const MUS_DEX_RATING: SongId = 524;
pub const MUS_SLOTS_JACKPOT: SongId = 525;
pub const MUS_SLOTS_WIN: SongId = 526;
pub const MUS_TOO_BAD: SongId = 527;
pub const MUS_POKE_FLUTE: SongId = 528;
pub const MUS_JIGGLYPUFF: SongId = 529;
pub const MUS_FOLLOW_ME: SongId = 530;
pub const MUS_SCHOOL: SongId = 531;
pub const MUS_OAK: SongId = 532;
pub const MUS_OAK_LAB: SongId = 533;
pub const MUS_PALLET: SongId = 534;
pub const MUS_SLOW_PALLET: SongId = 535;
pub const MUS_PEWTER: SongId = 536;
pub const MUS_CERULEAN_UNUSED: SongId = 537;
pub const MUS_VERMILLION: SongId = 538;
pub const MUS_LAVENDER: SongId = 539;
pub const MUS_CELADON: SongId = 540;
pub const MUS_FUCHSIA: SongId = 541;
pub const MUS_CINNABAR: SongId = 542;
pub const MUS_ROUTE1: SongId = 543;
pub const MUS_ROUTE3: SongId = 544;
pub const MUS_ROUTE11: SongId = 545;
pub const MUS_ROUTE24: SongId = 546;
pub const MUS_SEVII_ROUTE: SongId = 547;
pub const MUS_SEVII_123: SongId = 548;
pub const MUS_SEVII_45: SongId = 549;
pub const MUS_SEVII_67: SongId = 550;
pub const MUS_SEVII_CAVE: SongId = 551;
pub const MUS_SEVII_DUNGEON: SongId = 552;
pub const MUS_VIRIDIAN_FOREST: SongId = 553;
pub const MUS_MT_MOON: SongId = 554;
pub const MUS_ROCK_TUNNEL_UNUSED: SongId = 555;
pub const MUS_POKE_TOWER: SongId = 556;
pub const MUS_POKE_MANSION: SongId = 557;
pub const MUS_VICTORY_ROAD: SongId = 558;
pub const MUS_SILPH: SongId = 559;
pub const MUS_ROCKET_HIDEOUT: SongId = 560;
pub const MUS_GYM: SongId = 561;
pub const MUS_GAME_CORNER: SongId = 562;
pub const MUS_POKE_CENTER: SongId = 563;
pub const MUS_NET_CENTER: SongId = 564;
pub const MUS_UNION_ROOM: SongId = 565;
pub const MUS_MYSTERY_GIFT: SongId = 566;
pub const MUS_TRAINER_TOWER: SongId = 567;
pub const MUS_SS_ANNE: SongId = 568;
pub const MUS_SURF: SongId = 569;
pub const MUS_CYCLING: SongId = 570;
pub const MUS_POKE_JUMP: SongId = 571;
pub const MUS_BERRY_PICK: SongId = 572;
pub const MUS_TEACHY_TV_MENU: SongId = 573;
pub const MUS_TEACHY_TV_SHOW: SongId = 574;
pub const MUS_ENCOUNTER_BOY: SongId = 575;
pub const MUS_ENCOUNTER_GIRL: SongId = 576;
pub const MUS_ENCOUNTER_RIVAL: SongId = 577;
pub const MUS_ENCOUNTER_ROCKET: SongId = 578;
pub const MUS_ENCOUNTER_GYM_LEADER: SongId = 579;
pub const MUS_ENCOUNTER_DEOXYS: SongId = 580;
pub const MUS_RIVAL_EXIT: SongId = 581;
pub const MUS_VS_WILD: SongId = 582;
pub const MUS_VS_TRAINER: SongId = 583;
pub const MUS_VS_GYM_LEADER: SongId = 584;
pub const MUS_VS_CHAMPION: SongId = 585;
pub const MUS_VS_MEWTWO: SongId = 586;
pub const MUS_VS_DEOXYS: SongId = 587;
pub const MUS_VS_LEGEND: SongId = 588;
pub const MUS_RS_VS_TRAINER: SongId = 589;
pub const MUS_RS_VS_GYM_LEADER: SongId = 590;
pub const MUS_VICTORY_WILD: SongId = 591;
pub const MUS_VICTORY_TRAINER: SongId = 592;
pub const MUS_VICTORY_GYM_LEADER: SongId = 593;


// -- Alternate regional song set --------------------------------------------

pub const MUS_HG_TITLE: SongId = 594;
pub const MUS_HG_INTRO: SongId = 595;
pub const MUS_HG_NEW_GAME: SongId = 596;
pub const MUS_HG_CREDITS: SongId = 597;
pub const MUS_HG_E_DENDOURIRI: SongId = 598;
pub const MUS_HG_LEVEL_UP: SongId = 599;
pub const MUS_HG_OBTAIN_ITEM: SongId = 600;
pub const MUS_HG_OBTAIN_KEY_ITEM: SongId = 601;
pub const MUS_HG_OBTAIN_TMHM: SongId = 602;
pub const MUS_HG_OBTAIN_BADGE: SongId = 603;
pub const MUS_HG_OBTAIN_BERRY: SongId = 604;
pub const MUS_HG_OBTAIN_EGG: SongId = 605;
pub const MUS_HG_OBTAIN_ACCESSORY: SongId = 606;
pub const MUS_HG_RECEIVE_POKEMON: SongId = 607;
pub const MUS_HG_MOVE_DELETED: SongId = 608;
pub const MUS_HG_HEAL: SongId = 609;
pub const MUS_HG_EVOLVED: SongId = 610;
pub const MUS_HG_EVOLUTION: SongId = 611;
pub const MUS_HG_EVOLUTION_NO_INTRO: SongId = 612;
pub const MUS_HG_CAUGHT: SongId = 613;
pub const MUS_HG_DEX_RATING_1: SongId = 614;
pub const MUS_HG_DEX_RATING_2: SongId = 615;
pub const MUS_HG_DEX_RATING_3: SongId = 616;
pub const MUS_HG_DEX_RATING_4: SongId = 617;
pub const MUS_HG_DEX_RATING_5: SongId = 618;
pub const MUS_HG_DEX_RATING_6: SongId = 619;
pub const MUS_HG_POKEGEAR_REGISTERED: SongId = 620;
pub const MUS_HG_GAME_CORNER: SongId = 621;
pub const MUS_HG_GAME_CORNER_WIN: SongId = 622;
pub const MUS_HG_CARD_FLIP: SongId = 623;
pub const MUS_HG_CARD_FLIP_GAME_OVER: SongId = 624;
pub const MUS_HG_BUG_CATCHING_CONTEST: SongId = 625;
pub const MUS_HG_BUG_CONTEST_1ST_PLACE: SongId = 626;
pub const MUS_HG_BUG_CONTEST_2ND_PLACE: SongId = 627;
pub const MUS_HG_BUG_CONTEST_3RD_PLACE: SongId = 628;
pub const MUS_HG_POKEATHLON_READY: SongId = 629;
pub const MUS_HG_POKEATHLON_1ST_PLACE: SongId = 630;
pub const MUS_HG_OBTAIN_B_POINTS: SongId = 631;
pub const MUS_HG_OBTAIN_ARCADE_POINTS: SongId = 632;
pub const MUS_HG_OBTAIN_CASTLE_POINTS: SongId = 633;
pub const MUS_HG_WIN_MINIGAME: SongId = 634;
pub const MUS_HG_LETS_GO_TOGETHER: SongId = 635;
pub const MUS_HG_LYRA: SongId = 636;
pub const MUS_HG_OAK: SongId = 637;
pub const MUS_HG_ELM_LAB: SongId = 638;
pub const MUS_HG_RADIO_OAK: SongId = 639;
pub const MUS_HG_RADIO_UNOWN: SongId = 640;
pub const MUS_HG_RADIO_LULLABY: SongId = 641;
pub const MUS_HG_RADIO_POKE_FLUTE: SongId = 642;
pub const MUS_HG_FOLLOW_ME_1: SongId = 643;
pub const MUS_HG_MYSTERY_GIFT: SongId = 644;
pub const MUS_HG_PALLET: SongId = 645;
pub const MUS_HG_PEWTER: SongId = 646;
pub const MUS_HG_CERULEAN: SongId = 647;
pub const MUS_HG_VERMILION: SongId = 648;
pub const MUS_HG_LAVENDER: SongId = 649;
pub const MUS_HG_CELADON: SongId = 650;
pub const MUS_HG_CINNABAR: SongId = 651;
pub const MUS_HG_CHERRYGROVE: SongId = 652;
pub const MUS_HG_VIOLET: SongId = 653;
pub const MUS_HG_AZALEA: SongId = 654;
pub const MUS_HG_ROUTE1: SongId = 655;
pub const MUS_HG_ROUTE3: SongId = 656;
pub const MUS_HG_ROUTE11: SongId = 657;
pub const MUS_HG_ROUTE24: SongId = 658;
pub const MUS_HG_ROUTE26: SongId = 659;
pub const MUS_HG_VIRIDIAN_FOREST: SongId = 660;
pub const MUS_HG_ROCK_TUNNEL: SongId = 661;
pub const MUS_HG_UNION_CAVE: SongId = 662;
pub const MUS_HG_RUINS_OF_ALPH: SongId = 663;
pub const MUS_HG_BELL_TOWER: SongId = 664;
pub const MUS_HG_VICTORY_ROAD: SongId = 665;
pub const MUS_HG_TEAM_ROCKET_HQ: SongId = 666;
pub const MUS_HG_ROCKET_TAKEOVER: SongId = 667;
pub const MUS_HG_GYM: SongId = 668;
pub const MUS_HG_POKE_CENTER: SongId = 669;
pub const MUS_HG_B_TOWER: SongId = 670;
pub const MUS_HG_SS_AQUA: SongId = 671;
pub const MUS_HG_SURF: SongId = 672;
pub const MUS_HG_CYCLING: SongId = 673;
pub const MUS_HG_ENCOUNTER_BOY_1: SongId = 674;
pub const MUS_HG_ENCOUNTER_GIRL_1: SongId = 675;
pub const MUS_HG_ENCOUNTER_RIVAL: SongId = 676;
pub const MUS_HG_ENCOUNTER_ROCKET: SongId = 677;
pub const MUS_HG_ENCOUNTER_KIMONO_GIRL: SongId = 678;
pub const MUS_HG_RIVAL_EXIT: SongId = 679;
pub const MUS_HG_VS_WILD_KANTO: SongId = 680;
pub const MUS_HG_VS_TRAINER: SongId = 681;
pub const MUS_HG_VS_TRAINER_KANTO: SongId = 682;
pub const MUS_HG_VS_GYM_LEADER: SongId = 683;
pub const MUS_HG_VS_GYM_LEADER_KANTO: SongId = 684;
pub const MUS_HG_VS_CHAMPION: SongId = 685;
pub const MUS_HG_VS_SUICUNE: SongId = 686;
pub const MUS_HG_VICTORY_TRAINER: SongId = 687;
