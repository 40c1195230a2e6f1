// SPDX-FileCopyrightText: 2025 Adventure Physics Swap Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

#[cfg(feature = "json_config")]
use serde::{Deserialize, Serialize};

/// Every character across all supported games.
///
/// The order of this enum is the order of records in the binary physics file (DefaultPhysics.bin),
/// so it must never be reordered. New characters are only ever appended.
///
/// * 0-7: Sonic Adventure DX, in the game's own character order.
/// * 8-26: Sonic Adventure 2 Battle, in the order of the game's physics table.
/// * 27-38: Sonic Heroes, in the game's own character order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "json_config", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum AllCharacters {
    SadxSonic = 0,
    SadxEggman = 1,
    SadxTails = 2,
    SadxKnuckles = 3,
    SadxTikal = 4,
    SadxAmy = 5,
    SadxGamma = 6,
    SadxBig = 7,

    Sa2bSonic = 8,
    Sa2bShadow = 9,
    Sa2bTails = 10,
    Sa2bEggman = 11,
    Sa2bKnuckles = 12,
    Sa2bRouge = 13,
    Sa2bMechTails = 14,
    Sa2bMechEggman = 15,
    Sa2bAmy = 16,
    Sa2bSuperSonic = 17,
    Sa2bSuperShadow = 18,
    Sa2bUnused = 19,
    Sa2bMetalSonic = 20,
    Sa2bChaoWalker = 21,
    Sa2bDarkChaoWalker = 22,
    Sa2bTikal = 23,
    Sa2bChaos = 24,
    Sa2bUnused2 = 25,
    Sa2bUnused3 = 26,

    HeroesSonic = 27,
    HeroesKnuckles = 28,
    HeroesTails = 29,
    HeroesShadow = 30,
    HeroesOmega = 31,
    HeroesRouge = 32,
    HeroesAmy = 33,
    HeroesBig = 34,
    HeroesCream = 35,
    HeroesEspio = 36,
    HeroesVector = 37,
    HeroesCharmy = 38,
}

impl AllCharacters {
    /// Every character, in file order.
    pub const ALL: [AllCharacters; 39] = [
        AllCharacters::SadxSonic,
        AllCharacters::SadxEggman,
        AllCharacters::SadxTails,
        AllCharacters::SadxKnuckles,
        AllCharacters::SadxTikal,
        AllCharacters::SadxAmy,
        AllCharacters::SadxGamma,
        AllCharacters::SadxBig,
        AllCharacters::Sa2bSonic,
        AllCharacters::Sa2bShadow,
        AllCharacters::Sa2bTails,
        AllCharacters::Sa2bEggman,
        AllCharacters::Sa2bKnuckles,
        AllCharacters::Sa2bRouge,
        AllCharacters::Sa2bMechTails,
        AllCharacters::Sa2bMechEggman,
        AllCharacters::Sa2bAmy,
        AllCharacters::Sa2bSuperSonic,
        AllCharacters::Sa2bSuperShadow,
        AllCharacters::Sa2bUnused,
        AllCharacters::Sa2bMetalSonic,
        AllCharacters::Sa2bChaoWalker,
        AllCharacters::Sa2bDarkChaoWalker,
        AllCharacters::Sa2bTikal,
        AllCharacters::Sa2bChaos,
        AllCharacters::Sa2bUnused2,
        AllCharacters::Sa2bUnused3,
        AllCharacters::HeroesSonic,
        AllCharacters::HeroesKnuckles,
        AllCharacters::HeroesTails,
        AllCharacters::HeroesShadow,
        AllCharacters::HeroesOmega,
        AllCharacters::HeroesRouge,
        AllCharacters::HeroesAmy,
        AllCharacters::HeroesBig,
        AllCharacters::HeroesCream,
        AllCharacters::HeroesEspio,
        AllCharacters::HeroesVector,
        AllCharacters::HeroesCharmy,
    ];

    /// The number of characters, which is also the number of records in a physics file.
    pub const COUNT: usize = Self::ALL.len();

    /// The index of this character's record in the physics file.
    pub fn ordinal(self) -> usize {
        self as usize
    }

    /// Returns the character stored at record `ordinal`, if there is one.
    pub fn from_ordinal(ordinal: usize) -> Option<AllCharacters> {
        Self::ALL.get(ordinal).copied()
    }
}

/// A game's own list of characters, which can be translated into the unified list.
pub trait Roster: Copy + Ord + 'static {
    /// Every member of the roster, in declaration order.
    const ALL: &'static [Self];

    /// The unified character this roster member uses by default.
    fn translate(self) -> AllCharacters;
}

define_roster! {
    /// Playable characters in Sonic Adventure DX.
    pub enum SadxCharacter => Sadx {
        Sonic,
        Eggman,
        Tails,
        Knuckles,
        Tikal,
        Amy,
        Gamma,
        Big,
    }
}

define_roster! {
    /// Characters in Sonic Adventure 2 Battle, including the slots the game never uses.
    pub enum Sa2bCharacter => Sa2b {
        Sonic,
        Shadow,
        Tails,
        Eggman,
        Knuckles,
        Rouge,
        MechTails,
        MechEggman,
        Amy,
        SuperSonic,
        SuperShadow,
        Unused,
        MetalSonic,
        ChaoWalker,
        DarkChaoWalker,
        Tikal,
        Chaos,
        Unused2,
        Unused3,
    }
}

define_roster! {
    /// Playable characters in Sonic Heroes.
    pub enum HeroesCharacter => Heroes {
        Sonic,
        Knuckles,
        Tails,
        Shadow,
        Omega,
        Rouge,
        Amy,
        Big,
        Cream,
        Espio,
        Vector,
        Charmy,
    }
}

/// A character from any of the supported games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Character {
    Sadx(SadxCharacter),
    Sa2b(Sa2bCharacter),
    Heroes(HeroesCharacter),
}

impl Character {
    /// The unified character this character uses by default.
    pub fn translate(self) -> AllCharacters {
        match self {
            Character::Sadx(character) => character.translate(),
            Character::Sa2b(character) => character.translate(),
            Character::Heroes(character) => character.translate(),
        }
    }
}

impl From<SadxCharacter> for Character {
    fn from(character: SadxCharacter) -> Self {
        Character::Sadx(character)
    }
}

impl From<Sa2bCharacter> for Character {
    fn from(character: Sa2bCharacter) -> Self {
        Character::Sa2b(character)
    }
}

impl From<HeroesCharacter> for Character {
    fn from(character: HeroesCharacter) -> Self {
        Character::Heroes(character)
    }
}
