// SPDX-FileCopyrightText: 2025 Adventure Physics Swap Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[cfg(feature = "json_config")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::character::{
    AllCharacters, Character, HeroesCharacter, Roster, Sa2bCharacter, SadxCharacter,
};
use crate::discovery::DefaultPhysicsSearch;
use crate::error::Error;
use crate::physics::AdventurePhysics;
use crate::table::PhysicsTable;
use crate::ByteBuffer;

/// File name of the configuration inside the mod's configuration directory.
pub const CONFIG_FILE_NAME: &str = "Config.json";

/// Maps every member of a roster to the unified character whose physics it uses by default.
pub fn default_mapping<R: Roster>() -> BTreeMap<R, AllCharacters> {
    R::ALL
        .iter()
        .map(|character| (*character, character.translate()))
        .collect()
}

/// Adds the default entry for any roster member missing from `mapping`.
fn fill_mapping<R: Roster>(mapping: &mut BTreeMap<R, AllCharacters>) {
    for character in R::ALL {
        mapping
            .entry(*character)
            .or_insert_with(|| character.translate());
    }
}

/// Which physics each character uses, and the physics profiles themselves.
///
/// Swapping physics is done by pointing a roster member at another unified character, for
/// example Heroes Sonic at `AllCharacters::Sa2bShadow`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "json_config",
    derive(Serialize, Deserialize),
    serde(rename_all = "PascalCase", default)
)]
pub struct Config {
    pub heroes_mapping: BTreeMap<HeroesCharacter, AllCharacters>,
    pub sa2b_mapping: BTreeMap<Sa2bCharacter, AllCharacters>,
    pub sadx_mapping: BTreeMap<SadxCharacter, AllCharacters>,
    pub physics: PhysicsTable,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            heroes_mapping: default_mapping(),
            sa2b_mapping: default_mapping(),
            sadx_mapping: default_mapping(),
            physics: PhysicsTable::new(),
        }
    }
}

impl Config {
    /// Loads the default physics file, unless physics were already loaded (for example from json).
    pub fn initialize(&mut self, search: &DefaultPhysicsSearch) -> Result<(), Error> {
        if self.physics.is_populated() {
            return Ok(());
        }

        let path = search.find()?;
        self.import_file(path)
    }

    /// Imports a binary physics file, replacing every profile.
    pub fn import_file(&mut self, path: impl AsRef<Path>) -> Result<(), Error> {
        self.physics.import_file(path)
    }

    /// Converts the current physics profiles back to the binary physics file layout.
    pub fn to_bytes(&self) -> Result<ByteBuffer, Error> {
        self.physics.write_to_buffer()
    }

    /// Writes the current physics profiles to a binary physics file at `path`.
    pub fn export_file(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        let buffer = self.to_bytes()?;

        debug!(path = %path.display(), "Exporting physics file");
        std::fs::write(path, buffer).map_err(|err| Error::io(path, err))
    }

    /// Returns the unified character whose physics `character` currently uses.
    pub fn resolve(&self, character: impl Into<Character>) -> AllCharacters {
        match character.into() {
            Character::Heroes(c) => lookup_mapping(&self.heroes_mapping, c),
            Character::Sa2b(c) => lookup_mapping(&self.sa2b_mapping, c),
            Character::Sadx(c) => lookup_mapping(&self.sadx_mapping, c),
        }
    }

    /// Returns the physics `character` currently uses.
    pub fn get_physics(&self, character: impl Into<Character>) -> Result<&AdventurePhysics, Error> {
        self.physics.get(self.resolve(character))
    }

    /// Makes `character` use the physics of `target`.
    pub fn swap(&mut self, character: impl Into<Character>, target: AllCharacters) {
        match character.into() {
            Character::Heroes(c) => self.heroes_mapping.insert(c, target),
            Character::Sa2b(c) => self.sa2b_mapping.insert(c, target),
            Character::Sadx(c) => self.sadx_mapping.insert(c, target),
        };
    }

    /// Makes every character use its own physics again.
    pub fn reset_mappings(&mut self) {
        self.heroes_mapping = default_mapping();
        self.sa2b_mapping = default_mapping();
        self.sadx_mapping = default_mapping();
    }

    fn fill_mappings(&mut self) {
        fill_mapping(&mut self.heroes_mapping);
        fill_mapping(&mut self.sa2b_mapping);
        fill_mapping(&mut self.sadx_mapping);
    }

    /// Path of the configuration file inside `full_directory_path`.
    pub fn get_file_path(full_directory_path: impl AsRef<Path>) -> PathBuf {
        full_directory_path.as_ref().join(CONFIG_FILE_NAME)
    }

    /// Loads the configuration file from `full_directory_path`.
    #[cfg(feature = "json_config")]
    pub fn from_json(full_directory_path: impl AsRef<Path>) -> Result<Config, Error> {
        let path = Self::get_file_path(full_directory_path);
        debug!(path = %path.display(), "Loading configuration");

        let contents = std::fs::read_to_string(&path).map_err(|err| Error::io(&path, err))?;
        let mut config: Config =
            serde_json::from_str(&contents).map_err(|err| Error::Serialization {
                path: path.clone(),
                message: err.to_string(),
            })?;

        config.fill_mappings();

        Ok(config)
    }

    /// Saves the configuration file to `full_directory_path`, creating the directory if needed.
    #[cfg(feature = "json_config")]
    pub fn to_json(&self, full_directory_path: impl AsRef<Path>) -> Result<(), Error> {
        let directory = full_directory_path.as_ref();
        let path = Self::get_file_path(directory);
        debug!(path = %path.display(), "Saving configuration");

        // json has no NaN or infinity, they would be written as null and fail to load
        let non_finite = self
            .physics
            .iter()
            .find(|(_, physics)| !physics.is_finite());
        if let Some((character, _)) = non_finite {
            return Err(Error::Serialization {
                path,
                message: format!("physics for {character:?} contain NaN or infinity"),
            });
        }

        let contents = serde_json::to_string_pretty(self).map_err(|err| Error::Serialization {
            path: path.clone(),
            message: err.to_string(),
        })?;

        std::fs::create_dir_all(directory).map_err(|err| Error::io(directory, err))?;
        std::fs::write(&path, contents).map_err(|err| Error::io(&path, err))
    }
}

fn lookup_mapping<R: Roster>(mapping: &BTreeMap<R, AllCharacters>, character: R) -> AllCharacters {
    mapping
        .get(&character)
        .copied()
        .unwrap_or_else(|| character.translate())
}
