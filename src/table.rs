// SPDX-FileCopyrightText: 2025 Adventure Physics Swap Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use std::collections::BTreeMap;
use std::io::Cursor;
use std::path::Path;

use binrw::BinRead;
use tracing::{debug, warn};

use crate::character::AllCharacters;
use crate::error::Error;
use crate::physics::AdventurePhysics;
use crate::{ByteBuffer, ByteSpan};

/// Decodes a physics file into one record per character, in file order.
///
/// The buffer has to be a whole number of records, and hold at least one record for every
/// character. Records past the end of the roster are ignored.
pub fn decode_records(buffer: ByteSpan) -> Result<Vec<AdventurePhysics>, Error> {
    let malformed = || Error::MalformedBuffer {
        length: buffer.len(),
        record_size: AdventurePhysics::SIZE,
        expected_records: AllCharacters::COUNT,
    };

    if buffer.len() % AdventurePhysics::SIZE != 0 {
        return Err(malformed());
    }

    let available = buffer.len() / AdventurePhysics::SIZE;
    if available < AllCharacters::COUNT {
        return Err(malformed());
    }

    if available > AllCharacters::COUNT {
        warn!(
            available,
            expected = AllCharacters::COUNT,
            "Ignoring physics records past the end of the roster"
        );
    }

    let mut cursor = Cursor::new(buffer);
    let mut records = Vec::with_capacity(AllCharacters::COUNT);
    for _ in 0..AllCharacters::COUNT {
        records.push(AdventurePhysics::read(&mut cursor).map_err(|_| malformed())?);
    }

    Ok(records)
}

/// The physics profile of every character, as read from a physics file (DefaultPhysics.bin).
///
/// A table is either empty, or has a profile for every character.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "json_config",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        try_from = "BTreeMap<AllCharacters, AdventurePhysics>",
        into = "BTreeMap<AllCharacters, AdventurePhysics>"
    )
)]
pub struct PhysicsTable {
    entries: BTreeMap<AllCharacters, AdventurePhysics>,
}

impl PhysicsTable {
    /// Creates a new, empty table.
    pub fn new() -> PhysicsTable {
        PhysicsTable::default()
    }

    /// Parses an existing physics file.
    pub fn from_existing(buffer: ByteSpan) -> Result<PhysicsTable, Error> {
        let mut table = PhysicsTable::new();
        table.import(buffer)?;

        Ok(table)
    }

    /// Replaces every profile with the ones in `buffer`.
    ///
    /// If `buffer` is invalid, the table is left exactly as it was.
    pub fn import(&mut self, buffer: ByteSpan) -> Result<(), Error> {
        let records = decode_records(buffer)?;

        // WARNING: the order of AllCharacters must match the binary file!
        self.entries = AllCharacters::ALL.iter().copied().zip(records).collect();

        debug!(records = self.entries.len(), "Imported physics table");

        Ok(())
    }

    /// Replaces every profile with the ones in the physics file at `path`.
    pub fn import_file(&mut self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Importing physics file");

        let buffer = std::fs::read(path).map_err(|err| Error::io(path, err))?;

        self.import(&buffer)
    }

    /// Writes the table back to the physics file layout.
    pub fn write_to_buffer(&self) -> Result<ByteBuffer, Error> {
        if !self.is_populated() {
            return Err(Error::Unpopulated);
        }

        let mut buffer = ByteBuffer::with_capacity(AllCharacters::COUNT * AdventurePhysics::SIZE);

        for character in AllCharacters::ALL {
            let record = self
                .get(character)?
                .write_to_buffer()
                .ok_or(Error::EncodingFailed { character })?;
            buffer.extend_from_slice(&record);
        }

        Ok(buffer)
    }

    /// Whether a physics file has been imported.
    pub fn is_populated(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Returns the profile for `character`.
    pub fn get(&self, character: AllCharacters) -> Result<&AdventurePhysics, Error> {
        self.entries.get(&character).ok_or(Error::Unpopulated)
    }

    /// Returns the profile for `character`, for editing.
    pub fn get_mut(&mut self, character: AllCharacters) -> Result<&mut AdventurePhysics, Error> {
        self.entries.get_mut(&character).ok_or(Error::Unpopulated)
    }

    /// Overwrites the profile for `character`.
    pub fn set(&mut self, character: AllCharacters, physics: AdventurePhysics) -> Result<(), Error> {
        *self.get_mut(character)? = physics;

        Ok(())
    }

    /// Iterates over every profile in file order.
    pub fn iter(&self) -> impl Iterator<Item = (AllCharacters, &AdventurePhysics)> {
        self.entries.iter().map(|(character, physics)| (*character, physics))
    }
}

impl TryFrom<BTreeMap<AllCharacters, AdventurePhysics>> for PhysicsTable {
    type Error = Error;

    fn try_from(entries: BTreeMap<AllCharacters, AdventurePhysics>) -> Result<Self, Self::Error> {
        if !entries.is_empty() && entries.len() != AllCharacters::COUNT {
            let missing = AllCharacters::ALL
                .iter()
                .copied()
                .filter(|character| !entries.contains_key(character))
                .collect();
            return Err(Error::IncompleteTable { missing });
        }

        Ok(PhysicsTable { entries })
    }
}

impl From<PhysicsTable> for BTreeMap<AllCharacters, AdventurePhysics> {
    fn from(table: PhysicsTable) -> Self {
        table.entries
    }
}

#[cfg(test)]
mod tests {
    use std::fs::read;
    use std::path::PathBuf;

    use super::*;

    /// Builds a physics file where every record stores its own index.
    fn sentinel_buffer(records: usize) -> ByteBuffer {
        let mut buffer = ByteBuffer::new();
        for i in 0..records {
            let physics = AdventurePhysics {
                jump2_timer: i as i32,
                run_speed: i as f32 * 0.5,
                ..Default::default()
            };
            buffer.extend(physics.write_to_buffer().unwrap());
        }
        buffer
    }

    #[test]
    fn test_ordinal_order() {
        let table = PhysicsTable::from_existing(&sentinel_buffer(AllCharacters::COUNT)).unwrap();

        for (i, character) in AllCharacters::ALL.iter().enumerate() {
            let physics = table.get(*character).unwrap();
            assert_eq!(physics.jump2_timer, i as i32);
            assert_eq!(physics.run_speed, i as f32 * 0.5);
        }
    }

    #[test]
    fn test_write() {
        let buffer = sentinel_buffer(AllCharacters::COUNT);
        let table = PhysicsTable::from_existing(&buffer).unwrap();

        assert_eq!(table.write_to_buffer().unwrap(), buffer);

        let reread = PhysicsTable::from_existing(&table.write_to_buffer().unwrap()).unwrap();
        assert_eq!(reread, table);
    }

    #[test]
    fn test_undersized() {
        let mut table = PhysicsTable::from_existing(&sentinel_buffer(AllCharacters::COUNT)).unwrap();
        let before = table.clone();

        let short = sentinel_buffer(AllCharacters::COUNT - 1);
        assert_eq!(
            table.import(&short),
            Err(Error::MalformedBuffer {
                length: short.len(),
                record_size: AdventurePhysics::SIZE,
                expected_records: AllCharacters::COUNT,
            })
        );

        // nothing is committed on failure
        assert_eq!(table, before);
    }

    #[test]
    fn test_misaligned() {
        let mut buffer = sentinel_buffer(AllCharacters::COUNT);
        buffer.push(0);

        assert!(matches!(
            PhysicsTable::from_existing(&buffer),
            Err(Error::MalformedBuffer { .. })
        ));
    }

    #[test]
    fn test_empty_buffer() {
        assert!(matches!(
            PhysicsTable::from_existing(&[]),
            Err(Error::MalformedBuffer { .. })
        ));
    }

    #[test]
    fn test_trailing_records() {
        let table = PhysicsTable::from_existing(&sentinel_buffer(AllCharacters::COUNT + 2)).unwrap();

        assert_eq!(table.iter().count(), AllCharacters::COUNT);
        assert_eq!(
            table.write_to_buffer().unwrap(),
            sentinel_buffer(AllCharacters::COUNT)
        );
    }

    #[test]
    fn test_unpopulated() {
        let table = PhysicsTable::new();

        assert!(!table.is_populated());
        assert_eq!(table.get(AllCharacters::SadxSonic), Err(Error::Unpopulated));
        assert_eq!(table.write_to_buffer(), Err(Error::Unpopulated));
    }

    #[test]
    fn test_set() {
        let mut table = PhysicsTable::new();
        assert_eq!(
            table.set(AllCharacters::HeroesBig, AdventurePhysics::default()),
            Err(Error::Unpopulated)
        );

        table.import(&sentinel_buffer(AllCharacters::COUNT)).unwrap();

        let sonic = *table.get(AllCharacters::SadxSonic).unwrap();
        table.set(AllCharacters::HeroesBig, sonic).unwrap();

        assert_eq!(table.get(AllCharacters::HeroesBig).unwrap(), &sonic);
        assert_eq!(
            table.get(AllCharacters::HeroesCharmy).unwrap().jump2_timer,
            AllCharacters::HeroesCharmy.ordinal() as i32
        );
    }

    #[test]
    fn test_partial_map() {
        let mut entries = BTreeMap::new();
        entries.insert(AllCharacters::SadxSonic, AdventurePhysics::default());

        let Err(Error::IncompleteTable { missing }) = PhysicsTable::try_from(entries) else {
            panic!("a partial table should be rejected");
        };
        assert_eq!(missing.len(), AllCharacters::COUNT - 1);
        assert_eq!(missing[0], AllCharacters::SadxEggman);
        assert!(!missing.contains(&AllCharacters::SadxSonic));
        assert_eq!(
            PhysicsTable::try_from(BTreeMap::new()).unwrap(),
            PhysicsTable::new()
        );
    }

    #[test]
    fn test_invalid() {
        let mut d = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        d.push("resources/tests");
        d.push("random");

        // Feeding it invalid data should not panic
        let _ = PhysicsTable::from_existing(&read(d).unwrap());
    }
}
