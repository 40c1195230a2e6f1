use adventure_physics::character::{
    AllCharacters, HeroesCharacter, Roster, Sa2bCharacter, SadxCharacter,
};
use adventure_physics::config::Config;
use adventure_physics::discovery::{DefaultPhysicsSearch, DEFAULT_PHYSICS_FILE};
use adventure_physics::physics::AdventurePhysics;
use adventure_physics::table::PhysicsTable;
use adventure_physics::{ByteBuffer, Error};
use std::fs::{read, write};

/// Record `k` stores `k` in its jump timer and a distinct run speed.
fn sentinel_file() -> ByteBuffer {
    (0..AllCharacters::COUNT)
        .flat_map(|k| {
            AdventurePhysics {
                jump2_timer: k as i32,
                run_speed: 1.0 + k as f32,
                ..Default::default()
            }
            .write_to_buffer()
            .unwrap()
        })
        .collect()
}

#[test]
fn test_bootstrap_and_lookup() {
    let mod_dir = tempfile::tempdir().unwrap();
    write(mod_dir.path().join(DEFAULT_PHYSICS_FILE), sentinel_file()).unwrap();

    let search = DefaultPhysicsSearch {
        working_dir: Some(mod_dir.path().join("missing")),
        install_dir: Some(mod_dir.path().to_path_buf()),
    };

    let mut config = Config::default();
    config.initialize(&search).unwrap();

    // SadxAmy has ordinal 5
    assert_eq!(AllCharacters::SadxAmy.ordinal(), 5);
    assert_eq!(config.get_physics(SadxCharacter::Amy).unwrap().jump2_timer, 5);
    assert_eq!(config.get_physics(SadxCharacter::Amy).unwrap().run_speed, 6.0);

    for character in HeroesCharacter::ALL {
        let expected = config.resolve(*character).ordinal();
        assert_eq!(
            config.get_physics(*character).unwrap().jump2_timer,
            expected as i32
        );
    }
}

#[test]
fn test_export_import_round_trip() {
    let mod_dir = tempfile::tempdir().unwrap();
    let original = mod_dir.path().join("Original.bin");
    let exported = mod_dir.path().join("Exported.bin");
    write(&original, sentinel_file()).unwrap();

    let mut config = Config::default();
    config.import_file(&original).unwrap();

    // edit a profile, then make sure the edit survives a trip through the binary format
    config
        .physics
        .get_mut(AllCharacters::Sa2bChaos)
        .unwrap()
        .weight = 0.25;
    config.export_file(&exported).unwrap();

    let mut reimported = Config::default();
    reimported.import_file(&exported).unwrap();

    assert_eq!(reimported.physics, config.physics);
    assert_eq!(
        reimported.get_physics(Sa2bCharacter::Chaos).unwrap().weight,
        0.25
    );
    assert_eq!(read(&exported).unwrap().len(), read(&original).unwrap().len());
}

#[test]
fn test_failed_import_keeps_physics() {
    let mod_dir = tempfile::tempdir().unwrap();
    let good = mod_dir.path().join("Good.bin");
    let short = mod_dir.path().join("Short.bin");
    write(&good, sentinel_file()).unwrap();
    write(&short, &sentinel_file()[..AdventurePhysics::SIZE * 12]).unwrap();

    let mut config = Config::default();
    config.import_file(&good).unwrap();
    let before = config.physics.clone();

    assert!(matches!(
        config.import_file(&short),
        Err(Error::MalformedBuffer { .. })
    ));
    assert!(matches!(
        config.import_file(mod_dir.path().join("Nope.bin")),
        Err(Error::Io { .. })
    ));
    assert_eq!(config.physics, before);
}

#[cfg(feature = "json_config")]
#[test]
fn test_json_skips_default_file() {
    let mod_dir = tempfile::tempdir().unwrap();
    let config_dir = mod_dir.path().join("config");

    let mut config = Config::default();
    config.physics = PhysicsTable::from_existing(&sentinel_file()).unwrap();
    config.swap(HeroesCharacter::Big, AllCharacters::SadxBig);
    config.to_json(&config_dir).unwrap();

    // physics come from the json, so no default file is needed
    let mut loaded = Config::from_json(&config_dir).unwrap();
    loaded
        .initialize(&DefaultPhysicsSearch::in_directory(mod_dir.path()))
        .unwrap();

    assert_eq!(loaded, config);
    assert_eq!(loaded.get_physics(HeroesCharacter::Big).unwrap().jump2_timer, 7);
}
