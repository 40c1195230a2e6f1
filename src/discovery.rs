// SPDX-FileCopyrightText: 2025 Adventure Physics Swap Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::Error;

/// File name of the physics file shipped alongside the mod.
pub const DEFAULT_PHYSICS_FILE: &str = "DefaultPhysics.bin";

/// Lists where the default physics file may be, in the order they should be tried.
///
/// The working directory comes first, then the directory the program was installed to. Without
/// a known working directory the file name is used as a relative path.
pub fn default_physics_candidates(
    working_dir: Option<&Path>,
    install_dir: Option<&Path>,
) -> Vec<PathBuf> {
    let mut candidates = vec![match working_dir {
        Some(dir) => dir.join(DEFAULT_PHYSICS_FILE),
        None => PathBuf::from(DEFAULT_PHYSICS_FILE),
    }];

    if let Some(dir) = install_dir {
        candidates.push(dir.join(DEFAULT_PHYSICS_FILE));
    }

    candidates
}

/// The locations searched for the default physics file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefaultPhysicsSearch {
    /// The directory the program is running in.
    pub working_dir: Option<PathBuf>,
    /// The directory containing the running program.
    pub install_dir: Option<PathBuf>,
}

impl DefaultPhysicsSearch {
    /// Searches the current working directory, then the directory of the running executable.
    pub fn from_environment() -> DefaultPhysicsSearch {
        DefaultPhysicsSearch {
            working_dir: std::env::current_dir().ok(),
            install_dir: std::env::current_exe()
                .ok()
                .and_then(|exe| exe.parent().map(Path::to_path_buf)),
        }
    }

    /// Searches a single directory, such as a mod folder.
    pub fn in_directory(dir: impl Into<PathBuf>) -> DefaultPhysicsSearch {
        DefaultPhysicsSearch {
            working_dir: Some(dir.into()),
            install_dir: None,
        }
    }

    /// Every path [`find`](Self::find) checks, in search order.
    pub fn candidates(&self) -> Vec<PathBuf> {
        default_physics_candidates(self.working_dir.as_deref(), self.install_dir.as_deref())
    }

    /// Returns the first candidate that exists on disk.
    pub fn find(&self) -> Result<PathBuf, Error> {
        let candidates = self.candidates();

        if let Some(found) = candidates.iter().find(|path| path.is_file()) {
            debug!(path = %found.display(), "Found default physics file");
            return Ok(found.clone());
        }

        warn!("Default physics file not found.");
        Err(Error::ResourceNotFound { candidates })
    }
}
