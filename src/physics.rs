// SPDX-FileCopyrightText: 2025 Adventure Physics Swap Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use std::io::Cursor;

use binrw::binrw;
use binrw::{BinRead, BinWrite};
#[cfg(feature = "json_config")]
use serde::{Deserialize, Serialize};

use crate::{ByteBuffer, ByteSpan};

/// The player parameter block shared by the Adventure-engine games.
///
/// Speeds are in units per frame, and every value is stored little-endian.
#[binrw]
#[brw(little)]
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "json_config", derive(Serialize, Deserialize))]
pub struct AdventurePhysics {
    /// How many frames the jump button can be held to extend a jump.
    pub jump2_timer: i32,
    pub pos_error: f32,
    /// Horizontal speed cap.
    pub lim_h_spd: f32,
    pub lim_v_spd: f32,
    pub max_x_spd: f32,
    pub max_psh_spd: f32,
    /// Initial vertical speed of a jump.
    pub jmp_y_spd: f32,
    pub nocon_speed: f32,
    pub slide_speed: f32,
    pub jog_speed: f32,
    pub run_speed: f32,
    pub rush_speed: f32,
    pub crash_speed: f32,
    pub dash_speed: f32,
    pub jmp_addit: f32,
    pub run_accel: f32,
    pub air_accel: f32,
    pub slow_down: f32,
    pub run_break: f32,
    pub air_break: f32,
    pub air_resist_air: f32,
    pub air_resist: f32,
    pub air_resist_y: f32,
    pub air_resist_z: f32,
    pub grd_frict: f32,
    pub grd_frict_z: f32,
    pub lim_frict: f32,
    pub rat_bound: f32,
    /// Collision radius.
    pub rad: f32,
    pub height: f32,
    pub weight: f32,
    pub eyes_height: f32,
    pub center_height: f32,
}

const _: () = assert!(std::mem::size_of::<AdventurePhysics>() == AdventurePhysics::SIZE);

impl AdventurePhysics {
    /// Size of a single record in a physics file.
    pub const SIZE: usize = 0x84;

    /// Reads a single record from the start of `buffer`.
    pub fn from_existing(buffer: ByteSpan) -> Option<AdventurePhysics> {
        let mut cursor = Cursor::new(buffer);

        AdventurePhysics::read(&mut cursor).ok()
    }

    /// Whether every float in the record is a real number, and not NaN or infinity.
    pub fn is_finite(&self) -> bool {
        [
            self.pos_error,
            self.lim_h_spd,
            self.lim_v_spd,
            self.max_x_spd,
            self.max_psh_spd,
            self.jmp_y_spd,
            self.nocon_speed,
            self.slide_speed,
            self.jog_speed,
            self.run_speed,
            self.rush_speed,
            self.crash_speed,
            self.dash_speed,
            self.jmp_addit,
            self.run_accel,
            self.air_accel,
            self.slow_down,
            self.run_break,
            self.air_break,
            self.air_resist_air,
            self.air_resist,
            self.air_resist_y,
            self.air_resist_z,
            self.grd_frict,
            self.grd_frict_z,
            self.lim_frict,
            self.rat_bound,
            self.rad,
            self.height,
            self.weight,
            self.eyes_height,
            self.center_height,
        ]
        .iter()
        .all(|x| x.is_finite())
    }

    /// Writes the record back to a buffer.
    pub fn write_to_buffer(&self) -> Option<ByteBuffer> {
        let mut buffer = ByteBuffer::with_capacity(Self::SIZE);

        {
            let mut cursor = Cursor::new(&mut buffer);
            self.write(&mut cursor).ok()?;
        }

        Some(buffer)
    }
}
