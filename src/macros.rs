// SPDX-FileCopyrightText: 2025 Adventure Physics Swap Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

/// Creates a roster enum for a single game, and its default translation into `AllCharacters`.
/// For example, `Sonic` in a roster with the `Sadx` prefix translates to `AllCharacters::SadxSonic`.
///
/// Every roster member needs a matching unified variant, otherwise the translation won't compile.
macro_rules! define_roster {
    (
        $(#[$meta:meta])*
        pub enum $name:ident => $prefix:ident {
            $(
                $(#[$variant_meta:meta])*
                $character:ident
            ),+$(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "json_config", derive(serde::Serialize, serde::Deserialize))]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $character,
            )+
        }

        ::paste::paste! {
            impl $crate::character::Roster for $name {
                const ALL: &'static [$name] = &[$($name::$character,)+];

                fn translate(self) -> $crate::character::AllCharacters {
                    match self {
                        $($name::$character => $crate::character::AllCharacters::[<$prefix $character>],)+
                    }
                }
            }
        }
    };
}
