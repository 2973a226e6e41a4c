// SPDX-License-Identifier: MIT OR Apache-2.0

use bitflags::bitflags;

bitflags! {
    /// Work requested from the host after an event was handled.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Update: u8 {
        /// The scene needs to be redrawn.
        const DRAW = 0b01;
        /// Geometry needs to be recomputed before the next draw.
        const LAYOUT = 0b10;
    }
}
