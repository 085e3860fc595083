use bitflags::bitflags;

bitflags! {
    /// Flags a widget returns from its update pass to tell the host what
    /// needs to happen before the next frame.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Update: u8 {
        /// The widget needs to be redrawn.
        const DRAW = 0b0001;
        /// The layout tree changed and must be recomputed.
        const LAYOUT = 0b0010;
        /// Force a full redraw and layout pass.
        const FORCE = Self::DRAW.bits() | Self::LAYOUT.bits();
    }
}
