use bitflags::bitflags;

bitflags! {
    /// Update flags a widget raises towards its host.
    ///
    /// Hosts drain these after feeding input or calling setters and schedule work accordingly.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Update: u8 {
        /// The widget needs to be redrawn.
        const DRAW = 0b0001;
        /// The widget value changed.
        const VALUE = 0b0010;
    }
}

impl Update {
    /// Returns `true` if a redraw was requested.
    pub fn needs_draw(&self) -> bool {
        self.contains(Update::DRAW)
    }

    /// Returns `true` if the widget value changed.
    pub fn value_changed(&self) -> bool {
        self.contains(Update::VALUE)
    }
}
