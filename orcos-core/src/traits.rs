//! Traits implemented by the display side
//!
//! The power controller needs exactly one thing from the panel link: the
//! ability to blank the panel before the rails go down.

/// Command link to the panel
pub trait PanelLink {
    /// Link error type
    type Error;

    /// Send the "clear all pixels" command to the panel
    fn clear_panel(&mut self) -> Result<(), Self::Error>;
}

impl<P: PanelLink + ?Sized> PanelLink for &mut P {
    type Error = P::Error;

    fn clear_panel(&mut self) -> Result<(), Self::Error> {
        (**self).clear_panel()
    }
}
