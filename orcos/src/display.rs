//! Display facade

use orcos_core::{PowerController, PowerEvent, PowerRails, PowerState, ScreenTag, TickOutcome};
use orcos_display::transmitter::FULL_FRAME_CHUNK;
use orcos_display::{
    BitOrder, BlitOp, Color, DisplayError, FillValue, FontId, Framebuffer, Transmitter,
    LINE_FRAME_LEN,
};
use orcos_hal::{DelayUs, OutputPin, RealTimeClock, SpiBus, WakeSource};

use crate::config::Config;

/// Sharp Memory LCD with its power rails
///
/// Drawing calls only touch the in-memory framebuffer; nothing reaches the
/// panel until [`Display::refresh`]. `CAP` sets the refresh chunk size (see
/// [`orcos_display::chunk_buffer_len`]) and defaults to one transfer per
/// frame.
///
/// Type parameters: `S` SPI bus, `C` chip-select, `D` delay, `B`/`E`/`X`
/// boost/DISP/EXTCOMIN pins, `W` wake source, `R` real-time clock.
pub struct Display<'a, S, C, D, B, E, X, W, R, const CAP: usize = FULL_FRAME_CHUNK> {
    fb: Framebuffer,
    tx: Transmitter<S, C, D, CAP>,
    power: PowerController<'a, B, E, X, W, D>,
    pub(crate) rtc: R,
}

impl<'a, S, C, D, B, E, X, W, R, const CAP: usize> Display<'a, S, C, D, B, E, X, W, R, CAP>
where
    S: SpiBus,
    C: OutputPin,
    D: DelayUs + Clone,
    B: OutputPin,
    E: OutputPin,
    X: OutputPin,
    W: WakeSource,
    R: RealTimeClock,
{
    /// Create a display; the panel stays unpowered until [`Display::power_on`]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        state: &'a PowerState,
        spi: S,
        cs: C,
        delay: D,
        rails: PowerRails<B, E, X>,
        wake: W,
        rtc: R,
        config: Config,
    ) -> Self {
        let tx = Transmitter::new(spi, cs, delay.clone(), config.link);
        let power = PowerController::new(state, rails, wake, delay, config.power);
        Self {
            fb: Framebuffer::new(),
            tx,
            power,
            rtc,
        }
    }

    // ---- Power ----

    /// Energize the panel and start the wake tick
    pub fn power_on(&mut self) {
        self.power.power_on();
    }

    /// Switch the panel off, blanking it first with `clear`
    pub fn power_off(&mut self, clear: bool) -> Result<(), DisplayError> {
        self.power.power_off(clear, &mut self.tx)
    }

    /// Check if the panel is energized
    pub fn is_on(&self) -> bool {
        self.power.is_on()
    }

    /// Restart the idle timeout; call on every key press
    pub fn keep_alive(&self) {
        self.power.state().keep_alive();
    }

    /// Handle a periodic wake event
    pub fn on_wake_tick(&mut self) -> TickOutcome {
        self.power.on_wake_tick(&mut self.tx)
    }

    /// Handle the pending power notification, if any
    ///
    /// A redraw request re-renders the live screen and refreshes the panel.
    /// Returns the event that was handled.
    pub fn service(&mut self) -> Result<Option<PowerEvent>, DisplayError> {
        let event = self.power.state().take_event();
        match event {
            Some(PowerEvent::Redraw) => {
                if self.is_on() && self.screen().is_live() {
                    self.render_live_clock();
                    self.refresh()?;
                }
            }
            Some(PowerEvent::AutoOff) => {
                debug!("display switched off after idle timeout");
            }
            None => {}
        }
        Ok(event)
    }

    /// Screen currently on the panel
    pub fn screen(&self) -> ScreenTag {
        self.power.state().screen()
    }

    /// Record which screen is on the panel
    ///
    /// The application sets [`ScreenTag::Application`] when it takes the
    /// panel back from a test screen.
    pub fn set_screen(&mut self, screen: ScreenTag) {
        self.power.state().set_screen(screen);
    }

    // ---- Drawing ----

    /// Draw an MSB-first image
    pub fn draw_image(&mut self, img: &[u8], width: usize, height: usize, x: i32, y: i32, color: Color) {
        self.draw_image_with_order(img, width, height, x, y, color, BitOrder::MsbFirst);
    }

    /// Draw an image whose bytes use the given bit order
    #[allow(clippy::too_many_arguments)]
    pub fn draw_image_with_order(
        &mut self,
        img: &[u8],
        width: usize,
        height: usize,
        x: i32,
        y: i32,
        color: Color,
        order: BitOrder,
    ) {
        self.fb.draw_image(img, width, height, x, y, color, order);
    }

    /// Draw text in font `font_id`
    ///
    /// Returns the cursor after the text, or `None` when the font id is
    /// unknown and nothing was drawn.
    pub fn draw_string_at(&mut self, text: &str, font_id: u8, x: i32, y: i32, color: Color) -> Option<i32> {
        let Some(font) = FontId::from_raw(font_id) else {
            warn!("unknown font id {}", font_id);
            return None;
        };
        Some(self.fb.draw_string(text, font.font(), x, y, color))
    }

    /// Fill a rectangle, clipped to the screen
    pub fn fill_rect(&mut self, x: i32, y: i32, width: usize, height: usize, value: FillValue) {
        self.fb.fill_rect(x, y, width, height, value);
    }

    /// Combine a run of up to 24 bits into one row
    ///
    /// See [`Framebuffer::bitblt24`] for how `op` and `fill` apply.
    pub fn bitblt24(&mut self, x: i32, dx: u8, y: i32, val: u32, op: BlitOp, fill: bool) {
        self.fb.bitblt24(x, dx, y, val, op, fill);
    }

    /// Invert every pixel of the framebuffer
    pub fn invert(&mut self) {
        self.fb.invert();
    }

    /// Paint the whole framebuffer in `color`
    pub fn fill(&mut self, color: Color) {
        self.fb.fill(color);
    }

    /// Clear the framebuffer to white (the panel is untouched)
    pub fn clear_buffer(&mut self) {
        self.fb.clear();
    }

    /// Draw a checkerboard of `square`-pixel squares
    pub fn test_pattern(&mut self, square: usize) {
        self.fb.test_pattern(square);
    }

    /// Read-only framebuffer access
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.fb
    }

    /// Direct framebuffer access, e.g. for `embedded-graphics`
    pub fn framebuffer_mut(&mut self) -> &mut Framebuffer {
        &mut self.fb
    }

    // ---- Panel ----

    /// Send the framebuffer to the panel
    pub fn refresh(&mut self) -> Result<(), DisplayError> {
        self.tx.refresh(&self.fb)
    }

    /// Send one caller-prepared line
    pub fn write_line(&mut self, frame: &mut [u8; LINE_FRAME_LEN]) -> Result<(), DisplayError> {
        self.tx.write_line(frame)
    }

    /// Release the peripherals
    pub fn release(self) -> (Transmitter<S, C, D, CAP>, PowerController<'a, B, E, X, W, D>, R) {
        (self.tx, self.power, self.rtc)
    }
}
