//! Rail sequencing and the wake tick

use orcos_hal::{DelayUs, OutputPin, WakeSource};

use super::state::{PowerEvent, PowerState, TickOutcome};
use super::fatal;
use crate::config::PowerConfig;
use crate::traits::PanelLink;

/// Output pins that power the panel
pub struct PowerRails<B, E, X> {
    /// 5 V boost converter enable
    pub boost: B,
    /// Panel DISP enable
    pub disp: E,
    /// EXTCOMIN polarity inversion input
    pub extcomin: X,
}

impl<B: OutputPin, E: OutputPin, X: OutputPin> PowerRails<B, E, X> {
    /// Take the pins and drive them all low (panel unpowered)
    pub fn new(mut boost: B, mut disp: E, mut extcomin: X) -> Self {
        extcomin.set_low();
        disp.set_low();
        boost.set_low();
        Self {
            boost,
            disp,
            extcomin,
        }
    }
}

/// Display power controller
///
/// Drives the rails in datasheet order and runs the idle timeout on the
/// periodic wake tick. The shared [`PowerState`] is borrowed so the input
/// layer can call [`PowerState::keep_alive`] without going through the
/// controller.
pub struct PowerController<'a, B, E, X, W, D> {
    state: &'a PowerState,
    rails: PowerRails<B, E, X>,
    wake: W,
    delay: D,
    config: PowerConfig,
}

impl<'a, B, E, X, W, D> PowerController<'a, B, E, X, W, D>
where
    B: OutputPin,
    E: OutputPin,
    X: OutputPin,
    W: WakeSource,
    D: DelayUs,
{
    /// Create a controller for an unpowered panel
    pub fn new(
        state: &'a PowerState,
        rails: PowerRails<B, E, X>,
        wake: W,
        delay: D,
        config: PowerConfig,
    ) -> Self {
        Self {
            state,
            rails,
            wake,
            delay,
            config,
        }
    }

    /// Shared power state
    pub fn state(&self) -> &'a PowerState {
        self.state
    }

    /// Timeout and timing configuration
    pub fn config(&self) -> &PowerConfig {
        &self.config
    }

    /// Power rail pins, for inspecting their levels
    pub fn rails(&self) -> &PowerRails<B, E, X> {
        &self.rails
    }

    /// Periodic wake source
    pub fn wake(&self) -> &W {
        &self.wake
    }

    /// Check if the display is energized
    pub fn is_on(&self) -> bool {
        self.state.is_on()
    }

    /// Energize the panel and start the wake tick
    ///
    /// Does nothing if the display is already on. A wake source that cannot
    /// be armed is fatal: without it EXTCOMIN stops toggling and the panel
    /// would be damaged by DC bias.
    pub fn power_on(&mut self) {
        if self.state.is_on() {
            return;
        }

        info!("display power on");
        self.rails.boost.set_high();
        self.settle();
        self.rails.disp.set_high();

        if let Err(e) = self.wake.arm(self.config.wake_period_ms) {
            error!("wake source arm failed: {}", e);
            fatal("wake source");
        }

        self.state.mark_on();
    }

    /// Remove panel power
    ///
    /// With `clear`, the panel is blanked through `panel` first so no ghost
    /// image lingers while the liquid crystal discharges. The rail sequence
    /// always completes; a failed clear is reported afterwards.
    pub fn power_off<P: PanelLink>(&mut self, clear: bool, panel: &mut P) -> Result<(), P::Error> {
        info!("display power off (clear={})", clear);
        self.settle();

        let mut result = Ok(());
        if clear && self.state.is_on() {
            result = panel.clear_panel();
            self.settle();
        }

        self.rails.disp.set_low();
        self.settle();
        self.rails.extcomin.set_low();
        self.rails.boost.set_low();

        self.wake.disarm();
        self.state.mark_off();
        result
    }

    /// Handle one periodic wake event
    ///
    /// Toggles EXTCOMIN, posts a redraw for live screens and counts the tick
    /// against the idle timeout. On timeout the display is powered off with
    /// a clear and [`PowerEvent::AutoOff`] is posted.
    pub fn on_wake_tick<P: PanelLink>(&mut self, panel: &mut P) -> TickOutcome {
        if !self.state.is_on() {
            return TickOutcome::Ignored;
        }

        self.rails.extcomin.toggle();

        let outcome = self.state.count_tick(self.config.effective_timeout());
        if outcome == TickOutcome::TimedOut {
            info!("idle timeout, switching display off");
            if self.power_off(true, panel).is_err() {
                warn!("panel clear failed during auto-off");
            }
            self.state.notify(PowerEvent::AutoOff);
        }
        outcome
    }

    /// Release the pins, wake source and delay
    pub fn release(self) -> (PowerRails<B, E, X>, W, D) {
        (self.rails, self.wake, self.delay)
    }

    fn settle(&mut self) {
        self.delay.delay_us(self.config.rail_settle_us);
    }
}
