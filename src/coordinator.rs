//! Scroll event coordination.
//!
//! Bridges raw scroll samples to the [`SectionActivator`] through a
//! [`Debouncer`], so only the last sample of a burst is acted on.

use crate::activator::{SectionActivator, SectionSurface};
use crate::config::StoryConfig;
use crate::debounce::{Debouncer, Scheduler};
use crate::types::ScrollSample;

/// Owns the sections, the scheduler and the pending scroll sample.
pub struct ScrollCoordinator<S, T: Scheduler> {
    surface: S,
    scheduler: T,
    activator: SectionActivator,
    debouncer: Debouncer<ScrollSample, T::Handle>,
    active: Option<usize>,
}

impl<S: SectionSurface, T: Scheduler> ScrollCoordinator<S, T> {
    pub fn new(surface: S, scheduler: T, config: &StoryConfig) -> Self {
        Self::with_settings(surface, scheduler, config.debounce_ms, config.buffer_ratio)
    }

    pub fn with_settings(surface: S, scheduler: T, debounce_ms: u32, buffer_ratio: f64) -> Self {
        Self {
            surface,
            scheduler,
            activator: SectionActivator::new(buffer_ratio),
            debouncer: Debouncer::new(debounce_ms),
            active: None,
        }
    }

    /// A scroll notification arrived.
    ///
    /// The sample replaces any pending one. If the scheduler refuses the
    /// deferred task the selection runs immediately.
    pub fn on_scroll(&mut self, sample: ScrollSample) {
        tracing::trace!(y = sample.y(), h = sample.h(), "scroll notification");
        if !self.debouncer.call(&mut self.scheduler, sample) {
            self.on_timer();
        }
    }

    /// The debounce task fired: select using the latest sample.
    pub fn on_timer(&mut self) -> Option<usize> {
        let sample = self.debouncer.fire()?;
        self.select(sample)
    }

    /// Select and mark the active section for `sample` right away.
    pub fn select(&mut self, sample: ScrollSample) -> Option<usize> {
        let index = self
            .activator
            .select_active_on_scroll(&mut self.surface, sample)?;
        self.active = Some(index);
        Some(index)
    }

    /// Drop the pending selection, if any.
    pub fn cancel(&mut self) {
        if self.debouncer.cancel(&mut self.scheduler).is_some() {
            tracing::trace!("pending selection cancelled");
        }
    }

    /// Mark `index` active directly, bypassing the scroll rule.
    pub fn set_active(&mut self, index: usize) -> bool {
        let applied = SectionActivator::set_active(&mut self.surface, index);
        if applied {
            self.active = Some(index);
        }
        applied
    }

    /// Last index marked active; `None` before the first selection.
    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn scheduler(&self) -> &T {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut T {
        &mut self.scheduler
    }
}
