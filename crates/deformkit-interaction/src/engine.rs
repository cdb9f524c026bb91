//! Interaction engine.
//!
//! Owns one contour, the controllers bound to it and the limitators that
//! constrain them, and drives every gesture through the contour's
//! transaction stack:
//!
//! ```text
//! pan_start   save                                  gesture-start rollback point
//! pan_move    restore, save, handlers               every step starts from the gesture start
//! pan_end     restore, save, handlers, apply        flush
//!
//! handler     save, apply edit
//!             accepted        -> pop, remember value
//!             adjusted        -> pop
//!             otherwise       -> restore, replay last accepted value
//! ```
//!
//! Movements in editor events are cumulative since `pan_start`, so a rejected
//! step never leaves drift behind.

use std::collections::HashMap;
use std::sync::Arc;

use deformkit_contour::{Contour, ContourShape};
use deformkit_core::{Error, Result};
use deformkit_settings::DeformerConfig;
use tracing::{debug, info, trace};
use uuid::Uuid;

use crate::controller::{default_controllers, Controller, EditValue};
use crate::event::{DeformerEvent, EditorEvent, MultiFrameSnapshot};
use crate::limitator::{Limitator, LimitatorKind};
use crate::listener::{DeformerListener, ListenerHandle};
use crate::render::HandleRenderer;

/// Scratch state of the running gesture.
#[derive(Debug)]
struct GestureState {
    /// Index of the controller that owns the gesture.
    controller: usize,
    /// Last accepted value per handler.
    cache: HashMap<&'static str, EditValue>,
}

/// Drives gestures on one contour.
pub struct Interaction {
    contour: Contour,
    config: DeformerConfig,
    /// Sorted by descending z-index; equal z-indices keep insertion order.
    controllers: Vec<Box<dyn Controller>>,
    limitators: Vec<Box<dyn Limitator>>,
    hovered: Option<usize>,
    /// Indices of the limitators governing the hovered controller.
    active: Vec<usize>,
    cursor: Option<String>,
    gesture: Option<GestureState>,
    listeners: Vec<(ListenerHandle, Arc<dyn DeformerListener>)>,
    attached: bool,
}

impl Interaction {
    /// Engine without controllers.
    pub fn new(contour: Contour, config: DeformerConfig) -> Self {
        Self {
            contour,
            config,
            controllers: Vec::new(),
            limitators: Vec::new(),
            hovered: None,
            active: Vec::new(),
            cursor: None,
            gesture: None,
            listeners: Vec::new(),
            attached: false,
        }
    }

    /// Engine with the standard controller set for the contour's shape.
    pub fn with_default_controllers(contour: Contour, config: DeformerConfig) -> Self {
        let controllers = default_controllers(&contour, &config);
        let mut interaction = Self::new(contour, config);
        for controller in controllers {
            interaction.add_controller(controller);
        }
        interaction
    }

    pub fn attach(&mut self) -> Result<()> {
        if self.attached {
            return Err(Error::AlreadyAttached);
        }
        self.attached = true;
        info!(
            shape = %self.contour.kind(),
            controllers = self.controllers.len(),
            "interaction attached"
        );
        Ok(())
    }

    /// Detaches, ending a running gesture and clearing hover.
    pub fn detach(&mut self) -> Result<()> {
        if !self.attached {
            return Err(Error::NotAttached);
        }
        self.cancel();
        self.set_hover(None);
        self.attached = false;
        info!("interaction detached");
        Ok(())
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn contour(&self) -> &Contour {
        &self.contour
    }

    pub fn config(&self) -> &DeformerConfig {
        &self.config
    }

    pub fn controllers(&self) -> impl Iterator<Item = &dyn Controller> {
        self.controllers.iter().map(|c| c.as_ref())
    }

    /// Inserts a controller by z-index and returns its id.
    ///
    /// Changing the controller set ends a running gesture.
    pub fn add_controller(&mut self, controller: Box<dyn Controller>) -> String {
        self.cancel();
        let id = controller.id().to_string();
        let z = controller.z_index();
        let position = self
            .controllers
            .iter()
            .position(|c| c.z_index() < z)
            .unwrap_or(self.controllers.len());
        debug!(id = %id, kind = %controller.kind(), z, position, "controller added");
        self.controllers.insert(position, controller);
        if let Some(hovered) = self.hovered.as_mut() {
            if *hovered >= position {
                *hovered += 1;
            }
        }
        id
    }

    /// Removes a controller by id.
    ///
    /// Changing the controller set ends a running gesture.
    pub fn remove_controller(&mut self, id: &str) -> Result<Box<dyn Controller>> {
        let index = self
            .controllers
            .iter()
            .position(|c| c.id() == id)
            .ok_or_else(|| Error::UnknownController(id.to_string()))?;
        self.cancel();
        match self.hovered {
            Some(hovered) if hovered == index => self.set_hover(None),
            Some(hovered) if hovered > index => self.hovered = Some(hovered - 1),
            _ => {}
        }
        debug!(id, "controller removed");
        Ok(self.controllers.remove(index))
    }

    pub fn add_limitator(&mut self, limitator: Box<dyn Limitator>) {
        debug!(kind = %limitator.kind(), "limitator added");
        self.limitators.push(limitator);
        self.refresh_active();
    }

    /// Kinds of the limitators governing the hovered controller.
    pub fn active_limitators(&self) -> Vec<LimitatorKind> {
        self.active
            .iter()
            .map(|&i| self.limitators[i].kind())
            .collect()
    }

    pub fn subscribe(&mut self, listener: Arc<dyn DeformerListener>) -> ListenerHandle {
        let handle = ListenerHandle(Uuid::new_v4().to_string());
        self.listeners.push((handle.clone(), listener));
        handle
    }

    /// Returns false when the handle was not subscribed.
    pub fn unsubscribe(&mut self, handle: &ListenerHandle) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(h, _)| h != handle);
        self.listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn hovered_id(&self) -> Option<&str> {
        self.hovered.map(|i| self.controllers[i].id())
    }

    /// Cursor hint of the hovered controller.
    pub fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }

    pub fn is_gesture_active(&self) -> bool {
        self.gesture.is_some()
    }

    /// Hit-tests every controller against the pointers, highest z-index first.
    ///
    /// At most one controller claims hover. Ignored while detached or during a
    /// gesture. Returns true when a controller is hovered.
    pub fn pointer_move(&mut self, pointers: &[MultiFrameSnapshot]) -> bool {
        if !self.attached || self.gesture.is_some() {
            return false;
        }
        let mut claimed = None;
        for (index, controller) in self.controllers.iter_mut().enumerate() {
            if claimed.is_some() {
                controller.set_hovered(false);
                continue;
            }
            let hit = pointers
                .iter()
                .any(|p| controller.hit_test(&self.contour, &p.offset));
            if hit {
                claimed = Some(index);
            } else {
                controller.set_hovered(false);
            }
        }

        let hovered_id = claimed.map(|i| self.controllers[i].id().to_string());
        for controller in self.controllers.iter_mut() {
            controller.after_hit_test(hovered_id.as_deref());
        }

        if claimed != self.hovered {
            self.set_hover(claimed);
        }
        claimed.is_some()
    }

    /// Starts a gesture on the hovered controller.
    ///
    /// Returns false, touching nothing, while detached or when nothing is hovered.
    pub fn pan_start(&mut self, event: &EditorEvent) -> Result<bool> {
        if !self.attached {
            return Ok(false);
        }
        let Some(controller) = self.hovered else {
            return Ok(false);
        };
        if self.gesture.is_some() {
            self.finish_gesture();
        }
        self.contour.save();
        self.gesture = Some(GestureState {
            controller,
            cache: HashMap::new(),
        });
        debug!(
            controller = %self.controllers[controller].kind(),
            direction = ?event.direction,
            "gesture started"
        );
        self.notify(DeformerEvent::GestureStarted);
        Ok(true)
    }

    /// Applies one gesture step.
    pub fn pan_move(&mut self, event: &EditorEvent) -> Result<bool> {
        if !self.attached || self.gesture.is_none() {
            return Ok(false);
        }
        if self.step(event)? {
            self.notify(DeformerEvent::GeometryUpdated);
        }
        Ok(true)
    }

    /// Applies the final step and flushes the transaction stack.
    ///
    /// The stack is flushed even when the final step fails.
    pub fn pan_end(&mut self, event: &EditorEvent) -> Result<bool> {
        if !self.attached || self.gesture.is_none() {
            return Ok(false);
        }
        let outcome = self.step(event);
        if let Ok(true) = outcome {
            self.notify(DeformerEvent::GeometryUpdated);
        }
        self.finish_gesture();
        outcome.map(|_| true)
    }

    /// Ends a running gesture, keeping the current geometry.
    ///
    /// Hosts call this when pointer capture is lost. Returns false when no
    /// gesture was running.
    pub fn cancel(&mut self) -> bool {
        if self.gesture.is_none() {
            return false;
        }
        debug!("gesture cancelled");
        self.finish_gesture();
        true
    }

    /// Renders every controller, lowest z-index first.
    pub fn render(&self, renderer: &mut dyn HandleRenderer) {
        for controller in self.controllers.iter().rev() {
            controller.render(&self.contour, renderer);
        }
    }

    fn finish_gesture(&mut self) {
        self.contour.apply();
        self.gesture = None;
        self.notify(DeformerEvent::GestureEnded);
    }

    /// One gesture step. Returns true when an edit was accepted or adjusted.
    fn step(&mut self, event: &EditorEvent) -> Result<bool> {
        let Some(gesture) = self.gesture.as_mut() else {
            return Ok(false);
        };
        let limitators: Vec<&dyn Limitator> = self
            .active
            .iter()
            .map(|&i| self.limitators[i].as_ref())
            .collect();
        if let Some(blocking) = limitators
            .iter()
            .find(|l| !l.continue_handle(event, &self.contour))
        {
            trace!(limitator = %blocking.kind(), "gesture step skipped");
            return Ok(false);
        }

        // Back to the gesture-start state, then a fresh rollback point.
        self.contour.restore();
        self.contour.save();

        let controller = self.controllers[gesture.controller].as_ref();
        run_handlers(
            &mut self.contour,
            controller,
            &limitators,
            &mut gesture.cache,
            event,
        )
    }

    fn set_hover(&mut self, hovered: Option<usize>) {
        self.hovered = hovered;
        self.cursor = hovered.map(|i| self.controllers[i].cursor().to_string());
        self.refresh_active();
        debug!(
            hovered = ?self.hovered_id(),
            active = ?self.active_limitators(),
            "hover changed"
        );
    }

    fn refresh_active(&mut self) {
        self.active = match self.hovered {
            Some(index) => {
                let controller = self.controllers[index].as_ref();
                self.limitators
                    .iter()
                    .enumerate()
                    .filter(|(_, l)| {
                        l.handle_it(controller) && controller.supports_limitator(l.kind())
                    })
                    .map(|(i, _)| i)
                    .collect()
            }
            None => Vec::new(),
        };
    }

    fn notify(&self, event: DeformerEvent) {
        trace!(%event, listeners = self.listeners.len(), "notifying listeners");
        for (_, listener) in &self.listeners {
            listener.on_event(event, &self.contour);
        }
    }
}

/// Runs every handler of `controller` as its own nested transaction.
fn run_handlers(
    contour: &mut Contour,
    controller: &dyn Controller,
    limitators: &[&dyn Limitator],
    cache: &mut HashMap<&'static str, EditValue>,
    event: &EditorEvent,
) -> Result<bool> {
    let mut changed = false;
    for &handler in controller.handler_names() {
        let value = controller.propose(handler, contour, event);
        contour.save();
        let result = match controller.apply(handler, contour, &value) {
            Ok(result) => result,
            Err(err) => {
                contour.restore();
                return Err(err);
            }
        };

        let accepted = controller.handles_limitation_itself(handler)
            || limitators.iter().all(|l| l.accept(contour, &result));
        if accepted {
            contour.pop();
            cache.insert(handler, value);
            changed = true;
            continue;
        }

        let mut adjusted = false;
        for limitator in limitators {
            if limitator.accept(contour, &result) {
                continue;
            }
            adjusted = limitator.adjust(contour, event, controller, &result);
            if !adjusted {
                break;
            }
        }
        let adjusted = adjusted && limitators.iter().all(|l| l.accept(contour, &result));
        if adjusted {
            trace!(handler, "edit adjusted");
            contour.pop();
            changed = true;
            continue;
        }

        trace!(handler, "edit rejected");
        contour.restore();
        if let Some(last) = cache.get(handler) {
            controller.apply(handler, contour, last)?;
        }
    }
    Ok(changed)
}
