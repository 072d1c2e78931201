//! Widget lifecycle event types.
//!
//! The host delivers these notifications to a field through
//! [`Widget::event`](super::Widget::event). The set is deliberately small:
//! a labelled field only consumes the enabled-state notification and the
//! attach/detach pair that brackets its time in a displayable hierarchy.

/// Common event state shared by all event types.
#[derive(Debug, Clone, Default)]
pub struct EventBase {
    /// Whether the event has been accepted (handled).
    accepted: bool,
}

impl EventBase {
    /// Create a new event base.
    pub fn new() -> Self {
        Self { accepted: false }
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Accept the event, preventing further propagation.
    pub fn accept(&mut self) {
        self.accepted = true;
    }

    /// Ignore the event, allowing further propagation.
    pub fn ignore(&mut self) {
        self.accepted = false;
    }
}

/// Sent when the host changes the control's enabled state.
#[derive(Debug, Clone)]
pub struct EnabledChangeEvent {
    /// Base event data.
    pub base: EventBase,
    /// The new enabled state.
    pub enabled: bool,
}

impl EnabledChangeEvent {
    /// Create a new enabled-change event.
    pub fn new(enabled: bool) -> Self {
        Self {
            base: EventBase::new(),
            enabled,
        }
    }
}

/// Sent after the control becomes part of a displayable hierarchy.
#[derive(Debug, Clone, Default)]
pub struct AttachEvent {
    /// Base event data.
    pub base: EventBase,
}

impl AttachEvent {
    /// Create a new attach event.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Sent before the control leaves its displayable hierarchy.
#[derive(Debug, Clone, Default)]
pub struct DetachEvent {
    /// Base event data.
    pub base: EventBase,
}

impl DetachEvent {
    /// Create a new detach event.
    pub fn new() -> Self {
        Self::default()
    }
}

/// The events a widget can receive from its host.
#[derive(Debug, Clone)]
pub enum WidgetEvent {
    /// The host changed the control's enabled state.
    EnabledChange(EnabledChangeEvent),
    /// The control was attached to a displayable hierarchy.
    AttachedToWindow(AttachEvent),
    /// The control is about to be detached from its hierarchy.
    DetachFromWindow(DetachEvent),
}

impl WidgetEvent {
    /// Convenience constructor for an enabled-change notification.
    pub fn enabled_change(enabled: bool) -> Self {
        Self::EnabledChange(EnabledChangeEvent::new(enabled))
    }

    /// Convenience constructor for an attach notification.
    pub fn attached_to_window() -> Self {
        Self::AttachedToWindow(AttachEvent::new())
    }

    /// Convenience constructor for a detach notification.
    pub fn detach_from_window() -> Self {
        Self::DetachFromWindow(DetachEvent::new())
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        match self {
            Self::EnabledChange(e) => e.base.is_accepted(),
            Self::AttachedToWindow(e) => e.base.is_accepted(),
            Self::DetachFromWindow(e) => e.base.is_accepted(),
        }
    }

    /// Accept the event, preventing further propagation.
    pub fn accept(&mut self) {
        match self {
            Self::EnabledChange(e) => e.base.accept(),
            Self::AttachedToWindow(e) => e.base.accept(),
            Self::DetachFromWindow(e) => e.base.accept(),
        }
    }
}
