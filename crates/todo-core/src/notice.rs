//! Validation Notice
//!
//! Visibility state of the "empty submission" notification. Every `show`
//! starts a new generation; the auto-dismiss timer carries the ticket of the
//! generation it was scheduled for and only hides that one.

/// How long the notification stays up without user action
pub const AUTO_DISMISS_MS: u32 = 3000;

/// Text of the notification
pub const NOTICE_MESSAGE: &str = "Please enter a valid TODO!";

/// Why a dismissal was requested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    /// Auto-dismiss duration elapsed
    Timeout,
    /// User pressed the close button
    CloseButton,
    /// User clicked somewhere else on the page
    ClickAway,
}

/// Handle identifying one showing of the notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoticeTicket(u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notice {
    visible: bool,
    generation: u64,
}

impl Notice {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn show(&mut self) -> NoticeTicket {
        self.generation += 1;
        self.visible = true;
        NoticeTicket(self.generation)
    }

    /// Hide on user request. Click-away does not hide.
    /// Returns whether visibility changed.
    pub fn dismiss(&mut self, reason: DismissReason) -> bool {
        if reason == DismissReason::ClickAway || !self.visible {
            return false;
        }
        self.visible = false;
        true
    }

    /// Hide if `ticket` still belongs to the current showing.
    /// Returns whether it did.
    pub fn expire(&mut self, ticket: NoticeTicket) -> bool {
        ticket.0 == self.generation && self.dismiss(DismissReason::Timeout)
    }
}
