//! Overlay lifecycle
//!
//! Each modal-like surface (product detail, search, cart drawer) runs the
//! same machine:
//!
//! ```text
//! Closed --open--> Opening --settle--> Open --close--> Closing --settle--> Closed
//! ```
//!
//! `open` and `close` hand out a [`TransitionTicket`]. The caller waits for
//! the ticket's duration and passes it back to [`OverlayMachine::settle`].
//! Every transition bumps a generation counter, so a ticket issued before a
//! later `open`/`close` is stale and settling it does nothing.

use derive_more::Display;

use super::motion::{Easing, Offset, Pose, Reveal};

/// Enter transition of the panel (ms)
pub const ENTER_MS: u32 = 400;
/// Exit transition of the panel (ms)
pub const EXIT_MS: u32 = 300;
/// Backdrop fade duration (ms)
pub const BACKDROP_MS: u32 = 300;
/// Backdrop waits this long before fading out (ms)
pub const BACKDROP_EXIT_DELAY_MS: u32 = 100;

/// Stagger between the detail modal's content blocks (seconds)
pub const DETAIL_CONTENT_STAGGER: f64 = 0.05;
/// Content blocks of the detail modal rise in after the panel
pub const DETAIL_CONTENT_REVEAL: Reveal = Reveal::rise(20.0, 0.4, 0.2);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display,
)]
pub enum OverlayKind {
    #[display("product-detail")]
    ProductDetail,
    #[display("search")]
    Search,
    #[display("cart")]
    Cart,
}

impl OverlayKind {
    pub const ALL: [OverlayKind; 3] = [
        OverlayKind::ProductDetail,
        OverlayKind::Search,
        OverlayKind::Cart,
    ];

    /// Motion preset of this overlay's panel
    pub fn motion(self) -> OverlayMotion {
        match self {
            OverlayKind::ProductDetail => OverlayMotion {
                panel_hidden: Pose::scaled(0.95),
            },
            OverlayKind::Search => OverlayMotion {
                panel_hidden: Pose::rise(-20.0),
            },
            // the drawer slides without fading
            OverlayKind::Cart => OverlayMotion {
                panel_hidden: Pose::slide_x(Offset::Percent(100.0)).with_opacity(1.0),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum OverlayPhase {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

impl OverlayPhase {
    /// Opening or open: the panel is (becoming) visible, takes input and
    /// holds the page scroll lock
    pub fn is_active(self) -> bool {
        matches!(self, OverlayPhase::Opening | OverlayPhase::Open)
    }

    /// Anything but fully closed; content must stay rendered
    pub fn is_mounted(self) -> bool {
        self != OverlayPhase::Closed
    }
}

/// Handle for a pending transition; see [`OverlayMachine::settle`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionTicket {
    pub kind: OverlayKind,
    pub generation: u64,
    /// Phase reached when the ticket settles
    pub settles_to: OverlayPhase,
    pub duration_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayMachine {
    kind: OverlayKind,
    phase: OverlayPhase,
    generation: u64,
    /// Generation of the latest open transition
    opened: u64,
}

impl OverlayMachine {
    pub fn new(kind: OverlayKind) -> Self {
        Self {
            kind,
            phase: OverlayPhase::Closed,
            generation: 0,
            opened: 0,
        }
    }

    pub fn kind(&self) -> OverlayKind {
        self.kind
    }

    pub fn phase(&self) -> OverlayPhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase.is_active()
    }

    /// Start the enter transition. Reopening while closing reverses the
    /// exit; opening an overlay that is already opening/open does nothing.
    pub fn open(&mut self) -> Option<TransitionTicket> {
        if self.phase.is_active() {
            return None;
        }
        let ticket = self.begin(OverlayPhase::Opening, OverlayPhase::Open, ENTER_MS);
        self.opened = ticket.generation;
        Some(ticket)
    }

    /// Changes on every open transition and on nothing else; content keyed
    /// on it remounts (and replays its entrance) each time the overlay opens
    pub fn opened_generation(&self) -> u64 {
        self.opened
    }

    /// Start the exit transition; no-op unless opening/open
    pub fn close(&mut self) -> Option<TransitionTicket> {
        if !self.phase.is_active() {
            return None;
        }
        Some(self.begin(OverlayPhase::Closing, OverlayPhase::Closed, EXIT_MS))
    }

    /// Finish the transition `ticket` was issued for. Returns `false` and
    /// leaves the machine untouched if the ticket belongs to another overlay
    /// or was superseded by a later transition.
    pub fn settle(&mut self, ticket: TransitionTicket) -> bool {
        if ticket.kind != self.kind || ticket.generation != self.generation {
            tracing::trace!(overlay = %self.kind, generation = ticket.generation, "stale ticket ignored");
            return false;
        }
        self.phase = ticket.settles_to;
        tracing::debug!(overlay = %self.kind, phase = %self.phase, "overlay settled");
        true
    }

    fn begin(
        &mut self,
        phase: OverlayPhase,
        settles_to: OverlayPhase,
        duration_ms: u32,
    ) -> TransitionTicket {
        self.generation += 1;
        self.phase = phase;
        tracing::debug!(overlay = %self.kind, phase = %phase, generation = self.generation, "overlay transition");
        TransitionTicket {
            kind: self.kind,
            generation: self.generation,
            settles_to,
            duration_ms,
        }
    }
}

/// How an overlay's backdrop and panel move between hidden and shown
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayMotion {
    pub panel_hidden: Pose,
}

impl OverlayMotion {
    pub fn panel_style(&self, phase: OverlayPhase) -> String {
        if phase.is_active() {
            format!(
                "{} transition: transform {}s {e}, opacity {}s {e};",
                Pose::VISIBLE.css(),
                secs(ENTER_MS),
                secs(ENTER_MS),
                e = Easing::Power3Out.css()
            )
        } else {
            format!(
                "{} transition: transform {}s {e}, opacity {}s {e};",
                self.panel_hidden.css(),
                secs(EXIT_MS),
                secs(EXIT_MS),
                e = Easing::Power2In.css()
            )
        }
    }

    pub fn backdrop_style(&self, phase: OverlayPhase) -> String {
        if phase.is_active() {
            format!(
                "opacity: 1; transition: opacity {}s {};",
                secs(BACKDROP_MS),
                Easing::Power2Out.css()
            )
        } else {
            format!(
                "opacity: 0; pointer-events: none; transition: opacity {}s {} {}s;",
                secs(BACKDROP_MS),
                Easing::Power2In.css(),
                secs(BACKDROP_EXIT_DELAY_MS)
            )
        }
    }
}

fn secs(ms: u32) -> f64 {
    f64::from(ms) / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_cycle() {
        let mut m = OverlayMachine::new(OverlayKind::Search);
        assert_eq!(m.phase(), OverlayPhase::Closed);

        let t = m.open().unwrap();
        assert_eq!(m.phase(), OverlayPhase::Opening);
        assert_eq!(t.duration_ms, ENTER_MS);
        assert!(m.settle(t));
        assert_eq!(m.phase(), OverlayPhase::Open);

        let t = m.close().unwrap();
        assert_eq!(m.phase(), OverlayPhase::Closing);
        assert_eq!(t.duration_ms, EXIT_MS);
        assert!(m.settle(t));
        assert_eq!(m.phase(), OverlayPhase::Closed);
    }

    #[test]
    fn test_open_twice_is_noop() {
        let mut m = OverlayMachine::new(OverlayKind::Cart);
        let first = m.open().unwrap();
        assert!(m.open().is_none());
        assert!(m.settle(first));
        assert!(m.open().is_none());
        assert_eq!(m.phase(), OverlayPhase::Open);
    }

    #[test]
    fn test_close_when_closed_is_noop() {
        let mut m = OverlayMachine::new(OverlayKind::Cart);
        assert!(m.close().is_none());
        let t = m.open().unwrap();
        m.settle(t);
        let _ = m.close().unwrap();
        assert!(m.close().is_none());
    }

    #[test]
    fn test_reopen_while_closing_supersedes_exit() {
        let mut m = OverlayMachine::new(OverlayKind::ProductDetail);
        let open = m.open().unwrap();
        m.settle(open);
        let close = m.close().unwrap();
        let reopen = m.open().unwrap();

        // the exit timer fires late; it must not close the reopened overlay
        assert!(!m.settle(close));
        assert_eq!(m.phase(), OverlayPhase::Opening);
        assert!(m.settle(reopen));
        assert_eq!(m.phase(), OverlayPhase::Open);
    }

    #[test]
    fn test_opened_generation_tracks_opens_only() {
        let mut m = OverlayMachine::new(OverlayKind::ProductDetail);
        assert_eq!(m.opened_generation(), 0);

        let open = m.open().unwrap();
        assert_eq!(m.opened_generation(), open.generation);
        m.settle(open);

        let close = m.close().unwrap();
        assert_eq!(m.opened_generation(), open.generation);
        assert!(m.phase().is_mounted());

        let reopen = m.open().unwrap();
        assert_eq!(m.opened_generation(), reopen.generation);
        assert!(reopen.generation > close.generation);

        // no-op open leaves it alone
        assert!(m.open().is_none());
        assert_eq!(m.opened_generation(), reopen.generation);
    }

    #[test]
    fn test_close_while_opening_supersedes_enter() {
        let mut m = OverlayMachine::new(OverlayKind::Search);
        let open = m.open().unwrap();
        let close = m.close().unwrap();
        assert!(!m.settle(open));
        assert_eq!(m.phase(), OverlayPhase::Closing);
        assert!(m.settle(close));
        assert_eq!(m.phase(), OverlayPhase::Closed);
    }

    #[test]
    fn test_ticket_for_other_overlay_is_rejected() {
        let mut search = OverlayMachine::new(OverlayKind::Search);
        let mut cart = OverlayMachine::new(OverlayKind::Cart);
        let t = cart.open().unwrap();
        let _ = search.open().unwrap();
        assert!(!search.settle(t));
        assert_eq!(search.phase(), OverlayPhase::Opening);
    }

    #[test]
    fn test_phase_predicates() {
        assert!(!OverlayPhase::Closed.is_active());
        assert!(OverlayPhase::Opening.is_active());
        assert!(OverlayPhase::Open.is_active());
        assert!(!OverlayPhase::Closing.is_active());
        assert!(OverlayPhase::Closing.is_mounted());
        assert!(!OverlayPhase::Closed.is_mounted());
    }

    #[test]
    fn test_motion_presets() {
        let cart = OverlayKind::Cart.motion();
        assert_eq!(cart.panel_hidden.x, Offset::Percent(100.0));
        assert_eq!(cart.panel_hidden.opacity, 1.0);
        assert!(cart.panel_style(OverlayPhase::Closed).contains("translate(100%, 0px)"));

        let detail = OverlayKind::ProductDetail.motion();
        assert!(detail.panel_style(OverlayPhase::Closing).contains("scale(0.95)"));
        assert!(detail.panel_style(OverlayPhase::Opening).contains("opacity: 1;"));

        let search = OverlayKind::Search.motion();
        assert!(search.panel_style(OverlayPhase::Closed).contains("translate(0px, -20px)"));
    }

    #[test]
    fn test_backdrop_style() {
        let motion = OverlayKind::Search.motion();
        let shown = motion.backdrop_style(OverlayPhase::Open);
        assert!(shown.starts_with("opacity: 1;"));
        assert!(!shown.contains("pointer-events"));

        let hidden = motion.backdrop_style(OverlayPhase::Closing);
        assert!(hidden.contains("pointer-events: none"));
        assert!(hidden.ends_with("0.1s;"));
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(OverlayKind::ProductDetail.to_string(), "product-detail");
        assert_eq!(OverlayKind::Cart.to_string(), "cart");
    }
}
