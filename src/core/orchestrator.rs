//! Top-level view state
//!
//! Owns the three overlay machines, the product shown in the detail modal
//! and the shared scroll lock. The UI sends intents here and schedules a
//! timer for every [`TransitionTicket`] it gets back.

use super::catalog::Product;
use super::overlay::{OverlayKind, OverlayMachine, OverlayPhase, TransitionTicket};
use super::scroll_lock::ScrollLock;

/// Something the visitor asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    ViewDetails(Product),
    CloseProductModal,
    OpenSearch,
    CloseSearch,
    /// A search result was picked: show its details, dismiss the search
    SelectSearchResult(Product),
    OpenCart,
    CloseCart,
    /// Escape pressed anywhere on the page
    Escape,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewOrchestrator {
    detail: OverlayMachine,
    search: OverlayMachine,
    cart: OverlayMachine,
    selected_product: Option<Product>,
    scroll_lock: ScrollLock,
}

impl Default for ViewOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewOrchestrator {
    pub fn new() -> Self {
        Self {
            detail: OverlayMachine::new(OverlayKind::ProductDetail),
            search: OverlayMachine::new(OverlayKind::Search),
            cart: OverlayMachine::new(OverlayKind::Cart),
            selected_product: None,
            scroll_lock: ScrollLock::new(),
        }
    }

    /// Apply `intent`, returning the transitions that now need a timer
    pub fn dispatch(&mut self, intent: Intent) -> Vec<TransitionTicket> {
        match intent {
            Intent::ViewDetails(product) => self.view_details(product).into_iter().collect(),
            Intent::CloseProductModal => self.close_product_modal().into_iter().collect(),
            Intent::OpenSearch => self.open(OverlayKind::Search).into_iter().collect(),
            Intent::CloseSearch => self.close(OverlayKind::Search).into_iter().collect(),
            Intent::SelectSearchResult(product) => self.select_search_result(product),
            Intent::OpenCart => self.open(OverlayKind::Cart).into_iter().collect(),
            Intent::CloseCart => self.close(OverlayKind::Cart).into_iter().collect(),
            Intent::Escape => self.escape(),
        }
    }

    /// Show `product` in the detail modal. If the modal is already up the
    /// content is swapped in place.
    pub fn view_details(&mut self, product: Product) -> Option<TransitionTicket> {
        tracing::debug!(product = %product.id, "view details");
        self.selected_product = Some(product);
        self.open(OverlayKind::ProductDetail)
    }

    /// Start closing the detail modal. The product stays selected until the
    /// exit transition settles so the panel never renders empty.
    pub fn close_product_modal(&mut self) -> Option<TransitionTicket> {
        self.close(OverlayKind::ProductDetail)
    }

    pub fn select_search_result(&mut self, product: Product) -> Vec<TransitionTicket> {
        let mut tickets: Vec<_> = self.view_details(product).into_iter().collect();
        tickets.extend(self.close(OverlayKind::Search));
        tickets
    }

    pub fn open(&mut self, kind: OverlayKind) -> Option<TransitionTicket> {
        let ticket = self.machine_mut(kind).open();
        self.sync_lock(kind);
        ticket
    }

    pub fn close(&mut self, kind: OverlayKind) -> Option<TransitionTicket> {
        let ticket = self.machine_mut(kind).close();
        self.sync_lock(kind);
        ticket
    }

    /// Every overlay listens for Escape on its own; all active ones close
    pub fn escape(&mut self) -> Vec<TransitionTicket> {
        OverlayKind::ALL
            .into_iter()
            .filter_map(|kind| self.close(kind))
            .collect()
    }

    /// Complete a transition once its timer fires. Stale tickets are
    /// ignored. Settling the detail modal's exit clears the selection.
    pub fn settle(&mut self, ticket: TransitionTicket) -> bool {
        let settled = self.machine_mut(ticket.kind).settle(ticket);
        if settled
            && ticket.kind == OverlayKind::ProductDetail
            && self.detail.phase() == OverlayPhase::Closed
        {
            self.selected_product = None;
        }
        self.sync_lock(ticket.kind);
        settled
    }

    pub fn phase(&self, kind: OverlayKind) -> OverlayPhase {
        self.machine(kind).phase()
    }

    /// Key of the current opening of the detail modal
    pub fn detail_opened(&self) -> u64 {
        self.detail.opened_generation()
    }

    pub fn selected_product(&self) -> Option<&Product> {
        self.selected_product.as_ref()
    }

    pub fn scroll_lock(&self) -> &ScrollLock {
        &self.scroll_lock
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_lock.is_locked()
    }

    fn sync_lock(&mut self, kind: OverlayKind) {
        if self.machine(kind).is_active() {
            self.scroll_lock.acquire(kind);
        } else {
            self.scroll_lock.release(kind);
        }
    }

    fn machine(&self, kind: OverlayKind) -> &OverlayMachine {
        match kind {
            OverlayKind::ProductDetail => &self.detail,
            OverlayKind::Search => &self.search,
            OverlayKind::Cart => &self.cart,
        }
    }

    fn machine_mut(&mut self, kind: OverlayKind) -> &mut OverlayMachine {
        match kind {
            OverlayKind::ProductDetail => &mut self.detail,
            OverlayKind::Search => &mut self.search,
            OverlayKind::Cart => &mut self.cart,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::product_by_id;

    fn product(id: &str) -> Product {
        product_by_id(id).unwrap().clone()
    }

    fn settle_all(view: &mut ViewOrchestrator, tickets: Vec<TransitionTicket>) {
        for ticket in tickets {
            view.settle(ticket);
        }
    }

    #[test]
    fn test_view_details_opens_modal_and_locks() {
        let mut view = ViewOrchestrator::new();
        let ticket = view.view_details(product("gilded-chain")).unwrap();
        assert_eq!(view.phase(OverlayKind::ProductDetail), OverlayPhase::Opening);
        assert!(view.is_scroll_locked());
        assert_eq!(view.selected_product().unwrap().id, "gilded-chain");

        view.settle(ticket);
        assert_eq!(view.phase(OverlayKind::ProductDetail), OverlayPhase::Open);
    }

    #[test]
    fn test_selection_cleared_only_after_exit_settles() {
        let mut view = ViewOrchestrator::new();
        let open = view.view_details(product("pearl-droplets")).unwrap();
        view.settle(open);

        let close = view.close_product_modal().unwrap();
        assert_eq!(view.phase(OverlayKind::ProductDetail), OverlayPhase::Closing);
        // still rendered during the exit
        assert_eq!(view.selected_product().unwrap().id, "pearl-droplets");
        assert!(!view.is_scroll_locked());

        view.settle(close);
        assert!(view.selected_product().is_none());
        assert_eq!(view.phase(OverlayKind::ProductDetail), OverlayPhase::Closed);
    }

    #[test]
    fn test_reopen_races_pending_clear() {
        let mut view = ViewOrchestrator::new();
        let open = view.view_details(product("pearl-droplets")).unwrap();
        view.settle(open);
        let close = view.close_product_modal().unwrap();

        let reopen = view.view_details(product("union-bands")).unwrap();
        // stale exit timer fires after the new open
        assert!(!view.settle(close));
        assert_eq!(view.selected_product().unwrap().id, "union-bands");
        assert!(view.is_scroll_locked());

        view.settle(reopen);
        assert_eq!(view.phase(OverlayKind::ProductDetail), OverlayPhase::Open);
    }

    #[test]
    fn test_reopening_same_product_mid_exit_gets_new_key() {
        let mut view = ViewOrchestrator::new();
        let open = view.view_details(product("pearl-droplets")).unwrap();
        view.settle(open);
        let first = view.detail_opened();

        let close = view.close_product_modal().unwrap();
        // closing alone keeps the key
        assert_eq!(view.detail_opened(), first);

        view.view_details(product("pearl-droplets")).unwrap();
        assert!(!view.settle(close));
        assert_eq!(view.selected_product().unwrap().id, "pearl-droplets");
        assert_ne!(view.detail_opened(), first);
    }

    #[test]
    fn test_view_details_while_open_swaps_product() {
        let mut view = ViewOrchestrator::new();
        let open = view.view_details(product("cuff-link")).unwrap();
        view.settle(open);
        let key = view.detail_opened();
        assert!(view.view_details(product("gilded-chain")).is_none());
        assert_eq!(view.selected_product().unwrap().id, "gilded-chain");
        assert_eq!(view.detail_opened(), key);
        assert_eq!(view.phase(OverlayKind::ProductDetail), OverlayPhase::Open);
    }

    #[test]
    fn test_select_search_result() {
        let mut view = ViewOrchestrator::new();
        let open = view.dispatch(Intent::OpenSearch);
        settle_all(&mut view, open);

        let tickets = view.dispatch(Intent::SelectSearchResult(product("pearl-droplets")));
        assert_eq!(tickets.len(), 2);
        assert_eq!(view.phase(OverlayKind::Search), OverlayPhase::Closing);
        assert_eq!(view.phase(OverlayKind::ProductDetail), OverlayPhase::Opening);
        // detail still holds the lock while search releases it
        assert!(view.is_scroll_locked());
        assert!(!view.scroll_lock().is_held_by(OverlayKind::Search));

        settle_all(&mut view, tickets);
        assert_eq!(view.phase(OverlayKind::Search), OverlayPhase::Closed);
        assert_eq!(view.phase(OverlayKind::ProductDetail), OverlayPhase::Open);
        assert!(view.is_scroll_locked());
    }

    #[test]
    fn test_escape_closes_every_active_overlay() {
        let mut view = ViewOrchestrator::new();
        let mut tickets = view.dispatch(Intent::OpenCart);
        tickets.extend(view.dispatch(Intent::OpenSearch));
        settle_all(&mut view, tickets);

        let closing = view.dispatch(Intent::Escape);
        assert_eq!(closing.len(), 2);
        assert!(!view.is_scroll_locked());
        settle_all(&mut view, closing);
        for kind in OverlayKind::ALL {
            assert_eq!(view.phase(kind), OverlayPhase::Closed);
        }

        assert!(view.dispatch(Intent::Escape).is_empty());
    }

    #[test]
    fn test_closing_one_of_two_keeps_lock() {
        let mut view = ViewOrchestrator::new();
        view.dispatch(Intent::OpenCart);
        view.dispatch(Intent::OpenSearch);
        view.dispatch(Intent::CloseCart);
        assert!(view.is_scroll_locked());
        view.dispatch(Intent::CloseSearch);
        assert!(!view.is_scroll_locked());
    }

    #[test]
    fn test_rapid_open_close_lock_matches_final_state() {
        // sequences of open/close with timers settling in arbitrary order
        let patterns: [&[bool]; 5] = [
            &[true, false, true],
            &[true, false, true, false],
            &[true, true, false, false, true],
            &[false, true, false, true, false, true],
            &[true, false, false, true, true],
        ];
        for pattern in patterns {
            let mut view = ViewOrchestrator::new();
            let mut pending = Vec::new();
            for &open in pattern {
                let intent = if open { Intent::OpenCart } else { Intent::CloseCart };
                pending.extend(view.dispatch(intent));
            }
            let finally_open = *pattern.last().unwrap();

            // fire timers newest-first, the worst case for stale tickets
            pending.reverse();
            settle_all(&mut view, pending);

            assert_eq!(view.is_scroll_locked(), finally_open, "{pattern:?}");
            let expected = if finally_open {
                OverlayPhase::Open
            } else {
                OverlayPhase::Closed
            };
            assert_eq!(view.phase(OverlayKind::Cart), expected, "{pattern:?}");
        }
    }
}
