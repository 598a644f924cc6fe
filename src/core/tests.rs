#[cfg(test)]
mod tests {
    use crate::core::catalog::{featured_products, products};
    use crate::core::contact::{order_message, whatsapp_order_link};
    use crate::core::filter::{CategoryFilter, FilterState, search_products};
    use crate::core::inquiry::{InquiryField, InquiryForm};
    use crate::core::motion::{Layout, Part, PinnedTimeline, pinned_progress};
    use crate::core::orchestrator::{Intent, ViewOrchestrator};
    use crate::core::overlay::{OverlayKind, OverlayPhase, TransitionTicket};

    fn settle_all(view: &mut ViewOrchestrator, tickets: Vec<TransitionTicket>) {
        for ticket in tickets {
            view.settle(ticket);
        }
    }

    #[test]
    fn test_browse_filter_and_order() {
        let mut filters = FilterState::default();
        filters.selected_category = CategoryFilter::from_id("rings");
        let visible = filters.apply(products());
        assert_eq!(visible.len(), 2);

        let mut view = ViewOrchestrator::new();
        let tickets = view.dispatch(Intent::ViewDetails(visible[1].clone()));
        settle_all(&mut view, tickets);

        let shown = view.selected_product().unwrap();
        assert_eq!(shown.id, "eternity-band");
        let link = whatsapp_order_link(shown);
        let (_, text) = link.split_once("?text=").unwrap();
        assert_eq!(
            urlencoding::decode(text).unwrap(),
            order_message("Eternity Band")
        );
    }

    #[test]
    fn test_search_to_detail_workflow() {
        let mut view = ViewOrchestrator::new();
        let open = view.dispatch(Intent::OpenSearch);
        settle_all(&mut view, open);
        assert!(view.is_scroll_locked());

        let results = search_products(products(), "pearl");
        assert_eq!(results.len(), 1);

        let tickets = view.dispatch(Intent::SelectSearchResult(results[0].clone()));
        settle_all(&mut view, tickets);
        assert_eq!(view.phase(OverlayKind::Search), OverlayPhase::Closed);
        assert_eq!(view.phase(OverlayKind::ProductDetail), OverlayPhase::Open);
        assert!(view.scroll_lock().is_held_by(OverlayKind::ProductDetail));

        let closing = view.dispatch(Intent::Escape);
        assert!(!view.is_scroll_locked());
        assert!(view.selected_product().is_some());
        settle_all(&mut view, closing);
        assert!(view.selected_product().is_none());
    }

    #[test]
    fn test_clear_filters_restores_catalog() {
        let mut filters = FilterState::new(CategoryFilter::from_id("watches"), "nothing like this");
        assert!(filters.apply(products()).is_empty());

        filters.clear();
        assert!(filters.is_default());
        assert_eq!(filters.apply(products()).len(), products().len());
    }

    #[test]
    fn test_spotlights_alternate_layouts() {
        let featured = featured_products();
        assert_eq!(featured.len(), 2);

        // the first spotlight follows the left-layout About section
        let first = PinnedTimeline::spotlight(Layout::alternating(0));
        let second = PinnedTimeline::spotlight(Layout::alternating(1));
        assert_eq!(Layout::alternating(0), Layout::Right);
        assert_ne!(
            first.style(Part::Image, 0.0),
            second.style(Part::Image, 0.0)
        );
        // both rest at the same pose mid-pin
        assert_eq!(first.style(Part::Image, 0.5), second.style(Part::Image, 0.5));
    }

    #[test]
    fn test_pinned_progress_drives_timeline() {
        let vh = 800.0;
        let timeline = PinnedTimeline::about();
        let before = pinned_progress(0.0, vh);
        let after = pinned_progress(-10_000.0, vh);
        assert_eq!(before, 0.0);
        assert_eq!(after, 1.0);
        let content = timeline.pose(Part::Content, after).unwrap();
        assert!(content.opacity < 1e-9);
    }

    #[test]
    fn test_inquiry_round() {
        let mut form = InquiryForm::new();
        form.set(InquiryField::Name, "Tobi");
        form.set(InquiryField::Email, "tobi@example.com");
        form.set(InquiryField::Piece, "Heritage Timepiece");

        let inquiry = form.submit().unwrap().unwrap();
        assert_eq!(inquiry.piece.as_deref(), Some("Heritage Timepiece"));
        assert!(form.is_sent());

        form.reset();
        assert!(!form.is_sent());
        assert!(form.get(InquiryField::Name).is_empty());
    }
}
