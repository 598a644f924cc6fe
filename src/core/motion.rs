//! Scroll-driven and reveal animations as pure data
//!
//! Every animated element is described by a [`Pose`] (translation, scale,
//! opacity). Timelines map a normalized progress value to poses, so the
//! browser side only has to measure scroll position and write inline styles.
//!
//! Three patterns are covered:
//! - pinned narrative sections, where scroll progress through a fixed
//!   distance scrubs one [`PinnedTimeline`]
//! - reveal-on-enter elements, toggled by a [`RevealTrigger`] threshold
//! - the hero load sequence, which plays once after mount

use derive_more::Display;

/// Scroll distance of a pinned section, as a multiple of viewport height
pub const PIN_DISTANCE: f64 = 1.3;

/// Lag of scrubbed motion behind the scroll position (seconds)
pub const SCRUB_SECONDS: f64 = 0.6;

/// End of the entrance phase of a pinned timeline
pub const ENTRANCE_END: f64 = 0.3;

/// Start of the exit phase of a pinned timeline
pub const EXIT_START: f64 = 0.7;

/// Stagger between category cards (seconds)
pub const CATEGORY_STAGGER: f64 = 0.15;

/// Stagger between product cards (seconds)
pub const PRODUCT_STAGGER: f64 = 0.08;

/// Easing curves used by the site, named after their GSAP counterparts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Easing {
    #[display("none")]
    Linear,
    #[display("power2.in")]
    Power2In,
    #[display("power2.out")]
    Power2Out,
    #[display("power3.out")]
    Power3Out,
}

impl Easing {
    /// Map linear time `t` in `[0, 1]` onto the curve
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Power2In => t.powi(3),
            Easing::Power2Out => 1.0 - (1.0 - t).powi(3),
            Easing::Power3Out => 1.0 - (1.0 - t).powi(4),
        }
    }

    /// CSS timing function approximating the curve
    pub fn css(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::Power2In => "cubic-bezier(0.55, 0.055, 0.675, 0.19)",
            Easing::Power2Out => "cubic-bezier(0.215, 0.61, 0.355, 1)",
            Easing::Power3Out => "cubic-bezier(0.165, 0.84, 0.44, 1)",
        }
    }
}

/// Horizontal offset with its CSS unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Offset {
    Px(f64),
    Vw(f64),
    Percent(f64),
}

impl Offset {
    pub const ZERO: Offset = Offset::Px(0.0);

    pub fn value(self) -> f64 {
        match self {
            Offset::Px(v) | Offset::Vw(v) | Offset::Percent(v) => v,
        }
    }

    fn with_value(self, value: f64) -> Offset {
        match self {
            Offset::Px(_) => Offset::Px(value),
            Offset::Vw(_) => Offset::Vw(value),
            Offset::Percent(_) => Offset::Percent(value),
        }
    }

    /// Interpolate, keeping the unit of whichever side is non-zero
    fn lerp(self, to: Offset, t: f64) -> Offset {
        let unit = if to.value() != 0.0 { to } else { self };
        unit.with_value(lerp(self.value(), to.value(), t))
    }

    pub fn css(self) -> String {
        match self {
            Offset::Px(v) => format!("{}px", fmt_num(v)),
            Offset::Vw(v) => format!("{}vw", fmt_num(v)),
            Offset::Percent(v) => format!("{}%", fmt_num(v)),
        }
    }
}

/// Transform origin, only relevant for scaled elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Origin {
    #[default]
    Center,
    Top,
    Bottom,
}

impl Origin {
    pub fn css(self) -> &'static str {
        match self {
            Origin::Center => "center",
            Origin::Top => "top",
            Origin::Bottom => "bottom",
        }
    }
}

/// Visual state of one element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub x: Offset,
    /// Vertical offset in px
    pub y: f64,
    pub opacity: f64,
    pub scale: f64,
    pub scale_y: f64,
    pub origin: Origin,
}

impl Default for Pose {
    fn default() -> Self {
        Self::VISIBLE
    }
}

impl Pose {
    /// Resting, fully visible pose
    pub const VISIBLE: Pose = Pose {
        x: Offset::ZERO,
        y: 0.0,
        opacity: 1.0,
        scale: 1.0,
        scale_y: 1.0,
        origin: Origin::Center,
    };

    pub const fn hidden() -> Self {
        Pose {
            opacity: 0.0,
            ..Self::VISIBLE
        }
    }

    pub const fn slide_x(x: Offset) -> Self {
        Pose {
            x,
            ..Self::hidden()
        }
    }

    pub const fn rise(y: f64) -> Self {
        Pose { y, ..Self::hidden() }
    }

    pub const fn scaled(scale: f64) -> Self {
        Pose {
            scale,
            ..Self::hidden()
        }
    }

    pub const fn line(scale_y: f64, origin: Origin) -> Self {
        Pose {
            scale_y,
            origin,
            ..Self::VISIBLE
        }
    }

    pub const fn with_opacity(self, opacity: f64) -> Self {
        Pose { opacity, ..self }
    }

    pub fn lerp(&self, to: &Pose, t: f64) -> Pose {
        Pose {
            x: self.x.lerp(to.x, t),
            y: lerp(self.y, to.y, t),
            opacity: lerp(self.opacity, to.opacity, t),
            scale: lerp(self.scale, to.scale, t),
            scale_y: lerp(self.scale_y, to.scale_y, t),
            origin: to.origin,
        }
    }

    /// Value of the CSS `transform` property
    pub fn transform(&self) -> String {
        let mut transform = format!("translate({}, {}px)", self.x.css(), fmt_num(self.y));
        if self.scale != 1.0 {
            transform.push_str(&format!(" scale({})", fmt_num(self.scale)));
        }
        if self.scale_y != 1.0 {
            transform.push_str(&format!(" scaleY({})", fmt_num(self.scale_y)));
        }
        transform
    }

    /// Inline CSS declarations for this pose
    pub fn css(&self) -> String {
        let mut css = format!(
            "transform: {}; opacity: {};",
            self.transform(),
            fmt_num(self.opacity)
        );
        if self.origin != Origin::Center {
            css.push_str(&format!(" transform-origin: {};", self.origin.css()));
        }
        css
    }
}

/// CSS transition that makes scrubbed poses trail the scroll position
pub fn scrub_transition() -> String {
    format!(
        "transition: transform {s}s ease-out, opacity {s}s ease-out;",
        s = SCRUB_SECONDS
    )
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

fn fmt_num(v: f64) -> String {
    let rounded = (v * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        "0".to_string()
    } else {
        format!("{}", rounded)
    }
}

// ============================================================================
// Pinned timelines
// ============================================================================

/// Side the image sits on in a pinned section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Layout {
    #[display("left")]
    Left,
    #[display("right")]
    Right,
}

impl Layout {
    /// Alternate layouts for consecutive sections
    pub fn alternating(index: usize) -> Self {
        if index % 2 == 0 {
            Layout::Right
        } else {
            Layout::Left
        }
    }

    /// +1 for the left layout, -1 for the mirrored one
    fn sign(self) -> f64 {
        match self {
            Layout::Left => 1.0,
            Layout::Right => -1.0,
        }
    }
}

/// Animated parts of a pinned section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Part {
    Image,
    Content,
    Label,
    Title,
    Body,
    Cta,
    Divider,
}

/// One from/to segment on a timeline, positioned in progress units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub part: Part,
    pub from: Pose,
    pub to: Pose,
    pub start: f64,
    pub end: f64,
    pub ease: Easing,
}

impl Tween {
    fn entrance(part: Part, from: Pose, start: f64) -> Self {
        Self {
            part,
            from,
            to: Pose::VISIBLE,
            start,
            end: ENTRANCE_END,
            ease: Easing::Linear,
        }
    }

    fn exit(part: Part, to: Pose) -> Self {
        Self {
            part,
            from: Pose::VISIBLE,
            to,
            start: EXIT_START,
            end: 1.0,
            ease: Easing::Power2In,
        }
    }

    fn pose_at(&self, progress: f64) -> Pose {
        if progress <= self.start {
            return self.from;
        }
        if progress >= self.end {
            return self.to;
        }
        let t = (progress - self.start) / (self.end - self.start);
        self.from.lerp(&self.to, self.ease.apply(t))
    }
}

/// Scroll-scrubbed timeline of a pinned section: entrance over
/// `[0, 0.3]`, hold until 0.7, exit over `[0.7, 1]`
#[derive(Debug, Clone, PartialEq)]
pub struct PinnedTimeline {
    tweens: Vec<Tween>,
}

impl PinnedTimeline {
    /// Product spotlight: category label, name, description and CTA
    pub fn spotlight(layout: Layout) -> Self {
        let s = layout.sign();
        let mut tweens = vec![
            Tween::entrance(Part::Image, Pose::slide_x(Offset::Vw(-60.0 * s)), 0.0),
            Tween::entrance(Part::Content, Pose::slide_x(Offset::Vw(40.0 * s)), 0.05),
            Tween::entrance(Part::Label, Pose::rise(20.0), 0.08),
            Tween::entrance(Part::Title, Pose::rise(36.0), 0.1),
            Tween::entrance(Part::Body, Pose::rise(18.0), 0.12),
            Tween::entrance(Part::Cta, Pose::rise(15.0), 0.15),
        ];
        tweens.extend(Self::divider_and_exit(Offset::Vw(18.0 * s), Offset::Vw(10.0 * s)));
        Self { tweens }
    }

    /// Brand story section; left layout, CTA grows in instead of rising.
    /// On the way out the image slides back left while the content keeps
    /// drifting right.
    pub fn about() -> Self {
        let layout = Layout::Left;
        let s = layout.sign();
        let mut tweens = vec![
            Tween::entrance(Part::Image, Pose::slide_x(Offset::Vw(-60.0 * s)), 0.0),
            Tween::entrance(Part::Content, Pose::slide_x(Offset::Vw(40.0 * s)), 0.05),
            Tween::entrance(Part::Title, Pose::rise(40.0), 0.1),
            Tween::entrance(Part::Body, Pose::rise(24.0), 0.12),
            Tween::entrance(Part::Cta, Pose::scaled(0.92), 0.15),
        ];
        tweens.extend(Self::divider_and_exit(Offset::Vw(-18.0), Offset::Vw(10.0)));
        Self { tweens }
    }

    fn divider_and_exit(image_exit: Offset, content_exit: Offset) -> [Tween; 4] {
        [
            Tween {
                part: Part::Divider,
                from: Pose::line(0.0, Origin::Top),
                to: Pose::line(1.0, Origin::Top),
                start: 0.0,
                end: ENTRANCE_END,
                ease: Easing::Linear,
            },
            Tween::exit(Part::Image, Pose::slide_x(image_exit)),
            Tween::exit(Part::Content, Pose::slide_x(content_exit)),
            Tween {
                part: Part::Divider,
                from: Pose::line(1.0, Origin::Bottom),
                to: Pose::line(0.0, Origin::Bottom),
                start: EXIT_START,
                end: 1.0,
                ease: Easing::Power2In,
            },
        ]
    }

    /// Pose of `part` at `progress`; `None` when the part is not animated
    /// by this timeline, which callers treat as "leave it alone"
    pub fn pose(&self, part: Part, progress: f64) -> Option<Pose> {
        let progress = progress.clamp(0.0, 1.0);
        let mut segments: Vec<&Tween> = self.tweens.iter().filter(|t| t.part == part).collect();
        segments.sort_by(|a, b| a.start.total_cmp(&b.start));

        let first = segments.first()?;
        let mut pose = first.from;
        for tween in segments {
            if progress < tween.start {
                break;
            }
            pose = tween.pose_at(progress);
        }
        Some(pose)
    }

    /// Inline style for `part`, including the scrub lag
    pub fn style(&self, part: Part, progress: f64) -> String {
        match self.pose(part, progress) {
            Some(pose) => format!("{} {}", pose.css(), scrub_transition()),
            None => String::new(),
        }
    }
}

/// Progress through a pinned section from its top edge relative to the
/// viewport; 0 while the top is below the viewport top, 1 once the pin
/// distance has been scrolled.
pub fn pinned_progress(section_top: f64, viewport_height: f64) -> f64 {
    let distance = viewport_height * PIN_DISTANCE;
    if distance <= 0.0 {
        return 0.0;
    }
    (-section_top / distance).clamp(0.0, 1.0)
}

// ============================================================================
// Reveal-on-enter
// ============================================================================

/// Viewport threshold that toggles a reveal
///
/// `start` is the fraction of the viewport height the trigger's top must
/// reach: 0.8 means "top of section at 80% down the viewport".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealTrigger {
    pub start: f64,
}

impl RevealTrigger {
    /// Headlines, subheads and filter bars
    pub const HEADLINE: RevealTrigger = RevealTrigger { start: 0.8 };
    /// Cards and grids further down a section
    pub const CARDS: RevealTrigger = RevealTrigger { start: 0.7 };

    /// Whether the element should be revealed. Crossing back above the
    /// threshold flips this to `false`, which reverses the reveal.
    pub fn is_active(&self, trigger_top: f64, viewport_height: f64) -> bool {
        trigger_top <= viewport_height * self.start
    }
}

/// A one-shot entrance: hidden pose, duration, delay and easing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reveal {
    pub hidden: Pose,
    pub duration: f64,
    pub delay: f64,
    pub ease: Easing,
}

impl Reveal {
    pub const fn rise(y: f64, duration: f64, delay: f64) -> Self {
        Self {
            hidden: Pose::rise(y),
            duration,
            delay,
            ease: Easing::Power3Out,
        }
    }

    pub const fn with_delay(self, delay: f64) -> Self {
        Self { delay, ..self }
    }

    /// Same reveal, delayed by its position in a staggered group
    pub fn staggered(self, index: usize, step: f64) -> Self {
        self.with_delay(self.delay + stagger_delay(index, step))
    }

    /// Inline style for the revealed or hidden state. The delay only
    /// applies on the way in; reversing starts immediately.
    pub fn style(&self, revealed: bool) -> String {
        let (pose, delay) = if revealed {
            (Pose::VISIBLE, self.delay)
        } else {
            (self.hidden, 0.0)
        };
        format!(
            "{} transition: transform {d}s {e} {delay}s, opacity {d}s {e} {delay}s;",
            pose.css(),
            d = fmt_num(self.duration),
            e = self.ease.css(),
            delay = fmt_num(delay),
        )
    }

    /// Keyframe animation playing this reveal on mount. The hidden pose is
    /// passed to the keyframes as `--zera-from-transform` and
    /// `--zera-from-opacity`.
    pub fn animation(&self, keyframes: &str) -> String {
        format!(
            "--zera-from-transform: {}; --zera-from-opacity: {}; animation: {} {}s {} {}s both;",
            self.hidden.transform(),
            fmt_num(self.hidden.opacity),
            keyframes,
            fmt_num(self.duration),
            self.ease.css(),
            fmt_num(self.delay)
        )
    }
}

/// Delay of item `index` in a group staggered by `step` seconds
pub fn stagger_delay(index: usize, step: f64) -> f64 {
    index as f64 * step
}

/// Section headline (`top 80%`)
pub const HEADLINE_REVEAL: Reveal = Reveal::rise(40.0, 0.8, 0.0);
/// Subhead or filter bar following a headline
pub const SUBHEAD_REVEAL: Reveal = Reveal::rise(20.0, 0.6, 0.2);
/// Category card, staggered by [`CATEGORY_STAGGER`] (`top 70%`)
pub const CATEGORY_CARD_REVEAL: Reveal = Reveal::rise(60.0, 0.7, 0.0);
/// Product grid item, replayed whenever the visible set changes
pub const PRODUCT_CARD_REVEAL: Reveal = Reveal::rise(30.0, 0.5, 0.0);
/// Contact headline
pub const CONTACT_HEADLINE_REVEAL: Reveal = Reveal::rise(30.0, 0.8, 0.0);
/// Inquiry form
pub const CONTACT_FORM_REVEAL: Reveal = Reveal::rise(40.0, 0.7, 0.2);
/// Direct-contact card (`top 70%`)
pub const CONTACT_CARD_REVEAL: Reveal = Reveal::rise(50.0, 0.7, 0.3);

// ============================================================================
// Hero load sequence
// ============================================================================

/// Elements of the hero, in the order they come in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum HeroPart {
    Image,
    Content,
    Wordmark,
    Tagline,
    Cta,
}

/// Entrance of each hero element, played once after mount
pub fn hero_reveal(part: HeroPart) -> Reveal {
    let (hidden, duration, delay) = match part {
        HeroPart::Image => (Pose::scaled(1.05), 1.0, 0.0),
        HeroPart::Content => (Pose::slide_x(Offset::Px(40.0)), 0.8, 0.2),
        HeroPart::Wordmark => (Pose::rise(30.0), 0.8, 0.4),
        HeroPart::Tagline => (Pose::rise(20.0), 0.6, 0.6),
        HeroPart::Cta => (Pose::rise(15.0), 0.5, 0.8),
    };
    Reveal {
        hidden,
        duration,
        delay,
        ease: Easing::Power3Out,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_easing_endpoints() {
        for ease in [
            Easing::Linear,
            Easing::Power2In,
            Easing::Power2Out,
            Easing::Power3Out,
        ] {
            assert!(approx(ease.apply(0.0), 0.0), "{ease}");
            assert!(approx(ease.apply(1.0), 1.0), "{ease}");
        }
        assert!(Easing::Power2In.apply(0.5) < 0.5);
        assert!(Easing::Power3Out.apply(0.5) > 0.5);
        assert!(approx(Easing::Linear.apply(2.0), 1.0));
    }

    #[test]
    fn test_spotlight_start_is_offscreen_and_hidden() {
        let tl = PinnedTimeline::spotlight(Layout::Left);
        let image = tl.pose(Part::Image, 0.0).unwrap();
        assert_eq!(image.x, Offset::Vw(-60.0));
        assert!(approx(image.opacity, 0.0));

        let content = tl.pose(Part::Content, 0.0).unwrap();
        assert_eq!(content.x, Offset::Vw(40.0));

        let divider = tl.pose(Part::Divider, 0.0).unwrap();
        assert!(approx(divider.scale_y, 0.0));
        assert_eq!(divider.origin, Origin::Top);
    }

    #[test]
    fn test_spotlight_settled_between_entrance_and_exit() {
        let tl = PinnedTimeline::spotlight(Layout::Right);
        for progress in [0.3, 0.5, 0.7] {
            for part in [
                Part::Image,
                Part::Content,
                Part::Label,
                Part::Title,
                Part::Body,
                Part::Cta,
            ] {
                let pose = tl.pose(part, progress).unwrap();
                assert!(approx(pose.opacity, 1.0), "{part} at {progress}");
                assert!(approx(pose.x.value(), 0.0), "{part} at {progress}");
                assert!(approx(pose.y, 0.0), "{part} at {progress}");
            }
            assert!(approx(tl.pose(Part::Divider, progress).unwrap().scale_y, 1.0));
        }
    }

    #[test]
    fn test_spotlight_staggered_entrance() {
        let tl = PinnedTimeline::spotlight(Layout::Left);
        // halfway through the image tween, the CTA has not started yet
        let image = tl.pose(Part::Image, 0.15).unwrap();
        assert!(approx(image.opacity, 0.5));
        assert!(matches!(image.x, Offset::Vw(v) if approx(v, -30.0)));

        let cta = tl.pose(Part::Cta, 0.15).unwrap();
        assert!(approx(cta.opacity, 0.0));
        assert!(approx(cta.y, 15.0));

        let title = tl.pose(Part::Title, 0.2).unwrap();
        assert!(approx(title.opacity, 0.5));
    }

    #[test]
    fn test_spotlight_exit() {
        let tl = PinnedTimeline::spotlight(Layout::Left);
        let image = tl.pose(Part::Image, 1.0).unwrap();
        assert_eq!(image.x, Offset::Vw(18.0));
        assert!(approx(image.opacity, 0.0));

        let content = tl.pose(Part::Content, 1.0).unwrap();
        assert_eq!(content.x, Offset::Vw(10.0));

        let divider = tl.pose(Part::Divider, 1.0).unwrap();
        assert!(approx(divider.scale_y, 0.0));
        assert_eq!(divider.origin, Origin::Bottom);

        // ease-in: less than halfway gone at the midpoint
        let mid = tl.pose(Part::Image, 0.85).unwrap();
        assert!(mid.opacity > 0.5);
    }

    #[test]
    fn test_right_layout_mirrors_left() {
        let left = PinnedTimeline::spotlight(Layout::Left);
        let right = PinnedTimeline::spotlight(Layout::Right);
        for progress in [0.0, 0.1, 0.8, 1.0] {
            for part in [Part::Image, Part::Content] {
                let l = left.pose(part, progress).unwrap();
                let r = right.pose(part, progress).unwrap();
                assert!(approx(l.x.value(), -r.x.value()));
                assert!(approx(l.opacity, r.opacity));
            }
        }
    }

    #[test]
    fn test_about_timeline() {
        let tl = PinnedTimeline::about();
        assert!(tl.pose(Part::Label, 0.5).is_none());

        let cta = tl.pose(Part::Cta, 0.0).unwrap();
        assert!(approx(cta.scale, 0.92));
        assert!(approx(tl.pose(Part::Cta, 0.3).unwrap().scale, 1.0));

        let title = tl.pose(Part::Title, 0.0).unwrap();
        assert!(approx(title.y, 40.0));
    }

    #[test]
    fn test_about_exit_differs_from_left_spotlight() {
        let about = PinnedTimeline::about();
        let image = about.pose(Part::Image, 1.0).unwrap();
        assert_eq!(image.x, Offset::Vw(-18.0));
        assert!(approx(image.opacity, 0.0));
        let content = about.pose(Part::Content, 1.0).unwrap();
        assert_eq!(content.x, Offset::Vw(10.0));

        // entrance matches the left layout
        let spotlight = PinnedTimeline::spotlight(Layout::Left);
        assert_eq!(about.pose(Part::Image, 0.0), spotlight.pose(Part::Image, 0.0));
        assert_ne!(about.pose(Part::Image, 1.0), spotlight.pose(Part::Image, 1.0));
    }

    #[test]
    fn test_progress_is_clamped() {
        let tl = PinnedTimeline::spotlight(Layout::Left);
        assert_eq!(tl.pose(Part::Image, -1.0), tl.pose(Part::Image, 0.0));
        assert_eq!(tl.pose(Part::Image, 3.0), tl.pose(Part::Image, 1.0));
    }

    #[test]
    fn test_pinned_progress() {
        assert!(approx(pinned_progress(100.0, 800.0), 0.0));
        assert!(approx(pinned_progress(0.0, 800.0), 0.0));
        assert!(approx(pinned_progress(-520.0, 800.0), 0.5));
        assert!(approx(pinned_progress(-5000.0, 800.0), 1.0));
        assert!(approx(pinned_progress(-100.0, 0.0), 0.0));
    }

    #[test]
    fn test_reveal_trigger_thresholds() {
        let vh = 1000.0;
        assert!(!RevealTrigger::HEADLINE.is_active(801.0, vh));
        assert!(RevealTrigger::HEADLINE.is_active(800.0, vh));
        assert!(!RevealTrigger::CARDS.is_active(750.0, vh));
        assert!(RevealTrigger::CARDS.is_active(650.0, vh));
        // scrolled back above: reverses
        assert!(!RevealTrigger::CARDS.is_active(900.0, vh));
    }

    #[test]
    fn test_stagger_delay() {
        assert!(approx(stagger_delay(0, PRODUCT_STAGGER), 0.0));
        assert!(approx(stagger_delay(3, PRODUCT_STAGGER), 0.24));
        let card = CATEGORY_CARD_REVEAL.staggered(2, CATEGORY_STAGGER);
        assert!(approx(card.delay, 0.3));
    }

    #[test]
    fn test_reveal_style_delay_only_on_entry() {
        let reveal = SUBHEAD_REVEAL;
        let shown = reveal.style(true);
        assert!(shown.contains("opacity: 1;"));
        assert!(shown.contains("0.2s"));

        let hidden = reveal.style(false);
        assert!(hidden.contains("opacity: 0;"));
        assert!(hidden.contains("translate(0px, 20px)"));
        assert!(!hidden.contains("0.2s"));
    }

    #[test]
    fn test_reveal_animation() {
        let css = PRODUCT_CARD_REVEAL
            .staggered(2, PRODUCT_STAGGER)
            .animation("zera-rise");
        assert!(css.starts_with("--zera-from-transform: translate(0px, 30px);"));
        assert!(css.contains("--zera-from-opacity: 0;"));
        assert!(css.contains("animation: zera-rise 0.5s"));
        assert!(css.contains("0.16s both"));
    }

    #[test]
    fn test_hero_sequence_order() {
        let parts = [
            HeroPart::Image,
            HeroPart::Content,
            HeroPart::Wordmark,
            HeroPart::Tagline,
            HeroPart::Cta,
        ];
        let delays: Vec<f64> = parts.iter().map(|p| hero_reveal(*p).delay).collect();
        assert!(delays.windows(2).all(|w| w[0] < w[1]));
        assert!(approx(hero_reveal(HeroPart::Image).hidden.scale, 1.05));
        assert_eq!(hero_reveal(HeroPart::Content).hidden.x, Offset::Px(40.0));
    }

    #[test]
    fn test_pose_css() {
        assert_eq!(
            Pose::VISIBLE.css(),
            "transform: translate(0px, 0px); opacity: 1;"
        );
        let css = Pose::line(0.5, Origin::Bottom).css();
        assert!(css.contains("scaleY(0.5)"));
        assert!(css.contains("transform-origin: bottom;"));
        assert_eq!(Offset::Percent(100.0).css(), "100%");
    }

    #[test]
    fn test_layout_alternates() {
        assert_eq!(Layout::alternating(0), Layout::Right);
        assert_eq!(Layout::alternating(1), Layout::Left);
        assert_eq!(Layout::Right.to_string(), "right");
    }
}
