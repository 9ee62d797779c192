//! UI state that lives on the landing page, kept free of browser types.

/// Which FAQ entry is expanded, if any. At most one at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Clicking the open entry collapses it, clicking any other entry opens that one instead.
    pub fn toggled(self, index: usize) -> Self {
        if self.is_open(index) {
            Accordion { open: None }
        } else {
            Accordion { open: Some(index) }
        }
    }

    pub fn glyph(&self, index: usize) -> &'static str {
        if self.is_open(index) { "−" } else { "+" }
    }
}

// Browsers report the ratio at the crossing rounded from pixel rects, so it can land just under the threshold.
const RATIO_TOLERANCE: f64 = 0.01;

/// One-shot visibility latch. Goes from "not entered" to "entered" once and stays there.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntryLatch {
    threshold: f64,
    entered: bool,
}

impl EntryLatch {
    pub fn new(threshold: f64) -> Self {
        EntryLatch { threshold: threshold.clamp(0.0, 1.0), entered: false }
    }

    pub fn entered(&self) -> bool {
        self.entered
    }

    /// Feed one visibility notification. Returns true only for the notification that flips the latch.
    pub fn observe(&mut self, is_intersecting: bool, ratio: f64) -> bool {
        if self.entered || !is_intersecting || ratio + RATIO_TOLERANCE < self.threshold {
            return false;
        }
        self.entered = true;
        true
    }
}

/// Number animating from 0 to `target` over `duration_ms`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountUp {
    pub target: u64,
    pub duration_ms: u32,
}

impl CountUp {
    pub fn new(target: u64, duration_ms: u32) -> Self {
        CountUp { target, duration_ms }
    }

    /// Displayed value `elapsed_ms` after the animation started.
    ///
    /// Uses an exponential ease-out, so the number races up first and settles on the target.
    /// Never exceeds the target and is exactly the target once the duration has passed.
    pub fn value_at(&self, elapsed_ms: f64) -> u64 {
        if elapsed_ms <= 0.0 {
            return 0;
        }
        if self.duration_ms == 0 || elapsed_ms >= f64::from(self.duration_ms) {
            return self.target;
        }
        let progress = elapsed_ms / f64::from(self.duration_ms);
        let eased = (1.0 - 2f64.powf(-10.0 * progress)) * 1024.0 / 1023.0;
        let value = (self.target as f64 * eased).floor() as u64;
        value.min(self.target)
    }

    /// Next value to show given what is already on screen. Never goes backwards, even if the
    /// clock does.
    pub fn advance(&self, shown: u64, elapsed_ms: f64) -> u64 {
        self.value_at(elapsed_ms).max(shown).min(self.target)
    }

    pub fn is_done(&self, value: u64) -> bool {
        value >= self.target
    }
}

/// Formats with "," between thousands, e.g. 1234567 -> "1,234,567".
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn format_stat(value: u64) -> String {
    format!("{}+", format_count(value))
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ContactModal {
    open: bool,
}

impl ContactModal {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn opened(self) -> Self {
        ContactModal { open: true }
    }

    pub fn closed(self) -> Self {
        ContactModal { open: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::FAQS;

    #[test]
    fn accordion_starts_collapsed() {
        let accordion = Accordion::default();
        assert_eq!(accordion.open_index(), None);
        for i in 0..FAQS.len() {
            assert!(!accordion.is_open(i));
            assert_eq!(accordion.glyph(i), "+");
        }
    }

    #[test]
    fn accordion_opens_only_clicked_entry() {
        for i in 0..FAQS.len() {
            let accordion = Accordion::default().toggled(i);
            assert_eq!(accordion.open_index(), Some(i));
            assert_eq!(accordion.glyph(i), "−");
            for j in (0..FAQS.len()).filter(|&j| j != i) {
                assert!(!accordion.is_open(j));
            }
        }
    }

    #[test]
    fn accordion_second_click_collapses() {
        for i in 0..FAQS.len() {
            assert_eq!(Accordion::default().toggled(i).toggled(i), Accordion::default());
        }
    }

    #[test]
    fn accordion_switches_between_entries() {
        for i in 0..FAQS.len() {
            for j in (0..FAQS.len()).filter(|&j| j != i) {
                let accordion = Accordion::default().toggled(i).toggled(j);
                assert!(accordion.is_open(j));
                assert!(!accordion.is_open(i));
            }
        }
    }

    #[test]
    fn latch_waits_for_threshold() {
        let mut latch = EntryLatch::new(0.2);
        assert!(!latch.observe(false, 0.0));
        assert!(!latch.observe(true, 0.1));
        assert!(!latch.entered());
        assert!(latch.observe(true, 0.25));
        assert!(latch.entered());
    }

    #[test]
    fn latch_never_resets() {
        let mut latch = EntryLatch::new(0.2);
        latch.observe(true, 1.0);
        // scrolled back out, then in again
        assert!(!latch.observe(false, 0.0));
        assert!(latch.entered());
        assert!(!latch.observe(true, 1.0));
        assert!(latch.entered());
    }

    #[test]
    fn latch_accepts_ratio_rounded_below_threshold() {
        let mut latch = EntryLatch::new(0.2);
        assert!(latch.observe(true, 0.1999));
        assert!(latch.entered());
    }

    #[test]
    fn latch_threshold_is_clamped() {
        let mut latch = EntryLatch::new(3.0);
        assert!(!latch.observe(true, 0.95));
        assert!(latch.observe(true, 1.0));
    }

    #[test]
    fn count_up_starts_at_zero_and_lands_on_target() {
        let count = CountUp::new(1000, 2000);
        assert_eq!(count.value_at(0.0), 0);
        assert_eq!(count.value_at(2000.0), 1000);
        assert_eq!(count.value_at(5000.0), 1000);
        assert!(count.is_done(count.value_at(2000.0)));
        assert_eq!(format_stat(count.value_at(2000.0)), "1,000+");
    }

    #[test]
    fn count_up_is_monotonic() {
        let count = CountUp::new(500, 2000);
        let mut previous = 0;
        for ms in (0..=2100).step_by(16) {
            let value = count.value_at(ms as f64);
            assert!(value >= previous, "{} dropped below {} at {}ms", value, previous, ms);
            assert!(value <= 500);
            previous = value;
        }
        assert_eq!(previous, 500);
    }

    #[test]
    fn count_up_survives_clock_going_backwards() {
        let count = CountUp::new(1000, 2000);
        let shown = count.advance(0, 500.0);
        assert!(shown > 0);
        assert_eq!(count.advance(shown, -50.0), shown);
        assert_eq!(count.advance(shown, 100.0), shown);
        assert_eq!(count.advance(shown, 2000.0), 1000);
        assert_eq!(count.advance(1000, 3000.0), 1000);
    }

    #[test]
    fn count_up_with_zero_duration_jumps() {
        assert_eq!(CountUp::new(50, 0).value_at(1.0), 50);
        assert_eq!(CountUp::new(0, 2000).value_at(100.0), 0);
    }

    #[test]
    fn thousands_separator() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1234567), "1,234,567");
        assert_eq!(format_stat(100), "100+");
    }

    #[test]
    fn modal_open_close_idempotent() {
        let modal = ContactModal::default();
        assert!(!modal.is_open());
        assert!(modal.opened().opened().is_open());
        assert!(!modal.opened().closed().is_open());
        assert_eq!(modal.closed(), modal);
    }
}
