//! Scroll-triggered reveal of content cards.
//!
//! A headless counterpart of an intersection observer: cards are registered
//! once, after the first successful render, and become (and stay) visible as
//! soon as their visible fraction inside the scrolling viewport crosses a
//! fixed threshold. Cards added after registration are not observed; there is
//! no dynamic re-scan.

use crate::Viewport;

/// Fraction of a card that must be inside the viewport before it reveals.
pub const DEFAULT_THRESHOLD: f32 = 0.1;

/// Card height used by the stacking layout, in pixels.
pub const CARD_HEIGHT: u32 = 360;
/// Vertical gap between stacked cards.
pub const CARD_MARGIN: u32 = 16;

/// An axis-aligned box in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Overlapping area with another rect; zero when disjoint.
    pub fn intersection_area(&self, other: &Rect) -> u64 {
        let left = self.x.max(other.x);
        let right = (self.x + self.width as i32).min(other.x + other.width as i32);
        let top = self.y.max(other.y);
        let bottom = (self.y + self.height as i32).min(other.y + other.height as i32);
        if right <= left || bottom <= top {
            return 0;
        }
        (right - left) as u64 * (bottom - top) as u64
    }
}

/// Fraction of `card` visible inside `viewport`, in 0.0..=1.0.
pub fn visible_fraction(card: &Rect, viewport: &Rect) -> f32 {
    let area = card.area();
    if area == 0 {
        return 0.0;
    }
    card.intersection_area(viewport) as f32 / area as f32
}

struct Card {
    id: String,
    rect: Rect,
    revealed: bool,
}

/// Watches registered cards and marks them visible when they intersect the
/// viewport. Revealing is sticky; a card never goes back to hidden.
pub struct RevealObserver {
    threshold: f32,
    cards: Vec<Card>,
}

impl RevealObserver {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            cards: Vec::new(),
        }
    }

    /// Register one card for observation.
    pub fn observe(&mut self, id: impl Into<String>, rect: Rect) {
        self.cards.push(Card {
            id: id.into(),
            rect,
            revealed: false,
        });
    }

    /// Process a scroll: the viewport rect has moved, and every still-hidden
    /// card whose visible fraction crosses the threshold is marked visible.
    /// Returns the ids newly revealed by this scroll, in registration order.
    pub fn scroll_to(&mut self, viewport: Rect) -> Vec<String> {
        let mut newly = Vec::new();
        for card in &mut self.cards {
            if !card.revealed && visible_fraction(&card.rect, &viewport) >= self.threshold {
                card.revealed = true;
                newly.push(card.id.clone());
            }
        }
        newly
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.cards.iter().any(|c| c.id == id && c.revealed)
    }

    pub fn observed_count(&self) -> usize {
        self.cards.len()
    }
}

/// Stack card rects vertically down the page, one per id, full content width.
/// This stands in for real layout; cards appear in document order.
pub fn stack_cards(ids: Vec<String>, viewport: Viewport) -> Vec<(String, Rect)> {
    let width = viewport.width.saturating_sub(2 * CARD_MARGIN);
    let mut y = CARD_MARGIN as i32;
    ids.into_iter()
        .map(|id| {
            let rect = Rect {
                x: CARD_MARGIN as i32,
                y,
                width,
                height: CARD_HEIGHT,
            };
            y += (CARD_HEIGHT + CARD_MARGIN) as i32;
            (id, rect)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport_at(scroll_y: i32) -> Rect {
        Rect {
            x: 0,
            y: scroll_y,
            width: 1280,
            height: 720,
        }
    }

    #[test]
    fn fraction_is_zero_when_disjoint_and_one_when_contained() {
        let card = Rect {
            x: 0,
            y: 1000,
            width: 100,
            height: 100,
        };
        assert_eq!(visible_fraction(&card, &viewport_at(0)), 0.0);
        assert_eq!(visible_fraction(&card, &viewport_at(900)), 1.0);
    }

    #[test]
    fn card_reveals_when_fraction_crosses_threshold() {
        let mut observer = RevealObserver::new(DEFAULT_THRESHOLD);
        let card = Rect {
            x: 0,
            y: 1000,
            width: 100,
            height: 100,
        };
        observer.observe("personal-info", card);
        // 10 px of the 100 px card visible: exactly at the 0.1 threshold.
        assert!(observer.scroll_to(viewport_at(0)).is_empty());
        assert_eq!(observer.scroll_to(viewport_at(290)), vec!["personal-info"]);
    }

    #[test]
    fn reveal_is_sticky() {
        let mut observer = RevealObserver::new(DEFAULT_THRESHOLD);
        observer.observe(
            "card",
            Rect {
                x: 0,
                y: 0,
                width: 100,
                height: 100,
            },
        );
        assert_eq!(observer.scroll_to(viewport_at(0)).len(), 1);
        // Scroll far away: the card stays revealed and is not re-reported.
        assert!(observer.scroll_to(viewport_at(100_000)).is_empty());
        assert!(observer.is_revealed("card"));
    }

    #[test]
    fn stacked_cards_are_ordered_and_spaced() {
        let rects = stack_cards(
            vec!["a".into(), "b".into(), "c".into()],
            Viewport {
                width: 800,
                height: 600,
            },
        );
        assert_eq!(rects.len(), 3);
        assert_eq!(rects[0].1.y, CARD_MARGIN as i32);
        assert_eq!(
            rects[1].1.y - rects[0].1.y,
            (CARD_HEIGHT + CARD_MARGIN) as i32
        );
        assert!(rects.iter().all(|(_, r)| r.width == 800 - 2 * CARD_MARGIN));
    }
}
