//! Cyclic index arithmetic for the image carousel.
//!
//! The index itself is owned by whichever view embeds the carousel; this
//! module only computes transitions. An empty image list has no valid index,
//! so every transition over it yields `None` and no modulo is evaluated.

/// A navigation request from a button or key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselAction {
    /// Advance one image, wrapping to the first.
    Next,
    /// Go back one image, wrapping to the last.
    Previous,
    /// Jump to the first image.
    First,
    /// Jump to the last image.
    Last,
}

impl CarouselAction {
    /// Maps a `KeyboardEvent.key` value to an action.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowRight" | "Right" => Some(Self::Next),
            "ArrowLeft" | "Left" => Some(Self::Previous),
            "Home" => Some(Self::First),
            "End" => Some(Self::Last),
            _ => None,
        }
    }
}

/// Index reached by applying `action` at `current` over `len` images.
///
/// Returns `None` when `len == 0`. A stale `current` outside `[0, len)` is
/// first folded back into range.
#[must_use]
pub fn apply(action: CarouselAction, current: usize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let current = current % len;
    Some(match action {
        CarouselAction::Next => (current + 1) % len,
        CarouselAction::Previous => (current + len - 1) % len,
        CarouselAction::First => 0,
        CarouselAction::Last => len - 1,
    })
}

/// Index after pressing "next".
#[must_use]
pub fn next_index(current: usize, len: usize) -> Option<usize> {
    apply(CarouselAction::Next, current, len)
}

/// Index after pressing "previous".
#[must_use]
pub fn previous_index(current: usize, len: usize) -> Option<usize> {
    apply(CarouselAction::Previous, current, len)
}

/// Valid index to display for `current`, `None` when there are no images.
#[must_use]
pub fn visible_index(current: usize, len: usize) -> Option<usize> {
    (len > 0).then(|| current % len)
}

/// Accessible label for the visible image: `"Image 2 of 5"`.
#[must_use]
pub fn position_label(current: usize, len: usize) -> Option<String> {
    visible_index(current, len).map(|index| format!("Image {} of {len}", index + 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_next_wraps_to_start() {
        assert_eq!(next_index(0, 3), Some(1));
        assert_eq!(next_index(1, 3), Some(2));
        assert_eq!(next_index(2, 3), Some(0));
    }

    #[test]
    fn test_previous_wraps_to_end() {
        assert_eq!(previous_index(0, 3), Some(2));
        assert_eq!(previous_index(2, 3), Some(1));
    }

    #[test]
    fn test_single_image_stays_put() {
        assert_eq!(next_index(0, 1), Some(0));
        assert_eq!(previous_index(0, 1), Some(0));
    }

    #[test]
    fn test_empty_list_has_no_transitions() {
        for action in [
            CarouselAction::Next,
            CarouselAction::Previous,
            CarouselAction::First,
            CarouselAction::Last,
        ] {
            assert_eq!(apply(action, 0, 0), None);
        }
        assert_eq!(visible_index(0, 0), None);
        assert_eq!(position_label(0, 0), None);
    }

    #[test]
    fn test_first_and_last() {
        assert_eq!(apply(CarouselAction::First, 3, 5), Some(0));
        assert_eq!(apply(CarouselAction::Last, 0, 5), Some(4));
    }

    #[test]
    fn test_stale_index_is_folded_into_range() {
        assert_eq!(visible_index(7, 3), Some(1));
        assert_eq!(next_index(7, 3), Some(2));
    }

    #[test]
    fn test_position_label() {
        assert_eq!(position_label(0, 4).as_deref(), Some("Image 1 of 4"));
        assert_eq!(position_label(3, 4).as_deref(), Some("Image 4 of 4"));
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(
            CarouselAction::from_key("ArrowRight"),
            Some(CarouselAction::Next)
        );
        assert_eq!(
            CarouselAction::from_key("ArrowLeft"),
            Some(CarouselAction::Previous)
        );
        assert_eq!(CarouselAction::from_key("Home"), Some(CarouselAction::First));
        assert_eq!(CarouselAction::from_key("End"), Some(CarouselAction::Last));
        assert_eq!(CarouselAction::from_key("ArrowUp"), None);
        assert_eq!(CarouselAction::from_key("a"), None);
    }

    proptest! {
        #[test]
        fn prop_index_tracks_net_moves(len in 1usize..32, moves in prop::collection::vec(any::<bool>(), 0..64)) {
            let mut index = 0usize;
            let mut nexts = 0i64;
            let mut previouses = 0i64;
            for forward in moves {
                index = if forward {
                    nexts += 1;
                    next_index(index, len).unwrap()
                } else {
                    previouses += 1;
                    previous_index(index, len).unwrap()
                };
                prop_assert!(index < len);
            }
            let expected = (nexts - previouses).rem_euclid(i64::try_from(len).unwrap());
            prop_assert_eq!(i64::try_from(index).unwrap(), expected);
        }
    }
}
