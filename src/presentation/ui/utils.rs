use ratatui::layout::Rect;

/// Returns a `width` x `height` rect centered in `area`, shrunk to fit.
#[must_use]
pub fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_fixed() {
        let rect = centered_fixed(10, 4, Rect::new(0, 0, 30, 10));
        assert_eq!(rect, Rect::new(10, 3, 10, 4));
    }

    #[test]
    fn test_centered_fixed_shrinks() {
        let rect = centered_fixed(80, 40, Rect::new(5, 5, 20, 10));
        assert_eq!(rect, Rect::new(5, 5, 20, 10));
    }
}
