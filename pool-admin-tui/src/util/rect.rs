//! 布局辅助函数

use ratatui::layout::Rect;

/// 计算居中弹窗区域（超出时收缩到可用区域）
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 去掉四周边距后的内部区域
pub fn inset(area: Rect, horizontal: u16, vertical: u16) -> Rect {
    Rect::new(
        area.x.saturating_add(horizontal),
        area.y.saturating_add(vertical),
        area.width.saturating_sub(horizontal * 2),
        area.height.saturating_sub(vertical * 2),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_is_centered() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(50, 10, area);
        assert_eq!(rect, Rect::new(25, 15, 50, 10));
    }

    #[test]
    fn centered_rect_shrinks_to_area() {
        let area = Rect::new(2, 1, 30, 8);
        let rect = centered_rect(50, 20, area);
        assert_eq!(rect, Rect::new(2, 1, 30, 8));
    }

    #[test]
    fn inset_never_underflows() {
        let rect = inset(Rect::new(0, 0, 3, 1), 2, 1);
        assert_eq!(rect.width, 0);
        assert_eq!(rect.height, 0);
    }
}
