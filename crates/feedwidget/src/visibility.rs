/// 表示領域との交差率がこの値以上になったら「見えた」とみなす
pub const VISIBILITY_THRESHOLD: f64 = 0.1;

/// 一度だけ立つ「画面に入った」フラグ
///
/// 登場アニメーションの開始判定専用。フィード取得の状態とは独立している。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityLatch {
    threshold: f64,
    visible: bool,
}

impl Default for VisibilityLatch {
    fn default() -> Self {
        Self::with_threshold(VISIBILITY_THRESHOLD)
    }
}

impl VisibilityLatch {
    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            threshold,
            visible: false,
        }
    }

    /// 交差率を通知する。立ったフラグは二度と下がらない
    pub fn observe(&mut self, intersection_ratio: f64) -> bool {
        if !self.visible && intersection_ratio >= self.threshold && intersection_ratio > 0.0 {
            self.visible = true;
        }
        self.visible
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
