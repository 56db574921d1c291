use crate::card::{self, PostCard, SKELETON_SLOTS};
use crate::source::FeedSource;
use crate::state::{settle, FallbackPolicy, FeedState};
use crate::visibility::VisibilityLatch;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// マウントされたフィードウィジェット
///
/// マウント時にプロキシへ 1 回だけ問い合わせ、最初の結果で状態が確定する。
/// 再取得やポーリングは行わない。
pub struct FeedWidget {
    state: watch::Receiver<FeedState>,
    task: JoinHandle<()>,
    visibility: VisibilityLatch,
}

impl FeedWidget {
    pub fn mount<S: FeedSource>(source: S, policy: FallbackPolicy) -> Self {
        let (tx, rx) = watch::channel(FeedState::Loading);

        let task = tokio::spawn(async move {
            let outcome = source.fetch_feed().await;
            let next = settle(outcome, policy);

            // アンマウント済みなら受信側が無いので、結果は捨てる
            if tx.send(next).is_err() {
                tracing::debug!("Feed widget was unmounted before the feed resolved");
            }
        });

        Self {
            state: rx,
            task,
            visibility: VisibilityLatch::default(),
        }
    }

    pub fn state(&self) -> FeedState {
        self.state.borrow().clone()
    }

    /// 状態が確定するまで待つ
    pub async fn settled(&mut self) -> FeedState {
        if let Ok(state) = self.state.wait_for(FeedState::is_settled).await {
            return state.clone();
        }
        self.state.borrow().clone()
    }

    /// 描画するカード。読み込み中・非表示のときは空
    pub fn cards(&self) -> Vec<PostCard> {
        card::cards(self.state.borrow().posts())
    }

    pub fn skeleton_slots(&self) -> usize {
        if self.state.borrow().is_settled() {
            0
        } else {
            SKELETON_SLOTS
        }
    }

    pub fn observe_intersection(&mut self, intersection_ratio: f64) -> bool {
        self.visibility.observe(intersection_ratio)
    }

    pub fn has_entered_viewport(&self) -> bool {
        self.visibility.is_visible()
    }

    /// アンマウントする。解決前の取得は中断され、状態は更新されない
    pub fn unmount(self) {}
}

impl Drop for FeedWidget {
    fn drop(&mut self) {
        self.task.abort();
    }
}
