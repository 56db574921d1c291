use chrono::{Duration, SecondsFormat, Utc};
use site_core::{MediaItem, MediaType};
use std::sync::OnceLock;

pub const PROFILE_URL: &str = "https://www.instagram.com/kfasinfo/";

static PLACEHOLDERS: OnceLock<Vec<MediaItem>> = OnceLock::new();

const ENTRIES: [(&str, &str, &str); 4] = [
    (
        "placeholder-1",
        "/image/instagram2.webp",
        "KFAS continues to support scientific research and innovation in Kuwait. Follow us for the latest updates on our programs and initiatives. #KFAS #Science #Innovation",
    ),
    (
        "placeholder-2",
        "/image/Scientific.png",
        "Empowering researchers and scientists to tackle national challenges through cutting-edge research programs. #Research #Kuwait #Technology",
    ),
    (
        "placeholder-3",
        "/image/InstagramPost2.jpg",
        "Building a sustainable future through science, technology, and innovation. Join us in our mission. #Sustainability #Future #KFAS",
    ),
    (
        "placeholder-4",
        "/image/InstagramPost.png",
        "Science Directors Program 2022 - Empowering the next generation of science leaders in Kuwait. #ScienceDirectors #Leadership #KFAS",
    ),
];

/// フィードが取得できないときに表示する固定の投稿
///
/// 初回呼び出し時に 1 日ずつ古くなる日付で生成し、以後プロセス終了まで不変。
pub fn placeholder_posts() -> &'static [MediaItem] {
    PLACEHOLDERS.get_or_init(|| {
        let now = Utc::now();
        ENTRIES
            .iter()
            .enumerate()
            .map(|(days_ago, (id, media_url, caption))| MediaItem {
                id: id.to_string(),
                media_type: MediaType::Image,
                media_url: media_url.to_string(),
                permalink: PROFILE_URL.to_string(),
                timestamp: (now - Duration::days(days_ago as i64))
                    .to_rfc3339_opts(SecondsFormat::Millis, true),
                caption: Some(caption.to_string()),
            })
            .collect()
    })
}
