use chrono::{Duration, Utc};
use credcheck_common::Post;

/// The fixed sample set for the trends endpoint: ten posts spread over the
/// last 48 hours. Timestamps are computed relative to now on every call so
/// the window label always holds; nothing here is persisted.
pub fn sample_posts() -> Vec<Post> {
    let now = Utc::now();
    let post = |id: u32, hours_ago: i64, text: &str, source: &str| Post {
        id,
        text: text.to_string(),
        source: source.to_string(),
        timestamp: now - Duration::hours(hours_ago),
    };

    vec![
        post(
            1,
            2,
            "Drinking bleach cures COVID-19. Doctors don't want you to know this secret!",
            "Social Media",
        ),
        post(
            2,
            4,
            "The 2024 election was rigged! Millions of fake votes were counted.",
            "Twitter",
        ),
        post(
            3,
            6,
            "5G towers cause cancer and spread COVID-19. They're being installed everywhere!",
            "Facebook",
        ),
        post(
            4,
            8,
            "Vaccines contain microchips to track people. Bill Gates is behind this conspiracy.",
            "YouTube",
        ),
        post(
            5,
            12,
            "Climate change is a hoax created by scientists to get funding. The Earth is actually cooling.",
            "Reddit",
        ),
        post(
            6,
            18,
            "The moon landing was faked in a Hollywood studio. NASA has been lying for decades.",
            "TikTok",
        ),
        post(
            7,
            24,
            "Drinking bleach cures COVID-19. I tried it and felt better immediately!",
            "Instagram",
        ),
        post(
            8,
            30,
            "The election was stolen! We need to audit every single vote.",
            "Parler",
        ),
        post(
            9,
            36,
            "5G radiation is dangerous and causes health problems. Remove all towers!",
            "Telegram",
        ),
        post(
            10,
            48,
            "Vaccines are experimental and unsafe. Don't let them inject you with unknown chemicals.",
            "Gab",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_posts_with_unique_ids() {
        let posts = sample_posts();
        assert_eq!(posts.len(), 10);
        let mut ids: Vec<u32> = posts.iter().map(|p| p.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn all_posts_fall_within_the_48_hour_window() {
        let now = Utc::now();
        for post in sample_posts() {
            let age = now - post.timestamp;
            assert!(age >= Duration::zero());
            assert!(age <= Duration::hours(48) + Duration::minutes(1));
        }
    }
}
