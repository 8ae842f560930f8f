use credcheck_common::{AnalyzedPost, TopicLabel, Trend, TrendPost};

use crate::topics::extract_topic;

/// Maximum number of trends returned per aggregation.
pub const TOP_TRENDS: usize = 5;

struct TopicBucket {
    topic: TopicLabel,
    total_score: f64,
    posts: Vec<TrendPost>,
}

/// Group analyzed posts by topic and rank by frequency.
///
/// Buckets live in a locally-scoped Vec in first-occurrence order; only seven
/// topics exist, so linear lookup suffices and keeps the tie-break order of
/// the stable frequency sort explicit. The result is rebuilt from scratch on
/// every call — no state survives between invocations.
pub fn aggregate(posts: &[AnalyzedPost]) -> Vec<Trend> {
    let mut buckets: Vec<TopicBucket> = Vec::new();

    for analyzed in posts {
        let topic = extract_topic(&analyzed.post.text);
        let idx = match buckets.iter().position(|b| b.topic == topic) {
            Some(i) => i,
            None => {
                buckets.push(TopicBucket {
                    topic,
                    total_score: 0.0,
                    posts: Vec::new(),
                });
                buckets.len() - 1
            }
        };
        let bucket = &mut buckets[idx];
        bucket.total_score += analyzed.analysis.score;
        bucket.posts.push(TrendPost {
            text: analyzed.post.text.clone(),
            source: analyzed.post.source.clone(),
            timestamp: analyzed.post.timestamp,
            risk_tier: analyzed.analysis.risk_tier,
            score: analyzed.analysis.score,
        });
    }

    // Stable sort: ties keep first-occurrence order.
    buckets.sort_by(|a, b| b.posts.len().cmp(&a.posts.len()));
    buckets.truncate(TOP_TRENDS);

    buckets
        .into_iter()
        .map(|bucket| {
            let frequency = bucket.posts.len() as u32;
            Trend {
                topic: bucket.topic,
                frequency,
                average_risk_score: round2(bucket.total_score / frequency as f64),
                posts: bucket.posts,
            }
        })
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify;
    use crate::samples::sample_posts;
    use chrono::Utc;
    use credcheck_common::{AnalysisResult, Post, RiskTier};

    fn analyzed(posts: Vec<Post>) -> Vec<AnalyzedPost> {
        posts
            .into_iter()
            .map(|post| {
                let analysis = classify(&post.text);
                AnalyzedPost { post, analysis }
            })
            .collect()
    }

    fn post(id: u32, text: &str) -> Post {
        Post {
            id,
            text: text.to_string(),
            source: "Test".to_string(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn empty_input_yields_no_trends() {
        assert!(aggregate(&[]).is_empty());
    }

    #[test]
    fn sample_set_frequencies_sum_to_ten() {
        let trends = aggregate(&analyzed(sample_posts()));
        assert!(trends.len() <= TOP_TRENDS);
        let total: u32 = trends.iter().map(|t| t.frequency).sum();
        // The fixture produces exactly five topics, so nothing is truncated.
        assert_eq!(total, 10);
    }

    #[test]
    fn sample_set_topics_match_the_fixture() {
        let trends = aggregate(&analyzed(sample_posts()));
        let topics: Vec<TopicLabel> = trends.iter().map(|t| t.topic).collect();
        // Health claims the vaccine posts via rule priority, so the fixture
        // collapses to five topics and Vaccine Conspiracy never appears.
        assert!(topics.contains(&TopicLabel::HealthMisinformation));
        assert!(topics.contains(&TopicLabel::ElectionMisinformation));
        assert!(topics.contains(&TopicLabel::FiveGConspiracy));
        assert!(topics.contains(&TopicLabel::ClimateDenial));
        assert!(topics.contains(&TopicLabel::SpaceConspiracy));
        assert!(!topics.contains(&TopicLabel::VaccineConspiracy));
    }

    #[test]
    fn trends_are_sorted_by_frequency_descending() {
        let trends = aggregate(&analyzed(sample_posts()));
        for pair in trends.windows(2) {
            assert!(pair[0].frequency >= pair[1].frequency);
        }
        // Health Misinformation owns 5 of the 10 fixture posts: the two
        // bleach posts, the vaccine posts, and the 5G post that also
        // mentions COVID (rule 1 outranks rule 3).
        assert_eq!(trends[0].topic, TopicLabel::HealthMisinformation);
        assert_eq!(trends[0].frequency, 5);
    }

    #[test]
    fn ties_keep_first_occurrence_order() {
        let posts = vec![
            post(1, "nasa moon landing"),
            post(2, "the election results"),
            post(3, "nasa again"),
            post(4, "vote counting"),
        ];
        let trends = aggregate(&analyzed(posts));
        assert_eq!(trends.len(), 2);
        assert_eq!(trends[0].topic, TopicLabel::SpaceConspiracy);
        assert_eq!(trends[1].topic, TopicLabel::ElectionMisinformation);
    }

    #[test]
    fn output_is_truncated_to_top_five() {
        let posts = vec![
            post(1, "covid news"),
            post(2, "election news"),
            post(3, "5g news"),
            post(4, "climate news"),
            post(5, "nasa news"),
            post(6, "gates news"),
            post(7, "plain news"),
        ];
        let trends = aggregate(&analyzed(posts));
        assert_eq!(trends.len(), TOP_TRENDS);
    }

    #[test]
    fn average_score_is_rounded_to_two_decimals() {
        let mut items = analyzed(vec![post(1, "covid a"), post(2, "covid b"), post(3, "covid c")]);
        items[0].analysis.score = 0.1;
        items[1].analysis.score = 0.2;
        items[2].analysis.score = 0.3;
        let trends = aggregate(&items);
        assert_eq!(trends.len(), 1);
        // (0.1 + 0.2 + 0.3) / 3 = 0.20000000000000004 before rounding
        assert_eq!(trends[0].average_risk_score, 0.2);
    }

    #[test]
    fn per_post_detail_is_retained() {
        let trends = aggregate(&analyzed(sample_posts()));
        let health = trends
            .iter()
            .find(|t| t.topic == TopicLabel::HealthMisinformation)
            .unwrap();
        assert_eq!(health.posts.len(), health.frequency as usize);
        let first = &health.posts[0];
        assert!(first.text.contains("bleach"));
        assert_eq!(first.source, "Social Media");
        assert_eq!(first.risk_tier, RiskTier::High);
    }

    #[test]
    fn aggregation_does_not_mutate_input_semantics() {
        // Two identical invocations over the same input agree.
        let items = analyzed(sample_posts());
        let a = aggregate(&items);
        let b = aggregate(&items);
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.topic, y.topic);
            assert_eq!(x.frequency, y.frequency);
            assert_eq!(x.average_risk_score, y.average_risk_score);
        }
    }

    #[test]
    fn classifier_failures_do_not_change_frequencies() {
        // A substituted fallback result still lands in the right bucket.
        let posts = vec![post(1, "covid claim"), post(2, "covid claim two")];
        let mut items = analyzed(posts);
        items[1].analysis = AnalysisResult {
            risk_tier: RiskTier::High,
            score: 0.8,
            reasons: vec!["Content requires verification".to_string()],
            educational_tip: String::new(),
            sources: vec![],
        };
        let trends = aggregate(&items);
        assert_eq!(trends.len(), 1);
        assert_eq!(trends[0].frequency, 2);
    }
}
