//! Brain Module Tests
//!
//! Aggregation and rendering tests for every intent, including the
//! degenerate cases (empty feed, missing tallies, question overflow).

use serde_json::json;

use crate::brain::{AggregatedResult, DataAggregator, Intent, ResponseRenderer};
use crate::config::AssistantConfig;
use crate::store::ChatStore;

fn aggregator() -> DataAggregator {
    DataAggregator::new(&AssistantConfig::default())
}

fn renderer() -> ResponseRenderer {
    ResponseRenderer::new(&AssistantConfig::default())
}

fn empty_store() -> ChatStore {
    serde_json::from_value(json!({
        "creator": { "name": "A", "username": "@a", "avatar": "A" },
        "chatMessages": []
    }))
    .expect("empty store fixture")
}

/// One quiet post with no reactions and no replies.
fn quiet_store() -> ChatStore {
    serde_json::from_value(json!({
        "creator": { "name": "A", "username": "@a", "avatar": "A" },
        "chatMessages": [
            { "id": 1, "timestamp": "Today, 9:00 AM", "content": "Hello out there" }
        ]
    }))
    .expect("quiet store fixture")
}

/// Seven replies containing questions, spread over two posts.
fn chatty_store() -> ChatStore {
    let reply = |id: u64, name: &str, text: &str| {
        json!({ "id": id, "username": name, "avatar": "XX", "content": text })
    };
    serde_json::from_value(json!({
        "creator": { "name": "A", "username": "@a", "avatar": "A" },
        "chatMessages": [
            {
                "id": 1,
                "timestamp": "Today, 9:00 AM",
                "content": "First post body that is long enough to need a context snippet when quoted below a question.",
                "replies": [
                    reply(11, "UserA", "Where is the link?"),
                    reply(12, "UserB", "What size did you get?"),
                    reply(13, "UserC", "Love it!"),
                    reply(14, "UserD", "Can you restock?"),
                    reply(15, "UserE", "Is this on sale?")
                ]
            },
            {
                "id": 2,
                "timestamp": "Today, 10:00 AM",
                "content": "Second post",
                "replies": [
                    reply(21, "UserF", "When is the next drop?"),
                    reply(22, "UserG", "How do I style this?"),
                    reply(23, "UserH", "Which color is best?")
                ]
            }
        ]
    }))
    .expect("chatty store fixture")
}

mod aggregator_tests {
    use super::*;

    #[test]
    fn test_summary_counts_come_from_the_data() {
        let store = ChatStore::sample();
        let result = aggregator().aggregate(Intent::SummarizeDiscussion, &store);

        let AggregatedResult::Summary {
            total_messages,
            total_replies,
            recent,
        } = result
        else {
            panic!("expected a Summary payload");
        };

        assert_eq!(total_messages, 4);
        assert_eq!(total_replies, 10);
        assert_eq!(recent.len(), 2);
        assert!(recent[0].content.starts_with("Ok team - the new Zara collection"));
        assert_eq!(recent[0].reply_count, 2);
        assert_eq!(recent[0].reaction_total, 60);
        assert_eq!(recent[1].reply_count, 3);
        assert_eq!(recent[1].reaction_total, 414);
    }

    #[test]
    fn test_summary_takes_at_most_two_posts() {
        let result = aggregator().aggregate(Intent::SummarizeDiscussion, &quiet_store());
        let AggregatedResult::Summary { recent, .. } = result else {
            panic!("expected a Summary payload");
        };
        assert_eq!(recent.len(), 1);
    }

    #[test]
    fn test_questions_are_exactly_the_replies_with_a_question_mark() {
        let store = ChatStore::sample();
        let result = aggregator().aggregate(Intent::FollowerQuestions, &store);

        let AggregatedResult::Questions(questions) = result else {
            panic!("expected a Questions payload");
        };

        let expected: Vec<&str> = store
            .recent_questions()
            .iter()
            .map(|reply| reply.content.as_str())
            .collect();
        let found: Vec<&str> = questions.iter().map(|q| q.question.as_str()).collect();
        assert_eq!(found, expected);
        assert_eq!(found, vec![
            "The leather bag is gorgeous! Where can I find it?",
            "Great video! Can you do one on winter boots next?",
        ]);
    }

    #[test]
    fn test_question_context_is_a_snippet_of_the_parent_body() {
        let store = ChatStore::sample();
        let AggregatedResult::Questions(questions) =
            aggregator().aggregate(Intent::FollowerQuestions, &store)
        else {
            panic!("expected a Questions payload");
        };

        for q in &questions {
            let snippet = q
                .context
                .strip_suffix("...")
                .expect("context ends with an ellipsis");
            assert!(snippet.chars().count() <= 50);
            assert!(
                store.messages().iter().any(|msg| msg.content.starts_with(snippet)),
                "snippet '{snippet}' is not a prefix of any post body"
            );
        }
    }

    #[test]
    fn test_aggregation_returns_all_questions_not_just_five() {
        let AggregatedResult::Questions(questions) =
            aggregator().aggregate(Intent::FollowerQuestions, &chatty_store())
        else {
            panic!("expected a Questions payload");
        };
        assert_eq!(questions.len(), 7);
    }

    #[test]
    fn test_most_liked_is_maximal_over_the_store() {
        let store = ChatStore::sample();
        let AggregatedResult::MostLiked(Some(top)) =
            aggregator().aggregate(Intent::MostLikedTopic, &store)
        else {
            panic!("expected a winning post");
        };

        assert_eq!(top.reaction_total, 591);
        for msg in store.messages() {
            assert!(top.reaction_total >= msg.reaction_total());
        }
    }

    #[test]
    fn test_most_liked_tie_goes_to_the_earlier_post() {
        let store: ChatStore = serde_json::from_value(json!({
            "creator": { "name": "A", "username": "@a", "avatar": "A" },
            "chatMessages": [
                { "id": 1, "timestamp": "t1", "content": "first", "reactions": { "heart": 5 } },
                { "id": 2, "timestamp": "t2", "content": "second", "reactions": { "fire": 5 } }
            ]
        }))
        .expect("tie fixture");

        let AggregatedResult::MostLiked(Some(top)) =
            aggregator().aggregate(Intent::MostLikedTopic, &store)
        else {
            panic!("expected a winning post");
        };
        assert_eq!(top.content, "first");
    }

    #[test]
    fn test_most_liked_on_empty_store_is_none() {
        let result = aggregator().aggregate(Intent::MostLikedTopic, &empty_store());
        assert_eq!(result, AggregatedResult::MostLiked(None));
    }

    #[test]
    fn test_engagement_totals_on_sample_feed() {
        let AggregatedResult::Engagement(totals) =
            aggregator().aggregate(Intent::EngagementStats, &ChatStore::sample())
        else {
            panic!("expected an Engagement payload");
        };

        assert_eq!(totals.total_messages, 4);
        assert_eq!(totals.total_replies, 10);
        assert_eq!(totals.total_reactions, 1431);
        assert_eq!(totals.avg_replies_per_post, 2.5);
        assert_eq!(totals.avg_reactions_per_post, 357.8);
    }

    #[test]
    fn test_engagement_averages_are_consistent_with_totals() {
        let AggregatedResult::Engagement(totals) =
            aggregator().aggregate(Intent::EngagementStats, &ChatStore::sample())
        else {
            panic!("expected an Engagement payload");
        };

        // Rounding to one decimal puts the average at most 0.05 off per
        // post; the epsilon absorbs floating-point error when the rounded
        // value lands exactly on that boundary (357.75 rounds to 357.8).
        let count = totals.total_messages as f64;
        let tolerance = 0.05 * count + 1e-9;
        assert!(
            (totals.avg_replies_per_post * count - totals.total_replies as f64).abs() <= tolerance
        );
        assert!(
            (totals.avg_reactions_per_post * count - f64::from(totals.total_reactions)).abs()
                <= tolerance
        );
    }

    #[test]
    fn test_engagement_on_empty_store_is_all_zeros() {
        let AggregatedResult::Engagement(totals) =
            aggregator().aggregate(Intent::EngagementStats, &empty_store())
        else {
            panic!("expected an Engagement payload");
        };

        assert_eq!(totals.total_messages, 0);
        assert_eq!(totals.avg_replies_per_post, 0.0);
        assert_eq!(totals.avg_reactions_per_post, 0.0);
    }

    #[test]
    fn test_suggestions_are_the_fixed_three() {
        let AggregatedResult::Suggestions(suggestions) =
            aggregator().aggregate(Intent::TopicSuggestions, &ChatStore::sample())
        else {
            panic!("expected a Suggestions payload");
        };
        assert_eq!(suggestions.len(), 3);

        // Content-independent: an empty feed yields the same list.
        let AggregatedResult::Suggestions(from_empty) =
            aggregator().aggregate(Intent::TopicSuggestions, &empty_store())
        else {
            panic!("expected a Suggestions payload");
        };
        assert_eq!(suggestions, from_empty);
    }

    #[test]
    fn test_help_carries_no_payload() {
        let result = aggregator().aggregate(Intent::Help, &ChatStore::sample());
        assert_eq!(result, AggregatedResult::Help);
    }
}

mod renderer_tests {
    use super::*;

    #[test]
    fn test_summary_template_structure() {
        let data = aggregator().aggregate(Intent::SummarizeDiscussion, &ChatStore::sample());
        let out = renderer().render(&data);

        assert!(out.starts_with("📊 **Today's Discussion Summary**"));
        assert!(out.contains("**4 messages**"));
        assert!(out.contains("**10 follower replies**"));
        assert!(out.contains("**Recent Topics:**"));
        assert!(out.contains("💬 2 replies, ❤️ 60 reactions"));
        assert!(out.ends_with("actively participating in discussions."));
    }

    #[test]
    fn test_summary_preview_is_truncated_to_sixty_chars() {
        let data = aggregator().aggregate(Intent::SummarizeDiscussion, &ChatStore::sample());
        let out = renderer().render(&data);

        let line = out
            .lines()
            .find(|line| line.starts_with("1. "))
            .expect("summary lists the first post");
        let preview = line
            .trim_start_matches("1. ")
            .trim_end_matches("...");
        assert_eq!(preview.chars().count(), 60);
    }

    #[test]
    fn test_questions_template_caps_at_five_with_overflow_note() {
        let data = aggregator().aggregate(Intent::FollowerQuestions, &chatty_store());
        let out = renderer().render(&data);

        assert!(out.contains("Your followers have asked 7 questions:"));
        assert!(out.contains("**5. UserF:**"));
        assert!(!out.contains("**6."));
        assert!(out.contains("...and 2 more questions."));
        assert!(out.ends_with("next post or video!"));
    }

    #[test]
    fn test_no_questions_renders_explanation_not_an_empty_list() {
        let data = aggregator().aggregate(Intent::FollowerQuestions, &quiet_store());
        let out = renderer().render(&data);

        assert!(out.contains("No direct questions found in recent replies."));
        assert!(!out.contains("**1."));
        assert!(out.contains("💡 **Tip:**"));
    }

    #[test]
    fn test_most_liked_template_names_top_reaction() {
        let data = aggregator().aggregate(Intent::MostLikedTopic, &ChatStore::sample());
        let out = renderer().render(&data);

        assert!(out.starts_with("🌟 **Most Liked Topic**"));
        assert!(out.contains("• 591 total reactions"));
        assert!(out.contains("• 3 replies"));
        assert!(out.contains("• Posted: Yesterday, 7:20 PM"));
        assert!(out.contains("The 😊 reaction was most popular (234 reactions)."));
    }

    #[test]
    fn test_most_liked_quotes_a_hundred_char_preview() {
        let data = aggregator().aggregate(Intent::MostLikedTopic, &ChatStore::sample());
        let out = renderer().render(&data);

        let quoted = out
            .split('"')
            .nth(1)
            .expect("winning post is quoted");
        assert!(quoted.ends_with("..."));
        assert!(quoted.trim_end_matches("...").chars().count() <= 100);
    }

    #[test]
    fn test_most_liked_without_reactions_has_a_defined_insight() {
        let data = aggregator().aggregate(Intent::MostLikedTopic, &quiet_store());
        let out = renderer().render(&data);

        assert!(out.contains("• 0 total reactions"));
        assert!(out.contains("This post has no reactions yet"));
    }

    #[test]
    fn test_most_liked_on_empty_store_renders_no_data_message() {
        let data = aggregator().aggregate(Intent::MostLikedTopic, &empty_store());
        let out = renderer().render(&data);

        assert!(out.starts_with("🌟 **Most Liked Topic**"));
        assert!(out.contains("No posts in the feed yet"));
    }

    #[test]
    fn test_suggestions_template_structure() {
        let data = aggregator().aggregate(Intent::TopicSuggestions, &ChatStore::sample());
        let out = renderer().render(&data);

        assert!(out.starts_with("💡 **Topic Suggestions for Your Next Chat**"));
        assert!(out.contains("**1. Work outfit styling**"));
        assert!(out.contains("_Why: High engagement on seasonal content_"));
        assert!(out.contains("**3. Accessory styling guide**"));
        assert!(out.ends_with("for maximum engagement!"));
    }

    #[test]
    fn test_engagement_insight_branches_on_threshold() {
        // Sample feed: 2.5 replies per post, above the 2.0 threshold.
        let high = renderer().render(
            &aggregator().aggregate(Intent::EngagementStats, &ChatStore::sample()),
        );
        assert!(high.contains("• 2.5 replies per post"));
        assert!(high.contains("• 357.8 reactions per post"));
        assert!(high.contains("Excellent! Your followers are highly engaged."));

        // One quiet post: 0.0 average, below the threshold.
        let low = renderer().render(
            &aggregator().aggregate(Intent::EngagementStats, &quiet_store()),
        );
        assert!(low.contains("• 0.0 replies per post"));
        assert!(low.contains("Try asking more open-ended questions"));
    }

    #[test]
    fn test_help_lists_the_five_example_queries() {
        let out = renderer().render(&AggregatedResult::Help);

        assert!(out.starts_with("👋 Hi! I'm your Group Chat AI assistant."));
        assert_eq!(out.matches("• \"").count(), 5);
        assert!(out.contains("• \"Summarize today's discussion\""));
        assert!(out.contains("• \"Show me engagement stats\""));
        assert!(out.ends_with("What would you like to know?"));
    }
}
