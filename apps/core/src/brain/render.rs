//! Response templates.
//!
//! Turns an aggregation payload into a markdown-lite display string: bold
//! spans via `**...**` and literal newlines. The UI converts those two
//! features (and nothing else) to markup via [`to_html`].

use regex::Regex;
use std::fmt::Write;
use std::sync::LazyLock;

use super::aggregate::{
    truncate_chars, AggregatedResult, EngagementTotals, FollowerQuestion, RecentTopic, TopPost,
    TopicSuggestion,
};
use crate::config::AssistantConfig;

/// Example queries listed in the help response, one per supported intent.
const EXAMPLE_QUERIES: &[&str] = &[
    "Summarize today's discussion",
    "What questions do followers have?",
    "Suggest topics for next chat",
    "What topic was most liked?",
    "Show me engagement stats",
];

/// Renders one response string per aggregation payload.
pub struct ResponseRenderer {
    max_rendered_questions: usize,
    summary_preview_chars: usize,
    top_post_preview_chars: usize,
    high_engagement_threshold: f64,
}

impl ResponseRenderer {
    /// Create a renderer with the given limits.
    pub fn new(config: &AssistantConfig) -> Self {
        Self {
            max_rendered_questions: config.max_rendered_questions,
            summary_preview_chars: config.summary_preview_chars,
            top_post_preview_chars: config.top_post_preview_chars,
            high_engagement_threshold: config.high_engagement_threshold,
        }
    }

    /// Render the response for one aggregation payload. Pure; the payload
    /// shape always matches the intent by construction.
    pub fn render(&self, data: &AggregatedResult) -> String {
        match data {
            AggregatedResult::Summary {
                total_messages,
                total_replies,
                recent,
            } => self.summary(*total_messages, *total_replies, recent),
            AggregatedResult::Questions(questions) => self.questions(questions),
            AggregatedResult::MostLiked(top) => self.most_liked(top.as_ref()),
            AggregatedResult::Suggestions(suggestions) => self.suggestions(suggestions),
            AggregatedResult::Engagement(totals) => self.engagement(totals),
            AggregatedResult::Help => help(),
        }
    }

    fn summary(
        &self,
        total_messages: usize,
        total_replies: usize,
        recent: &[RecentTopic],
    ) -> String {
        let mut out = String::from("📊 **Today's Discussion Summary**\n\n");
        let _ = write!(
            out,
            "You've posted **{total_messages} messages** today with **{total_replies} follower replies**.\n\n"
        );

        out.push_str("**Recent Topics:**\n");
        for (index, topic) in recent.iter().enumerate() {
            let preview = truncate_chars(&topic.content, self.summary_preview_chars);
            let _ = writeln!(out, "{}. {}...", index + 1, preview);
            let _ = write!(
                out,
                "   💬 {} replies, ❤️ {} reactions\n\n",
                topic.reply_count, topic.reaction_total
            );
        }

        out.push_str(
            "💡 **Insight:** Great engagement! Your community is actively participating in discussions.",
        );
        out
    }

    fn questions(&self, questions: &[FollowerQuestion]) -> String {
        let mut out = String::from("❓ **Follower Questions**\n\n");

        if questions.is_empty() {
            out.push_str(
                "No direct questions found in recent replies. Your followers are mostly sharing thoughts and feedback!\n\n",
            );
            out.push_str("💡 **Tip:** Consider asking open-ended questions to encourage more interaction.");
            return out;
        }

        let _ = write!(out, "Your followers have asked {} questions:\n\n", questions.len());

        for (index, q) in questions.iter().take(self.max_rendered_questions).enumerate() {
            let _ = writeln!(out, "**{}. {}:**", index + 1, q.username);
            let _ = writeln!(out, "\"{}\"", q.question);
            let _ = write!(out, "_Context: {}_\n\n", q.context);
        }

        if questions.len() > self.max_rendered_questions {
            let _ = write!(
                out,
                "...and {} more questions.\n\n",
                questions.len() - self.max_rendered_questions
            );
        }

        out.push_str("💡 **Tip:** Consider addressing these questions in your next post or video!");
        out
    }

    fn most_liked(&self, top: Option<&TopPost>) -> String {
        let mut out = String::from("🌟 **Most Liked Topic**\n\n");

        let Some(post) = top else {
            out.push_str(
                "No posts in the feed yet, so there is nothing to rank. Share something with your followers first!",
            );
            return out;
        };

        let preview = truncate_chars(&post.content, self.top_post_preview_chars);
        out.push_str("Your most engaged post was:\n\n");
        let _ = write!(out, "\"{preview}...\"\n\n");
        out.push_str("**Engagement:**\n");
        let _ = writeln!(out, "• {} total reactions", post.reaction_total);
        let _ = writeln!(out, "• {} replies", post.reply_count);
        let _ = write!(out, "• Posted: {}\n\n", post.timestamp);

        match post.reactions.top() {
            Some((kind, count)) => {
                let _ = write!(
                    out,
                    "💡 **Insight:** The {} reaction was most popular ({} reactions). Your community loves this type of content!",
                    kind.emoji(),
                    count
                );
            }
            None => {
                out.push_str(
                    "💡 **Insight:** This post has no reactions yet. Ask your followers what they think!",
                );
            }
        }
        out
    }

    fn suggestions(&self, suggestions: &[TopicSuggestion]) -> String {
        let mut out = String::from("💡 **Topic Suggestions for Your Next Chat**\n\n");
        out.push_str("Based on follower engagement and questions, here are some great topics:\n\n");

        for (index, suggestion) in suggestions.iter().enumerate() {
            let _ = writeln!(out, "**{}. {}**", index + 1, suggestion.topic);
            let _ = write!(out, "_Why: {}_\n\n", suggestion.reason);
        }

        out.push_str(
            "🎯 **Pro Tip:** Combine multiple follower interests into a single comprehensive post for maximum engagement!",
        );
        out
    }

    fn engagement(&self, totals: &EngagementTotals) -> String {
        let mut out = String::from("📈 **Engagement Statistics**\n\n");
        out.push_str("**Overall Activity:**\n");
        let _ = writeln!(out, "• {} chat messages posted", totals.total_messages);
        let _ = writeln!(out, "• {} total replies from followers", totals.total_replies);
        let _ = write!(out, "• {} total reactions\n\n", totals.total_reactions);

        out.push_str("**Averages:**\n");
        let _ = writeln!(out, "• {:.1} replies per post", totals.avg_replies_per_post);
        let _ = write!(out, "• {:.1} reactions per post\n\n", totals.avg_reactions_per_post);

        out.push_str("💡 **Insight:** ");
        if totals.avg_replies_per_post > self.high_engagement_threshold {
            out.push_str("Excellent! Your followers are highly engaged. Keep the conversation going!");
        } else {
            out.push_str("Try asking more open-ended questions to encourage more replies and discussion.");
        }
        out
    }
}

fn help() -> String {
    let mut out = String::from("👋 Hi! I'm your Group Chat AI assistant.\n\n");
    out.push_str(
        "I can help you understand your chat discussions and follower engagement. Try asking me:\n\n",
    );
    for example in EXAMPLE_QUERIES {
        let _ = writeln!(out, "• \"{example}\"");
    }
    out.push('\n');
    out.push_str("What would you like to know?");
    out
}

/// Convert `**bold**` spans and newlines into display markup. These are the
/// only two markdown features the chat UI supports.
pub fn to_html(text: &str) -> String {
    static BOLD: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("Invalid regex: bold span pattern"));
    BOLD.replace_all(text, "<strong>$1</strong>").replace('\n', "<br>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_html_converts_bold_and_newlines() {
        assert_eq!(
            to_html("**Stats**\nline two"),
            "<strong>Stats</strong><br>line two"
        );
    }

    #[test]
    fn test_to_html_is_non_greedy() {
        assert_eq!(
            to_html("**a** and **b**"),
            "<strong>a</strong> and <strong>b</strong>"
        );
    }

    #[test]
    fn test_to_html_leaves_plain_text_alone() {
        assert_eq!(to_html("no markup here"), "no markup here");
    }
}
