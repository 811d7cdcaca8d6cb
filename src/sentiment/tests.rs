//! End-to-end analyzer runs with a scripted model.

#[cfg(test)]
mod tests {
    use crate::sentiment::*;
    use crate::testkit::{test_config, ScriptedBackend};
    use std::sync::Arc;

    fn analyzer(backend: ScriptedBackend) -> SentimentAnalyzer {
        SentimentAnalyzer::new(&test_config(), Arc::new(backend))
    }

    #[tokio::test]
    async fn best_day_is_on_fire() {
        let analyzer = analyzer(ScriptedBackend::replying("Score: 0.9\nEmotion: ecstatic"));
        let result = analyzer.analyze("I'm having the best day ever!").await.unwrap();

        let scores = result.scores();
        assert!(scores.lexicon.value().polarity > 0.0);
        assert!(scores.rules.value().compound > 0.0);
        assert!(scores.llm.value().score > 0.0);

        // 0.3 * 1.0 + 0.3 * 0.6696 + 0.4 * 0.9
        assert_eq!(result.combined_score(), 0.861);
        assert!(result.combined_score() > 0.5);
        assert_eq!(result.mood(), MoodCategory::VeryPositive);
        assert_eq!(result.emoji(), "🔥");
        assert_eq!(result.vibe(), "On Fire");
        assert_eq!(result.summary(), "🔥 On Fire (Score: 0.86)");
    }

    #[tokio::test]
    async fn okay_day_is_neutral() {
        let analyzer = analyzer(ScriptedBackend::replying("Score: 0.0\nEmotion: indifferent"));
        let result = analyzer
            .analyze("Today was okay, nothing special happened.")
            .await
            .unwrap();

        assert!(result.combined_score() > -0.1 && result.combined_score() < 0.1);
        assert_eq!(result.mood(), MoodCategory::Neutral);
        assert_eq!(result.emoji(), "😐");
    }

    #[tokio::test]
    async fn malformed_model_reply_still_completes() {
        let analyzer = analyzer(ScriptedBackend::replying("Emotion: who knows"));
        let result = analyzer.analyze("I hate Mondays so much, everything is terrible.").await.unwrap();

        assert_eq!(result.scores().llm.value().score, 0.0);
        assert_eq!(result.scores().llm.value().emotion, "who knows");
        assert!(result.combined_score() < 0.0);
    }

    #[tokio::test]
    async fn missing_score_line_yields_neutral_llm_signal() {
        let analyzer = analyzer(ScriptedBackend::replying("no idea, sorry"));
        let result = analyzer.analyze("Today was okay, nothing special happened.").await.unwrap();

        let llm = result.scores().llm.value();
        assert_eq!(llm.score, 0.0);
        assert_eq!(llm.emotion, "neutral");
        assert_eq!(result.mood(), MoodCategory::Neutral);
    }

    #[tokio::test]
    async fn model_outage_is_absorbed() {
        let analyzer = analyzer(ScriptedBackend::failing());
        let result = analyzer
            .analyze("I'm feeling really down and everything seems to be going wrong.")
            .await
            .unwrap();

        assert!(result.scores().llm.is_defaulted());
        assert!(!result.scores().lexicon.is_defaulted());
        // lexicon and rules alone: 0.3 * -0.3436 + 0.3 * -0.659
        assert_eq!(result.combined_score(), -0.301);
        assert_eq!(result.mood(), MoodCategory::Negative);
    }

    #[tokio::test]
    async fn invalid_input_is_rejected_before_any_call() {
        let backend = Arc::new(ScriptedBackend::replying("Score: 1"));
        let analyzer = SentimentAnalyzer::new(&test_config(), backend.clone());

        let err = analyzer.analyze("   ").await.unwrap_err();
        assert_eq!(err, crate::preprocessing::CleanerError::EmptyInput);
        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn signals_see_the_cleaned_text() {
        let backend = Arc::new(ScriptedBackend::replying("Score: 0.5\nEmotion: glad"));
        let analyzer = SentimentAnalyzer::new(&test_config(), backend.clone());

        let result = analyzer
            .analyze("  @friend   great news!!! https://t.co/xyz ")
            .await
            .unwrap();
        assert_eq!(result.cleaned_text(), "friend great news!");
        assert_eq!(result.text(), "  @friend   great news!!! https://t.co/xyz ");
        assert!(backend.requests()[0]
            .user_prompt()
            .contains("Text: \"friend great news!\""));
    }

    #[tokio::test]
    async fn classification_uses_configured_thresholds() {
        let mut config = test_config();
        config.thresholds.positive = 0.3;
        let analyzer = SentimentAnalyzer::new(
            &config,
            Arc::new(ScriptedBackend::replying("Score: 0.2\nEmotion: fine")),
        );
        // rules and lexicon see no opinion words: 0.4 * 0.2 = 0.08 stays neutral either way,
        // 0.4 * 0.6 = 0.24 would be positive by default but neutral here
        let result = analyzer.analyze("The bus came at noon").await.unwrap();
        assert_eq!(result.combined_score(), 0.08);
        assert_eq!(result.mood(), MoodCategory::Neutral);

        let analyzer = SentimentAnalyzer::new(
            &config,
            Arc::new(ScriptedBackend::replying("Score: 0.6")),
        );
        let result = analyzer.analyze("The bus came at noon").await.unwrap();
        assert_eq!(result.combined_score(), 0.24);
        assert_eq!(result.mood(), MoodCategory::Neutral);
    }

    #[test]
    fn serialized_result_has_export_shape() {
        let scores = IndividualScores {
            lexicon: SignalOutcome::measured(LexiconScores {
                polarity: -0.5,
                subjectivity: 1.0,
            }),
            rules: SignalOutcome::measured(RuleScores {
                neg: 0.6,
                neu: 0.4,
                pos: 0.0,
                compound: -0.6,
            }),
            llm: SignalOutcome::defaulted("offline"),
        };
        let result = AnalysisResult::new("sad", "sad", scores, &MoodThresholds::default());
        assert_eq!(result.combined_score(), -0.33);
        assert_eq!(result.mood(), MoodCategory::Negative);

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["mood_category"], "negative");
        assert_eq!(json["mood_emoji"], "😞");
        assert_eq!(json["mood_vibe"], "Down Bad");
        assert_eq!(json["individual_scores"]["llm"]["status"], "defaulted");
        assert_eq!(json["individual_scores"]["rules"]["value"]["compound"], -0.6);
        assert!(json["analyzed_at"].is_string());
    }
}
