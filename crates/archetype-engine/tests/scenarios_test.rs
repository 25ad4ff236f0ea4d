//! End-to-end recommendations for representative requirements.

use archetype_core::errors::{AnalysisError, ArchetypeErrorCode};
use archetype_core::{ArchetypeError, ComplexityTier, PatternType};
use archetype_engine::RecommendationEngine;

fn engine() -> RecommendationEngine {
    RecommendationEngine::with_builtin_lexicon().unwrap()
}

#[test]
fn knowledge_base_chatbot_is_rag() {
    let rec = engine()
        .recommend(
            "Build a chatbot that searches our knowledge base and answers with citations",
            &[],
        )
        .unwrap();
    assert_eq!(rec.primary, PatternType::Rag);
    assert!(rec.confidence > 0.6, "confidence {}", rec.confidence);
    assert_eq!(rec.complexity_tier, ComplexityTier::Medium);
    assert!(!rec.is_hybrid);
    assert!(rec.rationale.contains("'knowledge base'"));
}

#[test]
fn crud_api_is_traditional_and_simple() {
    let report = engine()
        .explain("Simple CRUD API to store user profiles", &[])
        .unwrap();
    let rec = &report.recommendation;
    assert!(
        matches!(rec.primary, PatternType::Tool | PatternType::Workflow),
        "got {}",
        rec.primary
    );
    assert_eq!(rec.complexity_tier, ComplexityTier::Simple);
    assert_eq!(report.scores[0].override_term.as_deref(), Some("crud"));
    assert!(rec.rationale.contains("'crud'"));
}

#[test]
fn autonomous_retrieval_agent_is_intelligent_rag() {
    let report = engine()
        .explain(
            "Autonomous agent that retrieves documents, reasons over them, and decides the next action",
            &[],
        )
        .unwrap();
    let rec = &report.recommendation;
    assert!(rec.is_hybrid);
    assert_eq!(rec.hybrid_name.as_deref(), Some("intelligent_rag"));
    let secondary = rec.secondary.unwrap();
    assert_ne!(secondary, rec.primary);
    assert_eq!(rec.primary, PatternType::Agent);
    assert_eq!(secondary, PatternType::Rag);
    assert_eq!(rec.scaffold_pattern(), PatternType::Hybrid);
    assert!(rec.rationale.contains("intelligent_rag"));
    let hybrid = report.hybrid.as_ref().unwrap();
    assert!(hybrid.divergence <= 0.7);
}

#[test]
fn empty_input_is_empty_input_error() {
    let err = engine().recommend("", &[]).unwrap_err();
    assert_eq!(err, ArchetypeError::Analysis(AnalysisError::EmptyInput));
    assert_eq!(err.error_code(), "EMPTY_INPUT");
}

#[test]
fn nonsense_is_insufficient_signal() {
    let err = engine()
        .recommend("asdkjaslkdj random nonsense text", &[])
        .unwrap_err();
    match err {
        ArchetypeError::Analysis(AnalysisError::InsufficientSignal {
            token_count,
            lexicon_version,
        }) => {
            assert_eq!(token_count, 4);
            assert_eq!(lexicon_version, archetype_lexicon::builtin::BUILTIN_VERSION);
        }
        other => panic!("expected InsufficientSignal, got {other:?}"),
    }
}

#[test]
fn keyword_without_indicator_falls_back_to_workflow() {
    let report = engine().explain("A dashboard for the admin", &[]).unwrap();
    assert!(report.fallback);
    let rec = report.recommendation;
    assert_eq!(rec.primary, PatternType::Workflow);
    assert_eq!(rec.confidence, 0.3);
    assert!(rec.rationale.starts_with("no strong signal detected"));
    assert!(!rec.is_hybrid);
}

#[test]
fn batch_summarization_is_mapreduce() {
    let rec = engine()
        .recommend(
            "Summarize thousands of support tickets in parallel batches",
            &[],
        )
        .unwrap();
    assert_eq!(rec.primary, PatternType::MapReduce);
}

#[test]
fn invoice_extraction_is_structured_output() {
    let rec = engine()
        .recommend("Extract invoice fields into a JSON schema", &[])
        .unwrap();
    assert_eq!(rec.primary, PatternType::StructuredOutput);
}

#[test]
fn multi_step_approval_is_complex_workflow() {
    let rec = engine()
        .recommend(
            "Multi-step approval workflow: submit the form, then notify the manager",
            &[],
        )
        .unwrap();
    assert_eq!(rec.primary, PatternType::Workflow);
    assert_eq!(rec.complexity_tier, ComplexityTier::Complex);
}

#[test]
fn form_submission_sets_workflow_floor() {
    let report = engine()
        .explain("Handle the form submission for signup", &[])
        .unwrap();
    let top = &report.scores[0];
    assert_eq!(top.pattern, PatternType::Workflow);
    assert_eq!(top.override_term.as_deref(), Some("form submission"));
    assert!((top.normalized_score - 0.5).abs() < 1e-9);
    let rec = &report.recommendation;
    assert_eq!(rec.primary, PatternType::Workflow);
    assert_eq!(rec.confidence, 0.95);
    assert!(!rec.is_hybrid);
}

#[test]
fn api_calls_inside_a_workflow_are_integration_workflow() {
    let rec = engine()
        .recommend(
            "Call the API webhook, then run the approval workflow pipeline",
            &[],
        )
        .unwrap();
    assert!(rec.is_hybrid);
    assert_eq!(rec.hybrid_name.as_deref(), Some("integration_workflow"));
    assert_eq!(rec.primary, PatternType::Workflow);
    assert_eq!(rec.secondary, Some(PatternType::Tool));
}

#[test]
fn agent_steered_batches_are_smart_processing() {
    let rec = engine()
        .recommend(
            "Process the dataset in parallel batches; an autonomous agent decides how to aggregate",
            &[],
        )
        .unwrap();
    assert!(rec.is_hybrid);
    assert_eq!(rec.hybrid_name.as_deref(), Some("smart_processing"));
    assert_eq!(rec.primary, PatternType::MapReduce);
    assert_eq!(rec.secondary, Some(PatternType::Agent));
}

#[test]
fn hybrid_pair_fires_below_a_stronger_pattern() {
    let report = engine()
        .explain(
            "Extract JSON schema fields and parse them; an autonomous agent retrieves each document and decides",
            &[],
        )
        .unwrap();
    assert_eq!(report.scores[0].pattern, PatternType::StructuredOutput);
    assert!(!report.fallback);
    let rec = &report.recommendation;
    assert_eq!(rec.hybrid_name.as_deref(), Some("intelligent_rag"));
    assert_eq!(rec.primary, PatternType::Agent);
    assert_eq!(rec.secondary, Some(PatternType::Rag));
    // Outscored by STRUCTURED_OUTPUT, so confidence sits on the floor.
    assert_eq!(rec.confidence, 0.3);
}

#[test]
fn plural_agents_still_count_as_agent() {
    let report = engine()
        .explain("Deploy agents for the support team", &[])
        .unwrap();
    assert!(report.analysis.has_keyword("agent"));
    assert_eq!(report.recommendation.primary, PatternType::Agent);

    let singular = engine()
        .recommend("Deploy an agent for the support team", &[])
        .unwrap();
    assert_eq!(singular.primary, report.recommendation.primary);
}

#[test]
fn inflected_hints_are_accepted() {
    let report = engine()
        .explain("A support portal", &["Documents", "Knowledge Bases"])
        .unwrap();
    assert!(report.analysis.has_keyword("document"));
    assert!(report.analysis.has_keyword("knowledge base"));
    assert_eq!(report.recommendation.primary, PatternType::Rag);
}

#[test]
fn recommendation_json_is_flat() {
    let rec = engine()
        .recommend("Autonomous agent that retrieves documents and decides", &[])
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&rec.to_json().unwrap()).unwrap();
    assert!(json.get("primary_pattern").is_some());
    assert!(json.get("secondary_pattern").is_some());
    assert!(json.get("hybrid_name").is_some());
    assert_eq!(json["is_hybrid"].as_bool(), Some(rec.is_hybrid));
}

#[test]
fn batch_preserves_input_order() {
    let texts = [
        "Build a chatbot that searches our knowledge base and answers with citations",
        "",
        "Extract invoice fields into a JSON schema",
    ];
    let results = engine().recommend_batch(&texts);
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().unwrap().primary, PatternType::Rag);
    assert!(results[1].is_err());
    assert_eq!(
        results[2].as_ref().unwrap().primary,
        PatternType::StructuredOutput
    );
}
