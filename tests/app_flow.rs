//! End-to-end flows through the client-side core.
//!
//! Store, router, assessment and analyzer flow wired together the way the
//! screens use them.

use std::cell::RefCell;
use std::rc::Rc;

use pcosync::adapters::analysis::{MockReportAnalyzer, Selection};
use pcosync::domain::analysis::{AnalyzerFlow, AnalyzerPhase, UploadCandidate};
use pcosync::domain::app_state::{
    AppStore, MoodEntry, MoodLevel, MoodTrend, NewCommunityPost, StoreChange,
};
use pcosync::domain::assessment::{AnswerOutcome, AssessmentAttempt, RiskTier};
use pcosync::domain::guidance::{
    recent_moods, trend_label, BackOutcome, DietWizard, EducationHub, MentalHealthVisit,
};
use pcosync::domain::navigation::{
    NavBar, RouterVariant, Screen, ScreenRouter, UserTrack, View,
};
use pcosync::ports::ReportAnalyzer;

#[test]
fn landing_to_prevention_dashboard() {
    let mut store = AppStore::new(ScreenRouter::new(RouterVariant::Gated));
    assert_eq!(store.current_view(), View::Landing);

    store.set_current_screen(Screen::Auth);
    assert_eq!(store.current_view(), View::Auth);

    store.complete_sign_in(Some(UserTrack::AtRisk));
    assert!(store.is_authenticated());
    assert_eq!(store.current_view(), View::DashboardPrevention);
    assert_eq!(
        NavBar::active_item(store.current_screen()).map(|i| i.label),
        Some("Home")
    );
}

#[test]
fn ungated_app_skips_landing_and_auth() {
    let mut store = AppStore::new(ScreenRouter::new(RouterVariant::Ungated));
    assert_eq!(store.current_view(), View::Dashboard);

    store.set_current_screen(Screen::Landing);
    assert_eq!(store.current_view(), View::Dashboard);
    assert_eq!(store.router().resolve_str("nowhere", None), View::Dashboard);
}

#[test]
fn quiz_all_max_answers_records_high_risk() {
    let mut store = AppStore::default();
    store.set_current_screen(Screen::RiskAssessment);

    let mut attempt = AssessmentAttempt::default();
    let mut outcome = None;
    for _ in 0..attempt.questionnaire().len() {
        outcome = Some(attempt.answer(3).unwrap());
    }

    let result = match outcome {
        Some(AnswerOutcome::Completed(result)) => result,
        other => panic!("expected completion, got {:?}", other),
    };
    assert_eq!(result.total_score, 18);
    assert_eq!(result.tier, RiskTier::High);

    store.record_risk_result(&result);
    assert_eq!(store.user_profile().risk_score, Some(RiskTier::High));
}

#[test]
fn quiz_retake_then_all_zero_is_low() {
    let mut attempt = AssessmentAttempt::default();
    attempt.answer(3).unwrap();
    attempt.answer(3).unwrap();
    attempt.retake();

    let mut last = None;
    for _ in 0..6 {
        last = Some(attempt.answer(0).unwrap());
    }

    match last {
        Some(AnswerOutcome::Completed(result)) => {
            assert_eq!(result.total_score, 0);
            assert_eq!(result.tier, RiskTier::Low);
        }
        other => panic!("expected completion, got {:?}", other),
    }
}

#[test]
fn mood_and_community_updates_notify_in_order() {
    let mut store = AppStore::default();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    store.subscribe(move |change| sink.borrow_mut().push(change.clone()));

    store.add_mood_entry(MoodEntry::today(MoodLevel::new(4).unwrap(), "walked"));
    store.add_mood_entry(MoodEntry::today(MoodLevel::new(5).unwrap(), ""));
    let post = store.add_community_post(NewCommunityPost::from_composer("Hi all").unwrap());

    assert_eq!(store.mood_log().trend(), MoodTrend::Up);
    assert_eq!(store.community_posts()[0], post);
    assert_eq!(
        *seen.borrow(),
        vec![
            StoreChange::MoodEntryAdded,
            StoreChange::MoodEntryAdded,
            StoreChange::CommunityPostAdded(post.id.clone()),
        ]
    );
}

#[test]
fn mood_check_in_lands_in_store() {
    let mut store = AppStore::default();
    store.set_current_screen(Screen::MentalHealth);

    let mut visit = MentalHealthVisit::with_affirmation(0);
    for (mood, note) in [(2, "cramps"), (1, ""), (2, "better sleep")] {
        visit.select_mood(MoodLevel::new(mood).unwrap());
        visit.set_note(note);
        let entry = visit.submit().unwrap();
        store.add_mood_entry(entry);
    }

    let recent = recent_moods(store.mood_log());
    assert_eq!(recent.len(), 3);
    assert_eq!(recent[0].note, "better sleep");
    assert_eq!(trend_label(store.mood_log().trend()), "Needs attention");
}

#[test]
fn education_hub_back_returns_to_dashboard() {
    let mut store = AppStore::default();
    store.complete_sign_in(Some(UserTrack::AtRisk));
    store.set_current_screen(Screen::Education);

    store.set_current_screen(EducationHub::new().back());
    assert_eq!(store.current_view(), View::DashboardPrevention);
}

#[test]
fn diet_wizard_back_returns_to_dashboard() {
    let mut store = AppStore::default();
    store.complete_sign_in(Some(UserTrack::Diagnosed));
    store.set_current_screen(Screen::Diet);

    let mut wizard = DietWizard::new();
    if let BackOutcome::Exit(screen) = wizard.back() {
        store.set_current_screen(screen);
    }
    assert_eq!(store.current_view(), View::DashboardManagement);
}

#[tokio::test]
async fn analyzer_flow_with_mock_backend() {
    let analyzer = MockReportAnalyzer::new().with_selection(Selection::Fixed(0));
    let mut flow = AnalyzerFlow::new();

    let file_type = flow
        .select_file(UploadCandidate::new("panel.png", "image/png", 2048))
        .unwrap();
    flow.payload_read().unwrap();
    let outcome = analyzer.analyze(&[0u8; 2048], file_type).await;
    let phase = flow.complete(outcome).unwrap();

    assert_eq!(phase, AnalyzerPhase::Results);
    assert_eq!(flow.report().unwrap().display_report_type(), "Hormonal Panel");
}
