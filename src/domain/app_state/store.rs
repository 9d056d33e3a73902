//! AppStore - the single source of truth every screen reads from.
//!
//! The store is an explicit object handed to views by reference. Its setters
//! are the only mutation surface. Every mutation is applied synchronously
//! and then announced to subscribers as a [`StoreChange`], in the order the
//! mutations were dispatched.
//!
//! # Example
//!
//! ```ignore
//! let mut store = AppStore::new(ScreenRouter::new(RouterVariant::Gated));
//! store.subscribe(|change| println!("re-render after {:?}", change));
//!
//! store.complete_sign_in(Some(UserTrack::AtRisk));
//! assert_eq!(store.current_view(), View::DashboardPrevention);
//! ```

use crate::domain::assessment::RiskResult;
use crate::domain::foundation::PostId;
use crate::domain::navigation::{Screen, ScreenRouter, UserTrack, View};

use super::{
    CommunityFeed, CommunityPost, MoodEntry, MoodLog, NewCommunityPost, SessionState, UserProfile,
};

/// A mutation that has been applied to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreChange {
    ScreenChanged(Screen),
    TrackChanged(Option<UserTrack>),
    AuthenticationChanged(bool),
    ProfileChanged,
    MoodEntryAdded,
    CommunityPostAdded(PostId),
}

/// Handle returned by [`AppStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&StoreChange)>;

/// Application state container.
pub struct AppStore {
    router: ScreenRouter,
    session: SessionState,
    profile: UserProfile,
    moods: MoodLog,
    feed: CommunityFeed,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl AppStore {
    /// Creates a store with default state, starting on the router's initial screen.
    pub fn new(router: ScreenRouter) -> Self {
        Self {
            router,
            session: SessionState::starting_at(router.initial_screen()),
            profile: UserProfile::default(),
            moods: MoodLog::new(),
            feed: CommunityFeed::seeded(),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    // ════════════════════════════════════════════════════════════════════════
    // Reads
    // ════════════════════════════════════════════════════════════════════════

    pub fn router(&self) -> &ScreenRouter {
        &self.router
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn current_screen(&self) -> Screen {
        self.session.current_screen
    }

    pub fn user_track(&self) -> Option<UserTrack> {
        self.session.user_track
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated
    }

    pub fn user_profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn mood_log(&self) -> &MoodLog {
        &self.moods
    }

    pub fn mood_entries(&self) -> &[MoodEntry] {
        self.moods.entries()
    }

    pub fn community_posts(&self) -> &[CommunityPost] {
        self.feed.posts()
    }

    /// The view the router selects for the current state.
    pub fn current_view(&self) -> View {
        self.router
            .resolve(self.session.current_screen, self.session.user_track)
    }

    // ════════════════════════════════════════════════════════════════════════
    // Mutations
    // ════════════════════════════════════════════════════════════════════════

    /// Overwrites the screen pointer. No guards.
    pub fn set_current_screen(&mut self, screen: Screen) {
        tracing::debug!(from = %self.session.current_screen, to = %screen, "navigate");
        self.session.current_screen = screen;
        self.notify(StoreChange::ScreenChanged(screen));
    }

    pub fn set_user_track(&mut self, track: Option<UserTrack>) {
        self.session.user_track = track;
        self.notify(StoreChange::TrackChanged(track));
    }

    pub fn set_is_authenticated(&mut self, authenticated: bool) {
        self.session.is_authenticated = authenticated;
        self.notify(StoreChange::AuthenticationChanged(authenticated));
    }

    /// Replaces the whole profile (last write wins).
    pub fn set_user_profile(&mut self, profile: UserProfile) {
        self.profile = profile;
        self.notify(StoreChange::ProfileChanged);
    }

    /// Read-modify-write on the profile, leaving untouched fields intact.
    pub fn update_user_profile(&mut self, update: impl FnOnce(&mut UserProfile)) {
        let mut profile = self.profile.clone();
        update(&mut profile);
        self.set_user_profile(profile);
    }

    /// Writes an assessment result into the profile.
    pub fn record_risk_result(&mut self, result: &RiskResult) {
        let tier = result.tier;
        self.update_user_profile(|profile| profile.risk_score = Some(tier));
    }

    /// Prepends a mood entry.
    pub fn add_mood_entry(&mut self, entry: MoodEntry) {
        self.moods.add(entry);
        self.notify(StoreChange::MoodEntryAdded);
    }

    /// Assigns an id, prepends the post to the feed, and returns it.
    pub fn add_community_post(&mut self, post: NewCommunityPost) -> CommunityPost {
        let stored = self.feed.add(post).clone();
        self.notify(StoreChange::CommunityPostAdded(stored.id.clone()));
        stored
    }

    /// Finishes the sign-in form: keeps the chosen track (if any), marks the
    /// session authenticated, and opens the dashboard.
    pub fn complete_sign_in(&mut self, selected_track: Option<UserTrack>) {
        if selected_track.is_some() {
            self.set_user_track(selected_track);
        }
        self.set_is_authenticated(true);
        self.set_current_screen(Screen::Dashboard);
    }

    // ════════════════════════════════════════════════════════════════════════
    // Subscriptions
    // ════════════════════════════════════════════════════════════════════════

    /// Registers a listener called after every mutation.
    pub fn subscribe(&mut self, listener: impl FnMut(&StoreChange) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    fn notify(&mut self, change: StoreChange) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(&change);
        }
    }
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new(ScreenRouter::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::app_state::MoodLevel;
    use crate::domain::assessment::{AnswerSheet, RiskScorer, RiskTier};
    use crate::domain::navigation::RouterVariant;
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::rc::Rc;

    fn mood(value: u8, note: &str) -> MoodEntry {
        MoodEntry::new("1/15/2024", MoodLevel::new(value).unwrap(), note)
    }

    fn recorder(store: &mut AppStore) -> Rc<RefCell<Vec<StoreChange>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.subscribe(move |change| sink.borrow_mut().push(change.clone()));
        seen
    }

    #[test]
    fn new_store_has_documented_defaults() {
        let store = AppStore::default();
        assert_eq!(store.current_screen(), Screen::Landing);
        assert!(store.user_track().is_none());
        assert!(!store.is_authenticated());
        assert_eq!(store.user_profile(), &UserProfile::default());
        assert!(store.mood_entries().is_empty());
        assert_eq!(store.community_posts().len(), 4);
    }

    #[test]
    fn ungated_store_starts_on_dashboard() {
        let store = AppStore::new(ScreenRouter::new(RouterVariant::Ungated));
        assert_eq!(store.current_screen(), Screen::Dashboard);
        assert_eq!(store.current_view(), View::Dashboard);
    }

    #[test]
    fn set_current_screen_overwrites_pointer_and_view_follows() {
        let mut store = AppStore::default();
        for screen in [Screen::Community, Screen::Diet, Screen::Auth, Screen::MentalHealth] {
            store.set_current_screen(screen);
            assert_eq!(store.current_screen(), screen);
            assert_eq!(store.current_view(), store.router().resolve(screen, None));
        }
    }

    #[test]
    fn complete_sign_in_routes_to_track_dashboard() {
        let mut store = AppStore::default();
        store.complete_sign_in(Some(UserTrack::Diagnosed));

        assert!(store.is_authenticated());
        assert_eq!(store.user_track(), Some(UserTrack::Diagnosed));
        assert_eq!(store.current_view(), View::DashboardManagement);
    }

    #[test]
    fn complete_sign_in_without_track_keeps_previous_track() {
        let mut store = AppStore::default();
        store.set_user_track(Some(UserTrack::AtRisk));
        store.complete_sign_in(None);
        assert_eq!(store.user_track(), Some(UserTrack::AtRisk));
        assert_eq!(store.current_view(), View::DashboardPrevention);
    }

    #[test]
    fn set_user_profile_is_last_write_wins() {
        let mut store = AppStore::default();
        let mut first = UserProfile::default();
        first.name = "First".to_string();
        first.age = 30;
        store.set_user_profile(first);

        let mut second = UserProfile::default();
        second.name = "Second".to_string();
        store.set_user_profile(second);

        assert_eq!(store.user_profile().name, "Second");
        assert_eq!(store.user_profile().age, 0);
    }

    #[test]
    fn record_risk_result_only_touches_risk_score() {
        let mut store = AppStore::default();
        store.update_user_profile(|p| p.name = "Maya".to_string());

        let sheet: AnswerSheet = ["cycle", "weight", "hair", "acne", "fatigue", "family"]
            .into_iter()
            .map(|id| (id, 3u8))
            .collect();
        let result = RiskScorer::default().score(&sheet).unwrap();
        store.record_risk_result(&result);

        assert_eq!(store.user_profile().risk_score, Some(RiskTier::High));
        assert_eq!(store.user_profile().name, "Maya");
    }

    #[test]
    fn mood_entries_are_append_only_newest_first() {
        let mut store = AppStore::default();
        let entries: Vec<MoodEntry> = (1..=5).map(|v| mood(v, &format!("n{}", v))).collect();
        for e in &entries {
            store.add_mood_entry(e.clone());
        }

        assert_eq!(store.mood_entries().len(), 5);
        let expected: Vec<MoodEntry> = entries.into_iter().rev().collect();
        assert_eq!(store.mood_entries(), expected.as_slice());
    }

    #[test]
    fn community_post_gets_unique_id_at_front() {
        let mut store = AppStore::default();
        let before = store.community_posts().len();

        let post = store.add_community_post(NewCommunityPost::from_composer("Hello").unwrap());
        let second = store.add_community_post(NewCommunityPost::from_composer("Again").unwrap());

        assert_eq!(store.community_posts().len(), before + 2);
        assert_eq!(store.community_posts()[0], second);
        assert_eq!(store.community_posts()[1], post);
        let ids: HashSet<&PostId> = store.community_posts().iter().map(|p| &p.id).collect();
        assert_eq!(ids.len(), store.community_posts().len());
    }

    #[test]
    fn subscribers_see_changes_in_dispatch_order() {
        let mut store = AppStore::default();
        let seen = recorder(&mut store);

        store.set_current_screen(Screen::Auth);
        store.set_is_authenticated(true);
        store.add_mood_entry(mood(3, ""));

        assert_eq!(
            *seen.borrow(),
            vec![
                StoreChange::ScreenChanged(Screen::Auth),
                StoreChange::AuthenticationChanged(true),
                StoreChange::MoodEntryAdded,
            ]
        );
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let mut store = AppStore::default();
        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);
        let id = store.subscribe(move |_| *sink.borrow_mut() += 1);

        store.set_current_screen(Screen::Diet);
        assert!(store.unsubscribe(id));
        store.set_current_screen(Screen::Exercise);

        assert_eq!(*count.borrow(), 1);
        assert!(!store.unsubscribe(id));
    }
}
