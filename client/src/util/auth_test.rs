use std::cell::RefCell;

use super::*;
use crate::state::auth::Identity;

#[derive(Default)]
struct RecordingNavigator {
    paths: RefCell<Vec<String>>,
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, path: &str) {
        self.paths.borrow_mut().push(path.to_owned());
    }
}

impl RecordingNavigator {
    fn count(&self) -> usize {
        self.paths.borrow().len()
    }
}

fn restoring() -> AuthState {
    AuthState { user: None, restoring: true }
}

fn anonymous() -> AuthState {
    AuthState { user: None, restoring: false }
}

fn authenticated() -> AuthState {
    AuthState {
        user: Some(Identity {
            id: "u1".to_owned(),
            name: "Alice".to_owned(),
            email: "alice@example.com".to_owned(),
        }),
        restoring: false,
    }
}

#[test]
fn restoring_shows_loading_without_navigating() {
    let nav = RecordingNavigator::default();
    let mut guard = RouteGuard::new();
    for _ in 0..5 {
        assert_eq!(guard.evaluate(&restoring(), &nav), GuardView::Loading);
    }
    assert_eq!(nav.count(), 0);
}

#[test]
fn restoring_with_stale_user_still_does_not_render_content() {
    let nav = RecordingNavigator::default();
    let mut guard = RouteGuard::new();
    let mut state = authenticated();
    state.restoring = true;
    assert_eq!(guard.evaluate(&state, &nav), GuardView::Loading);
    assert_eq!(nav.count(), 0);
}

#[test]
fn authenticated_renders_content() {
    let nav = RecordingNavigator::default();
    let mut guard = RouteGuard::new();
    assert_eq!(guard.evaluate(&authenticated(), &nav), GuardView::Content);
    assert_eq!(nav.count(), 0);
}

#[test]
fn anonymous_redirects_to_sign_in_once() {
    let nav = RecordingNavigator::default();
    let mut guard = RouteGuard::new();
    assert_eq!(guard.evaluate(&restoring(), &nav), GuardView::Loading);
    for _ in 0..4 {
        assert_eq!(guard.evaluate(&anonymous(), &nav), GuardView::Empty);
    }
    assert_eq!(*nav.paths.borrow(), vec![SIGN_IN_ROUTE.to_owned()]);
}

#[test]
fn each_anonymous_episode_redirects_again() {
    let nav = RecordingNavigator::default();
    let mut guard = RouteGuard::new();
    guard.evaluate(&restoring(), &nav);
    guard.evaluate(&authenticated(), &nav);
    guard.evaluate(&anonymous(), &nav);
    guard.evaluate(&anonymous(), &nav);
    assert_eq!(nav.count(), 1);

    guard.evaluate(&authenticated(), &nav);
    guard.evaluate(&anonymous(), &nav);
    assert_eq!(nav.count(), 2);
}

#[test]
fn closures_act_as_navigators() {
    let seen = RefCell::new(Vec::new());
    let nav = |path: &str| seen.borrow_mut().push(path.to_owned());
    let mut guard = RouteGuard::new();
    guard.evaluate(&anonymous(), &nav);
    assert_eq!(*seen.borrow(), vec!["/login".to_owned()]);
}
