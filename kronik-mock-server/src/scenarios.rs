use std::rc::Rc;

use futures::executor::block_on;
use kronik_client::{
    api::{self, CommentId, User, UserId, VideoKey},
    is_synthesized_id, EntryKey, FeedState, Gateway, LikeTarget, Locale, Outcome, QaSession, StatusKind,
    SubmitControl, SubmitError, TransportError, Viewer,
};

use crate::{MockServer, Mode};

fn me() -> User {
    User {
        id: UserId(String::from("bob")),
        display_name: String::from("Bob"),
        avatar_url: None,
    }
}

fn video() -> VideoKey {
    "anna__v1".parse().unwrap()
}

fn question(id: &str) -> api::Comment {
    api::Comment {
        id: CommentId(String::from(id)),
        user_id: UserId(String::from("anna")),
        display_name: Some(String::from("Anna")),
        avatar_url: None,
        text: String::from("Any questions?"),
        date: None,
        likes: 0,
        replies: Vec::new(),
    }
}

fn cid(s: &str) -> CommentId {
    CommentId(String::from(s))
}

fn member_session(comments: Vec<api::Comment>) -> QaSession {
    QaSession::new(Viewer::Member(me()), video(), comments, Locale::Ru)
}

fn post_comment(s: &mut QaSession, gw: &Gateway<&MockServer>, text: &str) -> Option<u64> {
    s.set_composer(String::from(text));
    let pending = s.begin_comment(gw)?;
    let res = block_on(gw.send_comment(pending));
    s.finish_comment(res)
}

fn key(s: &QaSession, id: &str) -> EntryKey {
    s.thread().key_of(&cid(id)).unwrap()
}

fn post_reply(
    s: &mut QaSession,
    gw: &Gateway<&MockServer>,
    parent: EntryKey,
    text: &str,
) -> Option<u64> {
    if !s.forms().is_visible(parent) {
        s.reply_clicked(parent);
    }
    s.set_reply_draft(parent, String::from(text));
    let (ticket, pending) = s.begin_reply(gw, parent)?;
    let res = block_on(gw.send_reply(pending));
    s.finish_reply(ticket, res)
}

#[test]
fn non_empty_comment_lands_on_top() {
    bolero::check!()
        .with_type::<String>()
        .cloned()
        .for_each(|text| {
            if text.trim().is_empty() {
                return;
            }
            let server = MockServer::new(me());
            let gw = Gateway::new(&server, video(), me());
            let mut s = member_session(vec![question("c1")]);

            assert!(post_comment(&mut s, &gw, &text).is_some());
            assert_eq!(s.thread().len(), 2);
            let top = &s.thread().comments()[0];
            assert_eq!(top.text, text.trim());
            assert_eq!(top.author.id, me().id);
            assert_eq!(s.composer(), "");
            assert_eq!(server.test_num_calls(), 1);
            assert_eq!(server.test_comments().len(), 1);
        });
}

#[test]
fn blank_comment_is_never_sent() {
    bolero::check!()
        .with_type::<Vec<bool>>()
        .cloned()
        .for_each(|blanks| {
            let text = blanks
                .iter()
                .map(|b| if *b { ' ' } else { '\n' })
                .collect::<String>();
            let server = MockServer::new(me());
            let gw = Gateway::new(&server, video(), me());
            let mut s = member_session(vec![question("c1")]);
            let before = s.thread().clone();

            assert_eq!(post_comment(&mut s, &gw, &text), None);
            assert_eq!(server.test_num_calls(), 0);
            assert_eq!(*s.thread(), before);
            assert!(s.status().is_empty());
            assert!(!s.comment_busy());
        });
}

#[test]
fn offline_reply_is_synthesized() {
    let server = MockServer::new(me());
    server.test_set_mode(Mode::Offline);
    let gw = Gateway::new(&server, video(), me());
    let mut s = member_session(vec![question("c1")]);

    let c1 = key(&s, "c1");
    let status = post_reply(&mut s, &gw, c1, "Yes!").unwrap();

    let replies = &s.thread().comments()[0].replies;
    assert_eq!(replies.len(), 1);
    assert!(replies[0].id.0.starts_with("mock-reply-"));
    assert!(is_synthesized_id(&replies[0].id.0));
    assert_eq!(replies[0].author.id, me().id);
    assert_eq!(replies[0].author.display_name, "Bob");
    assert_eq!(replies[0].likes.count, 0);
    assert!(replies[0].date.is_some());
    assert!(!s.forms().is_visible(c1));
    assert!(!s.reply_busy(c1));

    let m = &s.status().messages()[0];
    assert_eq!(m.id, status);
    assert_eq!(m.kind, StatusKind::Info);
    assert_eq!(m.text, "Ответ добавлен (демо-режим)");
}

#[test]
fn offline_comment_is_synthesized() {
    let server = MockServer::new(me());
    server.test_set_mode(Mode::Offline);
    let gw = Gateway::new(&server, video(), me());
    let control = Rc::new(SubmitControl::default());

    let outcome = block_on(gw.submit_comment(&control, "hello")).unwrap();
    assert!(outcome.is_synthesized());
    let c = outcome.record();
    assert!(c.id.0.starts_with("mock-"));
    assert!(!c.id.0.starts_with("mock-reply-"));
    assert!(c.replies.is_empty());
    assert!(server.test_comments().is_empty());
}

#[test]
fn stored_reply_comes_from_the_server() {
    let server = MockServer::new(me());
    server.test_add_comment(question("c1"));
    let gw = Gateway::new(&server, video(), me());
    let mut s = member_session(vec![question("c1")]);

    let c1 = key(&s, "c1");
    post_reply(&mut s, &gw, c1, "  Yes!  ").unwrap();
    let stored = &server.test_comments()[0].replies[0];
    let shown = &s.thread().comments()[0].replies[0];
    assert_eq!(shown.id, stored.id);
    assert!(!is_synthesized_id(&shown.id.0));
    assert_eq!(shown.text, "Yes!");
    assert_eq!(s.status().messages()[0].kind, StatusKind::Success);
}

#[test]
fn anonymous_like_never_calls_the_server() {
    let server = MockServer::new(me());
    let mut s = QaSession::new(Viewer::Anonymous, video(), vec![question("c1")], Locale::Ru);
    let c1 = key(&s, "c1");

    for _ in 0..3 {
        assert_eq!(s.like_clicked(&LikeTarget::Comment(c1)), None);
        assert!(s.login().is_shown());
        // the visitor dismisses the overlay before clicking again
        assert!(s.login_mut().close());
        s.login_mut().finish_close();
        assert!(!s.login().is_shown());
    }
    assert_eq!(s.thread().comments()[0].likes.count, 0);
    assert_eq!(server.test_num_calls(), 0);
}

#[test]
fn anonymous_visitors_cannot_submit() {
    let server = MockServer::new(me());
    let gw = Gateway::new(&server, video(), me());
    let mut s = QaSession::new(Viewer::Anonymous, video(), vec![question("c1")], Locale::Ru);

    assert_eq!(post_comment(&mut s, &gw, "hello"), None);
    assert!(s.login().is_shown());
    assert_eq!(server.test_num_calls(), 0);
}

#[test]
fn busy_is_released_on_every_path() {
    let modes = [
        Mode::Online,
        Mode::Offline,
        Mode::Rejecting(None),
        Mode::Rejecting(Some(String::from("Слишком длинный комментарий"))),
        Mode::Status(500),
        Mode::Garbled,
        Mode::Incomplete,
    ];
    for mode in modes {
        let server = MockServer::new(me());
        server.test_set_mode(mode.clone());
        let gw = Gateway::new(&server, video(), me());
        let control = Rc::new(SubmitControl::default());
        server.test_watch(control.clone());

        let _ = block_on(gw.submit_comment(&control, "hello"));
        assert_eq!(server.test_busy_during_calls(), vec![true], "mode {mode:?}");
        assert!(!control.is_busy(), "mode {mode:?}");
    }
}

#[test]
fn failures_are_typed() {
    let server = MockServer::new(me());
    let gw = Gateway::new(&server, video(), me());
    let control = Rc::new(SubmitControl::default());

    server.test_set_mode(Mode::Rejecting(Some(String::from("Нельзя"))));
    assert!(matches!(
        block_on(gw.submit_comment(&control, "x")),
        Err(SubmitError::Rejected(Some(m))) if m == "Нельзя"
    ));

    server.test_set_mode(Mode::Status(503));
    assert!(matches!(
        block_on(gw.submit_reply(&control, &cid("c1"), "x")),
        Err(SubmitError::Failed(TransportError::Status(503)))
    ));

    server.test_set_mode(Mode::Incomplete);
    assert!(matches!(
        block_on(gw.submit_comment(&control, "x")),
        Err(SubmitError::Failed(TransportError::Decode(_)))
    ));

    server.test_set_mode(Mode::Online);
    assert!(matches!(
        block_on(gw.submit_comment(&control, " \t ")),
        Err(SubmitError::Empty)
    ));
    assert_eq!(server.test_num_calls(), 3);
}

#[test]
fn failed_comment_keeps_the_input() {
    let server = MockServer::new(me());
    server.test_set_mode(Mode::Status(500));
    let gw = Gateway::new(&server, video(), me());
    let mut s = member_session(Vec::new());

    post_comment(&mut s, &gw, "hello").unwrap();
    assert!(s.thread().is_empty());
    assert_eq!(s.composer(), "hello");
    let m = &s.status().messages()[0];
    assert_eq!(m.kind, StatusKind::Error);
    assert_eq!(
        m.text,
        "Ошибка при отправке комментария. Пожалуйста, попробуйте позже."
    );
}

#[test]
fn double_activation_is_refused() {
    let server = MockServer::new(me());
    let gw = Gateway::new(&server, video(), me());
    let mut s = member_session(Vec::new());
    s.set_composer(String::from("hello"));

    let first = s.begin_comment(&gw).unwrap();
    assert!(s.comment_busy());
    assert!(s.begin_comment(&gw).is_none());

    let res = block_on(gw.send_comment(first));
    assert!(!s.comment_busy());
    s.finish_comment(res);
    assert_eq!(s.thread().len(), 1);
    assert_eq!(server.test_num_calls(), 1);

    let control = Rc::new(SubmitControl::default());
    let _guard = control.begin().unwrap();
    assert!(matches!(
        block_on(gw.submit_comment(&control, "again")),
        Err(SubmitError::Busy)
    ));
    assert_eq!(server.test_num_calls(), 1);
}

#[test]
fn reply_forms_are_independent_controls() {
    let server = MockServer::new(me());
    server.test_add_comment(question("c1"));
    server.test_add_comment(question("c2"));
    let gw = Gateway::new(&server, video(), me());
    let mut s = member_session(vec![question("c1"), question("c2")]);

    let (c1, c2) = (key(&s, "c1"), key(&s, "c2"));
    s.reply_clicked(c1);
    s.set_reply_draft(c1, String::from("first"));
    let (ticket, pending) = s.begin_reply(&gw, c1).unwrap();
    assert!(s.reply_busy(c1));
    assert!(!s.reply_busy(c2));

    // opening another form while the first reply is in flight
    s.reply_clicked(c2);
    let res = block_on(gw.send_reply(pending));
    assert!(matches!(res, Ok(Outcome::Stored(_))));
    s.finish_reply(ticket, res);

    assert_eq!(s.thread().comments()[0].replies.len(), 1);
    assert!(s.forms().is_visible(c2));
}

#[test]
fn duplicate_ids_stay_distinct_entries() {
    let server = MockServer::new(me());
    server.test_add_comment(question("c1"));
    let gw = Gateway::new(&server, video(), me());
    let mut s = member_session(vec![question("c1"), question("c1")]);
    let (first, second) = (s.thread().comments()[0].key(), s.thread().comments()[1].key());

    assert!(s.like_clicked(&LikeTarget::Comment(second)).is_some());
    assert_eq!(s.thread().comments()[0].likes.count, 0);
    assert_eq!(s.thread().comments()[1].likes.count, 1);

    post_reply(&mut s, &gw, second, "to the second one").unwrap();
    assert!(s.thread().comments()[0].replies.is_empty());
    assert_eq!(s.thread().comments()[1].replies.len(), 1);
    assert!(!s.forms().is_visible(first));
    assert_eq!(server.test_comments()[0].replies.len(), 1);
}

#[test]
fn feed_pages_through_the_server() {
    let server = MockServer::new(me());
    server.test_add_videos((0..45).map(|i| {
        serde_json::from_value::<api::Video>(serde_json::json!({
            "user_id": "anna",
            "video_id": format!("v{i}"),
            "title": format!("Video {i}"),
        }))
        .unwrap()
    }));
    let gw = Gateway::new(&server, video(), me());
    let mut feed = FeedState::new(20);

    while let Some(offset) = feed.begin_load() {
        let page = block_on(gw.list_videos(offset, feed.page_size())).unwrap();
        feed.apply_page(page);
    }
    assert_eq!(feed.videos().len(), 45);
    assert_eq!(server.test_num_calls(), 3);

    server.test_set_mode(Mode::Offline);
    feed.reset();
    let offset = feed.begin_load().unwrap();
    assert!(block_on(gw.list_videos(offset, 20)).is_err());
    feed.load_failed();
    assert!(!feed.is_loading());
}
