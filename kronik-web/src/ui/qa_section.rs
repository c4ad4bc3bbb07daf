use std::rc::Rc;

use chrono::Utc;
use kronik_client::{
    api::VideoKey, Comment, EntryKey, EntryView, LikeTarget, Outcome, PageContext, QaSession,
    Reply, ReplyTicket, SubmitError,
};
use yew::prelude::*;

use crate::{
    api::{self, WebGateway},
    ui, util,
};

#[derive(Clone, PartialEq, Properties)]
pub struct QaSectionProps {
    pub page: Rc<PageContext>,
    pub video: VideoKey,
}

pub enum QaMsg {
    InputClicked,
    ComposerChanged(String),
    SubmitComment,
    CommentDone(Result<Outcome<Comment>, SubmitError>),
    LikeClicked(LikeTarget),
    ReplyClicked(EntryKey),
    ReplyCancelled(EntryKey),
    ReplyDraft(EntryKey, String),
    SubmitReply(EntryKey),
    ReplyDone(ReplyTicket, Result<Outcome<Reply>, SubmitError>),
    StatusFade(u64),
    StatusDismiss(u64),
    LoginClose,
    LoginClosed,
}

pub struct QaSection {
    session: QaSession,
    gateway: Rc<WebGateway>,
}

impl QaSection {
    // Status messages stay up for a while, then fade out
    fn schedule_fade(ctx: &Context<Self>, id: Option<u64>) {
        if let Some(id) = id {
            let delay = ctx.props().page.settings.banner_lifetime();
            ctx.link().send_future(async move {
                util::sleep(delay).await;
                QaMsg::StatusFade(id)
            });
        }
    }
}

impl Component for QaSection {
    type Message = QaMsg;
    type Properties = QaSectionProps;

    fn create(ctx: &Context<Self>) -> Self {
        let p = ctx.props();
        let session = QaSession::new(
            p.page.viewer(),
            p.video.clone(),
            p.page.comments.clone(),
            p.page.settings.locale,
        );
        tracing::debug!(video = %p.video, comments = session.thread().len(), "q&a section ready");
        QaSection {
            session,
            gateway: api::gateway(&p.page, p.video.clone()),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let settings = &ctx.props().page.settings;
        match msg {
            QaMsg::InputClicked => {
                self.session.input_clicked();
            }
            QaMsg::ComposerChanged(t) => self.session.set_composer(t),
            QaMsg::SubmitComment => {
                let pending = match self.session.begin_comment(&self.gateway) {
                    Some(p) => p,
                    None => return true,
                };
                let gateway = self.gateway.clone();
                ctx.link().send_future(async move {
                    QaMsg::CommentDone(gateway.send_comment(pending).await)
                });
            }
            QaMsg::CommentDone(res) => {
                let shown = self.session.finish_comment(res);
                Self::schedule_fade(ctx, shown);
            }
            QaMsg::LikeClicked(target) => {
                self.session.like_clicked(&target);
            }
            QaMsg::ReplyClicked(parent) => {
                self.session.reply_clicked(parent);
            }
            QaMsg::ReplyCancelled(parent) => self.session.reply_cancelled(parent),
            QaMsg::ReplyDraft(parent, t) => self.session.set_reply_draft(parent, t),
            QaMsg::SubmitReply(parent) => {
                let (ticket, pending) = match self.session.begin_reply(&self.gateway, parent) {
                    Some(p) => p,
                    None => return true,
                };
                let gateway = self.gateway.clone();
                ctx.link().send_future(async move {
                    QaMsg::ReplyDone(ticket, gateway.send_reply(pending).await)
                });
            }
            QaMsg::ReplyDone(ticket, res) => {
                let shown = self.session.finish_reply(ticket, res);
                Self::schedule_fade(ctx, shown);
            }
            QaMsg::StatusFade(id) => {
                if !self.session.status_mut().start_fading(id) {
                    return false;
                }
                let delay = settings.banner_fade();
                ctx.link().send_future(async move {
                    util::sleep(delay).await;
                    QaMsg::StatusDismiss(id)
                });
            }
            QaMsg::StatusDismiss(id) => self.session.status_mut().dismiss(id),
            QaMsg::LoginClose => {
                if !self.session.login_mut().close() {
                    return false;
                }
                let delay = settings.login_fade();
                ctx.link().send_future(async move {
                    util::sleep(delay).await;
                    QaMsg::LoginClosed
                });
            }
            QaMsg::LoginClosed => self.session.login_mut().finish_close(),
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let locale = self.session.locale();
        let msgs = locale.messages();
        let video = self.session.video();
        let (now, tz) = (Utc::now(), util::local_tz());
        let forms = self.session.forms();
        let link = ctx.link();

        let items = self.session.thread().comments().iter().map(|c| {
            let replies = c
                .replies
                .iter()
                .enumerate()
                .map(|(i, r)| {
                    (
                        LikeTarget::Reply(c.key(), i),
                        EntryView::reply(r, video, now, tz, locale),
                    )
                })
                .collect::<Vec<_>>();
            let reply_draft = forms
                .is_visible(c.key())
                .then(|| String::from(forms.draft(c.key())));
            html! {
                <ui::CommentItem
                    key={ c.key().to_string() }
                    entry_key={ c.key() }
                    entry={ EntryView::comment(c, video, now, tz, locale) }
                    { replies }
                    { locale }
                    { reply_draft }
                    reply_busy={ self.session.reply_busy(c.key()) }
                    on_like={ link.callback(QaMsg::LikeClicked) }
                    on_reply={ link.callback(QaMsg::ReplyClicked) }
                    on_reply_change={ link.callback(|(key, t)| QaMsg::ReplyDraft(key, t)) }
                    on_reply_submit={ link.callback(QaMsg::SubmitReply) }
                    on_reply_cancel={ link.callback(QaMsg::ReplyCancelled) }
                />
            }
        });
        let empty = self.session.thread().is_empty().then(|| html! {
            <div class="qa-empty">{ msgs.no_comments }</div>
        });

        html! {
            <section class="qa-section">
                <ui::StatusBanner
                    messages={ self.session.status().messages().to_vec() }
                    on_dismiss={ link.callback(QaMsg::StatusDismiss) }
                />
                <ui::CommentForm
                    text={ String::from(self.session.composer()) }
                    busy={ self.session.comment_busy() }
                    { locale }
                    on_click={ link.callback(|_| QaMsg::InputClicked) }
                    on_change={ link.callback(QaMsg::ComposerChanged) }
                    on_submit={ link.callback(|_| QaMsg::SubmitComment) }
                />
                <div class="qa-list">
                    { for empty }
                    { for items }
                </div>
                <ui::LoginModal
                    prompt={ self.session.login().clone() }
                    { locale }
                    on_close={ link.callback(|_| QaMsg::LoginClose) }
                />
            </section>
        }
    }
}
