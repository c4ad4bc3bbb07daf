use crate::{
    age::relative_age,
    api::{Time, UserId, VideoKey},
    Author, Comment, Locale, Reply,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Avatar {
    Image { src: String, alt: String },
    Initial(String),
}

impl Avatar {
    pub fn for_author(a: &Author) -> Avatar {
        match a.avatar_url.as_deref().filter(|u| !u.is_empty()) {
            Some(src) => Avatar::Image {
                src: String::from(src),
                alt: a.display_name.clone(),
            },
            None => Avatar::Initial(
                a.display_name
                    .chars()
                    .next()
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| String::from("U")),
            ),
        }
    }
}

pub fn is_video_author(user: &UserId, video: &VideoKey) -> bool {
    *user == video.owner
}

/// What is rendered for one comment or reply, apart from its controls
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EntryView {
    pub avatar: Avatar,
    pub name: String,
    pub author_badge: bool,
    pub age: String,
    pub text: String,
    pub likes: u32,
    pub liked: bool,
}

impl EntryView {
    #[allow(clippy::too_many_arguments)]
    fn new(
        author: &Author,
        text: &str,
        date: Option<Time>,
        likes: crate::Likes,
        video: &VideoKey,
        now: Time,
        tz: chrono_tz::Tz,
        locale: Locale,
    ) -> EntryView {
        EntryView {
            avatar: Avatar::for_author(author),
            name: author.display_name.clone(),
            author_badge: is_video_author(&author.id, video),
            age: relative_age(date, now, tz, locale),
            text: String::from(text),
            likes: likes.count,
            liked: likes.liked,
        }
    }

    pub fn comment(
        c: &Comment,
        video: &VideoKey,
        now: Time,
        tz: chrono_tz::Tz,
        locale: Locale,
    ) -> EntryView {
        EntryView::new(&c.author, &c.text, c.date, c.likes, video, now, tz, locale)
    }

    pub fn reply(
        r: &Reply,
        video: &VideoKey,
        now: Time,
        tz: chrono_tz::Tz,
        locale: Locale,
    ) -> EntryView {
        EntryView::new(&r.author, &r.text, r.date, r.likes, video, now, tz, locale)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::*;
    use crate::thread::tests::{comment, reply};

    #[test]
    fn avatar_falls_back_to_initial() {
        let mut c = comment("c1", "q");
        assert_eq!(Avatar::for_author(&c.author), Avatar::Initial(String::from("A")));
        c.author.display_name = String::from("ёжик");
        assert_eq!(Avatar::for_author(&c.author), Avatar::Initial(String::from("ё")));
        c.author.avatar_url = Some(String::from("/media/a.png"));
        assert_eq!(
            Avatar::for_author(&c.author),
            Avatar::Image {
                src: String::from("/media/a.png"),
                alt: String::from("ёжик"),
            }
        );
    }

    #[test]
    fn badge_only_for_the_video_owner() {
        let video: VideoKey = "anna__v1".parse().unwrap();
        let now = Utc.with_ymd_and_hms(2024, 5, 20, 12, 0, 0).unwrap();
        let mut c = comment("c1", "q");
        c.date = Some(now - Duration::seconds(90));

        let v = EntryView::comment(&c, &video, now, chrono_tz::UTC, Locale::Ru);
        assert!(v.author_badge);
        assert_eq!(v.age, "1 минуту назад");
        assert_eq!(v.name, "Anna");

        let v = EntryView::reply(&reply("r1", "a"), &video, now, chrono_tz::UTC, Locale::En);
        assert!(!v.author_badge);
        assert_eq!(v.name, "User");
        assert_eq!(v.age, "Recently");
    }
}
