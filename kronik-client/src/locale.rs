#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ru,
    En,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Plural {
    One,
    Few,
    Many,
    Other,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Unit {
    Minute,
    Hour,
    Day,
}

/// Every user-visible string of the front-end
#[derive(Debug)]
pub struct Messages {
    pub submit: &'static str,
    pub submitting: &'static str,
    pub reply: &'static str,
    pub cancel: &'static str,
    pub comment_placeholder: &'static str,
    pub reply_placeholder: &'static str,
    pub author_badge: &'static str,
    pub unnamed_user: &'static str,
    pub no_comments: &'static str,

    pub comment_added: &'static str,
    pub comment_added_offline: &'static str,
    pub comment_rejected: &'static str,
    pub comment_failed: &'static str,
    pub reply_added: &'static str,
    pub reply_added_offline: &'static str,
    pub reply_rejected: &'static str,
    pub reply_failed: &'static str,

    pub login_title: &'static str,
    pub login_body: &'static str,
    pub login: &'static str,
    pub register: &'static str,

    pub just_now: &'static str,
    pub recently: &'static str,

    pub zero_views: &'static str,
    pub search_placeholder: &'static str,
    pub show_all_results: &'static str,
    pub all_categories: &'static str,
    pub no_videos_title: &'static str,
    pub no_videos_body: &'static str,
    pub no_category_videos_title: &'static str,
    pub no_category_videos_body: &'static str,

    pub theme_toggle: &'static str,
    pub loading: &'static str,

    pub menu_home: &'static str,
    pub menu_trending: &'static str,
    pub menu_subscriptions: &'static str,
    pub menu_history: &'static str,
    pub menu_studio: &'static str,
    pub menu_profile: &'static str,
    pub menu_logout: &'static str,
}

static RU: Messages = Messages {
    submit: "Отправить",
    submitting: "Отправка...",
    reply: "Ответить",
    cancel: "Отмена",
    comment_placeholder: "Задать вопрос...",
    reply_placeholder: "Ответить на вопрос...",
    author_badge: "Автор",
    unnamed_user: "User",
    no_comments: "Пока нет вопросов. Будьте первым!",

    comment_added: "Комментарий успешно добавлен",
    comment_added_offline: "Комментарий добавлен (демо-режим)",
    comment_rejected: "Ошибка при добавлении комментария",
    comment_failed: "Ошибка при отправке комментария. Пожалуйста, попробуйте позже.",
    reply_added: "Ответ успешно добавлен",
    reply_added_offline: "Ответ добавлен (демо-режим)",
    reply_rejected: "Ошибка при добавлении ответа",
    reply_failed: "Ошибка при отправке ответа. Пожалуйста, попробуйте позже.",

    login_title: "Авторизация требуется",
    login_body: "Чтобы оставлять комментарии и вопросы, необходимо авторизоваться.",
    login: "Войти",
    register: "Зарегистрироваться",

    just_now: "Только что",
    recently: "Недавно",

    zero_views: "0 просмотров",
    search_placeholder: "Поиск",
    show_all_results: "Показать все результаты",
    all_categories: "Все",
    no_videos_title: "Пока нет видео",
    no_videos_body: "Видео появятся здесь, когда авторы начнут их загружать",
    no_category_videos_title: "Нет видео в категории",
    no_category_videos_body: "Попробуйте выбрать другую категорию или загляните позже",

    theme_toggle: "Сменить тему",
    loading: "Загрузка...",

    menu_home: "Главная",
    menu_trending: "В тренде",
    menu_subscriptions: "Подписки",
    menu_history: "История",
    menu_studio: "Студия",
    menu_profile: "Мой канал",
    menu_logout: "Выйти",
};

static EN: Messages = Messages {
    submit: "Send",
    submitting: "Sending...",
    reply: "Reply",
    cancel: "Cancel",
    comment_placeholder: "Ask a question...",
    reply_placeholder: "Reply to the question...",
    author_badge: "Author",
    unnamed_user: "User",
    no_comments: "No questions yet. Be the first!",

    comment_added: "Comment added",
    comment_added_offline: "Comment added (demo mode)",
    comment_rejected: "Could not add the comment",
    comment_failed: "Failed to send the comment. Please try again later.",
    reply_added: "Reply added",
    reply_added_offline: "Reply added (demo mode)",
    reply_rejected: "Could not add the reply",
    reply_failed: "Failed to send the reply. Please try again later.",

    login_title: "Login required",
    login_body: "You need to log in to post comments and questions.",
    login: "Log in",
    register: "Sign up",

    just_now: "just now",
    recently: "Recently",

    zero_views: "0 views",
    search_placeholder: "Search",
    show_all_results: "Show all results",
    all_categories: "All",
    no_videos_title: "No videos yet",
    no_videos_body: "Videos will show up here once authors start uploading them",
    no_category_videos_title: "No videos in category",
    no_category_videos_body: "Try another category or come back later",

    theme_toggle: "Switch theme",
    loading: "Loading...",

    menu_home: "Home",
    menu_trending: "Trending",
    menu_subscriptions: "Subscriptions",
    menu_history: "History",
    menu_studio: "Studio",
    menu_profile: "My channel",
    menu_logout: "Log out",
};

impl Locale {
    pub fn messages(self) -> &'static Messages {
        match self {
            Locale::Ru => &RU,
            Locale::En => &EN,
        }
    }

    pub fn plural(self, n: u64) -> Plural {
        match self {
            Locale::Ru => {
                let (mod10, mod100) = (n % 10, n % 100);
                if (5..20).contains(&mod100) {
                    return Plural::Many;
                }
                match mod10 {
                    1 => Plural::One,
                    2..=4 => Plural::Few,
                    _ => Plural::Many,
                }
            }
            Locale::En => match n {
                1 => Plural::One,
                _ => Plural::Other,
            },
        }
    }

    /// Inflected name of `unit` for a quantity of `n`
    pub fn unit(self, unit: Unit, n: u64) -> &'static str {
        let forms: [&str; 3] = match (self, unit) {
            (Locale::Ru, Unit::Minute) => ["минуту", "минуты", "минут"],
            (Locale::Ru, Unit::Hour) => ["час", "часа", "часов"],
            (Locale::Ru, Unit::Day) => ["день", "дня", "дней"],
            (Locale::En, Unit::Minute) => ["minute", "minutes", "minutes"],
            (Locale::En, Unit::Hour) => ["hour", "hours", "hours"],
            (Locale::En, Unit::Day) => ["day", "days", "days"],
        };
        match self.plural(n) {
            Plural::One => forms[0],
            Plural::Few => forms[1],
            Plural::Many | Plural::Other => forms[2],
        }
    }

    pub fn ago(self, unit: Unit, n: u64) -> String {
        match self {
            Locale::Ru => format!("{n} {} назад", self.unit(unit, n)),
            Locale::En => format!("{n} {} ago", self.unit(unit, n)),
        }
    }

    /// strftime pattern for dates too old to be shown relatively
    pub fn date_format(self) -> &'static str {
        match self {
            Locale::Ru => "%d.%m.%Y",
            Locale::En => "%-m/%-d/%Y",
        }
    }
}
