use anyhow::Context;
use kronik_client::{
    api::{CommentId, User, UserId, VideoKey},
    channel_name, Gateway, HttpBackend, Outcome, SubmitControl,
};

#[derive(structopt::StructOpt)]
struct Opt {
    #[structopt(short, long)]
    host: String,

    #[structopt(subcommand)]
    cmd: Command,
}

#[derive(structopt::StructOpt)]
enum Command {
    /// List the videos of the home feed
    ListVideos {
        #[structopt(long, default_value = "0")]
        offset: usize,

        #[structopt(long, default_value = "20")]
        limit: usize,
    },

    /// Ask a question under a video
    Comment {
        /// Composite video identifier, `<owner>__<video>`
        video: VideoKey,

        text: String,
    },

    /// Answer a question
    Reply {
        /// Composite video identifier, `<owner>__<video>`
        video: VideoKey,

        comment_id: String,

        text: String,
    },
}

fn env(name: &str) -> anyhow::Result<String> {
    std::env::var(name).with_context(|| format!("retrieving {name} environment variable"))
}

// Only used to attribute records kept locally when the server is unreachable
fn me() -> User {
    User {
        id: std::env::var("KRONIK_USER")
            .map(UserId)
            .unwrap_or_else(|_| UserId::placeholder()),
        display_name: String::from("User"),
        avatar_url: None,
    }
}

fn backend(host: &str) -> anyhow::Result<HttpBackend> {
    Ok(HttpBackend::new(reqwest::Client::new(), host)
        .with_session(Some(env("KRONIK_SESSION")?))
        .with_csrf_token(Some(env("KRONIK_CSRF_TOKEN")?)))
}

fn report<T: std::fmt::Debug>(outcome: Outcome<T>) {
    if outcome.is_synthesized() {
        println!("server unreachable, nothing was stored; would have shown:");
    }
    println!("{:#?}", outcome.record());
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let opt = <Opt as structopt::StructOpt>::from_args();
    let control = std::rc::Rc::new(SubmitControl::default());

    match opt.cmd {
        Command::ListVideos { offset, limit } => {
            let backend = HttpBackend::new(reqwest::Client::new(), opt.host);
            let page = kronik_client::Backend::list_videos(&backend, offset, limit)
                .await
                .context("listing videos")?;
            if !page.success {
                anyhow::bail!("server refused to list videos");
            }
            for v in &page.videos {
                println!("{}\t{}\t{}", v.key(), v.title, channel_name(v));
            }
            if let Some(total) = page.total {
                println!("({} of {total})", page.videos.len());
            }
        }
        Command::Comment { video, text } => {
            let gw = Gateway::new(backend(&opt.host)?, video, me());
            let outcome = gw
                .submit_comment(&control, &text)
                .await
                .context("posting comment")?;
            report(outcome);
        }
        Command::Reply {
            video,
            comment_id,
            text,
        } => {
            let gw = Gateway::new(backend(&opt.host)?, video, me());
            let outcome = gw
                .submit_reply(&control, &CommentId(comment_id), &text)
                .await
                .context("posting reply")?;
            report(outcome);
        }
    }

    Ok(())
}
