//! HTML fragment consumed by the bundled chat page.
//!
//! The page replaces its chat box with this fragment on every poll.
//! The template is auto-escaped, so user strings cannot inject markup;
//! visible text is unchanged.

use minijinja::Environment;

use super::feed::Feed;

const FEED_TEMPLATE_NAME: &str = "feed.html";
const FEED_TEMPLATE: &str = include_str!("../../../assets/feed.html");

/// Compiled feed fragment template, built once at startup.
pub struct FeedTemplate {
    env: Environment<'static>,
}

impl FeedTemplate {
    /// Compile the bundled template.
    ///
    /// # Errors
    ///
    /// Returns an error when the template source does not parse.
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template(FEED_TEMPLATE_NAME, FEED_TEMPLATE)?;
        Ok(Self { env })
    }

    /// Render every entry of `feed`, one bubble per line.
    pub fn render(&self, feed: &Feed) -> Result<String, minijinja::Error> {
        self.env.get_template(FEED_TEMPLATE_NAME)?.render(feed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::AttachmentKind,
        ui::presenter::feed::{AttachmentView, FeedEntry, Framing},
    };

    fn entry(framing: Framing, attachment: Option<AttachmentView>, text: Option<&str>) -> FeedEntry {
        FeedEntry {
            framing,
            user: "A".to_string(),
            time: "08:05".to_string(),
            attachment,
            text: text.map(str::to_string),
        }
    }

    fn view(name: &str, kind: AttachmentKind) -> AttachmentView {
        AttachmentView {
            name: name.to_string(),
            kind,
            url: format!("/uploads/{name}"),
        }
    }

    fn render(entries: Vec<FeedEntry>) -> String {
        FeedTemplate::new()
            .unwrap()
            .render(&Feed { entries })
            .unwrap()
    }

    #[test]
    fn test_text_message_markup() {
        // テスト項目: 本文メッセージは meta 行と本文を持つ吹き出しになる
        // given (前提条件):
        let entries = vec![entry(Framing::Own, None, Some("hi"))];

        // when (操作):
        let html = render(entries);

        // then (期待する結果):
        assert_eq!(
            html,
            "<div class=\"msg me\"><span class=\"meta\">A \u{2022} 08:05</span><div>hi</div></div>\n"
        );
    }

    #[test]
    fn test_one_line_per_message() {
        let html = render(vec![
            entry(Framing::Own, None, Some("one")),
            entry(Framing::Other, None, Some("two")),
        ]);

        assert_eq!(html.lines().count(), 2);
        assert!(html.ends_with("</div>\n"));
        assert!(html.lines().nth(1).unwrap().starts_with("<div class=\"msg other\">"));
    }

    #[test]
    fn test_media_embeds_have_save_link() {
        // テスト項目: 画像・動画・音声は埋め込みと保存リンクを持つ
        let html = render(vec![
            entry(Framing::Own, Some(view("a.png", AttachmentKind::Image)), None),
            entry(Framing::Own, Some(view("b.mp4", AttachmentKind::Video)), None),
            entry(Framing::Own, Some(view("c.mp3", AttachmentKind::Audio)), None),
        ]);

        assert!(html.contains("<img src=\"/uploads/a.png\">"));
        assert!(html.contains("<video controls src=\"/uploads/b.mp4\"></video>"));
        assert!(html.contains("<audio controls src=\"/uploads/c.mp3\"></audio>"));
        assert!(html.contains(
            "<a href=\"/uploads/a.png\" download class=\"dl-btn\">\u{2b07}\u{fe0f} Save a.png</a>"
        ));
        assert!(html.contains("Save b.mp4"));
        assert!(html.contains("Save c.mp3"));
        assert!(!html.contains("file-link"));
    }

    #[test]
    fn test_generic_file_is_download_link() {
        let html = render(vec![entry(
            Framing::Other,
            Some(view("notes.txt", AttachmentKind::File)),
            Some("see file"),
        )]);

        assert!(html.contains(
            "<a href=\"/uploads/notes.txt\" download class=\"file-link\">\u{1f4c4} notes.txt</a><div>see file</div>"
        ));
        assert!(!html.contains("dl-btn"));
    }

    #[test]
    fn test_user_strings_are_escaped() {
        // テスト項目: ユーザー入力は HTML エスケープされる
        // given (前提条件):
        let mut e = entry(Framing::Other, None, Some("<b>alert('x')</b> & co"));
        e.user = "\"bob\"".to_string();

        // when (操作):
        let html = render(vec![e]);

        // then (期待する結果):
        assert!(html.contains("&lt;b&gt;alert(&#x27;x&#x27;)"));
        assert!(html.contains("&amp; co"));
        assert!(html.contains("&quot;bob&quot;"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_empty_feed_is_empty_fragment() {
        assert_eq!(render(Vec::new()), "");
    }
}
