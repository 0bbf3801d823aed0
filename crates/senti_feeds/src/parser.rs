use chrono::{DateTime, Utc};
use quick_xml::events::Event;
use quick_xml::Reader;
use scraper::Html;

use senti_core::{Error, FeedArticle, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Field {
    Title,
    Description,
    Summary,
    Content,
    Link,
    Published,
}

impl Field {
    fn from_tag(tag: &[u8]) -> Option<Self> {
        match tag {
            b"title" => Some(Field::Title),
            b"description" => Some(Field::Description),
            b"summary" => Some(Field::Summary),
            b"content" | b"encoded" => Some(Field::Content),
            b"link" => Some(Field::Link),
            b"pubDate" | b"published" | b"updated" | b"date" => Some(Field::Published),
            _ => None,
        }
    }
}

/// Text collected for the entry being parsed. The first occurrence of a
/// field wins, so `media:title` and friends cannot override the real one.
#[derive(Debug, Default)]
struct EntryBuilder {
    title: String,
    description: String,
    summary: String,
    content: String,
    link: String,
    published: String,
}

impl EntryBuilder {
    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Title => &mut self.title,
            Field::Description => &mut self.description,
            Field::Summary => &mut self.summary,
            Field::Content => &mut self.content,
            Field::Link => &mut self.link,
            Field::Published => &mut self.published,
        }
    }

    fn build(self) -> FeedArticle {
        let description = [self.description, self.summary, self.content]
            .into_iter()
            .find(|s| !s.trim().is_empty())
            .unwrap_or_default();
        FeedArticle {
            title: plain_text(&self.title),
            description: plain_text(&description),
            link: Some(self.link.trim().to_string()).filter(|l| !l.is_empty()),
            published_at: parse_date(self.published.trim()),
        }
    }
}

/// Parses an RSS 2.0, RSS 1.0 or Atom document into at most `limit` entries.
pub fn parse_feed(xml: &str, limit: usize) -> Result<Vec<FeedArticle>> {
    if limit == 0 {
        return Ok(Vec::new());
    }
    let mut reader = Reader::from_str(xml);
    let mut articles = Vec::new();
    let mut entry: Option<EntryBuilder> = None;
    let mut field: Option<Field> = None;
    let mut is_feed = false;

    while articles.len() < limit {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name = e.local_name();
                match name.as_ref() {
                    b"rss" | b"feed" | b"RDF" => is_feed = true,
                    b"item" | b"entry" => {
                        entry = Some(EntryBuilder::default());
                        field = None;
                    }
                    tag => {
                        if let Some(builder) = entry.as_mut() {
                            field = Field::from_tag(tag).filter(|f| builder.slot(*f).is_empty());
                        }
                    }
                }
            }
            Ok(Event::Empty(e)) => {
                // Atom links carry the target in an attribute
                if let Some(builder) = entry.as_mut() {
                    if e.local_name().as_ref() == b"link" && builder.link.is_empty() {
                        if let Ok(Some(href)) = e.try_get_attribute("href") {
                            builder.link = String::from_utf8_lossy(&href.value).into_owned();
                        }
                    }
                }
            }
            Ok(Event::Text(t)) => {
                if let (Some(builder), Some(f)) = (entry.as_mut(), field) {
                    match t.unescape() {
                        Ok(text) => builder.slot(f).push_str(&text),
                        // HTML entities such as &nbsp; are not XML entities
                        Err(_) => builder.slot(f).push_str(&String::from_utf8_lossy(&t)),
                    }
                }
            }
            Ok(Event::CData(c)) => {
                if let (Some(builder), Some(f)) = (entry.as_mut(), field) {
                    builder.slot(f).push_str(&String::from_utf8_lossy(&c.into_inner()));
                }
            }
            Ok(Event::End(e)) => {
                let name = e.local_name();
                match name.as_ref() {
                    b"item" | b"entry" => {
                        if let Some(builder) = entry.take() {
                            articles.push(builder.build());
                        }
                        field = None;
                    }
                    tag => {
                        if field.is_some() && Field::from_tag(tag) == field {
                            field = None;
                        }
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(Error::Feed(format!(
                    "malformed feed at position {}: {}",
                    reader.buffer_position(),
                    e
                )))
            }
            _ => {}
        }
    }

    if !is_feed && articles.is_empty() {
        return Err(Error::Feed("document is not an RSS or Atom feed".to_string()));
    }
    Ok(articles)
}

/// Reduces markup to its text content with collapsed whitespace.
pub fn plain_text(raw: &str) -> String {
    let text = if raw.contains('<') {
        Html::parse_fragment(raw).root_element().text().collect::<String>()
    } else {
        raw.to_string()
    };
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    if raw.is_empty() {
        return None;
    }
    DateTime::parse_from_rfc2822(raw)
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .map(|d| d.with_timezone(&Utc))
        .ok()
}
