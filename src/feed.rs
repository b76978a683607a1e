//! Support for creating an Atom feed from the site's real posts.
//! Placeholder posts never appear in the feed; they are furniture for the
//! site itself, not syndicated writing.

use crate::config::Site;
use crate::post::Post;
use atom_syndication::{Entry, Error as AtomError, Feed, Link, Person, Text};
use chrono::{FixedOffset, NaiveDate, ParseError, ParseResult, TimeZone, Utc};
use std::fmt;
use std::io::Write;

/// Creates a feed for the site's real posts and writes it to a
/// [`std::io::Write`].
pub fn write_feed<W: Write>(site: &Site, posts: &[Post], w: W) -> Result<()> {
    feed(site, posts)?.write_to(w)?;
    Ok(())
}

fn feed(site: &Site, posts: &[Post]) -> ParseResult<Feed> {
    Ok(Feed {
        title: Text::plain(site.title.clone()),
        subtitle: Some(Text::plain(site.description.clone())),
        id: site.home_page(),
        updated: utc().from_utc_datetime(&Utc::now().naive_utc()),
        authors: people(&site.author),
        links: vec![Link {
            href: site.home_page(),
            rel: "alternate".to_string(),
            ..Default::default()
        }],
        entries: feed_entries(site, posts)?,
        ..Default::default()
    })
}

/// Builds the feed entries, newest first.
fn feed_entries(site: &Site, posts: &[Post]) -> ParseResult<Vec<Entry>> {
    let mut posts: Vec<&Post> = posts.iter().collect();
    // Newest first; sort_by is stable so equal dates keep store order.
    posts.sort_by(|a, b| b.metadata.published_at.cmp(&a.metadata.published_at));

    let mut entries: Vec<Entry> = Vec::with_capacity(posts.len());
    for post in posts {
        // Posts only carry a date but feeds want a full timestamp, so peg
        // everything to midnight UTC.
        let date = utc().from_utc_datetime(
            &NaiveDate::parse_from_str(&post.metadata.published_at, "%Y-%m-%d")?
                .and_hms_opt(0, 0, 0)
                .unwrap(), // midnight is always a valid time
        );
        let url = site.post_url(&post.slug);

        entries.push(Entry {
            id: url.clone(),
            title: Text::plain(post.metadata.title.clone()),
            updated: date,
            published: Some(date),
            authors: people(&site.author),
            summary: Some(Text::plain(post.metadata.summary.clone())),
            links: vec![Link {
                href: url,
                rel: "alternate".to_owned(),
                ..Default::default()
            }],
            ..Default::default()
        })
    }
    Ok(entries)
}

fn utc() -> FixedOffset {
    FixedOffset::east_opt(0).unwrap() // a zero offset is always in range
}

fn people(author: &crate::config::Author) -> Vec<Person> {
    vec![Person {
        name: author.name.clone(),
        email: author.email.clone(),
        uri: None,
        ..Default::default()
    }]
}

type Result<T> = std::result::Result<T, Error>;

/// Represents a problem creating a feed. Variants include I/O, Atom, and
/// date-time parsing issues.
#[derive(Debug)]
pub enum Error {
    /// Returned when there is a generic I/O error.
    Io(std::io::Error),

    /// Returned when there is an Atom-related error.
    Atom(AtomError),

    /// Returned when there is an issue parsing a post's date.
    DateTimeParse(ParseError),
}

impl fmt::Display for Error {
    /// Implements [`fmt::Display`] for [`Error`].
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Io(err) => err.fmt(f),
            Error::Atom(err) => err.fmt(f),
            Error::DateTimeParse(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    /// Implements [`std::error::Error`] for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Atom(err) => Some(err),
            Error::DateTimeParse(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    /// Converts [`std::io::Error`]s into [`Error`]. This allows us to use the
    /// `?` operator in fallible feed operations.
    fn from(err: std::io::Error) -> Error {
        Error::Io(err)
    }
}

impl From<AtomError> for Error {
    /// Converts [`AtomError`]s into [`Error`]. This allows us to use the `?`
    /// operator in fallible feed operations.
    fn from(err: AtomError) -> Error {
        Error::Atom(err)
    }
}

impl From<ParseError> for Error {
    /// Converts [`ParseError`]s into [`Error`]. This allows us to use the `?`
    /// operator in fallible feed operations.
    fn from(err: ParseError) -> Error {
        Error::DateTimeParse(err)
    }
}
