use crate::{Error, Result};

/// Classification of a logged item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// The item named an existing file on the local filesystem at record time.
    Local,
    /// Anything else, typically a stream URL.
    Remote,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Local => "local",
            RecordKind::Remote => "remote",
        }
    }

    /// `local` is the only token that selects [`RecordKind::Local`].
    ///
    /// Imported legacy history can carry other tokens; all of them take the
    /// remote presentation path, so they decode as [`RecordKind::Remote`].
    fn from_token(token: &str) -> Self {
        if token == "local" {
            RecordKind::Local
        } else {
            RecordKind::Remote
        }
    }
}

/// One logged reference to a local file or remote link.
///
/// Records are immutable once written: the log tree is append-only and has
/// no compaction or retention pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Seconds since epoch, fractional precision preserved.
    pub timestamp: f64,
    pub kind: RecordKind,
    /// `parent/basename` for local files, the original string for remote
    /// links. Never contains a newline; may contain spaces.
    pub item: String,
}

impl Record {
    /// Decode one log line of the form `<timestamp> <kind> <item>`.
    ///
    /// The item may itself contain spaces, so the split caps at three
    /// fields.
    pub fn parse(line: &str) -> Result<Self> {
        let mut fields = line.splitn(3, ' ');
        let (Some(timestamp), Some(kind), Some(item)) =
            (fields.next(), fields.next(), fields.next())
        else {
            return Err(Error::Parse(format!(
                "expected 3 space-separated fields, got {:?}",
                line
            )));
        };

        let timestamp: f64 = timestamp
            .parse()
            .map_err(|_| Error::Parse(format!("invalid timestamp {:?}", timestamp)))?;

        Ok(Record {
            timestamp,
            kind: RecordKind::from_token(kind),
            item: item.to_string(),
        })
    }

    /// Encode as one log line, without the trailing newline.
    pub fn to_line(&self) -> String {
        format!("{} {} {}", self.timestamp, self.kind.as_str(), self.item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_local_record() {
        let record = Record::parse("1691389123.456789 local movies/film.mkv").unwrap();
        assert_eq!(record.timestamp, 1691389123.456789);
        assert_eq!(record.kind, RecordKind::Local);
        assert_eq!(record.item, "movies/film.mkv");
    }

    #[test]
    fn parse_remote_item_keeps_spaces() {
        let record = Record::parse("1700000000 remote some stream with spaces").unwrap();
        assert_eq!(record.kind, RecordKind::Remote);
        assert_eq!(record.item, "some stream with spaces");
    }

    #[test]
    fn parse_rejects_short_line() {
        let err = Record::parse("1700000000 local").unwrap_err();
        assert!(err.to_string().contains("3 space-separated fields"));
    }

    #[test]
    fn parse_rejects_bad_timestamp() {
        let err = Record::parse("yesterday local movies/film.mkv").unwrap_err();
        assert!(err.to_string().contains("invalid timestamp"));
    }

    #[test]
    fn unknown_kind_token_decodes_as_remote() {
        // Pre-merge imports wrote lines without a normalized kind token.
        let record = Record::parse("1600000000 imported old/entry").unwrap();
        assert_eq!(record.kind, RecordKind::Remote);
        assert_eq!(record.item, "old/entry");
    }

    #[test]
    fn to_line_matches_wire_form() {
        let record = Record {
            timestamp: 1691389123.5,
            kind: RecordKind::Local,
            item: "movies/film.mkv".to_string(),
        };
        assert_eq!(record.to_line(), "1691389123.5 local movies/film.mkv");
    }
}
