use letterbox_types::{Letter, LetterId, UserId};
use std::path::{Path, PathBuf};

use crate::source::{Cursor, LetterDeleter, LetterSource, Page, PageRequest};
use crate::{Error, Result};

/// Letters kept as a JSON array in a single file.
///
/// Every call re-reads the file, so concurrent CLI invocations observe each
/// other's deletions. Writes go through a temp file and a rename.
#[derive(Debug, Clone)]
pub struct JsonLetterStore {
    path: PathBuf,
}

impl JsonLetterStore {
    pub const FILE_NAME: &'static str = "letters.json";

    pub fn open(data_dir: &Path) -> Self {
        Self::at(data_dir.join(Self::FILE_NAME))
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All stored letters; a missing file is an empty store.
    pub fn load(&self) -> Result<Vec<Letter>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&content)
            .map_err(|e| Error::Store(format!("{}: {}", self.path.display(), e)))
    }

    pub fn save(&self, letters: &[Letter]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, serde_json::to_string_pretty(letters)?)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn parse_cursor(cursor: &Cursor) -> Result<usize> {
        cursor
            .as_str()
            .parse::<usize>()
            .map_err(|_| Error::InvalidCursor(cursor.to_string()))
    }
}

/// Newest first; ties broken by id so pages are stable.
fn sort_newest_first(letters: &mut [Letter]) {
    letters.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| a.letter_id.cmp(&b.letter_id))
    });
}

impl LetterSource for JsonLetterStore {
    fn fetch_page(&self, viewer: &UserId, request: &PageRequest) -> Result<Page<Letter>> {
        let offset = match &request.cursor {
            Some(cursor) => Self::parse_cursor(cursor)?,
            None => 0,
        };
        let page_size = request.page_size.max(1);

        let mut letters: Vec<Letter> = self
            .load()?
            .into_iter()
            .filter(|letter| letter.belongs_to(viewer, request.direction))
            .collect();
        sort_newest_first(&mut letters);

        let total = letters.len();
        let records: Vec<Letter> = letters.into_iter().skip(offset).take(page_size).collect();
        let end = offset.saturating_add(records.len());
        let next_cursor = if end < total {
            Some(Cursor::new(end.to_string()))
        } else {
            None
        };

        tracing::debug!(
            viewer = %viewer,
            direction = %request.direction,
            offset,
            returned = records.len(),
            total,
            "fetched letter page"
        );

        Ok(Page {
            records,
            next_cursor,
        })
    }

    fn fetch_by_id(&self, id: &LetterId, viewer: &UserId) -> Result<Option<Letter>> {
        let letter = self
            .load()?
            .into_iter()
            .find(|letter| &letter.letter_id == id && letter.involves(viewer));

        tracing::debug!(letter_id = %id, viewer = %viewer, found = letter.is_some(), "fetched letter");
        Ok(letter)
    }
}

impl LetterDeleter for JsonLetterStore {
    fn delete(&self, id: &LetterId, requested_by: &UserId) -> Result<()> {
        let mut letters = self.load()?;

        // Letters of other users look missing, same as in `fetch_by_id`.
        let position = letters
            .iter()
            .position(|letter| &letter.letter_id == id && letter.involves(requested_by))
            .ok_or_else(|| Error::NotFound(id.clone()))?;

        letters.remove(position);
        self.save(&letters)?;

        tracing::info!(letter_id = %id, requested_by = %requested_by, "letter deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use letterbox_types::{Direction, Timestamp};
    use tempfile::TempDir;

    fn letter(id: &str, from: &str, to: &str, created_at: i64) -> Letter {
        Letter {
            letter_id: LetterId::new(id),
            sender_id: UserId::new(from),
            recipient_id: UserId::new(to),
            title: format!("Letter {}", id),
            content: String::new(),
            created_at: Timestamp::from_millis(created_at),
            deliver_at: Timestamp::from_millis(created_at + 1_000),
        }
    }

    fn store_with(letters: &[Letter]) -> (TempDir, JsonLetterStore) {
        let dir = TempDir::new().unwrap();
        let store = JsonLetterStore::open(dir.path());
        store.save(letters).unwrap();
        (dir, store)
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = JsonLetterStore::open(dir.path());
        assert!(store.load().unwrap().is_empty());

        let page = store
            .fetch_page(&UserId::new("bob"), &PageRequest::first(Direction::Received, 10))
            .unwrap();
        assert!(page.records.is_empty());
        assert!(page.is_last());
    }

    #[test]
    fn test_pages_follow_cursor_newest_first() {
        let (_dir, store) = store_with(&[
            letter("a", "alice", "bob", 100),
            letter("b", "alice", "bob", 300),
            letter("c", "carol", "bob", 200),
            letter("d", "bob", "alice", 400),
        ]);
        let bob = UserId::new("bob");

        let first = store
            .fetch_page(&bob, &PageRequest::first(Direction::Received, 2))
            .unwrap();
        let ids: Vec<&str> = first.records.iter().map(|l| l.letter_id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c"]);
        assert_eq!(first.next_cursor, Some(Cursor::new("2")));

        let second = store
            .fetch_page(
                &bob,
                &PageRequest::first(Direction::Received, 2).after(first.next_cursor),
            )
            .unwrap();
        let ids: Vec<&str> = second.records.iter().map(|l| l.letter_id.as_str()).collect();
        assert_eq!(ids, vec!["a"]);
        assert!(second.is_last());

        let sent = store
            .fetch_page(&bob, &PageRequest::first(Direction::Sent, 10))
            .unwrap();
        assert_eq!(sent.records.len(), 1);
        assert_eq!(sent.records[0].letter_id.as_str(), "d");
    }

    #[test]
    fn test_invalid_cursor() {
        let (_dir, store) = store_with(&[]);
        let request = PageRequest::first(Direction::Sent, 5).after(Some(Cursor::new("abc")));
        let err = store.fetch_page(&UserId::new("bob"), &request).unwrap_err();
        assert!(matches!(err, Error::InvalidCursor(_)));
    }

    #[test]
    fn test_fetch_by_id_hides_letters_from_strangers() {
        let (_dir, store) = store_with(&[letter("a", "alice", "bob", 100)]);
        let id = LetterId::new("a");

        assert!(store.fetch_by_id(&id, &UserId::new("alice")).unwrap().is_some());
        assert!(store.fetch_by_id(&id, &UserId::new("bob")).unwrap().is_some());
        assert!(store.fetch_by_id(&id, &UserId::new("eve")).unwrap().is_none());
        assert!(store.fetch_by_id(&LetterId::new("zzz"), &UserId::new("bob")).unwrap().is_none());
    }

    #[test]
    fn test_delete_by_party_persists() {
        let (_dir, store) = store_with(&[
            letter("a", "alice", "bob", 100),
            letter("b", "alice", "bob", 200),
        ]);

        store.delete(&LetterId::new("a"), &UserId::new("bob")).unwrap();

        let remaining = store.load().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].letter_id.as_str(), "b");
    }

    #[test]
    fn test_delete_rejects_strangers_and_missing() {
        let (_dir, store) = store_with(&[letter("a", "alice", "bob", 100)]);

        let err = store.delete(&LetterId::new("a"), &UserId::new("eve")).unwrap_err();
        assert!(matches!(err, Error::NotFound(ref id) if id.as_str() == "a"));
        assert_eq!(err.to_string(), "Letter not found: a");

        let err = store.delete(&LetterId::new("nope"), &UserId::new("bob")).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));

        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn test_corrupt_file_is_store_error() {
        let dir = TempDir::new().unwrap();
        let store = JsonLetterStore::open(dir.path());
        std::fs::write(store.path(), "{ not json").unwrap();
        assert!(matches!(store.load().unwrap_err(), Error::Store(_)));
    }
}
