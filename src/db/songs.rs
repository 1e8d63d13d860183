//! SQLite implementation of [`SongStore`].
//!
//! Every statement binds its values; filter strings never reach the SQL
//! text. Substring filters use `instr()` rather than `LIKE` because SQLite's
//! `LIKE` ignores ASCII case and treats `%`/`_` in user input as wildcards.

use async_trait::async_trait;
use sqlx::sqlite::{Sqlite, SqlitePool};
use sqlx::QueryBuilder;
use tracing::{debug, info, warn};

use super::traits::SongStore;
use crate::error::{Result, ResultExt};
use crate::model::{NewSong, Song, SongFilter};

/// Separator between paragraphs of song text.
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

const SELECT_SONGS: &str = "SELECT id, artist, title, release_date, text, source_link FROM songs";

/// Split song text into paragraphs on [`PARAGRAPH_SEPARATOR`].
///
/// Mirrors a plain string split: empty text yields one empty paragraph.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    text.split(PARAGRAPH_SEPARATOR).map(str::to_owned).collect()
}

/// Song storage backed by a SQLite pool.
#[derive(Debug, Clone)]
pub struct SqliteSongStore {
    pool: SqlitePool,
}

impl SqliteSongStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Build the filtered list query.
///
/// Conditions are ANDed in a fixed order. `LIMIT`/`OFFSET` are only added
/// when non-zero; SQLite needs a `LIMIT` before `OFFSET`, so an offset alone
/// gets `LIMIT -1` (unbounded).
fn list_query(filter: &SongFilter) -> QueryBuilder<'_, Sqlite> {
    let mut qb = QueryBuilder::new(SELECT_SONGS);
    let mut has_where = false;

    for (column, value) in [
        ("artist", filter.artist()),
        ("title", filter.title()),
        ("text", filter.text()),
    ] {
        if let Some(value) = value {
            push_condition(&mut qb, &mut has_where);
            qb.push("instr(").push(column).push(", ");
            qb.push_bind(value);
            qb.push(") > 0");
        }
    }

    for (column, value) in [
        ("release_date", filter.release_date()),
        ("source_link", filter.source_link()),
    ] {
        if let Some(value) = value {
            push_condition(&mut qb, &mut has_where);
            qb.push(column).push(" = ");
            qb.push_bind(value);
        }
    }

    if filter.limit > 0 {
        qb.push(" LIMIT ");
        qb.push_bind(to_sql_int(filter.limit));
    } else if filter.offset > 0 {
        qb.push(" LIMIT -1");
    }
    if filter.offset > 0 {
        qb.push(" OFFSET ");
        qb.push_bind(to_sql_int(filter.offset));
    }

    qb
}

fn push_condition(qb: &mut QueryBuilder<'_, Sqlite>, has_where: &mut bool) {
    qb.push(if *has_where { " AND " } else { " WHERE " });
    *has_where = true;
}

fn to_sql_int(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[async_trait]
impl SongStore for SqliteSongStore {
    async fn exists(&self, id: i64) -> Result<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM songs WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .with_context(format!("checking song {id}"))?;

        debug!(song_id = id, exists = count > 0, "Exist check");
        Ok(count > 0)
    }

    async fn list(&self, filter: &SongFilter) -> Result<Vec<Song>> {
        let mut qb = list_query(filter);
        debug!(query = qb.sql(), ?filter, "Executing list query");

        let songs = qb
            .build_query_as::<Song>()
            .fetch_all(&self.pool)
            .await
            .with_context("listing songs")?;

        info!(count = songs.len(), "Retrieved songs");
        Ok(songs)
    }

    async fn text_parts(&self, id: i64) -> Result<Vec<String>> {
        let text: Option<String> = sqlx::query_scalar("SELECT text FROM songs WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .with_context(format!("fetching text of song {id}"))?;

        let Some(text) = text else {
            warn!(song_id = id, "Song text not found");
            return Ok(Vec::new());
        };

        let parts = split_paragraphs(&text);
        info!(song_id = id, parts = parts.len(), "Retrieved song text");
        Ok(parts)
    }

    async fn create(&self, song: &NewSong) -> Result<i64> {
        let result = sqlx::query(
            "INSERT INTO songs (artist, title, release_date, text, source_link) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&song.artist)
        .bind(&song.title)
        .bind(&song.release_date)
        .bind(&song.text)
        .bind(&song.source_link)
        .execute(&self.pool)
        .await
        .with_context("inserting song")?;

        let id = result.last_insert_rowid();
        info!(song_id = id, artist = %song.artist, title = %song.title, "Song created");
        Ok(id)
    }

    async fn update(&self, song: &Song) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE songs
            SET artist = ?, title = ?, release_date = ?, text = ?, source_link = ?
            WHERE id = ?
            "#,
        )
        .bind(&song.artist)
        .bind(&song.title)
        .bind(&song.release_date)
        .bind(&song.text)
        .bind(&song.source_link)
        .bind(song.id)
        .execute(&self.pool)
        .await
        .with_context(format!("updating song {}", song.id))?;

        info!(song_id = song.id, rows = result.rows_affected(), "Song updated");
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM songs WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .with_context(format!("deleting song {id}"))?;

        info!(song_id = id, rows = result.rows_affected(), "Song deleted");
        Ok(())
    }
}
