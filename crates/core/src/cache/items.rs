//! Item CRUD operations backing [`KvStore`] for [`CacheDb`].

use async_trait::async_trait;
use tokio_rusqlite::params;
use tokio_rusqlite::rusqlite;

use super::connection::CacheDb;
use crate::Error;
use crate::store::{KvStore, StoredItem};

#[async_trait]
impl KvStore for CacheDb {
    async fn get_item(&self, table: &str, key: &str) -> Result<Option<StoredItem>, Error> {
        let table = table.to_string();
        let key = key.to_string();
        self.conn
            .call(move |conn| -> Result<Option<StoredItem>, Error> {
                let mut stmt = conn.prepare("SELECT pk, data, updated_at FROM items WHERE table_name = ?1 AND pk = ?2")?;

                let result = stmt.query_row(params![table, key], |row| {
                    Ok(StoredItem { key: row.get(0)?, data: row.get(1)?, updated_at: row.get(2)? })
                });

                match result {
                    Ok(item) => Ok(Some(item)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(e.into()),
                }
            })
            .await
            .map_err(Error::from)
    }

    /// Uses UPSERT semantics: a rewrite keeps the item's original scan position.
    async fn put_item(&self, table: &str, item: StoredItem) -> Result<(), Error> {
        let table = table.to_string();
        self.conn
            .call(move |conn| -> Result<(), Error> {
                conn.execute(
                    "INSERT INTO items (table_name, pk, data, updated_at)
                    VALUES (?1, ?2, ?3, ?4)
                    ON CONFLICT(table_name, pk) DO UPDATE SET
                        data = excluded.data,
                        updated_at = excluded.updated_at",
                    params![table, item.key, item.data, item.updated_at],
                )?;
                Ok(())
            })
            .await
            .map_err(Error::from)
    }

    async fn scan(&self, table: &str) -> Result<Vec<StoredItem>, Error> {
        let table = table.to_string();
        self.conn
            .call(move |conn| -> Result<Vec<StoredItem>, Error> {
                let mut stmt =
                    conn.prepare("SELECT pk, data, updated_at FROM items WHERE table_name = ?1 ORDER BY seq ASC")?;

                let rows = stmt.query_map(params![table], |row| {
                    Ok(StoredItem { key: row.get(0)?, data: row.get(1)?, updated_at: row.get(2)? })
                })?;

                let items = rows.collect::<Result<Vec<_>, _>>()?;
                Ok(items)
            })
            .await
            .map_err(Error::from)
    }
}
