use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::{any::AnyRow, FromRow, Row as _};

pub mod manager;

/// Number of slots in a grid.
pub const GRID_SLOTS: usize = 9;

/// Trait for managing grids.
#[async_trait]
pub trait Manager {
    /// Insert a new grid for the given owner and return the generated id.
    async fn create(
        &self,
        user_id: &str,
        name: Option<&str>,
        manga: &[Slot],
    ) -> anyhow::Result<Option<i64>>;
    /// Find all grids belonging to one owner, newest first.
    async fn find_all_by_user(&self, user_id: &str) -> anyhow::Result<Vec<Grid>>;
}

/// One manga cover reference occupying a grid slot.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Cover {
    /// Identifier of the manga at the upstream metadata API.
    pub id: String,
    /// Display title of the manga.
    pub title: String,
    /// URL of the cover image at the upstream CDN.
    pub image: String,
}

/// One of the nine positions in a grid, empty or holding one cover reference.
pub type Slot = Option<Cover>;

#[derive(Deserialize, Serialize, Debug)]
/// Model for a saved 3×3 cover arrangement.
pub struct Grid {
    /// Database-generated identifier.
    pub id: i64,
    /// Opaque subject identifier of the owner, from the identity provider.
    pub user_id: String,
    /// Free-text label, optional.
    pub name: Option<String>,
    /// The nine slots. The same manga may occupy multiple slots.
    pub manga: Vec<Slot>,
    /// Creation timestamp in RFC 3339 format. Set once, never updated.
    pub created_at: String,
}

impl FromRow<'_, AnyRow> for Grid {
    fn from_row(row: &AnyRow) -> Result<Self, sqlx::Error> {
        // Slots are stored as a JSON text column. Decode failures surface as
        // column decode errors rather than panics.
        let manga_json: String = row.try_get("manga")?;
        let manga = serde_json::from_str(&manga_json).map_err(|err| sqlx::Error::ColumnDecode {
            index: String::from("manga"),
            source: Box::new(err),
        })?;
        Ok(Self {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            name: row.try_get::<Option<String>, _>("name")?,
            manga,
            created_at: row.try_get("created_at")?,
        })
    }
}

#[cfg(test)]
mod test {
    use super::{Cover, Slot, GRID_SLOTS};

    #[test]
    fn test_slot_json_when_empty_expect_null() {
        let slots: Vec<Slot> = vec![None; GRID_SLOTS];
        let actual = serde_json::to_string(&slots).unwrap();
        let expected = String::from("[null,null,null,null,null,null,null,null,null]");
        assert_eq!(expected, actual);
    }

    #[test]
    fn test_slot_json_roundtrip_when_occupied_expect_same_cover() {
        let slots: Vec<Slot> = vec![
            Some(Cover {
                id: String::from("manga-no-1"),
                title: String::from("One"),
                image: String::from("https://uploads.example.org/covers/1.jpg"),
            }),
            None,
        ];
        let json = serde_json::to_string(&slots).unwrap();
        let actual: Vec<Slot> = serde_json::from_str(&json).unwrap();
        assert_eq!(slots, actual);
    }
}
