//! Starter catalog loading.
//!
//! Populates the inventory table with a furniture catalog on boot when
//! `seed_demo_data` is enabled. Seeding is idempotent: rows whose SKU already
//! exists are left untouched, so operator edits survive restarts.

use crate::db::DbPool;
use crate::entities::inventory_item::{self, Entity as InventoryItemEntity};
use crate::errors::ServiceError;
use sea_orm::{EntityTrait, Set};
use std::collections::HashSet;
use tracing::info;

const STARTER_CATALOG: &[(&str, &str, i32)] = &[
    ("FUR001", "Wooden Chair", 30),
    ("FUR002", "Office Chair", 60),
    ("FUR003", "Recliner Chair", 40),
    ("FUR004", "Dining Table", 16),
    ("FUR005", "Coffee Table", 36),
    ("FUR006", "Side Table", 40),
    ("FUR007", "Study Desk", 24),
    ("FUR008", "Office Desk", 20),
    ("FUR009", "Bookshelf", 28),
    ("FUR010", "Wardrobe", 18),
    ("FUR011", "Sofa 2-Seater", 14),
    ("FUR012", "Sofa 3-Seater", 12),
    ("FUR013", "L-Shaped Sofa", 10),
    ("FUR014", "TV Unit", 26),
    ("FUR015", "TV Cabinet", 20),
    ("FUR016", "Bed Queen Size", 16),
    ("FUR017", "Bed King Size", 12),
    ("FUR018", "Bed Single", 20),
    ("FUR019", "Bedside Table", 40),
    ("FUR020", "Shoe Rack", 32),
    ("FUR021", "Bar Stool", 25),
    ("FUR022", "Armchair", 15),
    ("FUR023", "Rocking Chair", 12),
    ("FUR024", "Bean Bag Chair", 20),
    ("FUR025", "Gaming Chair", 10),
    ("FUR026", "Director's Chair", 8),
    ("FUR027", "Folding Chair", 60),
    ("FUR028", "Wingback Chair", 7),
    ("FUR029", "Lounge Chair", 9),
    ("FUR030", "Dining Chair", 35),
    ("FUR031", "Console Table", 14),
    ("FUR032", "Accent Table", 18),
    ("FUR033", "Nesting Tables", 12),
    ("FUR034", "Outdoor Table", 10),
    ("FUR035", "Folding Table", 22),
    ("FUR036", "Computer Desk", 16),
    ("FUR037", "Writing Desk", 11),
    ("FUR038", "Corner Desk", 9),
    ("FUR039", "Standing Desk", 8),
    ("FUR040", "Dining Bench", 24),
    ("FUR041", "Sectional Sofa", 6),
    ("FUR042", "Loveseat", 10),
    ("FUR043", "Chaise Lounge", 5),
    ("FUR044", "Convertible Sofa", 7),
    ("FUR045", "Futon", 12),
    ("FUR046", "Sleeper Sofa", 4),
    ("FUR047", "Chesterfield Sofa", 3),
    ("FUR048", "Mid-Century Sofa", 6),
    ("FUR049", "Bunk Bed", 5),
    ("FUR050", "Trundle Bed", 4),
    ("FUR051", "Canopy Bed", 3),
    ("FUR052", "Platform Bed", 10),
    ("FUR053", "Adjustable Bed", 6),
    ("FUR054", "Daybed", 7),
    ("FUR055", "Murphy Bed", 2),
    ("FUR056", "Four-Poster Bed", 4),
    ("FUR057", "Chest of Drawers", 12),
    ("FUR058", "Dresser", 15),
    ("FUR059", "Nightstand", 20),
    ("FUR060", "Entertainment Center", 8),
    ("FUR061", "Storage Ottoman", 14),
    ("FUR062", "Bookcase", 18),
    ("FUR063", "Sideboard", 10),
    ("FUR064", "Cabinet", 11),
    ("FUR065", "Wine Rack", 7),
    ("FUR066", "Patio Chair", 16),
    ("FUR067", "Outdoor Sofa", 5),
    ("FUR068", "Hammock", 8),
    ("FUR069", "Picnic Table", 6),
    ("FUR070", "Adirondack Chair", 12),
    ("FUR071", "Outdoor Bench", 10),
    ("FUR072", "Sun Lounger", 9),
    ("FUR073", "Kids Bed", 8),
    ("FUR074", "Kids Chair", 15),
    ("FUR075", "Kids Table", 12),
    ("FUR076", "Toy Chest", 10),
    ("FUR077", "Bunk Bed with Desk", 4),
    ("FUR078", "Kids Bookshelf", 14),
    ("FUR079", "Executive Chair", 10),
    ("FUR080", "Reclining Sofa", 10),
    ("FUR081", "Conference Table", 3),
    ("FUR082", "Filing Cabinet", 8),
    ("FUR083", "Desk Organizer", 20),
    ("FUR084", "Whiteboard", 7),
    ("FUR085", "Room Divider", 5),
    ("FUR086", "Mirror", 12),
    ("FUR087", "Wall Shelf", 18),
    ("FUR088", "Coat Rack", 10),
    ("FUR089", "Ladder Shelf", 6),
    ("FUR090", "Floating Shelf", 15),
    ("FUR091", "Bar Cart", 8),
    ("FUR092", "TV Stand", 11),
    ("FUR093", "Magazine Rack", 9),
    ("FUR094", "Plant Stand", 14),
    ("FUR095", "Stool", 20),
    ("FUR096", "Foldable Desk", 12),
    ("FUR097", "Wall-Mounted Desk", 7),
    ("FUR098", "Corner Shelf", 10),
    ("FUR099", "Underbed Storage", 8),
    ("FUR100", "Jewelry Armoire", 5),
    ("FUR101", "Shoe Cabinet", 11),
    ("FUR102", "Hat Stand", 6),
    ("FUR103", "Umbrella Stand", 9),
    ("FUR104", "Pet Bed", 15),
    ("FUR105", "Pet House", 7),
    ("FUR106", "Kitchen Island", 4),
    ("FUR107", "Breakfast Bar", 6),
    ("FUR108", "Wet Bar", 3),
    ("FUR109", "Vanity", 8),
    ("FUR110", "Medicine Cabinet", 10),
    ("FUR111", "Linen Cabinet", 7),
    ("FUR112", "Spice Rack", 12),
    ("FUR113", "Cutlery Organizer", 15),
    ("FUR114", "Kitchen Cart", 9),
    ("FUR115", "Bakers Rack", 6),
    ("FUR116", "Pantry Cabinet", 5),
    ("FUR117", "Wine Cabinet", 4),
    ("FUR118", "Display Cabinet", 8),
    ("FUR119", "Curio Cabinet", 3),
    ("FUR120", "Extendable Dining Table", 8),
];

/// Inserts any catalog SKU not already present. Returns how many rows were
/// added.
pub async fn seed_starter_catalog(db: &DbPool) -> Result<usize, ServiceError> {
    let existing: HashSet<String> = InventoryItemEntity::find()
        .all(db)
        .await?
        .into_iter()
        .map(|item| item.sku)
        .collect();

    // insert_many skips ActiveModelBehavior, so timestamps are set here
    let now = chrono::Utc::now();
    let missing: Vec<inventory_item::ActiveModel> = STARTER_CATALOG
        .iter()
        .filter(|(sku, _, _)| !existing.contains(*sku))
        .map(|(sku, name, quantity)| inventory_item::ActiveModel {
            sku: Set((*sku).to_string()),
            name: Set((*name).to_string()),
            quantity: Set(*quantity),
            created_at: Set(now),
            updated_at: Set(Some(now)),
        })
        .collect();

    let added = missing.len();
    if added > 0 {
        InventoryItemEntity::insert_many(missing).exec(db).await?;
    }

    info!(added, skipped = existing.len(), "starter catalog seeded");
    Ok(added)
}

#[cfg(test)]
mod tests {
    use super::STARTER_CATALOG;
    use std::collections::HashSet;

    #[test]
    fn catalog_skus_are_unique_and_normalized() {
        let mut seen = HashSet::new();
        for (sku, name, quantity) in STARTER_CATALOG {
            assert!(seen.insert(*sku), "duplicate SKU {} in catalog", sku);
            assert_eq!(*sku, sku.trim().to_uppercase());
            assert!(!name.is_empty());
            assert!(*quantity >= 0);
        }
    }
}
