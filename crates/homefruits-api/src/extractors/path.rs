//! Typed path parameter helpers.

use homefruits_core::error::AppError;
use homefruits_core::types::ItemId;

/// Parses an item id from a path segment.
pub fn parse_item_id(s: &str) -> Result<ItemId, AppError> {
    s.parse()
        .map_err(|_| AppError::decode(format!("Invalid item id: {s}")))
}
