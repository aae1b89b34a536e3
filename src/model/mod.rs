//! Pure data structures (DTOs) implementing the [`ActorEntity`](resource_actor::ActorEntity) trait.

/// Declares a typed identifier that renders with a resource prefix
/// (e.g. `CategoryId(3)` displays as `pcat_3`).
macro_rules! resource_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
            serde::Serialize, serde::Deserialize,
        )]
        pub struct $name(pub u32);

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($prefix, "_{}"), self.0)
            }
        }
    };
}

pub(crate) use resource_id;

pub mod category;
pub mod directory;
pub mod inventory;
pub mod product;

pub use category::*;
pub use directory::*;
pub use inventory::*;
pub use product::*;

/// Lower-case, dash-separated slug of `text` (`"Igienizare si Sterilizare"` →
/// `"igienizare-si-sterilizare"`).
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Instrumente Dentare"), "instrumente-dentare");
        assert_eq!(slugify("  Igienizare si  Sterilizare "), "igienizare-si-sterilizare");
        assert_eq!(slugify("#4 (22mm)"), "4-22mm");
        assert_eq!(slugify("---"), "");
    }

    #[test]
    fn test_ids_render_with_prefix() {
        assert_eq!(CategoryId(3).to_string(), "pcat_3");
        assert_eq!(InventoryItemId::from(7).to_string(), "iitem_7");
        assert_eq!(StockLocationId(1).to_string(), "sloc_1");
    }
}
